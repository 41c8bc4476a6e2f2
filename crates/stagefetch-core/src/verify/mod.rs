//! Multi-format integrity verification for downloaded artifacts.
//!
//! Probes checksum sidecars in a fixed URL order (`.sha256`, `.asc`,
//! `.DIGESTS`), then tries each extraction strategy against whichever
//! sidecar answered. A missing or unrecognized sidecar degrades to
//! size-only confirmation instead of blocking the install; only an
//! unreadable or empty artifact is a hard failure.

mod checksum;
mod strategy;

pub use checksum::sha256_path;
pub use strategy::{
    AscSignature, DigestExtract, DigestsManifest, Sha256File, VerifyMethod, STRATEGIES,
};

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Sidecar suffixes in probe order.
pub const SIDECAR_SUFFIXES: [&str; 3] = [".sha256", ".asc", ".DIGESTS"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyStatus {
    /// A remote digest matched the local SHA-256.
    Verified,
    /// Only the nonzero file size was confirmed.
    SizeOnly,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VerificationResult {
    pub status: VerifyStatus,
    pub method: VerifyMethod,
}

#[derive(Debug, Error)]
pub enum VerifyError {
    #[error("cannot stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("downloaded file {} is empty", path.display())]
    EmptyFile { path: PathBuf },
    #[error("checksum of {} failed: {source}", path.display())]
    Digest {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Capability to fetch one sidecar document; `None` means the URL did not
/// respond usefully. HTTP in production, a stub in tests.
pub trait SidecarFetch {
    fn fetch(&self, url: &str) -> Option<String>;
}

/// Candidate sidecar URLs for an artifact, in probe order.
pub fn sidecar_candidates(artifact_url: &str) -> [String; 3] {
    SIDECAR_SUFFIXES.map(|suffix| format!("{}{}", artifact_url, suffix))
}

/// Verify a downloaded artifact against whatever sidecar the mirror
/// publishes.
///
/// Hard failures are limited to an unreadable or empty local file. Missing
/// sidecars and unrecognized sidecar formats both degrade to
/// `SizeOnly`/`None`; the latter logs a warning since the mirror published
/// something we could not use.
pub fn verify(
    path: &Path,
    artifact_url: &str,
    fetcher: &dyn SidecarFetch,
) -> Result<VerificationResult, VerifyError> {
    let meta = fs::metadata(path).map_err(|e| VerifyError::Stat {
        path: path.to_path_buf(),
        source: e,
    })?;
    if meta.len() == 0 {
        return Err(VerifyError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let sidecar = sidecar_candidates(artifact_url)
        .into_iter()
        .find_map(|url| match fetcher.fetch(&url) {
            Some(text) => {
                tracing::debug!("fetched checksum sidecar {}", url);
                Some(text)
            }
            None => {
                tracing::debug!("no checksum sidecar at {}", url);
                None
            }
        });

    let Some(sidecar) = sidecar else {
        tracing::warn!(
            "no checksum sidecar published for {}; size-only verification",
            artifact_url
        );
        return Ok(VerificationResult {
            status: VerifyStatus::SizeOnly,
            method: VerifyMethod::None,
        });
    };

    let local = sha256_path(path).map_err(|e| VerifyError::Digest {
        path: path.to_path_buf(),
        source: e,
    })?;
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    for strat in STRATEGIES {
        if let Some(candidate) = strat.try_extract(&sidecar, &filename) {
            if candidate == local {
                tracing::info!("{} verified via {}", filename, strat.method());
                return Ok(VerificationResult {
                    status: VerifyStatus::Verified,
                    method: strat.method(),
                });
            }
        }
    }

    tracing::warn!(
        "sidecar for {} yielded no matching digest; size-only verification",
        filename
    );
    Ok(VerificationResult {
        status: VerifyStatus::SizeOnly,
        method: VerifyMethod::None,
    })
}
