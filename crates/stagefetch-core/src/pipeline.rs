//! Wires listing fetch, artifact download, and verification into one flow.
//!
//! The pipeline owns URL construction and transport options for one
//! architecture; the CLI sequences the steps and owns the prompt. Every
//! step is a hard dependency of the next, and each fails closed: there is
//! no partial retry of later steps within a run.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::arch::ArchTarget;
use crate::config::StageFetchConfig;
use crate::fetch::{self, FetchError, FetchOptions};
use crate::listing::ListingEntry;
use crate::retry::RetryPolicy;
use crate::verify::{self, SidecarFetch, VerificationResult, VerifyError};

/// Selection → download → verify pipeline for one architecture.
pub struct Pipeline {
    base_url: String,
    arch: &'static ArchTarget,
    opts: FetchOptions,
}

impl Pipeline {
    pub fn new(cfg: &StageFetchConfig, arch: &'static ArchTarget) -> Self {
        let fetch_cfg = cfg.fetch.clone().unwrap_or_default();
        let opts = FetchOptions {
            policy: RetryPolicy {
                max_attempts: fetch_cfg.max_attempts,
                delay: Duration::from_secs(fetch_cfg.delay_secs),
            },
            timeout: Duration::from_secs(fetch_cfg.timeout_secs),
            ..FetchOptions::default()
        };
        Self {
            base_url: cfg.mirror_base_url.trim_end_matches('/').to_string(),
            arch,
            opts,
        }
    }

    /// Override the configured attempt count (CLI flag).
    pub fn set_max_attempts(&mut self, n: u32) {
        self.opts.policy.max_attempts = n.max(1);
    }

    pub fn arch(&self) -> &'static ArchTarget {
        self.arch
    }

    pub fn listing_url(&self) -> String {
        format!("{}/{}/autobuilds/latest-stage3.txt", self.base_url, self.arch.id)
    }

    pub fn artifact_url(&self, entry: &ListingEntry) -> String {
        format!(
            "{}/{}/autobuilds/{}",
            self.base_url, self.arch.id, entry.remote_path
        )
    }

    /// Fetch the raw listing document (retried).
    pub fn fetch_listing_text(&self) -> Result<String, FetchError> {
        fetch::fetch_text(&self.listing_url(), &self.opts)
    }

    /// Download an entry into `dest_dir`, returning the final artifact path.
    pub fn download(&self, entry: &ListingEntry, dest_dir: &Path) -> Result<PathBuf, FetchError> {
        let dest = dest_dir.join(&entry.filename);
        fetch::fetch_to_path(&self.artifact_url(entry), &dest, &self.opts)?;
        Ok(dest)
    }

    /// Verify a downloaded artifact against the mirror's sidecars.
    pub fn verify_artifact(
        &self,
        path: &Path,
        entry: &ListingEntry,
    ) -> Result<VerificationResult, VerifyError> {
        let fetcher = HttpSidecarFetch::new(&self.opts);
        verify::verify(path, &self.artifact_url(entry), &fetcher)
    }
}

/// Sidecar fetcher over HTTP with a single attempt per candidate URL.
/// A missing sidecar is an expected outcome; retrying three candidates
/// three times each would only slow down the common 404 case.
pub struct HttpSidecarFetch {
    opts: FetchOptions,
}

impl HttpSidecarFetch {
    pub fn new(base: &FetchOptions) -> Self {
        let mut opts = base.clone();
        opts.policy.max_attempts = 1;
        Self { opts }
    }
}

impl SidecarFetch for HttpSidecarFetch {
    fn fetch(&self, url: &str) -> Option<String> {
        fetch::fetch_text(url, &self.opts).ok()
    }
}
