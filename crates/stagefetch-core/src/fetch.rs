//! Retrying HTTP(S) fetcher built on libcurl.
//!
//! File downloads are streamed into a temp file created next to the
//! destination and renamed into place only after a fully successful
//! transfer, so a partial artifact never appears at the destination path.
//! The temp file's drop guard removes it on every failure path.

use std::io::{self, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::retry::{run_with_retry, RetryPolicy, TransportError};

/// Transport parameters for a fetch: retry policy and per-attempt timeouts.
#[derive(Debug, Clone)]
pub struct FetchOptions {
    pub policy: RetryPolicy,
    /// Wall-clock limit for one whole transfer attempt.
    pub timeout: Duration,
    pub connect_timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            policy: RetryPolicy::default(),
            timeout: Duration::from_secs(60),
            connect_timeout: Duration::from_secs(15),
        }
    }
}

#[derive(Debug, Error)]
pub enum FetchError {
    /// All attempts failed; carries the last transport error.
    #[error("GET {url} failed after {attempts} attempt(s): {source}")]
    Exhausted {
        url: String,
        attempts: u32,
        #[source]
        source: TransportError,
    },
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("response body was not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Download `url` to `dest`, retrying per `opts.policy`.
///
/// The body is written to a 0600 temp file in the destination's directory
/// (same filesystem, so the final rename is atomic) and persisted only on
/// success. Each retry restarts the transfer from scratch.
pub fn fetch_to_path(url: &str, dest: &Path, opts: &FetchOptions) -> Result<(), FetchError> {
    let dir = dest.parent().filter(|p| !p.as_os_str().is_empty());
    let dir = dir.unwrap_or_else(|| Path::new("."));
    let mut tmp = NamedTempFile::new_in(dir).map_err(|e| FetchError::Io {
        path: dir.to_path_buf(),
        source: e,
    })?;

    let what = format!("GET {}", url);
    run_with_retry(&opts.policy, &what, || {
        let file = tmp.as_file_mut();
        file.set_len(0).map_err(TransportError::Write)?;
        file.seek(SeekFrom::Start(0)).map_err(TransportError::Write)?;
        let mut out = io::BufWriter::new(file);
        attempt(url, &mut out, opts)?;
        out.flush().map_err(TransportError::Write)?;
        Ok(())
    })
    .map_err(|e| FetchError::Exhausted {
        url: url.to_string(),
        attempts: opts.policy.max_attempts,
        source: e,
    })?;

    tmp.persist(dest).map_err(|e| FetchError::Io {
        path: dest.to_path_buf(),
        source: e.error,
    })?;
    tracing::info!("saved {}", dest.display());
    Ok(())
}

/// Fetch `url` into memory, retrying per `opts.policy`.
pub fn fetch_bytes(url: &str, opts: &FetchOptions) -> Result<Vec<u8>, FetchError> {
    let mut body = Vec::new();
    let what = format!("GET {}", url);
    run_with_retry(&opts.policy, &what, || {
        body.clear();
        attempt(url, &mut body, opts)
    })
    .map_err(|e| FetchError::Exhausted {
        url: url.to_string(),
        attempts: opts.policy.max_attempts,
        source: e,
    })?;
    Ok(body)
}

/// Fetch `url` as UTF-8 text (listing documents, checksum sidecars).
pub fn fetch_text(url: &str, opts: &FetchOptions) -> Result<String, FetchError> {
    Ok(String::from_utf8(fetch_bytes(url, opts)?)?)
}

/// One GET attempt, streaming the body into `out`. Does not retry.
fn attempt<W: Write>(url: &str, out: &mut W, opts: &FetchOptions) -> Result<(), TransportError> {
    let mut write_err: Option<io::Error> = None;

    let mut easy = curl::easy::Easy::new();
    easy.url(url).map_err(TransportError::Curl)?;
    easy.follow_location(true).map_err(TransportError::Curl)?;
    easy.max_redirections(10).map_err(TransportError::Curl)?;
    easy.connect_timeout(opts.connect_timeout)
        .map_err(TransportError::Curl)?;
    easy.timeout(opts.timeout).map_err(TransportError::Curl)?;

    let perform = {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| match out.write_all(data) {
                Ok(()) => Ok(data.len()),
                Err(e) => {
                    write_err = Some(e);
                    Ok(0) // abort transfer
                }
            })
            .map_err(TransportError::Curl)?;
        transfer.perform()
    };

    if let Some(e) = write_err {
        return Err(TransportError::Write(e));
    }
    perform.map_err(TransportError::Curl)?;

    let code = easy.response_code().map_err(TransportError::Curl)?;
    if !(200..300).contains(&code) {
        return Err(TransportError::Http(code));
    }
    Ok(())
}
