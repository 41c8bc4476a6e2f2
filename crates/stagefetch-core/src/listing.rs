//! Parse the autobuild listing index into selectable stage3 entries.
//!
//! The listing is line-oriented plaintext, often PGP clearsigned: comments
//! (`#`), armor delimiters (`-----`), and blank lines are skipped, and only
//! lines naming a stage3 path with a size column become entries. Anything
//! else (armor headers, extra metadata) is dropped without complaint since
//! mirrors are not consistent about what they publish around the data lines.

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Data line: `<YYYYMMDD>T<hhmmss>Z/stage3-...` at the start of the line.
static DATA_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{8}T\d{6}Z/stage3-\S+)").expect("listing pattern"));

/// One selectable stage3 build. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingEntry {
    /// Path relative to the architecture's autobuild root.
    pub remote_path: String,
    /// Basename of `remote_path`.
    pub filename: String,
    pub size_bytes: u64,
    /// Build day as `YYYY-MM-DD`, sliced from the path prefix.
    pub build_date: String,
}

impl ListingEntry {
    /// Size in MB, rounded to two decimals for display.
    pub fn size_mb(&self) -> f64 {
        let mb = self.size_bytes as f64 / (1024.0 * 1024.0);
        (mb * 100.0).round() / 100.0
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    /// The listing contained no usable stage3 entries. Not retried: the
    /// remote document will not change within one run.
    #[error("listing contained no stage3 entries")]
    EmptyResult,
}

/// Parse a listing document. Entry order follows input order; the source
/// index is published chronologically and we do not re-sort it.
pub fn parse(raw: &str) -> Result<Vec<ListingEntry>, ParseError> {
    let mut entries = Vec::new();
    for line in raw.lines() {
        let line = line.trim_end();
        if line.is_empty() || line.starts_with('#') || line.starts_with("-----") {
            continue;
        }
        let Some(caps) = DATA_LINE.captures(line) else {
            continue;
        };
        let remote_path = caps[1].to_string();
        // Second whitespace column is the size in bytes; lines without one
        // are metadata, not builds.
        let Some(size_bytes) = line
            .split_whitespace()
            .nth(1)
            .and_then(|s| s.parse::<u64>().ok())
        else {
            continue;
        };
        let filename = remote_path
            .rsplit('/')
            .next()
            .unwrap_or(remote_path.as_str())
            .to_string();
        // The regex guarantees an 8-digit day prefix.
        let day = &remote_path[..8];
        let build_date = format!("{}-{}-{}", &day[..4], &day[4..6], &day[6..8]);
        entries.push(ListingEntry {
            remote_path,
            filename,
            size_bytes,
            build_date,
        });
    }
    if entries.is_empty() {
        return Err(ParseError::EmptyResult);
    }
    Ok(entries)
}
