//! Checksum command: compute SHA-256 of a local file.

use anyhow::{Context, Result};
use std::path::Path;
use stagefetch_core::verify;

/// Compute and print SHA-256 of the given file.
pub fn run_checksum(path: &Path) -> Result<()> {
    let digest = verify::sha256_path(path)
        .with_context(|| format!("checksum of {}", path.display()))?;
    println!("{}  {}", digest, path.display());
    Ok(())
}
