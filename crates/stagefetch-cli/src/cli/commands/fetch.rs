//! Fetch command: the full select → download → verify flow.

use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use stagefetch_core::arch;
use stagefetch_core::config::StageFetchConfig;
use stagefetch_core::listing::{self, ListingEntry};
use stagefetch_core::pipeline::Pipeline;
use stagefetch_core::select;
use stagefetch_core::verify::VerifyStatus;

pub fn run_fetch(
    cfg: &StageFetchConfig,
    arch_id: &str,
    dest: Option<&Path>,
    selection: Option<&str>,
    max_attempts: Option<u32>,
) -> Result<()> {
    let arch = arch::find(arch_id)
        .with_context(|| format!("unknown architecture {:?} (see `stagefetch arches`)", arch_id))?;
    let mut pipeline = Pipeline::new(cfg, arch);
    if let Some(n) = max_attempts {
        pipeline.set_max_attempts(n);
    }

    let raw = pipeline
        .fetch_listing_text()
        .context("fetching stage3 listing")?;
    let entries = listing::parse(&raw).context("parsing stage3 listing")?;
    print_entries(&entries);

    let index = match selection {
        // Non-interactive: a bad --select is terminal.
        Some(input) => select::validate_ordinal(input, entries.len())
            .context("invalid --select value")?,
        None => prompt_selection(entries.len())?,
    };
    let entry = &entries[index];

    let dest_dir = resolve_dest_dir(cfg, dest)?;
    println!(
        "downloading {} ({:.2} MB, built {})",
        entry.filename,
        entry.size_mb(),
        entry.build_date
    );
    let artifact = pipeline
        .download(entry, &dest_dir)
        .context("downloading artifact")?;

    let result = pipeline
        .verify_artifact(&artifact, entry)
        .context("verifying artifact")?;
    match result.status {
        VerifyStatus::Verified => {
            println!("verified via {}: {}", result.method, artifact.display());
        }
        VerifyStatus::SizeOnly => {
            println!(
                "downloaded (size-only verification): {}",
                artifact.display()
            );
        }
    }
    Ok(())
}

fn resolve_dest_dir(cfg: &StageFetchConfig, dest: Option<&Path>) -> Result<PathBuf> {
    match dest {
        Some(d) => Ok(d.to_path_buf()),
        None => match &cfg.download_dir {
            Some(d) => Ok(d.clone()),
            None => std::env::current_dir().context("resolving current directory"),
        },
    }
}

fn print_entries(entries: &[ListingEntry]) {
    println!("available stage3 builds:");
    for (i, e) in entries.iter().enumerate() {
        println!(
            "{:3}. {}  {:>10.2} MB  {}",
            i + 1,
            e.build_date,
            e.size_mb(),
            e.filename
        );
    }
}

/// Interactive selection: re-prompt until the ordinal validates.
fn prompt_selection(count: usize) -> Result<usize> {
    let stdin = io::stdin();
    loop {
        print!("select a build [1-{}]: ", count);
        io::stdout().flush()?;
        let mut line = String::new();
        let read = stdin.read_line(&mut line)?;
        if read == 0 {
            anyhow::bail!("stdin closed before a selection was made");
        }
        match select::validate_ordinal(&line, count) {
            Ok(index) => return Ok(index),
            Err(e) => eprintln!("{}, try again", e),
        }
    }
}
