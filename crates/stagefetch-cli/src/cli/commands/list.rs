//! List command: fetch and print the stage3 listing without downloading.

use anyhow::{Context, Result};

use stagefetch_core::arch;
use stagefetch_core::config::StageFetchConfig;
use stagefetch_core::listing;
use stagefetch_core::pipeline::Pipeline;

pub fn run_list(cfg: &StageFetchConfig, arch_id: &str) -> Result<()> {
    let arch = arch::find(arch_id)
        .with_context(|| format!("unknown architecture {:?} (see `stagefetch arches`)", arch_id))?;
    let pipeline = Pipeline::new(cfg, arch);

    let raw = pipeline
        .fetch_listing_text()
        .context("fetching stage3 listing")?;
    let entries = listing::parse(&raw).context("parsing stage3 listing")?;

    println!("stage3 builds for {}:", arch.id);
    for (i, e) in entries.iter().enumerate() {
        println!(
            "{:3}. {}  {:>10.2} MB  {}",
            i + 1,
            e.build_date,
            e.size_mb(),
            e.filename
        );
    }
    Ok(())
}
