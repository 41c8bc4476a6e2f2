//! CLI for the stagefetch stage3 downloader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use stagefetch_core::config;
use std::path::{Path, PathBuf};

use commands::{run_arches, run_checksum, run_fetch, run_list};

/// Top-level CLI for stagefetch.
#[derive(Debug, Parser)]
#[command(name = "stagefetch")]
#[command(about = "stagefetch: download and verify stage3 release artifacts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// List builds for an architecture, pick one, download and verify it.
    Fetch {
        /// Target architecture id (see `arches`).
        #[arg(long, default_value = "amd64")]
        arch: String,

        /// Destination directory (default: configured download_dir, else the
        /// current directory).
        #[arg(long)]
        dest: Option<PathBuf>,

        /// Pick entry N without prompting (1-based, as printed by `list`).
        #[arg(long, value_name = "N")]
        select: Option<String>,

        /// Override the configured attempt count per request.
        #[arg(long, value_name = "N")]
        max_attempts: Option<u32>,
    },

    /// Fetch and print the stage3 listing for an architecture.
    List {
        /// Target architecture id (see `arches`).
        #[arg(long, default_value = "amd64")]
        arch: String,
    },

    /// Show the supported architecture catalog.
    Arches,

    /// Compute SHA-256 of a local file (e.g. after download).
    Checksum {
        /// Path to the file.
        path: String,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Fetch {
                arch,
                dest,
                select,
                max_attempts,
            } => run_fetch(&cfg, &arch, dest.as_deref(), select.as_deref(), max_attempts)?,
            CliCommand::List { arch } => run_list(&cfg, &arch)?,
            CliCommand::Arches => run_arches(),
            CliCommand::Checksum { path } => run_checksum(Path::new(&path))?,
        }

        Ok(())
    }
}
