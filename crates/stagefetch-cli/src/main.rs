use stagefetch_core::logging;

mod cli;

use crate::cli::CliCommand;

fn main() {
    // Initialize logging as early as possible.
    logging::init();

    // Parse CLI and dispatch. One diagnostic line, nonzero exit on failure.
    if let Err(err) = CliCommand::run_from_args() {
        eprintln!("stagefetch error: {:#}", err);
        std::process::exit(1);
    }
}
