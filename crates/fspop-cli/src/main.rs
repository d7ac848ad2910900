//! fspopulate CLI binary.
//!
//! This is the entry point for the `fspopulate` command-line tool. It parses
//! arguments with `clap`, initializes logging via `tracing`, and hands the
//! validated configuration to the matching command handler.
//!
//! Exit codes: 0 on success, 1 on any I/O or configuration failure, 2 on a
//! usage error.

mod cli;
mod commands;

use miette::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let args = cli::parse();

    let default_level = match args.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::dispatch(args)
}
