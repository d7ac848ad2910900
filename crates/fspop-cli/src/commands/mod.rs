//! Command dispatch and handler modules.

mod check;
mod plan;
mod populate;

use fspop_core::config::{PolicyConfig, PopulationConfig};
use fspop_util::progress::summary_line;
use miette::Result;

use crate::cli::Cli;

/// Build the run configuration from the parsed CLI and route it to the
/// matching handler.
pub fn dispatch(cli: Cli) -> Result<()> {
    let config = build_config(&cli)?;
    print_summary(&config);

    if cli.check {
        check::exec(&config)
    } else if config.dry_run() {
        plan::exec(&config)
    } else {
        populate::exec(&config)
    }
}

/// Layer the policy file (if any) and command-line overrides over the
/// built-in policy.
fn build_config(cli: &Cli) -> Result<PopulationConfig> {
    let mut policy = match &cli.config {
        Some(path) => PolicyConfig::load(path)?,
        None => PolicyConfig::default(),
    };
    if let Some(bulk_files) = cli.bulk_files {
        policy.bulk_files = bulk_files;
    }
    if let Some(subdirs) = cli.subdirs {
        policy.subdirs = subdirs;
    }
    tracing::debug!("Effective policy: {policy:?}");

    Ok(PopulationConfig::new(&cli.path, cli.size, &policy)?.with_dry_run(cli.dry_run))
}

fn print_summary(config: &PopulationConfig) {
    let lines = [
        summary_line("path:", &config.root().display().to_string()),
        summary_line("total bytes:", &config.total_size().to_string()),
        summary_line("large files:", &config.bulk_files().to_string()),
        summary_line("large file size:", &format!("{} bytes", config.bulk_size())),
        summary_line("subdirs:", &config.subdirs().to_string()),
    ];
    for line in lines {
        eprintln!("{line}");
    }
}
