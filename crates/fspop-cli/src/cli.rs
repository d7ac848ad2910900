//! CLI argument definitions for fspopulate.

use std::path::PathBuf;

use clap::{ArgAction, Parser};
use fspop_core::size::parse_size;

#[derive(Parser, Debug)]
#[command(
    name = "fspopulate",
    version,
    about = "Populate a directory with a deterministic tree of files",
    long_about = "Populates PATH with files roughly consistent with an object storage dataset: \
                  a set of large \"bulk\" files sized as a fraction of SIZE, followed by 10 MiB \
                  files, spread round-robin across subdirectories. Runs are idempotent: \
                  re-running only appends whatever is missing."
)]
pub struct Cli {
    /// Total bytes to write, with an optional k, m, g or t suffix (powers of 1024)
    #[arg(value_parser = parse_size)]
    pub size: u64,

    /// Root of the tree to populate
    #[arg(value_parser = parse_root)]
    pub path: PathBuf,

    /// Print the plan without touching the filesystem
    #[arg(long, conflicts_with = "check")]
    pub dry_run: bool,

    /// Report how far the tree is from its plan without writing anything
    #[arg(long)]
    pub check: bool,

    /// Policy file (TOML) overriding the built-in policy
    #[arg(long, env = "FSPOPULATE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Number of leading bulk files
    #[arg(long)]
    pub bulk_files: Option<u64>,

    /// Number of subdirectories to spread files across
    #[arg(long)]
    pub subdirs: Option<u64>,

    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

pub fn parse() -> Cli {
    Cli::parse()
}

fn parse_root(value: &str) -> Result<PathBuf, String> {
    if value.is_empty() {
        return Err("path must not be empty".to_string());
    }
    Ok(PathBuf::from(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_size_suffix() {
        let cli = Cli::try_parse_from(["fspopulate", "2G", "/data"]).unwrap();
        assert_eq!(cli.size, 2 * 1024 * 1024 * 1024);
        assert_eq!(cli.path, PathBuf::from("/data"));
        assert!(!cli.dry_run);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn rejects_bad_size() {
        let err = Cli::try_parse_from(["fspopulate", "12x", "/data"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn dry_run_conflicts_with_check() {
        let args = ["fspopulate", "1k", "/d", "--dry-run", "--check"];
        assert!(Cli::try_parse_from(args).is_err());
    }

    #[test]
    fn rejects_empty_path() {
        let err = Cli::try_parse_from(["fspopulate", "1k", ""]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn policy_overrides() {
        let cli = Cli::try_parse_from([
            "fspopulate",
            "1m",
            "/d",
            "--bulk-files",
            "4",
            "--subdirs",
            "2",
            "-vv",
        ])
        .unwrap();
        assert_eq!(cli.bulk_files, Some(4));
        assert_eq!(cli.subdirs, Some(2));
        assert_eq!(cli.verbose, 2);
    }
}
