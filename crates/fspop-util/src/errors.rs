use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for all fspopulate operations.
#[derive(Debug, Error, Diagnostic)]
pub enum FspopError {
    /// A human-entered size could not be parsed.
    #[error("unsupported size: \"{input}\"")]
    #[diagnostic(help("use an integer with an optional k, m, g or t suffix (powers of 1024)"))]
    InvalidSize { input: String },

    /// Invalid policy or configuration file.
    #[error("Configuration error: {message}")]
    #[diagnostic(help("Check the policy values given on the command line or in the config file"))]
    Config { message: String },

    /// Creating a directory failed for a reason other than "already exists".
    #[error("mkdirp \"{}\"", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Opening or creating a data file failed.
    #[error("open \"{}\"", path.display())]
    OpenFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Querying the size of an open data file failed.
    #[error("fstat \"{}\"", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Appending fill data to a file failed.
    #[error("write \"{}\"", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The OS accepted zero bytes for a non-empty write.
    #[error("write \"{}\" made no progress", path.display())]
    #[diagnostic(help("the target filesystem may be full or read-only"))]
    ZeroWrite { path: PathBuf },
}

/// Convenience alias for `miette::Result<T>`.
pub type FspopResult<T> = miette::Result<T>;
