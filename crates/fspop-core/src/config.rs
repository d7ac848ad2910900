use std::path::{Path, PathBuf};

use fspop_util::errors::{FspopError, FspopResult};
use serde::{Deserialize, Serialize};

use crate::{
    DEFAULT_BULK_DIVISOR, DEFAULT_BULK_FILES, DEFAULT_STANDARD_FILE_SIZE, DEFAULT_SUBDIRS,
};

/// Population policy, optionally loaded from a TOML file.
///
/// Every key is optional; missing keys fall back to the built-in policy of
/// 768 bulk files of `total / 1024` bytes spread over 256 directories,
/// followed by 10 MiB files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyConfig {
    #[serde(default = "default_bulk_files", rename = "bulk-files")]
    pub bulk_files: u64,
    #[serde(default = "default_subdirs")]
    pub subdirs: u64,
    #[serde(default = "default_bulk_divisor", rename = "bulk-divisor")]
    pub bulk_divisor: u64,
    #[serde(default = "default_standard_file_size", rename = "standard-file-size")]
    pub standard_file_size: u64,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            bulk_files: default_bulk_files(),
            subdirs: default_subdirs(),
            bulk_divisor: default_bulk_divisor(),
            standard_file_size: default_standard_file_size(),
        }
    }
}

fn default_bulk_files() -> u64 {
    DEFAULT_BULK_FILES
}

fn default_subdirs() -> u64 {
    DEFAULT_SUBDIRS
}

fn default_bulk_divisor() -> u64 {
    DEFAULT_BULK_DIVISOR
}

fn default_standard_file_size() -> u64 {
    DEFAULT_STANDARD_FILE_SIZE
}

impl PolicyConfig {
    /// Load a policy from a TOML file.
    pub fn load(path: &Path) -> FspopResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| FspopError::Config {
            message: format!("Failed to read {}: {e}", path.display()),
        })?;
        let policy = Self::parse(&content).map_err(|e| FspopError::Config {
            message: format!("Failed to parse {}: {e}", path.display()),
        })?;
        tracing::debug!("Loaded policy from {}", path.display());
        Ok(policy)
    }

    /// Parse a policy from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Upper bound on the bulk file count (the range of a C `int`).
pub const MAX_BULK_FILES: u64 = i32::MAX as u64;

/// Fully validated parameters of one population run.
///
/// Built once by the caller and only read afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopulationConfig {
    root: PathBuf,
    total_size: u64,
    bulk_files: u64,
    bulk_size: u64,
    subdirs: u64,
    standard_size: u64,
    dry_run: bool,
}

impl PopulationConfig {
    /// Derive a run configuration for `total_size` bytes under `root`.
    ///
    /// The bulk file size is `total_size / policy.bulk_divisor`.
    pub fn new(
        root: impl Into<PathBuf>,
        total_size: u64,
        policy: &PolicyConfig,
    ) -> FspopResult<Self> {
        let root = root.into();
        if root.as_os_str().is_empty() {
            return Err(config_error("root path must not be empty"));
        }
        if policy.subdirs == 0 {
            return Err(config_error("subdirs must be at least 1"));
        }
        if policy.bulk_divisor == 0 {
            return Err(config_error("bulk-divisor must be at least 1"));
        }
        if policy.standard_file_size == 0 {
            return Err(config_error("standard-file-size must be at least 1"));
        }
        if policy.bulk_files > MAX_BULK_FILES {
            return Err(config_error(&format!(
                "bulk-files must be at most {MAX_BULK_FILES}"
            )));
        }

        // Empty bulk files add nothing to the planned total, so their count
        // alone bounds how long the plan runs before any data is written.
        let bulk_size = total_size / policy.bulk_divisor;
        let empty_bulk_limit = total_size.max(DEFAULT_BULK_FILES);
        if bulk_size == 0 && policy.bulk_files > empty_bulk_limit {
            return Err(config_error(&format!(
                "bulk-files is {} but bulk files would be empty; use at most {empty_bulk_limit} \
                 or a larger total size",
                policy.bulk_files
            )));
        }

        Ok(Self {
            root,
            total_size,
            bulk_files: policy.bulk_files,
            bulk_size,
            subdirs: policy.subdirs,
            standard_size: policy.standard_file_size,
            dry_run: false,
        })
    }

    /// Same configuration with the dry-run flag set to `dry_run`.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn total_size(&self) -> u64 {
        self.total_size
    }

    pub fn bulk_files(&self) -> u64 {
        self.bulk_files
    }

    pub fn bulk_size(&self) -> u64 {
        self.bulk_size
    }

    /// Always at least 1.
    pub fn subdirs(&self) -> u64 {
        self.subdirs
    }

    /// Always at least 1.
    pub fn standard_size(&self) -> u64 {
        self.standard_size
    }

    pub fn dry_run(&self) -> bool {
        self.dry_run
    }
}

fn config_error(message: &str) -> miette::Report {
    FspopError::Config {
        message: message.to_string(),
    }
    .into()
}
