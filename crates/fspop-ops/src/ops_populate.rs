//! Operation: bring every planned file up to its expected size.
//!
//! Files are opened append-only and only the missing suffix is written, so
//! existing bytes are never rewritten and a tree that already matches its
//! plan costs one open and one `fstat` per file. Runs stop at the first
//! error; running again with the same configuration resumes where the
//! failed run stopped.

use std::fs::{File, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::Path;

use fspop_core::config::PopulationConfig;
use fspop_core::fill::FillBuffer;
use fspop_core::plan::Plan;
use fspop_core::PROGRESS_INTERVAL;
use fspop_util::errors::{FspopError, FspopResult};
use fspop_util::fs::ensure_dir;

/// Snapshot handed to the progress callback every [`PROGRESS_INTERVAL`] files.
#[derive(Debug, Clone, Copy)]
pub struct Progress<'a> {
    /// Files processed so far.
    pub files: u64,
    /// Planned bytes of all files processed so far.
    pub planned_bytes: u64,
    pub last_path: &'a Path,
    pub last_size: u64,
}

/// Summary of a finished population run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PopulateReport {
    /// Files visited, whether or not anything was written to them.
    pub files: u64,
    /// Files that were short and got data appended.
    pub files_extended: u64,
    /// Files already larger than planned, left untouched.
    pub files_oversized: u64,
    /// Subdirectory creations attempted (existing ones included).
    pub dirs_requested: u64,
    /// Sum of the expected sizes of all visited files.
    pub planned_bytes: u64,
    /// Bytes physically appended during this run.
    pub bytes_written: u64,
}

/// What happened to a single file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    /// Already exactly the expected size.
    Complete,
    /// `appended` bytes were added to reach the expected size.
    Extended { appended: u64 },
    /// Larger than expected by `excess` bytes; not shrunk.
    Oversized { excess: u64 },
}

/// Populate the tree described by `config`.
///
/// `on_progress` is called after every [`PROGRESS_INTERVAL`] files. A dry
/// run touches nothing and returns an empty report.
pub fn populate<F>(
    config: &PopulationConfig,
    fill: &FillBuffer,
    mut on_progress: F,
) -> FspopResult<PopulateReport>
where
    F: FnMut(&Progress<'_>),
{
    let mut report = PopulateReport::default();
    let root = config.root();

    if config.dry_run() {
        tracing::info!("Dry run: leaving {} untouched", root.display());
        return Ok(report);
    }

    ensure_dir(root).map_err(|source| FspopError::CreateDir {
        path: root.to_path_buf(),
        source,
    })?;
    tracing::info!(
        "Populating {} with {} bytes",
        root.display(),
        config.total_size()
    );

    for task in Plan::new(config) {
        if task.create_dir {
            let dir = task.dir_path(root);
            ensure_dir(&dir).map_err(|source| FspopError::CreateDir { path: dir, source })?;
            report.dirs_requested += 1;
        }

        let path = task.file_path(root);
        match populate_file(&path, task.expected_size, fill)? {
            FileOutcome::Complete => {}
            FileOutcome::Extended { appended } => {
                report.files_extended += 1;
                report.bytes_written += appended;
            }
            FileOutcome::Oversized { .. } => report.files_oversized += 1,
        }

        report.files += 1;
        report.planned_bytes += task.expected_size;
        if report.files % PROGRESS_INTERVAL == 0 {
            on_progress(&Progress {
                files: report.files,
                planned_bytes: report.planned_bytes,
                last_path: &path,
                last_size: task.expected_size,
            });
        }
    }

    tracing::info!(
        "Visited {} files, appended {} bytes to {} of them",
        report.files,
        report.bytes_written,
        report.files_extended
    );
    Ok(report)
}

/// Make the file at `path` at least `expected` bytes long by appending fill
/// data. The handle is closed before returning on every path.
pub fn populate_file(
    path: &Path,
    expected: u64,
    fill: &FillBuffer,
) -> Result<FileOutcome, FspopError> {
    let mut file = open_append(path)?;
    let current = file
        .metadata()
        .map_err(|source| FspopError::Stat {
            path: path.to_path_buf(),
            source,
        })?
        .len();

    if current > expected {
        let excess = current - expected;
        tracing::warn!(
            "{} is {excess} bytes larger than planned, leaving it as is",
            path.display()
        );
        return Ok(FileOutcome::Oversized { excess });
    }
    if current == expected {
        tracing::trace!("{} complete at {expected} bytes", path.display());
        return Ok(FileOutcome::Complete);
    }

    let shortfall = expected - current;
    tracing::debug!(
        "{}: appending {shortfall} bytes ({current} -> {expected})",
        path.display()
    );
    append_fill(&mut file, fill.as_bytes(), shortfall, path)?;
    Ok(FileOutcome::Extended {
        appended: shortfall,
    })
}

fn open_append(path: &Path) -> Result<File, FspopError> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map_err(|source| FspopError::OpenFile {
            path: path.to_path_buf(),
            source,
        })
}

/// Write exactly `nbytes` bytes of `fill` to `out`, restarting from the
/// beginning of `fill` for every write call.
///
/// A write that accepts zero bytes is an error; interrupted writes are
/// retried. `path` only labels errors.
pub fn append_fill<W: Write>(
    out: &mut W,
    fill: &[u8],
    nbytes: u64,
    path: &Path,
) -> Result<(), FspopError> {
    let mut written = 0u64;
    while written < nbytes {
        let chunk = (nbytes - written).min(fill.len() as u64) as usize;
        match out.write(&fill[..chunk]) {
            Ok(0) => {
                return Err(FspopError::ZeroWrite {
                    path: path.to_path_buf(),
                })
            }
            Ok(n) => written += n as u64,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(FspopError::Write {
                    path: path.to_path_buf(),
                    source,
                })
            }
        }
    }
    Ok(())
}
