//! The deterministic sequence of files a population run produces.
//!
//! Files are numbered from 0 and dealt round-robin across the
//! subdirectories. The first `bulk_files` files are bulk files; the rest are
//! standard files. The last file is clipped so the planned sizes sum to the
//! configured total exactly.

use std::iter::FusedIterator;
use std::path::{Path, PathBuf};

use crate::config::PopulationConfig;

/// Whether a planned file is one of the leading bulk files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Bulk,
    Standard,
}

/// One planned file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileTask {
    pub dir_index: u64,
    pub file_index: u64,
    pub expected_size: u64,
    pub kind: FileKind,
    /// The containing directory should be created before this file is
    /// written. True exactly when `file_index < subdirs`.
    pub create_dir: bool,
}

impl FileTask {
    pub fn dir_name(&self) -> String {
        format!("dir{:06}", self.dir_index)
    }

    pub fn file_name(&self) -> String {
        format!("file{:06}", self.file_index)
    }

    /// `dirNNNNNN/fileNNNNNN`, relative to the tree root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(&self.dir_name()).join(self.file_name())
    }

    pub fn dir_path(&self, root: &Path) -> PathBuf {
        root.join(self.dir_name())
    }

    pub fn file_path(&self, root: &Path) -> PathBuf {
        root.join(self.relative_path())
    }
}

/// Lazy iterator over the [`FileTask`]s of a configuration.
///
/// Holds only the two counters and the running planned total, so it can be
/// restarted from scratch at no cost and never materializes the plan.
#[derive(Debug, Clone)]
pub struct Plan {
    total_size: u64,
    bulk_files: u64,
    bulk_size: u64,
    standard_size: u64,
    subdirs: u64,
    next_dir: u64,
    next_file: u64,
    planned: u64,
}

impl Plan {
    pub fn new(config: &PopulationConfig) -> Self {
        Self {
            total_size: config.total_size(),
            bulk_files: config.bulk_files(),
            bulk_size: config.bulk_size(),
            standard_size: config.standard_size(),
            subdirs: config.subdirs(),
            next_dir: 0,
            next_file: 0,
            planned: 0,
        }
    }

    /// Sum of the expected sizes of the tasks yielded so far.
    pub fn planned_bytes(&self) -> u64 {
        self.planned
    }
}

impl Iterator for Plan {
    type Item = FileTask;

    fn next(&mut self) -> Option<FileTask> {
        if self.planned >= self.total_size {
            return None;
        }

        let (kind, nominal) = if self.next_file < self.bulk_files {
            (FileKind::Bulk, self.bulk_size)
        } else {
            (FileKind::Standard, self.standard_size)
        };
        let task = FileTask {
            dir_index: self.next_dir,
            file_index: self.next_file,
            expected_size: nominal.min(self.total_size - self.planned),
            kind,
            create_dir: self.next_file < self.subdirs,
        };

        self.next_dir = (self.next_dir + 1) % self.subdirs;
        self.next_file += 1;
        self.planned += task.expected_size;
        Some(task)
    }
}

impl FusedIterator for Plan {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PolicyConfig;

    fn config(
        total: u64,
        bulk_files: u64,
        subdirs: u64,
        divisor: u64,
        standard: u64,
    ) -> PopulationConfig {
        let policy = PolicyConfig {
            bulk_files,
            subdirs,
            bulk_divisor: divisor,
            standard_file_size: standard,
        };
        PopulationConfig::new("/tree", total, &policy).unwrap()
    }

    #[test]
    fn empty_total_plans_nothing() {
        let cfg = config(0, 768, 256, 1024, 10 << 20);
        assert_eq!(Plan::new(&cfg).count(), 0);
    }

    #[test]
    fn bulk_then_standard_then_remainder() {
        // 4 bulk files of 100 bytes, then standard files of 150 bytes.
        let cfg = config(1000, 4, 3, 10, 150);
        let sizes: Vec<u64> = Plan::new(&cfg).map(|t| t.expected_size).collect();
        assert_eq!(sizes, vec![100, 100, 100, 100, 150, 150, 150, 150]);
        let kinds: Vec<FileKind> = Plan::new(&cfg).map(|t| t.kind).collect();
        assert_eq!(&kinds[..4], &[FileKind::Bulk; 4]);
        assert!(kinds[4..].iter().all(|k| *k == FileKind::Standard));
    }

    #[test]
    fn last_file_is_clipped() {
        let cfg = config(1050, 4, 3, 10, 150);
        let sizes: Vec<u64> = Plan::new(&cfg).map(|t| t.expected_size).collect();
        assert_eq!(sizes, vec![105, 105, 105, 105, 150, 150, 150, 150, 30]);
    }

    #[test]
    fn sizes_sum_to_total() {
        for total in [1, 7, 1023, 1024, 4095, 65_537, 1 << 20] {
            let cfg = config(total, 16, 5, 64, 3000);
            let sum: u64 = Plan::new(&cfg).map(|t| t.expected_size).sum();
            assert_eq!(sum, total, "total {total}");
        }
    }

    #[test]
    fn tiny_total_plans_empty_bulk_files() {
        // total / 1024 == 0, so every bulk file is empty and one standard
        // file carries the whole total.
        let cfg = config(100, 768, 256, 1024, 10 << 20);
        let tasks: Vec<FileTask> = Plan::new(&cfg).collect();
        assert_eq!(tasks.len(), 769);
        assert!(tasks[..768].iter().all(|t| t.expected_size == 0));
        assert_eq!(tasks[768].expected_size, 100);
        assert_eq!(tasks[768].kind, FileKind::Standard);
    }

    #[test]
    fn directories_are_round_robin() {
        let cfg = config(1 << 20, 10, 4, 64, 4096);
        let dirs: Vec<u64> = Plan::new(&cfg).take(10).map(|t| t.dir_index).collect();
        assert_eq!(dirs, vec![0, 1, 2, 3, 0, 1, 2, 3, 0, 1]);
    }

    #[test]
    fn every_directory_used_before_reuse() {
        let cfg = config(1 << 30, 768, 256, 1024, 10 << 20);
        let first: Vec<u64> = Plan::new(&cfg).take(256).map(|t| t.dir_index).collect();
        let mut sorted = first.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), 256);
        assert_eq!(Plan::new(&cfg).nth(256).unwrap().dir_index, 0);
    }

    #[test]
    fn create_dir_follows_file_counter() {
        let cfg = config(1 << 20, 2, 4, 64, 4096);
        let flags: Vec<bool> = Plan::new(&cfg).take(8).map(|t| t.create_dir).collect();
        assert_eq!(flags, vec![true, true, true, true, false, false, false, false]);
    }

    #[test]
    fn create_dir_skipped_when_plan_is_short() {
        // Only two files fit, so only two of the eight directories are requested.
        let cfg = config(2000, 8, 8, 2, 1000);
        let tasks: Vec<FileTask> = Plan::new(&cfg).collect();
        assert_eq!(tasks.len(), 2);
        assert!(tasks.iter().all(|t| t.create_dir));
        assert_eq!(tasks[1].dir_index, 1);
    }

    #[test]
    fn paths_are_zero_padded() {
        let cfg = config(1 << 20, 2, 4, 64, 4096);
        let task = Plan::new(&cfg).nth(5).unwrap();
        assert_eq!(task.relative_path(), PathBuf::from("dir000001/file000005"));
        assert_eq!(
            task.file_path(Path::new("/tree")),
            PathBuf::from("/tree/dir000001/file000005")
        );
        assert_eq!(task.dir_path(Path::new("/tree")), PathBuf::from("/tree/dir000001"));
    }

    #[test]
    fn wide_indices_keep_all_digits() {
        let task = FileTask {
            dir_index: 3,
            file_index: 1_234_567,
            expected_size: 0,
            kind: FileKind::Standard,
            create_dir: false,
        };
        assert_eq!(task.file_name(), "file1234567");
    }

    #[test]
    fn plan_is_repeatable() {
        let cfg = config(123_456_789, 768, 256, 1024, 10 << 20);
        assert!(Plan::new(&cfg).eq(Plan::new(&cfg)));
    }

    #[test]
    fn one_tebibyte_default_policy() {
        let cfg = PopulationConfig::new("/tree", 1u64 << 40, &PolicyConfig::default()).unwrap();
        let mut plan = Plan::new(&cfg);
        let mut count = 0u64;
        let mut last = None;
        for task in plan.by_ref() {
            if task.file_index < 768 {
                assert_eq!(task.expected_size, 1 << 30);
            }
            count += 1;
            last = Some(task);
        }
        let last = last.unwrap();
        assert_eq!(count, 768 + 26_214 + 1);
        assert_eq!(last.file_index, 26_982);
        assert_eq!(last.dir_index, 26_982 % 256);
        assert_eq!(last.expected_size, 4_194_304);
        assert_eq!(plan.planned_bytes(), 1u64 << 40);
        assert_eq!(plan.next(), None);
    }
}
