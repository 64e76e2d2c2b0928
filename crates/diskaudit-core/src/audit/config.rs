//! Audit configuration.
use crate::analysis::ClassificationRules;
use crate::model::size::MIB;
use std::path::PathBuf;

/// Depth bound when sizing each root child (pass 1).
pub const DEFAULT_FOLDER_DEPTH: usize = 10;

/// How many of the largest root children get a large-file scan (pass 2).
pub const DEFAULT_TOP_FOLDERS: usize = 3;

/// Files smaller than this are not reported (pass 2).
pub const DEFAULT_MIN_FILE_SIZE: u64 = 50 * MIB;

/// Depth bound when searching for large files (pass 2).
pub const DEFAULT_FILE_DEPTH: usize = 3;

/// Everything an audit run needs to know.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    /// Directory whose immediate children are ranked.
    pub root: PathBuf,
    pub folder_depth: usize,
    pub top_folders: usize,
    pub min_file_size: u64,
    pub file_depth: usize,
    /// Path-fragment tables used to categorise large files.
    pub rules: ClassificationRules,
    /// Worker pool size. `0` means one worker per logical CPU.
    pub threads: usize,
}

impl AuditConfig {
    /// Defaults for auditing `root` on this machine, with classification
    /// rules rendered for the native path separator.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            folder_depth: DEFAULT_FOLDER_DEPTH,
            top_folders: DEFAULT_TOP_FOLDERS,
            min_file_size: DEFAULT_MIN_FILE_SIZE,
            file_depth: DEFAULT_FILE_DEPTH,
            rules: ClassificationRules::native(),
            threads: 0,
        }
    }

    /// Resolved worker count, never zero.
    pub fn worker_threads(&self) -> usize {
        if self.threads == 0 {
            num_cpus::get().max(1)
        } else {
            self.threads
        }
    }
}

/// The volume root audited when none is given.
pub fn default_root() -> PathBuf {
    if cfg!(windows) {
        PathBuf::from("C:\\")
    } else {
        PathBuf::from("/")
    }
}
