//! Records produced by the two scan passes.
//!
//! All three are plain values: once a scan hands them out they are never
//! mutated, only sorted, grouped and rendered.
use super::category::Category;
use serde::Serialize;
use std::path::PathBuf;

/// Aggregated size of one immediate child directory of the audit root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectorySizeEntry {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// A regular file at or above the large-file threshold, before categorisation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundFile {
    pub path: PathBuf,
    pub size_bytes: u64,
}

/// A categorised large file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LargeFileEntry {
    pub path: PathBuf,
    pub size_bytes: u64,
    pub category: Category,
}

impl LargeFileEntry {
    /// Attach a category to a raw scanner hit.
    pub fn from_found(found: FoundFile, category: Category) -> Self {
        Self {
            path: found.path,
            size_bytes: found.size_bytes,
            category,
        }
    }
}
