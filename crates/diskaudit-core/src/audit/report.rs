//! The finished result of an audit run.
use crate::model::{Category, CategoryTotals, DirectorySizeEntry, LargeFileEntry};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::cmp::Ordering;
use std::path::PathBuf;

/// Category in display order, then size descending, then path.
fn export_order(a: &LargeFileEntry, b: &LargeFileEntry) -> Ordering {
    a.category
        .cmp(&b.category)
        .then(b.size_bytes.cmp(&a.size_bytes))
        .then_with(|| a.path.cmp(&b.path))
}

/// Large files found in one of the top folders.
#[derive(Debug, Clone, Serialize)]
pub struct FolderScan {
    pub folder: DirectorySizeEntry,
    /// Sorted by category, then size descending.
    pub files: Vec<LargeFileEntry>,
}

impl FolderScan {
    pub fn new(folder: DirectorySizeEntry, mut files: Vec<LargeFileEntry>) -> Self {
        files.sort_unstable_by(export_order);
        Self { folder, files }
    }

    /// Files grouped by category in display order. Empty categories are
    /// omitted.
    pub fn by_category(&self) -> Vec<(Category, Vec<&LargeFileEntry>)> {
        Category::ALL
            .into_iter()
            .filter_map(|category| {
                let files: Vec<&LargeFileEntry> = self
                    .files
                    .iter()
                    .filter(|f| f.category == category)
                    .collect();
                (!files.is_empty()).then_some((category, files))
            })
            .collect()
    }
}

/// Both passes of one audit.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    pub root: PathBuf,
    pub generated_at: DateTime<Local>,
    pub duration_ms: u64,
    /// Threshold the large-file pass used, in bytes.
    pub min_file_size: u64,
    /// Every immediate child directory of the root, largest first.
    pub folders: Vec<DirectorySizeEntry>,
    /// Sum of all `folders` sizes.
    pub total_scanned: u64,
    /// Large-file results for the top folders, in rank order.
    pub scanned: Vec<FolderScan>,
    pub totals: CategoryTotals,
}

impl AuditReport {
    /// Every large file across all scanned folders.
    pub fn large_files(&self) -> impl Iterator<Item = &LargeFileEntry> {
        self.scanned.iter().flat_map(|s| s.files.iter())
    }

    /// All large files in export order.
    pub fn export_rows(&self) -> Vec<&LargeFileEntry> {
        let mut rows: Vec<&LargeFileEntry> = self.large_files().collect();
        rows.sort_unstable_by(|a, b| export_order(a, b));
        rows
    }
}
