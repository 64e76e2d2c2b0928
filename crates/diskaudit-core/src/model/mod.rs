//! Data model for DiskAudit: scan records, categories and size helpers.
pub mod category;
pub mod entry;
pub mod size;

pub use category::{Category, CategoryStats, CategoryTotals};
pub use entry::{DirectorySizeEntry, FoundFile, LargeFileEntry};
