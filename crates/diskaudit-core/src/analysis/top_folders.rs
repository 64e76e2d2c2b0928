//! Folder ranking for pass 1.
//!
//! Picks which root children are worth a detailed large-file scan.

use crate::model::DirectorySizeEntry;
use std::cmp::Ordering;

/// Largest first; equal sizes fall back to path order so the ranking is
/// stable across runs.
fn by_size_desc(a: &DirectorySizeEntry, b: &DirectorySizeEntry) -> Ordering {
    b.size_bytes
        .cmp(&a.size_bytes)
        .then_with(|| a.path.cmp(&b.path))
}

/// Sort every folder largest first.
pub fn rank_folders(mut entries: Vec<DirectorySizeEntry>) -> Vec<DirectorySizeEntry> {
    entries.sort_unstable_by(by_size_desc);
    entries
}

/// The `n` largest folders, largest first.
///
/// Uses `select_nth_unstable_by` (O(n) average) to bring the top-n
/// elements to the front, then sorts only those.
pub fn top_folders(entries: &[DirectorySizeEntry], n: usize) -> Vec<DirectorySizeEntry> {
    if n == 0 {
        return Vec::new();
    }

    let mut top = entries.to_vec();
    if top.len() > n {
        top.select_nth_unstable_by(n - 1, by_size_desc);
        top.truncate(n);
    }
    top.sort_unstable_by(by_size_desc);
    top
}
