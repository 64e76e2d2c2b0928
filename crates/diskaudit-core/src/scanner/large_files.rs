//! Pass 2: depth-bounded large-file discovery.
use crate::model::FoundFile;
use crate::platform::FileSystem;
use std::path::Path;

/// Every regular file within `max_depth` levels of `path` whose size is at
/// least `min_size_bytes`.
///
/// Uses the same depth and skip-on-error rules as
/// [`compute_size`](super::size::compute_size). The result is in walk order;
/// callers sort it.
pub fn scan_large_files<F>(
    fs: &F,
    path: &Path,
    min_size_bytes: u64,
    max_depth: usize,
) -> Vec<FoundFile>
where
    F: FileSystem + ?Sized,
{
    let mut found = Vec::new();
    fs.walk_files(path, max_depth, &mut |file_path, size| {
        if size >= min_size_bytes {
            found.push(FoundFile {
                path: file_path,
                size_bytes: size,
            });
        }
    });
    found
}
