//! Pass 1: depth-bounded directory size aggregation.
use crate::platform::FileSystem;
use std::path::Path;

/// Total bytes of every regular file within `max_depth` levels of `path`.
///
/// Unreadable directories and files count as zero; an unreachable `path`
/// simply yields 0. The sum saturates at `u64::MAX`.
pub fn compute_size<F>(fs: &F, path: &Path, max_depth: usize) -> u64
where
    F: FileSystem + ?Sized,
{
    let mut total: u64 = 0;
    fs.walk_files(path, max_depth, &mut |_, size| {
        total = total.saturating_add(size);
    });
    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryFileSystem;

    /// ```text
    /// /r/
    ///   a.bin        100
    ///   d1/
    ///     b.bin      200
    ///     d2/
    ///       c.bin    400
    ///       d3/
    ///         e.bin  800
    /// ```
    fn ladder() -> MemoryFileSystem {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/r/a.bin", 100)
            .add_file("/r/d1/b.bin", 200)
            .add_file("/r/d1/d2/c.bin", 400)
            .add_file("/r/d1/d2/d3/e.bin", 800);
        fs
    }

    #[test]
    fn sums_exactly_the_files_within_the_bound() {
        let fs = ladder();
        let root = Path::new("/r");
        assert_eq!(compute_size(&fs, root, 0), 100);
        assert_eq!(compute_size(&fs, root, 1), 300);
        assert_eq!(compute_size(&fs, root, 2), 700);
        assert_eq!(compute_size(&fs, root, 3), 1_500);
        assert_eq!(compute_size(&fs, root, 10), 1_500);
    }

    #[test]
    fn unreadable_subtree_counts_as_empty() {
        let mut fs = ladder();
        fs.add_file("/r/sibling/s.bin", 50);
        fs.deny("/r/d1/d2");

        // Same as if d2 were empty: a + b + s.
        assert_eq!(compute_size(&fs, Path::new("/r"), 10), 350);
    }

    #[test]
    fn unreadable_file_counts_as_zero() {
        let mut fs = ladder();
        fs.deny("/r/d1/b.bin");
        assert_eq!(compute_size(&fs, Path::new("/r"), 10), 1_300);
    }

    #[test]
    fn missing_path_is_zero() {
        let fs = ladder();
        assert_eq!(compute_size(&fs, Path::new("/nowhere"), 10), 0);
    }

    #[test]
    fn sum_saturates() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/r/a", u64::MAX).add_file("/r/b", 10);
        assert_eq!(compute_size(&fs, Path::new("/r"), 0), u64::MAX);
    }
}
