//! Depth-bounded, error-tolerant directory walk shared by both scan passes.
//!
//! # Depth semantics
//!
//! The starting directory is depth 0 and its files are always visited.
//! Descending into a subdirectory adds one; a directory whose depth would
//! exceed `max_depth` is never listed, so its whole subtree contributes
//! nothing. With `max_depth = 0` only the root's own files are seen.
//!
//! # Errors
//!
//! A directory that cannot be listed, or a file that cannot be sized, is
//! logged at `debug` and skipped. Siblings and the rest of the walk carry on.
//!
//! [`walk_listed`] is the default [`FileSystem::walk_files`]: it keeps an
//! explicit `(path, depth)` stack over `read_dir`, so call-stack usage is
//! constant however deep or wide the tree is. The local disk overrides it
//! with `walkdir`.
use crate::error::skip_entry;
use crate::platform::{EntryKind, FileSystem};
use std::path::{Path, PathBuf};

/// Visit every regular file within `max_depth` of `root` using only
/// [`FileSystem::read_dir`] and [`FileSystem::file_size`].
///
/// Symlinks and special files are ignored. Visit order is unspecified.
pub fn walk_listed<F>(fs: &F, root: &Path, max_depth: usize, visit: &mut dyn FnMut(PathBuf, u64))
where
    F: FileSystem + ?Sized,
{
    let mut stack: Vec<(PathBuf, usize)> = vec![(root.to_path_buf(), 0)];

    while let Some((dir, depth)) = stack.pop() {
        let entries = match fs.read_dir(&dir) {
            Ok(entries) => entries,
            Err(err) => {
                skip_entry(&dir, &err);
                continue;
            }
        };

        for entry in entries {
            match entry.kind {
                EntryKind::File => match fs.file_size(&entry.path) {
                    Ok(size) => visit(entry.path, size),
                    Err(err) => skip_entry(&entry.path, &err),
                },
                EntryKind::Directory if depth < max_depth => {
                    stack.push((entry.path, depth + 1));
                }
                EntryKind::Directory | EntryKind::Symlink | EntryKind::Other => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::MemoryFileSystem;

    fn visited(fs: &MemoryFileSystem, max_depth: usize) -> Vec<PathBuf> {
        let mut paths = Vec::new();
        fs.walk_files(Path::new("/r"), max_depth, &mut |p, _| paths.push(p));
        paths.sort();
        paths
    }

    #[test]
    fn depth_zero_sees_only_root_files() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/r/top.bin", 1).add_file("/r/d/nested.bin", 1);

        assert_eq!(visited(&fs, 0), vec![PathBuf::from("/r/top.bin")]);
        assert_eq!(visited(&fs, 1).len(), 2);
    }

    #[test]
    fn directories_past_the_bound_are_never_listed() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/r/a/b/deep.bin", 1);
        // Listing /r/a/b would fail, but at max_depth 1 it is never attempted.
        fs.deny("/r/a/b");

        assert!(visited(&fs, 1).is_empty());
    }

    #[test]
    fn symlinks_are_ignored() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/r/real.bin", 4).add_symlink("/r/link.bin");

        assert_eq!(visited(&fs, 5), vec![PathBuf::from("/r/real.bin")]);
    }

    #[test]
    fn unreadable_root_visits_nothing() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/r/a.bin", 1).deny("/r");

        assert!(visited(&fs, 3).is_empty());
    }
}
