//! [`FileSystem`] backed by `std::fs`, walked with `walkdir`.
use super::{DirEntry, EntryKind, FileSystem};
use crate::error::skip_entry;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The real, local filesystem. Symlinks are reported but never followed.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFileSystem;

impl FileSystem for LocalFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        let mut entries = Vec::new();
        for entry_result in fs::read_dir(path)? {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    skip_entry(path, &err);
                    continue;
                }
            };
            let entry_path = entry.path();
            // `DirEntry::file_type` does not traverse symlinks.
            match entry.file_type() {
                Ok(ft) => entries.push(DirEntry {
                    path: entry_path,
                    kind: EntryKind::from(ft),
                }),
                Err(err) => skip_entry(&entry_path, &err),
            }
        }
        Ok(entries)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        Ok(fs::symlink_metadata(path)?.len())
    }

    /// Follows symlinks, so an audit root given as a link to a directory is
    /// accepted.
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        Ok(EntryKind::from(fs::metadata(path)?.file_type()))
    }

    fn walk_files(&self, root: &Path, max_depth: usize, visit: &mut dyn FnMut(PathBuf, u64)) {
        // walkdir counts the root as depth 0, so its files sit at depth 1.
        let walker = WalkDir::new(root)
            .min_depth(1)
            .max_depth(max_depth.saturating_add(1))
            .follow_links(false);

        for entry_result in walker {
            let entry = match entry_result {
                Ok(e) => e,
                Err(err) => {
                    skip_walk_error(root, err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            // Not following links, so this is `symlink_metadata`.
            match entry.metadata() {
                Ok(meta) => visit(entry.into_path(), meta.len()),
                Err(err) => skip_walk_error(root, err),
            }
        }
    }
}

fn skip_walk_error(root: &Path, err: walkdir::Error) {
    let path = err.path().unwrap_or(root).to_path_buf();
    skip_entry(&path, &io::Error::from(err));
}
