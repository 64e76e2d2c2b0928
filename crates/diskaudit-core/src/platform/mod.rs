//! Filesystem access used by the scanners.
//!
//! The scanners need a depth-bounded walk over regular files, built from
//! listing a directory and sizing a file. [`LocalFileSystem`] walks the real
//! disk with `walkdir`; [`MemoryFileSystem`] is an in-memory tree with
//! injectable access-denied entries for deterministic tests, walked by the
//! default listing-based implementation.
pub mod local;
pub mod memory;

pub use local::LocalFileSystem;
pub use memory::MemoryFileSystem;

use crate::scanner::walk::walk_listed;
use std::io;
use std::path::{Path, PathBuf};

/// What a directory entry is, determined without following symlinks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    File,
    Directory,
    Symlink,
    /// Sockets, FIFOs, devices and anything else the scanners ignore.
    Other,
}

impl From<std::fs::FileType> for EntryKind {
    fn from(ft: std::fs::FileType) -> Self {
        if ft.is_symlink() {
            Self::Symlink
        } else if ft.is_dir() {
            Self::Directory
        } else if ft.is_file() {
            Self::File
        } else {
            Self::Other
        }
    }
}

/// One child returned by [`FileSystem::read_dir`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    /// Full path of the child (parent joined with the entry name).
    pub path: PathBuf,
    pub kind: EntryKind,
}

/// Read-only filesystem operations needed by the audit.
///
/// Implementations must be shareable across the worker pool.
pub trait FileSystem: Send + Sync {
    /// List the immediate children of `path`.
    ///
    /// Children that cannot be inspected individually may be dropped from
    /// the listing; an error here means the directory itself is unreadable.
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>>;

    /// Logical size in bytes of the regular file at `path`.
    fn file_size(&self, path: &Path) -> io::Result<u64>;

    /// Kind of the entry at `path`. Only used to validate the audit root,
    /// so implementations may resolve symlinks here.
    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind>;

    /// Pass every regular file within `max_depth` levels of `root` to
    /// `visit` with its byte length. See [`crate::scanner::walk`] for the
    /// depth and error rules every implementation must follow.
    fn walk_files(&self, root: &Path, max_depth: usize, visit: &mut dyn FnMut(PathBuf, u64)) {
        walk_listed(self, root, max_depth, visit);
    }
}
