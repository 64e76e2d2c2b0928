//! In-memory [`FileSystem`] for tests and dry runs.
//!
//! Running as an administrator (or root in CI) makes real permission errors
//! impossible to provoke, so access-denied handling is exercised here by
//! marking paths with [`MemoryFileSystem::deny`].
use super::{DirEntry, EntryKind, FileSystem};
use std::collections::{BTreeMap, BTreeSet};
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Copy)]
enum Node {
    File(u64),
    Dir,
    Symlink,
}

/// A tree of files, directories and symlinks held in a sorted map.
///
/// Adding an entry creates any missing ancestor directories, so a tree can be
/// built from file paths alone.
#[derive(Debug, Default, Clone)]
pub struct MemoryFileSystem {
    nodes: BTreeMap<PathBuf, Node>,
    denied: BTreeSet<PathBuf>,
}

impl MemoryFileSystem {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_dir(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Dir);
        self
    }

    pub fn add_file(&mut self, path: impl AsRef<Path>, size: u64) -> &mut Self {
        self.insert(path.as_ref(), Node::File(size));
        self
    }

    pub fn add_symlink(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.insert(path.as_ref(), Node::Symlink);
        self
    }

    /// Make listing (for directories) or sizing (for files) `path` fail with
    /// `PermissionDenied`. The entry still shows up in its parent's listing.
    pub fn deny(&mut self, path: impl AsRef<Path>) -> &mut Self {
        self.denied.insert(path.as_ref().to_path_buf());
        self
    }

    fn insert(&mut self, path: &Path, node: Node) {
        let mut ancestor = path.parent();
        while let Some(dir) = ancestor {
            if dir.as_os_str().is_empty() {
                break;
            }
            self.nodes.entry(dir.to_path_buf()).or_insert(Node::Dir);
            ancestor = dir.parent();
        }
        self.nodes.insert(path.to_path_buf(), node);
    }

    fn check_access(&self, path: &Path) -> io::Result<()> {
        if self.denied.contains(path) {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("access denied: {}", path.display()),
            ));
        }
        Ok(())
    }

    fn lookup(&self, path: &Path) -> io::Result<Node> {
        self.nodes
            .get(path)
            .copied()
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

impl FileSystem for MemoryFileSystem {
    fn read_dir(&self, path: &Path) -> io::Result<Vec<DirEntry>> {
        self.check_access(path)?;
        match self.lookup(path)? {
            Node::Dir => {}
            _ => return Err(io::Error::other("not a directory")),
        }
        let entries = self
            .nodes
            .iter()
            .filter(|(p, _)| p.parent() == Some(path))
            .map(|(p, node)| DirEntry {
                path: p.clone(),
                kind: match node {
                    Node::File(_) => EntryKind::File,
                    Node::Dir => EntryKind::Directory,
                    Node::Symlink => EntryKind::Symlink,
                },
            })
            .collect();
        Ok(entries)
    }

    fn file_size(&self, path: &Path) -> io::Result<u64> {
        self.check_access(path)?;
        match self.lookup(path)? {
            Node::File(size) => Ok(size),
            _ => Err(io::Error::other("not a regular file")),
        }
    }

    fn entry_kind(&self, path: &Path) -> io::Result<EntryKind> {
        Ok(match self.lookup(path)? {
            Node::File(_) => EntryKind::File,
            Node::Dir => EntryKind::Directory,
            Node::Symlink => EntryKind::Symlink,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ancestors_are_created_implicitly() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/r/a/b/c.bin", 5);

        assert_eq!(fs.entry_kind(Path::new("/r/a")).unwrap(), EntryKind::Directory);
        let listed = fs.read_dir(Path::new("/r/a")).unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].path, PathBuf::from("/r/a/b"));
        assert_eq!(listed[0].kind, EntryKind::Directory);
    }

    #[test]
    fn listing_excludes_grandchildren() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/r/x.bin", 1).add_file("/r/d/y.bin", 2);

        let mut names: Vec<PathBuf> = fs
            .read_dir(Path::new("/r"))
            .unwrap()
            .into_iter()
            .map(|e| e.path)
            .collect();
        names.sort();
        assert_eq!(names, vec![PathBuf::from("/r/d"), PathBuf::from("/r/x.bin")]);
    }

    #[test]
    fn denied_paths_fail_with_permission_denied() {
        let mut fs = MemoryFileSystem::new();
        fs.add_file("/r/locked/f", 10).add_file("/r/secret.bin", 3);
        fs.deny("/r/locked").deny("/r/secret.bin");

        let err = fs.read_dir(Path::new("/r/locked")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        let err = fs.file_size(Path::new("/r/secret.bin")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::PermissionDenied);
        // The parent listing still shows both entries.
        assert_eq!(fs.read_dir(Path::new("/r")).unwrap().len(), 2);
    }
}
