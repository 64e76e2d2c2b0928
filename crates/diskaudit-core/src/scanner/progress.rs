//! Audit progress reporting: lightweight messages sent from the audit
//! thread to the frontend via a crossbeam channel.

use std::path::PathBuf;
use std::time::Duration;

/// Which of the two scan passes a message belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pass {
    /// Sizing every immediate child directory of the root.
    FolderSizes,
    /// Searching the largest folders for large files.
    LargeFiles,
}

/// Progress updates sent from the audit thread.
///
/// The finished data arrives separately as an `AuditReport`; these
/// messages only drive progress output.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditProgress {
    /// A pass is starting over `folders` directories.
    PassStarted { pass: Pass, folders: usize },
    /// One root child has been sized.
    FolderSized { path: PathBuf, size_bytes: u64 },
    /// One top folder has been searched for large files.
    LargeFilesScanned { folder: PathBuf, found: usize },
    /// Both passes finished.
    Complete { duration: Duration },
}
