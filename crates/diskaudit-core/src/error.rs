//! Error types.
//!
//! Two tiers: per-entry failures during a walk are classified as a
//! [`SkipReason`] and swallowed, while [`AuditError`] covers conditions that
//! stop an audit before or between passes.
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Fatal audit failures.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The audit root does not exist or cannot be listed.
    #[error("scan root {path} is unavailable: {source}")]
    RootUnavailable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("scan root {path} is not a directory")]
    RootNotDirectory { path: PathBuf },

    #[error("audit cancelled")]
    Cancelled,

    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("failed to spawn audit thread: {0}")]
    Spawn(#[source] io::Error),

    #[error("audit thread panicked")]
    WorkerPanicked,

    #[error("failed to write report {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to write CSV report: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to serialise report: {0}")]
    Json(#[from] serde_json::Error),
}

impl AuditError {
    pub(crate) fn root_unavailable(path: &Path, source: io::Error) -> Self {
        Self::RootUnavailable {
            path: path.to_path_buf(),
            source,
        }
    }
}

/// Why a single entry or subtree contributed nothing to a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    AccessDenied,
    /// The entry disappeared between listing and stat.
    Vanished,
    Other,
}

impl SkipReason {
    pub fn classify(err: &io::Error) -> Self {
        match err.kind() {
            io::ErrorKind::PermissionDenied => Self::AccessDenied,
            io::ErrorKind::NotFound => Self::Vanished,
            _ => Self::Other,
        }
    }
}

/// Log and drop a per-entry failure. The caller treats the entry as empty.
pub(crate) fn skip_entry(path: &Path, err: &io::Error) {
    tracing::debug!(
        "Skipping {} ({:?}): {err}",
        path.display(),
        SkipReason::classify(err)
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_maps_error_kinds() {
        let denied = io::Error::from(io::ErrorKind::PermissionDenied);
        let gone = io::Error::from(io::ErrorKind::NotFound);
        let other = io::Error::other("device hiccup");

        assert_eq!(SkipReason::classify(&denied), SkipReason::AccessDenied);
        assert_eq!(SkipReason::classify(&gone), SkipReason::Vanished);
        assert_eq!(SkipReason::classify(&other), SkipReason::Other);
    }

    #[test]
    fn root_unavailable_names_the_path() {
        let err = AuditError::root_unavailable(
            Path::new("/nope"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(err.to_string().contains("/nope"));
    }
}
