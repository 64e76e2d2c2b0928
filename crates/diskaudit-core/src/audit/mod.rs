//! Audit orchestration: the two passes that turn a root directory into an
//! [`AuditReport`].
//!
//! 1. **Folder sizes:** every immediate child directory of the root is sized
//!    with [`compute_size`] and ranked largest first.
//! 2. **Large files:** the top folders are searched with
//!    [`scan_large_files`] and each hit is categorised.
//!
//! Sibling folders are processed in parallel on a bounded rayon pool. Every
//! result is sorted afterwards, so the report is identical to a sequential
//! run.
pub mod config;
pub mod report;

pub use config::AuditConfig;
pub use report::{AuditReport, FolderScan};

use crate::analysis::{rank_folders, top_folders, Categorizer};
use crate::error::AuditError;
use crate::model::{CategoryTotals, DirectorySizeEntry, LargeFileEntry};
use crate::platform::{EntryKind, FileSystem, LocalFileSystem};
use crate::scanner::{compute_size, scan_large_files, AuditProgress, Pass};

use chrono::Local;
use crossbeam_channel::{Receiver, Sender, TrySendError};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Maximum number of progress messages that may queue up in the channel.
///
/// Progress is advisory: when the queue is full further messages are
/// dropped rather than stalling the audit.
pub const PROGRESS_CHANNEL_CAPACITY: usize = 1_024;

fn send(progress_tx: Option<&Sender<AuditProgress>>, msg: AuditProgress) {
    let Some(tx) = progress_tx else { return };
    if let Err(TrySendError::Full(dropped)) = tx.try_send(msg) {
        debug!("Progress channel full, dropped {dropped:?}");
    }
}

fn check_cancelled(cancel: &AtomicBool) -> Result<(), AuditError> {
    if cancel.load(Ordering::Relaxed) {
        Err(AuditError::Cancelled)
    } else {
        Ok(())
    }
}

/// Validate the root and list its immediate child directories, sorted by
/// path. Any failure here is fatal.
fn root_folders<F>(fs: &F, root: &Path) -> Result<Vec<PathBuf>, AuditError>
where
    F: FileSystem + ?Sized,
{
    match fs.entry_kind(root) {
        Ok(EntryKind::Directory) => {}
        Ok(_) => {
            return Err(AuditError::RootNotDirectory {
                path: root.to_path_buf(),
            })
        }
        Err(err) => return Err(AuditError::root_unavailable(root, err)),
    }

    let entries = fs
        .read_dir(root)
        .map_err(|err| AuditError::root_unavailable(root, err))?;

    let mut folders: Vec<PathBuf> = entries
        .into_iter()
        .filter(|e| e.kind == EntryKind::Directory)
        .map(|e| e.path)
        .collect();
    folders.sort();
    Ok(folders)
}

/// Run both passes synchronously against `fs`.
///
/// Progress messages go to `progress_tx` when given. `cancel` is checked
/// before each folder and between passes; once set, remaining folders are
/// skipped and the run ends with [`AuditError::Cancelled`].
pub fn run_audit<F>(
    fs: &F,
    config: &AuditConfig,
    progress_tx: Option<&Sender<AuditProgress>>,
    cancel: &AtomicBool,
) -> Result<AuditReport, AuditError>
where
    F: FileSystem + ?Sized,
{
    let start = Instant::now();
    info!("Starting audit of {}", config.root.display());

    let children = root_folders(fs, &config.root)?;
    if children.is_empty() {
        warn!("{} has no subdirectories to audit", config.root.display());
    }

    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(config.worker_threads())
        .thread_name(|i| format!("diskaudit-worker-{i}"))
        .build()?;

    // ── Pass 1: folder sizes ────────────────────────────────────────────
    send(
        progress_tx,
        AuditProgress::PassStarted {
            pass: Pass::FolderSizes,
            folders: children.len(),
        },
    );
    let sized: Vec<DirectorySizeEntry> = pool.install(|| {
        children
            .par_iter()
            .map(|path| {
                let size_bytes = if cancel.load(Ordering::Relaxed) {
                    0
                } else {
                    compute_size(fs, path, config.folder_depth)
                };
                send(
                    progress_tx,
                    AuditProgress::FolderSized {
                        path: path.clone(),
                        size_bytes,
                    },
                );
                DirectorySizeEntry {
                    path: path.clone(),
                    size_bytes,
                }
            })
            .collect()
    });
    check_cancelled(cancel)?;

    let folders = rank_folders(sized);
    let total_scanned = folders
        .iter()
        .fold(0u64, |acc, f| acc.saturating_add(f.size_bytes));
    debug!(
        "Folder pass complete: {} folders, {total_scanned} bytes in {:?}",
        folders.len(),
        start.elapsed()
    );

    // ── Pass 2: large files in the top folders ──────────────────────────
    let top = top_folders(&folders, config.top_folders);
    let categorizer = Categorizer::new(config.rules.clone());
    send(
        progress_tx,
        AuditProgress::PassStarted {
            pass: Pass::LargeFiles,
            folders: top.len(),
        },
    );
    let scanned: Vec<FolderScan> = pool.install(|| {
        top.into_par_iter()
            .map(|folder| {
                let files: Vec<LargeFileEntry> = if cancel.load(Ordering::Relaxed) {
                    Vec::new()
                } else {
                    scan_large_files(fs, &folder.path, config.min_file_size, config.file_depth)
                        .into_iter()
                        .map(|found| {
                            let category = categorizer.categorize_path(&found.path);
                            LargeFileEntry::from_found(found, category)
                        })
                        .collect()
                };
                send(
                    progress_tx,
                    AuditProgress::LargeFilesScanned {
                        folder: folder.path.clone(),
                        found: files.len(),
                    },
                );
                FolderScan::new(folder, files)
            })
            .collect()
    });
    check_cancelled(cancel)?;

    let totals = CategoryTotals::from_entries(scanned.iter().flat_map(|s| s.files.iter()));
    let duration = start.elapsed();
    send(progress_tx, AuditProgress::Complete { duration });
    info!(
        "Audit of {} complete: {} large files in {:?}",
        config.root.display(),
        totals.file_count(),
        duration
    );

    Ok(AuditReport {
        root: config.root.clone(),
        generated_at: Local::now(),
        duration_ms: duration.as_millis() as u64,
        min_file_size: config.min_file_size,
        folders,
        total_scanned,
        scanned,
        totals,
    })
}

/// Handle to an audit running on a background thread.
pub struct AuditHandle {
    /// Progress updates. Disconnects when the audit thread finishes.
    pub progress_rx: Receiver<AuditProgress>,
    cancel_flag: Arc<AtomicBool>,
    thread: thread::JoinHandle<Result<AuditReport, AuditError>>,
}

impl AuditHandle {
    /// Request the audit to stop as soon as possible.
    pub fn cancel(&self) {
        self.cancel_flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel_flag.load(Ordering::Relaxed)
    }

    /// The shared cancel flag, for wiring to a signal handler. Setting it is
    /// equivalent to [`cancel`](Self::cancel).
    pub fn cancel_flag(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.cancel_flag)
    }

    /// Block until the audit finishes and return its report.
    pub fn wait(self) -> Result<AuditReport, AuditError> {
        self.thread
            .join()
            .map_err(|_| AuditError::WorkerPanicked)?
    }
}

/// Start an audit of the local filesystem on a background thread.
pub fn start_audit(config: AuditConfig) -> Result<AuditHandle, AuditError> {
    start_audit_with(LocalFileSystem, config)
}

/// Start an audit of `fs` on a background thread.
pub fn start_audit_with<F>(fs: F, config: AuditConfig) -> Result<AuditHandle, AuditError>
where
    F: FileSystem + 'static,
{
    let (progress_tx, progress_rx) =
        crossbeam_channel::bounded::<AuditProgress>(PROGRESS_CHANNEL_CAPACITY);
    let cancel_flag = Arc::new(AtomicBool::new(false));
    let cancel_clone = cancel_flag.clone();

    let thread = thread::Builder::new()
        .name("diskaudit-audit".into())
        .spawn(move || run_audit(&fs, &config, Some(&progress_tx), &cancel_clone))
        .map_err(AuditError::Spawn)?;

    Ok(AuditHandle {
        progress_rx,
        cancel_flag,
        thread,
    })
}
