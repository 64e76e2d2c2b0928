//! Scanner module: the two depth-bounded tree walks behind an audit.
//!
//! - [`size::compute_size`] totals every regular file under a directory.
//! - [`large_files::scan_large_files`] lists files at or above a threshold.
//!
//! Both are synchronous, single-threaded and free of shared state. They
//! never fail: unreadable entries are skipped (see [`walk`]). Parallelism,
//! ranking and progress reporting live one level up, in `audit`.
pub mod large_files;
pub mod progress;
pub mod size;
pub mod walk;

pub use large_files::scan_large_files;
pub use progress::{AuditProgress, Pass};
pub use size::compute_size;
