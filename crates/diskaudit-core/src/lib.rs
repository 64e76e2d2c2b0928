/// DiskAudit Core: scanning, classification, and report model.
///
/// This crate contains all audit logic with zero console dependencies.
/// Frontends (the `diskaudit` CLI, tests) drive it through [`audit`].
///
/// # Modules
///
/// - [`model`]: Scan records, cleanup categories, and size formatting.
/// - [`platform`]: The `FileSystem` seam plus local and in-memory backends.
/// - [`scanner`]: Depth-bounded folder sizing and large-file discovery.
/// - [`analysis`]: Path/extension categorisation and folder ranking.
/// - [`audit`]: Two-pass orchestration, configuration, and the report.
/// - [`export`]: CSV and JSON report writers.
/// - [`error`]: Fatal audit errors and per-entry skip reasons.
pub mod analysis;
pub mod audit;
pub mod error;
pub mod export;
pub mod model;
pub mod platform;
pub mod scanner;

pub use audit::{run_audit, start_audit, AuditConfig, AuditHandle, AuditReport};
pub use error::AuditError;
