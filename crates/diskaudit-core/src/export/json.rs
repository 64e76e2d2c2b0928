//! JSON export of the whole report.
use crate::audit::AuditReport;
use crate::error::AuditError;
use std::io::Write;
use std::path::Path;

pub fn write_json<W: Write>(report: &AuditReport, writer: W) -> Result<(), AuditError> {
    serde_json::to_writer_pretty(writer, report)?;
    Ok(())
}

/// Write the JSON report to a file at `path`.
pub fn export_json(report: &AuditReport, path: &Path) -> Result<(), AuditError> {
    let mut writer = super::create(path)?;
    write_json(report, &mut writer)?;
    writer.flush().map_err(|source| AuditError::Io {
        path: path.to_path_buf(),
        source,
    })
}
