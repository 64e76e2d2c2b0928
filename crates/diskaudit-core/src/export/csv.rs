//! CSV export: one row per large file with `Path`, `Size_GB`, `Category`,
//! sorted by category then size descending.
use crate::audit::AuditReport;
use crate::error::AuditError;
use crate::model::size::bytes_to_gb;
use crate::model::Category;
use serde::Serialize;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

const HEADER: [&str; 3] = ["Path", "Size_GB", "Category"];

#[derive(Serialize)]
struct Row<'a> {
    path: Cow<'a, str>,
    size_gb: f64,
    category: Category,
}

/// Write every large file in `report` to `writer`. Returns the row count.
///
/// The header is always written, even when there are no rows.
pub fn write_csv<W: Write>(report: &AuditReport, writer: W) -> Result<usize, AuditError> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    wtr.write_record(HEADER)?;

    let rows = report.export_rows();
    for entry in &rows {
        wtr.serialize(Row {
            path: entry.path.to_string_lossy(),
            size_gb: bytes_to_gb(entry.size_bytes),
            category: entry.category,
        })?;
    }
    wtr.flush().map_err(csv::Error::from)?;
    Ok(rows.len())
}

/// Write the CSV report to a file at `path`.
pub fn export_csv(report: &AuditReport, path: &Path) -> Result<usize, AuditError> {
    write_csv(report, super::create(path)?)
}
