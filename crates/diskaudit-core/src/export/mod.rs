//! Report exporters.
//!
//! Each format has a writer-generic function (for tests and pipes) and a
//! file-path convenience wrapper.
pub mod csv;
pub mod json;

pub use self::csv::{export_csv, write_csv};
pub use self::json::{export_json, write_json};

use crate::error::AuditError;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

fn create(path: &Path) -> Result<BufWriter<File>, AuditError> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| AuditError::Io {
            path: path.to_path_buf(),
            source,
        })
}
