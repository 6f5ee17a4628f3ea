//! Tabular reports for classified test cases.
//!
//! [`ReportTable`] settles the text of every cell: a header region of project
//! metadata and one eight-column row per test case. The [`xlsx`] and [`json`]
//! writers render that table; [`write_report`] picks one by [`ReportFormat`].

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

mod error;
/// JSON writer.
pub mod json;
mod layout;
mod naming;
/// XLSX writer.
pub mod xlsx;

pub use error::ReportError;
pub use json::write_json;
pub use layout::{
    COLUMNS, DEFAULT_SHEET_TITLE, REFERENCE_DOCUMENT, ReportHeader, ReportRow, ReportTable,
    StatusFlag, numbered_steps, plain_steps, read_step_cell,
};
pub use naming::{ARTIFACT_SUFFIX, ReportFormat, ReportFormatParseError, artifact_file_name};
pub use xlsx::{sheet_name, write_workbook};

/// Write `table` to `path` in the requested format.
///
/// # Errors
///
/// Returns a [`ReportError`] when the file cannot be created or the writer
/// fails.
pub fn write_report(
    table: &ReportTable,
    format: ReportFormat,
    path: &Path,
) -> Result<(), ReportError> {
    match format {
        ReportFormat::Xlsx => write_workbook(table, path),
        ReportFormat::Json => {
            let file = File::create(path)?;
            write_json(BufWriter::new(file), table)
        }
    }
}
