//! Errors raised while writing reports.

use thiserror::Error;

/// Failures from the report writers.
#[derive(Debug, Error)]
pub enum ReportError {
    /// The spreadsheet writer rejected a cell, a sheet name, or the save.
    #[error("XLSX error: {0}")]
    Xlsx(#[from] rust_xlsxwriter::XlsxError),

    /// JSON serialisation failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Writing the output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_converts_from_std_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let error: ReportError = io_err.into();
        assert_eq!(error.to_string(), "I/O error: read-only");
    }
}
