//! Reading feature documents from disk.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use casebook::split_lines;

use crate::error::CliError;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Read `path` as UTF-8 and split it into lines.
///
/// Lines may end in `\n`, `\r\n`, or a lone `\r`.
/// A leading byte-order mark is dropped so a `Feature:` on the first line is
/// still recognised.
///
/// # Errors
///
/// Returns [`CliError::FileNotFound`] when `path` does not exist and
/// [`CliError::Io`] for any other read failure, including invalid UTF-8.
pub fn read_feature_lines(path: &Path) -> Result<Vec<String>, CliError> {
    let text = fs::read_to_string(path).map_err(|err| match err.kind() {
        ErrorKind::NotFound => CliError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => CliError::Io(err),
    })?;
    let text = text.strip_prefix(BYTE_ORDER_MARK).unwrap_or(&text);
    Ok(split_lines(text).map(str::to_owned).collect())
}

#[cfg(test)]
#[expect(clippy::expect_used, reason = "test fixtures with descriptive failures")]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_temp(contents: &[u8]) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temporary file");
        file.write_all(contents).expect("write fixture");
        file
    }

    #[test]
    fn reads_lines_without_terminators() {
        let file = write_temp(b"Feature: F\r\nScenario: s\n");
        let lines = read_feature_lines(file.path()).expect("readable fixture");
        assert_eq!(lines, vec!["Feature: F", "Scenario: s"]);
    }

    #[test]
    fn splits_carriage_return_only_files() {
        let file = write_temp(b"Feature: F\rScenario: s\rGiven A\r");
        let lines = read_feature_lines(file.path()).expect("readable fixture");
        assert_eq!(lines, vec!["Feature: F", "Scenario: s", "Given A"]);
    }

    #[test]
    fn strips_leading_byte_order_mark() {
        let file = write_temp(b"\xef\xbb\xbfFeature: Marked");
        let lines = read_feature_lines(file.path()).expect("readable fixture");
        assert_eq!(lines, vec!["Feature: Marked"]);
    }

    #[test]
    fn missing_file_is_reported_distinctly() {
        let dir = tempfile::tempdir().expect("temporary directory");
        let path = dir.path().join("absent.feature");
        let err = read_feature_lines(&path).expect_err("absent file should fail");
        assert!(matches!(err, CliError::FileNotFound { .. }));
    }

    #[test]
    fn invalid_utf8_is_an_io_error() {
        let file = write_temp(&[0x46, 0xff, 0xfe, 0x0a]);
        let err = read_feature_lines(file.path()).expect_err("invalid UTF-8 should fail");
        assert!(matches!(err, CliError::Io(_)));
    }
}
