//! Output formats and artifact file names.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Suffix appended to the feature-derived artifact name.
pub const ARTIFACT_SUFFIX: &str = "Casos_de_Teste_v2";

/// Report file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Styled spreadsheet.
    #[default]
    Xlsx,
    /// Machine-readable JSON document.
    Json,
}

impl ReportFormat {
    /// File extension without the leading dot.
    #[must_use]
    pub const fn extension(self) -> &'static str {
        match self {
            Self::Xlsx => "xlsx",
            Self::Json => "json",
        }
    }
}

impl fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

/// Error returned when a format name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown report format '{0}', expected one of: xlsx, json")]
pub struct ReportFormatParseError(pub String);

impl FromStr for ReportFormat {
    type Err = ReportFormatParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "xlsx" => Ok(Self::Xlsx),
            "json" => Ok(Self::Json),
            _ => Err(ReportFormatParseError(s.to_owned())),
        }
    }
}

/// File name for a report on `feature_title`.
///
/// Spaces and path separators in the title become underscores. An empty
/// title yields the fixed default name.
///
/// # Examples
///
/// ```
/// use casebook_report::{ReportFormat, artifact_file_name};
///
/// assert_eq!(
///     artifact_file_name("Farm registry", ReportFormat::Xlsx),
///     "Farm_registry_Casos_de_Teste_v2.xlsx",
/// );
/// assert_eq!(
///     artifact_file_name("", ReportFormat::Json),
///     "Casos_de_Teste_v2.json",
/// );
/// ```
#[must_use]
pub fn artifact_file_name(feature_title: &str, format: ReportFormat) -> String {
    if feature_title.is_empty() {
        return format!("{ARTIFACT_SUFFIX}.{}", format.extension());
    }
    let stem: String = feature_title
        .chars()
        .map(|c| if matches!(c, ' ' | '/' | '\\') { '_' } else { c })
        .collect();
    format!("{stem}_{ARTIFACT_SUFFIX}.{}", format.extension())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Login", ReportFormat::Xlsx, "Login_Casos_de_Teste_v2.xlsx")]
    #[case(
        "Cadastro de Fazenda",
        ReportFormat::Xlsx,
        "Cadastro_de_Fazenda_Casos_de_Teste_v2.xlsx"
    )]
    #[case("In/Out", ReportFormat::Json, "In_Out_Casos_de_Teste_v2.json")]
    #[case("", ReportFormat::Xlsx, "Casos_de_Teste_v2.xlsx")]
    fn derives_artifact_names(
        #[case] title: &str,
        #[case] format: ReportFormat,
        #[case] expected: &str,
    ) {
        assert_eq!(artifact_file_name(title, format), expected);
    }

    #[test]
    fn parses_formats_case_insensitively() {
        assert_eq!("XLSX".parse::<ReportFormat>().ok(), Some(ReportFormat::Xlsx));
        assert_eq!(" json ".parse::<ReportFormat>().ok(), Some(ReportFormat::Json));
        let Err(err) = "csv".parse::<ReportFormat>() else {
            panic!("csv should be rejected");
        };
        assert!(err.to_string().contains("unknown report format 'csv'"));
    }
}
