//! Configuration parsed from environment variables.
//!
//! Every setting can be supplied through a `CASEBOOK_`-prefixed environment
//! variable and overridden on the command line.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use casebook_report::ReportFormat;

use crate::error::CliError;

/// Log level enumeration matching tracing crate levels.
///
/// Defaults to `Info` when not specified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Most verbose logging, includes per-line classification events.
    Trace,
    /// Debug-level information such as finalised test cases.
    Debug,
    /// Standard informational messages.
    #[default]
    Info,
    /// Warning messages for potentially problematic situations.
    Warn,
    /// Error messages for failures.
    Error,
}

impl FromStr for LogLevel {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(CliError::InvalidConfig(format!(
                "unknown log level '{s}', expected one of: trace, debug, info, warn, error"
            ))),
        }
    }
}

impl LogLevel {
    /// Convert to a tracing filter directive string.
    #[must_use]
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Environment variable selecting the log level.
pub const LOG_LEVEL_VAR: &str = "CASEBOOK_LOG_LEVEL";
/// Environment variable supplying the "Created by:" header value.
pub const AUTHOR_VAR: &str = "CASEBOOK_AUTHOR";
/// Environment variable naming the directory for derived artifact names.
pub const OUTPUT_DIR_VAR: &str = "CASEBOOK_OUTPUT_DIR";
/// Environment variable selecting the report format.
pub const FORMAT_VAR: &str = "CASEBOOK_FORMAT";

/// Settings for one conversion.
///
/// # Environment Variables
///
/// - `CASEBOOK_LOG_LEVEL`: trace, debug, info, warn, or error
/// - `CASEBOOK_AUTHOR`: value of the report's "Created by:" field
/// - `CASEBOOK_OUTPUT_DIR`: directory receiving the report
/// - `CASEBOOK_FORMAT`: xlsx or json
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: LogLevel,
    /// "Created by:" header value.
    pub author: String,
    /// Directory receiving reports whose name is derived from the feature.
    pub output_dir: PathBuf,
    /// Report format.
    pub format: ReportFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LogLevel::default(),
            author: String::new(),
            output_dir: PathBuf::from("."),
            format: ReportFormat::default(),
        }
    }
}

/// Command line values that take precedence over the environment.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Overrides {
    /// Replacement log level.
    pub log_level: Option<LogLevel>,
    /// Replacement author.
    pub author: Option<String>,
    /// Replacement output directory.
    pub output_dir: Option<PathBuf>,
    /// Replacement report format.
    pub format: Option<ReportFormat>,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a variable holds an invalid value.
    pub fn from_env() -> Result<Self, CliError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value. Missing variables fall back to defaults.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidConfig` if a value cannot be parsed.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, CliError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => defaults.log_level,
        };

        let format = match lookup(FORMAT_VAR) {
            Some(val) => val
                .parse()
                .map_err(|e: casebook_report::ReportFormatParseError| {
                    CliError::InvalidConfig(e.to_string())
                })?,
            None => defaults.format,
        };

        Ok(Self {
            log_level,
            author: lookup(AUTHOR_VAR).unwrap_or(defaults.author),
            output_dir: lookup(OUTPUT_DIR_VAR).map_or(defaults.output_dir, PathBuf::from),
            format,
        })
    }

    /// Apply command line overrides to an existing configuration.
    #[must_use]
    pub fn apply_overrides(mut self, overrides: Overrides) -> Self {
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }

        if let Some(author) = overrides.author {
            self.author = author;
        }

        if let Some(dir) = overrides.output_dir {
            self.output_dir = dir;
        }

        if let Some(format) = overrides.format {
            self.format = format;
        }

        self
    }

    /// Create a new configuration with the specified log level.
    #[must_use]
    pub fn with_log_level(mut self, level: LogLevel) -> Self {
        self.log_level = level;
        self
    }
}

#[cfg(test)]
#[expect(
    clippy::unwrap_used,
    reason = "tests require explicit panic messages for debugging failures"
)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn log_level_parses_valid_values() {
        assert_eq!("trace".parse::<LogLevel>().ok(), Some(LogLevel::Trace));
        assert_eq!("debug".parse::<LogLevel>().ok(), Some(LogLevel::Debug));
        assert_eq!("info".parse::<LogLevel>().ok(), Some(LogLevel::Info));
        assert_eq!("warn".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("warning".parse::<LogLevel>().ok(), Some(LogLevel::Warn));
        assert_eq!("ERROR".parse::<LogLevel>().ok(), Some(LogLevel::Error));
    }

    #[test]
    fn log_level_rejects_invalid_values() {
        let result = "loud".parse::<LogLevel>();
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("unknown log level"));
    }

    #[test]
    fn missing_variables_use_defaults() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.output_dir, PathBuf::from("."));
        assert_eq!(config.format, ReportFormat::Xlsx);
    }

    #[test]
    fn reads_every_variable() {
        let config = Config::from_lookup(lookup_from(&[
            (LOG_LEVEL_VAR, "debug"),
            (AUTHOR_VAR, "Ana Souza"),
            (OUTPUT_DIR_VAR, "reports"),
            (FORMAT_VAR, "json"),
        ]))
        .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
        assert_eq!(config.author, "Ana Souza");
        assert_eq!(config.output_dir, PathBuf::from("reports"));
        assert_eq!(config.format, ReportFormat::Json);
    }

    #[test]
    fn invalid_format_is_a_config_error() {
        let err = Config::from_lookup(lookup_from(&[(FORMAT_VAR, "csv")])).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("unknown report format"));
    }

    #[test]
    fn apply_overrides_updates_selected_fields() {
        let config = Config::default().apply_overrides(Overrides {
            log_level: Some(LogLevel::Error),
            author: Some("QA".to_owned()),
            ..Overrides::default()
        });
        assert_eq!(config.log_level, LogLevel::Error);
        assert_eq!(config.author, "QA");
        assert_eq!(config.output_dir, PathBuf::from("."));

        let config = Config::default().apply_overrides(Overrides::default());
        assert_eq!(config, Config::default());
    }

    #[test]
    fn with_log_level_builder() {
        let config = Config::default().with_log_level(LogLevel::Trace);
        assert_eq!(config.log_level, LogLevel::Trace);
    }
}
