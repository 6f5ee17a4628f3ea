//! One conversion from feature document to report file.

use std::path::PathBuf;

use casebook_report::{ReportHeader, ReportTable, artifact_file_name, write_report};
use eyre::WrapErr;
use tracing::info;

use crate::config::Config;
use crate::error::CliError;
use crate::source::read_feature_lines;

/// Inputs for a conversion.
#[derive(Debug, Clone)]
pub struct Request {
    /// Feature document; `None` is a usage error.
    pub input: Option<PathBuf>,
    /// Exact destination, bypassing name derivation.
    pub output: Option<PathBuf>,
    /// Effective configuration.
    pub config: Config,
}

/// What a successful conversion did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The document held no scenarios; nothing was written.
    Empty,
    /// A report was written.
    Written {
        /// Location of the report.
        path: PathBuf,
        /// Number of test cases in it.
        test_cases: usize,
    },
}

impl Request {
    fn destination(&self, feature_title: &str) -> PathBuf {
        self.output.clone().unwrap_or_else(|| {
            self.config
                .output_dir
                .join(artifact_file_name(feature_title, self.config.format))
        })
    }
}

/// Read, classify, and render one feature document.
///
/// # Errors
///
/// Returns [`CliError::MissingArgument`] without an input path,
/// [`CliError::FileNotFound`] or [`CliError::Io`] when the input cannot be
/// read, and [`CliError::Other`] when the report cannot be written.
pub fn run(request: &Request) -> Result<Outcome, CliError> {
    let input = request.input.as_deref().ok_or(CliError::MissingArgument)?;
    info!(path = %input.display(), "analysing feature document");

    let lines = read_feature_lines(input)?;
    let parsed = casebook::parse(&lines);
    if parsed.is_empty() {
        info!("no test scenarios found");
        return Ok(Outcome::Empty);
    }

    let header = ReportHeader::for_feature(parsed.feature_title(), request.config.author.clone());
    let table = ReportTable::new(&parsed, header);
    let path = request.destination(parsed.feature_title());
    info!(path = %path.display(), format = %request.config.format, "writing report");
    write_report(&table, request.config.format, &path)
        .wrap_err_with(|| format!("failed to write report to {}", path.display()))?;

    Ok(Outcome::Written {
        path,
        test_cases: parsed.len(),
    })
}
