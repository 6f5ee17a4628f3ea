//! Command line arguments for the `casebook` binary.

use std::path::PathBuf;

use casebook_report::ReportFormat;
use clap::Parser;

use crate::config::{LogLevel, Overrides};

/// Convert a Gherkin feature file into a test-case spreadsheet.
#[derive(Parser, Debug)]
#[command(name = "casebook", version, about)]
pub struct Cli {
    /// Feature document to convert.
    pub input: Option<PathBuf>,

    /// Write the report to this exact path instead of deriving a name from
    /// the feature title.
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Directory receiving the report when `--output` is not given.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Value of the "Created by:" header field.
    #[arg(long)]
    pub author: Option<String>,

    /// Report format (xlsx, json).
    #[arg(long)]
    pub format: Option<ReportFormat>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<LogLevel>,
}

impl Cli {
    /// Configuration overrides carried by the flags.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        Overrides {
            log_level: self.log_level,
            author: self.author.clone(),
            output_dir: self.output_dir.clone(),
            format: self.format,
        }
    }
}
