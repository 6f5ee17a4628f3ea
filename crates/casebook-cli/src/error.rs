//! Error kinds surfaced by the command line tool.
//!
//! Each variant maps to a process exit code so `main` can report failures
//! without inspecting messages.

use std::path::PathBuf;

use thiserror::Error;

/// Failures that stop a conversion.
#[derive(Debug, Error)]
pub enum CliError {
    /// No input document was given.
    #[error("usage: casebook <path-to-feature-file>")]
    MissingArgument,

    /// The input document does not exist.
    #[error("input file not found: {}", path.display())]
    FileNotFound {
        /// Path as given on the command line.
        path: PathBuf,
    },

    /// An invalid configuration value was provided.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Reading the input failed for a reason other than absence.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Any other failure while parsing or rendering.
    #[error(transparent)]
    Other(#[from] eyre::Report),
}

impl CliError {
    /// Process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::InvalidConfig(_) => 2,
            Self::MissingArgument | Self::FileNotFound { .. } | Self::Io(_) | Self::Other(_) => 1,
        }
    }
}
