//! Command line front end for casebook.
//!
//! The `casebook` binary reads one feature document, classifies it with the
//! `casebook` crate, and writes a report with `casebook-report`. This library
//! holds everything but the process plumbing so it can be tested directly.

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod run;
pub mod source;
