//! Classification of Gherkin feature documents into test-case records.
//!
//! The crate turns an ordered sequence of lines into [`TestCase`] records:
//! each `Scenario:` opens a record, the `#Evidência:` and `#Resultado:`
//! annotations preceding it are attached to it, and its steps are split into
//! pre-conditions, action steps, and expected results by keyword and by their
//! position relative to the scenario's first `When`.
//!
//! Parsing is a pure function of its input. Reading documents and rendering
//! reports belong to the `casebook-report` and `casebook-cli` crates.

mod classifier;
mod keyword;
mod line;
mod record;

pub use classifier::{ParseState, parse, parse_str};
pub use keyword::{StepKeyword, StepKeywordParseError};
pub use line::{Line, split_lines, test_case_id};
pub use record::{ParsedFeature, Step, TestCase};
