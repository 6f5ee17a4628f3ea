//! Recognition of individual feature-document lines.
//!
//! Each raw line is trimmed and tested against a fixed, ordered set of
//! anchored patterns. The first match wins, so an annotation comment is never
//! mistaken for anything else and a step keyword only counts when it starts
//! the line.

use std::sync::LazyLock;

use regex::Regex;

use crate::keyword::StepKeyword;

struct Recognisers {
    feature: Regex,
    evidence: Regex,
    result: Regex,
    scenario: Regex,
    step: Regex,
    numeric_id: Regex,
}

#[expect(clippy::expect_used, reason = "patterns are fixed at compile time")]
static RECOGNISERS: LazyLock<Recognisers> = LazyLock::new(|| Recognisers {
    feature: Regex::new(r"^Feature:\s*(.*)").expect("valid feature regex"),
    evidence: Regex::new(r"^#Evidência:\s*(.*)").expect("valid evidence regex"),
    result: Regex::new(r"^#Resultado:\s*(.*)").expect("valid result regex"),
    scenario: Regex::new(r"^Scenario:\s*(.*)").expect("valid scenario regex"),
    step: Regex::new(r"^(Given|When|Then|And|But)\s+(.*)").expect("valid step regex"),
    numeric_id: Regex::new(r"(\d+)\)").expect("valid test case id regex"),
});

/// A single recognised line of a feature document.
///
/// Borrowed text is already trimmed of surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    /// `Feature: <title>`
    Feature(&'a str),
    /// `#Evidência: <text>`
    Evidence(&'a str),
    /// `#Resultado: <text>`
    Result(&'a str),
    /// `Scenario: <title>`
    Scenario(&'a str),
    /// `<Keyword> <text>` for one of the step keywords.
    Step(StepKeyword, &'a str),
    /// Blank lines, other comments, tags, tables, and free text.
    Other,
}

impl<'a> Line<'a> {
    /// Classify one raw line.
    ///
    /// Precedence is Feature, Evidence, Result, Scenario, Step, then
    /// everything else.
    ///
    /// # Examples
    ///
    /// ```
    /// use casebook::{Line, StepKeyword};
    ///
    /// assert_eq!(Line::recognise("  Feature: Farms "), Line::Feature("Farms"));
    /// assert_eq!(
    ///     Line::recognise("And the farm exists"),
    ///     Line::Step(StepKeyword::And, "the farm exists"),
    /// );
    /// assert_eq!(Line::recognise("# a plain comment"), Line::Other);
    /// ```
    #[must_use]
    pub fn recognise(raw: &'a str) -> Self {
        let line = raw.trim();
        let patterns = &*RECOGNISERS;
        if let Some(title) = capture(&patterns.feature, line) {
            return Self::Feature(title);
        }
        if let Some(text) = capture(&patterns.evidence, line) {
            return Self::Evidence(text);
        }
        if let Some(text) = capture(&patterns.result, line) {
            return Self::Result(text);
        }
        if let Some(title) = capture(&patterns.scenario, line) {
            return Self::Scenario(title);
        }
        recognise_step(&patterns.step, line).unwrap_or(Self::Other)
    }
}

fn capture<'a>(regex: &Regex, line: &'a str) -> Option<&'a str> {
    regex
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().trim())
}

fn recognise_step<'a>(regex: &Regex, line: &'a str) -> Option<Line<'a>> {
    let caps = regex.captures(line)?;
    let keyword = caps.get(1)?.as_str().parse().ok()?;
    let text = caps.get(2)?.as_str().trim();
    Some(Line::Step(keyword, text))
}

/// Derive the identifier for a scenario.
///
/// The first `<digits>)` token anywhere in the title supplies the number;
/// otherwise `position` (the 1-based index of the scenario among those seen so
/// far) is used. Either way the number is zero-padded to two digits and
/// prefixed with `TC_`. Identifiers from the two sources are not reconciled,
/// so mixing styles can yield duplicates.
///
/// # Examples
///
/// ```
/// use casebook::test_case_id;
///
/// assert_eq!(test_case_id("03) Register a farm", 1), "TC_03");
/// assert_eq!(test_case_id("Register a farm", 2), "TC_02");
/// assert_eq!(test_case_id("123) Bulk import", 1), "TC_123");
/// ```
#[must_use]
pub fn test_case_id(title: &str, position: usize) -> String {
    RECOGNISERS
        .numeric_id
        .captures(title)
        .and_then(|caps| caps.get(1))
        .map_or_else(
            || format!("TC_{position:02}"),
            |digits| format!("TC_{:0>2}", digits.as_str()),
        )
}

/// Split `text` into lines at `\n`, `\r\n`, or a lone `\r`.
///
/// A final line terminator does not produce a trailing empty line.
///
/// # Examples
///
/// ```
/// use casebook::split_lines;
///
/// let lines: Vec<_> = split_lines("Feature: F\rScenario: s\r\nGiven A\n").collect();
/// assert_eq!(lines, ["Feature: F", "Scenario: s", "Given A"]);
/// ```
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines()
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}
