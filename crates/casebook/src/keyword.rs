//! Step keyword vocabulary and classification predicates.
//!
//! The classifier only ever consults these predicates, so the asymmetry
//! between `And` (pre-condition eligible) and `But` (never a pre-condition)
//! lives in exactly one place.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Keyword introducing a step line.
///
/// `And` and `But` are kept distinct rather than resolved against the
/// preceding keyword; classification depends on where the step falls in the
/// scenario, not on what came immediately before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Establishes initial state.
    Given,
    /// Performs the behaviour under test.
    When,
    /// Asserts an outcome.
    Then,
    /// Continues the current step stream.
    And,
    /// Contrasting continuation of the current step stream.
    But,
}

impl StepKeyword {
    /// Every keyword, in source vocabulary order.
    pub const ALL: [Self; 5] = [Self::Given, Self::When, Self::Then, Self::And, Self::But];

    /// Return the keyword as written in a feature document.
    ///
    /// # Examples
    ///
    /// ```
    /// use casebook::StepKeyword;
    ///
    /// assert_eq!(StepKeyword::Given.as_str(), "Given");
    /// assert_eq!(StepKeyword::But.as_str(), "But");
    /// ```
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Whether this keyword switches the open scenario into its action phase.
    ///
    /// # Examples
    ///
    /// ```
    /// use casebook::StepKeyword;
    ///
    /// assert!(StepKeyword::When.is_action_marker());
    /// assert!(!StepKeyword::And.is_action_marker());
    /// ```
    #[must_use]
    pub const fn is_action_marker(self) -> bool {
        matches!(self, Self::When)
    }

    /// Whether a step with this keyword may be recorded as a pre-condition
    /// while the scenario has not yet reached its action phase.
    #[must_use]
    pub const fn is_precondition_eligible(self) -> bool {
        matches!(self, Self::Given | Self::And)
    }

    /// Whether a step with this keyword is an action step regardless of the
    /// scenario's phase.
    ///
    /// `But` is included here and therefore never becomes a pre-condition,
    /// even before the first `When`.
    #[must_use]
    pub const fn is_action_eligible(self) -> bool {
        matches!(self, Self::When | Self::And | Self::But)
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`StepKeyword`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid step keyword: {0}")]
pub struct StepKeywordParseError(pub String);

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        Self::ALL
            .into_iter()
            .find(|keyword| trimmed.eq_ignore_ascii_case(keyword.as_str()))
            .ok_or_else(|| StepKeywordParseError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[expect(clippy::expect_used, reason = "test helper with descriptive failures")]
    fn parse_kw(input: &str) -> StepKeyword {
        input
            .parse()
            .expect("test input should parse to a valid keyword")
    }

    #[rstest]
    #[case("Given", StepKeyword::Given)]
    #[case("given", StepKeyword::Given)]
    #[case(" WhEn ", StepKeyword::When)]
    #[case("THEN", StepKeyword::Then)]
    #[case("AND", StepKeyword::And)]
    #[case(" but ", StepKeyword::But)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: StepKeyword) {
        assert_eq!(parse_kw(input), expected);
    }

    #[test]
    fn rejects_invalid_keyword() {
        let Err(err) = "Dado".parse::<StepKeyword>() else {
            panic!("expected parse error for unsupported keyword");
        };
        assert_eq!(err.0, "Dado");
        assert_eq!(err.to_string(), "invalid step keyword: Dado");
    }

    #[test]
    fn display_matches_as_str() {
        for keyword in StepKeyword::ALL {
            assert_eq!(keyword.to_string(), keyword.as_str());
        }
    }

    #[rstest]
    #[case(StepKeyword::Given, true, false)]
    #[case(StepKeyword::When, false, true)]
    #[case(StepKeyword::Then, false, false)]
    #[case(StepKeyword::And, true, true)]
    #[case(StepKeyword::But, false, true)]
    fn eligibility_table(
        #[case] keyword: StepKeyword,
        #[case] precondition: bool,
        #[case] action: bool,
    ) {
        assert_eq!(keyword.is_precondition_eligible(), precondition);
        assert_eq!(keyword.is_action_eligible(), action);
    }

    #[test]
    fn only_when_marks_the_action_phase() {
        let markers: Vec<_> = StepKeyword::ALL
            .into_iter()
            .filter(|keyword| keyword.is_action_marker())
            .collect();
        assert_eq!(markers, vec![StepKeyword::When]);
    }
}
