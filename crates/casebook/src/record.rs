//! Test-case records produced by the classifier.

use std::fmt;

use crate::keyword::StepKeyword;

/// One step line, kept with the keyword it was written with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Step {
    keyword: StepKeyword,
    text: String,
}

impl Step {
    /// Create a step from its keyword and text.
    ///
    /// # Examples
    ///
    /// ```
    /// use casebook::{Step, StepKeyword};
    ///
    /// let step = Step::new(StepKeyword::Given, "a registered user");
    /// assert_eq!(step.to_string(), "Given a registered user");
    /// ```
    #[must_use]
    pub fn new(keyword: StepKeyword, text: impl Into<String>) -> Self {
        Self {
            keyword,
            text: text.into(),
        }
    }

    /// Keyword as written in the source line.
    #[must_use]
    pub fn keyword(&self) -> StepKeyword {
        self.keyword
    }

    /// Step text following the keyword.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.keyword, self.text)
    }
}

/// A finalised test case derived from one `Scenario:` block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub(crate) id: String,
    pub(crate) scenario_name: String,
    pub(crate) title: String,
    pub(crate) pre_conditions: Vec<Step>,
    pub(crate) action_steps: Vec<Step>,
    pub(crate) expected_results: Vec<Step>,
    pub(crate) evidence: String,
    pub(crate) status: String,
}

impl TestCase {
    pub(crate) fn open(
        id: String,
        scenario_name: &str,
        title: &str,
        evidence: String,
        status: String,
    ) -> Self {
        Self {
            id,
            scenario_name: scenario_name.to_owned(),
            title: title.to_owned(),
            pre_conditions: Vec::new(),
            action_steps: Vec::new(),
            expected_results: Vec::new(),
            evidence,
            status,
        }
    }

    /// Identifier such as `TC_03`.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Title of the feature that was current when the scenario opened.
    #[must_use]
    pub fn scenario_name(&self) -> &str {
        &self.scenario_name
    }

    /// Scenario title, verbatim.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Steps recorded before the scenario reached its first `When`.
    #[must_use]
    pub fn pre_conditions(&self) -> &[Step] {
        &self.pre_conditions
    }

    /// Steps describing the behaviour under test.
    #[must_use]
    pub fn action_steps(&self) -> &[Step] {
        &self.action_steps
    }

    /// `Then` assertions.
    #[must_use]
    pub fn expected_results(&self) -> &[Step] {
        &self.expected_results
    }

    /// Evidence annotation captured before the scenario, or empty.
    #[must_use]
    pub fn evidence(&self) -> &str {
        &self.evidence
    }

    /// Result annotation captured before the scenario, or empty.
    #[must_use]
    pub fn status(&self) -> &str {
        &self.status
    }
}

/// Everything extracted from one feature document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedFeature {
    pub(crate) test_cases: Vec<TestCase>,
    pub(crate) feature_title: String,
}

impl ParsedFeature {
    /// Test cases in the order their `Scenario:` lines appeared.
    #[must_use]
    pub fn test_cases(&self) -> &[TestCase] {
        &self.test_cases
    }

    /// Last `Feature:` title seen, or an empty string when there was none.
    #[must_use]
    pub fn feature_title(&self) -> &str {
        &self.feature_title
    }

    /// Number of test cases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.test_cases.len()
    }

    /// Whether the document contained no scenarios.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.test_cases.is_empty()
    }

    /// Split into the test cases and the feature title.
    #[must_use]
    pub fn into_parts(self) -> (Vec<TestCase>, String) {
        (self.test_cases, self.feature_title)
    }
}
