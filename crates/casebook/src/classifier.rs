//! Single-pass classification of feature lines into test cases.
//!
//! The pass is a fold over an owned [`ParseState`]. A scenario stays open
//! until the next `Scenario:` line or the end of input, and every step line in
//! between is routed by keyword and by whether the scenario has already seen a
//! `When`.

use tracing::{debug, trace};

use crate::keyword::StepKeyword;
use crate::line::{Line, split_lines, test_case_id};
use crate::record::{ParsedFeature, Step, TestCase};

/// The test case currently accepting steps.
#[derive(Debug)]
struct OpenCase {
    case: TestCase,
    seen_action_marker: bool,
}

impl OpenCase {
    fn push_step(&mut self, keyword: StepKeyword, text: &str) {
        if keyword.is_action_marker() {
            self.seen_action_marker = true;
        }
        let step = Step::new(keyword, text);
        let case = &mut self.case;
        if keyword.is_precondition_eligible() && !self.seen_action_marker {
            case.pre_conditions.push(step);
        } else if keyword.is_action_eligible()
            || (keyword == StepKeyword::Given && self.seen_action_marker)
        {
            case.action_steps.push(step);
        } else if keyword == StepKeyword::Then {
            case.expected_results.push(step);
        }
    }
}

/// Accumulator threaded through the classification fold.
///
/// Each call to [`consume`](Self::consume) takes the state by value and
/// returns the next one, so no two parses can share an accumulator.
#[derive(Debug, Default)]
pub struct ParseState {
    feature_title: String,
    pending_evidence: String,
    pending_result: String,
    current: Option<OpenCase>,
    test_cases: Vec<TestCase>,
}

impl ParseState {
    /// Start an empty parse.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line.
    #[must_use]
    pub fn consume(mut self, raw: &str) -> Self {
        match Line::recognise(raw) {
            Line::Feature(title) => title.clone_into(&mut self.feature_title),
            Line::Evidence(text) => text.clone_into(&mut self.pending_evidence),
            Line::Result(text) => text.clone_into(&mut self.pending_result),
            Line::Scenario(title) => self.open_scenario(title),
            Line::Step(keyword, text) => match self.current.as_mut() {
                Some(open) => open.push_step(keyword, text),
                None => trace!(%keyword, text, "step outside any scenario ignored"),
            },
            Line::Other => {}
        }
        self
    }

    fn open_scenario(&mut self, title: &str) {
        self.close_current();
        let id = test_case_id(title, self.test_cases.len() + 1);
        let case = TestCase::open(
            id,
            &self.feature_title,
            title,
            std::mem::take(&mut self.pending_evidence),
            std::mem::take(&mut self.pending_result),
        );
        self.current = Some(OpenCase {
            case,
            seen_action_marker: false,
        });
    }

    fn close_current(&mut self) {
        if let Some(open) = self.current.take() {
            let case = open.case;
            debug!(
                id = case.id(),
                pre_conditions = case.pre_conditions.len(),
                action_steps = case.action_steps.len(),
                expected_results = case.expected_results.len(),
                "test case finalised"
            );
            self.test_cases.push(case);
        }
    }

    /// Close any open scenario and return the result.
    #[must_use]
    pub fn finish(mut self) -> ParsedFeature {
        self.close_current();
        ParsedFeature {
            test_cases: self.test_cases,
            feature_title: self.feature_title,
        }
    }
}

/// Classify `lines` into test cases.
///
/// Unrecognised lines are ignored; the function cannot fail.
///
/// # Examples
///
/// ```
/// use casebook::{StepKeyword, parse};
///
/// let parsed = parse([
///     "Feature: Farms",
///     "#Resultado: SUCESSO",
///     "Scenario: 01) Register",
///     "  Given an empty registry",
///     "  When I register a farm",
///     "  Then the registry lists it",
/// ]);
/// assert_eq!(parsed.feature_title(), "Farms");
/// let case = &parsed.test_cases()[0];
/// assert_eq!(case.id(), "TC_01");
/// assert_eq!(case.status(), "SUCESSO");
/// assert_eq!(case.pre_conditions()[0].keyword(), StepKeyword::Given);
/// ```
#[must_use]
pub fn parse<I, S>(lines: I) -> ParsedFeature
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .fold(ParseState::new(), |state, line| state.consume(line.as_ref()))
        .finish()
}

/// Classify a whole document held in memory.
///
/// Lines end at `\n`, `\r\n`, or a lone `\r`; see [`split_lines`].
#[must_use]
pub fn parse_str(text: &str) -> ParsedFeature {
    parse(split_lines(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn steps(pairs: &[(StepKeyword, &str)]) -> Vec<Step> {
        pairs
            .iter()
            .map(|(keyword, text)| Step::new(*keyword, *text))
            .collect()
    }

    fn only_case(parsed: &ParsedFeature) -> &TestCase {
        let [case] = parsed.test_cases() else {
            panic!("expected exactly one test case, got {}", parsed.len());
        };
        case
    }

    #[test]
    fn empty_input_yields_nothing() {
        let parsed = parse(Vec::<String>::new());
        assert!(parsed.is_empty());
        assert_eq!(parsed.feature_title(), "");
    }

    #[test]
    fn splits_steps_around_first_when() {
        let parsed = parse_str(
            "Scenario: s\n  Given A\n  Given B\n  When C\n  Then D\n",
        );
        let case = only_case(&parsed);
        assert_eq!(
            case.pre_conditions(),
            steps(&[(StepKeyword::Given, "A"), (StepKeyword::Given, "B")])
        );
        assert_eq!(case.action_steps(), steps(&[(StepKeyword::When, "C")]));
        assert_eq!(case.expected_results(), steps(&[(StepKeyword::Then, "D")]));
    }

    #[test]
    fn given_after_when_is_an_action() {
        let parsed = parse_str("Scenario: s\nGiven A\nWhen B\nGiven C\nThen D");
        let case = only_case(&parsed);
        assert_eq!(case.pre_conditions(), steps(&[(StepKeyword::Given, "A")]));
        assert_eq!(
            case.action_steps(),
            steps(&[(StepKeyword::When, "B"), (StepKeyword::Given, "C")])
        );
    }

    #[test]
    fn and_follows_phase_not_previous_keyword() {
        let parsed = parse_str("Scenario: s\nGiven A\nAnd B\nWhen C\nThen D\nAnd E");
        let case = only_case(&parsed);
        assert_eq!(
            case.pre_conditions(),
            steps(&[(StepKeyword::Given, "A"), (StepKeyword::And, "B")])
        );
        // An `And` after `Then` is still an action step.
        assert_eq!(
            case.action_steps(),
            steps(&[(StepKeyword::When, "C"), (StepKeyword::And, "E")])
        );
        assert_eq!(case.expected_results(), steps(&[(StepKeyword::Then, "D")]));
    }

    #[test]
    fn but_before_when_is_an_action() {
        let parsed = parse_str("Scenario: s\nGiven A\nBut B\nAnd C");
        let case = only_case(&parsed);
        assert_eq!(
            case.pre_conditions(),
            steps(&[(StepKeyword::Given, "A"), (StepKeyword::And, "C")])
        );
        assert_eq!(case.action_steps(), steps(&[(StepKeyword::But, "B")]));
    }

    #[test]
    fn then_before_when_is_an_expected_result() {
        let parsed = parse_str("Scenario: s\nThen X\nGiven Y");
        let case = only_case(&parsed);
        assert_eq!(case.expected_results(), steps(&[(StepKeyword::Then, "X")]));
        assert_eq!(case.pre_conditions(), steps(&[(StepKeyword::Given, "Y")]));
    }

    #[test]
    fn annotations_attach_to_the_next_scenario() {
        let parsed = parse_str(
            "#Evidência: e1\nScenario: first\nGiven A\n#Resultado: FALHA\nScenario: second\n",
        );
        let [first, second] = parsed.test_cases() else {
            panic!("expected two test cases");
        };
        assert_eq!(first.evidence(), "e1");
        assert_eq!(first.status(), "");
        assert_eq!(second.evidence(), "");
        assert_eq!(second.status(), "FALHA");
    }

    #[test]
    fn last_annotation_wins() {
        let parsed = parse_str("#Resultado: FALHA\n#Resultado: SUCESSO\nScenario: s");
        assert_eq!(only_case(&parsed).status(), "SUCESSO");
    }

    #[test]
    fn feature_title_is_shared_and_last_one_is_reported() {
        let parsed = parse_str("Feature: One\nScenario: a\nFeature: Two\nScenario: b");
        let names: Vec<_> = parsed
            .test_cases()
            .iter()
            .map(TestCase::scenario_name)
            .collect();
        assert_eq!(names, vec!["One", "Two"]);
        assert_eq!(parsed.feature_title(), "Two");
    }

    #[test]
    fn steps_before_any_scenario_are_dropped() {
        let parsed = parse_str("Feature: F\nGiven orphan\nWhen orphan\n#Resultado: X");
        assert!(parsed.is_empty());
        assert_eq!(parsed.feature_title(), "F");
    }

    #[test]
    fn mixed_id_styles_may_collide() {
        let parsed = parse_str("Scenario: 02) explicit\nScenario: implicit");
        let ids: Vec<_> = parsed.test_cases().iter().map(TestCase::id).collect();
        assert_eq!(ids, vec!["TC_02", "TC_02"]);
    }

    #[test]
    fn crlf_documents_are_handled() {
        let parsed = parse_str("Feature: F\r\nScenario: s\r\nGiven A\r\n");
        assert_eq!(parsed.feature_title(), "F");
        assert_eq!(
            only_case(&parsed).pre_conditions(),
            steps(&[(StepKeyword::Given, "A")])
        );
    }

    #[test]
    fn cr_only_documents_are_handled() {
        let parsed = parse_str("Feature: F\rScenario: s\rGiven A\rWhen B\r");
        assert_eq!(parsed.feature_title(), "F");
        let case = only_case(&parsed);
        assert_eq!(case.pre_conditions(), steps(&[(StepKeyword::Given, "A")]));
        assert_eq!(case.action_steps(), steps(&[(StepKeyword::When, "B")]));
    }

    #[test]
    fn splits_into_records_and_title() {
        let (cases, title) = parse_str("Feature: Farms\nScenario: 07) one\nScenario: two")
            .into_parts();
        assert_eq!(title, "Farms");
        let ids: Vec<_> = cases.iter().map(TestCase::id).collect();
        assert_eq!(ids, vec!["TC_07", "TC_02"]);
    }

    #[test]
    fn state_can_be_driven_incrementally() {
        let state = ParseState::new()
            .consume("Scenario: s")
            .consume("When act");
        let parsed = state.finish();
        assert_eq!(
            only_case(&parsed).action_steps(),
            steps(&[(StepKeyword::When, "act")])
        );
    }
}
