//! Format-independent layout of a test-case report.
//!
//! A report is a small header region of project metadata followed by one
//! table row per test case. Writers only decide how the cells look; the text
//! of every cell is settled here.

use casebook::{ParsedFeature, Step, StepKeyword, TestCase};

/// Column headings of the test-case table, in order.
pub const COLUMNS: [&str; 8] = [
    "Test Case ID",
    "Test Scenario",
    "Test Case",
    "Pre-Condition",
    "Test Steps",
    "Expected Result",
    "Evidência",
    "Status",
];

/// Worksheet title used when the document had no `Feature:` line.
pub const DEFAULT_SHEET_TITLE: &str = "Casos de Teste";

/// Value of the "Reference Document" header field.
pub const REFERENCE_DOCUMENT: &str = "Feature File";

/// Project metadata shown above the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportHeader {
    /// "Project Name:" value.
    pub project_name: String,
    /// "Module Name:" value.
    pub module_name: String,
    /// "Reference Document:" value.
    pub reference_document: String,
    /// "Created by:" value.
    pub created_by: String,
}

impl ReportHeader {
    /// Build the header for a feature, naming both project and module after
    /// the feature title.
    ///
    /// # Examples
    ///
    /// ```
    /// use casebook_report::ReportHeader;
    ///
    /// let header = ReportHeader::for_feature("Farms", "QA team");
    /// assert_eq!(header.module_name, "Farms");
    /// assert_eq!(header.reference_document, "Feature File");
    /// ```
    #[must_use]
    pub fn for_feature(feature_title: &str, created_by: impl Into<String>) -> Self {
        Self {
            project_name: feature_title.to_owned(),
            module_name: feature_title.to_owned(),
            reference_document: REFERENCE_DOCUMENT.to_owned(),
            created_by: created_by.into(),
        }
    }

    /// Label/value pairs in display order.
    #[must_use]
    pub fn fields(&self) -> [(&'static str, &str); 4] {
        [
            ("Project Name:", &self.project_name),
            ("Module Name:", &self.module_name),
            ("Reference Document:", &self.reference_document),
            ("Created by:", &self.created_by),
        ]
    }
}

/// Highlighting applied to a row's Status cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusFlag {
    /// Status mentions `SUCESSO`.
    Success,
    /// Status mentions `FALHA`.
    Failure,
    /// Neither marker is present.
    Unflagged,
}

impl StatusFlag {
    /// Flag a status text, ignoring case. Success wins when both markers occur.
    ///
    /// # Examples
    ///
    /// ```
    /// use casebook_report::StatusFlag;
    ///
    /// assert_eq!(StatusFlag::from_status("sucesso"), StatusFlag::Success);
    /// assert_eq!(StatusFlag::from_status("FALHA no passo 2"), StatusFlag::Failure);
    /// assert_eq!(StatusFlag::from_status(""), StatusFlag::Unflagged);
    /// ```
    #[must_use]
    pub fn from_status(status: &str) -> Self {
        let upper = status.to_uppercase();
        if upper.contains("SUCESSO") {
            Self::Success
        } else if upper.contains("FALHA") {
            Self::Failure
        } else {
            Self::Unflagged
        }
    }
}

/// Rendered cells for one test case.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    /// Cell text in [`COLUMNS`] order.
    pub cells: [String; 8],
    /// Highlighting for the Status cell.
    pub status_flag: StatusFlag,
}

impl From<&TestCase> for ReportRow {
    fn from(case: &TestCase) -> Self {
        Self {
            cells: [
                case.id().to_owned(),
                case.scenario_name().to_owned(),
                case.title().to_owned(),
                plain_steps(case.pre_conditions()),
                numbered_steps(case.action_steps()),
                numbered_steps(case.expected_results()),
                case.evidence().to_owned(),
                case.status().to_owned(),
            ],
            status_flag: StatusFlag::from_status(case.status()),
        }
    }
}

/// Join steps one per line, keyword first, without numbering.
#[must_use]
pub fn plain_steps(steps: &[Step]) -> String {
    steps
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Join steps one per line as `"<n>. <Keyword> <text>"`, counting from one.
///
/// # Examples
///
/// ```
/// use casebook::{Step, StepKeyword};
/// use casebook_report::numbered_steps;
///
/// let steps = [
///     Step::new(StepKeyword::When, "I save"),
///     Step::new(StepKeyword::And, "I close"),
/// ];
/// assert_eq!(numbered_steps(&steps), "1. When I save\n2. And I close");
/// ```
#[must_use]
pub fn numbered_steps(steps: &[Step]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(i, step)| format!("{}. {step}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Read a rendered step cell back into steps.
///
/// `numbered` strips the `"<n>. "` prefix written by [`numbered_steps`].
/// Lines that do not start with a step keyword are skipped.
///
/// # Examples
///
/// ```
/// use casebook::StepKeyword;
/// use casebook_report::read_step_cell;
///
/// let steps = read_step_cell("1. Then it is saved\n2. But not sent", true);
/// assert_eq!(steps.len(), 2);
/// assert_eq!(steps[1].keyword(), StepKeyword::But);
/// assert_eq!(steps[1].text(), "not sent");
/// ```
#[must_use]
pub fn read_step_cell(cell: &str, numbered: bool) -> Vec<Step> {
    cell.lines()
        .filter_map(|line| {
            let line = if numbered {
                strip_number(line)?
            } else {
                line
            };
            let (keyword, text) = line.split_once(' ')?;
            let keyword: StepKeyword = keyword.parse().ok()?;
            Some(Step::new(keyword, text))
        })
        .collect()
}

fn strip_number(line: &str) -> Option<&str> {
    let (number, rest) = line.split_once(". ")?;
    number
        .chars()
        .all(|c| c.is_ascii_digit())
        .then_some(rest)
}

/// A complete report ready for a writer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTable {
    feature_title: String,
    header: ReportHeader,
    rows: Vec<ReportRow>,
}

impl ReportTable {
    /// Lay out a parsed feature under the given header.
    #[must_use]
    pub fn new(parsed: &ParsedFeature, header: ReportHeader) -> Self {
        Self {
            feature_title: parsed.feature_title().to_owned(),
            header,
            rows: parsed.test_cases().iter().map(ReportRow::from).collect(),
        }
    }

    /// Feature title, possibly empty.
    #[must_use]
    pub fn feature_title(&self) -> &str {
        &self.feature_title
    }

    /// Title for the worksheet: the feature title, or
    /// [`DEFAULT_SHEET_TITLE`] when there is none.
    #[must_use]
    pub fn sheet_title(&self) -> &str {
        if self.feature_title.is_empty() {
            DEFAULT_SHEET_TITLE
        } else {
            &self.feature_title
        }
    }

    /// Header region.
    #[must_use]
    pub fn header(&self) -> &ReportHeader {
        &self.header
    }

    /// Table rows, one per test case.
    #[must_use]
    pub fn rows(&self) -> &[ReportRow] {
        &self.rows
    }
}
