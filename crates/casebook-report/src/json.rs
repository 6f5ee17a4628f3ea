//! JSON writer for test-case reports.
//!
//! The document mirrors the spreadsheet: the header fields, the column
//! headings, and one object per row keyed by column, plus the lowercase status
//! flag so consumers need not re-derive it.

use std::io::Write;

use serde::Serialize;

use crate::error::ReportError;
use crate::layout::{COLUMNS, ReportHeader, ReportRow, ReportTable, StatusFlag};

#[derive(Serialize)]
struct JsonReport<'a> {
    sheet: &'a str,
    header: JsonHeader<'a>,
    columns: &'static [&'static str],
    rows: Vec<JsonRow<'a>>,
}

#[derive(Serialize)]
struct JsonHeader<'a> {
    project_name: &'a str,
    module_name: &'a str,
    reference_document: &'a str,
    created_by: &'a str,
}

#[derive(Serialize)]
struct JsonRow<'a> {
    test_case_id: &'a str,
    test_scenario: &'a str,
    test_case: &'a str,
    pre_condition: &'a str,
    test_steps: &'a str,
    expected_result: &'a str,
    evidence: &'a str,
    status: &'a str,
    status_flag: StatusFlag,
}

impl<'a> From<&'a ReportHeader> for JsonHeader<'a> {
    fn from(header: &'a ReportHeader) -> Self {
        Self {
            project_name: &header.project_name,
            module_name: &header.module_name,
            reference_document: &header.reference_document,
            created_by: &header.created_by,
        }
    }
}

impl<'a> From<&'a ReportRow> for JsonRow<'a> {
    fn from(row: &'a ReportRow) -> Self {
        let [
            test_case_id,
            test_scenario,
            test_case,
            pre_condition,
            test_steps,
            expected_result,
            evidence,
            status,
        ] = &row.cells;
        Self {
            test_case_id,
            test_scenario,
            test_case,
            pre_condition,
            test_steps,
            expected_result,
            evidence,
            status,
            status_flag: row.status_flag,
        }
    }
}

impl<'a> From<&'a ReportTable> for JsonReport<'a> {
    fn from(table: &'a ReportTable) -> Self {
        Self {
            sheet: table.sheet_title(),
            header: JsonHeader::from(table.header()),
            columns: &COLUMNS,
            rows: table.rows().iter().map(JsonRow::from).collect(),
        }
    }
}

/// Serialise `table` as pretty-printed JSON into `writer`.
///
/// # Errors
///
/// Returns [`ReportError::Json`] when serialisation fails and
/// [`ReportError::Io`] when the trailing newline or flush fails.
pub fn write_json<W: Write>(mut writer: W, table: &ReportTable) -> Result<(), ReportError> {
    serde_json::to_writer_pretty(&mut writer, &JsonReport::from(table))?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
