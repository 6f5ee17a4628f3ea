//! XLSX writer for test-case reports.
//!
//! Rows 1 to 4 carry the header region, row 6 the column headings, and the
//! test cases start on row 7.

use std::path::Path;

use rust_xlsxwriter::{Color, Format, FormatAlign, FormatBorder, Workbook, Worksheet};
use tracing::debug;

use crate::error::ReportError;
use crate::layout::{COLUMNS, DEFAULT_SHEET_TITLE, ReportRow, ReportTable, StatusFlag};

const COLUMN_HEADER_ROW: u32 = 5;
const FIRST_DATA_ROW: u32 = 6;
const LAST_COLUMN: u16 = 7;
const COLUMN_WIDTHS: [u16; 8] = [15, 25, 35, 30, 40, 40, 30, 15];
const MAX_SHEET_NAME_CHARS: usize = 31;

const HEADER_FILL: u32 = 0x00_33_66;
const LABEL_FILL: u32 = 0xD9_E1_F2;
const SUCCESS_FILL: u32 = 0xC6_EF_CE;
const FAILURE_FILL: u32 = 0xFF_C7_CE;

struct Formats {
    label: Format,
    value: Format,
    column_header: Format,
    body: Format,
    success: Format,
    failure: Format,
}

impl Formats {
    fn new() -> Self {
        let bordered = Format::new().set_border(FormatBorder::Thin);
        let body = bordered
            .clone()
            .set_align(FormatAlign::Left)
            .set_align(FormatAlign::Top)
            .set_text_wrap();
        Self {
            label: bordered
                .clone()
                .set_bold()
                .set_font_color(Color::Black)
                .set_background_color(Color::RGB(LABEL_FILL)),
            value: bordered.clone(),
            column_header: bordered
                .set_bold()
                .set_font_color(Color::White)
                .set_background_color(Color::RGB(HEADER_FILL))
                .set_align(FormatAlign::Center)
                .set_align(FormatAlign::VerticalCenter)
                .set_text_wrap(),
            success: body.clone().set_background_color(Color::RGB(SUCCESS_FILL)),
            failure: body.clone().set_background_color(Color::RGB(FAILURE_FILL)),
            body,
        }
    }

    fn status(&self, flag: StatusFlag) -> &Format {
        match flag {
            StatusFlag::Success => &self.success,
            StatusFlag::Failure => &self.failure,
            StatusFlag::Unflagged => &self.body,
        }
    }
}

/// Render `table` as an XLSX workbook at `path`, replacing any existing file.
///
/// # Errors
///
/// Returns [`ReportError::Xlsx`] if a cell cannot be written or the workbook
/// cannot be saved.
pub fn write_workbook(table: &ReportTable, path: &Path) -> Result<(), ReportError> {
    let formats = Formats::new();
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(sheet_name(table.sheet_title()))?;

    write_header_region(worksheet, table, &formats)?;
    write_column_headers(worksheet, &formats)?;
    for (row, report_row) in (FIRST_DATA_ROW..).zip(table.rows()) {
        write_row(worksheet, row, report_row, &formats)?;
    }
    for (col, width) in (0u16..).zip(COLUMN_WIDTHS) {
        worksheet.set_column_width(col, width)?;
    }

    workbook.save(path)?;
    debug!(path = %path.display(), rows = table.rows().len(), "workbook saved");
    Ok(())
}

fn write_header_region(
    worksheet: &mut Worksheet,
    table: &ReportTable,
    formats: &Formats,
) -> Result<(), ReportError> {
    for (row, (label, value)) in (0u32..).zip(table.header().fields()) {
        worksheet.write_string_with_format(row, 0, label, &formats.label)?;
        worksheet.merge_range(row, 1, row, LAST_COLUMN, value, &formats.value)?;
    }
    Ok(())
}

fn write_column_headers(worksheet: &mut Worksheet, formats: &Formats) -> Result<(), ReportError> {
    for (col, title) in (0u16..).zip(COLUMNS) {
        worksheet.write_string_with_format(
            COLUMN_HEADER_ROW,
            col,
            title,
            &formats.column_header,
        )?;
    }
    Ok(())
}

fn write_row(
    worksheet: &mut Worksheet,
    row: u32,
    report_row: &ReportRow,
    formats: &Formats,
) -> Result<(), ReportError> {
    for (col, cell) in (0u16..).zip(&report_row.cells) {
        let format = if col == LAST_COLUMN {
            formats.status(report_row.status_flag)
        } else {
            &formats.body
        };
        worksheet.write_string_with_format(row, col, cell, format)?;
    }
    Ok(())
}

/// Make `title` acceptable as an XLSX worksheet name.
///
/// The characters `[]:*?/\` become `_`, surrounding apostrophes are dropped,
/// and the result is cut to 31 characters. Names that end up empty, or that
/// collide with Excel's reserved `History` sheet, fall back to the default
/// title.
///
/// # Examples
///
/// ```
/// use casebook_report::sheet_name;
///
/// assert_eq!(sheet_name("Login: happy/sad paths"), "Login_ happy_sad paths");
/// assert_eq!(sheet_name(""), "Casos de Teste");
/// ```
#[must_use]
pub fn sheet_name(title: &str) -> String {
    let cleaned: String = title
        .chars()
        .map(|c| match c {
            '[' | ']' | ':' | '*' | '?' | '/' | '\\' => '_',
            other => other,
        })
        .collect();
    let name: String = cleaned
        .trim_matches('\'')
        .chars()
        .take(MAX_SHEET_NAME_CHARS)
        .collect();
    if name.trim().is_empty() || name.eq_ignore_ascii_case("history") {
        DEFAULT_SHEET_TITLE.to_owned()
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Farm registry", "Farm registry")]
    #[case("a[b]c*d?e", "a_b_c_d_e")]
    #[case("'quoted'", "quoted")]
    #[case("'''", DEFAULT_SHEET_TITLE)]
    #[case("History", DEFAULT_SHEET_TITLE)]
    #[case(
        "Cadastro de fazendas com validação completa",
        "Cadastro de fazendas com valida"
    )]
    fn sanitises_sheet_names(#[case] title: &str, #[case] expected: &str) {
        assert_eq!(sheet_name(title), expected);
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let title = "ç".repeat(40);
        assert_eq!(sheet_name(&title).chars().count(), MAX_SHEET_NAME_CHARS);
    }

    #[test]
    fn status_format_follows_flag() {
        let formats = Formats::new();
        assert!(std::ptr::eq(
            formats.status(StatusFlag::Unflagged),
            &formats.body
        ));
        assert!(std::ptr::eq(
            formats.status(StatusFlag::Failure),
            &formats.failure
        ));
    }
}
