//! Sell-out split report generation.
//!
//! Consumes an [`AggregationResult`] and produces a multi-sheet xlsx
//! workbook: one sheet per (Gender, Line) group, one block per
//! merchandising class, with literal computed cells plus live formulas
//! that re-derive each size's split from the editable total in the class's
//! totals row.

pub mod error;
pub mod layout;

use std::collections::BTreeSet;

use rust_xlsxwriter::{Format, Workbook, Worksheet};
use tracing::debug;

use sellout_model::AggregationResult;

pub use error::ReportError;
pub use layout::{Cell, COLUMN_HEADERS, SheetGrid, plan_sheet};

/// Default artifact file name.
pub const DEFAULT_REPORT_FILE_NAME: &str = "Report_Gender_Line.xlsx";

/// Spreadsheet ceiling on sheet-name length.
pub const SHEET_NAME_MAX: usize = 31;

/// Report generation options.
///
/// The defaults use the comma-decimal percent rendering of the Italian
/// merchandising exports this feeds; override the format codes for other
/// locales, keeping two decimals.
#[derive(Debug, Clone)]
pub struct ReportOptions {
    /// Number format for two-decimal percent cells.
    pub percent_format: String,
    /// Number format for the literal 100% cell in totals rows.
    pub total_percent_format: String,
    /// Editable default total seeded into each class's totals row; the
    /// per-size split formulas reference it.
    pub seed_quantity: f64,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self {
            percent_format: "0,00%".to_string(),
            total_percent_format: "0%".to_string(),
            seed_quantity: 100.0,
        }
    }
}

/// Generates the workbook and returns its serialized bytes.
///
/// Sheets are appended in the result's group order. Fails with
/// [`ReportError::EmptyResult`] when the result has no groups.
pub fn generate(result: &AggregationResult, options: &ReportOptions) -> Result<Vec<u8>, ReportError> {
    if result.is_empty() {
        return Err(ReportError::EmptyResult);
    }

    let mut workbook = Workbook::new();
    let percent = Format::new().set_num_format(options.percent_format.as_str());
    let percent_whole = Format::new().set_num_format(options.total_percent_format.as_str());

    let mut used_names: BTreeSet<String> = BTreeSet::new();
    for (label, group) in &result.groups {
        let grid = plan_sheet(label, group, options.seed_quantity);
        let name = unique_sheet_name(label, &mut used_names);
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(&name)?;
        write_grid(worksheet, &grid, &percent, &percent_whole)?;
    }

    let bytes = workbook.save_to_buffer()?;
    debug!(sheets = used_names.len(), bytes = bytes.len(), "generated report");
    Ok(bytes)
}

/// Generates the workbook and writes it to `path`.
pub fn write_report(
    result: &AggregationResult,
    options: &ReportOptions,
    path: &std::path::Path,
) -> Result<(), ReportError> {
    let bytes = generate(result, options)?;
    std::fs::write(path, bytes).map_err(|source| ReportError::Xlsx(source.into()))
}

fn write_grid(
    worksheet: &mut Worksheet,
    grid: &SheetGrid,
    percent: &Format,
    percent_whole: &Format,
) -> Result<(), rust_xlsxwriter::XlsxError> {
    for (row_idx, row) in grid.rows.iter().enumerate() {
        let row_num = row_idx as u32;
        for (col_idx, cell) in row.iter().enumerate() {
            let col_num = col_idx as u16;
            match cell {
                Cell::Text(text) => {
                    worksheet.write_string(row_num, col_num, text.as_str())?;
                }
                Cell::Number(value) => {
                    worksheet.write_number(row_num, col_num, *value)?;
                }
                Cell::Percent(value) => {
                    worksheet.write_number_with_format(row_num, col_num, *value, percent)?;
                }
                Cell::PercentWhole(value) => {
                    worksheet.write_number_with_format(row_num, col_num, *value, percent_whole)?;
                }
                Cell::Formula(formula) => {
                    worksheet.write_formula(row_num, col_num, formula.as_str())?;
                }
            }
        }
    }
    Ok(())
}

/// Truncates `label` to the sheet-name ceiling and disambiguates
/// truncation collisions with a `__N` suffix instead of silently
/// overwriting a sibling sheet.
fn unique_sheet_name(label: &str, existing: &mut BTreeSet<String>) -> String {
    let base: String = label.chars().take(SHEET_NAME_MAX).collect();
    if existing.insert(base.clone()) {
        return base;
    }

    let stem: String = label
        .chars()
        .take(usize::max(1, SHEET_NAME_MAX - 3))
        .collect();
    let mut idx = 2usize;
    loop {
        let candidate: String = format!("{stem}__{idx}")
            .chars()
            .take(SHEET_NAME_MAX)
            .collect();
        if existing.insert(candidate.clone()) {
            return candidate;
        }
        idx += 1;
    }
}
