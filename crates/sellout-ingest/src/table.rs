//! CSV flat-table reading and column-hint derivation.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use csv::ReaderBuilder;
use tracing::debug;

use sellout_model::{CellValue, ColumnHint, SourceRow, SourceTable};

use crate::error::{IngestError, Result};

fn normalize_header(raw: &str) -> String {
    let trimmed = raw.trim().trim_matches('\u{feff}');
    let mut parts = trimmed.split_whitespace();
    let mut normalized = String::new();
    if let Some(first) = parts.next() {
        normalized.push_str(first);
        for part in parts {
            normalized.push(' ');
            normalized.push_str(part);
        }
    }
    normalized
}

fn normalize_cell(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn read_error(path: &Path, source: csv::Error) -> IngestError {
    let message = source.to_string();
    match source.into_kind() {
        csv::ErrorKind::Io(io_error) => IngestError::FileRead {
            path: path.to_path_buf(),
            source: io_error,
        },
        _ => IngestError::CsvParse {
            path: path.to_path_buf(),
            message,
        },
    }
}

/// Reads one flat CSV table.
///
/// The first record is the header row; fully blank data records are
/// skipped. Cells keep their text form (`Missing` when empty) — numeric
/// coercion is the engine's job.
pub fn read_source_table(path: &Path) -> Result<SourceTable> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(|source| read_error(path, source))?;

    let mut raw_rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|source| read_error(path, source))?;
        raw_rows.push(record.iter().map(normalize_cell).collect());
    }

    let Some((header_record, data_records)) = raw_rows.split_first() else {
        return Err(IngestError::EmptyTable {
            path: path.to_path_buf(),
        });
    };
    let headers: Vec<String> = header_record.iter().map(|v| normalize_header(v)).collect();
    if headers.iter().all(|header| header.is_empty()) {
        return Err(IngestError::NoColumns {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::with_capacity(data_records.len());
    for record in data_records {
        if record.iter().all(|value| value.is_empty()) {
            continue;
        }
        let mut row = SourceRow::new();
        for (idx, header) in headers.iter().enumerate() {
            if header.is_empty() {
                continue;
            }
            let value = record.get(idx).map(String::as_str).unwrap_or("");
            let cell = if value.is_empty() {
                CellValue::Missing
            } else {
                CellValue::Text(value.to_string())
            };
            row.insert(header.clone(), cell);
        }
        rows.push(row);
    }

    debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read source table"
    );
    Ok(SourceTable { headers, rows })
}

/// Derives per-column content hints for the mapping helper.
pub fn build_column_hints(table: &SourceTable) -> BTreeMap<String, ColumnHint> {
    let mut hints = BTreeMap::new();
    let row_count = table.rows.len();
    for header in &table.headers {
        if header.is_empty() {
            continue;
        }
        let mut non_null = 0usize;
        let mut numeric = 0usize;
        let mut uniques = BTreeSet::new();
        for row in &table.rows {
            let text = row.get(header).map(CellValue::to_text).unwrap_or_default();
            if text.is_empty() {
                continue;
            }
            non_null += 1;
            uniques.insert(text.clone());
            if text.parse::<f64>().is_ok() {
                numeric += 1;
            }
        }
        let null_ratio = if row_count == 0 {
            1.0
        } else {
            (row_count.saturating_sub(non_null)) as f64 / row_count as f64
        };
        let unique_ratio = if non_null == 0 {
            0.0
        } else {
            uniques.len() as f64 / non_null as f64
        };
        let is_numeric = non_null > 0 && numeric == non_null;
        hints.insert(
            header.clone(),
            ColumnHint {
                is_numeric,
                unique_ratio,
                null_ratio,
            },
        );
    }
    hints
}
