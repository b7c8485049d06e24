use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One cell of a source row: string, number, or absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Number(f64),
    Missing,
}

impl CellValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Missing)
    }

    /// Text rendering of the cell. Integral numbers render without a
    /// fractional part so size codes like `42` keep their label form.
    pub fn to_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Number(value) if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e15 => {
                format!("{}", *value as i64)
            }
            Self::Number(value) => value.to_string(),
            Self::Missing => String::new(),
        }
    }
}

/// One externally supplied row, keyed by raw column name.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceRow {
    pub cells: BTreeMap<String, CellValue>,
}

impl SourceRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, column: impl Into<String>, value: CellValue) {
        self.cells.insert(column.into(), value);
    }

    /// Builder-style insert, convenient when constructing rows inline.
    pub fn with(mut self, column: impl Into<String>, value: CellValue) -> Self {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&CellValue> {
        self.cells.get(column)
    }
}

/// One flat source table: ordered raw headers plus data rows.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceTable {
    pub headers: Vec<String>,
    pub rows: Vec<SourceRow>,
}

/// A source row normalized against a complete column mapping.
///
/// Grouping fields are plain strings (possibly empty; the engine skips the
/// row at the affected grouping level) and quantities are already coerced
/// to finite numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalesRecord {
    pub gender: String,
    pub line: String,
    pub merchandising_class: String,
    pub size_code: String,
    pub order_qty: f64,
    pub sold_qty: f64,
}

impl SalesRecord {
    /// The `"<gender> - <line>"` group label, or `None` when either half is
    /// empty and the row does not belong to any group.
    pub fn group_label(&self) -> Option<String> {
        if self.gender.is_empty() || self.line.is_empty() {
            return None;
        }
        Some(format!("{} - {}", self.gender, self.line))
    }
}
