//! Column mapping types binding raw source columns to semantic fields.

use serde::{Deserialize, Serialize};

use crate::field::MappedField;

/// Binding of the six semantic fields to raw column names.
///
/// An unset field holds the empty string. Aggregation refuses to run on an
/// incomplete mapping; use [`Self::missing_fields`] to drive a re-prompt.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    pub gender: String,
    pub line: String,
    pub merchandising_class: String,
    pub size_code: String,
    pub order_qty: String,
    pub sold_qty: String,
}

impl ColumnMapping {
    /// The raw column name bound to `field`, possibly empty.
    pub fn column_for(&self, field: MappedField) -> &str {
        match field {
            MappedField::Gender => &self.gender,
            MappedField::Line => &self.line,
            MappedField::MerchandisingClass => &self.merchandising_class,
            MappedField::SizeCode => &self.size_code,
            MappedField::OrderQty => &self.order_qty,
            MappedField::SoldQty => &self.sold_qty,
        }
    }

    pub fn set(&mut self, field: MappedField, column: impl Into<String>) {
        let slot = match field {
            MappedField::Gender => &mut self.gender,
            MappedField::Line => &mut self.line,
            MappedField::MerchandisingClass => &mut self.merchandising_class,
            MappedField::SizeCode => &mut self.size_code,
            MappedField::OrderQty => &mut self.order_qty,
            MappedField::SoldQty => &mut self.sold_qty,
        };
        *slot = column.into();
    }

    /// Fields with no column bound, in canonical order.
    pub fn missing_fields(&self) -> Vec<MappedField> {
        MappedField::ALL
            .into_iter()
            .filter(|field| self.column_for(*field).trim().is_empty())
            .collect()
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Hints about a source column's contents.
///
/// Derived by ingestion and consumed by the mapping helper to adjust match
/// confidence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColumnHint {
    /// True if every non-empty value in the column parses as a number.
    pub is_numeric: bool,
    /// Ratio of unique values to non-empty values (0.0 to 1.0).
    pub unique_ratio: f64,
    /// Ratio of empty values to total rows (0.0 to 1.0).
    pub null_ratio: f64,
}
