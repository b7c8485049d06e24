//! Error types for the aggregation engine.

use thiserror::Error;

use sellout_model::MappedField;

/// Errors from aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregateError {
    /// The column mapping has unbound fields. Raised before any row is
    /// scanned; the caller should re-prompt the mapping and retry.
    #[error("column mapping incomplete: missing {}", join_fields(.missing))]
    IncompleteMapping { missing: Vec<MappedField> },
}

fn join_fields(fields: &[MappedField]) -> String {
    fields
        .iter()
        .map(MappedField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
