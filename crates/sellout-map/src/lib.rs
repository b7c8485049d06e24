//! Header-to-field resolution.
//!
//! Proposes a [`ColumnMapping`] for a raw header set by matching each
//! header against per-field synonym lists: exact match first, then
//! substring, then fuzzy similarity. The proposal is advisory — the caller
//! confirms or corrects it, and the aggregation engine enforces
//! completeness.

mod engine;
mod synonyms;

pub use engine::{
    DEFAULT_MIN_CONFIDENCE, FieldMatch, MappingProposal, suggest_mapping, suggest_mapping_with,
};
