//! Matching engine for header resolution.

use std::cmp::Ordering;
use std::collections::{BTreeMap, BTreeSet};

use rapidfuzz::distance::jaro_winkler::similarity as jaro_similarity;
use serde::{Deserialize, Serialize};

use sellout_model::{ColumnHint, ColumnMapping, MappedField};

use crate::synonyms::synonyms;

/// Minimum confidence for a fuzzy match to be proposed at all.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.6;

/// Confidence assigned when a synonym appears inside a longer header.
const SUBSTRING_CONFIDENCE: f64 = 0.9;
/// Penalty when a quantity field is matched to a non-numeric column.
const NUMERIC_MISMATCH_PENALTY: f64 = 0.6;
/// Penalty when a text field is matched to a fully numeric column.
const TEXT_MISMATCH_PENALTY: f64 = 0.7;
/// Penalty for columns that are mostly empty.
const NULL_HEAVY_PENALTY: f64 = 0.9;
const NULL_RATIO_MAX: f64 = 0.5;

/// One proposed field-to-column binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldMatch {
    pub field: MappedField,
    pub column: String,
    /// Match confidence (0.0 to 1.0); 1.0 means an exact synonym hit.
    pub confidence: f32,
}

/// Advisory result of header resolution.
///
/// `mapping` carries the bindings of the matched fields; `unresolved`
/// fields keep their empty binding and must be filled in by the caller
/// before aggregation will accept the mapping.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MappingProposal {
    pub mapping: ColumnMapping,
    pub matches: Vec<FieldMatch>,
    pub unresolved: Vec<MappedField>,
}

/// Proposes a mapping with the default confidence floor.
pub fn suggest_mapping(
    headers: &[String],
    hints: &BTreeMap<String, ColumnHint>,
) -> MappingProposal {
    suggest_mapping_with(headers, hints, DEFAULT_MIN_CONFIDENCE)
}

/// Proposes a mapping, keeping only candidates at or above
/// `min_confidence`. Assignment is one-to-one greedy by descending
/// confidence: each field takes at most one column and each column serves
/// at most one field.
pub fn suggest_mapping_with(
    headers: &[String],
    hints: &BTreeMap<String, ColumnHint>,
    min_confidence: f32,
) -> MappingProposal {
    let mut candidates: Vec<Candidate> = Vec::new();
    for (field_idx, field) in MappedField::ALL.into_iter().enumerate() {
        for header in headers {
            if header.trim().is_empty() {
                continue;
            }
            let confidence = score_candidate(field, header, hints.get(header));
            if confidence >= min_confidence {
                candidates.push(Candidate {
                    field,
                    field_idx,
                    column: header.clone(),
                    confidence,
                });
            }
        }
    }

    candidates.sort_by(|a, b| {
        b.confidence
            .partial_cmp(&a.confidence)
            .unwrap_or(Ordering::Equal)
            .then(a.field_idx.cmp(&b.field_idx))
            .then(a.column.cmp(&b.column))
    });

    let mut mapping = ColumnMapping::default();
    let mut matches: Vec<FieldMatch> = Vec::new();
    let mut assigned_fields: BTreeSet<MappedField> = BTreeSet::new();
    let mut assigned_columns: BTreeSet<String> = BTreeSet::new();
    for candidate in candidates {
        if assigned_fields.contains(&candidate.field)
            || assigned_columns.contains(&candidate.column)
        {
            continue;
        }
        assigned_fields.insert(candidate.field);
        assigned_columns.insert(candidate.column.clone());
        mapping.set(candidate.field, candidate.column.clone());
        matches.push(FieldMatch {
            field: candidate.field,
            column: candidate.column,
            confidence: candidate.confidence,
        });
    }

    matches.sort_by_key(|m| field_index(m.field));
    let unresolved = mapping.missing_fields();
    MappingProposal {
        mapping,
        matches,
        unresolved,
    }
}

struct Candidate {
    field: MappedField,
    field_idx: usize,
    column: String,
    confidence: f32,
}

fn field_index(field: MappedField) -> usize {
    MappedField::ALL
        .iter()
        .position(|f| *f == field)
        .unwrap_or(usize::MAX)
}

fn score_candidate(field: MappedField, column: &str, hint: Option<&ColumnHint>) -> f32 {
    let column_norm = normalize_text(column);
    let mut best: f64 = 0.0;
    for synonym in synonyms(field) {
        let synonym_norm = normalize_text(synonym);
        if column_norm == synonym_norm {
            // Exact synonym hits are authoritative; hints never demote them.
            return 1.0;
        }
        let score = if column_norm.contains(&synonym_norm) {
            SUBSTRING_CONFIDENCE
        } else {
            jaro_similarity(column_norm.chars(), synonym_norm.chars())
        };
        best = best.max(score);
    }
    if let Some(hint) = hint {
        best = apply_hint(field, hint, best);
    }
    best as f32
}

fn apply_hint(field: MappedField, hint: &ColumnHint, score: f64) -> f64 {
    let mut adjusted = score;
    if field.is_quantity() && !hint.is_numeric {
        adjusted *= NUMERIC_MISMATCH_PENALTY;
    }
    // Size codes are legitimately numeric in many ranges; only the other
    // text fields get the numeric-column penalty.
    let text_field = matches!(
        field,
        MappedField::Gender | MappedField::Line | MappedField::MerchandisingClass
    );
    if text_field && hint.is_numeric {
        adjusted *= TEXT_MISMATCH_PENALTY;
    }
    if hint.null_ratio > NULL_RATIO_MAX {
        adjusted *= NULL_HEAVY_PENALTY;
    }
    adjusted
}

/// Lowercases and collapses separators so `"Cod_Taglia"` and
/// `"cod taglia"` compare equal.
fn normalize_text(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .replace(['_', '-', '.', '/', '\\'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}
