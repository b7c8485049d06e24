//! Grouping and rollup of raw sales rows.

use std::collections::BTreeMap;

use tracing::debug;

use sellout_model::{
    AggregationResult, CellValue, ClassSummary, ColumnMapping, GroupResult, SalesRecord,
    SizeMetrics, SourceRow,
};

use crate::error::AggregateError;
use crate::sizes::order_sizes;

/// Aggregates raw rows under a complete column mapping.
///
/// Fails before scanning any row when the mapping has unbound fields.
/// Row-level dirt is normalized, never reported: unparseable or missing
/// quantities count as zero, and a row with an empty grouping value is
/// excluded from that grouping level only.
pub fn aggregate(
    rows: &[SourceRow],
    mapping: &ColumnMapping,
) -> Result<AggregationResult, AggregateError> {
    let missing = mapping.missing_fields();
    if !missing.is_empty() {
        return Err(AggregateError::IncompleteMapping { missing });
    }

    let mut accumulators: BTreeMap<String, BTreeMap<String, ClassAccumulator>> = BTreeMap::new();
    for row in rows {
        let record = normalize_row(row, mapping);
        let Some(label) = record.group_label() else {
            continue;
        };
        let group = accumulators.entry(label).or_default();
        if record.merchandising_class.is_empty() {
            continue;
        }
        group
            .entry(record.merchandising_class.clone())
            .or_default()
            .add(&record);
    }

    let groups: BTreeMap<String, GroupResult> = accumulators
        .into_iter()
        .map(|(label, classes)| {
            let classes = classes
                .into_iter()
                .map(|(name, acc)| (name, acc.finish()))
                .collect();
            (label, GroupResult { classes })
        })
        .collect();

    debug!(rows = rows.len(), groups = groups.len(), "aggregated sales rows");
    Ok(AggregationResult { groups })
}

/// Running sums for one (group, class) cell, keeping the first-seen size
/// sequence so unknown size tokens order deterministically.
#[derive(Default)]
struct ClassAccumulator {
    order_qty_total: f64,
    sold_qty_total: f64,
    size_order: Vec<String>,
    sizes: BTreeMap<String, SizeSums>,
}

#[derive(Default)]
struct SizeSums {
    order_qty: f64,
    sold_qty: f64,
}

impl ClassAccumulator {
    fn add(&mut self, record: &SalesRecord) {
        // Class totals include rows with no size code; only the per-size
        // breakdown excludes them.
        self.order_qty_total += record.order_qty;
        self.sold_qty_total += record.sold_qty;
        if record.size_code.is_empty() {
            return;
        }
        if !self.sizes.contains_key(&record.size_code) {
            self.size_order.push(record.size_code.clone());
        }
        let sums = self.sizes.entry(record.size_code.clone()).or_default();
        sums.order_qty += record.order_qty;
        sums.sold_qty += record.sold_qty;
    }

    fn finish(self) -> ClassSummary {
        let sizes = order_sizes(&self.size_order)
            .into_iter()
            .map(|size_code| {
                let sums = &self.sizes[&size_code];
                SizeMetrics {
                    order_qty: sums.order_qty,
                    sold_qty: sums.sold_qty,
                    sell_out_pct: percentage(sums.sold_qty, self.sold_qty_total),
                    sell_through_pct: percentage(sums.sold_qty, sums.order_qty),
                    size_code,
                }
            })
            .collect();
        ClassSummary {
            order_qty_total: self.order_qty_total,
            sold_qty_total: self.sold_qty_total,
            sizes,
        }
    }
}

/// `value / denominator * 100`, or 0 when the denominator is not positive.
fn percentage(value: f64, denominator: f64) -> f64 {
    if denominator > 0.0 {
        value / denominator * 100.0
    } else {
        0.0
    }
}

fn normalize_row(row: &SourceRow, mapping: &ColumnMapping) -> SalesRecord {
    SalesRecord {
        gender: text_value(row, &mapping.gender),
        line: text_value(row, &mapping.line),
        merchandising_class: text_value(row, &mapping.merchandising_class),
        size_code: text_value(row, &mapping.size_code),
        order_qty: quantity_value(row, &mapping.order_qty),
        sold_qty: quantity_value(row, &mapping.sold_qty),
    }
}

fn text_value(row: &SourceRow, column: &str) -> String {
    row.get(column).map(CellValue::to_text).unwrap_or_default()
}

fn quantity_value(row: &SourceRow, column: &str) -> f64 {
    match row.get(column) {
        Some(CellValue::Number(value)) if value.is_finite() => *value,
        Some(CellValue::Text(text)) => parse_quantity(text),
        _ => 0.0,
    }
}

/// Parses a quantity cell, tolerating thousands separators and stray
/// whitespace. Anything unparseable or non-finite counts as zero.
fn parse_quantity(raw: &str) -> f64 {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    let cleaned: String = trimmed
        .chars()
        .filter(|ch| !matches!(ch, ',' | ' ' | '\u{a0}'))
        .collect();
    match cleaned.parse::<f64>() {
        Ok(value) if value.is_finite() => value,
        _ => 0.0,
    }
}
