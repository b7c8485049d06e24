//! Aggregated result types, nested size → class → group → run.
//!
//! All types here are value-only: the engine assembles them bottom-up and
//! hands the finished [`AggregationResult`] to the caller, which never
//! mutates it. Every run recomputes the whole structure from its inputs.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Per-size quantities and percentages within one merchandising class.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeMetrics {
    pub size_code: String,
    /// Sum of ordered quantity over the class rows carrying this size.
    pub order_qty: f64,
    /// Sum of sold quantity over the class rows carrying this size.
    pub sold_qty: f64,
    /// This size's share of the class sold total, in percent. 0 when the
    /// class sold nothing.
    pub sell_out_pct: f64,
    /// Sold over ordered for this size, in percent. 0 when nothing was
    /// ordered in this size.
    pub sell_through_pct: f64,
}

impl SizeMetrics {
    /// Proposed allocation of `total_qty` to this size, proportional to its
    /// sell-out share. Mirrors the formula cells in the generated report.
    pub fn split_for(&self, total_qty: f64) -> f64 {
        total_qty * self.sell_out_pct / 100.0
    }
}

/// Rollup of one merchandising class within a group.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Ordered quantity summed over every row of the class, including rows
    /// with no size code.
    pub order_qty_total: f64,
    /// Sold quantity summed over every row of the class.
    pub sold_qty_total: f64,
    /// Per-size metrics in report order (size ordering applied by the
    /// engine); rows with no size code have no entry here.
    pub sizes: Vec<SizeMetrics>,
}

impl ClassSummary {
    /// Looks up the metrics for one size code.
    pub fn metrics(&self, size_code: &str) -> Option<&SizeMetrics> {
        self.sizes.iter().find(|m| m.size_code == size_code)
    }

    /// Class-level sell-through: sold total over order total, in percent.
    /// 0 unless both totals are positive.
    pub fn sell_through_pct(&self) -> f64 {
        if self.sold_qty_total > 0.0 && self.order_qty_total > 0.0 {
            self.sold_qty_total / self.order_qty_total * 100.0
        } else {
            0.0
        }
    }
}

/// All merchandising classes of one (Gender, Line) group, keyed by class
/// name; iteration order is the lexicographic class order of the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroupResult {
    pub classes: BTreeMap<String, ClassSummary>,
}

impl GroupResult {
    pub fn class_names(&self) -> impl Iterator<Item = &str> {
        self.classes.keys().map(String::as_str)
    }
}

/// Top-level aggregation output, keyed by `"<gender> - <line>"` label;
/// iteration order is the lexicographic group order of the report.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub groups: BTreeMap<String, GroupResult>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn group_labels(&self) -> impl Iterator<Item = &str> {
        self.groups.keys().map(String::as_str)
    }

    pub fn group(&self, label: &str) -> Option<&GroupResult> {
        self.groups.get(label)
    }
}
