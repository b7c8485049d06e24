//! Sheet layout planning.
//!
//! Builds the per-sheet cell grid for one (Gender, Line) group without
//! touching the xlsx library, so the block structure and the formula
//! addressing stay testable as plain values. Formula cells reference the
//! totals row of their own class block; the row arithmetic lives in
//! [`cell_ref`] and nowhere else.

use sellout_model::{GroupResult, SizeMetrics};

/// Table header of every class block.
pub const COLUMN_HEADERS: [&str; 6] = [
    "Size Code",
    "ORDER QTY",
    "SOLD QTY",
    "SELL-OUT % by Size",
    "S/T %",
    "Proposta Split",
];

/// 0-based column of the sell-out percent cells (column D).
const SELL_OUT_COL: usize = 3;
/// 0-based column of the split cells (column F).
const SPLIT_COL: usize = 5;

/// One planned cell. Percent variants carry fractions (0.25 for 25%); the
/// writer picks the number format.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    /// Fraction rendered with the two-decimal percent format.
    Percent(f64),
    /// Fraction rendered with the whole-number percent format (the literal
    /// 100% of a totals row).
    PercentWhole(f64),
    /// A1-style formula, without a leading `=`.
    Formula(String),
}

/// Planned grid for one sheet. `label` is the untruncated group label; the
/// writer derives the final sheet name from it.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetGrid {
    pub label: String,
    pub rows: Vec<Vec<Cell>>,
}

/// A1-style reference for a 0-based column and a 1-based row.
fn cell_ref(col: usize, row: usize) -> String {
    debug_assert!(col < 26);
    format!("{}{row}", (b'A' + col as u8) as char)
}

/// Plans the sheet for one group: per class, a title row, a blank row, the
/// table header, one row per size, the totals row seeded with
/// `seed_quantity`, and two blank rows before the next class.
pub fn plan_sheet(label: &str, group: &GroupResult, seed_quantity: f64) -> SheetGrid {
    let mut rows: Vec<Vec<Cell>> = Vec::new();
    for (class_name, summary) in &group.classes {
        rows.push(vec![Cell::Text(format!("Merchandising Class: {class_name}"))]);
        rows.push(Vec::new());
        rows.push(
            COLUMN_HEADERS
                .iter()
                .map(|header| Cell::Text((*header).to_string()))
                .collect(),
        );

        // 1-based row the totals row will land on, given the size rows
        // still to come.
        let total_row = rows.len() + summary.sizes.len() + 1;
        for metrics in &summary.sizes {
            let row = rows.len() + 1;
            rows.push(size_row(metrics, row, total_row));
        }

        rows.push(vec![
            Cell::Text("TOTALE".to_string()),
            Cell::Number(summary.order_qty_total),
            Cell::Number(summary.sold_qty_total),
            Cell::PercentWhole(1.0),
            Cell::Percent(summary.sell_through_pct() / 100.0),
            Cell::Number(seed_quantity),
        ]);
        rows.push(Vec::new());
        rows.push(Vec::new());
    }
    SheetGrid {
        label: label.to_string(),
        rows,
    }
}

/// One size row. The split formula multiplies the editable total in the
/// class's totals row by this row's sell-out fraction, so edits to that
/// one cell re-derive every size's split.
fn size_row(metrics: &SizeMetrics, row: usize, total_row: usize) -> Vec<Cell> {
    vec![
        Cell::Text(metrics.size_code.clone()),
        Cell::Number(metrics.order_qty),
        Cell::Number(metrics.sold_qty),
        Cell::Percent(metrics.sell_out_pct / 100.0),
        Cell::Percent(metrics.sell_through_pct / 100.0),
        Cell::Formula(format!(
            "{}*{}",
            cell_ref(SPLIT_COL, total_row),
            cell_ref(SELL_OUT_COL, row)
        )),
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use sellout_model::{ClassSummary, GroupResult};

    use super::*;

    fn tops_group() -> GroupResult {
        let mut classes = BTreeMap::new();
        classes.insert(
            "Tops".to_string(),
            ClassSummary {
                order_qty_total: 30.0,
                sold_qty_total: 20.0,
                sizes: vec![
                    SizeMetrics {
                        size_code: "S".to_string(),
                        order_qty: 10.0,
                        sold_qty: 5.0,
                        sell_out_pct: 25.0,
                        sell_through_pct: 50.0,
                    },
                    SizeMetrics {
                        size_code: "M".to_string(),
                        order_qty: 20.0,
                        sold_qty: 15.0,
                        sell_out_pct: 75.0,
                        sell_through_pct: 75.0,
                    },
                ],
            },
        );
        GroupResult { classes }
    }

    #[test]
    fn cell_ref_is_one_based_a1_style() {
        assert_eq!(cell_ref(0, 1), "A1");
        assert_eq!(cell_ref(3, 4), "D4");
        assert_eq!(cell_ref(5, 6), "F6");
    }

    #[test]
    fn block_layout_matches_the_report_shape() {
        let grid = plan_sheet("M - Casual", &tops_group(), 100.0);
        assert_eq!(grid.rows.len(), 8);

        assert_eq!(
            grid.rows[0],
            vec![Cell::Text("Merchandising Class: Tops".to_string())]
        );
        assert!(grid.rows[1].is_empty());
        assert_eq!(grid.rows[2].len(), 6);
        assert_eq!(grid.rows[2][0], Cell::Text("Size Code".to_string()));
        assert!(grid.rows[6].is_empty());
        assert!(grid.rows[7].is_empty());
    }

    #[test]
    fn split_formulas_reference_the_totals_row() {
        let grid = plan_sheet("M - Casual", &tops_group(), 100.0);

        assert_eq!(grid.rows[3][5], Cell::Formula("F6*D4".to_string()));
        assert_eq!(grid.rows[4][5], Cell::Formula("F6*D5".to_string()));
        // The referenced seed lives in the totals row, split column.
        assert_eq!(grid.rows[5][5], Cell::Number(100.0));
    }

    #[test]
    fn percent_cells_hold_fractions() {
        let grid = plan_sheet("M - Casual", &tops_group(), 100.0);
        assert_eq!(grid.rows[3][3], Cell::Percent(0.25));
        assert_eq!(grid.rows[4][3], Cell::Percent(0.75));
        assert_eq!(grid.rows[5][3], Cell::PercentWhole(1.0));
        // Class sell-through 20/30.
        let Cell::Percent(class_st) = &grid.rows[5][4] else {
            panic!("expected percent cell");
        };
        assert!((class_st - 20.0 / 30.0).abs() < 1e-12);
    }

    #[test]
    fn second_class_block_offsets_its_formulas() {
        let mut group = tops_group();
        group.classes.insert(
            "Bottoms".to_string(),
            ClassSummary {
                order_qty_total: 5.0,
                sold_qty_total: 5.0,
                sizes: vec![SizeMetrics {
                    size_code: "L".to_string(),
                    order_qty: 5.0,
                    sold_qty: 5.0,
                    sell_out_pct: 100.0,
                    sell_through_pct: 100.0,
                }],
            },
        );
        let grid = plan_sheet("M - Casual", &group, 100.0);

        // "Bottoms" sorts first: title 1, blank 2, header 3, L 4, total 5,
        // two blanks; "Tops" header lands on row 10, sizes on 11/12.
        assert_eq!(grid.rows[3][5], Cell::Formula("F5*D4".to_string()));
        assert_eq!(grid.rows[10][5], Cell::Formula("F13*D11".to_string()));
        assert_eq!(grid.rows[11][5], Cell::Formula("F13*D12".to_string()));
    }

    #[test]
    fn empty_group_plans_an_empty_sheet() {
        let grid = plan_sheet("M - Casual", &GroupResult::default(), 100.0);
        assert!(grid.rows.is_empty());
    }
}
