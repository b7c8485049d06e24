use sellout_core::{AggregateError, aggregate};
use sellout_model::{CellValue, ColumnMapping, MappedField, SourceRow};

fn full_mapping() -> ColumnMapping {
    ColumnMapping {
        gender: "Gender".to_string(),
        line: "Line".to_string(),
        merchandising_class: "Merch Class".to_string(),
        size_code: "Size Code".to_string(),
        order_qty: "ORDER QTY".to_string(),
        sold_qty: "SOLD QTY".to_string(),
    }
}

fn row(gender: &str, line: &str, class: &str, size: &str, order: f64, sold: f64) -> SourceRow {
    SourceRow::new()
        .with("Gender", CellValue::Text(gender.to_string()))
        .with("Line", CellValue::Text(line.to_string()))
        .with("Merch Class", CellValue::Text(class.to_string()))
        .with("Size Code", CellValue::Text(size.to_string()))
        .with("ORDER QTY", CellValue::Number(order))
        .with("SOLD QTY", CellValue::Number(sold))
}

#[test]
fn aggregates_the_casual_tops_scenario() {
    let rows = vec![
        row("M", "Casual", "Tops", "S", 10.0, 5.0),
        row("M", "Casual", "Tops", "M", 20.0, 15.0),
    ];
    let result = aggregate(&rows, &full_mapping()).expect("aggregate");

    assert_eq!(result.group_labels().collect::<Vec<_>>(), vec!["M - Casual"]);
    let group = result.group("M - Casual").expect("group");
    assert_eq!(group.class_names().collect::<Vec<_>>(), vec!["Tops"]);

    let tops = &group.classes["Tops"];
    assert_eq!(tops.order_qty_total, 30.0);
    assert_eq!(tops.sold_qty_total, 20.0);

    let small = tops.metrics("S").expect("size S");
    assert_eq!(small.sell_out_pct, 25.0);
    assert_eq!(small.sell_through_pct, 50.0);

    let medium = tops.metrics("M").expect("size M");
    assert_eq!(medium.sell_out_pct, 75.0);
    assert_eq!(medium.sell_through_pct, 75.0);
}

#[test]
fn size_rows_follow_size_order_not_encounter_order() {
    let rows = vec![
        row("M", "Casual", "Tops", "10", 1.0, 1.0),
        row("M", "Casual", "Tops", "XL", 1.0, 1.0),
        row("M", "Casual", "Tops", "S", 1.0, 1.0),
        row("M", "Casual", "Tops", "2", 1.0, 1.0),
    ];
    let result = aggregate(&rows, &full_mapping()).expect("aggregate");
    let tops = &result.group("M - Casual").unwrap().classes["Tops"];
    let sizes: Vec<&str> = tops.sizes.iter().map(|m| m.size_code.as_str()).collect();
    assert_eq!(sizes, vec!["S", "XL", "2", "10"]);
}

#[test]
fn class_totals_include_rows_without_size_code() {
    let rows = vec![
        row("M", "Casual", "Tops", "S", 10.0, 5.0),
        row("M", "Casual", "Tops", "M", 20.0, 15.0),
        row("M", "Casual", "Tops", "", 5.0, 5.0),
    ];
    let result = aggregate(&rows, &full_mapping()).expect("aggregate");
    let tops = &result.group("M - Casual").unwrap().classes["Tops"];

    assert_eq!(tops.order_qty_total, 35.0);
    assert_eq!(tops.sold_qty_total, 25.0);
    assert_eq!(tops.sizes.len(), 2);
    // The sizeless row still dilutes every size's sell-out share.
    assert_eq!(tops.metrics("S").unwrap().sell_out_pct, 20.0);
    assert_eq!(tops.metrics("M").unwrap().sell_out_pct, 60.0);
}

#[test]
fn per_size_sums_match_class_totals_when_every_row_has_a_size() {
    let rows = vec![
        row("W", "Elegant", "Dresses", "40", 12.0, 4.0),
        row("W", "Elegant", "Dresses", "42", 8.0, 6.0),
        row("W", "Elegant", "Dresses", "40", 3.0, 2.0),
    ];
    let result = aggregate(&rows, &full_mapping()).expect("aggregate");
    let dresses = &result.group("W - Elegant").unwrap().classes["Dresses"];

    let order_sum: f64 = dresses.sizes.iter().map(|m| m.order_qty).sum();
    let sold_sum: f64 = dresses.sizes.iter().map(|m| m.sold_qty).sum();
    assert_eq!(order_sum, dresses.order_qty_total);
    assert_eq!(sold_sum, dresses.sold_qty_total);

    let sell_out_sum: f64 = dresses.sizes.iter().map(|m| m.sell_out_pct).sum();
    assert!((sell_out_sum - 100.0).abs() < 1e-9);
}

#[test]
fn groups_and_classes_are_lexicographically_ordered() {
    let rows = vec![
        row("W", "Elegant", "Shoes", "37", 1.0, 1.0),
        row("M", "Casual", "Tops", "S", 1.0, 1.0),
        row("M", "Casual", "Bottoms", "S", 1.0, 1.0),
    ];
    let result = aggregate(&rows, &full_mapping()).expect("aggregate");
    assert_eq!(
        result.group_labels().collect::<Vec<_>>(),
        vec!["M - Casual", "W - Elegant"]
    );
    assert_eq!(
        result
            .group("M - Casual")
            .unwrap()
            .class_names()
            .collect::<Vec<_>>(),
        vec!["Bottoms", "Tops"]
    );
}

#[test]
fn rows_missing_either_group_half_are_skipped() {
    let rows = vec![
        row("", "Casual", "Tops", "S", 10.0, 5.0),
        row("M", "", "Tops", "S", 10.0, 5.0),
    ];
    let result = aggregate(&rows, &full_mapping()).expect("aggregate");
    assert!(result.is_empty());
}

#[test]
fn rows_without_class_still_create_their_group() {
    let rows = vec![row("M", "Casual", "", "S", 10.0, 5.0)];
    let result = aggregate(&rows, &full_mapping()).expect("aggregate");
    let group = result.group("M - Casual").expect("group");
    assert_eq!(group.classes.len(), 0);
}

#[test]
fn zero_denominators_never_produce_nan() {
    let rows = vec![
        row("M", "Casual", "Tops", "S", 0.0, 0.0),
        row("M", "Casual", "Tops", "M", 0.0, 0.0),
    ];
    let result = aggregate(&rows, &full_mapping()).expect("aggregate");
    let tops = &result.group("M - Casual").unwrap().classes["Tops"];
    for metrics in &tops.sizes {
        assert_eq!(metrics.sell_out_pct, 0.0);
        assert_eq!(metrics.sell_through_pct, 0.0);
    }
    assert_eq!(tops.sell_through_pct(), 0.0);
}

#[test]
fn dirty_quantity_cells_count_as_zero() {
    let rows = vec![
        SourceRow::new()
            .with("Gender", CellValue::Text("M".to_string()))
            .with("Line", CellValue::Text("Casual".to_string()))
            .with("Merch Class", CellValue::Text("Tops".to_string()))
            .with("Size Code", CellValue::Text("S".to_string()))
            .with("ORDER QTY", CellValue::Text("ten".to_string()))
            .with("SOLD QTY", CellValue::Missing),
        row("M", "Casual", "Tops", "S", 4.0, 3.0),
    ];
    let result = aggregate(&rows, &full_mapping()).expect("aggregate");
    let tops = &result.group("M - Casual").unwrap().classes["Tops"];
    assert_eq!(tops.order_qty_total, 4.0);
    assert_eq!(tops.sold_qty_total, 3.0);
}

#[test]
fn incomplete_mapping_is_rejected_before_scanning() {
    let mut mapping = full_mapping();
    mapping.sold_qty.clear();
    let rows = vec![row("M", "Casual", "Tops", "S", 10.0, 5.0)];

    let err = aggregate(&rows, &mapping).expect_err("must reject");
    assert_eq!(
        err,
        AggregateError::IncompleteMapping {
            missing: vec![MappedField::SoldQty],
        }
    );
}

#[test]
fn no_matching_rows_yields_an_empty_result() {
    let result = aggregate(&[], &full_mapping()).expect("aggregate");
    assert!(result.is_empty());
}
