// File: crates/chartkit-core/tests/classify.rs
// Purpose: Column naming, role classification and first-of-role lookups.

use chartkit_core::{
    classify, column_names, first_linear, first_ordinal, record, ChartError, ClassifiedColumns, Classifier,
    ColumnRole, Dataset,
};

fn cat_val() -> Dataset {
    Dataset::from_records(vec![
        record([("cat", "a"), ("val", "5")]),
        record([("cat", "b"), ("val", "3")]),
    ])
}

#[test]
fn column_names_follow_first_record_order() {
    let ds = Dataset::from_records(vec![
        record([("zeta", "1"), ("alpha", "x"), ("mid", "2")]),
        record([("zeta", "2"), ("alpha", "y"), ("mid", "3")]),
    ]);
    let names = column_names(&ds).unwrap();
    assert_eq!(names, vec!["zeta", "alpha", "mid"]);
    assert_eq!(column_names(&ds).unwrap(), names, "order is stable across calls");
}

#[test]
fn categorical_and_numeric_columns() {
    let ds = cat_val();
    assert_eq!(classify(&ds, "cat").unwrap(), ColumnRole::Ordinal);
    assert_eq!(classify(&ds, "val").unwrap(), ColumnRole::Linear);
}

#[test]
fn zero_value_makes_column_ordinal() {
    // Pinned behavior: a literal 0 fails the numeric truthiness check.
    let ds = Dataset::from_records(vec![record([("x", "0")]), record([("x", "4")])]);
    assert_eq!(classify(&ds, "x").unwrap(), ColumnRole::Ordinal);

    let later_zero = Dataset::from_records(vec![record([("x", "4")]), record([("x", "0")])]);
    assert_eq!(classify(&later_zero, "x").unwrap(), ColumnRole::Ordinal);
}

#[test]
fn zero_tolerant_classifier_treats_zero_as_numeric() {
    let ds = Dataset::from_records(vec![record([("x", "0")]), record([("x", "4")])]);
    assert_eq!(Classifier::zero_tolerant().classify(&ds, "x").unwrap(), ColumnRole::Linear);
    let text = Dataset::from_records(vec![record([("x", "0")]), record([("x", "n/a")])]);
    assert_eq!(Classifier::zero_tolerant().classify(&text, "x").unwrap(), ColumnRole::Ordinal);
}

#[test]
fn one_non_numeric_value_makes_column_ordinal() {
    let ds = Dataset::from_records(vec![
        record([("v", "1")]),
        record([("v", "n/a")]),
        record([("v", "3")]),
    ]);
    assert_eq!(classify(&ds, "v").unwrap(), ColumnRole::Ordinal);
}

#[test]
fn first_of_role_lookups() {
    let ds = cat_val();
    assert_eq!(first_ordinal(&ds).unwrap().as_deref(), Some("cat"));
    assert_eq!(first_linear(&ds).unwrap().as_deref(), Some("val"));

    let all_text = Dataset::from_records(vec![record([("a", "x"), ("b", "y")])]);
    assert_eq!(first_linear(&all_text).unwrap(), None);
    assert_eq!(first_ordinal(&all_text).unwrap().as_deref(), Some("a"));

    let all_numbers = Dataset::from_records(vec![record([("a", 1.0), ("b", 2.0)])]);
    assert_eq!(first_ordinal(&all_numbers).unwrap(), None);
    assert_eq!(first_linear(&all_numbers).unwrap().as_deref(), Some("a"));
}

#[test]
fn empty_dataset_is_an_error() {
    let ds = Dataset::default();
    assert!(matches!(column_names(&ds), Err(ChartError::EmptyDataset)));
    assert!(matches!(classify(&ds, "x"), Err(ChartError::EmptyDataset)));
    assert!(matches!(first_ordinal(&ds), Err(ChartError::EmptyDataset)));
    assert!(matches!(ClassifiedColumns::from_dataset(&ds), Err(ChartError::EmptyDataset)));
}

#[test]
fn unknown_column_is_invalid_data() {
    let ds = cat_val();
    assert!(matches!(classify(&ds, "nope"), Err(ChartError::InvalidColumnData { .. })));
}

#[test]
fn classified_columns_snapshot() {
    let cols = ClassifiedColumns::from_dataset(&cat_val()).unwrap();
    assert_eq!(cols.len(), 2);
    assert_eq!(cols.names().collect::<Vec<_>>(), vec!["cat", "val"]);
    assert_eq!(cols.role("val"), Some(ColumnRole::Linear));
    assert_eq!(cols.first_ordinal(), Some("cat"));
    assert_eq!(cols.with_role(ColumnRole::Linear), vec!["val"]);
    assert_eq!(ClassifiedColumns::from_dataset(&cat_val()).unwrap(), cols);
}
