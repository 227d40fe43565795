// File: crates/chartkit-core/tests/binder.rs
// Purpose: Scale domains and ranges derived from dataset columns, plus inversion.

use chartkit_core::{
    bind_linear_extent, bind_linear_zero_based, bind_ordinal, invert, record, AxisScale, ChartError, Dataset,
    RangeDirection,
};

fn cat_val() -> Dataset {
    Dataset::from_records(vec![
        record([("cat", "a"), ("val", "5")]),
        record([("cat", "b"), ("val", "3")]),
    ])
}

fn close(a: f64, b: f64) -> bool { (a - b).abs() < 1e-9 }

#[test]
fn ordinal_bands_span_output_length() {
    let band = bind_ordinal(&cat_val(), "cat", 100.0, 0.1).unwrap();
    assert_eq!(band.domain().collect::<Vec<_>>(), vec!["a", "b"]);
    assert_eq!(band.range(), (0.0, 100.0));

    let step = band.step();
    let padding = band.padding();
    let n = band.len() as f64;
    // bands + inner gaps + outer gaps
    let total = n * band.bandwidth() + (n - 1.0) * padding * step + 2.0 * padding * step;
    assert!(close(total, 100.0), "total {total}");

    let a = band.apply("a").unwrap();
    let b = band.apply("b").unwrap();
    assert!(close(a, padding * step));
    assert!(close(b + band.bandwidth() + padding * step, 100.0));
}

#[test]
fn ordinal_domain_collapses_duplicates_in_first_seen_order() {
    let ds = Dataset::from_records(vec![
        record([("k", "y")]),
        record([("k", "x")]),
        record([("k", "y")]),
        record([("k", "z")]),
    ]);
    let band = bind_ordinal(&ds, "k", 300.0, 0.0).unwrap();
    assert_eq!(band.domain().collect::<Vec<_>>(), vec!["y", "x", "z"]);
    assert!(close(band.bandwidth(), 100.0));
    assert!(close(band.apply("z").unwrap(), 200.0));
}

#[test]
fn zero_based_domain_and_direction() {
    let down = bind_linear_zero_based(&cat_val(), "val", 100.0, RangeDirection::Reversed).unwrap();
    assert_eq!(down.domain(), (0.0, 5.0));
    assert_eq!(down.range(), (100.0, 0.0));

    let right = bind_linear_zero_based(&cat_val(), "val", 100.0, RangeDirection::Forward).unwrap();
    assert_eq!(right.range(), (0.0, 100.0));
    assert!(close(right.apply(5.0), 100.0));
}

#[test]
fn zero_based_domain_ignores_negative_minimum() {
    let ds = Dataset::from_records(vec![
        record([("v", "-8")]),
        record([("v", "2")]),
        record([("v", "-1")]),
    ]);
    let s = bind_linear_zero_based(&ds, "v", 50.0, RangeDirection::Reversed).unwrap();
    assert_eq!(s.domain(), (0.0, 2.0));
}

#[test]
fn extent_domain_is_tight_unless_niced() {
    let ds = Dataset::from_records(vec![
        record([("v", "0.5")]),
        record([("v", "9.7")]),
        record([("v", "4")]),
    ]);
    let tight = bind_linear_extent(&ds, "v", 100.0, RangeDirection::Forward, false).unwrap();
    assert_eq!(tight.domain(), (0.5, 9.7));

    let nice = bind_linear_extent(&ds, "v", 100.0, RangeDirection::Forward, true).unwrap();
    assert_eq!(nice.domain(), (0.0, 10.0));
}

#[test]
fn extent_keeps_negative_values() {
    let ds = Dataset::from_records(vec![record([("v", "-3")]), record([("v", "7")])]);
    let s = bind_linear_extent(&ds, "v", 10.0, RangeDirection::Reversed, false).unwrap();
    assert_eq!(s.domain(), (-3.0, 7.0));
}

#[test]
fn linear_invert_round_trips() {
    let s = bind_linear_extent(&cat_val(), "val", 640.0, RangeDirection::Reversed, false).unwrap();
    let scale = AxisScale::Linear(s);
    for i in 0..=20 {
        let x = 3.0 + 2.0 * i as f64 / 20.0;
        let px = s.apply(x);
        assert!(close(invert(&scale, px).unwrap(), x), "x = {x}");
    }
}

#[test]
fn ordinal_scales_do_not_invert() {
    let band = bind_ordinal(&cat_val(), "cat", 100.0, 0.1).unwrap();
    assert!(matches!(invert(&AxisScale::Band(band), 10.0), Err(ChartError::UnsupportedInversion)));
}

#[test]
fn rebinding_is_idempotent() {
    let ds = cat_val();
    assert_eq!(bind_ordinal(&ds, "cat", 100.0, 0.1).unwrap(), bind_ordinal(&ds, "cat", 100.0, 0.1).unwrap());
    assert_eq!(
        bind_linear_extent(&ds, "val", 80.0, RangeDirection::Forward, true).unwrap(),
        bind_linear_extent(&ds, "val", 80.0, RangeDirection::Forward, true).unwrap()
    );
}

#[test]
fn missing_and_non_numeric_columns_fail() {
    let ds = Dataset::from_records(vec![
        record([("cat", "a"), ("val", "5")]),
        record([("cat", "b")]),
    ]);
    match bind_linear_zero_based(&ds, "val", 100.0, RangeDirection::Reversed) {
        Err(ChartError::InvalidColumnData { column, row, .. }) => {
            assert_eq!(column, "val");
            assert_eq!(row, 1);
        }
        other => panic!("unexpected: {other:?}"),
    }
    assert!(matches!(bind_ordinal(&ds, "val", 100.0, 0.1), Err(ChartError::InvalidColumnData { .. })));
    assert!(matches!(
        bind_linear_extent(&ds, "cat", 100.0, RangeDirection::Forward, false),
        Err(ChartError::InvalidColumnData { .. })
    ));
}

#[test]
fn empty_dataset_fails_every_binder() {
    let ds = Dataset::default();
    assert!(matches!(bind_ordinal(&ds, "x", 10.0, 0.1), Err(ChartError::EmptyDataset)));
    assert!(matches!(bind_linear_zero_based(&ds, "x", 10.0, RangeDirection::Forward), Err(ChartError::EmptyDataset)));
    assert!(matches!(
        bind_linear_extent(&ds, "x", 10.0, RangeDirection::Forward, false),
        Err(ChartError::EmptyDataset)
    ));
}
