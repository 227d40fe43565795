// File: crates/chartkit-core/tests/smoke.rs
// Purpose: Basic end-to-end smoke test: CSV file on disk to a render plan for every chart kind.

use std::io::Write;

use chartkit_core::{Chart, ChartKind, DataSource, RenderPlan};

fn write_csv() -> tempfile::NamedTempFile {
    let mut f = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(f, "date,region,sales,visits").unwrap();
    writeln!(f, "2021-03-01,north,120,40").unwrap();
    writeln!(f, "2021-03-02,south,80,35").unwrap();
    writeln!(f, "2021-03-03,east,60,52").unwrap();
    writeln!(f, "2021-03-04,west,140,18").unwrap();
    f
}

fn build(kind: ChartKind, file: &tempfile::NamedTempFile) -> RenderPlan {
    Chart::make(kind)
        .load(DataSource::Path(file.path().to_path_buf()))
        .expect("load csv")
        .build()
        .expect("build should succeed")
}

#[test]
fn every_kind_builds_from_csv() {
    let file = write_csv();
    for kind in ChartKind::ALL {
        let plan = build(kind, &file);
        assert_eq!(plan.kind, kind);
        assert!(!plan.marks.is_empty(), "{kind} chart should have marks");
        // plans serialize for any renderer
        let json = plan.to_json().expect("plan json");
        assert!(json.starts_with('{'));
    }
}

#[test]
fn default_columns_follow_classification() {
    let file = write_csv();
    let bar = build(ChartKind::Bar, &file);
    assert_eq!(bar.x_axis.as_ref().unwrap().column, "date");
    assert_eq!(bar.y_axis.as_ref().unwrap().column, "sales");

    let line = build(ChartKind::Line, &file);
    assert_eq!(line.paths().count(), 2, "sales and visits series");

    let scatter = build(ChartKind::Scatter, &file);
    assert_eq!(scatter.x_axis.as_ref().unwrap().column, "sales");
    assert_eq!(scatter.y_axis.as_ref().unwrap().column, "visits");
}
