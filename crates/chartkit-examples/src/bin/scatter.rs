// File: crates/chartkit-examples/src/bin/scatter.rs
// Summary: Scatter example; in-memory records colored by species, plan JSON on stdout.

use chartkit_core::{record, Chart, ChartKind, Dataset};

fn main() {
    let rows = vec![
        record([("species", "setosa"), ("petal", "1.4"), ("sepal", "5.1")]),
        record([("species", "setosa"), ("petal", "1.3"), ("sepal", "4.9")]),
        record([("species", "versicolor"), ("petal", "4.7"), ("sepal", "7.0")]),
        record([("species", "versicolor"), ("petal", "4.5"), ("sepal", "6.4")]),
        record([("species", "virginica"), ("petal", "6.0"), ("sepal", "6.3")]),
        record([("species", "virginica"), ("petal", "5.1"), ("sepal", "5.8")]),
    ];

    let plan = Chart::make(ChartKind::Scatter)
        .using(Dataset::from_records(rows))
        .build()
        .expect("build scatter chart");

    // Domains are niced by default
    if let (Some(x), Some(y)) = (&plan.x_axis, &plan.y_axis) {
        eprintln!("x {:?} over {:?}, y {:?} over {:?}", x.column, x.scale.continuous_domain(), y.column, y.scale.continuous_domain());
    }
    println!("{}", serde_json::to_string_pretty(&plan).expect("serialize plan"));
}
