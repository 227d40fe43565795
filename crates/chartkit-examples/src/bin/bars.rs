// File: crates/chartkit-examples/src/bin/bars.rs
// Summary: Minimal example that builds a bar chart plan and writes it as JSON.

use chartkit_core::{load_str, Chart, ChartKind};

fn main() {
    // Inline JSON rows; numbers may be strings or numbers
    let data = r#"[
        {"fruit": "apple", "sold": 12},
        {"fruit": "pear", "sold": "7"},
        {"fruit": "plum", "sold": 9},
        {"fruit": "fig", "sold": 4}
    ]"#;
    let dataset = load_str(data).expect("parse inline data");

    let plan = Chart::make(ChartKind::Bar)
        .using(dataset)
        .title("Fruit sold")
        .width(400.0)
        .height(200.0)
        .build()
        .expect("build bar chart");

    let out = std::path::PathBuf::from("target/out/example_bars.json");
    std::fs::create_dir_all(out.parent().unwrap()).unwrap();
    let file = std::fs::File::create(&out).expect("create output");
    serde_json::to_writer_pretty(file, &plan).expect("write plan");
    println!("Wrote {} ({} bars)", out.display(), plan.rects().count());
}
