// File: crates/chartkit-core/tests/snapshot.rs
// Purpose: Golden snapshot harness with bless flow.
// Behavior:
// - Builds a deterministic small bar chart and serializes its render plan to JSON.
// - If env UPDATE_SNAPSHOTS=1, (re)writes the snapshot file.
// - Else, if snapshot exists, compares the parsed JSON for exact match.
// - Else, logs a note and returns (skips) without failing to ease first run.

use chartkit_core::{record, Chart, ChartKind, ColumnMapping, Dataset, Layout};

fn plan_json() -> String {
    let ds = Dataset::from_records(vec![
        record([("fruit", "apple"), ("sold", "12"), ("store", "north")]),
        record([("fruit", "pear"), ("sold", "7"), ("store", "south")]),
        record([("fruit", "plum"), ("sold", "9"), ("store", "north")]),
    ]);
    let mapping = ColumnMapping { color: Some("store".to_string()), ..ColumnMapping::default() };
    Chart::make(ChartKind::Bar)
        .using(ds)
        .layout(Layout::new(300.0, 150.0))
        .columns(mapping)
        .build()
        .expect("build bar chart")
        .to_json()
        .expect("serialize plan")
}

#[test]
fn golden_bar_plan() {
    let json = plan_json();
    let snap_dir = std::path::PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/__snapshots__");
    let snap_path = snap_dir.join("bar_plan.json");

    let update = std::env::var("UPDATE_SNAPSHOTS").ok().map(|v| v == "1" || v.eq_ignore_ascii_case("true"))
        .unwrap_or(false);

    if update {
        std::fs::create_dir_all(&snap_dir).expect("create snapshots dir");
        std::fs::write(&snap_path, &json).expect("write snapshot");
        eprintln!("[snapshot] Updated {} ({} bytes)", snap_path.display(), json.len());
        return;
    }

    if snap_path.exists() {
        let want = std::fs::read_to_string(&snap_path).expect("read snapshot");
        // Compare parsed values so whitespace changes don't matter
        let got: serde_json::Value = serde_json::from_str(&json).expect("parse got");
        let want: serde_json::Value = serde_json::from_str(&want).expect("parse want");
        assert_eq!(got, want, "render plan differs from golden snapshot: {}", snap_path.display());
    } else {
        eprintln!("[snapshot] Missing snapshot {}; set UPDATE_SNAPSHOTS=1 to bless.", snap_path.display());
        // Skip without failing on first run
    }
}

#[test]
fn plan_json_is_stable() {
    assert_eq!(plan_json(), plan_json());
}
