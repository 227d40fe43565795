// File: crates/demo/src/main.rs
// Summary: Demo loads a JSON/CSV/TSV file, builds one chart kind and writes its render plan as JSON.
// Usage: chartkit-demo <data-file> [kind] [--options opts.json] [--json]

use anyhow::{Context, Result};
use chartkit_core::{load_path, Chart, ChartKind, ChartOptions, RenderPlan};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

struct Args {
    data: PathBuf,
    kind: Option<ChartKind>,
    options: Option<PathBuf>,
    stdout: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = parse_args()?;
    let path = resolve_path(&args.data)?;
    tracing::info!(path = %path.display(), "using input file");

    let dataset = load_path(&path).with_context(|| format!("failed to load '{}'", path.display()))?;
    if dataset.is_empty() {
        anyhow::bail!("no records loaded from {}; check headers/delimiter.", path.display());
    }
    tracing::info!(records = dataset.len(), "loaded dataset");

    let options = match &args.options {
        Some(p) => ChartOptions::from_path(p).with_context(|| format!("failed to read options '{}'", p.display()))?,
        None => ChartOptions::default(),
    };

    let kinds = match args.kind {
        Some(k) => vec![k],
        None => ChartKind::ALL.to_vec(),
    };
    for kind in kinds {
        let chart = Chart::make(kind).using(dataset.clone()).options(options.clone());
        let plan = match chart.build() {
            Ok(plan) => plan,
            // without an explicit kind, skip charts this data cannot drive
            Err(e) if args.kind.is_none() => {
                tracing::warn!(%kind, error = %e, "skipping chart");
                continue;
            }
            Err(e) => return Err(e).with_context(|| format!("failed to build {kind} chart")),
        };
        summarize(&plan);

        let json = plan.to_json().context("failed to serialize plan")?;
        if args.stdout {
            println!("{json}");
        } else {
            let out = out_name_with(&path, kind);
            std::fs::write(&out, json).with_context(|| format!("failed to write '{}'", out.display()))?;
            tracing::info!(out = %out.display(), "wrote plan");
        }
    }

    Ok(())
}

fn parse_args() -> Result<Args> {
    let mut data = None;
    let mut kind = None;
    let mut options = None;
    let mut stdout = false;

    let mut it = std::env::args().skip(1);
    while let Some(arg) = it.next() {
        match arg.as_str() {
            "--json" => stdout = true,
            "--options" => {
                let p = it.next().context("--options needs a file path")?;
                options = Some(PathBuf::from(p));
            }
            _ if data.is_none() => data = Some(PathBuf::from(arg)),
            _ if kind.is_none() => kind = Some(arg.parse::<ChartKind>()?),
            other => anyhow::bail!("unexpected argument '{other}'"),
        }
    }
    let data = data.context("usage: chartkit-demo <data-file> [kind] [--options opts.json] [--json]")?;
    Ok(Args { data, kind, options, stdout })
}

/// Resolve path, trying .csv/.tsv swap if needed.
fn resolve_path(p: &Path) -> Result<PathBuf> {
    if p.exists() {
        return Ok(p.to_path_buf());
    }
    if let Some(alt) = swap_ext(p) {
        if alt.exists() {
            tracing::info!(alt = %alt.display(), "extension swapped between .csv/.tsv");
            return Ok(alt);
        }
    }
    anyhow::bail!("file not found: {}", p.display());
}

fn swap_ext(p: &Path) -> Option<PathBuf> {
    let mut alt = p.to_path_buf();
    let ext = p.extension()?.to_string_lossy().to_lowercase();
    match ext.as_str() {
        "tsv" => alt.set_extension("csv"),
        "csv" => alt.set_extension("tsv"),
        _ => return None,
    };
    Some(alt)
}

/// Produce output file name like target/out/chart_<stem>_<kind>.json
fn out_name_with(input: &Path, kind: ChartKind) -> PathBuf {
    let stem = input.file_stem().and_then(|s| s.to_str()).unwrap_or("chart");
    let out = PathBuf::from("target/out");
    std::fs::create_dir_all(&out).ok();
    out.join(format!("chart_{stem}_{kind}.json"))
}

fn summarize(plan: &RenderPlan) {
    let axis = |a: &Option<chartkit_core::AxisBinding>| {
        a.as_ref().map(|b| format!("{} ({:?})", b.label, b.role)).unwrap_or_else(|| "-".to_string())
    };
    tracing::info!(
        kind = %plan.kind,
        x = %axis(&plan.x_axis),
        y = %axis(&plan.y_axis),
        marks = plan.marks.len(),
        legend = plan.legend.len(),
        "built chart"
    );
}
