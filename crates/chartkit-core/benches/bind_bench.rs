use chartkit_core::{
    bind_linear_extent, bind_linear_zero_based, bind_ordinal, record, Chart, ChartKind, Dataset, RangeDirection,
};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion, black_box};

fn gen_rows(n: usize, categories: usize) -> Dataset {
    let mut rows = Vec::with_capacity(n);
    for i in 0..n {
        let cat = format!("c{}", i % categories);
        // simple waveform with drift, shifted positive
        let value = format!("{:.3}", 20.0 + (i as f64 * 0.01).sin() * 10.0 + i as f64 * 0.0001);
        rows.push(record([("cat", cat.as_str()), ("value", value.as_str())]));
    }
    Dataset::from_records(rows)
}

fn bench_bind(c: &mut Criterion) {
    let mut group = c.benchmark_group("bind");
    for &n in &[10_000usize, 100_000usize] {
        let data = gen_rows(n, 50);
        group.bench_with_input(BenchmarkId::from_parameter(format!("ordinal_n{n}")), &data, |b, d| {
            b.iter(|| black_box(bind_ordinal(d, "cat", 600.0, 0.1)));
        });
        group.bench_with_input(BenchmarkId::from_parameter(format!("zero_based_n{n}")), &data, |b, d| {
            b.iter(|| black_box(bind_linear_zero_based(d, "value", 300.0, RangeDirection::Reversed)));
        });
        group.bench_with_input(BenchmarkId::from_parameter(format!("extent_nice_n{n}")), &data, |b, d| {
            b.iter(|| black_box(bind_linear_extent(d, "value", 300.0, RangeDirection::Reversed, true)));
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for &n in &[1_000usize, 10_000usize] {
        let data = gen_rows(n, 20);
        for kind in [ChartKind::Bar, ChartKind::Scatter] {
            group.bench_with_input(BenchmarkId::from_parameter(format!("{kind}_n{n}")), &kind, |b, &k| {
                b.iter_batched(
                    || Chart::make(k).using(data.clone()),
                    |chart| { let _ = black_box(chart.build()); },
                    BatchSize::LargeInput,
                );
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_bind, bench_build);
criterion_main!(benches);
