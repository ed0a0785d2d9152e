//! Pipeline benchmarks over synthetic daily data.
//!
//! Run with: `cargo bench --package monthline-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use monthline_bench::BenchmarkConfig;
use monthline_lib::{
    NoProgress, PipelineConfig, partition_by_ticker, process_all_tickers, process_single_ticker,
};
use tempfile::TempDir;

fn benchmark_configs() -> Vec<(&'static str, BenchmarkConfig)> {
    vec![
        (
            "1-ticker-10y",
            BenchmarkConfig {
                tickers: 1,
                ..Default::default()
            },
        ),
        (
            "20-tickers-10y",
            BenchmarkConfig {
                tickers: 20,
                ..Default::default()
            },
        ),
    ]
}

fn transform_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("transform");

    for (name, config) in benchmark_configs() {
        let partitions = partition_by_ticker(config.daily_records());
        let rows: usize = partitions.iter().map(|p| p.records.len()).sum();
        group.throughput(Throughput::Elements(rows as u64));

        group.bench_with_input(BenchmarkId::from_parameter(name), &partitions, |b, partitions| {
            b.iter(|| {
                partitions
                    .iter()
                    .map(|p| process_single_ticker(&p.ticker, &p.records).len())
                    .sum::<usize>()
            });
        });
    }

    group.finish();
}

fn end_to_end_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("end_to_end");
    group.sample_size(20);

    for (name, config) in benchmark_configs() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("prices.csv");
        std::fs::write(&input, config.csv()).unwrap();
        let pipeline = PipelineConfig::new(&input, dir.path().join("output"));

        group.bench_with_input(BenchmarkId::from_parameter(name), &pipeline, |b, pipeline| {
            b.iter(|| process_all_tickers(pipeline, &mut NoProgress).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, transform_benchmark, end_to_end_benchmark);
criterion_main!(benches);
