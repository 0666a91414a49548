//! Criterion benchmarks for submission decoding and table rendering.
//!
//! Run with:
//! ```bash
//! cargo bench --package panel-config-core --bench table_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use panel_config_core::{parse_submission, render_table, ConfigRecord};

fn make_records(n: usize) -> Vec<ConfigRecord> {
    (0..n)
        .map(|i| ConfigRecord::new(format!("Panel{}", i % 12), format!("param_{i}"), i.to_string()))
        .collect()
}

fn make_body(n: usize) -> Vec<u8> {
    let items: Vec<String> = (0..n)
        .map(|i| format!(r#"{{"panel":"Panel{}","parameter":"param_{i}","value":{i}}}"#, i % 12))
        .collect();
    format!("[{}]", items.join(",")).into_bytes()
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_table");
    for n in [10usize, 100, 1000] {
        let records = make_records(n);
        group.bench_with_input(BenchmarkId::new("records", n), &records, |b, records| {
            b.iter(|| render_table(black_box(records)).expect("render must succeed"))
        });
    }
    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_submission");
    for n in [10usize, 100, 1000] {
        let body = make_body(n);
        group.bench_with_input(BenchmarkId::new("records", n), &body, |b, body| {
            b.iter(|| parse_submission(black_box(body)).expect("parse must succeed"))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render, bench_parse);
criterion_main!(benches);
