use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use sheet_frame::export::to_json;
use sheet_frame::ingestion::ingest_range;
use sheet_frame::processing::{filter, sum};
use sheet_frame::types::{Frame, Scalar};

fn synthetic_rows(rows: usize) -> Vec<Vec<String>> {
    let mut out = Vec::with_capacity(rows + 1);
    out.push(vec!["date".to_string(), "amount".to_string(), "category".to_string()]);
    for i in 0..rows {
        out.push(vec![
            format!("2024-01-{:02}", i % 28 + 1),
            format!("{}.{}", i % 500, i % 10),
            (if i % 3 == 0 { "food" } else { "rent" }).to_string(),
        ]);
    }
    out
}

fn ingested(rows: usize) -> Frame {
    ingest_range(&synthetic_rows(rows), 0, 0, 2).expect("synthetic range is well-formed")
}

fn bench_ingest(c: &mut Criterion) {
    let mut group = c.benchmark_group("ingest_range");
    for rows in [1_000usize, 50_000] {
        let grid = synthetic_rows(rows);
        group.bench_with_input(BenchmarkId::from_parameter(rows), &grid, |b, grid| {
            b.iter(|| ingest_range(black_box(grid), 0, 0, 2).unwrap())
        });
    }
    group.finish();
}

fn bench_filter_sum(c: &mut Criterion) {
    let frame = ingested(50_000);
    c.bench_function("filter_then_sum_50k", |b| {
        b.iter(|| {
            let food = filter(black_box(&frame), "category", |v| v.as_text() == Some("food"));
            sum(&food, "amount").unwrap()
        })
    });
}

fn bench_to_json(c: &mut Criterion) {
    let frame = ingested(10_000);
    c.bench_function("to_json_10k", |b| b.iter(|| to_json(black_box(&frame)).unwrap()));

    let numbers = Frame::new().with_column(
        "n",
        (0..10_000).map(|i| Scalar::Number(i as f64)).collect::<Vec<_>>(),
    );
    c.bench_function("to_json_numbers_10k", |b| b.iter(|| to_json(black_box(&numbers)).unwrap()));
}

criterion_group!(benches, bench_ingest, bench_filter_sum, bench_to_json);
criterion_main!(benches);
