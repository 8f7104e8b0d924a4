use criterion::{Criterion, criterion_group, criterion_main};
use dynamic_record::{DynamicRecord, record};
use std::hint::black_box;

// ─── Test Data ──────────────────────────────────────────────────────────────

const BENCH_JSON: &str = r#"{
  "id": "user:abc123",
  "name": "Alice",
  "age": 28,
  "score": 99.5,
  "active": true,
  "metadata": null,
  "tags": ["developer", "rust", "database"],
  "profile": { "bio": "Software engineer", "settings": { "theme": "dark" } }
}"#;

fn sample() -> DynamicRecord {
    record! {
        "name" => "Alice",
        "age" => 21i64,
        "height" => 167.64f64,
    }
}

// ─── Benches ────────────────────────────────────────────────────────────────

fn bench_reads(c: &mut Criterion) {
    let record = sample();
    let mut group = c.benchmark_group("read");
    group.bench_function("get_typed_i64", |b| {
        b.iter(|| black_box(&record).get_typed::<i64>(black_box("age")))
    });
    group.bench_function("get_typed_mismatch", |b| {
        b.iter(|| black_box(&record).get_typed::<i64>(black_box("name")))
    });
    group.bench_function("try_get_missing", |b| {
        b.iter(|| black_box(&record).try_get::<i64>(black_box("weight")))
    });
    group.finish();
}

fn bench_writes(c: &mut Criterion) {
    let mut group = c.benchmark_group("write");
    group.bench_function("increment_int_field", |b| {
        let mut record = sample();
        b.iter(|| record.add_int_field(black_box("age"), black_box(0)))
    });
    group.bench_function("set_overwrite", |b| {
        let mut record = sample();
        b.iter(|| record.set(black_box("height"), black_box(170.0f64)))
    });
    group.finish();
}

fn bench_codec(c: &mut Criterion) {
    let record = DynamicRecord::from_json_str(BENCH_JSON).unwrap();
    let mut group = c.benchmark_group("codec");
    group.bench_function("from_json_str", |b| {
        b.iter(|| DynamicRecord::from_json_str(black_box(BENCH_JSON)))
    });
    group.bench_function("to_json", |b| b.iter(|| black_box(&record).to_json()));
    group.bench_function("display", |b| b.iter(|| black_box(&record).to_string()));
    group.finish();
}

criterion_group!(benches, bench_reads, bench_writes, bench_codec);
criterion_main!(benches);
