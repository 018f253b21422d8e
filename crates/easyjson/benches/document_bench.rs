//! Criterion benchmarks for canonical encoding and file round trips.
//!
//! Run with:
//! ```bash
//! cargo bench --package easyjson --bench document_bench
//! ```

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use easyjson::{to_canonical_vec, JsonFile};
use serde_json::{json, Value};
use uuid::Uuid;

// ── Document fixtures ─────────────────────────────────────────────────────────

fn make_document(entries: usize) -> Value {
    let items: Vec<Value> = (0..entries)
        .map(|i| {
            json!({
                "id": i,
                "name": format!("entry-{i}"),
                "enabled": i % 2 == 0,
                "weights": [i as f64 * 0.5, 1.0, 2.0],
                "meta": {"z": null, "a": "first"}
            })
        })
        .collect();
    json!({ "version": 1, "items": items })
}

// ── Benchmarks ────────────────────────────────────────────────────────────────

fn bench_canonical_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("canonical_encode");
    for entries in [10usize, 100, 1000] {
        let doc = make_document(entries);
        group.bench_with_input(BenchmarkId::from_parameter(entries), &doc, |b, doc| {
            b.iter(|| to_canonical_vec(black_box(doc)).unwrap());
        });
    }
    group.finish();
}

fn bench_save_reload(c: &mut Criterion) {
    let dir = std::env::temp_dir().join(format!("easyjson_bench_{}", Uuid::new_v4()));
    let mut file = JsonFile::open(dir.join("bench.json")).unwrap();
    file.set(make_document(100));

    c.bench_function("save_then_reload_100", |b| {
        b.iter(|| {
            file.save().unwrap();
            file.reload().unwrap();
        });
    });

    std::fs::remove_dir_all(&dir).ok();
}

criterion_group!(benches, bench_canonical_encode, bench_save_reload);
criterion_main!(benches);
