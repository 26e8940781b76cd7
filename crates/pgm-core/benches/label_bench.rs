//! # Label Benchmarks
//!
//! Performance benchmarks for pgm-core label operations.
//!
//! Run with: `cargo bench -p pgm-core`

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pgm_core::{LabelIndex, VertexLabel};
use std::hint::black_box;

/// Create a label nested `depth` scopes deep.
fn create_deep_label(depth: usize) -> VertexLabel {
    let namespace: Vec<String> = (0..depth).map(|i| format!("scope{}", i)).collect();
    VertexLabel::new("leaf", namespace).expect("label")
}

/// Create an index of `size` labels spread over ten namespaces.
fn create_index(size: usize) -> LabelIndex {
    let labels = (0..size).map(|i| {
        VertexLabel::new(format!("v{}", i), [format!("group{}", i % 10)]).expect("label")
    });
    LabelIndex::from_labels(labels).expect("index")
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_qualified_name(c: &mut Criterion) {
    let mut group = c.benchmark_group("qualified_name");

    for depth in [1, 8, 64].iter() {
        let label = create_deep_label(*depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &label, |b, label| {
            b.iter(|| black_box(label.qualified_name()));
        });
    }

    group.finish();
}

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");

    for depth in [1, 8, 64].iter() {
        let qualified = create_deep_label(*depth).qualified_name();
        group.bench_with_input(
            BenchmarkId::from_parameter(depth),
            &qualified,
            |b, qualified| {
                b.iter(|| black_box(VertexLabel::parse(qualified)));
            },
        );
    }

    group.finish();
}

fn bench_index_nesting(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_nesting");

    for size in [100, 1000, 10000].iter() {
        let index = create_index(*size);
        group.bench_with_input(BenchmarkId::from_parameter(size), &index, |b, index| {
            b.iter(|| black_box(index.nested("wrapper")));
        });
    }

    group.finish();
}

fn bench_namespace_query(c: &mut Criterion) {
    let index = create_index(10000);

    c.bench_function("namespace_query_10000", |b| {
        b.iter(|| black_box(index.in_namespace(&["group3"])));
    });
}

criterion_group!(
    benches,
    bench_qualified_name,
    bench_parse,
    bench_index_nesting,
    bench_namespace_query
);
criterion_main!(benches);
