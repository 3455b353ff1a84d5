//! Performance benchmarks for expression construction
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use sqx::{Expression, Options, and, near, or, prefix, term};

fn bench_leaf_construction(c: &mut Criterion) {
    c.bench_function("leaf_term", |b| {
        b.iter(|| term(black_box("kast kaalikas"), black_box(Some("model")), None))
    });

    c.bench_function("leaf_near_with_options", |b| {
        let options = Options::new().set("boost", 2);
        b.iter(|| {
            near(
                black_box("kast kaalikas"),
                black_box(Some("model")),
                black_box(Some(3)),
                Some(&options),
            )
        })
    });
}

fn bench_option_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("option_serialization");
    for size in [1usize, 4, 16] {
        let options: Options = (0..size).map(|i| (format!("opt{i}"), i as i64)).collect();
        group.bench_with_input(BenchmarkId::from_parameter(size), &options, |b, options| {
            b.iter(|| black_box(options).to_query_fragment())
        });
    }
    group.finish();
}

fn bench_nested_composition(c: &mut Criterion) {
    let mut group = c.benchmark_group("nested_composition");
    for depth in [4usize, 16, 64] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter(|| {
                let mut current = term(black_box("foo"), Some("bar"), None);
                for _ in 0..depth {
                    let sibling = prefix("gam", Some("model"), None);
                    current = or(&[current, sibling], None).unwrap();
                }
                current
            })
        });
    }
    group.finish();
}

fn bench_wide_and(c: &mut Criterion) {
    let leaves: Vec<Expression> = (0..100)
        .map(|i| term(format!("value{i}"), Some("field"), None))
        .collect();

    c.bench_function("wide_and_100_children", |b| {
        b.iter(|| and(black_box(&leaves), None).unwrap())
    });
}

criterion_group!(
    benches,
    bench_leaf_construction,
    bench_option_serialization,
    bench_nested_composition,
    bench_wide_and
);
criterion_main!(benches);
