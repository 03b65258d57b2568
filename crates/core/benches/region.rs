use criterion::{criterion_group, criterion_main, Criterion};
use lattica::{
    GridConfig, HexAxial, HexLayout, HexOrientation, HexRegionCache,
    TriAxial,
};
use std::hint::black_box;

fn criterion_benchmark(c: &mut Criterion) {
    let config = GridConfig::default();

    let mut group = c.benchmark_group("hex-regions");
    group.sample_size(10);
    let center = HexAxial::new(12, -40);
    group.bench_function("range 50", |b| {
        b.iter(|| black_box(center).range_in(50, &config))
    });
    group.bench_function("ring 50", |b| {
        b.iter(|| black_box(center).ring_in(50, &config))
    });
    group.bench_function("range 50 cached", |b| {
        let mut cache = HexRegionCache::new();
        b.iter(|| black_box(center).range_cached(50, &config, &mut cache))
    });
    group.bench_function("line 100", |b| {
        let goal = HexAxial::new(-88, 10);
        b.iter(|| black_box(center).line_to(black_box(goal)))
    });
    group.finish();

    let mut group = c.benchmark_group("tri-regions");
    group.sample_size(10);
    let center = TriAxial::new(7, 7);
    group.bench_function("range 50", |b| {
        b.iter(|| black_box(center).range_in(50, &config))
    });
    group.bench_function("ring 50", |b| {
        b.iter(|| black_box(center).ring_in(50, &config))
    });
    group.bench_function("vertex neighbors", |b| {
        b.iter(|| black_box(center).vertex_neighbors())
    });
    group.finish();

    let mut group = c.benchmark_group("layout");
    group.sample_size(10);
    let layout = HexLayout::new(HexOrientation::Pointy, 1.0).unwrap();
    let cells = HexAxial::ORIGIN.range_in(30, &config);
    group.bench_function("world round trip", |b| {
        b.iter(|| {
            for &cell in &cells {
                let point = cell.to_world(&layout);
                let _ = HexAxial::from_world(black_box(point), &layout);
            }
        })
    });
    group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
