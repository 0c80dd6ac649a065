//! Benchmarks for polygon shape descriptors.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use morphometry::geometry::{Geometry, Polygon};
use morphometry::measure::{EllipsoidalMeasurer, Ellipsoid, PlanarMeasurer};
use morphometry::shape::{polygon_indicators, rectangle_indices, IndicatorSelection};
use morphometry::Point2;

/// Generates a star-like polygon with a deterministic wobble on the radius.
fn generate_blob(num_points: usize, radius: f64) -> Geometry {
    let ring = (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64 * std::f64::consts::TAU;
            let wobble = ((i * 17) % 100) as f64 / 500.0;
            let r = radius * (1.0 + wobble);
            Point2::new(r * t.cos(), r * t.sin())
        })
        .collect();
    Geometry::Polygon(Polygon::new(ring, vec![]))
}

fn bench_indicators(c: &mut Criterion) {
    let mut group = c.benchmark_group("indicators");
    let selection = IndicatorSelection::all();

    for size in [8, 64, 256, 1024] {
        let blob = generate_blob(size, 100.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("planar", size), &blob, |b, g| {
            b.iter(|| polygon_indicators(black_box(g), &selection, &PlanarMeasurer))
        });
    }

    // Same shapes in degrees around Paris
    let measurer = EllipsoidalMeasurer::new(Ellipsoid::Wgs84);
    for size in [8, 64, 256] {
        let blob = generate_blob(size, 0.01).map_points(|p| Point2::new(p.x + 2.35, p.y + 48.85));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("ellipsoidal", size), &blob, |b, g| {
            b.iter(|| polygon_indicators(black_box(g), &selection, &measurer))
        });
    }

    group.finish();
}

fn bench_rectangle_indices(c: &mut Criterion) {
    let mut group = c.benchmark_group("rectangle_indices");

    for size in [8, 64, 256, 1024, 4096] {
        let blob = generate_blob(size, 100.0);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("blob", size), &blob, |b, g| {
            b.iter(|| rectangle_indices(black_box(g), &PlanarMeasurer))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_indicators, bench_rectangle_indices);
criterion_main!(benches);
