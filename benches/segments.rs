//! Benchmarks for boundary decomposition.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use morphometry::geometry::{Geometry, Polygon};
use morphometry::segments::{decompose_into, SegmentDeduper};
use morphometry::Point2;

/// Generates a `side` x `side` grid of unit squares sharing their edges.
fn generate_grid(side: usize) -> Vec<Geometry> {
    let mut cells = Vec::with_capacity(side * side);
    for row in 0..side {
        for col in 0..side {
            let (x, y) = (col as f64, row as f64);
            cells.push(Geometry::Polygon(Polygon::new(
                vec![
                    Point2::new(x, y),
                    Point2::new(x, y + 1.0),
                    Point2::new(x + 1.0, y + 1.0),
                    Point2::new(x + 1.0, y),
                ],
                vec![],
            )));
        }
    }
    cells
}

fn bench_decompose(c: &mut Criterion) {
    let mut group = c.benchmark_group("decompose");

    for side in [10, 50, 100] {
        let grid = generate_grid(side);
        group.throughput(Throughput::Elements((side * side) as u64));

        group.bench_with_input(BenchmarkId::new("unique", side), &grid, |b, cells| {
            b.iter(|| {
                let mut deduper = SegmentDeduper::new();
                let mut out = Vec::new();
                for cell in cells {
                    decompose_into(black_box(cell), Some(&mut deduper), &mut out);
                }
                out.len()
            })
        });

        group.bench_with_input(BenchmarkId::new("all", side), &grid, |b, cells| {
            b.iter(|| {
                let mut out = Vec::new();
                for cell in cells {
                    decompose_into(black_box(cell), None, &mut out);
                }
                out.len()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decompose);
criterion_main!(benches);
