#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for the rasterizers and canvas rendering.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use scanpaint::prelude::*;

fn line_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lines");

    for length in [10, 100, 1_000, 10_000] {
        let end = Point::new(length, length / 3);

        group.bench_with_input(BenchmarkId::new("dda", length), &end, |b, &end| {
            b.iter(|| dda_line(black_box(Point::ORIGIN), black_box(end)).count());
        });
        group.bench_with_input(BenchmarkId::new("bresenham", length), &end, |b, &end| {
            b.iter(|| bresenham_line(black_box(Point::ORIGIN), black_box(end)).count());
        });
    }

    group.finish();
}

fn curve_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("curves");

    for radius in [10, 100, 1_000, 10_000] {
        let rim = Point::new(radius, 0);
        let corner = Point::new(radius, radius / 2);

        group.bench_with_input(BenchmarkId::new("circle", radius), &rim, |b, &rim| {
            b.iter(|| circle_midpoint(black_box(Point::ORIGIN), black_box(rim)).count());
        });
        group.bench_with_input(BenchmarkId::new("ellipse", radius), &corner, |b, &corner| {
            b.iter(|| ellipse_midpoint(black_box(Point::ORIGIN), black_box(corner)).count());
        });
    }

    group.finish();
}

fn rubber_band_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rubber_band");

    for kind in ShapeKind::ALL {
        group.bench_with_input(BenchmarkId::from_parameter(kind.short_name()), &kind, |b, &kind| {
            b.iter(|| {
                let mut canvas = Canvas::new(800, 600).expect("canvas creation should succeed");
                canvas.select_shape(kind);
                canvas.press(Point::new(400, 300));
                for step in 0..32 {
                    canvas.drag(Point::new(400 + step * 10, 300 + step * 5));
                    black_box(canvas.render().expect("render should succeed"));
                }
                canvas.release(Point::new(720, 460))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, line_benchmark, curve_benchmark, rubber_band_benchmark);
criterion_main!(benches);
