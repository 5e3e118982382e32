use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use geo_direct_select::core::measure::center_of_mass;
use geo_direct_select::core::transform::{
    anchor_scale_factors, center_scale_factor, constrain_movement, scale_about_anchor,
    scale_about_center, translate, Bounds, MovementLimits,
};
use geo_direct_select::core::{create_supplementary_points, subsample, CoordPath};
use geo_direct_select::{Feature, Geometry};
use glam::DVec2;
use std::hint::black_box;

/// Polygon mit `vertex_count` Punkten auf einem Kreis um (13.4, 52.5).
fn build_synthetic_polygon(vertex_count: usize) -> Feature {
    let ring = (0..vertex_count)
        .map(|i| {
            let angle = i as f64 / vertex_count as f64 * std::f64::consts::TAU;
            DVec2::new(13.4 + angle.cos() * 0.5, 52.5 + angle.sin() * 0.3)
        })
        .collect();
    Feature::new("bench", Geometry::Polygon(vec![ring]))
}

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");
    let limits = MovementLimits::default();

    for &vertex_count in &[100usize, 10_000usize] {
        let feature = build_synthetic_polygon(vertex_count);
        let coords = feature.geometry.coordinates();
        let center = center_of_mass(&coords).unwrap_or(DVec2::ZERO);
        let anchor = coords[vertex_count / 2];
        let vertex = coords[0];

        group.bench_with_input(
            BenchmarkId::new("feature_drag", vertex_count),
            &feature,
            |b, f| {
                b.iter(|| {
                    let groups: Vec<Bounds> =
                        Bounds::of(&f.geometry.coordinates()).into_iter().collect();
                    let delta =
                        constrain_movement(&groups, black_box(DVec2::new(0.01, 0.02)), &limits);
                    black_box(translate(&f.geometry, delta))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("center_scale", vertex_count),
            &feature,
            |b, f| {
                b.iter(|| {
                    let pointer = black_box(vertex + DVec2::new(0.1, 0.05));
                    let factor = center_scale_factor(center, vertex, pointer).unwrap_or(1.0);
                    black_box(scale_about_center(&f.geometry, center, factor))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("anchor_scale", vertex_count),
            &feature,
            |b, f| {
                b.iter(|| {
                    let pointer = black_box(vertex + DVec2::new(0.1, 0.05));
                    let factors = anchor_scale_factors(anchor, vertex, pointer, 0.01);
                    black_box(scale_about_anchor(&f.geometry, anchor, factors))
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("center_of_mass", vertex_count),
            &coords,
            |b, coords| b.iter(|| black_box(center_of_mass(black_box(coords)))),
        );
    }

    group.finish();
}

fn bench_overlay(c: &mut Criterion) {
    let mut group = c.benchmark_group("overlay");
    let selected = vec![CoordPath::ring_point(0, 3)];

    for &vertex_count in &[100usize, 10_000usize] {
        let feature = build_synthetic_polygon(vertex_count);

        group.bench_with_input(
            BenchmarkId::new("supplementary_points", vertex_count),
            &feature,
            |b, f| {
                b.iter(|| {
                    let points = create_supplementary_points(f, &selected, true, 85.0);
                    black_box(points.len())
                })
            },
        );

        group.bench_with_input(
            BenchmarkId::new("subsample_vertices", vertex_count),
            &feature,
            |b, f| {
                b.iter(|| {
                    let points = create_supplementary_points(f, &selected, false, 85.0);
                    black_box(subsample(&points, black_box(50)).len())
                })
            },
        );
    }

    group.finish();
}

criterion_group!(core_benches, bench_transforms, bench_overlay);
criterion_main!(core_benches);
