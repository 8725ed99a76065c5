mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tri_hatch::hatch::{HatchConfig, HatchMode, Triangle, TriangleHatcher};

fn triangles() -> Vec<Triangle> {
    vec![
        Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(100.0, 0.0), Vec2::new(50.0, 86.6)),
        Triangle::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(30.0, 5.0)),
        Triangle::new(Vec2::new(12.0, 40.0), Vec2::new(95.0, 22.0), Vec2::new(61.0, 110.0)),
    ]
}

fn hatching_mode_benches(c: &mut Criterion) {
    let tris = triangles();
    let mut group = c.benchmark_group("hatching/mode");
    group.throughput(common::elements_throughput(tris.len()));

    for (name, mode) in [("clipped", HatchMode::Clipped), ("translated", HatchMode::Translated)] {
        let hatcher = TriangleHatcher::new(HatchConfig::default().with_mode(mode));
        let mut rng = StdRng::seed_from_u64(0x5EED);

        group.bench_with_input(BenchmarkId::from_parameter(name), &mode, |b, _| {
            b.iter(|| {
                for tri in &tris {
                    let lines = hatcher.hatch(tri, &mut rng).expect("solvable triangle");
                    black_box(lines.len());
                }
            });
        });
    }

    group.finish();
}

fn hatching_stripe_benches(c: &mut Criterion) {
    let tri = triangles()[2];
    let hatcher = TriangleHatcher::default();
    let mut group = c.benchmark_group("hatching/stripes");

    for stripes in [4u32, 16, 64] {
        group.throughput(common::elements_throughput(stripes as usize));
        group.bench_with_input(BenchmarkId::from_parameter(stripes), &stripes, |b, &n| {
            b.iter(|| {
                let lines = hatcher.hatch_with(&tri, 0, n).expect("solvable triangle");
                black_box(lines.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = hatching_mode_benches, hatching_stripe_benches
}
criterion_main!(benches);
