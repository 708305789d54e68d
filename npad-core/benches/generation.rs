#![allow(missing_docs)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use npad_core::{DEFAULT_ROUGHNESS, NoiseGrid, fill, generate_octaves_with, generate_with};
use npad_utils::random::Mt19937;
use std::hint::black_box;

// ── Single resolution ───────────────────────────────────────────────────────

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for size in [64usize, 256, 1024] {
        group.throughput(criterion::Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}")),
            &size,
            |b, &size| {
                let mut rng = Mt19937::new(0);
                b.iter(|| {
                    black_box(
                        generate_with::<f64, _>(size, size, DEFAULT_ROUGHNESS, &mut rng)
                            .expect("valid dimensions"),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_fill_in_place_f32(c: &mut Criterion) {
    let mut grid = NoiseGrid::<f32>::new(512, 512).expect("valid dimensions");
    let mut rng = Mt19937::new(0);

    c.bench_function("fill_in_place_f32_512x512", |b| {
        b.iter(|| fill(black_box(&mut grid), 0.5, &mut rng));
    });
}

// ── Octaves ─────────────────────────────────────────────────────────────────

fn bench_octaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_octaves");
    for size in [64usize, 256] {
        group.throughput(criterion::Throughput::Elements((size * size) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{size}x{size}")),
            &size,
            |b, &size| {
                let mut rng = Mt19937::new(0);
                b.iter(|| {
                    black_box(
                        generate_octaves_with::<f64, _>(size, size, DEFAULT_ROUGHNESS, &mut rng)
                            .expect("valid dimensions"),
                    )
                });
            },
        );
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_fill_in_place_f32,
    bench_octaves,
);
criterion_main!(benches);
