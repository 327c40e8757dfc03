use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lanes::{f32x16, Vector};

mod native;

const DIMENSIONS: usize = 4096;

pub fn elementwise_benchmark(c: &mut Criterion) {
    let a = native::generate_random_vector(DIMENSIONS);
    let b = native::generate_random_vector(DIMENSIONS);
    let mut out = vec![0.0f32; DIMENSIONS];

    let mut group = c.benchmark_group("Elementwise Add");

    for i in 0..=5 {
        group.bench_with_input(BenchmarkId::new("lanes f32x16", i), &i, |bench, _| {
            bench.iter(|| {
                for ((ac, bc), oc) in a
                    .chunks_exact(16)
                    .zip(b.chunks_exact(16))
                    .zip(out.chunks_exact_mut(16))
                {
                    let va = f32x16::from_slice(ac);
                    let vb = f32x16::from_slice(bc);
                    ((va + vb) + 0.5).write_to_slice(oc);
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("Rust Native", i), &i, |bench, _| {
            bench.iter(|| native::muladd_cpu(&a, &b, &mut out))
        });
    }
}

pub fn reduction_benchmark(c: &mut Criterion) {
    let a = native::generate_random_vector(DIMENSIONS);

    let mut group = c.benchmark_group("Horizontal Min");

    for i in 0..=5 {
        group.bench_with_input(BenchmarkId::new("lanes f32x16", i), &i, |bench, _| {
            bench.iter(|| {
                a.chunks_exact(16)
                    .map(|c| f32x16::from_slice(c).reduce_min())
                    .fold(f32::INFINITY, f32::min)
            })
        });
        group.bench_with_input(BenchmarkId::new("Rust Native", i), &i, |bench, _| {
            bench.iter(|| native::reduce_min_cpu(&a))
        });
    }
}

criterion_group!(benches, elementwise_benchmark, reduction_benchmark);
criterion_main!(benches);
