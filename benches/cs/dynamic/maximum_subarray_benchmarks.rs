use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use maxsub::cs::randomized::random_integers;
use maxsub::{BruteForce, DynamicProgramming, SubarraySolver};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

fn bench_solvers(c: &mut Criterion) {
    let mut group = c.benchmark_group("maximum_subarray");
    let mut rng = ChaCha20Rng::seed_from_u64(42);

    for &size in &[16, 64, 256] {
        let data = random_integers(&mut rng, size);
        group.bench_with_input(BenchmarkId::new("brute_force", size), &data, |b, data| {
            b.iter(|| BruteForce.solve(black_box(data)))
        });
        group.bench_with_input(
            BenchmarkId::new("dynamic_programming", size),
            &data,
            |b, data| b.iter(|| DynamicProgramming.solve(black_box(data))),
        );
    }

    for &size in &[1_000, 100_000] {
        let data = random_integers(&mut rng, size);
        group.bench_with_input(
            BenchmarkId::new("dynamic_programming", size),
            &data,
            |b, data| b.iter(|| DynamicProgramming.solve(black_box(data))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_solvers);
criterion_main!(benches);
