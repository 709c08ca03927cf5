use algos_partition::sort::{deterministic_quicksort, randomized_quicksort_with_rng};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SIZES: &[usize] = &[1_000, 2_000, 5_000, 8_000, 10_000];
const DISTRIBUTIONS: &[&str] = &["random", "sorted", "reversed", "repeated"];

fn generate(n: usize, kind: &str, rng: &mut StdRng) -> Vec<u64> {
    match kind {
        "random" => (0..n).map(|_| rng.gen_range(0..=10 * n as u64)).collect(),
        "sorted" => (0..n as u64).collect(),
        "reversed" => (1..=n as u64).rev().collect(),
        "repeated" => (0..n).map(|_| rng.gen_range(0..=50)).collect(),
        _ => unreachable!("unknown distribution {}", kind),
    }
}

fn bench_quicksort(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);

    for &kind in DISTRIBUTIONS {
        let mut group = c.benchmark_group(format!("quicksort_{}", kind));
        for &n in SIZES {
            let input = generate(n, kind, &mut rng);

            group.bench_with_input(BenchmarkId::new("deterministic", n), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| {
                        deterministic_quicksort(&mut data);
                        black_box(data)
                    },
                    BatchSize::SmallInput,
                )
            });

            let mut pivot_rng = StdRng::seed_from_u64(7);
            group.bench_with_input(BenchmarkId::new("randomized", n), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| {
                        randomized_quicksort_with_rng(&mut data, &mut pivot_rng);
                        black_box(data)
                    },
                    BatchSize::SmallInput,
                )
            });

            group.bench_with_input(BenchmarkId::new("std_sort_unstable", n), &input, |b, input| {
                b.iter_batched(
                    || input.clone(),
                    |mut data| {
                        data.sort_unstable();
                        black_box(data)
                    },
                    BatchSize::SmallInput,
                )
            });
        }
        group.finish();
    }
}

criterion_group!(benches, bench_quicksort);
criterion_main!(benches);
