use algos_partition::hashing::ChainedHashMap;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};

const SIZES: &[usize] = &[2_000, 8_000, 32_000];
const LOOKUPS: usize = 2_000;

fn random_keys(n: usize, rng: &mut StdRng) -> Vec<u64> {
    (0..n).map(|_| rng.gen_range(1..1_000_000_000)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_hash_map_insert");
    let mut rng = StdRng::seed_from_u64(1);

    for &n in SIZES {
        let keys = random_keys(n, &mut rng);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut map = ChainedHashMap::new();
                for &k in keys {
                    map.insert(black_box(k), k * 2);
                }
                black_box(map)
            })
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("chained_hash_map_search");
    let mut rng = StdRng::seed_from_u64(1);

    for &n in SIZES {
        let keys = random_keys(n, &mut rng);
        let mut map = ChainedHashMap::new();
        for &k in &keys {
            map.insert(k, k * 2);
        }
        let stats = map.bucket_stats();
        println!(
            "n={} capacity={} load_factor={:.3} avg_chain_len={:.3} max_chain_len={}",
            n,
            map.capacity(),
            map.load_factor(),
            stats.avg_chain_len,
            stats.max_chain_len
        );

        let hits: Vec<u64> = (0..LOOKUPS).map(|_| keys[rng.gen_range(0..n)]).collect();
        let misses = random_keys(LOOKUPS, &mut rng);
        group.throughput(Throughput::Elements(LOOKUPS as u64));

        group.bench_with_input(BenchmarkId::new("hit", n), &hits, |b, hits| {
            b.iter(|| {
                for k in hits {
                    black_box(map.search(k));
                }
            })
        });
        group.bench_with_input(BenchmarkId::new("miss", n), &misses, |b, misses| {
            b.iter(|| {
                for k in misses {
                    black_box(map.search(k));
                }
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search);
criterion_main!(benches);
