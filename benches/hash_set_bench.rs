use chainset::{HashSet, NaturalOrder};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use std::time::Duration;

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_enter(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash_set::enter");
    group.throughput(Throughput::Elements(10_000));
    for buckets in [64usize, 1024, 16_384] {
        group.bench_function(format!("fresh_10k_{}_buckets", buckets), |b| {
            b.iter_batched(
                || {
                    let keys: Vec<String> = lcg(1).take(10_000).map(key).collect();
                    let h: HashSet<String> =
                        HashSet::with_buckets(buckets, Default::default(), NaturalOrder);
                    (h, keys)
                },
                |(mut h, keys)| {
                    for k in keys {
                        h.enter(k);
                    }
                    black_box(h)
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

fn bench_lookup(c: &mut Criterion) {
    let mut h: HashSet<String> = HashSet::with_buckets(1024, Default::default(), NaturalOrder);
    let keys: Vec<String> = lcg(7).take(20_000).map(key).collect();
    for k in &keys {
        h.enter(k.clone());
    }
    c.bench_function("hash_set_lookup_hit", |b| {
        let mut it = keys.iter().cycle();
        b.iter(|| black_box(h.lookup(it.next().unwrap()).is_some()))
    });
    c.bench_function("hash_set_lookup_miss", |b| {
        let mut miss = lcg(0xdead_beef).map(key);
        b.iter(|| {
            let k = miss.next().unwrap();
            black_box(h.lookup(&k).is_some())
        })
    });
}

fn bench_config() -> Criterion {
    Criterion::default()
        .sample_size(50)
        .measurement_time(Duration::from_secs(8))
        .warm_up_time(Duration::from_secs(2))
}

criterion_group! {
    name = benches;
    config = bench_config();
    targets = bench_enter, bench_lookup
}
criterion_main!(benches);
