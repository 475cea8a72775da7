use containerkit::OrdMap;
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};

fn lcg(mut s: u64) -> impl Iterator<Item = u64> {
    std::iter::from_fn(move || {
        s = s.wrapping_mul(6364136223846793005).wrapping_add(1);
        Some(s)
    })
}

fn key(n: u64) -> String {
    format!("k{:016x}", n)
}

fn bench_insert(c: &mut Criterion) {
    c.bench_function("ord_map_insert_10k", |b| {
        b.iter_batched(
            OrdMap::<String, u64>::new,
            |mut m| {
                for (i, x) in lcg(1).take(10_000).enumerate() {
                    m.insert(key(x), i as u64);
                }
                black_box(m.len())
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_get_hit(c: &mut Criterion) {
    c.bench_function("ord_map_get_hit", |b| {
        let mut m = OrdMap::new();
        let keys: Vec<_> = lcg(7).take(20_000).map(key).collect();
        for (i, k) in keys.iter().cloned().enumerate() {
            m.insert(k, i as u64);
        }
        let mut it = keys.iter().cycle();
        b.iter(|| {
            let k = it.next().unwrap();
            black_box(m.get(k.as_str()));
        })
    });
}

fn bench_ordered_iteration(c: &mut Criterion) {
    c.bench_function("ord_map_iter_10k", |b| {
        let mut m = OrdMap::new();
        for (i, x) in lcg(13).take(10_000).enumerate() {
            m.insert(key(x), i as u64);
        }
        b.iter(|| {
            let mut sum = 0u64;
            for (_k, v) in &m {
                sum = sum.wrapping_add(*v);
            }
            black_box(sum)
        })
    });
}

criterion_group!(benches, bench_insert, bench_get_hit, bench_ordered_iteration);
criterion_main!(benches);
