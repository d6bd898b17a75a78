//! Criterion microbenches for the map generator and canonicalization.
//!
//! - generate: exhaustive labeled enumeration for a few small degree multisets.
//! - canon: rooted and unrooted forms of randomly relabeled maps.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use rand::{rngs::StdRng, SeedableRng};
use ribbon::generate::{for_each_map, generate_maps, Census, Equivalence};
use ribbon::multiset::DegreeMultiset;

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for spec in ["3 3", "4 4", "3 3 2", "6"] {
        let degrees: DegreeMultiset = spec.parse().unwrap();
        group.bench_function(BenchmarkId::new("labeled", spec), |b| {
            b.iter(|| {
                let stats = for_each_map(&degrees, |_| {});
                stats.emitted
            })
        });
        group.bench_function(BenchmarkId::new("unsensed", spec), |b| {
            b.iter(|| {
                let mut census = Census::new(Equivalence::Unsensed);
                for_each_map(&degrees, |m| {
                    census.offer(m);
                });
                census.kept()
            })
        });
    }
    group.finish();
}

fn bench_canon(c: &mut Criterion) {
    let mut group = c.benchmark_group("canon");
    let degrees: DegreeMultiset = "4 4".parse().unwrap();
    let maps = generate_maps(&degrees);
    group.bench_function(BenchmarkId::new("rooted_form", "4 4"), |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(7);
                maps[0].shuffled(&mut rng)
            },
            |m| m.rooted_form(),
            BatchSize::SmallInput,
        )
    });
    group.bench_function(BenchmarkId::new("unrooted_form", "4 4"), |b| {
        b.iter_batched(
            || {
                let mut rng = StdRng::seed_from_u64(9);
                maps[maps.len() / 2].shuffled(&mut rng)
            },
            |m| m.unrooted_form(false),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_generate, bench_canon);
criterion_main!(benches);
