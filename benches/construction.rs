//! Performance benchmarks for index construction and queries
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sus::index::suffix_array::{ComparisonSorter, PrefixDoublingSorter, SaisSorter, SuffixSorter};
use sus::index::SusIndex;

/// Deterministic pseudo-random text over `alphabet`
fn random_text(len: usize, alphabet: &[u8]) -> Vec<u8> {
    let mut state = 0x9e37_79b9_7f4a_7c15u64;
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            alphabet[(state % alphabet.len() as u64) as usize]
        })
        .collect()
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.sample_size(20);

    for &len in &[10_000usize, 100_000] {
        let dna = random_text(len, b"ACGT");
        group.bench_with_input(BenchmarkId::new("dna", len), &dna, |b, text| {
            b.iter(|| SusIndex::build(black_box(text)).unwrap())
        });

        let run = vec![b'a'; len];
        group.bench_with_input(BenchmarkId::new("run", len), &run, |b, text| {
            b.iter(|| SusIndex::build(black_box(text)).unwrap())
        });
    }

    group.finish();
}

fn bench_sorters(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_suffixes");
    let text = random_text(100_000, b"abcdefghijklmnopqrstuvwxyz ");

    group.bench_function("sais", |b| b.iter(|| SaisSorter.sort_suffixes(black_box(&text))));
    group.bench_function("doubling", |b| {
        let sorter = PrefixDoublingSorter::default();
        b.iter(|| sorter.sort_suffixes(black_box(&text)))
    });
    group.bench_function("comparison", |b| {
        let sorter = ComparisonSorter::default();
        b.iter(|| sorter.sort_suffixes(black_box(&text)))
    });

    group.finish();
}

fn bench_queries(c: &mut Criterion) {
    let text = random_text(100_000, b"ACGT");
    let index = SusIndex::build(&text).unwrap();

    c.bench_function("query_all_positions", |b| {
        b.iter(|| {
            let mut total = 0;
            for p in 0..index.len() {
                total += index.query(black_box(p)).unwrap().len();
            }
            total
        })
    });

    c.bench_function("lm_sus_all", |b| b.iter(|| index.lm_sus_all()));

    c.bench_function("query_naive_sampled", |b| {
        b.iter(|| {
            for p in (0..index.len()).step_by(1000) {
                black_box(index.query_naive(p).unwrap());
            }
        })
    });
}

criterion_group!(benches, bench_build, bench_sorters, bench_queries);
criterion_main!(benches);
