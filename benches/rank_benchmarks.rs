use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use linkrank::algo::{build_view, iterate_rank, sample_rank_with_rng, transition};
use linkrank::graph::Corpus;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Ring of `size` pages where page i links to i+1, i+2 and i+7 (mod size),
/// plus one sink every 50 pages.
fn ring_corpus(size: usize) -> Corpus {
    let mut corpus = Corpus::new();
    for i in 0..size {
        corpus.add_page(format!("{}.html", i));
    }
    for i in 0..size {
        if i % 50 == 49 {
            continue;
        }
        for step in [1, 2, 7] {
            let target = (i + step) % size;
            if target != i {
                corpus
                    .add_link(format!("{}.html", i), format!("{}.html", target))
                    .unwrap();
            }
        }
    }
    corpus
}

/// Benchmark a single transition distribution
fn bench_transition(c: &mut Criterion) {
    let mut group = c.benchmark_group("transition");

    for size in [100, 1000, 10_000].iter() {
        let view = build_view(&ring_corpus(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                criterion::black_box(transition(&view, "0.html", 0.85).unwrap());
            });
        });
    }
    group.finish();
}

/// Benchmark the random-walk estimator
fn bench_sampling(c: &mut Criterion) {
    let mut group = c.benchmark_group("sample_rank");
    group.sample_size(10);

    for size in [100, 1000].iter() {
        let view = build_view(&ring_corpus(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            let mut rng = StdRng::seed_from_u64(42);
            b.iter(|| {
                criterion::black_box(sample_rank_with_rng(&view, 0.85, 10_000, &mut rng).unwrap());
            });
        });
    }
    group.finish();
}

/// Benchmark the iterative solver
fn bench_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate_rank");

    for size in [100, 1000, 10_000].iter() {
        let view = build_view(&ring_corpus(*size)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| {
                criterion::black_box(iterate_rank(&view, 0.85).unwrap());
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_transition, bench_sampling, bench_iteration);
criterion_main!(benches);
