//! Criterion benchmarks for the valuation engines.
//!
//! Measures closed-form, Monte Carlo and lattice pricing across sample and
//! step counts to characterise scaling behaviour.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vanilla_core::traits::PricingEngine;
use vanilla_core::types::{OptionContract, OptionKind};
use vanilla_engines::analytical::BlackScholesEngine;
use vanilla_engines::lattice::BinomialTree;
use vanilla_engines::mc::{MonteCarloConfig, MonteCarloPricer};

fn standard_contract() -> OptionContract {
    OptionContract::new(100.0, 100.0, 1.0, 0.05, 0.2, OptionKind::Call).unwrap()
}

/// Benchmark the closed-form engine.
fn bench_black_scholes(c: &mut Criterion) {
    let contract = standard_contract();
    c.bench_function("black_scholes_call", |b| {
        b.iter(|| BlackScholesEngine.price(black_box(&contract)).unwrap());
    });
}

/// Benchmark Monte Carlo with and without antithetic variates.
fn bench_monte_carlo(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo");
    group.sample_size(20);
    let contract = standard_contract();

    for n in [10_000, 100_000, 1_000_000] {
        for antithetic in [false, true] {
            let pricer = MonteCarloPricer::new(
                MonteCarloConfig::builder()
                    .num_simulations(n)
                    .seed(42)
                    .antithetic(antithetic)
                    .build()
                    .unwrap(),
            );
            let label = if antithetic { "antithetic" } else { "plain" };
            group.bench_with_input(BenchmarkId::new(label, n), &pricer, |b, pricer| {
                b.iter(|| pricer.price(black_box(&contract)).unwrap());
            });
        }
    }

    group.finish();
}

/// Benchmark the lattice on both sides of the parallel level threshold.
fn bench_binomial_tree(c: &mut Criterion) {
    let mut group = c.benchmark_group("binomial_tree");
    group.sample_size(20);
    let contract = standard_contract();

    for steps in [200, 2_000, 20_000] {
        let tree = BinomialTree::new(steps).unwrap();
        group.bench_with_input(BenchmarkId::new("default", steps), &tree, |b, tree| {
            b.iter(|| tree.price(black_box(&contract)).unwrap());
        });

        let sequential = tree.with_parallel_width(usize::MAX);
        group.bench_with_input(
            BenchmarkId::new("sequential", steps),
            &sequential,
            |b, tree| {
                b.iter(|| tree.price(black_box(&contract)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_black_scholes,
    bench_monte_carlo,
    bench_binomial_tree
);
criterion_main!(benches);
