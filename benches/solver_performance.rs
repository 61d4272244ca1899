//! Performance benchmarks for Vogel's Approximation Method
//!
//! Measures how solving time grows with problem size, and how the two
//! selection rules compare on identical problems.
//!
//! # What We're Measuring
//!
//! Every VAM iteration rescans all open rows and columns, and there are at
//! most `origins + destinations - 1` iterations. On a square `n × n`
//! problem this gives:
//!
//! ```text
//! scan per iteration : O(n²)
//! iterations         : O(n)
//! total              : O(n³)
//! ```
//!
//! Doubling `n` should therefore cost roughly 8× as much.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all solver benchmarks
//! cargo bench --bench solver_performance
//!
//! # Only the scaling group
//! cargo bench --bench solver_performance scaling
//!
//! # Rule comparison
//! cargo bench --bench solver_performance comparison
//!
//! # With rayon scans enabled
//! cargo bench --bench solver_performance --features parallel
//! ```

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use vogel_rs::problem::TransportProblem;
use vogel_rs::solver::{SelectionRule, Solver, SolverConfiguration, VogelSolver};

// =================================================================================================
// Problem Generator
// =================================================================================================

/// Balanced `rows × cols` problem with pseudo-random costs
///
/// Deterministic so that consecutive runs compare the same work.
fn generate_problem(rows: usize, cols: usize, seed: u64) -> TransportProblem {
    let mut state = seed;
    let mut next = |bound: i64| {
        state = state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        ((state >> 33) % bound as u64) as i64
    };

    let mut supply: Vec<i64> = (0..rows).map(|_| 10 + next(90)).collect();
    let mut demand: Vec<i64> = (0..cols).map(|_| 10 + next(90)).collect();
    let costs: Vec<Vec<i64>> = (0..rows)
        .map(|_| (0..cols).map(|_| 1 + next(100)).collect())
        .collect();

    let diff = supply.iter().sum::<i64>() - demand.iter().sum::<i64>();
    if diff > 0 {
        demand[cols - 1] += diff;
    } else {
        supply[rows - 1] -= diff;
    }

    // Generated inputs are well-formed by construction
    TransportProblem::from_rows(supply, demand, &costs).unwrap()
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Square problems of growing size under the default rule
///
/// # Expected Scaling
///
/// ```text
/// n=10:   baseline
/// n=20:   ~8× slower
/// n=50:   ~125× slower
/// n=100:  ~1000× slower
/// ```
///
/// Departures from cubic growth usually come from the scans falling out
/// of cache, or from the rayon path kicking in past the parallel
/// threshold when the `parallel` feature is on.
fn benchmark_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("scaling");
    let solver = VogelSolver::new();
    let config = SolverConfiguration::default();

    for n in [10usize, 20, 50, 100] {
        // Setup phase (not measured)
        let problem = generate_problem(n, n, n as u64);

        group.throughput(Throughput::Elements((n * n) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &problem, |b, problem| {
            b.iter(|| solver.solve(black_box(problem), black_box(&config)).unwrap());
        });
    }

    group.finish();
}

/// Shape-aware versus textbook selection on the same problems
///
/// Both rules run identical scans; only the reconciliation of the strongest
/// row and column differs, so times should be within noise of each other.
fn benchmark_rule_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("comparison");
    let solver = VogelSolver::new();

    for (rows, cols) in [(20usize, 60usize), (60, 20), (40, 40)] {
        let problem = generate_problem(rows, cols, (rows * cols) as u64);
        let label = format!("{}x{}", rows, cols);

        for rule in [SelectionRule::ShapeAware, SelectionRule::Textbook] {
            let config = SolverConfiguration::default().with_selection(rule);

            group.bench_with_input(BenchmarkId::new(rule.name(), &label), &problem, |b, problem| {
                b.iter(|| solver.solve(black_box(problem), black_box(&config)).unwrap());
            });
        }
    }

    group.finish();
}

/// Very rectangular problems
///
/// Iteration count is bounded by `rows + cols - 1` while each scan costs
/// `rows × cols`, so a 5 × 400 problem behaves quite differently from a
/// 45 × 45 one despite similar cell counts.
fn benchmark_rectangular(c: &mut Criterion) {
    let mut group = c.benchmark_group("rectangular");
    let solver = VogelSolver::new();
    let config = SolverConfiguration::default();

    for (rows, cols) in [(5usize, 400usize), (400, 5), (45, 45)] {
        let problem = generate_problem(rows, cols, 7);

        group.throughput(Throughput::Elements((rows * cols) as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{}x{}", rows, cols)),
            &problem,
            |b, problem| {
                b.iter(|| solver.solve(black_box(problem), black_box(&config)).unwrap());
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_scaling,
    benchmark_rule_comparison,
    benchmark_rectangular,
);
criterion_main!(benches);
