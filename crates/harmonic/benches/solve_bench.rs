//! Criterion benchmarks for the two handle-solving strategies.
//! Inputs are sampled drags (fixed seed) so both strategies see the same runs.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p harmonic

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use harmonic::api::{
    draw_drag, initial_curvature, ClosedForm, DragSample, HandleSolver, ReplayToken, RootFinder,
    SampleCfg, SolveCfg,
};

fn samples(n: u64, seed: u64) -> Vec<(DragSample, f64)> {
    let cfg = SampleCfg::default();
    (0..n)
        .filter_map(|index| draw_drag(&cfg, ReplayToken { seed, index }))
        .filter_map(|s| initial_curvature(s.case, &s.cubic).ok().map(|k0| (s, k0)))
        .collect()
}

fn run<S: HandleSolver>(solver: &S, input: &[(DragSample, f64)], cfg: &SolveCfg) {
    for (s, k0) in input {
        let _ = black_box(solver.paired_position(s.case, &s.cubic, s.target, *k0, cfg));
    }
}

fn bench_solve(c: &mut Criterion) {
    let cfg = SolveCfg::default();
    let mut group = c.benchmark_group("paired_position");
    for &n in &[1u64, 64, 1024] {
        let input = samples(n, 43);
        group.bench_with_input(BenchmarkId::new("closed_form", n), &input, |b, input| {
            b.iter(|| run(&ClosedForm, input, &cfg))
        });
        group.bench_with_input(BenchmarkId::new("root_finder", n), &input, |b, input| {
            b.iter(|| run(&RootFinder, input, &cfg))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_solve);
criterion_main!(benches);
