//! Shared "estimate pipeline" logic for the `bigo` front-end.
//!
//! Workload dispatch lives here so the CLI only deals with presentation:
//! input factory -> timing harness -> per-model fits -> selection.

use crate::data::{integers, large_integers, range_n, seeded};
use crate::domain::{EstimateConfig, Workload};
use crate::error::AppResult;
use crate::estimate::{Estimate, estimate};
use crate::harness::{LogProgress, NoProgress, ProgressSink};
use crate::workloads;

/// Measure the configured workload and select its best-fitting model.
pub fn run_estimate(config: &EstimateConfig) -> AppResult<Estimate> {
    let mut log = LogProgress;
    let mut quiet = NoProgress;
    let progress: &mut dyn ProgressSink = if config.verbose { &mut log } else { &mut quiet };

    let plan = &config.plan;
    let candidates = &config.candidates;
    let raw = config.include_raw;
    let seed = config.seed;

    tracing::info!(
        workload = config.workload.name(),
        min_n = plan.min_size,
        max_n = plan.max_size,
        points = plan.num_points,
        "starting estimate"
    );

    match config.workload {
        Workload::Noop => estimate(
            |v: &Vec<i64>| workloads::first(v),
            seeded(seed, |n, rng| integers(n, -10_000, 10_000, rng)),
            plan,
            candidates,
            raw,
            progress,
        ),
        Workload::Sum => estimate(
            |v: &Vec<i64>| workloads::sum(v),
            seeded(seed, |n, rng| integers(n, -10_000, 10_000, rng)),
            plan,
            candidates,
            raw,
            progress,
        ),
        Workload::Sort => estimate(
            |v: &Vec<i64>| workloads::sorted(v),
            seeded(seed, large_integers),
            plan,
            candidates,
            raw,
            progress,
        ),
        Workload::BinarySearch => estimate(
            |v: &Vec<i64>| workloads::search_sorted(v),
            |n| range_n(n, 0),
            plan,
            candidates,
            raw,
            progress,
        ),
        Workload::Pairs => estimate(
            |v: &Vec<i64>| workloads::count_pairs(v),
            seeded(seed, |n, rng| integers(n, -10_000, 10_000, rng)),
            plan,
            candidates,
            raw,
            progress,
        ),
        Workload::Triples => estimate(
            |v: &Vec<i64>| workloads::count_zero_triples(v),
            seeded(seed, |n, rng| integers(n, -50, 50, rng)),
            plan,
            candidates,
            raw,
            progress,
        ),
    }
}
