//! End-to-end estimates on callables with known growth.

use bigo_fit::data::{integers, seeded};
use bigo_fit::domain::{ComplexityKind, SamplingPlan};
use bigo_fit::error::AppError;
use bigo_fit::estimate::estimate;
use bigo_fit::harness::{NoProgress, sample_sizes};
use bigo_fit::workloads;

#[test]
fn linear_loop_is_classified_linear() {
    // Default plan: 10 sizes over [100, 100000], one call per size.
    let plan = SamplingPlan::default();
    let candidates = [
        ComplexityKind::Constant,
        ComplexityKind::Logarithmic,
        ComplexityKind::Linear,
        ComplexityKind::Quadratic,
    ];

    let est = estimate(
        |v: &Vec<i64>| workloads::sum(v),
        seeded(1, |n, rng| integers(n, -1_000, 1_000, rng)),
        &plan,
        &candidates,
        true,
        &mut NoProgress,
    )
    .unwrap();

    assert_eq!(est.best.kind, ComplexityKind::Linear);
    assert_eq!(est.observations.len(), 10);
    assert_eq!(est.fitted.measures().map(<[u64]>::len), Some(10));

    let linear = est.fitted.residual(ComplexityKind::Linear).unwrap();
    for other in [ComplexityKind::Constant, ComplexityKind::Logarithmic] {
        assert!(est.fitted.residual(other).unwrap() > linear);
    }
}

#[test]
fn nested_loop_is_classified_quadratic() {
    let plan = SamplingPlan {
        min_size: 500,
        max_size: 5_000,
        num_points: 10,
        repeats: 1,
        timing_rounds: 3,
    };
    let candidates = [
        ComplexityKind::Constant,
        ComplexityKind::Logarithmic,
        ComplexityKind::Linear,
        ComplexityKind::Linearithmic,
        ComplexityKind::Quadratic,
        ComplexityKind::Cubic,
    ];

    let est = estimate(
        |v: &Vec<i64>| workloads::count_pairs(v),
        seeded(2, |n, rng| integers(n, -1_000, 1_000, rng)),
        &plan,
        &candidates,
        false,
        &mut NoProgress,
    )
    .unwrap();

    assert_eq!(est.best.kind, ComplexityKind::Quadratic);
    let quadratic = est.fitted.residual(ComplexityKind::Quadratic).unwrap();
    assert!(est.fitted.residual(ComplexityKind::Cubic).unwrap() > quadratic);
    assert!(est.fitted.measures().is_none());
}

#[test]
fn sample_sizes_cover_both_endpoints() {
    let plan = SamplingPlan {
        min_size: 100,
        max_size: 100_000,
        num_points: 10,
        repeats: 1,
        timing_rounds: 1,
    };
    let sizes = sample_sizes(&plan);
    assert_eq!(sizes.len(), 10);
    assert_eq!(sizes[0], 100);
    assert_eq!(sizes[9], 100_000);
    assert!(sizes.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn empty_candidate_list_is_rejected_before_timing() {
    let mut calls = 0u32;
    let err = estimate(
        |_: &u64| calls += 1,
        |n| n,
        &SamplingPlan::default(),
        &[],
        false,
        &mut NoProgress,
    )
    .unwrap_err();

    assert!(matches!(err, AppError::Config(_)));
    assert_eq!(calls, 0);
}
