//! Execution-time measurement over a range of input sizes.
//!
//! For each sampled size `n`:
//! - the input is built once with `data_gen(n)` (factory cost is not timed)
//! - one timing round calls the callable `repeats` times and records the
//!   cumulative elapsed time
//! - `timing_rounds` rounds are run and the minimum is kept
//!
//! Scheduling jitter only ever adds time, so the minimum is the least
//! corrupted estimate of the true cost.
//!
//! Failures are not caught: an `Err` from [`try_measure`]'s callable aborts the
//! run immediately, and a panic in [`measure`]'s callable unwinds to the caller.

use std::convert::Infallible;
use std::hint::black_box;
use std::time::{Duration, Instant};

use crate::domain::{Observation, Observations, SamplingPlan};
use crate::error::{AppError, AppResult};
use crate::harness::progress::ProgressSink;

/// Integer sizes evenly spaced over `[min_size, max_size]`, both included.
///
/// Each size is the floor of the exact real-valued point. A validated plan
/// guarantees the result is strictly increasing.
pub fn sample_sizes(plan: &SamplingPlan) -> Vec<u64> {
    let k = plan.num_points;
    if k <= 1 {
        return vec![plan.min_size; k];
    }
    let span = u128::from(plan.max_size - plan.min_size);
    let steps = (k - 1) as u128;
    (0..k)
        .map(|i| {
            let offset = span * i as u128 / steps;
            plan.min_size + offset as u64
        })
        .collect()
}

/// Measure an infallible callable.
pub fn measure<I, R, F, G, P>(
    mut func: F,
    data_gen: G,
    plan: &SamplingPlan,
    progress: &mut P,
) -> AppResult<Observations>
where
    F: FnMut(&I) -> R,
    G: FnMut(u64) -> I,
    P: ProgressSink + ?Sized,
{
    try_measure(
        |input: &I| Ok::<R, Infallible>(func(input)),
        data_gen,
        plan,
        progress,
    )
}

/// Measure a fallible callable; the first error aborts the run.
pub fn try_measure<I, R, E, F, G, P>(
    mut func: F,
    mut data_gen: G,
    plan: &SamplingPlan,
    progress: &mut P,
) -> AppResult<Observations>
where
    F: FnMut(&I) -> Result<R, E>,
    G: FnMut(u64) -> I,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    P: ProgressSink + ?Sized,
{
    plan.validate()?;

    let mut points = Vec::with_capacity(plan.num_points);
    for size in sample_sizes(plan) {
        let input = data_gen(size);

        let mut fastest = Duration::MAX;
        for _ in 0..plan.timing_rounds {
            let elapsed = time_round(&mut func, &input, plan.repeats).map_err(|e| {
                AppError::Measurement {
                    size,
                    source: e.into(),
                }
            })?;
            fastest = fastest.min(elapsed);
        }

        let observation = Observation {
            size,
            seconds: fastest.as_secs_f64(),
        };
        progress.observe(&observation);
        points.push(observation);
    }

    Observations::new(points)
}

fn time_round<I, R, E, F>(func: &mut F, input: &I, repeats: usize) -> Result<Duration, E>
where
    F: FnMut(&I) -> Result<R, E>,
{
    let start = Instant::now();
    for _ in 0..repeats {
        black_box(func(black_box(input))?);
    }
    Ok(start.elapsed())
}
