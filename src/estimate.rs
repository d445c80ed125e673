//! Estimate the complexity class of a callable: measure, then select.
//!
//! All configuration checks run before the first measurement, so a bad plan
//! or candidate list never costs a timing run.

use crate::domain::{
    ComplexityKind, FitKey, FitMap, FitValue, FittedModel, Observations, SamplingPlan,
};
use crate::error::{AppError, AppResult};
use crate::fit::selection::{Selection, select, validate_candidates};
use crate::harness::{ProgressSink, measure, try_measure};

/// Result of a full estimate run.
#[derive(Debug, Clone)]
pub struct Estimate {
    pub best: FittedModel,
    /// Residual per fitted candidate, plus `Measures`/`Times` entries when
    /// raw data was requested.
    pub fitted: FitMap,
    /// All fitted candidates, in candidate order.
    pub fits: Vec<FittedModel>,
    pub skipped: Vec<(ComplexityKind, String)>,
    pub observations: Observations,
}

/// Measure `func` over `plan` and select the best of `candidates`.
pub fn estimate<I, R, F, G, P>(
    func: F,
    data_gen: G,
    plan: &SamplingPlan,
    candidates: &[ComplexityKind],
    include_raw: bool,
    progress: &mut P,
) -> AppResult<Estimate>
where
    F: FnMut(&I) -> R,
    G: FnMut(u64) -> I,
    P: ProgressSink + ?Sized,
{
    check_config(plan, candidates)?;
    let observations = measure(func, data_gen, plan, progress)?;
    assemble(observations, candidates, include_raw)
}

/// [`estimate`] for fallible callables; the first error aborts the run.
pub fn try_estimate<I, R, E, F, G, P>(
    func: F,
    data_gen: G,
    plan: &SamplingPlan,
    candidates: &[ComplexityKind],
    include_raw: bool,
    progress: &mut P,
) -> AppResult<Estimate>
where
    F: FnMut(&I) -> Result<R, E>,
    G: FnMut(u64) -> I,
    E: Into<Box<dyn std::error::Error + Send + Sync>>,
    P: ProgressSink + ?Sized,
{
    check_config(plan, candidates)?;
    let observations = try_measure(func, data_gen, plan, progress)?;
    assemble(observations, candidates, include_raw)
}

/// Select over already measured observations (e.g. reloaded raw data).
pub fn infer(
    observations: Observations,
    candidates: &[ComplexityKind],
    include_raw: bool,
) -> AppResult<Estimate> {
    assemble(observations, candidates, include_raw)
}

fn check_config(plan: &SamplingPlan, candidates: &[ComplexityKind]) -> AppResult<()> {
    plan.validate()?;
    validate_candidates(candidates)?;

    let needed = candidates
        .iter()
        .map(|k| k.param_count())
        .max()
        .unwrap_or(1);
    if plan.num_points < needed {
        return Err(AppError::config(format!(
            "{} sample points cannot fit candidates with {needed} parameters.",
            plan.num_points
        )));
    }
    Ok(())
}

fn assemble(
    observations: Observations,
    candidates: &[ComplexityKind],
    include_raw: bool,
) -> AppResult<Estimate> {
    let Selection {
        best,
        fits,
        residuals,
        skipped,
    } = select(&observations, candidates)?;

    let mut fitted = residuals;
    if include_raw {
        fitted.insert(FitKey::Measures, FitValue::Measures(observations.sizes()));
        fitted.insert(FitKey::Times, FitValue::Times(observations.times()));
    }

    Ok(Estimate {
        best,
        fitted,
        fits,
        skipped,
        observations,
    })
}
