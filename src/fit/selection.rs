//! Model selection across candidate growth forms.
//!
//! Every candidate is fitted to the same observations and its SSE recorded.
//! The running best is replaced only when a later candidate improves on it by
//! more than [`SIMPLICITY_EPSILON`] times the spread of the observed times (see
//! [`tie_break_scale`]), so among near-equal fits the one listed first wins.
//! The margin is relative: a callable timed in microseconds and one timed in
//! seconds are judged alike. The default registry (`ComplexityKind::ALL`) is ordered from
//! simplest to most complex, which makes that a crude Occam's-razor bias.
//!
//! Candidates that cannot be fitted (too few observations, singular or
//! non-finite fits) are skipped and reported in `Selection::skipped`;
//! selection only fails when no candidate could be fitted at all.

use crate::domain::{ComplexityKind, FitKey, FitMap, FitValue, FittedModel, Observations};
use crate::error::{AppError, AppResult};
use crate::fit::fitter::fit_model;

/// Minimum residual improvement for a later candidate to replace the best,
/// as a fraction of [`tie_break_scale`] (dimensionless).
pub const SIMPLICITY_EPSILON: f64 = 1e-6;

/// Output of fitting + selection.
#[derive(Debug, Clone)]
pub struct Selection {
    pub best: FittedModel,
    /// Fits for all successfully fitted candidates, in candidate order.
    pub fits: Vec<FittedModel>,
    /// Residual per fitted candidate, in candidate order.
    pub residuals: FitMap,
    /// Any candidates that were skipped and why (for diagnostics).
    pub skipped: Vec<(ComplexityKind, String)>,
}

/// Reject empty or duplicated candidate lists.
pub fn validate_candidates(candidates: &[ComplexityKind]) -> AppResult<()> {
    if candidates.is_empty() {
        return Err(AppError::config("No candidate growth models given."));
    }
    for (i, kind) in candidates.iter().enumerate() {
        if candidates[..i].contains(kind) {
            return Err(AppError::config(format!(
                "Candidate {kind} listed more than once."
            )));
        }
    }
    Ok(())
}

/// Fit every candidate and select the best with [`SIMPLICITY_EPSILON`].
pub fn select(observations: &Observations, candidates: &[ComplexityKind]) -> AppResult<Selection> {
    select_with_epsilon(observations, candidates, SIMPLICITY_EPSILON)
}

/// Total sum of squares of the observed times about their mean (seconds²).
///
/// This is the residual of the best constant fit, so `epsilon * scale` is the
/// fraction of the timing variance a later candidate must explain beyond the
/// current best. Floored at `f64::EPSILON * Σt²` so flat data does not turn
/// rounding noise into a winner.
pub fn tie_break_scale(observations: &Observations) -> f64 {
    let times = observations.times();
    if times.is_empty() {
        return 0.0;
    }
    let mean = times.iter().sum::<f64>() / times.len() as f64;
    let total: f64 = times.iter().map(|t| (t - mean) * (t - mean)).sum();
    let energy: f64 = times.iter().map(|t| t * t).sum();
    total.max(f64::EPSILON * energy)
}

/// Fit every candidate and select the best, preferring earlier candidates
/// unless a later one improves the residual by more than
/// `epsilon * tie_break_scale(observations)`.
pub fn select_with_epsilon(
    observations: &Observations,
    candidates: &[ComplexityKind],
    epsilon: f64,
) -> AppResult<Selection> {
    validate_candidates(candidates)?;
    if !(epsilon.is_finite() && epsilon >= 0.0) {
        return Err(AppError::config(format!("Invalid tie-break epsilon {epsilon}.")));
    }

    let mut fits: Vec<FittedModel> = Vec::with_capacity(candidates.len());
    let mut residuals = FitMap::new();
    let mut skipped = Vec::new();
    let mut best: Option<usize> = None;
    let mut best_residual = f64::INFINITY;
    let margin = epsilon * tie_break_scale(observations);

    for &kind in candidates {
        let fit = match fit_model(kind, observations) {
            Ok(fit) => fit,
            Err(AppError::IllPosed { model, reason }) => {
                tracing::warn!(model = %model, %reason, "skipping candidate");
                skipped.push((model, reason));
                continue;
            }
            Err(e) => return Err(e),
        };

        residuals.insert(FitKey::Model(kind), FitValue::Residual(fit.residual));
        if fit.residual < best_residual - margin {
            best_residual = fit.residual;
            best = Some(fits.len());
        }
        tracing::debug!("{fit} (r={:e})", fit.residual);
        fits.push(fit);
    }

    let Some(best) = best else {
        let (model, reason) = skipped
            .first()
            .cloned()
            .unwrap_or((candidates[0], "no candidate could be fitted".to_string()));
        return Err(AppError::IllPosed {
            model,
            reason: format!("no candidate could be fitted ({reason})"),
        });
    };

    Ok(Selection {
        best: fits[best].clone(),
        fits,
        residuals,
        skipped,
    })
}
