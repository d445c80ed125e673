//! Low-level fitting routine for a single growth form.
//!
//! Given sizes `n_i` and observed times `t_i` we:
//! - transform each size into a design row (`[1, g(n_i)]`)
//! - transform each time into the regression target (`t_i` or `ln t_i`)
//! - solve the OLS problem for the coefficients
//! - compute the SSE of the prediction against the *original* times
//!
//! Computing the residual in time space for every form keeps the residuals of
//! log-space fits (Polynomial, Exponential) comparable with the others.

use nalgebra::{DMatrix, DVector};

use crate::domain::{ComplexityKind, FittedModel, Observations};
use crate::error::{AppError, AppResult};
use crate::math::{solve_least_squares, sum_squared_error};
use crate::models::{fill_design_row, natural_coefficients, predict, transform_time};

/// Fit a single growth form to the observations.
///
/// Fails with [`AppError::IllPosed`] when there are fewer observations than
/// parameters, when the regression is singular, or when the fitted model
/// produces a non-finite residual.
pub fn fit_model(kind: ComplexityKind, observations: &Observations) -> AppResult<FittedModel> {
    let n = observations.len();
    let p = kind.param_count();
    if n < p {
        return Err(AppError::ill_posed(
            kind,
            format!("{n} observations for {p} parameters"),
        ));
    }

    let mut x = DMatrix::<f64>::zeros(n, p);
    let mut y = DVector::<f64>::zeros(n);
    let mut row = vec![0.0; p];

    for (i, obs) in observations.points().iter().enumerate() {
        fill_design_row(kind, obs.size as f64, &mut row);
        for (j, &v) in row.iter().enumerate() {
            x[(i, j)] = v;
        }
        y[i] = transform_time(kind, obs.seconds);
    }

    let beta = solve_least_squares(&x, &y)
        .ok_or_else(|| AppError::ill_posed(kind, "singular least-squares system"))?;
    let coefficients = natural_coefficients(kind, beta.as_slice());

    let predicted: Vec<f64> = observations
        .points()
        .iter()
        .map(|obs| predict(kind, obs.size as f64, &coefficients))
        .collect();
    let residual = sum_squared_error(&observations.times(), &predicted);

    if !residual.is_finite() || coefficients.iter().any(|c| !c.is_finite()) {
        return Err(AppError::ill_posed(kind, "non-finite fit"));
    }

    tracing::debug!(model = %kind, ?coefficients, residual, "fitted growth model");

    Ok(FittedModel {
        kind,
        coefficients,
        residual,
    })
}
