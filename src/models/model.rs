//! Model evaluation for each growth form.
//!
//! The fitter relies on three primitive operations:
//! - build a design row for a given size (for OLS)
//! - transform an observed time into the regression target
//! - predict `t(n)` from fitted coefficients (for residuals/plots)
//!
//! Coefficients are stored in each form's natural parameterisation:
//!
//! | kind         | coefficients | prediction       |
//! |--------------|--------------|------------------|
//! | Constant     | `[a]`        | `a`              |
//! | Logarithmic  | `[a, b]`     | `a + b·ln n`     |
//! | Linear       | `[a, b]`     | `a + b·n`        |
//! | Linearithmic | `[a, b]`     | `a + b·n·ln n`   |
//! | Quadratic    | `[a, b]`     | `a + b·n²`       |
//! | Cubic        | `[a, b]`     | `a + b·n³`       |
//! | Polynomial   | `[a, b]`     | `a·n^b`          |
//! | Exponential  | `[a, c]`     | `a·c^n`          |

use std::fmt;

use crate::domain::{ComplexityKind, FittedModel};
use crate::math::{log_n, log_time, n_log_n};

/// Fill a design row for the given model kind.
///
/// The row includes the constant term first (intercept).
///
/// # Panics
/// Panics if `out` is shorter than `kind.param_count()`.
pub fn fill_design_row(kind: ComplexityKind, n: f64, out: &mut [f64]) {
    out[0] = 1.0;
    match kind {
        ComplexityKind::Constant => {}
        ComplexityKind::Logarithmic => out[1] = log_n(n),
        ComplexityKind::Linear => out[1] = n,
        ComplexityKind::Linearithmic => out[1] = n_log_n(n),
        ComplexityKind::Quadratic => out[1] = n * n,
        ComplexityKind::Cubic => out[1] = n * n * n,
        ComplexityKind::Polynomial => out[1] = log_n(n),
        ComplexityKind::Exponential => out[1] = n,
    }
}

/// Whether the regression target is `ln t` rather than `t`.
pub fn fits_log_time(kind: ComplexityKind) -> bool {
    matches!(kind, ComplexityKind::Polynomial | ComplexityKind::Exponential)
}

/// Regression target for an observed duration (seconds).
pub fn transform_time(kind: ComplexityKind, t: f64) -> f64 {
    if fits_log_time(kind) { log_time(t) } else { t }
}

/// Map regression coefficients to the natural parameterisation.
pub fn natural_coefficients(kind: ComplexityKind, beta: &[f64]) -> Vec<f64> {
    match kind {
        ComplexityKind::Polynomial => vec![beta[0].exp(), beta[1]],
        ComplexityKind::Exponential => vec![beta[0].exp(), beta[1].exp()],
        _ => beta.to_vec(),
    }
}

/// Predict `t(n)` (seconds) for the given model kind.
pub fn predict(kind: ComplexityKind, n: f64, coeffs: &[f64]) -> f64 {
    match kind {
        ComplexityKind::Constant => coeffs[0],
        ComplexityKind::Logarithmic => coeffs[0] + coeffs[1] * log_n(n),
        ComplexityKind::Linear => coeffs[0] + coeffs[1] * n,
        ComplexityKind::Linearithmic => coeffs[0] + coeffs[1] * n_log_n(n),
        ComplexityKind::Quadratic => coeffs[0] + coeffs[1] * n * n,
        ComplexityKind::Cubic => coeffs[0] + coeffs[1] * n * n * n,
        ComplexityKind::Polynomial => coeffs[0] * n.powf(coeffs[1]),
        ComplexityKind::Exponential => coeffs[0] * coeffs[1].powf(n),
    }
}

impl FittedModel {
    /// Predicted execution time (seconds) at size `n`.
    pub fn predict(&self, n: f64) -> f64 {
        predict(self.kind, n, &self.coefficients)
    }
}

/// Coefficients are printed in scientific notation with two decimals.
fn fmt_coef(v: f64) -> String {
    format!("{v:.2e}")
}

impl fmt::Display for FittedModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let c = &self.coefficients;
        let a = fmt_coef(c[0]);
        let body = match self.kind {
            ComplexityKind::Constant => a,
            ComplexityKind::Logarithmic => format!("{a} + {}*log(n)", fmt_coef(c[1])),
            ComplexityKind::Linear => format!("{a} + {}*n", fmt_coef(c[1])),
            ComplexityKind::Linearithmic => format!("{a} + {}*n*log(n)", fmt_coef(c[1])),
            ComplexityKind::Quadratic => format!("{a} + {}*n^2", fmt_coef(c[1])),
            ComplexityKind::Cubic => format!("{a} + {}*n^3", fmt_coef(c[1])),
            ComplexityKind::Polynomial => format!("{a} * n^{}", fmt_coef(c[1])),
            ComplexityKind::Exponential => format!("{a} * {}^n", fmt_coef(c[1])),
        };
        write!(f, "{}: time = {body} (sec)", self.kind.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn design_rows_start_with_intercept() {
        for kind in ComplexityKind::ALL {
            let mut row = vec![f64::NAN; kind.param_count()];
            fill_design_row(kind, 8.0, &mut row);
            assert_eq!(row[0], 1.0);
            assert!(row.iter().all(|v| v.is_finite()), "{kind}: {row:?}");
        }
    }

    #[test]
    fn log_space_forms_round_trip_through_natural_coefficients() {
        // t = 3 * n^2  <=>  ln t = ln 3 + 2 ln n
        let coeffs = natural_coefficients(ComplexityKind::Polynomial, &[3.0_f64.ln(), 2.0]);
        assert!((predict(ComplexityKind::Polynomial, 10.0, &coeffs) - 300.0).abs() < 1e-9);

        // t = 2 * 1.5^n  <=>  ln t = ln 2 + n ln 1.5
        let coeffs =
            natural_coefficients(ComplexityKind::Exponential, &[2.0_f64.ln(), 1.5_f64.ln()]);
        assert!((predict(ComplexityKind::Exponential, 4.0, &coeffs) - 10.125).abs() < 1e-9);
    }

    #[test]
    fn zero_time_is_guarded_for_log_targets() {
        assert!(transform_time(ComplexityKind::Exponential, 0.0).is_finite());
        assert_eq!(transform_time(ComplexityKind::Linear, 0.0), 0.0);
    }

    #[test]
    fn render_shows_name_and_rounded_coefficients() {
        let model = FittedModel {
            kind: ComplexityKind::Linear,
            coefficients: vec![0.001234, 0.0000056789],
            residual: 0.0,
        };
        assert_eq!(model.to_string(), "Linear: time = 1.23e-3 + 5.68e-6*n (sec)");

        let model = FittedModel {
            kind: ComplexityKind::Constant,
            coefficients: vec![2.5],
            residual: 0.0,
        };
        assert_eq!(model.to_string(), "Constant: time = 2.50e0 (sec)");
    }
}
