//! Least squares solver.
//!
//! Every growth model reduces to a small linear regression problem of the form:
//!
//! ```text
//! minimize Σ (y_i - x_i^T β)^2
//! ```
//!
//! with one or two columns (an intercept plus one transformed size).
//!
//! Implementation choices:
//! - Columns are scaled to unit norm before solving and the coefficients are
//!   unscaled afterwards. Size transforms such as `n³` reach ~1e15 next to an
//!   intercept column of ones; without equilibration the singular values span
//!   far more than the solver tolerance.
//! - We use SVD so tall design matrices (more rows than columns) are handled.
//!   (Nalgebra's `QR::solve` is intended for square systems and will panic for
//!   non-square matrices.)

use nalgebra::{DMatrix, DVector};

/// Solve a least squares problem using SVD.
///
/// Returns `None` if the system is too ill-conditioned to solve robustly.
pub fn solve_least_squares(x: &DMatrix<f64>, y: &DVector<f64>) -> Option<DVector<f64>> {
    if x.nrows() == 0 || x.ncols() == 0 || x.nrows() != y.len() {
        return None;
    }

    let (scaled, scales) = equilibrate(x)?;
    let svd = scaled.svd(true, true);

    // Try progressively looser tolerances if strict solve fails.
    for &tol in &[1e-12, 1e-10, 1e-8] {
        if let Ok(beta) = svd.solve(y, tol) {
            if beta.iter().all(|v| v.is_finite()) {
                return Some(beta.component_div(&scales));
            }
        }
    }

    None
}

/// Scale each column to unit Euclidean norm.
///
/// Returns the scaled matrix and the per-column norms; `None` if a column is
/// all zeros or non-finite.
fn equilibrate(x: &DMatrix<f64>) -> Option<(DMatrix<f64>, DVector<f64>)> {
    let mut scaled = x.clone();
    let mut scales = DVector::<f64>::zeros(x.ncols());
    for j in 0..x.ncols() {
        let norm = x.column(j).norm();
        if !(norm.is_finite() && norm > 0.0) {
            return None;
        }
        scales[j] = norm;
        for i in 0..x.nrows() {
            scaled[(i, j)] /= norm;
        }
    }
    Some((scaled, scales))
}

/// Sum of squared differences between two equally long series.
pub fn sum_squared_error(observed: &[f64], predicted: &[f64]) -> f64 {
    observed
        .iter()
        .zip(predicted)
        .map(|(o, p)| {
            let r = o - p;
            r * r
        })
        .sum()
}
