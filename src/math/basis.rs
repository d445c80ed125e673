//! Size transforms used as regression columns.
//!
//! Sizes are always `>= 1` (enforced by `Observations`), so `ln n >= 0` and the
//! logarithmic forms are well defined. We still clamp to `SIZE_FLOOR` so a
//! stray zero can never produce `-inf`.

/// Lower clamp applied before taking logarithms of sizes.
const SIZE_FLOOR: f64 = 1.0;

/// Lower clamp applied to durations before taking logarithms (seconds).
///
/// Timers can legitimately report zero for very fast callables.
pub const TIME_FLOOR: f64 = 1e-12;

/// `ln n`, guarded for `n < 1`.
pub fn log_n(n: f64) -> f64 {
    n.max(SIZE_FLOOR).ln()
}

/// `n · ln n`, guarded for `n < 1`.
pub fn n_log_n(n: f64) -> f64 {
    let n = n.max(SIZE_FLOOR);
    n * n.ln()
}

/// `ln t`, guarded for zero (and negative) durations.
pub fn log_time(t: f64) -> f64 {
    t.max(TIME_FLOOR).ln()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logs_are_finite_at_the_floor() {
        assert_eq!(log_n(1.0), 0.0);
        assert_eq!(log_n(0.0), 0.0);
        assert_eq!(n_log_n(1.0), 0.0);
        assert!(log_time(0.0).is_finite());
        assert!((log_time(0.0) - TIME_FLOOR.ln()).abs() < 1e-12);
    }

    #[test]
    fn n_log_n_matches_definition() {
        let n = 1024.0_f64;
        assert!((n_log_n(n) - n * n.ln()).abs() < 1e-9);
    }
}
