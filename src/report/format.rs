//! Terminal formatting: run header, measurement table and fit diagnostics.
//!
//! We keep formatting code in one place so:
//! - the measurement/fitting code stays clean and testable
//! - output changes are localized (important for snapshot tests)

use crate::domain::{ComplexityKind, FitMap, FittedModel, Observations, SamplingPlan};

/// Header with the run configuration.
pub fn format_header(label: &str, plan: &SamplingPlan) -> String {
    let mut out = String::new();
    out.push_str("=== bigo - empirical complexity estimate ===\n");
    out.push_str(&format!("Target: {label}\n"));
    out.push_str(&format!(
        "Plan: n=[{}, {}] | points={} | repeats={} | rounds={}\n",
        plan.min_size, plan.max_size, plan.num_points, plan.repeats, plan.timing_rounds
    ));
    out
}

/// One row per measured size.
pub fn format_measurements(observations: &Observations) -> String {
    let mut out = String::new();
    out.push_str(&format!("{:>12} {:>14}\n", "n", "time_s"));
    out.push_str(&format!("{:->12} {:->14}\n", "", ""));
    for o in observations.points() {
        out.push_str(&format!("{:>12} {:>14.6e}\n", o.size, o.seconds));
    }
    out
}

/// Residual per candidate (best marked with `*`) followed by the chosen model.
pub fn format_fits(best: &FittedModel, fitted: &FitMap, skipped: &[(ComplexityKind, String)]) -> String {
    let mut out = String::new();

    out.push_str("Model diagnostics:\n");
    for (kind, residual) in fitted.residuals() {
        let chosen = if kind == best.kind { "*" } else { " " };
        out.push_str(&format!(
            "{chosen} {:<13} {:<11} SSE={residual:.6e}\n",
            kind.display_name(),
            kind.notation()
        ));
    }
    for (kind, reason) in skipped {
        out.push_str(&format!("  (skipped {}) {reason}\n", kind.display_name()));
    }

    out.push_str("\nBest fit:\n");
    out.push_str(&format!("- {} {}\n", best.kind.notation(), best));
    out
}
