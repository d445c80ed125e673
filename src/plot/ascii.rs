//! ASCII plotting for terminal output.
//!
//! A fixed-size character grid, deterministic so it can be golden-tested.
//!
//! Plot elements:
//! - measured points: `o`
//! - fitted curve: `-`, one sample per column

use crate::domain::{FittedModel, Observations};

/// Render measured points, optionally overlaid with a fitted model.
pub fn render_ascii_plot(
    observations: &Observations,
    fit: Option<&FittedModel>,
    width: usize,
    height: usize,
) -> String {
    let width = width.max(10);
    let height = height.max(5);

    let sizes = observations.points().iter().map(|o| o.size as f64);
    let x_axis = Axis::spanning(sizes, width).unwrap_or(Axis { lo: 0.0, hi: 1.0, cells: width });

    // Curve samples at column centres; non-finite predictions leave a gap.
    let curve: Vec<Option<f64>> = match fit {
        Some(model) => (0..width)
            .map(|col| Some(model.predict(x_axis.value(col))).filter(|t| t.is_finite()))
            .collect(),
        None => Vec::new(),
    };

    let times = observations
        .points()
        .iter()
        .map(|o| o.seconds)
        .chain(curve.iter().flatten().copied());
    let y_axis = Axis::spanning(times, height)
        .unwrap_or(Axis { lo: 0.0, hi: 1.0, cells: height })
        .padded(0.05);
    let row_of = |t: f64| height - 1 - y_axis.cell(t);

    let mut grid = vec![vec![' '; width]; height];

    let mut prev_row: Option<usize> = None;
    for (col, t) in curve.iter().enumerate() {
        let Some(t) = *t else {
            prev_row = None;
            continue;
        };
        let row = row_of(t);
        // Close vertical jumps so steep curves stay connected.
        let (top, bottom) = match prev_row {
            Some(prev) => (prev.min(row), prev.max(row)),
            None => (row, row),
        };
        for line in grid.iter_mut().take(bottom + 1).skip(top) {
            line[col] = '-';
        }
        prev_row = Some(row);
    }

    for o in observations.points() {
        grid[row_of(o.seconds)][x_axis.cell(o.size as f64)] = 'o';
    }

    let mut out = format!(
        "Plot: n=[{:.0}, {:.0}] | time=[{:.3e}, {:.3e}]s\n",
        x_axis.lo, x_axis.hi, y_axis.lo, y_axis.hi
    );
    for line in grid {
        out.extend(line);
        out.push('\n');
    }
    out
}

/// Linear mapping between a value range and `cells` grid positions.
#[derive(Debug, Clone, Copy)]
struct Axis {
    lo: f64,
    hi: f64,
    cells: usize,
}

impl Axis {
    /// `None` unless the values have a finite, non-empty range.
    fn spanning(values: impl Iterator<Item = f64>, cells: usize) -> Option<Self> {
        let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| {
            (lo.min(v), hi.max(v))
        });
        (lo.is_finite() && hi.is_finite() && hi > lo).then_some(Axis { lo, hi, cells })
    }

    fn padded(self, frac: f64) -> Self {
        let pad = ((self.hi - self.lo) * frac).max(1e-12);
        Axis {
            lo: self.lo - pad,
            hi: self.hi + pad,
            ..self
        }
    }

    fn last(&self) -> f64 {
        self.cells.saturating_sub(1).max(1) as f64
    }

    fn cell(&self, v: f64) -> usize {
        let u = ((v - self.lo) / (self.hi - self.lo)).clamp(0.0, 1.0);
        (u * self.last()).round() as usize
    }

    fn value(&self, cell: usize) -> f64 {
        self.lo + (self.hi - self.lo) * cell as f64 / self.last()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ComplexityKind, Observation};

    #[test]
    fn plot_golden_snapshot_small() {
        let obs = Observations::new(vec![
            Observation { size: 1, seconds: 1.0 },
            Observation { size: 10, seconds: 11.0 },
        ])
        .unwrap();
        let fit = FittedModel {
            kind: ComplexityKind::Constant,
            coefficients: vec![1.0],
            residual: 0.0,
        };

        let txt = render_ascii_plot(&obs, Some(&fit), 10, 5);
        let expected = concat!(
            "Plot: n=[1, 10] | time=[5.000e-1, 1.150e1]s\n",
            "         o\n",
            "          \n",
            "          \n",
            "          \n",
            "o---------\n",
        );
        assert_eq!(txt, expected);
    }

    #[test]
    fn plot_without_fit_has_only_points() {
        let obs = Observations::new(vec![
            Observation { size: 5, seconds: 0.2 },
            Observation { size: 6, seconds: 0.1 },
        ])
        .unwrap();
        let txt = render_ascii_plot(&obs, None, 12, 6);
        let rows: Vec<&str> = txt.lines().skip(1).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows.iter().map(|r| r.matches('o').count()).sum::<usize>(), 2);
        assert!(rows.iter().all(|r| !r.contains('-')));
    }

    #[test]
    fn fitted_curve_covers_every_column() {
        let obs = Observations::new(vec![
            Observation { size: 1, seconds: 0.0 },
            Observation { size: 100, seconds: 1.0 },
        ])
        .unwrap();
        let fit = FittedModel {
            kind: ComplexityKind::Linear,
            coefficients: vec![-1.0 / 99.0, 1.0 / 99.0],
            residual: 0.0,
        };

        let txt = render_ascii_plot(&obs, Some(&fit), 20, 8);
        let rows: Vec<Vec<char>> = txt.lines().skip(1).map(|r| r.chars().collect()).collect();
        assert_eq!(rows.len(), 8);
        for col in 0..20 {
            assert!(rows.iter().any(|r| r[col] != ' '), "empty column {col}\n{txt}");
        }
        assert_eq!(rows[7][0], 'o');
        assert_eq!(rows[0][19], 'o');
    }
}
