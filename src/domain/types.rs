//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during measurement and fitting
//! - exported to JSON
//! - reloaded later for printing and plotting

use std::fmt;
use std::path::PathBuf;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Candidate growth form for the execution time of a callable.
///
/// Variants are declared from simplest to most complex; the derived `Ord`
/// follows that ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityKind {
    /// `t = a`
    Constant,
    /// `t = a + b·ln n`
    Logarithmic,
    /// `t = a + b·n`
    Linear,
    /// `t = a + b·n·ln n`
    Linearithmic,
    /// `t = a + b·n²`
    Quadratic,
    /// `t = a + b·n³`
    Cubic,
    /// `t = a·n^b`, fitted in log-log space.
    Polynomial,
    /// `t = a·c^n`, fitted in log-linear space.
    Exponential,
}

impl ComplexityKind {
    /// The default candidate registry, simplest first.
    pub const ALL: [ComplexityKind; 8] = [
        ComplexityKind::Constant,
        ComplexityKind::Logarithmic,
        ComplexityKind::Linear,
        ComplexityKind::Linearithmic,
        ComplexityKind::Quadratic,
        ComplexityKind::Cubic,
        ComplexityKind::Polynomial,
        ComplexityKind::Exponential,
    ];

    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            ComplexityKind::Constant => "Constant",
            ComplexityKind::Logarithmic => "Logarithmic",
            ComplexityKind::Linear => "Linear",
            ComplexityKind::Linearithmic => "Linearithmic",
            ComplexityKind::Quadratic => "Quadratic",
            ComplexityKind::Cubic => "Cubic",
            ComplexityKind::Polynomial => "Polynomial",
            ComplexityKind::Exponential => "Exponential",
        }
    }

    /// Big-O notation for the growth form.
    pub fn notation(self) -> &'static str {
        match self {
            ComplexityKind::Constant => "O(1)",
            ComplexityKind::Logarithmic => "O(log n)",
            ComplexityKind::Linear => "O(n)",
            ComplexityKind::Linearithmic => "O(n log n)",
            ComplexityKind::Quadratic => "O(n^2)",
            ComplexityKind::Cubic => "O(n^3)",
            ComplexityKind::Polynomial => "O(n^k)",
            ComplexityKind::Exponential => "O(c^n)",
        }
    }

    /// Number of free parameters (coefficients) fitted for this form.
    pub fn param_count(self) -> usize {
        match self {
            ComplexityKind::Constant => 1,
            _ => 2,
        }
    }
}

impl fmt::Display for ComplexityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// One measured `(input size, execution time)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub size: u64,
    /// Minimum total time across timing rounds, in seconds.
    pub seconds: f64,
}

/// Ordered observation set with strictly increasing sizes.
///
/// Construction validates the invariants; the set is read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Observations {
    points: Vec<Observation>,
}

impl Observations {
    pub fn new(points: Vec<Observation>) -> AppResult<Self> {
        for p in &points {
            if p.size == 0 {
                return Err(AppError::config("Observation sizes must be >= 1."));
            }
            if !(p.seconds.is_finite() && p.seconds >= 0.0) {
                return Err(AppError::config(format!(
                    "Observation at n={} has invalid duration {}.",
                    p.size, p.seconds
                )));
            }
        }
        if points.windows(2).any(|w| w[1].size <= w[0].size) {
            return Err(AppError::config(
                "Observation sizes must be strictly increasing.",
            ));
        }
        Ok(Self { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn points(&self) -> &[Observation] {
        &self.points
    }

    pub fn sizes(&self) -> Vec<u64> {
        self.points.iter().map(|p| p.size).collect()
    }

    pub fn times(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.seconds).collect()
    }
}

impl<'de> Deserialize<'de> for Observations {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            points: Vec<Observation>,
        }
        let raw = Raw::deserialize(deserializer)?;
        Observations::new(raw.points).map_err(serde::de::Error::custom)
    }
}

/// How observations are collected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingPlan {
    pub min_size: u64,
    pub max_size: u64,
    /// Number of sizes sampled, both endpoints included.
    pub num_points: usize,
    /// Calls of the callable per timing round (times are cumulative).
    pub repeats: usize,
    /// Timing rounds per size; the minimum round total is kept.
    pub timing_rounds: usize,
}

impl Default for SamplingPlan {
    fn default() -> Self {
        Self {
            min_size: 100,
            max_size: 100_000,
            num_points: 10,
            repeats: 1,
            timing_rounds: 1,
        }
    }
}

impl SamplingPlan {
    pub fn validate(&self) -> AppResult<()> {
        if self.num_points == 0 {
            return Err(AppError::config("Number of sample points must be > 0."));
        }
        if self.min_size == 0 {
            return Err(AppError::config("Minimum size must be >= 1."));
        }
        if self.max_size < self.min_size {
            return Err(AppError::config(format!(
                "Maximum size ({}) is below minimum size ({}).",
                self.max_size, self.min_size
            )));
        }
        if self.num_points == 1 && self.min_size != self.max_size {
            return Err(AppError::config(
                "A single sample point cannot cover both ends of the size range.",
            ));
        }
        let distinct = u128::from(self.max_size - self.min_size) + 1;
        if self.num_points as u128 > distinct {
            return Err(AppError::config(format!(
                "{} sample points requested but only {distinct} distinct sizes in [{}, {}].",
                self.num_points, self.min_size, self.max_size
            )));
        }
        if self.repeats == 0 {
            return Err(AppError::config("Repeats per timing round must be > 0."));
        }
        if self.timing_rounds == 0 {
            return Err(AppError::config("Timing rounds must be > 0."));
        }
        Ok(())
    }
}

/// A growth model after fitting: coefficients plus the residual of the fit.
///
/// Coefficients are in the model's natural parameterisation, see
/// [`crate::models::predict`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FittedModel {
    pub kind: ComplexityKind,
    pub coefficients: Vec<f64>,
    /// Sum of squared errors against the observed times (seconds²).
    pub residual: f64,
}

/// Reloaded models must carry exactly `kind.param_count()` finite coefficients;
/// prediction and rendering index them directly.
impl<'de> Deserialize<'de> for FittedModel {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        struct Raw {
            kind: ComplexityKind,
            coefficients: Vec<f64>,
            residual: f64,
        }
        let raw = Raw::deserialize(deserializer)?;
        let expected = raw.kind.param_count();
        if raw.coefficients.len() != expected {
            return Err(serde::de::Error::custom(format!(
                "{} model needs {expected} coefficients, got {}",
                raw.kind,
                raw.coefficients.len()
            )));
        }
        if raw.coefficients.iter().any(|c| !c.is_finite()) {
            return Err(serde::de::Error::custom(format!(
                "{} model has non-finite coefficients",
                raw.kind
            )));
        }
        Ok(FittedModel {
            kind: raw.kind,
            coefficients: raw.coefficients,
            residual: raw.residual,
        })
    }
}

/// Key of a [`FitMap`] entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitKey {
    Model(ComplexityKind),
    /// Raw measured sizes.
    Measures,
    /// Raw measured times (seconds).
    Times,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FitValue {
    Residual(f64),
    Measures(Vec<u64>),
    Times(Vec<f64>),
}

/// Insertion-ordered map of fit results.
///
/// Model entries appear in candidate order; raw-data entries (when present)
/// follow them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FitMap {
    entries: Vec<(FitKey, FitValue)>,
}

impl FitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace an entry, keeping the original position on replace.
    pub fn insert(&mut self, key: FitKey, value: FitValue) {
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((key, value)),
        }
    }

    pub fn get(&self, key: FitKey) -> Option<&FitValue> {
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn residual(&self, kind: ComplexityKind) -> Option<f64> {
        match self.get(FitKey::Model(kind)) {
            Some(FitValue::Residual(r)) => Some(*r),
            _ => None,
        }
    }

    /// Model entries only, in candidate order.
    pub fn residuals(&self) -> impl Iterator<Item = (ComplexityKind, f64)> + '_ {
        self.entries.iter().filter_map(|(k, v)| match (k, v) {
            (FitKey::Model(kind), FitValue::Residual(r)) => Some((*kind, *r)),
            _ => None,
        })
    }

    pub fn measures(&self) -> Option<&[u64]> {
        match self.get(FitKey::Measures) {
            Some(FitValue::Measures(v)) => Some(v),
            _ => None,
        }
    }

    pub fn times(&self) -> Option<&[f64]> {
        match self.get(FitKey::Times) {
            Some(FitValue::Times(v)) => Some(v),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &(FitKey, FitValue)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Built-in workloads the `bigo` binary can measure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Workload {
    /// Read the first element.
    Noop,
    /// Sum a sequence of random integers.
    Sum,
    /// Sort a copy of a sequence of random integers.
    Sort,
    /// Binary search in a sorted range.
    BinarySearch,
    /// Visit every ordered pair of elements.
    Pairs,
    /// Visit every ordered triple of elements.
    Triples,
}

impl Workload {
    /// Name as accepted on the command line.
    pub fn name(self) -> &'static str {
        match self {
            Workload::Noop => "noop",
            Workload::Sum => "sum",
            Workload::Sort => "sort",
            Workload::BinarySearch => "binary-search",
            Workload::Pairs => "pairs",
            Workload::Triples => "triples",
        }
    }

    /// Largest size measured when none is given; keeps the polynomial
    /// workloads within a few seconds per run.
    pub fn default_max_size(self) -> u64 {
        match self {
            Workload::Pairs => 2_000,
            Workload::Triples => 200,
            _ => SamplingPlan::default().max_size,
        }
    }
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct EstimateConfig {
    pub workload: Workload,
    pub plan: SamplingPlan,
    pub candidates: Vec<ComplexityKind>,
    pub include_raw: bool,
    pub seed: u64,
    pub verbose: bool,

    pub plot: bool,
    pub plot_width: usize,
    pub plot_height: usize,

    pub export: Option<PathBuf>,
}
