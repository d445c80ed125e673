//! Read/write estimate JSON files.
//!
//! An estimate file is the portable record of a run:
//! - the sampling plan and target label
//! - the best model with its coefficients
//! - the residual of every candidate
//! - the raw measurements, so the run can be re-plotted or re-fitted later

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{ComplexityKind, FitMap, FittedModel, Observations, SamplingPlan};
use crate::error::AppResult;
use crate::estimate::Estimate;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EstimateFile {
    pub tool: String,
    pub generated_at: DateTime<Utc>,
    pub target: String,
    pub plan: SamplingPlan,
    pub best: FittedModel,
    pub fitted: FitMap,
    #[serde(default)]
    pub skipped: Vec<(ComplexityKind, String)>,
    pub observations: Observations,
}

impl EstimateFile {
    pub fn from_estimate(estimate: &Estimate, target: &str, plan: &SamplingPlan) -> Self {
        Self {
            tool: "bigo".to_string(),
            generated_at: Utc::now(),
            target: target.to_string(),
            plan: *plan,
            best: estimate.best.clone(),
            fitted: estimate.fitted.clone(),
            skipped: estimate.skipped.clone(),
            observations: estimate.observations.clone(),
        }
    }
}

/// Write an estimate JSON file.
pub fn write_estimate_json(
    path: &Path,
    estimate: &Estimate,
    target: &str,
    plan: &SamplingPlan,
) -> AppResult<()> {
    let file = BufWriter::new(File::create(path)?);
    let record = EstimateFile::from_estimate(estimate, target, plan);
    serde_json::to_writer_pretty(file, &record)?;
    tracing::debug!(path = %path.display(), "wrote estimate file");
    Ok(())
}

/// Read an estimate JSON file.
pub fn read_estimate_json(path: &Path) -> AppResult<EstimateFile> {
    let file = BufReader::new(File::open(path)?);
    let record: EstimateFile = serde_json::from_reader(file)?;
    Ok(record)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Observation;
    use crate::estimate::infer;

    #[test]
    fn estimate_file_round_trip() {
        let points = (1..=6)
            .map(|i| Observation {
                size: i * 10,
                seconds: 0.1 + 0.01 * (i * 10) as f64,
            })
            .collect();
        let obs = Observations::new(points).unwrap();
        let estimate = infer(obs, &ComplexityKind::ALL, true).unwrap();
        let plan = SamplingPlan {
            min_size: 10,
            max_size: 60,
            num_points: 6,
            ..Default::default()
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimate.json");
        write_estimate_json(&path, &estimate, "linear", &plan).unwrap();

        let back = read_estimate_json(&path).unwrap();
        assert_eq!(back.tool, "bigo");
        assert_eq!(back.target, "linear");
        assert_eq!(back.plan, plan);
        assert_eq!(back.best.kind, ComplexityKind::Linear);
        assert_eq!(back.fitted.residuals().count(), ComplexityKind::ALL.len());
        assert_eq!(back.fitted.measures(), Some(&[10u64, 20, 30, 40, 50, 60][..]));
        assert_eq!(back.observations, estimate.observations);
    }

    #[test]
    fn truncated_coefficients_are_rejected_on_read() {
        let points = (1..=4)
            .map(|i| Observation {
                size: i * 10,
                seconds: 1e-6 * i as f64,
            })
            .collect();
        let obs = Observations::new(points).unwrap();
        let estimate = infer(obs, &[ComplexityKind::Constant, ComplexityKind::Linear], false).unwrap();
        let plan = SamplingPlan {
            min_size: 10,
            max_size: 40,
            num_points: 4,
            ..Default::default()
        };

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("estimate.json");
        write_estimate_json(&path, &estimate, "linear", &plan).unwrap();

        let mut doc: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        doc["best"]["coefficients"] = serde_json::json!([]);
        std::fs::write(&path, doc.to_string()).unwrap();

        let err = read_estimate_json(&path).unwrap_err();
        assert!(matches!(err, crate::error::AppError::Json(_)), "{err}");
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = read_estimate_json(Path::new("/nonexistent/estimate.json")).unwrap_err();
        assert!(matches!(err, crate::error::AppError::Io(_)));
    }
}
