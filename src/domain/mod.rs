//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - candidate growth forms (`ComplexityKind`)
//! - measured observations (`Observation`, `Observations`) and the `SamplingPlan`
//! - fit outputs (`FittedModel`, `FitMap`)
//! - run configuration (`EstimateConfig`, `Workload`)

pub mod types;

pub use types::*;
