//! `bigo-fit` library crate.
//!
//! Estimates the time complexity of a callable empirically: time it over a
//! range of input sizes, fit a set of growth models by least squares, and
//! pick the simplest model that fits best.
//!
//! The binary (`bigo`) is a thin wrapper around this library so that core
//! logic is testable without spawning processes.

pub mod app;
pub mod cli;
pub mod data;
pub mod domain;
pub mod error;
pub mod estimate;
pub mod fit;
pub mod harness;
pub mod io;
pub mod math;
pub mod models;
pub mod plot;
pub mod report;
pub mod workloads;
