//! Model fitting orchestration.
//!
//! Responsibilities:
//!
//! - fit a single growth form to an observation set (`fitter`)
//! - fit every candidate and pick the best under a simplicity bias (`selection`)

pub mod fitter;
pub mod selection;

pub use fitter::*;
pub use selection::*;
