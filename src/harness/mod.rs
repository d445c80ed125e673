//! Timing harness: turns a callable plus an input factory into observations.
//!
//! Measurement is serial by construction. Running the callable concurrently
//! would mix scheduling contention into the timings.

pub mod measure;
pub mod progress;

pub use measure::*;
pub use progress::*;
