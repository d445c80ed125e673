//! Terminal plotting of measured timings.

pub mod ascii;

pub use ascii::*;
