//! Formatted terminal output for estimate runs.

pub mod format;

pub use format::*;
