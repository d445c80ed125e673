//! Input/output helpers.
//!
//! - estimate JSON read/write (`estimate_file`)

pub mod estimate_file;

pub use estimate_file::*;
