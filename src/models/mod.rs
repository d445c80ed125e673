//! Growth model implementations.
//!
//! Models are implemented as small, pure functions over `ComplexityKind` so
//! that fitting/selection code can stay generic.

pub mod model;

pub use model::*;
