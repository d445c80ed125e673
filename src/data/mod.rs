//! Input factories for the callable under test.

pub mod datagen;

pub use datagen::*;
