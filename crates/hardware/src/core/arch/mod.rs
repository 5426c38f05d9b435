//! Architectural state.

/// General-purpose register file.
pub mod gpr;

pub use gpr::{RegisterFile, WritePort};
