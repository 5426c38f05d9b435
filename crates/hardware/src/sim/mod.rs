//! Simulation harness and program loading.
//!
//! Provides the hex image loader and the `Simulator`, which wires the
//! processor to its memories, the NIC and a router and advances them together.

/// Hex image loader.
pub mod loader;

/// Top-level simulator.
pub mod simulator;

pub use simulator::Simulator;
