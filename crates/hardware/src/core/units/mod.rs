//! Execution units.
//!
//! The Cardinal core has a single functional unit: the vector ALU. Its
//! latency is declared per operation and enforced by the pipeline's stall
//! counters rather than by the unit itself.

/// Arithmetic Logic Unit for lane-wise integer operations.
pub mod alu;
