//! Core processor implementation.
//!
//! This module contains the Cardinal processor: its architectural state, the
//! arithmetic unit, the four-stage pipeline, and the processor that ties them
//! together.

/// Architectural state (register file).
pub mod arch;

/// The pipelined processor.
pub mod cpu;

/// Instruction pipeline implementation (latches, signals, hazards, stall counters, stages).
pub mod pipeline;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Processor;
