//! Cardinal CPU simulator library.
//!
//! This crate implements a cycle-accurate model of the Cardinal vector
//! processor and its network interface with the following:
//! 1. **Core:** Four-stage pipeline (IF, ID, EXMEM, WB) with forwarding,
//!    branch resolution in ID and counter-timed multi-cycle operations.
//! 2. **ISA:** Field extraction, encoders and a disassembler for the six
//!    instruction classes and the lane-wise vector ALU.
//! 3. **SoC:** Big-endian memories, the NIC with its single-entry channel
//!    buffers, and router models for the network link.
//! 4. **Simulation:** Hex image loader, configuration and statistics.
//!
//! # Example
//!
//! ```
//! use cardinal_core::{Config, Simulator};
//! use cardinal_core::isa::instruction::{encode_load, encode_store};
//!
//! let mut sim = Simulator::new(&Config::default());
//! sim.load_data(0, &[0x2A]);
//! sim.load_program(&[encode_load(1, 0x0), encode_store(1, 0x8)]);
//! sim.tick(true);
//! sim.run_to_halt().unwrap();
//! assert_eq!(sim.cpu.regs.read(1), 0x2A);
//! ```

/// Common types and constants (register count, NIC window, errors).
pub mod common;
/// Simulator configuration (defaults and JSON parsing).
pub mod config;
/// Processor core (register file, ALU, pipeline, processor).
pub mod core;
/// Instruction set (opcodes, function codes, fields, encoders, disassembler).
pub mod isa;
/// Hex image loader and top-level simulator.
pub mod sim;
/// Memories, network interface and router side.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or `Config::from_json`.
pub use crate::config::Config;
/// The pipelined processor.
pub use crate::core::Processor;
/// Top-level simulator; construct with `Simulator::new`.
pub use crate::sim::Simulator;
