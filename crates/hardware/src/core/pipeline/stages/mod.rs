//! Pipeline stage implementations.
//!
//! This module contains the individual implementations for the four stages of the
//! instruction pipeline. Every stage is a pure function of the current latches
//! and port inputs; the processor latches their results on the clock edge.
//! 1. **Fetch:** Selects the next PC and the IF/ID contents.
//! 2. **Decode:** Decodes instructions, reads and forwards operands, resolves branches.
//! 3. **Execute/Memory:** Runs the ALU and drives the memory and NIC ports.
//! 4. **Writeback:** Commits results to the register file.

/// Instruction decode stage implementation.
pub mod decode;

/// Execute/memory stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point (ID stage).
pub use decode::decode_stage;
/// Execute stage entry point (EXMEM stage).
pub use execute::execute_stage;
/// Fetch stage entry point (IF stage).
pub use fetch::fetch_stage;
/// Writeback stage entry point (WB stage).
pub use writeback::wb_stage;
