//! Instruction set tests.


/// Disassembler output.
pub mod disasm;
