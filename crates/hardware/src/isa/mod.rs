//! Cardinal instruction set.
//!
//! 1. **Opcodes:** Major opcode values for the six instruction classes.
//! 2. **Function codes:** ALU operation selectors for R-type ALU instructions.
//! 3. **Instruction:** Field extraction, classification, and encoders.
//! 4. **Disassembler:** Mnemonic rendering for traces and test diagnostics.

/// Instruction disassembler for tracing and diagnostics.
pub mod disasm;

/// ALU function codes (`aluOpcode` field).
pub mod funct;

/// Instruction field extraction, classification and encoding.
pub mod instruction;

/// Major opcode values.
pub mod opcodes;

pub use instruction::{ElementWidth, InstClass, InstructionBits, WriteMask};
