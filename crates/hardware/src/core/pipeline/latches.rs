//! Pipeline latch structures for inter-stage communication.
//!
//! This module defines the entry types carried between the four stages:
//! IF → ID → EXMEM → WB. Each latch owns the values it carries between ticks;
//! a stage reads the previous tick's latch and produces the next one.
//!
//! 1. **Instruction Flow:** Raw word, decoded operands, and selected results.
//! 2. **Bubbles:** Every latch has an explicit bubble value used for reset,
//!    branch flushes and stall insertion.

use crate::common::constants::NOP_WORD;
use crate::core::pipeline::signals::{ControlSignals, StallClass};
use crate::isa::WriteMask;

/// Entry in the IF/ID latch (Fetch to Decode).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfIdEntry {
    /// Program counter the word was fetched from.
    pub pc: u64,
    /// Raw 32-bit instruction word.
    pub inst: u32,
    /// `false` for an inserted bubble.
    pub valid: bool,
}

impl IfIdEntry {
    /// A no-op bubble.
    pub fn bubble() -> Self {
        Self {
            pc: 0,
            inst: NOP_WORD,
            valid: false,
        }
    }

    /// Returns `true` if the slot holds an inserted bubble.
    pub fn is_idle(&self) -> bool {
        !self.valid
    }
}

impl Default for IfIdEntry {
    fn default() -> Self {
        Self::bubble()
    }
}

/// Entry in the ID/EXMEM latch (Decode to Execute/Memory).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdExMemEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Raw instruction word.
    pub inst: u32,
    /// Destination register.
    pub rd: usize,
    /// Register addressed by read port 0 (`rA`, or `rD` for stores and branches).
    pub src0: usize,
    /// Register addressed by read port 1 (`rB`).
    pub src1: usize,
    /// Read port 0 operand after forwarding; the store data for stores.
    pub op_a: u64,
    /// Read port 1 operand after forwarding.
    pub op_b: u64,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// Extra-cycle class consumed by the stall counters.
    pub stall_class: StallClass,
    /// `false` for an inserted bubble.
    pub valid: bool,
}

impl IdExMemEntry {
    /// A no-op bubble.
    pub fn bubble() -> Self {
        Self {
            pc: 0,
            inst: NOP_WORD,
            rd: 0,
            src0: 0,
            src1: 0,
            op_a: 0,
            op_b: 0,
            ctrl: ControlSignals::default(),
            stall_class: StallClass::None,
            valid: false,
        }
    }

    /// Returns `true` if the slot holds an inserted bubble.
    pub fn is_idle(&self) -> bool {
        !self.valid
    }
}

impl Default for IdExMemEntry {
    fn default() -> Self {
        Self::bubble()
    }
}

/// Entry in the EXMEM/WB latch (Execute/Memory to Writeback).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMemWbEntry {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Raw instruction word.
    pub inst: u32,
    /// Destination register.
    pub rd: usize,
    /// Selected result (ALU, memory or NIC data).
    pub value: u64,
    /// Write enable.
    pub reg_write: bool,
    /// Write granularity.
    pub mask: WriteMask,
    /// `false` for an inserted bubble.
    pub valid: bool,
}

impl ExMemWbEntry {
    /// A bubble: write enable cleared.
    pub fn bubble() -> Self {
        Self {
            pc: 0,
            inst: NOP_WORD,
            rd: 0,
            value: 0,
            reg_write: false,
            mask: WriteMask::DoubleWord,
            valid: false,
        }
    }

    /// Returns `true` if the slot holds an inserted bubble.
    ///
    /// Every valid instruction, including stores and branches that never
    /// write a register, still has to retire before the slot counts as idle.
    pub fn is_idle(&self) -> bool {
        !self.valid
    }
}

impl Default for ExMemWbEntry {
    fn default() -> Self {
        Self::bubble()
    }
}
