//! System-wide constants.
//!
//! Bit positions follow the crate convention: bit 63 of a doubleword (and bit 31
//! of an instruction word) is the most significant bit.

/// Number of architectural registers in the register file.
pub const NUM_REGS: usize = 32;

/// Bytes per instruction word; the fetch stride of the program counter.
pub const INST_BYTES: u64 = 4;

/// Bytes per data-memory doubleword access.
pub const DOUBLEWORD_BYTES: u64 = 8;

/// Program counter value after reset.
pub const RESET_PC: u64 = 0;

/// Raw encoding of the canonical no-op (`opcode = 0b111100`, all other fields zero).
pub const NOP_WORD: u32 = 0b111100 << 26;

/// Fetched word that marks the end of a program for `Simulator::run_to_halt`.
pub const HALT_WORD: u32 = 0x0000_0000;

/// Value of the two most-significant immediate bits that select the NIC.
pub const NIC_SELECT: u16 = 0b11;

/// Shift that brings the two NIC-select bits of a 16-bit immediate down to bit 0.
pub const NIC_SELECT_SHIFT: u32 = 14;

/// Mask of the NIC register index inside a 16-bit immediate.
pub const NIC_REG_MASK: u16 = 0b11;

/// Position of the status flag in a NIC status word (most-significant bit).
pub const NIC_STATUS_BIT: u32 = 63;

/// Mask selecting the virtual-channel tag of a network packet.
pub const VC_MASK: u64 = 1;
