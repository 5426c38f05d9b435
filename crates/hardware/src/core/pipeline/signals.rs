//! Pipeline control signals and operation types.
//!
//! This module defines the signals that control instruction execution. It performs:
//! 1. **Operation Classification:** Maps ALU function codes to operations and latencies.
//! 2. **Stall Classes:** Groups instructions by the extra EXMEM cycles they need.
//! 3. **Memory Control:** Data-memory and NIC port requests driven by EXMEM.

use crate::isa::funct;
use crate::isa::{ElementWidth, InstClass, WriteMask};
use crate::soc::nic::NicRegister;

/// ALU operation types.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AluOp {
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Bitwise XOR.
    Xor,
    /// Bitwise NOT of `rA`.
    Not,
    /// Copy `rA`.
    Mov,
    /// Lane-wise add.
    Add,
    /// Lane-wise subtract.
    Sub,
    /// Unsigned multiply of even lanes, double-width results.
    MulEvenU,
    /// Unsigned multiply of odd lanes, double-width results.
    MulOddU,
    /// Lane-wise shift left logical.
    Sll,
    /// Lane-wise shift right logical.
    Srl,
    /// Lane-wise shift right arithmetic.
    Sra,
    /// Lane-wise rotate by half the lane width.
    Rtth,
    /// Lane-wise unsigned divide.
    Div,
    /// Lane-wise unsigned remainder.
    Mod,
    /// Unsigned square of even lanes, double-width results.
    SqEvenU,
    /// Unsigned square of odd lanes, double-width results.
    SqOddU,
    /// Lane-wise unsigned integer square root.
    Sqrt,
    /// Unrecognized function code; the instruction does not write back.
    #[default]
    Unknown,
}

impl AluOp {
    /// Decodes a 6-bit ALU function code.
    pub fn from_func(func: u32) -> Self {
        match func {
            funct::VAND => Self::And,
            funct::VOR => Self::Or,
            funct::VXOR => Self::Xor,
            funct::VNOT => Self::Not,
            funct::VMOV => Self::Mov,
            funct::VADD => Self::Add,
            funct::VSUB => Self::Sub,
            funct::VMULEU => Self::MulEvenU,
            funct::VMULOU => Self::MulOddU,
            funct::VSLL => Self::Sll,
            funct::VSRL => Self::Srl,
            funct::VSRA => Self::Sra,
            funct::VRTTH => Self::Rtth,
            funct::VDIV => Self::Div,
            funct::VMOD => Self::Mod,
            funct::VSQEU => Self::SqEvenU,
            funct::VSQOU => Self::SqOddU,
            funct::VSQRT => Self::Sqrt,
            _ => Self::Unknown,
        }
    }

    /// Cycles the operation occupies the EXMEM stage.
    pub fn latency(self) -> u8 {
        match self {
            Self::And | Self::Or | Self::Xor | Self::Not | Self::Mov | Self::Unknown => 1,
            Self::Add | Self::Sub | Self::Sll | Self::Srl | Self::Sra | Self::Rtth => 3,
            Self::MulEvenU | Self::MulOddU | Self::Mod | Self::SqEvenU | Self::SqOddU => 4,
            Self::Div | Self::Sqrt => 5,
        }
    }

    /// Returns `true` for operations that read only `rA`.
    pub fn is_unary(self) -> bool {
        matches!(
            self,
            Self::Not | Self::Mov | Self::Rtth | Self::SqEvenU | Self::SqOddU | Self::Sqrt
        )
    }

    /// Lower-case assembly mnemonic.
    pub fn mnemonic(self) -> &'static str {
        match self {
            Self::And => "vand",
            Self::Or => "vor",
            Self::Xor => "vxor",
            Self::Not => "vnot",
            Self::Mov => "vmov",
            Self::Add => "vadd",
            Self::Sub => "vsub",
            Self::MulEvenU => "vmuleu",
            Self::MulOddU => "vmulou",
            Self::Sll => "vsll",
            Self::Srl => "vsrl",
            Self::Sra => "vsra",
            Self::Rtth => "vrtth",
            Self::Div => "vdiv",
            Self::Mod => "vmod",
            Self::SqEvenU => "vsqeu",
            Self::SqOddU => "vsqou",
            Self::Sqrt => "vsqrt",
            Self::Unknown => "vunknown",
        }
    }
}

/// Extra-cycle class assigned to an instruction in ID and carried into EXMEM.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StallClass {
    /// Completes in one EXMEM cycle.
    #[default]
    None,
    /// Load or store: one extra cycle.
    Memory,
    /// Three-cycle ALU operation: two extra cycles.
    Alu3,
    /// Four-cycle ALU operation: three extra cycles.
    Alu4,
    /// Five-cycle ALU operation: four extra cycles.
    Alu5,
}

impl StallClass {
    /// Maps an ALU latency to its stall class.
    pub fn from_latency(latency: u8) -> Self {
        match latency {
            3 => Self::Alu3,
            4 => Self::Alu4,
            5 => Self::Alu5,
            _ => Self::None,
        }
    }

    /// Cycles an instruction of this class spends in EXMEM.
    pub fn cycles(self) -> u8 {
        match self {
            Self::None => 1,
            Self::Memory => 2,
            Self::Alu3 => 3,
            Self::Alu4 => 4,
            Self::Alu5 => 5,
        }
    }
}

/// Control signals derived from an instruction in ID.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// Instruction class.
    pub class: InstClass,
    /// Write the selected result to `rD` in WB.
    pub reg_write: bool,
    /// ALU operation.
    pub alu_op: AluOp,
    /// ALU element width.
    pub width: ElementWidth,
    /// Write granularity.
    pub mask: WriteMask,
    /// Data memory access.
    pub dmem_enable: bool,
    /// Data memory write (store).
    pub dmem_write_enable: bool,
    /// NIC register access.
    pub nic_enable: bool,
    /// NIC register write (store).
    pub nic_write_enable: bool,
    /// Addressed NIC register.
    pub nic_reg: NicRegister,
    /// Data memory byte address.
    pub mem_addr: u64,
}

/// Request presented on the data memory port.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryRequest {
    /// `memEnable`.
    pub enable: bool,
    /// `memWriteEnable`.
    pub write_enable: bool,
    /// Byte address of the doubleword.
    pub addr: u64,
    /// Store data.
    pub data: u64,
}

/// Request presented on the processor side of the NIC.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NicRequest {
    /// `nicEnable`.
    pub enable: bool,
    /// `nicWriteEnable`.
    pub write_enable: bool,
    /// Two-bit register address.
    pub reg: NicRegister,
    /// Data toward the NIC (store data).
    pub data: u64,
}
