//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction for the Cardinal instruction word and encoders used
//! by the loader tooling and tests. Field layout (bit 31 is the MSB):
//!
//! ```text
//!  31    26 25  21 20  16 15  11 10  8 7  6 5      0
//! | opcode |  rD  |  rA  |  rB  | ppp | ww | aluOp  |   R-type
//! | opcode |  rD  |  --  |        immAddr (16)      |   M-type / branch
//! ```
//!
//! The immediate aliases `rB`, `ppp`, `ww` and `aluOp`; which view applies
//! depends on the instruction class.

use crate::isa::opcodes::{OP_ALU, OP_BEZ, OP_BNEZ, OP_LOAD, OP_NOP, OP_STORE};

/// Bit position of the opcode field.
pub const OPCODE_SHIFT: u32 = 26;
/// Bit position of the destination register field.
pub const RD_SHIFT: u32 = 21;
/// Bit position of the first source register field.
pub const RA_SHIFT: u32 = 16;
/// Bit position of the second source register field.
pub const RB_SHIFT: u32 = 11;
/// Bit position of the participation (write granularity) field.
pub const PPP_SHIFT: u32 = 8;
/// Bit position of the element width field.
pub const WW_SHIFT: u32 = 6;

/// Mask for the 6-bit opcode field.
pub const OPCODE_MASK: u32 = 0x3F;
/// Mask for a 5-bit register field.
pub const REG_MASK: u32 = 0x1F;
/// Mask for the 3-bit participation field.
pub const PPP_MASK: u32 = 0x7;
/// Mask for the 2-bit element width field.
pub const WW_MASK: u32 = 0x3;
/// Mask for the 6-bit ALU function field.
pub const FUNC_MASK: u32 = 0x3F;
/// Mask for the 16-bit immediate address field.
pub const IMM_MASK: u32 = 0xFFFF;

/// Trait for extracting instruction fields from encoded instructions.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31..26).
    fn opcode(&self) -> u32;
    /// Extracts the destination / test register field (bits 25..21).
    fn rd(&self) -> usize;
    /// Extracts the first source register field (bits 20..16).
    fn ra(&self) -> usize;
    /// Extracts the second source register field (bits 15..11).
    fn rb(&self) -> usize;
    /// Extracts the participation field (bits 10..8).
    fn ppp(&self) -> u32;
    /// Extracts the element width field (bits 7..6).
    fn ww(&self) -> u32;
    /// Extracts the ALU function field (bits 5..0).
    fn func(&self) -> u32;
    /// Extracts the 16-bit immediate address (bits 15..0).
    fn imm(&self) -> u16;
    /// Classifies the instruction by its opcode.
    fn class(&self) -> InstClass;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        (self >> OPCODE_SHIFT) & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> RD_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn ra(&self) -> usize {
        ((self >> RA_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn rb(&self) -> usize {
        ((self >> RB_SHIFT) & REG_MASK) as usize
    }

    #[inline(always)]
    fn ppp(&self) -> u32 {
        (self >> PPP_SHIFT) & PPP_MASK
    }

    #[inline(always)]
    fn ww(&self) -> u32 {
        (self >> WW_SHIFT) & WW_MASK
    }

    #[inline(always)]
    fn func(&self) -> u32 {
        self & FUNC_MASK
    }

    #[inline(always)]
    fn imm(&self) -> u16 {
        (self & IMM_MASK) as u16
    }

    fn class(&self) -> InstClass {
        InstClass::from_opcode(self.opcode())
    }
}

/// Instruction class selected by the major opcode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InstClass {
    /// R-type vector ALU operation.
    Alu,
    /// M-type load.
    Load,
    /// M-type store.
    Store,
    /// Branch if `rD` is zero.
    BranchEqZero,
    /// Branch if `rD` is not zero.
    BranchNotEqZero,
    /// Explicit no-op.
    #[default]
    Nop,
    /// Unrecognized opcode; executes as a no-op.
    Invalid,
}

impl InstClass {
    /// Maps a 6-bit opcode to its class.
    pub fn from_opcode(opcode: u32) -> Self {
        match opcode {
            OP_ALU => Self::Alu,
            OP_LOAD => Self::Load,
            OP_STORE => Self::Store,
            OP_BEZ => Self::BranchEqZero,
            OP_BNEZ => Self::BranchNotEqZero,
            OP_NOP => Self::Nop,
            _ => Self::Invalid,
        }
    }

    /// Returns `true` for both conditional branch classes.
    pub fn is_branch(self) -> bool {
        matches!(self, Self::BranchEqZero | Self::BranchNotEqZero)
    }

    /// Returns `true` for classes whose first read port addresses `rD`.
    pub fn reads_rd(self) -> bool {
        matches!(self, Self::Store | Self::BranchEqZero | Self::BranchNotEqZero)
    }
}

/// Write granularity selected by the participation field.
///
/// Positions are numbered from the most significant end: the "upper word"
/// covers bits 63..32 and "even bytes" are bytes 0, 2, 4, 6 counted from the MSB.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WriteMask {
    /// Whole doubleword (`000`).
    #[default]
    DoubleWord,
    /// Most-significant word, bits 63..32 (`001`).
    UpperWord,
    /// Least-significant word, bits 31..0 (`010`).
    LowerWord,
    /// Even bytes counted from the MSB (`011`).
    EvenBytes,
    /// Odd bytes counted from the MSB (`100`).
    OddBytes,
}

impl WriteMask {
    /// Decodes a 3-bit participation field; reserved encodings select the doubleword.
    pub fn from_bits(ppp: u32) -> Self {
        match ppp & PPP_MASK {
            0b001 => Self::UpperWord,
            0b010 => Self::LowerWord,
            0b011 => Self::EvenBytes,
            0b100 => Self::OddBytes,
            _ => Self::DoubleWord,
        }
    }

    /// Returns the 3-bit participation encoding.
    pub fn bits(self) -> u32 {
        match self {
            Self::DoubleWord => 0b000,
            Self::UpperWord => 0b001,
            Self::LowerWord => 0b010,
            Self::EvenBytes => 0b011,
            Self::OddBytes => 0b100,
        }
    }

    /// Returns the 64-bit mask of bits that participate in a write.
    pub fn mask(self) -> u64 {
        match self {
            Self::DoubleWord => u64::MAX,
            Self::UpperWord => 0xFFFF_FFFF_0000_0000,
            Self::LowerWord => 0x0000_0000_FFFF_FFFF,
            Self::EvenBytes => 0xFF00_FF00_FF00_FF00,
            Self::OddBytes => 0x00FF_00FF_00FF_00FF,
        }
    }

    /// Merges `new` into `old`, replacing only the participating bits.
    #[inline]
    pub fn merge(self, old: u64, new: u64) -> u64 {
        let m = self.mask();
        (old & !m) | (new & m)
    }

    /// Assembly suffix used by the disassembler (empty for the doubleword).
    pub fn suffix(self) -> &'static str {
        match self {
            Self::DoubleWord => "",
            Self::UpperWord => "u",
            Self::LowerWord => "d",
            Self::EvenBytes => "e",
            Self::OddBytes => "o",
        }
    }
}

/// ALU element (lane) width selected by the `ww` field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ElementWidth {
    /// Eight 8-bit lanes (`00`).
    Byte,
    /// Four 16-bit lanes (`01`).
    Half,
    /// Two 32-bit lanes (`10`).
    Word,
    /// One 64-bit lane (`11`).
    #[default]
    Double,
}

impl ElementWidth {
    /// Decodes a 2-bit `ww` field.
    pub fn from_bits(ww: u32) -> Self {
        match ww & WW_MASK {
            0b00 => Self::Byte,
            0b01 => Self::Half,
            0b10 => Self::Word,
            _ => Self::Double,
        }
    }

    /// Returns the 2-bit `ww` encoding.
    pub fn bits(self) -> u32 {
        match self {
            Self::Byte => 0b00,
            Self::Half => 0b01,
            Self::Word => 0b10,
            Self::Double => 0b11,
        }
    }

    /// Lane width in bits.
    pub fn lane_bits(self) -> u32 {
        match self {
            Self::Byte => 8,
            Self::Half => 16,
            Self::Word => 32,
            Self::Double => 64,
        }
    }

    /// Mask covering one lane at bit 0.
    pub fn lane_mask(self) -> u64 {
        match self {
            Self::Double => u64::MAX,
            w => (1u64 << w.lane_bits()) - 1,
        }
    }

    /// Number of lanes in a doubleword.
    pub fn lanes(self) -> u32 {
        64 / self.lane_bits()
    }

    /// Assembly suffix used by the disassembler.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::Byte => "b",
            Self::Half => "h",
            Self::Word => "w",
            Self::Double => "d",
        }
    }
}

#[inline]
fn reg_field(reg: usize, shift: u32) -> u32 {
    ((reg as u32) & REG_MASK) << shift
}

/// Encodes an R-type ALU instruction.
///
/// # Arguments
///
/// * `func` - ALU function code (see `isa::funct`).
/// * `rd`, `ra`, `rb` - Register indices; only the low five bits are used.
/// * `mask` - Write granularity of the result.
/// * `width` - Element width for lane-wise operations.
pub fn encode_alu(
    func: u32,
    rd: usize,
    ra: usize,
    rb: usize,
    mask: WriteMask,
    width: ElementWidth,
) -> u32 {
    (OP_ALU << OPCODE_SHIFT)
        | reg_field(rd, RD_SHIFT)
        | reg_field(ra, RA_SHIFT)
        | reg_field(rb, RB_SHIFT)
        | (mask.bits() << PPP_SHIFT)
        | (width.bits() << WW_SHIFT)
        | (func & FUNC_MASK)
}

fn encode_m_type(opcode: u32, rd: usize, imm: u16) -> u32 {
    (opcode << OPCODE_SHIFT) | reg_field(rd, RD_SHIFT) | u32::from(imm)
}

/// Encodes `LD rd, addr`.
pub fn encode_load(rd: usize, addr: u16) -> u32 {
    encode_m_type(OP_LOAD, rd, addr)
}

/// Encodes `SD rd, addr`.
pub fn encode_store(rd: usize, addr: u16) -> u32 {
    encode_m_type(OP_STORE, rd, addr)
}

/// Encodes `BEZ rd, target`.
pub fn encode_bez(rd: usize, target: u16) -> u32 {
    encode_m_type(OP_BEZ, rd, target)
}

/// Encodes `BNEZ rd, target`.
pub fn encode_bnez(rd: usize, target: u16) -> u32 {
    encode_m_type(OP_BNEZ, rd, target)
}

/// Encodes the canonical no-op.
pub fn encode_nop() -> u32 {
    OP_NOP << OPCODE_SHIFT
}
