//! Instruction Disassembler for the Cardinal ISA.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for debug tracing, logging, and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use cardinal_core::isa::disasm::disassemble;
//! use cardinal_core::isa::instruction::encode_load;
//! assert_eq!(disassemble(encode_load(3, 0x10)), "vld r3, 0x10");
//! ```

use crate::core::pipeline::signals::AluOp;
use crate::isa::instruction::{ElementWidth, InstClass, InstructionBits, WriteMask};

/// Disassembles a 32-bit Cardinal instruction into a human-readable string.
///
/// ALU operations render as `vadd.b r1, r2, r3`, with the participation
/// suffix appended to the mnemonic when it is not the whole doubleword
/// (`vaddu.w` writes only the upper word). Unrecognized opcodes render as
/// `unknown(0x..)`.
pub fn disassemble(inst: u32) -> String {
    let rd = inst.rd();
    match inst.class() {
        InstClass::Alu => {
            let op = AluOp::from_func(inst.func());
            let mask = WriteMask::from_bits(inst.ppp());
            let width = ElementWidth::from_bits(inst.ww());
            let name = format!("{}{}.{}", op.mnemonic(), mask.suffix(), width.suffix());
            if op.is_unary() {
                format!("{name} r{rd}, r{}", inst.ra())
            } else {
                format!("{name} r{rd}, r{}, r{}", inst.ra(), inst.rb())
            }
        }
        InstClass::Load => format!("vld r{rd}, {:#x}", inst.imm()),
        InstClass::Store => format!("vsd r{rd}, {:#x}", inst.imm()),
        InstClass::BranchEqZero => format!("vbez r{rd}, {:#x}", inst.imm()),
        InstClass::BranchNotEqZero => format!("vbnez r{rd}, {:#x}", inst.imm()),
        InstClass::Nop => "vnop".to_string(),
        InstClass::Invalid => format!("unknown({inst:#010x})"),
    }
}
