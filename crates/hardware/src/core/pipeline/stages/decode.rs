//! Instruction Decode (ID) Stage.
//!
//! This module implements the second stage of the pipeline. It performs:
//! 1. **Control Generation:** Translates the raw word into `ControlSignals`.
//! 2. **Operand Read:** Reads both register file ports and applies forwarding.
//! 3. **Branch Resolution:** Evaluates `BEZ`/`BNEZ` against the forwarded `rD`.
//! 4. **Stall Classification:** Tags the instruction with its EXMEM stall class.

use crate::common::constants::{NIC_REG_MASK, NIC_SELECT, NIC_SELECT_SHIFT};
use crate::core::arch::RegisterFile;
use crate::core::pipeline::hazards::{self, ForwardSource};
use crate::core::pipeline::latches::{ExMemWbEntry, IdExMemEntry, IfIdEntry};
use crate::core::pipeline::signals::{AluOp, ControlSignals};
use crate::isa::{ElementWidth, InstClass, InstructionBits, WriteMask};
use crate::soc::nic::NicRegister;

/// Values produced by the decode stage for one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeResult {
    /// Candidate ID/EXMEM contents, latched only when the pipeline is not stalled.
    pub entry: IdExMemEntry,
    /// Branch target when a branch in ID resolves taken.
    pub branch_target: Option<u64>,
    /// Forwarding source of each operand the instruction actually uses.
    pub forwarded: [Option<ForwardSource>; 2],
}

/// Generates control signals for an instruction word.
///
/// Memory-type instructions whose immediate has both top bits set address
/// the NIC register `imm & 0b11`; every other immediate is a data memory
/// byte address. Unknown opcodes and unknown ALU functions decode to signals
/// with no architectural effect.
pub fn decode_control(inst: u32) -> ControlSignals {
    let class = inst.class();
    let rd = inst.rd();
    let imm = inst.imm();
    let nic_selected = (imm >> NIC_SELECT_SHIFT) == NIC_SELECT;

    let mut ctrl = ControlSignals {
        class,
        ..ControlSignals::default()
    };

    match class {
        InstClass::Alu => {
            ctrl.alu_op = AluOp::from_func(inst.func());
            ctrl.width = ElementWidth::from_bits(inst.ww());
            ctrl.mask = WriteMask::from_bits(inst.ppp());
            ctrl.reg_write = ctrl.alu_op != AluOp::Unknown && rd != 0;
        }
        InstClass::Load | InstClass::Store => {
            let store = class == InstClass::Store;
            ctrl.reg_write = !store && rd != 0;
            if nic_selected {
                ctrl.nic_enable = true;
                ctrl.nic_write_enable = store;
                ctrl.nic_reg = NicRegister::from_bits(imm & NIC_REG_MASK);
            } else {
                ctrl.dmem_enable = true;
                ctrl.dmem_write_enable = store;
                ctrl.mem_addr = u64::from(imm);
            }
        }
        InstClass::BranchEqZero
        | InstClass::BranchNotEqZero
        | InstClass::Nop
        | InstClass::Invalid => {}
    }

    ctrl
}

/// Executes the decode stage.
///
/// Read port 0 addresses `rD` for stores and branches and `rA` otherwise;
/// read port 1 always addresses `rB`. Both ports are forwarded.
///
/// # Arguments
///
/// * `if_id` - Current IF/ID latch.
/// * `regs` - Register file (state committed by the previous edge).
/// * `ex_mem` - Instruction currently in EXMEM.
/// * `ex_value` - Current output of the EXMEM result mux.
/// * `wb` - Current EXMEM/WB latch.
pub fn decode_stage(
    if_id: &IfIdEntry,
    regs: &RegisterFile,
    ex_mem: &IdExMemEntry,
    ex_value: u64,
    wb: &ExMemWbEntry,
) -> DecodeResult {
    let inst = if_id.inst;
    let ctrl = decode_control(inst);
    let rd = inst.rd();
    let src0 = if ctrl.class.reads_rd() { rd } else { inst.ra() };
    let src1 = inst.rb();

    let (op_a, src_a) = hazards::forward_operand(src0, regs.read(src0), ex_mem, ex_value, wb);
    let (op_b, src_b) = hazards::forward_operand(src1, regs.read(src1), ex_mem, ex_value, wb);

    let uses_a = !matches!(ctrl.class, InstClass::Nop | InstClass::Invalid | InstClass::Load);
    let uses_b = ctrl.class == InstClass::Alu && !ctrl.alu_op.is_unary();

    let taken = match ctrl.class {
        InstClass::BranchEqZero => op_a == 0,
        InstClass::BranchNotEqZero => op_a != 0,
        _ => false,
    };
    let branch_target = (if_id.valid && taken).then(|| u64::from(inst.imm()));

    let entry = IdExMemEntry {
        pc: if_id.pc,
        inst,
        rd,
        src0,
        src1,
        op_a,
        op_b,
        ctrl,
        stall_class: hazards::classify_stall(&ctrl, rd),
        valid: if_id.valid,
    };

    DecodeResult {
        entry,
        branch_target,
        forwarded: [uses_a.then_some(src_a), uses_b.then_some(src_b)],
    }
}
