//! Execute/Memory (EXMEM) Stage.
//!
//! This module implements the combined execute and memory stage. It performs:
//! 1. **ALU Execution:** Computes the vector ALU result for R-type instructions.
//! 2. **Port Requests:** Drives the data memory and NIC ports from the latched
//!    control signals.
//! 3. **Result Selection:** Chooses between ALU, memory and NIC data for WB.
//! 4. **Latch Transfer:** Builds the EXMEM/WB entry, or a bubble while stalled.

use crate::core::pipeline::latches::{ExMemWbEntry, IdExMemEntry};
use crate::core::pipeline::signals::{MemoryRequest, NicRequest};
use crate::core::units::alu::Alu;
use crate::isa::{InstClass, WriteMask};

/// Values computed by the EXMEM stage for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteResult {
    /// Raw ALU output (0 for non-ALU instructions).
    pub alu: u64,
    /// Selected result: memory or NIC data for loads, the ALU output otherwise.
    pub value: u64,
}

/// Executes the EXMEM stage combinationally.
///
/// # Arguments
///
/// * `entry` - Current ID/EXMEM latch.
/// * `dmem_data` - Data returned by data memory this tick.
/// * `nic_data` - Data returned by the NIC this tick.
pub fn execute_stage(entry: &IdExMemEntry, dmem_data: u64, nic_data: u64) -> ExecuteResult {
    let ctrl = &entry.ctrl;
    let alu = if ctrl.class == InstClass::Alu {
        Alu::apply(ctrl.alu_op, entry.op_a, entry.op_b, ctrl.width, ctrl.mask)
    } else {
        0
    };

    let value = match ctrl.class {
        InstClass::Load if ctrl.nic_enable => nic_data,
        InstClass::Load => dmem_data,
        _ => alu,
    };

    ExecuteResult { alu, value }
}

/// Data memory request implied by the ID/EXMEM latch.
pub fn memory_request(entry: &IdExMemEntry) -> MemoryRequest {
    let ctrl = &entry.ctrl;
    MemoryRequest {
        enable: ctrl.dmem_enable,
        write_enable: ctrl.dmem_write_enable,
        addr: ctrl.mem_addr,
        data: entry.op_a,
    }
}

/// NIC request implied by the ID/EXMEM latch.
pub fn nic_request(entry: &IdExMemEntry) -> NicRequest {
    let ctrl = &entry.ctrl;
    NicRequest {
        enable: ctrl.nic_enable,
        write_enable: ctrl.nic_write_enable,
        reg: ctrl.nic_reg,
        data: entry.op_a,
    }
}

/// Builds the next EXMEM/WB latch.
///
/// A bubble is inserted while the stage is stalled so the instruction writes
/// back exactly once, on the tick it leaves EXMEM.
pub fn writeback_entry(entry: &IdExMemEntry, value: u64, stall: bool) -> ExMemWbEntry {
    if stall {
        return ExMemWbEntry::bubble();
    }

    let mask = if entry.ctrl.class == InstClass::Alu {
        entry.ctrl.mask
    } else {
        WriteMask::DoubleWord
    };

    ExMemWbEntry {
        pc: entry.pc,
        inst: entry.inst,
        rd: entry.rd,
        value,
        reg_write: entry.ctrl.reg_write,
        mask,
        valid: entry.valid,
    }
}
