//! Data Hazard Detection and Forwarding.
//!
//! This module implements the logic for keeping the pipeline consistent when
//! data dependencies exist between instructions. It provides:
//! 1. **Stall Classification:** Assigns each decoded instruction the number of
//!    extra EXMEM cycles it needs.
//! 2. **Operand Forwarding:** Resolves Read-After-Write (RAW) hazards by
//!    bypassing the register file from the EXMEM result mux and the WB latch.
//!
//! Only two in-flight instructions can be producers for an instruction in ID:
//! the one in EXMEM and the one in the EXMEM/WB latch. Both are bypassed, so no
//! data hazard ever requires a stall.

use crate::core::pipeline::latches::{ExMemWbEntry, IdExMemEntry};
use crate::core::pipeline::signals::{ControlSignals, StallClass};
use crate::isa::InstClass;

/// Where a forwarded operand was taken from.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ForwardSource {
    /// No in-flight producer; the register file value was used.
    #[default]
    RegFile,
    /// Merged from the EXMEM/WB latch.
    WriteBack,
    /// Merged from the EXMEM result mux.
    ExMem,
}

/// Assigns the extra-cycle class of a decoded instruction.
///
/// Loads stall only when they write a real register; stores always stall.
/// ALU operations stall according to their latency, and only when `rd != 0`.
///
/// # Arguments
///
/// * `ctrl` - Control signals produced by decode.
/// * `rd` - Destination register field.
///
/// # Returns
///
/// The stall class carried into EXMEM.
pub fn classify_stall(ctrl: &ControlSignals, rd: usize) -> StallClass {
    match ctrl.class {
        InstClass::Load if rd != 0 => StallClass::Memory,
        InstClass::Store => StallClass::Memory,
        InstClass::Alu if rd != 0 => StallClass::from_latency(ctrl.alu_op.latency()),
        _ => StallClass::None,
    }
}

/// Forwards the most recent value of register `reg` to an instruction in ID.
///
/// The register file value is the base. A pending write in the EXMEM/WB latch
/// is merged over it under its write mask, then the EXMEM result (under the
/// EXMEM instruction's mask) is merged over that. Register 0 is never forwarded.
///
/// # Arguments
///
/// * `reg` - Source register addressed by the read port.
/// * `base` - Value read from the register file.
/// * `ex_mem` - Instruction currently in EXMEM.
/// * `ex_value` - Current output of the EXMEM result mux.
/// * `wb` - Contents of the EXMEM/WB latch.
///
/// # Returns
///
/// A tuple `(value, source)` with the forwarded operand and where its
/// most-significant contribution came from.
pub fn forward_operand(
    reg: usize,
    base: u64,
    ex_mem: &IdExMemEntry,
    ex_value: u64,
    wb: &ExMemWbEntry,
) -> (u64, ForwardSource) {
    if reg == 0 {
        return (0, ForwardSource::RegFile);
    }

    let mut value = base;
    let mut source = ForwardSource::RegFile;

    if wb.reg_write && wb.rd == reg {
        value = wb.mask.merge(value, wb.value);
        source = ForwardSource::WriteBack;
    }

    if ex_mem.ctrl.reg_write && ex_mem.rd == reg {
        value = ex_mem.ctrl.mask.merge(value, ex_value);
        source = ForwardSource::ExMem;
    }

    (value, source)
}
