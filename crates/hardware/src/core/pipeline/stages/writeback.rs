//! Writeback (WB) Stage.
//!
//! Drives the register file write port from the EXMEM/WB latch. The write
//! lands on the same clock edge, so the value becomes visible to register
//! reads on the following tick.

use crate::core::arch::WritePort;
use crate::core::pipeline::latches::ExMemWbEntry;

/// Executes the writeback stage.
///
/// # Returns
///
/// The write port for this tick; disabled for bubbles.
pub fn wb_stage(wb: &ExMemWbEntry) -> WritePort {
    WritePort {
        enable: wb.reg_write,
        addr: wb.rd,
        value: wb.value,
        mask: wb.mask,
    }
}
