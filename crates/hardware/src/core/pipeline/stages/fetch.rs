//! Instruction Fetch (IF) Stage.
//!
//! Selects the next program counter and the next IF/ID latch contents from
//! the word returned by instruction memory. Priority: stall holds everything,
//! then a taken branch redirects and flushes, then the halt marker parks the
//! PC on itself, otherwise the PC advances by one instruction.

use crate::common::constants::{HALT_WORD, INST_BYTES};
use crate::core::pipeline::latches::IfIdEntry;

/// Next-state values produced by the fetch stage.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FetchResult {
    /// Program counter for the next tick.
    pub next_pc: u64,
    /// New IF/ID contents, or `None` to hold the current latch.
    pub if_id: Option<IfIdEntry>,
}

/// Executes the fetch stage.
///
/// # Arguments
///
/// * `pc` - Current program counter.
/// * `inst` - Word returned by instruction memory for `pc`.
/// * `stall` - EXMEM stall signal.
/// * `branch_target` - Target of a branch resolved taken in ID this tick.
pub fn fetch_stage(pc: u64, inst: u32, stall: bool, branch_target: Option<u64>) -> FetchResult {
    if stall {
        return FetchResult {
            next_pc: pc,
            if_id: None,
        };
    }

    match branch_target {
        Some(target) => FetchResult {
            next_pc: target,
            if_id: Some(IfIdEntry::bubble()),
        },
        // The halt marker never enters ID; older instructions drain behind it.
        None if inst == HALT_WORD => FetchResult {
            next_pc: pc,
            if_id: Some(IfIdEntry::bubble()),
        },
        None => FetchResult {
            next_pc: pc.wrapping_add(INST_BYTES),
            if_id: Some(IfIdEntry {
                pc,
                inst,
                valid: true,
            }),
        },
    }
}
