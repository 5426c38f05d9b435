//! Pipelined Processor.
//!
//! This module defines the `Processor`, the container for the entire core
//! state. It coordinates the following:
//! 1. **State Management:** Register file, program counter and the three
//!    pipeline latches (IF/ID, ID/EXMEM, EXMEM/WB).
//! 2. **Pipeline Control:** Stall counters, branch flushes and the halt
//!    marker parked in fetch.
//! 3. **Port Interface:** Instruction fetch, data memory and NIC ports,
//!    evaluated with `outputs` before the edge and consumed by `tick` on it.
//!
//! A tick is split in two phases so the surrounding memories and NIC can
//! answer combinationally: `outputs()` exposes the requests implied by the
//! current state, the harness computes the responses, and `tick()` latches
//! the next state from them.

use crate::common::constants::RESET_PC;
use crate::config::Config;
use crate::core::arch::RegisterFile;
use crate::core::pipeline::hazards::ForwardSource;
use crate::core::pipeline::latches::{ExMemWbEntry, IdExMemEntry, IfIdEntry};
use crate::core::pipeline::signals::{MemoryRequest, NicRequest};
use crate::core::pipeline::stages::execute::{memory_request, nic_request, writeback_entry};
use crate::core::pipeline::stages::{decode_stage, execute_stage, fetch_stage, wb_stage};
use crate::core::pipeline::stall::StallCounters;
use crate::isa::InstructionBits;
use crate::isa::disasm::disassemble;
use crate::stats::SimStats;

/// Responses from the memories and the NIC for the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessorInputs {
    /// Instruction word at the presented PC.
    pub instruction: u32,
    /// Data memory read data for the presented request.
    pub dmem_data: u64,
    /// NIC read data for the presented request.
    pub nic_data: u64,
}

/// Requests presented by the processor for the current tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ProcessorOutputs {
    /// Instruction fetch address.
    pub pc: u64,
    /// Data memory request.
    pub dmem: MemoryRequest,
    /// NIC request.
    pub nic: NicRequest,
    /// EXMEM stall signal.
    pub stall: bool,
}

/// Four-stage pipelined Cardinal processor.
#[derive(Clone, Debug)]
pub struct Processor {
    /// General-purpose registers.
    pub regs: RegisterFile,
    /// Program counter (byte address of the next fetch).
    pub pc: u64,
    /// IF/ID latch.
    pub if_id: IfIdEntry,
    /// ID/EXMEM latch.
    pub id_ex: IdExMemEntry,
    /// EXMEM/WB latch.
    pub ex_wb: ExMemWbEntry,
    /// Multi-cycle stall counters.
    pub counters: StallCounters,
    /// Performance counters.
    pub stats: SimStats,
    /// Emit a per-tick pipeline trace.
    pub trace: bool,
}

impl Processor {
    /// Creates a processor in its reset state.
    ///
    /// # Arguments
    ///
    /// * `config` - Simulator configuration; only the trace flag applies here.
    pub fn new(config: &Config) -> Self {
        Self {
            regs: RegisterFile::new(),
            pc: RESET_PC,
            if_id: IfIdEntry::bubble(),
            id_ex: IdExMemEntry::bubble(),
            ex_wb: ExMemWbEntry::bubble(),
            counters: StallCounters::new(),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Synchronous reset for one tick.
    ///
    /// Clears the register file, latches and stall counters and returns the
    /// PC to 0. Statistics are kept; the tick is counted as a reset cycle.
    pub fn reset(&mut self) {
        self.regs.reset();
        self.pc = RESET_PC;
        self.if_id = IfIdEntry::bubble();
        self.id_ex = IdExMemEntry::bubble();
        self.ex_wb = ExMemWbEntry::bubble();
        self.counters.reset();
        self.stats.cycles += 1;
        self.stats.reset_cycles += 1;
    }

    /// EXMEM stall signal: the instruction in EXMEM needs more cycles.
    #[inline]
    pub fn stall(&self) -> bool {
        self.counters.is_stalling(self.id_ex.stall_class)
    }

    /// Requests implied by the current state.
    ///
    /// Both port requests are driven from the ID/EXMEM latch, which only
    /// loads on a non-stalled edge. The latch therefore doubles as the shadow
    /// register: the request issued on entry stays on the port for every
    /// tick of a multi-cycle access.
    pub fn outputs(&self) -> ProcessorOutputs {
        ProcessorOutputs {
            pc: self.pc,
            dmem: memory_request(&self.id_ex),
            nic: nic_request(&self.id_ex),
            stall: self.stall(),
        }
    }

    /// Returns `true` when no in-flight instruction still has an effect to perform.
    pub fn is_drained(&self) -> bool {
        !self.stall() && self.if_id.is_idle() && self.id_ex.is_idle() && self.ex_wb.is_idle()
    }

    /// Advances the processor by one clock edge.
    ///
    /// Evaluates every stage against the current latches, then commits:
    /// WB writes the register file, EXMEM/WB receives the EXMEM result (or a
    /// bubble while stalled), and unless stalled ID/EXMEM, IF/ID and the PC
    /// advance. A branch taken in ID redirects the PC and flushes IF/ID.
    pub fn tick(&mut self, inputs: &ProcessorInputs) {
        let stall = self.stall();
        let ex = execute_stage(&self.id_ex, inputs.dmem_data, inputs.nic_data);
        let id = decode_stage(&self.if_id, &self.regs, &self.id_ex, ex.value, &self.ex_wb);
        let branch_target = if stall { None } else { id.branch_target };

        if self.trace {
            tracing::debug!(
                target: "cardinal::pipeline",
                cycle = self.stats.cycles,
                pc = format_args!("{:#x}", self.pc),
                id = %disassemble(self.if_id.inst),
                exmem = %disassemble(self.id_ex.inst),
                wb = %disassemble(self.ex_wb.inst),
                result = format_args!("{:#018x}", ex.value),
                stall,
                branch = ?branch_target,
            );
        }

        self.retire();
        self.regs.tick(&wb_stage(&self.ex_wb));

        self.stats.cycles += 1;
        if stall {
            self.stats.record_stall(self.id_ex.stall_class);
        } else {
            self.stats.forwarded_operands += id
                .forwarded
                .iter()
                .flatten()
                .filter(|src| **src != ForwardSource::RegFile)
                .count() as u64;
            if branch_target.is_some() {
                self.stats.branches_taken += 1;
            }
        }

        self.ex_wb = writeback_entry(&self.id_ex, ex.value, stall);
        self.counters.advance(self.id_ex.stall_class);
        if !stall {
            self.id_ex = id.entry;
        }

        let fetch = fetch_stage(self.pc, inputs.instruction, stall, branch_target);
        self.pc = fetch.next_pc;
        if let Some(entry) = fetch.if_id {
            self.if_id = entry;
        }
    }

    /// Accounts for the instruction leaving WB this tick.
    fn retire(&mut self) {
        let wb = self.ex_wb;
        if !wb.valid {
            return;
        }
        self.stats.record_retire(wb.inst.class());

        #[cfg(feature = "commit-log")]
        tracing::trace!(
            target: "cardinal::commit",
            pc = format_args!("{:#x}", wb.pc),
            inst = %disassemble(wb.inst),
            rd = wb.rd,
            value = format_args!("{:#018x}", wb.value),
            write = wb.reg_write,
            "retire"
        );
    }
}

impl Default for Processor {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}
