//! Simulation statistics collection and reporting.
//!
//! This module tracks performance metrics for the Cardinal simulator. It provides:
//! 1. **Cycle and IPC:** Total cycles, reset cycles, retired instructions and CPI.
//! 2. **Instruction mix:** Counts by class (ALU, load, store, branch, no-op).
//! 3. **Stalls:** Stall cycles attributed to each EXMEM stall class.
//! 4. **Control and data flow:** Taken branches and forwarded operands.
//! 5. **Network:** Packets injected into and received from the router.

use std::time::Instant;

use serde::Serialize;

use crate::common::SimError;
use crate::core::pipeline::signals::StallClass;
use crate::isa::InstClass;

/// Simulation statistics structure tracking all performance metrics.
#[derive(Clone, Debug, Serialize)]
pub struct SimStats {
    #[serde(skip)]
    start_time: Instant,
    /// Total clock ticks simulated, including reset ticks.
    pub cycles: u64,
    /// Ticks spent with reset asserted.
    pub reset_cycles: u64,
    /// Number of instructions that reached writeback (bubbles excluded).
    pub instructions_retired: u64,

    /// Count of ALU instructions retired.
    pub inst_alu: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of branch instructions retired.
    pub inst_branch: u64,
    /// Count of no-op and unrecognized instructions retired.
    pub inst_nop: u64,

    /// Stall cycles caused by loads and stores.
    pub stalls_mem: u64,
    /// Stall cycles caused by three-cycle ALU operations.
    pub stalls_alu3: u64,
    /// Stall cycles caused by four-cycle ALU operations.
    pub stalls_alu4: u64,
    /// Stall cycles caused by five-cycle ALU operations.
    pub stalls_alu5: u64,

    /// Branches resolved taken in ID.
    pub branches_taken: u64,
    /// Operands supplied by a bypass path instead of the register file.
    pub forwarded_operands: u64,

    /// Packets accepted from the router into the NIC input buffer.
    pub nic_packets_received: u64,
    /// Packets handed from the NIC output buffer to the router.
    pub nic_packets_injected: u64,
}

impl Default for SimStats {
    fn default() -> Self {
        Self {
            start_time: Instant::now(),
            cycles: 0,
            reset_cycles: 0,
            instructions_retired: 0,
            inst_alu: 0,
            inst_load: 0,
            inst_store: 0,
            inst_branch: 0,
            inst_nop: 0,
            stalls_mem: 0,
            stalls_alu3: 0,
            stalls_alu4: 0,
            stalls_alu5: 0,
            branches_taken: 0,
            forwarded_operands: 0,
            nic_packets_received: 0,
            nic_packets_injected: 0,
        }
    }
}

/// Section names for selective stats output.
///
/// Valid section identifiers: `"summary"`, `"instruction_mix"`, `"stalls"`, `"network"`.
/// Pass an empty slice to `print_sections` to print all sections.
pub const STATS_SECTIONS: &[&str] = &["summary", "instruction_mix", "stalls", "network"];

impl SimStats {
    /// Counts one retired instruction of the given class.
    pub fn record_retire(&mut self, class: InstClass) {
        self.instructions_retired += 1;
        match class {
            InstClass::Alu => self.inst_alu += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::BranchEqZero | InstClass::BranchNotEqZero => self.inst_branch += 1,
            InstClass::Nop | InstClass::Invalid => self.inst_nop += 1,
        }
    }

    /// Counts one stall cycle against the class holding EXMEM.
    pub fn record_stall(&mut self, class: StallClass) {
        match class {
            StallClass::None => {}
            StallClass::Memory => self.stalls_mem += 1,
            StallClass::Alu3 => self.stalls_alu3 += 1,
            StallClass::Alu4 => self.stalls_alu4 += 1,
            StallClass::Alu5 => self.stalls_alu5 += 1,
        }
    }

    /// Total stall cycles across every class.
    pub fn total_stalls(&self) -> u64 {
        self.stalls_mem + self.stalls_alu3 + self.stalls_alu4 + self.stalls_alu5
    }

    /// Serializes the counters as a pretty-printed JSON object.
    pub fn to_json(&self) -> Result<String, SimError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Prints only the requested statistics sections to stdout.
    ///
    /// Each element of `sections` should be one of [`STATS_SECTIONS`].
    /// Pass an empty slice to print all sections (same as `print()`).
    pub fn print_sections(&self, sections: &[String]) {
        let want = |s: &str| sections.is_empty() || sections.iter().any(|x| x == s);
        let seconds = self.start_time.elapsed().as_secs_f64();
        let cyc = self.cycles.max(1);
        let instr = self.instructions_retired.max(1);

        println!("\n==========================================================");
        println!("CARDINAL SIMULATION STATISTICS");
        println!("==========================================================");

        if want("summary") {
            let ipc = self.instructions_retired as f64 / cyc as f64;
            let cpi = cyc as f64 / instr as f64;
            println!("host_seconds             {seconds:.4} s");
            println!("sim_cycles               {}", self.cycles);
            println!("sim_reset_cycles         {}", self.reset_cycles);
            println!("sim_insts                {}", self.instructions_retired);
            println!("sim_ipc                  {ipc:.4}");
            println!("sim_cpi                  {cpi:.4}");
            println!("----------------------------------------------------------");
        }

        if want("instruction_mix") {
            let pct = |n: u64| n as f64 / instr as f64 * 100.0;
            println!("INSTRUCTION MIX");
            println!("  op.alu                 {:<10} ({:.2}%)", self.inst_alu, pct(self.inst_alu));
            println!("  op.load                {:<10} ({:.2}%)", self.inst_load, pct(self.inst_load));
            println!("  op.store               {:<10} ({:.2}%)", self.inst_store, pct(self.inst_store));
            println!("  op.branch              {:<10} ({:.2}%)", self.inst_branch, pct(self.inst_branch));
            println!("  op.nop                 {:<10} ({:.2}%)", self.inst_nop, pct(self.inst_nop));
            println!("  branch.taken           {}", self.branches_taken);
            println!("  forward.operands       {}", self.forwarded_operands);
            println!("----------------------------------------------------------");
        }

        if want("stalls") {
            let pct = |n: u64| n as f64 / cyc as f64 * 100.0;
            println!("STALLS");
            println!("  stall.mem              {:<10} ({:.2}%)", self.stalls_mem, pct(self.stalls_mem));
            println!("  stall.alu3             {:<10} ({:.2}%)", self.stalls_alu3, pct(self.stalls_alu3));
            println!("  stall.alu4             {:<10} ({:.2}%)", self.stalls_alu4, pct(self.stalls_alu4));
            println!("  stall.alu5             {:<10} ({:.2}%)", self.stalls_alu5, pct(self.stalls_alu5));
            println!("  stall.total            {}", self.total_stalls());
            println!("----------------------------------------------------------");
        }

        if want("network") {
            println!("NETWORK");
            println!("  nic.received           {}", self.nic_packets_received);
            println!("  nic.injected           {}", self.nic_packets_injected);
        }

        println!("==========================================================");
    }

    /// Prints all statistics sections to stdout.
    ///
    /// Equivalent to `print_sections(&[])`.
    pub fn print(&self) {
        self.print_sections(&[]);
    }
}
