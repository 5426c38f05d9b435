//! Simulator: owns the processor, its memories, the NIC and the router.
//!
//! Each tick is evaluated in two phases. First every component's outputs are
//! sampled from the current state: the processor's port requests, the
//! instruction word, data memory and NIC read data, the router's drive and
//! the NIC's link signals. Then every component latches its next state from
//! those samples on the same edge, so no component ever observes another's
//! post-edge state within a tick.

use crate::common::SimError;
use crate::common::constants::HALT_WORD;
use crate::config::Config;
use crate::core::Processor;
use crate::core::cpu::ProcessorInputs;
use crate::sim::loader::{self, DMEM_WORD_BYTES, IMEM_WORD_BYTES};
use crate::soc::memory::Memory;
use crate::soc::nic::Nic;
use crate::soc::router::{IdleRouter, Polarity, Router};
use crate::soc::traits::{DataMemory, InstructionMemory};
use std::path::Path;

/// Top-level simulator: processor, memories, NIC, router and polarity.
#[derive(Debug)]
pub struct Simulator<R = IdleRouter, D = Memory> {
    /// The pipelined processor.
    pub cpu: Processor,
    /// Instruction memory.
    pub imem: Memory,
    /// Data memory.
    pub dmem: D,
    /// Network interface.
    pub nic: Nic,
    /// Router attached to the NIC link.
    pub router: R,
    /// Virtual-channel polarity generator.
    pub polarity: Polarity,
    max_cycles: u64,
    in_reset: bool,
}

impl Simulator {
    /// Creates a simulator with zeroed memories and an idle router.
    pub fn new(config: &Config) -> Self {
        Self::with_parts(config, IdleRouter, Memory::new(config.memory.dmem_size))
    }
}

impl<R: Router> Simulator<R, Memory> {
    /// Creates a simulator with zeroed memories and the given router.
    pub fn with_router(config: &Config, router: R) -> Self {
        Self::with_parts(config, router, Memory::new(config.memory.dmem_size))
    }

    /// Loads a data memory hex image (8-byte words).
    pub fn load_data_file(&mut self, path: impl AsRef<Path>) -> Result<(), SimError> {
        loader::load_hex_file(path, &mut self.dmem, DMEM_WORD_BYTES)
    }
}

impl<R: Router, D: DataMemory> Simulator<R, D> {
    /// Creates a simulator from an explicit router and data memory.
    pub fn with_parts(config: &Config, router: R, dmem: D) -> Self {
        Self {
            cpu: Processor::new(config),
            imem: Memory::new(config.memory.imem_size),
            dmem,
            nic: Nic::new(),
            router,
            polarity: Polarity::new(),
            max_cycles: config.general.max_cycles,
            in_reset: false,
        }
    }

    /// Writes `program` into instruction memory starting at address 0.
    pub fn load_program(&mut self, program: &[u32]) {
        for (i, &word) in program.iter().enumerate() {
            self.imem.write_u32((i * IMEM_WORD_BYTES) as u64, word);
        }
    }

    /// Writes doublewords into data memory starting at byte address `base`.
    pub fn load_data(&mut self, base: u64, data: &[u64]) {
        for (i, &word) in data.iter().enumerate() {
            self.dmem.write_u64(base + (i * DMEM_WORD_BYTES) as u64, word);
        }
    }

    /// Loads an instruction memory hex image (4-byte words).
    pub fn load_program_file(&mut self, path: impl AsRef<Path>) -> Result<(), SimError> {
        loader::load_hex_file(path, &mut self.imem, IMEM_WORD_BYTES)
    }

    /// Advances every component by one clock edge.
    ///
    /// With `reset` asserted the processor and NIC re-initialize, the PC
    /// returns to 0 and polarity is held at 0. Memories are not cleared.
    pub fn tick(&mut self, reset: bool) {
        if reset {
            if !self.in_reset {
                tracing::info!(cycle = self.cpu.stats.cycles, "reset asserted");
            }
            self.in_reset = true;
            self.cpu.reset();
            self.nic.reset();
            self.polarity.tick(true);
            return;
        }
        if self.in_reset {
            tracing::info!(cycle = self.cpu.stats.cycles, "reset released");
            self.in_reset = false;
        }

        let out = self.cpu.outputs();
        let instruction = self.imem.fetch(out.pc);
        let dmem_data = if out.dmem.enable && !out.dmem.write_enable {
            self.dmem.read_u64(out.dmem.addr)
        } else {
            0
        };
        let nic_data = self.nic.read_data(&out.nic);
        let drive = self.router.drive();
        let polarity = self.polarity.value();
        let link = self.nic.link_outputs(&drive, polarity);

        if link.ready && drive.send {
            self.cpu.stats.nic_packets_received += 1;
        }
        if link.send {
            self.cpu.stats.nic_packets_injected += 1;
        }

        // A store commits on the edge that ends its access.
        if out.dmem.enable && out.dmem.write_enable && !out.stall {
            self.dmem.write_u64(out.dmem.addr, out.dmem.data);
        }
        self.cpu.tick(&ProcessorInputs {
            instruction,
            dmem_data,
            nic_data,
        });
        self.nic.tick(&out.nic, &drive, polarity);
        self.router.observe(&link);
        self.polarity.tick(false);
    }

    /// Runs `cycles` ticks with reset deasserted.
    pub fn run(&mut self, cycles: u64) {
        for _ in 0..cycles {
            self.tick(false);
        }
    }

    /// Returns `true` when the word at the PC is the halt marker and the
    /// pipeline holds nothing left to execute.
    pub fn is_halted(&self) -> bool {
        self.imem.fetch(self.cpu.pc) == HALT_WORD && self.cpu.is_drained()
    }

    /// Runs until the program halts.
    ///
    /// # Returns
    ///
    /// `SimError::CycleLimit` if the configured `max_cycles` pass first.
    pub fn run_to_halt(&mut self) -> Result<(), SimError> {
        for _ in 0..self.max_cycles {
            if self.is_halted() {
                break;
            }
            self.tick(false);
        }

        if self.is_halted() {
            tracing::info!(
                cycles = self.cpu.stats.cycles,
                retired = self.cpu.stats.instructions_retired,
                pc = format_args!("{:#x}", self.cpu.pc),
                "halted"
            );
            Ok(())
        } else {
            Err(SimError::CycleLimit(self.max_cycles))
        }
    }
}
