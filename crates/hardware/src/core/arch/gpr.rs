//! General-Purpose Register File.
//!
//! This module implements the 32 × 64-bit Cardinal register file. It performs
//! the following:
//! 1. **Storage:** Maintains registers `r0`-`r31`.
//! 2. **Invariant Enforcement:** Register `r0` reads as zero and ignores writes.
//! 3. **Partial Writes:** Merges a write under its participation mask so bits
//!    outside the selected range keep their value.
//!
//! Reads are combinational and always observe the state committed by the
//! previous clock edge; the single write port takes effect on `tick`.

use std::fmt;

use crate::common::constants::NUM_REGS;
use crate::isa::WriteMask;

/// Sampled state of the register file write port for one clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WritePort {
    /// Write enable.
    pub enable: bool,
    /// Destination register index; reduced modulo 32.
    pub addr: usize,
    /// Value to write; only the bits selected by `mask` land.
    pub value: u64,
    /// Write granularity.
    pub mask: WriteMask,
}

/// General-purpose register file.
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u64; NUM_REGS],
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with all registers cleared.
    pub fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
        }
    }

    /// Reads a register.
    ///
    /// # Arguments
    ///
    /// * `addr` - Register index; reduced modulo 32.
    ///
    /// # Returns
    ///
    /// The 64-bit register value. Register `r0` always returns 0.
    #[inline]
    pub fn read(&self, addr: usize) -> u64 {
        let idx = addr % NUM_REGS;
        if idx == 0 { 0 } else { self.regs[idx] }
    }

    /// Advances the register file by one clock edge, committing the write port.
    ///
    /// Nothing changes unless `port.enable` is set and the destination is not `r0`.
    pub fn tick(&mut self, port: &WritePort) {
        let idx = port.addr % NUM_REGS;
        if port.enable && idx != 0 {
            self.regs[idx] = port.mask.merge(self.regs[idx], port.value);
        }
    }

    /// Synchronous reset: clears every register.
    pub fn reset(&mut self) {
        self.regs = [0; NUM_REGS];
    }

    /// Overwrites a register outside the clock, for test setup and program preloading.
    ///
    /// Writes to `r0` are ignored.
    pub fn poke(&mut self, addr: usize, value: u64) {
        let idx = addr % NUM_REGS;
        if idx != 0 {
            self.regs[idx] = value;
        }
    }
}

impl fmt::Display for RegisterFile {
    /// Renders registers in pairs with hexadecimal formatting.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for i in (0..NUM_REGS).step_by(2) {
            writeln!(
                f,
                "r{:<2}={:#018x} r{:<2}={:#018x}",
                i,
                self.read(i),
                i + 1,
                self.read(i + 1)
            )?;
        }
        Ok(())
    }
}
