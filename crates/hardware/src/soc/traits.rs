//! Memory port traits.
//!
//! This module defines the seams between the simulator harness and its
//! memories. It provides:
//! 1. **Instruction fetch:** A read-only word port addressed by the program counter.
//! 2. **Data access:** A doubleword port with a combinational read and a
//!    clocked write.
//!
//! Both ports are byte-addressed. Implementations reduce addresses modulo
//! their size, so no access can fail.

/// Read-only port used by instruction fetch.
pub trait InstructionMemory {
    /// Returns the 32-bit instruction word at byte address `addr`.
    fn fetch(&self, addr: u64) -> u32;
}

/// Doubleword port used by loads and stores.
pub trait DataMemory {
    /// Returns the 64-bit doubleword at byte address `addr`.
    fn read_u64(&self, addr: u64) -> u64;
    /// Writes the 64-bit doubleword at byte address `addr` on the clock edge.
    fn write_u64(&mut self, addr: u64, val: u64);
}
