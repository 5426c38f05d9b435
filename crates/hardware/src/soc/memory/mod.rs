//! Byte-Addressable Memory.
//!
//! This module implements the instruction and data memories. It provides:
//! 1. **Storage:** A zero-initialized byte array of configurable size.
//! 2. **Big-Endian Access:** Words and doublewords place their most
//!    significant byte at the lowest address.
//! 3. **Wrapping:** Every byte address is reduced modulo the memory size, so
//!    accesses near the end wrap to the start.

use crate::common::constants::DOUBLEWORD_BYTES;
use crate::soc::traits::{DataMemory, InstructionMemory};

/// Byte-addressable, big-endian memory.
#[derive(Clone, Debug)]
pub struct Memory {
    bytes: Vec<u8>,
}

impl Memory {
    /// Creates a zero-filled memory.
    ///
    /// # Arguments
    ///
    /// * `size` - Size in bytes. Raised to one doubleword if smaller.
    pub fn new(size: usize) -> Self {
        let size = size.max(DOUBLEWORD_BYTES as usize);
        Self {
            bytes: vec![0; size],
        }
    }

    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    fn index(&self, addr: u64) -> usize {
        (addr % self.bytes.len() as u64) as usize
    }

    /// Reads one byte.
    pub fn read_u8(&self, addr: u64) -> u8 {
        self.bytes[self.index(addr)]
    }

    /// Writes one byte.
    pub fn write_u8(&mut self, addr: u64, val: u8) {
        let idx = self.index(addr);
        self.bytes[idx] = val;
    }

    /// Reads `N` consecutive bytes starting at `addr`, wrapping at the end.
    fn read_bytes<const N: usize>(&self, addr: u64) -> [u8; N] {
        let mut out = [0u8; N];
        for (i, byte) in out.iter_mut().enumerate() {
            *byte = self.read_u8(addr.wrapping_add(i as u64));
        }
        out
    }

    fn write_bytes(&mut self, addr: u64, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.write_u8(addr.wrapping_add(i as u64), *byte);
        }
    }

    /// Reads a big-endian 32-bit word.
    pub fn read_u32(&self, addr: u64) -> u32 {
        u32::from_be_bytes(self.read_bytes(addr))
    }

    /// Writes a big-endian 32-bit word.
    pub fn write_u32(&mut self, addr: u64, val: u32) {
        self.write_bytes(addr, &val.to_be_bytes());
    }

    /// Reads a big-endian 64-bit doubleword.
    pub fn read_u64(&self, addr: u64) -> u64 {
        u64::from_be_bytes(self.read_bytes(addr))
    }

    /// Writes a big-endian 64-bit doubleword.
    pub fn write_u64(&mut self, addr: u64, val: u64) {
        self.write_bytes(addr, &val.to_be_bytes());
    }

    /// Stores `(word address, value)` pairs, each word `word_bytes` wide.
    ///
    /// Word address `n` starts at byte `n * word_bytes`. Each value is written
    /// big-endian using its low `word_bytes` bytes (clamped to 1..=8).
    pub fn load_words(&mut self, words: &[(u64, u64)], word_bytes: usize) {
        let word_bytes = word_bytes.clamp(1, DOUBLEWORD_BYTES as usize);
        for &(word_addr, value) in words {
            let bytes = value.to_be_bytes();
            let start = word_addr.wrapping_mul(word_bytes as u64);
            self.write_bytes(start, &bytes[bytes.len() - word_bytes..]);
        }
    }
}

impl InstructionMemory for Memory {
    fn fetch(&self, addr: u64) -> u32 {
        self.read_u32(addr)
    }
}

impl DataMemory for Memory {
    fn read_u64(&self, addr: u64) -> u64 {
        Self::read_u64(self, addr)
    }

    fn write_u64(&mut self, addr: u64, val: u64) {
        Self::write_u64(self, addr, val);
    }
}
