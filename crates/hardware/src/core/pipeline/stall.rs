//! Multi-cycle stall counters.
//!
//! Each stall class owns a modulo-N counter that starts at 0 and advances
//! only on ticks where an instruction of that class occupies EXMEM. The stall
//! signal for the class is asserted while the counter is not at `N - 1`, so
//! an instruction of the class holds EXMEM for exactly `N` ticks and the
//! counter wraps back to 0 as it leaves.

use crate::core::pipeline::signals::StallClass;

/// Counter that wraps modulo `N`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModCounter<const N: u8> {
    value: u8,
}

impl<const N: u8> ModCounter<N> {
    /// Creates a counter at 0.
    pub const fn new() -> Self {
        Self { value: 0 }
    }

    /// Current count.
    pub const fn value(&self) -> u8 {
        self.value
    }

    /// Returns `true` on the final count, `N - 1`.
    pub const fn is_final(&self) -> bool {
        self.value == N - 1
    }

    /// Advances by one, wrapping to 0 after `N - 1`.
    pub fn advance(&mut self) {
        self.value = (self.value + 1) % N;
    }

    /// Returns the counter to 0.
    pub fn reset(&mut self) {
        self.value = 0;
    }
}

/// The four stall counters of the EXMEM stage.
///
/// The memory counter is the 1-bit toggle used by loads and stores.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StallCounters {
    /// Load/store toggle.
    pub mem: ModCounter<2>,
    /// Three-cycle ALU counter.
    pub alu3: ModCounter<3>,
    /// Four-cycle ALU counter.
    pub alu4: ModCounter<4>,
    /// Five-cycle ALU counter.
    pub alu5: ModCounter<5>,
}

impl StallCounters {
    /// Creates the counters, all at 0.
    pub const fn new() -> Self {
        Self {
            mem: ModCounter::new(),
            alu3: ModCounter::new(),
            alu4: ModCounter::new(),
            alu5: ModCounter::new(),
        }
    }

    /// Returns `true` if an instruction of `class` in EXMEM still needs more cycles.
    pub fn is_stalling(&self, class: StallClass) -> bool {
        match class {
            StallClass::None => false,
            StallClass::Memory => !self.mem.is_final(),
            StallClass::Alu3 => !self.alu3.is_final(),
            StallClass::Alu4 => !self.alu4.is_final(),
            StallClass::Alu5 => !self.alu5.is_final(),
        }
    }

    /// Advances the counter owned by `class`. Other counters are untouched.
    pub fn advance(&mut self, class: StallClass) {
        match class {
            StallClass::None => {}
            StallClass::Memory => self.mem.advance(),
            StallClass::Alu3 => self.alu3.advance(),
            StallClass::Alu4 => self.alu4.advance(),
            StallClass::Alu5 => self.alu5.advance(),
        }
    }

    /// Returns every counter to 0.
    pub fn reset(&mut self) {
        *self = Self::new();
    }
}
