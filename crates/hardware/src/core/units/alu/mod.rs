//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the combinational vector ALU used in the EXMEM
//! stage. Operands are split into lanes of the element width (`ww`) and each
//! lane is computed independently; the result is then limited to the
//! participating bits selected by the write mask.
//!
//! Operations are organized into submodules by category:
//! - [`logic`]:      And, Or, Xor, Not, Mov
//! - [`arithmetic`]: Add, Sub, MulEvenU, MulOddU, SqEvenU, SqOddU, Div, Mod, Sqrt
//! - [`shifts`]:     Sll, Srl, Sra, Rtth

/// Lane-wise arithmetic (add, subtract, multiply, divide, square, sqrt).
pub mod arithmetic;

/// Bitwise logical operations.
pub mod logic;

/// Lane-wise shift and rotate operations.
pub mod shifts;

use crate::core::pipeline::signals::AluOp;
use crate::isa::{ElementWidth, WriteMask};

/// Arithmetic Logic Unit. Stateless: every call is a pure function of its inputs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu;

impl Alu {
    /// Computes an ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op`    - The operation to perform.
    /// * `a`     - First operand (`rA`).
    /// * `b`     - Second operand (`rB`); ignored by unary operations.
    /// * `width` - Element width used to split the operands into lanes.
    /// * `mask`  - Participation mask; bits outside it are zero in the result.
    ///
    /// # Returns
    ///
    /// The masked 64-bit result. Unknown operations produce 0.
    ///
    /// # Examples
    ///
    /// ```
    /// use cardinal_core::core::units::alu::Alu;
    /// use cardinal_core::core::pipeline::signals::AluOp;
    /// use cardinal_core::isa::{ElementWidth, WriteMask};
    ///
    /// // Byte lanes wrap independently.
    /// let r = Alu::apply(AluOp::Add, 0x01FF, 0x0101, ElementWidth::Byte, WriteMask::DoubleWord);
    /// assert_eq!(r, 0x0200);
    ///
    /// // Only the lower word participates.
    /// let r = Alu::apply(AluOp::Mov, u64::MAX, 0, ElementWidth::Double, WriteMask::LowerWord);
    /// assert_eq!(r, 0xFFFF_FFFF);
    /// ```
    pub fn apply(op: AluOp, a: u64, b: u64, width: ElementWidth, mask: WriteMask) -> u64 {
        let raw = match op {
            AluOp::And | AluOp::Or | AluOp::Xor | AluOp::Not | AluOp::Mov => {
                logic::execute(op, a, b)
            }

            AluOp::Add
            | AluOp::Sub
            | AluOp::MulEvenU
            | AluOp::MulOddU
            | AluOp::SqEvenU
            | AluOp::SqOddU
            | AluOp::Div
            | AluOp::Mod
            | AluOp::Sqrt => arithmetic::execute(op, a, b, width),

            AluOp::Sll | AluOp::Srl | AluOp::Sra | AluOp::Rtth => {
                shifts::execute(op, a, b, width)
            }

            AluOp::Unknown => 0,
        };
        raw & mask.mask()
    }
}

/// Applies `f` to every pair of corresponding lanes of `a` and `b`.
///
/// `f` receives the two zero-extended lane values and the lane width in bits;
/// its result is truncated to the lane width and placed back in position.
pub(crate) fn lanewise(a: u64, b: u64, width: ElementWidth, f: impl Fn(u64, u64, u32) -> u64) -> u64 {
    let bits = width.lane_bits();
    let lane_mask = width.lane_mask();
    let mut out = 0u64;
    for lane in 0..width.lanes() {
        let shift = lane * bits;
        let la = (a >> shift) & lane_mask;
        let lb = (b >> shift) & lane_mask;
        out |= (f(la, lb, bits) & lane_mask) << shift;
    }
    out
}
