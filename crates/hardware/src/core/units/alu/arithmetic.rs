//! ALU arithmetic operations.
//!
//! All arithmetic is unsigned and lane-wise. The even/odd multiply and square
//! operations pair adjacent lanes: "even" is the more significant lane of
//! each pair, "odd" the less significant one, and the double-width product
//! fills the whole pair. With doubleword elements there is no pair and the
//! product wraps to 64 bits.
//!
//! Division by zero yields an all-ones quotient lane and a remainder equal to
//! the dividend, so every operation is total.

use super::lanewise;
use crate::core::pipeline::signals::AluOp;
use crate::isa::ElementWidth;

/// Executes an arithmetic operation.
///
/// Returns `0` for non-arithmetic opcodes.
pub fn execute(op: AluOp, a: u64, b: u64, width: ElementWidth) -> u64 {
    match op {
        AluOp::Add => lanewise(a, b, width, |x, y, _| x.wrapping_add(y)),
        AluOp::Sub => lanewise(a, b, width, |x, y, _| x.wrapping_sub(y)),
        AluOp::MulEvenU => widening(a, b, width, Half::Even),
        AluOp::MulOddU => widening(a, b, width, Half::Odd),
        AluOp::SqEvenU => widening(a, a, width, Half::Even),
        AluOp::SqOddU => widening(a, a, width, Half::Odd),
        AluOp::Div => lanewise(a, b, width, |x, y, _| x.checked_div(y).unwrap_or(u64::MAX)),
        AluOp::Mod => lanewise(a, b, width, |x, y, _| x.checked_rem(y).unwrap_or(x)),
        AluOp::Sqrt => lanewise(a, 0, width, |x, _, _| x.isqrt()),
        _ => 0,
    }
}

#[derive(Clone, Copy)]
enum Half {
    Even,
    Odd,
}

/// Multiplies the even or odd lane of every lane pair into a double-width result.
fn widening(a: u64, b: u64, width: ElementWidth, half: Half) -> u64 {
    if width == ElementWidth::Double {
        return a.wrapping_mul(b);
    }
    let bits = width.lane_bits();
    let lane_mask = width.lane_mask();
    let pair_bits = bits * 2;
    let mut out = 0u64;
    for pair in 0..(64 / pair_bits) {
        let shift = pair * pair_bits;
        let select = match half {
            Half::Even => shift + bits,
            Half::Odd => shift,
        };
        let la = (a >> select) & lane_mask;
        let lb = (b >> select) & lane_mask;
        // Both lanes fit in 32 bits, so the product fits in the 64-bit pair slot.
        let product = la * lb;
        out |= product << shift;
    }
    out
}
