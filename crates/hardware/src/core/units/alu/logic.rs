//! ALU logical operations.
//!
//! Bitwise operations are lane-independent, so they act on the full
//! doubleword regardless of the element width.

use crate::core::pipeline::signals::AluOp;

/// Executes a logical operation.
///
/// `Not` and `Mov` are unary and read only `a`. Returns `0` for
/// non-logical opcodes.
pub fn execute(op: AluOp, a: u64, b: u64) -> u64 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Xor => a ^ b,
        AluOp::Not => !a,
        AluOp::Mov => a,
        _ => 0,
    }
}
