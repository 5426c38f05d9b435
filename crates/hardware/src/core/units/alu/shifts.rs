//! ALU shift operations.
//!
//! Implements lane-wise shift-left logical (SLL), shift-right logical (SRL),
//! shift-right arithmetic (SRA) and rotate-by-half (RTTH). The shift amount
//! for each lane is the corresponding lane of `b`, reduced modulo the lane
//! width.

use super::lanewise;
use crate::core::pipeline::signals::AluOp;
use crate::isa::ElementWidth;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op`    - The ALU operation to perform (must be a shift variant).
/// * `a`     - The value to be shifted.
/// * `b`     - Per-lane shift amounts; ignored by `Rtth`.
/// * `width` - Element width.
///
/// # Returns
///
/// The shifted value. Returns `0` for non-shift opcodes.
pub fn execute(op: AluOp, a: u64, b: u64, width: ElementWidth) -> u64 {
    match op {
        AluOp::Sll => lanewise(a, b, width, |x, s, bits| x << (s as u32 % bits)),
        AluOp::Srl => lanewise(a, b, width, |x, s, bits| x >> (s as u32 % bits)),
        AluOp::Sra => lanewise(a, b, width, |x, s, bits| {
            let sh = s as u32 % bits;
            // Sign-extend the lane to 64 bits before the arithmetic shift.
            let ext = ((x << (64 - bits)) as i64) >> (64 - bits);
            (ext >> sh) as u64
        }),
        AluOp::Rtth => lanewise(a, 0, width, |x, _, bits| {
            let half = bits / 2;
            (x << half) | (x >> half)
        }),
        _ => 0,
    }
}
