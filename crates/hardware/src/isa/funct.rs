//! ALU function codes (`aluOpcode` field, instruction bits 5..0).
//!
//! Latency classes are assigned by `AluOp::latency`; the grouping below
//! follows them.

// Single-cycle logic.
/// Bitwise AND.
pub const VAND: u32 = 0b00_0001;
/// Bitwise OR.
pub const VOR: u32 = 0b00_0010;
/// Bitwise XOR.
pub const VXOR: u32 = 0b00_0011;
/// Bitwise NOT of `rA`.
pub const VNOT: u32 = 0b00_0100;
/// Move `rA`.
pub const VMOV: u32 = 0b00_0101;

// Three-cycle add/sub/shift family.
/// Lane-wise add.
pub const VADD: u32 = 0b00_0110;
/// Lane-wise subtract.
pub const VSUB: u32 = 0b00_0111;
/// Lane-wise shift left logical.
pub const VSLL: u32 = 0b00_1010;
/// Lane-wise shift right logical.
pub const VSRL: u32 = 0b00_1011;
/// Lane-wise shift right arithmetic.
pub const VSRA: u32 = 0b00_1100;
/// Lane-wise rotate by half the lane width.
pub const VRTTH: u32 = 0b00_1101;

// Four-cycle multiply/modulo/square.
/// Unsigned multiply of even lanes into double-width results.
pub const VMULEU: u32 = 0b00_1000;
/// Unsigned multiply of odd lanes into double-width results.
pub const VMULOU: u32 = 0b00_1001;
/// Lane-wise unsigned remainder.
pub const VMOD: u32 = 0b00_1111;
/// Unsigned square of even lanes into double-width results.
pub const VSQEU: u32 = 0b01_0000;
/// Unsigned square of odd lanes into double-width results.
pub const VSQOU: u32 = 0b01_0001;

// Five-cycle divide/sqrt.
/// Lane-wise unsigned divide.
pub const VDIV: u32 = 0b00_1110;
/// Lane-wise unsigned integer square root of `rA`.
pub const VSQRT: u32 = 0b01_0010;
