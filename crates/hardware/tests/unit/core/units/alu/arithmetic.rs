//! # ALU Arithmetic Tests
//!
//! Lane-wise add/subtract, even/odd widening multiplies and squares,
//! division edge cases and integer square root.

use cardinal_core::core::pipeline::signals::AluOp;
use cardinal_core::core::units::alu::Alu;
use cardinal_core::isa::{ElementWidth, WriteMask};
use rstest::rstest;

/// Helper: full-mask ALU call at the given width.
fn alu(op: AluOp, a: u64, b: u64, width: ElementWidth) -> u64 {
    Alu::apply(op, a, b, width, WriteMask::DoubleWord)
}

#[rstest]
#[case(ElementWidth::Byte, 0x01FF_0000_0000_00FF, 0x0101_0000_0000_0001, 0x0200_0000_0000_0000)]
#[case(ElementWidth::Half, 0x0000_FFFF_0000_0001, 0x0000_0001_0000_0001, 0x0000_0000_0000_0002)]
#[case(ElementWidth::Word, 0xFFFF_FFFF_0000_0001, 0x0000_0001_0000_0002, 0x0000_0000_0000_0003)]
#[case(ElementWidth::Double, u64::MAX, 1, 0)]
fn test_add_wraps_per_lane(
    #[case] width: ElementWidth,
    #[case] a: u64,
    #[case] b: u64,
    #[case] expected: u64,
) {
    assert_eq!(alu(AluOp::Add, a, b, width), expected);
}

#[test]
fn test_sub_borrows_stay_in_lane() {
    assert_eq!(alu(AluOp::Sub, 0x0000, 0x0001, ElementWidth::Byte), 0x00FF);
    assert_eq!(alu(AluOp::Sub, 0x0000_0000, 0x0000_0001, ElementWidth::Half), 0x0000_FFFF);
    assert_eq!(alu(AluOp::Sub, 5, 7, ElementWidth::Double), u64::MAX - 1);
}

#[test]
fn test_mul_even_uses_more_significant_lane_of_pair() {
    // Byte pairs: (0x02, 0x03) in the top pair, only the even (upper) lane counts.
    let a = 0x0203_0000_0000_0000;
    let b = 0x0405_0000_0000_0000;
    assert_eq!(alu(AluOp::MulEvenU, a, b, ElementWidth::Byte), 0x0008_0000_0000_0000);
    assert_eq!(alu(AluOp::MulOddU, a, b, ElementWidth::Byte), 0x000F_0000_0000_0000);
}

#[test]
fn test_mul_word_produces_double_width() {
    let a = 0xFFFF_FFFF_0000_0002;
    let b = 0xFFFF_FFFF_0000_0003;
    assert_eq!(alu(AluOp::MulEvenU, a, b, ElementWidth::Word), 0xFFFF_FFFE_0000_0001);
    assert_eq!(alu(AluOp::MulOddU, a, b, ElementWidth::Word), 6);
}

#[test]
fn test_mul_double_wraps() {
    assert_eq!(alu(AluOp::MulEvenU, 1 << 63, 2, ElementWidth::Double), 0);
    assert_eq!(alu(AluOp::MulOddU, 3, 5, ElementWidth::Double), 15);
}

#[test]
fn test_square_even_and_odd() {
    let a = 0x0000_0000_0010_0003;
    assert_eq!(alu(AluOp::SqEvenU, a, 0, ElementWidth::Half), 0x0000_0000_0000_0100);
    assert_eq!(alu(AluOp::SqOddU, a, 0, ElementWidth::Half), 9);
}

#[test]
fn test_div_and_mod_per_lane() {
    let a = 0x0000_0064_0000_0007;
    let b = 0x0000_000A_0000_0002;
    assert_eq!(alu(AluOp::Div, a, b, ElementWidth::Word), 0x0000_000A_0000_0003);
    assert_eq!(alu(AluOp::Mod, a, b, ElementWidth::Word), 0x0000_0000_0000_0001);
}

#[rstest]
#[case(ElementWidth::Byte, 0x00FF)]
#[case(ElementWidth::Half, 0xFFFF)]
#[case(ElementWidth::Word, 0xFFFF_FFFF)]
#[case(ElementWidth::Double, u64::MAX)]
fn test_div_by_zero_saturates_lane(#[case] width: ElementWidth, #[case] lane_ones: u64) {
    let result = alu(AluOp::Div, 42, 0, width);
    assert_eq!(result & width.lane_mask(), lane_ones);
}

#[test]
fn test_mod_by_zero_returns_dividend() {
    assert_eq!(alu(AluOp::Mod, 42, 0, ElementWidth::Double), 42);
    assert_eq!(alu(AluOp::Mod, 0x0907, 0x0000, ElementWidth::Byte), 0x0907);
}

#[rstest]
#[case(0, 0)]
#[case(1, 1)]
#[case(15, 3)]
#[case(16, 4)]
#[case(u64::MAX, 0xFFFF_FFFF)]
fn test_sqrt_double(#[case] x: u64, #[case] root: u64) {
    assert_eq!(alu(AluOp::Sqrt, x, 0, ElementWidth::Double), root);
}

#[test]
fn test_sqrt_bytes() {
    assert_eq!(alu(AluOp::Sqrt, 0x5110_0409, 0, ElementWidth::Byte), 0x0904_0203);
}
