use cardinal_core::isa::disasm::disassemble;
use cardinal_core::isa::funct;
use cardinal_core::isa::instruction::{
    encode_alu, encode_bez, encode_bnez, encode_load, encode_nop, encode_store,
};
use cardinal_core::isa::{ElementWidth, WriteMask};
use rstest::rstest;

#[rstest]
#[case(encode_load(3, 0x10), "vld r3, 0x10")]
#[case(encode_store(1, 0xc002), "vsd r1, 0xc002")]
#[case(encode_bez(2, 0x8), "vbez r2, 0x8")]
#[case(encode_bnez(2, 0x0), "vbnez r2, 0x0")]
#[case(encode_nop(), "vnop")]
#[case(0, "unknown(0x00000000)")]
fn test_non_alu_forms(#[case] inst: u32, #[case] expected: &str) {
    assert_eq!(disassemble(inst), expected);
}

#[test]
fn test_binary_alu_form() {
    let inst = encode_alu(funct::VADD, 1, 2, 3, WriteMask::DoubleWord, ElementWidth::Byte);
    assert_eq!(disassemble(inst), "vadd.b r1, r2, r3");
}

#[test]
fn test_unary_alu_omits_rb() {
    let inst = encode_alu(funct::VNOT, 4, 5, 9, WriteMask::DoubleWord, ElementWidth::Double);
    assert_eq!(disassemble(inst), "vnot.d r4, r5");
}

#[test]
fn test_participation_suffix() {
    let inst = encode_alu(funct::VADD, 1, 2, 3, WriteMask::UpperWord, ElementWidth::Word);
    assert_eq!(disassemble(inst), "vaddu.w r1, r2, r3");
}
