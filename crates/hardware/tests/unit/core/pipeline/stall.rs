//! # Stall Counter Tests
//!
//! Modulo counters assert stall until they reach `N - 1`, so an instruction
//! of a class holds EXMEM for exactly `N` ticks.

use cardinal_core::core::pipeline::signals::StallClass;
use cardinal_core::core::pipeline::stall::{ModCounter, StallCounters};
use rstest::rstest;

#[test]
fn test_mod_counter_wraps() {
    let mut c = ModCounter::<3>::new();
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(c.value());
        c.advance();
    }
    assert_eq!(seen, vec![0, 1, 2, 0]);
}

#[test]
fn test_mod_counter_final_value() {
    let mut c = ModCounter::<2>::new();
    assert!(!c.is_final());
    c.advance();
    assert!(c.is_final());
    c.reset();
    assert_eq!(c.value(), 0);
}

/// Helper: count the ticks a class asserts stall before releasing EXMEM.
fn stall_ticks(counters: &mut StallCounters, class: StallClass) -> u32 {
    let mut stalls = 0;
    while counters.is_stalling(class) {
        counters.advance(class);
        stalls += 1;
        assert!(stalls < 10, "stall never released");
    }
    counters.advance(class);
    stalls
}

#[rstest]
#[case(StallClass::None, 0)]
#[case(StallClass::Memory, 1)]
#[case(StallClass::Alu3, 2)]
#[case(StallClass::Alu4, 3)]
#[case(StallClass::Alu5, 4)]
fn test_stall_ticks_per_class(#[case] class: StallClass, #[case] expected: u32) {
    let mut counters = StallCounters::new();
    assert_eq!(stall_ticks(&mut counters, class), expected);
    // The counter is back at zero, ready for the next instruction.
    assert_eq!(stall_ticks(&mut counters, class), expected);
}

#[test]
fn test_advance_touches_only_its_class() {
    let mut counters = StallCounters::new();
    counters.advance(StallClass::Alu4);
    assert_eq!(counters.alu4.value(), 1);
    assert_eq!(counters.alu3.value(), 0);
    assert_eq!(counters.alu5.value(), 0);
    assert_eq!(counters.mem.value(), 0);
}

#[test]
fn test_reset_returns_all_to_zero() {
    let mut counters = StallCounters::new();
    counters.advance(StallClass::Memory);
    counters.advance(StallClass::Alu5);
    counters.reset();
    assert_eq!(counters, StallCounters::new());
}
