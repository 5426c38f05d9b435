//! # Reset and Halt Tests

use crate::common::builder::program::{NIC_OUT_DATA, ProgramBuilder};
use crate::common::harness::TestContext;
use cardinal_core::Simulator;
use cardinal_core::common::SimError;
use cardinal_core::config::Config;
use cardinal_core::soc::router::ScriptedRouter;

#[test]
fn test_reset_clears_core_state_but_not_memory() {
    let program = ProgramBuilder::new().or(1, 2, 0).store(1, 0x40).build();
    let mut tc = TestContext::new().load_program(&program);
    tc.set_reg(2, 0x5A);
    tc.run_to_halt().unwrap();
    assert_ne!(tc.cpu().pc, 0);

    tc.sim.tick(true);

    assert_eq!(tc.cpu().pc, 0);
    assert_eq!(tc.get_reg(1), 0);
    assert_eq!(tc.get_reg(2), 0);
    assert!(tc.cpu().is_drained());
    assert!(!tc.sim.polarity.value());
    assert_eq!(tc.read_dmem(0x40), 0x5A);
    assert_eq!(tc.cpu().stats.reset_cycles, 2);
}

#[test]
fn test_reset_during_stall_cancels_it() {
    let program = ProgramBuilder::new().div(1, 2, 3).build();
    let mut tc = TestContext::new().load_program(&program);
    tc.set_reg(2, 9);
    tc.set_reg(3, 3);
    tc.run(3);
    assert!(tc.cpu().outputs().stall);

    tc.sim.tick(true);

    assert!(!tc.cpu().outputs().stall);
    assert_eq!(tc.get_reg(1), 0);
}

#[test]
fn test_reset_empties_nic_buffers() {
    let program = ProgramBuilder::new().store(1, NIC_OUT_DATA).build();
    let router = ScriptedRouter::new([0x42]).with_ready_schedule(vec![false]);
    let mut tc = TestContext::with_router(router).load_program(&program);
    tc.set_reg(1, 0x0101);
    tc.run(6);
    assert!(tc.sim.nic.in_buffer.is_full());
    assert!(tc.sim.nic.out_buffer.is_full());

    tc.sim.tick(true);

    assert!(tc.sim.nic.in_buffer.is_empty());
    assert!(tc.sim.nic.out_buffer.is_empty());
}

#[test]
fn test_polarity_held_low_in_reset_then_toggles() {
    let mut tc = TestContext::new();
    tc.sim.tick(true);
    tc.sim.tick(true);
    assert!(!tc.sim.polarity.value());

    tc.run(1);
    assert!(tc.sim.polarity.value());
    tc.run(1);
    assert!(!tc.sim.polarity.value());
}

#[test]
fn test_empty_program_halts_immediately() {
    let mut tc = TestContext::new().load_program(&[]);

    tc.run_to_halt().unwrap();

    assert_eq!(tc.cpu().pc, 0);
    assert_eq!(tc.cpu().stats.instructions_retired, 0);
}

#[test]
fn test_code_after_halt_marker_never_runs() {
    let program = ProgramBuilder::new()
        .or(1, 2, 0) // 0x00
        .mov(4, 2) // 0x04
        .raw(0) // 0x08: halt
        .mov(5, 2) // 0x0C
        .build();
    let mut tc = TestContext::new().load_program(&program);
    tc.set_reg(2, 5);

    tc.run_to_halt().unwrap();

    assert_eq!(tc.get_reg(1), 5);
    assert_eq!(tc.get_reg(4), 5);
    assert_eq!(tc.get_reg(5), 0);
    assert_eq!(tc.cpu().pc, 0x08);
}

#[test]
fn test_halt_waits_for_branch_to_retire() {
    let program = ProgramBuilder::new().bnez(0, 0x40).build();
    let mut tc = TestContext::new().load_program(&program);

    tc.run_to_halt().unwrap();

    let stats = &tc.cpu().stats;
    assert_eq!(stats.instructions_retired, 1);
    assert_eq!(stats.inst_branch, 1);
}

#[test]
fn test_halt_waits_for_store_to_retire() {
    let program = ProgramBuilder::new().store(1, 0x10).nop().build();
    let mut tc = TestContext::new().load_program(&program);
    tc.set_reg(1, 0x33);

    tc.run_to_halt().unwrap();

    let stats = &tc.cpu().stats;
    assert_eq!(stats.instructions_retired, 2);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_nop, 1);
    assert_eq!(tc.read_dmem(0x10), 0x33);
    assert!(tc.cpu().ex_wb.is_idle());
}

#[test]
fn test_infinite_loop_hits_cycle_limit() {
    let mut config = Config::default();
    config.general.max_cycles = 50;
    let mut sim = Simulator::new(&config);
    sim.load_program(&ProgramBuilder::new().bez(0, 0x00).build());
    sim.tick(true);

    let err = sim.run_to_halt().unwrap_err();

    assert!(matches!(err, SimError::CycleLimit(50)));
}
