//! # Fetch Stage Tests

use cardinal_core::core::pipeline::latches::IfIdEntry;
use cardinal_core::core::pipeline::stages::fetch_stage;
use pretty_assertions::assert_eq;

#[test]
fn test_fetch_advances_by_four() {
    let r = fetch_stage(0x10, 0xABCD, false, None);
    assert_eq!(r.next_pc, 0x14);
    assert_eq!(
        r.if_id,
        Some(IfIdEntry {
            pc: 0x10,
            inst: 0xABCD,
            valid: true
        })
    );
}

#[test]
fn test_stall_holds_pc_and_latch() {
    let r = fetch_stage(0x10, 0xABCD, true, Some(0x40));
    assert_eq!(r.next_pc, 0x10);
    assert_eq!(r.if_id, None);
}

#[test]
fn test_taken_branch_redirects_and_flushes() {
    let r = fetch_stage(0x10, 0xABCD, false, Some(0x40));
    assert_eq!(r.next_pc, 0x40);
    assert_eq!(r.if_id, Some(IfIdEntry::bubble()));
}

#[test]
fn test_halt_marker_parks_pc() {
    let r = fetch_stage(0x10, 0x0000_0000, false, None);
    assert_eq!(r.next_pc, 0x10);
    assert_eq!(r.if_id, Some(IfIdEntry::bubble()));
}

#[test]
fn test_branch_overrides_halt_marker() {
    let r = fetch_stage(0x10, 0x0000_0000, false, Some(0x40));
    assert_eq!(r.next_pc, 0x40);
    assert_eq!(r.if_id, Some(IfIdEntry::bubble()));
}
