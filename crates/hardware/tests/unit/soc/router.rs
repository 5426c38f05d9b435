//! # Router Model Tests
//!
//! Polarity generation and the behaviour of the router models used by the
//! simulator.

use cardinal_core::soc::nic::NicLink;
use cardinal_core::soc::router::{IdleRouter, Polarity, Router, ScriptedRouter, SinkRouter};

#[test]
fn test_polarity_toggles_each_tick() {
    let mut p = Polarity::new();
    assert!(!p.value());
    p.tick(false);
    assert!(p.value());
    p.tick(false);
    assert!(!p.value());
}

#[test]
fn test_polarity_held_low_in_reset() {
    let mut p = Polarity::new();
    p.tick(false);
    assert!(p.value());
    p.tick(true);
    assert!(!p.value());
    p.tick(true);
    assert!(!p.value());
}

#[test]
fn test_idle_router_drives_nothing() {
    let drive = IdleRouter.drive();
    assert!(!drive.send);
    assert!(!drive.ready);
    assert_eq!(drive.data, 0);
}

#[test]
fn test_sink_collects_sent_packets_only() {
    let mut sink = SinkRouter::new();
    assert!(sink.drive().ready);

    sink.observe(&NicLink {
        ready: true,
        send: false,
        data: 0,
    });
    sink.observe(&NicLink {
        ready: true,
        send: true,
        data: 0xAB,
    });
    assert_eq!(sink.delivered, vec![0xAB]);
}

#[test]
fn test_scripted_router_offers_packets_in_order() {
    let mut router = ScriptedRouter::new([10, 20]);
    assert_eq!(router.pending(), 2);

    let drive = router.drive();
    assert!(drive.send);
    assert_eq!(drive.data, 10);

    // Not accepted: NIC not ready.
    router.observe(&NicLink::default());
    assert_eq!(router.drive().data, 10);

    router.observe(&NicLink {
        ready: true,
        ..NicLink::default()
    });
    assert_eq!(router.drive().data, 20);

    router.observe(&NicLink {
        ready: true,
        ..NicLink::default()
    });
    assert_eq!(router.pending(), 0);
    assert!(!router.drive().send);
}

#[test]
fn test_scripted_ready_schedule_repeats() {
    let mut router = ScriptedRouter::default().with_ready_schedule(vec![false, true]);
    let mut seen = Vec::new();
    for _ in 0..4 {
        seen.push(router.drive().ready);
        router.observe(&NicLink::default());
    }
    assert_eq!(seen, vec![false, true, false, true]);
}
