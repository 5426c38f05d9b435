//! # Network Interface Tests
//!
//! Processor-side register map, router-side ingress, and the polarity-gated
//! egress handshake.

use cardinal_core::core::pipeline::signals::NicRequest;
use cardinal_core::soc::nic::{Nic, NicRegister, RouterDrive, vc_admitted};
use pretty_assertions::assert_eq;
use rstest::rstest;

/// Helper: a processor-side read of `reg`.
fn read(reg: NicRegister) -> NicRequest {
    NicRequest {
        enable: true,
        write_enable: false,
        reg,
        data: 0,
    }
}

/// Helper: a processor-side write of `data` to `reg`.
fn write(reg: NicRegister, data: u64) -> NicRequest {
    NicRequest {
        enable: true,
        write_enable: true,
        reg,
        data,
    }
}

/// Helper: a router offering `data` to the input buffer.
fn router_sends(data: u64) -> RouterDrive {
    RouterDrive {
        send: true,
        data,
        ready: false,
    }
}

const ROUTER_READY: RouterDrive = RouterDrive {
    send: false,
    data: 0,
    ready: true,
};

const IDLE: RouterDrive = RouterDrive {
    send: false,
    data: 0,
    ready: false,
};

#[rstest]
#[case(0b00, NicRegister::InputData)]
#[case(0b01, NicRegister::InputStatus)]
#[case(0b10, NicRegister::OutputData)]
#[case(0b11, NicRegister::OutputStatus)]
fn test_register_decoding(#[case] bits: u16, #[case] reg: NicRegister) {
    assert_eq!(NicRegister::from_bits(bits), reg);
    assert_eq!(reg.bits(), bits);
}

#[test]
fn test_ingress_fills_input_buffer() {
    let mut nic = Nic::new();
    let link = nic.link_outputs(&router_sends(0x1234), false);
    assert!(link.ready);

    nic.tick(&NicRequest::default(), &router_sends(0x1234), false);
    assert!(nic.in_buffer.is_full());
    assert_eq!(nic.read_data(&read(NicRegister::InputStatus)), 1 << 63);
    assert!(!nic.link_outputs(&IDLE, false).ready);
}

#[test]
fn test_ingress_ignored_while_full() {
    let mut nic = Nic::new();
    nic.tick(&NicRequest::default(), &router_sends(1), false);
    nic.tick(&NicRequest::default(), &router_sends(2), false);
    assert_eq!(nic.read_data(&read(NicRegister::InputData)), 1);
}

#[test]
fn test_input_data_read_consumes_packet() {
    let mut nic = Nic::new();
    nic.tick(&NicRequest::default(), &router_sends(0xBEEF), false);

    let req = read(NicRegister::InputData);
    assert_eq!(nic.read_data(&req), 0xBEEF);
    nic.tick(&req, &IDLE, false);

    assert!(nic.in_buffer.is_empty());
    assert_eq!(nic.read_data(&read(NicRegister::InputStatus)), 0);
    // The payload is retained after draining.
    assert_eq!(nic.read_data(&req), 0xBEEF);
}

#[test]
fn test_status_reads_do_not_consume() {
    let mut nic = Nic::new();
    nic.tick(&NicRequest::default(), &router_sends(5), false);
    nic.tick(&read(NicRegister::InputStatus), &IDLE, false);
    assert!(nic.in_buffer.is_full());
}

#[test]
fn test_output_write_fills_output_buffer() {
    let mut nic = Nic::new();
    nic.tick(&write(NicRegister::OutputData, 0x10), &IDLE, false);
    assert!(nic.out_buffer.is_full());
    assert_eq!(nic.out_buffer.payload(), 0x10);
    assert_eq!(nic.read_data(&read(NicRegister::OutputStatus)), 1 << 63);
}

#[test]
fn test_output_data_and_writes_return_zero() {
    let mut nic = Nic::new();
    nic.tick(&write(NicRegister::OutputData, 0x10), &router_sends(0x20), false);
    assert_eq!(nic.read_data(&read(NicRegister::OutputData)), 0);
    assert_eq!(nic.read_data(&write(NicRegister::InputData, 0)), 0);
}

#[test]
fn test_disabled_request_returns_zero_and_has_no_effect() {
    let mut nic = Nic::new();
    nic.tick(&NicRequest::default(), &router_sends(0x77), false);

    let disabled = NicRequest {
        enable: false,
        ..read(NicRegister::InputData)
    };
    assert_eq!(nic.read_data(&disabled), 0);
    nic.tick(&disabled, &IDLE, false);
    assert!(nic.in_buffer.is_full());

    let disabled_write = NicRequest {
        enable: false,
        ..write(NicRegister::OutputData, 1)
    };
    nic.tick(&disabled_write, &IDLE, false);
    assert!(nic.out_buffer.is_empty());
}

#[rstest]
#[case(0x0, true, true)]
#[case(0x0, false, false)]
#[case(0x1, false, true)]
#[case(0x1, true, false)]
#[case(0x0000_1111_0000_1111, false, true)]
fn test_vc_admission(#[case] packet: u64, #[case] polarity: bool, #[case] admitted: bool) {
    assert_eq!(vc_admitted(packet, polarity), admitted);
}

#[test]
fn test_egress_waits_for_router_ready() {
    let mut nic = Nic::new();
    nic.tick(&write(NicRegister::OutputData, 0x2), &IDLE, false);

    // VC 0 with polarity 1 is admitted, but the router is not ready.
    let link = nic.link_outputs(&IDLE, true);
    assert!(!link.send);
    assert_eq!(link.data, 0);
    nic.tick(&NicRequest::default(), &IDLE, true);
    assert!(nic.out_buffer.is_full());
}

#[test]
fn test_egress_waits_for_matching_polarity() {
    let mut nic = Nic::new();
    nic.tick(&write(NicRegister::OutputData, 0x3), &IDLE, false);

    // VC 1 is not admitted under polarity 1.
    let link = nic.link_outputs(&ROUTER_READY, true);
    assert!(!link.send);
    nic.tick(&NicRequest::default(), &ROUTER_READY, true);
    assert!(nic.out_buffer.is_full());

    let link = nic.link_outputs(&ROUTER_READY, false);
    assert!(link.send);
    assert_eq!(link.data, 0x3);
    nic.tick(&NicRequest::default(), &ROUTER_READY, false);
    assert!(nic.out_buffer.is_empty());
}

#[test]
fn test_never_sends_when_empty() {
    let nic = Nic::new();
    for polarity in [false, true] {
        let link = nic.link_outputs(&ROUTER_READY, polarity);
        assert!(!link.send);
        assert_eq!(link.data, 0);
    }
}

#[test]
fn test_reset_empties_both_buffers() {
    let mut nic = Nic::new();
    nic.tick(&write(NicRegister::OutputData, 9), &router_sends(8), false);
    nic.reset();
    assert!(nic.in_buffer.is_empty());
    assert!(nic.out_buffer.is_empty());
    assert_eq!(nic.in_buffer.payload(), 0);
    assert_eq!(nic.out_buffer.payload(), 0);
}
