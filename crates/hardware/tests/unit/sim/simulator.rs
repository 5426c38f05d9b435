//! # Simulator Tests
//!
//! Image loading into the simulator and a full program combining every
//! instruction class.

use std::io::Write;

use crate::common::builder::program::{NIC_OUT_DATA, ProgramBuilder};
use cardinal_core::Simulator;
use cardinal_core::config::Config;
use cardinal_core::isa::instruction::{encode_load, encode_store};
use cardinal_core::soc::router::SinkRouter;
use pretty_assertions::assert_eq;
use tempfile::NamedTempFile;

/// Helper: writes `contents` to a fresh temporary file.
fn image_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_runs_program_from_image_files() {
    let imem = image_file(&format!(
        "{:08x}\n{:08x}\n",
        encode_load(1, 0x00),
        encode_store(1, 0x08)
    ));
    let dmem = image_file("0000_0000_0000_002a\n");

    let mut sim = Simulator::with_router(&Config::default(), SinkRouter::new());
    sim.load_program_file(imem.path()).unwrap();
    sim.load_data_file(dmem.path()).unwrap();
    sim.tick(true);
    sim.run_to_halt().unwrap();

    assert_eq!(sim.cpu.regs.read(1), 0x2A);
    assert_eq!(sim.dmem.read_u64(8), 0x2A);
}

#[test]
fn test_oversized_program_image_rejected() {
    let config = Config::from_json(r#"{ "memory": { "imem_size": 8 } }"#).unwrap();
    let mut sim = Simulator::new(&config);
    let image = image_file("00000000\n00000000\n00000000\n");

    assert!(sim.load_program_file(image.path()).is_err());
}

#[test]
fn test_mixed_program_end_to_end() {
    // Sum three doublewords, send the total to the network and store it.
    let program = ProgramBuilder::new()
        .load(1, 0x00)
        .load(2, 0x08)
        .load(3, 0x10)
        .add(4, 1, 2)
        .add(4, 4, 3)
        .store(4, 0x18)
        .store(4, NIC_OUT_DATA)
        .build();

    let mut sim = Simulator::with_router(&Config::default(), SinkRouter::new());
    sim.load_program(&program);
    sim.load_data(0x00, &[10, 20, 31]);
    sim.tick(true);
    sim.run_to_halt().unwrap();
    sim.run(4);

    assert_eq!(sim.cpu.regs.read(4), 61);
    assert_eq!(sim.dmem.read_u64(0x18), 61);
    assert_eq!(sim.router.delivered, vec![61]);
    assert_eq!(sim.cpu.stats.inst_load, 3);
    assert_eq!(sim.cpu.stats.inst_alu, 2);
    assert_eq!(sim.cpu.stats.inst_store, 2);
}

#[test]
fn test_tick_counts_every_cycle() {
    let mut sim = Simulator::new(&Config::default());
    sim.tick(true);
    sim.run(10);
    assert_eq!(sim.cpu.stats.cycles, 11);
    assert_eq!(sim.cpu.stats.reset_cycles, 1);
}
