#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use librc522::reader::{Reader, ReaderBuilder};
use librc522::test_support::SimulatedChip;
use librc522::{ChipVersion, Error};

#[test]
fn builder_then_initialize() {
    common::init_logging();
    let reader = ReaderBuilder::new()
        .with_link(SimulatedChip::new())
        .reset_settle(Duration::ZERO)
        .build()
        .unwrap();
    assert_eq!(reader.config().irq_poll_attempts, 4);

    let mut reader = reader.initialize().unwrap();
    assert_eq!(reader.link().resets, 1);
    assert!(reader.link().antenna_on());
    assert_eq!(reader.version().unwrap(), ChipVersion::Mfrc522V2);
}

#[test]
fn chip_stuck_in_power_down() {
    let chip = SimulatedChip::new().stuck_in_power_down();
    match librc522::test_support::initialize_quick(chip) {
        Err(Error::ReaderFault(msg)) => assert!(msg.contains("power-down")),
        Err(other) => panic!("expected ReaderFault, got {:?}", other),
        Ok(_) => panic!("expected ReaderFault"),
    }
}

#[test]
fn version_variants() {
    for (id, expected) in [
        (0x91, ChipVersion::Mfrc522V1),
        (0x92, ChipVersion::Mfrc522V2),
        (0x88, ChipVersion::Fm17522),
        (0x00, ChipVersion::Unknown),
        (0xB2, ChipVersion::Unknown),
    ] {
        let chip = SimulatedChip::new().with_version(id);
        let mut reader = librc522::test_support::initialize_quick(chip).unwrap();
        assert_eq!(reader.version().unwrap(), expected, "id {:#04x}", id);
    }
}

#[test]
fn plain_constructor_uses_default_config() {
    let reader = Reader::new(SimulatedChip::new());
    assert_eq!(reader.config().reset_settle, Duration::from_millis(50));
}
