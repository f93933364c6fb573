// Shared helpers for the integration tests. Each test file pulls this in
// with `#[path = "../common/mod.rs"] mod common;`, so not every helper is
// used everywhere.
#![allow(dead_code)]

pub mod fixtures;

use librc522::reader::{Initialized, Reader};
use librc522::test_support::{self, SimulatedChip, SimulatedTag};

pub use fixtures::*;

/// Route `log` output to the test harness; repeated calls are harmless.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Initialized reader on a simulated chip holding `tags`.
pub fn reader_with_tags(tags: Vec<SimulatedTag>) -> Reader<SimulatedChip, Initialized> {
    init_logging();
    let mut chip = SimulatedChip::new();
    for tag in tags {
        chip.add_tag(tag);
    }
    test_support::initialized_reader(chip).unwrap()
}

/// Initialized reader with a single tag in the field.
pub fn reader_with_tag(tag: SimulatedTag) -> Reader<SimulatedChip, Initialized> {
    reader_with_tags(vec![tag])
}
