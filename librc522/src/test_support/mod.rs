// librc522/src/test_support/mod.rs

//! Test support helpers intended for use by unit and integration tests.
//!
//! [`SimulatedChip`] models the RC522 at register level with ISO14443-A
//! tags in its field, so the reader, anticollision and authentication
//! code paths run unchanged against it.
#![allow(dead_code)]

/// Tag side of the Ultralight-C handshake.
pub mod card;
/// Register-level reader model.
pub mod chip;
/// ISO14443-A tag model.
pub mod tag;

use std::time::Duration;

pub use card::UltralightCCard;
pub use chip::{SimulatedChip, TransmittedFrame, crc_a};
pub use tag::{SimulatedTag, TagState};

use crate::Result;
use crate::reader::{Initialized, Reader, ReaderConfig};
use crate::transport::RegisterLink;

/// Default configuration without the reset settle pause.
#[doc(hidden)]
pub fn quick_config() -> ReaderConfig {
    ReaderConfig {
        reset_settle: Duration::ZERO,
        ..ReaderConfig::default()
    }
}

/// Initialize a Reader on `link` with [`quick_config`].
#[doc(hidden)]
pub fn initialize_quick<L: RegisterLink>(link: L) -> Result<Reader<L, Initialized>> {
    Reader::with_config(link, quick_config()).initialize()
}

/// Convenience: initialized Reader on a simulated chip, with the traffic
/// of the initialization already cleared from the chip's logs.
#[doc(hidden)]
pub fn initialized_reader(chip: SimulatedChip) -> Result<Reader<SimulatedChip, Initialized>> {
    let mut reader = initialize_quick(chip)?;
    reader.link_mut().clear_log();
    Ok(reader)
}
