#![cfg(feature = "serial")]

//! Helpers for tests against a real reader.
//!
//! The serial port is taken from `RC522_PORT` (e.g. `/dev/ttyUSB0`). Without
//! it the tests return early, so `--features serial` stays usable in CI.

use std::time::Duration;

use librc522::Result;
use librc522::reader::{Initialized, Reader, ReaderBuilder};
use librc522::transport::SerialLink;

pub const PORT_ENV: &str = "RC522_PORT";
/// Set to "1" when DTR drives the reset line through an inverter.
pub const RESET_NEGATED_ENV: &str = "RC522_RESET_NEGATED";

/// Open and initialize the reader named by `RC522_PORT`.
///
/// - Ok(Some(reader)) : port configured and reader initialized
/// - Ok(None) : no port configured
/// - Err(e) : the port or the chip failed
pub fn open_and_initialize_reader() -> Result<Option<Reader<SerialLink, Initialized>>> {
    let Ok(path) = std::env::var(PORT_ENV) else {
        return Ok(None);
    };
    let mut link = SerialLink::open(&path)?;
    link.set_hard_reset_negated(std::env::var(RESET_NEGATED_ENV).as_deref() == Ok("1"));

    let reader = ReaderBuilder::new()
        .with_link(link)
        .irq_poll_interval(Duration::from_millis(2))
        .build()?
        .initialize()?;
    Ok(Some(reader))
}
