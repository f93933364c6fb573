// librc522/src/lib.rs

//! librc522
//!
//! Pure Rust driver for RC522-class contactless readers attached through
//! the chip's UART register interface: ISO14443-A tag discovery with
//! cascade-level anticollision, and Ultralight-C mutual authentication.
#![warn(missing_docs)]

pub mod chip;
pub mod constants;
/// Crate error type.
pub mod error;
pub mod picc;
/// Common imports.
pub mod prelude;
/// Reader handle and chip-level operations.
pub mod reader;
pub mod test_support;
/// Register links to the chip.
pub mod transport;
/// Tag and chip identifiers.
pub mod types;
pub mod ultralight_c;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
