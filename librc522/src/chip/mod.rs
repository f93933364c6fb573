// librc522/src/chip/mod.rs
//! Static catalog of the reader chip: register addresses and commands.

/// CommandReg commands and the driver's view of them.
pub mod command;
/// Register catalog.
pub mod register;

pub use command::{Command, PcdState};
pub use register::Register;
