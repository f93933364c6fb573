// librc522/src/prelude.rs

pub use crate::chip::{Command, PcdState, Register};
pub use crate::picc::CascadeLevel;
pub use crate::reader::{Initialized, Pcd, Reader, ReaderBuilder, ReaderConfig, Uninitialized};
#[cfg(feature = "serial")]
pub use crate::transport::SerialLink;
pub use crate::transport::{MockLink, RegisterLink, UartLink};
pub use crate::ultralight_c::UltralightC;
pub use crate::{Atqa, ChipVersion, Error, Result, Sak, Tag, Uid};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms};
