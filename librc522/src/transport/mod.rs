// librc522/src/transport/mod.rs

/// Scripted link for unit tests.
pub mod mock;
/// Host serial port link.
#[cfg(feature = "serial")]
pub mod serial;
/// The register link trait.
pub mod traits;
/// UART register protocol over a byte stream.
pub mod uart;

pub use mock::MockLink;
#[cfg(feature = "serial")]
pub use serial::SerialLink;
pub use traits::RegisterLink;
pub use uart::UartLink;
