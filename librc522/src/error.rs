// librc522/src/error.rs

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// Byte-level I/O or acknowledgement failure on the register link.
    #[error("transport error: {0}")]
    Transport(String),

    // シリアルポート実装は feature = "serial" のときだけ有効
    /// Failure reported by the serial port.
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// No tag answered within the IRQ poll budget.
    #[error("tag did not reply")]
    NoReply,

    /// Chip inconsistency: stuck in power-down or a transmit timeout.
    #[error("reader fault: {0}")]
    ReaderFault(String),

    /// UID check byte does not match the received fragment.
    #[error("invalid BCC: expected {expected:#04x}, calculated {calculated:#04x}")]
    InvalidBcc {
        /// BCC byte sent by the tag
        expected: u8,
        /// XOR of the four fragment bytes
        calculated: u8,
    },

    /// Authentication reply of unexpected shape or status.
    #[error("authentication protocol error: {0}")]
    AuthProtocol(String),

    /// The tag did not prove possession of the key.
    #[error("authentication failed: tag did not prove possession of the key")]
    AuthenticationFailed,

    /// Buffer or UID of an unexpected length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Length the operation needs
        expected: usize,
        /// Length it got
        actual: usize,
    },

    /// Baud rate the chip's UART cannot run at.
    #[error("unsupported baud rate: {0}")]
    UnsupportedBaudRate(u32),

    /// Builder finished without a register link.
    #[error("no register link configured")]
    LinkNotConfigured,

    /// The system random source failed.
    #[error("random source failure: {0}")]
    Random(String),
}

impl Error {
    /// True for the "no tag answered" outcome that polling loops expect
    /// to see most of the time.
    pub fn is_no_reply(&self) -> bool {
        matches!(self, Error::NoReply)
    }
}

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;
