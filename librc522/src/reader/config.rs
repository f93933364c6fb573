// librc522/src/reader/config.rs

use std::time::Duration;

/// IRQ register polls before a wait gives up
pub const IRQ_POLL_ATTEMPTS: usize = 4;
/// Settle time after SoftReset before CommandReg is checked
pub const RESET_SETTLE_MS: u64 = 50;

/// Timing knobs of the reader core.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ReaderConfig {
    /// How many times ComIrqReg is read while waiting for Rx/Tx completion.
    pub irq_poll_attempts: usize,
    /// Optional pause between IRQ polls, for links faster than the chip.
    pub irq_poll_interval: Duration,
    /// Pause after issuing SoftReset.
    pub reset_settle: Duration,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            irq_poll_attempts: IRQ_POLL_ATTEMPTS,
            irq_poll_interval: Duration::ZERO,
            reset_settle: Duration::from_millis(RESET_SETTLE_MS),
        }
    }
}
