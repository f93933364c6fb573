// librc522/src/reader/builder.rs

use std::time::Duration;

use crate::reader::config::ReaderConfig;
use crate::reader::handle::{Reader, Uninitialized};
use crate::transport::RegisterLink;
use crate::{Error, Result};

/// Helper to construct a Reader with optional configuration.
pub struct ReaderBuilder<L> {
    link: Option<L>,
    config: ReaderConfig,
}

impl<L: RegisterLink> ReaderBuilder<L> {
    /// Start with the default configuration and no link.
    pub fn new() -> Self {
        Self {
            link: None,
            config: ReaderConfig::default(),
        }
    }

    /// Provide the register link (serial port, MockLink, ...)
    pub fn with_link(mut self, link: L) -> Self {
        self.link = Some(link);
        self
    }

    /// Replace the whole configuration.
    pub fn with_config(mut self, config: ReaderConfig) -> Self {
        self.config = config;
        self
    }

    /// At least one poll is always made.
    pub fn irq_poll_attempts(mut self, attempts: usize) -> Self {
        self.config.irq_poll_attempts = attempts.max(1);
        self
    }

    /// Pause between IRQ polls.
    pub fn irq_poll_interval(mut self, interval: Duration) -> Self {
        self.config.irq_poll_interval = interval;
        self
    }

    /// Wait after SoftReset before checking power-down.
    pub fn reset_settle(mut self, settle: Duration) -> Self {
        self.config.reset_settle = settle;
        self
    }

    /// Consume the builder and return an uninitialized Reader.
    /// Requires a link to be provided; otherwise returns LinkNotConfigured.
    pub fn build(self) -> Result<Reader<L, Uninitialized>> {
        match self.link {
            Some(link) => Ok(Reader::with_config(link, self.config)),
            None => Err(Error::LinkNotConfigured),
        }
    }
}

impl<L: RegisterLink> Default for ReaderBuilder<L> {
    fn default() -> Self {
        Self::new()
    }
}
