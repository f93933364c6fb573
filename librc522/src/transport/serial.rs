// librc522/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::time::Duration;

use log::{debug, info};
use serialport::SerialPort;

use crate::Result;
use crate::chip::Register;
use crate::transport::traits::RegisterLink;
use crate::transport::uart::{DEFAULT_BAUD_RATE, UartLink, baud_register_value};
use crate::utils::{ms, pause};

/// How long the DTR-driven reset line is held in each state.
const HARD_RESET_HOLD_MS: u64 = 10;
/// Per-read timeout on the serial port.
const PORT_TIMEOUT_MS: u64 = 1000;

/// RC522 attached to a host serial port. DTR is wired to the chip's reset
/// input (NRSTPD), optionally through an inverter.
pub struct SerialLink {
    uart: UartLink<Box<dyn SerialPort>>,
    hard_reset_negated: bool,
}

impl SerialLink {
    /// Open `path` at the chip's power-on baud rate.
    pub fn open(path: &str) -> Result<Self> {
        Self::open_with_baud(path, DEFAULT_BAUD_RATE)
    }

    /// Open `path` at `baud`, which must be one the chip supports.
    pub fn open_with_baud(path: &str, baud: u32) -> Result<Self> {
        baud_register_value(baud)?;
        let port = serialport::new(path, baud)
            .timeout(Duration::from_millis(PORT_TIMEOUT_MS))
            .open()?;
        info!("opened {} at {} baud", path, baud);

        Ok(Self {
            uart: UartLink::new(port),
            hard_reset_negated: false,
        })
    }

    /// Invert the DTR level used for the reset pulse.
    pub fn set_hard_reset_negated(&mut self, negated: bool) {
        self.hard_reset_negated = negated;
    }

    /// Pulse the reset line: assert, wait, release, wait.
    pub fn hard_reset(&mut self) -> Result<()> {
        let port = self.uart.stream_mut();
        port.write_data_terminal_ready(!self.hard_reset_negated)?;
        pause(ms(HARD_RESET_HOLD_MS));
        port.write_data_terminal_ready(self.hard_reset_negated)?;
        pause(ms(HARD_RESET_HOLD_MS));
        Ok(())
    }

    /// Switch the chip and then the host side to `baud`.
    pub fn change_baud_rate(&mut self, baud: u32) -> Result<()> {
        let value = baud_register_value(baud)?;
        self.uart.write_register(Register::SerialSpeed, value)?;
        self.uart.stream_mut().set_baud_rate(baud)?;
        debug!("serial link now at {} baud", baud);
        Ok(())
    }

    /// Current host-side baud rate.
    pub fn baud_rate(&self) -> Result<u32> {
        Ok(self.uart.stream().baud_rate()?)
    }
}

impl RegisterLink for SerialLink {
    fn read_register_bulk(&mut self, reg: Register, count: usize) -> Result<Vec<u8>> {
        self.uart.read_register_bulk(reg, count)
    }

    fn write_register_bulk(&mut self, reg: Register, data: &[u8]) -> Result<()> {
        self.uart.write_register_bulk(reg, data)
    }

    /// A hardware reset also returns the chip to its power-on baud rate,
    /// so the host side follows.
    fn reset(&mut self) -> Result<()> {
        self.hard_reset()?;
        self.uart.stream_mut().set_baud_rate(DEFAULT_BAUD_RATE)?;
        Ok(())
    }
}
