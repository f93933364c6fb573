// librc522/src/transport/uart.rs

use std::io::{Read, Write};

use log::trace;

use crate::chip::Register;
use crate::transport::traits::RegisterLink;
use crate::utils::bytes_to_hex_spaced;
use crate::{Error, Result};

/// Read requests carry the address with bit 7 set.
const READ_FLAG: u8 = 0x80;

/// SerialSpeedReg values for the supported host baud rates
pub const BAUD_REGISTER_VALUES: [(u32, u8); 12] = [
    (7_200, 0xFA),
    (9_600, 0xEB),
    (14_400, 0xDA),
    (19_200, 0xCB),
    (38_400, 0xAB),
    (57_600, 0x9A),
    (115_200, 0x7A),
    (128_000, 0x74),
    (230_400, 0x5A),
    (460_800, 0x3A),
    (921_600, 0x1C),
    (1_228_800, 0x15),
];

/// Baud rate the chip falls back to after a hardware reset.
pub const DEFAULT_BAUD_RATE: u32 = 9_600;

/// Look up the SerialSpeedReg value for a host baud rate.
pub fn baud_register_value(baud: u32) -> Result<u8> {
    BAUD_REGISTER_VALUES
        .iter()
        .find(|(rate, _)| *rate == baud)
        .map(|(_, value)| *value)
        .ok_or(Error::UnsupportedBaudRate(baud))
}

/// The chip's UART register protocol over any byte stream.
///
/// Reads send the address (bit 7 set) once per requested byte and expect
/// exactly that many bytes back. Writes send address/value pairs and expect
/// one acknowledgement per byte equal to the address. Requests for a run are
/// sent as a single burst.
pub struct UartLink<S> {
    stream: S,
}

impl<S: Read + Write> UartLink<S> {
    /// Wrap a byte stream already running at the chip's baud rate.
    pub fn new(stream: S) -> Self {
        Self { stream }
    }

    /// Borrow the underlying stream.
    pub fn stream(&self) -> &S {
        &self.stream
    }

    /// Mutably borrow the underlying stream.
    pub fn stream_mut(&mut self) -> &mut S {
        &mut self.stream
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> S {
        self.stream
    }
}

impl<S: Read + Write> RegisterLink for UartLink<S> {
    fn read_register_bulk(&mut self, reg: Register, count: usize) -> Result<Vec<u8>> {
        if count == 0 {
            return Ok(Vec::new());
        }

        let request = vec![reg.address() | READ_FLAG; count];
        self.stream
            .write_all(&request)
            .map_err(|e| Error::Transport(format!("could not send read request: {e}")))?;

        let mut data = vec![0u8; count];
        self.stream.read_exact(&mut data).map_err(|e| {
            Error::Transport(format!("could not read {count} byte(s) from {reg}: {e}"))
        })?;

        trace!("{} -> {}", reg, bytes_to_hex_spaced(&data));
        Ok(data)
    }

    fn write_register_bulk(&mut self, reg: Register, data: &[u8]) -> Result<()> {
        if data.is_empty() {
            return Ok(());
        }
        trace!("{} <- {}", reg, bytes_to_hex_spaced(data));

        let address = reg.address();
        let request: Vec<u8> = data.iter().flat_map(|b| [address, *b]).collect();
        self.stream
            .write_all(&request)
            .map_err(|e| Error::Transport(format!("could not send write request: {e}")))?;

        let mut acks = vec![0u8; data.len()];
        self.stream
            .read_exact(&mut acks)
            .map_err(|e| Error::Transport(format!("missing write acknowledgement: {e}")))?;

        if let Some(bad) = acks.iter().find(|a| **a != address) {
            return Err(Error::Transport(format!(
                "ack mismatch on {reg}: expected {address:#04x}, got {bad:#04x}"
            )));
        }
        Ok(())
    }
}
