// librc522/src/reader/transceive.rs

use log::trace;

use crate::Result;
use crate::chip::{Command, Register};
use crate::constants::{BIT_FRAMING_START_SEND, COLL_POS_MASK, COLL_POS_NOT_VALID};
use crate::reader::handle::{Initialized, Reader};
use crate::transport::RegisterLink;
use crate::utils::bytes_to_hex_spaced;

/// Reply to a bit-oriented exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitFrame {
    /// FIFO contents; with a receive alignment the first received bit sits
    /// at bit `rx_align` of the first byte.
    pub data: Vec<u8>,
    /// Offset of the first colliding bit, counted from the first received
    /// bit. `None` when no collision was detected.
    pub collision: Option<usize>,
}

/// BitFramingReg value that starts a send with the given framing.
pub fn bit_framing(rx_align: u8, tx_last_bits: u8) -> u8 {
    BIT_FRAMING_START_SEND | ((rx_align & 0x07) << 4) | (tx_last_bits & 0x07)
}

/// Bits a CollPos value of 0 stands for.
const COLL_POS_WRAP: usize = 32;

/// Decode CollReg for a frame of `received_bits` bits. CollPos counts from
/// 1 and wraps to 0 on the 32nd bit; a 0 on a shorter frame is taken as a
/// collision on the very first bit.
pub fn collision_position(coll_reg: u8, received_bits: usize) -> Option<usize> {
    if coll_reg & COLL_POS_NOT_VALID != 0 {
        return None;
    }
    match (coll_reg & COLL_POS_MASK) as usize {
        0 if received_bits >= COLL_POS_WRAP => Some(COLL_POS_WRAP - 1),
        0 => Some(0),
        pos => Some(pos - 1),
    }
}

impl<L: RegisterLink> Reader<L, Initialized> {
    /// Bit-oriented exchange used by anticollision. `bit_len` truncates the
    /// request to `ceil(bit_len / 8)` bytes with `bit_len % 8` valid bits
    /// in the last byte; `rx_align` places the first received bit.
    ///
    /// CRC settings are left untouched.
    pub fn transceive_bits(
        &mut self,
        request: &[u8],
        bit_len: Option<usize>,
        rx_align: u8,
    ) -> Result<BitFrame> {
        let (request, tx_last_bits) = match bit_len {
            Some(bits) => {
                let full_bytes = bits.div_ceil(8).min(request.len());
                (&request[..full_bytes], (bits % 8) as u8)
            }
            None => (request, 0),
        };

        self.prepare_transmit(request)?;
        self.issue(Command::Transceive)?;
        self.write(Register::BitFraming, bit_framing(rx_align, tx_last_bits))?;

        self.wait_for_rx()?;

        let coll_reg = self.read(Register::Coll)?;
        let data = self.read_fifo()?;
        let received_bits = (data.len() * 8).saturating_sub(rx_align as usize);
        let collision = collision_position(coll_reg, received_bits);
        trace!(
            "bits tx={} last={} align={} rx=[{}] coll={:?}",
            bytes_to_hex_spaced(request),
            tx_last_bits,
            rx_align,
            bytes_to_hex_spaced(&data),
            collision
        );
        Ok(BitFrame { data, collision })
    }

    /// Full-byte exchange with the selected tag, CRC on in both directions.
    pub fn transceive(&mut self, request: &[u8]) -> Result<Vec<u8>> {
        self.prepare_transmit(request)?;
        self.enable_crc(true, true)?;

        self.issue(Command::Transceive)?;
        self.write(Register::BitFraming, bit_framing(0, 0))?;

        self.wait_for_rx()?;

        let reply = self.read_fifo()?;
        trace!(
            "tx=[{}] rx=[{}]",
            bytes_to_hex_spaced(request),
            bytes_to_hex_spaced(&reply)
        );
        Ok(reply)
    }

    /// Transmit-only exchange (CRC on); no reply is read.
    pub fn send(&mut self, request: &[u8]) -> Result<()> {
        self.prepare_transmit(request)?;
        self.enable_crc(true, true)?;

        self.issue(Command::Transmit)?;

        self.wait_for_tx()
    }
}
