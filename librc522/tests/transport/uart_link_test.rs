#[path = "../common/mod.rs"]
mod common;

use std::collections::VecDeque;
use std::io::{self, Read, Write};

use librc522::chip::Register;
use librc522::test_support::{self, SimulatedChip};
use librc522::transport::{RegisterLink, UartLink};

/// Serial wire in front of a simulated chip: decodes the UART register
/// protocol and answers like the RC522 does.
struct ChipWire {
    chip: SimulatedChip,
    pending_write: Option<u8>,
    rx: VecDeque<u8>,
    sent: usize,
}

impl ChipWire {
    fn new(chip: SimulatedChip) -> Self {
        Self {
            chip,
            pending_write: None,
            rx: VecDeque::new(),
            sent: 0,
        }
    }

    fn reg(address: u8) -> io::Result<Register> {
        Register::try_from(address & 0x3F)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))
    }
}

impl Write for ChipWire {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        for &byte in buf {
            self.sent += 1;
            if let Some(address) = self.pending_write.take() {
                let reg = Self::reg(address)?;
                self.chip
                    .write_register(reg, byte)
                    .map_err(|e| io::Error::other(e.to_string()))?;
                self.rx.push_back(address);
            } else if byte & 0x80 != 0 {
                let reg = Self::reg(byte)?;
                let value = self
                    .chip
                    .read_register(reg)
                    .map_err(|e| io::Error::other(e.to_string()))?;
                self.rx.push_back(value);
            } else {
                self.pending_write = Some(byte);
            }
        }
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Read for ChipWire {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.rx.is_empty() {
            return Err(io::Error::new(io::ErrorKind::TimedOut, "no data"));
        }
        let n = buf.len().min(self.rx.len());
        for (slot, byte) in buf.iter_mut().zip(self.rx.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }
}

#[test]
fn scan_over_the_uart_protocol() {
    common::init_logging();
    let wire = ChipWire::new(SimulatedChip::with_tag(common::single_tag()));
    let mut reader = test_support::initialize_quick(UartLink::new(wire)).unwrap();

    let uid = reader.scan(false).unwrap();
    assert_eq!(uid.as_bytes(), &common::UID_SINGLE);

    let wire = reader.into_link().into_inner();
    assert!(wire.rx.is_empty());
    assert!(wire.pending_write.is_none());
    assert_eq!(wire.chip.frames.len(), 3);
    assert!(wire.sent > 0);
}

#[test]
fn fifo_burst_is_one_request() {
    let mut link = UartLink::new(ChipWire::new(SimulatedChip::new()));
    link.write_register_bulk(Register::FifoData, &[0x93, 0x20, 0x00])
        .unwrap();
    assert_eq!(link.read_register(Register::FifoLevel).unwrap(), 3);
    assert_eq!(
        link.read_register_bulk(Register::FifoData, 3).unwrap(),
        vec![0x93, 0x20, 0x00]
    );
    // 3 address/value pairs, one FIFOLevel read, three FIFO reads
    assert_eq!(link.stream().sent, 6 + 1 + 3);
}
