// librc522/src/test_support/chip.rs

use std::collections::VecDeque;

use log::trace;

use crate::Result;
use crate::chip::{Command, Register};
use crate::constants::{
    COLL_POS_MASK, COLL_POS_NOT_VALID, COLL_VALUES_AFTER_COLL, COM_IRQ_RX, COM_IRQ_TX,
    COMMAND_POWER_DOWN, CRC_ENABLE, FIFO_FLUSH, FIFO_LEVEL_MASK, VERSION_MFRC522_V2,
};
use crate::test_support::tag::{AirFrame, SimulatedTag, TagReply};
use crate::transport::RegisterLink;

/// ComIrqReg after reset: IdleIRq and LoAlertIRq.
const COM_IRQ_RESET: u8 = 0x14;
/// CommandReg after reset: Idle with the receiver off.
const COMMAND_RESET: u8 = 0x20;
/// TxControlReg after reset: antenna drivers off.
const TX_CONTROL_RESET: u8 = 0x80;
/// Tx1RFEn | Tx2RFEn
const TX_CONTROL_DRIVERS: u8 = 0x03;

/// One frame the chip put on the air.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransmittedFrame {
    /// Command that put the frame on the air.
    pub command: Command,
    /// FIFO bytes sent.
    pub bytes: Vec<u8>,
    /// TxLastBits: valid bits of the last byte, 0 meaning all eight
    pub last_bits: u8,
    /// RxAlign at the time of sending.
    pub rx_align: u8,
    /// TX CRC was enabled
    pub crc: bool,
}

/// Register-level model of an RC522 with tags in its field.
///
/// Transceive executes when BitFramingReg is written with StartSend,
/// Transmit as soon as it is written to CommandReg. Replies of all tags
/// are merged bit by bit; the first disagreement is reported in CollReg
/// and the colliding bit reads as 1.
#[derive(Debug)]
pub struct SimulatedChip {
    regs: [u8; 0x40],
    fifo: VecDeque<u8>,
    tags: Vec<SimulatedTag>,
    version: u8,
    power_down_stuck: bool,
    /// Frames sent, in order
    pub frames: Vec<TransmittedFrame>,
    /// Every byte written: (register, value)
    pub writes: Vec<(Register, u8)>,
    /// Every byte read
    pub reads: Vec<Register>,
    /// Transport-level resets
    pub resets: usize,
}

impl Default for SimulatedChip {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedChip {
    /// Empty field, MFRC522 v2.0 silicon.
    pub fn new() -> Self {
        let mut chip = Self {
            regs: [0; 0x40],
            fifo: VecDeque::new(),
            tags: Vec::new(),
            version: VERSION_MFRC522_V2,
            power_down_stuck: false,
            frames: Vec::new(),
            writes: Vec::new(),
            reads: Vec::new(),
            resets: 0,
        };
        chip.power_on();
        chip
    }

    /// Chip with one tag in its field.
    pub fn with_tag(tag: SimulatedTag) -> Self {
        let mut chip = Self::new();
        chip.add_tag(tag);
        chip
    }

    /// Report `version` in VersionReg.
    pub fn with_version(mut self, version: u8) -> Self {
        self.version = version;
        self
    }

    /// Keep PowerDown set in CommandReg after every reset.
    pub fn stuck_in_power_down(mut self) -> Self {
        self.power_down_stuck = true;
        self.power_on();
        self
    }

    /// Bring a tag into the field.
    pub fn add_tag(&mut self, tag: SimulatedTag) {
        self.tags.push(tag);
    }

    /// Take every tag out of the field.
    pub fn remove_tags(&mut self) -> Vec<SimulatedTag> {
        std::mem::take(&mut self.tags)
    }

    /// Tags in the field.
    pub fn tags(&self) -> &[SimulatedTag] {
        &self.tags
    }

    /// Current register value, without logging a read.
    pub fn register(&self, reg: Register) -> u8 {
        self.regs[reg.address() as usize]
    }

    /// TX CRC enabled in TxModeReg.
    pub fn tx_crc(&self) -> bool {
        self.register(Register::TxMode) & CRC_ENABLE != 0
    }

    /// RX CRC enabled in RxModeReg.
    pub fn rx_crc(&self) -> bool {
        self.register(Register::RxMode) & CRC_ENABLE != 0
    }

    /// Antenna drivers enabled.
    pub fn antenna_on(&self) -> bool {
        self.register(Register::TxControl) & TX_CONTROL_DRIVERS == TX_CONTROL_DRIVERS
    }

    /// Bytes read from `reg` so far.
    pub fn read_count(&self, reg: Register) -> usize {
        self.reads.iter().filter(|r| **r == reg).count()
    }

    /// All bytes written to `reg`.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.writes
            .iter()
            .filter(|(r, _)| *r == reg)
            .map(|(_, v)| *v)
            .collect()
    }

    /// Forget logged frames, reads and writes.
    pub fn clear_log(&mut self) {
        self.frames.clear();
        self.writes.clear();
        self.reads.clear();
    }

    fn set(&mut self, reg: Register, value: u8) {
        self.regs[reg.address() as usize] = value;
    }

    fn power_on(&mut self) {
        self.regs = [0; 0x40];
        self.fifo.clear();
        let command = if self.power_down_stuck {
            COMMAND_RESET | COMMAND_POWER_DOWN
        } else {
            COMMAND_RESET
        };
        self.set(Register::Command, command);
        self.set(Register::ComIrq, COM_IRQ_RESET);
        self.set(Register::Coll, COLL_VALUES_AFTER_COLL);
        self.set(Register::TxControl, TX_CONTROL_RESET);
    }

    fn read_byte(&mut self, reg: Register) -> u8 {
        self.reads.push(reg);
        match reg {
            Register::FifoData => self.fifo.pop_front().unwrap_or(0),
            Register::FifoLevel => (self.fifo.len() as u8) & FIFO_LEVEL_MASK,
            Register::Version => self.version,
            other => self.register(other),
        }
    }

    fn write_byte(&mut self, reg: Register, value: u8) {
        self.writes.push((reg, value));
        match reg {
            Register::FifoData => self.fifo.push_back(value),
            Register::FifoLevel => {
                if value & FIFO_FLUSH != 0 {
                    self.fifo.clear();
                }
            }
            Register::ComIrq => {
                let bits = value & 0x7F;
                let current = self.register(Register::ComIrq);
                // Set1 selects whether the marked bits are set or cleared.
                let next = if value & 0x80 != 0 {
                    current | bits
                } else {
                    current & !bits
                };
                self.set(Register::ComIrq, next);
            }
            Register::Command => self.command(value),
            Register::BitFraming => {
                self.set(Register::BitFraming, value & 0x7F);
                let running = Command::from_code(self.register(Register::Command));
                if value & 0x80 != 0 && running == Some(Command::Transceive) {
                    self.execute(Command::Transceive, value);
                }
            }
            other => self.set(other, value),
        }
    }

    fn command(&mut self, value: u8) {
        match Command::from_code(value) {
            Some(Command::SoftReset) => {
                trace!("sim: soft reset");
                self.power_on();
            }
            Some(Command::Transmit) => {
                self.set(Register::Command, value);
                let framing = self.register(Register::BitFraming);
                self.execute(Command::Transmit, framing);
                // Transmit terminates by itself.
                self.set(Register::Command, (value & 0xF0) | Command::Idle as u8);
            }
            _ => self.set(Register::Command, value),
        }
    }

    fn execute(&mut self, command: Command, framing: u8) {
        let bytes: Vec<u8> = self.fifo.drain(..).collect();
        let last_bits = framing & 0x07;
        let rx_align = (framing >> 4) & 0x07;
        let crc = self.tx_crc();

        self.frames.push(TransmittedFrame {
            command,
            bytes: bytes.clone(),
            last_bits,
            rx_align,
            crc,
        });
        let irq = self.register(Register::ComIrq) | COM_IRQ_TX;
        self.set(Register::ComIrq, irq);

        if !self.antenna_on() {
            return;
        }

        let bits = match last_bits {
            0 => bytes.len() * 8,
            n => bytes.len().saturating_sub(1) * 8 + n as usize,
        };
        let frame = AirFrame {
            bytes: &bytes,
            bits,
            crc,
        };
        let replies: Vec<TagReply> = self
            .tags
            .iter_mut()
            .filter_map(|tag| tag.respond(&frame))
            .collect();

        if command != Command::Transceive || replies.is_empty() {
            return;
        }

        let rx_crc = self.rx_crc();
        let streams: Vec<Vec<bool>> = replies.into_iter().map(|r| air_bits(r, rx_crc)).collect();
        let (merged, collision) = merge(&streams);
        trace!(
            "sim: {} repl(ies), {} bits, collision {:?}",
            streams.len(),
            merged.len(),
            collision
        );

        self.fifo.extend(pack(&merged, rx_align as usize));

        let coll_flags = self.register(Register::Coll) & COLL_VALUES_AFTER_COLL;
        let coll = match collision {
            Some(pos) => coll_flags | (((pos + 1) as u8) & COLL_POS_MASK),
            None => coll_flags | COLL_POS_NOT_VALID,
        };
        self.set(Register::Coll, coll);
        let irq = self.register(Register::ComIrq) | COM_IRQ_RX;
        self.set(Register::ComIrq, irq);
    }
}

impl RegisterLink for SimulatedChip {
    fn read_register_bulk(&mut self, reg: Register, count: usize) -> Result<Vec<u8>> {
        Ok((0..count).map(|_| self.read_byte(reg)).collect())
    }

    fn write_register_bulk(&mut self, reg: Register, data: &[u8]) -> Result<()> {
        for &value in data {
            self.write_byte(reg, value);
        }
        Ok(())
    }

    /// Hardware reset line.
    fn reset(&mut self) -> Result<()> {
        self.resets += 1;
        self.power_on();
        Ok(())
    }
}

/// ISO14443-A CRC_A (preset 0x6363), transmitted low byte first.
pub fn crc_a(data: &[u8]) -> u16 {
    data.iter().fold(0x6363u16, |crc, &b| {
        let mut ch = b ^ (crc & 0xFF) as u8;
        ch ^= ch << 4;
        let ch = ch as u16;
        (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4)
    })
}

/// Bits a reply puts into the receiver. The chip strips the CRC_A only
/// when RX CRC is enabled.
fn air_bits(reply: TagReply, rx_crc: bool) -> Vec<bool> {
    let bytes = match reply {
        TagReply::Bits(bits) => return bits,
        TagReply::Short(bytes) => bytes,
        TagReply::Framed(mut bytes) => {
            if !rx_crc {
                let crc = crc_a(&bytes);
                bytes.extend_from_slice(&crc.to_le_bytes());
            }
            bytes
        }
    };
    bytes
        .iter()
        .flat_map(|&b| (0..8).map(move |i| b >> i & 1 == 1))
        .collect()
}

/// OR all streams together and find the first position where they differ.
fn merge(streams: &[Vec<bool>]) -> (Vec<bool>, Option<usize>) {
    let len = streams.iter().map(Vec::len).max().unwrap_or(0);
    let mut collision = None;
    let merged = (0..len)
        .map(|i| {
            let mut seen = streams.iter().filter_map(|s| s.get(i).copied());
            let first = seen.next().unwrap_or(false);
            let differs = seen.any(|v| v != first);
            if differs && collision.is_none() {
                collision = Some(i);
            }
            first || differs
        })
        .collect();
    (merged, collision)
}

/// Place bit `j` at FIFO bit `rx_align + j`.
fn pack(bits: &[bool], rx_align: usize) -> Vec<u8> {
    let mut out = vec![0u8; (rx_align + bits.len()).div_ceil(8)];
    for (j, _) in bits.iter().enumerate().filter(|(_, b)| **b) {
        let p = rx_align + j;
        out[p / 8] |= 1 << (p % 8);
    }
    out
}
