// librc522/src/chip/command.rs

use crate::constants::COMMAND_RCV_OFF_SHIFT;

/// Commands accepted by CommandReg[3:0]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Command {
    /// No action; cancels the running command.
    Idle = 0x0,
    /// Stores 25 bytes into the internal buffer.
    Mem = 0x1,
    /// Generates a 10-byte random ID.
    GenerateRandomId = 0x2,
    /// Runs the CRC coprocessor.
    CalcCrc = 0x3,
    /// Sends the FIFO contents.
    Transmit = 0x4,
    /// Modifies CommandReg bits without touching the command.
    NoCmdChange = 0x7,
    /// Activates the receiver.
    Receive = 0x8,
    /// Sends the FIFO and then receives the reply.
    Transceive = 0xC,
    /// MIFARE Classic authentication.
    MfAuthenticate = 0xE,
    /// Resets the chip.
    SoftReset = 0xF,
}

impl Command {
    /// Decode CommandReg[3:0].
    pub fn from_code(code: u8) -> Option<Self> {
        match code & 0x0F {
            0x0 => Some(Command::Idle),
            0x1 => Some(Command::Mem),
            0x2 => Some(Command::GenerateRandomId),
            0x3 => Some(Command::CalcCrc),
            0x4 => Some(Command::Transmit),
            0x7 => Some(Command::NoCmdChange),
            0x8 => Some(Command::Receive),
            0xC => Some(Command::Transceive),
            0xE => Some(Command::MfAuthenticate),
            0xF => Some(Command::SoftReset),
            _ => None,
        }
    }

    /// Commands that listen for a reply need the analog receiver powered.
    pub fn needs_receiver(self) -> bool {
        matches!(
            self,
            Command::Receive | Command::Transceive | Command::MfAuthenticate
        )
    }

    /// CommandReg value: command code plus RcvOff (bit 5) cleared only when
    /// the receiver must stay on.
    pub fn register_value(self) -> u8 {
        let rcv_off = u8::from(!self.needs_receiver());
        self as u8 | (rcv_off << COMMAND_RCV_OFF_SHIFT)
    }
}

/// What the chip is currently doing, as far as the driver has commanded it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PcdState {
    /// No command running.
    #[default]
    Idle,
    /// Transmit issued.
    Transmitting,
    /// Receive issued.
    Receiving,
    /// Transceive issued.
    Transceiving,
    /// Any other command.
    Busy(Command),
}

impl From<Command> for PcdState {
    fn from(cmd: Command) -> Self {
        match cmd {
            Command::Idle | Command::SoftReset => PcdState::Idle,
            Command::Transmit => PcdState::Transmitting,
            Command::Receive => PcdState::Receiving,
            Command::Transceive => PcdState::Transceiving,
            other => PcdState::Busy(other),
        }
    }
}
