// librc522/src/reader/handle.rs

use std::marker::PhantomData;

use log::{debug, trace, warn};

use crate::chip::{Command, PcdState, Register};
use crate::constants::*;
use crate::reader::config::ReaderConfig;
use crate::transport::RegisterLink;
use crate::types::ChipVersion;
use crate::utils::pause;
use crate::{Error, Result};

/// Type-state marker: the chip has not been reset yet.
pub struct Uninitialized;
/// Type-state marker: the chip is reset and configured.
pub struct Initialized;

/// Last CRC-enable values written to TxModeReg/RxModeReg. `None` means the
/// chip state is not known (never written, or reset since).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CrcState {
    /// TxModeReg CRC enable
    pub tx: Option<bool>,
    /// RxModeReg CRC enable
    pub rx: Option<bool>,
}

/// Reader handle that enforces initialization state at compile time.
///
/// Owns the register link, the cached CRC state and the running-command
/// state. Not synchronized: share it between threads only behind a lock.
pub struct Reader<L, State = Uninitialized> {
    pub(crate) link: L,
    pub(crate) config: ReaderConfig,
    pub(crate) crc: CrcState,
    pub(crate) state: PcdState,
    _state: PhantomData<State>,
}

impl<L: RegisterLink, S> Reader<L, S> {
    /// Active configuration.
    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    /// Borrow the register link.
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Mutably borrow the register link.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Give up the reader and return its link.
    pub fn into_link(self) -> L {
        self.link
    }

    pub(crate) fn read(&mut self, reg: Register) -> Result<u8> {
        self.link.read_register(reg)
    }

    pub(crate) fn write(&mut self, reg: Register, value: u8) -> Result<()> {
        self.link.write_register(reg, value)
    }

    /// Write CommandReg. Only one command runs at a time; a new one
    /// supersedes whatever was running.
    pub(crate) fn issue(&mut self, cmd: Command) -> Result<()> {
        self.write(Register::Command, cmd.register_value())?;
        self.state = PcdState::from(cmd);
        Ok(())
    }

    /// SoftReset, settle, verify the chip left power-down, then apply the
    /// fixed configuration and switch the antenna on.
    pub(crate) fn soft_reset(&mut self) -> Result<()> {
        self.issue(Command::SoftReset)?;
        pause(self.config.reset_settle);

        // The soft reset restored TxModeReg/RxModeReg.
        self.crc = CrcState::default();

        if self.read(Register::Command)? & COMMAND_POWER_DOWN != 0 {
            return Err(Error::ReaderFault(
                "PCD has not left power-down mode after reset".into(),
            ));
        }

        self.write(Register::TxAsk, TX_ASK_FORCE_100)?;
        self.write(Register::Mode, MODE_CRC_PRESET_6363)?;
        self.write(Register::Coll, COLL_VALUES_AFTER_COLL)?;
        self.write(Register::TxControl, TX_CONTROL_ANTENNA_ON)?;
        debug!("reader reset complete, antenna on");
        Ok(())
    }
}

impl<L: RegisterLink> Reader<L, Uninitialized> {
    /// Create a Reader with the default configuration.
    pub fn new(link: L) -> Self {
        Self::with_config(link, ReaderConfig::default())
    }

    /// Create a Reader with an explicit configuration.
    pub fn with_config(link: L, config: ReaderConfig) -> Self {
        Self {
            link,
            config,
            crc: CrcState::default(),
            state: PcdState::Idle,
            _state: PhantomData,
        }
    }

    /// Reset the transport and the chip. Returns an initialized Reader on
    /// success.
    pub fn initialize(self) -> Result<Reader<L, Initialized>> {
        let mut this = self;
        this.link.reset()?;
        this.soft_reset()?;

        Ok(Reader {
            link: this.link,
            config: this.config,
            crc: this.crc,
            state: this.state,
            _state: PhantomData,
        })
    }
}

impl<L: RegisterLink> Reader<L, Initialized> {
    /// Soft-reset the chip again and reapply the configuration.
    pub fn reset(&mut self) -> Result<()> {
        self.soft_reset()
    }

    /// Drive TX1 and TX2 to power the field.
    pub fn antenna_on(&mut self) -> Result<()> {
        self.write(Register::TxControl, TX_CONTROL_ANTENNA_ON)
    }

    /// Switch the field off.
    pub fn antenna_off(&mut self) -> Result<()> {
        self.write(Register::TxControl, TX_CONTROL_ANTENNA_OFF)
    }

    /// Command the driver last issued.
    pub fn state(&self) -> PcdState {
        self.state
    }

    /// Cached CRC enables.
    pub fn crc_state(&self) -> CrcState {
        self.crc
    }

    /// Write CommandReg, keeping the receiver on only for commands that listen.
    pub fn run_command(&mut self, cmd: Command) -> Result<()> {
        self.issue(cmd)
    }

    /// Stop the running command, clear all IRQ flags and load `data` into
    /// the FIFO. The FIFO is not flushed here.
    pub fn prepare_transmit(&mut self, data: &[u8]) -> Result<()> {
        self.issue(Command::Idle)?;
        self.write(Register::ComIrq, COM_IRQ_CLEAR_ALL)?;
        self.link.write_register_bulk(Register::FifoData, data)
    }

    /// Poll for RxIRq. On exhaustion the FIFO is flushed and the result is
    /// `NoReply`.
    pub fn wait_for_rx(&mut self) -> Result<()> {
        if self.poll_irq(COM_IRQ_RX)? {
            return Ok(());
        }
        self.write(Register::FifoLevel, FIFO_FLUSH)?;
        trace!("no reply within {} polls", self.config.irq_poll_attempts);
        Err(Error::NoReply)
    }

    /// Poll for TxIRq. On exhaustion the FIFO is flushed and the result is
    /// a `ReaderFault`.
    pub fn wait_for_tx(&mut self) -> Result<()> {
        if self.poll_irq(COM_IRQ_TX)? {
            // Transmit terminates on its own once the frame is out.
            if self.state == PcdState::Transmitting {
                self.state = PcdState::Idle;
            }
            return Ok(());
        }
        self.write(Register::FifoLevel, FIFO_FLUSH)?;
        Err(Error::ReaderFault(
            "timed out while waiting for datagram transmission".into(),
        ))
    }

    fn poll_irq(&mut self, mask: u8) -> Result<bool> {
        for attempt in 0..self.config.irq_poll_attempts {
            if attempt > 0 {
                pause(self.config.irq_poll_interval);
            }
            if self.read(Register::ComIrq)? & mask != 0 {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Drain the FIFO: FIFOLevelReg gives the byte count (0..=127).
    pub fn read_fifo(&mut self) -> Result<Vec<u8>> {
        let count = (self.read(Register::FifoLevel)? & FIFO_LEVEL_MASK) as usize;
        if count == 0 {
            return Ok(Vec::new());
        }
        self.link.read_register_bulk(Register::FifoData, count)
    }

    /// Enable or disable TX and RX CRC. Registers are only written when the
    /// requested value differs from the last written one.
    pub fn enable_crc(&mut self, tx: bool, rx: bool) -> Result<()> {
        self.enable_tx_crc(tx)?;
        self.enable_rx_crc(rx)
    }

    /// Memoized TX half of `enable_crc`.
    pub fn enable_tx_crc(&mut self, enable: bool) -> Result<()> {
        if self.crc.tx != Some(enable) {
            self.write(Register::TxMode, if enable { CRC_ENABLE } else { 0x00 })?;
            self.crc.tx = Some(enable);
        }
        Ok(())
    }

    /// Memoized RX half of `enable_crc`.
    pub fn enable_rx_crc(&mut self, enable: bool) -> Result<()> {
        if self.crc.rx != Some(enable) {
            self.write(Register::RxMode, if enable { CRC_ENABLE } else { 0x00 })?;
            self.crc.rx = Some(enable);
        }
        Ok(())
    }

    /// Silicon revision. Unknown IDs are logged and reported as `Unknown`.
    pub fn version(&mut self) -> Result<ChipVersion> {
        let id = self.read(Register::Version)?;
        match ChipVersion::from_version_reg(id) {
            Some(v) => Ok(v),
            None => {
                warn!("unknown reader version: {:#04x}", id);
                Ok(ChipVersion::Unknown)
            }
        }
    }
}
