// librc522/src/chip/register.rs

use crate::{Error, Result};
use std::convert::TryFrom;
use std::fmt;

/// Chip register addresses (page 0..3, 0x00..=0x3F)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum Register {
    /// Starts and stops command execution
    Command = 0x01,
    /// Interrupt request enables
    ComIEn = 0x02,
    /// Interrupt request enables (CRC, MFIN)
    DivIEn = 0x03,
    /// Interrupt request bits
    ComIrq = 0x04,
    /// Interrupt request bits (CRC, MFIN)
    DivIrq = 0x05,
    /// Error bits of the last command
    Error = 0x06,
    /// Communication status
    Status1 = 0x07,
    /// Receiver and transmitter status
    Status2 = 0x08,
    /// FIFO input and output
    FifoData = 0x09,
    /// Bytes stored in the FIFO
    FifoLevel = 0x0A,
    /// FIFO under/overflow warning level
    WaterLevel = 0x0B,
    /// Miscellaneous control bits
    Control = 0x0C,
    /// Bit-oriented frame adjustments
    BitFraming = 0x0D,
    /// First bit collision detected
    Coll = 0x0E,
    /// Transmit and receive modes
    Mode = 0x11,
    /// Transmission data rate and framing
    TxMode = 0x12,
    /// Reception data rate and framing
    RxMode = 0x13,
    /// Antenna driver pins TX1 and TX2
    TxControl = 0x14,
    /// Transmit modulation
    TxAsk = 0x15,
    /// Analog part source selection
    TxSel = 0x16,
    /// Receiver settings
    RxSel = 0x17,
    /// Bit decoder thresholds
    RxThreshold = 0x18,
    /// Demodulator settings
    Demod = 0x19,
    /// MIFARE transmit parameters
    MfTx = 0x1C,
    /// MIFARE receive parameters
    MfRx = 0x1D,
    /// UART speed
    SerialSpeed = 0x1F,
    /// CRC result, MSB
    CrcResultHigh = 0x21,
    /// CRC result, LSB
    CrcResultLow = 0x22,
    /// Modulation width
    ModWidth = 0x24,
    /// Receiver gain
    RfCfg = 0x26,
    /// N-driver conductance
    GsN = 0x27,
    /// P-driver conductance
    CwGsP = 0x28,
    /// P-driver conductance during modulation
    ModGsP = 0x29,
    /// Timer settings
    TMode = 0x2A,
    /// Timer prescaler
    TPrescaler = 0x2B,
    /// Timer reload value, high byte
    TReloadHigh = 0x2C,
    /// Timer reload value, low byte
    TReloadLow = 0x2D,
    /// Test signal configuration
    TestSel1 = 0x31,
    /// Test signal configuration and PRBS
    TestSel2 = 0x32,
    /// Test pin output driver enable
    TestPinEn = 0x33,
    /// Test pin values
    TestPinValue = 0x34,
    /// Internal test bus
    TestBus = 0x35,
    /// Digital self-test
    AutoTest = 0x36,
    /// Silicon version
    Version = 0x37,
    /// AUX1 and AUX2 pins
    AnalogTest = 0x38,
    /// TestDAC1 value
    TestDac1 = 0x39,
    /// TestDAC2 value
    TestDac2 = 0x3A,
    /// ADC I and Q values
    TestAdc = 0x3B,
}

impl Register {
    /// Every register, in address order.
    pub const ALL: [Register; 48] = [
        Register::Command,
        Register::ComIEn,
        Register::DivIEn,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::Status1,
        Register::Status2,
        Register::FifoData,
        Register::FifoLevel,
        Register::WaterLevel,
        Register::Control,
        Register::BitFraming,
        Register::Coll,
        Register::Mode,
        Register::TxMode,
        Register::RxMode,
        Register::TxControl,
        Register::TxAsk,
        Register::TxSel,
        Register::RxSel,
        Register::RxThreshold,
        Register::Demod,
        Register::MfTx,
        Register::MfRx,
        Register::SerialSpeed,
        Register::CrcResultHigh,
        Register::CrcResultLow,
        Register::ModWidth,
        Register::RfCfg,
        Register::GsN,
        Register::CwGsP,
        Register::ModGsP,
        Register::TMode,
        Register::TPrescaler,
        Register::TReloadHigh,
        Register::TReloadLow,
        Register::TestSel1,
        Register::TestSel2,
        Register::TestPinEn,
        Register::TestPinValue,
        Register::TestBus,
        Register::AutoTest,
        Register::Version,
        Register::AnalogTest,
        Register::TestDac1,
        Register::TestDac2,
        Register::TestAdc,
    ];

    /// Raw 6-bit register address.
    pub const fn address(self) -> u8 {
        self as u8
    }

    /// Datasheet name of the register, used in trace output.
    pub fn name(self) -> &'static str {
        match self {
            Register::Command => "CommandReg",
            Register::ComIEn => "ComIEnReg",
            Register::DivIEn => "DivIEnReg",
            Register::ComIrq => "ComIrqReg",
            Register::DivIrq => "DivIrqReg",
            Register::Error => "ErrorReg",
            Register::Status1 => "Status1Reg",
            Register::Status2 => "Status2Reg",
            Register::FifoData => "FIFODataReg",
            Register::FifoLevel => "FIFOLevelReg",
            Register::WaterLevel => "WaterLevelReg",
            Register::Control => "ControlReg",
            Register::BitFraming => "BitFramingReg",
            Register::Coll => "CollReg",
            Register::Mode => "ModeReg",
            Register::TxMode => "TxModeReg",
            Register::RxMode => "RxModeReg",
            Register::TxControl => "TxControlReg",
            Register::TxAsk => "TxASKReg",
            Register::TxSel => "TxSelReg",
            Register::RxSel => "RxSelReg",
            Register::RxThreshold => "RxThresholdReg",
            Register::Demod => "DemodReg",
            Register::MfTx => "MfTxReg",
            Register::MfRx => "MfRxReg",
            Register::SerialSpeed => "SerialSpeedReg",
            Register::CrcResultHigh => "CRCResultRegH",
            Register::CrcResultLow => "CRCResultRegL",
            Register::ModWidth => "ModWidthReg",
            Register::RfCfg => "RFCfgReg",
            Register::GsN => "GsNReg",
            Register::CwGsP => "CWGsPReg",
            Register::ModGsP => "ModGsPReg",
            Register::TMode => "TModeReg",
            Register::TPrescaler => "TPrescalerReg",
            Register::TReloadHigh => "TReloadRegH",
            Register::TReloadLow => "TReloadRegL",
            Register::TestSel1 => "TestSel1Reg",
            Register::TestSel2 => "TestSel2Reg",
            Register::TestPinEn => "TestPinEnReg",
            Register::TestPinValue => "TestPinValueReg",
            Register::TestBus => "TestBusReg",
            Register::AutoTest => "AutoTestReg",
            Register::Version => "VersionReg",
            Register::AnalogTest => "AnalogTestReg",
            Register::TestDac1 => "TestDAC1Reg",
            Register::TestDac2 => "TestDAC2Reg",
            Register::TestAdc => "TestADCReg",
        }
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Register {
    type Error = Error;

    fn try_from(address: u8) -> Result<Self> {
        Register::ALL
            .iter()
            .copied()
            .find(|r| r.address() == address)
            .ok_or_else(|| Error::Transport(format!("unknown register address {:#04x}", address)))
    }
}
