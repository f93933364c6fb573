// librc522/src/constants.rs
//! Register bit values and ISO14443-A command bytes used across the crate

/// ComIrqReg: RxIRq, set when the receiver detected the end of a valid stream
pub const COM_IRQ_RX: u8 = 0x20;
/// ComIrqReg: TxIRq, set immediately after the last bit was sent
pub const COM_IRQ_TX: u8 = 0x40;
/// ComIrqReg write value that clears every IRQ bit (Set1 = 0)
pub const COM_IRQ_CLEAR_ALL: u8 = 0x7F;

/// FIFOLevelReg: FlushBuffer
pub const FIFO_FLUSH: u8 = 0x80;
/// FIFOLevelReg: number of stored bytes
pub const FIFO_LEVEL_MASK: u8 = 0x7F;

/// BitFramingReg: StartSend
pub const BIT_FRAMING_START_SEND: u8 = 0x80;

/// CollReg: CollPosNotValid, no collision detected
pub const COLL_POS_NOT_VALID: u8 = 0x20;
/// CollReg: CollPos field
pub const COLL_POS_MASK: u8 = 0x1F;
/// CollReg: ValuesAfterColl
pub const COLL_VALUES_AFTER_COLL: u8 = 0x80;

/// TxModeReg/RxModeReg: TxCRCEn/RxCRCEn
pub const CRC_ENABLE: u8 = 0x80;

/// CommandReg: PowerDown
pub const COMMAND_POWER_DOWN: u8 = 0x10;
/// CommandReg: RcvOff, shift for the analog receiver switch
pub const COMMAND_RCV_OFF_SHIFT: u8 = 5;

/// TxControlReg with Tx1RFEn and Tx2RFEn set
pub const TX_CONTROL_ANTENNA_ON: u8 = 0x83;
/// TxControlReg with both drivers off
pub const TX_CONTROL_ANTENNA_OFF: u8 = 0x80;
/// TxASKReg: Force100ASK
pub const TX_ASK_FORCE_100: u8 = 0x40;
/// ModeReg: TxWaitRF, CRC preset 0x6363
pub const MODE_CRC_PRESET_6363: u8 = 0x3D;

/// VersionReg values of known silicon
pub const VERSION_MFRC522_V1: u8 = 0x91;
/// MFRC522 v2.0
pub const VERSION_MFRC522_V2: u8 = 0x92;
/// FM17522 clone
pub const VERSION_FM17522: u8 = 0x88;

/// ISO14443-A short frames (7 bits)
pub const PICC_REQA: u8 = 0x26;
/// Wake-up, also answered by halted tags
pub const PICC_WUPA: u8 = 0x52;
/// Bits in a short frame
pub const SHORT_FRAME_BITS: usize = 7;

/// HLTA command byte, followed by 0x00
pub const PICC_HLTA: u8 = 0x50;

/// Cascade tag marker in the first UID byte of a cascade level
pub const PICC_CASCADE_TAG: u8 = 0x88;
/// NVB for a complete SELECT (7 valid bytes)
pub const PICC_NVB_SELECT: u8 = 0x70;

/// Ultralight-C AUTHENTICATE (part 1) and the additional-frame marker
pub const ULC_AUTHENTICATE: u8 = 0x1A;
/// Additional frame follows
pub const ULC_AUTH_CONTINUE: u8 = 0xAF;
/// Authentication step accepted
pub const ULC_AUTH_OK: u8 = 0x00;
