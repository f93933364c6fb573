// librc522/src/picc/mod.rs

//! ISO14443-A tag discovery: REQA/WUPA, cascade-level anticollision,
//! SELECT and HALT.

/// REQA, anticollision, SELECT and HLTA.
pub mod anticollision;
/// UID check byte.
pub mod bcc;

pub use anticollision::{UID_LEVEL_BITS, nvb};
pub use bcc::{bcc, check_bcc};

/// One of the three cascade levels a UID can span.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CascadeLevel {
    /// SEL 0x93
    One,
    /// SEL 0x95
    Two,
    /// SEL 0x97
    Three,
}

impl CascadeLevel {
    /// All levels, outermost first.
    pub const ALL: [CascadeLevel; 3] = [CascadeLevel::One, CascadeLevel::Two, CascadeLevel::Three];

    /// 1-based level number.
    pub fn number(self) -> u8 {
        match self {
            CascadeLevel::One => 1,
            CascadeLevel::Two => 2,
            CascadeLevel::Three => 3,
        }
    }

    /// SEL byte of the ANTICOLLISION/SELECT command: 0x93, 0x95 or 0x97.
    pub fn select_code(self) -> u8 {
        0x91 + self.number() * 2
    }

    /// Level addressed by a SEL byte.
    pub fn from_select_code(code: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.select_code() == code)
    }

    /// Level that follows this one, if any.
    pub fn next(self) -> Option<Self> {
        match self {
            CascadeLevel::One => Some(CascadeLevel::Two),
            CascadeLevel::Two => Some(CascadeLevel::Three),
            CascadeLevel::Three => None,
        }
    }
}
