// librc522/src/types.rs

use crate::Error;
use crate::constants::PICC_CASCADE_TAG;
use derive_more::{Display, From};
use std::convert::TryFrom;
use std::fmt;

/// UID - 4, 7 or 10 bytes depending on the number of cascade levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; 10],
    len: usize,
}

impl Uid {
    /// Single-size UID length.
    pub const SINGLE: usize = 4;
    /// Double-size UID length.
    pub const DOUBLE: usize = 7;
    /// Triple-size UID length.
    pub const TRIPLE: usize = 10;

    /// UID bytes without cascade tags.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of UID bytes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Never true for a constructed UID.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of cascade levels needed to select this UID.
    pub fn cascade_levels(&self) -> usize {
        match self.len {
            Self::SINGLE => 1,
            Self::DOUBLE => 2,
            _ => 3,
        }
    }

    /// The four UID bytes sent at each cascade level; every level but the
    /// last is prefixed with the cascade tag.
    pub fn level_fragments(&self) -> Vec<[u8; 4]> {
        let mut out = Vec::with_capacity(self.cascade_levels());
        let mut rest = self.as_bytes();
        while rest.len() > Self::SINGLE {
            out.push([PICC_CASCADE_TAG, rest[0], rest[1], rest[2]]);
            rest = &rest[3..];
        }
        out.push([rest[0], rest[1], rest[2], rest[3]]);
        out
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        match bytes.len() {
            Self::SINGLE | Self::DOUBLE | Self::TRIPLE => {
                let mut arr = [0u8; 10];
                arr[..bytes.len()].copy_from_slice(bytes);
                Ok(Self {
                    bytes: arr,
                    len: bytes.len(),
                })
            }
            other => Err(Error::InvalidLength {
                expected: if other < Self::DOUBLE {
                    Self::SINGLE
                } else if other < Self::TRIPLE {
                    Self::DOUBLE
                } else {
                    Self::TRIPLE
                },
                actual: other,
            }),
        }
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::utils::bytes_to_hex_spaced(self.as_bytes()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Uid {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// ATQA - answer to REQA/WUPA (2 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Atqa([u8; 2]);

impl Atqa {
    /// Build from whatever the chip delivered; short replies are
    /// zero-padded since only the presence of a reply matters.
    pub fn from_reply(reply: &[u8]) -> Self {
        let mut arr = [0u8; 2];
        for (dst, src) in arr.iter_mut().zip(reply) {
            *dst = *src;
        }
        Self(arr)
    }

    /// Raw ATQA, LSB first.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }
}

/// SAK - select acknowledge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, From, Display)]
#[display(fmt = "{:#04x}", _0)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Sak(u8);

impl Sak {
    /// Wrap a raw SAK byte.
    pub const fn new(value: u8) -> Self {
        Self(value)
    }

    /// Raw SAK byte.
    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// Cascade bit (0x04) set: the UID continues at the next level.
    pub fn uid_incomplete(&self) -> bool {
        self.0 & 0x04 != 0
    }
}

/// Reader silicon revision from VersionReg
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChipVersion {
    /// Any other VersionReg value.
    #[default]
    #[display(fmt = "unknown")]
    Unknown,
    /// VersionReg 0x91.
    #[display(fmt = "MFRC522 v1.0")]
    Mfrc522V1,
    /// VersionReg 0x92.
    #[display(fmt = "MFRC522 v2.0")]
    Mfrc522V2,
    /// VersionReg 0x88.
    #[display(fmt = "FM17522")]
    Fm17522,
}

impl ChipVersion {
    /// Map a VersionReg value to a known revision.
    pub fn from_version_reg(value: u8) -> Option<Self> {
        use crate::constants::{VERSION_FM17522, VERSION_MFRC522_V1, VERSION_MFRC522_V2};
        match value {
            VERSION_MFRC522_V1 => Some(ChipVersion::Mfrc522V1),
            VERSION_MFRC522_V2 => Some(ChipVersion::Mfrc522V2),
            VERSION_FM17522 => Some(ChipVersion::Fm17522),
            _ => None,
        }
    }
}

/// A tag discovered by a scan
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Tag {
    /// Answer to the REQA or WUPA.
    pub atqa: Atqa,
    /// Complete UID.
    pub uid: Uid,
    /// SAK of the last cascade level.
    pub sak: Sak,
}
