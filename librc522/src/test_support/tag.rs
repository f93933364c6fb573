// librc522/src/test_support/tag.rs

use std::convert::TryFrom;

use crate::Result;
use crate::constants::{PICC_HLTA, PICC_NVB_SELECT, PICC_REQA, PICC_WUPA, SHORT_FRAME_BITS};
use crate::picc::{CascadeLevel, UID_LEVEL_BITS, bcc};
use crate::test_support::card::UltralightCCard;
use crate::types::Uid;

/// SAK sent while the UID continues at the next level.
const SAK_CASCADE: u8 = 0x04;

/// ISO14443-A tag state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TagState {
    /// Powered, waiting for REQA or WUPA.
    Idle,
    /// Answering anticollision at the given level.
    Ready(CascadeLevel),
    /// Selected.
    Active,
    /// Halted; only WUPA wakes it.
    Halt,
}

/// A frame as it reaches the tag.
#[derive(Debug, Clone, Copy)]
pub struct AirFrame<'a> {
    /// Bytes in the FIFO when the frame was sent.
    pub bytes: &'a [u8],
    /// Number of valid bits sent.
    pub bits: usize,
    /// Whether the reader appended a CRC_A.
    pub crc: bool,
}

/// What a tag puts on the air.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TagReply {
    /// Whole bytes without CRC (ATQA).
    Short(Vec<u8>),
    /// Remaining UID bits of an anticollision frame, LSB first.
    Bits(Vec<bool>),
    /// Whole bytes followed by a CRC_A.
    Framed(Vec<u8>),
}

/// A tag in the field of a [`SimulatedChip`](super::SimulatedChip).
#[derive(Debug, Clone)]
pub struct SimulatedTag {
    uid: Uid,
    sak: u8,
    bcc_override: Option<u8>,
    state: TagState,
    card: Option<UltralightCCard>,
}

impl SimulatedTag {
    /// Tag with a 4, 7 or 10 byte UID.
    pub fn new(uid: &[u8], sak: u8) -> Result<Self> {
        Ok(Self {
            uid: Uid::try_from(uid)?,
            sak,
            bcc_override: None,
            state: TagState::Idle,
            card: None,
        })
    }

    /// Report `bcc` instead of the real check byte during anticollision.
    pub fn with_bcc(mut self, bcc: u8) -> Self {
        self.bcc_override = Some(bcc);
        self
    }

    /// Answer AUTHENTICATE with `card` once selected.
    pub fn with_ultralight_c(mut self, card: UltralightCCard) -> Self {
        self.card = Some(card);
        self
    }

    /// Tag UID.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Current ISO14443-A state.
    pub fn state(&self) -> TagState {
        self.state
    }

    /// Attached Ultralight-C card.
    pub fn card(&self) -> Option<&UltralightCCard> {
        self.card.as_ref()
    }

    /// ATQA for the UID size.
    pub fn atqa(&self) -> [u8; 2] {
        match self.uid.len() {
            Uid::SINGLE => [0x04, 0x00],
            Uid::DOUBLE => [0x44, 0x00],
            _ => [0x84, 0x00],
        }
    }

    /// UID fragment and BCC of one level, as sent during anticollision.
    fn level_field(&self, level: CascadeLevel) -> Option<[u8; 5]> {
        let fragments = self.uid.level_fragments();
        let f = fragments.get(level.number() as usize - 1)?;
        let check = self.bcc_override.unwrap_or_else(|| bcc(f));
        Some([f[0], f[1], f[2], f[3], check])
    }

    /// React to one frame; `None` means silence.
    pub fn respond(&mut self, frame: &AirFrame<'_>) -> Option<TagReply> {
        if frame.bits == SHORT_FRAME_BITS && !frame.crc {
            let code = *frame.bytes.first()? & 0x7F;
            return match (code, self.state) {
                (PICC_WUPA, _)
                | (PICC_REQA, TagState::Idle | TagState::Ready(_) | TagState::Active) => {
                    self.state = TagState::Ready(CascadeLevel::One);
                    Some(TagReply::Short(self.atqa().to_vec()))
                }
                _ => None,
            };
        }

        match self.state {
            TagState::Ready(level) => self.anticollision(level, frame),
            TagState::Active => self.active(frame),
            TagState::Idle | TagState::Halt => None,
        }
    }

    fn anticollision(&mut self, level: CascadeLevel, frame: &AirFrame<'_>) -> Option<TagReply> {
        let bytes = frame.bytes;
        if bytes.len() < 2 || CascadeLevel::from_select_code(bytes[0]) != Some(level) {
            return None;
        }
        let field = self.level_field(level)?;

        if bytes[1] == PICC_NVB_SELECT {
            if !frame.crc || bytes.len() != 7 {
                return None;
            }
            if bytes[2..6] != field[..4] {
                self.state = TagState::Idle;
                return None;
            }
            let sak = match level.next() {
                Some(next) if self.uid.cascade_levels() > level.number() as usize => {
                    self.state = TagState::Ready(next);
                    SAK_CASCADE
                }
                _ => {
                    self.state = TagState::Active;
                    self.sak
                }
            };
            return Some(TagReply::Framed(vec![sak]));
        }

        if frame.crc {
            return None;
        }
        let known = frame.bits.checked_sub(16)?;
        if known > UID_LEVEL_BITS {
            return None;
        }
        for j in 0..known {
            let sent = *bytes.get(2 + j / 8)? >> (j % 8) & 1;
            let own = field[j / 8] >> (j % 8) & 1;
            if sent != own {
                return None;
            }
        }
        let rest = (known..UID_LEVEL_BITS)
            .map(|j| field[j / 8] >> (j % 8) & 1 == 1)
            .collect();
        Some(TagReply::Bits(rest))
    }

    fn active(&mut self, frame: &AirFrame<'_>) -> Option<TagReply> {
        if !frame.crc {
            return None;
        }
        match frame.bytes {
            [PICC_HLTA, 0x00] => {
                self.state = TagState::Halt;
                None
            }
            request => self.card.as_mut()?.handle(request).map(TagReply::Framed),
        }
    }
}
