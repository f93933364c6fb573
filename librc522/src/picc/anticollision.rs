// librc522/src/picc/anticollision.rs

use std::convert::TryFrom;

use log::{debug, trace};

use crate::constants::{
    PICC_CASCADE_TAG, PICC_HLTA, PICC_NVB_SELECT, PICC_REQA, PICC_WUPA, SHORT_FRAME_BITS,
};
use crate::picc::CascadeLevel;
use crate::picc::bcc::{bcc, check_bcc};
use crate::reader::{Initialized, Reader};
use crate::transport::RegisterLink;
use crate::types::{Atqa, Sak, Tag, Uid};
use crate::{Error, Result};

/// UID fragment plus BCC resolved at each cascade level.
pub const UID_LEVEL_BITS: usize = 40;

/// Bits of SEL and NVB that precede the UID in every anticollision frame.
const HEADER_BITS: usize = 16;

/// NVB byte for `known_bits` already-resolved UID bits: the upper nibble
/// counts whole bytes (SEL and NVB included), the lower one extra bits.
pub fn nvb(known_bits: usize) -> u8 {
    (((2 + known_bits / 8) << 4) | (known_bits % 8)) as u8
}

impl<L: RegisterLink> Reader<L, Initialized> {
    /// Send the 7-bit REQA (or WUPA with `wakeup`) short frame with CRC
    /// off. `NoReply` means no tag is in the field.
    pub fn request(&mut self, wakeup: bool) -> Result<Atqa> {
        self.enable_crc(false, false)?;
        let code = if wakeup { PICC_WUPA } else { PICC_REQA };
        let frame = self.transceive_bits(&[code], Some(SHORT_FRAME_BITS), 0)?;
        let atqa = Atqa::from_reply(&frame.data);
        debug!("ATQA {:02x?}", atqa.as_bytes());
        Ok(atqa)
    }

    /// Discover one tag and return its complete UID (4, 7 or 10 bytes).
    pub fn scan(&mut self, wakeup: bool) -> Result<Uid> {
        Ok(self.scan_tag(wakeup)?.uid)
    }

    /// Discover and select one tag, keeping its ATQA and final SAK.
    pub fn scan_tag(&mut self, wakeup: bool) -> Result<Tag> {
        let atqa = self.request(wakeup)?;
        let mut uid = Vec::with_capacity(Uid::TRIPLE);

        for level in [CascadeLevel::One, CascadeLevel::Two] {
            let (fragment, sak) = self.resolve_level(level)?;
            if fragment[0] != PICC_CASCADE_TAG {
                uid.extend_from_slice(&fragment);
                return finish(atqa, &uid, sak);
            }
            uid.extend_from_slice(&fragment[1..]);
        }

        // The last level ends the UID whatever its first byte is.
        let (fragment, sak) = self.resolve_level(CascadeLevel::Three)?;
        uid.extend_from_slice(&fragment);
        finish(atqa, &uid, sak)
    }

    /// Run the bit-level collision walk for one cascade level, check the
    /// BCC and select the level. Returns the four UID bytes of the level
    /// (cascade tag included) and the SAK.
    pub fn resolve_level(&mut self, level: CascadeLevel) -> Result<([u8; 4], Sak)> {
        self.enable_crc(false, false)?;

        let mut cmd = [level.select_code(), 0, 0, 0, 0, 0, 0];
        let mut known = 0usize;

        while known < UID_LEVEL_BITS {
            let align = known % 8;
            let first = known / 8;
            cmd[1] = nvb(known);

            let frame = self.transceive_bits(&cmd, Some(HEADER_BITS + known), align as u8)?;
            let mut recv = frame.data;

            let next = match frame.collision {
                Some(pos) => {
                    // Received bits start at bit `align` of recv[0].
                    let bit = align + pos;
                    let byte = bit / 8;
                    if recv.len() <= byte {
                        return Err(Error::InvalidLength {
                            expected: byte + 1,
                            actual: recv.len(),
                        });
                    }
                    recv.truncate(byte + 1);
                    let flag = 1u8 << (bit % 8);
                    recv[byte] = (recv[byte] & (flag - 1)) | flag;
                    debug!(
                        "cascade level {}: collision at bit {}",
                        level.number(),
                        known + pos
                    );
                    (known + pos + 1).min(UID_LEVEL_BITS)
                }
                None => {
                    let needed = UID_LEVEL_BITS / 8 - first;
                    if recv.len() < needed {
                        return Err(Error::InvalidLength {
                            expected: needed,
                            actual: recv.len(),
                        });
                    }
                    recv.truncate(needed);
                    UID_LEVEL_BITS
                }
            };

            if let Some(head) = recv.first_mut() {
                *head &= 0xFFu8 << align;
            }
            for (dst, src) in cmd[2 + first..].iter_mut().zip(&recv) {
                *dst |= *src;
            }
            trace!("cascade level {}: {} bits known", level.number(), next);
            known = next;
        }

        let fragment = [cmd[2], cmd[3], cmd[4], cmd[5]];
        check_bcc(&fragment, cmd[6])?;

        let sak = self.select_level(level, &fragment)?;
        Ok((fragment, sak))
    }

    /// SELECT one cascade level with a known fragment (NVB 0x70, CRC on).
    pub fn select_level(&mut self, level: CascadeLevel, fragment: &[u8; 4]) -> Result<Sak> {
        let cmd = [
            level.select_code(),
            PICC_NVB_SELECT,
            fragment[0],
            fragment[1],
            fragment[2],
            fragment[3],
            bcc(fragment),
        ];
        let reply = self.transceive(&cmd)?;
        let sak = reply.first().copied().map(Sak::new).ok_or(Error::InvalidLength {
            expected: 1,
            actual: 0,
        })?;
        debug!("cascade level {}: SAK {}", level.number(), sak);
        Ok(sak)
    }

    /// Re-address a known tag without the collision walk. Starts with a
    /// REQA, so a halted tag does not answer.
    pub fn select(&mut self, uid: &Uid) -> Result<Sak> {
        self.request(false)?;

        let mut sak = Sak::default();
        for (level, fragment) in CascadeLevel::ALL.into_iter().zip(uid.level_fragments()) {
            sak = self.select_level(level, &fragment)?;
        }
        Ok(sak)
    }

    /// Put the selected tag into HALT. The tag sends no answer.
    pub fn halt(&mut self) -> Result<()> {
        self.send(&[PICC_HLTA, 0x00])
    }
}

fn finish(atqa: Atqa, uid: &[u8], sak: Sak) -> Result<Tag> {
    let uid = Uid::try_from(uid)?;
    debug!("tag {} selected, SAK {}", uid, sak);
    Ok(Tag { atqa, uid, sak })
}
