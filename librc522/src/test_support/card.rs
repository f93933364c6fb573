// librc522/src/test_support/card.rs

use crate::constants::{ULC_AUTH_CONTINUE, ULC_AUTH_OK, ULC_AUTHENTICATE};
use crate::ultralight_c::crypto::{
    BLOCK_LEN, KEY_LEN, rotate_left, tdes_cbc_decrypt, tdes_cbc_encrypt, to_block,
};

/// Tag side of the Ultralight-C handshake with a fixed RndB.
#[derive(Debug, Clone)]
pub struct UltralightCCard {
    key: [u8; KEY_LEN],
    rnd_b: [u8; BLOCK_LEN],
    ek_rnd_b: Option<[u8; BLOCK_LEN]>,
    last_rnd_a: Option<[u8; BLOCK_LEN]>,
    corrupt_index: Option<usize>,
}

impl UltralightCCard {
    /// Card with `key` that always challenges with `rnd_b`.
    pub fn new(key: [u8; KEY_LEN], rnd_b: [u8; BLOCK_LEN]) -> Self {
        Self {
            key,
            rnd_b,
            ek_rnd_b: None,
            last_rnd_a: None,
            corrupt_index: None,
        }
    }

    /// Flip one bit of byte `index` in the final (status + ek(RndA')) reply.
    pub fn corrupt_final_byte(mut self, index: usize) -> Self {
        self.corrupt_index = Some(index);
        self
    }

    /// RndA recovered from the last successful second step.
    pub fn last_rnd_a(&self) -> Option<[u8; BLOCK_LEN]> {
        self.last_rnd_a
    }

    /// Answer one frame (CRC already stripped). `None` means the tag stays
    /// silent, which is also how it reacts to a wrong RndB'.
    pub fn handle(&mut self, request: &[u8]) -> Option<Vec<u8>> {
        match request {
            [ULC_AUTHENTICATE, 0x00] => {
                let ek = to_block(&tdes_cbc_encrypt(&self.key, &[0; BLOCK_LEN], &self.rnd_b).ok()?)
                    .ok()?;
                self.ek_rnd_b = Some(ek);
                let mut reply = vec![ULC_AUTH_CONTINUE];
                reply.extend_from_slice(&ek);
                Some(reply)
            }
            [ULC_AUTH_CONTINUE, rest @ ..] if rest.len() == 2 * BLOCK_LEN => {
                let iv = self.ek_rnd_b.take()?;
                let plain = tdes_cbc_decrypt(&self.key, &iv, rest).ok()?;
                if plain[BLOCK_LEN..] != rotate_left(&self.rnd_b)[..] {
                    return None;
                }
                let rnd_a = to_block(&plain[..BLOCK_LEN]).ok()?;
                self.last_rnd_a = Some(rnd_a);

                let iv = to_block(&rest[BLOCK_LEN..]).ok()?;
                let ek_rnd_a = tdes_cbc_encrypt(&self.key, &iv, &rotate_left(&rnd_a)).ok()?;
                let mut reply = vec![ULC_AUTH_OK];
                reply.extend_from_slice(&ek_rnd_a);
                if let Some(byte) = self.corrupt_index.and_then(|i| reply.get_mut(i)) {
                    *byte ^= 0x01;
                }
                Some(reply)
            }
            _ => None,
        }
    }
}
