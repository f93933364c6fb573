// librc522/src/ultralight_c/session.rs

use crate::ultralight_c::crypto::{BLOCK_LEN, rotate_left};

/// Nonces of one authentication attempt. Wiped when dropped, whatever the
/// outcome of the handshake.
pub struct AuthSession {
    rnd_a: [u8; BLOCK_LEN],
    rnd_b: [u8; BLOCK_LEN],
}

impl AuthSession {
    /// Start a session with the reader nonce.
    pub fn new(rnd_a: [u8; BLOCK_LEN]) -> Self {
        Self {
            rnd_a,
            rnd_b: [0; BLOCK_LEN],
        }
    }

    /// Store the decrypted tag nonce.
    pub fn set_rnd_b(&mut self, rnd_b: [u8; BLOCK_LEN]) {
        self.rnd_b = rnd_b;
    }

    /// Reader nonce.
    pub fn rnd_a(&self) -> &[u8; BLOCK_LEN] {
        &self.rnd_a
    }

    /// Tag nonce.
    pub fn rnd_b(&self) -> &[u8; BLOCK_LEN] {
        &self.rnd_b
    }

    /// RndA' expected back from the tag.
    pub fn rotated_a(&self) -> [u8; BLOCK_LEN] {
        rotate_left(&self.rnd_a)
    }

    /// RndB' sent to the tag.
    pub fn rotated_b(&self) -> [u8; BLOCK_LEN] {
        rotate_left(&self.rnd_b)
    }

    /// rndA || rndB', the 16-byte reader response before encryption.
    pub fn reader_response(&self) -> [u8; 2 * BLOCK_LEN] {
        let mut out = [0u8; 2 * BLOCK_LEN];
        out[..BLOCK_LEN].copy_from_slice(&self.rnd_a);
        out[BLOCK_LEN..].copy_from_slice(&self.rotated_b());
        out
    }

    fn wipe(&mut self) {
        self.rnd_a.fill(0);
        self.rnd_b.fill(0);
    }
}

impl Drop for AuthSession {
    fn drop(&mut self) {
        self.wipe();
    }
}
