// librc522/src/ultralight_c/mod.rs

//! Ultralight-C mutual authentication (2-key 3DES, CBC).
//!
//! The exchange runs over any [`Pcd`], normally the reader after the tag
//! has been selected:
//!
//! ```text
//! PCD -> 1A 00                     tag -> AF ek(RndB)
//! PCD -> AF ek(RndA || RndB')      tag -> 00 ek(RndA')
//! ```

pub mod crypto;
/// Nonce bookkeeping for one handshake.
pub mod session;

use log::debug;

use crate::constants::{ULC_AUTH_CONTINUE, ULC_AUTH_OK, ULC_AUTHENTICATE};
use crate::reader::{Initialized, Pcd, Reader};
use crate::transport::RegisterLink;
use crate::{Error, Result};

use self::crypto::{BLOCK_LEN, KEY_LEN, tdes_cbc_decrypt, tdes_cbc_encrypt, to_block};
pub use self::session::AuthSession;

/// Length of both tag replies: status byte plus one cipher block.
pub const AUTH_REPLY_LEN: usize = 1 + BLOCK_LEN;

/// Handle to a selected Ultralight-C tag.
pub struct UltralightC<'a, P: Pcd + ?Sized> {
    pcd: &'a mut P,
    authenticated: bool,
}

impl<'a, P: Pcd + ?Sized> UltralightC<'a, P> {
    /// Address the tag currently selected on `pcd`.
    pub fn new(pcd: &'a mut P) -> Self {
        Self {
            pcd,
            authenticated: false,
        }
    }

    /// True after the last `authenticate` call succeeded.
    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Run the handshake with a fresh random RndA.
    pub fn authenticate(&mut self, key: &[u8; KEY_LEN]) -> Result<()> {
        let mut rnd_a = [0u8; BLOCK_LEN];
        getrandom::getrandom(&mut rnd_a).map_err(|e| Error::Random(e.to_string()))?;
        let result = self.authenticate_with_nonce(key, rnd_a);
        rnd_a.fill(0);
        result
    }

    /// Run the handshake with a caller-chosen RndA.
    pub fn authenticate_with_nonce(
        &mut self,
        key: &[u8; KEY_LEN],
        rnd_a: [u8; BLOCK_LEN],
    ) -> Result<()> {
        self.authenticated = false;
        let mut session = AuthSession::new(rnd_a);

        let reply = self.pcd.transceive(&[ULC_AUTHENTICATE, 0x00])?;
        let ek_rnd_b = expect_reply(&reply, ULC_AUTH_CONTINUE, "AUTHENTICATE")?;
        debug!("ultralight-c: challenge received");

        let rnd_b = tdes_cbc_decrypt(key, &[0; BLOCK_LEN], &ek_rnd_b)?;
        session.set_rnd_b(to_block(&rnd_b)?);

        // Chained onto the tag's ciphertext, not a fresh IV.
        let response = tdes_cbc_encrypt(key, &ek_rnd_b, &session.reader_response())?;

        let mut request = Vec::with_capacity(1 + response.len());
        request.push(ULC_AUTH_CONTINUE);
        request.extend_from_slice(&response);

        let reply = self.pcd.transceive(&request)?;
        let ek_rnd_a = expect_reply(&reply, ULC_AUTH_OK, "AUTHENTICATE part 2")?;

        let iv = to_block(&response[response.len() - BLOCK_LEN..])?;
        let rnd_a_rotated = tdes_cbc_decrypt(key, &iv, &ek_rnd_a)?;
        if rnd_a_rotated[..] != session.rotated_a()[..] {
            debug!("ultralight-c: tag failed to prove the key");
            return Err(Error::AuthenticationFailed);
        }

        debug!("ultralight-c: authenticated");
        self.authenticated = true;
        Ok(())
    }
}

/// Check status byte and length of a tag reply and return its block.
fn expect_reply(reply: &[u8], status: u8, step: &str) -> Result<[u8; BLOCK_LEN]> {
    if reply.len() != AUTH_REPLY_LEN {
        return Err(Error::AuthProtocol(format!(
            "{}: expected {} byte reply, got {}",
            step,
            AUTH_REPLY_LEN,
            reply.len()
        )));
    }
    if reply[0] != status {
        return Err(Error::AuthProtocol(format!(
            "{}: expected status {:#04x}, got {:#04x}",
            step, status, reply[0]
        )));
    }
    to_block(&reply[1..])
}

impl<L: RegisterLink> Reader<L, Initialized> {
    /// Talk to the selected tag as an Ultralight-C.
    pub fn ultralight_c(&mut self) -> UltralightC<'_, Self> {
        UltralightC::new(self)
    }
}
