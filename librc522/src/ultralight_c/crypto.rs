// librc522/src/ultralight_c/crypto.rs

//! Two-key triple DES in CBC mode, as used by the Ultralight-C handshake.

use cbc::cipher::generic_array::GenericArray;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use des::TdesEde2;

use crate::{Error, Result};

/// DES block size in bytes.
pub const BLOCK_LEN: usize = 8;
/// 2-key 3DES key length (K1 || K2).
pub const KEY_LEN: usize = 16;

type Encryptor = cbc::Encryptor<TdesEde2>;
type Decryptor = cbc::Decryptor<TdesEde2>;

fn check_blocks(data: &[u8]) -> Result<()> {
    if data.is_empty() || data.len() % BLOCK_LEN != 0 {
        return Err(Error::InvalidLength {
            expected: data.len().div_ceil(BLOCK_LEN).max(1) * BLOCK_LEN,
            actual: data.len(),
        });
    }
    Ok(())
}

fn cipher_init(err: impl std::fmt::Display) -> Error {
    Error::AuthProtocol(format!("cipher init: {}", err))
}

/// CBC-encrypt whole blocks.
pub fn tdes_cbc_encrypt(key: &[u8; KEY_LEN], iv: &[u8; BLOCK_LEN], data: &[u8]) -> Result<Vec<u8>> {
    check_blocks(data)?;
    let mut cipher = Encryptor::new_from_slices(key, iv).map_err(cipher_init)?;
    let mut out = data.to_vec();
    for block in out.chunks_exact_mut(BLOCK_LEN) {
        cipher.encrypt_block_mut(GenericArray::from_mut_slice(block));
    }
    Ok(out)
}

/// CBC-decrypt whole blocks.
pub fn tdes_cbc_decrypt(key: &[u8; KEY_LEN], iv: &[u8; BLOCK_LEN], data: &[u8]) -> Result<Vec<u8>> {
    check_blocks(data)?;
    let mut cipher = Decryptor::new_from_slices(key, iv).map_err(cipher_init)?;
    let mut out = data.to_vec();
    for block in out.chunks_exact_mut(BLOCK_LEN) {
        cipher.decrypt_block_mut(GenericArray::from_mut_slice(block));
    }
    Ok(out)
}

/// Move the first byte to the end.
pub fn rotate_left(block: &[u8; BLOCK_LEN]) -> [u8; BLOCK_LEN] {
    let mut out = *block;
    out.rotate_left(1);
    out
}

/// Copy an 8-byte slice into a block.
pub fn to_block(data: &[u8]) -> Result<[u8; BLOCK_LEN]> {
    <[u8; BLOCK_LEN]>::try_from(data).map_err(|_| Error::InvalidLength {
        expected: BLOCK_LEN,
        actual: data.len(),
    })
}
