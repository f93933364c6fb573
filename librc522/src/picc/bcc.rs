// librc522/src/picc/bcc.rs

use crate::{Error, Result};

/// Block check character: XOR over the UID bytes of one cascade level.
pub fn bcc(fragment: &[u8]) -> u8 {
    fragment.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// Verify the BCC a tag reported for a 4-byte UID fragment.
pub fn check_bcc(fragment: &[u8], expected: u8) -> Result<()> {
    let calculated = bcc(fragment);
    if calculated != expected {
        return Err(Error::InvalidBcc {
            expected,
            calculated,
        });
    }
    Ok(())
}
