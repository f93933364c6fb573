// fixtures.rs: UIDs, keys and nonces shared by the integration tests

use librc522::test_support::{SimulatedTag, UltralightCCard};

/// Single-size UID used throughout the examples.
pub const UID_SINGLE: [u8; 4] = [0x04, 0x5A, 0xF6, 0x62];
/// Differs from UID_SINGLE in bit 3 of the second byte.
pub const UID_SINGLE_NEIGHBOUR: [u8; 4] = [0x04, 0x52, 0xF6, 0x62];
/// Differs from UID_SINGLE only in the last bit of the fourth byte.
pub const UID_SINGLE_LAST_BIT: [u8; 4] = [0x04, 0x5A, 0xF6, 0xE2];
/// Double-size UID of an Ultralight-C.
pub const UID_DOUBLE: [u8; 7] = [0x04, 0x5A, 0xF6, 0x62, 0xD5, 0x4B, 0x80];
/// Triple-size UID whose last fragment starts with the cascade tag value.
pub const UID_TRIPLE: [u8; 10] = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x88, 0x08, 0x09, 0x0A];

pub const SAK_MIFARE_1K: u8 = 0x08;
pub const SAK_ULTRALIGHT: u8 = 0x00;

/// Factory default Ultralight-C key ("BREAKMEIFYOUCAN!" byte-reversed).
pub fn default_key() -> [u8; 16] {
    hex::decode("49454d4b41455242214e4143554f5946")
        .unwrap()
        .try_into()
        .unwrap()
}

pub fn fixed_rnd_a() -> [u8; 8] {
    [0x13, 0x57, 0x9B, 0xDF, 0x02, 0x46, 0x8A, 0xCE]
}

pub fn fixed_rnd_b() -> [u8; 8] {
    [0x5E, 0x1D, 0x6C, 0xA2, 0x33, 0x90, 0x47, 0xF8]
}

pub fn single_tag() -> SimulatedTag {
    SimulatedTag::new(&UID_SINGLE, SAK_MIFARE_1K).unwrap()
}

pub fn ultralight_c_tag() -> SimulatedTag {
    SimulatedTag::new(&UID_DOUBLE, SAK_ULTRALIGHT)
        .unwrap()
        .with_ultralight_c(UltralightCCard::new(default_key(), fixed_rnd_b()))
}
