#[path = "../common/mod.rs"]
mod common;

use librc522::Error;
use librc522::test_support::{SimulatedTag, UltralightCCard};
use librc522::ultralight_c::UltralightC;

use common::{SAK_ULTRALIGHT, UID_DOUBLE, default_key, fixed_rnd_a, fixed_rnd_b};

#[test]
fn authenticate_after_scan() {
    let mut reader = common::reader_with_tag(common::ultralight_c_tag());
    reader.scan(false).unwrap();

    let mut ulc = reader.ultralight_c();
    assert!(!ulc.is_authenticated());
    ulc.authenticate_with_nonce(&default_key(), fixed_rnd_a()).unwrap();
    assert!(ulc.is_authenticated());

    let card = reader.link().tags()[0].card().unwrap();
    assert_eq!(card.last_rnd_a(), Some(fixed_rnd_a()));
}

#[test]
fn handshake_frames() {
    let mut reader = common::reader_with_tag(common::ultralight_c_tag());
    reader.scan(false).unwrap();
    reader.link_mut().clear_log();

    reader
        .ultralight_c()
        .authenticate_with_nonce(&default_key(), fixed_rnd_a())
        .unwrap();

    let frames = &reader.link().frames;
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].bytes, vec![0x1A, 0x00]);
    assert!(frames[0].crc);
    assert_eq!(frames[1].bytes.len(), 17);
    assert_eq!(frames[1].bytes[0], 0xAF);
    assert!(frames[1].crc);
}

#[test]
fn authenticate_with_random_nonce() {
    let mut reader = common::reader_with_tag(common::ultralight_c_tag());
    reader.scan(false).unwrap();
    reader.ultralight_c().authenticate(&default_key()).unwrap();
}

#[test]
fn corrupted_tag_answer_fails() {
    for index in 1..9 {
        let tag = SimulatedTag::new(&UID_DOUBLE, SAK_ULTRALIGHT)
            .unwrap()
            .with_ultralight_c(
                UltralightCCard::new(default_key(), fixed_rnd_b()).corrupt_final_byte(index),
            );
        let mut reader = common::reader_with_tag(tag);
        reader.scan(false).unwrap();

        let mut ulc = reader.ultralight_c();
        match ulc.authenticate_with_nonce(&default_key(), fixed_rnd_a()) {
            Err(Error::AuthenticationFailed) => {}
            other => panic!("byte {}: expected AuthenticationFailed, got {:?}", index, other),
        }
        assert!(!ulc.is_authenticated());
    }
}

#[test]
fn wrong_key_gets_no_answer() {
    let mut reader = common::reader_with_tag(common::ultralight_c_tag());
    reader.scan(false).unwrap();

    let mut key = default_key();
    key[15] ^= 0x80;
    let err = reader
        .ultralight_c()
        .authenticate_with_nonce(&key, fixed_rnd_a())
        .unwrap_err();
    assert!(err.is_no_reply());
}

#[test]
fn tag_without_auth_support() {
    let mut reader = common::reader_with_tag(common::single_tag());
    reader.scan(false).unwrap();
    assert!(matches!(
        UltralightC::new(&mut reader).authenticate(&default_key()),
        Err(Error::NoReply)
    ));
}
