#[path = "../common/mod.rs"]
mod common;

use std::convert::TryFrom;

use librc522::Uid;
use librc522::test_support::TagState;

use common::{SAK_MIFARE_1K, SAK_ULTRALIGHT, UID_DOUBLE, UID_SINGLE};

#[test]
fn select_known_uid() {
    let mut reader = common::reader_with_tag(common::single_tag());
    let uid = Uid::try_from(&UID_SINGLE[..]).unwrap();

    let sak = reader.select(&uid).unwrap();
    assert_eq!(sak.as_u8(), SAK_MIFARE_1K);

    let frames = &reader.link().frames;
    // REQA and one SELECT, no anticollision walk
    assert_eq!(frames.len(), 2);
    assert_eq!(
        frames[1].bytes,
        vec![0x93, 0x70, 0x04, 0x5A, 0xF6, 0x62, 0xCA]
    );
    assert_eq!(reader.link().tags()[0].state(), TagState::Active);
}

#[test]
fn select_double_size_uid() {
    let mut reader = common::reader_with_tag(common::ultralight_c_tag());
    let uid = Uid::try_from(&UID_DOUBLE[..]).unwrap();

    assert_eq!(reader.select(&uid).unwrap().as_u8(), SAK_ULTRALIGHT);
    let selects: Vec<_> = reader.link().frames[1..]
        .iter()
        .map(|f| f.bytes.clone())
        .collect();
    assert_eq!(
        selects,
        vec![
            vec![0x93, 0x70, 0x88, 0x04, 0x5A, 0xF6, 0x20],
            vec![0x95, 0x70, 0x62, 0xD5, 0x4B, 0x80, 0x7C],
        ]
    );
}

#[test]
fn select_wrong_uid_gets_no_reply() {
    let mut reader = common::reader_with_tag(common::single_tag());
    let uid = Uid::try_from(&[0x04, 0x5A, 0xF6, 0x63][..]).unwrap();
    assert!(reader.select(&uid).unwrap_err().is_no_reply());
    assert_eq!(reader.link().tags()[0].state(), TagState::Idle);
}

#[test]
fn halt_then_rescan() {
    let mut reader = common::reader_with_tag(common::single_tag());
    let uid = reader.scan(false).unwrap();

    reader.halt().unwrap();
    assert_eq!(reader.link().tags()[0].state(), TagState::Halt);
    let halt = reader.link().frames.last().unwrap();
    assert_eq!(halt.bytes, vec![0x50, 0x00]);
    assert!(halt.crc);

    // REQA does not wake a halted tag, WUPA does.
    assert!(reader.scan(false).unwrap_err().is_no_reply());
    assert_eq!(reader.scan(true).unwrap(), uid);
}
