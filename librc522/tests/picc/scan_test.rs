#[path = "../common/mod.rs"]
mod common;

use librc522::Error;
use librc522::test_support::SimulatedTag;

use common::{UID_SINGLE, SAK_MIFARE_1K};

#[test]
fn scan_single_tag() {
    let mut reader = common::reader_with_tag(common::single_tag());
    let uid = reader.scan(false).unwrap();
    assert_eq!(uid.as_bytes(), &UID_SINGLE);
    assert_eq!(uid.to_string(), "04 5a f6 62");
}

#[test]
fn frames_on_the_air() {
    let mut reader = common::reader_with_tag(common::single_tag());
    reader.scan(false).unwrap();

    let frames = &reader.link().frames;
    assert_eq!(frames.len(), 3);

    // REQA: 7 bits, no CRC
    assert_eq!(frames[0].bytes, vec![0x26]);
    assert_eq!(frames[0].last_bits, 7);
    assert!(!frames[0].crc);

    // ANTICOLLISION CL1 with nothing known yet
    assert_eq!(frames[1].bytes, vec![0x93, 0x20]);
    assert_eq!(frames[1].last_bits, 0);
    assert_eq!(frames[1].rx_align, 0);
    assert!(!frames[1].crc);

    // SELECT CL1 with CRC
    assert_eq!(
        frames[2].bytes,
        vec![0x93, 0x70, 0x04, 0x5A, 0xF6, 0x62, 0xCA]
    );
    assert!(frames[2].crc);
}

#[test]
fn scan_tag_reports_atqa_and_sak() {
    let mut reader = common::reader_with_tag(common::single_tag());
    let tag = reader.scan_tag(false).unwrap();
    assert_eq!(tag.atqa.as_bytes(), &[0x04, 0x00]);
    assert_eq!(tag.sak.as_u8(), SAK_MIFARE_1K);
    assert!(!tag.sak.uid_incomplete());
}

#[test]
fn no_tag_is_no_reply() {
    let mut reader = common::reader_with_tags(vec![]);
    match reader.scan(false) {
        Err(Error::NoReply) => {}
        other => panic!("expected NoReply, got {:?}", other),
    }
}

#[test]
fn tag_reporting_wrong_bcc() {
    let tag = SimulatedTag::new(&UID_SINGLE, SAK_MIFARE_1K)
        .unwrap()
        .with_bcc(0xE3);
    let mut reader = common::reader_with_tag(tag);
    match reader.scan(false) {
        Err(Error::InvalidBcc {
            expected,
            calculated,
        }) => {
            assert_eq!(expected, 0xE3);
            assert_eq!(calculated, 0xCA);
        }
        other => panic!("expected InvalidBcc, got {:?}", other),
    }
    // No SELECT was sent for the corrupted level.
    assert!(reader.link().frames.iter().all(|f| f.bytes.get(1) != Some(&0x70)));
}
