#[path = "../common/mod.rs"]
mod common;

use librc522::chip::Register;
use librc522::test_support::{SimulatedTag, TagState};

use common::{SAK_MIFARE_1K, UID_SINGLE, UID_SINGLE_LAST_BIT, UID_SINGLE_NEIGHBOUR};

fn two_tags() -> Vec<SimulatedTag> {
    vec![
        SimulatedTag::new(&UID_SINGLE, SAK_MIFARE_1K).unwrap(),
        SimulatedTag::new(&UID_SINGLE_NEIGHBOUR, SAK_MIFARE_1K).unwrap(),
    ]
}

#[test]
fn colliding_bit_resolves_to_one() {
    let mut reader = common::reader_with_tags(two_tags());
    let uid = reader.scan(false).unwrap();

    // 0x5A has bit 3 set, 0x52 does not: the walk follows the 1.
    assert_eq!(uid.as_bytes(), &UID_SINGLE);

    let frames = &reader.link().frames;
    // REQA, ANTICOLLISION (collision), ANTICOLLISION (12 bits known), SELECT
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[1].bytes, vec![0x93, 0x20]);

    // Second pass: NVB 0x34, bits 0..11 known with bit 11 forced to 1
    let retry = &frames[2];
    assert_eq!(retry.bytes, vec![0x93, 0x34, 0x04, 0x0A]);
    assert_eq!(retry.last_bits, 4);
    assert_eq!(retry.rx_align, 4);
    assert!(!retry.crc);
}

#[test]
fn collision_position_register() {
    let mut reader = common::reader_with_tags(two_tags());
    reader.request(false).unwrap();

    let frame = reader.transceive_bits(&[0x93, 0x20], Some(16), 0).unwrap();
    assert_eq!(frame.collision, Some(11));
    assert_eq!(frame.data.len(), 5);
    // bits below the collision match both tags
    assert_eq!(frame.data[0], 0x04);
    assert_eq!(frame.data[1] & 0x07, 0x5A & 0x07);
    assert_eq!(reader.link().register(Register::Coll) & 0x1F, 12);
}

#[test]
fn loser_drops_back_to_idle() {
    let mut reader = common::reader_with_tags(two_tags());
    reader.scan(false).unwrap();

    let tags = reader.link().tags();
    assert_eq!(tags[0].state(), TagState::Active);
    assert_eq!(tags[1].state(), TagState::Idle);

    // Halting the winner lets the other tag through on the next REQA.
    reader.halt().unwrap();
    let second = reader.scan(false).unwrap();
    assert_eq!(second.as_bytes(), &UID_SINGLE_NEIGHBOUR);
}

#[test]
fn collision_in_first_bit() {
    let a = SimulatedTag::new(&[0x01, 0x00, 0x00, 0x00], SAK_MIFARE_1K).unwrap();
    let b = SimulatedTag::new(&[0x00, 0x00, 0x00, 0x00], SAK_MIFARE_1K).unwrap();
    let mut reader = common::reader_with_tags(vec![a, b]);

    let uid = reader.scan(false).unwrap();
    assert_eq!(uid.as_bytes(), &[0x01, 0x00, 0x00, 0x00]);
    // one bit known after the collision
    assert_eq!(reader.link().frames[2].bytes, vec![0x93, 0x21, 0x01]);
}

#[test]
fn collision_in_last_uid_bit() {
    let a = SimulatedTag::new(&UID_SINGLE, SAK_MIFARE_1K).unwrap();
    let b = SimulatedTag::new(&UID_SINGLE_LAST_BIT, SAK_MIFARE_1K).unwrap();
    let mut reader = common::reader_with_tags(vec![a, b]);

    reader.request(false).unwrap();
    let frame = reader.transceive_bits(&[0x93, 0x20], Some(16), 0).unwrap();
    // CollPos wraps to 0 for the 32nd bit
    assert_eq!(reader.link().register(Register::Coll) & 0x3F, 0x00);
    assert_eq!(frame.collision, Some(31));

    reader.link_mut().clear_log();
    let uid = reader.scan(false).unwrap();
    assert_eq!(uid.as_bytes(), &UID_SINGLE_LAST_BIT);

    let frames = &reader.link().frames;
    assert_eq!(frames.len(), 4);
    assert_eq!(frames[1].bytes, vec![0x93, 0x20]);
    assert_eq!(frames[2].bytes, vec![0x93, 0x60, 0x04, 0x5A, 0xF6, 0xE2]);
    assert_eq!(frames[2].last_bits, 0);
    assert_eq!(frames[3].bytes, vec![0x93, 0x70, 0x04, 0x5A, 0xF6, 0xE2, 0x4A]);

    reader.halt().unwrap();
    assert_eq!(reader.scan(false).unwrap().as_bytes(), &UID_SINGLE);
}

#[test]
fn field_empties_after_tags_leave() {
    let mut reader = common::reader_with_tags(two_tags());
    reader.scan(false).unwrap();

    let removed = reader.link_mut().remove_tags();
    assert_eq!(removed.len(), 2);
    assert!(reader.link().tags().is_empty());
    assert!(reader.scan(true).unwrap_err().is_no_reply());
}
