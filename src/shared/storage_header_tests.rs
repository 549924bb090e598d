use crate::shared::storage_header::{BinaryHeader, FileKind, MagicFile};
use std::io::Cursor;

struct BitmapHeader;
impl MagicFile for BitmapHeader {
    const MAGIC: [u8; 8] = FileKind::CategoryBitmap.magic();
}

#[test]
fn header_roundtrip_ok() {
    let hdr = BinaryHeader::new(FileKind::CategoryBitmap.magic(), 1, 0);
    let mut buf = Vec::new();
    hdr.write_to(&mut buf).unwrap();
    assert_eq!(buf.len(), BinaryHeader::TOTAL_LEN);

    let read = BinaryHeader::read_from(Cursor::new(buf)).unwrap();
    assert_eq!(read, hdr);
}

#[test]
fn flipped_magic_byte_fails_crc() {
    let mut buf = Vec::new();
    BitmapHeader::write_header(&mut buf).unwrap();
    buf[0] ^= 0xFF;

    assert!(BinaryHeader::read_from(Cursor::new(buf)).is_err());
}

#[test]
fn foreign_magic_rejected_by_trait() {
    let mut buf = Vec::new();
    BinaryHeader::new(*b"OTHERFMT", 1, 0)
        .write_to(&mut buf)
        .unwrap();

    let err = BitmapHeader::read_and_validate_header(&mut Cursor::new(buf)).unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
}

#[test]
fn version_mismatch_detected_by_trait() {
    struct Future;
    impl MagicFile for Future {
        const MAGIC: [u8; 8] = FileKind::CategoryBitmap.magic();
        const VERSION: u16 = 2;
    }

    let mut buf = Vec::new();
    BitmapHeader::write_header(&mut buf).unwrap();
    assert!(Future::read_and_validate_header(&mut Cursor::new(buf)).is_err());
}

#[test]
fn truncated_header_fails() {
    let mut buf = Vec::new();
    BitmapHeader::write_header(&mut buf).unwrap();
    buf.truncate(BinaryHeader::TOTAL_LEN - 1);

    assert!(BinaryHeader::read_from(Cursor::new(buf)).is_err());
}
