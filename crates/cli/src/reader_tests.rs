#![allow(clippy::unwrap_used, clippy::expect_used)]

use super::*;
use std::io::{Cursor, Seek, SeekFrom, Write};

#[test]
fn reads_small_input() {
    let input = InputReader::new().read_all(Cursor::new("hello")).unwrap();

    assert_eq!(input.bytes, b"hello");
    assert_eq!(input.size(), 5);
}

#[test]
fn reads_empty_input() {
    let input = InputReader::new().read_all(Cursor::new("")).unwrap();
    assert_eq!(input.size(), 0);
    assert_eq!(input.text(), "");
}

#[test]
fn reads_from_file() {
    let mut file = tempfile::tempfile().unwrap();
    file.write_all(&vec![b'x'; 100_000]).unwrap();
    file.seek(SeekFrom::Start(0)).unwrap();

    let input = InputReader::new().read_all(file).unwrap();

    assert_eq!(input.bytes.len(), 100_000);
}

#[test]
fn default_reader_has_no_cap() {
    assert_eq!(InputReader::default().max_size, u64::MAX);
    let input = InputReader::new().read_all(Cursor::new(vec![b'x'; 1 << 20])).unwrap();
    assert_eq!(input.size(), 1 << 20);
}

#[test]
fn accepts_input_at_limit() {
    let reader = InputReader::with_max_size(4);
    let input = reader.read_all(Cursor::new("abcd")).unwrap();
    assert_eq!(input.size(), 4);
}

#[test]
fn rejects_oversized_input() {
    let reader = InputReader::with_max_size(4);
    let result = reader.read_all(Cursor::new("abcde"));

    assert!(matches!(result, Err(Error::InputTooLarge { max_size: 4 })));
}

#[test]
fn text_replaces_invalid_utf8() {
    let input = InputReader::new()
        .read_all(Cursor::new(vec![b'a', 0xff, b'b']))
        .unwrap();
    assert_eq!(input.text(), "a\u{fffd}b");
}

#[test]
fn read_failure_is_io_error() {
    struct Failing;

    impl Read for Failing {
        fn read(&mut self, _buf: &mut [u8]) -> std::io::Result<usize> {
            Err(std::io::Error::other("device gone"))
        }
    }

    let result = InputReader::new().read_all(Failing);
    assert!(matches!(result, Err(Error::Io { .. })));
}
