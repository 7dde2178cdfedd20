//! End-to-end reader scenario straight from `spec.md` §8: a 20-byte
//! source mixing every terminator style yields four lines with
//! consecutive line numbers.

use searcher::{BinaryBehavior, Reader, StringDriver};
use ustr::UString;

#[test]
fn mixed_terminators_end_to_end() {
    let bytes = b"abc\ndef\r\nghi\rjkl".to_vec();
    let mut reader = Reader::open(
        Box::new(StringDriver::new(bytes)),
        "mixed.txt",
        None,
        encoding_rs::UTF_8,
        BinaryBehavior::Text,
    )
    .unwrap();

    let mut line = UString::new();
    let mut lines = Vec::new();
    while reader.read_line(&mut line).unwrap() {
        lines.push((reader.lineno(), line.as_str().to_string()));
    }

    assert_eq!(
        lines,
        vec![
            (1, "abc\n".to_string()),
            (2, "def\r\n".to_string()),
            (3, "ghi\r".to_string()),
            (4, "jkl".to_string()),
        ]
    );
    assert!(reader.eof());
}

#[test]
fn lone_cr_split_across_a_refill_boundary_is_not_broken() {
    // Feed the driver in tiny one-byte reads so the lone CR in "a\rb" is
    // staged alone at least once, exercising the CrAtEnd refill path.
    struct OneByteAtATime {
        bytes: Vec<u8>,
        pos: usize,
    }
    impl searcher::SourceDriver for OneByteAtATime {
        fn name(&self) -> &'static str {
            "one-byte"
        }
        fn seekable(&self) -> bool {
            false
        }
        fn eof(&self) -> bool {
            self.pos >= self.bytes.len()
        }
        fn read_bytes(&mut self, buf: &mut [u8]) -> searcher::Result<usize> {
            if self.pos >= self.bytes.len() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    let driver = OneByteAtATime { bytes: b"a\rb\n".to_vec(), pos: 0 };
    let mut reader = Reader::open(
        Box::new(driver),
        "trickle.txt",
        None,
        encoding_rs::UTF_8,
        BinaryBehavior::Text,
    )
    .unwrap();

    let mut line = UString::new();
    assert!(reader.read_line(&mut line).unwrap());
    assert_eq!(line.as_str(), "a\r");
    assert!(reader.read_line(&mut line).unwrap());
    assert_eq!(line.as_str(), "b\n");
    assert!(!reader.read_line(&mut line).unwrap());
}
