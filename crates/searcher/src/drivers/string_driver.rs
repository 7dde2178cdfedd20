use super::SourceDriver;
use crate::error::Result;

/// An in-memory byte source. Internal-only per `spec.md` §4.1 ("the
/// `string` driver is internal-only") — useful for feeding a literal
/// argument (e.g. `grep`'s pattern-from-string mode) through the same
/// reader pipeline as a file. Ported from `io/string.c`.
pub struct StringDriver {
    bytes: Vec<u8>,
    pos: usize,
}

impl StringDriver {
    pub fn new(bytes: Vec<u8>) -> Self {
        StringDriver { bytes, pos: 0 }
    }
}

impl SourceDriver for StringDriver {
    fn name(&self) -> &'static str {
        "string"
    }

    fn seekable(&self) -> bool {
        true
    }

    fn eof(&self) -> bool {
        self.pos >= self.bytes.len()
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let remaining = &self.bytes[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }

    fn rewind_to(&mut self, offset: u64) -> Result<()> {
        self.pos = (offset as usize).min(self.bytes.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_copy_round_trip() {
        let mut driver = StringDriver::new(b"abcdef".to_vec());
        let mut buf = [0u8; 3];
        assert_eq!(driver.read_bytes(&mut buf).unwrap(), 3);
        assert_eq!(&buf, b"abc");
        assert!(!driver.eof());
    }
}
