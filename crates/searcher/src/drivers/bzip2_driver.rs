use std::io::Read;

use bzip2::read::BzDecoder;

use super::SourceDriver;
use crate::error::{ErrorKind, Result, SearcherError};

/// Wraps an underlying byte source in `bzip2`'s streaming decoder.
/// Ported from `io/bzip2.c`.
pub struct Bzip2Driver<R: Read> {
    inner: BzDecoder<R>,
    eof: bool,
}

impl<R: Read> Bzip2Driver<R> {
    pub fn new(inner: R) -> Self {
        Bzip2Driver { inner: BzDecoder::new(inner), eof: false }
    }
}

impl<R: Read + Send> SourceDriver for Bzip2Driver<R> {
    fn name(&self) -> &'static str {
        "bzip2"
    }

    fn seekable(&self) -> bool {
        false
    }

    fn eof(&self) -> bool {
        self.eof
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let n = self
            .inner
            .read(buf)
            .map_err(|e| SearcherError::from_io(ErrorKind::Fatal, e))?;
        if n == 0 {
            self.eof = true;
        }
        Ok(n)
    }
}
