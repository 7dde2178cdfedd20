use std::io::Read;

use xz2::read::XzDecoder;

use super::SourceDriver;
use crate::error::{ErrorKind, Result, SearcherError};

/// Wraps an underlying byte source in `xz2`'s streaming lzma/xz decoder.
/// Ported from `io/lzma.c`. `xz2` binds the same `liblzma` the original
/// linked against, so this is the direct analogue rather than a
/// reimplementation (see `DESIGN.md`).
pub struct LzmaDriver<R: Read> {
    inner: XzDecoder<R>,
    eof: bool,
}

impl<R: Read> LzmaDriver<R> {
    pub fn new(inner: R) -> Self {
        LzmaDriver { inner: XzDecoder::new(inner), eof: false }
    }
}

impl<R: Read + Send> SourceDriver for LzmaDriver<R> {
    fn name(&self) -> &'static str {
        "lzma"
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
