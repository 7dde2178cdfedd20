use std::io::Read;

use flate2::read::MultiGzDecoder;

use super::SourceDriver;
use crate::error::{ErrorKind, Result, SearcherError};

/// Wraps an underlying byte source in `flate2`'s streaming gzip decoder.
/// `eof` becomes true once the compressed stream yields end-of-stream.
/// Ported from `io/zlib.c` / `uncompressio.c`.
pub struct GzipDriver<R: Read> {
    inner: MultiGzDecoder<R>,
    eof: bool,
}

impl<R: Read> GzipDriver<R> {
    pub fn new(inner: R) -> Self {
        GzipDriver { inner: MultiGzDecoder::new(inner), eof: false }
    }
}

impl<R: Read + Send> SourceDriver for GzipDriver<R> {
    fn name(&self) -> &'static str {
        "gzip"
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
