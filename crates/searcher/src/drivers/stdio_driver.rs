use std::io::Read;

use super::SourceDriver;
use crate::error::{ErrorKind, Result, SearcherError};

/// Buffered reads over any `Read`, the driver used for regular files
/// opened by path and for the process's standard input. Ported from
/// `io/stdio.c`.
pub struct StdioDriver<R> {
    inner: std::io::BufReader<R>,
    eof: bool,
    seekable: bool,
}

impl<R: Read> StdioDriver<R> {
    /// `seekable` should be `false` for the real stdin (`fd == STDIN_FILENO`
    /// per `spec.md` §4.1); named regular files opened for streaming
    /// (rather than mmap'd) may still set it `true` if `R` also implements
    /// `Seek`, but this generic driver doesn't require that bound, so
    /// callers pick the right driver for their seek needs up front.
    pub fn new(inner: R, seekable: bool) -> Self {
        StdioDriver { inner: std::io::BufReader::new(inner), eof: false, seekable }
    }
}

impl<R: Read + Send> SourceDriver for StdioDriver<R> {
    fn name(&self) -> &'static str {
        "stdio"
    }

    fn seekable(&self) -> bool {
        self.seekable
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

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn reports_eof_after_exhausting_source() {
        let mut driver = StdioDriver::new(Cursor::new(b"abc".to_vec()), false);
        let mut buf = [0u8; 16];
        let n = driver.read_bytes(&mut buf).unwrap();
        assert_eq!(&buf[..n], b"abc");
        assert!(!driver.eof());
        let n = driver.read_bytes(&mut buf).unwrap();
        assert_eq!(n, 0);
        assert!(driver.eof());
    }
}
