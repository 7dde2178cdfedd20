use std::fs::File;

use memmap2::Mmap;

use super::SourceDriver;
use crate::error::{ErrorKind, Result, SearcherError};

/// Memory-maps the whole file; `read_bytes` advances a cursor through the
/// mapping and `rewind_to` just resets it. Ported from `io/mmap.c`.
pub struct MmapDriver {
    map: Mmap,
    pos: usize,
}

impl MmapDriver {
    pub fn open(path: &std::path::Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            SearcherError::from_io(ErrorKind::Warning, e)
        })?;
        // SAFETY: the mapping is read-only and this driver does not
        // assume the backing file stays unmodified for longer than the
        // mapping's lifetime; that's the same assumption every mmap-based
        // reader makes.
        let map = unsafe { Mmap::map(&file) }.map_err(|e| {
            SearcherError::from_io(ErrorKind::Warning, e)
        })?;
        Ok(MmapDriver { map, pos: 0 })
    }
}

impl SourceDriver for MmapDriver {
    fn name(&self) -> &'static str {
        "mmap"
    }

    fn seekable(&self) -> bool {
        true
    }

    fn eof(&self) -> bool {
        self.pos >= self.map.len()
    }

    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize> {
        let remaining = &self.map[self.pos..];
        let n = remaining.len().min(buf.len());
        buf[..n].copy_from_slice(&remaining[..n]);
        self.pos += n;
        Ok(n)
    }

    fn rewind_to(&mut self, offset: u64) -> Result<()> {
        self.pos = (offset as usize).min(self.map.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn reads_full_file_and_rewinds() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(b"hello world").unwrap();
        let mut driver = MmapDriver::open(f.path()).unwrap();
        let mut buf = [0u8; 5];
        assert_eq!(driver.read_bytes(&mut buf).unwrap(), 5);
        assert_eq!(&buf, b"hello");
        driver.rewind_to(0).unwrap();
        assert_eq!(driver.read_bytes(&mut buf).unwrap(), 5);
        assert_eq!(&buf, b"hello");
    }
}
