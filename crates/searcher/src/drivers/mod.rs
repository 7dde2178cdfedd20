//! Source drivers: uniform byte-level read/seek/eof over file, stdin,
//! string, and compressed sources (`spec.md` §4.1).
//!
//! Ported from `reader_imp_t`'s function-pointer vtable in
//! `reader_imp.h`/`reader.c`; here it's a trait object instead, and driver
//! availability is a Cargo feature (`driver-gzip`, `driver-bzip2`,
//! `driver-lzma`) enumerated through a static registry rather than the
//! original's `dlopen`-based dynamic loading (`spec.md` §9 design note).

#[cfg(feature = "driver-bzip2")]
mod bzip2_driver;
#[cfg(feature = "driver-gzip")]
mod gzip_driver;
#[cfg(feature = "driver-lzma")]
mod lzma_driver;
mod mmap_driver;
mod stdio_driver;
mod string_driver;

#[cfg(feature = "driver-bzip2")]
pub use bzip2_driver::Bzip2Driver;
#[cfg(feature = "driver-gzip")]
pub use gzip_driver::GzipDriver;
#[cfg(feature = "driver-lzma")]
pub use lzma_driver::LzmaDriver;
pub use mmap_driver::MmapDriver;
pub use stdio_driver::StdioDriver;
pub use string_driver::StringDriver;

use crate::error::Result;

/// Each driver exposes uniform read/eof/rewind semantics. `readBytes`'s
/// C signature (`size_t (*)(void *, char *, size_t)`, no error channel)
/// becomes a `Result`-returning method since read failures on a real
/// source (a broken pipe, a corrupt gzip stream) are common enough that
/// swallowing them isn't acceptable.
pub trait SourceDriver: Send {
    /// The name used to select this driver on the command line, or a
    /// descriptive name for internal-only drivers.
    fn name(&self) -> &'static str;

    /// Whether this driver's source supports physical rewind. Stdin and
    /// non-seekable compressed streams report `false`; the reader then
    /// performs binary classification on whatever is already staged
    /// (`spec.md` §4.1, §5).
    fn seekable(&self) -> bool;

    fn eof(&self) -> bool;

    /// Read up to `buf.len()` bytes, returning the number actually read
    /// (`0` at end of stream).
    fn read_bytes(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Seek back to `offset` bytes from the start of the source. Only
    /// called when `seekable()` is `true`.
    fn rewind_to(&mut self, offset: u64) -> Result<()> {
        let _ = offset;
        Err(crate::error::SearcherError::fatal(format!(
            "{} driver does not support rewind",
            self.name()
        )))
    }
}

/// Static description of a driver, used to enumerate what's available at
/// build time without touching the filesystem or a dynamic loader.
#[derive(Debug, Clone, Copy)]
pub struct DriverDescriptor {
    pub name: &'static str,
    /// Internal drivers (`string`) aren't selectable by name on the CLI.
    pub internal: bool,
}

/// The drivers compiled into this binary, default driver first
/// (`mmap`, per `spec.md` §6).
pub fn available_drivers() -> Vec<DriverDescriptor> {
    let mut drivers = vec![
        DriverDescriptor { name: "mmap", internal: false },
        DriverDescriptor { name: "stdio", internal: false },
        DriverDescriptor { name: "string", internal: true },
    ];
    #[cfg(feature = "driver-gzip")]
    drivers.push(DriverDescriptor { name: "gzip", internal: false });
    #[cfg(feature = "driver-bzip2")]
    drivers.push(DriverDescriptor { name: "bzip2", internal: false });
    #[cfg(feature = "driver-lzma")]
    drivers.push(DriverDescriptor { name: "lzma", internal: false });
    drivers
}

pub fn driver_by_name(name: &str) -> Option<DriverDescriptor> {
    available_drivers().into_iter().find(|d| !d.internal && d.name == name)
}
