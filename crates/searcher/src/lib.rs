//! Source-agnostic byte acquisition, encoding detection, streaming
//! transcoding, line segmentation and binary classification.
//!
//! This crate is the Rust-native re-expression of `reader.c` /
//! `reader_imp.h` and the `io/*.c` driver backends: a pluggable
//! `SourceDriver` feeds raw bytes to a `Reader`, which negotiates an
//! encoding, classifies binary content, and segments text into lines.

mod binary;
pub mod drivers;
pub mod encoding;
pub mod error;
mod reader;

pub use binary::{classify, Classification, CLASSIFICATION_WINDOW};
pub use drivers::{available_drivers, driver_by_name, DriverDescriptor, MmapDriver, SourceDriver, StdioDriver, StringDriver};
pub use encoding::{detect, Detected, MAX_DETECTION_WINDOW, MIN_CONFIDENCE};
pub use error::{ErrorKind, Result, SearcherError};
pub use reader::{BinaryBehavior, Reader};
