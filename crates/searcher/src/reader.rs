//! The transcoding reader: the central piece of the pipeline. Maintains a
//! byte-side staging buffer and a decoded-text staging buffer, refills
//! both incrementally, and exposes a line segmenter plus bulk
//! code-point reads for the binary classifier.
//!
//! Ported from `reader.c` and `reader_imp.h`'s `STRING_READLINE` /
//! `STRING_READUCHARS` macros. The original's dual `internalEnd`
//! (`last decoded`) / `externalEnd` (`last safely yieldable`) cursors
//! existed to keep a split UTF-16 surrogate pair from ever reaching a
//! consumer across a buffer refill; `encoding_rs::Decoder::decode_to_string`
//! already guarantees it only ever emits whole characters (the UTF-8
//! analogue of a split continuation byte), so that invariant holds here
//! without a second cursor to enforce it — see `DESIGN.md` for that Open
//! Question resolution. What's kept unchanged is the "no physical
//! rewind" design (`spec.md` §9): the initial read is sized to comfortably
//! hold both the encoding-detection window (4096 bytes) and the binary
//! classification window (~4096 bytes of decoded text), so classification
//! never needs to seek the underlying driver — it just resets this
//! reader's own cursors and re-decodes the bytes already staged.

use encoding_rs::{Decoder, Encoding};

use crate::binary::{classify, Classification};
use crate::drivers::SourceDriver;
use crate::error::{ErrorKind, Result, SearcherError};
use ustr::UString;

/// Large enough to stage the 4096-byte detection window plus a
/// comfortable binary-classification window without ever needing a
/// physical rewind for ordinary text files (`spec.md` §4.2, §4.5, §9).
const BYTE_CHUNK: usize = 64 * 1024;

/// How the reader behaves once a source is classified as binary
/// (`spec.md` §4.5).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryBehavior {
    /// Refuse to open binary sources at all.
    Skip,
    /// Open, but flag as binary; consumers report a single notice
    /// instead of per-line matches.
    Binary,
    /// Force text handling regardless of content.
    Text,
}

pub struct Reader {
    driver: Box<dyn SourceDriver>,
    source_name: String,
    decoder: Decoder,
    encoding: &'static Encoding,
    signature_len: usize,

    byte_buf: Vec<u8>,
    byte_ptr: usize,
    byte_end: usize,
    driver_eof: bool,

    text_buf: String,
    text_ptr: usize,

    lineno: u64,
    binary: bool,
    binary_behavior: BinaryBehavior,
}

impl Reader {
    /// Opens `driver` against `source_name`, negotiating an encoding via
    /// `encoding::detect` semantics (the caller supplies the already
    /// `Detected` value so encoding configuration stays a `searcher`
    /// concern, not baked into `Reader::open`'s signature) and performing
    /// binary classification per `spec.md` §4.5.
    pub fn open(
        mut driver: Box<dyn SourceDriver>,
        source_name: impl Into<String>,
        configured_inputs: Option<&'static Encoding>,
        default_encoding: &'static Encoding,
        binary_behavior: BinaryBehavior,
    ) -> Result<Self> {
        let mut byte_buf = vec![0u8; BYTE_CHUNK];
        let n = driver.read_bytes(&mut byte_buf)?;
        let byte_end = n;
        let driver_eof = n == 0;

        let detected = crate::encoding::detect(
            &byte_buf[..byte_end],
            configured_inputs,
            default_encoding,
        );

        let decoder = detected.encoding.new_decoder_without_bom_handling();
        let mut reader = Reader {
            driver,
            source_name: source_name.into(),
            decoder,
            encoding: detected.encoding,
            signature_len: detected.signature_len,
            byte_buf,
            byte_ptr: detected.signature_len,
            byte_end,
            driver_eof,
            text_buf: String::new(),
            text_ptr: 0,
            lineno: 0,
            binary: false,
            binary_behavior,
        };

        if binary_behavior != BinaryBehavior::Text {
            reader.classify_binary()?;
        }

        Ok(reader)
    }

    pub fn encoding(&self) -> &'static Encoding {
        self.encoding
    }

    pub fn signature_len(&self) -> usize {
        self.signature_len
    }

    pub fn lineno(&self) -> u64 {
        self.lineno
    }

    pub fn is_binary(&self) -> bool {
        self.binary
    }

    pub fn source_name(&self) -> &str {
        &self.source_name
    }

    pub fn eof(&self) -> bool {
        self.driver_eof
            && self.byte_ptr >= self.byte_end
            && self.text_ptr >= self.text_buf.len()
    }

    /// `spec.md` §4.5: decode up to 1024 code points, classify, then
    /// either discard the scratch (seekable source: reuse the staged
    /// bytes, matching the "no physical rewind" design) or keep it (an
    /// unseekable source has nowhere to rewind to, so what was already
    /// decoded becomes the start of the normal output stream).
    fn classify_binary(&mut self) -> Result<()> {
        // Decode whatever is already staged; the chunk size guarantees
        // this covers the classification window for all but
        // pathologically long lines.
        let last = self.driver_eof;
        let (_, read, _) = self.decoder.decode_to_string(
            &self.byte_buf[self.byte_ptr..self.byte_end],
            &mut self.text_buf,
            last,
        );
        self.byte_ptr += read;

        let more_follows = !self.eof_after_classification_decode();
        let classification = classify(&self.text_buf, more_follows);

        match (self.binary_behavior, classification) {
            (BinaryBehavior::Skip, Classification::Binary) => {
                return Err(SearcherError::new(
                    ErrorKind::Warning,
                    format!("{}: binary file, skipped", self.source_name),
                ));
            }
            (_, Classification::Binary) => {
                self.binary = true;
            }
            (_, Classification::Text) => {}
        }

        if self.driver.seekable() {
            // Reuse the staged bytes: reset the decoder and the decoded
            // scratch, but keep the bytes themselves (no driver rewind).
            self.decoder = self.encoding.new_decoder_without_bom_handling();
            self.text_buf.clear();
            self.byte_ptr = self.signature_len;
        }
        // Unseekable: leave text_buf/text_ptr as-is so classify_binary's
        // decode becomes the start of ordinary reading.

        Ok(())
    }

    fn eof_after_classification_decode(&self) -> bool {
        self.driver_eof && self.byte_ptr >= self.byte_end
    }

    /// Compact both staging buffers, pull more bytes from the driver, and
    /// decode them. Returns `false` only when there is truly nothing left
    /// to produce (the `spec.md` §4.3 `fill_buffer` algorithm).
    fn fill_buffer(&mut self) -> Result<bool> {
        if self.driver_eof && self.byte_ptr >= self.byte_end {
            return Ok(false);
        }

        if self.byte_ptr > 0 {
            self.byte_buf.copy_within(self.byte_ptr..self.byte_end, 0);
            self.byte_end -= self.byte_ptr;
            self.byte_ptr = 0;
        }
        if self.text_ptr > 0 {
            self.text_buf.replace_range(0..self.text_ptr, "");
            self.text_ptr = 0;
        }

        if !self.driver_eof && self.byte_end < self.byte_buf.len() {
            let n = self.driver.read_bytes(&mut self.byte_buf[self.byte_end..])?;
            if n == 0 {
                self.driver_eof = true;
            } else {
                self.byte_end += n;
            }
        }

        let before = self.text_buf.len();
        let last = self.driver_eof;
        let (_, read, _) = self.decoder.decode_to_string(
            &self.byte_buf[self.byte_ptr..self.byte_end],
            &mut self.text_buf,
            last,
        );
        self.byte_ptr += read;
        let produced = self.text_buf.len() > before;

        Ok(produced || !self.driver_eof || self.byte_ptr < self.byte_end)
    }

    /// `readline`: clears `out`, then yields the next logical line
    /// including its terminator, recognizing every terminator
    /// `spec.md` §4.3 lists (CR+LF merged into one two-unit terminator).
    /// Returns `false` once there are no more lines.
    pub fn read_line(&mut self, out: &mut UString) -> Result<bool> {
        out.clear();
        loop {
            let remaining = &self.text_buf[self.text_ptr..];
            match scan_for_terminator(remaining) {
                ScanResult::Found { content_len, term_len } => {
                    out.append_string(&remaining[..content_len + term_len]);
                    self.text_ptr += content_len + term_len;
                    self.lineno += 1;
                    return Ok(true);
                }
                ScanResult::CrAtEnd { content_len } => {
                    if self.fill_buffer()? {
                        continue;
                    }
                    let remaining = &self.text_buf[self.text_ptr..];
                    out.append_string(&remaining[..content_len + 1]);
                    self.text_ptr += content_len + 1;
                    self.lineno += 1;
                    return Ok(true);
                }
                ScanResult::NeedMore => {
                    if self.fill_buffer()? {
                        continue;
                    }
                    let remaining = &self.text_buf[self.text_ptr..];
                    if remaining.is_empty() {
                        return Ok(false);
                    }
                    out.append_string(remaining);
                    self.text_ptr = self.text_buf.len();
                    self.lineno += 1;
                    return Ok(true);
                }
            }
        }
    }

    /// `readuchars`: bulk-copy up to `max` decoded `char`s into `out`,
    /// refilling as needed. Used by the binary classifier and available
    /// to callers that want raw decoded text without line segmentation.
    pub fn read_chars(&mut self, max: usize, out: &mut String) -> Result<usize> {
        let mut count = 0;
        while count < max {
            let remaining = &self.text_buf[self.text_ptr..];
            if let Some(c) = remaining.chars().next() {
                out.push(c);
                self.text_ptr += c.len_utf8();
                count += 1;
            } else if !self.fill_buffer()? {
                break;
            }
        }
        Ok(count)
    }
}

enum ScanResult {
    Found { content_len: usize, term_len: usize },
    CrAtEnd { content_len: usize },
    NeedMore,
}

fn scan_for_terminator(s: &str) -> ScanResult {
    for (i, c) in s.char_indices() {
        if !ustr::LINE_TERMINATORS.contains(&c) {
            continue;
        }
        if c == '\r' {
            let after = i + 1;
            if after < s.len() {
                if s[after..].starts_with('\n') {
                    return ScanResult::Found { content_len: i, term_len: 2 };
                }
                return ScanResult::Found { content_len: i, term_len: 1 };
            }
            return ScanResult::CrAtEnd { content_len: i };
        }
        return ScanResult::Found { content_len: i, term_len: c.len_utf8() };
    }
    ScanResult::NeedMore
}
