//! Encoding detection: BOM sniffing plus statistical charset guessing with
//! a minimum-confidence threshold (`spec.md` §4.2).
//!
//! Ported from the `ucsdet`-based logic near the top of `reader.c`. ICU's
//! `ucsdet` is replaced by `chardetng` (the statistical detector paired
//! with `encoding_rs` in Firefox); `chardetng` has no numeric confidence
//! API, so a confidence percentage is derived here by re-decoding the
//! detection window with the guessed encoding and scoring the
//! replacement-character ratio, keeping the **39%** threshold a literal,
//! checkable constant exactly as the original specifies it.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Minimum confidence for a statistical match, in percent (`spec.md`
/// §4.2). Below this, detection falls back to the configured/default
/// encoding.
pub const MIN_CONFIDENCE: u8 = 39;

/// Maximum prefix length inspected for both BOM sniffing and statistical
/// detection (`spec.md` §4.2).
pub const MAX_DETECTION_WINDOW: usize = 4096;

#[derive(Debug, Clone, Copy)]
pub struct Detected {
    pub encoding: &'static Encoding,
    pub signature_len: usize,
    /// `true` when the encoding came from a recognized BOM rather than
    /// statistical guessing or a fallback.
    pub from_signature: bool,
}

/// Literal signatures this crate can *recognize* but for which no
/// `encoding_rs` decoder exists (SCSU, UTF-7, UTF-EBCDIC). Recognizing
/// them lets `signature_len` still skip the right number of bytes; the
/// bytes that follow are then handed to statistical detection /
/// configured-encoding fallback, since there is no decoder to use them
/// with (`spec.md` §9, decided as an Open Question in `DESIGN.md`).
const UNSUPPORTED_SIGNATURES: &[(&[u8], &str)] = &[
    (&[0x0E, 0xFE, 0xFF], "SCSU"),
    (&[0x2B, 0x2F, 0x76], "UTF-7"),
    (&[0xDD, 0x73, 0x66, 0x73], "UTF-EBCDIC"),
];

fn sniff_unsupported_signature(bytes: &[u8]) -> Option<(&'static str, usize)> {
    for &(sig, name) in UNSUPPORTED_SIGNATURES {
        if bytes.starts_with(sig) {
            return Some((name, sig.len()));
        }
    }
    None
}

/// `spec.md` §4.2 step 1-4: inspect for a BOM, fall back to statistical
/// detection above `MIN_CONFIDENCE`, fall back to `configured` if given,
/// fall back to `default_encoding` otherwise.
pub fn detect(
    prefix: &[u8],
    configured_inputs: Option<&'static Encoding>,
    default_encoding: &'static Encoding,
) -> Detected {
    let window = &prefix[..prefix.len().min(MAX_DETECTION_WINDOW)];

    if let Some((enc, bom_len)) = Encoding::for_bom(window) {
        return Detected { encoding: enc, signature_len: bom_len, from_signature: true };
    }

    let mut signature_len = 0;
    let rest = if let Some((name, len)) = sniff_unsupported_signature(window) {
        log::warn!(
            "recognized {name} signature but no decoder is available; \
             falling back to statistical detection"
        );
        signature_len = len;
        &window[len..]
    } else {
        window
    };

    let (guess, confidence) = guess_with_confidence(rest);
    if confidence >= MIN_CONFIDENCE {
        return Detected { encoding: guess, signature_len, from_signature: false };
    }

    let fallback = configured_inputs.unwrap_or(default_encoding);
    Detected { encoding: fallback, signature_len, from_signature: false }
}

fn guess_with_confidence(window: &[u8]) -> (&'static Encoding, u8) {
    if window.is_empty() {
        return (encoding_rs::UTF_8, 100);
    }
    let mut detector = EncodingDetector::new();
    detector.feed(window, true);
    let guess = detector.guess(None, true);
    let (decoded, _actual_encoding, had_errors) = guess.decode(window);
    if !had_errors {
        return (guess, 100);
    }
    let total = decoded.chars().count().max(1);
    let bad = decoded.chars().filter(|&c| c == '\u{FFFD}').count();
    (guess, confidence_from_counts(total, bad))
}

/// Pure percentage arithmetic, split out so it's testable independent of
/// whatever `chardetng` happens to guess for a given byte window.
fn confidence_from_counts(total: usize, bad: usize) -> u8 {
    (((total.saturating_sub(bad)) * 100) / total.max(1)) as u8
}
