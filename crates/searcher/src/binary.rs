//! Binary classification: scan up to 1024 decoded code points and decide
//! whether a source looks like text or binary data (`spec.md` §4.5).
//!
//! Ported from the `looksBinary` scan in `reader.c`. The original tested
//! each UTF-16 code unit against `u_isprint`/`u_isspace`/backspace; here
//! `char::is_control` is the `ustr::UString::dump` crate's own
//! approximation of `u_isprint`, kept consistent between the two call
//! sites.

/// How many decoded code points the classifier inspects before giving up
/// and calling a file text (`spec.md` §4.5).
pub const CLASSIFICATION_WINDOW: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Text,
    Binary,
}

/// `scratch` is the decoded text already staged (may be longer than the
/// classification window); `more_follows` is `true` when the underlying
/// source has more bytes beyond what's in `scratch`.
pub fn classify(scratch: &str, more_follows: bool) -> Classification {
    let mut scanned = 0usize;
    for c in scratch.chars() {
        if scanned >= CLASSIFICATION_WINDOW {
            // Filled the window and the source keeps going: the original
            // treats a full, non-terminating window as binary-looking.
            if more_follows {
                return Classification::Binary;
            }
            break;
        }
        if looks_binary(c) {
            return Classification::Binary;
        }
        scanned += 1;
    }
    Classification::Text
}

fn looks_binary(c: char) -> bool {
    match c {
        '\u{8}' => false, // backspace: printable in the original's sense, used by some pagers
        '\t' | '\n' | '\r' | '\u{B}' | '\u{C}' => false,
        c if c.is_whitespace() => false,
        c if c.is_control() => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_text() {
        assert_eq!(classify("hello\nworld\n", false), Classification::Text);
    }

    #[test]
    fn embedded_nul_is_binary() {
        assert_eq!(classify("hello\u{0}world", false), Classification::Binary);
    }

    #[test]
    fn full_window_without_end_is_binary() {
        let scratch: String = std::iter::repeat('a').take(CLASSIFICATION_WINDOW).collect();
        assert_eq!(classify(&scratch, true), Classification::Binary);
    }

    #[test]
    fn full_window_at_true_end_is_text() {
        let scratch: String = std::iter::repeat('a').take(CLASSIFICATION_WINDOW).collect();
        assert_eq!(classify(&scratch, false), Classification::Text);
    }

    #[test]
    fn tabs_and_crlf_are_not_binary() {
        assert_eq!(classify("a\tb\r\nc", false), Classification::Text);
    }
}
