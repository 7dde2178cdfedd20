//! Parser for cut/grep-style comma-separated interval specs: `N`, `N-`,
//! `-N`, and `N-M`, each resolved against a caller-supplied 0/1-based
//! `base` offset (cut's fields are 1-based, grep's byte offsets are
//! 0-based).
//!
//! The `base` arithmetic below follows `spec.md` §4.7's bracket notation
//! literally: `N` -> `[N, N+base)`, `N-` -> `[N, i32::MAX)`, `-N` ->
//! `[max(0, 1-base), N+base)`, `N-M` -> `[N, M+base)`. Checked against the
//! worked scenarios in `spec.md` §8 (all given with `base = 0`, where
//! `N-M` collapses to the literal `[N, M)` the table expects) and against
//! the two practical callers: with `base = 1` a bare `cut -f 2-4` becomes
//! `[2, 5)`, correctly containing the 1-based field counters 2, 3, 4.

use thiserror::Error;

use crate::IntervalList;

/// INT32_MAX, the open-right upper bound `spec.md` §4.7 names explicitly.
const OPEN_RIGHT_BOUND: i64 = i32::MAX as i64;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("number expected at {0:?}")]
    NumberExpected(String),
    #[error("number out of range: {0}")]
    OutOfRange(String),
    #[error("non-digit character found in {0:?}")]
    NonDigitFound(String),
    #[error("invalid range: lower bound {0} is greater than upper bound {1}")]
    InvalidRange(i64, i64),
}

fn parse_num(s: &str) -> Result<i64, ParseError> {
    if s.is_empty() {
        return Err(ParseError::NumberExpected(s.to_owned()));
    }
    if s.chars().any(|c| !c.is_ascii_digit()) {
        return Err(ParseError::NonDigitFound(s.to_owned()));
    }
    s.parse::<i64>().map_err(|_| ParseError::OutOfRange(s.to_owned()))
}

/// Parse a comma-separated spec string into an `IntervalList`, merging
/// every piece via `IntervalList::add`.
pub fn parse(
    spec: &str,
    base: i64,
    max_upper: i64,
) -> Result<IntervalList, ParseError> {
    let mut list = IntervalList::new();
    for piece in spec.split(',') {
        let piece = piece.trim();
        if piece.is_empty() {
            continue;
        }
        let (lower, upper) = parse_piece(piece, base)?;
        if lower >= upper {
            return Err(ParseError::InvalidRange(lower, upper));
        }
        list.add(max_upper, lower, upper);
    }
    Ok(list)
}

fn parse_piece(piece: &str, base: i64) -> Result<(i64, i64), ParseError> {
    if let Some(rest) = piece.strip_prefix('-') {
        // -N: open left.
        let n = parse_num(rest)?;
        let lower = (1 - base).max(0);
        return Ok((lower, n + base));
    }
    if let Some(rest) = piece.strip_suffix('-') {
        // N-: open right.
        let n = parse_num(rest)?;
        return Ok((n, OPEN_RIGHT_BOUND));
    }
    if let Some(dash) = piece.find('-') {
        // N-M: closed range.
        let (lo, hi) = piece.split_at(dash);
        let hi = &hi[1..];
        let n = parse_num(lo)?;
        let m = parse_num(hi)?;
        if n > m {
            return Err(ParseError::InvalidRange(n, m));
        }
        return Ok((n, m + base));
    }
    // N: single value.
    let n = parse_num(piece)?;
    Ok((n, n + base.max(1)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(list: &IntervalList) -> Vec<(i64, i64)> {
        list.iter().map(|iv| (iv.lower, iv.upper)).collect()
    }

    #[test]
    fn zero_based_ranges_pass_through() {
        let list = parse("0-100,200-300", 0, i64::MAX).unwrap();
        assert_eq!(pairs(&list), vec![(0, 100), (200, 300)]);
    }

    #[test]
    fn one_based_field_range_contains_all_named_fields() {
        let list = parse("2-4", 1, i64::MAX).unwrap();
        assert_eq!(pairs(&list), vec![(2, 5)]);
        assert!(list.contains(2) && list.contains(3) && list.contains(4));
        assert!(!list.contains(1) && !list.contains(5));
    }

    #[test]
    fn single_one_based_field() {
        let list = parse("3", 1, i64::MAX).unwrap();
        assert!(list.contains(3));
        assert!(!list.contains(2) && !list.contains(4));
    }

    #[test]
    fn open_right() {
        let list = parse("5-", 1, i64::MAX).unwrap();
        assert!(list.contains(5) && list.contains(1_000_000));
        assert!(!list.contains(4));
    }

    #[test]
    fn open_left_clamped_at_zero() {
        let list = parse("-3", 1, i64::MAX).unwrap();
        assert!(list.contains(1) && list.contains(3));
        assert!(!list.contains(4));
    }

    #[test]
    fn rejects_non_digit() {
        assert!(matches!(
            parse_piece("3x", 1),
            Err(ParseError::NonDigitFound(_))
        ));
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            parse_piece("5-2", 1),
            Err(ParseError::InvalidRange(5, 2))
        ));
    }
}
