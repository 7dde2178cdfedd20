//! `spec.md` §4.8.1: compile a literal pattern; match/match-all/
//! whole-line/split with case-folding, word-bound, and whole-line
//! options.
//!
//! The original binds a collation-aware string-search handle (ICU
//! `usearch`) whenever word-bounded or non-whole-line case-insensitive
//! matching is requested. Here that split is: word-boundary filtering
//! is done directly against `unicode-segmentation`'s break iterator on
//! top of a plain byte search (`memchr::memmem`), and non-whole-line
//! case-insensitive matching is done by fully case-folding both pattern
//! and subject (`ustr::UString::fullcase`) and testing containment —
//! which is exactly why, per §4.9, that path can only answer
//! existence, not positions.

use memchr::memmem;
use ustr::{CaseKind, UString};

use crate::error::{EngineResult, MatchError, Result};
use crate::flags::MatchFlags;
use crate::util::{byte_to_char_idx, char_len, has_non_word_break, word_boundaries};
use intervals::IntervalList;

pub struct LiteralPattern {
    pattern: String,
    flags: MatchFlags,
    folded_pattern: Option<String>,
}

impl LiteralPattern {
    pub fn compile(pattern: &str, flags: MatchFlags) -> Result<Self> {
        let folded_pattern = if flags.uses_folded_positions() || (flags.whole_line && flags.case_insensitive) {
            Some(fold(pattern))
        } else {
            None
        };
        Ok(LiteralPattern { pattern: pattern.to_string(), flags, folded_pattern })
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn flags(&self) -> MatchFlags {
        self.flags
    }

    pub fn matches(&self, subject: &str) -> Result<EngineResult> {
        if self.flags.whole_line {
            return self.whole_line_match(subject);
        }
        if self.pattern.is_empty() {
            return Ok(empty_pattern_result(self.flags, subject));
        }
        if self.flags.uses_folded_positions() {
            let folded_subject = fold(subject);
            let needle = self.folded_pattern.as_deref().unwrap_or(&self.pattern);
            return Ok(contains(&folded_subject, needle));
        }
        for (start, end) in self.byte_ranges(subject) {
            if self.boundary_ok(subject, start, end) {
                return Ok(EngineResult::MatchFound);
            }
        }
        Ok(EngineResult::NoMatch)
    }

    pub fn match_all(&self, subject: &str, out: &mut IntervalList) -> Result<EngineResult> {
        if self.flags.uses_folded_positions() {
            return Err(MatchError::FoldedOffsetsAmbiguous);
        }
        if self.pattern.is_empty() {
            return Ok(empty_pattern_result(self.flags, subject));
        }
        let max_upper = char_len(subject);
        let mut any = false;
        for (start, end) in self.byte_ranges(subject) {
            if !self.boundary_ok(subject, start, end) {
                continue;
            }
            any = true;
            let l = byte_to_char_idx(subject, start);
            let u = byte_to_char_idx(subject, end);
            if out.add(max_upper, l, u) {
                return Ok(EngineResult::WholeLineMatch);
            }
        }
        Ok(if any { EngineResult::MatchFound } else { EngineResult::NoMatch })
    }

    pub fn whole_line_match(&self, subject: &str) -> Result<EngineResult> {
        let matched = if self.flags.case_insensitive {
            let folded_pattern = self.folded_pattern.as_deref().unwrap_or(&self.pattern);
            fold(subject) == folded_pattern
        } else {
            subject == self.pattern
        };
        Ok(if matched { EngineResult::WholeLineMatch } else { EngineResult::NoMatch })
    }

    pub fn split(&self, subject: &str, selector: Option<&IntervalList>) -> Result<Vec<String>> {
        if self.flags.uses_folded_positions() {
            return Err(MatchError::FoldedOffsetsAmbiguous);
        }
        let mut fields = Vec::new();
        if self.pattern.is_empty() {
            fields.push(subject.to_string());
        } else {
            let mut last = 0usize;
            for (start, end) in self.byte_ranges(subject) {
                if !self.boundary_ok(subject, start, end) {
                    continue;
                }
                fields.push(subject[last..start].to_string());
                last = end;
            }
            fields.push(subject[last..].to_string());
        }

        Ok(match selector {
            None => fields,
            Some(sel) => fields
                .into_iter()
                .enumerate()
                .filter(|(i, _)| sel.contains(*i as i64))
                .map(|(_, f)| f)
                .collect(),
        })
    }

    fn byte_ranges<'s>(&self, subject: &'s str) -> impl Iterator<Item = (usize, usize)> + 's {
        let plen = self.pattern.len();
        memmem::find_iter(subject.as_bytes(), self.pattern.as_bytes()).map(move |s| (s, s + plen))
    }

    fn boundary_ok(&self, subject: &str, start: usize, end: usize) -> bool {
        if !self.flags.word_bounded {
            return true;
        }
        let boundaries = word_boundaries(subject);
        boundaries.contains(&start) && boundaries.contains(&end)
    }
}

fn empty_pattern_result(flags: MatchFlags, subject: &str) -> EngineResult {
    if flags.word_bounded {
        if has_non_word_break(subject) {
            EngineResult::MatchFound
        } else {
            EngineResult::NoMatch
        }
    } else {
        EngineResult::MatchFound
    }
}

fn contains(haystack: &str, needle: &str) -> EngineResult {
    if needle.is_empty() || haystack.contains(needle) {
        EngineResult::MatchFound
    } else {
        EngineResult::NoMatch
    }
}

fn fold(s: &str) -> String {
    let mut out = UString::new();
    out.fullcase(s, CaseKind::Fold, false);
    out.into_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_match_all_two_intervals() {
        let p = LiteralPattern::compile("abc", MatchFlags::default()).unwrap();
        let mut intervals = IntervalList::new();
        let result = p.match_all("xabcxabcx", &mut intervals).unwrap();
        assert_eq!(result, EngineResult::MatchFound);
        let spans: Vec<(i64, i64)> = intervals.iter().map(|i| (i.lower, i.upper)).collect();
        assert_eq!(spans, vec![(1, 4), (5, 8)]);
    }

    #[test]
    fn empty_pattern_word_bounded_hello_world() {
        let flags = MatchFlags::new(false, true, false);
        let p = LiteralPattern::compile("", flags).unwrap();
        assert_eq!(p.matches("hello world").unwrap(), EngineResult::MatchFound);
        assert_eq!(p.matches("").unwrap(), EngineResult::MatchFound);
    }

    #[test]
    fn empty_pattern_word_bounded_single_word_has_no_break() {
        let flags = MatchFlags::new(false, true, false);
        let p = LiteralPattern::compile("", flags).unwrap();
        assert_eq!(p.matches("helloworld").unwrap(), EngineResult::NoMatch);
    }

    #[test]
    fn case_insensitive_match_succeeds_but_match_all_fails() {
        let flags = MatchFlags::new(true, false, false);
        let p = LiteralPattern::compile("StraSse", flags).unwrap();
        assert_eq!(p.matches("a Straße inn").unwrap(), EngineResult::MatchFound);
        let mut intervals = IntervalList::new();
        assert!(matches!(
            p.match_all("a Straße inn", &mut intervals),
            Err(MatchError::FoldedOffsetsAmbiguous)
        ));
    }

    #[test]
    fn whole_line_match_equivalent_to_match() {
        let flags = MatchFlags::new(false, false, true);
        let p = LiteralPattern::compile("hello", flags).unwrap();
        assert_eq!(p.matches("hello").unwrap(), EngineResult::WholeLineMatch);
        assert_eq!(p.whole_line_match("hello").unwrap(), EngineResult::WholeLineMatch);
        assert_eq!(p.matches("hello!").unwrap(), EngineResult::NoMatch);
    }

    #[test]
    fn split_on_literal_delimiter() {
        let p = LiteralPattern::compile(",", MatchFlags::default()).unwrap();
        let fields = p.split("a,b,c", None).unwrap();
        assert_eq!(fields, vec!["a", "b", "c"]);
    }

    #[test]
    fn split_with_field_selector() {
        let p = LiteralPattern::compile(",", MatchFlags::default()).unwrap();
        let mut sel = IntervalList::new();
        sel.add(i64::MAX, 0, 1);
        let fields = p.split("a,b,c", Some(&sel)).unwrap();
        assert_eq!(fields, vec!["a"]);
    }
}
