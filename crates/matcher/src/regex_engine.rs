//! `spec.md` §4.8.2: same contract as the literal engine, backed by an
//! external regex library. Ported from the ICU `uregex`-based engine;
//! here the `regex` crate plays the role of the "external regex
//! library", and since it resolves Unicode case-insensitivity inside
//! the compiled program itself (rather than by pre-folding the
//! subject), match positions stay correct even under `case_insensitive`
//! — the offset-ambiguity restriction in §4.9 is a literal-engine-only
//! concern (see `literal.rs`).

use regex::{Regex, RegexBuilder};

use crate::error::{EngineResult, MatchError, Result};
use crate::flags::MatchFlags;
use crate::util::{byte_to_char_idx, char_len};
use intervals::IntervalList;

pub struct RegexPattern {
    regex: Regex,
    anchored: Regex,
    flags: MatchFlags,
}

impl RegexPattern {
    pub fn compile(pattern: &str, flags: MatchFlags) -> Result<Self> {
        let regex = RegexBuilder::new(pattern)
            .case_insensitive(flags.case_insensitive)
            .build()
            .map_err(|e| MatchError::Compile(e.to_string()))?;
        let anchored = RegexBuilder::new(&format!("^(?:{pattern})$"))
            .case_insensitive(flags.case_insensitive)
            .build()
            .map_err(|e| MatchError::Compile(e.to_string()))?;
        Ok(RegexPattern { regex, anchored, flags })
    }

    pub fn flags(&self) -> MatchFlags {
        self.flags
    }

    pub fn matches(&self, subject: &str) -> Result<EngineResult> {
        if self.flags.whole_line {
            return self.whole_line_match(subject);
        }
        Ok(if self.regex.is_match(subject) {
            EngineResult::MatchFound
        } else {
            EngineResult::NoMatch
        })
    }

    pub fn match_all(&self, subject: &str, out: &mut IntervalList) -> Result<EngineResult> {
        let max_upper = char_len(subject);
        let mut any = false;
        for m in self.regex.find_iter(subject) {
            any = true;
            let l = byte_to_char_idx(subject, m.start());
            let u = byte_to_char_idx(subject, m.end());
            if out.add(max_upper, l, u) {
                return Ok(EngineResult::WholeLineMatch);
            }
        }
        Ok(if any { EngineResult::MatchFound } else { EngineResult::NoMatch })
    }

    pub fn whole_line_match(&self, subject: &str) -> Result<EngineResult> {
        Ok(if self.anchored.is_match(subject) {
            EngineResult::WholeLineMatch
        } else {
            EngineResult::NoMatch
        })
    }

    pub fn split(&self, subject: &str, selector: Option<&IntervalList>) -> Result<Vec<String>> {
        let fields: Vec<String> = self.regex.split(subject).map(|s| s.to_string()).collect();
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
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regex_match_all_two_intervals() {
        let p = RegexPattern::compile("abc", MatchFlags::default()).unwrap();
        let mut intervals = IntervalList::new();
        p.match_all("xabcxabcx", &mut intervals).unwrap();
        let spans: Vec<(i64, i64)> = intervals.iter().map(|i| (i.lower, i.upper)).collect();
        assert_eq!(spans, vec![(1, 4), (5, 8)]);
    }

    #[test]
    fn case_insensitive_match_all_keeps_correct_offsets() {
        let flags = MatchFlags::new(true, false, false);
        let p = RegexPattern::compile("ABC", flags).unwrap();
        let mut intervals = IntervalList::new();
        let result = p.match_all("xabcx", &mut intervals).unwrap();
        assert_eq!(result, EngineResult::MatchFound);
        let spans: Vec<(i64, i64)> = intervals.iter().map(|i| (i.lower, i.upper)).collect();
        assert_eq!(spans, vec![(1, 4)]);
    }

    #[test]
    fn whole_line_match_requires_full_span() {
        let p = RegexPattern::compile(r"\d+", MatchFlags::default()).unwrap();
        assert_eq!(p.whole_line_match("123").unwrap(), EngineResult::WholeLineMatch);
        assert_eq!(p.whole_line_match("a123").unwrap(), EngineResult::NoMatch);
    }

    #[test]
    fn whole_line_match_ignores_leftmost_first_bias() {
        let p = RegexPattern::compile("a|aa", MatchFlags::default()).unwrap();
        assert_eq!(p.whole_line_match("aa").unwrap(), EngineResult::WholeLineMatch);
        assert_eq!(p.whole_line_match("a").unwrap(), EngineResult::WholeLineMatch);
        assert_eq!(p.whole_line_match("aaa").unwrap(), EngineResult::NoMatch);
    }

    #[test]
    fn invalid_pattern_reports_compile_error() {
        let err = RegexPattern::compile("(unclosed", MatchFlags::default()).unwrap_err();
        assert!(matches!(err, MatchError::Compile(_)));
    }

    #[test]
    fn split_respects_selector() {
        let p = RegexPattern::compile(",", MatchFlags::default()).unwrap();
        let mut sel = IntervalList::new();
        sel.add(i64::MAX, 1, 2);
        let fields = p.split("a,b,c", Some(&sel)).unwrap();
        assert_eq!(fields, vec!["b"]);
    }
}
