//! `spec.md` §3/§4.8: flags universal to both engines.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchFlags {
    pub case_insensitive: bool,
    pub word_bounded: bool,
    pub whole_line: bool,
}

impl MatchFlags {
    pub fn new(case_insensitive: bool, word_bounded: bool, whole_line: bool) -> Self {
        // "Whole-line plus word-bounded collapses to whole-line."
        let word_bounded = word_bounded && !whole_line;
        MatchFlags { case_insensitive, word_bounded, whole_line }
    }

    /// Literal engine only: a case-insensitive, non-whole-line compare is
    /// backed by a full case fold, which changes string length (e.g.
    /// German "ß" → "ss") and therefore cannot report positions that
    /// correspond to subject offsets (`spec.md` §4.8.1, §4.9).
    pub(crate) fn uses_folded_positions(self) -> bool {
        self.case_insensitive && !self.whole_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_line_absorbs_word_bounded() {
        let f = MatchFlags::new(false, true, true);
        assert!(f.whole_line);
        assert!(!f.word_bounded);
    }
}
