//! A pluggable literal/regex match engine abstraction over the reader's
//! decoded text.
//!
//! Ported from the `engine_t` vtable in `engine.h` / `literal_engine.c`
//! / `regex_engine.c`. Per `spec.md` §9's design note ("Engine as a
//! dispatch table... an `Engine` enum with variants `Literal{…}`,
//! `Regex{…}` is preferable to a vtable"), `Engine` here is a tagged
//! union rather than a trait object; both variants support the same
//! operation set.

mod error;
mod flags;
mod literal;
mod regex_engine;
mod util;

pub use error::{EngineResult, MatchError, Result};
pub use flags::MatchFlags;
pub use intervals::IntervalList;
pub use literal::LiteralPattern;
pub use regex_engine::RegexPattern;

/// A compiled pattern, tagged by which engine backs it (`spec.md` §3,
/// `PatternData`).
pub enum Engine {
    Literal(LiteralPattern),
    Regex(RegexPattern),
}

impl Engine {
    pub fn compile_literal(pattern: &str, flags: MatchFlags) -> Result<Self> {
        Ok(Engine::Literal(LiteralPattern::compile(pattern, flags)?))
    }

    pub fn compile_regex(pattern: &str, flags: MatchFlags) -> Result<Self> {
        Ok(Engine::Regex(RegexPattern::compile(pattern, flags)?))
    }

    pub fn flags(&self) -> MatchFlags {
        match self {
            Engine::Literal(p) => p.flags(),
            Engine::Regex(p) => p.flags(),
        }
    }

    pub fn matches(&self, subject: &str) -> Result<EngineResult> {
        match self {
            Engine::Literal(p) => p.matches(subject),
            Engine::Regex(p) => p.matches(subject),
        }
    }

    pub fn match_all(&self, subject: &str, out: &mut IntervalList) -> Result<EngineResult> {
        match self {
            Engine::Literal(p) => p.match_all(subject, out),
            Engine::Regex(p) => p.match_all(subject, out),
        }
    }

    pub fn whole_line_match(&self, subject: &str) -> Result<EngineResult> {
        match self {
            Engine::Literal(p) => p.whole_line_match(subject),
            Engine::Regex(p) => p.whole_line_match(subject),
        }
    }

    pub fn split(&self, subject: &str, selector: Option<&IntervalList>) -> Result<Vec<String>> {
        match self {
            Engine::Literal(p) => p.split(subject, selector),
            Engine::Regex(p) => p.split(subject, selector),
        }
    }
}

// `destroy` from `spec.md` §3's engine contract has no Rust analogue:
// `Engine`'s `Drop` impl (derived transitively from its fields) frees
// everything when the pattern goes out of scope.

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn engine_dispatches_to_literal() {
        let e = Engine::compile_literal("abc", MatchFlags::default()).unwrap();
        assert_eq!(e.matches("xabcx").unwrap(), EngineResult::MatchFound);
    }

    #[test]
    fn engine_dispatches_to_regex() {
        let e = Engine::compile_regex(r"a.c", MatchFlags::default()).unwrap();
        assert_eq!(e.matches("xabcx").unwrap(), EngineResult::MatchFound);
    }
}
