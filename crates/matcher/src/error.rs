//! `spec.md` §4.8/§4.9: every engine operation returns one of four
//! values, `failure` among them. Rust expresses `failure` as `Err`
//! instead of a fourth enum variant — `EngineResult` only ever carries
//! the three success states.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineResult {
    NoMatch,
    MatchFound,
    /// Returned by `match_all`/`match` when the accumulated match
    /// intervals have saturated to the whole subject, or when a
    /// whole-line comparison succeeds.
    WholeLineMatch,
}

#[derive(Debug, thiserror::Error)]
pub enum MatchError {
    #[error("invalid pattern: {0}")]
    Compile(String),

    /// §4.9: match_all/split on a pattern whose case-insensitive
    /// matching is backed by full case folding, where reported offsets
    /// would no longer correspond to subject offsets.
    #[error(
        "case-insensitive match_all/split is not supported under full case \
         folding: offsets in the folded pattern would not correspond to \
         offsets in the subject"
    )]
    FoldedOffsetsAmbiguous,
}

pub type Result<T> = std::result::Result<T, MatchError>;
