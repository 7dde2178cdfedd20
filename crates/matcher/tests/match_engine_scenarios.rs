//! The three match-engine scenarios enumerated end-to-end, rather than
//! unit-by-unit, to demonstrate the `Engine` dispatch wrapper itself.

use matcher::{Engine, EngineResult, IntervalList, MatchFlags};

#[test]
fn scenario_1_two_literal_matches() {
    let e = Engine::compile_literal("abc", MatchFlags::default()).unwrap();
    let mut intervals = IntervalList::new();
    e.match_all("xabcxabcx", &mut intervals).unwrap();
    let spans: Vec<(i64, i64)> = intervals.iter().map(|i| (i.lower, i.upper)).collect();
    assert_eq!(spans, vec![(1, 4), (5, 8)]);
}

#[test]
fn scenario_2_empty_pattern_word_bound() {
    let flags = MatchFlags::new(false, true, false);
    let e = Engine::compile_literal("", flags).unwrap();
    assert_eq!(e.matches("hello world").unwrap(), EngineResult::MatchFound);
    assert_eq!(e.matches("").unwrap(), EngineResult::MatchFound);
}

#[test]
fn scenario_3_case_insensitive_full_fold() {
    let flags = MatchFlags::new(true, false, false);
    let e = Engine::compile_literal("StraSse", flags).unwrap();
    assert_eq!(e.matches("the Straße district").unwrap(), EngineResult::MatchFound);
    let mut intervals = IntervalList::new();
    assert!(e.match_all("the Straße district", &mut intervals).is_err());
}
