//! Integration tests for the chain-pattern grammar

use natools_gen::{ChainPattern, PdgMatcher};
use rstest::rstest;

#[rstest]
#[case("6", vec![PdgMatcher::Single(6)])]
#[case("5>24>6", vec![
    PdgMatcher::Single(5),
    PdgMatcher::Single(24),
    PdgMatcher::Single(6),
])]
#[case("1,3,5>23", vec![
    PdgMatcher::List(vec![1, 3, 5]),
    PdgMatcher::Single(23),
])]
#[case("1:5>24", vec![
    PdgMatcher::Range(1, 5),
    PdgMatcher::Single(24),
])]
#[case(" 5 > 24 ", vec![
    PdgMatcher::Single(5),
    PdgMatcher::Single(24),
])]
fn accepts_valid_patterns(#[case] pattern: &str, #[case] expected: Vec<PdgMatcher>) {
    let parsed = ChainPattern::parse(pattern).unwrap();
    assert_eq!(parsed.matchers(), expected.as_slice());
}

#[rstest]
#[case("")] // nothing to match
#[case("t>W")] // names, not PDG IDs
#[case("5>")] // dangling separator
#[case(">5")] // leading separator
#[case("5>>6")] // empty step
#[case("1;5>24")] // wrong list separator
#[case("5>24x")] // trailing garbage
#[case("-24")] // matchers compare |pdgId|, signs are meaningless
fn rejects_malformed_patterns(#[case] pattern: &str) {
    assert!(ChainPattern::parse(pattern).is_err());
}

#[rstest]
#[case(PdgMatcher::Single(24), 24, true)]
#[case(PdgMatcher::Single(24), -24, true)]
#[case(PdgMatcher::Single(24), 23, false)]
#[case(PdgMatcher::List(vec![1, 3, 5]), -3, true)]
#[case(PdgMatcher::List(vec![1, 3, 5]), 4, false)]
#[case(PdgMatcher::Range(1, 5), 1, true)]
#[case(PdgMatcher::Range(1, 5), -5, true)]
#[case(PdgMatcher::Range(1, 5), 6, false)]
fn matcher_semantics(#[case] matcher: PdgMatcher, #[case] pdg_id: i32, #[case] expected: bool) {
    assert_eq!(matcher.matches(pdg_id), expected);
}
