//! Decay-chain pattern parsing

// crate modules
use crate::error::{Error, Result};

// nom parser combinators
use nom::branch::alt;
use nom::character::complete::{char, digit1, space0};
use nom::combinator::{all_consuming, map, map_res};
use nom::multi::separated_list1;
use nom::sequence::{delimited, separated_pair};
use nom::IResult;

/// One step of a decay-chain pattern
///
/// Matchers always compare against `|pdg_id|`, so a single pattern
/// covers particle and antiparticle alike.
///
/// ```rust
/// # use natools_gen::PdgMatcher;
/// assert!(PdgMatcher::Single(24).matches(-24));
/// assert!(PdgMatcher::List(vec![1, 3, 5]).matches(5));
/// assert!(!PdgMatcher::List(vec![1, 3, 5]).matches(4));
///
/// // ranges are inclusive on both ends
/// assert!(PdgMatcher::Range(1, 5).matches(-5));
/// assert!(!PdgMatcher::Range(1, 5).matches(6));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PdgMatcher {
    /// Exact `|pdg_id|`
    Single(i32),
    /// Any of the listed `|pdg_id|` values
    List(Vec<i32>),
    /// Inclusive `|pdg_id|` range
    Range(i32, i32),
}

impl PdgMatcher {
    /// Test a signed PDG ID against the matcher
    pub fn matches(&self, pdg_id: i32) -> bool {
        let id = pdg_id.abs();
        match self {
            Self::Single(value) => id == *value,
            Self::List(values) => values.contains(&id),
            Self::Range(low, high) => (*low..=*high).contains(&id),
        }
    }
}

/// A parsed decay-chain pattern
///
/// The pattern string is a chain of matchers separated by `>`, written
/// descendant-first: `"5>24>6"` reads "a quark from a W from a top".
/// Each matcher is a PDG ID (`24`), a comma list (`1,3,5`), or an
/// inclusive colon range (`1:5`).
///
/// ```rust
/// # use natools_gen::{ChainPattern, PdgMatcher};
/// let pattern = ChainPattern::parse("1:5 > 24 > 6").unwrap();
///
/// assert_eq!(pattern.len(), 3);
/// assert_eq!(pattern.matchers()[0], PdgMatcher::Range(1, 5));
/// assert_eq!(pattern.matchers()[2], PdgMatcher::Single(6));
///
/// // anything non-numeric is rejected outright
/// assert!(ChainPattern::parse("top>W").is_err());
/// assert!(ChainPattern::parse("").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChainPattern {
    matchers: Vec<PdgMatcher>,
}

impl ChainPattern {
    /// Parse a pattern string
    ///
    /// Whitespace around tokens is tolerated. Empty patterns, non-numeric
    /// tokens, and trailing garbage are all [Error::Pattern].
    pub fn parse(pattern: &str) -> Result<Self> {
        let (_, matchers) =
            all_consuming(chain)(pattern).map_err(|_| Error::Pattern(pattern.to_string()))?;
        Ok(Self { matchers })
    }

    /// The matchers in written (descendant-first) order
    pub fn matchers(&self) -> &[PdgMatcher] {
        &self.matchers
    }

    /// Number of steps in the pattern
    pub fn len(&self) -> usize {
        self.matchers.len()
    }

    /// Check for a pattern with no steps
    ///
    /// Cannot occur through [ChainPattern::parse], which rejects empty
    /// input, but keeps clippy honest about `len`.
    pub fn is_empty(&self) -> bool {
        self.matchers.is_empty()
    }
}

// ! Parser combinators

/// Unsigned PDG ID
fn pdg_id(i: &str) -> IResult<&str, i32> {
    map_res(digit1, str::parse)(i)
}

/// Inclusive `low:high` range matcher
fn range(i: &str) -> IResult<&str, PdgMatcher> {
    map(separated_pair(pdg_id, char(':'), pdg_id), |(low, high)| {
        PdgMatcher::Range(low, high)
    })(i)
}

/// Single ID or comma-separated list matcher
fn ids(i: &str) -> IResult<&str, PdgMatcher> {
    map(separated_list1(char(','), pdg_id), |values| {
        if values.len() == 1 {
            PdgMatcher::Single(values[0])
        } else {
            PdgMatcher::List(values)
        }
    })(i)
}

/// Any matcher variant
fn matcher(i: &str) -> IResult<&str, PdgMatcher> {
    alt((range, ids))(i)
}

/// Full `>`-separated chain with optional spacing
fn chain(i: &str) -> IResult<&str, Vec<PdgMatcher>> {
    separated_list1(char('>'), delimited(space0, matcher, space0))(i)
}
