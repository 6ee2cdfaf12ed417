// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Match criteria: a single unit, a set of units, or a predicate.
//!
//! Searching and trimming accept any of the three shapes. A [`Criteria`] is
//! normalized once into a [`Matcher`] before scanning begins, and the matcher
//! answers one question per unit with no further state.
//!
//! Conversions inspect the shape the way callers tend to write it: a bare unit
//! or a one-unit slice matches by equality, a longer slice matches by
//! membership.
//!
//! ```
//! use sliver::criteria::{Criteria, Matcher};
//!
//! let vowels = Matcher::new(Criteria::<u8>::from(b"aeiou"));
//! assert!(vowels.matches(b'e'));
//! assert!(!vowels.matches(b'x'));
//!
//! let is_digit = |c: u8| c.is_ascii_digit();
//! let digits = Matcher::new(Criteria::Predicate(&is_digit));
//! assert!(digits.matches(b'7'));
//! ```

use std::fmt;

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::unit::CodeUnit;

/// Sets with more distinct members than this are hashed instead of searched.
pub const HASH_THRESHOLD: usize = 16;

/// What a unit must look like to match.
#[derive(Clone, Copy)]
pub enum Criteria<'a, T> {
    /// Matches units equal to this one.
    Unit(T),
    /// Matches units that occur anywhere in the set. An empty set matches
    /// nothing.
    Set(&'a [T]),
    /// Matches units the predicate accepts.
    Predicate(&'a dyn Fn(T) -> bool),
}

impl<'a, T: CodeUnit> Criteria<'a, T> {
    /// The default trim set: space, newline and carriage return.
    pub fn whitespace() -> Criteria<'a, T> {
        return Criteria::Set(T::whitespace());
    }
}

impl<T: fmt::Debug> fmt::Debug for Criteria<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            Criteria::Unit(unit) => f.debug_tuple("Unit").field(unit).finish(),
            Criteria::Set(set) => f.debug_tuple("Set").field(set).finish(),
            Criteria::Predicate(_) => f.write_str("Predicate(..)"),
        };
    }
}

impl<'a, T: CodeUnit> From<T> for Criteria<'a, T> {
    fn from(unit: T) -> Criteria<'a, T> {
        return Criteria::Unit(unit);
    }
}

impl<'a, T: CodeUnit> From<&'a [T]> for Criteria<'a, T> {
    fn from(set: &'a [T]) -> Criteria<'a, T> {
        return match set {
            [unit] => Criteria::Unit(*unit),
            _ => Criteria::Set(set),
        };
    }
}

impl<'a, T: CodeUnit, const N: usize> From<&'a [T; N]> for Criteria<'a, T> {
    fn from(set: &'a [T; N]) -> Criteria<'a, T> {
        return Criteria::from(&set[..]);
    }
}

impl<'a, T: CodeUnit> From<&'a Vec<T>> for Criteria<'a, T> {
    fn from(set: &'a Vec<T>) -> Criteria<'a, T> {
        return Criteria::from(set.as_slice());
    }
}

/// How a matcher answers.
enum Probe<'a, T> {
    Unit(T),
    /// Sorted, deduplicated members.
    Sorted(SmallVec<[T; HASH_THRESHOLD]>),
    Hashed(FxHashSet<T>),
    Predicate(&'a dyn Fn(T) -> bool),
}

/// A normalized, stateless predicate over one unit.
pub struct Matcher<'a, T> {
    probe: Probe<'a, T>,
}

impl<'a, T: CodeUnit> Matcher<'a, T> {
    /// Normalize criteria into a matcher.
    pub fn new(criteria: Criteria<'a, T>) -> Matcher<'a, T> {
        let probe = match criteria {
            Criteria::Unit(unit) => Probe::Unit(unit),
            Criteria::Set([unit]) => Probe::Unit(*unit),
            Criteria::Set(set) => {
                let mut members: SmallVec<[T; HASH_THRESHOLD]> = SmallVec::from_slice(set);
                members.sort_unstable();
                members.dedup();
                if members.len() > HASH_THRESHOLD {
                    log::trace!("hashing criteria set of {} units", members.len());
                    Probe::Hashed(members.into_iter().collect())
                } else {
                    Probe::Sorted(members)
                }
            }
            Criteria::Predicate(predicate) => Probe::Predicate(predicate),
        };
        return Matcher { probe };
    }

    /// Does `unit` satisfy the criteria?
    #[inline]
    pub fn matches(&self, unit: T) -> bool {
        return match &self.probe {
            Probe::Unit(expected) => unit == *expected,
            Probe::Sorted(members) => members.binary_search(&unit).is_ok(),
            Probe::Hashed(members) => members.contains(&unit),
            Probe::Predicate(predicate) => predicate(unit),
        };
    }
}

impl<'a, T: CodeUnit> From<Criteria<'a, T>> for Matcher<'a, T> {
    fn from(criteria: Criteria<'a, T>) -> Matcher<'a, T> {
        return Matcher::new(criteria);
    }
}
