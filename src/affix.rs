// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Prefixes and suffixes.
//!
//! Lengths are counted in units within each window. `starts_with` and
//! `ends_with` accept either one candidate or several ([`Affixes`]) and hold
//! if any candidate does, stopping at the first that matches.

use smallvec::SmallVec;

use crate::bounds::Bounds;
use crate::error::Result;
use crate::unit::CodeUnit;

/// One or more candidate prefixes (or suffixes).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Affixes<'a, T> {
    candidates: SmallVec<[&'a [T]; 4]>,
}

impl<'a, T> Affixes<'a, T> {
    /// A single candidate.
    pub fn one(candidate: &'a [T]) -> Affixes<'a, T> {
        let mut candidates = SmallVec::new();
        candidates.push(candidate);
        return Affixes { candidates };
    }

    /// Any of several candidates.
    pub fn any<I, S>(candidates: I) -> Affixes<'a, T>
    where
        I: IntoIterator<Item = &'a S>,
        S: AsRef<[T]> + ?Sized + 'a,
    {
        let candidates = candidates.into_iter().map(|c| c.as_ref()).collect();
        return Affixes { candidates };
    }

    pub fn len(&self) -> usize {
        return self.candidates.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.candidates.is_empty();
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a [T]> + '_ {
        return self.candidates.iter().copied();
    }
}

impl<'a, T> From<&'a [T]> for Affixes<'a, T> {
    fn from(candidate: &'a [T]) -> Affixes<'a, T> {
        return Affixes::one(candidate);
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Affixes<'a, T> {
    fn from(candidate: &'a [T; N]) -> Affixes<'a, T> {
        return Affixes::one(candidate);
    }
}

impl<'a, T> From<&'a [&'a [T]]> for Affixes<'a, T> {
    fn from(candidates: &'a [&'a [T]]) -> Affixes<'a, T> {
        return Affixes { candidates: candidates.iter().copied().collect() };
    }
}

impl<'a, T> From<Vec<&'a [T]>> for Affixes<'a, T> {
    fn from(candidates: Vec<&'a [T]>) -> Affixes<'a, T> {
        return Affixes { candidates: SmallVec::from_vec(candidates) };
    }
}

// =============================================================================
// Window-level helpers
// =============================================================================

fn common_prefix<T: CodeUnit>(a: &[T], b: &[T], fold: fn(T) -> T) -> usize {
    return a.iter().zip(b).take_while(|(x, y)| fold(**x) == fold(**y)).count();
}

fn common_suffix<T: CodeUnit>(a: &[T], b: &[T], fold: fn(T) -> T) -> usize {
    return a.iter().rev().zip(b.iter().rev()).take_while(|(x, y)| fold(**x) == fold(**y)).count();
}

fn leads<T: CodeUnit>(prefix: &[T], whole: &[T], fold: fn(T) -> T) -> bool {
    return prefix.len() <= whole.len() && common_prefix(prefix, whole, fold) == prefix.len();
}

fn trails<T: CodeUnit>(suffix: &[T], whole: &[T], fold: fn(T) -> T) -> bool {
    return suffix.len() <= whole.len() && common_suffix(suffix, whole, fold) == suffix.len();
}

fn same<T>(unit: T) -> T {
    return unit;
}

/// Resolve both windows and hand their units to `f`.
fn windows<'s, T: CodeUnit, R>(
    s1: &'s [T],
    s2: &'s [T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
    f: impl FnOnce(&'s [T], &'s [T]) -> R,
) -> Result<R> {
    let first = b1.into().resolve(s1.len())?;
    let second = b2.into().resolve(s2.len())?;
    return Ok(f(first.slice(s1), second.slice(s2)));
}

// =============================================================================
// Lengths and containment
// =============================================================================

/// Number of leading units the two windows share.
///
/// ```
/// use sliver::affix::prefix_length;
///
/// assert_eq!(prefix_length(b"aabbb", b"aaccc", .., ..), Ok(2));
/// ```
pub fn prefix_length<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<usize> {
    return windows(s1, s2, b1, b2, |a, b| common_prefix(a, b, same));
}

/// Number of trailing units the two windows share.
pub fn suffix_length<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<usize> {
    return windows(s1, s2, b1, b2, |a, b| common_suffix(a, b, same));
}

pub fn prefix_length_ci<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<usize> {
    return windows(s1, s2, b1, b2, |a, b| common_prefix(a, b, T::fold_case));
}

pub fn suffix_length_ci<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<usize> {
    return windows(s1, s2, b1, b2, |a, b| common_suffix(a, b, T::fold_case));
}

/// Is the first window a prefix of the second?
pub fn is_prefix<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<bool> {
    return windows(s1, s2, b1, b2, |a, b| leads(a, b, same));
}

/// Is the first window a suffix of the second?
pub fn is_suffix<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<bool> {
    return windows(s1, s2, b1, b2, |a, b| trails(a, b, same));
}

pub fn is_prefix_ci<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<bool> {
    return windows(s1, s2, b1, b2, |a, b| leads(a, b, T::fold_case));
}

pub fn is_suffix_ci<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<bool> {
    return windows(s1, s2, b1, b2, |a, b| trails(a, b, T::fold_case));
}

// =============================================================================
// Candidate sets
// =============================================================================

fn any_affix<'a, T: CodeUnit>(
    seq: &[T],
    affixes: impl Into<Affixes<'a, T>>,
    bounds: impl Into<Bounds>,
    test: impl Fn(&[T], &[T]) -> bool,
) -> Result<bool> {
    let whole = bounds.into().resolve(seq.len())?.slice(seq);
    return Ok(affixes.into().iter().any(|candidate| test(candidate, whole)));
}

/// Does the window start with the candidate, or with any of the candidates?
///
/// ```
/// use sliver::affix::{starts_with, Affixes};
///
/// assert_eq!(starts_with(b"hello", b"he", ..), Ok(true));
/// assert_eq!(starts_with(b"hello", Affixes::any(&[b"we", b"he", b"do"]), ..), Ok(true));
/// ```
pub fn starts_with<'a, T: CodeUnit>(
    seq: &[T],
    affixes: impl Into<Affixes<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<bool> {
    return any_affix(seq, affixes, bounds, |c, w| leads(c, w, same));
}

/// Does the window end with the candidate, or with any of the candidates?
pub fn ends_with<'a, T: CodeUnit>(
    seq: &[T],
    affixes: impl Into<Affixes<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<bool> {
    return any_affix(seq, affixes, bounds, |c, w| trails(c, w, same));
}

pub fn starts_with_ci<'a, T: CodeUnit>(
    seq: &[T],
    affixes: impl Into<Affixes<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<bool> {
    return any_affix(seq, affixes, bounds, |c, w| leads(c, w, T::fold_case));
}

pub fn ends_with_ci<'a, T: CodeUnit>(
    seq: &[T],
    affixes: impl Into<Affixes<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<bool> {
    return any_affix(seq, affixes, bounds, |c, w| trails(c, w, T::fold_case));
}
