// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Scanning a window for units that do or do not match some criteria.
//!
//! `index`, `index_right`, `skip` and `skip_right` are one scan with two
//! knobs: which end to start from, and whether to stop on a match or on a
//! miss. Positions are absolute, and `None` means nothing in the window
//! qualified.

use crate::bounds::Bounds;
use crate::bounds::Window;
use crate::criteria::Criteria;
use crate::criteria::Matcher;
use crate::error::Result;
use crate::unit::CodeUnit;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Direction {
    Forward,
    Backward,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Accept {
    Matching,
    NonMatching,
}

/// Find the first qualifying position in `window`, scanning in `direction`.
pub(crate) fn scan<T: CodeUnit>(
    seq: &[T],
    matcher: &Matcher<'_, T>,
    window: Window,
    direction: Direction,
    accept: Accept,
) -> Option<usize> {
    let wanted = accept == Accept::Matching;
    let mut positions = window.positions();
    let qualifies = |i: &usize| matcher.matches(seq[*i]) == wanted;
    return match direction {
        Direction::Forward => positions.find(qualifies),
        Direction::Backward => positions.rev().find(qualifies),
    };
}

fn scan_bounds<'a, T: CodeUnit>(
    seq: &[T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
    direction: Direction,
    accept: Accept,
) -> Result<Option<usize>> {
    let window = bounds.into().resolve(seq.len())?;
    let matcher = Matcher::new(criteria.into());
    return Ok(scan(seq, &matcher, window, direction, accept));
}

/// Leftmost position in the window whose unit matches.
///
/// ```
/// use sliver::scan::index;
///
/// assert_eq!(index(b"hello", b'l', ..), Ok(Some(2)));
/// assert_eq!(index(b"hello", b"xyz", ..), Ok(None));
/// ```
pub fn index<'a, T: CodeUnit>(
    seq: &[T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<Option<usize>> {
    return scan_bounds(seq, criteria, bounds, Direction::Forward, Accept::Matching);
}

/// Rightmost position in the window whose unit matches.
pub fn index_right<'a, T: CodeUnit>(
    seq: &[T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<Option<usize>> {
    return scan_bounds(seq, criteria, bounds, Direction::Backward, Accept::Matching);
}

/// Leftmost position in the window whose unit does not match.
pub fn skip<'a, T: CodeUnit>(
    seq: &[T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<Option<usize>> {
    return scan_bounds(seq, criteria, bounds, Direction::Forward, Accept::NonMatching);
}

/// Rightmost position in the window whose unit does not match.
pub fn skip_right<'a, T: CodeUnit>(
    seq: &[T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<Option<usize>> {
    return scan_bounds(seq, criteria, bounds, Direction::Backward, Accept::NonMatching);
}

/// True if every unit in the window matches. Vacuously true when empty.
pub fn every<'a, T: CodeUnit>(
    seq: &[T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<bool> {
    return Ok(skip(seq, criteria, bounds)?.is_none());
}

/// True if some unit in the window matches.
pub fn any<'a, T: CodeUnit>(
    seq: &[T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<bool> {
    return Ok(index(seq, criteria, bounds)?.is_some());
}

/// Number of units in the window that match.
pub fn count<'a, T: CodeUnit>(
    seq: &[T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<usize> {
    let window = bounds.into().resolve(seq.len())?;
    let matcher = Matcher::new(criteria.into());
    let hits = window.slice(seq).iter().filter(|unit| matcher.matches(**unit)).count();
    return Ok(hits);
}
