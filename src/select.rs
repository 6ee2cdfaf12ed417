// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Selecting, padding and trimming windows.
//!
//! Everything here borrows from the input where it can; only padding builds a
//! new sequence.

use crate::bounds::Bounds;
use crate::bounds::Window;
use crate::criteria::Criteria;
use crate::criteria::Matcher;
use crate::error::Error;
use crate::error::Result;
use crate::scan::Accept;
use crate::scan::Direction;
use crate::scan::scan;
use crate::unit::CodeUnit;

pub fn is_empty<T>(seq: &[T]) -> bool {
    return seq.is_empty();
}

/// The unit at `index`, counting from the end if negative.
pub fn unit_at<T: CodeUnit>(seq: &[T], index: isize) -> Result<T> {
    let resolved = if index < 0 {
        seq.len().checked_sub(index.unsigned_abs())
    } else {
        Some(index as usize)
    };
    return match resolved.and_then(|i| seq.get(i)) {
        Some(unit) => Ok(*unit),
        None => Err(Error::PositionOutOfRange { index, len: seq.len() }),
    };
}

/// The units inside `bounds`.
pub fn substring<T>(seq: &[T], bounds: impl Into<Bounds>) -> Result<&[T]> {
    return Ok(bounds.into().resolve(seq.len())?.slice(seq));
}

fn checked_count<T>(seq: &[T], count: usize) -> Result<usize> {
    if count > seq.len() {
        return Err(Error::PositionOutOfRange {
            index: isize::try_from(count).unwrap_or(isize::MAX),
            len: seq.len(),
        });
    }
    return Ok(count);
}

/// The first `count` units.
pub fn take<T>(seq: &[T], count: usize) -> Result<&[T]> {
    let count = checked_count(seq, count)?;
    return Ok(&seq[..count]);
}

/// Everything after the first `count` units.
pub fn drop<T>(seq: &[T], count: usize) -> Result<&[T]> {
    let count = checked_count(seq, count)?;
    return Ok(&seq[count..]);
}

/// The last `count` units.
pub fn take_right<T>(seq: &[T], count: usize) -> Result<&[T]> {
    let count = checked_count(seq, count)?;
    return Ok(&seq[seq.len() - count..]);
}

/// Everything before the last `count` units.
pub fn drop_right<T>(seq: &[T], count: usize) -> Result<&[T]> {
    let count = checked_count(seq, count)?;
    return Ok(&seq[..seq.len() - count]);
}

/// Fit the window to exactly `len` units, keeping its right end.
///
/// A longer window loses units from the left; a shorter one is filled on the
/// left with `fill`.
///
/// ```
/// use sliver::select::pad;
/// use sliver::Bounds;
///
/// assert_eq!(pad(b"325", 5, b' ', ..).unwrap(), b"  325");
/// assert_eq!(pad(b"8871325", 5, b' ', ..).unwrap(), b"71325");
/// assert_eq!(pad(b"12345", 5, b' ', Bounds::span(-4, -2)).unwrap(), b"   23");
/// ```
pub fn pad<T: CodeUnit>(seq: &[T], len: usize, fill: T, bounds: impl Into<Bounds>) -> Result<Vec<T>> {
    let window = substring(seq, bounds)?;
    if window.len() >= len {
        return Ok(window[window.len() - len..].to_vec());
    }
    let mut padded = vec![fill; len - window.len()];
    padded.extend_from_slice(window);
    return Ok(padded);
}

/// Fit the window to exactly `len` units, keeping its left end.
pub fn pad_right<T: CodeUnit>(seq: &[T], len: usize, fill: T, bounds: impl Into<Bounds>) -> Result<Vec<T>> {
    let window = substring(seq, bounds)?;
    if window.len() >= len {
        return Ok(window[..len].to_vec());
    }
    let mut padded = Vec::with_capacity(len);
    padded.extend_from_slice(window);
    padded.resize(len, fill);
    return Ok(padded);
}

// =============================================================================
// Trimming
// =============================================================================

fn trimmed<'s, 'a, T: CodeUnit>(
    seq: &'s [T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
    left: bool,
    right: bool,
) -> Result<&'s [T]> {
    let window = bounds.into().resolve(seq.len())?;
    let matcher = Matcher::new(criteria.into());
    let mut lo = window.lo;
    let mut hi = window.hi;
    if left {
        lo = scan(seq, &matcher, window, Direction::Forward, Accept::NonMatching).unwrap_or(hi);
    }
    if right {
        let rest = Window { lo, hi };
        hi = scan(seq, &matcher, rest, Direction::Backward, Accept::NonMatching).map_or(lo, |i| i + 1);
    }
    return Ok(&seq[lo..hi]);
}

/// Drop matching units from the left of the window.
///
/// Pass [`Criteria::whitespace`] for the usual space, newline and return.
pub fn trim_left<'s, 'a, T: CodeUnit>(
    seq: &'s [T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<&'s [T]> {
    return trimmed(seq, criteria, bounds, true, false);
}

/// Drop matching units from the right of the window.
pub fn trim_right<'s, 'a, T: CodeUnit>(
    seq: &'s [T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<&'s [T]> {
    return trimmed(seq, criteria, bounds, false, true);
}

/// Drop matching units from both ends of the window.
pub fn trim<'s, 'a, T: CodeUnit>(
    seq: &'s [T],
    criteria: impl Into<Criteria<'a, T>>,
    bounds: impl Into<Bounds>,
) -> Result<&'s [T]> {
    return trimmed(seq, criteria, bounds, true, true);
}
