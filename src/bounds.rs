// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Resolving start/end requests into absolute windows.
//!
//! Every operation that accepts a range takes a [`Bounds`]: an optional start
//! and an optional end, either of which may be negative. A missing start means
//! `0`, a missing end means the sequence length, and a negative value counts
//! back from the length, so `-2` on a length-5 sequence is `3`. Negative values
//! are resolved once against the original length.
//!
//! The result is a [`Window`], a half-open `[lo, hi)` range that is valid for
//! the sequence it was resolved against. Indices reported back to callers are
//! absolute, so `lo` is the base every reported position is measured from.
//!
//! ```
//! use sliver::Bounds;
//!
//! let window = Bounds::span(-4, -2).resolve(5).unwrap();
//! assert_eq!((window.lo(), window.hi()), (1, 3));
//! ```

use std::ops::Range;
use std::ops::RangeFrom;
use std::ops::RangeFull;
use std::ops::RangeTo;

use crate::error::Error;
use crate::error::Result;

/// A caller's range request, before it is resolved against a length.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub start: Option<isize>,
    pub end: Option<isize>,
}

/// A resolved half-open range `[lo, hi)` with `lo <= hi`.
///
/// Built only by [`Bounds::resolve`] and [`Window::full`], so the ordering of
/// its ends always holds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Window {
    pub(crate) lo: usize,
    pub(crate) hi: usize,
}

impl Bounds {
    /// The whole sequence.
    pub const ALL: Bounds = Bounds { start: None, end: None };

    pub const fn new(start: Option<isize>, end: Option<isize>) -> Bounds {
        return Bounds { start, end };
    }

    /// Both ends given.
    pub const fn span(start: isize, end: isize) -> Bounds {
        return Bounds { start: Some(start), end: Some(end) };
    }

    /// From `start` to the end of the sequence.
    pub const fn from_start(start: isize) -> Bounds {
        return Bounds { start: Some(start), end: None };
    }

    /// From the beginning of the sequence up to `end`.
    pub const fn until(end: isize) -> Bounds {
        return Bounds { start: None, end: Some(end) };
    }

    /// Resolve against a sequence of length `len`.
    ///
    /// Fails with [`Error::IndexOutOfRange`] if either end lands outside
    /// `[0, len]` after negative offsets are applied. A start past the end
    /// yields the empty window at the start.
    pub fn resolve(self, len: usize) -> Result<Window> {
        let lo = offset(self.start, 0, len);
        let hi = offset(self.end, len, len);
        let (Some(lo), Some(hi)) = (lo, hi) else {
            log::trace!("rejecting bounds {:?}..{:?} for length {}", self.start, self.end, len);
            return Err(Error::IndexOutOfRange {
                start: self.start,
                end: self.end,
                len,
            });
        };
        return Ok(Window { lo, hi: hi.max(lo) });
    }
}

/// Resolve one end, or `None` if it falls outside `[0, len]`.
fn offset(value: Option<isize>, default: usize, len: usize) -> Option<usize> {
    let resolved = match value {
        None => default,
        Some(v) if v < 0 => len.checked_sub(v.unsigned_abs())?,
        Some(v) => v as usize,
    };
    if resolved > len {
        return None;
    }
    return Some(resolved);
}

impl From<RangeFull> for Bounds {
    fn from(_: RangeFull) -> Bounds {
        return Bounds::ALL;
    }
}

impl From<Range<isize>> for Bounds {
    fn from(range: Range<isize>) -> Bounds {
        return Bounds::span(range.start, range.end);
    }
}

impl From<RangeFrom<isize>> for Bounds {
    fn from(range: RangeFrom<isize>) -> Bounds {
        return Bounds::from_start(range.start);
    }
}

impl From<RangeTo<isize>> for Bounds {
    fn from(range: RangeTo<isize>) -> Bounds {
        return Bounds::until(range.end);
    }
}

impl From<(isize, isize)> for Bounds {
    fn from((start, end): (isize, isize)) -> Bounds {
        return Bounds::span(start, end);
    }
}

impl Window {
    /// The window covering a whole sequence of length `len`.
    pub const fn full(len: usize) -> Window {
        return Window { lo: 0, hi: len };
    }

    /// First position inside the window.
    #[inline]
    pub const fn lo(&self) -> usize {
        return self.lo;
    }

    /// One past the last position inside the window.
    #[inline]
    pub const fn hi(&self) -> usize {
        return self.hi;
    }

    #[inline]
    pub const fn len(&self) -> usize {
        return self.hi - self.lo;
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        return self.lo == self.hi;
    }

    /// Borrow the units this window covers.
    ///
    /// The window must have been resolved against `seq`.
    #[inline]
    pub fn slice<'s, T>(&self, seq: &'s [T]) -> &'s [T] {
        return &seq[self.lo..self.hi];
    }

    /// The absolute positions covered, in ascending order.
    #[inline]
    pub fn positions(&self) -> Range<usize> {
        return self.lo..self.hi;
    }

    /// Translate a window-relative offset to an absolute position.
    #[inline]
    pub const fn absolute(&self, offset: usize) -> usize {
        return self.lo + offset;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_ends_cover_everything() {
        assert_eq!(Bounds::ALL.resolve(5), Ok(Window { lo: 0, hi: 5 }));
        assert_eq!(Bounds::from_start(2).resolve(5), Ok(Window { lo: 2, hi: 5 }));
        assert_eq!(Bounds::until(3).resolve(5), Ok(Window { lo: 0, hi: 3 }));
    }

    #[test]
    fn negative_ends_count_from_length() {
        assert_eq!(Bounds::span(-4, -2).resolve(5), Ok(Window { lo: 1, hi: 3 }));
        assert_eq!(Bounds::from_start(-2).resolve(4), Ok(Window { lo: 2, hi: 4 }));
        assert_eq!(Bounds::span(1, -1).resolve(5), Ok(Window { lo: 1, hi: 4 }));
        assert_eq!(Bounds::from_start(-5).resolve(5), Ok(Window { lo: 0, hi: 5 }));
    }

    #[test]
    fn explicit_zero_end_is_empty() {
        assert_eq!(Bounds::until(0).resolve(5), Ok(Window { lo: 0, hi: 0 }));
    }

    #[test]
    fn out_of_range_is_reported() {
        let err = Error::IndexOutOfRange { start: Some(-6), end: None, len: 5 };
        assert_eq!(Bounds::from_start(-6).resolve(5), Err(err));
        assert!(Bounds::until(6).resolve(5).is_err());
        assert!(Bounds::from_start(6).resolve(5).is_err());
        assert!(Bounds::from_start(1).resolve(0).is_err());
    }

    #[test]
    fn inverted_request_is_empty_at_start() {
        let window = Bounds::span(4, 2).resolve(5).unwrap();
        assert_eq!(window, Window { lo: 4, hi: 4 });
        assert!(window.is_empty());
    }

    #[test]
    fn range_conversions() {
        assert_eq!(Bounds::from(..), Bounds::ALL);
        assert_eq!(Bounds::from(1isize..3), Bounds::span(1, 3));
        assert_eq!(Bounds::from(-2isize..), Bounds::from_start(-2));
        assert_eq!(Bounds::from(..-1isize), Bounds::until(-1));
        assert_eq!(Bounds::from((2isize, 4isize)), Bounds::span(2, 4));
    }

    #[test]
    fn window_helpers() {
        let seq = b"hello";
        let window = Bounds::span(1, 4).resolve(seq.len()).unwrap();
        assert_eq!(window.len(), 3);
        assert_eq!(window.slice(seq), b"ell");
        assert_eq!(window.positions().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(window.absolute(2), 3);
        assert_eq!(Window::full(5), Window { lo: 0, hi: 5 });
        assert_eq!((window.lo(), window.hi()), (1, 4));
    }

    #[test]
    fn zero_start_is_the_whole_sequence() {
        // -0 is 0, so it never counts from the end.
        assert_eq!(Bounds::from_start(0).resolve(4), Ok(Window::full(4)));
        assert_eq!(Bounds::from_start(-0).resolve(4), Ok(Window::full(4)));
    }

    #[test]
    fn resolved_windows_are_ordered() {
        for len in 0..6usize {
            for start in -7isize..7 {
                for end in -7isize..7 {
                    if let Ok(window) = Bounds::span(start, end).resolve(len) {
                        assert!(window.lo() <= window.hi() && window.hi() <= len);
                        assert_eq!(window.len(), window.hi() - window.lo());
                    }
                }
            }
        }
    }
}
