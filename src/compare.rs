// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Lexicographic comparison that reports where two windows diverge.
//!
//! Two windows are walked in lockstep up to their common length. The first
//! position where the units differ decides the order; if there is none, the
//! shorter window is less. Either way the result carries the absolute index
//! (measured from the start of the first window's sequence) at which the
//! decision was made:
//!
//! - a mismatch at window offset `i` reports `lo1 + i`;
//! - running out of one window reports `lo1 + common_len`;
//! - equal windows report `lo1 + len`.
//!
//! [`compare`] returns this as a [`Comparison`]. [`compare_with`] takes one
//! callback per outcome and invokes exactly one of them, exactly once, with
//! the index.
//!
//! The relation family (`eq`, `ltgt`, `lt`, `gt`, `lteq`, `gteq`) runs the same
//! walk and maps the outcome to `Some(position)` when the relation holds and
//! `None` when it does not. A mismatch reports its absolute index. A decision
//! made by running out of units reports a window length, except for `ltgt`,
//! which reports the absolute index where the shorter window ended:
//!
//! | fn | mismatch `<` | mismatch `>` | shorter | equal | longer |
//! |---|---|---|---|---|---|
//! | `eq` | None | None | None | len1 | None |
//! | `ltgt` | index | index | index | None | index |
//! | `lt` | index | None | len1 | None | None |
//! | `gt` | None | index | None | None | len2 |
//! | `lteq` | index | None | len1 | len1 | None |
//! | `gteq` | None | index | None | len2 | len2 |
//!
//! The `ci_` variants fold every unit with [`CodeUnit::fold_case`] as it is
//! read.

use std::cmp::Ordering;

use crate::bounds::Bounds;
use crate::bounds::Window;
use crate::error::Result;
use crate::unit::CodeUnit;

/// The outcome of comparing two windows, with the absolute divergence index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Comparison {
    Less(usize),
    Equal(usize),
    Greater(usize),
}

impl Comparison {
    /// The index the decision was made at.
    pub fn index(self) -> usize {
        return match self {
            Comparison::Less(i) | Comparison::Equal(i) | Comparison::Greater(i) => i,
        };
    }

    pub fn ordering(self) -> Ordering {
        return match self {
            Comparison::Less(_) => Ordering::Less,
            Comparison::Equal(_) => Ordering::Equal,
            Comparison::Greater(_) => Ordering::Greater,
        };
    }

    /// Hand the index to the callback for this outcome. Exactly one runs.
    pub fn resolve<R>(
        self,
        lt: impl FnOnce(usize) -> R,
        eq: impl FnOnce(usize) -> R,
        gt: impl FnOnce(usize) -> R,
    ) -> R {
        return match self {
            Comparison::Less(i) => lt(i),
            Comparison::Equal(i) => eq(i),
            Comparison::Greater(i) => gt(i),
        };
    }
}

/// Where and how two windows diverged, in window-relative terms.
#[derive(Clone, Copy, Debug)]
struct Divergence {
    ordering: Ordering,
    /// Offset of the first mismatch, or the common length.
    offset: usize,
    /// True if a unit mismatch decided the order.
    mismatch: bool,
    first: Window,
    second: Window,
}

impl Divergence {
    fn absolute(&self) -> usize {
        return self.first.absolute(self.offset);
    }

    fn comparison(&self) -> Comparison {
        let index = self.absolute();
        return match self.ordering {
            Ordering::Less => Comparison::Less(index),
            Ordering::Equal => Comparison::Equal(index),
            Ordering::Greater => Comparison::Greater(index),
        };
    }
}

/// Walk two windows in lockstep. Never reads past either window.
fn diverge<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: Bounds,
    b2: Bounds,
    fold: fn(T) -> T,
) -> Result<Divergence> {
    let first = b1.resolve(s1.len())?;
    let second = b2.resolve(s2.len())?;
    let a = first.slice(s1);
    let b = second.slice(s2);

    for (offset, (x, y)) in a.iter().zip(b).enumerate() {
        let ordering = fold(*x).cmp(&fold(*y));
        if ordering != Ordering::Equal {
            return Ok(Divergence { ordering, offset, mismatch: true, first, second });
        }
    }

    return Ok(Divergence {
        ordering: a.len().cmp(&b.len()),
        offset: a.len().min(b.len()),
        mismatch: false,
        first,
        second,
    });
}

fn same<T>(unit: T) -> T {
    return unit;
}

/// Compare two windows.
///
/// ```
/// use sliver::compare::{compare, Comparison};
///
/// assert_eq!(compare(b"bab", b"bbb", .., ..), Ok(Comparison::Less(1)));
/// assert_eq!(compare(b"aa", b"aaa", .., ..), Ok(Comparison::Less(2)));
/// ```
pub fn compare<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<Comparison> {
    return Ok(diverge(s1, s2, b1.into(), b2.into(), same)?.comparison());
}

/// Compare two windows, ignoring case.
pub fn compare_ci<T: CodeUnit>(
    s1: &[T],
    s2: &[T],
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<Comparison> {
    return Ok(diverge(s1, s2, b1.into(), b2.into(), T::fold_case)?.comparison());
}

/// Compare two windows and invoke exactly one of `lt`, `eq` or `gt` with the
/// divergence index.
///
/// ```
/// use sliver::compare::compare_with;
///
/// let verdict = compare_with(
///     b"bbb",
///     b"bab",
///     |i| format!("lt {i}"),
///     |i| format!("eq {i}"),
///     |i| format!("gt {i}"),
///     ..,
///     ..,
/// );
/// assert_eq!(verdict.unwrap(), "gt 1");
/// ```
pub fn compare_with<T: CodeUnit, R>(
    s1: &[T],
    s2: &[T],
    lt: impl FnOnce(usize) -> R,
    eq: impl FnOnce(usize) -> R,
    gt: impl FnOnce(usize) -> R,
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<R> {
    return Ok(compare(s1, s2, b1, b2)?.resolve(lt, eq, gt));
}

/// [`compare_with`], ignoring case.
pub fn compare_with_ci<T: CodeUnit, R>(
    s1: &[T],
    s2: &[T],
    lt: impl FnOnce(usize) -> R,
    eq: impl FnOnce(usize) -> R,
    gt: impl FnOnce(usize) -> R,
    b1: impl Into<Bounds>,
    b2: impl Into<Bounds>,
) -> Result<R> {
    return Ok(compare_ci(s1, s2, b1, b2)?.resolve(lt, eq, gt));
}

// =============================================================================
// Relations
// =============================================================================

fn relate_eq(d: Divergence) -> Option<usize> {
    return match d.ordering {
        Ordering::Equal => Some(d.first.len()),
        _ => None,
    };
}

fn relate_ltgt(d: Divergence) -> Option<usize> {
    return match d.ordering {
        Ordering::Equal => None,
        _ => Some(d.absolute()),
    };
}

fn relate_lt(d: Divergence) -> Option<usize> {
    return match (d.ordering, d.mismatch) {
        (Ordering::Less, true) => Some(d.absolute()),
        (Ordering::Less, false) => Some(d.first.len()),
        _ => None,
    };
}

fn relate_gt(d: Divergence) -> Option<usize> {
    return match (d.ordering, d.mismatch) {
        (Ordering::Greater, true) => Some(d.absolute()),
        (Ordering::Greater, false) => Some(d.second.len()),
        _ => None,
    };
}

fn relate_lteq(d: Divergence) -> Option<usize> {
    return match (d.ordering, d.mismatch) {
        (Ordering::Less, true) => Some(d.absolute()),
        (Ordering::Less | Ordering::Equal, false) => Some(d.first.len()),
        _ => None,
    };
}

fn relate_gteq(d: Divergence) -> Option<usize> {
    return match (d.ordering, d.mismatch) {
        (Ordering::Greater, true) => Some(d.absolute()),
        (Ordering::Greater | Ordering::Equal, false) => Some(d.second.len()),
        _ => None,
    };
}

macro_rules! relation {
    ($(#[$doc:meta])* $name:ident, $ci:ident, $relate:ident) => {
        $(#[$doc])*
        pub fn $name<T: CodeUnit>(
            s1: &[T],
            s2: &[T],
            b1: impl Into<Bounds>,
            b2: impl Into<Bounds>,
        ) -> Result<Option<usize>> {
            return Ok($relate(diverge(s1, s2, b1.into(), b2.into(), same)?));
        }

        #[doc = concat!("[`", stringify!($name), "`], ignoring case.")]
        pub fn $ci<T: CodeUnit>(
            s1: &[T],
            s2: &[T],
            b1: impl Into<Bounds>,
            b2: impl Into<Bounds>,
        ) -> Result<Option<usize>> {
            return Ok($relate(diverge(s1, s2, b1.into(), b2.into(), T::fold_case)?));
        }
    };
}

relation!(
    /// The window length if both windows hold the same units.
    eq, ci_eq, relate_eq
);
relation!(
    /// Where the windows differ, or `None` if they are equal. Always an
    /// absolute index, like [`compare`].
    ltgt, ci_ltgt, relate_ltgt
);
relation!(
    /// Where the first window becomes less than the second, if it is.
    lt, ci_lt, relate_lt
);
relation!(
    /// Where the first window becomes greater than the second, if it is.
    gt, ci_gt, relate_gt
);
relation!(
    /// Like [`lt`], but equal windows report their length.
    lteq, ci_lteq, relate_lteq
);
relation!(
    /// Like [`gt`], but equal windows report their length.
    gteq, ci_gteq, relate_gteq
);

#[cfg(test)]
mod tests {
    use super::*;

    fn tag(s1: &[u8], s2: &[u8], b1: Bounds, b2: Bounds) -> String {
        return compare_with(
            s1,
            s2,
            |i| format!("lt {i}"),
            |i| format!("eq {i}"),
            |i| format!("gt {i}"),
            b1,
            b2,
        )
        .unwrap();
    }

    #[test]
    fn compare_reports_divergence() {
        assert_eq!(tag(b"bab", b"bbb", Bounds::ALL, Bounds::ALL), "lt 1");
        assert_eq!(tag(b"bbb", b"bbb", Bounds::ALL, Bounds::ALL), "eq 3");
        assert_eq!(tag(b"bbb", b"bab", Bounds::ALL, Bounds::ALL), "gt 1");
    }

    #[test]
    fn compare_empty() {
        assert_eq!(tag(b"", b"", Bounds::ALL, Bounds::ALL), "eq 0");
        assert_eq!(tag(b"", b"a", Bounds::ALL, Bounds::ALL), "lt 0");
        assert_eq!(tag(b"a", b"", Bounds::ALL, Bounds::ALL), "gt 0");
    }

    #[test]
    fn compare_is_case_sensitive() {
        assert_eq!(tag(b"aaa", b"aAa", Bounds::ALL, Bounds::ALL), "gt 1");
        assert_eq!(tag(b"aAa", b"aaa", Bounds::ALL, Bounds::ALL), "lt 1");
    }

    #[test]
    fn compare_shorter_is_less() {
        assert_eq!(tag(b"aa", b"aaa", Bounds::ALL, Bounds::ALL), "lt 2");
        assert_eq!(tag(b"aaa", b"aa", Bounds::ALL, Bounds::ALL), "gt 2");
    }

    #[test]
    fn compare_windows_report_absolute_indices() {
        assert_eq!(tag(b"aabbb", b"bbb", Bounds::from_start(2), Bounds::ALL), "eq 5");
        assert_eq!(tag(b"aabbbaa", b"bbb", Bounds::span(2, 5), Bounds::ALL), "eq 5");
        assert_eq!(tag(b"aabbbaa", b"bbbb", Bounds::span(2, 5), Bounds::ALL), "lt 5");
        assert_eq!(tag(b"aabbbaa", b"bb", Bounds::span(2, 5), Bounds::ALL), "gt 4");
        assert_eq!(tag(b"aabbbaa", b"zzbbb", Bounds::span(2, 5), Bounds::from_start(2)), "eq 5");
        assert_eq!(tag(b"aabbbaa", b"zzbbbzz", Bounds::span(2, 5), Bounds::span(2, 5)), "eq 5");
    }

    #[test]
    fn exactly_one_callback_runs_once() {
        let mut calls = Vec::new();
        let result = compare_with(
            b"abc",
            b"abd",
            |i| calls.push(("lt", i)),
            |_| unreachable!(),
            |_| unreachable!(),
            ..,
            ..,
        );
        assert_eq!(result, Ok(()));
        assert_eq!(calls, vec![("lt", 2)]);
    }

    #[test]
    fn compare_ci_folds_case() {
        assert_eq!(compare_ci(b"aaa", b"aAa", .., ..), Ok(Comparison::Equal(3)));
        assert_eq!(compare_ci(b"aAa", b"AaA", .., ..), Ok(Comparison::Equal(3)));
        let result = compare_with_ci(b"ABC", b"abd", |_| "lt", |_| "eq", |_| "gt", .., ..);
        assert_eq!(result, Ok("lt"));
    }

    #[test]
    fn compare_rejects_bad_bounds() {
        assert!(compare(b"abc", b"abc", Bounds::from_start(-4), Bounds::ALL).is_err());
        assert!(compare(b"abc", b"abc", Bounds::ALL, Bounds::until(9)).is_err());
    }

    #[test]
    fn comparison_accessors() {
        assert_eq!(Comparison::Less(3).index(), 3);
        assert_eq!(Comparison::Greater(0).ordering(), Ordering::Greater);
        assert_eq!(Comparison::Equal(1).resolve(|_| 0, |i| i + 10, |_| 0), 11);
    }

    #[test]
    fn eq_relation() {
        assert_eq!(eq(b"aaaa", b"aaaa", .., ..), Ok(Some(4)));
        assert_eq!(eq(b"aa", b"aaaa", .., ..), Ok(None));
        assert_eq!(eq(b"aaaa", b"aa", .., ..), Ok(None));
        assert_eq!(eq(b"aaba", b"aaaa", .., ..), Ok(None));
        assert_eq!(eq(b"aaaa", b"aaba", .., ..), Ok(None));
        assert_eq!(eq(b"", b"", .., ..), Ok(Some(0)));
    }

    #[test]
    fn ltgt_relation() {
        assert_eq!(ltgt(b"aaa", b"aaa", .., ..), Ok(None));
        assert_eq!(ltgt(b"aaa", b"aba", .., ..), Ok(Some(1)));
        assert_eq!(ltgt(b"aba", b"aaa", .., ..), Ok(Some(1)));
        assert_eq!(ltgt(b"aaa", b"aa", .., ..), Ok(Some(2)));
        assert_eq!(ltgt(b"aa", b"aaa", .., ..), Ok(Some(2)));
        assert_eq!(ltgt(b"bbaaa", b"aaa", Bounds::from_start(2), Bounds::ALL), Ok(None));
        assert_eq!(ltgt(b"bbaaabb", b"bbaaabb", Bounds::span(2, 5), Bounds::span(2, 5)), Ok(None));
        // Length mismatches inside a window report the same absolute index as compare.
        assert_eq!(ltgt(b"xxab", b"abc", Bounds::from_start(2), Bounds::ALL), Ok(Some(4)));
        assert_eq!(compare(b"xxab", b"abc", Bounds::from_start(2), Bounds::ALL), Ok(Comparison::Less(4)));
        assert_eq!(ltgt(b"xxabc", b"ab", Bounds::from_start(2), Bounds::ALL), Ok(Some(4)));
        assert_eq!(ltgt(b"xxab", b"ac", Bounds::from_start(2), Bounds::ALL), Ok(Some(3)));
    }

    #[test]
    fn lt_relation() {
        assert_eq!(lt(b"aaa", b"aaa", .., ..), Ok(None));
        assert_eq!(lt(b"aaa", b"aba", .., ..), Ok(Some(1)));
        assert_eq!(lt(b"aba", b"aaaa", .., ..), Ok(None));
        assert_eq!(lt(b"aaa", b"aa", .., ..), Ok(None));
        assert_eq!(lt(b"aa", b"aaa", .., ..), Ok(Some(2)));
        assert_eq!(lt(b"bbaaabb", b"aaa", Bounds::span(2, 5), Bounds::ALL), Ok(None));
    }

    #[test]
    fn gt_relation() {
        assert_eq!(gt(b"aaa", b"aaa", .., ..), Ok(None));
        assert_eq!(gt(b"aaaa", b"aba", .., ..), Ok(None));
        assert_eq!(gt(b"aba", b"aaa", .., ..), Ok(Some(1)));
        assert_eq!(gt(b"aaa", b"aa", .., ..), Ok(Some(2)));
        assert_eq!(gt(b"aa", b"aaa", .., ..), Ok(None));
        assert_eq!(gt(b"bbaaabb", b"bbaaa", Bounds::span(2, 5), Bounds::from_start(2)), Ok(None));
    }

    #[test]
    fn lteq_relation() {
        assert_eq!(lteq(b"aaa", b"aaa", .., ..), Ok(Some(3)));
        assert_eq!(lteq(b"aaa", b"aba", .., ..), Ok(Some(1)));
        assert_eq!(lteq(b"aba", b"aaaa", .., ..), Ok(None));
        assert_eq!(lteq(b"aaa", b"aa", .., ..), Ok(None));
        assert_eq!(lteq(b"aa", b"aaa", .., ..), Ok(Some(2)));
        assert_eq!(lteq(b"bbaaa", b"aaa", Bounds::from_start(2), Bounds::ALL), Ok(Some(3)));
        assert_eq!(lteq(b"bbaaabb", b"bbaaa", Bounds::span(2, 5), Bounds::from_start(2)), Ok(Some(3)));
    }

    #[test]
    fn gteq_relation() {
        assert_eq!(gteq(b"aaa", b"aaa", .., ..), Ok(Some(3)));
        assert_eq!(gteq(b"aaaa", b"aba", .., ..), Ok(None));
        assert_eq!(gteq(b"aba", b"aaa", .., ..), Ok(Some(1)));
        assert_eq!(gteq(b"aaa", b"aa", .., ..), Ok(Some(2)));
        assert_eq!(gteq(b"aa", b"aaa", .., ..), Ok(None));
        assert_eq!(gteq(b"bbaaabb", b"aaa", Bounds::span(2, 5), Bounds::ALL), Ok(Some(3)));
    }

    #[test]
    fn mismatch_in_window_is_absolute() {
        // Window "abz" of "xxabz" against "aby" diverges at offset 2.
        assert_eq!(gt(b"xxabz", b"aby", Bounds::from_start(2), Bounds::ALL), Ok(Some(4)));
        assert_eq!(ltgt(b"xxabz", b"aby", Bounds::from_start(2), Bounds::ALL), Ok(Some(4)));
    }

    #[test]
    fn ci_relations() {
        assert_eq!(ci_eq(b"HeLLo", b"hello", .., ..), Ok(Some(5)));
        assert_eq!(ci_ltgt(b"ABC", b"abc", .., ..), Ok(None));
        assert_eq!(ci_lt(b"ABC", b"abd", .., ..), Ok(Some(2)));
        assert_eq!(ci_gt(b"abd", b"ABC", .., ..), Ok(Some(2)));
        assert_eq!(ci_lteq(b"Abc", b"aBC", .., ..), Ok(Some(3)));
        assert_eq!(ci_gteq(b"Abc", b"aBC", .., ..), Ok(Some(3)));
        // Case-sensitively 'B' < 'a', folded 'b' > 'a'.
        assert_eq!(lt(b"B", b"a", .., ..), Ok(Some(0)));
        assert_eq!(ci_lt(b"B", b"a", .., ..), Ok(None));
    }
}
