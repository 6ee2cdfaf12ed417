// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Code units: the fixed-width elements every sequence is made of.
//!
//! Positions are code-unit positions, never grapheme clusters. Case folding
//! is a per-unit lowercase mapping with no locale involved; a unit whose
//! lowercase form does not fit in a single unit of the same width is left
//! unchanged.

use std::fmt::Debug;
use std::hash::Hash;

/// An element of a text sequence.
pub trait CodeUnit: Copy + Ord + Hash + Debug + 'static {
    /// The default fill unit used by padding.
    const SPACE: Self;

    /// Map this unit to its lowercase form.
    fn fold_case(self) -> Self;

    /// The default set trimmed by the trim family: space, newline, return.
    fn whitespace() -> &'static [Self];
}

impl CodeUnit for u8 {
    const SPACE: u8 = b' ';

    #[inline]
    fn fold_case(self) -> u8 {
        return self.to_ascii_lowercase();
    }

    fn whitespace() -> &'static [u8] {
        return b" \n\r";
    }
}

impl CodeUnit for u16 {
    const SPACE: u16 = 0x20;

    #[inline]
    fn fold_case(self) -> u16 {
        if self < 0x80 {
            return (self as u8).to_ascii_lowercase() as u16;
        }
        // Surrogate halves have no case of their own.
        let Some(c) = char::from_u32(self as u32) else {
            return self;
        };
        return match single(c.to_lowercase()) {
            Some(lower) if (lower as u32) <= 0xFFFF => lower as u32 as u16,
            _ => self,
        };
    }

    fn whitespace() -> &'static [u16] {
        return &[0x20, 0x0A, 0x0D];
    }
}

impl CodeUnit for char {
    const SPACE: char = ' ';

    #[inline]
    fn fold_case(self) -> char {
        if self.is_ascii() {
            return self.to_ascii_lowercase();
        }
        return single(self.to_lowercase()).unwrap_or(self);
    }

    fn whitespace() -> &'static [char] {
        return &[' ', '\n', '\r'];
    }
}

/// The only item of an iterator, if it yields exactly one.
fn single(mut chars: impl Iterator<Item = char>) -> Option<char> {
    let first = chars.next()?;
    if chars.next().is_some() {
        return None;
    }
    return Some(first);
}
