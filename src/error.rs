// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Errors reported by windowed operations.

use thiserror::Error as ThisError;

/// Error returned when a request addresses positions outside its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ThisError)]
pub enum Error {
    /// A start/end pair resolved to a window outside `[0, len]`.
    #[error("bounds {start:?}..{end:?} out of range for length {len}")]
    IndexOutOfRange {
        start: Option<isize>,
        end: Option<isize>,
        len: usize,
    },

    /// A single position or count fell outside the sequence.
    #[error("position {index} out of range for length {len}")]
    PositionOutOfRange { index: isize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
