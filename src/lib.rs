// model = "claude-opus-4-5"
// created = "2026-10-18"
// modified = "2026-10-18"
// driver = "Isaac Clayton"

//! Sliver - windowed comparison, matching and prefix analysis over
//! code-unit sequences, in the spirit of Scheme's SRFI-13 string library.
//!
//! Every operation takes its sequences as slices of code units (`u8`, `u16`
//! or `char`) plus a [`Bounds`] per sequence. Bounds may be omitted or
//! negative; they are resolved once into an absolute [`Window`] and nothing
//! outside that window is ever read. Positions reported back are absolute.
//!
//! # Quick Start
//!
//! ```
//! use sliver::affix::{prefix_length, starts_with, Affixes};
//! use sliver::compare::{compare, lt, Comparison};
//! use sliver::scan::index;
//! use sliver::Bounds;
//!
//! // Where do two strings diverge?
//! assert_eq!(compare(b"bab", b"bbb", .., ..), Ok(Comparison::Less(1)));
//!
//! // Relations report a position when they hold and `None` when they don't.
//! assert_eq!(lt(b"aa", b"aaa", .., ..), Ok(Some(2)));
//! assert_eq!(lt(b"aaa", b"aa", .., ..), Ok(None));
//!
//! // Search a window with a unit, a set, or a predicate.
//! assert_eq!(index(b"hello world", b"ow", Bounds::from_start(5)), Ok(Some(6)));
//!
//! assert_eq!(prefix_length(b"aabbb", b"aaccc", .., ..), Ok(2));
//! assert_eq!(starts_with(b"hello", Affixes::any(&[b"we", b"he", b"do"]), ..), Ok(true));
//! ```
//!
//! # Modules
//!
//! | Module | Contents |
//! |--------|----------|
//! | `bounds` | Resolving start/end requests into windows |
//! | `criteria` | Unit / set / predicate matching |
//! | `scan` | `index`, `index_right`, `skip`, `skip_right`, `every`, `any`, `count` |
//! | `compare` | `compare`, `compare_with`, and the `eq`/`lt`/`gt`/... relations |
//! | `affix` | Prefix and suffix lengths, `starts_with`, `ends_with` |
//! | `select` | `substring`, `take`/`drop`, `pad`, `trim` |
//!
//! Case-insensitive variants fold each unit with [`CodeUnit::fold_case`], a
//! plain lowercase mapping with no locale involved.

pub mod affix;
pub mod bounds;
pub mod compare;
pub mod criteria;
pub mod error;
pub mod scan;
pub mod select;
pub mod unit;

pub use affix::Affixes;
pub use bounds::Bounds;
pub use bounds::Window;
pub use compare::Comparison;
pub use criteria::Criteria;
pub use criteria::Matcher;
pub use error::Error;
pub use error::Result;
pub use unit::CodeUnit;
