//! Strings stored in a chosen encoding and addressed by code point.
//!
//! [`EncodedString`] keeps its text as one contiguous buffer of storage units
//! (bytes for [`Utf8`], 16-bit units for [`Utf16`]) followed by a zero
//! sentinel, so it can be handed to C APIs without copying. Every public
//! operation counts in code points: `len`, indices, `insert`, `erase`, `find`
//! and friends never split a code point.
//!
//! Appending is amortized `O(1)`. Anything addressed by code-point index
//! walks the buffer from the start, and [`EncodedString::len`] is `O(n)`;
//! [`EncodedString::size_storage`] is the `O(1)` unit count.
//!
//! ```
//! use encstring::{NPOS, Utf8String};
//!
//! let mut s = Utf8String::new();
//! s.append("hello");
//! assert_eq!(s.len(), 5);
//! assert_eq!(s.substr(1, 3), "ell");
//!
//! s.erase(2, NPOS);
//! s.append('ł');
//! assert_eq!(s.as_str(), "heł");
//! assert_eq!(s.size_storage(), 4);
//! ```
//!
//! Text enters through a [`Source`]: a `char`, `&str`, `&[char]`, a
//! `(count, char)` repetition, another string or [`StrView`] of the same
//! encoding, or a [`NarrowRun`] of raw bytes. Byte runs are accepted without
//! ceremony only by UTF-8 strings; every other encoding requires an explicit
//! [`AmbiguousEncoding`] token.
//!
//! # Features
//!
//! - `serde`: serialize strings as plain text.
//! - `fuzzing`: expose [`EncodedString::check_invariants`].

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod alloc_handle;
mod compare;
mod convert;
mod cursor;
mod encoding;
mod error;
mod search;
mod source;
mod storage;
mod string;
mod view;

#[cfg(any(test, feature = "serde"))]
mod serde_impls;

#[cfg(test)]
mod tests;

pub use alloc_handle::{Allocator, DefaultAllocator, GlobalAllocWrapper};
pub use convert::convert;
pub use cursor::{Chars, Cursor, Position, RevCursor};
pub use encoding::{Encoding, NarrowCompatible, Utf8, Utf16};
pub use error::{Result, StringError};
pub use source::{AmbiguousEncoding, NarrowRun, Source, SourceChars};
pub use storage::{StorageBuffer, StorageUnit};
pub use string::{EncodedString, Utf8String, Utf16String};
pub use view::StrView;

/// "No position" / "to the end".
///
/// As a count it selects everything up to the end of the string; as the start
/// of a backward search it selects the last code point.
pub const NPOS: usize = usize::MAX;
