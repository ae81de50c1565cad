//! Encoding policies.
//!
//! A policy is a stateless strategy that knows how one encoding maps code
//! points to storage units. The container never inspects units itself; it
//! asks the policy to decode at a boundary, to step back to the previous
//! boundary, and to insert encoded copies of a code point.

mod utf16;
mod utf8;

pub use utf8::Utf8;
pub use utf16::Utf16;

use crate::{
    alloc_handle::Allocator,
    storage::{StorageBuffer, StorageUnit},
};

/// The decode/encode contract for one encoding.
///
/// Positions are offsets in storage units. Every method that takes a
/// position requires it to sit on a code-point boundary of well-formed data;
/// the container upholds this for its own buffer.
pub trait Encoding: Sized + 'static {
    /// The fixed-width storage unit.
    type Unit: StorageUnit;

    /// Human-readable encoding name, used in diagnostics.
    const NAME: &'static str;

    /// Most units a single code point can occupy. Never more than 4.
    const MAX_UNITS: usize;

    /// Decode the code point starting at `pos`, returning it together with
    /// the number of units it occupies. `None` if the units there are not a
    /// complete, well-formed code point.
    fn try_decode_at(units: &[Self::Unit], pos: usize) -> Option<(char, usize)>;

    /// Offset of the code point that ends at `pos`.
    ///
    /// `pos` must be a boundary greater than zero.
    fn prev_boundary(units: &[Self::Unit], pos: usize) -> usize;

    /// Number of units `ch` occupies.
    fn encoded_len(ch: char) -> usize;

    /// Encode `ch` into the front of `dst`, returning the units written.
    fn encode(ch: char, dst: &mut [Self::Unit; 4]) -> usize;

    /// Decode the code point starting at `pos`.
    ///
    /// Well-formed data never fails. On corrupt data this asserts in debug
    /// builds and yields U+FFFD over one unit otherwise.
    #[inline]
    fn decode_at(units: &[Self::Unit], pos: usize) -> (char, usize) {
        if let Some(decoded) = Self::try_decode_at(units, pos) {
            return decoded;
        }
        if cfg!(debug_assertions) {
            panic!("corrupt {} data at unit offset {pos}", Self::NAME);
        }
        (char::REPLACEMENT_CHARACTER, 1)
    }

    /// Insert `count` encoded copies of `ch` before `pos` and return the
    /// offset just past the inserted units.
    fn insert<A: Allocator>(
        buf: &mut StorageBuffer<Self::Unit, A>,
        pos: usize,
        ch: char,
        count: usize,
    ) -> usize {
        let mut scratch = [<Self::Unit as StorageUnit>::ZERO; 4];
        let len = Self::encode(ch, &mut scratch);
        buf.insert_repeated(pos, &scratch[..len], count)
    }

    /// `true` if `pos` is the end of `units` or the start of a well-formed
    /// code point.
    #[inline]
    fn is_boundary(units: &[Self::Unit], pos: usize) -> bool {
        pos == units.len() || Self::try_decode_at(units, pos).is_some()
    }

    /// Number of code points in well-formed `units`. Linear.
    fn count(units: &[Self::Unit]) -> usize {
        let mut pos = 0;
        let mut count = 0;
        while pos < units.len() {
            pos += Self::decode_at(units, pos).1;
            count += 1;
        }
        count
    }

    /// Check that `units` decode completely.
    ///
    /// # Errors
    ///
    /// Returns the offset of the first unit that does not start a
    /// well-formed code point.
    fn validate(units: &[Self::Unit]) -> Result<(), usize> {
        let mut pos = 0;
        while pos < units.len() {
            match Self::try_decode_at(units, pos) {
                Some((_, len)) => pos += len,
                None => return Err(pos),
            }
        }
        Ok(())
    }
}

/// Encodings whose units can carry raw narrow (byte) text directly.
///
/// Only these encodings accept a [`NarrowRun`](crate::NarrowRun) without the
/// [`AmbiguousEncoding`](crate::AmbiguousEncoding) opt-in.
pub trait NarrowCompatible: Encoding {}
