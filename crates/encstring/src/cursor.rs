//! Code-point cursors over encoded units.
//!
//! A [`Cursor`] always rests on a code-point boundary or on the end of the
//! content (the sentinel's offset). Stepping decodes one code point at a time,
//! so moving by `n` code points costs `O(n)` regardless of how it is spelled.
//!
//! Cursors borrow their string, so the borrow checker rules out use after a
//! mutation. Mutators instead take a detached [`Position`]; a `Position` kept
//! across a mutation of its string is a caller error that is not detected.
//! Mutators do check that a position lies on a boundary inside the content,
//! so misuse can produce wrong text but never malformed storage.

use core::{fmt, iter::FusedIterator, marker::PhantomData, ops::Range};

use crate::encoding::Encoding;

/// A detached storage offset into one string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position(usize);

impl Position {
    /// The position of the first code point (or the end of an empty string).
    pub const START: Self = Self(0);

    pub(crate) const fn new(offset: usize) -> Self {
        Self(offset)
    }

    /// Offset in storage units.
    #[must_use]
    pub const fn storage_offset(self) -> usize {
        self.0
    }
}

/// A bidirectional, borrowing cursor over the code points of a string or view.
pub struct Cursor<'a, E: Encoding> {
    units: &'a [E::Unit],
    pos: usize,
}

impl<'a, E: Encoding> Cursor<'a, E> {
    pub(crate) fn new(units: &'a [E::Unit], pos: usize) -> Self {
        debug_assert!(pos <= units.len());
        Self { units, pos }
    }

    /// The code point under the cursor, or `None` at the end.
    #[must_use]
    pub fn get(&self) -> Option<char> {
        if self.is_end() {
            None
        } else {
            Some(E::decode_at(self.units, self.pos).0)
        }
    }

    /// Move forward one code point. No effect at the end.
    pub fn advance(&mut self) {
        if !self.is_end() {
            self.pos += E::decode_at(self.units, self.pos).1;
        }
    }

    /// Move back one code point. No effect at the start.
    pub fn retreat(&mut self) {
        if self.pos > 0 {
            self.pos = E::prev_boundary(self.units, self.pos);
        }
    }

    /// A cursor up to `n` code points further on, stopping at the end.
    #[must_use]
    pub fn advanced_by(mut self, n: usize) -> Self {
        for _ in 0..n {
            if self.is_end() {
                break;
            }
            self.advance();
        }
        self
    }

    /// A cursor `n` code points away, stopping at either end.
    ///
    /// This takes `|n|` decoding steps.
    #[must_use]
    pub fn offset_by(mut self, n: isize) -> Self {
        if n >= 0 {
            self = self.advanced_by(n.unsigned_abs());
        } else {
            for _ in 0..n.unsigned_abs() {
                if self.pos == 0 {
                    break;
                }
                self.retreat();
            }
        }
        self
    }

    /// `true` when the cursor sits on the end of the content.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.pos == self.units.len()
    }

    /// `true` when the cursor sits on the first code point.
    #[must_use]
    pub fn is_start(&self) -> bool {
        self.pos == 0
    }

    /// Storage offset of the cursor.
    #[must_use]
    pub fn storage_position(&self) -> usize {
        self.pos
    }

    /// Storage units spanned by the code point under the cursor. Empty at the
    /// end.
    #[must_use]
    pub fn storage_range(&self) -> Range<usize> {
        if self.is_end() {
            self.pos..self.pos
        } else {
            self.pos..self.pos + E::decode_at(self.units, self.pos).1
        }
    }

    /// Detach the cursor from its borrow.
    #[must_use]
    pub fn position(&self) -> Position {
        Position(self.pos)
    }

    /// The remaining code points, starting under the cursor.
    #[must_use]
    pub fn chars(&self) -> Chars<'a, E> {
        Chars::new(&self.units[self.pos..])
    }
}

impl<E: Encoding> Clone for Cursor<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for Cursor<'_, E> {}

/// Cursors compare by position only.
impl<E: Encoding> PartialEq for Cursor<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.pos == other.pos
    }
}

impl<E: Encoding> Eq for Cursor<'_, E> {}

impl<E: Encoding> fmt::Debug for Cursor<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("encoding", &E::NAME)
            .field("pos", &self.pos)
            .finish()
    }
}

/// Reverse adapter over a [`Cursor`].
///
/// A reverse cursor built on forward position `p` reads the code point that
/// ends at `p`; advancing it retreats the base cursor.
pub struct RevCursor<'a, E: Encoding> {
    base: Cursor<'a, E>,
}

impl<'a, E: Encoding> RevCursor<'a, E> {
    /// Wrap a forward cursor.
    #[must_use]
    pub fn new(base: Cursor<'a, E>) -> Self {
        Self { base }
    }

    /// The forward cursor this adapter is built on.
    #[must_use]
    pub fn base(&self) -> Cursor<'a, E> {
        self.base
    }

    /// The code point before the base position, or `None` at the reverse end.
    #[must_use]
    pub fn get(&self) -> Option<char> {
        let mut prev = self.base;
        if prev.is_start() {
            return None;
        }
        prev.retreat();
        prev.get()
    }

    /// Step towards the start of the string.
    pub fn advance(&mut self) {
        self.base.retreat();
    }

    /// Step towards the end of the string.
    pub fn retreat(&mut self) {
        self.base.advance();
    }

    /// `true` once every code point has been visited.
    #[must_use]
    pub fn is_end(&self) -> bool {
        self.base.is_start()
    }
}

impl<E: Encoding> Clone for RevCursor<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for RevCursor<'_, E> {}

impl<E: Encoding> PartialEq for RevCursor<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.base == other.base
    }
}

impl<E: Encoding> Eq for RevCursor<'_, E> {}

impl<E: Encoding> fmt::Debug for RevCursor<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("RevCursor").field(&self.base).finish()
    }
}

/// Iterator over the code points of a string or view.
pub struct Chars<'a, E: Encoding> {
    units: &'a [E::Unit],
    front: usize,
    back: usize,
    _encoding: PhantomData<E>,
}

impl<'a, E: Encoding> Chars<'a, E> {
    pub(crate) fn new(units: &'a [E::Unit]) -> Self {
        Self {
            units,
            front: 0,
            back: units.len(),
            _encoding: PhantomData,
        }
    }

    /// The units not yet yielded from either end.
    #[must_use]
    pub fn as_units(&self) -> &'a [E::Unit] {
        &self.units[self.front..self.back]
    }
}

impl<E: Encoding> Iterator for Chars<'_, E> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        if self.front == self.back {
            return None;
        }
        let (ch, len) = E::decode_at(self.units, self.front);
        self.front += len;
        Some(ch)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining.div_ceil(E::MAX_UNITS), Some(remaining))
    }
}

impl<E: Encoding> DoubleEndedIterator for Chars<'_, E> {
    #[inline]
    fn next_back(&mut self) -> Option<char> {
        if self.front == self.back {
            return None;
        }
        self.back = E::prev_boundary(self.units, self.back);
        Some(E::decode_at(self.units, self.back).0)
    }
}

impl<E: Encoding> FusedIterator for Chars<'_, E> {}

impl<E: Encoding> Clone for Chars<'_, E> {
    fn clone(&self) -> Self {
        Self {
            units: self.units,
            front: self.front,
            back: self.back,
            _encoding: PhantomData,
        }
    }
}

impl<E: Encoding> fmt::Debug for Chars<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{string::String, vec::Vec};

    use super::*;
    use crate::encoding::{Utf8, Utf16};

    #[test]
    fn cursor_walks_whole_code_points() {
        let units = "a¡😀".as_bytes();
        let mut cursor = Cursor::<Utf8>::new(units, 0);
        let mut seen = String::new();
        let mut offsets = Vec::new();
        while let Some(ch) = cursor.get() {
            offsets.push(cursor.storage_position());
            seen.push(ch);
            cursor.advance();
        }
        assert_eq!(seen, "a¡😀");
        assert_eq!(offsets, [0, 1, 3]);
        assert!(cursor.is_end());

        cursor.retreat();
        assert_eq!(cursor.get(), Some('😀'));
        assert_eq!(cursor.storage_range(), 3..7);
    }

    #[test]
    fn offset_by_stops_at_both_ends() {
        let units: Vec<u16> = "x😀yz".encode_utf16().collect();
        let start = Cursor::<Utf16>::new(&units, 0);
        assert_eq!(start.offset_by(2).get(), Some('y'));
        assert!(start.offset_by(10).is_end());
        assert!(start.offset_by(3).offset_by(-7).is_start());
        assert_eq!(start.offset_by(4).offset_by(-3).get(), Some('😀'));
    }

    #[test]
    fn reverse_cursor_reads_one_behind() {
        let units = "abc".as_bytes();
        let end = Cursor::<Utf8>::new(units, units.len());
        let mut rev = RevCursor::new(end);
        let mut seen = String::new();
        while let Some(ch) = rev.get() {
            seen.push(ch);
            rev.advance();
        }
        assert_eq!(seen, "cba");
        assert!(rev.is_end());
        assert_eq!(rev.base(), Cursor::new(units, 0));
    }

    #[test]
    fn chars_meet_in_the_middle() {
        let text = "h€l😀o";
        let mut chars = Chars::<Utf8>::new(text.as_bytes());
        assert_eq!(chars.next(), Some('h'));
        assert_eq!(chars.next_back(), Some('o'));
        assert_eq!(chars.next_back(), Some('😀'));
        assert_eq!(chars.as_units(), "€l".as_bytes());
        assert_eq!(chars.collect::<String>(), "€l");
    }
}
