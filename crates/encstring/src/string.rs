//! The encoded string container and its mutating operations.
//!
//! Storage is one flat buffer of units plus a sentinel, so appending is
//! amortized `O(1)` while anything addressed by code-point index walks from
//! the start. [`EncodedString::size_storage`] is the cheap length;
//! [`EncodedString::len`] is the expensive one. Neither is cached.

use core::{
    fmt::{self, Write as _},
    iter, mem,
    marker::PhantomData,
    ops::{Add, AddAssign, Range},
    slice,
};

use crate::{
    NPOS,
    alloc_handle::{Allocator, DefaultAllocator},
    cursor::{Chars, Cursor, Position, RevCursor},
    encoding::{Encoding, Utf8, Utf16},
    error::{Result, StringError},
    source::Source,
    storage::StorageBuffer,
    view::{StrView, debug_quoted},
};

/// A string stored in encoding `E` and addressed by code point.
///
/// # Examples
///
/// ```
/// use encstring::Utf16String;
///
/// let mut s = Utf16String::from("Hola");
/// s.insert(0, '¡')?;
/// assert_eq!(s, "¡Hola");
/// assert_eq!(s.len(), 5);
/// assert_eq!(s.size_storage(), 5);
/// # Ok::<(), encstring::StringError>(())
/// ```
pub struct EncodedString<E: Encoding, A: Allocator = DefaultAllocator> {
    buf: StorageBuffer<E::Unit, A>,
    _encoding: PhantomData<E>,
}

/// A UTF-8 encoded string.
pub type Utf8String<A = DefaultAllocator> = EncodedString<Utf8, A>;

/// A UTF-16 encoded string.
pub type Utf16String<A = DefaultAllocator> = EncodedString<Utf16, A>;

impl<E: Encoding> EncodedString<E> {
    /// An empty string on the global heap.
    #[must_use]
    pub fn new() -> Self {
        Self::new_in(DefaultAllocator)
    }

    /// An empty string with room for `units` storage units.
    #[must_use]
    pub fn with_capacity(units: usize) -> Self {
        Self::with_capacity_in(units, DefaultAllocator)
    }

    /// `count` copies of `ch`.
    #[must_use]
    pub fn repeat(count: usize, ch: char) -> Self {
        Self::from_source(Source::Repeat(count, ch))
    }

    /// A string holding the code points of `source`.
    #[must_use]
    pub fn from_source<'a>(source: impl Into<Source<'a, E>>) -> Self {
        let mut out = Self::new();
        out.append(source);
        out
    }

    /// A copy of `other`'s code points `[start, start + count)`, clamped.
    #[must_use]
    pub fn from_substr<B: Allocator>(
        other: &EncodedString<E, B>,
        start: usize,
        count: usize,
    ) -> Self {
        Self::from_source(other.as_view().slice(start, count))
    }

    /// A string holding exactly `units`, which must be well formed.
    ///
    /// # Errors
    ///
    /// [`StringError::InvalidEncoding`] if the units do not decode completely.
    pub fn try_from_units(units: &[E::Unit]) -> Result<Self> {
        Ok(Self::from_source(StrView::try_new(units)?))
    }
}

impl<E: Encoding, A: Allocator> EncodedString<E, A> {
    /// An empty string drawing from `alloc`.
    pub fn new_in(alloc: A) -> Self {
        Self::from_buffer(StorageBuffer::new_in(alloc))
    }

    /// An empty string drawing from `alloc`, with room for `units` storage
    /// units.
    pub fn with_capacity_in(units: usize, alloc: A) -> Self {
        Self::from_buffer(StorageBuffer::with_capacity_in(units, alloc))
    }

    fn from_buffer(buf: StorageBuffer<E::Unit, A>) -> Self {
        Self {
            buf,
            _encoding: PhantomData,
        }
    }

    /// The allocator handle backing this string.
    pub fn allocator(&self) -> &A {
        self.buf.allocator()
    }

    /// A copy of this string drawing from `alloc`.
    pub fn clone_in<B: Allocator>(&self, alloc: B) -> EncodedString<E, B> {
        EncodedString::from_buffer(self.buf.clone_in(alloc))
    }

    // --- size ---

    /// Number of code points. `O(n)`: walks the whole buffer.
    #[must_use]
    pub fn len(&self) -> usize {
        E::count(self.buf.content())
    }

    /// Number of storage units, sentinel excluded. `O(1)`.
    #[must_use]
    pub fn size_storage(&self) -> usize {
        self.buf.content_len()
    }

    /// `true` when the string holds no code points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buf.content_len() == 0
    }

    /// Allocated capacity in storage units, sentinel included.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    // --- raw access ---

    /// The encoded content, sentinel excluded.
    ///
    /// The slice borrows the live buffer, so no mutation can happen while it
    /// is held.
    #[must_use]
    pub fn as_units(&self) -> &[E::Unit] {
        self.buf.content()
    }

    /// The encoded content followed by the zero sentinel, for passing to
    /// APIs that expect terminated data.
    #[must_use]
    pub fn as_units_with_nul(&self) -> &[E::Unit] {
        self.buf.as_units_with_sentinel()
    }

    /// Pointer to the first unit of the zero-terminated content.
    ///
    /// Valid until the next mutation or until the string is dropped.
    #[must_use]
    pub fn as_ptr(&self) -> *const E::Unit {
        self.buf.as_ptr()
    }

    /// The storage units in order; reverse with `.rev()`.
    pub fn storage_units(&self) -> iter::Copied<slice::Iter<'_, E::Unit>> {
        self.buf.content().iter().copied()
    }

    /// Borrow the content as a view.
    #[must_use]
    pub fn as_view(&self) -> StrView<'_, E> {
        StrView::from_units_unchecked(self.buf.content())
    }

    // --- code-point access ---

    /// Iterate the code points.
    pub fn chars(&self) -> Chars<'_, E> {
        Chars::new(self.buf.content())
    }

    /// Cursor on the first code point.
    pub fn begin(&self) -> Cursor<'_, E> {
        Cursor::new(self.buf.content(), 0)
    }

    /// Cursor on the end (the sentinel's offset).
    pub fn end(&self) -> Cursor<'_, E> {
        Cursor::new(self.buf.content(), self.buf.content_len())
    }

    /// Reverse cursor on the last code point.
    pub fn rbegin(&self) -> RevCursor<'_, E> {
        RevCursor::new(self.end())
    }

    /// Reverse cursor past the first code point.
    pub fn rend(&self) -> RevCursor<'_, E> {
        RevCursor::new(self.begin())
    }

    /// Cursor on code point `index`, clamped to the end. `O(index)`.
    pub fn cursor_at(&self, index: usize) -> Cursor<'_, E> {
        self.begin().advanced_by(index)
    }

    /// Reattach a detached position.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not a code-point boundary of this string.
    pub fn cursor(&self, position: Position) -> Cursor<'_, E> {
        Cursor::new(self.buf.content(), self.check_position(position))
    }

    /// The code point at `index`, or `None` past the end. `O(index)`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<char> {
        self.cursor_at(index).get()
    }

    /// The first code point.
    #[must_use]
    pub fn front(&self) -> Option<char> {
        self.chars().next()
    }

    /// The last code point.
    #[must_use]
    pub fn back(&self) -> Option<char> {
        self.chars().next_back()
    }

    /// A copy of code points `[start, start + count)`. Both bounds clamp and
    /// [`NPOS`] as `count` means "to the end".
    #[must_use]
    pub fn substr(&self, start: usize, count: usize) -> Self
    where
        A: Clone,
    {
        let mut out = Self::new_in(self.allocator().clone());
        out.append(self.as_view().slice(start, count));
        out
    }

    // --- mutation ---

    /// Append one code point.
    pub fn push(&mut self, ch: char) {
        let end = self.buf.content_len();
        E::insert(&mut self.buf, end, ch, 1);
    }

    /// Remove and return the last code point.
    pub fn pop(&mut self) -> Option<char> {
        let end = self.buf.content_len();
        if end == 0 {
            return None;
        }
        let start = E::prev_boundary(self.buf.content(), end);
        let (ch, _) = E::decode_at(self.buf.content(), start);
        self.buf.erase_units(start..end);
        Some(ch)
    }

    /// Append `source` before the sentinel.
    pub fn append<'a>(&mut self, source: impl Into<Source<'a, E>>) -> &mut Self {
        let end = self.buf.content_len();
        source.into().write_into(&mut self.buf, end);
        self
    }

    /// Insert `source` before code point `index` and return the position of
    /// the first inserted code point.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if `index > self.len()`; the string is left
    /// unchanged.
    pub fn insert<'a>(
        &mut self,
        index: usize,
        source: impl Into<Source<'a, E>>,
    ) -> Result<Position> {
        let at = self.offset_of(index)?;
        source.into().write_into(&mut self.buf, at);
        Ok(Position::new(at))
    }

    /// Insert `source` before `position` and return the position of the first
    /// inserted code point.
    ///
    /// # Panics
    ///
    /// Panics if `position` is not a code-point boundary of this string.
    pub fn insert_at<'a>(
        &mut self,
        position: Position,
        source: impl Into<Source<'a, E>>,
    ) -> Position {
        let at = self.check_position(position);
        source.into().write_into(&mut self.buf, at);
        position
    }

    /// Erase code points `[index, index + count)`. Both bounds clamp and
    /// [`NPOS`] as `count` means "to the end".
    pub fn erase(&mut self, index: usize, count: usize) -> &mut Self {
        let span = self.storage_span(index, count);
        self.buf.erase_units(span);
        self
    }

    /// Erase the code point at `position` and return the position of the code
    /// point that followed it.
    ///
    /// # Panics
    ///
    /// Panics if `position` is the end or not a code-point boundary.
    pub fn erase_at(&mut self, position: Position) -> Position {
        let span = self.cursor(position).storage_range();
        assert!(!span.is_empty(), "erase_at called with the end position");
        self.buf.erase_units(span);
        position
    }

    /// Erase the code points between `first` and `last` and return `first`.
    ///
    /// # Panics
    ///
    /// Panics if either position is not a boundary or `first > last`.
    pub fn erase_range(&mut self, first: Position, last: Position) -> Position {
        let span = self.check_range(first, last);
        self.buf.erase_units(span);
        first
    }

    /// Replace the whole content with `source`.
    pub fn assign<'a>(&mut self, source: impl Into<Source<'a, E>>) -> &mut Self {
        self.buf.reset_to_sentinel();
        self.append(source)
    }

    /// Replace the whole content with `other`'s code points
    /// `[start, start + count)`, clamped.
    pub fn assign_substr<B: Allocator>(
        &mut self,
        other: &EncodedString<E, B>,
        start: usize,
        count: usize,
    ) -> &mut Self {
        self.assign(other.as_view().slice(start, count))
    }

    /// Replace code points `[index, index + count)` with `source`. `count`
    /// clamps to the end of the string.
    ///
    /// # Errors
    ///
    /// [`StringError::OutOfRange`] if `index > self.len()`; the string is left
    /// unchanged.
    pub fn replace<'a>(
        &mut self,
        index: usize,
        count: usize,
        source: impl Into<Source<'a, E>>,
    ) -> Result<&mut Self> {
        let at = self.offset_of(index)?;
        let end = Cursor::<E>::new(self.buf.content(), at).advanced_by(count).storage_position();
        self.buf.erase_units(at..end);
        source.into().write_into(&mut self.buf, at);
        Ok(self)
    }

    /// Replace the code points between `first` and `last` with `source` and
    /// return the position of the first inserted code point.
    ///
    /// # Panics
    ///
    /// Panics if either position is not a boundary or `first > last`.
    pub fn replace_range<'a>(
        &mut self,
        first: Position,
        last: Position,
        source: impl Into<Source<'a, E>>,
    ) -> Position {
        let span = self.check_range(first, last);
        let at = self.buf.erase_units(span);
        source.into().write_into(&mut self.buf, at);
        first
    }

    /// Grow to `len` code points by appending copies of `fill`, or shrink by
    /// erasing trailing code points.
    pub fn resize(&mut self, len: usize, fill: char) {
        let mut cursor = self.begin();
        let mut walked = 0;
        while walked < len && !cursor.is_end() {
            cursor.advance();
            walked += 1;
        }
        let at = cursor.storage_position();
        if walked < len {
            E::insert(&mut self.buf, at, fill, len - walked);
        } else {
            let end = self.buf.content_len();
            self.buf.erase_units(at..end);
        }
    }

    /// [`resize`](Self::resize) filling with U+0000.
    pub fn resize_default(&mut self, len: usize) {
        self.resize(len, '\0');
    }

    /// Keep only the first `len` code points.
    pub fn truncate(&mut self, len: usize) {
        let at = self.cursor_at(len).storage_position();
        let end = self.buf.content_len();
        self.buf.erase_units(at..end);
    }

    /// Erase everything, keeping the allocation.
    pub fn clear(&mut self) {
        self.buf.reset_to_sentinel();
    }

    /// Reserve room for at least `additional` more storage units.
    pub fn reserve(&mut self, additional: usize) {
        self.buf.reserve(additional);
    }

    /// Drop unused capacity.
    pub fn shrink_to_fit(&mut self) {
        self.buf.shrink_to_fit();
    }

    /// Exchange contents (and allocators) with `other`.
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(self, other);
    }

    /// Assert the storage invariants: the sentinel is present and last, and
    /// the content decodes into whole code points.
    ///
    /// # Panics
    ///
    /// Panics if an invariant does not hold.
    #[cfg(any(test, feature = "fuzzing"))]
    pub fn check_invariants(&self) {
        let with_nul = self.buf.as_units_with_sentinel();
        assert_eq!(with_nul.len(), self.size_storage() + 1, "sentinel missing");
        assert_eq!(with_nul.last(), Some(&<E::Unit as crate::storage::StorageUnit>::ZERO));
        assert_eq!(E::validate(self.as_units()), Ok(()), "content is not well formed");

        let mut steps = 0;
        let mut cursor = self.begin();
        while !cursor.is_end() {
            cursor.advance();
            steps += 1;
        }
        assert_eq!(steps, self.len(), "walk and count disagree");
    }

    // --- helpers ---

    /// Storage offset of code point `index`, which may equal the length.
    fn offset_of(&self, index: usize) -> Result<usize> {
        let mut cursor = self.begin();
        for walked in 0..index {
            if cursor.is_end() {
                tracing::debug!(index, len = walked, encoding = E::NAME, "index out of range");
                return Err(StringError::OutOfRange { index, len: walked });
            }
            cursor.advance();
        }
        Ok(cursor.storage_position())
    }

    /// Storage span of code points `[index, index + count)`, clamped.
    fn storage_span(&self, index: usize, count: usize) -> Range<usize> {
        let first = self.cursor_at(index);
        let last = if count == NPOS { self.end() } else { first.advanced_by(count) };
        first.storage_position()..last.storage_position()
    }

    fn check_position(&self, position: Position) -> usize {
        let offset = position.storage_offset();
        assert!(
            offset <= self.buf.content_len() && E::is_boundary(self.buf.content(), offset),
            "position {offset} is not a code-point boundary of this {} string",
            E::NAME
        );
        offset
    }

    fn check_range(&self, first: Position, last: Position) -> Range<usize> {
        let start = self.check_position(first);
        let end = self.check_position(last);
        assert!(start <= end, "position range {start}..{end} is inverted");
        start..end
    }
}

impl<A: Allocator> EncodedString<Utf8, A> {
    /// The content as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.as_view().as_str()
    }
}

impl<A: Allocator> AsRef<str> for EncodedString<Utf8, A> {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl<E: Encoding, A: Allocator + Clone> Clone for EncodedString<E, A> {
    fn clone(&self) -> Self {
        self.clone_in(self.allocator().clone())
    }
}

impl<E: Encoding, A: Allocator + Default> Default for EncodedString<E, A> {
    fn default() -> Self {
        Self::new_in(A::default())
    }
}

impl<E: Encoding> FromIterator<char> for EncodedString<E> {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

impl<E: Encoding, A: Allocator> Extend<char> for EncodedString<E, A> {
    fn extend<I: IntoIterator<Item = char>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.reserve(iter.size_hint().0);
        iter.for_each(|ch| self.push(ch));
    }
}

impl<'a, E: Encoding, A: Allocator> Extend<&'a char> for EncodedString<E, A> {
    fn extend<I: IntoIterator<Item = &'a char>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied());
    }
}

impl<E: Encoding> From<&str> for EncodedString<E> {
    fn from(text: &str) -> Self {
        Self::from_source(text)
    }
}

impl<E: Encoding> From<char> for EncodedString<E> {
    fn from(ch: char) -> Self {
        Self::from_source(ch)
    }
}

impl<'a, E: Encoding> From<StrView<'a, E>> for EncodedString<E> {
    fn from(view: StrView<'a, E>) -> Self {
        Self::from_source(view)
    }
}

impl<E: Encoding, A: Allocator, B: Allocator> Add<&EncodedString<E, B>> for EncodedString<E, A> {
    type Output = Self;

    fn add(mut self, rhs: &EncodedString<E, B>) -> Self {
        self.append(rhs.as_view());
        self
    }
}

impl<E: Encoding, A: Allocator> Add<&str> for EncodedString<E, A> {
    type Output = Self;

    fn add(mut self, rhs: &str) -> Self {
        self.append(rhs);
        self
    }
}

impl<E: Encoding, A: Allocator> Add<char> for EncodedString<E, A> {
    type Output = Self;

    fn add(mut self, rhs: char) -> Self {
        self.push(rhs);
        self
    }
}

impl<E, A, B> AddAssign<&EncodedString<E, B>> for EncodedString<E, A>
where
    E: Encoding,
    A: Allocator,
    B: Allocator,
{
    fn add_assign(&mut self, rhs: &EncodedString<E, B>) {
        self.append(rhs.as_view());
    }
}

impl<E: Encoding, A: Allocator> AddAssign<&str> for EncodedString<E, A> {
    fn add_assign(&mut self, rhs: &str) {
        self.append(rhs);
    }
}

impl<E: Encoding, A: Allocator> AddAssign<char> for EncodedString<E, A> {
    fn add_assign(&mut self, rhs: char) {
        self.push(rhs);
    }
}

impl<E: Encoding, A: Allocator> fmt::Display for EncodedString<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|ch| f.write_char(ch))
    }
}

impl<E: Encoding, A: Allocator> fmt::Debug for EncodedString<E, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_quoted(self.chars(), f)
    }
}

impl<'a, E: Encoding, A: Allocator> IntoIterator for &'a EncodedString<E, A> {
    type Item = char;
    type IntoIter = Chars<'a, E>;

    fn into_iter(self) -> Chars<'a, E> {
        self.chars()
    }
}

#[cfg(test)]
mod tests {
    use alloc::{
        format,
        string::{String, ToString},
        vec::Vec,
    };

    use super::*;
    use crate::source::NarrowRun;

    #[test]
    fn new_string_is_sentinel_only() {
        let s = Utf8String::new();
        assert!(s.is_empty());
        assert_eq!(s.as_units_with_nul(), &[0]);
        s.check_invariants();
    }

    #[test]
    fn pop_removes_whole_code_points() {
        let mut s = Utf16String::from("a😀");
        assert_eq!(s.pop(), Some('😀'));
        assert_eq!(s.size_storage(), 1);
        assert_eq!(s.pop(), Some('a'));
        assert_eq!(s.pop(), None);
        s.check_invariants();
    }

    #[test]
    fn insert_returns_first_inserted_position() {
        let mut s = Utf8String::from("ac");
        let pos = s.insert(1, "bb").unwrap();
        assert_eq!(s, "abbc");
        assert_eq!(s.cursor(pos).get(), Some('b'));

        let pos = s.insert_at(s.end().position(), '!');
        assert_eq!(pos.storage_offset(), 4);
        assert_eq!(s, "abbc!");
    }

    #[test]
    fn out_of_range_insert_leaves_string_unchanged() {
        let mut s = Utf8String::from("hello");
        let err = s.insert(10, 'x').unwrap_err();
        assert_eq!(err, StringError::OutOfRange { index: 10, len: 5 });
        assert_eq!(s, "hello");
        assert!(s.replace(6, 1, "y").is_err());
        assert_eq!(s, "hello");
    }

    #[test]
    fn erase_clamps() {
        let mut s = Utf8String::from("abcdef");
        s.erase(4, NPOS);
        assert_eq!(s, "abcd");
        s.erase(1, 100);
        assert_eq!(s, "a");
        s.erase(9, 1);
        assert_eq!(s, "a");
    }

    #[test]
    fn erase_at_returns_following_position() {
        let mut s = Utf16String::from("x😀y");
        let pos = s.cursor_at(1).position();
        let next = s.erase_at(pos);
        assert_eq!(s.cursor(next).get(), Some('y'));
        assert_eq!(s, "xy");
    }

    #[test]
    #[should_panic(expected = "not a code-point boundary")]
    fn positions_inside_a_code_point_are_rejected() {
        let mut s = Utf8String::from("é");
        s.erase_range(Position::new(1), Position::new(2));
    }

    #[test]
    fn replace_handles_width_changes() {
        let mut s = Utf8String::from("a-b-c");
        s.replace(1, 1, "→").unwrap();
        assert_eq!(s, "a→b-c");
        s.replace(3, NPOS, (3, 'x')).unwrap();
        assert_eq!(s, "a→bxxx");

        let first = s.cursor_at(1).position();
        let last = s.cursor_at(2).position();
        let pos = s.replace_range(first, last, '=');
        assert_eq!(s, "a=bxxx");
        assert_eq!(s.cursor(pos).get(), Some('='));
        s.check_invariants();
    }

    #[test]
    fn resize_grows_and_shrinks() {
        let mut s = Utf16String::from("ab");
        s.resize(4, '😀');
        assert_eq!(s, "ab😀😀");
        assert_eq!(s.size_storage(), 6);
        s.resize(1, 'z');
        assert_eq!(s, "a");
        s.resize_default(2);
        assert_eq!(s.back(), Some('\0'));
        s.check_invariants();
    }

    #[test]
    fn assign_and_substr() {
        let source = Utf8String::from("hello world");
        let mut s = Utf8String::from("junk");
        s.assign_substr(&source, 6, NPOS);
        assert_eq!(s, "world");
        assert_eq!(source.substr(1, 3), "ell");
        assert_eq!(Utf8String::from_substr(&source, 20, 3), "");
        s.assign(NarrowRun::new(b"bytes"));
        assert_eq!(s, "bytes");
    }

    #[test]
    fn operators_concatenate() {
        let a = Utf16String::from("foo");
        let b = Utf16String::from("bar");
        let mut c = a.clone() + &b + '!' + "?";
        assert_eq!(c, "foobar!?");
        c += '.';
        c += &a;
        c += "";
        assert_eq!(c.to_string(), "foobar!?.foo");
    }

    #[test]
    fn raw_access_exposes_units() {
        let s = Utf8String::from("hé");
        assert_eq!(s.as_units(), "hé".as_bytes());
        assert_eq!(s.as_units_with_nul(), b"h\xC3\xA9\0");
        assert_eq!(s.storage_units().rev().collect::<Vec<u8>>(), [0xA9, 0xC3, b'h']);
        assert_eq!(s.as_str(), "hé");
        // SAFETY: the pointer addresses `size_storage() + 1` initialised units.
        let nul = unsafe { *s.as_ptr().add(s.size_storage()) };
        assert_eq!(nul, 0);
    }

    #[test]
    fn reverse_cursors_walk_backwards() {
        let s = Utf8String::from("abc");
        let mut rev = s.rbegin();
        let mut out = String::new();
        while rev != s.rend() {
            out.extend(rev.get());
            rev.advance();
        }
        assert_eq!(out, "cba");
    }

    #[test]
    fn try_from_units_validates() {
        assert!(Utf8String::try_from_units(b"ok").is_ok());
        assert_eq!(
            Utf8String::try_from_units(b"o\xFF").unwrap_err(),
            StringError::InvalidEncoding { valid_up_to: 1 }
        );
    }

    #[test]
    fn debug_is_quoted() {
        let s = Utf16String::from("it's \"x\"\n");
        assert_eq!(format!("{s:?}"), format!("{:?}", "it's \"x\"\n"));
    }

    #[test]
    fn swap_exchanges_content() {
        let mut a = Utf8String::from("a");
        let mut b = Utf8String::from("b");
        a.swap(&mut b);
        assert_eq!((a.as_str(), b.as_str()), ("b", "a"));
    }
}
