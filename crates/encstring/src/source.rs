//! The values accepted wherever text is appended, inserted, assigned,
//! replaced or searched for.
//!
//! Every such operation takes `impl Into<Source<'_, E>>`, so callers pass a
//! `char`, a `&str`, a `&[char]`, another string or view of the same encoding,
//! a `(count, char)` repetition, or an explicitly tagged [`NarrowRun`].

use alloc::{string::String, vec::Vec};
use core::{ffi::CStr, iter::RepeatN, marker::PhantomData, slice, str};

use bstr::ByteSlice;

use crate::{
    alloc_handle::Allocator,
    cursor::Chars,
    encoding::{Encoding, NarrowCompatible},
    storage::{StorageBuffer, StorageUnit},
    string::EncodedString,
    view::StrView,
};

/// Caller acknowledgement that a byte run is being read into an encoding that
/// does not natively hold narrow text.
///
/// The bytes are still read as UTF-8; the token only makes that assumption
/// visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AmbiguousEncoding {
    _private: (),
}

impl AmbiguousEncoding {
    /// Accept the UTF-8 interpretation of narrow bytes.
    #[must_use]
    pub const fn accept() -> Self {
        Self { _private: () }
    }
}

/// A run of narrow (byte) characters destined for an `E` string.
///
/// Bytes are read as UTF-8: each ASCII byte is one code point and malformed
/// sequences become U+FFFD. For encodings that are not
/// [`NarrowCompatible`], construction requires [`AmbiguousEncoding`].
///
/// ```compile_fail
/// use encstring::{NarrowRun, Utf16};
/// let _ = NarrowRun::<Utf16>::new(b"no opt-in");
/// ```
pub struct NarrowRun<'a, E: Encoding> {
    bytes: &'a [u8],
    _encoding: PhantomData<E>,
}

impl<'a, E: NarrowCompatible> NarrowRun<'a, E> {
    /// Wrap `bytes`.
    #[must_use]
    pub fn new(bytes: &'a [u8]) -> Self {
        Self::new_ambiguous(bytes, AmbiguousEncoding::accept())
    }

    /// Wrap a C string. `None` stands for a null pointer and yields an empty
    /// run.
    #[must_use]
    pub fn from_c_str(text: Option<&'a CStr>) -> Self {
        Self::from_c_str_ambiguous(text, AmbiguousEncoding::accept())
    }
}

impl<'a, E: Encoding> NarrowRun<'a, E> {
    /// Wrap `bytes` for any encoding.
    #[must_use]
    pub fn new_ambiguous(bytes: &'a [u8], _accept: AmbiguousEncoding) -> Self {
        Self {
            bytes,
            _encoding: PhantomData,
        }
    }

    /// [`from_c_str`](Self::from_c_str) for any encoding.
    #[must_use]
    pub fn from_c_str_ambiguous(text: Option<&'a CStr>, accept: AmbiguousEncoding) -> Self {
        Self::new_ambiguous(text.map_or(b"".as_slice(), CStr::to_bytes), accept)
    }

    /// The wrapped bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &'a [u8] {
        self.bytes
    }
}

impl<E: Encoding> Clone for NarrowRun<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for NarrowRun<'_, E> {}

impl<E: Encoding> core::fmt::Debug for NarrowRun<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("NarrowRun").field(&self.bytes.as_bstr()).finish()
    }
}

/// A sequence of code points to write into, or search for in, an `E` string.
pub enum Source<'a, E: Encoding> {
    /// One code point.
    Char(char),
    /// `count` copies of one code point.
    Repeat(usize, char),
    /// A slice of code points.
    CodePoints(&'a [char]),
    /// Rust text.
    Str(&'a str),
    /// A view in the same encoding, copied unit for unit.
    View(StrView<'a, E>),
    /// Narrow bytes read as UTF-8.
    Narrow(NarrowRun<'a, E>),
}

impl<'a, E: Encoding> Source<'a, E> {
    /// Iterate the code points of the source.
    #[must_use]
    pub fn chars(&self) -> SourceChars<'a, E> {
        let inner = match *self {
            Self::Char(ch) => Inner::Repeat(core::iter::repeat_n(ch, 1)),
            Self::Repeat(count, ch) => Inner::Repeat(core::iter::repeat_n(ch, count)),
            Self::CodePoints(points) => Inner::Slice(points.iter()),
            Self::Str(text) => Inner::Str(text.chars()),
            Self::View(view) => Inner::View(view.chars()),
            Self::Narrow(run) => Inner::Narrow(run.bytes.chars()),
        };
        SourceChars { inner }
    }

    /// `true` when the source yields no code points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match *self {
            Self::Char(_) => false,
            Self::Repeat(count, _) => count == 0,
            Self::CodePoints(points) => points.is_empty(),
            Self::Str(text) => text.is_empty(),
            Self::View(view) => view.is_empty(),
            Self::Narrow(run) => run.bytes.is_empty(),
        }
    }

    /// `true` if `ch` occurs in the source.
    pub(crate) fn contains(&self, ch: char) -> bool {
        match *self {
            Self::Char(c) | Self::Repeat(1.., c) => c == ch,
            Self::Repeat(0, _) => false,
            _ => self.chars().any(|c| c == ch),
        }
    }

    /// Write the source into `buf` before `pos`, returning the offset just
    /// past the written units.
    pub(crate) fn write_into<A: Allocator>(
        &self,
        buf: &mut StorageBuffer<E::Unit, A>,
        pos: usize,
    ) -> usize {
        match *self {
            Self::Char(ch) => E::insert(buf, pos, ch, 1),
            Self::Repeat(count, ch) => E::insert(buf, pos, ch, count),
            Self::View(view) => buf.insert_units(pos, view.as_units()),
            _ if pos == buf.content_len() => {
                // Appends never shift a tail, so encode in place.
                let mut end = pos;
                for ch in self.chars() {
                    end = E::insert(buf, end, ch, 1);
                }
                end
            }
            _ => {
                let units = self.encode_all();
                buf.insert_units(pos, &units)
            }
        }
    }

    fn encode_all(&self) -> Vec<E::Unit> {
        let mut out = Vec::new();
        let mut scratch = [<E::Unit as StorageUnit>::ZERO; 4];
        for ch in self.chars() {
            let len = E::encode(ch, &mut scratch);
            out.extend_from_slice(&scratch[..len]);
        }
        out
    }
}

impl<E: Encoding> Clone for Source<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for Source<'_, E> {}

impl<E: Encoding> core::fmt::Debug for Source<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Char(ch) => f.debug_tuple("Char").field(ch).finish(),
            Self::Repeat(count, ch) => f.debug_tuple("Repeat").field(count).field(ch).finish(),
            Self::CodePoints(points) => f.debug_tuple("CodePoints").field(points).finish(),
            Self::Str(text) => f.debug_tuple("Str").field(text).finish(),
            Self::View(view) => f.debug_tuple("View").field(view).finish(),
            Self::Narrow(run) => f.debug_tuple("Narrow").field(run).finish(),
        }
    }
}

/// Iterator over the code points of a [`Source`].
pub struct SourceChars<'a, E: Encoding> {
    inner: Inner<'a, E>,
}

enum Inner<'a, E: Encoding> {
    Repeat(RepeatN<char>),
    Slice(slice::Iter<'a, char>),
    Str(str::Chars<'a>),
    View(Chars<'a, E>),
    Narrow(bstr::Chars<'a>),
}

impl<E: Encoding> Iterator for SourceChars<'_, E> {
    type Item = char;

    #[inline]
    fn next(&mut self) -> Option<char> {
        match &mut self.inner {
            Inner::Repeat(it) => it.next(),
            Inner::Slice(it) => it.next().copied(),
            Inner::Str(it) => it.next(),
            Inner::View(it) => it.next(),
            Inner::Narrow(it) => it.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match &self.inner {
            Inner::Repeat(it) => it.size_hint(),
            Inner::Slice(it) => it.size_hint(),
            Inner::Str(it) => it.size_hint(),
            Inner::View(it) => it.size_hint(),
            Inner::Narrow(it) => it.size_hint(),
        }
    }
}

impl<E: Encoding> Clone for SourceChars<'_, E> {
    fn clone(&self) -> Self {
        let inner = match &self.inner {
            Inner::Repeat(it) => Inner::Repeat(it.clone()),
            Inner::Slice(it) => Inner::Slice(it.clone()),
            Inner::Str(it) => Inner::Str(it.clone()),
            Inner::View(it) => Inner::View(it.clone()),
            Inner::Narrow(it) => Inner::Narrow(it.clone()),
        };
        Self { inner }
    }
}

impl<E: Encoding> core::fmt::Debug for SourceChars<'_, E> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<E: Encoding> From<char> for Source<'_, E> {
    fn from(ch: char) -> Self {
        Self::Char(ch)
    }
}

impl<E: Encoding> From<(usize, char)> for Source<'_, E> {
    fn from((count, ch): (usize, char)) -> Self {
        Self::Repeat(count, ch)
    }
}

impl<'a, E: Encoding> From<&'a [char]> for Source<'a, E> {
    fn from(points: &'a [char]) -> Self {
        Self::CodePoints(points)
    }
}

impl<'a, E: Encoding, const N: usize> From<&'a [char; N]> for Source<'a, E> {
    fn from(points: &'a [char; N]) -> Self {
        Self::CodePoints(points)
    }
}

impl<'a, E: Encoding> From<&'a Vec<char>> for Source<'a, E> {
    fn from(points: &'a Vec<char>) -> Self {
        Self::CodePoints(points)
    }
}

impl<'a, E: Encoding> From<&'a str> for Source<'a, E> {
    fn from(text: &'a str) -> Self {
        Self::Str(text)
    }
}

impl<'a, E: Encoding> From<&'a String> for Source<'a, E> {
    fn from(text: &'a String) -> Self {
        Self::Str(text)
    }
}

impl<'a, E: Encoding> From<StrView<'a, E>> for Source<'a, E> {
    fn from(view: StrView<'a, E>) -> Self {
        Self::View(view)
    }
}

impl<'a, E: Encoding, A: Allocator> From<&'a EncodedString<E, A>> for Source<'a, E> {
    fn from(string: &'a EncodedString<E, A>) -> Self {
        Self::View(string.as_view())
    }
}

impl<'a, E: Encoding> From<NarrowRun<'a, E>> for Source<'a, E> {
    fn from(run: NarrowRun<'a, E>) -> Self {
        Self::Narrow(run)
    }
}
