use core::{
    fmt::{self, Write as _},
    marker::PhantomData,
};

use crate::{
    NPOS,
    cursor::{Chars, Cursor},
    encoding::{Encoding, Utf8},
    error::{Result, StringError},
};

/// A borrowed, read-only run of code points in encoding `E`.
///
/// A view never owns storage. It is produced by
/// [`EncodedString::as_view`](crate::EncodedString::as_view), by validating
/// raw units with [`StrView::try_new`], or from a `&str` for UTF-8, and can be
/// used anywhere a [`Source`](crate::Source) is accepted. Appending a view to
/// a string of the same encoding copies its units without re-encoding.
pub struct StrView<'a, E: Encoding> {
    units: &'a [E::Unit],
    _encoding: PhantomData<E>,
}

impl<'a, E: Encoding> StrView<'a, E> {
    /// Wrap units that are already known to be well formed.
    pub(crate) fn from_units_unchecked(units: &'a [E::Unit]) -> Self {
        Self {
            units,
            _encoding: PhantomData,
        }
    }

    /// Validate `units` and wrap them.
    ///
    /// # Errors
    ///
    /// [`StringError::InvalidEncoding`] if the units do not decode completely.
    pub fn try_new(units: &'a [E::Unit]) -> Result<Self> {
        E::validate(units).map_err(|valid_up_to| StringError::InvalidEncoding { valid_up_to })?;
        Ok(Self::from_units_unchecked(units))
    }

    /// Number of code points. `O(n)`.
    #[must_use]
    pub fn len(&self) -> usize {
        E::count(self.units)
    }

    /// Number of storage units. `O(1)`.
    #[must_use]
    pub fn size_storage(&self) -> usize {
        self.units.len()
    }

    /// `true` when the view holds no code points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// The viewed units.
    #[must_use]
    pub fn as_units(&self) -> &'a [E::Unit] {
        self.units
    }

    /// Iterate the code points.
    #[must_use]
    pub fn chars(&self) -> Chars<'a, E> {
        Chars::new(self.units)
    }

    /// Cursor on the first code point.
    #[must_use]
    pub fn begin(&self) -> Cursor<'a, E> {
        Cursor::new(self.units, 0)
    }

    /// Cursor on the end.
    #[must_use]
    pub fn end(&self) -> Cursor<'a, E> {
        Cursor::new(self.units, self.units.len())
    }

    /// Cursor on code point `index`, clamped to the end.
    #[must_use]
    pub fn cursor_at(&self, index: usize) -> Cursor<'a, E> {
        self.begin().advanced_by(index)
    }

    /// The code points `[start, start + count)`, both clamped. [`NPOS`] as
    /// `count` means "to the end".
    #[must_use]
    pub fn slice(&self, start: usize, count: usize) -> Self {
        let first = self.cursor_at(start);
        let rest = Self::from_units_unchecked(&self.units[first.storage_position()..]);
        let last = if count == NPOS {
            rest.end()
        } else {
            rest.cursor_at(count)
        };
        Self::from_units_unchecked(&rest.units[..last.storage_position()])
    }
}

impl<'a> StrView<'a, Utf8> {
    /// The view as a `&str`.
    #[must_use]
    pub fn as_str(&self) -> &'a str {
        // SAFETY: a UTF-8 view only ever wraps units that decode completely:
        // `try_new` validates them and every other constructor borrows a
        // string's content, which stays well formed.
        unsafe { core::str::from_utf8_unchecked(self.units) }
    }
}

impl<'a> From<&'a str> for StrView<'a, Utf8> {
    fn from(text: &'a str) -> Self {
        Self::from_units_unchecked(text.as_bytes())
    }
}

impl<E: Encoding> Clone for StrView<'_, E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E: Encoding> Copy for StrView<'_, E> {}

impl<E: Encoding> fmt::Debug for StrView<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        debug_quoted(self.chars(), f)
    }
}

impl<E: Encoding> fmt::Display for StrView<'_, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.chars().try_for_each(|ch| f.write_char(ch))
    }
}

/// Format code points like `str`'s `Debug`: quoted and escaped.
pub(crate) fn debug_quoted(
    chars: impl Iterator<Item = char>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    f.write_char('"')?;
    for ch in chars {
        if ch == '\'' {
            f.write_char(ch)?;
        } else {
            write!(f, "{}", ch.escape_debug())?;
        }
    }
    f.write_char('"')
}
