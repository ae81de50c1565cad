//! Substring and code-point-set searches.
//!
//! Every search returns a code-point index, with `None` for "not found".
//! Pattern matching is naive: each candidate start is compared code point by
//! code point, so the worst case is `O(n * m)`. Set scans test membership by
//! walking the set, which is fine for the short sets they are used with.
//!
//! Start indices follow one rule per direction. Forward searches begin at
//! `start` and find nothing when `start` is past the last code point, except
//! that an empty pattern matches at `min(start, len)`. Backward searches
//! clamp `start` to the last code point and consider candidates at or before
//! it; a match may extend past `start`.

use alloc::vec::Vec;

use crate::{
    alloc_handle::Allocator,
    cursor::{Cursor, Position},
    encoding::Encoding,
    source::Source,
    string::EncodedString,
    view::StrView,
};

/// `true` if the code points under `at` begin with `pattern`.
fn matches_at<E: Encoding>(at: Cursor<'_, E>, pattern: &Source<'_, E>) -> bool {
    let mut haystack = at.chars();
    pattern.chars().all(|p| haystack.next() == Some(p))
}

/// Cursor and index of `min(start, len)`.
fn forward_start<'a, E: Encoding>(view: StrView<'a, E>, start: usize) -> (Cursor<'a, E>, usize) {
    let mut cursor = view.begin();
    let mut index = 0;
    while index < start && !cursor.is_end() {
        cursor.advance();
        index += 1;
    }
    (cursor, index)
}

/// Cursor and index of `min(start, len - 1)`, or `None` for an empty view.
fn backward_start<'a, E: Encoding>(
    view: StrView<'a, E>,
    start: usize,
) -> Option<(Cursor<'a, E>, usize)> {
    let (mut cursor, mut index) = forward_start(view, start);
    if cursor.is_end() {
        if index == 0 {
            return None;
        }
        cursor.retreat();
        index -= 1;
    }
    Some((cursor, index))
}

/// Scan forward from `start` for the first code point satisfying `pred`.
fn scan_forward<E: Encoding>(
    view: StrView<'_, E>,
    start: usize,
    mut pred: impl FnMut(Cursor<'_, E>) -> bool,
) -> Option<usize> {
    let (mut cursor, mut index) = forward_start(view, start);
    while !cursor.is_end() {
        if pred(cursor) {
            return Some(index);
        }
        cursor.advance();
        index += 1;
    }
    None
}

/// Scan backward from `start` (clamped) for the last code point satisfying
/// `pred`.
fn scan_backward<E: Encoding>(
    view: StrView<'_, E>,
    start: usize,
    mut pred: impl FnMut(Cursor<'_, E>) -> bool,
) -> Option<usize> {
    let (mut cursor, mut index) = backward_start(view, start)?;
    loop {
        if pred(cursor) {
            return Some(index);
        }
        if cursor.is_start() {
            return None;
        }
        cursor.retreat();
        index -= 1;
    }
}

fn is_member<E: Encoding>(set: &Source<'_, E>, at: Cursor<'_, E>) -> bool {
    at.get().is_some_and(|ch| set.contains(ch))
}

impl<'a, E: Encoding> StrView<'a, E> {
    /// Index of the first occurrence of `pattern` at or after `start`.
    pub fn find<'p>(&self, pattern: impl Into<Source<'p, E>>, start: usize) -> Option<usize> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Some(forward_start(*self, start).1);
        }
        scan_forward(*self, start, |at| matches_at(at, &pattern))
    }

    /// Index of the last occurrence of `pattern` starting at or before
    /// `start`. Pass [`NPOS`](crate::NPOS) to search the whole string.
    pub fn rfind<'p>(&self, pattern: impl Into<Source<'p, E>>, start: usize) -> Option<usize> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Some(forward_start(*self, start).1);
        }
        scan_backward(*self, start, |at| matches_at(at, &pattern))
    }

    /// Cursor on the first occurrence of `pattern` at or after `from`.
    #[must_use]
    pub fn find_fast<'p>(
        &self,
        pattern: impl Into<Source<'p, E>>,
        from: Cursor<'a, E>,
    ) -> Option<Cursor<'a, E>> {
        let pattern = pattern.into();
        let mut cursor = from;
        loop {
            if matches_at(cursor, &pattern) && (!cursor.is_end() || pattern.is_empty()) {
                return Some(cursor);
            }
            if cursor.is_end() {
                return None;
            }
            cursor.advance();
        }
    }

    /// Cursor on the last occurrence of `pattern` that starts before `from`.
    #[must_use]
    pub fn rfind_fast<'p>(
        &self,
        pattern: impl Into<Source<'p, E>>,
        from: Cursor<'a, E>,
    ) -> Option<Cursor<'a, E>> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Some(from);
        }
        let mut cursor = from;
        while !cursor.is_start() {
            cursor.retreat();
            if matches_at(cursor, &pattern) {
                return Some(cursor);
            }
        }
        None
    }

    /// Index of the first code point at or after `start` that is in `set`.
    pub fn find_first_of<'p>(&self, set: impl Into<Source<'p, E>>, start: usize) -> Option<usize> {
        let set = set.into();
        if set.is_empty() {
            return None;
        }
        scan_forward(*self, start, |at| is_member(&set, at))
    }

    /// Index of the last code point at or before `start` that is in `set`.
    pub fn find_last_of<'p>(&self, set: impl Into<Source<'p, E>>, start: usize) -> Option<usize> {
        let set = set.into();
        if set.is_empty() {
            return None;
        }
        scan_backward(*self, start, |at| is_member(&set, at))
    }

    /// Index of the first code point at or after `start` that is not in
    /// `set`. An empty set matches at `start` when it is in range.
    pub fn find_first_not_of<'p>(
        &self,
        set: impl Into<Source<'p, E>>,
        start: usize,
    ) -> Option<usize> {
        let set = set.into();
        scan_forward(*self, start, |at| !is_member(&set, at))
    }

    /// Index of the last code point at or before `start` that is not in
    /// `set`. An empty set matches at the clamped `start`.
    pub fn find_last_not_of<'p>(
        &self,
        set: impl Into<Source<'p, E>>,
        start: usize,
    ) -> Option<usize> {
        let set = set.into();
        scan_backward(*self, start, |at| !is_member(&set, at))
    }

    /// `true` if the view begins with `pattern`.
    pub fn starts_with<'p>(&self, pattern: impl Into<Source<'p, E>>) -> bool {
        matches_at(self.begin(), &pattern.into())
    }

    /// `true` if the view ends with `pattern`.
    pub fn ends_with<'p>(&self, pattern: impl Into<Source<'p, E>>) -> bool {
        let needle: Vec<char> = pattern.into().chars().collect();
        let mut haystack = self.chars();
        needle.iter().rev().all(|&p| haystack.next_back() == Some(p))
    }

    /// `true` if `pattern` occurs anywhere in the view.
    pub fn contains<'p>(&self, pattern: impl Into<Source<'p, E>>) -> bool {
        self.find(pattern, 0).is_some()
    }
}

impl<E: Encoding, A: Allocator> EncodedString<E, A> {
    /// Index of the first occurrence of `pattern` at or after `start`.
    ///
    /// ```
    /// use encstring::Utf8String;
    ///
    /// let s = Utf8String::from("abcdcd");
    /// assert_eq!(s.find("cd", 0), Some(2));
    /// assert_eq!(s.find("cd", 3), Some(4));
    /// assert_eq!(s.find('x', 0), None);
    /// ```
    pub fn find<'p>(&self, pattern: impl Into<Source<'p, E>>, start: usize) -> Option<usize> {
        self.as_view().find(pattern, start)
    }

    /// Index of the last occurrence of `pattern` starting at or before
    /// `start`. Pass [`NPOS`](crate::NPOS) to search the whole string.
    pub fn rfind<'p>(&self, pattern: impl Into<Source<'p, E>>, start: usize) -> Option<usize> {
        self.as_view().rfind(pattern, start)
    }

    /// Position of the first occurrence of `pattern` at or after `from`.
    ///
    /// Unlike [`find`](Self::find) this neither takes nor returns an index,
    /// so it does not rewalk the string from the start.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not a code-point boundary of this string.
    pub fn find_fast<'p>(
        &self,
        pattern: impl Into<Source<'p, E>>,
        from: Position,
    ) -> Option<Position> {
        self.as_view()
            .find_fast(pattern, self.cursor(from))
            .map(|cursor| cursor.position())
    }

    /// Position of the last occurrence of `pattern` that starts before
    /// `from`.
    ///
    /// # Panics
    ///
    /// Panics if `from` is not a code-point boundary of this string.
    pub fn rfind_fast<'p>(
        &self,
        pattern: impl Into<Source<'p, E>>,
        from: Position,
    ) -> Option<Position> {
        self.as_view()
            .rfind_fast(pattern, self.cursor(from))
            .map(|cursor| cursor.position())
    }

    /// Index of the first code point at or after `start` that is in `set`.
    pub fn find_first_of<'p>(&self, set: impl Into<Source<'p, E>>, start: usize) -> Option<usize> {
        self.as_view().find_first_of(set, start)
    }

    /// Index of the last code point at or before `start` that is in `set`.
    pub fn find_last_of<'p>(&self, set: impl Into<Source<'p, E>>, start: usize) -> Option<usize> {
        self.as_view().find_last_of(set, start)
    }

    /// Index of the first code point at or after `start` that is not in
    /// `set`.
    pub fn find_first_not_of<'p>(
        &self,
        set: impl Into<Source<'p, E>>,
        start: usize,
    ) -> Option<usize> {
        self.as_view().find_first_not_of(set, start)
    }

    /// Index of the last code point at or before `start` that is not in
    /// `set`.
    pub fn find_last_not_of<'p>(
        &self,
        set: impl Into<Source<'p, E>>,
        start: usize,
    ) -> Option<usize> {
        self.as_view().find_last_not_of(set, start)
    }

    /// `true` if the string begins with `pattern`.
    pub fn starts_with<'p>(&self, pattern: impl Into<Source<'p, E>>) -> bool {
        self.as_view().starts_with(pattern)
    }

    /// `true` if the string ends with `pattern`.
    pub fn ends_with<'p>(&self, pattern: impl Into<Source<'p, E>>) -> bool {
        self.as_view().ends_with(pattern)
    }

    /// `true` if `pattern` occurs anywhere in the string.
    pub fn contains<'p>(&self, pattern: impl Into<Source<'p, E>>) -> bool {
        self.as_view().contains(pattern)
    }
}
