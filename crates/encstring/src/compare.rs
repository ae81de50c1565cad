//! Equality, ordering and hashing by code point.
//!
//! Strings compare equal when their code-point sequences are equal, even if
//! they are stored in different encodings. Ordering is lexicographic over
//! code points, which for UTF-8 agrees with byte order but for UTF-16 does
//! not agree with unit order above U+FFFF.

use core::{
    cmp::Ordering,
    hash::{Hash, Hasher},
};

use crate::{
    alloc_handle::Allocator,
    encoding::{Encoding, Utf8},
    string::EncodedString,
    view::StrView,
};

impl<E, F, A, B> PartialEq<EncodedString<F, B>> for EncodedString<E, A>
where
    E: Encoding,
    F: Encoding,
    A: Allocator,
    B: Allocator,
{
    fn eq(&self, other: &EncodedString<F, B>) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<E: Encoding, A: Allocator> Eq for EncodedString<E, A> {}

impl<E, F, A, B> PartialOrd<EncodedString<F, B>> for EncodedString<E, A>
where
    E: Encoding,
    F: Encoding,
    A: Allocator,
    B: Allocator,
{
    fn partial_cmp(&self, other: &EncodedString<F, B>) -> Option<Ordering> {
        Some(self.chars().cmp(other.chars()))
    }
}

impl<E: Encoding, A: Allocator> Ord for EncodedString<E, A> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars().cmp(other.chars())
    }
}

impl<E: Encoding, A: Allocator> Hash for EncodedString<E, A> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_view().hash(state);
    }
}

impl<E: Encoding, A: Allocator> PartialEq<str> for EncodedString<E, A> {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<E: Encoding, A: Allocator> PartialEq<&str> for EncodedString<E, A> {
    fn eq(&self, other: &&str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<E: Encoding, A: Allocator> PartialEq<EncodedString<E, A>> for str {
    fn eq(&self, other: &EncodedString<E, A>) -> bool {
        other == self
    }
}

impl<E: Encoding, A: Allocator> PartialEq<EncodedString<E, A>> for &str {
    fn eq(&self, other: &EncodedString<E, A>) -> bool {
        other == self
    }
}

impl<E: Encoding, A: Allocator> PartialEq<[char]> for EncodedString<E, A> {
    fn eq(&self, other: &[char]) -> bool {
        self.chars().eq(other.iter().copied())
    }
}

/// Byte-for-byte comparison with a narrow character run.
impl<A: Allocator> PartialEq<[u8]> for EncodedString<Utf8, A> {
    fn eq(&self, other: &[u8]) -> bool {
        self.as_units() == other
    }
}

impl<A: Allocator> PartialEq<&[u8]> for EncodedString<Utf8, A> {
    fn eq(&self, other: &&[u8]) -> bool {
        self.as_units() == *other
    }
}

impl<A: Allocator, const N: usize> PartialEq<[u8; N]> for EncodedString<Utf8, A> {
    fn eq(&self, other: &[u8; N]) -> bool {
        self.as_units() == other.as_slice()
    }
}

impl<A: Allocator> PartialEq<EncodedString<Utf8, A>> for [u8] {
    fn eq(&self, other: &EncodedString<Utf8, A>) -> bool {
        other == self
    }
}

impl<'a, E: Encoding, A: Allocator> PartialEq<StrView<'a, E>> for EncodedString<E, A> {
    fn eq(&self, other: &StrView<'a, E>) -> bool {
        self.as_units() == other.as_units()
    }
}

impl<E: Encoding> PartialEq for StrView<'_, E> {
    fn eq(&self, other: &Self) -> bool {
        self.as_units() == other.as_units()
    }
}

impl<E: Encoding> Eq for StrView<'_, E> {}

impl<E: Encoding> PartialOrd for StrView<'_, E> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<E: Encoding> Ord for StrView<'_, E> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.chars().cmp(other.chars())
    }
}

impl<E: Encoding> Hash for StrView<'_, E> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for ch in self.chars() {
            ch.hash(state);
        }
        state.write_u8(0xff);
    }
}

impl<E: Encoding> PartialEq<str> for StrView<'_, E> {
    fn eq(&self, other: &str) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<E: Encoding> PartialEq<&str> for StrView<'_, E> {
    fn eq(&self, other: &&str) -> bool {
        self.chars().eq(other.chars())
    }
}

#[cfg(test)]
mod tests {
    use core::hash::BuildHasher;
    use std::hash::RandomState;

    use rstest::*;

    use crate::{Utf8String, Utf16String};

    #[test]
    fn equality_crosses_encodings() {
        let a = Utf8String::from("grüß 😀");
        let b = Utf16String::from("grüß 😀");
        assert_eq!(a, b);
        assert_ne!(a, Utf16String::from("grüß"));
        assert_eq!("grüß 😀", a);
        assert_eq!(a, *['g', 'r', 'ü', 'ß', ' ', '😀'].as_slice());
    }

    #[test]
    fn utf8_compares_with_narrow_bytes() {
        let s = Utf8String::from("grüß");
        assert_eq!(s, *"grüß".as_bytes());
        assert_eq!(s, "grüß".as_bytes());
        assert_eq!(Utf8String::from("abc"), *b"abc");
        assert_ne!(Utf8String::from("abc"), *b"abcd");
        assert_ne!(Utf8String::from("ü"), *b"u");
        assert!(*b"".as_slice() == Utf8String::new());
    }

    #[rstest]
    #[case("", "a", core::cmp::Ordering::Less)]
    #[case("ab", "a", core::cmp::Ordering::Greater)]
    #[case("abc", "abd", core::cmp::Ordering::Less)]
    #[case("same", "same", core::cmp::Ordering::Equal)]
    // U+FFFD sorts before U+1F600 by code point even though its UTF-16 unit
    // 0xFFFD is larger than the high surrogate 0xD83D.
    #[case("\u{FFFD}", "😀", core::cmp::Ordering::Less)]
    fn ordering_is_by_code_point(
        #[case] left: &str,
        #[case] right: &str,
        #[case] expected: core::cmp::Ordering,
    ) {
        let l16 = Utf16String::from(left);
        let r16 = Utf16String::from(right);
        assert_eq!(l16.cmp(&r16), expected);
        assert_eq!(
            Utf8String::from(left).partial_cmp(&r16),
            Some(expected)
        );
    }

    #[test]
    fn hash_agrees_with_equality() {
        let state = RandomState::new();
        let a = Utf16String::from("hash me");
        let b = Utf16String::from_source("hash me");
        assert_eq!(state.hash_one(&a), state.hash_one(&b));
        assert_eq!(state.hash_one(&a), state.hash_one(a.as_view()));
    }
}
