//! Re-encoding between strings, and lossy decoding of foreign unit arrays.

use bstr::ByteSlice;

use crate::{
    alloc_handle::{Allocator, DefaultAllocator},
    encoding::Encoding,
    string::EncodedString,
};

/// Re-encode `from` into `to`, replacing `to`'s previous content.
///
/// ```
/// use encstring::{Utf8String, Utf16String, convert};
///
/// let wide = Utf16String::from("naïve");
/// let mut narrow = Utf8String::new();
/// convert(&wide, &mut narrow);
/// assert_eq!(narrow.as_str(), "naïve");
/// assert_eq!(narrow.size_storage(), 6);
/// ```
pub fn convert<F, T, A, B>(from: &EncodedString<F, A>, to: &mut EncodedString<T, B>)
where
    F: Encoding,
    T: Encoding,
    A: Allocator,
    B: Allocator,
{
    tracing::trace!(
        from = F::NAME,
        to = T::NAME,
        units = from.size_storage(),
        "converting string"
    );
    to.clear();
    to.extend(from.chars());
}

fn note_substitutions(encoding: &'static str, replaced: usize) {
    if replaced > 0 {
        tracing::debug!(encoding, replaced, "substituted U+FFFD for malformed input");
    }
}

impl<E: Encoding> EncodedString<E, DefaultAllocator> {
    /// A copy of `other` re-encoded into `E`.
    #[must_use]
    pub fn convert_from<F: Encoding, B: Allocator>(other: &EncodedString<F, B>) -> Self {
        let mut out = Self::with_capacity(other.size_storage());
        convert(other, &mut out);
        out
    }

    /// Decode UTF-8 bytes, replacing each maximal malformed subsequence with
    /// U+FFFD.
    #[must_use]
    pub fn from_utf8_lossy(bytes: &[u8]) -> Self {
        let mut out = Self::with_capacity(bytes.len());
        let mut replaced = 0;
        for chunk in ByteSlice::utf8_chunks(bytes) {
            out.append(chunk.valid());
            if !chunk.invalid().is_empty() {
                out.push(char::REPLACEMENT_CHARACTER);
                replaced += 1;
            }
        }
        note_substitutions("UTF-8", replaced);
        out
    }

    /// Decode UTF-16 units, replacing each unpaired surrogate with U+FFFD.
    #[must_use]
    pub fn from_utf16_lossy(units: &[u16]) -> Self {
        let mut out = Self::with_capacity(units.len());
        let mut replaced = 0;
        for decoded in char::decode_utf16(units.iter().copied()) {
            out.push(decoded.unwrap_or_else(|_| {
                replaced += 1;
                char::REPLACEMENT_CHARACTER
            }));
        }
        note_substitutions("UTF-16", replaced);
        out
    }

    /// Decode UTF-32 code points up to the first zero, replacing values that
    /// are not scalar values with U+FFFD.
    #[must_use]
    pub fn from_utf32_lossy(units: &[u32]) -> Self {
        let mut out = Self::new();
        let mut replaced = 0;
        for &unit in units.iter().take_while(|&&unit| unit != 0) {
            out.push(char::from_u32(unit).unwrap_or_else(|| {
                replaced += 1;
                char::REPLACEMENT_CHARACTER
            }));
        }
        note_substitutions("UTF-32", replaced);
        out
    }
}
