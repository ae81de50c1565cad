use super::{Encoding, NarrowCompatible};

/// UTF-8: one to four `u8` units per code point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Utf8;

#[inline]
fn is_continuation(byte: u8) -> bool {
    byte & 0xC0 == 0x80
}

impl Encoding for Utf8 {
    type Unit = u8;

    const NAME: &'static str = "UTF-8";
    const MAX_UNITS: usize = 4;

    #[inline]
    fn try_decode_at(units: &[u8], pos: usize) -> Option<(char, usize)> {
        let rest = units.get(pos..)?;
        match rest.first() {
            Some(&b) if b.is_ascii() => Some((char::from(b), 1)),
            Some(_) => match bstr::decode_utf8(rest) {
                (Some(ch), len) => Some((ch, len)),
                (None, _) => None,
            },
            None => None,
        }
    }

    #[inline]
    fn prev_boundary(units: &[u8], pos: usize) -> usize {
        debug_assert!(pos > 0 && pos <= units.len());
        let mut start = pos - 1;
        while start > 0 && pos - start < Self::MAX_UNITS && is_continuation(units[start]) {
            start -= 1;
        }
        start
    }

    #[inline]
    fn encoded_len(ch: char) -> usize {
        ch.len_utf8()
    }

    #[inline]
    fn encode(ch: char, dst: &mut [u8; 4]) -> usize {
        ch.encode_utf8(dst).len()
    }

    fn count(units: &[u8]) -> usize {
        units.iter().filter(|&&b| !is_continuation(b)).count()
    }
}

impl NarrowCompatible for Utf8 {}
