use super::Encoding;

/// UTF-16: one or two `u16` units per code point.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Utf16;

#[inline]
fn is_high_surrogate(unit: u16) -> bool {
    (0xD800..0xDC00).contains(&unit)
}

#[inline]
fn is_low_surrogate(unit: u16) -> bool {
    (0xDC00..0xE000).contains(&unit)
}

impl Encoding for Utf16 {
    type Unit = u16;

    const NAME: &'static str = "UTF-16";
    const MAX_UNITS: usize = 2;

    #[inline]
    fn try_decode_at(units: &[u16], pos: usize) -> Option<(char, usize)> {
        let rest = units.get(pos..)?;
        match char::decode_utf16(rest.iter().copied()).next()? {
            Ok(ch) => Some((ch, ch.len_utf16())),
            Err(_) => None,
        }
    }

    #[inline]
    fn prev_boundary(units: &[u16], pos: usize) -> usize {
        debug_assert!(pos > 0 && pos <= units.len());
        let last = pos - 1;
        if last > 0 && is_low_surrogate(units[last]) && is_high_surrogate(units[last - 1]) {
            last - 1
        } else {
            last
        }
    }

    #[inline]
    fn encoded_len(ch: char) -> usize {
        ch.len_utf16()
    }

    #[inline]
    fn encode(ch: char, dst: &mut [u16; 4]) -> usize {
        ch.encode_utf16(dst).len()
    }

    fn count(units: &[u16]) -> usize {
        units.iter().filter(|&&u| !is_low_surrogate(u)).count()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::*;

    #[test]
    fn surrogate_pairs_decode_as_one_code_point() {
        let units: Vec<u16> = "x😀".encode_utf16().collect();
        assert_eq!(Utf16::try_decode_at(&units, 1), Some(('😀', 2)));
        assert_eq!(Utf16::prev_boundary(&units, 3), 1);
        assert_eq!(Utf16::count(&units), 2);
    }

    #[test]
    fn unpaired_surrogates_are_rejected() {
        assert_eq!(Utf16::try_decode_at(&[0xD800], 0), None);
        assert_eq!(Utf16::try_decode_at(&[0xDC00, 0x61], 0), None);
        assert_eq!(Utf16::try_decode_at(&[0xD800, 0x61], 0), None);
    }

    #[test]
    fn encode_writes_pairs() {
        let mut buf = [0; 4];
        assert_eq!(Utf16::encode('😀', &mut buf), 2);
        assert_eq!(&buf[..2], &[0xD83D, 0xDE00]);
        assert_eq!(Utf16::encode('a', &mut buf), 1);
    }
}
