#![no_main]

use arbitrary::Arbitrary;
use encstring::{EncodedString, Encoding, NPOS, Utf8, Utf16};
use libfuzzer_sys::fuzz_target;

/// One mutation, applied to the string under test and to a `Vec<char>` model.
#[derive(Arbitrary, Debug)]
enum Op {
    Push(char),
    Pop,
    Append(String),
    Insert(u8, String),
    Erase(u8, Option<u8>),
    Replace(u8, u8, String),
    Resize(u8, char),
    Truncate(u8),
    EraseAt(u8),
    AppendBytes(Vec<u8>),
    Clear,
    ShrinkToFit,
}

fn run<E: Encoding>(ops: &[Op]) {
    let mut s = EncodedString::<E>::new();
    let mut model: Vec<char> = Vec::new();

    for op in ops {
        match op {
            Op::Push(ch) => {
                s.push(*ch);
                model.push(*ch);
            }
            Op::Pop => assert_eq!(s.pop(), model.pop()),
            Op::Append(text) => {
                s.append(text);
                model.extend(text.chars());
            }
            Op::Insert(index, text) => {
                let index = usize::from(*index);
                let result = s.insert(index, text);
                assert_eq!(result.is_ok(), index <= model.len());
                if index <= model.len() {
                    model.splice(index..index, text.chars());
                }
            }
            Op::Erase(index, count) => {
                let index = usize::from(*index);
                let count = count.map_or(NPOS, usize::from);
                s.erase(index, count);
                let start = index.min(model.len());
                let end = start.saturating_add(count).min(model.len());
                model.drain(start..end);
            }
            Op::Replace(index, count, text) => {
                let (index, count) = (usize::from(*index), usize::from(*count));
                let ok = s.replace(index, count, text).is_ok();
                assert_eq!(ok, index <= model.len());
                if ok {
                    let end = (index + count).min(model.len());
                    model.splice(index..end, text.chars());
                }
            }
            Op::Resize(len, fill) => {
                s.resize(usize::from(*len), *fill);
                model.resize(usize::from(*len), *fill);
            }
            Op::Truncate(len) => {
                s.truncate(usize::from(*len));
                model.truncate(usize::from(*len));
            }
            Op::EraseAt(index) => {
                let index = usize::from(*index);
                if index < model.len() {
                    let position = s.cursor_at(index).position();
                    s.erase_at(position);
                    model.remove(index);
                }
            }
            Op::AppendBytes(bytes) => {
                let decoded = EncodedString::<E>::from_utf8_lossy(bytes);
                s.append(&decoded);
                model.extend(String::from_utf8_lossy(bytes).chars());
            }
            Op::Clear => {
                s.clear();
                model.clear();
            }
            Op::ShrinkToFit => s.shrink_to_fit(),
        }

        s.check_invariants();
        assert!(s.chars().eq(model.iter().copied()), "{s:?} != {model:?}");
    }
}

fuzz_target!(|ops: Vec<Op>| {
    run::<Utf8>(&ops);
    run::<Utf16>(&ops);
});
