
use alloc::{string::String, vec::Vec};

use quickcheck::{Arbitrary, Gen};

/// Iteration count for quickcheck properties.
fn quickcheck_tests() -> u64 {
    if cfg!(any(miri, feature = "test-fast")) {
        10
    } else if is_ci::cached() {
        10_000
    } else {
        1_000
    }
}

/// One mutation applied to both an encoded string and a `Vec<char>` model.
#[derive(Clone, Debug)]
enum Op {
    Push(char),
    Pop,
    Append(String),
    Insert(usize, String),
    Erase(usize, usize),
    Replace(usize, usize, String),
    Resize(usize, char),
    Truncate(usize),
    Clear,
}

/// Small indices, so most positional ops land inside the string.
fn small(g: &mut Gen) -> usize {
    usize::arbitrary(g) % 24
}

impl Arbitrary for Op {
    fn arbitrary(g: &mut Gen) -> Self {
        match u8::arbitrary(g) % 9 {
            0 => Op::Push(char::arbitrary(g)),
            1 => Op::Pop,
            2 => Op::Append(String::arbitrary(g)),
            3 => Op::Insert(small(g), String::arbitrary(g)),
            4 => Op::Erase(small(g), small(g)),
            5 => Op::Replace(small(g), small(g), String::arbitrary(g)),
            6 => Op::Resize(small(g), char::arbitrary(g)),
            7 => Op::Truncate(small(g)),
            _ => Op::Clear,
        }
    }
}

/// Apply `op` to the reference model.
fn apply_to_model(model: &mut Vec<char>, op: &Op) {
    match op {
        Op::Push(ch) => model.push(*ch),
        Op::Pop => {
            model.pop();
        }
        Op::Append(text) => model.extend(text.chars()),
        Op::Insert(index, text) => {
            if *index <= model.len() {
                model.splice(*index..*index, text.chars());
            }
        }
        Op::Erase(index, count) => {
            let start = (*index).min(model.len());
            let end = start.saturating_add(*count).min(model.len());
            model.drain(start..end);
        }
        Op::Replace(index, count, text) => {
            if *index <= model.len() {
                let end = index.saturating_add(*count).min(model.len());
                model.splice(*index..end, text.chars());
            }
        }
        Op::Resize(len, fill) => model.resize(*len, *fill),
        Op::Truncate(len) => model.truncate(*len),
        Op::Clear => model.clear(),
    }
}
