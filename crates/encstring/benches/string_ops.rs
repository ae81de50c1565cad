//! Benchmark – `encstring::EncodedString` append, indexed access and search
#![allow(missing_docs)]

use std::time::Duration;

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use encstring::{EncodedString, Encoding, NPOS, Utf8, Utf16};

/// Deterministic mixed-width text of exactly `chars` code points: mostly
/// ASCII with a two-byte, three-byte and four-byte code point every few words.
fn make_text(chars: usize) -> String {
    const PATTERN: &str = "lorem ipsum é dolor € sit 😀 amet ";
    PATTERN.chars().cycle().take(chars).collect()
}

fn append_char_by_char<E: Encoding>(text: &str) -> usize {
    let mut s = EncodedString::<E>::new();
    for ch in text.chars() {
        s.push(ch);
    }
    s.size_storage()
}

fn bench_append(c: &mut Criterion) {
    let text = make_text(10_000);
    let mut group = c.benchmark_group("append");
    group.bench_function("utf8_push", |b| {
        b.iter(|| black_box(append_char_by_char::<Utf8>(black_box(&text))));
    });
    group.bench_function("utf16_push", |b| {
        b.iter(|| black_box(append_char_by_char::<Utf16>(black_box(&text))));
    });
    group.bench_function("utf8_append_str", |b| {
        b.iter(|| {
            let mut s = EncodedString::<Utf8>::new();
            s.append(black_box(text.as_str()));
            black_box(s.size_storage())
        });
    });
    group.finish();
}

/// Indexed access walks from the start, so cost grows with the index.
fn bench_indexed_access(c: &mut Criterion) {
    let s = EncodedString::<Utf16>::from(make_text(10_000).as_str());
    let mut group = c.benchmark_group("indexed_access");
    for &index in &[10usize, 1_000, 9_999] {
        group.bench_with_input(BenchmarkId::new("get", index), &index, |b, &i| {
            b.iter(|| black_box(s.get(black_box(i))));
        });
    }
    group.bench_function("len", |b| b.iter(|| black_box(s.len())));
    group.bench_function("size_storage", |b| b.iter(|| black_box(s.size_storage())));
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut text = make_text(10_000);
    text.push_str("needle");
    let utf8 = EncodedString::<Utf8>::from(text.as_str());
    let utf16 = EncodedString::<Utf16>::from(text.as_str());

    let mut group = c.benchmark_group("search");
    group.bench_function("utf8_find", |b| b.iter(|| black_box(utf8.find(black_box("needle"), 0))));
    group.bench_function("utf16_find", |b| {
        b.iter(|| black_box(utf16.find(black_box("needle"), 0)));
    });
    group.bench_function("utf16_rfind", |b| {
        b.iter(|| black_box(utf16.rfind(black_box("lorem"), NPOS)));
    });
    group.bench_function("utf8_find_first_of", |b| {
        b.iter(|| black_box(utf8.find_first_of(black_box("xyz"), 0)));
    });
    group.finish();
}

fn criterion() -> Criterion {
    let mut c = Criterion::default();
    if cfg!(feature = "bench-fast") {
        c = c
            .warm_up_time(Duration::from_millis(10))
            .measurement_time(Duration::from_millis(100))
            .sample_size(10);
    } else {
        c = c
            .warm_up_time(Duration::from_secs(3))
            .measurement_time(Duration::from_secs(5));
    }
    c
}

criterion_group! {
    name = benches;
    config = criterion();
    targets = bench_append, bench_indexed_access, bench_search
}
criterion_main!(benches);
