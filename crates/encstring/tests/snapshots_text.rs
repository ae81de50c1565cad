#![expect(missing_docs)]

use core::fmt::Write;

use encstring::{EncodedString, Encoding, NPOS, Utf8, Utf8String, Utf16, Utf16String};

/// Apply a fixed edit script and record `(len, units, debug)` after each step.
fn edit_script<E: Encoding>() -> Vec<(usize, usize, String)> {
    let mut steps = Vec::new();
    let mut record =
        |s: &EncodedString<E>| steps.push((s.len(), s.size_storage(), format!("{s:?}")));

    let mut s = EncodedString::<E>::from("Hola");
    record(&s);
    s.insert(0, "¡").unwrap();
    record(&s);
    s.append(" 😀");
    record(&s);
    s.replace(1, 4, "Adiós").unwrap();
    record(&s);
    s.erase(6, NPOS);
    record(&s);
    s.resize(8, '!');
    record(&s);
    steps
}

#[test]
fn snapshot_edit_script() {
    let mut out = String::new();
    let rows = edit_script::<Utf8>().into_iter().zip(edit_script::<Utf16>());
    for ((len, utf8, text), (len16, utf16, text16)) in rows {
        assert_eq!((len, &text), (len16, &text16));
        writeln!(out, "len={len} utf8={utf8} utf16={utf16} {text}").unwrap();
    }

    insta::assert_snapshot!(out, @r#"
    len=4 utf8=4 utf16=4 "Hola"
    len=5 utf8=6 utf16=5 "¡Hola"
    len=7 utf8=11 utf16=8 "¡Hola 😀"
    len=8 utf8=13 utf16=9 "¡Adiós 😀"
    len=6 utf8=8 utf16=6 "¡Adiós"
    len=8 utf8=10 utf16=8 "¡Adiós!!"
    "#);
}

fn render_search_table(haystack: &str, needles: &[&str]) -> String {
    let s = Utf16String::from(haystack);
    let mut out = String::new();
    for &needle in needles {
        writeln!(
            out,
            "{needle:?}: find={:?} rfind={:?} first_of={:?} last_not_of={:?}",
            s.find(needle, 0),
            s.rfind(needle, NPOS),
            s.find_first_of(needle, 0),
            s.find_last_not_of(needle, NPOS),
        )
        .unwrap();
    }
    out
}

#[test]
fn snapshot_search_table() {
    insta::assert_snapshot!(render_search_table("abcdcd", &["cd", "d", "", "x"]), @r#"
    "cd": find=Some(2) rfind=Some(4) first_of=Some(2) last_not_of=Some(1)
    "d": find=Some(3) rfind=Some(5) first_of=Some(3) last_not_of=Some(4)
    "": find=Some(0) rfind=Some(6) first_of=None last_not_of=Some(5)
    "x": find=None rfind=None first_of=None last_not_of=Some(5)
    "#);
}

#[test]
fn snapshot_debug_escapes_like_str() {
    let s = Utf8String::from("tab\t\"q\" 'a' \u{7f}😀");
    assert_eq!(format!("{s:?}"), format!("{:?}", s.as_str()));
    insta::assert_snapshot!(format!("{s:?}"), @r#""tab\t\"q\" 'a' \u{7f}😀""#);
    assert_eq!(s.to_string(), "tab\t\"q\" 'a' \u{7f}😀");
}
