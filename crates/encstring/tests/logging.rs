#![expect(missing_docs)]

use std::{
    io,
    sync::{Arc, Mutex},
};

use encstring::{Utf8String, Utf16String};
use tracing_subscriber::{filter::LevelFilter, fmt::MakeWriter, util::SubscriberInitExt};

/// Collects formatted log lines in memory.
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn text(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

fn capture(level: LevelFilter, f: impl FnOnce()) -> String {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_max_level(level)
        .without_time()
        .finish();
    let guard = subscriber.set_default();
    f();
    drop(guard);
    capture.text()
}

#[test]
fn rejected_insert_is_logged() {
    let logs = capture(LevelFilter::DEBUG, || {
        let mut s = Utf8String::from("hello");
        assert!(s.insert(10, 'x').is_err());
    });
    assert!(logs.contains("index out of range"), "{logs}");
    assert!(logs.contains("index=10"), "{logs}");
    assert!(logs.contains("len=5"), "{logs}");
}

#[test]
fn lossy_decoding_reports_substitutions() {
    let logs = capture(LevelFilter::DEBUG, || {
        let s = Utf16String::from_utf8_lossy(b"a\xFFb\xFE");
        assert_eq!(s, "a\u{FFFD}b\u{FFFD}");
    });
    assert!(logs.contains("substituted U+FFFD"), "{logs}");
    assert!(logs.contains("replaced=2"), "{logs}");
}

#[test]
fn clean_input_logs_nothing_at_debug() {
    let logs = capture(LevelFilter::DEBUG, || {
        let mut s = Utf8String::from_utf8_lossy(b"clean");
        s.insert(5, '!').unwrap();
    });
    assert_eq!(logs, "");
}

#[test]
fn growth_and_conversion_are_traced() {
    let logs = capture(LevelFilter::TRACE, || {
        let mut wide = Utf16String::new();
        wide.append("enough text to grow the buffer past its first block");
        let _narrow = Utf8String::convert_from(&wide);
    });
    assert!(logs.contains("storage buffer grew"), "{logs}");
    assert!(logs.contains("converting string"), "{logs}");
}
