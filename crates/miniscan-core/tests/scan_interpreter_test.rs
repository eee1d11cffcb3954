//! Integration test: format interpreter contract
//!
//! Validates the scan engine's observable behavior end to end: literal
//! matching and abort-with-pushback, whitespace absorption, conversion
//! dispatch and counting, unknown-specifier skipping, and the bounded-word
//! deviation.
//!
//! Run: cargo test -p miniscan-core --test scan_interpreter_test

use miniscan_core::scan::{EOF_MARKER, ScanError, ScanSlot, scan};
use miniscan_core::stream::{CharStream, MemorySource};

fn stream(input: &[u8]) -> CharStream<MemorySource> {
    CharStream::from_bytes(input)
}

// ---------------------------------------------------------------------------
// 1. Literal-only formats
// ---------------------------------------------------------------------------

#[test]
fn literal_only_format_consumes_all_input() {
    let mut s = stream(b"abc");
    let count = scan(&mut s, b"abc", &mut []).unwrap();
    assert_eq!(count, 0);
    assert_eq!(s.read(), None);
}

#[test]
fn literal_mismatch_aborts_with_pushback() {
    let mut s = stream(b"B123");
    let mut num = 0i64;
    let mut slots = [ScanSlot::Int(&mut num)];
    let count = scan(&mut s, b"A%d", &mut slots).unwrap();
    assert_eq!(count, 0);
    // The mismatched byte is readable again.
    assert_eq!(s.read(), Some(b'B'));
    assert_eq!(num, 0);
}

#[test]
fn literal_mismatch_skips_rest_of_format() {
    // After the aborted literal, the trailing conversion never runs.
    let mut s = stream(b"xyz");
    let mut ch = 0u8;
    let mut slots = [ScanSlot::Char(&mut ch)];
    let count = scan(&mut s, b"a%c", &mut slots).unwrap();
    assert_eq!(count, 0);
    assert_eq!(ch, 0);
    assert_eq!(s.read(), Some(b'x'));
}

#[test]
fn end_of_stream_during_literal_aborts() {
    let mut s = stream(b"ab");
    let count = scan(&mut s, b"abc", &mut []).unwrap();
    assert_eq!(count, 0);
    assert_eq!(s.read(), None);
}

// ---------------------------------------------------------------------------
// 2. Whitespace absorption
// ---------------------------------------------------------------------------

#[test]
fn whitespace_absorbs_any_amount_of_input_whitespace() {
    for input in [&b"   7"[..], &b" 7"[..], &b"7"[..]] {
        let mut s = stream(input);
        let mut num = 0i64;
        let mut slots = [ScanSlot::Int(&mut num)];
        let count = scan(&mut s, b" %d", &mut slots).unwrap();
        assert_eq!(count, 1, "input {input:?}");
        assert_eq!(num, 7, "input {input:?}");
    }
}

#[test]
fn format_whitespace_matches_tabs_and_newlines() {
    let mut s = stream(b"\t\n  ok");
    let count = scan(&mut s, b" ok", &mut []).unwrap();
    assert_eq!(count, 0);
    assert_eq!(s.read(), None);
}

// ---------------------------------------------------------------------------
// 3. Conversion dispatch
// ---------------------------------------------------------------------------

#[test]
fn mixed_conversions_fill_slots_in_order() {
    let mut s = stream(b"42 hello X");
    let mut num = 0i64;
    let mut word = Vec::new();
    let mut ch = 0u8;
    let mut slots = [
        ScanSlot::Int(&mut num),
        ScanSlot::Word {
            buf: &mut word,
            capacity: 64,
        },
        ScanSlot::Char(&mut ch),
    ];
    let count = scan(&mut s, b"%d %s %c", &mut slots).unwrap();
    assert_eq!(count, 3);
    assert_eq!(num, 42);
    assert_eq!(word, b"hello");
    assert_eq!(ch, b'X');
}

#[test]
fn decimal_without_digits_assigns_nothing() {
    let mut s = stream(b"abc");
    let mut num = 0i64;
    let mut slots = [ScanSlot::Int(&mut num)];
    let count = scan(&mut s, b"%d", &mut slots).unwrap();
    assert_eq!(count, 0);
    assert_eq!(num, 0);
    // The offending byte is still available.
    assert_eq!(s.read(), Some(b'a'));
}

#[test]
fn failed_decimal_consumes_slot_but_not_count() {
    // The slot list advances past a failed conversion; the next conversion
    // uses the next slot against the untouched input byte.
    let mut s = stream(b"ab");
    let mut num = 0i64;
    let mut ch = 0u8;
    let mut slots = [ScanSlot::Int(&mut num), ScanSlot::Char(&mut ch)];
    let count = scan(&mut s, b"%d%c", &mut slots).unwrap();
    assert_eq!(count, 1);
    assert_eq!(num, 0);
    assert_eq!(ch, b'a');
}

#[test]
fn negative_decimal() {
    let mut s = stream(b"-17");
    let mut num = 0i64;
    let mut slots = [ScanSlot::Int(&mut num)];
    assert_eq!(scan(&mut s, b"%d", &mut slots).unwrap(), 1);
    assert_eq!(num, -17);
}

#[test]
fn char_reads_raw_without_whitespace_skip() {
    let mut s = stream(b" x");
    let mut ch = 0u8;
    let mut slots = [ScanSlot::Char(&mut ch)];
    let count = scan(&mut s, b"%c", &mut slots).unwrap();
    assert_eq!(count, 1);
    assert_eq!(ch, b' ');
}

#[test]
fn char_at_end_of_stream_assigns_marker() {
    let mut s = stream(b"");
    let mut ch = 0u8;
    let mut slots = [ScanSlot::Char(&mut ch)];
    let count = scan(&mut s, b"%c", &mut slots).unwrap();
    // The conversion still counts; the slot holds the truncated sentinel.
    assert_eq!(count, 1);
    assert_eq!(ch, EOF_MARKER);
}

#[test]
fn word_stops_at_whitespace_and_discards_terminator() {
    let mut s = stream(b"hello world");
    let mut word = Vec::new();
    let mut slots = [ScanSlot::Word {
        buf: &mut word,
        capacity: 64,
    }];
    let count = scan(&mut s, b"%s", &mut slots).unwrap();
    assert_eq!(count, 1);
    assert_eq!(word, b"hello");
    assert_eq!(s.read(), Some(b'w'));
}

#[test]
fn word_of_whitespace_only_input_is_empty() {
    let mut s = stream(b"   ");
    let mut word = b"stale".to_vec();
    let mut slots = [ScanSlot::Word {
        buf: &mut word,
        capacity: 64,
    }];
    let count = scan(&mut s, b"%s", &mut slots).unwrap();
    assert_eq!(count, 1);
    assert!(word.is_empty());
}

#[test]
fn word_at_end_of_stream_is_empty_and_counts() {
    let mut s = stream(b"");
    let mut word = Vec::new();
    let mut slots = [ScanSlot::Word {
        buf: &mut word,
        capacity: 64,
    }];
    let count = scan(&mut s, b"%s", &mut slots).unwrap();
    assert_eq!(count, 1);
    assert!(word.is_empty());
}

#[test]
fn word_overflow_is_reported() {
    let mut s = stream(b"overflow");
    let mut word = Vec::new();
    let mut slots = [ScanSlot::Word {
        buf: &mut word,
        capacity: 4,
    }];
    assert_eq!(
        scan(&mut s, b"%s", &mut slots),
        Err(ScanError::WordOverflow { capacity: 4 })
    );
}

// ---------------------------------------------------------------------------
// 4. Unknown specifiers
// ---------------------------------------------------------------------------

#[test]
fn unknown_specifier_consumes_nothing() {
    let mut s = stream(b"42");
    let mut num = 0i64;
    let mut slots = [ScanSlot::Int(&mut num)];
    // `%z` skips: no input read, no slot consumed, no count increment.
    let count = scan(&mut s, b"%z%d", &mut slots).unwrap();
    assert_eq!(count, 1);
    assert_eq!(num, 42);
}

#[test]
fn unknown_specifier_alone_returns_zero() {
    let mut s = stream(b"anything");
    let count = scan(&mut s, b"%z", &mut []).unwrap();
    assert_eq!(count, 0);
    assert_eq!(s.read(), Some(b'a'));
}

#[test]
fn trailing_percent_is_skipped() {
    let mut s = stream(b"7");
    let mut num = 0i64;
    let mut slots = [ScanSlot::Int(&mut num)];
    let count = scan(&mut s, b"%d%", &mut slots).unwrap();
    assert_eq!(count, 1);
    assert_eq!(num, 7);
}

// ---------------------------------------------------------------------------
// 5. Slot-contract violations
// ---------------------------------------------------------------------------

#[test]
fn missing_slot_is_reported() {
    let mut s = stream(b"1 2");
    let mut num = 0i64;
    let mut slots = [ScanSlot::Int(&mut num)];
    assert_eq!(
        scan(&mut s, b"%d %d", &mut slots),
        Err(ScanError::MissingSlot)
    );
}

#[test]
fn slot_kind_mismatch_is_reported() {
    let mut s = stream(b"42");
    let mut ch = 0u8;
    let mut slots = [ScanSlot::Char(&mut ch)];
    assert_eq!(
        scan(&mut s, b"%d", &mut slots),
        Err(ScanError::SlotKind { conversion: 'd' })
    );
}
