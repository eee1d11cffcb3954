//! The format interpreter loop.
//!
//! Drives byte-at-a-time input consumption according to parsed directives
//! and fills caller-owned slots in order. All input-level failure is
//! expressed through the returned assignment count; `Err` is reserved for
//! the bounded-word overflow and slot-contract violations.
//!
//! Reference: ISO C11 7.21.6.2 (fscanf), restricted to `%d`, `%c`, `%s`
//! with no width, length, or suppression modifiers.

use super::directive::{Conversion, Directive, parse_directives};
use super::slots::{ScanError, ScanSlot};
use crate::ctype::{is_digit, is_space};
use crate::stream::{ByteSource, CharStream, stdin_stream};

/// Byte stored by `%c` when the stream has already ended: the C `EOF`
/// sentinel truncated to a byte. The conversion still counts as assigned.
pub const EOF_MARKER: u8 = 0xFF;

/// Interpret `format` against `stream`, filling `slots` in order.
///
/// Returns the number of conversions assigned. A literal mismatch pushes
/// the offending byte back and ends the whole interpretation with the
/// partial count; end of stream during a literal compare ends it without
/// pushback. Unknown specifiers are skipped without touching input or
/// slots.
pub fn scan<S: ByteSource>(
    stream: &mut CharStream<S>,
    format: &[u8],
    slots: &mut [ScanSlot<'_>],
) -> Result<usize, ScanError> {
    let mut assigned = 0;
    let mut next_slot = 0;

    for directive in parse_directives(format) {
        match directive {
            Directive::Whitespace => skip_whitespace(stream),
            Directive::Literal(run) => {
                for &expected in run {
                    match stream.read() {
                        Some(b) if b == expected => {}
                        Some(b) => {
                            stream.unread(b);
                            return Ok(assigned);
                        }
                        None => return Ok(assigned),
                    }
                }
            }
            Directive::Convert(conv) => {
                let slot = slots.get_mut(next_slot).ok_or(ScanError::MissingSlot)?;
                next_slot += 1;
                if convert(stream, conv, slot)? {
                    assigned += 1;
                }
            }
            Directive::Unknown(_) => {}
        }
    }

    Ok(assigned)
}

/// Interpret `format` against the process-wide standard input stream.
///
/// Locks the shared cursor for the whole interpretation, so concurrent
/// callers serialize at call granularity and the read position cannot
/// interleave.
pub fn scan_stdin(format: &[u8], slots: &mut [ScanSlot<'_>]) -> Result<usize, ScanError> {
    let mut stream = stdin_stream().lock();
    scan(&mut stream, format, slots)
}

/// Dispatch one conversion into its slot. Returns whether the assignment
/// count advances; the slot is consumed either way.
fn convert<S: ByteSource>(
    stream: &mut CharStream<S>,
    conv: Conversion,
    slot: &mut ScanSlot<'_>,
) -> Result<bool, ScanError> {
    match (conv, slot) {
        (Conversion::Decimal, ScanSlot::Int(dest)) => match scan_decimal(stream) {
            Some(value) => {
                **dest = value;
                Ok(true)
            }
            None => Ok(false),
        },
        (Conversion::Char, ScanSlot::Char(dest)) => {
            **dest = stream.read().unwrap_or(EOF_MARKER);
            Ok(true)
        }
        (Conversion::Word, ScanSlot::Word { buf, capacity }) => {
            collect_word(stream, buf, *capacity)?;
            Ok(true)
        }
        (conv, _) => Err(ScanError::SlotKind {
            conversion: conv.specifier(),
        }),
    }
}

/// Read-and-discard whitespace, pushing back the first non-whitespace byte.
fn skip_whitespace<S: ByteSource>(stream: &mut CharStream<S>) {
    while let Some(b) = stream.read() {
        if !is_space(b) {
            stream.unread(b);
            break;
        }
    }
}

/// Scan an optionally signed decimal integer, skipping leading whitespace.
///
/// The digit run saturates to `i64::MIN`/`i64::MAX` on overflow while still
/// consuming every digit; the terminating non-digit is pushed back. Returns
/// `None` when no digit is found. Recovery from a failed scan is limited to
/// one byte of pushback: a consumed sign followed by a non-digit leaves the
/// sign byte lost.
pub fn scan_decimal<S: ByteSource>(stream: &mut CharStream<S>) -> Option<i64> {
    let mut b = stream.read()?;
    while is_space(b) {
        b = stream.read()?;
    }

    let mut negative = false;
    if b == b'-' || b == b'+' {
        negative = b == b'-';
        b = stream.read()?;
    }
    if !is_digit(b) {
        stream.unread(b);
        return None;
    }

    let abs_max: u64 = if negative {
        9_223_372_036_854_775_808u64
    } else {
        9_223_372_036_854_775_807u64
    };
    let cutoff = abs_max / 10;
    let cutlim = abs_max % 10;

    let mut acc: u64 = 0;
    let mut overflow = false;
    loop {
        let digit = u64::from(b - b'0');
        if !overflow {
            if acc > cutoff || (acc == cutoff && digit > cutlim) {
                overflow = true;
            } else {
                acc = acc * 10 + digit;
            }
        }
        match stream.read() {
            Some(nb) if is_digit(nb) => b = nb,
            Some(nb) => {
                stream.unread(nb);
                break;
            }
            None => break,
        }
    }

    if overflow {
        return Some(if negative { i64::MIN } else { i64::MAX });
    }
    let value = if negative {
        (acc as i64).wrapping_neg()
    } else {
        acc as i64
    };
    Some(value)
}

/// Collect a whitespace-delimited word into `buf`, bounded by `capacity`.
/// The terminating whitespace byte is consumed and discarded, not pushed
/// back.
fn collect_word<S: ByteSource>(
    stream: &mut CharStream<S>,
    buf: &mut Vec<u8>,
    capacity: usize,
) -> Result<(), ScanError> {
    buf.clear();
    while let Some(b) = stream.read() {
        if is_space(b) {
            break;
        }
        if buf.len() == capacity {
            return Err(ScanError::WordOverflow { capacity });
        }
        buf.push(b);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
