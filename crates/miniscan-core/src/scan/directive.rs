//! Format-string directive parser.
//!
//! Splits a scan format into typed directives: whitespace skips, literal
//! runs, and `%`-conversions. The input-side mirror of a printf segment
//! parser.
//!
//! Reference: ISO C11 7.21.6.2 (fscanf), restricted to `%d`, `%c`, `%s`
//! with no width, length, or suppression modifiers.

use crate::ctype::is_space;

/// Conversion kind selected by the byte following `%`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// `%d`: optionally signed decimal integer, leading whitespace skipped.
    Decimal,
    /// `%c`: a single raw byte, no whitespace skip.
    Char,
    /// `%s`: a whitespace-delimited word.
    Word,
}

impl Conversion {
    /// Recognize a conversion byte. `None` for unknown specifiers.
    pub fn from_byte(b: u8) -> Option<Conversion> {
        match b {
            b'd' => Some(Conversion::Decimal),
            b'c' => Some(Conversion::Char),
            b's' => Some(Conversion::Word),
            _ => None,
        }
    }

    /// The specifier character this conversion is written as.
    pub fn specifier(self) -> char {
        match self {
            Conversion::Decimal => 'd',
            Conversion::Char => 'c',
            Conversion::Word => 's',
        }
    }
}

/// A parsed piece of a scan format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Directive<'a> {
    /// Skip zero or more whitespace bytes in the input.
    Whitespace,
    /// Bytes that must match the input exactly, one read per byte.
    Literal(&'a [u8]),
    /// A conversion that fills the next output slot.
    Convert(Conversion),
    /// An unrecognized specifier byte: skipped without consuming input or a
    /// slot. A trailing bare `%` parses the same way.
    Unknown(u8),
}

/// Parse a scan format into directives.
///
/// Runs of whitespace collapse into a single [`Directive::Whitespace`]
/// (skipping twice is skipping once); a literal run never contains `%` or
/// whitespace.
pub fn parse_directives(fmt: &[u8]) -> Vec<Directive<'_>> {
    let mut directives = Vec::new();
    let mut pos = 0;
    let len = fmt.len();

    while pos < len {
        if is_space(fmt[pos]) {
            while pos < len && is_space(fmt[pos]) {
                pos += 1;
            }
            directives.push(Directive::Whitespace);
            continue;
        }

        if fmt[pos] != b'%' {
            let start = pos;
            while pos < len && fmt[pos] != b'%' && !is_space(fmt[pos]) {
                pos += 1;
            }
            directives.push(Directive::Literal(&fmt[start..pos]));
            continue;
        }

        // Skip the '%'.
        pos += 1;
        if pos >= len {
            // Trailing bare '%': an unrecognized specifier with no byte.
            directives.push(Directive::Unknown(b'%'));
            break;
        }
        match Conversion::from_byte(fmt[pos]) {
            Some(conv) => directives.push(Directive::Convert(conv)),
            None => directives.push(Directive::Unknown(fmt[pos])),
        }
        pos += 1;
    }

    directives
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
