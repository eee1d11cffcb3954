//! Typed destination slots for conversions.
//!
//! Replaces untyped variadic argument extraction with an ordered,
//! statically checked sequence of tagged destination handles. The
//! interpreter consumes them strictly in order, one per conversion
//! encountered in the format.

use thiserror::Error;

/// One caller-owned destination, tagged by conversion kind.
#[derive(Debug)]
pub enum ScanSlot<'a> {
    /// Destination for `%d`.
    Int(&'a mut i64),
    /// Destination for `%c`.
    Char(&'a mut u8),
    /// Destination for `%s`. The buffer is cleared before the word is
    /// collected; its final length is the word length (no terminator byte).
    Word {
        buf: &'a mut Vec<u8>,
        /// Maximum number of word bytes accepted before the scan fails
        /// with [`ScanError::WordOverflow`].
        capacity: usize,
    },
}

/// Failures the engine reports through `Err`.
///
/// Input-level failure — a literal mismatch, premature end of stream, or a
/// digitless `%d` — is never an `Err`; it is expressed through the returned
/// assignment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScanError {
    /// A word exceeded the destination capacity. The bounded replacement
    /// for an unchecked destination write.
    #[error("word exceeds destination capacity of {capacity} bytes")]
    WordOverflow { capacity: usize },
    /// The format contains more conversions than the caller supplied
    /// destinations for.
    #[error("format requires more destination slots than were supplied")]
    MissingSlot,
    /// The next destination's kind does not match the conversion.
    #[error("destination slot kind does not match `%{conversion}`")]
    SlotKind { conversion: char },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ScanError::WordOverflow { capacity: 4 }.to_string(),
            "word exceeds destination capacity of 4 bytes"
        );
        assert_eq!(
            ScanError::SlotKind { conversion: 'd' }.to_string(),
            "destination slot kind does not match `%d`"
        );
    }
}
