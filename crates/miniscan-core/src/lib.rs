//! # miniscan-core
//!
//! A minimal formatted-input conversion engine: reads bytes from an input
//! stream according to a format string containing literals, whitespace, and
//! the conversions `%d` (decimal integer), `%c` (single byte), and `%s`
//! (whitespace-delimited word).
//!
//! The engine is generic over a [`stream::ByteSource`] so it can run against
//! in-memory input in tests and benchmarks; [`scan::scan_stdin`] binds it to
//! the process-wide standard input cursor.

#![deny(unsafe_code)]

pub mod ctype;
pub mod scan;
pub mod stream;
