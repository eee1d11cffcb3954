//! Formatted input conversion.
//!
//! The format-string interpreter: parses a format into typed directives,
//! then drives byte-at-a-time stream consumption to fill caller-owned
//! destination slots.

pub mod directive;
pub mod interpreter;
pub mod slots;

pub use directive::{Conversion, Directive, parse_directives};
pub use interpreter::{EOF_MARKER, scan, scan_decimal, scan_stdin};
pub use slots::{ScanError, ScanSlot};
