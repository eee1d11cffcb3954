//! Fixture loading and management.

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt::Write as _;
use std::path::Path;

use crate::HarnessError;

/// Expected final content of one destination slot.
///
/// Slots the engine never assigned keep their initial values (`0`, `0`,
/// empty), so every slot has a deterministic expected state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SlotExpectation {
    Int { value: i64 },
    Char { value: u8 },
    Word { value: String },
}

/// A single fixture test case.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureCase {
    /// Case identifier.
    pub name: String,
    /// Scan format string.
    pub format: String,
    /// Input presented to the engine.
    pub input: String,
    /// Expected assignment count.
    pub expected_count: usize,
    /// Expected final slot contents, one per conversion in `format`.
    pub expected_slots: Vec<SlotExpectation>,
}

/// A collection of fixture cases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FixtureSet {
    /// Schema version.
    pub version: String,
    /// Family name, used for log aggregation.
    pub family: String,
    /// Individual test cases.
    pub cases: Vec<FixtureCase>,
}

impl FixtureSet {
    /// Load a fixture set from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the fixture set to pretty JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Load a fixture set from a file path.
    pub fn from_file(path: &Path) -> Result<Self, HarnessError> {
        let content = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&content)?)
    }
}

/// SHA-256 of raw fixture bytes, hex encoded, for report integrity.
pub fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    let digest = hasher.finalize();
    let mut out = String::with_capacity(64);
    for b in digest {
        let _ = write!(out, "{b:02x}");
    }
    out
}

/// The builtin conformance set: the engine's observable contract.
pub fn builtin_set() -> FixtureSet {
    let cases = vec![
        FixtureCase {
            name: "literal_exact_match".into(),
            format: "abc".into(),
            input: "abc".into(),
            expected_count: 0,
            expected_slots: vec![],
        },
        FixtureCase {
            name: "mixed_int_word_char".into(),
            format: "%d %s %c".into(),
            input: "42 hello X".into(),
            expected_count: 3,
            expected_slots: vec![
                SlotExpectation::Int { value: 42 },
                SlotExpectation::Word {
                    value: "hello".into(),
                },
                SlotExpectation::Char { value: b'X' },
            ],
        },
        FixtureCase {
            name: "int_without_digits".into(),
            format: "%d".into(),
            input: "abc".into(),
            expected_count: 0,
            expected_slots: vec![SlotExpectation::Int { value: 0 }],
        },
        FixtureCase {
            name: "literal_mismatch_aborts".into(),
            format: "A%d".into(),
            input: "B123".into(),
            expected_count: 0,
            expected_slots: vec![SlotExpectation::Int { value: 0 }],
        },
        FixtureCase {
            name: "whitespace_absorbs_run".into(),
            format: " %d".into(),
            input: "   7".into(),
            expected_count: 1,
            expected_slots: vec![SlotExpectation::Int { value: 7 }],
        },
        FixtureCase {
            name: "whitespace_absorbs_single".into(),
            format: " %d".into(),
            input: " 7".into(),
            expected_count: 1,
            expected_slots: vec![SlotExpectation::Int { value: 7 }],
        },
        FixtureCase {
            name: "word_from_whitespace_is_empty".into(),
            format: "%s".into(),
            input: "   ".into(),
            expected_count: 1,
            expected_slots: vec![SlotExpectation::Word { value: "".into() }],
        },
        FixtureCase {
            name: "unknown_specifier_skipped".into(),
            format: "%z%d".into(),
            input: "42".into(),
            expected_count: 1,
            expected_slots: vec![SlotExpectation::Int { value: 42 }],
        },
        FixtureCase {
            name: "char_reads_raw_whitespace".into(),
            format: "%c".into(),
            input: " x".into(),
            expected_count: 1,
            expected_slots: vec![SlotExpectation::Char { value: b' ' }],
        },
        FixtureCase {
            name: "negative_decimal".into(),
            format: "%d".into(),
            input: "-17".into(),
            expected_count: 1,
            expected_slots: vec![SlotExpectation::Int { value: -17 }],
        },
        FixtureCase {
            name: "failed_decimal_then_char".into(),
            format: "%d%c".into(),
            input: "ab".into(),
            expected_count: 1,
            expected_slots: vec![
                SlotExpectation::Int { value: 0 },
                SlotExpectation::Char { value: b'a' },
            ],
        },
        FixtureCase {
            name: "char_at_stream_end".into(),
            format: "%c".into(),
            input: "".into(),
            expected_count: 1,
            expected_slots: vec![SlotExpectation::Char {
                value: miniscan_core::scan::EOF_MARKER,
            }],
        },
    ];

    FixtureSet {
        version: "1".into(),
        family: "scan".into(),
        cases,
    }
}
