//! Fixture execution against the conversion engine.
//!
//! Derives the slot list from the conversions in each fixture's format,
//! runs the engine over an in-memory stream, and compares the assignment
//! count and final slot contents against the fixture's expectations.

use miniscan_core::scan::{Conversion, Directive, ScanSlot, parse_directives, scan};
use miniscan_core::stream::CharStream;

use crate::HarnessError;
use crate::config;
use crate::fixtures::{FixtureCase, FixtureSet, SlotExpectation};
use crate::structured_log::{LogEmitter, LogEntry, LogLevel, Outcome};

/// Backing storage for one derived slot.
#[derive(Debug, Clone, PartialEq)]
enum SlotValue {
    Int(i64),
    Char(u8),
    Word(Vec<u8>),
}

/// Result of one fixture case.
#[derive(Debug, Clone)]
pub struct CaseResult {
    pub name: String,
    pub outcome: Outcome,
    /// Comparison summary, populated on failure or engine error.
    pub detail: Option<String>,
}

/// Aggregate over one fixture set.
#[derive(Debug, Clone, Default)]
pub struct RunReport {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub errored: usize,
    pub results: Vec<CaseResult>,
}

impl RunReport {
    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.errored == 0
    }
}

/// Derive backing storage from the conversions in `format`, in order.
fn derive_storage(format: &[u8]) -> Vec<SlotValue> {
    parse_directives(format)
        .iter()
        .filter_map(|d| match d {
            Directive::Convert(Conversion::Decimal) => Some(SlotValue::Int(0)),
            Directive::Convert(Conversion::Char) => Some(SlotValue::Char(0)),
            Directive::Convert(Conversion::Word) => Some(SlotValue::Word(Vec::new())),
            _ => None,
        })
        .collect()
}

fn slot_matches(got: &SlotValue, want: &SlotExpectation) -> bool {
    match (got, want) {
        (SlotValue::Int(g), SlotExpectation::Int { value }) => g == value,
        (SlotValue::Char(g), SlotExpectation::Char { value }) => g == value,
        (SlotValue::Word(g), SlotExpectation::Word { value }) => g.as_slice() == value.as_bytes(),
        _ => false,
    }
}

/// Execute one fixture case.
pub fn run_case(case: &FixtureCase) -> CaseResult {
    let word_cap = config::word_capacity();
    let mut storage = derive_storage(case.format.as_bytes());
    let mut slots: Vec<ScanSlot<'_>> = storage
        .iter_mut()
        .map(|value| match value {
            SlotValue::Int(i) => ScanSlot::Int(i),
            SlotValue::Char(c) => ScanSlot::Char(c),
            SlotValue::Word(w) => ScanSlot::Word {
                buf: w,
                capacity: word_cap,
            },
        })
        .collect();

    let mut stream = CharStream::from_bytes(case.input.as_bytes());
    let count = match scan(&mut stream, case.format.as_bytes(), &mut slots) {
        Ok(n) => n,
        Err(e) => {
            return CaseResult {
                name: case.name.clone(),
                outcome: Outcome::Error,
                detail: Some(e.to_string()),
            };
        }
    };
    drop(slots);

    let mut mismatches = Vec::new();
    if count != case.expected_count {
        mismatches.push(format!(
            "count: expected {}, got {count}",
            case.expected_count
        ));
    }
    if storage.len() != case.expected_slots.len() {
        mismatches.push(format!(
            "slots: expected {}, derived {}",
            case.expected_slots.len(),
            storage.len()
        ));
    } else {
        for (i, (got, want)) in storage.iter().zip(&case.expected_slots).enumerate() {
            if !slot_matches(got, want) {
                mismatches.push(format!("slot {i}: expected {want:?}, got {got:?}"));
            }
        }
    }

    if mismatches.is_empty() {
        CaseResult {
            name: case.name.clone(),
            outcome: Outcome::Pass,
            detail: None,
        }
    } else {
        CaseResult {
            name: case.name.clone(),
            outcome: Outcome::Fail,
            detail: Some(mismatches.join("; ")),
        }
    }
}

/// Execute a fixture set, logging one entry per case.
pub fn run_set(
    set: &FixtureSet,
    emitter: &mut LogEmitter,
    timestamp: &str,
) -> Result<RunReport, HarnessError> {
    let mut report = RunReport::default();
    for case in &set.cases {
        let result = run_case(case);
        let level = match result.outcome {
            Outcome::Pass => LogLevel::Info,
            Outcome::Fail => LogLevel::Warn,
            Outcome::Error => LogLevel::Error,
        };
        emitter.emit(&LogEntry {
            timestamp: timestamp.to_string(),
            level,
            event: "fixture_case".into(),
            case: Some(result.name.clone()),
            outcome: Some(result.outcome),
            detail: result.detail.clone(),
        })?;
        report.total += 1;
        match result.outcome {
            Outcome::Pass => report.passed += 1,
            Outcome::Fail => report.failed += 1,
            Outcome::Error => report.errored += 1,
        }
        report.results.push(result);
    }
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::builtin_set;

    #[test]
    fn test_derive_storage_order() {
        let storage = derive_storage(b"%d %s %c %z");
        assert_eq!(
            storage,
            vec![
                SlotValue::Int(0),
                SlotValue::Word(Vec::new()),
                SlotValue::Char(0),
            ]
        );
    }

    #[test]
    fn test_single_case_pass() {
        let case = &builtin_set().cases[1]; // mixed_int_word_char
        let result = run_case(case);
        assert_eq!(result.outcome, Outcome::Pass, "{:?}", result.detail);
    }

    #[test]
    fn test_mismatch_is_reported_as_fail() {
        let mut case = builtin_set().cases[1].clone();
        case.expected_count = 99;
        let result = run_case(&case);
        assert_eq!(result.outcome, Outcome::Fail);
        assert!(result.detail.unwrap().contains("count"));
    }
}
