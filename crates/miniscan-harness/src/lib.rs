//! # miniscan-harness
//!
//! Conformance tooling for the miniscan conversion engine: JSON fixture
//! cases, a runner executing them against the engine over in-memory
//! streams, and structured JSONL logging of outcomes.

#![forbid(unsafe_code)]

use thiserror::Error;

pub mod config;
pub mod fixtures;
pub mod runner;
pub mod structured_log;

/// Errors from harness tooling (fixture I/O, log handling, engine
/// contract violations surfaced by a fixture).
#[derive(Debug, Error)]
pub enum HarnessError {
    #[error("harness I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("fixture or log JSON is malformed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("scan failed: {0}")]
    Scan(#[from] miniscan_core::scan::ScanError),
    #[error("log line is not a valid entry: {0}")]
    InvalidLogLine(String),
}
