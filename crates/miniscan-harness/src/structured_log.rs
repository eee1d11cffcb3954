//! Structured logging for conformance runs.
//!
//! Provides:
//! - [`LogEntry`]: canonical JSONL log record.
//! - [`LogEmitter`]: writes JSONL lines to a file, stdout, or a sink.
//! - [`validate_log_line`] / [`validate_log_file`]: schema validators.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use crate::HarnessError;

/// Severity level for log entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Fixture case outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    /// Count and all slot contents matched.
    Pass,
    /// The engine ran but produced a different count or slot state.
    Fail,
    /// The engine reported a contract error for this fixture.
    Error,
}

/// Canonical structured log entry.
///
/// Required fields: `timestamp`, `level`, `event`. Optional fields carry
/// per-case context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: String,
    pub level: LogLevel,
    pub event: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub case: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

/// Writes JSONL log lines.
pub struct LogEmitter {
    out: Box<dyn Write>,
}

impl LogEmitter {
    /// Emit to standard output.
    pub fn to_stdout() -> Self {
        Self {
            out: Box::new(io::stdout()),
        }
    }

    /// Emit to a file, truncating any previous contents.
    pub fn to_file(path: &Path) -> Result<Self, HarnessError> {
        let file = File::create(path)?;
        Ok(Self {
            out: Box::new(BufWriter::new(file)),
        })
    }

    /// Discard all entries (quiet runs, tests).
    pub fn sink() -> Self {
        Self {
            out: Box::new(io::sink()),
        }
    }

    /// Write one entry as a JSONL line.
    pub fn emit(&mut self, entry: &LogEntry) -> Result<(), HarnessError> {
        let line = serde_json::to_string(entry)?;
        writeln!(self.out, "{line}")?;
        Ok(())
    }

    /// Flush buffered lines.
    pub fn flush(&mut self) -> Result<(), HarnessError> {
        self.out.flush()?;
        Ok(())
    }
}

/// Validate a single JSONL line against the schema.
pub fn validate_log_line(line: &str) -> Result<LogEntry, HarnessError> {
    let entry: LogEntry = serde_json::from_str(line)
        .map_err(|e| HarnessError::InvalidLogLine(format!("{e}: {line:?}")))?;
    if entry.timestamp.is_empty() {
        return Err(HarnessError::InvalidLogLine("empty timestamp".into()));
    }
    if entry.event.is_empty() {
        return Err(HarnessError::InvalidLogLine("empty event".into()));
    }
    Ok(entry)
}

/// Validate an entire JSONL file, returning its entries.
pub fn validate_log_file(path: &Path) -> Result<Vec<LogEntry>, HarnessError> {
    let content = std::fs::read_to_string(path)?;
    content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(validate_log_line)
        .collect()
}
