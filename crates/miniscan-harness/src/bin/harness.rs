//! CLI entrypoint for the miniscan conformance harness.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Parser, Subcommand};

use miniscan_core::scan::{ScanSlot, scan_stdin};
use miniscan_harness::HarnessError;
use miniscan_harness::fixtures::{self, FixtureSet};
use miniscan_harness::structured_log::{LogEmitter, LogEntry, LogLevel};
use miniscan_harness::{config, runner};

/// Conformance tooling for miniscan.
#[derive(Debug, Parser)]
#[command(name = "miniscan-harness")]
#[command(about = "Conformance harness for the miniscan conversion engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Run fixture cases against the engine.
    Verify {
        /// Fixture JSON file (the builtin set when omitted).
        #[arg(long)]
        fixture: Option<PathBuf>,
        /// JSONL log output path (stdout when omitted).
        #[arg(long)]
        log: Option<PathBuf>,
        /// Fixed timestamp string for deterministic log output.
        #[arg(long)]
        timestamp: Option<String>,
    },
    /// Write the builtin fixture set as JSON.
    Export {
        /// Output path for the fixture JSON.
        #[arg(long)]
        output: PathBuf,
    },
    /// Interactive demonstration: scan `<int> <word> <char>` from stdin.
    Demo,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, HarnessError> {
    match cli.command {
        Command::Verify {
            fixture,
            log,
            timestamp,
        } => verify(fixture, log, timestamp),
        Command::Export { output } => {
            let json = fixtures::builtin_set().to_json()?;
            std::fs::write(&output, json)?;
            eprintln!("wrote builtin fixture set to {}", output.display());
            Ok(ExitCode::SUCCESS)
        }
        Command::Demo => demo(),
    }
}

fn verify(
    fixture: Option<PathBuf>,
    log: Option<PathBuf>,
    timestamp: Option<String>,
) -> Result<ExitCode, HarnessError> {
    let timestamp = timestamp.unwrap_or_else(now_unix);

    let (set, loaded_detail) = match fixture {
        Some(path) => {
            let content = std::fs::read_to_string(&path)?;
            let set = FixtureSet::from_json(&content)?;
            let digest = fixtures::sha256_hex(content.as_bytes());
            let detail = format!(
                "family={} cases={} source={} sha256={digest}",
                set.family,
                set.cases.len(),
                path.display()
            );
            (set, detail)
        }
        None => {
            let set = fixtures::builtin_set();
            let detail = format!("family={} cases={} source=builtin", set.family, set.cases.len());
            (set, detail)
        }
    };

    let mut emitter = match log {
        Some(path) => LogEmitter::to_file(&path)?,
        None => LogEmitter::to_stdout(),
    };
    emitter.emit(&LogEntry {
        timestamp: timestamp.clone(),
        level: LogLevel::Info,
        event: "fixture_set_loaded".into(),
        case: None,
        outcome: None,
        detail: Some(loaded_detail),
    })?;

    let report = runner::run_set(&set, &mut emitter, &timestamp)?;
    emitter.flush()?;

    eprintln!(
        "{} cases: {} passed, {} failed, {} errored",
        report.total, report.passed, report.failed, report.errored
    );
    for result in &report.results {
        if let Some(detail) = &result.detail {
            eprintln!("  {}: {detail}", result.name);
        }
    }

    Ok(if report.all_passed() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

fn demo() -> Result<ExitCode, HarnessError> {
    println!("Enter: <int> <string> <char>");

    let mut number = 0i64;
    let mut name = Vec::new();
    let mut grade = 0u8;
    let capacity = config::word_capacity();
    let mut slots = [
        ScanSlot::Int(&mut number),
        ScanSlot::Word {
            buf: &mut name,
            capacity,
        },
        ScanSlot::Char(&mut grade),
    ];
    let assigned = scan_stdin(b"%d %s %c", &mut slots)?;

    println!("You entered ({assigned} of 3 assigned):");
    println!("Number: {number}");
    println!("Name: {}", String::from_utf8_lossy(&name));
    println!("Grade: {}", grade as char);

    Ok(ExitCode::SUCCESS)
}

fn now_unix() -> String {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs().to_string())
        .unwrap_or_else(|_| "0".into())
}
