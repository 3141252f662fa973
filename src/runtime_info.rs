// src/runtime_info.rs - Runtime details reporter
use chrono::{DateTime, Local, Timelike};
use std::io::{self, Write};
use thiserror::Error;

use crate::system_info::SystemInfo;

/// Writing the report to its sink is the only fallible step.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Everything shown in a single runtime report.
#[derive(Debug, Clone, PartialEq)]
pub struct RuntimeDetails {
    pub script: String,
    pub version: String,
    pub script_path: String,
    pub current_time: DateTime<Local>,
    pub runtime: String,
}

impl RuntimeDetails {
    /// Details stamped with the time of this call.
    pub fn new(script: impl Into<String>, version: impl Into<String>, script_path: impl Into<String>) -> Self {
        Self::at(script, version, script_path, Local::now())
    }

    /// Details for an explicit point in time.
    pub fn at(
        script: impl Into<String>,
        version: impl Into<String>,
        script_path: impl Into<String>,
        current_time: DateTime<Local>,
    ) -> Self {
        Self {
            script: script.into(),
            version: version.into(),
            script_path: script_path.into(),
            current_time,
            runtime: runtime_descriptor(),
        }
    }
}

/// Compiler version and host platform, e.g. `1.80.0 (Linux-6.1.0-x86_64)`.
pub fn runtime_descriptor() -> String {
    SystemInfo::detect().descriptor()
}

/// `YYYY-MM-DD HH:MM:SS`, with `.ffffff` appended only for a non-zero microsecond part.
pub fn format_timestamp(time: &DateTime<Local>) -> String {
    let base = time.format("%Y-%m-%d %H:%M:%S").to_string();
    // Leap-second nanos (>= 1e9) fold back into the same second.
    let micros = (time.nanosecond() % 1_000_000_000) / 1_000;
    if micros == 0 {
        base
    } else {
        format!("{}.{:06}", base, micros)
    }
}

/// Write the five-line report block to `out`.
pub fn write_runtime_details<W: Write>(out: &mut W, details: &RuntimeDetails) -> Result<(), ReportError> {
    writeln!(out, "{} version {}", details.script, details.version)?;
    writeln!(out, "  Script Path    : {}", details.script_path)?;
    writeln!(out, "  Current Time   : {}", format_timestamp(&details.current_time))?;
    writeln!(out, "  Rust Version   : {}", details.runtime)?;
    writeln!(out)?;
    Ok(())
}

/// Print the report to standard output. `current_time` defaults to now, taken per call.
pub fn print_runtime_details(
    script: &str,
    version: &str,
    script_path: &str,
    current_time: Option<DateTime<Local>>,
) -> Result<(), ReportError> {
    let details = match current_time {
        Some(time) => RuntimeDetails::at(script, version, script_path, time),
        None => RuntimeDetails::new(script, version, script_path),
    };
    tracing::debug!("Reporting runtime details for {} {}", details.script, details.version);
    let stdout = io::stdout();
    let mut lock = stdout.lock();
    write_runtime_details(&mut lock, &details)?;
    lock.flush()?;
    Ok(())
}
