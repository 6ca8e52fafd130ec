//! Implementation of the `lockstamp inspect` command.

use crate::cli::InspectArgs;
use chrono::{DateTime, Utc};
use lockstamp::exit_codes;
use lockstamp::{Config, LockstampError, Result, Stamp, TimestampGuard};
use serde::Serialize;
use std::path::PathBuf;

/// Snapshot of a data file and its sentinel.
#[derive(Debug, Serialize)]
struct InspectReport {
    file: PathBuf,
    exists: bool,
    sentinel: PathBuf,
    sentinel_exists: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    stamp: Option<Stamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    stamped_at: Option<DateTime<Utc>>,
}

/// Execute the `lockstamp inspect` command.
pub fn cmd_inspect(args: InspectArgs, config: &Config) -> Result<i32> {
    let sentinel = config.sentinel_for(&args.file);
    let mut guard = TimestampGuard::new(&sentinel);
    let sentinel_exists = guard.lock().exists();

    let stamp = if sentinel_exists {
        Some(guard.current_stamp()?)
    } else {
        None
    };

    let report = InspectReport {
        exists: args.file.exists(),
        file: args.file,
        sentinel,
        sentinel_exists,
        stamped_at: stamp.as_ref().and_then(|s| s.to_datetime()),
        stamp,
    };

    if args.json {
        let json = serde_json::to_string_pretty(&report).map_err(|e| {
            LockstampError::UserError(format!("failed to serialize report: {}", e))
        })?;
        println!("{}", json);
        return Ok(exit_codes::SUCCESS);
    }

    println!("File:       {}", report.file.display());
    println!("Exists:     {}", if report.exists { "yes" } else { "no" });
    println!("Sentinel:   {}", report.sentinel.display());
    match (&report.stamp, report.stamped_at) {
        (Some(stamp), Some(at)) => {
            println!("Stamp:      {}", stamp);
            println!("Stamped at: {}", at.format("%Y-%m-%d %H:%M:%S%.6f UTC"));
        }
        (Some(stamp), None) => println!("Stamp:      {} (unrecognized format)", stamp),
        (None, _) => println!("Stamp:      (none)"),
    }

    Ok(exit_codes::SUCCESS)
}
