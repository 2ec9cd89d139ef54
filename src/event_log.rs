//! Append-only log of hook events
//!
//! Each hook run appends one line:
//! `[YYYY-MM-DD HH:MM:SS] Hook: <type> Event: <message>`

use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

use crate::hook::HookType;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format one log line, including the trailing newline
pub fn format_entry(timestamp: DateTime<Local>, hook_type: HookType, message: &str) -> String {
    format!(
        "[{}] Hook: {} Event: {}\n",
        timestamp.format(TIMESTAMP_FORMAT),
        hook_type,
        message
    )
}

/// Append an event to the log file, creating parent directories as needed
pub fn append_event(log_path: &Path, hook_type: HookType, message: &str) -> Result<()> {
    if let Some(parent) = log_path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)
        .with_context(|| format!("Failed to open log file: {}", log_path.display()))?;

    let entry = format_entry(Local::now(), hook_type, message);
    file.write_all(entry.as_bytes())
        .context("Failed to write log entry")?;

    Ok(())
}
