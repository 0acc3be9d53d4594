//! Suggest command implementation.

use std::io::Write;

use anyhow::Result;
use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use ea_core::{pending_task_count, smart_suggestions};
use serde::Serialize;

use crate::snapshot::Snapshot;

/// Result of the suggest command for JSON output.
#[derive(Serialize)]
struct SuggestOutput {
    suggestions: Vec<String>,
}

pub fn run<W: Write>(writer: &mut W, snapshot: &Snapshot, now: &DateTime<Tz>, json: bool) -> Result<()> {
    let pending = pending_task_count(&snapshot.tasks, now.with_timezone(&Utc).date_naive());
    let suggestions = smart_suggestions(now.hour(), pending, snapshot.authenticated);

    if json {
        serde_json::to_writer(&mut *writer, &SuggestOutput { suggestions })?;
        writeln!(writer)?;
    } else {
        for suggestion in &suggestions {
            writeln!(writer, "- {suggestion}")?;
        }
    }
    Ok(())
}
