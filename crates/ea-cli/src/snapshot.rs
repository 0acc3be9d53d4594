//! Snapshot files written by the assistant service.
//!
//! A snapshot is one JSON document holding everything the engine needs for
//! a request: busy intervals, upcoming calendar entries, the inbox listing
//! with the unread-mail count, and task backend items. Collections the service failed to fetch
//! are simply absent and load as empty.

use std::fs;
use std::io::{Read, stdin};
use std::path::Path;

use anyhow::{Context, Result};
use ea_core::{BackendTask, BusyInterval, CalendarEntry, MailMessage};
use serde::{Deserialize, Serialize};

/// One request's worth of backend data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Whether the calendar backend was connected when the snapshot was taken.
    pub authenticated: bool,
    pub busy: Vec<BusyInterval>,
    pub entries: Vec<CalendarEntry>,
    pub emails: Vec<MailMessage>,
    /// Unread total as reported by the mail backend, which may exceed the
    /// listed `emails`.
    pub unread_mail: usize,
    pub tasks: Vec<BackendTask>,
}

impl Snapshot {
    /// Reads a snapshot from `path`, or from stdin when `path` is `-`.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = if path == Path::new("-") {
            let mut buf = String::new();
            stdin()
                .read_to_string(&mut buf)
                .context("failed to read snapshot from stdin")?;
            buf
        } else {
            fs::read_to_string(path)
                .with_context(|| format!("failed to read snapshot {}", path.display()))?
        };

        let snapshot = Self::parse(&raw)
            .with_context(|| format!("invalid snapshot {}", path.display()))?;
        tracing::debug!(
            authenticated = snapshot.authenticated,
            busy = snapshot.busy.len(),
            entries = snapshot.entries.len(),
            emails = snapshot.emails.len(),
            tasks = snapshot.tasks.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn parse(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }
}
