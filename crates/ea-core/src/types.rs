//! Core data types shared by the slot search and the dashboard.

use std::fmt;

use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Validation errors for engine inputs that come from configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The time zone name is not a known IANA zone.
    #[error("unknown time zone: {name}")]
    UnknownTimeZone { name: String },

    /// A business-hour template whose window is empty or inverted.
    #[error("{field} must be later than {before}")]
    InvertedWindow {
        field: &'static str,
        before: &'static str,
    },

    /// A wall-clock time that could not be parsed.
    #[error("invalid time of day for {field}: {value} (expected HH:MM)")]
    InvalidTimeOfDay { field: &'static str, value: String },
}

/// A busy period reported by the calendar backend.
///
/// Half-open: `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl BusyInterval {
    pub const fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }
}

/// A bookable slot produced by the slot search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CandidateSlot {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
    pub duration_minutes: i64,
}

/// A calendar entry as listed by the calendar backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEntry {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub attendee_count: u32,
    pub start: DateTime<Utc>,
    #[serde(default)]
    pub duration_minutes: u32,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub raw_source_id: String,
}

/// Dashboard tag for a calendar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Task,
    Meeting,
}

impl EntryKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Meeting => "meeting",
        }
    }
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An item from the task backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackendTask {
    #[serde(default)]
    pub title: String,
    /// Stored by the backend as a UTC instant.
    #[serde(default)]
    pub due: Option<DateTime<Utc>>,
    #[serde(default)]
    pub completed: bool,
    /// The task backend has no priorities of its own; items load as `Medium`.
    #[serde(default = "default_task_priority")]
    pub priority: String,
    #[serde(default)]
    pub task_id: Option<String>,
}

impl BackendTask {
    /// An open task with the default priority and no backend id.
    pub fn new(title: impl Into<String>, due: Option<DateTime<Utc>>) -> Self {
        Self {
            title: title.into(),
            due,
            completed: false,
            priority: default_task_priority(),
            task_id: None,
        }
    }
}

fn default_task_priority() -> String {
    "Medium".to_string()
}

/// A message from the mail backend's inbox listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MailMessage {
    #[serde(default)]
    pub sender: String,
    #[serde(default)]
    pub subject: String,
    pub timestamp: DateTime<Utc>,
    /// `High` for messages flagged urgent by the sender, otherwise `Normal`.
    #[serde(default = "default_mail_priority")]
    pub priority: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub message_id: Option<String>,
}

fn default_mail_priority() -> String {
    "Normal".to_string()
}

/// Resolves an IANA time zone name.
pub fn parse_time_zone(name: &str) -> Result<Tz, ValidationError> {
    name.parse::<Tz>()
        .map_err(|_| ValidationError::UnknownTimeZone {
            name: name.to_string(),
        })
}
