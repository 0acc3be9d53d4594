//! Dashboard statistics and payload.
//!
//! Stats count only today's meeting-tagged entries. The free-time label
//! is tiered on how much of an eight-hour workday those meetings leave.

use std::fmt;

use chrono::{DateTime, Timelike, Utc};
use chrono_tz::Tz;
use serde::{Serialize, Serializer};

use crate::classify::Classifier;
use crate::tasks::pending_task_count;
use crate::types::{BackendTask, CalendarEntry, EntryKind, MailMessage};

/// Hours in the workday that meetings are measured against.
pub const WORKDAY_HOURS: f64 = 8.0;

/// Most task cards shown on the dashboard.
pub const MAX_TASK_CARDS: usize = 10;

/// Most mail cards shown on the dashboard.
pub const MAX_MAIL_CARDS: usize = 10;

/// `due_date` text for undated tasks.
pub const NO_DUE_DATE: &str = "No due date";

/// `source` of every task card.
pub const TASK_SOURCE: &str = "google_tasks";

/// Shown when the calendar backend is not connected.
pub const UNAUTHENTICATED_MESSAGE: &str =
    "AI assistant ready. Connect Google for email and calendar features.";

/// Free-time description for the stats tile.
///
/// Serializes as a string, or as the number `0` when there is no calendar
/// data, so the UI can tell "no data" apart from "no free time".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FreeTime {
    Label(String),
    NoData,
}

impl fmt::Display for FreeTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => f.write_str(label),
            Self::NoData => f.write_str("0"),
        }
    }
}

impl Serialize for FreeTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Label(label) => serializer.serialize_str(label),
            Self::NoData => serializer.serialize_u8(0),
        }
    }
}

/// Stats tile values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    #[serde(rename = "meetings")]
    pub meeting_count: usize,
    #[serde(rename = "emails")]
    pub unread_mail_count: usize,
    #[serde(rename = "tasks")]
    pub task_count: usize,
    #[serde(rename = "free_time")]
    pub free_time: FreeTime,
}

/// A calendar entry paired with its tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TaggedEntry<'a> {
    pub entry: &'a CalendarEntry,
    pub kind: EntryKind,
}

/// Tags every entry with `classifier`.
pub fn tag_entries<'a>(classifier: &Classifier, entries: &'a [CalendarEntry]) -> Vec<TaggedEntry<'a>> {
    entries
        .iter()
        .map(|entry| TaggedEntry {
            entry,
            kind: classifier.classify_entry(entry),
        })
        .collect()
}

/// Keeps entries whose start falls on `now`'s local calendar date.
pub fn entries_on_day<'a>(tagged: &[TaggedEntry<'a>], now: &DateTime<Tz>) -> Vec<TaggedEntry<'a>> {
    let tz = now.timezone();
    let today = now.date_naive();
    tagged
        .iter()
        .filter(|t| t.entry.start.with_timezone(&tz).date_naive() == today)
        .copied()
        .collect()
}

/// Builds the stats tile from today's tagged entries and backend counts.
pub fn aggregate(
    today: &[TaggedEntry<'_>],
    unread_mail_count: usize,
    task_count: usize,
    now: &DateTime<Tz>,
    authenticated: bool,
) -> DashboardStats {
    let meetings = today.iter().filter(|t| t.kind == EntryKind::Meeting);
    let meeting_count = meetings.clone().count();
    let meeting_minutes: u64 = meetings.map(|t| u64::from(t.entry.duration_minutes)).sum();

    let free_time = if authenticated {
        FreeTime::Label(free_time_label(meeting_count, meeting_minutes, now.hour()))
    } else {
        FreeTime::NoData
    };

    DashboardStats {
        meeting_count,
        unread_mail_count,
        task_count,
        free_time,
    }
}

/// Tiered free-time text.
///
/// With no meetings the label depends on the local hour; otherwise on the
/// hours the meetings leave out of [`WORKDAY_HOURS`].
#[allow(clippy::cast_precision_loss)]
pub fn free_time_label(meeting_count: usize, meeting_minutes: u64, hour: u32) -> String {
    if meeting_count == 0 {
        return match hour {
            0..9 => "Full day available".to_string(),
            9..17 => format!("{}h remaining today", 17 - hour),
            _ => "Day complete".to_string(),
        };
    }

    let free_hours = (WORKDAY_HOURS - meeting_minutes as f64 / 60.0).max(0.0);
    if free_hours > 6.0 {
        format!("{free_hours:.1}h free")
    } else if free_hours > 3.0 {
        format!("{free_hours:.1}h available")
    } else if free_hours > 1.0 {
        format!("{free_hours:.1}h left")
    } else {
        "Busy day".to_string()
    }
}

/// Meeting card for the dashboard list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MeetingCard {
    pub title: String,
    /// Local `HH:MM`.
    pub time: String,
    /// Local `YYYY-MM-DD`.
    pub date: String,
    pub attendees: u32,
    pub duration: u32,
    pub location: String,
    pub event_id: String,
}

/// Inbox card for the mail list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MailCard {
    pub sender: String,
    pub subject: String,
    /// Local `HH:MM` of receipt.
    pub time: String,
    pub priority: String,
    pub read: bool,
    #[serde(rename = "gmail_id")]
    pub message_id: Option<String>,
}

impl MailCard {
    fn new(message: &MailMessage, tz: &Tz) -> Self {
        Self {
            sender: message.sender.clone(),
            subject: message.subject.clone(),
            time: message.timestamp.with_timezone(tz).format("%H:%M").to_string(),
            priority: message.priority.clone(),
            read: message.read,
            message_id: message.message_id.clone(),
        }
    }
}

/// Priority-list card for a task backend item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskCard {
    pub title: String,
    /// UTC `YYYY-MM-DD HH:MM`, or [`NO_DUE_DATE`].
    pub due_date: String,
    pub priority: String,
    pub source: &'static str,
    pub completed: bool,
    pub task_id: Option<String>,
}

impl From<&BackendTask> for TaskCard {
    fn from(task: &BackendTask) -> Self {
        Self {
            title: task.title.clone(),
            due_date: task.due.map_or_else(
                || NO_DUE_DATE.to_string(),
                |due| due.format("%Y-%m-%d %H:%M").to_string(),
            ),
            priority: task.priority.clone(),
            source: TASK_SOURCE,
            completed: task.completed,
            task_id: task.task_id.clone(),
        }
    }
}

/// Full dashboard payload for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dashboard {
    pub authenticated: bool,
    pub meetings: Vec<MeetingCard>,
    pub emails: Vec<MailCard>,
    pub tasks: Vec<TaskCard>,
    pub stats: DashboardStats,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Inputs gathered by the surrounding service for one dashboard request.
#[derive(Debug, Clone, Copy)]
pub struct DashboardInput<'a> {
    /// Upcoming calendar entries (not only today's).
    pub entries: &'a [CalendarEntry],
    /// Inbox listing, newest first.
    pub emails: &'a [MailMessage],
    /// Unread total reported by the mail backend.
    pub unread_mail_count: usize,
    pub tasks: &'a [BackendTask],
    pub authenticated: bool,
}

/// Builds the dashboard payload.
///
/// Meeting cards cover every upcoming meeting-tagged entry; task-tagged
/// entries get no card. Mail and task cards list the first
/// [`MAX_MAIL_CARDS`] and [`MAX_TASK_CARDS`] backend items in backend order.
/// Stats cover today only.
pub fn build_dashboard(classifier: &Classifier, input: &DashboardInput<'_>, now: &DateTime<Tz>) -> Dashboard {
    if !input.authenticated {
        return Dashboard {
            authenticated: false,
            meetings: Vec::new(),
            emails: Vec::new(),
            tasks: Vec::new(),
            stats: aggregate(&[], 0, 0, now, false),
            message: Some(UNAUTHENTICATED_MESSAGE.to_string()),
        };
    }

    let tz = now.timezone();
    let tagged = tag_entries(classifier, input.entries);

    let meetings: Vec<MeetingCard> = tagged
        .iter()
        .filter(|t| t.kind == EntryKind::Meeting)
        .map(|t| {
            let local = t.entry.start.with_timezone(&tz);
            MeetingCard {
                title: t.entry.title.clone(),
                time: local.format("%H:%M").to_string(),
                date: local.format("%Y-%m-%d").to_string(),
                attendees: t.entry.attendee_count,
                duration: t.entry.duration_minutes,
                location: t.entry.location.clone(),
                event_id: t.entry.raw_source_id.clone(),
            }
        })
        .collect();

    let emails: Vec<MailCard> = input
        .emails
        .iter()
        .take(MAX_MAIL_CARDS)
        .map(|message| MailCard::new(message, &tz))
        .collect();

    let tasks: Vec<TaskCard> = input.tasks.iter().take(MAX_TASK_CARDS).map(TaskCard::from).collect();

    let todays = entries_on_day(&tagged, now);
    let pending = pending_task_count(input.tasks, now.with_timezone(&Utc).date_naive());
    let stats = aggregate(&todays, input.unread_mail_count, pending, now, true);

    tracing::info!(
        meetings = meetings.len(),
        emails = emails.len(),
        tasks = tasks.len(),
        today = todays.len(),
        free_time = %stats.free_time,
        "built dashboard"
    );

    Dashboard {
        authenticated: true,
        meetings,
        emails,
        tasks,
        stats,
        message: None,
    }
}
