//! Availability and classification engine for the assistant dashboard.
//!
//! This crate contains the pure logic for:
//! - Slot search: bookable free slots across a multi-day horizon
//! - Classification: tagging calendar entries as tasks or meetings
//! - Dashboard: stats, free-time label and the per-request payload of
//!   meeting, mail and task cards
//!
//! Nothing here performs I/O or reads a clock; callers pass "now" in.

mod busy;
pub mod classify;
pub mod dashboard;
mod slots;
pub mod suggest;
pub mod tasks;
mod types;
pub mod window;

pub use busy::is_free;
pub use classify::{Classifier, KeywordRule, Verdict, classify};
pub use dashboard::{
    Dashboard, DashboardInput, DashboardStats, FreeTime, TaggedEntry, aggregate, build_dashboard,
    entries_on_day, free_time_label, tag_entries,
};
pub use slots::{MAX_SLOTS, SlotQuery, find_free_slots, find_free_slots_with};
pub use suggest::smart_suggestions;
pub use tasks::pending_task_count;
pub use types::{
    BackendTask, BusyInterval, CalendarEntry, CandidateSlot, EntryKind, MailMessage,
    ValidationError, parse_time_zone,
};
pub use window::{DayWindow, WindowPolicy, day_window, parse_time_of_day};
