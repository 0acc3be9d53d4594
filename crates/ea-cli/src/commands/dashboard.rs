//! Dashboard rendering.

use std::fmt::Write as _;
use std::io;

use anyhow::Result;
use chrono::DateTime;
use chrono_tz::Tz;
use ea_core::{Classifier, Dashboard, DashboardInput, build_dashboard};

use crate::snapshot::Snapshot;

pub fn run<W: io::Write>(
    writer: &mut W,
    classifier: &Classifier,
    snapshot: &Snapshot,
    now: &DateTime<Tz>,
    json: bool,
) -> Result<()> {
    let input = DashboardInput {
        entries: &snapshot.entries,
        emails: &snapshot.emails,
        unread_mail_count: snapshot.unread_mail,
        tasks: &snapshot.tasks,
        authenticated: snapshot.authenticated,
    };
    let dashboard = build_dashboard(classifier, &input, now);

    if json {
        serde_json::to_writer_pretty(&mut *writer, &dashboard)?;
        writeln!(writer)?;
    } else {
        write!(writer, "{}", format_dashboard(&dashboard, now))?;
    }
    Ok(())
}

/// Human-readable dashboard.
pub fn format_dashboard(dashboard: &Dashboard, now: &DateTime<Tz>) -> String {
    let mut output = String::new();

    writeln!(
        output,
        "DASHBOARD: {} ({})",
        now.format("%A, %b %-d, %Y"),
        now.timezone().name()
    )
    .unwrap();

    if let Some(message) = &dashboard.message {
        writeln!(output).unwrap();
        writeln!(output, "{message}").unwrap();
    }

    let stats = &dashboard.stats;
    writeln!(output).unwrap();
    writeln!(output, "Meetings today:  {}", stats.meeting_count).unwrap();
    writeln!(output, "Unread mail:     {}", stats.unread_mail_count).unwrap();
    writeln!(output, "Pending tasks:   {}", stats.task_count).unwrap();
    writeln!(output, "Free time:       {}", stats.free_time).unwrap();

    if !dashboard.meetings.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "MEETINGS").unwrap();
        for meeting in &dashboard.meetings {
            writeln!(
                output,
                "  {} {}  {} ({} min, {} attendees)",
                meeting.date, meeting.time, meeting.title, meeting.duration, meeting.attendees
            )
            .unwrap();
        }
    }

    if !dashboard.emails.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "INBOX").unwrap();
        for mail in &dashboard.emails {
            let marker = if mail.read { ' ' } else { '*' };
            writeln!(output, "  {marker} {}  {}  {}", mail.time, mail.sender, mail.subject).unwrap();
        }
    }

    if !dashboard.tasks.is_empty() {
        writeln!(output).unwrap();
        writeln!(output, "TASKS").unwrap();
        for task in &dashboard.tasks {
            let check = if task.completed { 'x' } else { ' ' };
            writeln!(
                output,
                "  [{check}] {:<16}  {:<6}  {}",
                task.due_date, task.priority, task.title
            )
            .unwrap();
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Europe::London;
    use ea_core::{BackendTask, CalendarEntry, MailMessage};
    use insta::assert_snapshot;

    fn entry(title: &str, attendees: u32, day: u32, hour: u32, minutes: u32) -> CalendarEntry {
        CalendarEntry {
            title: title.to_string(),
            attendee_count: attendees,
            start: Utc.with_ymd_and_hms(2025, 3, day, hour, 0, 0).unwrap(),
            duration_minutes: minutes,
            location: String::new(),
            raw_source_id: String::new(),
        }
    }

    fn render(snapshot: &Snapshot, now: &DateTime<Tz>) -> String {
        let mut output = Vec::new();
        run(&mut output, &Classifier::default(), snapshot, now, false).unwrap();
        String::from_utf8(output).unwrap()
    }

    #[test]
    fn busy_monday() {
        let snapshot = Snapshot {
            authenticated: true,
            entries: vec![
                entry("Team Standup", 6, 3, 9, 30),
                entry("Architecture review meeting", 3, 3, 11, 150),
                entry("Submit expense report", 0, 3, 16, 15),
                entry("Gym workout", 0, 4, 7, 60),
            ],
            emails: vec![
                MailMessage {
                    sender: "ana@example.com".to_string(),
                    subject: "Q1 numbers".to_string(),
                    timestamp: Utc.with_ymd_and_hms(2025, 3, 3, 7, 45, 0).unwrap(),
                    priority: "High".to_string(),
                    read: false,
                    message_id: None,
                },
                MailMessage {
                    sender: "news@example.com".to_string(),
                    subject: "Weekly digest".to_string(),
                    timestamp: Utc.with_ymd_and_hms(2025, 3, 2, 18, 5, 0).unwrap(),
                    priority: "Normal".to_string(),
                    read: true,
                    message_id: None,
                },
            ],
            unread_mail: 12,
            tasks: vec![
                BackendTask::new("Renew passport", None),
                BackendTask {
                    completed: true,
                    ..BackendTask::new(
                        "Pay invoice",
                        Some(Utc.with_ymd_and_hms(2025, 3, 1, 0, 0, 0).unwrap()),
                    )
                },
            ],
            ..Snapshot::default()
        };
        let now = London.with_ymd_and_hms(2025, 3, 3, 8, 15, 0).unwrap();

        assert_snapshot!(render(&snapshot, &now), @r"
        DASHBOARD: Monday, Mar 3, 2025 (Europe/London)

        Meetings today:  2
        Unread mail:     12
        Pending tasks:   1
        Free time:       5.0h available

        MEETINGS
          2025-03-03 09:00  Team Standup (30 min, 6 attendees)
          2025-03-03 11:00  Architecture review meeting (150 min, 3 attendees)

        INBOX
          * 07:45  ana@example.com  Q1 numbers
            18:05  news@example.com  Weekly digest

        TASKS
          [ ] No due date       Medium  Renew passport
          [x] 2025-03-01 00:00  Medium  Pay invoice
        ");
    }

    #[test]
    fn disconnected_calendar() {
        let now = London.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
        assert_snapshot!(render(&Snapshot::default(), &now), @r"
        DASHBOARD: Monday, Mar 3, 2025 (Europe/London)

        AI assistant ready. Connect Google for email and calendar features.

        Meetings today:  0
        Unread mail:     0
        Pending tasks:   0
        Free time:       0
        ");
    }

    #[test]
    fn json_free_time_is_numeric_when_disconnected() {
        let now = London.with_ymd_and_hms(2025, 3, 3, 10, 0, 0).unwrap();
        let mut output = Vec::new();
        run(&mut output, &Classifier::default(), &Snapshot::default(), &now, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        assert_eq!(value["stats"]["free_time"], 0);
        assert_eq!(value["authenticated"], false);
    }
}
