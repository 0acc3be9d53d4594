//! Free slot listing.

use std::fmt::Write as _;
use std::io;

use anyhow::Result;
use chrono::DateTime;
use chrono_tz::Tz;
use ea_core::{CandidateSlot, SlotQuery, WindowPolicy, find_free_slots_with};

use crate::snapshot::Snapshot;

pub fn run<W: io::Write>(
    writer: &mut W,
    snapshot: &Snapshot,
    now: &DateTime<Tz>,
    query: &SlotQuery,
    policy: &WindowPolicy,
    json: bool,
) -> Result<()> {
    let slots = find_free_slots_with(now, query, &snapshot.busy, policy);

    if json {
        serde_json::to_writer_pretty(&mut *writer, &slots)?;
        writeln!(writer)?;
    } else {
        write!(writer, "{}", format_slots(&slots, query))?;
    }
    Ok(())
}

/// Human-readable slot list.
pub fn format_slots(slots: &[CandidateSlot], query: &SlotQuery) -> String {
    let days = if query.days_ahead == 1 {
        "today".to_string()
    } else {
        format!("next {} days", query.days_ahead)
    };

    let mut output = String::new();
    writeln!(output, "Free slots ({} min, {days})", query.duration_minutes).unwrap();
    if slots.is_empty() {
        writeln!(output, "No free slots found.").unwrap();
        return output;
    }

    for slot in slots {
        writeln!(
            output,
            "- {} {}-{}",
            slot.start.format("%a %d %b"),
            slot.start.format("%H:%M"),
            slot.end.format("%H:%M"),
        )
        .unwrap();
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use chrono_tz::Europe::London;
    use ea_core::BusyInterval;
    use insta::assert_snapshot;

    fn snapshot_with_busy() -> Snapshot {
        Snapshot {
            authenticated: true,
            busy: vec![BusyInterval::new(
                Utc.with_ymd_and_hms(2025, 3, 4, 9, 0, 0).unwrap(),
                Utc.with_ymd_and_hms(2025, 3, 4, 14, 0, 0).unwrap(),
            )],
            ..Snapshot::default()
        }
    }

    #[test]
    fn lists_slots_after_busy_morning() {
        let now = London.with_ymd_and_hms(2025, 3, 3, 19, 45, 0).unwrap();
        let query = SlotQuery {
            duration_minutes: 60,
            days_ahead: 2,
        };
        let mut output = Vec::new();
        run(
            &mut output,
            &snapshot_with_busy(),
            &now,
            &query,
            &WindowPolicy::default(),
            false,
        )
        .unwrap();

        assert_snapshot!(String::from_utf8(output).unwrap(), @r"
        Free slots (60 min, next 2 days)
        - Tue 04 Mar 14:00-15:00
        - Tue 04 Mar 14:30-15:30
        - Tue 04 Mar 15:00-16:00
        - Tue 04 Mar 15:30-16:30
        - Tue 04 Mar 16:00-17:00
        ");
    }

    #[test]
    fn reports_when_nothing_is_free() {
        let query = SlotQuery {
            duration_minutes: 30,
            days_ahead: 1,
        };
        assert_snapshot!(format_slots(&[], &query), @r"
        Free slots (30 min, today)
        No free slots found.
        ");
    }

    #[test]
    fn json_output_is_an_array_of_slots() {
        let now = London.with_ymd_and_hms(2025, 3, 3, 16, 0, 0).unwrap();
        let query = SlotQuery {
            duration_minutes: 90,
            days_ahead: 1,
        };
        let mut output = Vec::new();
        run(
            &mut output,
            &Snapshot::default(),
            &now,
            &query,
            &WindowPolicy::default(),
            true,
        )
        .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
        let slots = value.as_array().unwrap();
        // 16:30, 17:00, 17:30, 18:00, 18:30
        assert_eq!(slots.len(), 5);
        assert_eq!(slots[0]["duration_minutes"], 90);
        let first = DateTime::parse_from_rfc3339(slots[0]["start"].as_str().unwrap()).unwrap();
        assert_eq!(
            first.with_timezone(&Utc),
            London.with_ymd_and_hms(2025, 3, 3, 16, 30, 0).unwrap().with_timezone(&Utc)
        );
    }
}
