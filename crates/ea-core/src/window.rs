//! Bookable window for a single day.
//!
//! Today starts at the next half-hour boundary after "now" and runs until
//! the evening cutoff. Every later day uses the fixed business-hour
//! template. Wall times are interpreted in the zone carried by `now`.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveTime, TimeZone, Timelike};
use chrono_tz::Tz;
use serde::Serialize;

use crate::types::ValidationError;

/// Length of one step on the slot grid, and the rounding unit for today.
pub const GRID_MINUTES: i64 = 30;

/// Business-hour template.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowPolicy {
    /// Start of the window on days after today. Default: 09:00.
    pub workday_start: NaiveTime,
    /// End of the window on days after today. Default: 17:00.
    pub workday_end: NaiveTime,
    /// Latest end of today's window. Default: 20:00.
    pub today_cutoff: NaiveTime,
}

impl Default for WindowPolicy {
    fn default() -> Self {
        Self {
            workday_start: hm(9, 0),
            workday_end: hm(17, 0),
            today_cutoff: hm(20, 0),
        }
    }
}

impl WindowPolicy {
    /// Builds a policy, rejecting templates whose business window is empty.
    pub fn new(
        workday_start: NaiveTime,
        workday_end: NaiveTime,
        today_cutoff: NaiveTime,
    ) -> Result<Self, ValidationError> {
        if workday_end <= workday_start {
            return Err(ValidationError::InvertedWindow {
                field: "workday_end",
                before: "workday_start",
            });
        }
        if today_cutoff == NaiveTime::MIN {
            return Err(ValidationError::InvertedWindow {
                field: "today_cutoff",
                before: "midnight",
            });
        }
        Ok(Self {
            workday_start,
            workday_end,
            today_cutoff,
        })
    }
}

/// Parses an `HH:MM` wall time from configuration.
pub fn parse_time_of_day(field: &'static str, value: &str) -> Result<NaiveTime, ValidationError> {
    NaiveTime::parse_from_str(value.trim(), "%H:%M").map_err(|_| ValidationError::InvalidTimeOfDay {
        field,
        value: value.to_string(),
    })
}

/// A bookable window `[start, end)` for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayWindow {
    pub start: DateTime<Tz>,
    pub end: DateTime<Tz>,
}

/// Returns the bookable window for `now`'s date plus `day_offset` days.
///
/// Returns `None` when today's rounded start has already reached the
/// cutoff; the caller skips the day.
pub fn day_window(now: &DateTime<Tz>, day_offset: u32, policy: &WindowPolicy) -> Option<DayWindow> {
    let tz = now.timezone();
    let today = now.date_naive();

    if day_offset == 0 {
        let start = round_up_to_grid(now);
        let end = local_instant(&tz, today, policy.today_cutoff)?;
        if start >= end {
            tracing::debug!(%start, %end, "today's window already closed");
            return None;
        }
        return Some(DayWindow { start, end });
    }

    let date = today.checked_add_days(chrono::Days::new(u64::from(day_offset)))?;
    let start = local_instant(&tz, date, policy.workday_start)?;
    let end = local_instant(&tz, date, policy.workday_end)?;
    (start < end).then_some(DayWindow { start, end })
}

/// Rounds up to the next multiple of [`GRID_MINUTES`] past the hour.
///
/// Instants already on a boundary (including zero seconds) are unchanged.
pub fn round_up_to_grid(now: &DateTime<Tz>) -> DateTime<Tz> {
    let into_step = Duration::minutes(i64::from(now.minute()) % GRID_MINUTES)
        + Duration::seconds(i64::from(now.second()))
        + Duration::nanoseconds(i64::from(now.nanosecond()));

    if into_step == Duration::zero() {
        *now
    } else {
        *now - into_step + Duration::minutes(GRID_MINUTES)
    }
}

/// Resolves a local wall-clock time to an instant.
///
/// Ambiguous times (DST fall-back) use the earlier instant. Times inside a
/// DST gap move forward one hour.
pub fn local_instant(tz: &Tz, date: NaiveDate, time: NaiveTime) -> Option<DateTime<Tz>> {
    let wall = date.and_time(time);
    match tz.from_local_datetime(&wall) {
        LocalResult::Single(dt) | LocalResult::Ambiguous(dt, _) => Some(dt),
        LocalResult::None => tz
            .from_local_datetime(&(wall + Duration::hours(1)))
            .earliest(),
    }
}

/// Wall time from hour and minute literals.
pub(crate) fn hm(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap_or(NaiveTime::MIN)
}
