//! Free slot search across a multi-day horizon.
//!
//! # Algorithm Summary
//!
//! 1. For each day in the horizon, take its bookable window (see [`crate::window`])
//! 2. Walk the window on a fixed 30-minute grid, one candidate per step
//! 3. Drop candidates that start at or before "now", or that overlap a busy interval
//! 4. Stop once [`MAX_SLOTS`] candidates have been accepted

use chrono::{DateTime, Duration};
use chrono_tz::Tz;

use crate::busy::is_free;
use crate::types::{BusyInterval, CandidateSlot};
use crate::window::{GRID_MINUTES, WindowPolicy, day_window};

/// Hard cap on the number of slots returned by one search.
pub const MAX_SLOTS: usize = 10;

/// Parameters of one slot search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotQuery {
    /// Required slot length. Non-positive values yield no slots.
    pub duration_minutes: i64,
    /// Number of days to scan, starting with today.
    pub days_ahead: u32,
}

impl Default for SlotQuery {
    fn default() -> Self {
        Self {
            duration_minutes: 60,
            days_ahead: 7,
        }
    }
}

/// Finds up to [`MAX_SLOTS`] free slots, in chronological order.
///
/// Uses the default business-hour template. See [`find_free_slots_with`].
pub fn find_free_slots(
    now: &DateTime<Tz>,
    duration_minutes: i64,
    days_ahead: u32,
    busy: &[BusyInterval],
) -> Vec<CandidateSlot> {
    find_free_slots_with(
        now,
        &SlotQuery {
            duration_minutes,
            days_ahead,
        },
        busy,
        &WindowPolicy::default(),
    )
}

/// Finds up to [`MAX_SLOTS`] free slots under a custom window policy.
pub fn find_free_slots_with(
    now: &DateTime<Tz>,
    query: &SlotQuery,
    busy: &[BusyInterval],
    policy: &WindowPolicy,
) -> Vec<CandidateSlot> {
    let mut slots = Vec::new();
    if query.duration_minutes <= 0 {
        return slots;
    }

    // Lengths past chrono's range cannot fit any window.
    let Some(length) = Duration::try_minutes(query.duration_minutes) else {
        return slots;
    };
    let step = Duration::minutes(GRID_MINUTES);

    'days: for day in 0..query.days_ahead {
        let Some(window) = day_window(now, day, policy) else {
            continue;
        };

        let mut slot_start = window.start;
        while let Some(slot_end) = slot_start
            .checked_add_signed(length)
            .filter(|end| *end <= window.end)
        {
            // Today's window is already rounded past `now`; this also
            // covers a `now` that sits exactly on the grid.
            if slot_start > *now && is_free(&slot_start, &slot_end, busy) {
                slots.push(CandidateSlot {
                    start: slot_start,
                    end: slot_end,
                    duration_minutes: query.duration_minutes,
                });
                if slots.len() == MAX_SLOTS {
                    break 'days;
                }
            }

            slot_start += step;
        }
    }

    tracing::debug!(
        count = slots.len(),
        duration_minutes = query.duration_minutes,
        days_ahead = query.days_ahead,
        busy = busy.len(),
        "slot search finished"
    );
    slots
}
