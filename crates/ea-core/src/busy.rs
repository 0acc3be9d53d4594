//! Overlap check between a candidate slot and busy intervals.

use chrono::{DateTime, TimeZone, Utc};

use crate::types::BusyInterval;

/// Returns `true` if `[start, end)` overlaps none of `busy`.
///
/// A slot that ends exactly when a busy interval starts (or starts exactly
/// when one ends) is free. A zero-length busy interval conflicts only when
/// it falls strictly inside the slot.
pub fn is_free<Tz: TimeZone>(start: &DateTime<Tz>, end: &DateTime<Tz>, busy: &[BusyInterval]) -> bool {
    let start = start.with_timezone(&Utc);
    let end = end.with_timezone(&Utc);

    busy.iter()
        .all(|interval| end <= interval.start || start >= interval.end)
}
