//! Time-of-day prompt suggestions for the chat box.

/// Most suggestions returned.
pub const MAX_SUGGESTIONS: usize = 4;

const MORNING: [&str; 3] = [
    "Check my unread emails from yesterday",
    "What meetings do I have today?",
    "Review my priority tasks for this morning",
];

const MIDDAY: [&str; 3] = [
    "Schedule lunch meeting next week",
    "Review afternoon calendar",
    "Send follow-up emails from morning meetings",
];

const AFTERNOON: [&str; 3] = [
    "Plan tomorrow's priorities",
    "Check for urgent emails",
    "Schedule end-of-week review",
];

const EVENING: [&str; 3] = [
    "Review today's accomplishments",
    "Prepare agenda for tomorrow",
    "Schedule follow-up tasks",
];

/// Suggestions for the given local hour.
///
/// A pending-task nudge leads the list when the calendar is connected and
/// there is work outstanding.
pub fn smart_suggestions(hour: u32, pending_tasks: usize, authenticated: bool) -> Vec<String> {
    let base = match hour {
        8..=10 => MORNING,
        11..=13 => MIDDAY,
        14..=17 => AFTERNOON,
        _ => EVENING,
    };

    let mut suggestions = Vec::with_capacity(MAX_SUGGESTIONS);
    if authenticated && pending_tasks > 0 {
        suggestions.push(format!("Complete {pending_tasks} pending tasks"));
    }
    suggestions.extend(base.iter().map(ToString::to_string));
    suggestions.truncate(MAX_SUGGESTIONS);
    suggestions
}
