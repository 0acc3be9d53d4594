//! Task-vs-meeting classification of calendar entries.
//!
//! The policy is an ordered list of keyword rules; the first rule that
//! matches decides the tag, and entries matching nothing are meetings.
//! Matching is a case-insensitive substring search on the title.

use serde::Serialize;

use crate::types::{CalendarEntry, EntryKind};

/// Vocabulary that marks an entry as a meeting regardless of attendees.
pub const MEETING_KEYWORDS: &[&str] = &[
    "meeting",
    "call",
    "conference",
    "discussion",
    "standup",
    "sync",
    "review meeting",
    "team",
    "group",
    "session",
    "interview",
    "presentation",
    "demo",
    "workshop",
    "training",
    "seminar",
];

/// Vocabulary that marks an entry as a task regardless of attendees.
pub const EXPLICIT_TASK_KEYWORDS: &[&str] =
    &["deadline", "due", "submit", "reminder", "task", "todo", "to do"];

/// Broader task vocabulary, only trusted for entries without attendees.
pub const GENERAL_TASK_KEYWORDS: &[&str] = &[
    "finish",
    "complete",
    "draft",
    "personal appointment",
    "prep",
    "prepare",
    "bedtime",
    "morning",
    "workout",
    "exercise",
    "study",
    "practice",
    "clean",
    "organize",
    "shopping",
    "errands",
    "pick up",
    "drop off",
    "appointment",
    "dentist",
    "doctor",
    "checkup",
    "visit",
];

/// Personal routines, only trusted for entries without attendees.
pub const PERSONAL_ACTIVITY_KEYWORDS: &[&str] = &[
    "prep", "bedtime", "morning", "workout", "exercise", "study", "practice", "clean", "organize",
    "shopping", "errands",
];

/// One predicate→tag rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    /// Short identifier reported by [`Classifier::explain`].
    pub name: &'static str,
    /// Lowercase substrings; any one of them matches.
    pub keywords: Vec<String>,
    /// Only applies to entries with no attendees.
    pub solo_only: bool,
    /// Tag assigned on match.
    pub kind: EntryKind,
}

impl KeywordRule {
    pub fn new(name: &'static str, keywords: &[&str], solo_only: bool, kind: EntryKind) -> Self {
        Self {
            name,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
            solo_only,
            kind,
        }
    }

    /// Appends extra keywords, lowercased. Blank entries are ignored.
    pub fn extend<I, S>(&mut self, extra: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.keywords.extend(
            extra
                .into_iter()
                .map(|k| k.as_ref().trim().to_lowercase())
                .filter(|k| !k.is_empty()),
        );
    }

    fn first_match(&self, title_lower: &str, attendee_count: u32) -> Option<&str> {
        if self.solo_only && attendee_count != 0 {
            return None;
        }
        self.keywords
            .iter()
            .find(|k| title_lower.contains(k.as_str()))
            .map(String::as_str)
    }
}

/// Why an entry received its tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Verdict {
    pub kind: EntryKind,
    /// Name of the rule that fired, or `"default"`.
    pub rule: &'static str,
    /// The keyword that matched, if any.
    pub keyword: Option<String>,
}

/// Ordered rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classifier {
    rules: Vec<KeywordRule>,
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

/// The stock rule order: meeting vocabulary, explicit task vocabulary,
/// then the solo-only general task and personal activity vocabularies.
pub fn default_rules() -> Vec<KeywordRule> {
    vec![
        KeywordRule::new("meeting", MEETING_KEYWORDS, false, EntryKind::Meeting),
        KeywordRule::new("explicit_task", EXPLICIT_TASK_KEYWORDS, false, EntryKind::Task),
        KeywordRule::new("general_task", GENERAL_TASK_KEYWORDS, true, EntryKind::Task),
        KeywordRule::new(
            "personal_activity",
            PERSONAL_ACTIVITY_KEYWORDS,
            true,
            EntryKind::Task,
        ),
    ]
}

impl Classifier {
    pub const fn new(rules: Vec<KeywordRule>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    /// Mutable access to a rule by name, for appending configured keywords.
    pub fn rule_mut(&mut self, name: &str) -> Option<&mut KeywordRule> {
        self.rules.iter_mut().find(|r| r.name == name)
    }

    /// Tags an entry from its title and attendee count.
    pub fn classify(&self, title: &str, attendee_count: u32) -> EntryKind {
        self.explain(title, attendee_count).kind
    }

    /// Like [`classify`](Self::classify), reporting which rule fired.
    pub fn explain(&self, title: &str, attendee_count: u32) -> Verdict {
        let title_lower = title.to_lowercase();

        for rule in &self.rules {
            if let Some(keyword) = rule.first_match(&title_lower, attendee_count) {
                return Verdict {
                    kind: rule.kind,
                    rule: rule.name,
                    keyword: Some(keyword.to_string()),
                };
            }
        }

        Verdict {
            kind: EntryKind::Meeting,
            rule: "default",
            keyword: None,
        }
    }

    pub fn classify_entry(&self, entry: &CalendarEntry) -> EntryKind {
        let kind = self.classify(&entry.title, entry.attendee_count);
        tracing::debug!(
            title = %entry.title,
            attendees = entry.attendee_count,
            %kind,
            "classified calendar entry"
        );
        kind
    }
}

/// Tags with the stock rules.
pub fn classify(title: &str, attendee_count: u32) -> EntryKind {
    Classifier::default().classify(title, attendee_count)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standup_with_attendees_is_meeting() {
        assert_eq!(classify("Team Standup", 5), EntryKind::Meeting);
    }

    #[test]
    fn explicit_task_vocabulary_is_task() {
        assert_eq!(classify("Submit deadline report", 0), EntryKind::Task);
        assert_eq!(classify("Submit deadline report", 4), EntryKind::Task);
        assert_eq!(classify("TODO: expenses", 2), EntryKind::Task);
    }

    #[test]
    fn solo_appointment_is_task() {
        assert_eq!(classify("Dentist appointment", 0), EntryKind::Task);
    }

    #[test]
    fn meeting_vocabulary_wins_over_task_signals() {
        assert_eq!(classify("Quarterly review meeting", 0), EntryKind::Meeting);
        assert_eq!(classify("Deadline sync", 0), EntryKind::Meeting);
    }

    #[test]
    fn attendees_gate_weak_signals() {
        assert_eq!(classify("Dentist appointment", 1), EntryKind::Meeting);
        assert_eq!(classify("Workout", 0), EntryKind::Task);
        assert_eq!(classify("Workout", 3), EntryKind::Meeting);
    }

    #[test]
    fn unknown_and_empty_titles_default_to_meeting() {
        assert_eq!(classify("", 0), EntryKind::Meeting);
        assert_eq!(classify("Lunch with Priya", 0), EntryKind::Meeting);
    }

    #[test]
    fn matching_is_case_insensitive_substring() {
        assert_eq!(classify("PREPARE SLIDES", 0), EntryKind::Task);
        // "call" inside "recall" still reads as meeting vocabulary.
        assert_eq!(classify("Recall shopping list", 0), EntryKind::Meeting);
    }

    #[test]
    fn explain_reports_the_rule() {
        let classifier = Classifier::default();

        let verdict = classifier.explain("Study for exam", 0);
        assert_eq!(verdict.rule, "general_task");
        assert_eq!(verdict.keyword.as_deref(), Some("study"));

        let verdict = classifier.explain("Study group", 0);
        assert_eq!(verdict.rule, "meeting");
        assert_eq!(verdict.keyword.as_deref(), Some("group"));

        let verdict = classifier.explain("Coffee", 2);
        assert_eq!(verdict.rule, "default");
        assert_eq!(verdict.keyword, None);
    }

    #[test]
    fn personal_activity_rule_fires_when_general_rule_is_removed() {
        let rules = default_rules()
            .into_iter()
            .filter(|r| r.name != "general_task")
            .collect();
        let classifier = Classifier::new(rules);
        let verdict = classifier.explain("Morning errands", 0);
        assert_eq!(verdict.rule, "personal_activity");
        assert_eq!(verdict.kind, EntryKind::Task);
    }

    #[test]
    fn configured_keywords_extend_a_rule() {
        let mut classifier = Classifier::default();
        assert_eq!(classifier.classify("Gym", 0), EntryKind::Meeting);

        classifier
            .rule_mut("personal_activity")
            .unwrap()
            .extend(["  GYM ", ""]);
        assert_eq!(classifier.classify("Gym", 0), EntryKind::Task);
        assert_eq!(classifier.classify("Gym", 1), EntryKind::Meeting);
    }

    #[test]
    fn repeated_calls_agree() {
        let classifier = Classifier::default();
        let titles = ["Team Standup", "Dentist appointment", "Random", "Submit form"];
        let first: Vec<_> = titles.iter().map(|t| classifier.classify(t, 0)).collect();
        let second: Vec<_> = titles.iter().rev().map(|t| classifier.classify(t, 0)).collect();
        assert_eq!(first, second.into_iter().rev().collect::<Vec<_>>());
    }
}
