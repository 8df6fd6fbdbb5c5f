//! Word record types.

use crate::core::interval::{clamp_level, interval};
use chrono::{DateTime, Utc};

/// Scheduling state for one vocabulary word.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordRecord {
    /// The target spelling.
    pub word: String,

    /// Index into the interval table, always within `0..=MAX_LEVEL`.
    pub repetition_level: usize,

    /// When the word is next due for review.
    pub due_date: DateTime<Utc>,

    /// Persisted flag, not used for scheduling.
    pub active: bool,
}

impl WordRecord {
    /// Create a new word at level 0, due immediately.
    #[must_use]
    pub fn new(word: &str, now: DateTime<Utc>) -> Self {
        Self {
            word: word.to_string(),
            repetition_level: 0,
            due_date: now,
            active: true,
        }
    }

    /// Check whether the word is due at `now`.
    #[must_use]
    pub fn is_due(&self, now: DateTime<Utc>) -> bool {
        self.due_date < now
    }

    /// Check a typed answer against the word.
    ///
    /// Surrounding whitespace is ignored and the comparison is case-insensitive.
    #[must_use]
    pub fn matches(&self, answer: &str) -> bool {
        answer.trim().to_lowercase() == self.word.to_lowercase()
    }

    /// Apply one review outcome and reschedule from `now`.
    pub fn record_answer(&mut self, correct: bool, now: DateTime<Utc>) {
        if correct {
            self.promote();
        } else {
            self.demote();
        }
        self.reschedule(now);
    }

    /// Move one level up, stopping at the last level.
    pub fn promote(&mut self) {
        self.repetition_level = clamp_level(self.repetition_level.saturating_add(1));
    }

    /// Move one level down, stopping at 0.
    pub fn demote(&mut self) {
        self.repetition_level = clamp_level(self.repetition_level.saturating_sub(1));
    }

    /// Set the due date from the current level.
    pub fn reschedule(&mut self, now: DateTime<Utc>) {
        self.due_date = now + interval(self.repetition_level);
    }

    /// Letters of the word joined by two spaces, e.g. `c  a  t`.
    #[must_use]
    pub fn spelled_out(&self) -> String {
        self.word
            .chars()
            .map(String::from)
            .collect::<Vec<_>>()
            .join("  ")
    }
}
