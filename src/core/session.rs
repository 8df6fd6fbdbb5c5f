//! Interactive review session.
//!
//! A session takes the due words as a pending pool, shuffles it once, then
//! repeatedly draws a word at random, speaks it and checks the typed answer.
//! A correct answer removes the word from the pool; a wrong one spells the
//! word out and leaves it in the pool for a later draw. The session ends when
//! every word has been answered correctly once.

use crate::core::clock::Clock;
use crate::core::word::WordRecord;
use crate::error::Result;
use crate::speech::Announcer;
use crate::terminal::Terminal;
use chrono::{DateTime, Utc};
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};

/// Phrases spoken after a correct answer.
pub const AFFIRMATIONS: [&str; 6] = [
    "That's correct",
    "Correct",
    "That's right. Way to go.",
    "Good job.",
    "Excellent",
    "That's correct. Good effort",
];

/// One answered prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReviewEvent {
    /// The word that was asked.
    pub word: String,

    /// What was typed.
    pub answer: String,

    /// Whether the answer matched.
    pub correct: bool,

    /// Repetition level after the answer.
    pub level: usize,

    /// Due date after the answer.
    pub due_date: DateTime<Utc>,

    /// When the answer was scored.
    pub answered_at: DateTime<Utc>,
}

/// Collaborators a review session talks to.
pub struct ReviewSession<'a, R> {
    clock: &'a dyn Clock,
    announcer: &'a dyn Announcer,
    terminal: &'a mut dyn Terminal,
    rng: R,
}

impl<'a, R: Rng> ReviewSession<'a, R> {
    /// Create a session.
    pub fn new(
        clock: &'a dyn Clock,
        announcer: &'a dyn Announcer,
        terminal: &'a mut dyn Terminal,
        rng: R,
    ) -> Self {
        Self {
            clock,
            announcer,
            terminal,
            rng,
        }
    }

    /// Drill every word in `pending` until each has been answered correctly.
    ///
    /// Records are updated in place after every answer. Returns one event per
    /// answer, in the order they were given.
    ///
    /// # Errors
    ///
    /// Returns an error if reading an answer fails. Records already answered
    /// keep their updates; the caller decides whether to persist them.
    pub fn run(&mut self, mut pending: Vec<&mut WordRecord>) -> Result<Vec<ReviewEvent>> {
        pending.shuffle(&mut self.rng);
        let mut events = Vec::new();

        while !pending.is_empty() {
            self.terminal.show(&format!("\n{} words to go. ", pending.len()));

            let pick = self.rng.random_range(0..pending.len());
            let event = self.review_one(&mut *pending[pick])?;

            if event.correct {
                pending.swap_remove(pick);
                self.terminal.show("Correct");
                if let Some(affirmation) = AFFIRMATIONS.choose(&mut self.rng) {
                    self.say(affirmation);
                }
            } else {
                let spelled = pending[pick].spelled_out();
                self.terminal.show(&format!(
                    "Incorrect. The Answer is : {}",
                    spelled.to_uppercase()
                ));
                self.say("Incorrect. The Answer is : ");
                self.say(&spelled);
            }

            tracing::debug!(
                word = %event.word,
                correct = event.correct,
                level = event.level,
                remaining = pending.len(),
                "answer scored"
            );
            events.push(event);
        }

        tracing::info!(answers = events.len(), "review session finished");
        Ok(events)
    }

    /// Ask for one word, score the answer and update the record.
    fn review_one(&mut self, record: &mut WordRecord) -> Result<ReviewEvent> {
        self.terminal.show("Answer: ");
        self.say(&record.word);
        self.say(&format!("The word is {}", record.word));

        let answer = self.terminal.read_answer()?;
        let correct = record.matches(&answer);
        let now = self.clock.now();
        record.record_answer(correct, now);

        Ok(ReviewEvent {
            word: record.word.clone(),
            answer,
            correct,
            level: record.repetition_level,
            due_date: record.due_date,
            answered_at: now,
        })
    }

    /// Speak `text`, logging failures instead of aborting the session.
    fn say(&self, text: &str) {
        if let Err(e) = self.announcer.announce(text) {
            tracing::warn!(error = %e, text, "speech failed");
        }
    }
}
