//! `revise review` command implementation.

use crate::config::Config;
use crate::core::{
    Clock, ReviewEvent, ReviewSession, SystemClock, format_duration, next_due, select_due_mut,
};
use crate::error::Result;
use crate::speech::{Announcer, CommandAnnouncer, SilentAnnouncer};
use crate::storage::{CsvBackend, WordStore};
use crate::terminal::{StdTerminal, Terminal};
use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::path::Path;

/// Result of a review run.
#[derive(Debug)]
pub enum ReviewOutcome {
    /// A session ran to completion.
    Reviewed(Vec<ReviewEvent>),

    /// No word was due. Holds the earliest due date, if there are any words.
    NothingDue {
        /// Earliest due date in the store.
        next_due: Option<DateTime<Utc>>,
    },
}

/// Run the review command.
///
/// Drills every due word, then saves the whole word file. When nothing is
/// due, reports how long until the next review instead.
///
/// # Errors
///
/// Returns an error if the word file cannot be read or written, or if input
/// closes before the session finishes.
pub fn run(word_file: &Path, config: &Config) -> Result<()> {
    let store = CsvBackend::new(word_file);
    let announcer: Box<dyn Announcer> = if config.speech.enabled {
        Box::new(CommandAnnouncer::from_config(&config.speech))
    } else {
        Box::new(SilentAnnouncer)
    };
    let rng = match config.review.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let clock = SystemClock;
    let mut terminal = StdTerminal;

    match review_words(&store, &clock, announcer.as_ref(), &mut terminal, rng)? {
        ReviewOutcome::Reviewed(events) => {
            let words = events.iter().filter(|e| e.correct).count();
            println!(
                "\nReviewed {words} word(s) with {} answer(s).",
                events.len()
            );
        }
        ReviewOutcome::NothingDue {
            next_due: Some(at),
        } => {
            println!("Nothing to review.");
            println!("{}", next_review_message(at - clock.now()));
        }
        ReviewOutcome::NothingDue { next_due: None } => {
            println!("Nothing to review.");
            println!("No words in {}.", word_file.display());
        }
    }

    Ok(())
}

/// Load the store, drill the due words and save every record.
///
/// Nothing is saved when no word is due or when the session fails.
///
/// # Errors
///
/// Returns an error if loading, the session or saving fails.
pub fn review_words<R: Rng>(
    store: &dyn WordStore,
    clock: &dyn Clock,
    announcer: &dyn Announcer,
    terminal: &mut dyn Terminal,
    rng: R,
) -> Result<ReviewOutcome> {
    let mut records = store.load()?;
    let due = select_due_mut(&mut records, clock.now());

    if due.is_empty() {
        return Ok(ReviewOutcome::NothingDue {
            next_due: next_due(&records),
        });
    }

    tracing::info!(due = due.len(), "starting review session");
    let events = ReviewSession::new(clock, announcer, terminal, rng).run(due)?;
    store.save(&records)?;

    Ok(ReviewOutcome::Reviewed(events))
}

/// Message shown when nothing is due.
fn next_review_message(remaining: Duration) -> String {
    let formatted = format_duration(remaining);
    if formatted.is_empty() {
        "Next review is due now.".to_string()
    } else {
        format!("Next review in {formatted}")
    }
}
