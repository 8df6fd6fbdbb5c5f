//! `revise add` command implementation.

use crate::core::{Clock, SystemClock, WordRecord};
use crate::error::{Error, Result};
use crate::storage::{CsvBackend, WordStore};
use std::path::Path;

/// Run the add command.
///
/// Appends each word at level 0, due immediately, and saves the file.
///
/// # Errors
///
/// Returns an error if a word is blank or the word file cannot be read or
/// written.
pub fn run(word_file: &Path, words: &[String]) -> Result<()> {
    let store = CsvBackend::new(word_file);
    let added = add_words(&store, &SystemClock, words)?;

    println!("Added {added} word(s) to {}.", word_file.display());
    Ok(())
}

/// Append `words` to the store and persist it. Returns the number added.
///
/// Words are trimmed. Nothing is saved if any word is blank.
///
/// # Errors
///
/// Returns [`Error::InvalidWord`] for a blank word, or a storage error.
pub fn add_words(store: &dyn WordStore, clock: &dyn Clock, words: &[String]) -> Result<usize> {
    let words = words
        .iter()
        .map(|w| {
            let trimmed = w.trim();
            if trimmed.is_empty() {
                Err(Error::InvalidWord(w.clone()))
            } else {
                Ok(trimmed)
            }
        })
        .collect::<Result<Vec<_>>>()?;

    let mut records = store.load()?;
    let now = clock.now();
    records.extend(words.iter().map(|w| WordRecord::new(w, now)));
    store.save(&records)?;

    tracing::info!(added = words.len(), total = records.len(), "words added");
    Ok(words.len())
}
