//! `revise list` command implementation.

use crate::core::{WordRecord, format_duration};
use crate::error::Result;
use crate::storage::{CsvBackend, WordStore};
use chrono::{DateTime, Local, Utc};
use std::path::Path;

/// Maximum width of the word column.
const WORD_COLUMN_WIDTH: usize = 20;

/// Run the list command.
///
/// Shows every word with its level, due time and time remaining, soonest
/// first.
///
/// # Errors
///
/// Returns an error if the word file cannot be read.
pub fn run(word_file: &Path) -> Result<()> {
    let store = CsvBackend::new(word_file);
    let records = store.load()?;

    if records.is_empty() {
        println!("No words in {}.", word_file.display());
        println!("\nAdd some with: revise add {} <word>...", word_file.display());
        return Ok(());
    }

    let now = Utc::now();
    let mut sorted: Vec<&WordRecord> = records.iter().collect();
    sorted.sort_by_key(|r| r.due_date);

    println!(
        "{:<width$} {:>5} {:<17} Next Review",
        "Word",
        "Level",
        "Due",
        width = WORD_COLUMN_WIDTH
    );
    println!("{}", "─".repeat(70));

    for record in &sorted {
        println!(
            "{:<width$} {:>5} {:<17} {}",
            truncate_word(&record.word),
            record.repetition_level,
            format_local_time(record.due_date),
            describe_due(record.due_date, now),
            width = WORD_COLUMN_WIDTH
        );
    }

    let due = sorted.iter().filter(|r| r.is_due(now)).count();
    println!("{}", "─".repeat(70));
    println!("Showing {} word(s), {due} due", sorted.len());

    Ok(())
}

/// Format UTC time as local time for display.
fn format_local_time(utc: DateTime<Utc>) -> String {
    let local: DateTime<Local> = utc.into();
    local.format("%Y-%m-%d %H:%M").to_string()
}

/// Describe how long until `due`.
fn describe_due(due: DateTime<Utc>, now: DateTime<Utc>) -> String {
    if due < now {
        return "due now".to_string();
    }

    let remaining = format_duration(due - now);
    if remaining.is_empty() {
        "due now".to_string()
    } else {
        format!("in {remaining}")
    }
}

/// Shorten long words to fit the word column.
fn truncate_word(word: &str) -> String {
    if word.chars().count() > WORD_COLUMN_WIDTH {
        let head: String = word.chars().take(WORD_COLUMN_WIDTH - 3).collect();
        format!("{head}...")
    } else {
        word.to_string()
    }
}
