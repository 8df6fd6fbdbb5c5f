//! Error types for revise.

use std::io;
use thiserror::Error;

/// Result type alias for revise operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in revise operations.
#[derive(Debug, Error)]
pub enum Error {
    /// Storage I/O error.
    #[error("Storage error: {0}")]
    Storage(#[from] io::Error),

    /// CSV reader/writer error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Word file is readable but does not match the expected schema.
    #[error("Malformed word file: {0}")]
    DataFormat(String),

    /// A word that cannot be stored (blank after trimming).
    #[error("Invalid word: {0:?}")]
    InvalidWord(String),

    /// Speech playback failed.
    #[error("Speech error: {0}")]
    Speech(String),

    /// Console input reached end of file before the session finished.
    #[error("Input closed before the review session finished")]
    InputClosed,

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}
