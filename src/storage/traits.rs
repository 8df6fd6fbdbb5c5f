//! Storage trait definitions.

use crate::core::WordRecord;
use crate::error::Result;

/// Storage backend for a word collection.
///
/// The collection is always loaded and saved whole.
pub trait WordStore {
    /// Load every word record. A store that does not exist yet is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the store exists but cannot be read or parsed.
    fn load(&self) -> Result<Vec<WordRecord>>;

    /// Replace the stored collection with `records`.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage operation fails.
    fn save(&self, records: &[WordRecord]) -> Result<()>;
}
