//! In-memory storage backend for testing.

use crate::core::WordRecord;
use crate::error::Result;
use crate::storage::traits::WordStore;
use std::sync::RwLock;

/// In-memory storage backend for testing.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    records: RwLock<Vec<WordRecord>>,
    saves: RwLock<usize>,
}

impl MemoryBackend {
    /// Create a new, empty in-memory backend.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a backend pre-filled with `records`.
    #[must_use]
    pub fn with_records(records: Vec<WordRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            saves: RwLock::new(0),
        }
    }

    /// Number of times [`WordStore::save`] has been called.
    #[must_use]
    pub fn save_count(&self) -> usize {
        *self.saves.read().unwrap()
    }
}

impl WordStore for MemoryBackend {
    fn load(&self) -> Result<Vec<WordRecord>> {
        Ok(self.records.read().unwrap().clone())
    }

    fn save(&self, records: &[WordRecord]) -> Result<()> {
        *self.records.write().unwrap() = records.to_vec();
        *self.saves.write().unwrap() += 1;
        Ok(())
    }
}
