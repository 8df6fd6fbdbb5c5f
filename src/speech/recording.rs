//! Announcers that produce no sound.

use crate::error::Result;
use crate::speech::traits::Announcer;
use std::sync::Mutex;

/// Announcer that discards everything. Used when speech is disabled.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentAnnouncer;

impl Announcer for SilentAnnouncer {
    fn announce(&self, text: &str) -> Result<()> {
        tracing::trace!(text, "speech disabled");
        Ok(())
    }
}

/// Announcer that records what it was asked to say, for testing.
#[derive(Debug, Default)]
pub struct RecordingAnnouncer {
    spoken: Mutex<Vec<String>>,
}

impl RecordingAnnouncer {
    /// Create an empty recording announcer.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Everything announced so far, in order.
    #[must_use]
    pub fn spoken(&self) -> Vec<String> {
        self.spoken.lock().unwrap().clone()
    }
}

impl Announcer for RecordingAnnouncer {
    fn announce(&self, text: &str) -> Result<()> {
        self.spoken.lock().unwrap().push(text.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_in_order() {
        let announcer = RecordingAnnouncer::new();
        announcer.announce("cat").unwrap();
        announcer.announce("The word is cat").unwrap();

        assert_eq!(announcer.spoken(), vec!["cat", "The word is cat"]);
    }

    #[test]
    fn silent_always_succeeds() {
        assert!(SilentAnnouncer.announce("anything").is_ok());
    }
}
