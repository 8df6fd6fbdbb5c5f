//! Announcer trait definition.

use crate::error::Result;

/// Speaks text aloud.
pub trait Announcer {
    /// Speak `text`, blocking until playback finishes.
    ///
    /// # Errors
    ///
    /// Returns an error if playback fails. Callers treat this as best-effort.
    fn announce(&self, text: &str) -> Result<()>;
}
