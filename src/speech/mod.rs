//! Text-to-speech backends.

pub mod command;
pub mod recording;
pub mod traits;

pub use command::CommandAnnouncer;
pub use recording::{RecordingAnnouncer, SilentAnnouncer};
pub use traits::Announcer;
