//! Core scheduling types and the review session.

pub mod clock;
pub mod format;
pub mod interval;
pub mod scheduler;
pub mod session;
pub mod word;

pub use clock::{Clock, FixedClock, SystemClock};
pub use format::format_duration;
pub use interval::{LEVEL_COUNT, MAX_LEVEL, interval};
pub use scheduler::{next_due, select_due, select_due_mut};
pub use session::{AFFIRMATIONS, ReviewEvent, ReviewSession};
pub use word::WordRecord;
