//! The spaced-repetition backoff curve.

use chrono::Duration;

/// Number of repetition levels.
pub const LEVEL_COUNT: usize = 11;

/// Highest valid repetition level.
pub const MAX_LEVEL: usize = LEVEL_COUNT - 1;

/// Delay before a word is due again, indexed by repetition level.
///
/// Level 0 means the word is due again immediately; each level above
/// that waits longer, up to 90 days at [`MAX_LEVEL`].
pub const INTERVAL_SECONDS: [i64; LEVEL_COUNT] = [
    0,
    60 * 60,
    3 * 60 * 60,
    7 * 60 * 60,
    24 * 60 * 60,
    2 * 24 * 60 * 60,
    3 * 24 * 60 * 60,
    7 * 24 * 60 * 60,
    14 * 24 * 60 * 60,
    30 * 24 * 60 * 60,
    90 * 24 * 60 * 60,
];

/// Get the review interval for a repetition level.
///
/// Levels past the end of the table use the longest interval.
#[must_use]
pub fn interval(level: usize) -> Duration {
    Duration::seconds(INTERVAL_SECONDS[clamp_level(level)])
}

/// Clamp a level into `0..=MAX_LEVEL`.
#[must_use]
pub fn clamp_level(level: usize) -> usize {
    level.min(MAX_LEVEL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn table_has_eleven_levels() {
        assert_eq!(INTERVAL_SECONDS.len(), 11);
        assert_eq!(MAX_LEVEL, 10);
    }

    #[test]
    fn first_level_is_immediate() {
        assert_eq!(interval(0), Duration::zero());
    }

    #[test]
    fn last_level_is_ninety_days() {
        assert_eq!(interval(MAX_LEVEL), Duration::days(90));
    }

    #[test]
    fn intervals_strictly_increase() {
        for pair in INTERVAL_SECONDS.windows(2) {
            assert!(pair[0] < pair[1], "{} >= {}", pair[0], pair[1]);
        }
    }

    #[test]
    fn out_of_range_level_uses_longest_interval() {
        assert_eq!(interval(MAX_LEVEL + 1), Duration::days(90));
        assert_eq!(interval(usize::MAX), Duration::days(90));
    }

    #[test]
    fn known_intervals() {
        assert_eq!(interval(1), Duration::hours(1));
        assert_eq!(interval(4), Duration::hours(24));
        assert_eq!(interval(7), Duration::days(7));
    }
}
