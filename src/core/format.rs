//! Human-readable durations for "next review in" reporting.

use chrono::Duration;

const MINUTE: u64 = 60;
const HOUR: u64 = 60 * MINUTE;
const DAY: u64 = 24 * HOUR;

/// Period lengths in seconds, largest first.
const PERIODS: [(u64, &str); 6] = [
    (365 * DAY, "year"),
    (30 * DAY, "month"),
    (DAY, "day"),
    (HOUR, "hour"),
    (MINUTE, "minute"),
    (1, "second"),
];

/// Format a duration as e.g. `2 days, 3 hours, 15 minutes`.
///
/// A unit appears only when the remaining whole seconds are strictly greater
/// than one of that unit, so exactly one hour renders as `60 minutes`.
/// Negative durations are prefixed with `-`; zero renders as an empty string.
#[must_use]
pub fn format_duration(delta: Duration) -> String {
    let mut seconds = delta.num_seconds().unsigned_abs();
    let mut parts = Vec::new();

    for (period_seconds, name) in PERIODS {
        if seconds > period_seconds {
            let value = seconds / period_seconds;
            seconds %= period_seconds;
            let plural = if value > 1 { "s" } else { "" };
            parts.push(format!("{value} {name}{plural}"));
        }
    }

    let joined = parts.join(", ");
    if delta < Duration::zero() {
        format!("-{joined}")
    } else {
        joined
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_is_empty() {
        assert_eq!(format_duration(Duration::zero()), "");
    }

    #[test]
    fn ninety_days_is_three_months() {
        assert_eq!(format_duration(Duration::days(90)), "3 months");
    }

    #[test]
    fn negative_hour_has_minus_prefix() {
        let formatted = format_duration(Duration::hours(-1));
        assert!(formatted.starts_with('-'));
        assert_eq!(formatted, "-60 minutes");
    }

    #[test]
    fn mixed_units_are_comma_joined() {
        let delta = Duration::days(2) + Duration::hours(3) + Duration::minutes(15);
        assert_eq!(format_duration(delta), "2 days, 3 hours, 15 minutes");
    }

    #[test]
    fn singular_units() {
        let delta = Duration::days(1) + Duration::hours(1) + Duration::seconds(30);
        assert_eq!(format_duration(delta), "1 day, 1 hour, 30 seconds");
    }

    #[test]
    fn exact_unit_falls_to_next_smaller() {
        assert_eq!(format_duration(Duration::hours(1)), "60 minutes");
        assert_eq!(format_duration(Duration::minutes(1)), "60 seconds");
    }

    #[test]
    fn single_second_is_dropped() {
        assert_eq!(format_duration(Duration::seconds(1)), "");
        assert_eq!(format_duration(Duration::seconds(2)), "2 seconds");
    }

    #[test]
    fn years_and_months() {
        let delta = Duration::days(400);
        assert_eq!(format_duration(delta), "1 year, 1 month, 5 days");
    }

    #[test]
    fn subsecond_fraction_is_ignored() {
        let delta = Duration::minutes(10) + Duration::milliseconds(999);
        assert_eq!(format_duration(delta), "10 minutes");
    }

    proptest! {
        #[test]
        fn sign_is_symmetric(secs in 2i64..100_000_000) {
            let positive = format_duration(Duration::seconds(secs));
            let negative = format_duration(Duration::seconds(-secs));
            prop_assert_eq!(negative, format!("-{positive}"));
        }
    }
}
