//! Due-word selection.

use crate::core::word::WordRecord;
use chrono::{DateTime, Utc};

/// Select the words due at `now`, preserving their order.
#[must_use]
pub fn select_due(records: &[WordRecord], now: DateTime<Utc>) -> Vec<&WordRecord> {
    records.iter().filter(|r| r.is_due(now)).collect()
}

/// Mutable variant of [`select_due`], used to hand due words to a session.
pub fn select_due_mut(records: &mut [WordRecord], now: DateTime<Utc>) -> Vec<&mut WordRecord> {
    records.iter_mut().filter(|r| r.is_due(now)).collect()
}

/// Earliest due date in the collection, if any.
#[must_use]
pub fn next_due(records: &[WordRecord]) -> Option<DateTime<Utc>> {
    records.iter().map(|r| r.due_date).min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};
    use proptest::prelude::*;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 1, 9, 0, 0).unwrap()
    }

    fn word_due(word: &str, offset_minutes: i64) -> WordRecord {
        let mut record = WordRecord::new(word, t0());
        record.due_date = t0() + Duration::minutes(offset_minutes);
        record
    }

    #[test]
    fn selects_past_due_in_order() {
        let records = vec![
            word_due("cat", -10),
            word_due("dog", 30),
            word_due("emu", -1),
        ];

        let due: Vec<&str> = select_due(&records, t0())
            .iter()
            .map(|r| r.word.as_str())
            .collect();
        assert_eq!(due, vec!["cat", "emu"]);
    }

    #[test]
    fn due_exactly_now_is_not_selected() {
        let records = vec![word_due("cat", 0)];
        assert!(select_due(&records, t0()).is_empty());
    }

    #[test]
    fn inactive_words_are_still_selected() {
        let mut record = word_due("cat", -5);
        record.active = false;
        assert_eq!(select_due(&[record], t0()).len(), 1);
    }

    #[test]
    fn select_due_mut_allows_updates() {
        let mut records = vec![word_due("cat", -10), word_due("dog", 30)];

        for record in select_due_mut(&mut records, t0()) {
            record.record_answer(true, t0());
        }

        assert_eq!(records[0].repetition_level, 1);
        assert_eq!(records[1].repetition_level, 0);
    }

    #[test]
    fn next_due_is_minimum() {
        let records = vec![word_due("cat", 90), word_due("dog", 30), word_due("emu", 60)];
        assert_eq!(next_due(&records), Some(t0() + Duration::minutes(30)));
    }

    #[test]
    fn next_due_of_empty_is_none() {
        assert_eq!(next_due(&[]), None);
    }

    proptest! {
        #[test]
        fn select_due_is_exact_filter(offsets in proptest::collection::vec(-1000i64..1000, 0..40)) {
            let records: Vec<WordRecord> = offsets
                .iter()
                .enumerate()
                .map(|(i, m)| word_due(&format!("w{i}"), *m))
                .collect();

            let due = select_due(&records, t0());
            let expected = offsets.iter().filter(|m| **m < 0).count();
            prop_assert_eq!(due.len(), expected);
            prop_assert!(due.iter().all(|r| r.due_date < t0()));
            prop_assert_eq!(due.is_empty(), records.iter().all(|r| r.due_date >= t0()));
        }
    }
}
