//! Reduce one day's fire records to a single status.

use coalcal_common::model::{DayStatus, FireRecord};

/// Most severe status among `records` (`fire > risk > safe`).
///
/// Returns `None` for an empty input; a day without records is decided by
/// a [`FallbackPolicy`](crate::fallback::FallbackPolicy), not here.
pub fn resolve<'a, I>(records: I) -> Option<DayStatus>
where
    I: IntoIterator<Item = &'a FireRecord>,
{
    records
        .into_iter()
        .map(|r| r.status)
        .max_by_key(|s| s.severity())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn records(statuses: &[DayStatus]) -> Vec<FireRecord> {
        let date = NaiveDate::from_ymd_opt(2024, 2, 15).unwrap();
        statuses
            .iter()
            .enumerate()
            .map(|(i, &s)| FireRecord::new(date, 1, i as i64, s))
            .collect()
    }

    fn status_strategy() -> impl Strategy<Value = DayStatus> {
        prop_oneof![
            Just(DayStatus::Safe),
            Just(DayStatus::Risk),
            Just(DayStatus::Fire),
        ]
    }

    /// A day's records together with an arbitrary reordering of them.
    fn day_and_permutation() -> impl Strategy<Value = (Vec<FireRecord>, Vec<FireRecord>)> {
        proptest::collection::vec(status_strategy(), 1..20).prop_flat_map(|statuses| {
            let day = records(&statuses);
            (Just(day.clone()), Just(day).prop_shuffle())
        })
    }

    #[test]
    fn test_empty_is_none() {
        let none: Vec<FireRecord> = Vec::new();
        assert_eq!(resolve(&none), None);
    }

    #[test]
    fn test_risk_beats_safe() {
        let day = records(&[DayStatus::Safe, DayStatus::Risk, DayStatus::Safe]);
        assert_eq!(resolve(&day), Some(DayStatus::Risk));
    }

    #[test]
    fn test_single_fire_wins() {
        let day = records(&[DayStatus::Safe, DayStatus::Risk, DayStatus::Fire, DayStatus::Safe]);
        assert_eq!(resolve(&day), Some(DayStatus::Fire));
    }

    #[test]
    fn test_all_safe() {
        let day = records(&[DayStatus::Safe, DayStatus::Safe]);
        assert_eq!(resolve(&day), Some(DayStatus::Safe));
    }

    proptest! {
        #[test]
        fn prop_order_independent((day, shuffled) in day_and_permutation()) {
            prop_assert_eq!(resolve(&shuffled), resolve(&day));
        }

        #[test]
        fn prop_result_is_the_maximum(
            statuses in proptest::collection::vec(status_strategy(), 1..20),
        ) {
            let day = records(&statuses);
            let max = statuses.iter().copied().max();
            prop_assert_eq!(resolve(&day), max);
            if statuses.contains(&DayStatus::Fire) {
                prop_assert_eq!(resolve(&day), Some(DayStatus::Fire));
            }
        }
    }
}
