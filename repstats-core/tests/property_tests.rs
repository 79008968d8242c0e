use chrono::{NaiveDate, Utc};
use proptest::prelude::*;
use repstats_core::{
    aggregate_daily, by_weekday, cumulative_average, interpolate, moving_average, DailyPoint,
    DayRange, Flashcard, ReviewRecord, ValuePoint, EPOCH_FLOOR_MS,
};

const JAN_1_2024: i64 = 1_704_067_200_000;
const HOUR: i64 = 3_600_000;
const SCORES: [f64; 7] = [0.01, 0.0, 0.5, 1.0, 1.5, 0.7, -1.0];

fn review() -> impl Strategy<Value = ReviewRecord> {
    (0i64..90 * 24, 0usize..SCORES.len(), any::<bool>()).prop_map(|(hours, s, old)| {
        let ts = if old {
            EPOCH_FLOOR_MS - hours * HOUR
        } else {
            JAN_1_2024 + hours * HOUR
        };
        ReviewRecord::new(ts, SCORES[s])
    })
}

fn cards() -> impl Strategy<Value = Vec<Flashcard>> {
    prop::collection::vec(prop::collection::vec(review(), 0..20), 0..8).prop_map(|hs| {
        hs.into_iter()
            .enumerate()
            .map(|(i, history)| Flashcard {
                history,
                ..Flashcard::with_id(i.to_string())
            })
            .collect()
    })
}

fn counts() -> impl Strategy<Value = Vec<DailyPoint>> {
    prop::collection::vec(0u32..50, 0..60).prop_map(|cs| {
        let start = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap();
        start
            .iter_days()
            .zip(cs)
            .map(|(d, c)| DailyPoint::new(d, c))
            .collect()
    })
}

proptest! {
    #[test]
    fn daily_series_is_gapless_and_complete(cards in cards()) {
        let series = aggregate_daily(&cards, DayRange::all(), &Utc);
        let qualifying = cards
            .iter()
            .flat_map(|c| &c.history)
            .filter(|r| r.timestamp > EPOCH_FLOOR_MS && r.outcome().is_some())
            .count();

        prop_assert_eq!(series.iter().map(|p| p.count as usize).sum::<usize>(), qualifying);
        if let (Some(first), Some(last)) = (series.first(), series.last()) {
            prop_assert_eq!(series.len() as i64, (last.day - first.day).num_days() + 1);
        } else {
            prop_assert_eq!(qualifying, 0);
        }
        for w in series.windows(2) {
            prop_assert_eq!(w[0].day.succ_opt(), Some(w[1].day));
        }
    }

    #[test]
    fn weekday_lanes_partition_the_series(series in counts()) {
        let buckets = by_weekday(&series);
        let mut merged: Vec<DailyPoint> = buckets.iter().flat_map(|(_, l)| l.to_vec()).collect();
        merged.sort_by_key(|p| p.day);
        prop_assert_eq!(merged, series);
    }

    #[test]
    fn smoothing_length_laws(series in counts(), window in 0usize..10) {
        let values: Vec<ValuePoint> = series.iter().copied().map(Into::into).collect();
        let n = values.len();
        let ma = moving_average(&values, window);
        if window <= 1 || n == 0 {
            prop_assert_eq!(ma.len(), n);
        } else if n >= window {
            prop_assert_eq!(ma.len(), n - window + 1);
        } else {
            prop_assert!(ma.is_empty());
        }
        prop_assert_eq!(cumulative_average(&values).len(), n);
    }

    #[test]
    fn interpolation_endpoints(a in "#[0-9a-f]{6}", b in "#[0-9a-f]{6}") {
        prop_assert_eq!(interpolate(&a, &b, 0.0), a.clone());
        prop_assert_eq!(interpolate(&a, &b, 1.0), b);
    }
}
