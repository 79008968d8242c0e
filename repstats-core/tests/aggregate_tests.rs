use chrono::{FixedOffset, NaiveDate, TimeZone, Utc};
use repstats_core::{
    aggregate_daily, cards_by_repetition_count, DayRange, Flashcard, Outcome, ReviewRecord,
    EPOCH_FLOOR_MS,
};

fn at(y: i32, m: u32, d: u32, h: u32) -> i64 {
    Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap().timestamp_millis()
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn sample_card() -> Flashcard {
    // deliberately out of order
    Flashcard::with_id("c1")
        .reviewed(at(2024, 3, 4, 9), Outcome::Easy)
        .reviewed(at(2024, 3, 1, 10), Outcome::Good)
        .reviewed(at(2024, 3, 1, 15), Outcome::Forgot)
}

#[test]
fn fills_gaps_between_first_and_last_review() {
    let series = aggregate_daily(&[sample_card()], DayRange::all(), &Utc);

    let counts: Vec<u32> = series.iter().map(|p| p.count).collect();
    assert_eq!(counts, vec![2, 0, 0, 1]);
    assert_eq!(series[0].day, date(2024, 3, 1));
    assert_eq!(series[3].day, date(2024, 3, 4));
    for w in series.windows(2) {
        assert_eq!(w[0].day.succ_opt(), Some(w[1].day));
    }
}

#[test]
fn explicit_range_is_materialized_and_filters_outside_reviews() {
    let card = sample_card().reviewed(at(2024, 3, 10, 8), Outcome::Good);
    let range = DayRange::between(date(2024, 2, 28), date(2024, 3, 5));

    let series = aggregate_daily(&[card], range, &Utc);

    // 28 Feb, 29 Feb (leap year), 1..=5 Mar
    assert_eq!(series.len(), 7);
    assert_eq!(series[0].day, date(2024, 2, 28));
    assert_eq!(series[2].count, 2);
    assert_eq!(series[5].count, 1);
    assert_eq!(series.iter().map(|p| p.count).sum::<u32>(), 3);
}

#[test]
fn open_start_takes_first_review_day() {
    let range = DayRange {
        start: None,
        end: Some(date(2024, 3, 6)),
    };
    let series = aggregate_daily(&[sample_card()], range, &Utc);
    assert_eq!(series.first().map(|p| p.day), Some(date(2024, 3, 1)));
    assert_eq!(series.last().map(|p| p.day), Some(date(2024, 3, 6)));
    assert_eq!(series.len(), 6);
}

#[test]
fn epoch_floor_and_unknown_scores_never_count() {
    let card = Flashcard::with_id("old")
        .reviewed(EPOCH_FLOOR_MS, Outcome::Good)
        .reviewed(at(2016, 6, 1, 12), Outcome::Forgot)
        .reviewed(at(2024, 1, 2, 12), Outcome::Hard);
    let mut odd = Flashcard::with_id("odd");
    odd.history.push(ReviewRecord::new(at(2024, 1, 2, 13), 0.7));
    odd.history.push(ReviewRecord::new(i64::MAX, 1.0));

    let series = aggregate_daily(&[card, odd], DayRange::all(), &Utc);

    assert_eq!(series.len(), 1);
    assert_eq!(series[0].day, date(2024, 1, 2));
    assert_eq!(series[0].count, 1);
}

#[test]
fn empty_when_nothing_qualifies() {
    assert!(aggregate_daily(&[], DayRange::all(), &Utc).is_empty());

    let only_old = Flashcard::with_id("a").reviewed(at(2015, 5, 5, 5), Outcome::Good);
    assert!(aggregate_daily(&[only_old], DayRange::all(), &Utc).is_empty());

    let range = DayRange::between(date(2023, 1, 1), date(2023, 1, 31));
    assert!(aggregate_daily(&[sample_card()], range, &Utc).is_empty());
}

#[test]
fn buckets_by_local_day() {
    let new_york_winter = FixedOffset::west_opt(5 * 3600).unwrap();
    // 03:00 UTC on the 2nd is 22:00 on the 1st in UTC-5
    let card = Flashcard::with_id("tz").reviewed(at(2024, 3, 2, 3), Outcome::Good);

    let local = aggregate_daily(&[card.clone()], DayRange::all(), &new_york_winter);
    let utc = aggregate_daily(&[card], DayRange::all(), &Utc);

    assert_eq!(local[0].day, date(2024, 3, 1));
    assert_eq!(utc[0].day, date(2024, 3, 2));
}

#[test]
fn repetition_count_histogram() {
    let two_a = Flashcard::with_id("a")
        .reviewed(at(2024, 1, 1, 1), Outcome::Good)
        .reviewed(at(2024, 1, 2, 1), Outcome::Good);
    let two_b = Flashcard::with_id("b")
        .reviewed(at(2024, 1, 1, 1), Outcome::Forgot)
        .reviewed(at(2024, 1, 3, 1), Outcome::Easy);
    let one = Flashcard::with_id("c").reviewed(at(2024, 1, 1, 1), Outcome::Skip);
    let none = Flashcard::with_id("d");

    let hist = cards_by_repetition_count(&[two_a, one, none, two_b]);
    assert_eq!(hist, vec![(1, 1), (2, 2)]);
}
