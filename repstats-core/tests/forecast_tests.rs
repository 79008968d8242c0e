use chrono::{Duration, FixedOffset, NaiveDate, TimeZone, Utc};
use repstats_core::{forecast_due, Flashcard};

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

fn due_in(offset: Duration) -> Flashcard {
    Flashcard::new().due_at((now() + offset).timestamp_millis())
}

#[test]
fn one_card_three_days_out() {
    let cards = vec![due_in(Duration::days(3))];
    let series = forecast_due(&cards, 7, now(), &Utc);

    let counts: Vec<u32> = series.iter().map(|p| p.count).collect();
    assert_eq!(counts, vec![0, 0, 0, 1, 0, 0, 0]);
    assert_eq!(series[0].day, NaiveDate::from_ymd_opt(2024, 5, 10).unwrap());
    for w in series.windows(2) {
        assert_eq!(w[0].day.succ_opt(), Some(w[1].day));
    }
}

#[test]
fn past_present_unscheduled_and_far_cards_are_dropped() {
    let cards = vec![
        due_in(Duration::days(-2)),
        due_in(Duration::zero()),
        due_in(Duration::days(10)),
        Flashcard::new(),
        due_in(Duration::hours(1)),
        due_in(Duration::days(2)),
        due_in(Duration::days(2) + Duration::hours(5)),
    ];
    let series = forecast_due(&cards, 7, now(), &Utc);

    assert_eq!(series.len(), 7);
    assert_eq!(series[0].count, 1);
    assert_eq!(series[2].count, 2);
    assert_eq!(series.iter().map(|p| p.count).sum::<u32>(), 3);
}

#[test]
fn today_is_the_local_day_of_now() {
    // 12:00 UTC is 01:00 the next day at UTC+13
    let tz = FixedOffset::east_opt(13 * 3600).unwrap();
    let series = forecast_due(&[due_in(Duration::hours(2))], 3, now(), &tz);
    assert_eq!(series[0].day, NaiveDate::from_ymd_opt(2024, 5, 11).unwrap());
    assert_eq!(series[0].count, 1);
}

#[test]
fn zero_horizon_is_empty() {
    assert!(forecast_due(&[due_in(Duration::days(1))], 0, now(), &Utc).is_empty());
    assert_eq!(forecast_due(&[], 4, now(), &Utc).len(), 4);
}
