use chrono::{FixedOffset, TimeZone, Utc};
use repstats_core::{retention_by_time_of_day, Flashcard, Outcome};

fn at(h: u32, m: u32) -> i64 {
    Utc.with_ymd_and_hms(2024, 8, 15, h, m, 0).unwrap().timestamp_millis()
}

#[test]
fn eight_fixed_blocks() {
    let card = Flashcard::with_id("t")
        .reviewed(at(1, 0), Outcome::Forgot)
        .reviewed(at(2, 59), Outcome::Good)
        .reviewed(at(14, 0), Outcome::Easy)
        .reviewed(at(23, 59), Outcome::Skip);

    let blocks = retention_by_time_of_day(&[card], &Utc);

    assert_eq!(blocks.len(), 8);
    let starts: Vec<u32> = blocks.iter().map(|b| b.start_hour).collect();
    assert_eq!(starts, vec![0, 3, 6, 9, 12, 15, 18, 21]);
    assert_eq!(blocks[0].label, "12 AM - 3 AM");
    assert_eq!(blocks[7].label, "9 PM - 12 AM");

    assert_eq!(blocks[0].forgot, 1);
    assert_eq!(blocks[0].remembered, 1);
    assert_eq!(blocks[0].total, 2);
    assert_eq!(blocks[0].retention_percent, 50.0);
    assert_eq!(blocks[4].retention_percent, 100.0);
    assert_eq!(blocks[7].total, 0);
    assert_eq!(blocks[7].retention_percent, 0.0);
}

#[test]
fn empty_input_still_has_all_blocks() {
    let blocks = retention_by_time_of_day(&[], &Utc);
    assert_eq!(blocks.len(), 8);
    assert!(blocks.iter().all(|b| b.total == 0));
}

#[test]
fn hour_is_local() {
    let tz = FixedOffset::east_opt(2 * 3600).unwrap();
    let card = Flashcard::with_id("l").reviewed(at(23, 0), Outcome::Good);
    let blocks = retention_by_time_of_day(&[card], &tz);
    assert_eq!(blocks[0].remembered, 1);
    assert_eq!(blocks[7].remembered, 0);
}
