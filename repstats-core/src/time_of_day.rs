use crate::{models::counted_reviews, stats::round_tenth, Flashcard, ScoreCounts};
use chrono::{TimeZone, Timelike};
use serde::Serialize;

pub const TIME_BLOCK_HOURS: u32 = 3;

const LABELS: [&str; 8] = [
    "12 AM - 3 AM",
    "3 AM - 6 AM",
    "6 AM - 9 AM",
    "9 AM - 12 PM",
    "12 PM - 3 PM",
    "3 PM - 6 PM",
    "6 PM - 9 PM",
    "9 PM - 12 AM",
];

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TimeBlock {
    pub label: &'static str,
    pub start_hour: u32,
    pub forgot: u32,
    pub remembered: u32,
    pub total: u32,
    /// 0 when the block has no graded reviews.
    pub retention_percent: f64,
}

/// Retention in eight local three-hour blocks from midnight. All blocks are
/// always returned, in order, even when empty.
pub fn retention_by_time_of_day<Tz: TimeZone>(cards: &[Flashcard], tz: &Tz) -> Vec<TimeBlock> {
    let mut counts = [ScoreCounts::default(); 8];
    for (at, o) in counted_reviews(cards) {
        let block = (at.with_timezone(tz).hour() / TIME_BLOCK_HOURS) as usize;
        counts[block].record(o);
    }

    counts
        .iter()
        .zip(LABELS)
        .enumerate()
        .map(|(i, (c, label))| {
            let total = c.graded();
            let retention_percent = match c.retention_rate().as_fraction() {
                Some(r) => round_tenth(r * 100.0),
                None => 0.0,
            };
            TimeBlock {
                label,
                start_hour: i as u32 * TIME_BLOCK_HOURS,
                forgot: c.forgot,
                remembered: c.remembered(),
                total,
                retention_percent,
            }
        })
        .collect()
}
