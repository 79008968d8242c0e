use crate::{day::day_key, days_inclusive, models::counted_reviews, span_len, DailyPoint, Flashcard};
use chrono::{NaiveDate, TimeZone};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use tracing::debug;

/// Inclusive calendar range; an open end is taken from the data.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DayRange {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start.map_or(true, |s| day >= s) && self.end.map_or(true, |e| day <= e)
    }
}

/// Reviews per local day, gap-filled across the range.
///
/// Bucket first, then walk the range once, so cost is linear in reviews plus
/// days. Returns an empty series when no review qualifies.
pub fn aggregate_daily<Tz: TimeZone>(
    cards: &[Flashcard],
    range: DayRange,
    tz: &Tz,
) -> Vec<DailyPoint> {
    let mut buckets: HashMap<NaiveDate, u32> = HashMap::new();
    let mut first: Option<NaiveDate> = None;
    let mut last: Option<NaiveDate> = None;

    for (at, _) in counted_reviews(cards) {
        let day = day_key(&at, tz);
        if !range.contains(day) {
            continue;
        }
        *buckets.entry(day).or_default() += 1;
        first = Some(first.map_or(day, |f| f.min(day)));
        last = Some(last.map_or(day, |l| l.max(day)));
    }

    let (Some(first), Some(last)) = (first, last) else {
        debug!(cards = cards.len(), "no qualifying reviews");
        return Vec::new();
    };
    let start = range.start.unwrap_or(first);
    let end = range.end.unwrap_or(last);

    let mut series = Vec::with_capacity(span_len(start, end));
    series.extend(
        days_inclusive(start, end)
            .map(|d| DailyPoint::new(d, buckets.get(&d).copied().unwrap_or(0))),
    );
    debug!(
        cards = cards.len(),
        days = series.len(),
        active_days = buckets.len(),
        "daily review series built"
    );
    series
}

/// How many cards have exactly `n` counted reviews, ascending by `n`.
/// Cards without counted reviews are left out.
pub fn cards_by_repetition_count(cards: &[Flashcard]) -> Vec<(u32, u32)> {
    let mut by_count: BTreeMap<u32, u32> = BTreeMap::new();
    for card in cards {
        let n = card.counted_reviews().count() as u32;
        if n > 0 {
            *by_count.entry(n).or_default() += 1;
        }
    }
    by_count.into_iter().collect()
}
