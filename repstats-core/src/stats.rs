use crate::{
    aggregate::{aggregate_daily, DayRange},
    day::day_key,
    models::counted_reviews,
    DailyPoint, Flashcard, Outcome, ValuePoint,
};
use chrono::{NaiveDate, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Rounds to one decimal place.
pub(crate) fn round_tenth(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}

/// Button-press tallies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreCounts {
    pub skip: u32,
    pub forgot: u32,
    pub hard: u32,
    pub good: u32,
    pub easy: u32,
}

impl ScoreCounts {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Skip => self.skip += 1,
            Outcome::Forgot => self.forgot += 1,
            Outcome::Hard => self.hard += 1,
            Outcome::Good => self.good += 1,
            Outcome::Easy => self.easy += 1,
        }
    }

    pub fn get(&self, outcome: Outcome) -> u32 {
        match outcome {
            Outcome::Skip => self.skip,
            Outcome::Forgot => self.forgot,
            Outcome::Hard => self.hard,
            Outcome::Good => self.good,
            Outcome::Easy => self.easy,
        }
    }

    pub fn remembered(&self) -> u32 {
        self.hard + self.good + self.easy
    }

    /// Reviews that say something about recall; skips are excluded.
    pub fn graded(&self) -> u32 {
        self.forgot + self.remembered()
    }

    pub fn total(&self) -> u32 {
        self.skip + self.graded()
    }

    pub fn retention_rate(&self) -> Retention {
        let graded = self.graded();
        if graded == 0 {
            Retention::NoData
        } else {
            Retention::Rate(self.remembered() as f64 / graded as f64)
        }
    }
}

/// Remembered share of graded reviews. `NoData` is not a zero rate.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub enum Retention {
    Rate(f64),
    NoData,
}

impl Retention {
    pub fn as_fraction(&self) -> Option<f64> {
        match self {
            Retention::Rate(r) => Some(*r),
            Retention::NoData => None,
        }
    }
}

impl fmt::Display for Retention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Retention::Rate(r) => write!(f, "{r:.2}"),
            Retention::NoData => f.write_str("No Data"),
        }
    }
}

/// Outcome tallies over every counted review.
pub fn repetitions_by_score(cards: &[Flashcard]) -> ScoreCounts {
    repetitions_by_score_in(cards, DayRange::all(), &Utc)
}

/// Outcome tallies over counted reviews whose local day falls in `range`.
pub fn repetitions_by_score_in<Tz: TimeZone>(
    cards: &[Flashcard],
    range: DayRange,
    tz: &Tz,
) -> ScoreCounts {
    let mut counts = ScoreCounts::default();
    for (at, o) in counted_reviews(cards) {
        if range.contains(day_key(&at, tz)) {
            counts.record(o);
        }
    }
    counts
}

/// Longest run of consecutive entries with a non-zero count. Expects a
/// gap-filled series.
pub fn longest_streak(series: &[DailyPoint]) -> u32 {
    let mut longest = 0u32;
    let mut run = 0u32;
    for p in series {
        if p.count > 0 {
            run += 1;
            longest = longest.max(run);
        } else {
            run = 0;
        }
    }
    longest
}

/// Mean count per entry, rounded to the nearest integer.
pub fn daily_average(series: &[DailyPoint]) -> u32 {
    if series.is_empty() {
        return 0;
    }
    let sum: u64 = series.iter().map(|p| p.count as u64).sum();
    (sum as f64 / series.len() as f64).round() as u32
}

pub fn days_learned(series: &[DailyPoint]) -> u32 {
    series.iter().filter(|p| p.count > 0).count() as u32
}

/// Per-day retention percentage (one decimal), oldest first. Days with no
/// graded review are absent rather than zero.
pub fn retention_over_time<Tz: TimeZone>(cards: &[Flashcard], tz: &Tz) -> Vec<ValuePoint> {
    let mut per_day: BTreeMap<NaiveDate, ScoreCounts> = BTreeMap::new();
    for (at, o) in counted_reviews(cards) {
        per_day.entry(day_key(&at, tz)).or_default().record(o);
    }
    per_day
        .into_iter()
        .filter_map(|(day, counts)| {
            counts
                .retention_rate()
                .as_fraction()
                .map(|r| ValuePoint::new(day, round_tenth(r * 100.0)))
        })
        .collect()
}

/// Headline numbers for the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub days_learned: u32,
    pub daily_average: u32,
    pub longest_streak: u32,
    pub total_reviews: u32,
    pub scores: ScoreCounts,
    pub retention: Retention,
}

impl DashboardSummary {
    /// Every number covers the same local days: those in `range`, with open
    /// ends taken from the data.
    pub fn build<Tz: TimeZone>(cards: &[Flashcard], range: DayRange, tz: &Tz) -> Self {
        let series = aggregate_daily(cards, range, tz);
        let scores = repetitions_by_score_in(cards, range, tz);
        Self {
            days_learned: days_learned(&series),
            daily_average: daily_average(&series),
            longest_streak: longest_streak(&series),
            total_reviews: series.iter().map(|p| p.count).sum(),
            retention: scores.retention_rate(),
            scores,
        }
    }
}
