use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::day::day_start_ms;

pub type CardId = String;

/// 1 Jan 2017 00:00 CET. Reviews at or before this instant are placeholder
/// data imported with the collection and never count as having happened.
pub const EPOCH_FLOOR_MS: i64 = 1_483_225_200_000;

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Outcome {
    Skip,
    Forgot,
    Hard,
    Good,
    Easy,
}

impl Outcome {
    pub const ALL: [Outcome; 5] = [
        Outcome::Skip,
        Outcome::Forgot,
        Outcome::Hard,
        Outcome::Good,
        Outcome::Easy,
    ];

    /// Maps a host score code to its outcome. Anything outside the five
    /// known codes is unrecognized and yields `None`.
    pub fn from_score(score: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|o| o.as_score() == score)
    }

    pub fn as_score(&self) -> f64 {
        match self {
            Outcome::Skip => 0.01,
            Outcome::Forgot => 0.0,
            Outcome::Hard => 0.5,
            Outcome::Good => 1.0,
            Outcome::Easy => 1.5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Skip => "Skip",
            Outcome::Forgot => "Forgot",
            Outcome::Hard => "Hard",
            Outcome::Good => "Good",
            Outcome::Easy => "Easy",
        }
    }

    pub fn is_remembered(&self) -> bool {
        matches!(self, Outcome::Hard | Outcome::Good | Outcome::Easy)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ReviewRecord {
    #[serde(alias = "date")]
    pub timestamp: i64,
    pub score: f64,
}

impl ReviewRecord {
    pub fn new(timestamp: i64, score: f64) -> Self {
        Self { timestamp, score }
    }

    pub fn with_outcome(timestamp: i64, outcome: Outcome) -> Self {
        Self::new(timestamp, outcome.as_score())
    }

    pub fn outcome(&self) -> Option<Outcome> {
        Outcome::from_score(self.score)
    }

    /// The instant the review happened, or `None` when the record must be
    /// ignored: at or before [`EPOCH_FLOOR_MS`], or not a representable time.
    pub fn reviewed_at(&self) -> Option<DateTime<Utc>> {
        if self.timestamp <= EPOCH_FLOOR_MS {
            return None;
        }
        DateTime::<Utc>::from_timestamp_millis(self.timestamp)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Flashcard {
    pub id: CardId,
    #[serde(default, alias = "nextRepetitionTime")]
    pub next_due: Option<i64>,
    #[serde(default, alias = "repetitionHistory")]
    pub history: Vec<ReviewRecord>,
}

impl Flashcard {
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    pub fn with_id(id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            next_due: None,
            history: Vec::new(),
        }
    }

    pub fn due_at(mut self, timestamp: i64) -> Self {
        self.next_due = Some(timestamp);
        self
    }

    pub fn reviewed(mut self, timestamp: i64, outcome: Outcome) -> Self {
        self.history.push(ReviewRecord::with_outcome(timestamp, outcome));
        self
    }

    /// Reviews that take part in any statistic: after the epoch floor, with a
    /// valid timestamp and a recognized score.
    pub fn counted_reviews(&self) -> impl Iterator<Item = (DateTime<Utc>, Outcome)> + '_ {
        self.history
            .iter()
            .filter_map(|r| Some((r.reviewed_at()?, r.outcome()?)))
    }
}

impl Default for Flashcard {
    fn default() -> Self {
        Self::new()
    }
}

/// Counted reviews across a whole collection.
pub fn counted_reviews(cards: &[Flashcard]) -> impl Iterator<Item = (DateTime<Utc>, Outcome)> + '_ {
    cards.iter().flat_map(|c| c.counted_reviews())
}

/// One calendar day of a daily series.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyPoint {
    pub day: chrono::NaiveDate,
    pub count: u32,
}

impl DailyPoint {
    pub fn new(day: chrono::NaiveDate, count: u32) -> Self {
        Self { day, count }
    }

    pub fn chart_point<Tz: TimeZone>(&self, tz: &Tz) -> ChartPoint {
        ChartPoint {
            x: day_start_ms(self.day, tz),
            y: self.count as f64,
        }
    }
}

/// A day paired with a derived, already rounded value.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ValuePoint {
    pub day: chrono::NaiveDate,
    pub value: f64,
}

impl ValuePoint {
    pub fn new(day: chrono::NaiveDate, value: f64) -> Self {
        Self { day, value }
    }

    pub fn chart_point<Tz: TimeZone>(&self, tz: &Tz) -> ChartPoint {
        ChartPoint {
            x: day_start_ms(self.day, tz),
            y: self.value,
        }
    }
}

impl From<DailyPoint> for ValuePoint {
    fn from(p: DailyPoint) -> Self {
        Self::new(p.day, p.count as f64)
    }
}

/// `{x, y}` pair with `x` at local midnight in epoch milliseconds.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct ChartPoint {
    pub x: i64,
    pub y: f64,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct HardCardRecord {
    pub card_id: CardId,
    pub total_reviews: u32,
    pub forgot: u32,
    pub remembered: u32,
    /// 0-100, one decimal.
    pub retention_percent: f64,
    pub last_reviewed: Option<i64>,
}
