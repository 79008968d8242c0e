use crate::{stats::round_tenth, Flashcard, HardCardRecord, ScoreCounts};
use std::cmp::Ordering;

pub const DEFAULT_HARDEST_LIMIT: usize = 10;
pub const DEFAULT_MIN_REVIEWS: u32 = 3;

/// Cards ranked hardest first: lowest retention, then most forgets.
///
/// Only graded reviews count toward `min_reviews`. The ranking is complete
/// before truncation to `limit`.
pub fn hardest_cards(cards: &[Flashcard], limit: usize, min_reviews: u32) -> Vec<HardCardRecord> {
    let mut ranked: Vec<HardCardRecord> = cards
        .iter()
        .filter_map(|card| hard_card_record(card, min_reviews))
        .collect();

    ranked.sort_by(|a, b| match a.retention_percent.total_cmp(&b.retention_percent) {
        Ordering::Equal => b.forgot.cmp(&a.forgot),
        other => other,
    });
    ranked.truncate(limit);
    ranked
}

fn hard_card_record(card: &Flashcard, min_reviews: u32) -> Option<HardCardRecord> {
    let mut counts = ScoreCounts::default();
    let mut last_reviewed: Option<i64> = None;
    for (at, o) in card.counted_reviews() {
        let ts = at.timestamp_millis();
        last_reviewed = Some(last_reviewed.map_or(ts, |t| t.max(ts)));
        counts.record(o);
    }

    let total = counts.graded();
    if total == 0 || total < min_reviews {
        return None;
    }
    let remembered = counts.remembered();
    Some(HardCardRecord {
        card_id: card.id.clone(),
        total_reviews: total,
        forgot: counts.forgot,
        remembered,
        retention_percent: round_tenth(remembered as f64 / total as f64 * 100.0),
        last_reviewed,
    })
}
