use crate::{day::day_key, day_key_ms, DailyPoint, Flashcard};
use chrono::{DateTime, TimeZone, Utc};
use tracing::debug;

pub const DEFAULT_HORIZON_DAYS: u32 = 30;
/// Longest forecast a setting may ask for, ten years.
pub const MAX_HORIZON_DAYS: u32 = 3650;

/// Due cards per day for `horizon_days` days starting today.
///
/// Only cards due strictly after `now` count; "today" is the local day of
/// `now`. Cards due past the horizon are dropped. The result always has
/// `horizon_days` entries, one per consecutive calendar day.
pub fn forecast_due<Tz: TimeZone>(
    cards: &[Flashcard],
    horizon_days: u32,
    now: DateTime<Utc>,
    tz: &Tz,
) -> Vec<DailyPoint> {
    let today = day_key(&now, tz);
    let mut series: Vec<DailyPoint> = today
        .iter_days()
        .take(horizon_days as usize)
        .map(|d| DailyPoint::new(d, 0))
        .collect();

    let now_ms = now.timestamp_millis();
    let mut counted = 0usize;
    for due in cards.iter().filter_map(|c| c.next_due) {
        if due <= now_ms {
            continue;
        }
        let Some(day) = day_key_ms(due, tz) else {
            continue;
        };
        let offset = (day - today).num_days();
        if offset < 0 {
            continue;
        }
        if let Some(p) = series.get_mut(offset as usize) {
            p.count += 1;
            counted += 1;
        }
    }
    debug!(cards = cards.len(), counted, horizon_days, "due forecast built");
    series
}
