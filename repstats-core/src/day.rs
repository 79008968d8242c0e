//! Calendar-day bucketing in a caller-supplied time zone.
//!
//! A day is identified by its local `NaiveDate`. Stepping between days is done
//! on the calendar, never by adding 24 hours, so DST days of 23 or 25 hours
//! still map to exactly one key each.

use chrono::{DateTime, Duration, NaiveDate, NaiveTime, TimeZone, Utc};

pub fn day_key<Tz: TimeZone>(at: &DateTime<Utc>, tz: &Tz) -> NaiveDate {
    at.with_timezone(tz).date_naive()
}

/// Day key for an epoch-millisecond timestamp; `None` if the timestamp is not
/// representable.
pub fn day_key_ms<Tz: TimeZone>(timestamp_ms: i64, tz: &Tz) -> Option<NaiveDate> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_ms).map(|at| day_key(&at, tz))
}

/// First instant of `day` in `tz`. Normally local midnight; in zones that jump
/// over midnight it is the first wall-clock time that exists that day.
pub fn day_start<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> DateTime<Tz> {
    let midnight = day.and_time(NaiveTime::MIN);
    if let Some(dt) = tz.from_local_datetime(&midnight).earliest() {
        return dt;
    }
    (1..=96)
        .map(|q| midnight + Duration::minutes(15 * q))
        .find_map(|t| tz.from_local_datetime(&t).earliest())
        .unwrap_or_else(|| tz.from_utc_datetime(&midnight))
}

pub fn day_start_ms<Tz: TimeZone>(day: NaiveDate, tz: &Tz) -> i64 {
    day_start(day, tz).timestamp_millis()
}

/// Every calendar day from `start` to `end`, both inclusive. Empty when
/// `start > end`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |d| *d <= end)
}

/// Number of days in `start..=end`, zero when the range is reversed.
pub fn span_len(start: NaiveDate, end: NaiveDate) -> usize {
    let days = (end - start).num_days();
    if days < 0 {
        0
    } else {
        days as usize + 1
    }
}
