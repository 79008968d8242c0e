use crate::{color::interpolate, DailyPoint};
use chrono::{Datelike, Weekday};
use serde::ser::{Serialize, SerializeMap, Serializer};

pub const ZERO_COLOR: &str = "#ffffff";

const WEEK: [Weekday; 7] = [
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
    Weekday::Sun,
];

/// A daily series split into one lane per weekday, Monday first.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WeekdayBuckets {
    lanes: [Vec<DailyPoint>; 7],
}

impl WeekdayBuckets {
    pub fn get(&self, weekday: Weekday) -> &[DailyPoint] {
        &self.lanes[weekday.num_days_from_monday() as usize]
    }

    /// Lanes Monday through Sunday.
    pub fn iter(&self) -> impl Iterator<Item = (Weekday, &[DailyPoint])> + '_ {
        WEEK.iter().map(move |w| (*w, self.get(*w)))
    }

    pub fn len(&self) -> usize {
        self.lanes.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Serialize for WeekdayBuckets {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(7))?;
        for (weekday, lane) in self.iter() {
            map.serialize_entry(weekday_name(weekday), lane)?;
        }
        map.end()
    }
}

pub fn weekday_name(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// Stable partition of `series` by weekday. Nothing is merged or dropped and
/// every lane keeps the input order.
pub fn by_weekday(series: &[DailyPoint]) -> WeekdayBuckets {
    let mut buckets = WeekdayBuckets::default();
    for p in series {
        buckets.lanes[p.day.weekday().num_days_from_monday() as usize].push(*p);
    }
    buckets
}

/// Heatmap rows top to bottom: Sunday, Saturday, ..., Monday.
pub fn heatmap_rows(series: &[DailyPoint]) -> Vec<(&'static str, Vec<DailyPoint>)> {
    let mut buckets = by_weekday(series);
    WEEK.iter()
        .rev()
        .map(|w| {
            let lane = std::mem::take(&mut buckets.lanes[w.num_days_from_monday() as usize]);
            (weekday_name(*w), lane)
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize)]
pub enum HeatLevel {
    Zero,
    Low,
    Normal,
}

#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct LegendItem {
    pub level: HeatLevel,
    pub name: String,
    pub color: String,
}

/// Colour scale for review-count cells. Counts in `1..=low_upper_bound` are
/// "low", anything above is "normal", zero is blank.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct HeatmapScale {
    pub low_color: String,
    pub normal_color: String,
    pub low_upper_bound: u32,
}

impl HeatmapScale {
    pub fn level(&self, count: u32) -> HeatLevel {
        if count == 0 {
            HeatLevel::Zero
        } else if count <= self.low_upper_bound {
            HeatLevel::Low
        } else {
            HeatLevel::Normal
        }
    }

    pub fn color_for(&self, count: u32) -> &str {
        match self.level(count) {
            HeatLevel::Zero => ZERO_COLOR,
            HeatLevel::Low => &self.low_color,
            HeatLevel::Normal => &self.normal_color,
        }
    }

    /// Continuous shade between the low and normal colours, proportional to
    /// `count / peak`.
    pub fn gradient(&self, count: u32, peak: u32) -> String {
        if count == 0 || peak == 0 {
            return ZERO_COLOR.to_string();
        }
        let factor = (count.min(peak) as f64) / peak as f64;
        interpolate(&self.low_color, &self.normal_color, factor)
    }

    pub fn legend(&self) -> Vec<LegendItem> {
        vec![
            LegendItem {
                level: HeatLevel::Zero,
                name: "Zero".into(),
                color: ZERO_COLOR.into(),
            },
            LegendItem {
                level: HeatLevel::Low,
                name: format!("1-{}", self.low_upper_bound),
                color: self.low_color.clone(),
            },
            LegendItem {
                level: HeatLevel::Normal,
                name: "Normal".into(),
                color: self.normal_color.clone(),
            },
        ]
    }
}
