use repstats_core::{ChartPoint, DashboardSummary, LegendItem, Retention, ScoreCounts};
use serde::Serialize;

/// A chart payload. The accent color travels with the data instead of living
/// in shared state.
#[derive(Serialize)]
pub struct ChartOut<T: Serialize> {
    pub title: &'static str,
    pub color: String,
    pub data: T,
}

#[derive(Serialize)]
pub struct CategoryPoint<X: Serialize> {
    pub x: X,
    pub y: u32,
}

#[derive(Serialize)]
pub struct HeatCell {
    pub x: i64,
    pub y: u32,
    /// Discrete zero / low / normal colour.
    pub color: String,
    /// Continuous low-to-normal blend relative to the busiest day shown.
    pub shade: String,
}

#[derive(Serialize)]
pub struct HeatmapRow {
    pub name: &'static str,
    pub data: Vec<HeatCell>,
}

#[derive(Serialize)]
pub struct HeatmapOut {
    pub rows: Vec<HeatmapRow>,
    pub legend: Vec<LegendItem>,
    pub days_learned: u32,
    pub daily_average: u32,
    pub longest_streak: u32,
}

#[derive(Serialize)]
pub struct SummaryOut {
    #[serde(flatten)]
    pub summary: DashboardSummary,
    /// `retention` rendered for display: two decimals or "No Data".
    pub retention_label: String,
}

#[derive(Serialize)]
pub struct ScoresOut {
    pub buttons: Vec<CategoryPoint<&'static str>>,
    pub retention: Retention,
    pub retention_label: String,
}

impl From<ScoreCounts> for ScoresOut {
    fn from(counts: ScoreCounts) -> Self {
        let retention = counts.retention_rate();
        Self {
            buttons: repstats_core::Outcome::ALL
                .iter()
                .map(|o| CategoryPoint {
                    x: o.label(),
                    y: counts.get(*o),
                })
                .collect(),
            retention,
            retention_label: retention.to_string(),
        }
    }
}

#[derive(Serialize)]
pub struct RetentionOut {
    pub daily: Vec<ChartPoint>,
    pub moving_average: Vec<ChartPoint>,
    pub cumulative_average: Vec<ChartPoint>,
}
