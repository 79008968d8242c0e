//! Dashboard options as the host stores them, and their validated form.

use crate::{
    color::is_hex_color,
    forecast::{DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS},
    HeatmapScale,
};
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_CHART_COLOR: &str = "#3362f0";
pub const DEFAULT_HEATMAP_LOW_COLOR: &str = "#b3dff0";
pub const DEFAULT_HEATMAP_NORMAL_COLOR: &str = "#3362f0";
pub const DEFAULT_HEATMAP_LOW_UPPER_BOUND: u32 = 30;

/// Which cards the statistics cover.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatsContext {
    #[default]
    Global,
    CurrentRem,
}

impl StatsContext {
    /// Accepts the dropdown values ("Global", "Current Rem") and their keys.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "0" | "global" => Some(StatsContext::Global),
            "1" | "current rem" | "current-rem" | "currentrem" => Some(StatsContext::CurrentRem),
            _ => None,
        }
    }
}

/// Unvalidated setting values, keyed like the host's setting ids.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct RawSettings {
    #[serde(default, rename = "statistics-chart-color")]
    pub chart_color: Option<String>,
    #[serde(default, rename = "statistics-nDays-outlook")]
    pub forecast_horizon_days: Option<String>,
    #[serde(default, rename = "statistics-context")]
    pub context: Option<String>,
    #[serde(default, rename = "HeatmapColorLow")]
    pub heatmap_low_color: Option<String>,
    #[serde(default, rename = "HeatmapColorNormal")]
    pub heatmap_normal_color: Option<String>,
    #[serde(default, rename = "HeatmapLowUpperBound")]
    pub heatmap_low_upper_bound: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardSettings {
    pub chart_color: String,
    pub forecast_horizon_days: u32,
    pub context: StatsContext,
    pub heatmap_low_color: String,
    pub heatmap_normal_color: String,
    pub heatmap_low_upper_bound: u32,
}

impl Default for DashboardSettings {
    fn default() -> Self {
        Self {
            chart_color: DEFAULT_CHART_COLOR.to_string(),
            forecast_horizon_days: DEFAULT_HORIZON_DAYS,
            context: StatsContext::Global,
            heatmap_low_color: DEFAULT_HEATMAP_LOW_COLOR.to_string(),
            heatmap_normal_color: DEFAULT_HEATMAP_NORMAL_COLOR.to_string(),
            heatmap_low_upper_bound: DEFAULT_HEATMAP_LOW_UPPER_BOUND,
        }
    }
}

impl DashboardSettings {
    /// Validates every raw value, substituting the default for anything
    /// missing or invalid. Never fails.
    pub fn from_raw(raw: &RawSettings) -> Self {
        Self {
            chart_color: color_or(raw.chart_color.as_deref(), DEFAULT_CHART_COLOR, "chart color"),
            forecast_horizon_days: count_or(
                raw.forecast_horizon_days.as_deref(),
                DEFAULT_HORIZON_DAYS,
                MAX_HORIZON_DAYS,
                "forecast horizon",
            ),
            context: match raw.context.as_deref() {
                None => StatsContext::Global,
                Some(s) => StatsContext::parse(s).unwrap_or_else(|| {
                    warn!(value = s, "unknown statistics context, using Global");
                    StatsContext::Global
                }),
            },
            heatmap_low_color: color_or(
                raw.heatmap_low_color.as_deref(),
                DEFAULT_HEATMAP_LOW_COLOR,
                "heatmap low color",
            ),
            heatmap_normal_color: color_or(
                raw.heatmap_normal_color.as_deref(),
                DEFAULT_HEATMAP_NORMAL_COLOR,
                "heatmap normal color",
            ),
            heatmap_low_upper_bound: count_or(
                raw.heatmap_low_upper_bound.as_deref(),
                DEFAULT_HEATMAP_LOW_UPPER_BOUND,
                u32::MAX,
                "heatmap low upper bound",
            ),
        }
    }

    pub fn heatmap_scale(&self) -> HeatmapScale {
        HeatmapScale {
            low_color: self.heatmap_low_color.clone(),
            normal_color: self.heatmap_normal_color.clone(),
            low_upper_bound: self.heatmap_low_upper_bound,
        }
    }
}

fn color_or(value: Option<&str>, default: &str, what: &'static str) -> String {
    match value {
        Some(v) if is_hex_color(v) => v.to_string(),
        Some(v) => {
            warn!(setting = what, value = v, default, "invalid hex color, using default");
            default.to_string()
        }
        None => default.to_string(),
    }
}

/// Host number settings arrive as text and may be fractional ("30.0").
/// Negative, non-finite, unparsable, or above-`max` values fall back to the
/// default.
fn count_or(value: Option<&str>, default: u32, max: u32, what: &'static str) -> u32 {
    let Some(v) = value else {
        return default;
    };
    match v.trim().parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 && n.trunc() <= max as f64 => n.trunc() as u32,
        _ => {
            warn!(setting = what, value = v, default, max, "invalid number, using default");
            default
        }
    }
}
