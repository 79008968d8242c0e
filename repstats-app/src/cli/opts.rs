use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use repstats_core::{RawSettings, DEFAULT_HARDEST_LIMIT, DEFAULT_MIN_REVIEWS};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
#[command(name = "repstats", version, about = "Review history statistics as chart-ready JSON")]
pub struct Cli {
    /// Card export to read (defaults to cards.json in the app data dir)
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Scope id used when the context is "Current Rem"
    #[arg(long)]
    pub scope: Option<String>,

    #[command(flatten)]
    pub settings: SettingsArgs,

    #[command(subcommand)]
    pub cmd: Command,
}

/// Dashboard settings as raw text; invalid values fall back to defaults.
#[derive(Debug, Args, Clone, Default)]
pub struct SettingsArgs {
    /// Chart accent color (#RRGGBB)
    #[arg(long, global = true)]
    pub chart_color: Option<String>,
    /// Days to look ahead for due cards
    #[arg(long, global = true)]
    pub horizon_days: Option<String>,
    /// "Global" or "Current Rem"
    #[arg(long, global = true)]
    pub context: Option<String>,
    /// Heatmap color for low counts (#RRGGBB)
    #[arg(long, global = true)]
    pub heatmap_low: Option<String>,
    /// Heatmap color for normal counts (#RRGGBB)
    #[arg(long, global = true)]
    pub heatmap_normal: Option<String>,
    /// Highest daily count still shown as "low"
    #[arg(long, global = true)]
    pub heatmap_bound: Option<String>,
}

impl SettingsArgs {
    pub fn to_raw(&self) -> RawSettings {
        RawSettings {
            chart_color: self.chart_color.clone(),
            forecast_horizon_days: self.horizon_days.clone(),
            context: self.context.clone(),
            heatmap_low_color: self.heatmap_low.clone(),
            heatmap_normal_color: self.heatmap_normal.clone(),
            heatmap_low_upper_bound: self.heatmap_bound.clone(),
        }
    }
}

#[derive(Debug, Args, Clone, Default)]
pub struct RangeArgs {
    /// First day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Last day, inclusive (YYYY-MM-DD)
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Days learned, streak, averages, button presses, retention
    Summary(RangeArgs),
    /// Daily review counts split into weekday rows with colors
    Heatmap(RangeArgs),
    /// Cards due per day over the forecast horizon
    Forecast,
    /// Button-press distribution
    Scores,
    /// Number of cards per review count
    Repetitions,
    /// Daily retention with moving and cumulative averages
    Retention {
        #[arg(long, default_value_t = 7)]
        window: usize,
    },
    /// Cards with the lowest retention
    Hardest {
        #[arg(long, default_value_t = DEFAULT_HARDEST_LIMIT)]
        limit: usize,
        #[arg(long, default_value_t = DEFAULT_MIN_REVIEWS)]
        min_reviews: u32,
    },
    /// Retention by three-hour block of the day
    TimeOfDay,
}
