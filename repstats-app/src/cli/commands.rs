use crate::cli::opts::*;
use crate::dto::*;

use anyhow::{Context, Result};
use chrono::{Local, Utc};
use repstats_core::{
    aggregate_daily, cards_by_repetition_count, cumulative_average, daily_average,
    days_learned, forecast_due, hardest_cards, heatmap_rows, load_cards, longest_streak,
    moving_average, repetitions_by_score, retention_by_time_of_day, retention_over_time,
    CardProvider, DailyPoint, DashboardSettings, DashboardSummary, DayRange, Flashcard,
    ValuePoint,
};
use repstats_json::JsonCardSource;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

pub async fn run_cli(args: Cli) -> Result<()> {
    let settings = DashboardSettings::from_raw(&args.settings.to_raw());
    let provider = open_source(args.input.clone()).await?;
    let cards = load_cards(&*provider, settings.context, args.scope.as_deref())
        .await
        .context("loading cards")?;
    info!(cards = cards.len(), context = ?settings.context, "cards loaded");

    match args.cmd {
        Command::Summary(range) => summary_cmd(&cards, range),
        Command::Heatmap(range) => heatmap_cmd(&cards, range, &settings),
        Command::Forecast => forecast_cmd(&cards, &settings),
        Command::Scores => print_json(&ChartOut {
            title: "Button presses",
            color: settings.chart_color.clone(),
            data: ScoresOut::from(repetitions_by_score(&cards)),
        }),
        Command::Repetitions => {
            let data: Vec<CategoryPoint<u32>> = cards_by_repetition_count(&cards)
                .into_iter()
                .map(|(x, y)| CategoryPoint { x, y })
                .collect();
            print_json(&ChartOut {
                title: "Cards by number of reviews",
                color: settings.chart_color.clone(),
                data,
            })
        }
        Command::Retention { window } => retention_cmd(&cards, window, &settings),
        Command::Hardest { limit, min_reviews } => print_json(&hardest_cards(&cards, limit, min_reviews)),
        Command::TimeOfDay => print_json(&ChartOut {
            title: "Retention by time of day",
            color: settings.chart_color.clone(),
            data: retention_by_time_of_day(&cards, &Local),
        }),
    }
}

pub async fn open_source(input: Option<PathBuf>) -> Result<Arc<dyn CardProvider>> {
    let src = match input {
        Some(path) => JsonCardSource::open(path).await?,
        None => JsonCardSource::open_default().await?,
    };
    Ok(Arc::new(src))
}

fn day_range(range: RangeArgs) -> DayRange {
    DayRange {
        start: range.from,
        end: range.to,
    }
}

fn summary_cmd(cards: &[Flashcard], range: RangeArgs) -> Result<()> {
    let summary = DashboardSummary::build(cards, day_range(range), &Local);
    let retention_label = summary.retention.to_string();
    print_json(&SummaryOut {
        summary,
        retention_label,
    })
}

fn heatmap_cmd(cards: &[Flashcard], range: RangeArgs, settings: &DashboardSettings) -> Result<()> {
    let series = aggregate_daily(cards, day_range(range), &Local);
    let scale = settings.heatmap_scale();
    let peak = series.iter().map(|p| p.count).max().unwrap_or(0);
    let rows = heatmap_rows(&series)
        .into_iter()
        .map(|(name, lane)| HeatmapRow {
            name,
            data: lane
                .iter()
                .map(|p| HeatCell {
                    x: p.chart_point(&Local).x,
                    y: p.count,
                    color: scale.color_for(p.count).to_string(),
                    shade: scale.gradient(p.count, peak),
                })
                .collect(),
        })
        .collect();
    print_json(&HeatmapOut {
        rows,
        legend: scale.legend(),
        days_learned: days_learned(&series),
        daily_average: daily_average(&series),
        longest_streak: longest_streak(&series),
    })
}

fn forecast_cmd(cards: &[Flashcard], settings: &DashboardSettings) -> Result<()> {
    let series = forecast_due(cards, settings.forecast_horizon_days, Utc::now(), &Local);
    print_json(&ChartOut {
        title: "Due cards",
        color: settings.chart_color.clone(),
        data: chart(&series),
    })
}

fn retention_cmd(cards: &[Flashcard], window: usize, settings: &DashboardSettings) -> Result<()> {
    let daily = retention_over_time(cards, &Local);
    let to_chart = |s: &[ValuePoint]| s.iter().map(|p| p.chart_point(&Local)).collect::<Vec<_>>();
    print_json(&ChartOut {
        title: "Retention over time",
        color: settings.chart_color.clone(),
        data: RetentionOut {
            moving_average: to_chart(&moving_average(&daily, window)),
            cumulative_average: to_chart(&cumulative_average(&daily)),
            daily: to_chart(&daily),
        },
    })
}

fn chart(series: &[DailyPoint]) -> Vec<repstats_core::ChartPoint> {
    series.iter().map(|p| p.chart_point(&Local)).collect()
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
