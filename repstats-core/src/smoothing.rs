use crate::{stats::round_tenth, ValuePoint};

/// Trailing moving average over `window` points, one decimal.
///
/// Each output point sits on the last day of its window, so the result has
/// `len - window + 1` points and is empty when the series is shorter than the
/// window. A window of 0 or 1 returns the series unchanged.
pub fn moving_average(series: &[ValuePoint], window: usize) -> Vec<ValuePoint> {
    if series.is_empty() || window <= 1 {
        return series.to_vec();
    }
    let mut out = Vec::with_capacity(series.len().saturating_sub(window - 1));
    let mut sum = 0.0;
    for (i, p) in series.iter().enumerate() {
        sum += p.value;
        if i >= window {
            sum -= series[i - window].value;
        }
        if i + 1 >= window {
            out.push(ValuePoint::new(p.day, round_tenth(sum / window as f64)));
        }
    }
    out
}

/// Running mean up to and including each point, one decimal.
pub fn cumulative_average(series: &[ValuePoint]) -> Vec<ValuePoint> {
    let mut sum = 0.0;
    series
        .iter()
        .enumerate()
        .map(|(i, p)| {
            sum += p.value;
            ValuePoint::new(p.day, round_tenth(sum / (i + 1) as f64))
        })
        .collect()
}
