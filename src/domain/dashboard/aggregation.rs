//! Aggregation engine - pure reducers from raw data to chart-ready series.
//!
//! # Error policy
//!
//! Nothing here fails. Malformed or absent input degrades to an empty or
//! default series so the dashboard always renders; an empty chart is shown
//! instead of an error.

use chrono::Duration;
use std::collections::BTreeMap;

use super::series::{ChartSeries, DashboardPayload, RawSeries, TrendBand, TrendPoint, WeeklyTrend};
use crate::domain::checkin::{Entry, Mood, Tag};
use crate::domain::foundation::Timestamp;

/// Day labels used when no usable weekly data exists.
pub const DEFAULT_WEEK_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Longest weekly trend accepted.
pub const MAX_TREND_POINTS: usize = 7;

/// Mean assumed when no day carries data.
pub const DEFAULT_TREND_MEAN: f64 = 3.0;

/// Days of history summarized by [`summarize_entries`].
pub const WINDOW_DAYS: i64 = 7;

struct BandRule {
    applies: fn(f64) -> bool,
    band: TrendBand,
}

fn at_least_four(mean: f64) -> bool {
    mean >= 4.0
}

fn at_least_three(mean: f64) -> bool {
    mean >= 3.0
}

const BAND_RULES: &[BandRule] = &[
    BandRule { applies: at_least_four, band: TrendBand::Positive },
    BandRule { applies: at_least_three, band: TrendBand::Mixed },
];

/// Colour band for a weekly mean: ≥ 4 positive, [3, 4) mixed, otherwise neutral.
pub fn band_for(mean: f64) -> TrendBand {
    BAND_RULES
        .iter()
        .find(|rule| (rule.applies)(mean))
        .map_or(TrendBand::Neutral, |rule| rule.band)
}

/// Builds the weekly trend from up to seven `(label, value)` pairs.
///
/// Absent input, mismatched lengths, more than seven points or no points at
/// all fall back to Mon..Sun with every value absent.
pub fn weekly_trend(raw: Option<&RawSeries>) -> WeeklyTrend {
    let points: Vec<TrendPoint> = match raw.and_then(RawSeries::aligned) {
        Some((labels, values)) if !labels.is_empty() && labels.len() <= MAX_TREND_POINTS => labels
            .iter()
            .zip(values)
            .map(|(label, value)| TrendPoint {
                label: label.clone(),
                value: *value,
            })
            .collect(),
        _ => DEFAULT_WEEK_LABELS
            .iter()
            .map(|label| TrendPoint {
                label: (*label).to_string(),
                value: None,
            })
            .collect(),
    };

    let present: Vec<f64> = points.iter().filter_map(|p| p.value).collect();
    let mean = if present.is_empty() {
        DEFAULT_TREND_MEAN
    } else {
        present.iter().sum::<f64>() / present.len() as f64
    };

    WeeklyTrend {
        points,
        mean,
        band: band_for(mean),
    }
}

/// Zips labels and values into counts; mismatched input yields an empty series.
///
/// Absent or negative values count as zero; fractions round to the nearest count.
pub fn count_series(raw: Option<&RawSeries>) -> ChartSeries {
    let Some((labels, values)) = raw.and_then(RawSeries::aligned) else {
        return ChartSeries::empty();
    };
    let counts = values.iter().map(|v| to_count(*v)).collect();
    ChartSeries::from_parts(labels.to_vec(), counts).unwrap_or_default()
}

/// Mood frequency series.
///
/// With no data at all, the five mood labels are shown with zero counts;
/// malformed data still yields an empty series.
pub fn mood_frequency(raw: Option<&RawSeries>) -> ChartSeries {
    match raw {
        None => {
            ChartSeries::from_parts(Mood::labels(), vec![0; Mood::ALL.len()]).unwrap_or_default()
        }
        Some(_) => count_series(raw),
    }
}

/// Tag frequency series; the label set is whatever the service sent.
pub fn tag_frequency(raw: Option<&RawSeries>) -> ChartSeries {
    count_series(raw)
}

fn to_count(value: Option<f64>) -> u32 {
    match value {
        Some(v) if v.is_finite() && v > 0.0 => v.round().min(u32::MAX as f64) as u32,
        _ => 0,
    }
}

/// Label with the strictly greatest count; ties keep the earlier label.
///
/// Returns `None` when every count is zero or there are no labels. Missing
/// counts are read as zero.
pub fn most_frequent<'a>(labels: &'a [String], counts: &[u32]) -> Option<&'a str> {
    let mut best: Option<(usize, u32)> = None;
    for i in 0..labels.len() {
        let count = counts.get(i).copied().unwrap_or(0);
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((i, count)),
        }
    }
    best.filter(|(_, max)| *max > 0)
        .map(|(i, _)| labels[i].as_str())
}

/// Reduces raw entries into the series the dashboard endpoint returns.
///
/// The window covers entries dated on or after `now - 7 days`. The weekly
/// trend covers the seven calendar days ending today, labelled by weekday,
/// each holding the mean mood value of that day rounded to one decimal.
pub fn summarize_entries(entries: &[Entry], now: Timestamp) -> DashboardPayload {
    let today = now.date();
    let window_start = now.minus_days(WINDOW_DAYS).date();
    let in_window: Vec<&Entry> = entries
        .iter()
        .filter(|e| e.at().date() >= window_start)
        .collect();

    let mut by_day: BTreeMap<chrono::NaiveDate, Vec<u8>> = BTreeMap::new();
    for entry in &in_window {
        by_day
            .entry(entry.at().date())
            .or_default()
            .push(entry.mood().value());
    }

    let mut week_labels = Vec::with_capacity(MAX_TREND_POINTS);
    let mut week_values = Vec::with_capacity(MAX_TREND_POINTS);
    for offset in (0..MAX_TREND_POINTS as i64).rev() {
        let day = today - Duration::days(offset);
        week_labels.push(day.format("%a").to_string());
        week_values.push(by_day.get(&day).map(|values| {
            let mean = values.iter().map(|v| *v as f64).sum::<f64>() / values.len() as f64;
            (mean * 10.0).round() / 10.0
        }));
    }

    let mood_counts: Vec<u32> = Mood::ALL
        .iter()
        .map(|m| in_window.iter().filter(|e| e.mood() == *m).count() as u32)
        .collect();
    let tag_counts: Vec<u32> = Tag::ALL
        .iter()
        .map(|t| in_window.iter().filter(|e| e.tags().contains(*t)).count() as u32)
        .collect();
    let journal_count = in_window.iter().filter(|e| e.has_journal()).count() as u32;

    DashboardPayload {
        weekly_trend: Some(RawSeries::new(week_labels, week_values)),
        mood_frequency: Some(RawSeries::counts(Mood::labels(), &mood_counts)),
        tag_frequency: Some(RawSeries::counts(Tag::labels(), &tag_counts)),
        journal_count: Some(journal_count),
    }
}
