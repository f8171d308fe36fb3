//! Dashboard module - weekly summaries of past check-ins.
//!
//! - `series` - raw and chart-ready series shapes
//! - `aggregation` - pure reducers with fallbacks for malformed data
//! - `insight` - one-sentence weekly insight
//! - `recent` - recent entry list and tag filter
//! - `quote` - calming thought of the day
//! - `overview` - the assembled dashboard

pub mod aggregation;
pub mod insight;
mod overview;
pub mod quote;
mod recent;
mod series;

pub use aggregation::{
    band_for, count_series, mood_frequency, most_frequent, summarize_entries, tag_frequency,
    weekly_trend, DEFAULT_WEEK_LABELS,
};
pub use insight::{generate_insight, Insight, InsightFacts, InsightKind};
pub use overview::DashboardOverview;
pub use quote::quote_for_day;
pub use recent::{RecentEntries, RecentEntry, NOTE_PREVIEW_CHARS};
pub use series::{ChartSeries, DashboardPayload, RawSeries, TrendBand, TrendPoint, WeeklyTrend};
