use chrono::NaiveDate;
use serde::Serialize;

use super::aggregation::{mood_frequency, most_frequent, tag_frequency, weekly_trend};
use super::insight::{generate_insight, Insight, InsightFacts};
use super::quote::quote_for_day;
use super::recent::RecentEntries;
use super::series::{ChartSeries, DashboardPayload, WeeklyTrend};

/// Everything the dashboard renders, built from whatever data arrived.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardOverview {
    pub weekly_trend: WeeklyTrend,
    pub mood_frequency: ChartSeries,
    pub tag_frequency: ChartSeries,

    /// Check-ins with journal text this week.
    pub journal_count: u32,

    pub most_frequent_mood: Option<String>,
    pub most_frequent_tag: Option<String>,
    pub insight: Insight,

    pub recent_entries: RecentEntries,
    /// False shows the empty state instead of the charts.
    pub has_check_ins: bool,

    pub quote: &'static str,
}

impl DashboardOverview {
    /// Builds the overview. Either source may be missing; the result still renders.
    pub fn build(
        payload: Option<&DashboardPayload>,
        recent: Option<RecentEntries>,
        today: NaiveDate,
    ) -> Self {
        let weekly_trend = weekly_trend(payload.and_then(|p| p.weekly_trend.as_ref()));
        let mood_frequency = mood_frequency(payload.and_then(|p| p.mood_frequency.as_ref()));
        let tag_frequency = tag_frequency(payload.and_then(|p| p.tag_frequency.as_ref()));

        let most_frequent_mood =
            most_frequent(mood_frequency.labels(), mood_frequency.counts()).map(str::to_string);
        let most_frequent_tag =
            most_frequent(tag_frequency.labels(), tag_frequency.counts()).map(str::to_string);

        let check_in_count = recent.as_ref().map(RecentEntries::len);
        let insight = generate_insight(&InsightFacts {
            most_frequent_mood: most_frequent_mood.as_deref(),
            most_frequent_tag: most_frequent_tag.as_deref(),
            check_in_count,
        });

        let recent_entries = recent.unwrap_or_default();
        let has_check_ins = !recent_entries.is_empty();

        Self {
            weekly_trend,
            mood_frequency,
            tag_frequency,
            journal_count: payload.and_then(|p| p.journal_count).unwrap_or(0),
            most_frequent_mood,
            most_frequent_tag,
            insight,
            recent_entries,
            has_check_ins,
            quote: quote_for_day(today),
        }
    }
}
