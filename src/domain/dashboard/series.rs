//! Chart series shapes, both as delivered by the persistence service and as
//! rendered on the dashboard.
//!
//! Incoming data is untrusted: [`RawSeries::from_json`] and
//! [`DashboardPayload::from_json`] accept anything and keep only what can be
//! read. Deciding what a malformed series means is left to the aggregation
//! functions.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A `{labels, values}` pair as received. Either side may be missing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawSeries {
    #[serde(default)]
    pub labels: Option<Vec<String>>,
    #[serde(default)]
    pub values: Option<Vec<Option<f64>>>,
}

impl RawSeries {
    pub fn new<S: Into<String>>(labels: Vec<S>, values: Vec<Option<f64>>) -> Self {
        Self {
            labels: Some(labels.into_iter().map(Into::into).collect()),
            values: Some(values),
        }
    }

    /// Series of whole-number counts.
    pub fn counts<S: Into<String>>(labels: Vec<S>, counts: &[u32]) -> Self {
        Self::new(labels, counts.iter().map(|c| Some(*c as f64)).collect())
    }

    /// Reads a series leniently.
    ///
    /// `labels` survives only if it is an array of strings. Each value becomes
    /// a number when it is a number or a numeric string, and absent otherwise.
    pub fn from_json(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let labels = obj.get("labels").and_then(|v| {
            v.as_array()?
                .iter()
                .map(|l| l.as_str().map(str::to_string))
                .collect::<Option<Vec<_>>>()
        });
        let values = obj
            .get("values")
            .and_then(Value::as_array)
            .map(|arr| arr.iter().map(number_of).collect());
        Some(Self { labels, values })
    }

    /// Labels and values, only when both are present with equal length.
    pub fn aligned(&self) -> Option<(&[String], &[Option<f64>])> {
        let labels = self.labels.as_deref()?;
        let values = self.values.as_deref()?;
        (labels.len() == values.len()).then_some((labels, values))
    }
}

fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    }
    .filter(|f| f.is_finite())
}

/// Everything the dashboard endpoint may return.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPayload {
    #[serde(default)]
    pub weekly_trend: Option<RawSeries>,
    #[serde(default)]
    pub mood_frequency: Option<RawSeries>,
    #[serde(default)]
    pub tag_frequency: Option<RawSeries>,
    #[serde(default)]
    pub journal_count: Option<u32>,
}

impl DashboardPayload {
    /// Reads a payload leniently; unreadable parts are treated as absent.
    pub fn from_json(value: &Value) -> Self {
        let series = |key: &str| value.get(key).and_then(RawSeries::from_json);
        Self {
            weekly_trend: series("weeklyTrend"),
            mood_frequency: series("moodFrequency"),
            tag_frequency: series("tagFrequency"),
            journal_count: value
                .get("journalCount")
                .and_then(Value::as_u64)
                .and_then(|n| u32::try_from(n).ok()),
        }
    }
}

/// One day on the weekly trend line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub label: String,
    /// Mean mood value that day; `None` means no data, distinct from zero.
    pub value: Option<f64>,
}

/// Presentation band for the trend line, chosen from the weekly mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendBand {
    Positive,
    Mixed,
    Neutral,
}

/// Weekly trend ready for charting.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeeklyTrend {
    pub points: Vec<TrendPoint>,
    /// Mean of the days with data, 3.0 when there are none.
    pub mean: f64,
    pub band: TrendBand,
}

impl WeeklyTrend {
    pub fn labels(&self) -> Vec<&str> {
        self.points.iter().map(|p| p.label.as_str()).collect()
    }

    pub fn values(&self) -> Vec<Option<f64>> {
        self.points.iter().map(|p| p.value).collect()
    }

    /// True when no day carries data.
    pub fn is_empty(&self) -> bool {
        self.points.iter().all(|p| p.value.is_none())
    }
}

/// Label → count series for bar charts. Labels and counts always align.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    labels: Vec<String>,
    counts: Vec<u32>,
}

impl ChartSeries {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Pairs labels with counts; `None` unless both have the same length.
    pub fn from_parts(labels: Vec<String>, counts: Vec<u32>) -> Option<Self> {
        (labels.len() == counts.len()).then_some(Self { labels, counts })
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn count_of(&self, label: &str) -> Option<u32> {
        self.labels
            .iter()
            .position(|l| l == label)
            .map(|i| self.counts[i])
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u32)> + '_ {
        self.labels
            .iter()
            .map(String::as_str)
            .zip(self.counts.iter().copied())
    }
}
