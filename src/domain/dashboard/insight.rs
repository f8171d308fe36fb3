//! Insight generator - one sentence summarizing the week.
//!
//! Rules are evaluated strictly in table order and the first match wins:
//!
//! 1. dominant mood
//! 2. dominant tag
//! 3. number of check-ins
//! 4. generic prompt to start tracking
//!
//! Because rule 1 matches whenever any mood was recorded, the later rules only
//! speak for weeks without mood data. This single-sentence policy is kept as is.

use serde::Serialize;

/// Sentence used when nothing else applies.
pub const START_TRACKING: &str = "Start tracking your mood to discover insights about yourself.";

/// Facts the insight is chosen from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InsightFacts<'a> {
    /// Display label of the most frequent mood (`Awful` … `Great`).
    pub most_frequent_mood: Option<&'a str>,
    pub most_frequent_tag: Option<&'a str>,
    /// Number of check-ins in the period, when known.
    pub check_in_count: Option<usize>,
}

/// Which rule produced the sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightKind {
    Mood,
    Tag,
    Streak,
    StartTracking,
}

/// A generated insight.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insight {
    pub kind: InsightKind,
    pub text: String,
}

struct InsightRule {
    kind: InsightKind,
    render: fn(&InsightFacts<'_>) -> Option<String>,
}

const RULES: &[InsightRule] = &[
    InsightRule { kind: InsightKind::Mood, render: mood_sentence },
    InsightRule { kind: InsightKind::Tag, render: tag_sentence },
    InsightRule { kind: InsightKind::Streak, render: streak_sentence },
];

fn mood_sentence(facts: &InsightFacts<'_>) -> Option<String> {
    let mood = facts.most_frequent_mood?.to_lowercase();
    let text = match mood.as_str() {
        "great" => "You've been feeling great more often this week. Keep it up! \u{1f31f}".to_string(),
        "good" => "You've been feeling good more often this week. That's wonderful! \u{2728}".to_string(),
        "okay" => format!(
            "You've experienced {mood} moments often this week. That's normal and okay. \u{1f499}"
        ),
        "low" => "You've had some low moments this week. Be kind to yourself. \u{1f917}".to_string(),
        "awful" => {
            "You've faced some difficult moments. Remember, difficult times pass. \u{1f4aa}".to_string()
        }
        _ => return None,
    };
    Some(text)
}

fn tag_sentence(facts: &InsightFacts<'_>) -> Option<String> {
    facts.most_frequent_tag.map(|tag| {
        format!("\"{tag}\" has appeared frequently in your reflections. Pay attention to it. \u{1f3af}")
    })
}

fn streak_sentence(facts: &InsightFacts<'_>) -> Option<String> {
    match facts.check_in_count? {
        0 => None,
        n if n >= 7 => Some(format!(
            "Consistency is key\u{2014}{n} check-ins this week shows real self-awareness. \u{1f3c6}"
        )),
        n if n >= 4 => Some(format!(
            "You've logged {n} check-ins this week. Building consistency! \u{1f4c8}"
        )),
        n => Some(format!(
            "Every check-in counts. You've logged {n} this week\u{2014}great start! \u{1f331}"
        )),
    }
}

/// Picks the insight for the given facts.
pub fn generate_insight(facts: &InsightFacts<'_>) -> Insight {
    RULES
        .iter()
        .find_map(|rule| {
            (rule.render)(facts).map(|text| Insight {
                kind: rule.kind,
                text,
            })
        })
        .unwrap_or_else(|| Insight {
            kind: InsightKind::StartTracking,
            text: START_TRACKING.to_string(),
        })
}
