//! Mood value object - the five-point emotional scale.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// How the person feels right now, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Awful,
    Low,
    Neutral,
    Good,
    Great,
}

impl Mood {
    /// All moods in scale order.
    pub const ALL: [Mood; 5] = [Mood::Awful, Mood::Low, Mood::Neutral, Mood::Good, Mood::Great];

    /// Parses a mood from its wire id (`neutral`) or display label (`Okay`).
    ///
    /// Matching is case-insensitive and ignores surrounding whitespace.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        let needle = raw.trim();
        if needle.is_empty() {
            return Err(ValidationError::empty_field("mood"));
        }
        Mood::ALL
            .into_iter()
            .find(|m| m.id().eq_ignore_ascii_case(needle) || m.label().eq_ignore_ascii_case(needle))
            .ok_or_else(|| ValidationError::unknown_value("mood", needle))
    }

    /// Matches a wire id exactly (`neutral`, never `Okay` or `Neutral`).
    pub fn from_id(raw: &str) -> Option<Self> {
        Mood::ALL.into_iter().find(|m| m.id() == raw)
    }

    /// Returns the wire identifier.
    pub fn id(&self) -> &'static str {
        match self {
            Mood::Awful => "awful",
            Mood::Low => "low",
            Mood::Neutral => "neutral",
            Mood::Good => "good",
            Mood::Great => "great",
        }
    }

    /// Returns the display label used on charts.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Awful => "Awful",
            Mood::Low => "Low",
            Mood::Neutral => "Okay",
            Mood::Good => "Good",
            Mood::Great => "Great",
        }
    }

    /// Returns the numeric value plotted on the weekly trend (1-5).
    pub fn value(&self) -> u8 {
        match self {
            Mood::Awful => 1,
            Mood::Low => 2,
            Mood::Neutral => 3,
            Mood::Good => 4,
            Mood::Great => 5,
        }
    }

    /// Display labels of every mood, in scale order.
    pub fn labels() -> Vec<String> {
        Mood::ALL.iter().map(|m| m.label().to_string()).collect()
    }

    /// Returns true for the two lowest moods.
    pub fn is_difficult(&self) -> bool {
        matches!(self, Mood::Awful | Mood::Low)
    }

    /// Returns true for the two highest moods.
    pub fn is_bright(&self) -> bool {
        matches!(self, Mood::Good | Mood::Great)
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Mood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Mood::parse(s)
    }
}
