//! Emotion tags and the order-insensitive tag set attached to a check-in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// Fixed vocabulary of emotion tags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tag {
    Overwhelmed,
    Anxious,
    Proud,
    Exhausted,
    Grateful,
    Lonely,
    Hopeful,
    Stressed,
}

impl Tag {
    /// Every tag, in the order the check-in form offers them.
    pub const ALL: [Tag; 8] = [
        Tag::Overwhelmed,
        Tag::Anxious,
        Tag::Proud,
        Tag::Exhausted,
        Tag::Grateful,
        Tag::Lonely,
        Tag::Hopeful,
        Tag::Stressed,
    ];

    /// Returns the wire/display form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Overwhelmed => "overwhelmed",
            Tag::Anxious => "anxious",
            Tag::Proud => "proud",
            Tag::Exhausted => "exhausted",
            Tag::Grateful => "grateful",
            Tag::Lonely => "lonely",
            Tag::Hopeful => "hopeful",
            Tag::Stressed => "stressed",
        }
    }

    /// Parses an exact vocabulary word.
    pub fn parse(raw: &str) -> Result<Self, ValidationError> {
        Tag::ALL
            .into_iter()
            .find(|t| t.as_str() == raw)
            .ok_or_else(|| ValidationError::unknown_value("tags", raw))
    }

    /// Vocabulary words in form order.
    pub fn labels() -> Vec<String> {
        Tag::ALL.iter().map(|t| t.as_str().to_string()).collect()
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Tag {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::parse(s)
    }
}

/// Set of tags on one entry. Duplicates collapse and order is irrelevant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TagSet(BTreeSet<Tag>);

impl TagSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a set from untrusted words, dropping anything outside the vocabulary.
    pub fn from_words<S: AsRef<str>>(words: &[S]) -> Self {
        Self(
            words
                .iter()
                .filter_map(|w| Tag::parse(w.as_ref()).ok())
                .collect(),
        )
    }

    /// Selects the tag if absent, deselects it if present.
    pub fn toggle(&mut self, tag: Tag) {
        if !self.0.remove(&tag) {
            self.0.insert(tag);
        }
    }

    pub fn contains(&self, tag: Tag) -> bool {
        self.0.contains(&tag)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Tag> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<Tag> for TagSet {
    fn from_iter<I: IntoIterator<Item = Tag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
