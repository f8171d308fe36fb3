//! Supportive messages shown at the top of the reflection step.
//!
//! Selection is an ordered table of `(predicate, sentence)` rules over the
//! mood and intensity of the current check-in; the first matching rule wins.
//! Any mood string is accepted, so an unexpected value still gets an answer.

use crate::domain::checkin::{Entry, Intensity, Mood};

pub const THANK_YOU: &str = "Thank you for taking a moment for yourself.";
pub const UNSURE: &str = "It's okay if you are not sure how you feel yet.";
pub const HEAVY: &str = "It's okay to feel this way, especially when everything feels heavy.";
pub const SMALL_EMOTIONS: &str = "It's okay to feel this way. Even small emotions deserve attention.";
pub const JUST_OKAY: &str = "Feeling \u{201c}just okay\u{201d} is still a real and valid experience.";
pub const BRIGHTER: &str =
    "It\u{2019}s nice to notice moments that feel brighter. You are allowed to enjoy them.";
pub const GENTLE_EASE: &str = "Even gentle moments of ease are worth pausing for and appreciating.";
pub const ACKNOWLEDGE: &str = "It's okay to feel this way.";

/// Mood and intensity as they arrive, before any validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoodReading {
    pub mood: Option<String>,
    pub intensity: Option<i64>,
}

impl MoodReading {
    pub fn new(mood: impl Into<String>, intensity: i64) -> Self {
        Self {
            mood: Some(mood.into()),
            intensity: Some(intensity),
        }
    }
}

impl From<&Entry> for MoodReading {
    fn from(entry: &Entry) -> Self {
        Self::new(entry.mood().id(), entry.intensity().value() as i64)
    }
}

struct MessageRule {
    applies: fn(Option<Mood>, bool) -> bool,
    message: &'static str,
}

fn difficult_and_high(mood: Option<Mood>, high: bool) -> bool {
    mood.is_some_and(|m| m.is_difficult()) && high
}

fn difficult(mood: Option<Mood>, _high: bool) -> bool {
    mood.is_some_and(|m| m.is_difficult())
}

fn neutral(mood: Option<Mood>, _high: bool) -> bool {
    mood == Some(Mood::Neutral)
}

fn bright_and_high(mood: Option<Mood>, high: bool) -> bool {
    mood.is_some_and(|m| m.is_bright()) && high
}

fn bright(mood: Option<Mood>, _high: bool) -> bool {
    mood.is_some_and(|m| m.is_bright())
}

fn any(_mood: Option<Mood>, _high: bool) -> bool {
    true
}

const RULES: &[MessageRule] = &[
    MessageRule { applies: difficult_and_high, message: HEAVY },
    MessageRule { applies: difficult, message: SMALL_EMOTIONS },
    MessageRule { applies: neutral, message: JUST_OKAY },
    MessageRule { applies: bright_and_high, message: BRIGHTER },
    MessageRule { applies: bright, message: GENTLE_EASE },
    MessageRule { applies: any, message: ACKNOWLEDGE },
];

/// Selects the supportive sentences for a reading.
///
/// No reading, or one missing mood or intensity (zero counts as missing),
/// yields the two generic sentences. Otherwise the thank-you line is
/// followed by the first matching rule's sentence.
pub fn build_messages(reading: Option<&MoodReading>) -> Vec<&'static str> {
    let Some((mood, intensity)) = reading.and_then(|r| {
        let mood = r.mood.as_deref().filter(|m| !m.is_empty())?;
        let intensity = r.intensity.filter(|i| *i != 0)?;
        Some((mood, intensity))
    }) else {
        return vec![THANK_YOU, UNSURE];
    };

    let mood = Mood::from_id(mood);
    let high = intensity >= Intensity::HIGH_THRESHOLD as i64;
    let line = RULES
        .iter()
        .find(|rule| (rule.applies)(mood, high))
        .map_or(ACKNOWLEDGE, |rule| rule.message);

    vec![THANK_YOU, line]
}

/// Messages for the entry in the current session, if any.
pub fn messages_for_entry(entry: Option<&Entry>) -> Vec<&'static str> {
    let reading = entry.map(MoodReading::from);
    build_messages(reading.as_ref())
}
