//! Calming thought of the day.

use chrono::{Datelike, NaiveDate};

pub const QUOTES: [&str; 8] = [
    "Breathe deeply. You are allowed to pause and be present.",
    "Small steps still move you forward \u{2014} one breath at a time.",
    "You are not your feelings. Notice them, then let them pass.",
    "Kindness to yourself is a practice, not a final destination.",
    "This moment is temporary \u{2014} breathe, steady, and continue.",
    "What you need now is not perfection but consistency.",
    "You\u{2019}ve made it this far \u{2014} that\u{2019}s worth noticing.",
    "Softly: you can begin again from where you are.",
];

/// Quote for a calendar day, indexed by day of month.
pub fn quote_for_day(date: NaiveDate) -> &'static str {
    QUOTES[date.day() as usize % QUOTES.len()]
}
