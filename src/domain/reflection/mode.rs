//! Guided reflection modes and their fixed question templates.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// What kind of support the person asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReflectionMode {
    Vent,
    Clarity,
    Encouragement,
    Grounding,
}

impl ReflectionMode {
    pub const ALL: [ReflectionMode; 4] = [
        ReflectionMode::Vent,
        ReflectionMode::Clarity,
        ReflectionMode::Encouragement,
        ReflectionMode::Grounding,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            ReflectionMode::Vent => "vent",
            ReflectionMode::Clarity => "clarity",
            ReflectionMode::Encouragement => "encouragement",
            ReflectionMode::Grounding => "grounding",
        }
    }

    /// Button label offered to the person.
    pub fn label(&self) -> &'static str {
        match self {
            ReflectionMode::Vent => "I need to vent",
            ReflectionMode::Clarity => "I need clarity",
            ReflectionMode::Encouragement => "I need encouragement",
            ReflectionMode::Grounding => "I need grounding",
        }
    }

    /// The two prompts answered in this mode, in order.
    pub fn questions(&self) -> [&'static str; 2] {
        match self {
            ReflectionMode::Vent => [
                "What specifically feels heavy or frustrating right now?",
                "What would you like to be able to say aloud about this?",
            ],
            ReflectionMode::Clarity => [
                "What is one small, concrete question you have about this situation?",
                "What information or viewpoint would help you feel less stuck?",
            ],
            ReflectionMode::Encouragement => [
                "What is one small thing you have done recently that you can acknowledge?",
                "What would feel like a kind next step, however small?",
            ],
            ReflectionMode::Grounding => [
                "Name three physical sensations you can notice in this moment.",
                "What is one breath practice or small action you can use right now?",
            ],
        }
    }
}

impl fmt::Display for ReflectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for ReflectionMode {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReflectionMode::ALL
            .into_iter()
            .find(|m| m.id() == s)
            .ok_or_else(|| ValidationError::unknown_value("mode", s))
    }
}
