//! Intensity value object (1 to 5 slider scale).

use serde::{Deserialize, Serialize};
use std::fmt;

/// How strongly the mood is felt, from 1 (very gentle) to 5 (very strong).
///
/// Construction from arbitrary integers clamps to the nearest bound; the
/// slider that feeds it can never leave the range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "i64")]
pub struct Intensity(u8);

impl Intensity {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 5;
    pub const DEFAULT: Intensity = Intensity(3);

    /// Intensity at or above this value counts as "high".
    pub const HIGH_THRESHOLD: u8 = 4;

    /// Creates an intensity, clamping to [1, 5].
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN as i64, Self::MAX as i64) as u8)
    }


    /// Returns the numeric value.
    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Intensity {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<i64> for Intensity {
    fn from(value: i64) -> Self {
        Self::clamped(value)
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}
