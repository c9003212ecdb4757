//! Character level value object (1..=20)

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// A character level, always within 1..=20.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Level(u8);

impl Level {
    /// Lowest level a character can have.
    pub const MIN: Level = Level(1);
    /// Level cap; no XP threshold exists beyond it.
    pub const MAX: Level = Level(20);

    /// Create a level, rejecting values outside 1..=20.
    pub fn new(value: u8) -> Result<Self, DomainError> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&value) {
            return Err(DomainError::validation(format!(
                "Level must be between {} and {}, got {}",
                Self::MIN.0,
                Self::MAX.0,
                value
            )));
        }
        Ok(Self(value))
    }

    /// Create a level from any integer, clamping into 1..=20.
    pub fn clamped(value: i64) -> Self {
        Self(value.clamp(Self::MIN.0 as i64, Self::MAX.0 as i64) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// The following level, or `None` at the cap.
    pub fn next(self) -> Option<Level> {
        if self.is_max() {
            None
        } else {
            Some(Self(self.0 + 1))
        }
    }

    pub fn is_max(self) -> bool {
        self == Self::MAX
    }

    /// Number of levels between `self` and a higher `target` (0 if target is not higher).
    pub fn levels_until(self, target: Level) -> u8 {
        target.0.saturating_sub(self.0)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::MIN
    }
}

impl TryFrom<u8> for Level {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_accepts_full_range() {
        assert!(Level::new(1).is_ok());
        assert!(Level::new(20).is_ok());
        assert!(matches!(Level::new(0), Err(DomainError::Validation(_))));
        assert!(matches!(Level::new(21), Err(DomainError::Validation(_))));
    }

    #[test]
    fn clamped_pins_out_of_range_values() {
        assert_eq!(Level::clamped(-3), Level::MIN);
        assert_eq!(Level::clamped(0), Level::MIN);
        assert_eq!(Level::clamped(7).value(), 7);
        assert_eq!(Level::clamped(99), Level::MAX);
    }

    #[test]
    fn next_stops_at_cap() {
        assert_eq!(Level::clamped(19).next(), Some(Level::MAX));
        assert_eq!(Level::MAX.next(), None);
    }

    #[test]
    fn levels_until_is_saturating() {
        let three = Level::clamped(3);
        let five = Level::clamped(5);
        assert_eq!(three.levels_until(five), 2);
        assert_eq!(five.levels_until(three), 0);
        assert_eq!(five.levels_until(five), 0);
    }

    #[test]
    fn serde_rejects_invalid_levels() {
        let level: Level = serde_json::from_str("12").expect("valid level");
        assert_eq!(level.value(), 12);
        assert!(serde_json::from_str::<Level>("0").is_err());
        assert_eq!(serde_json::to_string(&level).expect("serialize"), "12");
    }
}
