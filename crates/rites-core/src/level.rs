use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RitesError, RitesResult};

/// A spell-slot level, and the level a spirit is bound at.
///
/// Always in `1..=9`. Serializes as a bare integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Level(u8);

impl Level {
    /// The lowest slot level.
    pub const MIN: Level = Level(1);
    /// The highest slot level.
    pub const MAX: Level = Level(9);

    /// Create a level, rejecting anything outside `1..=9`.
    pub fn new(value: i64) -> RitesResult<Self> {
        match u8::try_from(value) {
            Ok(v @ 1..=9) => Ok(Self(v)),
            _ => Err(RitesError::InvalidLevel(value)),
        }
    }

    /// The level as a plain number.
    pub fn get(self) -> u8 {
        self.0
    }

    /// All nine levels in ascending order.
    pub fn all() -> impl Iterator<Item = Level> {
        (1..=9).map(Level)
    }
}

impl TryFrom<i64> for Level {
    type Error = RitesError;

    fn try_from(value: i64) -> RitesResult<Self> {
        Self::new(value)
    }
}

impl From<Level> for u8 {
    fn from(level: Level) -> Self {
        level.0
    }
}

impl From<Level> for i64 {
    fn from(level: Level) -> Self {
        i64::from(level.0)
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
    fn accepts_one_through_nine() {
        for v in 1..=9 {
            assert_eq!(Level::new(v).unwrap().get() as i64, v);
        }
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(matches!(Level::new(0), Err(RitesError::InvalidLevel(0))));
        assert!(matches!(Level::new(10), Err(RitesError::InvalidLevel(10))));
        assert!(matches!(Level::new(-3), Err(RitesError::InvalidLevel(-3))));
        assert!(Level::new(300).is_err());
    }

    #[test]
    fn serializes_as_integer() {
        let level = Level::new(4).unwrap();
        assert_eq!(serde_json::to_string(&level).unwrap(), "4");
        let back: Level = serde_json::from_str("4").unwrap();
        assert_eq!(back, level);
        assert!(serde_json::from_str::<Level>("12").is_err());
    }

    #[test]
    fn all_is_ascending() {
        let levels: Vec<u8> = Level::all().map(Level::get).collect();
        assert_eq!(levels, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }
}
