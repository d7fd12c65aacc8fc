//! Dice rolls and the roller capability.
//!
//! Spirits that roll (Agony, Hate and Sorrow on release, Passion on bind)
//! throw a number of d6 equal to their level. The dice come from a
//! [`Roller`] supplied by the caller so that resolution stays testable.

pub mod roller;

pub use roller::{RngRoller, Roller, ScriptedRoller};

use serde::{Deserialize, Serialize};

/// The die the spirits roll.
pub const D6: u32 = 6;

/// Most dice a single rite may throw.
pub const MAX_DICE: u32 = 1_000;

/// The individual dice of one roll.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Faces on each die.
    pub sides: u32,
    /// The values rolled, in order (each in `1..=sides`).
    pub rolls: Vec<u32>,
}

impl DiceRoll {
    /// Sum of all die values.
    pub fn total(&self) -> i64 {
        self.rolls.iter().map(|&v| i64::from(v)).sum()
    }

    /// Number of dice rolled.
    pub fn count(&self) -> usize {
        self.rolls.len()
    }

    /// Dice notation for this roll, e.g. `3d6`.
    pub fn expression(&self) -> String {
        format!("{}d{}", self.rolls.len(), self.sides)
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let values: Vec<String> = self.rolls.iter().map(|v| v.to_string()).collect();
        write!(f, "[{}] = {}", values.join(", "), self.total())
    }
}
