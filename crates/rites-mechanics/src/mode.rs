//! Bind or release.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MechError;

/// Which half of a spirit's rules a rite uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mode {
    /// Attach a spirit, spending a slot.
    Bind,
    /// Detach a bound spirit, returning its slot.
    Release,
}

impl Mode {
    /// The line shown under a spirit's description on its chat card.
    pub fn mode_line(self) -> &'static str {
        match self {
            Self::Bind => "Binding.",
            Self::Release => "Releasing.",
        }
    }

    /// Returns true for [`Mode::Bind`].
    pub fn is_binding(self) -> bool {
        matches!(self, Self::Bind)
    }
}

impl FromStr for Mode {
    type Err = MechError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bind" | "binding" => Ok(Self::Bind),
            "release" | "releasing" => Ok(Self::Release),
            _ => Err(MechError::InvalidMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bind => write!(f, "bind"),
            Self::Release => write!(f, "release"),
        }
    }
}
