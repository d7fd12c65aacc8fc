use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::level::Level;
use crate::slots::SpellSlots;
use crate::spirit_box::SpiritBox;

/// The feature a character needs before it may bind or release spirits.
pub const BINDING_RITES_FEATURE: &str = "Binding Rites";

/// Unique identifier for a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generate a new random character ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for CharacterId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// One bind or release, as remembered on the character.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiteLogEntry {
    /// The spirit involved.
    pub spirit: String,
    /// True for a bind, false for a release.
    pub binding: bool,
    /// The level the spirit was bound at.
    pub level: Level,
    /// The computed result line, if the rite produced one.
    pub result: Option<String>,
    /// When the rite was performed.
    pub timestamp: DateTime<Utc>,
}

impl RiteLogEntry {
    /// An entry stamped with the current time.
    pub fn now(
        spirit: impl Into<String>,
        binding: bool,
        level: Level,
        result: Option<String>,
    ) -> Self {
        Self {
            spirit: spirit.into(),
            binding,
            level,
            result,
            timestamp: Utc::now(),
        }
    }
}

impl fmt::Display for RiteLogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let verb = if self.binding { "Bound" } else { "Released" };
        write!(f, "{verb} {} at level {}", self.spirit, self.level)?;
        if let Some(result) = &self.result {
            write!(f, " ({result})")?;
        }
        Ok(())
    }
}

/// A character that can take part in the rites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    /// Unique identifier.
    pub id: CharacterId,
    /// Display name, used in chat cards.
    pub name: String,
    /// Class features and items the character has.
    #[serde(default)]
    pub features: Vec<String>,
    /// Spell slots consumed by binding.
    pub slots: SpellSlots,
    /// Bound spirits. `None` until the first rite.
    #[serde(default)]
    pub spirit_box: Option<SpiritBox>,
    /// Past rites, oldest first.
    #[serde(default)]
    pub history: Vec<RiteLogEntry>,
}

impl Character {
    /// Create a character that knows the Binding Rites.
    pub fn new(name: impl Into<String>, slots: SpellSlots) -> Self {
        Self {
            id: CharacterId::new(),
            name: name.into(),
            features: vec![BINDING_RITES_FEATURE.to_string()],
            slots,
            spirit_box: None,
            history: Vec::new(),
        }
    }

    /// Returns true if the character has the named feature (case-insensitive).
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.iter().any(|f| f.eq_ignore_ascii_case(feature))
    }

    /// Returns true if the character may bind and release spirits.
    pub fn can_cast_binding_rites(&self) -> bool {
        self.has_feature(BINDING_RITES_FEATURE)
    }
}
