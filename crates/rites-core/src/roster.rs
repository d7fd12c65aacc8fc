use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::character::{Character, CharacterId, RiteLogEntry};
use crate::error::{RitesError, RitesResult};
use crate::level::Level;
use crate::spirit_box::SpiritBox;
use crate::store::{ResourcePool, StateStore};

/// A set of characters, serializable as one JSON document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Roster {
    characters: Vec<Character>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a roster from JSON.
    pub fn from_json(json: &str) -> RitesResult<Self> {
        serde_json::from_str(json).map_err(|e| RitesError::Validation(format!("roster: {e}")))
    }

    /// Serialize the roster as pretty-printed JSON.
    pub fn to_json(&self) -> RitesResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| RitesError::Validation(format!("roster: {e}")))
    }

    /// Add a character. Names must be unique (case-insensitive).
    pub fn add(&mut self, character: Character) -> RitesResult<CharacterId> {
        if self.find_by_name(&character.name).is_some() {
            return Err(RitesError::DuplicateCharacter(character.name));
        }
        let id = character.id;
        self.characters.push(character);
        Ok(id)
    }

    /// Look up a character by ID.
    pub fn by_id(&self, id: &CharacterId) -> Option<&Character> {
        self.characters.iter().find(|c| &c.id == id)
    }

    /// Look up a character by name (case-insensitive).
    pub fn find_by_name(&self, name: &str) -> Option<&Character> {
        self.characters
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// Pick a character by name, or the only one when no name is given.
    pub fn select(&self, name: Option<&str>) -> RitesResult<&Character> {
        match name {
            Some(name) => self
                .find_by_name(name)
                .ok_or_else(|| RitesError::CharacterNotFound(name.to_string())),
            None => match self.characters.as_slice() {
                [only] => Ok(only),
                [] => Err(RitesError::Validation(
                    "the roster has no characters".to_string(),
                )),
                _ => Err(RitesError::Validation(
                    "several characters in the roster, pick one with --character".to_string(),
                )),
            },
        }
    }

    /// All characters in insertion order.
    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    /// Append an entry to a character's rite history.
    pub fn record(&mut self, id: &CharacterId, entry: RiteLogEntry) -> RitesResult<()> {
        self.character_mut(id)?.history.push(entry);
        Ok(())
    }

    fn character_mut(&mut self, id: &CharacterId) -> RitesResult<&mut Character> {
        self.characters
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or(RitesError::StateNotFound(*id))
    }

    fn character(&self, id: &CharacterId) -> RitesResult<&Character> {
        self.by_id(id).ok_or(RitesError::StateNotFound(*id))
    }
}

impl StateStore for Roster {
    fn get(&self, id: &CharacterId) -> RitesResult<Option<SpiritBox>> {
        Ok(self.character(id)?.spirit_box.clone())
    }

    fn put(&mut self, id: &CharacterId, spirit_box: SpiritBox) -> RitesResult<()> {
        self.character_mut(id)?.spirit_box = Some(spirit_box);
        Ok(())
    }
}

impl ResourcePool for Roster {
    fn query_available(&self, id: &CharacterId) -> RitesResult<BTreeMap<Level, u32>> {
        Ok(self.character(id)?.slots.available())
    }

    fn consume(&mut self, id: &CharacterId, level: Level) -> RitesResult<()> {
        self.character_mut(id)?.slots.consume(level)
    }

    fn restore(&mut self, id: &CharacterId, level: Level) -> RitesResult<()> {
        self.character_mut(id)?.slots.restore(level);
        Ok(())
    }
}
