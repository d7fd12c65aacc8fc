use crate::character::CharacterId;
use crate::level::Level;

/// Alias for `Result<T, RitesError>`.
pub type RitesResult<T> = Result<T, RitesError>;

/// Errors reported by the state store and resource pool.
#[derive(Debug, thiserror::Error)]
pub enum RitesError {
    /// No persisted state exists for the given character.
    #[error("no state stored for character {0}")]
    StateNotFound(CharacterId),

    /// A character name did not match any character in the roster.
    #[error("character not found: \"{0}\"")]
    CharacterNotFound(String),

    /// A character with the same name already exists.
    #[error("character already exists: \"{0}\"")]
    DuplicateCharacter(String),

    /// A slot was consumed at a level that has none left.
    #[error("no level {0} spell slots left")]
    ExhaustedTier(Level),

    /// A level outside 1..=9.
    #[error("invalid level: {0} (expected 1-9)")]
    InvalidLevel(i64),

    /// A spirit name outside the box's fixed key set.
    #[error("spirit \"{0}\" is not part of the spirit box")]
    NotInBox(String),

    /// A generic validation error with a descriptive message.
    #[error("validation error: {0}")]
    Validation(String),
}
