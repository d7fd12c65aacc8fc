//! The two seams the rites need from whoever owns the character record.
//!
//! A host application implements these over its own persistence. The
//! [`Roster`](crate::Roster) implements both for the CLI and for tests.

use std::collections::BTreeMap;

use crate::character::CharacterId;
use crate::error::RitesResult;
use crate::level::Level;
use crate::spirit_box::SpiritBox;

/// Reads and writes a character's spirit box.
pub trait StateStore {
    /// The stored box, or `None` if the character has never performed a rite.
    ///
    /// Fails with [`StateNotFound`](crate::RitesError::StateNotFound) when
    /// the character itself is unknown.
    fn get(&self, id: &CharacterId) -> RitesResult<Option<SpiritBox>>;

    /// Replace the stored box.
    fn put(&mut self, id: &CharacterId, spirit_box: SpiritBox) -> RitesResult<()>;
}

/// The per-level slot pool that binding spends and releasing refills.
pub trait ResourcePool {
    /// Available slots per level.
    fn query_available(&self, id: &CharacterId) -> RitesResult<BTreeMap<Level, u32>>;

    /// Spend one slot of `level`. Fails with
    /// [`ExhaustedTier`](crate::RitesError::ExhaustedTier) when none are left.
    fn consume(&mut self, id: &CharacterId, level: Level) -> RitesResult<()>;

    /// Give back one slot of `level`.
    fn restore(&mut self, id: &CharacterId, level: Level) -> RitesResult<()>;
}
