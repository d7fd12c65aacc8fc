//! Core types for spirit binding rites: spirit boxes, spell slots, and characters.
//!
//! This crate holds the character-side state that the rites mutate. It knows
//! nothing about what a spirit *does*; the catalog and resolver live in
//! `rites-mechanics`. The [`StateStore`] and [`ResourcePool`] traits are the
//! seams a host implements, and [`Roster`] is the in-process implementation
//! used by the CLI and by tests.

/// Characters and their rite history.
pub mod character;
/// Error types used throughout the crate.
pub mod error;
/// Spirit and slot levels.
pub mod level;
/// A serializable set of characters implementing the store traits.
pub mod roster;
/// Spell-slot pools consumed and restored by the rites.
pub mod slots;
/// Per-character record of bound spirits.
pub mod spirit_box;
/// Collaborator interfaces for persisted state and slot resources.
pub mod store;

/// Re-export character types.
pub use character::{BINDING_RITES_FEATURE, Character, CharacterId, RiteLogEntry};
/// Re-export error types.
pub use error::{RitesError, RitesResult};
/// Re-export level type.
pub use level::Level;
/// Re-export roster.
pub use roster::Roster;
/// Re-export slot types.
pub use slots::{SlotTier, SpellSlots};
/// Re-export spirit box types.
pub use spirit_box::{BondState, SpiritBox};
/// Re-export collaborator traits.
pub use store::{ResourcePool, StateStore};
