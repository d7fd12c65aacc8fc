//! Error types for the rites mechanics.

use rites_core::RitesError;

/// Errors that can occur while resolving or performing a rite.
#[derive(Debug, thiserror::Error)]
pub enum MechError {
    /// The spirit name is not in the catalog.
    #[error("unknown spirit: {0}")]
    UnknownSpirit(String),

    /// The level is zero or negative, or needs more dice than a rite may throw.
    #[error("invalid level: {0}")]
    InvalidLevel(i64),

    /// The mode is neither bind nor release.
    #[error("invalid mode: \"{0}\" (expected bind or release)")]
    InvalidMode(String),

    /// A catalog failed validation.
    #[error("invalid catalog: {0}")]
    InvalidCatalog(String),

    /// The spirit is already bound and cannot be bound again.
    #[error("{0} is already bound")]
    AlreadyBound(String),

    /// The spirit is not bound and cannot be released.
    #[error("{0} is not bound")]
    NotBound(String),

    /// More spirits are bound than the declared maximum number of bonds.
    #[error(
        "current spirit count ({bound}) is higher than the maximum bonds ({max}), please select a valid number"
    )]
    BondLimitReached {
        /// Spirits bound right now.
        bound: usize,
        /// The declared maximum.
        max: u32,
    },

    /// No slot of any level is left to bind with.
    #[error("your character doesn't have any spell slots left")]
    NoSlotsAvailable,

    /// Nothing is bound, so there is nothing to release.
    #[error("your character isn't united with any spirits")]
    NothingToRelease,

    /// Reported by the state store or resource pool.
    #[error(transparent)]
    Core(#[from] RitesError),
}

/// Convenience result type for mechanics operations.
pub type MechResult<T> = Result<T, MechError>;
