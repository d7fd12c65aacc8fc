//! Configuration for a binding session.

use crate::dice::RngRoller;

/// Highest number of simultaneous bonds a binder can declare.
pub const MAX_BONDS: u32 = 5;

/// Configuration for performing rites.
#[derive(Debug, Clone)]
pub struct RitesConfig {
    /// RNG seed for reproducible dice; `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Default maximum of simultaneous bonds (1-5).
    pub max_bonds: u32,
    /// Heading of the spirit box status board.
    pub journal_title: String,
}

impl Default for RitesConfig {
    fn default() -> Self {
        Self {
            seed: None,
            max_bonds: MAX_BONDS,
            journal_title: "Spirit Box Status".to_string(),
        }
    }
}

impl RitesConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the default maximum bonds (clamped to 1-5).
    pub fn with_max_bonds(mut self, max_bonds: u32) -> Self {
        self.max_bonds = max_bonds.clamp(1, MAX_BONDS);
        self
    }

    /// Set the status board heading.
    pub fn with_journal_title(mut self, title: impl Into<String>) -> Self {
        self.journal_title = title.into();
        self
    }

    /// A roller for this configuration.
    pub fn roller(&self) -> RngRoller {
        match self.seed {
            Some(seed) => RngRoller::seeded(seed),
            None => RngRoller::from_os(),
        }
    }
}
