use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RitesError, RitesResult};
use crate::level::Level;

/// Whether a spirit is bound, and at which level.
///
/// Serializes the way the rites have always stored it: `false` when
/// unbound, the bare level number when bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "RawBond", into = "RawBond")]
pub enum BondState {
    /// Not bound to the character.
    #[default]
    Unbound,
    /// Bound at the given level.
    Bound(Level),
}

impl BondState {
    /// The bound level, if any.
    pub fn level(self) -> Option<Level> {
        match self {
            Self::Unbound => None,
            Self::Bound(level) => Some(level),
        }
    }

    /// Returns true if the spirit is bound.
    pub fn is_bound(self) -> bool {
        matches!(self, Self::Bound(_))
    }
}

impl fmt::Display for BondState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unbound => write!(f, "Unbound"),
            Self::Bound(level) => write!(f, "Bound (Level {level})"),
        }
    }
}

#[derive(Serialize, Deserialize)]
#[serde(untagged)]
enum RawBond {
    Flag(bool),
    Level(i64),
}

impl TryFrom<RawBond> for BondState {
    type Error = RitesError;

    fn try_from(raw: RawBond) -> RitesResult<Self> {
        match raw {
            RawBond::Flag(false) => Ok(Self::Unbound),
            RawBond::Flag(true) => Err(RitesError::Validation(
                "a bound spirit must record its level, not `true`".to_string(),
            )),
            RawBond::Level(n) => Level::new(n).map(Self::Bound),
        }
    }
}

impl From<BondState> for RawBond {
    fn from(state: BondState) -> Self {
        match state {
            BondState::Unbound => RawBond::Flag(false),
            BondState::Bound(level) => RawBond::Level(level.into()),
        }
    }
}

/// A character's record of which spirits are bound and at what level.
///
/// The key set is fixed when the box is created: every spirit of the
/// catalog has an entry, and [`bind`](Self::bind) / [`release`](Self::release)
/// only ever flip the entry they are asked about.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpiritBox {
    entries: BTreeMap<String, BondState>,
}

impl SpiritBox {
    /// Create a box with every given spirit unbound.
    pub fn unbound<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: names
                .into_iter()
                .map(|n| (n.into(), BondState::Unbound))
                .collect(),
        }
    }

    /// Fit a stored box to a catalog's names.
    ///
    /// Names the box lacks are added unbound. An entry for a spirit outside
    /// `names` fails with [`RitesError::NotInBox`].
    pub fn reconcile<I, S>(mut self, names: I) -> RitesResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names: Vec<String> = names.into_iter().map(Into::into).collect();
        if let Some(stray) = self.entries.keys().find(|key| !names.contains(key)) {
            return Err(RitesError::NotInBox(stray.clone()));
        }
        for name in names {
            self.entries.entry(name).or_default();
        }
        Ok(self)
    }

    /// Look up the state of one spirit.
    pub fn get(&self, spirit: &str) -> Option<BondState> {
        self.entries.get(spirit).copied()
    }

    /// Returns true if the spirit is in the box and bound.
    pub fn is_bound(&self, spirit: &str) -> bool {
        self.get(spirit).is_some_and(BondState::is_bound)
    }

    /// Returns true if the box has an entry for the spirit.
    pub fn contains(&self, spirit: &str) -> bool {
        self.entries.contains_key(spirit)
    }

    /// Mark a spirit as bound at `level`.
    pub fn bind(&mut self, spirit: &str, level: Level) -> RitesResult<()> {
        let entry = self
            .entries
            .get_mut(spirit)
            .ok_or_else(|| RitesError::NotInBox(spirit.to_string()))?;
        *entry = BondState::Bound(level);
        Ok(())
    }

    /// Mark a spirit as unbound. Returns the level it was bound at, if any.
    pub fn release(&mut self, spirit: &str) -> RitesResult<Option<Level>> {
        let entry = self
            .entries
            .get_mut(spirit)
            .ok_or_else(|| RitesError::NotInBox(spirit.to_string()))?;
        let previous = entry.level();
        *entry = BondState::Unbound;
        Ok(previous)
    }

    /// Number of currently bound spirits.
    pub fn bound_count(&self) -> usize {
        self.entries.values().filter(|s| s.is_bound()).count()
    }

    /// Bound spirits with their levels, in name order.
    pub fn bound(&self) -> impl Iterator<Item = (&str, Level)> {
        self.entries
            .iter()
            .filter_map(|(name, state)| state.level().map(|l| (name.as_str(), l)))
    }

    /// Names of unbound spirits, in name order.
    pub fn unbound_names(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, state)| !state.is_bound())
            .map(|(name, _)| name.as_str())
    }

    /// All entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, BondState)> {
        self.entries.iter().map(|(name, state)| (name.as_str(), *state))
    }

    /// Number of entries (bound or not).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the box has no entries at all.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
