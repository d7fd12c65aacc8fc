//! The rite workflow: validate, resolve, then commit.
//!
//! A rite touches two collaborators, the slot pool and the spirit box.
//! Nothing is mutated until the effect has resolved. If the box cannot be
//! written after the slot has moved, the slot move is undone before the
//! error is returned.

use std::collections::BTreeMap;

use rites_core::{CharacterId, Level, ResourcePool, RitesError, SpiritBox, StateStore};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::MAX_BONDS;
use crate::dice::Roller;
use crate::error::{MechError, MechResult};
use crate::mode::Mode;
use crate::resolver::{Resolution, resolve};

/// What a character may pick from when binding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindOptions {
    /// Levels with at least one free slot, and how many.
    pub levels: Vec<(Level, u32)>,
    /// Spirits not bound yet.
    pub spirits: Vec<String>,
    /// Spirits bound right now.
    pub bound: usize,
}

/// The validated inputs of one rite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BindingSession {
    /// Bind or release.
    pub mode: Mode,
    /// Canonical spirit name.
    pub spirit: String,
    /// Slot level for a bind, the bound level for a release.
    pub level: Level,
    /// Declared maximum bonds (bind only).
    pub max_bonds: Option<u32>,
}

impl BindingSession {
    /// Check a bind against the box and the free slots.
    ///
    /// `max_bonds` is clamped to 1-5 and only refuses a bind once more
    /// spirits than that are bound. The spirit must already be the
    /// catalog's canonical name.
    pub fn for_bind(
        spirit_box: &SpiritBox,
        available: &BTreeMap<Level, u32>,
        spirit: &str,
        level: Level,
        max_bonds: u32,
    ) -> MechResult<Self> {
        let max_bonds = max_bonds.clamp(1, MAX_BONDS);
        let bound = spirit_box.bound_count();
        if bound > max_bonds as usize {
            return Err(MechError::BondLimitReached {
                bound,
                max: max_bonds,
            });
        }
        if available.values().all(|&count| count == 0) {
            return Err(MechError::NoSlotsAvailable);
        }
        if !spirit_box.contains(spirit) {
            return Err(RitesError::NotInBox(spirit.to_string()).into());
        }
        if spirit_box.is_bound(spirit) {
            return Err(MechError::AlreadyBound(spirit.to_string()));
        }
        if available.get(&level).copied().unwrap_or(0) == 0 {
            return Err(RitesError::ExhaustedTier(level).into());
        }
        Ok(Self {
            mode: Mode::Bind,
            spirit: spirit.to_string(),
            level,
            max_bonds: Some(max_bonds),
        })
    }

    /// Check a release against the box. The level comes from the box.
    pub fn for_release(spirit_box: &SpiritBox, spirit: &str) -> MechResult<Self> {
        if spirit_box.bound_count() == 0 {
            return Err(MechError::NothingToRelease);
        }
        let level = spirit_box
            .get(spirit)
            .and_then(|state| state.level())
            .ok_or_else(|| MechError::NotBound(spirit.to_string()))?;
        Ok(Self {
            mode: Mode::Release,
            spirit: spirit.to_string(),
            level,
            max_bonds: None,
        })
    }
}

/// The result of a completed rite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RiteReport {
    /// The validated inputs.
    pub session: BindingSession,
    /// The resolved effect.
    pub resolution: Resolution,
    /// The box as written back to the store.
    pub spirit_box: SpiritBox,
}

/// Performs rites against a host's state store and slot pool.
#[derive(Debug, Clone, Copy)]
pub struct Rites<'a> {
    catalog: &'a Catalog,
}

impl<'a> Rites<'a> {
    /// Rites over the given catalog.
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// The catalog in use.
    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// The stored box fitted to the catalog, or a fresh all-unbound one.
    /// Never writes.
    ///
    /// A stored entry for a spirit the catalog lacks fails with
    /// [`RitesError::NotInBox`]; catalog spirits the box lacks read as unbound.
    pub fn current_box<S: StateStore + ?Sized>(
        &self,
        store: &S,
        id: &CharacterId,
    ) -> MechResult<SpiritBox> {
        match store.get(id)? {
            Some(stored) => Ok(stored.reconcile(self.catalog.names())?),
            None => Ok(SpiritBox::unbound(self.catalog.names())),
        }
    }

    /// Like [`current_box`](Self::current_box), but a box that had to be
    /// created or filled in is written back to the store.
    pub fn load_box<S: StateStore + ?Sized>(
        &self,
        store: &mut S,
        id: &CharacterId,
    ) -> MechResult<SpiritBox> {
        let stored = store.get(id)?;
        let stored_len = stored.as_ref().map(SpiritBox::len);
        let spirit_box = match stored {
            Some(stored) => stored.reconcile(self.catalog.names())?,
            None => SpiritBox::unbound(self.catalog.names()),
        };
        if stored_len != Some(spirit_box.len()) {
            debug!(character = %id, spirits = spirit_box.len(), "initialized spirit box");
            store.put(id, spirit_box.clone())?;
        }
        Ok(spirit_box)
    }

    /// Levels and spirits available for a bind.
    pub fn bind_options<H>(&self, host: &H, id: &CharacterId) -> MechResult<BindOptions>
    where
        H: StateStore + ResourcePool + ?Sized,
    {
        let spirit_box = self.current_box(host, id)?;
        let levels = host
            .query_available(id)?
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .collect();
        Ok(BindOptions {
            levels,
            spirits: spirit_box.unbound_names().map(str::to_string).collect(),
            bound: spirit_box.bound_count(),
        })
    }

    /// Bound spirits and their levels, the choices for a release.
    pub fn release_options<S: StateStore + ?Sized>(
        &self,
        store: &S,
        id: &CharacterId,
    ) -> MechResult<Vec<(String, Level)>> {
        let spirit_box = self.current_box(store, id)?;
        Ok(spirit_box
            .bound()
            .map(|(name, level)| (name.to_string(), level))
            .collect())
    }

    /// Bind `spirit` at `level`, spending a slot of that level.
    pub fn bind<H, R>(
        &self,
        host: &mut H,
        id: &CharacterId,
        spirit: &str,
        level: Level,
        max_bonds: u32,
        roller: &mut R,
    ) -> MechResult<RiteReport>
    where
        H: StateStore + ResourcePool + ?Sized,
        R: Roller + ?Sized,
    {
        let name = self.catalog.lookup(spirit)?.name.clone();
        let mut spirit_box = self.load_box(host, id)?;
        let available = host.query_available(id)?;
        let session = BindingSession::for_bind(&spirit_box, &available, &name, level, max_bonds)?;
        let resolution = resolve(self.catalog, &name, Mode::Bind, level.into(), roller)?;

        host.consume(id, level)?;
        debug!(character = %id, %level, "consumed slot");

        let committed = spirit_box
            .bind(&name, level)
            .and_then(|()| host.put(id, spirit_box.clone()));
        if let Err(err) = committed {
            warn!(character = %id, spirit = %name, error = %err, "spirit box not saved, returning slot");
            if let Err(undo) = host.restore(id, level) {
                warn!(character = %id, %level, error = %undo, "slot could not be returned");
            }
            return Err(err.into());
        }

        info!(character = %id, "Bound {name} to slot {level}");
        Ok(RiteReport {
            session,
            resolution,
            spirit_box,
        })
    }

    /// Release a bound `spirit`, returning its slot.
    pub fn release<H, R>(
        &self,
        host: &mut H,
        id: &CharacterId,
        spirit: &str,
        roller: &mut R,
    ) -> MechResult<RiteReport>
    where
        H: StateStore + ResourcePool + ?Sized,
        R: Roller + ?Sized,
    {
        let name = self.catalog.lookup(spirit)?.name.clone();
        let mut spirit_box = self.load_box(host, id)?;
        let session = BindingSession::for_release(&spirit_box, &name)?;
        let level = session.level;
        let resolution = resolve(self.catalog, &name, Mode::Release, level.into(), roller)?;

        host.restore(id, level)?;
        debug!(character = %id, %level, "restored slot");

        let committed = spirit_box
            .release(&name)
            .and_then(|_| host.put(id, spirit_box.clone()));
        if let Err(err) = committed {
            warn!(character = %id, spirit = %name, error = %err, "spirit box not saved, taking slot back");
            if let Err(undo) = host.consume(id, level) {
                warn!(character = %id, %level, error = %undo, "slot could not be taken back");
            }
            return Err(err.into());
        }

        info!(character = %id, "Released {name} from slot {level}");
        Ok(RiteReport {
            session,
            resolution,
            spirit_box,
        })
    }
}
