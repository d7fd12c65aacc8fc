//! Spirit binding mechanics.
//!
//! Provides dice rolling behind an injectable [`Roller`], the spirit
//! [`Catalog`] (eighteen built-in spirits, or one loaded from JSON), the
//! effect [`resolve`]r that turns a spirit, a mode and a level into an
//! [`EffectOutcome`], and the [`Rites`] workflow that sequences slot
//! spending, resolution and spirit-box updates against a host's
//! [`StateStore`](rites_core::StateStore) and
//! [`ResourcePool`](rites_core::ResourcePool).

pub mod catalog;
pub mod config;
pub mod dice;
pub mod error;
pub mod mode;
pub mod resolver;
pub mod rite;

pub use catalog::{Catalog, EffectTemplate, ResultKind, ResultPattern, Scaling, SpiritDefinition};
pub use config::RitesConfig;
pub use dice::{DiceRoll, RngRoller, Roller, ScriptedRoller};
pub use error::{MechError, MechResult};
pub use mode::Mode;
pub use resolver::{EffectOutcome, OutcomeNote, Resolution, resolve};
pub use rite::{BindOptions, BindingSession, RiteReport, Rites};
