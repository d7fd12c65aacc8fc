//! The spirit catalog: every spirit's bind and release rules.
//!
//! A [`Catalog`] is immutable once built. [`Catalog::standard`] gives the
//! eighteen built-in spirits; [`Catalog::from_json`] loads a replacement
//! table. Both go through the same validation, so a resolver never sees a
//! template that claims a random and a fixed result at the same time.

pub mod standard;

use std::collections::HashSet;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::{MechError, MechResult};
use crate::mode::Mode;

/// Minimum similarity score for "did you mean" suggestions (0.0-1.0).
const SUGGEST_THRESHOLD: f64 = 0.8;

/// Placeholder replaced by the spirit's level in template text.
pub const LEVEL_PLACEHOLDER: &str = "{level}";

/// A fixed function of the spirit's level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scaling {
    /// `level`
    Identity,
    /// `level * 2`
    Double,
    /// `level * 5`
    TimesFive,
    /// `level + 8`
    PlusEight,
    /// `-level`
    Negate,
}

impl Scaling {
    /// Apply the function to a level.
    pub fn apply(self, level: i64) -> i64 {
        match self {
            Self::Identity => level,
            Self::Double => level.saturating_mul(2),
            Self::TimesFive => level.saturating_mul(5),
            Self::PlusEight => level.saturating_add(8),
            Self::Negate => level.saturating_neg(),
        }
    }
}

/// Text placed around a computed value: `prefix + value + suffix`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultPattern {
    /// Text before the value.
    pub prefix: String,
    /// Text after the value.
    #[serde(default)]
    pub suffix: String,
}

impl ResultPattern {
    /// Join the pattern around `value`, filling in `{level}`.
    pub fn format(&self, level: i64, value: i64) -> String {
        format!(
            "{}{value}{}",
            fill_level(&self.prefix, level),
            fill_level(&self.suffix, level)
        )
    }
}

/// An extra labelled line on a chat card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TemplateNote {
    /// Bold label, e.g. `Uses count`.
    pub label: String,
    /// Line text; may contain `{level}`.
    pub text: String,
}

/// What kind of number, if any, a template computes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultKind {
    /// Rules text only.
    None,
    /// A fixed function of the level.
    Deterministic(Scaling),
    /// The sum of `level` d6.
    RandomRoll,
}

/// The rules of one mode of one spirit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectTemplate {
    /// When and how the effect is triggered.
    pub usage: String,
    /// Short summary of the effect. Empty when the usage says it all.
    #[serde(default)]
    pub effect: String,
    /// How the number is worked out, when the card shows one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    /// Where the computed value goes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<ResultPattern>,
    /// Fixed function of the level feeding `result`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scaling: Option<Scaling>,
    /// `result` is the sum of `level` d6 instead.
    #[serde(default)]
    pub uses_random_roll: bool,
    /// Extra lines, in order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<TemplateNote>,
}

impl EffectTemplate {
    /// A template with rules text only.
    pub fn new(usage: impl Into<String>, effect: impl Into<String>) -> Self {
        Self {
            usage: usage.into(),
            effect: effect.into(),
            formula: None,
            result: None,
            scaling: None,
            uses_random_roll: false,
            notes: Vec::new(),
        }
    }

    /// Add a formula line.
    pub fn formula(mut self, formula: impl Into<String>) -> Self {
        self.formula = Some(formula.into());
        self
    }

    /// Compute `scaling(level)` into `prefix + value + suffix`.
    pub fn scaled(
        mut self,
        scaling: Scaling,
        prefix: impl Into<String>,
        suffix: impl Into<String>,
    ) -> Self {
        self.scaling = Some(scaling);
        self.uses_random_roll = false;
        self.result = Some(ResultPattern {
            prefix: prefix.into(),
            suffix: suffix.into(),
        });
        self
    }

    /// Roll `level` d6 into `prefix + total + suffix`.
    pub fn rolled(mut self, prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        self.scaling = None;
        self.uses_random_roll = true;
        self.result = Some(ResultPattern {
            prefix: prefix.into(),
            suffix: suffix.into(),
        });
        self
    }

    /// Add a labelled line.
    pub fn note(mut self, label: impl Into<String>, text: impl Into<String>) -> Self {
        self.notes.push(TemplateNote {
            label: label.into(),
            text: text.into(),
        });
        self
    }

    /// The kind of number this template computes.
    pub fn result_kind(&self) -> ResultKind {
        match (&self.result, self.scaling, self.uses_random_roll) {
            (None, _, _) => ResultKind::None,
            (Some(_), _, true) => ResultKind::RandomRoll,
            (Some(_), Some(scaling), false) => ResultKind::Deterministic(scaling),
            (Some(_), None, false) => ResultKind::None,
        }
    }

    fn validate(&self, spirit: &str, mode: Mode) -> MechResult<()> {
        let fail = |msg: &str| Err(MechError::InvalidCatalog(format!("{spirit} ({mode}): {msg}")));

        if self.usage.trim().is_empty() {
            return fail("usage is empty");
        }
        match (&self.result, self.scaling, self.uses_random_roll) {
            (_, Some(_), true) => fail("a random roll cannot also scale with the level"),
            (Some(_), None, false) => fail("result pattern has no scaling or roll to fill it"),
            (None, Some(_), _) | (None, _, true) => fail("computes a value but has no result pattern"),
            _ => Ok(()),
        }
    }
}

/// A named spirit with its bind and release rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpiritDefinition {
    /// Unique name, also shown to players.
    pub name: String,
    /// Flavor text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Rules while bound.
    pub bind: EffectTemplate,
    /// Rules when released.
    pub release: EffectTemplate,
}

impl SpiritDefinition {
    /// The template for a mode.
    pub fn template(&self, mode: Mode) -> &EffectTemplate {
        match mode {
            Mode::Bind => &self.bind,
            Mode::Release => &self.release,
        }
    }
}

/// An immutable, validated table of spirits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    spirits: Vec<SpiritDefinition>,
}

static STANDARD: LazyLock<Catalog> = LazyLock::new(|| Catalog {
    spirits: standard::spirits(),
});

impl Catalog {
    /// Build a catalog, validating every definition.
    pub fn new(spirits: Vec<SpiritDefinition>) -> MechResult<Self> {
        let mut seen = HashSet::new();
        for spirit in &spirits {
            if spirit.name.trim().is_empty() {
                return Err(MechError::InvalidCatalog(
                    "spirit with an empty name".to_string(),
                ));
            }
            if !seen.insert(spirit.name.to_lowercase()) {
                return Err(MechError::InvalidCatalog(format!(
                    "duplicate spirit: {}",
                    spirit.name
                )));
            }
            spirit.bind.validate(&spirit.name, Mode::Bind)?;
            spirit.release.validate(&spirit.name, Mode::Release)?;
        }
        Ok(Self { spirits })
    }

    /// The eighteen built-in spirits.
    pub fn standard() -> &'static Catalog {
        &STANDARD
    }

    /// Load and validate a catalog from JSON (`{"spirits": [...]}`).
    pub fn from_json(json: &str) -> MechResult<Self> {
        #[derive(Deserialize)]
        struct Raw {
            spirits: Vec<SpiritDefinition>,
        }
        let raw: Raw =
            serde_json::from_str(json).map_err(|e| MechError::InvalidCatalog(e.to_string()))?;
        Self::new(raw.spirits)
    }

    /// Find a spirit by name: exact match first, then case-insensitive.
    pub fn lookup(&self, name: &str) -> MechResult<&SpiritDefinition> {
        let name = name.trim();
        self.spirits
            .iter()
            .find(|s| s.name == name)
            .or_else(|| {
                self.spirits
                    .iter()
                    .find(|s| s.name.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| MechError::UnknownSpirit(name.to_string()))
    }

    /// Spirit names in catalog order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.spirits.iter().map(|s| s.name.as_str())
    }

    /// All definitions in catalog order.
    pub fn spirits(&self) -> &[SpiritDefinition] {
        &self.spirits
    }

    /// Number of spirits.
    pub fn len(&self) -> usize {
        self.spirits.len()
    }

    /// Whether the catalog has no spirits.
    pub fn is_empty(&self) -> bool {
        self.spirits.is_empty()
    }

    /// Names close to `input`, best match first.
    pub fn suggest(&self, input: &str) -> Vec<&str> {
        let input_lower = input.trim().to_lowercase();
        let mut matches: Vec<(&str, f64)> = self
            .spirits
            .iter()
            .filter_map(|s| {
                let score = jaro_winkler(&input_lower, &s.name.to_lowercase());
                (score >= SUGGEST_THRESHOLD).then_some((s.name.as_str(), score))
            })
            .collect();
        matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
        matches.into_iter().map(|(name, _)| name).collect()
    }
}

/// Replace `{level}` in template text.
pub(crate) fn fill_level(text: &str, level: i64) -> String {
    text.replace(LEVEL_PLACEHOLDER, &level.to_string())
}
