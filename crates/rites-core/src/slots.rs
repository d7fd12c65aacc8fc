use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{RitesError, RitesResult};
use crate::level::Level;

/// The spell slots of one level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotTier {
    /// Slot level.
    pub level: Level,
    /// Slots that can be spent right now.
    pub available: u32,
    /// Slots the character has at this level when nothing is bound.
    pub max: u32,
    /// Slots currently held inside bound spirits.
    #[serde(default)]
    pub held: u32,
}

impl SlotTier {
    /// A full tier with `max` slots.
    pub fn full(level: Level, max: u32) -> Self {
        Self {
            level,
            available: max,
            max,
            held: 0,
        }
    }

    /// The maximum while spirits hold some of the slots.
    pub fn effective_max(&self) -> u32 {
        self.max.saturating_sub(self.held)
    }
}

impl fmt::Display for SlotTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "spell level {} : ({}) available slots",
            self.level, self.available
        )
    }
}

/// A character's spell slots, one tier per level.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpellSlots {
    tiers: Vec<SlotTier>,
}

impl SpellSlots {
    /// Build slots from a list of maximum counts, level 1 first.
    ///
    /// `[4, 3, 2]` gives four 1st-level, three 2nd-level and two
    /// 3rd-level slots. More than nine entries is an error.
    pub fn from_counts(counts: &[u32]) -> RitesResult<Self> {
        let mut tiers = Vec::with_capacity(counts.len());
        for (i, &max) in counts.iter().enumerate() {
            let level = Level::new(i as i64 + 1)?;
            tiers.push(SlotTier::full(level, max));
        }
        Ok(Self { tiers })
    }

    /// The tier for a level, if the character has one.
    pub fn tier(&self, level: Level) -> Option<&SlotTier> {
        self.tiers.iter().find(|t| t.level == level)
    }

    /// All tiers in level order.
    pub fn tiers(&self) -> &[SlotTier] {
        &self.tiers
    }

    /// Available slot count per level, including empty tiers.
    pub fn available(&self) -> BTreeMap<Level, u32> {
        self.tiers.iter().map(|t| (t.level, t.available)).collect()
    }

    /// Returns true if any tier has a slot left.
    pub fn has_any_available(&self) -> bool {
        self.tiers.iter().any(|t| t.available > 0)
    }

    /// Spend one slot of `level` into a bound spirit.
    pub fn consume(&mut self, level: Level) -> RitesResult<()> {
        let tier = self
            .tiers
            .iter_mut()
            .find(|t| t.level == level)
            .filter(|t| t.available > 0)
            .ok_or(RitesError::ExhaustedTier(level))?;
        tier.available -= 1;
        tier.held += 1;
        Ok(())
    }

    /// Return one slot of `level` from a released spirit.
    ///
    /// A level the character has no tier for gains one.
    pub fn restore(&mut self, level: Level) {
        match self.tiers.iter_mut().find(|t| t.level == level) {
            Some(tier) => {
                tier.available += 1;
                tier.held = tier.held.saturating_sub(1);
            }
            None => {
                self.tiers.push(SlotTier {
                    level,
                    available: 1,
                    max: 0,
                    held: 0,
                });
                self.tiers.sort_by_key(|t| t.level);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(n: i64) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn from_counts_assigns_levels() {
        let slots = SpellSlots::from_counts(&[4, 3, 2]).unwrap();
        assert_eq!(slots.tiers().len(), 3);
        assert_eq!(slots.tier(level(2)).unwrap().max, 3);
        assert_eq!(slots.tier(level(3)).unwrap().available, 2);
        assert!(slots.tier(level(4)).is_none());
    }

    #[test]
    fn from_counts_rejects_ten_tiers() {
        assert!(SpellSlots::from_counts(&[1; 10]).is_err());
    }

    #[test]
    fn consume_holds_a_slot() {
        let mut slots = SpellSlots::from_counts(&[2]).unwrap();
        slots.consume(level(1)).unwrap();
        let tier = slots.tier(level(1)).unwrap();
        assert_eq!(tier.available, 1);
        assert_eq!(tier.held, 1);
        assert_eq!(tier.effective_max(), 1);
    }

    #[test]
    fn consume_exhausted_tier_fails() {
        let mut slots = SpellSlots::from_counts(&[1, 0]).unwrap();
        slots.consume(level(1)).unwrap();
        assert!(matches!(
            slots.consume(level(1)),
            Err(RitesError::ExhaustedTier(l)) if l == level(1)
        ));
        assert!(matches!(
            slots.consume(level(2)),
            Err(RitesError::ExhaustedTier(_))
        ));
        assert!(matches!(
            slots.consume(level(7)),
            Err(RitesError::ExhaustedTier(_))
        ));
        assert_eq!(slots.tier(level(1)).unwrap().available, 0);
    }

    #[test]
    fn restore_undoes_consume() {
        let mut slots = SpellSlots::from_counts(&[3, 2]).unwrap();
        let before = slots.clone();
        slots.consume(level(2)).unwrap();
        slots.restore(level(2));
        assert_eq!(slots, before);
    }

    #[test]
    fn restore_unknown_tier_creates_it() {
        let mut slots = SpellSlots::from_counts(&[1]).unwrap();
        slots.restore(level(3));
        let tier = slots.tier(level(3)).unwrap();
        assert_eq!(tier.available, 1);
        assert_eq!(slots.tiers()[1].level, level(3));
    }

    #[test]
    fn available_and_any() {
        let mut slots = SpellSlots::from_counts(&[1, 0, 2]).unwrap();
        let available = slots.available();
        assert_eq!(available[&level(1)], 1);
        assert_eq!(available[&level(2)], 0);
        assert!(slots.has_any_available());

        slots.consume(level(1)).unwrap();
        slots.consume(level(3)).unwrap();
        slots.consume(level(3)).unwrap();
        assert!(!slots.has_any_available());
    }

    #[test]
    fn tier_display() {
        let tier = SlotTier::full(level(2), 3);
        assert_eq!(tier.to_string(), "spell level 2 : (3) available slots");
    }
}
