//! Effect resolution: spirit + mode + level into a chat-card outcome.
//!
//! [`resolve`] is pure apart from the dice it asks the injected [`Roller`]
//! for. It never touches a spirit box or a slot pool; the [`Rites`]
//! workflow decides when to call it and what to commit afterwards.
//!
//! [`Rites`]: crate::rite::Rites

use serde::Serialize;

use crate::catalog::{Catalog, ResultKind, fill_level};
use crate::dice::{DiceRoll, MAX_DICE, Roller};
use crate::error::{MechError, MechResult};
use crate::mode::Mode;

/// An extra labelled line of an outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeNote {
    /// Bold label.
    pub label: String,
    /// Line text with the level filled in.
    pub text: String,
}

/// The text of one resolved rite, free of markup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EffectOutcome {
    /// Follows the actor's name: `united with a level 3 Envy spirit!`.
    pub flavor_line: String,
    /// The spirit's flavor text, if it has any.
    pub description: Option<String>,
    /// `Binding.` or `Releasing.`
    pub mode_line: String,
    /// When and how the effect is triggered.
    pub usage: String,
    /// Short summary; empty when the spirit has none for this mode.
    pub effect: String,
    /// How the number is worked out.
    pub formula: Option<String>,
    /// The computed line, present iff the template declares a result.
    pub result: Option<String>,
    /// Extra labelled lines.
    pub notes: Vec<OutcomeNote>,
}

/// Everything produced by resolving one rite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Resolution {
    /// Canonical spirit name from the catalog.
    pub spirit: String,
    /// Bind or release.
    pub mode: Mode,
    /// The level the rite was resolved at.
    pub level: i64,
    /// The card text.
    pub outcome: EffectOutcome,
    /// The number placed into the result line.
    pub value: Option<i64>,
    /// The dice behind `value` for rolled effects.
    pub roll: Option<DiceRoll>,
}

/// Resolve `spirit` in `mode` at `level`.
///
/// The spirit is looked up first, so an unknown name wins over a bad
/// level. Rolled effects throw `level` d6 through `roller`, at most
/// [`MAX_DICE`] of them; every other effect leaves the roller untouched.
pub fn resolve<R: Roller + ?Sized>(
    catalog: &Catalog,
    spirit: &str,
    mode: Mode,
    level: i64,
    roller: &mut R,
) -> MechResult<Resolution> {
    let definition = catalog.lookup(spirit)?;
    if level <= 0 {
        return Err(MechError::InvalidLevel(level));
    }
    let template = definition.template(mode);

    let (value, roll) = match template.result_kind() {
        ResultKind::None => (None, None),
        ResultKind::Deterministic(scaling) => (Some(scaling.apply(level)), None),
        ResultKind::RandomRoll => {
            let count = u32::try_from(level)
                .ok()
                .filter(|&count| count <= MAX_DICE)
                .ok_or(MechError::InvalidLevel(level))?;
            let roll = roller.roll_d6(count);
            (Some(roll.total()), Some(roll))
        }
    };

    let result = template
        .result
        .as_ref()
        .zip(value)
        .map(|(pattern, value)| pattern.format(level, value));

    let name = definition.name.as_str();
    let flavor_line = match mode {
        Mode::Bind => format!("united with a level {level} {name} spirit!"),
        Mode::Release => format!("released the level {level} {name} spirit!"),
    };

    let outcome = EffectOutcome {
        flavor_line,
        description: definition.description.clone(),
        mode_line: mode.mode_line().to_string(),
        usage: fill_level(&template.usage, level),
        effect: fill_level(&template.effect, level),
        formula: template.formula.as_deref().map(|f| fill_level(f, level)),
        result,
        notes: template
            .notes
            .iter()
            .map(|note| OutcomeNote {
                label: note.label.clone(),
                text: fill_level(&note.text, level),
            })
            .collect(),
    };

    Ok(Resolution {
        spirit: definition.name.clone(),
        mode,
        level,
        outcome,
        value,
        roll,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::{RngRoller, ScriptedRoller};
    use proptest::prelude::*;

    fn resolve_std(spirit: &str, mode: Mode, level: i64) -> Resolution {
        resolve(
            Catalog::standard(),
            spirit,
            mode,
            level,
            &mut ScriptedRoller::new([1, 2, 3, 4, 5, 6]),
        )
        .unwrap()
    }

    fn result_of(spirit: &str, mode: Mode, level: i64) -> Option<String> {
        resolve_std(spirit, mode, level).outcome.result
    }

    #[test]
    fn envy_bind_heals_by_level() {
        let r = resolve_std("Envy", Mode::Bind, 4);
        assert_eq!(r.value, Some(4));
        assert_eq!(r.outcome.result.as_deref(), Some("HP gained = (4)"));
        assert_eq!(r.outcome.formula.as_deref(), Some("HP gained = level"));
        assert!(r.roll.is_none());
    }

    #[test]
    fn generosity_release_times_five() {
        assert_eq!(
            result_of("Generosity", Mode::Release, 2).as_deref(),
            Some("Bonus temp HP = (2) * 5 = 10")
        );
    }

    #[test]
    fn humility_bind_plus_eight() {
        assert_eq!(
            result_of("Humility", Mode::Bind, 3).as_deref(),
            Some("Minimum = 8 + (3) = 11")
        );
    }

    #[test]
    fn pride_release_negates() {
        let r = resolve_std("Pride", Mode::Release, 5);
        assert_eq!(r.value, Some(-5));
        assert_eq!(r.outcome.result.as_deref(), Some("Bonus = -5"));
    }

    #[test]
    fn agony_release_rolls_level_d6() {
        let mut roller = ScriptedRoller::new([1, 1, 6]);
        let r = resolve(Catalog::standard(), "Agony", Mode::Release, 3, &mut roller).unwrap();
        assert_eq!(r.value, Some(8));
        assert_eq!(r.roll.as_ref().map(|roll| roll.rolls.clone()), Some(vec![1, 1, 6]));
        assert_eq!(
            r.outcome.result.as_deref(),
            Some("Psychic damage = 8 + (the damage crit's value)")
        );
    }

    #[test]
    fn agony_bind_has_no_result() {
        let r = resolve_std("Agony", Mode::Bind, 3);
        assert!(r.outcome.result.is_none());
        assert!(r.outcome.formula.is_none());
        assert!(r.value.is_none());
    }

    #[test]
    fn envy_release_formula_without_result() {
        let r = resolve_std("Envy", Mode::Release, 2);
        assert_eq!(r.outcome.formula.as_deref(), Some("Temp HP = triggering damage"));
        assert!(r.outcome.result.is_none());
    }

    #[test]
    fn hunger_bind_has_empty_effect() {
        let r = resolve_std("Hunger", Mode::Bind, 1);
        assert!(r.outcome.effect.is_empty());
        assert_eq!(r.outcome.usage, "While Hunger is bound you require no food or water.");
    }

    #[test]
    fn humility_has_no_description() {
        assert!(resolve_std("Humility", Mode::Release, 1).outcome.description.is_none());
        assert!(resolve_std("Fear", Mode::Release, 1).outcome.description.is_some());
    }

    #[test]
    fn passion_notes_fill_level() {
        let r = resolve_std("Passion", Mode::Bind, 2);
        assert_eq!(
            r.outcome.notes,
            vec![OutcomeNote {
                label: "Uses count".to_string(),
                text: "Uses = level = (2)".to_string(),
            }]
        );
        assert_eq!(r.roll.map(|roll| roll.count()), Some(2));
        assert!(r.outcome.formula.is_none());
        assert_eq!(
            r.outcome.result.as_deref(),
            Some("Bonus = 3 + (the previous roll's value)")
        );
    }

    #[test]
    fn flavor_and_mode_lines() {
        let bind = resolve_std("envy", Mode::Bind, 3);
        assert_eq!(bind.spirit, "Envy");
        assert_eq!(bind.outcome.flavor_line, "united with a level 3 Envy spirit!");
        assert_eq!(bind.outcome.mode_line, "Binding.");

        let release = resolve_std("Envy", Mode::Release, 3);
        assert_eq!(release.outcome.flavor_line, "released the level 3 Envy spirit!");
        assert_eq!(release.outcome.mode_line, "Releasing.");
    }

    #[test]
    fn empathy_bind_snapshot() {
        insta::assert_snapshot!(
            result_of("Empathy", Mode::Bind, 3).unwrap_or_default(),
            @"Psychic damage = (3) * 2 = 6"
        );
    }

    #[test]
    fn level_zero_is_invalid() {
        let err = resolve(
            Catalog::standard(),
            "Envy",
            Mode::Bind,
            0,
            &mut ScriptedRoller::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MechError::InvalidLevel(0)));
    }

    #[test]
    fn dice_count_is_capped() {
        let cap = i64::from(MAX_DICE);
        let mut roller = ScriptedRoller::new([6]);
        let r = resolve(Catalog::standard(), "Agony", Mode::Release, cap, &mut roller).unwrap();
        assert_eq!(r.value, Some(6 * cap));

        let err = resolve(Catalog::standard(), "Agony", Mode::Release, cap + 1, &mut roller)
            .unwrap_err();
        assert!(matches!(err, MechError::InvalidLevel(l) if l == cap + 1));
        let err = resolve(Catalog::standard(), "Hate", Mode::Release, 800_000_000, &mut roller)
            .unwrap_err();
        assert!(matches!(err, MechError::InvalidLevel(800_000_000)));
    }

    #[test]
    fn large_levels_still_scale_without_dice() {
        let r = resolve_std("Generosity", Mode::Release, 800_000_000);
        assert_eq!(r.value, Some(4_000_000_000));
    }

    #[test]
    fn unknown_spirit() {
        let err = resolve(
            Catalog::standard(),
            "NotASpirit",
            Mode::Bind,
            0,
            &mut ScriptedRoller::default(),
        )
        .unwrap_err();
        assert!(matches!(err, MechError::UnknownSpirit(name) if name == "NotASpirit"));
    }

    #[test]
    fn deterministic_effects_leave_roller_untouched() {
        let mut roller = ScriptedRoller::new([6, 5]);
        resolve(Catalog::standard(), "Envy", Mode::Bind, 4, &mut roller).unwrap();
        assert_eq!(roller.roll_d6(2).rolls, vec![6, 5]);
    }

    enum Expect {
        Nothing,
        Fixed(fn(i64) -> i64),
        Dice,
    }

    fn value_table() -> Vec<(&'static str, Expect, Expect)> {
        use Expect::{Dice, Fixed, Nothing};
        vec![
            ("Agony", Nothing, Dice),
            ("Desire", Nothing, Fixed(|l| l)),
            ("Empathy", Fixed(|l| l * 2), Fixed(|l| l)),
            ("Envy", Fixed(|l| l), Nothing),
            ("Fear", Nothing, Fixed(|l| l)),
            ("Generosity", Fixed(|l| l), Fixed(|l| l * 5)),
            ("Guilt", Fixed(|l| l), Nothing),
            ("Hate", Fixed(|l| l), Dice),
            ("Humility", Fixed(|l| l + 8), Fixed(|l| l)),
            ("Hunger", Nothing, Fixed(|l| l)),
            ("Passion", Dice, Nothing),
            ("Pride", Fixed(|l| l), Fixed(|l| -l)),
            ("Serenity", Fixed(|l| l), Nothing),
            ("Sloth", Nothing, Nothing),
            ("Sorrow", Fixed(|l| l), Dice),
            ("Trust", Fixed(|l| l), Nothing),
            ("Valor", Nothing, Fixed(|l| l)),
            ("Wonder", Nothing, Fixed(|l| l)),
        ]
    }

    #[test]
    fn value_table_matches_catalog() {
        let table = value_table();
        assert_eq!(table.len(), Catalog::standard().len());
        for (spirit, bind, release) in &table {
            for (mode, expect) in [(Mode::Bind, bind), (Mode::Release, release)] {
                for level in 1..=9 {
                    let r = resolve_std(spirit, mode, level);
                    match expect {
                        Expect::Nothing => {
                            assert!(r.value.is_none(), "{spirit} {mode} {level}");
                            assert!(r.outcome.result.is_none(), "{spirit} {mode} {level}");
                        }
                        Expect::Fixed(f) => {
                            assert_eq!(r.value, Some(f(level)), "{spirit} {mode} {level}");
                            assert!(r.roll.is_none());
                        }
                        Expect::Dice => {
                            let roll = r.roll.as_ref().unwrap();
                            assert_eq!(roll.count() as i64, level);
                            assert_eq!(r.value, Some(roll.total()));
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn result_present_iff_pattern_declared() {
        let catalog = Catalog::standard();
        for spirit in catalog.spirits() {
            for mode in [Mode::Bind, Mode::Release] {
                let r = resolve_std(&spirit.name, mode, 3);
                assert_eq!(
                    r.outcome.result.is_some(),
                    spirit.template(mode).result.is_some(),
                    "{} {mode}",
                    spirit.name
                );
            }
        }
    }

    proptest! {
        #[test]
        fn rolled_totals_stay_in_range(level in 1i64..=40, seed in any::<u64>()) {
            let mut roller = RngRoller::seeded(seed);
            for spirit in ["Agony", "Hate", "Sorrow"] {
                let r = resolve(Catalog::standard(), spirit, Mode::Release, level, &mut roller).unwrap();
                let roll = r.roll.unwrap();
                prop_assert_eq!(roll.count() as i64, level);
                prop_assert!(roll.rolls.iter().all(|v| (1..=6).contains(v)));
                let total = r.value.unwrap();
                prop_assert!((level..=6 * level).contains(&total));
                prop_assert_eq!(total, roll.total());
            }
        }

        #[test]
        fn same_inputs_same_outcome(level in 1i64..=9, faces in prop::collection::vec(1u32..=6, 1..8)) {
            for spirit in Catalog::standard().names() {
                for mode in [Mode::Bind, Mode::Release] {
                    let a = resolve(Catalog::standard(), spirit, mode, level, &mut ScriptedRoller::new(faces.clone())).unwrap();
                    let b = resolve(Catalog::standard(), spirit, mode, level, &mut ScriptedRoller::new(faces.clone())).unwrap();
                    prop_assert_eq!(a, b);
                }
            }
        }

        #[test]
        fn non_positive_levels_rejected(level in i64::MIN..=0) {
            let result = resolve(Catalog::standard(), "Sorrow", Mode::Release, level, &mut ScriptedRoller::default());
            prop_assert!(matches!(result, Err(MechError::InvalidLevel(l)) if l == level));
        }
    }
}
