//! The eighteen built-in spirits.
//!
//! Results that depend on damage the host rolled elsewhere (triggering
//! damage, a crit's value) keep that part as text; only the level-driven
//! part is computed.

use super::{EffectTemplate, Scaling, SpiritDefinition};

fn spirit(
    name: &str,
    description: Option<&str>,
    bind: EffectTemplate,
    release: EffectTemplate,
) -> SpiritDefinition {
    SpiritDefinition {
        name: name.to_string(),
        description: description.map(str::to_string),
        bind,
        release,
    }
}

/// Build the built-in spirit definitions, in alphabetical order.
pub fn spirits() -> Vec<SpiritDefinition> {
    vec![
        agony(),
        desire(),
        empathy(),
        envy(),
        fear(),
        generosity(),
        guilt(),
        hate(),
        humility(),
        hunger(),
        passion(),
        pride(),
        serenity(),
        sloth(),
        sorrow(),
        trust(),
        valor(),
        wonder(),
    ]
}

fn agony() -> SpiritDefinition {
    spirit(
        "Agony",
        Some("In the presence of a spirit of Agony, foes' wounds continue to bleed and fires continue to burn."),
        EffectTemplate::new(
            "When you roll damage for an attack or spell, for each 1 on a damage die, you can add the level of the spirit to the damage total.",
            "Adds bonus damage to damage rolls, based on a digit's count of a damage roll.",
        ),
        EffectTemplate::new(
            "You can release Agony as a reaction when you roll the highest possible number on a damage die.",
            "Roll a number of d6s equal to the spirit's level and add the total to the triggering damage as psychic damage.",
        )
        .formula("Psychic damage = (the spirit's level)d6 + the damage crit's value")
        .rolled("Psychic damage = ", " + (the damage crit's value)"),
    )
}

fn desire() -> SpiritDefinition {
    spirit(
        "Desire",
        Some("Spirits of Desire impress your will onto others and enhance existing desires."),
        EffectTemplate::new(
            "Friendly and charmed creatures within 30 feet of you have disadvantage on Wisdom saving throws against your spells. Once a creature succeeds on a Wisdom saving throw against one of your spells, that creature is immune to this spirit's passive effect for 24 hours.",
            "Applies disadvantage on Wis throws for allies against your spells within 30ft",
        ),
        EffectTemplate::new(
            "When you release this spirit as a bonus action, you attempt to charm a creature you can see within 30 feet of you. At 3rd level and below, only humanoids and beasts are affected. At 4th level and above, all creatures can be affected.",
            "The target must succeed on a Wisdom saving throw against your spell save DC or be charmed by you for 1 minute or until it takes damage.",
        )
        .scaled(Scaling::Identity, "Spirit's Level = (", ")"),
    )
}

fn empathy() -> SpiritDefinition {
    spirit(
        "Empathy",
        Some("Spirits of Empathy force your enemies to share your pain."),
        EffectTemplate::new(
            "Whenever a creature deals damage to you, you can use your reaction to retaliate.",
            "The creature takes psychic damage equal to twice the spirit's level.",
        )
        .formula("Psychic damage = level * 2")
        .scaled(Scaling::Double, "Psychic damage = ({level}) * 2 = ", ""),
        EffectTemplate::new(
            "You can release Empathy as a reaction whenever a creature deals damage to you or an ally within 30 feet of you.",
            "The creature takes psychic damage equal to the triggering damage + the spirit's level.",
        )
        .formula("Psychic damage = the spirit's level + triggering damage")
        .scaled(Scaling::Identity, "Psychic damage = (", ") + (triggering damage)"),
    )
}

fn envy() -> SpiritDefinition {
    spirit(
        "Envy",
        Some("Spirits of Envy take from others what they covet for themselves - life."),
        EffectTemplate::new(
            "Once on each of your turns, when you damage a creature with an attack or spell while Envy is bound, you regain a number of hit points equal to the level of the spirit.",
            "Passive lifesteal effect that can be applied once every turn when you damage a creature.",
        )
        .formula("HP gained = level")
        .scaled(Scaling::Identity, "HP gained = (", ")"),
        EffectTemplate::new(
            "When you deal damage to a creature with an attack or spell you can release Envy as a reaction. When you do so, you gain a number of temporary hit points equal to the triggering damage.",
            "Adds temp HP when you deal damage",
        )
        .formula("Temp HP = triggering damage"),
    )
}

fn fear() -> SpiritDefinition {
    spirit(
        "Fear",
        Some("Spirits of Fear bring nightmares to life."),
        EffectTemplate::new(
            "While Fear is bound, you can add your proficiency bonus to Charisma (Intimidation) checks, or double it if you already do. Additionally, creatures provoke opportunity attacks from you even if they take the Disengage action before leaving your reach.",
            "Doubles or adds prof. bonus to Intimidation and enemy provokes opportunity attacks regardless if they disengaged",
        ),
        EffectTemplate::new(
            "When Fear is released from its bonds as a bonus action, a number of creatures equal to the spirit's level within 30 feet of you must succeed on Wisdom saving throw against your spell save DC or be frightened of you for 1 minute. A frightened target can repeat the saving throw at the end of each of its turns, ending the effect on itself on a success.",
            "Selected creatures within 30ft can become frightened for 1 minute if they fail on a Wis throw.",
        )
        .formula("Creature count limit = the spirit's level")
        .scaled(Scaling::Identity, "Creature count limit = (", ")"),
    )
}

fn generosity() -> SpiritDefinition {
    spirit(
        "Generosity",
        Some("Spirits of Generosity are always willing to make sacrifices for those who bind them with good intentions."),
        EffectTemplate::new(
            "Your spells that restore hit points restore additional hit points equal to the spirit's level.",
            "Adds bonus hit points to all spells that heal",
        )
        .formula("Bonus HP to healing spells = level")
        .scaled(Scaling::Identity, "Bonus HP to healing spells = ", ""),
        EffectTemplate::new(
            "You can release Generosity as a bonus action and gift the spirit to an ally within 30 feet of you.",
            "The spirit protects the ally for 10 minutes, granting them a number of temporary hit points equal to 5 times the spirit's level.",
        )
        .formula("Bonus temp HP = the spirit's level * 5")
        .scaled(Scaling::TimesFive, "Bonus temp HP = ({level}) * 5 = ", ""),
    )
}

fn guilt() -> SpiritDefinition {
    spirit(
        "Guilt",
        Some("Spirits of Guilt cause your enemies hesitation in acts that would wrong you."),
        EffectTemplate::new(
            "While Guilt is bound, when you are attacked you can use your reaction to gain a bonus to AC against that attack equal to the level of the spirit. You can use this feature a number of times equal to the spirit's level. You regain all expended uses when you finish a long rest.",
            "Limited use AC bonus, uses and bonus both = spirit's level.",
        )
        .formula("AC bonus and uses = level")
        .scaled(Scaling::Identity, "AC bonus and uses = (", ")"),
        EffectTemplate::new(
            "When you release Guilt from your power as a bonus action, one creature you can see within 60 feet has disadvantage on attack rolls against you for 1 minute. At the end of each of its turn the target can make a Wisdom saving throw against your spell save DC, ending the effect on itself on a success.",
            "Applies disadvantage on attack rolls for one creature within 60ft for 1 minute.",
        ),
    )
}

fn hate() -> SpiritDefinition {
    spirit(
        "Hate",
        Some("Spirits of Hate inspire a ferocity in you."),
        EffectTemplate::new(
            "When you are damaged by a creature, you can choose to channel Hate and gain advantage on attack rolls against that creature until the end of your next turn. You can use this feature a number of times equal to the spirit's level. You regain all expended uses when you finish a long rest.",
            "Limited use attack advantage towards a creature who damaged you.",
        )
        .formula("Uses = level")
        .scaled(Scaling::Identity, "Uses = (", ")"),
        EffectTemplate::new(
            "When you damage a creature with an attack you can release Hate as a reaction.",
            "Roll a number of d6s equal to the spirit's level and add the total to the triggering damage as necrotic damage.",
        )
        .formula("Necrotic damage = (the spirit's level)d6 + the damage value")
        .rolled("Necrotic damage = ", " + (the damage value)"),
    )
}

fn humility() -> SpiritDefinition {
    spirit(
        "Humility",
        None,
        EffectTemplate::new(
            "When you make an ability check with which you are not proficient at disadvantage, the result can not be lower than 8 + the level of this spirit.",
            "Caps the minimum of any non-proficient ability roll to 8 + spirit's level.",
        )
        .formula("Minimum = 8 + level")
        .scaled(Scaling::PlusEight, "Minimum = 8 + ({level}) = ", ""),
        EffectTemplate::new(
            "As a reaction when a creature you can see makes a saving throw or ability check, you can release Humility from your power to bestow it upon the creature. Add the spirit's level to the roll. You can do so after the roll, but must decide before the DM says whether the roll succeeds or fails.",
            "Adds a bonus to the ability or save of a creature in your sight",
        )
        .formula("Bonus = level")
        .scaled(Scaling::Identity, "Bonus = (", ")"),
    )
}

fn hunger() -> SpiritDefinition {
    spirit(
        "Hunger",
        Some("Spirits of Hunger sustain their binder and deprive their enemies of energy."),
        EffectTemplate::new("While Hunger is bound you require no food or water.", ""),
        EffectTemplate::new(
            "You can release Hunger as a bonus action to exhaust a number of creatures within 30 feet of you equal to the spirit's level. A target gains one level of exhaustion, and cannot be affected by a Spirit of Hunger for 24 hours.",
            "Selected creatures within 30ft become exhausted",
        )
        .formula("Creature count limit = the spirit's level")
        .scaled(Scaling::Identity, "Creature count limit = (", ")"),
    )
}

fn passion() -> SpiritDefinition {
    spirit(
        "Passion",
        Some("Spirits of Passion give those who bind them the power to push themselves and others to greater heights of success."),
        EffectTemplate::new(
            "While this spirit is bound you can channel Passion when you make an attack roll, ability check or saving throw, or when an ally within 30 feet of you does, you roll a d6 and add the number rolled to the total. You can use this feature a number of times equal to the spirit's level. You regain all expended uses when you finish a long rest. You lose all remaining dice when you release Passion.",
            "Limited use bonus to your or an ally within 30ft on attack rolls, ability checks or saving throws.",
        )
        .note("Uses count", "Uses = level = ({level})")
        .rolled("Bonus = ", " + (the previous roll's value)"),
        EffectTemplate::new(
            "You can release Passion as a reaction when you make an attack roll, ability check, or saving throw. You gain advantage on the roll. Additionally, you and each friendly creature within 30 feet of you gain a d6 that lasts until the end of your next turn. A creature can expend and roll the d6 when they make an attack roll or ability check, adding it to the total.",
            "You gain advantage on your attack roll, ability check, or saving throw. You and allies within 30f gain a bonus d6 on attack rolls, ability checks or saving throws until your next turn.",
        )
        .note("Bonus roll's formula", "1d6"),
    )
}

fn pride() -> SpiritDefinition {
    spirit(
        "Pride",
        Some("Creatures in your presence are more easily filled with a dangerous sense of pride, oversight, and overconfidence."),
        EffectTemplate::new(
            "When you make an ability check that is contested by a creature you can see, you gain a bonus to the ability check equal to the spirit's level.",
            "Situational ability check bonus.",
        )
        .formula("Bonus = level")
        .scaled(Scaling::Identity, "Bonus = (", ")"),
        EffectTemplate::new(
            "When a creature you can see succeeds on an attack roll or ability check, you can release Pride as a reaction to curse that creature to a disgraceful fall. The next time the target makes an attack roll or ability check, it does so with disadvantage, and subtracts the spirit's level from the total.",
            "Curse a creature with disadvantage on the next attack roll or ability check and subtract the spirit's level from the total.",
        )
        .formula("Bonus = -1 * level")
        .scaled(Scaling::Negate, "Bonus = ", ""),
    )
}

fn serenity() -> SpiritDefinition {
    spirit(
        "Serenity",
        Some("Spirits of Serenity bring peace and clarity of thought to those who bind them."),
        EffectTemplate::new(
            "You don't need to sleep. Instead, you can meditate deeply, remaining semiconscious, for 4 hours a day. After resting in this way, you gain the same benefit that a human does from 8 hours of sleep. Additionally, if you or any friendly creatures who can see you regain hit points at the end of a short rest by spending one or more Hit Dice, each of those creatures regains a number of additional hit points equal to the level of the spirit.",
            "Short rest = long rest for you. And, Bonus hp regen to you and allies within sight who spend hit dice after a short rest.",
        )
        .formula("Bonus HP after short rest = level")
        .scaled(Scaling::Identity, "Bonus HP after short rest = (", ")"),
        EffectTemplate::new(
            "When you release Serenity from your power at the start of your turn (no action required), you are no longer blinded, deafened, frightened, paralysed, poisoned, or stunned.",
            "Cleanses you from multiple negative effects at the start of your turn",
        ),
    )
}

fn sloth() -> SpiritDefinition {
    spirit(
        "Sloth",
        Some("Spirits of Sloth inspire sluggishness and laziness of thought and action around you."),
        EffectTemplate::new(
            "While Sloth is bound, the ground within 15 feet of you is difficult terrain for your enemies.",
            "Applies difficult terrain effect over a radius only for enemies.",
        ),
        EffectTemplate::new(
            "When you release Sloth as a bonus action, you can slow a number of creatures up to the spirit's level that you can see.",
            "A target must make a Wisdom saving throw against your spell save DC. On a failed save a target is slowed until the end of their next turn, and can take either an action or bonus action on their turn, not both.",
        ),
    )
}

fn sorrow() -> SpiritDefinition {
    spirit(
        "Sorrow",
        Some("The failures of your enemies continue to haunt them in the presence of a spirit of Sorrow."),
        EffectTemplate::new(
            "While Sorrow is bound to you, when a creature fails a saving throw against one of your spells of 1st level or higher, it takes psychic damage equal to the spirit's level.",
            "Applies psychic damage to a creature that fails a throw against your 1st level or higher spells",
        )
        .formula("Psychic damage = the spirit's level")
        .scaled(Scaling::Identity, "Psychic damage = (", ")"),
        EffectTemplate::new(
            "When Sorrow is released as a bonus action, choose a creature you can see within 30 feet of you. The target has disadvantage on the next attack roll or ability check it makes before the end of its next turn. If it misses that attack roll or fails the ability check, roll a number of d6s equal to the spirit's level. The target takes psychic damage equal to the total.",
            "Curses a chosen creature within 30ft with disadvantage on the next attack roll or ability check within its next turn. Upon failing or missing, it takes psychic damage",
        )
        .formula("Psychic damage = (the spirit's level)d6")
        .rolled("Psychic damage = ", ""),
    )
}

fn trust() -> SpiritDefinition {
    spirit(
        "Trust",
        Some("While emboldened by a spirit of trust, you can help your allies through cooperative spellcasting."),
        EffectTemplate::new(
            "While Trust is bound, when you finish a long rest you can choose a number of spells from the witch spell list equal to the spirit's level. You and friendly creatures within 30 feet of you know these spells, and always have them prepared, and they don't count against the number of spells an affected creature can know or prepare.",
            "You and allies within 30ft gain spells of your choice from the witch spell list after a long rest.",
        )
        .formula("Number of spells = the spirit's level")
        .scaled(Scaling::Identity, "Number of spells = (", ")"),
        EffectTemplate::new(
            "You can release Trust when you take the Help action, as part of that action. When the target makes the attack roll or ability check that you aided, it can reroll one of the dice once.",
            "Target gets a free reroll on an attack roll or ability check that you aided with Help action",
        ),
    )
}

fn valor() -> SpiritDefinition {
    spirit(
        "Valor",
        Some("Spirits of Valor give those who bind them the power to pull through with confidence against poor odds."),
        EffectTemplate::new(
            "While Valor is bound, you and friendly creatures within 10 feet of you have advantage on saving throws against being frightened.",
            "Gives advantage to you and allies within 10ft on saves against frightened effect.",
        ),
        EffectTemplate::new(
            "When you release this spirit as a bonus action, you and a number of creatures equal to the spirit's level that you can see within 30 feet of you are no longer frightened.",
            "You and chosen creatures within 30ft are no longer frightened.",
        )
        .formula("Number of creatures = the spirit's level")
        .scaled(Scaling::Identity, "Number of creatures = (", ")"),
    )
}

fn wonder() -> SpiritDefinition {
    spirit(
        "Wonder",
        Some("You radiate an aura of awe when a spirit of Wonder is bound to you."),
        EffectTemplate::new(
            "While Wonder is bound, creatures of your choice within 30 feet of you have disadvantage on Wisdom (Perception) checks made to perceive any creature other than you.",
            "Curses creatures (of your choice) within 30ft with disadvantage on Wisdom (Perception) checks other than ones made to perceive you.",
        ),
        EffectTemplate::new(
            "You can release Wonder from your power as an action to inspire awe in a number of creatures equal to the spirit's level that you can see within 30 feet of you. A target must succeed on a Wisdom saving throw against your spell save DC or be incapacitated and have a speed of 0 until the end of your next turn.",
            "Chosen creatures within 30ft become incapacitated and have a speed of 0 until the end of your next turn unless they succeed on a Wis save.",
        )
        .formula("Number of creatures = the spirit's level")
        .scaled(Scaling::Identity, "Number of creatures = (", ")"),
    )
}
