use rites_core::{Character, SpellSlots};

use super::Context;

pub fn run(ctx: &Context, name: &str, slots: &[u32], no_rites: bool) -> Result<(), String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("character name cannot be empty".into());
    }

    let mut roster = ctx.load_roster_or_default()?;
    let slots = SpellSlots::from_counts(slots).map_err(|e| e.to_string())?;
    let mut character = Character::new(name, slots);
    if no_rites {
        character.features.clear();
    }
    roster.add(character).map_err(|e| e.to_string())?;
    ctx.save_roster(&roster)?;

    println!("Created character '{name}' in {}", ctx.file.display());
    if let Some(character) = roster.find_by_name(name) {
        for tier in character.slots.tiers() {
            println!("  {tier}");
        }
    }
    if no_rites {
        println!("  (without the Binding Rites feature)");
    }
    println!();
    println!("Get started:");
    println!("  rites options           # What can be bound right now");
    println!("  rites bind Envy -l 1    # Unite with a spirit");
    println!("  rites status            # Spirit box status board");

    Ok(())
}
