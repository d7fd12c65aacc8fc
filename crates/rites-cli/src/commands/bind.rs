use rites_core::Level;
use rites_mechanics::Rites;

use super::{Context, describe_error, finish_rite};

pub fn run(ctx: &Context, spirit: &str, level: i64, max_bonds: Option<u32>) -> Result<(), String> {
    let mut roster = ctx.load_roster()?;
    let catalog = ctx.load_catalog()?;

    let character = ctx.select(&roster)?;
    if !character.can_cast_binding_rites() {
        return Err("Your character can't cast Binding Rites".into());
    }
    let (id, actor) = (character.id, character.name.clone());

    let level = Level::new(level).map_err(|e| e.to_string())?;
    let config = ctx.config();
    let max_bonds = match max_bonds {
        Some(max) => config.clone().with_max_bonds(max).max_bonds,
        None => config.max_bonds,
    };
    let mut roller = config.roller();

    let report = Rites::new(&catalog)
        .bind(&mut roster, &id, spirit, level, max_bonds, &mut roller)
        .map_err(|e| describe_error(&catalog, e))?;

    finish_rite(ctx, roster, &id, &actor, &report)
}
