use rites_mechanics::Rites;

use super::{Context, describe_error, finish_rite};

pub fn run(ctx: &Context, spirit: &str) -> Result<(), String> {
    let mut roster = ctx.load_roster()?;
    let catalog = ctx.load_catalog()?;

    let character = ctx.select(&roster)?;
    if !character.can_cast_binding_rites() {
        return Err("Your character can't cast Binding Rites".into());
    }
    let (id, actor) = (character.id, character.name.clone());

    let mut roller = ctx.config().roller();
    let report = Rites::new(&catalog)
        .release(&mut roster, &id, spirit, &mut roller)
        .map_err(|e| describe_error(&catalog, e))?;

    finish_rite(ctx, roster, &id, &actor, &report)
}
