use colored::Colorize;
use rites_mechanics::{EffectTemplate, Mode};

use super::{Context, Format, describe_error};
use crate::present;

pub fn run(ctx: &Context, name: &str) -> Result<(), String> {
    let catalog = ctx.load_catalog()?;
    let spirit = catalog
        .lookup(name)
        .map_err(|e| describe_error(&catalog, e))?;

    if ctx.format == Format::Json {
        let json = serde_json::to_string_pretty(spirit).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    println!("  {}", spirit.name.bold());
    if let Some(description) = &spirit.description {
        println!("  {}", description.dimmed());
    }
    println!();

    for mode in [Mode::Bind, Mode::Release] {
        println!("  {}", mode.mode_line().bold());
        print_template(spirit.template(mode));
        println!();
    }

    Ok(())
}

fn print_template(template: &EffectTemplate) {
    println!("    usage:   {}", template.usage);
    if !template.effect.is_empty() {
        println!("    effect:  {}", template.effect);
    }
    if let Some(formula) = &template.formula {
        println!("    formula: {formula}");
    }
    if template.result.is_some() {
        println!("    result:  {}", present::result_kind(template.result_kind()));
    }
    for note in &template.notes {
        println!("    {}: {}", note.label.to_lowercase(), note.text);
    }
}
