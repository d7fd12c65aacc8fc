use colored::Colorize;
use rites_mechanics::Rites;

use super::{Context, Format};

pub fn run(ctx: &Context) -> Result<(), String> {
    let roster = ctx.load_roster()?;
    let catalog = ctx.load_catalog()?;
    let character = ctx.select(&roster)?;

    let rites = Rites::new(&catalog);
    let bind = rites
        .bind_options(&roster, &character.id)
        .map_err(|e| e.to_string())?;
    let release = rites
        .release_options(&roster, &character.id)
        .map_err(|e| e.to_string())?;

    if ctx.format == Format::Json {
        let json = serde_json::json!({
            "character": character.name,
            "bind": bind,
            "release": release,
        });
        let text = serde_json::to_string_pretty(&json).map_err(|e| e.to_string())?;
        println!("{text}");
        return Ok(());
    }

    println!("  {} ({} bound)", character.name.bold(), bind.bound);
    println!();

    println!("  {}", "Bind".bold());
    if bind.levels.is_empty() {
        println!("    your character doesn't have any spell slots left");
    } else {
        let levels: Vec<String> = bind
            .levels
            .iter()
            .map(|(level, count)| format!("{level} ({count} left)"))
            .collect();
        println!("    levels:  {}", levels.join(", "));
        println!("    spirits: {}", bind.spirits.join(", "));
    }
    println!();

    println!("  {}", "Release".bold());
    if release.is_empty() {
        println!("    your character isn't united with any spirits");
    } else {
        for (spirit, level) in &release {
            println!("    {spirit} (level {level})");
        }
    }

    Ok(())
}
