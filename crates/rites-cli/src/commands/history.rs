use colored::Colorize;

use super::{Context, Format};

pub fn run(ctx: &Context) -> Result<(), String> {
    let roster = ctx.load_roster()?;
    let character = ctx.select(&roster)?;

    if ctx.format == Format::Json {
        let json =
            serde_json::to_string_pretty(&character.history).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    if character.history.is_empty() {
        println!("  No rites performed yet.");
        return Ok(());
    }

    for entry in &character.history {
        let stamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S");
        println!("  {}  {entry}", stamp.to_string().dimmed());
    }
    println!();
    println!("  {} rites", character.history.len());

    Ok(())
}
