use rites_mechanics::Rites;

use super::{Context, Format};
use crate::present;

pub fn run(ctx: &Context, title: Option<&str>) -> Result<(), String> {
    let roster = ctx.load_roster()?;
    let catalog = ctx.load_catalog()?;
    let character = ctx.select(&roster)?;

    let spirit_box = Rites::new(&catalog)
        .current_box(&roster, &character.id)
        .map_err(|e| e.to_string())?;

    match ctx.format {
        Format::Text => {
            println!("{}", present::status_table(&spirit_box));
            println!();
            println!("  {} of {} spirits bound", spirit_box.bound_count(), spirit_box.len());
        }
        Format::Html => {
            let config = match title {
                Some(title) => ctx.config().with_journal_title(title),
                None => ctx.config(),
            };
            println!("{}", present::journal_html(&config.journal_title, &spirit_box));
        }
        Format::Json => {
            let json = serde_json::to_string_pretty(&spirit_box).map_err(|e| e.to_string())?;
            println!("{json}");
        }
    }

    Ok(())
}
