use comfy_table::{ContentArrangement, Table};
use rites_mechanics::Mode;

use super::{Context, Format};
use crate::present;

pub fn run(ctx: &Context) -> Result<(), String> {
    let catalog = ctx.load_catalog()?;

    if ctx.format == Format::Json {
        let json = serde_json::to_string_pretty(&*catalog).map_err(|e| e.to_string())?;
        println!("{json}");
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Spirit", "Bind", "Release", "Description"]);

    for spirit in catalog.spirits() {
        let desc = match spirit.description.as_deref() {
            Some(d) if d.chars().count() > 60 => {
                format!("{}...", d.chars().take(57).collect::<String>())
            }
            Some(d) => d.to_string(),
            None => "-".to_string(),
        };
        table.add_row(vec![
            spirit.name.clone(),
            present::result_kind(spirit.template(Mode::Bind).result_kind()),
            present::result_kind(spirit.template(Mode::Release).result_kind()),
            desc,
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} spirits", catalog.len());

    Ok(())
}
