//! Rendering of chat cards and the status board.

use colored::Colorize;
use comfy_table::{ContentArrangement, Table};
use rites_core::SpiritBox;
use rites_mechanics::{Mode, Resolution, ResultKind, RiteReport, Scaling};

use crate::commands::Format;

/// Render the chat card of a finished rite.
pub fn card(actor: &str, report: &RiteReport, format: Format) -> Result<String, String> {
    match format {
        Format::Text => Ok(text_card(actor, &report.resolution)),
        Format::Html => Ok(html_card(actor, &report.resolution)),
        Format::Json => {
            let json = serde_json::json!({
                "actor": actor,
                "session": report.session,
                "resolution": report.resolution,
            });
            serde_json::to_string_pretty(&json).map_err(|e| e.to_string())
        }
    }
}

fn text_card(actor: &str, resolution: &Resolution) -> String {
    let outcome = &resolution.outcome;
    let mut lines = vec![format!("{} {}", actor.bold(), outcome.flavor_line)];
    let mut line = |label: &str, text: &str| {
        lines.push(format!("  {} {text}", format!("{label}:").bold()));
    };

    if let Some(description) = &outcome.description {
        line("Description", description);
    }
    line("Mode", &outcome.mode_line);
    line("Usage", &outcome.usage);
    if !outcome.effect.is_empty() {
        line("Effect", &outcome.effect);
    }
    if let Some(formula) = &outcome.formula {
        line("Formula", formula);
    }
    for note in &outcome.notes {
        line(&note.label, &note.text);
    }
    if let Some(result) = &outcome.result {
        line("Result", &result.green().to_string());
    }
    if let Some(roll) = &resolution.roll {
        line("Roll", &format!("{} {roll}", roll.expression()));
    }
    lines.join("\n")
}

fn html_card(actor: &str, resolution: &Resolution) -> String {
    let outcome = &resolution.outcome;
    let subject = format!(
        "<strong>level {} {}</strong>",
        resolution.level,
        escape(&resolution.spirit)
    );
    let mut html = match resolution.mode {
        Mode::Bind => format!("<p>{} united with a {subject} spirit!</p>", escape(actor)),
        Mode::Release => format!("<p>{} released the {subject} spirit!</p>", escape(actor)),
    };
    let mut section = |label: &str, text: &str| {
        html.push_str(&format!(
            "<p><strong>{}: </strong>{}</p>",
            escape(label),
            escape(text)
        ));
    };

    if let Some(description) = &outcome.description {
        section("Description", description);
    }
    section("Mode", &outcome.mode_line);
    section("Usage", &outcome.usage);
    if !outcome.effect.is_empty() {
        section("Effect", &outcome.effect);
    }
    if let Some(formula) = &outcome.formula {
        section("Formula", formula);
    }
    for note in &outcome.notes {
        section(&note.label, &note.text);
    }
    if let Some(result) = &outcome.result {
        section("Result", result);
    }
    if let Some(roll) = &resolution.roll {
        section("Roll", &format!("{} {roll}", roll.expression()));
    }
    html
}

/// Short description of what a template computes.
pub fn result_kind(kind: ResultKind) -> String {
    match kind {
        ResultKind::None => "-".to_string(),
        ResultKind::RandomRoll => "(level)d6".to_string(),
        ResultKind::Deterministic(scaling) => match scaling {
            Scaling::Identity => "level",
            Scaling::Double => "level * 2",
            Scaling::TimesFive => "level * 5",
            Scaling::PlusEight => "8 + level",
            Scaling::Negate => "-level",
        }
        .to_string(),
    }
}

/// The status board as a terminal table.
pub fn status_table(spirit_box: &SpiritBox) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Spirit", "Status", "Level"]);
    for (name, state) in spirit_box.iter() {
        let level = state
            .level()
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        table.add_row(vec![name.to_string(), state.to_string(), level]);
    }
    table
}

/// The status board as journal markup.
pub fn journal_html(title: &str, spirit_box: &SpiritBox) -> String {
    let mut html = format!(
        "<h2>{}</h2><table><tr><th>Spirit</th><th>Status</th><th>Level</th></tr>",
        escape(title)
    );
    for (name, state) in spirit_box.iter() {
        let level = state
            .level()
            .map_or_else(|| "-".to_string(), |l| l.to_string());
        html.push_str(&format!(
            "<tr><td>{}</td><td>{state}</td><td>{level}</td></tr>",
            escape(name)
        ));
    }
    html.push_str("</table>");
    html
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
