pub mod bind;
pub mod history;
pub mod init;
pub mod options;
pub mod release;
pub mod show;
pub mod spirits;
pub mod status;

use std::borrow::Cow;
use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use rites_core::{Character, CharacterId, RiteLogEntry, Roster};
use rites_mechanics::{Catalog, MechError, RiteReport, RitesConfig};

/// How results are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Coloured text for the terminal.
    Text,
    /// Chat card and journal markup.
    Html,
    /// Machine-readable JSON.
    Json,
}

/// Options shared by every subcommand.
pub struct Context {
    pub file: PathBuf,
    pub catalog: Option<PathBuf>,
    pub seed: Option<u64>,
    pub format: Format,
    pub character: Option<String>,
}

impl Context {
    pub fn config(&self) -> RitesConfig {
        let config = RitesConfig::default();
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// Load the roster file. A missing file is an empty roster.
    pub fn load_roster_or_default(&self) -> Result<Roster, String> {
        if self.file.exists() {
            self.load_roster()
        } else {
            Ok(Roster::new())
        }
    }

    pub fn load_roster(&self) -> Result<Roster, String> {
        let json = fs::read_to_string(&self.file).map_err(|e| {
            format!(
                "cannot read {}: {e} (create a character with `rites init <name>`)",
                self.file.display()
            )
        })?;
        Roster::from_json(&json).map_err(|e| e.to_string())
    }

    pub fn save_roster(&self, roster: &Roster) -> Result<(), String> {
        let json = roster.to_json().map_err(|e| e.to_string())?;
        fs::write(&self.file, json)
            .map_err(|e| format!("cannot write {}: {e}", self.file.display()))
    }

    pub fn load_catalog(&self) -> Result<Cow<'static, Catalog>, String> {
        let Some(path) = &self.catalog else {
            return Ok(Cow::Borrowed(Catalog::standard()));
        };
        let json = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {e}", path.display()))?;
        Catalog::from_json(&json)
            .map(Cow::Owned)
            .map_err(|e| e.to_string())
    }

    /// The acting character.
    pub fn select<'r>(&self, roster: &'r Roster) -> Result<&'r Character, String> {
        roster
            .select(self.character.as_deref())
            .map_err(|e| e.to_string())
    }
}

/// Render a mechanics error, adding "did you mean" hints for spirit names.
pub fn describe_error(catalog: &Catalog, err: MechError) -> String {
    match err {
        MechError::UnknownSpirit(name) => with_suggestions(catalog, &name),
        other => other.to_string(),
    }
}

fn with_suggestions(catalog: &Catalog, name: &str) -> String {
    let suggestions = catalog.suggest(name);
    if suggestions.is_empty() {
        format!("unknown spirit: \"{name}\"")
    } else {
        format!(
            "unknown spirit: \"{name}\" (did you mean {}?)",
            suggestions.join(", ")
        )
    }
}

/// Log a finished rite on the character, save the roster, and print the card.
fn finish_rite(
    ctx: &Context,
    mut roster: Roster,
    id: &CharacterId,
    actor: &str,
    report: &RiteReport,
) -> Result<(), String> {
    let entry = RiteLogEntry::now(
        &report.session.spirit,
        report.session.mode.is_binding(),
        report.session.level,
        report.resolution.outcome.result.clone(),
    );
    roster.record(id, entry).map_err(|e| e.to_string())?;
    ctx.save_roster(&roster)?;
    println!("{}", crate::present::card(actor, report, ctx.format)?);
    Ok(())
}
