//! Integration tests for the rites CLI commands.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn rites(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("rites").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

/// A temp directory with one character holding 2/1/1 slots.
fn test_roster() -> TempDir {
    let dir = TempDir::new().unwrap();
    rites(dir.path())
        .args(["init", "Morwen", "--slots", "2,1,1"])
        .assert()
        .success();
    dir
}

fn roster_json(dir: &TempDir) -> serde_json::Value {
    let text = fs::read_to_string(dir.path().join("rites.json")).unwrap();
    serde_json::from_str(&text).unwrap()
}

// ---------------------------------------------------------------------------
// init
// ---------------------------------------------------------------------------

#[test]
fn init_creates_roster() {
    let dir = TempDir::new().unwrap();
    rites(dir.path())
        .args(["init", "Morwen"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created character 'Morwen'"))
        .stdout(predicate::str::contains("spell level 1 : (4) available slots"));

    let roster = roster_json(&dir);
    let character = &roster["characters"][0];
    assert_eq!(character["name"], "Morwen");
    assert_eq!(character["features"][0], "Binding Rites");
}

#[test]
fn init_rejects_duplicate_name() {
    let dir = test_roster();
    rites(dir.path())
        .args(["init", "morwen"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

// ---------------------------------------------------------------------------
// spirits / show
// ---------------------------------------------------------------------------

#[test]
fn spirits_lists_catalog() {
    let dir = TempDir::new().unwrap();
    rites(dir.path())
        .arg("spirits")
        .assert()
        .success()
        .stdout(predicate::str::contains("Agony"))
        .stdout(predicate::str::contains("Wonder"))
        .stdout(predicate::str::contains("18 spirits"));
}

#[test]
fn show_spirit() {
    let dir = TempDir::new().unwrap();
    rites(dir.path())
        .args(["show", "generosity"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Generosity"))
        .stdout(predicate::str::contains("Bonus temp HP = the spirit's level * 5"));
}

#[test]
fn show_unknown_spirit_suggests() {
    let dir = TempDir::new().unwrap();
    rites(dir.path())
        .args(["show", "Sorow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("did you mean Sorrow"));
}

#[test]
fn show_uses_custom_catalog() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("catalog.json"),
        r#"{"spirits": [{
            "name": "Awe",
            "bind": {"usage": "While Awe is bound.", "effect": "Wide eyes."},
            "release": {"usage": "On release.", "result": {"prefix": "Bonus = "}, "scaling": "double"}
        }]}"#,
    )
    .unwrap();
    rites(dir.path())
        .args(["--catalog", "catalog.json", "show", "awe"])
        .assert()
        .success()
        .stdout(predicate::str::contains("While Awe is bound."));
}

// ---------------------------------------------------------------------------
// bind / release
// ---------------------------------------------------------------------------

#[test]
fn bind_prints_card_and_persists() {
    let dir = test_roster();
    rites(dir.path())
        .args(["bind", "envy", "--level", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("united with a level 2 Envy spirit!"))
        .stdout(predicate::str::contains("HP gained = (2)"));

    let roster = roster_json(&dir);
    let character = &roster["characters"][0];
    assert_eq!(character["spirit_box"]["Envy"], 2);
    assert_eq!(character["spirit_box"]["Agony"], false);
    assert_eq!(character["slots"][1]["available"], 0);
    assert_eq!(character["history"][0]["spirit"], "Envy");
}

#[test]
fn bind_html_card() {
    let dir = test_roster();
    rites(dir.path())
        .args(["--format", "html", "bind", "Humility", "-l", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "<p>Morwen united with a <strong>level 3 Humility</strong> spirit!</p>",
        ))
        .stdout(predicate::str::contains(
            "<p><strong>Result: </strong>Minimum = 8 + (3) = 11</p>",
        ));
}

#[test]
fn release_rolls_with_seed() {
    let dir = test_roster();
    rites(dir.path())
        .args(["bind", "Agony", "-l", "1"])
        .assert()
        .success();

    let first = rites(dir.path())
        .args(["--seed", "7", "--format", "json", "release", "Agony"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let card: serde_json::Value = serde_json::from_slice(&first).unwrap();
    let value = card["resolution"]["value"].as_i64().unwrap();
    assert!((1..=6).contains(&value));
    assert_eq!(card["resolution"]["roll"]["rolls"].as_array().unwrap().len(), 1);

    let roster = roster_json(&dir);
    assert_eq!(roster["characters"][0]["spirit_box"]["Agony"], false);
    assert_eq!(roster["characters"][0]["slots"][0]["available"], 2);
}

#[test]
fn bind_twice_fails() {
    let dir = test_roster();
    rites(dir.path())
        .args(["bind", "Envy", "-l", "1"])
        .assert()
        .success();
    rites(dir.path())
        .args(["bind", "Envy", "-l", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Envy is already bound"));
}

#[test]
fn release_without_bonds_fails() {
    let dir = test_roster();
    rites(dir.path())
        .args(["release", "Envy"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("isn't united with any spirits"));
}

#[test]
fn bind_exhausted_level_fails() {
    let dir = test_roster();
    rites(dir.path())
        .args(["bind", "Envy", "-l", "3"])
        .assert()
        .success();
    rites(dir.path())
        .args(["bind", "Fear", "-l", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no level 3 spell slots left"));
}

#[test]
fn bind_invalid_level_fails() {
    let dir = test_roster();
    rites(dir.path())
        .args(["bind", "Envy", "-l", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn bind_respects_max_bonds() {
    let dir = test_roster();
    for spirit in ["Envy", "Fear"] {
        rites(dir.path())
            .args(["bind", spirit, "-l", "1", "--max-bonds", "1"])
            .assert()
            .success();
    }
    rites(dir.path())
        .args(["bind", "Hate", "-l", "2", "--max-bonds", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is higher than the maximum bonds (1)"));

    let roster = roster_json(&dir);
    assert_eq!(roster["characters"][0]["slots"][1]["available"], 1);
}

#[test]
fn stored_box_with_unknown_spirit_is_rejected() {
    let dir = test_roster();
    let mut roster = roster_json(&dir);
    roster["characters"][0]["spirit_box"] = serde_json::json!({"Agony": false, "Gluttony": 3});
    fs::write(dir.path().join("rites.json"), roster.to_string()).unwrap();

    rites(dir.path())
        .args(["bind", "Envy", "-l", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("\"Gluttony\" is not part of the spirit box"));
    rites(dir.path())
        .arg("options")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Gluttony"));
}

#[test]
fn character_without_feature_is_refused() {
    let dir = TempDir::new().unwrap();
    rites(dir.path())
        .args(["init", "Tam", "--no-rites"])
        .assert()
        .success();
    rites(dir.path())
        .args(["bind", "Envy", "-l", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("can't cast Binding Rites"));
}

#[test]
fn several_characters_need_a_choice() {
    let dir = test_roster();
    rites(dir.path())
        .args(["init", "Tam"])
        .assert()
        .success();
    rites(dir.path())
        .args(["bind", "Envy", "-l", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--character"));
    rites(dir.path())
        .args(["--character", "tam", "bind", "Envy", "-l", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("united with a level 1 Envy spirit!"));

    let roster = roster_json(&dir);
    assert_eq!(roster["characters"][0]["spirit_box"], serde_json::Value::Null);
    assert_eq!(roster["characters"][1]["spirit_box"]["Envy"], 1);
}

#[test]
fn missing_roster_fails() {
    let dir = TempDir::new().unwrap();
    rites(dir.path())
        .arg("status")
        .assert()
        .failure()
        .stderr(predicate::str::contains("rites init"));
}

// ---------------------------------------------------------------------------
// options / status / history
// ---------------------------------------------------------------------------

#[test]
fn options_show_levels_and_bonds() {
    let dir = test_roster();
    rites(dir.path())
        .args(["bind", "Wonder", "-l", "2"])
        .assert()
        .success();
    rites(dir.path())
        .arg("options")
        .assert()
        .success()
        .stdout(predicate::str::contains("1 (2 left)"))
        .stdout(predicate::str::contains("Wonder (level 2)"));
}

#[test]
fn status_table_and_journal() {
    let dir = test_roster();
    rites(dir.path())
        .args(["bind", "Sorrow", "-l", "1"])
        .assert()
        .success();
    rites(dir.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bound (Level 1)"))
        .stdout(predicate::str::contains("1 of 18 spirits bound"));
    rites(dir.path())
        .args(["--format", "html", "status"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<h2>Spirit Box Status</h2><table>"))
        .stdout(predicate::str::contains(
            "<tr><td>Sorrow</td><td>Bound (Level 1)</td><td>1</td></tr>",
        ));
    rites(dir.path())
        .args(["--format", "html", "status", "--title", "Morwen's Bonds"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("<h2>Morwen's Bonds</h2><table>"));
}

#[test]
fn history_lists_rites() {
    let dir = test_roster();
    rites(dir.path())
        .args(["bind", "Envy", "-l", "1"])
        .assert()
        .success();
    rites(dir.path())
        .args(["release", "Envy"])
        .assert()
        .success();
    rites(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bound Envy at level 1 (HP gained = (1))"))
        .stdout(predicate::str::contains("Released Envy at level 1"))
        .stdout(predicate::str::contains("2 rites"));
}
