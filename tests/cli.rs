use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn paisa(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("paisa").unwrap();
    cmd.env("PAISA_TRACKER_DATA_DIR", dir.path())
        .env_remove("PAISA_LOG");
    cmd
}

#[test]
fn dashboard_shows_bracket_figures() {
    let dir = TempDir::new().unwrap();
    paisa(&dir)
        .args(["dashboard", "--income", "10000-15000", "--lang", "english"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹9,000"))
        .stdout(predicate::str::contains("₹3,000"));
}

#[test]
fn dashboard_json_has_categories() {
    let dir = TempDir::new().unwrap();
    paisa(&dir)
        .args(["dashboard", "--income", "20000+", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"categories\""));
}

#[test]
fn dashboard_rejects_unknown_bracket() {
    let dir = TempDir::new().unwrap();
    paisa(&dir)
        .args(["dashboard", "--income", "5000"])
        .assert()
        .failure();
}

#[test]
fn parse_extracts_amount_and_category() {
    let dir = TempDir::new().unwrap();
    paisa(&dir)
        .args(["parse", "Spent 200 rupees on vegetables", "--lang", "english"])
        .assert()
        .success()
        .stdout(predicate::str::contains("₹200"))
        .stdout(predicate::str::contains("groceries"));
}

#[test]
fn ask_unknown_question_gets_fallback() {
    let dir = TempDir::new().unwrap();
    paisa(&dir)
        .args(["ask", "xyz", "--lang", "english"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sorry, I couldn't understand"));
}

#[test]
fn ask_savings_quotes_income() {
    let dir = TempDir::new().unwrap();
    paisa(&dir)
        .args(["ask", "how to save", "--income", "15000-20000", "--lang", "english"])
        .assert()
        .success()
        .stdout(predicate::str::contains("15000"));
}

#[test]
fn faq_lists_five_questions() {
    let dir = TempDir::new().unwrap();
    paisa(&dir)
        .args(["faq", "--lang", "english"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1. How can I save money?"))
        .stdout(predicate::str::contains("5."));
}

#[test]
fn init_writes_settings_file() {
    let dir = TempDir::new().unwrap();
    paisa(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings file"));
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn config_shows_speech_unconfigured() {
    let dir = TempDir::new().unwrap();
    paisa(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("(not configured)"));
}
