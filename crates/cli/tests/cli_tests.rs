use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn tracker(db: &Path) -> Command {
    let mut cmd = Command::cargo_bin("content-tracker").unwrap();
    cmd.env_remove("CONTENT_TRACKER_CATEGORIES").env("RUST_LOG", "warn").arg("--db").arg(db);
    cmd
}

fn stdout_json(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.assert().success().get_output().stdout.clone();
    serde_json::from_slice(&output).unwrap()
}

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("content-tracker").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Continuation-day tracker for generated content ideas"));
}

#[test]
fn test_cli_help_describes_every_subcommand() {
    let mut cmd = Command::cargo_bin("content-tracker").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry counts and highest day per category"))
        .stdout(predicate::str::contains("Log a JSON batch of generated ideas"));
}

#[test]
fn test_cli_log_help() {
    let mut cmd = Command::cargo_bin("content-tracker").unwrap();
    cmd.arg("log").arg("--help").assert().success().stdout(predicate::str::contains("CATEGORY"));
}

#[test]
fn test_setup_creates_database() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("nested").join("ideas.db");

    let value = stdout_json(tracker(&db).arg("setup"));
    assert_eq!(value["schema_version"], 4);
    assert!(db.exists());
}

#[test]
fn test_log_then_check_and_current_day() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("ideas.db");

    let logged = stdout_json(tracker(&db).args(["log", "MMO", "1", "First idea"]));
    assert_eq!(logged["logged"], true);
    assert_eq!(logged["replaced"], 0);

    let again = stdout_json(tracker(&db).args(["log", "MMO", "1", "Second idea"]));
    assert_eq!(again["replaced"], 1);

    let check = stdout_json(tracker(&db).args(["check", "SECOND IDEA"]));
    assert_eq!(check["duplicate"], true);
    let check = stdout_json(tracker(&db).args(["check", "First idea"]));
    assert_eq!(check["duplicate"], false);

    let day = stdout_json(tracker(&db).args(["current-day", "MMO"]));
    assert_eq!(day["current_day"], 0);

    let all = stdout_json(tracker(&db).arg("current-day"));
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[test]
fn test_invalid_log_arguments_fail() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("ideas.db");

    tracker(&db)
        .args(["log", "MMO", "0", "Zero day"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
    tracker(&db)
        .args(["log", "MMO", "-2", "Negative day"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("positive integer"));
    tracker(&db)
        .args(["log", "Cooking", "1", "Recipe"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown category"));
}

#[test]
fn test_import_reports_batch() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("ideas.db");
    let batch = dir.path().join("batch.json");
    std::fs::write(
        &batch,
        r#"[
            {"title": "Morning", "category": "MMO", "time_slot": "Morning"},
            {"title": "Evening", "category": "MMO", "time_slot": "Evening"},
            {"title": "morning", "category": "Faceless"},
            {"title": "Tech", "category": "Cooking"}
        ]"#,
    )
    .unwrap();

    let report = stdout_json(tracker(&db).arg("import").arg(&batch));
    assert_eq!(report["logged"].as_array().unwrap().len(), 2);
    assert_eq!(report["duplicates"], 1);
    assert_eq!(report["skipped"], 1);

    let stats = stdout_json(tracker(&db).arg("stats"));
    assert_eq!(stats["total_entries"], 1);

    let listed = stdout_json(tracker(&db).args(["list", "--category", "MMO"]));
    assert_eq!(listed[0]["title"], "Evening");
    assert_eq!(listed[0]["sequence_day"], 2);
}

#[test]
fn test_import_rejects_malformed_file() {
    let dir = TempDir::new().unwrap();
    let db = dir.path().join("ideas.db");
    let batch = dir.path().join("batch.json");
    std::fs::write(&batch, "not json").unwrap();

    tracker(&db)
        .arg("import")
        .arg(&batch)
        .assert()
        .failure()
        .stderr(predicate::str::contains("parsing candidate file"));
}
