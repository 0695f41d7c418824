//! End-to-end tests for the `fintrack` binary

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fintrack(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("fintrack").unwrap();
    cmd.arg("--data-dir").arg(dir.path()).env_remove("RUST_LOG");
    cmd
}

fn add(dir: &TempDir, amount: &str, category: &str, description: &str, date: &str) {
    fintrack(dir)
        .args(["add", amount, category, description, "--date", date])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transaction added successfully!"));
}

fn seed_march(dir: &TempDir) {
    add(dir, "1000", "Income", "Salary", "2024-03-01");
    add(dir, "200", "Food", "Groceries", "2024-03-05");
}

#[test]
fn add_then_history_lists_newest_first() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    let output = fintrack(&dir).arg("history").assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    let groceries = stdout.find("Groceries").unwrap();
    let salary = stdout.find("Salary").unwrap();
    assert!(groceries < salary);
    assert!(stdout.contains("$1,000.00"));
    assert!(stdout.contains("2 transaction(s)"));
}

#[test]
fn history_filters_by_category_and_range() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);
    add(&dir, "45.50", "Food", "Dinner", "2024-04-10");

    fintrack(&dir)
        .args(["history", "--category", "food", "--from", "2024-04-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dinner"))
        .stdout(predicate::str::contains("Groceries").not())
        .stdout(predicate::str::contains("1 transaction(s)"));

    fintrack(&dir)
        .args(["history", "--from", "2024-05-01", "--to", "2024-01-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions match the selected filters."));
}

#[test]
fn history_on_empty_store() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions recorded yet."));
}

#[test]
fn invalid_add_is_rejected_without_writing() {
    let dir = TempDir::new().unwrap();
    let data_file = dir.path().join("data").join("transactions.json");

    fintrack(&dir)
        .args(["add", "0", "Food", "Nothing"])
        .assert()
        .failure();
    fintrack(&dir)
        .args(["add", "12", "Food", "   "])
        .assert()
        .failure();
    fintrack(&dir)
        .args(["add", "12", "Groceries", "Bread"])
        .assert()
        .failure();
    assert!(!data_file.exists());

    add(&dir, "12", "Food", "Bread", "2024-03-02");
    let before = fs::read_to_string(&data_file).unwrap();
    fintrack(&dir)
        .args(["add", "-5", "Food", "Refund"])
        .assert()
        .failure();
    assert_eq!(fs::read_to_string(&data_file).unwrap(), before);
}

#[test]
fn insights_scenario() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    fintrack(&dir)
        .arg("insights")
        .assert()
        .success()
        .stdout(predicate::str::contains("$1,000.00"))
        .stdout(predicate::str::contains("$200.00"))
        .stdout(predicate::str::contains("$800.00"))
        .stdout(predicate::str::contains("Food"))
        .stdout(predicate::str::contains("2024-03"))
        .stdout(predicate::str::contains("$1,200.00"));
}

#[test]
fn insights_on_empty_store() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("insights")
        .assert()
        .success()
        .stdout(predicate::str::contains("No transactions available for analysis."));
}

#[test]
fn transactions_survive_restart() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);

    let data_file = dir.path().join("data").join("transactions.json");
    let raw = fs::read_to_string(&data_file).unwrap();
    let records: serde_json::Value = serde_json::from_str(&raw).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["date"], "2024-03-01");
    assert_eq!(records[0]["category"], "Income");
    assert_eq!(records[1]["description"], "Groceries");
    assert_eq!(records[1]["amount"].as_f64(), Some(200.0));

    fintrack(&dir)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("Salary"))
        .stdout(predicate::str::contains("Groceries"));
}

#[test]
fn budget_with_overrides_for_month() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);
    add(&dir, "1250", "Housing", "Rent", "2024-03-01");

    fintrack(&dir)
        .args(["budget", "--month", "2024-03", "--set", "Food=150"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Budget vs. Actual Spending: 2024-03"))
        .stdout(predicate::str::contains("-$50.00 !"))
        .stdout(predicate::str::contains("-$250.00 !"));

    fintrack(&dir)
        .args(["budget", "--set", "Income=100"])
        .assert()
        .failure();
}

#[test]
fn budget_overrides_do_not_persist() {
    let dir = TempDir::new().unwrap();
    add(&dir, "100", "Food", "Groceries", "2024-03-05");

    fintrack(&dir)
        .args(["budget", "--month", "2024-03", "--set", "Food=90"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$10.00 !"));

    fintrack(&dir)
        .args(["budget", "--month", "2024-03"])
        .assert()
        .success()
        .stdout(predicate::str::contains("$400.00"))
        .stdout(predicate::str::contains("!").not());
}

#[test]
fn export_csv_to_file_and_stdout() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);
    add(&dir, "15", "Entertainment", "Movies, snacks", "2024-03-09");

    let out = dir.path().join("export.csv");
    fintrack(&dir)
        .args(["export", "--output"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 3 transaction(s)"));

    let csv = fs::read_to_string(&out).unwrap();
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("Date,Category,Description,Amount"));
    assert_eq!(lines.next(), Some("2024-03-09,Entertainment,\"Movies, snacks\",15.00"));

    fintrack(&dir)
        .args(["export", "--category", "Income"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2024-03-01,Income,Salary,1000.00"))
        .stdout(predicate::str::contains("Groceries").not());
}

#[test]
fn malformed_data_file_is_fatal() {
    let dir = TempDir::new().unwrap();
    let data_dir = dir.path().join("data");
    fs::create_dir_all(&data_dir).unwrap();
    fs::write(data_dir.join("transactions.json"), "{ not a list").unwrap();

    fintrack(&dir).arg("history").assert().failure();
}

#[test]
fn config_shows_paths() {
    let dir = TempDir::new().unwrap();
    fintrack(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("transactions.json"))
        .stdout(predicate::str::contains("Currency symbol: $"));

    fintrack(&dir).args(["config", "--init"]).assert().success();
    assert!(dir.path().join("config.json").exists());
}

#[test]
fn invalid_date_format_setting_is_reported() {
    let dir = TempDir::new().unwrap();
    seed_march(&dir);
    fs::write(dir.path().join("config.json"), r#"{"date_format": "%Q"}"#).unwrap();

    fintrack(&dir)
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid date_format"));
}
