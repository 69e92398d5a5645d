use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn taskflow(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskflow").unwrap();
    cmd.env("TASKFLOW_DATA_DIR", home.path())
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn init_creates_settings_and_data_files() {
    let home = TempDir::new().unwrap();

    taskflow(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized TaskFlow"));

    assert!(home.path().join("config.json").exists());
    assert!(home.path().join("data").join("tasks.json").exists());
    assert!(home.path().join("data").join("transactions.json").exists());

    taskflow(&home)
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already initialized"));
}

#[test]
fn smart_task_add_then_list() {
    let home = TempDir::new().unwrap();

    taskflow(&home)
        .args(["task", "add", "--smart", "Urgent: analyze churn numbers. Then share."])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority: high"))
        .stdout(predicate::str::contains("Title:    Urgent: analyze churn numbers"));

    taskflow(&home)
        .args(["task", "list", "--status", "active"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Urgent: analyze churn numbers"))
        .stdout(predicate::str::contains("1 tasks, 1 pending"));
}

#[test]
fn smart_task_add_with_blank_first_sentence_uses_default_title() {
    let home = TempDir::new().unwrap();

    taskflow(&home)
        .args(["task", "add", "--smart", "   ! fix the login page asap"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Title:    New Task"))
        .stdout(predicate::str::contains("Priority: high"));
}

#[test]
fn smart_task_add_respects_disabled_parsing() {
    let home = TempDir::new().unwrap();

    taskflow(&home)
        .args(["config", "set", "assist.task_parsing", "off"])
        .assert()
        .success();

    taskflow(&home)
        .args(["task", "add", "--smart", "anything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task parsing is disabled"));
}

#[test]
fn auto_categorized_transaction_shows_suggestion() {
    let home = TempDir::new().unwrap();

    taskflow(&home)
        .args([
            "txn",
            "add",
            "Uber to airport",
            "32.40",
            "--date",
            "2025-01-10",
            "--auto-categorize",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category: Travel"))
        .stdout(predicate::str::contains("70% confidence"));

    taskflow(&home)
        .args(["txn", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("-$32.40"));
}

#[test]
fn negative_amount_is_rejected() {
    let home = TempDir::new().unwrap();

    taskflow(&home)
        .args(["txn", "add", "Refund", "-5.00"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Amount cannot be negative"));
}

#[test]
fn stats_for_a_given_month() {
    let home = TempDir::new().unwrap();

    taskflow(&home)
        .args(["txn", "add", "Salary", "2000", "--income", "--date", "2025-01-05"])
        .assert()
        .success();
    taskflow(&home)
        .args(["txn", "add", "Rent", "1500", "--date", "2025-01-01"])
        .assert()
        .success();
    taskflow(&home)
        .args(["txn", "add", "Old bill", "99", "--date", "2024-12-31"])
        .assert()
        .success();

    taskflow(&home)
        .args(["stats", "--month", "2025-01"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Money (2025-01)"))
        .stdout(predicate::str::contains("$2000.00"))
        .stdout(predicate::str::contains("$1500.00"))
        .stdout(predicate::str::contains("$500.00"));
}

#[test]
fn classify_commands_print_guesses() {
    let home = TempDir::new().unwrap();

    taskflow(&home)
        .args(["classify", "expense", "Lunch with client", "45"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Category:    Meals"))
        .stdout(predicate::str::contains("Confidence:  70%"));

    taskflow(&home)
        .args(["classify", "task", "research competitors when you have time"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Priority:    low"))
        .stdout(predicate::str::contains("Estimate:    1.5h"));
}

#[test]
fn redacted_json_export() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("txns.json");

    taskflow(&home)
        .args([
            "txn",
            "add",
            "Paid jane@corp.io",
            "120",
            "--notes",
            "card 4111111111111111",
        ])
        .assert()
        .success();

    taskflow(&home)
        .args(["export", "transactions"])
        .arg(&out)
        .args(["--format", "json", "--redact"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported 1 transactions"));

    let written = std::fs::read_to_string(&out).unwrap();
    let records: serde_json::Value = serde_json::from_str(&written).unwrap();
    assert_eq!(records[0]["title"], "Paid [REDACTED]");
    assert_eq!(records[0]["description"], "card [REDACTED]");
    assert_eq!(records[0]["amount"], "[REDACTED]");
}

#[test]
fn csv_task_export_header_only_when_empty() {
    let home = TempDir::new().unwrap();
    let out = home.path().join("tasks.csv");

    taskflow(&home)
        .args(["export", "tasks"])
        .arg(&out)
        .assert()
        .success();

    let written = std::fs::read_to_string(&out).unwrap();
    assert_eq!(
        written,
        "Title,Description,Priority,Status,Due Date,Category,Created At\n"
    );
}

#[test]
fn unknown_task_id_fails() {
    let home = TempDir::new().unwrap();

    taskflow(&home)
        .args(["task", "show", "tsk-deadbeef"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Task not found"));
}
