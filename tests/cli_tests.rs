use std::fs;

use assert_cmd::Command;
use predicates::str::contains;
use tempfile::TempDir;

const SCENARIO_A: &str = r#"{
    "start_date": "2024-01-01",
    "end_date": "2024-01-03",
    "initial_balance": 1000,
    "recurring": [
        {"id": "rent", "amount": 200, "direction": "debit", "day_of_month": 2, "description": "Rent"}
    ]
}"#;

fn cli(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("kakeibo_cli").unwrap();
    cmd.env("KAKEIBO_HOME", home.path())
        .env("KAKEIBO_TODAY", "2024-06-01")
        .env_remove("RUST_LOG");
    cmd
}

fn write_scenario(home: &TempDir, body: &str) -> std::path::PathBuf {
    let path = home.path().join("scenario.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn project_prints_success_envelope() {
    let home = TempDir::new().unwrap();
    let path = write_scenario(&home, SCENARIO_A);

    let output = cli(&home).arg("project").arg(&path).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["success"], true);
    let data = json["data"].as_array().unwrap();
    assert_eq!(data.len(), 3);
    assert_eq!(data[1]["date"], "2024-01-02");
    assert_eq!(data[1]["balance"], "800");
    assert_eq!(data[1]["events"][0]["source"], "recurring");
    assert_eq!(data[1]["events"][0]["direction"], "debit");
    assert_eq!(data[2]["balance"], "800");
}

#[test]
fn project_reports_inverted_range_as_failure() {
    let home = TempDir::new().unwrap();
    let path = write_scenario(
        &home,
        r#"{"start_date": "2024-01-03", "end_date": "2024-01-01", "initial_balance": 10}"#,
    );

    cli(&home)
        .arg("project")
        .arg(&path)
        .assert()
        .failure()
        .stdout(contains("\"success\": false"))
        .stdout(contains("must be earlier than end date"));
}

#[test]
fn summary_uses_ledger_balance_and_catalogue() {
    let home = TempDir::new().unwrap();
    let path = write_scenario(
        &home,
        r#"{
            "start_date": "2024-01-01",
            "end_date": "2024-01-31",
            "ledger": {
                "name": "Home",
                "accounts": [
                    {"id": "0b9c8f0e-3b1d-4f55-9d53-6f3f4c1f9a01", "name": "Bank", "kind": "bank", "balance": 1000}
                ],
                "transactions": [
                    {
                        "id": "5a0c2a0e-9c5e-4f7e-8a43-2c1b7d9e0f12",
                        "account_id": "0b9c8f0e-3b1d-4f55-9d53-6f3f4c1f9a01",
                        "kind": "expense",
                        "date": "2023-12-10",
                        "amount": 300,
                        "description": "Phone",
                        "is_recurring": true,
                        "recurring_day": 10
                    }
                ]
            }
        }"#,
    );

    cli(&home)
        .arg("summary")
        .arg(&path)
        .assert()
        .success()
        .stdout(contains("Opening balance: 1000 JPY"))
        .stdout(contains("Lowest balance: 700 JPY on 2024-01-10"))
        .stdout(contains("- debit 300 Phone"));
}

#[test]
fn summary_fails_without_dates() {
    let home = TempDir::new().unwrap();
    let path = write_scenario(&home, r#"{"initial_balance": 10}"#);

    cli(&home)
        .arg("summary")
        .arg(&path)
        .assert()
        .failure()
        .stderr(contains("start date is required"));
}

#[test]
fn sample_prints_template_for_pinned_day() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .arg("sample")
        .assert()
        .success()
        .stdout(contains("\"start_date\": \"2024-06-01\""))
        .stdout(contains("\"end_date\": \"2024-07-01\""))
        .stdout(contains("\"date\": \"2024-06-08\""))
        .stdout(contains("sample-2"));
}

#[test]
fn unknown_command_prints_usage() {
    let home = TempDir::new().unwrap();

    cli(&home)
        .arg("bogus")
        .assert()
        .failure()
        .stderr(contains("unknown command `bogus`"))
        .stderr(contains("Usage: kakeibo_cli"));
}
