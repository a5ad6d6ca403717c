use assert_cmd::Command;
use predicates::prelude::*;
use std::path::Path;
use tempfile::tempdir;

fn station(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("station").unwrap();
    cmd.arg("--data-dir").arg(data_dir).env_remove("STATION_LOG");
    cmd
}

#[test]
fn test_init_creates_stores() {
    let dir = tempdir().unwrap();

    station(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created stores: tanks, columns, stats, history"));

    assert!(dir.path().join("config.json").exists());
    assert!(dir.path().join("data/tanks.json").exists());

    station(dir.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to create"));
}

#[test]
fn test_tanks_lists_default_layout() {
    let dir = tempdir().unwrap();

    station(dir.path())
        .arg("tanks")
        .assert()
        .success()
        .stdout(predicate::str::contains("АИ-92"))
        .stdout(predicate::str::contains("12400"))
        .stdout(predicate::str::contains("ДТ"));
}

#[test]
fn test_sale_quote_then_confirm() {
    let dir = tempdir().unwrap();

    station(dir.path())
        .args(["sell", "1", "АИ-92", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("28750.00 ₽"))
        .stdout(predicate::str::contains("Re-run with --yes"));

    station(dir.path())
        .args(["sell", "C1", "92", "500", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sale completed"))
        .stdout(predicate::str::contains("11900 L"));

    station(dir.path())
        .arg("stats")
        .assert()
        .success()
        .stdout(predicate::str::contains("Cars served:    1"))
        .stdout(predicate::str::contains("28750.00 ₽"));

    station(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("SALE"));
}

#[test]
fn test_rejected_operations_fail_without_changes() {
    let dir = tempdir().unwrap();

    station(dir.path())
        .args(["refill", "2", "11000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("capacity exceeded"));

    station(dir.path())
        .args(["tank", "enable", "3"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below its minimum"));

    station(dir.path())
        .args(["transfer", "1", "2", "100"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Fuel type mismatch"));

    station(dir.path())
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded."));
}

#[test]
fn test_transfer_between_same_grade() {
    let dir = tempdir().unwrap();

    station(dir.path())
        .args(["transfer", "#2", "#3", "2500.5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Transferred 2500.5 L"))
        .stdout(predicate::str::contains("7299.5 L"))
        .stdout(predicate::str::contains("3700.5 L"));
}

#[test]
fn test_emergency_halts_sales() {
    let dir = tempdir().unwrap();

    station(dir.path())
        .args(["emergency", "on"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing changed"));

    station(dir.path())
        .args(["emergency", "on", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("all tanks disabled"));

    station(dir.path())
        .args(["sell", "1", "92", "10", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Emergency mode is active"));

    station(dir.path())
        .args(["emergency", "off", "--yes"])
        .assert()
        .success();

    // Tanks stay disabled after the halt is lifted
    station(dir.path())
        .args(["sell", "1", "92", "10", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is disabled"));
}

#[test]
fn test_shell_end_of_input_saves() {
    let dir = tempdir().unwrap();

    station(dir.path())
        .write_stdin("2\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Fuel station control"))
        .stdout(predicate::str::contains("State saved"));

    assert!(dir.path().join("data/history.json").exists());
}

#[test]
fn test_invalid_fuel_argument() {
    let dir = tempdir().unwrap();

    station(dir.path())
        .args(["sell", "1", "petrol", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown fuel"));
}

#[test]
fn test_volume_finer_than_a_milliliter_is_rejected() {
    let dir = tempdir().unwrap();

    station(dir.path())
        .args(["sell", "1", "92", "0.0004"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("max 3 decimals"));
}
