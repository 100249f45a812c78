use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn filament(data_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("filament").unwrap();
    cmd.env("FILAMENT_CLI_DATA_DIR", data_dir.path())
        .env_remove("RUST_LOG");
    cmd
}

fn inventory_contents(data_dir: &TempDir) -> String {
    std::fs::read_to_string(data_dir.path().join("Data").join("Inventory.txt")).unwrap()
}

#[test]
fn list_seeds_new_inventory() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["spool", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PLA"))
        .stdout(predicate::str::contains("WHITE"))
        .stdout(predicate::str::contains("1000"));

    assert_eq!(inventory_contents(&data_dir), "PLA,WHITE,1000,\n");
    let sentinel =
        std::fs::read_to_string(data_dir.path().join("Data").join("Sentinel.txt")).unwrap();
    assert_eq!(sentinel, "250");
}

#[test]
fn add_appends_normalized_record() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["spool", "add", "petg", "black", "500"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added spool: BLACK PETG"));

    assert_eq!(
        inventory_contents(&data_dir),
        "PLA,WHITE,1000,\nPETG,BLACK,500,\n"
    );
}

#[test]
fn add_rejects_negative_grams() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["spool", "add", "PLA", "RED", "--", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn adjust_subtracts_and_clamps() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["spool", "adjust", "PLA", "WHITE", "--subtract", "400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data successfully modified."));
    assert_eq!(inventory_contents(&data_dir), "PLA,WHITE,600,\n");

    filament(&data_dir)
        .args(["spool", "adjust", "PLA", "WHITE", "--subtract", "5000"])
        .assert()
        .success();
    assert_eq!(inventory_contents(&data_dir), "PLA,WHITE,0,\n");
}

#[test]
fn adjust_requires_direction() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["spool", "adjust", "PLA", "WHITE"])
        .assert()
        .failure();
}

#[test]
fn adjust_missing_spool_leaves_file_untouched() {
    let data_dir = TempDir::new().unwrap();
    filament(&data_dir).args(["spool", "list"]).assert().success();
    let before = inventory_contents(&data_dir);

    filament(&data_dir)
        .args(["spool", "adjust", "ABS", "RED", "--add", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data to modify not found."));

    assert_eq!(inventory_contents(&data_dir), before);
}

#[test]
fn remove_with_confirmation() {
    let data_dir = TempDir::new().unwrap();
    filament(&data_dir)
        .args(["spool", "add", "PETG", "BLACK", "300"])
        .assert()
        .success();

    filament(&data_dir)
        .args(["spool", "remove", "PLA", "WHITE"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data not removed."));
    assert!(inventory_contents(&data_dir).contains("PLA,WHITE"));

    filament(&data_dir)
        .args(["spool", "remove", "PLA", "WHITE"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Data successfully removed"));
    assert_eq!(inventory_contents(&data_dir), "PETG,BLACK,300,\n");
}

#[test]
fn remove_missing_spool() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["spool", "remove", "ABS", "RED", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Data to remove not found."));
}

#[test]
fn low_uses_warning_level() {
    let data_dir = TempDir::new().unwrap();
    filament(&data_dir)
        .args(["spool", "add", "PETG", "BLACK", "300"])
        .assert()
        .success();

    filament(&data_dir)
        .args(["spool", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing is running low"));

    filament(&data_dir)
        .args(["spool", "low", "--threshold", "400"])
        .assert()
        .success()
        .stdout(predicate::str::contains("PETG"))
        .stdout(predicate::str::contains("WHITE").not());
}

#[test]
fn warning_set_and_show() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["warning", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("250 g"));

    filament(&data_dir)
        .args(["warning", "set", "1200"])
        .assert()
        .success()
        .stdout(predicate::str::contains("changed to 1200 grams"));

    let sentinel =
        std::fs::read_to_string(data_dir.path().join("Data").join("Sentinel.txt")).unwrap();
    assert_eq!(sentinel.trim(), "1200");

    filament(&data_dir)
        .args(["spool", "low"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WHITE"));
}

#[test]
fn warning_rejects_negative() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["warning", "set", "--", "-1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Validation error"));
}

#[test]
fn negative_stored_warning_level_is_rejected_then_replaced() {
    let data_dir = TempDir::new().unwrap();
    let sentinel = data_dir.path().join("Data").join("Sentinel.txt");
    std::fs::create_dir_all(sentinel.parent().unwrap()).unwrap();
    std::fs::write(&sentinel, "-40").unwrap();

    filament(&data_dir)
        .args(["warning", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid warning level"));

    filament(&data_dir)
        .args(["warning", "set", "300"])
        .assert()
        .success()
        .stdout(predicate::str::contains("changed to 300 grams."));

    assert_eq!(std::fs::read_to_string(&sentinel).unwrap(), "300");
}

#[test]
fn carriage_return_separated_inventory_lists_every_spool() {
    let data_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(data_dir.path().join("Data")).unwrap();
    std::fs::write(
        data_dir.path().join("Data").join("Inventory.txt"),
        "PLA,WHITE,1000,\rPETG,BLACK,500,\r",
    )
    .unwrap();

    filament(&data_dir)
        .args(["spool", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("WHITE"))
        .stdout(predicate::str::contains("BLACK"));
}

#[test]
fn malformed_inventory_is_reported() {
    let data_dir = TempDir::new().unwrap();
    std::fs::create_dir_all(data_dir.path().join("Data")).unwrap();
    std::fs::write(
        data_dir.path().join("Data").join("Inventory.txt"),
        "PLA,WHITE,1000,\nPETG,BLACK\n",
    )
    .unwrap();

    filament(&data_dir)
        .args(["spool", "list"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn export_csv_to_path() {
    let data_dir = TempDir::new().unwrap();
    let output = data_dir.path().join("out.csv");

    filament(&data_dir)
        .args(["export", "csv", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory exported to"));

    let contents = std::fs::read_to_string(output).unwrap();
    assert_eq!(contents, "Material,Color,Grams\nPLA,WHITE,1000\n");
}

#[test]
fn export_json_to_default_location() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["export", "json"])
        .assert()
        .success();

    let exports: Vec<_> = std::fs::read_dir(data_dir.path().join("exports"))
        .unwrap()
        .map(|entry| entry.unwrap().file_name().into_string().unwrap())
        .collect();
    assert_eq!(exports.len(), 1);
    assert!(exports[0].starts_with("filament-inventory-"));
    assert!(exports[0].ends_with(".json"));
}

#[test]
fn history_lists_changes() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["history"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No history recorded."));

    filament(&data_dir)
        .args(["spool", "add", "PETG", "BLACK", "500"])
        .assert()
        .success();
    filament(&data_dir)
        .args(["warning", "set", "300"])
        .assert()
        .success();

    filament(&data_dir)
        .args(["history", "--limit", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("UPDATE warning level: 250 g -> 300 g"))
        .stdout(predicate::str::contains("CREATE").not());
}

#[test]
fn config_shows_paths_and_saves_theme() {
    let data_dir = TempDir::new().unwrap();

    filament(&data_dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inventory.txt"))
        .stdout(predicate::str::contains("Classic"));

    filament(&data_dir)
        .args(["config", "--theme", "default"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Settings saved."));

    filament(&data_dir)
        .args(["config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Theme:           Default"));
}
