mod common;

use common::{ALICE_CSV, pc, setup_config, write_input};
use punchcat::config::Config;
use punchcat::config::migrate::{migrate_missing_fields, missing_fields};
use punchcat::core::categorize::MealWindows;
use punchcat::core::parse::ParseMode;
use punchcat::core::pivot::DateOrder;
use punchcat::errors::AppError;
use predicates::str::contains;
use std::fs;
use std::path::Path;

#[test]
fn test_missing_config_file_gives_defaults() {
    let conf = setup_config("cfg_defaults");
    let cfg = Config::load_from(Path::new(&conf)).expect("defaults");

    assert_eq!(cfg.name_column, "FirstName");
    assert_eq!(cfg.parse_mode, ParseMode::Lenient);
    assert_eq!(cfg.date_order, DateOrder::Chronological);
    assert_eq!(cfg.default_format, "csv");
    assert_eq!(cfg.windows, MealWindows::extended());
}

#[test]
fn test_init_writes_loadable_config() {
    let conf = setup_config("cfg_init");

    pc().args(["--config", &conf, "init"])
        .assert()
        .success()
        .stdout(contains("Config file"));

    let content = fs::read_to_string(&conf).expect("config written");
    assert!(content.contains("name_column: FirstName"));
    assert!(content.contains("19:00:00"));

    let cfg = Config::load_from(Path::new(&conf)).unwrap();
    assert_eq!(cfg.windows, MealWindows::extended());

    // second init refuses to clobber the file
    pc().args(["--config", &conf, "init"])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    pc().args(["--config", &conf, "init", "--windows", "narrow", "--force"])
        .assert()
        .success();

    let cfg = Config::load_from(Path::new(&conf)).unwrap();
    assert_eq!(cfg.windows, MealWindows::narrow());
}

#[test]
fn test_partial_config_keeps_defaults_for_the_rest() {
    let conf = setup_config("cfg_partial");
    fs::write(
        &conf,
        "name_column: Name\nparse_mode: strict\nwindows:\n  dinner:\n    start: \"18:00:00\"\n    end: \"22:00:00\"\n",
    )
    .unwrap();

    let cfg = Config::load_from(Path::new(&conf)).unwrap();
    assert_eq!(cfg.name_column, "Name");
    assert_eq!(cfg.parse_mode, ParseMode::Strict);
    assert_eq!(cfg.windows.lunch, MealWindows::extended().lunch);
    assert_eq!(cfg.windows.dinner.to_string(), "18:00:00 - 22:00:00");
}

#[test]
fn test_partial_window_takes_default_for_missing_bound() {
    let conf = setup_config("cfg_partial_window");
    fs::write(
        &conf,
        "windows:\n  dinner:\n    start: \"18:30:00\"\n  breakfast: {}\n",
    )
    .unwrap();

    let cfg = Config::load_from(Path::new(&conf)).expect("partial window loads");
    assert_eq!(cfg.windows.dinner.to_string(), "18:30:00 - 23:30:00");
    assert_eq!(cfg.windows.breakfast, MealWindows::extended().breakfast);
    assert_eq!(cfg.windows.lunch, MealWindows::extended().lunch);

    pc().args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("windows.dinner.end"));
}

#[test]
fn test_invalid_window_in_config_is_reported() {
    let conf = setup_config("cfg_bad_window");
    fs::write(
        &conf,
        "windows:\n  lunch:\n    start: \"15:00:00\"\n    end: \"12:00:00\"\n",
    )
    .unwrap();

    assert!(matches!(
        Config::load_from(Path::new(&conf)),
        Err(AppError::InvalidWindow { .. })
    ));

    let input = write_input("cfg_bad_window", ALICE_CSV);
    pc().args(["--config", &conf, "process", &input, "-o", "-"])
        .assert()
        .failure()
        .stderr(contains("Invalid meal window 'lunch'"));
}

#[test]
fn test_config_name_column_and_mode_drive_processing() {
    let conf = setup_config("cfg_drives");
    fs::write(&conf, "name_column: Name\nparse_mode: strict\n").unwrap();

    let good = write_input(
        "cfg_drives_good",
        "EmployeeID,Name,Department,Date,Time\n1,Bob,IT,01-03-2024,13:00:00\n",
    );
    pc().args(["--config", &conf, "process", &good, "-o", "-"])
        .assert()
        .success()
        .stdout("EmployeeID,Name,Department,Category,01-03-2024\n1,Bob,IT,Lunch,13:00:00\n");

    let bad = write_input(
        "cfg_drives_bad",
        "EmployeeID,Name,Department,Date,Time\n1,Bob,IT,01-03-2024,noon\n",
    );
    pc().args(["--config", &conf, "process", &bad, "-o", "-"])
        .assert()
        .failure()
        .stderr(contains("Invalid time 'noon' at line 2"));

    // the command line wins over the file
    pc().args(["--config", &conf, "process", &bad, "-o", "-", "--lenient"])
        .assert()
        .success();
}

#[test]
fn test_check_and_migrate_missing_fields() {
    let conf = setup_config("cfg_migrate");
    fs::write(&conf, "name_column: Name\nwindows:\n  dinner:\n    start: \"18:00:00\"\n    end: \"22:00:00\"\n").unwrap();
    let path = Path::new(&conf);

    let missing = missing_fields(path).unwrap();
    assert!(missing.contains(&"output_prefix".to_string()));
    assert!(missing.contains(&"windows.lunch".to_string()));
    assert!(missing.contains(&"windows.breakfast".to_string()));
    assert!(!missing.contains(&"name_column".to_string()));
    assert!(!missing.contains(&"windows.dinner".to_string()));

    pc().args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("windows.lunch"));

    let added = migrate_missing_fields(path).unwrap();
    assert_eq!(added.len(), missing.len());
    assert!(missing_fields(path).unwrap().is_empty());

    // user values survive the migration
    let cfg = Config::load_from(path).unwrap();
    assert_eq!(cfg.name_column, "Name");
    assert_eq!(cfg.windows.dinner.to_string(), "18:00:00 - 22:00:00");

    pc().args(["--config", &conf, "config", "--check"])
        .assert()
        .success()
        .stdout(contains("Configuration file is complete"));

    pc().args(["--config", &conf, "config", "--migrate"])
        .assert()
        .success()
        .stdout(contains("nothing to migrate"));
}

#[test]
fn test_config_print() {
    let conf = setup_config("cfg_print");

    pc().args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("output_prefix: Total_punches_dinning"))
        .stdout(contains("parse_mode: lenient"));
}

#[test]
fn test_check_without_config_file_fails() {
    let conf = setup_config("cfg_check_missing");

    pc().args(["--config", &conf, "config", "--check"])
        .assert()
        .failure()
        .stderr(contains("run `punchcat init` first"));
}
