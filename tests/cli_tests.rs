//! CLI interface tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_version_flag() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("roster"));
}

#[test]
fn test_help_flag() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "An interactive console for keeping a small list of student records",
        ));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.write_stdin("").assert().success().stdout(">>> ");
}

#[test]
fn test_unknown_command_reported_on_stderr() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.write_stdin("jump\nexit\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown command 'jump'"));
}

#[test]
fn test_add_and_list() {
    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.write_stdin("add\nГоршков В.И.\n1\n2 3 4 5 5\nlist\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("|    1 | Горшков В.И."));
}

#[test]
fn test_save_writes_json_file() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("Students.json");

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.write_stdin(format!(
        "add\nХарченко Б.Р.\n2\n5 4 5 4 3\nsave {}\nexit\n",
        data_path.display()
    ))
    .assert()
    .success()
    .stdout(predicate::str::contains("Saved 1 record(s)"));

    let content = fs::read_to_string(&data_path).unwrap();
    let expected = r#"[
    {
        "name": "Харченко Б.Р.",
        "number": "2",
        "z": "5 4 5 4 3"
    }
]"#;
    assert_eq!(content, expected);
}

#[test]
fn test_load_and_select() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("students.json");

    let data = r#"[
    {"name": "Горшков В.И.", "number": "1", "z": "2 3 4 5 5"},
    {"name": "Харченко Б.Р.", "number": "2", "z": "5 4 5 4 3"}
]"#;
    fs::write(&data_path, data).unwrap();

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.write_stdin(format!("load {}\nselect\nexit\n", data_path.display()))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation passed"))
        .stdout(predicate::str::contains("Горшков В.И."))
        .stdout(predicate::str::contains("Харченко Б.Р.").not());
}

#[test]
fn test_load_missing_file_keeps_running() {
    let temp_dir = TempDir::new().unwrap();
    let missing = temp_dir.path().join("missing.json");

    let mut cmd = Command::cargo_bin("roster").unwrap();
    cmd.write_stdin(format!("load {}\nlist\nexit\n", missing.display()))
        .assert()
        .success()
        .stderr(predicate::str::contains("Record file not found"))
        .stdout(predicate::str::contains("The student list is empty."));
}

#[test]
fn test_invalid_file_rejected_unless_advisory() {
    let temp_dir = TempDir::new().unwrap();
    let data_path = temp_dir.path().join("partial.json");
    fs::write(&data_path, r#"[{"name": "Горшков В.И.", "number": "1"}]"#).unwrap();
    let script = format!("load {}\nlist\nexit\n", data_path.display());

    Command::cargo_bin("roster")
        .unwrap()
        .write_stdin(script.clone())
        .assert()
        .success()
        .stderr(predicate::str::contains("does not match the record schema"))
        .stdout(predicate::str::contains("The student list is empty."));

    Command::cargo_bin("roster")
        .unwrap()
        .arg("--advisory-validation")
        .write_stdin(script)
        .assert()
        .success()
        .stderr(predicate::str::contains("warning:"))
        .stdout(predicate::str::contains("|    1 | Горшков В.И."));
}
