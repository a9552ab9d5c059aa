use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn textops(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("textops").expect("binary builds");
    cmd.arg("--config-dir").arg(config_dir.path());
    cmd
}

#[test]
fn sum_squares_prints_result() {
    let config_dir = TempDir::new().expect("temp dir");
    textops(&config_dir)
        .args(["sum-squares", " 1, 2, 3, 4, 5 "])
        .assert()
        .success()
        .stdout("Sum of squares: 55\n");
}

#[test]
fn sum_squares_empty_input_fails() {
    let config_dir = TempDir::new().expect("temp dir");
    textops(&config_dir)
        .args(["sum-squares", " \t "])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid input"))
        .stderr(predicate::str::contains("Hint:"));
}

#[test]
fn sum_squares_trailing_policies() {
    let config_dir = TempDir::new().expect("temp dir");
    textops(&config_dir)
        .args(["sum-squares", "5,6,7"])
        .assert()
        .success()
        .stdout("Sum of squares: 110\n");
    textops(&config_dir)
        .args(["sum-squares", "5,6,7", "--trailing", "drop"])
        .assert()
        .success()
        .stdout("Sum of squares: 61\n");
}

#[test]
fn sum_squares_json_output() {
    let config_dir = TempDir::new().expect("temp dir");
    textops(&config_dir)
        .args(["--format", "json", "sum-squares", "12abc34"])
        .assert()
        .success()
        .stdout("{\"tokens\":[12,34],\"sum\":1300}\n");
}

#[test]
fn reverse_writes_output_file() {
    let config_dir = TempDir::new().expect("temp dir");
    let work = TempDir::new().expect("temp dir");
    let input = work.path().join("input.txt");
    let output = work.path().join("output.txt");
    std::fs::write(&input, "abc\nnaïve\nlast").expect("write input");

    textops(&config_dir)
        .arg("reverse")
        .arg("--input")
        .arg(&input)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Reversed 3 lines"));

    let content = std::fs::read_to_string(&output).expect("read output");
    assert_eq!(content, "cba\nevïan\ntsal\n");
}

#[test]
fn reverse_uses_default_paths_in_working_directory() {
    let config_dir = TempDir::new().expect("temp dir");
    let work = TempDir::new().expect("temp dir");
    std::fs::write(work.path().join("input.txt"), "hello\n").expect("write input");

    textops(&config_dir)
        .current_dir(work.path())
        .arg("reverse")
        .assert()
        .success();

    let content = std::fs::read_to_string(work.path().join("output.txt")).expect("read output");
    assert_eq!(content, "olleh\n");
}

#[test]
fn reverse_missing_input_fails() {
    let config_dir = TempDir::new().expect("temp dir");
    let work = TempDir::new().expect("temp dir");

    textops(&config_dir)
        .current_dir(work.path())
        .arg("reverse")
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));

    assert!(!work.path().join("output.txt").exists());
}

#[test]
fn contains_prints_message_either_way() {
    let config_dir = TempDir::new().expect("temp dir");
    textops(&config_dir)
        .args(["contains", "Hello, world!", "world"])
        .assert()
        .success()
        .stdout("'Hello, world!' contains 'world'\n");
    textops(&config_dir)
        .args(["contains", "Hello, world!", "xyz"])
        .assert()
        .success()
        .stdout("'Hello, world!' does not contain 'xyz'\n");
}

#[test]
fn config_set_then_show() {
    let config_dir = TempDir::new().expect("temp dir");
    textops(&config_dir)
        .args(["config", "set", "trailing", "drop"])
        .assert()
        .success();

    textops(&config_dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("drop"));

    // The saved policy now applies to sum-squares
    textops(&config_dir)
        .args(["sum-squares", "5,6,7"])
        .assert()
        .success()
        .stdout("Sum of squares: 61\n");
}

#[test]
fn config_set_unknown_key_fails() {
    let config_dir = TempDir::new().expect("temp dir");
    textops(&config_dir)
        .args(["config", "set", "colour", "blue"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown configuration key 'colour'"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    let config_dir = TempDir::new().expect("temp dir");
    textops(&config_dir)
        .args(["-v", "sum-squares", "3"])
        .assert()
        .success()
        .stdout("Sum of squares: 9\n")
        .stderr(predicate::str::contains("Verbose:"))
        .stderr(predicate::function(|err: &str| err.matches("Parsed 1 numbers").count() == 1));
}

#[test]
fn quiet_mode_prints_no_verbose_lines() {
    let config_dir = TempDir::new().expect("temp dir");
    textops(&config_dir)
        .args(["sum-squares", "3"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Verbose:").not());
}
