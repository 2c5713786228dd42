use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;

fn passgen(config_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("passgen").unwrap();
    cmd.env("PASSGEN_CONFIG", config_dir.join("settings"))
        .env_remove("RUST_LOG");
    cmd
}

fn stdout_lines(output: &std::process::Output) -> Vec<String> {
    String::from_utf8(output.stdout.clone())
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn passgen_cli_help() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("-n, --number <NUMBER>"))
        .stdout(contains("-l, --length <LENGTH>"))
        .stdout(contains("-t, --tier <TIER>"))
        .stdout(contains("--rng <RNG>"))
        .stdout(contains("-V, --version"));
}

#[test]
fn medium_batch_from_flags() {
    let dir = tempfile::tempdir().unwrap();
    let output = passgen(dir.path())
        .args(["-n", "5", "-l", "10", "-t", "medium"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 5);
    for line in lines {
        assert_eq!(line.len(), 10);
        assert!(line.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}

#[test]
fn strong_passwords_cover_every_class() {
    let dir = tempfile::tempdir().unwrap();
    let output = passgen(dir.path())
        .args(["-n", "50", "-l", "8", "-t", "STRONG"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 50);
    for line in lines {
        assert_eq!(line.len(), 8);
        assert!(line.chars().any(|c| c.is_ascii_lowercase()));
        assert!(line.chars().any(|c| c.is_ascii_uppercase()));
        assert!(line.chars().any(|c| c.is_ascii_digit()));
        assert!(line.chars().any(|c| c.is_ascii_punctuation()));
    }
}

#[test]
fn weak_passwords_with_chacha_source() {
    let dir = tempfile::tempdir().unwrap();
    let output = passgen(dir.path())
        .args(["-n", "3", "-l", "4", "-t", "weak", "--rng", "chacha"])
        .output()
        .unwrap();
    assert!(output.status.success());
    for line in stdout_lines(&output) {
        assert_eq!(line.len(), 4);
        assert!(line.chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn length_below_tier_floor_fails() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .args(["-l", "7", "-t", "strong"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains(
            "Error: Strong passwords should be at least 8 characters long.",
        ));

    passgen(dir.path())
        .args(["-l", "5", "-t", "medium"])
        .assert()
        .code(1)
        .stderr(contains("Medium passwords should be at least 6 characters long."));

    passgen(dir.path())
        .args(["-l", "3", "-t", "weak"])
        .assert()
        .code(1)
        .stderr(contains("Weak passwords should be at least 4 characters long."));
}

#[test]
fn zero_length_and_count_fail() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .args(["-l", "0", "-t", "weak"])
        .assert()
        .code(1)
        .stderr(contains("Error: Password length must be at least 1."));

    passgen(dir.path())
        .args(["-n", "0", "-l", "10"])
        .assert()
        .code(1)
        .stderr(contains("Error: Number of passwords must be at least 1."));
}

#[test]
fn unknown_tier_flag_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .args(["-t", "ultra"])
        .assert()
        .failure()
        .stderr(contains("Complexity level must be 'strong', 'medium', or 'weak'"));
}

#[test]
fn interactive_prompts_from_stdin() {
    let dir = tempfile::tempdir().unwrap();
    let output = passgen(dir.path())
        .write_stdin("3\n8\n Weak \n")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stderr = String::from_utf8(output.stderr.clone()).unwrap();
    assert!(stderr.contains("Enter the number of passwords to generate [1]: "));
    assert!(stderr.contains("Enter the desired password length [16]: "));
    assert!(stderr.contains("Enter the desired complexity level (strong, medium, weak) [strong]: "));
    assert!(stderr.contains("Generated Passwords:"));

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    for line in lines {
        assert_eq!(line.len(), 8);
        assert!(line.chars().all(|c| c.is_ascii_lowercase()));
    }
}

#[test]
fn interactive_unknown_tier_fails() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .write_stdin("2\n10\nextreme\n")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains(
            "Error: Complexity level must be 'strong', 'medium', or 'weak' (got 'extreme').",
        ));
}

#[test]
fn interactive_negative_count_fails() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .write_stdin("-2\n10\nmedium\n")
        .assert()
        .code(1)
        .stderr(contains("Error: Number of passwords must be at least 1."));

    passgen(dir.path())
        .write_stdin("abc\n")
        .assert()
        .code(1)
        .stderr(contains("Error: Invalid number: abc"));
}

#[test]
fn saved_defaults_are_reused() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .args(["-n", "4", "-l", "6", "-t", "medium", "--save"])
        .assert()
        .success()
        .stderr(contains("Defaults saved"));
    assert_eq!(
        fs::read_to_string(dir.path().join("settings")).unwrap(),
        "4,6,medium\n"
    );

    let output = passgen(dir.path()).arg("-d").output().unwrap();
    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 4);
    assert!(lines.iter().all(|l| l.len() == 6));
}

#[test]
fn failed_generation_does_not_save() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .args(["-l", "2", "-t", "strong", "--save"])
        .assert()
        .code(1);
    assert!(!dir.path().join("settings").exists());
}

#[test]
fn output_to_directory_appends_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");
    fs::create_dir(&out_dir).unwrap();

    for _ in 0..2 {
        passgen(dir.path())
            .args(["-n", "2", "-l", "12", "-t", "strong", "-o"])
            .arg(&out_dir)
            .assert()
            .success()
            .stdout(predicate::str::is_empty())
            .stderr(contains("2 password(s)"));
    }

    let written = fs::read_to_string(out_dir.join("passwords.txt")).unwrap();
    assert_eq!(written.lines().count(), 4);
    assert!(written.lines().all(|l| l.len() == 12));
}

#[test]
fn quiet_entropy_and_confirmations() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .args(["-n", "1", "-l", "16", "-t", "strong", "-e"])
        .assert()
        .success()
        .stderr(contains("Entropy: "))
        .stderr(contains("bits (strong)"))
        .stderr(contains("Source: OS CSPRNG"));

    passgen(dir.path())
        .args(["-n", "1", "-l", "16", "-t", "strong", "-e", "-q"])
        .assert()
        .success()
        .stderr(predicate::str::is_empty());
}

#[test]
fn oversized_length_is_an_error_not_a_crash() {
    let dir = tempfile::tempdir().unwrap();
    passgen(dir.path())
        .args(["-n", "1", "-l", "18446744073709551615", "-t", "weak"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(contains(
            "Error: Cannot allocate 1 password(s) of 18446744073709551615 characters.",
        ))
        .stderr(contains("panicked").not());

    passgen(dir.path())
        .args(["-n", "9223372036854775807", "-l", "8", "-t", "weak"])
        .assert()
        .code(1)
        .stderr(contains("Error: Cannot allocate"));
}

#[test]
fn clipboard_never_writes_confirmation_to_stdout() {
    // copied: stdout stays empty; no clipboard: falls back to plain passwords
    let dir = tempfile::tempdir().unwrap();
    let output = passgen(dir.path())
        .args(["-n", "3", "-l", "12", "-t", "strong", "-b"])
        .write_stdin("")
        .output()
        .unwrap();
    assert!(output.status.success());

    let lines = stdout_lines(&output);
    assert!(lines.is_empty() || lines.len() == 3);
    for line in lines {
        assert!(!line.contains("CLIPBOARD"));
        assert_eq!(line.len(), 12);
    }
}
