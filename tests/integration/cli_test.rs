//! Integration tests for the scriptbox binary

use predicates::prelude::*;
use tempfile::TempDir;

use crate::helpers::{scriptbox, write_fixture};

// ============================================================================
// Help Output Tests
// ============================================================================

#[test]
fn help_lists_commands() {
    let dir = TempDir::new().unwrap();
    scriptbox(dir.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("load"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_shows_package_version() {
    let dir = TempDir::new().unwrap();
    scriptbox(dir.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

// ============================================================================
// Load Command Tests
// ============================================================================

#[test]
fn load_echoes_in_color_then_displays() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "greeting.txt", "Hello, world!");

    scriptbox(dir.path())
        .args(["load", "greeting.txt"])
        .assert()
        .success()
        .stdout("\x1b[34m\x1b[47mHello, world!\n\x1b[0mHello, world!\n")
        .stderr("");
}

#[test]
fn load_with_no_echo_only_displays() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "greeting.txt", "Hello, world!");

    scriptbox(dir.path())
        .args(["load", "greeting.txt", "--no-echo"])
        .assert()
        .success()
        .stdout("Hello, world!\n");
}

#[test]
fn color_never_drops_escape_codes() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "greeting.txt", "Hello, world!");

    scriptbox(dir.path())
        .args(["--color", "never", "load", "greeting.txt"])
        .assert()
        .success()
        .stdout("Hello, world!\nHello, world!\n");
}

#[test]
fn missing_file_is_reported_but_not_fatal() {
    let dir = TempDir::new().unwrap();

    scriptbox(dir.path())
        .args(["load", "missing.txt"])
        .assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("missing.txt"))
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn empty_file_displays_blank_line() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "empty.txt", "");

    scriptbox(dir.path())
        .args(["load", "empty.txt", "--no-echo"])
        .assert()
        .success()
        .stdout("\n");
}

// ============================================================================
// Prompt Tests
// ============================================================================

#[test]
fn prompt_loads_typed_filename_with_echo() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "greeting.txt", "Hello, world!");

    scriptbox(dir.path())
        .write_stdin("greeting.txt\n")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("File: "))
        .stdout(predicate::str::contains(
            "\x1b[34m\x1b[47mHello, world!\n",
        ))
        .stdout(predicate::str::ends_with("Hello, world!\n"));
}

#[test]
fn load_without_file_prompts() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "notes.txt", "remember");

    scriptbox(dir.path())
        .args(["load", "--no-echo"])
        .write_stdin("notes.txt\n")
        .assert()
        .success()
        .stdout("File: remember\n");
}

#[test]
fn prompt_with_no_input_does_nothing() {
    let dir = TempDir::new().unwrap();

    scriptbox(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout("File: ")
        .stderr("");
}

#[test]
fn overlong_filename_is_truncated() {
    let dir = TempDir::new().unwrap();
    let long_name = "n".repeat(600);

    scriptbox(dir.path())
        .write_stdin(format!("{}\n", long_name))
        .assert()
        .success()
        .stderr(predicate::str::contains("truncating"))
        .stderr(predicate::str::contains(format!("'{}'", "n".repeat(499))));
}

#[test]
fn non_utf8_filename_reaches_the_loader() {
    let dir = TempDir::new().unwrap();

    scriptbox(dir.path())
        .write_stdin(&b"caf\xe9.txt\n"[..])
        .assert()
        .success()
        .stdout("File: ")
        .stderr(predicate::str::contains("cannot open"));
}

#[test]
fn prompt_echoes_even_when_config_disables_echo() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "greeting.txt", "hi");
    let config = write_fixture(&dir, "quiet.toml", "[display]\necho = false\n");

    scriptbox(dir.path())
        .env("SCRIPTBOX_CONFIG", &config)
        .write_stdin("greeting.txt\n")
        .assert()
        .success()
        .stdout("File: \x1b[34m\x1b[47mhi\n\x1b[0mhi\n");
}

#[test]
fn prompt_reports_missing_file() {
    let dir = TempDir::new().unwrap();

    scriptbox(dir.path())
        .write_stdin("missing.txt\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("missing.txt"));
}

// ============================================================================
// Config Tests
// ============================================================================

#[test]
fn config_command_prints_defaults() {
    let dir = TempDir::new().unwrap();

    scriptbox(dir.path())
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("not found, defaults"))
        .stdout(predicate::str::contains("chunk_size = 4000"))
        .stdout(predicate::str::contains("max_filename_length = 499"));
}

#[test]
fn config_file_changes_colors() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "greeting.txt", "hi");
    let config = write_fixture(
        &dir,
        "custom.toml",
        "[display]\nforeground = \"green\"\nbackground = \"black\"\n",
    );

    scriptbox(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["load", "greeting.txt"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("\x1b[32m\x1b[40mhi\n"));
}

#[test]
fn config_can_disable_echo() {
    let dir = TempDir::new().unwrap();
    write_fixture(&dir, "greeting.txt", "hi");
    let config = write_fixture(&dir, "quiet.toml", "[display]\necho = false\n");

    scriptbox(dir.path())
        .env("SCRIPTBOX_CONFIG", &config)
        .args(["load", "greeting.txt"])
        .assert()
        .success()
        .stdout("hi\n");
}

#[test]
fn invalid_color_fails_with_message() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "bad.toml", "[display]\nforeground = \"plaid\"\n");

    scriptbox(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["load", "whatever.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("plaid"));
}

#[test]
fn malformed_config_fails() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "broken.toml", "[loader\n");

    scriptbox(dir.path())
        .arg("--config")
        .arg(&config)
        .arg("config")
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.toml"));
}

// ============================================================================
// Completions Tests
// ============================================================================

#[test]
fn completions_for_bash() {
    let dir = TempDir::new().unwrap();

    scriptbox(dir.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scriptbox"));
}

#[test]
fn completions_ignore_broken_config() {
    let dir = TempDir::new().unwrap();
    let config = write_fixture(&dir, "broken.toml", "[loader\n");

    scriptbox(dir.path())
        .arg("--config")
        .arg(&config)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("scriptbox"));
}

#[test]
fn unknown_shell_is_usage_error() {
    let dir = TempDir::new().unwrap();

    scriptbox(dir.path())
        .args(["completions", "cmd.exe"])
        .assert()
        .code(2);
}
