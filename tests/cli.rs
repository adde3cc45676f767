use assert_cmd::Command;
use predicates::prelude::*;
use predicates::str::contains;
use tempfile::TempDir;

fn aider(state: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("aider").unwrap();
    cmd.env_remove("AIDER_TEST_GUI")
        .env_remove("OPENAI_API_KEY")
        .env_remove("ANTHROPIC_API_KEY")
        .env("XDG_STATE_HOME", state.path());
    cmd
}

#[test]
fn help_exits_zero_on_stdout() {
    let state = TempDir::new().unwrap();
    aider(&state)
        .arg("--help")
        .assert()
        .success()
        .stdout(contains("--browser"))
        .stdout(contains("--yes"));
}

#[test]
fn version_exits_zero() {
    let state = TempDir::new().unwrap();
    aider(&state)
        .arg("--version")
        .assert()
        .success()
        .stdout(contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn repl_exit_command() {
    let state = TempDir::new().unwrap();
    aider(&state)
        .write_stdin("/help\n/exit\nhello\n")
        .assert()
        .success()
        .stdout(contains("Commands:"))
        .stdout(contains("prompt was not sent").not());
}

#[test]
fn single_message_mode() {
    let state = TempDir::new().unwrap();
    aider(&state)
        .args(["--model", "claude-3", "-m", "hello"])
        .assert()
        .success()
        .stdout(contains("prompt was not sent to claude-3"));
}

#[test]
fn settings_scrub_api_keys() {
    let state = TempDir::new().unwrap();
    aider(&state)
        .env("OPENAI_API_KEY", "sk-test-key-4321")
        .write_stdin("/settings\n")
        .assert()
        .success()
        .stdout(contains("openai_api_key: ...4321"))
        .stdout(contains("sk-test-key-4321").not());
}

#[cfg(unix)]
#[test]
fn yes_skips_shell_confirmation() {
    let state = TempDir::new().unwrap();
    aider(&state)
        .arg("--yes")
        .write_stdin("!echo from-the-shell\n")
        .assert()
        .success()
        .stdout(contains("from-the-shell"))
        .stdout(contains("[y/N]").not());
}

#[test]
fn cwd_flag_changes_directory() {
    let state = TempDir::new().unwrap();
    let work = TempDir::new().unwrap();
    aider(&state)
        .arg("-C")
        .arg(work.path())
        .write_stdin("")
        .assert()
        .success();
}

#[test]
fn cwd_missing_directory_fails() {
    let state = TempDir::new().unwrap();
    let missing = state.path().join("does-not-exist");
    aider(&state)
        .arg("-C")
        .arg(&missing)
        .assert()
        .failure()
        .stderr(contains("Cannot change directory"));
}

#[test]
fn terminal_mode_writes_log_file() {
    let state = TempDir::new().unwrap();
    aider(&state)
        .arg("-d")
        .write_stdin("")
        .assert()
        .success();
    assert!(state.path().join("aider").join("aider.log").exists());
}
