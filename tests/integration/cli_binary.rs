//! The `playgen` binary's exit paths.

use super::test_utils::write_lesson;
use std::fs;
use std::process::Command;
use tempfile::TempDir;

fn playgen(repo: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_playgen"));
    cmd.arg("--repo")
        .arg(repo.path())
        .arg("--quiet")
        .env("HOME", repo.path())
        .env_remove("XDG_CONFIG_HOME")
        .env_remove("PLAYGEN_ENV")
        .env_remove("GOOGLE_GEMINI_API_KEY");
    cmd
}

#[test]
fn test_missing_api_key_exits_before_work() {
    let repo = TempDir::new().unwrap();
    let lesson = write_lesson(&repo.path().join("pages"), "javascript", "loops.mdx", "# Loops\n");

    let output = playgen(&repo).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("GOOGLE_GEMINI_API_KEY is not set"),
        "unexpected stderr: {}",
        stderr
    );
    assert_eq!(fs::read_to_string(&lesson).unwrap(), "# Loops\n");
}

#[test]
fn test_configured_key_variable_is_named() {
    let repo = TempDir::new().unwrap();
    fs::create_dir_all(repo.path().join("config")).unwrap();
    fs::write(
        repo.path().join("config").join("playgen.toml"),
        "[generation]\napi_key_env = \"PLAYGEN_TEST_KEY_FOR_CLI\"\n",
    )
    .unwrap();

    let output = playgen(&repo)
        .env_remove("PLAYGEN_TEST_KEY_FOR_CLI")
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("PLAYGEN_TEST_KEY_FOR_CLI is not set"));
}

#[test]
fn test_invalid_config_exits_with_error() {
    let repo = TempDir::new().unwrap();
    let config = repo.path().join("bad.toml");
    fs::write(&config, "[batch]\nsize = 0\n").unwrap();

    let output = playgen(&repo).arg("--config").arg(&config).output().unwrap();

    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("size must be at least 1"));
}

#[test]
fn test_zero_limit_is_rejected_by_parser() {
    let repo = TempDir::new().unwrap();
    let output = playgen(&repo).args(["--limit", "0"]).output().unwrap();
    assert_eq!(output.status.code(), Some(2));
}
