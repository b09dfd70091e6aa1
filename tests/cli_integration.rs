//! CLI integration tests for Capstan.
//!
//! The patch path only runs on a Windows host, so the tests that assert the
//! patched environment are gated on `cfg(windows)`; everything else (wrapper
//! discovery through `show`, config validation, error paths) runs anywhere.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get the capstan binary command.
fn capstan() -> Command {
    Command::cargo_bin("capstan").unwrap()
}

/// Create a temporary directory for test projects.
fn temp_dir() -> TempDir {
    TempDir::new().unwrap()
}

/// Lay down wrapper scripts under `root/tools/bin`.
fn write_wrappers(root: &Path, names: &[&str]) -> PathBuf {
    let bin = root.join("tools").join("bin");
    fs::create_dir_all(&bin).unwrap();
    for name in names {
        fs::write(bin.join(name), "@echo off\r\n").unwrap();
    }
    bin
}

fn full_wrappers(root: &Path) -> PathBuf {
    write_wrappers(root, &["gcc.cmd", "g++.cmd", "ar.cmd", "ranlib.cmd"])
}

// ============================================================================
// capstan show
// ============================================================================

#[test]
fn test_show_reports_wrapper_directory() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    let canon = tmp.path().canonicalize().unwrap();
    let bin = canon.join("tools").join("bin");

    capstan()
        .args(["show", "--project-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Wrappers: {}",
            bin.display()
        )))
        .stdout(predicate::str::contains("gcc.cmd"))
        .stdout(predicate::str::contains("RANLIB"));
}

#[test]
fn test_show_walks_up_from_nested_project() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    let project = tmp.path().join("firmware").join("native");
    fs::create_dir_all(&project).unwrap();

    let canon = tmp.path().canonicalize().unwrap();
    let bin = canon.join("tools").join("bin");

    capstan()
        .args(["show", "--project-dir"])
        .arg(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Wrappers: {}",
            bin.display()
        )));
}

#[test]
fn test_show_reports_system_fallback() {
    let tmp = temp_dir();

    capstan()
        .args(["show", "--project-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"))
        .stdout(predicate::str::contains("System toolchain"));
}

#[test]
fn test_show_rejects_partial_wrappers() {
    let tmp = temp_dir();
    write_wrappers(tmp.path(), &["gcc.cmd"]);

    capstan()
        .args(["show", "--project-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("not found"));
}

#[test]
fn test_show_picks_up_project_dir_variable() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    let canon = tmp.path().canonicalize().unwrap();

    capstan()
        .arg("show")
        .env("PROJECT_DIR", tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains(format!(
            "Project: {}",
            canon.display()
        )));
}

#[cfg(not(windows))]
#[test]
fn test_show_notes_non_windows_host() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    capstan()
        .args(["show", "--project-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("leaves the environment untouched"));
}

// ============================================================================
// capstan apply
// ============================================================================

#[test]
fn test_apply_fails_on_missing_project_dir() {
    let tmp = temp_dir();
    let missing = tmp.path().join("nope");

    capstan()
        .args(["apply", "--project-dir"])
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be resolved"));
}

#[test]
fn test_apply_rejects_malformed_config() {
    let tmp = temp_dir();
    let config_dir = tmp.path().join(".capstan");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[hook\njobs = ").unwrap();

    capstan()
        .args(["apply", "--project-dir"])
        .arg(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config file"));
}

#[cfg(not(windows))]
#[test]
fn test_apply_is_noop_on_non_windows_host() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    capstan()
        .args(["apply", "--project-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not a windows host"));
}

#[cfg(not(windows))]
#[test]
fn test_apply_json_reports_skipped_host() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    let output = capstan()
        .args(["apply", "--format", "json", "--project-dir"])
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["outcome"], "skipped-host");
    assert!(value["tools_bin"].is_null());
    assert!(value["env"].as_object().unwrap().is_empty());
    assert!(value["vars"].as_object().unwrap().is_empty());
}

#[cfg(windows)]
#[test]
fn test_apply_emits_wrapper_assignments() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    let output = capstan()
        .args(["apply", "--format", "json", "--project-dir"])
        .arg(tmp.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["outcome"], "wrappers");

    let tools_bin = value["tools_bin"].as_str().unwrap();
    assert!(tools_bin.ends_with("bin"));

    let cc = value["vars"]["CC"].as_str().unwrap();
    assert!(cc.ends_with("gcc.cmd"));
    assert_eq!(value["env"]["CC"], value["vars"]["CC"]);

    // Wrapper dir is prepended; the original entries follow.
    let path = value["env"]["PATH"].as_str().unwrap();
    assert!(path.starts_with(tools_bin));
}

#[cfg(windows)]
#[test]
fn test_apply_fallback_emits_nothing() {
    let tmp = temp_dir();

    capstan()
        .args(["apply", "--project-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("wrappers not found"));
}

#[cfg(windows)]
#[test]
fn test_apply_respects_existing_jobs_flag() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    capstan()
        .args(["apply", "--project-dir"])
        .arg(tmp.path())
        .env("SCONSFLAGS", "-j8")
        .assert()
        .success()
        .stdout(predicate::str::contains("SCONSFLAGS").not());

    capstan()
        .args(["apply", "--project-dir"])
        .arg(tmp.path())
        .env_remove("SCONSFLAGS")
        .assert()
        .success()
        .stdout(predicate::str::contains("SCONSFLAGS=-j1"));
}

#[cfg(windows)]
#[test]
fn test_apply_jobs_flag_overrides_default() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    capstan()
        .args(["apply", "--jobs", "3", "--project-dir"])
        .arg(tmp.path())
        .env_remove("SCONSFLAGS")
        .assert()
        .success()
        .stdout(predicate::str::contains("SCONSFLAGS=-j3"));
}

#[cfg(windows)]
#[test]
fn test_apply_honors_disabled_config() {
    let tmp = temp_dir();
    full_wrappers(tmp.path());

    let config_dir = tmp.path().join(".capstan");
    fs::create_dir_all(&config_dir).unwrap();
    fs::write(config_dir.join("config.toml"), "[hook]\ndisabled = true\n").unwrap();

    capstan()
        .args(["apply", "--project-dir"])
        .arg(tmp.path())
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("disabled"));
}

// ============================================================================
// capstan completions
// ============================================================================

#[test]
fn test_completions_bash() {
    capstan()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capstan"));
}
