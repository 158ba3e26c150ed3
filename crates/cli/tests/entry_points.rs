use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_settings(dir: &Path, make_program: &str) {
    let settings = serde_json::json!({
        "exe_name": "ylang",
        "project_name": "ylang",
        "toolchain": { "make_program": make_program },
    });
    fs::write(
        dir.join(".buildrun.json"),
        serde_json::to_string_pretty(&settings).unwrap(),
    )
    .unwrap();
}

#[cfg(unix)]
fn write_script(path: &Path, body: &str) {
    use std::os::unix::fs::PermissionsExt;

    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = fs::metadata(path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms).unwrap();
}

#[test]
fn info_reports_settings_file() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), "make");

    cargo_bin_cmd!("buildrun")
        .current_dir(temp.path())
        .env_remove("BUILDRUN_CONFIG")
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""exe_name": "ylang""#))
        .stdout(predicate::str::contains(r#""os": ""#));
}

#[test]
fn unknown_configuration_is_usage_error() {
    let temp = TempDir::new().unwrap();
    write_settings(temp.path(), "make");

    cargo_bin_cmd!("buildrun")
        .current_dir(temp.path())
        .env_remove("BUILDRUN_CONFIG")
        .args(["run", "-c", "fastest"])
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Unknown build configuration 'fastest'"));
}

#[test]
fn malformed_settings_is_usage_error() {
    let temp = TempDir::new().unwrap();
    fs::write(temp.path().join("buildrun.json"), "{ nope").unwrap();

    cargo_bin_cmd!("buildrun")
        .current_dir(temp.path())
        .env_remove("BUILDRUN_CONFIG")
        .arg("info")
        .assert()
        .code(64)
        .stderr(predicate::str::contains("Failed to parse"));
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn build_propagates_make_status() {
        let temp = TempDir::new().unwrap();
        let make = temp.path().join("fake-make");
        write_script(&make, "exit 3");
        write_settings(temp.path(), &make.to_string_lossy());

        cargo_bin_cmd!("buildrun")
            .current_dir(temp.path())
            .env_remove("BUILDRUN_CONFIG")
            .arg("build")
            .assert()
            .code(3)
            .stdout(predicate::str::contains("Building ylang in [debug] Configuration"));
    }

    #[test]
    fn buildsln_entry_defaults_to_debug() {
        let temp = TempDir::new().unwrap();
        let make = temp.path().join("fake-make");
        let log = temp.path().join("make.log");
        write_script(&make, &format!("echo \"$@\" > '{}'", log.display()));
        write_settings(temp.path(), &make.to_string_lossy());

        cargo_bin_cmd!("buildsln")
            .current_dir(temp.path())
            .env_remove("BUILDRUN_CONFIG")
            .assert()
            .success();

        assert_eq!(fs::read_to_string(log).unwrap().trim(), "config=debug");
    }

    #[test]
    fn dry_run_prints_build_command() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "make");

        cargo_bin_cmd!("buildrun")
            .current_dir(temp.path())
            .env_remove("BUILDRUN_CONFIG")
            .args(["--dry-run", "build", "-c", "Release"])
            .assert()
            .success()
            .stdout(predicate::str::contains("make config=release"));
    }

    #[test]
    fn settings_env_overrides_discovery() {
        let temp = TempDir::new().unwrap();
        let elsewhere = TempDir::new().unwrap();
        write_settings(temp.path(), "make");
        write_settings(elsewhere.path(), "gmake");

        cargo_bin_cmd!("buildrun")
            .current_dir(temp.path())
            .env("BUILDRUN_CONFIG", elsewhere.path().join(".buildrun.json"))
            .args(["--dry-run", "build"])
            .assert()
            .success()
            .stdout(predicate::str::contains("gmake config=debug"));
    }

    #[test]
    fn run_release_widget_returns_child_status() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "make");
        write_script(&temp.path().join("bin/Release/widget"), "exit 21");

        cargo_bin_cmd!("run")
            .current_dir(temp.path())
            .env_remove("BUILDRUN_CONFIG")
            .args(["-c", "release", "-p", "widget"])
            .assert()
            .code(21);
    }

    #[test]
    fn missing_test_unit_is_not_found() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "make");

        cargo_bin_cmd!("buildrun")
            .current_dir(temp.path())
            .env_remove("BUILDRUN_CONFIG")
            .args(["run", "-t", "parser"])
            .assert()
            .code(2)
            .stderr(predicate::str::contains("Test not found"));
    }

    #[test]
    fn failing_unit_is_not_reported_as_missing() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "make");
        write_script(&temp.path().join("bin/Debug/lexer_tests/lexer_tests"), "exit 2");

        cargo_bin_cmd!("run")
            .current_dir(temp.path())
            .env_remove("BUILDRUN_CONFIG")
            .args(["-t", "lexer"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Test not found").not());
    }

    #[test]
    fn no_tests_is_success() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "make");

        cargo_bin_cmd!("buildrun")
            .current_dir(temp.path())
            .env_remove("BUILDRUN_CONFIG")
            .args(["run", "-t", "all"])
            .assert()
            .success();
    }

    #[test]
    fn failing_test_is_named() {
        let temp = TempDir::new().unwrap();
        write_settings(temp.path(), "make");
        write_script(&temp.path().join("bin/Debug/lexer_tests/lexer_tests"), "exit 0");
        write_script(&temp.path().join("bin/Debug/value_tests/value_tests"), "exit 6");

        cargo_bin_cmd!("buildrun")
            .current_dir(temp.path())
            .env_remove("BUILDRUN_CONFIG")
            .args(["run", "-t", "true"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Test failed: value_tests"));
    }
}
