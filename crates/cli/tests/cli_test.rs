//! End-to-end tests for the runspec binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn touch(root: &Path, path: &str) {
    let full = root.join(path);
    fs::create_dir_all(full.parent().unwrap()).unwrap();
    fs::write(full, "").unwrap();
}

fn runspec(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("runspec").unwrap();
    cmd.current_dir(root);
    cmd
}

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    fs::create_dir(temp_dir.path().join("lib")).unwrap();
    touch(temp_dir.path(), "app/models/user.rb");
    touch(temp_dir.path(), "spec/models/user_spec.rb");
    temp_dir
}

#[test]
fn test_spec_subcommand() {
    let project = project();

    runspec(project.path())
        .args(["spec", "app/models/user.rb"])
        .assert()
        .success()
        .stdout("spec/models/user_spec.rb\n");
}

#[test]
fn test_target_subcommand() {
    let project = project();

    runspec(project.path())
        .args(["target", "spec/models/user_spec.rb"])
        .assert()
        .success()
        .stdout("app/models/user.rb\n");
}

#[test]
fn test_alternate_subcommand() {
    let project = project();

    runspec(project.path())
        .args(["alt", "spec/models/user_spec.rb"])
        .assert()
        .success()
        .stdout("app/models/user.rb\n");
}

#[test]
fn test_command_subcommand() {
    let project = project();

    runspec(project.path())
        .args(["command", "app/models/user.rb"])
        .assert()
        .success()
        .stdout("ruby -Ilib -Ispec\n");
}

#[test]
fn test_root_flag() {
    let project = project();
    let elsewhere = TempDir::new().unwrap();

    runspec(elsewhere.path())
        .args(["spec", "app/models/user.rb", "--root"])
        .arg(project.path())
        .assert()
        .success()
        .stdout("spec/models/user_spec.rb\n");
}

#[test]
fn test_run_dry_run() {
    let project = project();

    runspec(project.path())
        .args(["run", "--dry-run", "app/models/user.rb"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "ruby -Ilib -Ispec spec/models/user_spec.rb\n",
        ))
        .stdout(predicate::str::contains("Working directory:"));
}

#[test]
fn test_run_dry_run_with_line() {
    let project = project();
    fs::write(
        project.path().join("Gemfile.lock"),
        "GEM\n  specs:\n    rspec (3.12.0)\n",
    )
    .unwrap();

    runspec(project.path())
        .args(["run", "-d", "spec/models/user_spec.rb:7"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "bundle exec rspec spec/models/user_spec.rb:7\n",
        ));
}

#[test]
fn test_analyze_json() {
    let project = project();

    let output = runspec(project.path())
        .args(["analyze", "--verbose", "app/models/user.rb"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["kind"], "source");
    assert_eq!(json["spec_path"], "spec/models/user_spec.rb");
    assert_eq!(json["lockfile"], "no_lockfile");
    assert_eq!(json["command"], "ruby -Ilib -Ispec");
}

#[test]
fn test_analyze_human_readable() {
    let project = project();

    runspec(project.path())
        .args(["analyze", "app/models/user.rb"])
        .assert()
        .success()
        .stdout(predicate::str::contains("🧪 Spec: spec/models/user_spec.rb"))
        .stdout(predicate::str::contains("loadPath: [\"lib\", \"spec\"]"))
        .stdout(predicate::str::contains("📁 Project: "));
}

#[test]
fn test_analyze_with_line() {
    let project = project();
    fs::write(
        project.path().join("Gemfile.lock"),
        "GEM\n  specs:\n    rspec-core (3.12.2)\n    rspec-rails (6.1.0)\n",
    )
    .unwrap();

    runspec(project.path())
        .args(["analyze", "spec/models/user_spec.rb:7"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Run: bundle exec rspec spec/models/user_spec.rb:7\n",
        ))
        .stdout(predicate::str::contains("script/test: always"));

    let output = runspec(project.path())
        .args(["analyze", "-v", "spec/models/user_spec.rb:7"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["lockfile"], "rspec_locked");
    assert_eq!(json["run"], "bundle exec rspec spec/models/user_spec.rb:7");
}

#[test]
fn test_init_writes_config_once() {
    let project = TempDir::new().unwrap();

    runspec(project.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));
    assert!(project.path().join(".runspec.json").exists());

    runspec(project.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

#[test]
fn test_init_honours_root_flag() {
    let project = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();

    runspec(elsewhere.path())
        .arg("--root")
        .arg(project.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created config"));

    assert!(project.path().join(".runspec.json").exists());
    assert!(!elsewhere.path().join(".runspec.json").exists());
}

#[test]
fn test_invalid_config_fails() {
    let project = project();
    fs::write(project.path().join(".runspec.json"), "{ not json").unwrap();

    runspec(project.path())
        .args(["spec", "app/models/user.rb"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to open project"));
}

#[cfg(unix)]
#[test]
fn test_run_propagates_exit_status() {
    use std::os::unix::fs::PermissionsExt;

    let project = project();
    let script = project.path().join("script/test");
    fs::create_dir_all(script.parent().unwrap()).unwrap();
    fs::write(&script, "#!/bin/sh\nexit 4\n").unwrap();
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

    runspec(project.path())
        .args(["run", "app/models/user.rb"])
        .assert()
        .code(4);
}
