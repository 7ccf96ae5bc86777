//! Integration tests for the stagecheck CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn run_git(dir: &Path, args: &[&str]) {
    let status = std::process::Command::new("git")
        .args(args)
        .current_dir(dir)
        .status()
        .expect("git must be available for integration tests");
    assert!(status.success(), "git {:?} failed", args);
}

/// Create a scratch git repository with identity configured
fn init_repo() -> TempDir {
    let temp = TempDir::new().unwrap();
    run_git(temp.path(), &["init", "-q"]);
    run_git(temp.path(), &["config", "user.email", "test@example.com"]);
    run_git(temp.path(), &["config", "user.name", "Test"]);
    temp
}

/// Write a file and stage it
fn stage_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, content).unwrap();
    run_git(dir, &["add", name]);
}

fn stagecheck() -> Command {
    Command::cargo_bin("stagecheck").unwrap()
}

#[test]
fn test_cli_help() {
    stagecheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("staged files"));
}

#[test]
fn test_cli_version() {
    stagecheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("stagecheck"));
}

#[test]
fn test_invalid_subcommand() {
    stagecheck()
        .arg("invalid-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn test_plan_for_mixed_staging_area() {
    let repo = init_repo();
    stage_file(repo.path(), "src/a.ts", "export const a = 1;\n");
    stage_file(repo.path(), "src/a.rs", "fn main() {}\n");

    stagecheck()
        .current_dir(repo.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("cargo fmt"))
        .stdout(predicate::str::contains("cargo check"))
        .stdout(predicate::str::contains("npx prettier --write ./src/a.ts"))
        .stdout(predicate::str::contains("npx tsc --noEmit"))
        .stdout(predicate::str::contains("npx eslint ./src/a.ts"));
}

#[test]
fn test_plan_is_empty_for_unmatched_files() {
    let repo = init_repo();
    stage_file(repo.path(), "README.md", "# readme\n");

    stagecheck()
        .current_dir(repo.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to run"));
}

#[test]
fn test_plan_formatter_only_for_data_and_markup() {
    let repo = init_repo();
    stage_file(repo.path(), "config.json", "{}\n");
    stage_file(repo.path(), "index.html", "<html></html>\n");

    stagecheck()
        .current_dir(repo.path())
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "npx prettier --write ./config.json ./index.html",
        ))
        .stdout(predicate::str::contains("tsc").not())
        .stdout(predicate::str::contains("eslint").not());
}

#[test]
fn test_run_pre_commit_with_no_matching_files_succeeds() {
    let repo = init_repo();
    stage_file(repo.path(), "README.md", "# readme\n");

    stagecheck()
        .current_dir(repo.path())
        .args(["run", "pre-commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("nothing to check"));
}

#[test]
fn test_run_pre_commit_executes_configured_tool() {
    let repo = init_repo();
    // Replace the whole toolchain with commands that exist everywhere, so
    // the hook pipeline itself is what gets exercised.
    fs::write(
        repo.path().join("stagecheck.toml"),
        "[tools]\nformatter = \"true\"\ntype_check = \"\"\nlint = \"\"\n",
    )
    .unwrap();
    stage_file(repo.path(), "config.json", "{}\n");

    stagecheck()
        .current_dir(repo.path())
        .args(["run", "pre-commit"])
        .assert()
        .success()
        .stdout(predicate::str::contains("All pre-commit checks passed"));
}

#[test]
fn test_run_pre_commit_fails_when_tool_is_missing() {
    let repo = init_repo();
    fs::write(
        repo.path().join("stagecheck.toml"),
        "[tools]\nformatter = \"stagecheck-missing-tool-xyz\"\ntype_check = \"\"\nlint = \"\"\n",
    )
    .unwrap();
    stage_file(repo.path(), "config.json", "{}\n");

    stagecheck()
        .current_dir(repo.path())
        .args(["run", "pre-commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found in PATH"));
}

#[test]
fn test_run_pre_commit_aborts_on_failing_tool() {
    let repo = init_repo();
    fs::write(
        repo.path().join("stagecheck.toml"),
        "[tools]\nformatter = \"false\"\ntype_check = \"\"\nlint = \"\"\n",
    )
    .unwrap();
    stage_file(repo.path(), "config.json", "{}\n");

    stagecheck()
        .current_dir(repo.path())
        .args(["run", "pre-commit"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exited with"));
}

#[test]
fn test_run_unsupported_hook_fails() {
    let repo = init_repo();

    stagecheck()
        .current_dir(repo.path())
        .args(["run", "post-merge"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported hook"));
}

#[test]
fn test_install_creates_managed_hook() {
    let repo = init_repo();

    stagecheck()
        .current_dir(repo.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("Installed pre-commit hook"));

    let hook_path = repo.path().join(".git/hooks/pre-commit");
    let hook = fs::read_to_string(&hook_path).unwrap();
    assert!(hook.contains("Installed by stagecheck"));
    assert!(hook.contains("stagecheck run pre-commit"));

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let mode = fs::metadata(&hook_path).unwrap().permissions().mode();
        assert_eq!(mode & 0o111, 0o111, "hook script must be executable");
    }

    // Installing again is a no-op
    stagecheck()
        .current_dir(repo.path())
        .arg("install")
        .assert()
        .success()
        .stdout(predicate::str::contains("already installed"));
}

#[test]
fn test_install_refuses_to_clobber_foreign_hook() {
    let repo = init_repo();
    let hooks_dir = repo.path().join(".git/hooks");
    fs::create_dir_all(&hooks_dir).unwrap();
    fs::write(hooks_dir.join("pre-commit"), "#!/bin/sh\necho custom\n").unwrap();

    stagecheck()
        .current_dir(repo.path())
        .arg("install")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not managed by stagecheck"));

    // --force overwrites
    stagecheck()
        .current_dir(repo.path())
        .args(["install", "--force"])
        .assert()
        .success();

    let hook = fs::read_to_string(hooks_dir.join("pre-commit")).unwrap();
    assert!(hook.contains("Installed by stagecheck"));
}

#[test]
fn test_uninstall_removes_managed_hook_only() {
    let repo = init_repo();

    stagecheck()
        .current_dir(repo.path())
        .arg("install")
        .assert()
        .success();
    stagecheck()
        .current_dir(repo.path())
        .arg("uninstall")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed pre-commit hook"));
    assert!(!repo.path().join(".git/hooks/pre-commit").exists());

    // A foreign hook is left in place
    let hooks_dir = repo.path().join(".git/hooks");
    fs::write(hooks_dir.join("pre-commit"), "#!/bin/sh\necho custom\n").unwrap();
    stagecheck()
        .current_dir(repo.path())
        .arg("uninstall")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not managed by stagecheck"));
}

#[test]
fn test_config_validate_accepts_defaults() {
    let repo = init_repo();

    stagecheck()
        .current_dir(repo.path())
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}

#[test]
fn test_config_validate_rejects_bad_glob() {
    let repo = init_repo();
    fs::write(
        repo.path().join("stagecheck.toml"),
        "[buckets]\nscript = [\"*.{js\"]\n",
    )
    .unwrap();

    stagecheck()
        .current_dir(repo.path())
        .args(["config", "validate"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid glob pattern"));
}

#[test]
fn test_config_show_prints_merged_configuration() {
    let repo = init_repo();

    stagecheck()
        .current_dir(repo.path())
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("buckets"))
        .stdout(predicate::str::contains("*.json"));
}

#[test]
fn test_status_reports_outside_repository() {
    let temp = TempDir::new().unwrap();

    stagecheck()
        .current_dir(temp.path())
        .arg("status")
        .assert()
        .success()
        .stdout(predicate::str::contains("not inside a git repository"));
}
