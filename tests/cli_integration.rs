//! Integration tests for the safebranch CLI.
//!
//! These tests run the real binary. Each test points HOME, XDG_CONFIG_HOME
//! and the working directory at a temp dir so no user config leaks in.

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

// =============================================================================
// Test Fixtures
// =============================================================================

/// Isolated environment for one CLI invocation.
struct TestEnv {
    dir: TempDir,
}

impl TestEnv {
    fn new() -> Self {
        Self {
            dir: TempDir::new().expect("failed to create temp dir"),
        }
    }

    /// Write a project config file.
    fn project_config(&self, contents: &str) {
        self.dir.child(".safebranch.toml").write_str(contents).unwrap();
    }

    /// A safebranch command running inside this environment.
    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("safebranch").unwrap();
        cmd.current_dir(self.dir.path())
            .env("HOME", self.dir.path())
            .env("XDG_CONFIG_HOME", self.dir.path().join("xdg"))
            .env_remove("SAFEBRANCH_CONFIG")
            .env_remove("GITHUB_OUTPUT");
        cmd
    }
}

// =============================================================================
// normalize
// =============================================================================

#[test]
fn normalize_prints_slug_on_stdout() {
    let env = TestEnv::new();
    env.cmd()
        .args(["normalize", "Feature/ABC-123", "--strip-prefix", "Feature/"])
        .assert()
        .success()
        .stdout("abc-123\n")
        .stderr(predicate::str::contains(
            "Multi-dev safe branch name abc-123 [from Feature/ABC-123]",
        ));
}

#[test]
fn normalize_quiet_suppresses_summary() {
    let env = TestEnv::new();
    env.cmd()
        .args(["normalize", "123-build", "--safe-prefix", "z", "-q"])
        .assert()
        .success()
        .stdout("z123-build\n")
        .stderr("");
}

#[test]
fn normalize_accepts_hyphen_branch() {
    let env = TestEnv::new();
    env.cmd()
        .args(["-q", "normalize", "--safe-prefix", "q", "---"])
        .assert()
        .success()
        .stdout("q\n");
}

#[test]
fn normalize_empty_branch() {
    let env = TestEnv::new();
    env.cmd()
        .args(["-q", "normalize", ""])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn normalize_json() {
    let env = TestEnv::new();
    env.cmd()
        .args([
            "-q",
            "normalize",
            "feat/long-branch-name-here",
            "--strip-prefix",
            "feat/",
            "--json",
        ])
        .assert()
        .success()
        .stdout("{\"branch_name\":\"long-branch\",\"source\":\"feat/long-branch-name-here\"}\n");
}

#[test]
fn normalize_uses_project_config() {
    let env = TestEnv::new();
    env.project_config("strip_prefix = \"feature/\"\nsafe_prefix = \"md\"\n");

    env.cmd()
        .args(["-q", "normalize", "feature/42-fix"])
        .assert()
        .success()
        .stdout("md42-fix\n");
}

#[test]
fn normalize_flags_override_config() {
    let env = TestEnv::new();
    env.project_config("strip_prefix = \"feature/\"\nsafe_prefix = \"md\"\n");

    env.cmd()
        .args(["-q", "normalize", "feature/42-fix", "--safe-prefix", "x"])
        .assert()
        .success()
        .stdout("x42-fix\n");
}

#[test]
fn normalize_explicit_config_file() {
    let env = TestEnv::new();
    env.project_config("safe_prefix = \"md\"\n");
    let custom = env.dir.child("ci.toml");
    custom.write_str("safe_prefix = \"ci\"\n").unwrap();

    env.cmd()
        .args(["-q", "--config"])
        .arg(custom.path())
        .args(["normalize", "7up"])
        .assert()
        .success()
        .stdout("ci7up\n");
}

#[test]
fn normalize_global_config_from_home() {
    let env = TestEnv::new();
    env.dir
        .child(".safebranch/config.toml")
        .write_str("safe_prefix = \"home\"\n")
        .unwrap();

    env.cmd()
        .args(["-q", "normalize", "1"])
        .assert()
        .success()
        .stdout("home1\n");
}

#[test]
fn normalize_config_env_beats_home() {
    let env = TestEnv::new();
    env.dir
        .child(".safebranch/config.toml")
        .write_str("safe_prefix = \"home\"\n")
        .unwrap();
    let pinned = env.dir.child("pinned.toml");
    pinned.write_str("safe_prefix = \"env\"\n").unwrap();

    env.cmd()
        .env("SAFEBRANCH_CONFIG", pinned.path())
        .args(["-q", "normalize", "1"])
        .assert()
        .success()
        .stdout("env1\n");
}

#[test]
fn normalize_xdg_config_beats_home() {
    let env = TestEnv::new();
    env.dir
        .child(".safebranch/config.toml")
        .write_str("safe_prefix = \"home\"\n")
        .unwrap();
    env.dir
        .child("xdg/safebranch/config.toml")
        .write_str("safe_prefix = \"xdg\"\n")
        .unwrap();

    env.cmd()
        .args(["-q", "normalize", "1"])
        .assert()
        .success()
        .stdout("xdg1\n");
}

#[test]
fn normalize_project_config_beats_global() {
    let env = TestEnv::new();
    env.dir
        .child("xdg/safebranch/config.toml")
        .write_str("strip_prefix = \"feature/\"\nsafe_prefix = \"xdg\"\n")
        .unwrap();
    env.project_config("safe_prefix = \"proj\"\n");

    // safe_prefix comes from the project file, strip_prefix still from global.
    env.cmd()
        .args(["-q", "normalize", "feature/1"])
        .assert()
        .success()
        .stdout("proj1\n");
}

#[test]
fn normalize_warns_on_non_letter_safe_prefix() {
    let env = TestEnv::new();
    env.cmd()
        .args(["normalize", "123", "--safe-prefix", "9"])
        .assert()
        .success()
        .stdout("9123\n")
        .stderr(predicate::str::contains("warning: safe_prefix '9'"));
}

#[test]
fn normalize_debug_traces_steps() {
    let env = TestEnv::new();
    env.cmd()
        .args(["--debug", "normalize", "a/b"])
        .assert()
        .success()
        .stdout("a-b\n")
        .stderr(predicate::str::contains("[debug] sanitize: \"a-b\""));
}

#[test]
fn invalid_config_fails() {
    let env = TestEnv::new();
    env.project_config("max_length = 20\n");

    env.cmd()
        .args(["normalize", "main"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::starts_with("error: Failed to load config"));
}

// =============================================================================
// check
// =============================================================================

#[test]
fn check_valid_slug() {
    let env = TestEnv::new();
    env.cmd()
        .args(["check", "abc-123"])
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn check_invalid_slug_lists_violations() {
    let env = TestEnv::new();
    env.cmd()
        .args(["check", "1Abc-"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a valid multi-dev slug"))
        .stderr(predicate::str::contains("must start with a lowercase letter"))
        .stderr(predicate::str::contains("cannot end with '-'"));
}

// =============================================================================
// config / completion / help
// =============================================================================

#[test]
fn config_shows_effective_values() {
    let env = TestEnv::new();
    env.project_config("safe_prefix = \"md\"\n");

    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("safe_prefix = \"md\""))
        .stdout(predicate::str::contains("strip_prefix = \"\""))
        .stderr(predicate::str::contains(".safebranch.toml"));
}

#[test]
fn config_defaults_without_files() {
    let env = TestEnv::new();
    env.cmd()
        .arg("config")
        .assert()
        .success()
        .stderr(predicate::str::contains("using defaults"));
}

#[test]
fn completion_bash() {
    let env = TestEnv::new();
    env.cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("safebranch"));
}

#[test]
fn help_flag_works() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("multi-dev"));
}

#[test]
fn version_flag_works() {
    let env = TestEnv::new();
    env.cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("safebranch"));
}
