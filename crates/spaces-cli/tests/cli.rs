//! End-to-end tests for the `spaces` binary.
//!
//! Every run gets its own temp dir as HOME / XDG dirs and an explicit
//! `--data` file, so nothing leaks between tests or from the host.

use std::path::{Path, PathBuf};

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use spaces_adapters::{JsonFileSpaceStore, Snapshot};
use spaces_core::domain::SpaceId;
use spaces_core::prelude::SpaceStore;

struct Sandbox {
    dir: TempDir,
    data: PathBuf,
}

impl Sandbox {
    /// A sandbox whose data file holds the demo snapshot.
    fn seeded() -> Self {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("spaces.json");
        Snapshot::demo().save(&data).unwrap();
        Self { dir, data }
    }

    /// A sandbox with no data file yet.
    fn empty() -> Self {
        let dir = TempDir::new().unwrap();
        let data = dir.path().join("spaces.json");
        Self { dir, data }
    }

    fn home(&self) -> &Path {
        self.dir.path()
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("spaces").unwrap();
        cmd.current_dir(self.home())
            .env("HOME", self.home())
            .env("XDG_CONFIG_HOME", self.home().join("config"))
            .env("XDG_DATA_HOME", self.home().join("data"))
            .env_remove("RUST_LOG")
            .env_remove("SPACES_IDENTITY__USER")
            .env_remove("SPACES_STORE__DATA_FILE")
            .arg("--data")
            .arg(&self.data);
        cmd
    }

    fn still_has(&self, id: &str) -> bool {
        let store = JsonFileSpaceStore::open(&self.data).unwrap();
        store.fetch_by_id(&SpaceId::from(id)).is_some()
    }
}

// ── basics ────────────────────────────────────────────────────────────────────

#[test]
fn test_help_flag() {
    let sandbox = Sandbox::empty();
    sandbox
        .cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("delete"))
        .stdout(predicate::str::contains("play-next"));
}

#[test]
fn test_version_flag() {
    let sandbox = Sandbox::empty();
    sandbox
        .cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_unknown_subcommand_is_usage_error() {
    let sandbox = Sandbox::empty();
    sandbox.cmd().arg("explode").assert().code(2);
}

// ── delete ────────────────────────────────────────────────────────────────────

#[test]
fn test_delete_empty_owned_space() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["delete", "alice-scratch", "--as", "alice", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("deleted"));

    assert!(!sandbox.still_has("alice-scratch"));
}

#[test]
fn test_delete_unknown_space_is_not_found() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["delete", "nobody-home", "--as", "alice", "--yes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("cannot be fetched"));
}

#[test]
fn test_delete_someone_elses_space_is_refused() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["delete", "bob-archive", "--as", "alice", "--yes"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("only owned spaces"));

    assert!(sandbox.still_has("bob-archive"));
}

#[test]
fn test_delete_non_empty_space_is_refused() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["delete", "alice-projects", "--as", "alice", "--yes"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("only empty spaces"));

    assert!(sandbox.still_has("alice-projects"));
}

#[test]
fn test_delete_default_space_is_refused() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["delete", "alice-default", "--as", "alice", "--yes"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("default space cannot be removed"));

    assert!(sandbox.still_has("alice-default"));
}

#[test]
fn test_delete_without_identity_is_usage_error() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["delete", "alice-scratch", "--yes"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--as"));
}

#[test]
fn test_delete_uses_identity_from_environment() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .env("SPACES_IDENTITY__USER", "bob")
        .args(["delete", "bob-archive", "--yes"])
        .assert()
        .success();

    assert!(!sandbox.still_has("bob-archive"));
}

#[test]
fn test_dry_run_keeps_the_space() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["delete", "alice-scratch", "--as", "alice", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("can be deleted"));

    assert!(sandbox.still_has("alice-scratch"));
}

#[test]
fn test_declined_prompt_cancels() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["delete", "alice-scratch", "--as", "alice"])
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cancelled"));

    assert!(sandbox.still_has("alice-scratch"));
}

#[test]
fn test_quiet_delete_still_asks_for_confirmation() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .env("SPACES_IDENTITY__USER", "alice")
        .args(["-q", "delete", "alice-scratch"])
        .write_stdin("n\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cancelled"));

    assert!(sandbox.still_has("alice-scratch"));
}

#[test]
fn test_quiet_delete_with_yes_removes_silently() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["-q", "delete", "alice-scratch", "--as", "alice", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(!sandbox.still_has("alice-scratch"));
}

#[test]
fn test_second_delete_is_not_found() {
    let sandbox = Sandbox::seeded();
    let args = ["delete", "alice-scratch", "--as", "alice", "--yes"];

    sandbox.cmd().args(args).assert().success();
    sandbox.cmd().args(args).assert().code(3);
}

#[test]
fn test_missing_data_file_is_configuration_error() {
    let sandbox = Sandbox::empty();
    sandbox
        .cmd()
        .args(["delete", "alice-scratch", "--as", "alice", "--yes"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("spaces init"));
}

// ── list ──────────────────────────────────────────────────────────────────────

#[test]
fn test_list_ids_for_one_owner() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["list", "--owner", "bob", "--format", "list"])
        .assert()
        .success()
        .stdout("bob-default\nbob-archive\n");
}

#[test]
fn test_list_json_is_parseable() {
    let sandbox = Sandbox::seeded();
    let output = sandbox
        .cmd()
        .args(["list", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed.as_array().map(Vec::len), Some(5));
}

#[test]
fn test_list_table_marks_defaults() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alice-projects"))
        .stdout(predicate::str::contains("(default)"));
}

// ── play-next ─────────────────────────────────────────────────────────────────

#[test]
fn test_play_next_prints_following_video() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["play-next", "intro"])
        .assert()
        .success()
        .stdout("chapter-1\n");
}

#[test]
fn test_play_next_after_last_video() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["play-next", "outro"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to play"));
}

#[test]
fn test_play_next_empty_video_is_usage_error() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["play-next", ""])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid video id"));
}

#[test]
fn test_list_without_config_file_uses_defaults() {
    let sandbox = Sandbox::seeded();
    assert!(!sandbox.home().join("config").exists());

    sandbox
        .cmd()
        .args(["list", "--format", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("alice-scratch"));
}

// ── init / config / completions ───────────────────────────────────────────────

#[test]
fn test_init_writes_demo_data() {
    let sandbox = Sandbox::empty();
    sandbox.cmd().arg("init").assert().success();

    assert!(sandbox.still_has("alice-scratch"));
    assert!(sandbox.still_has("bob-default"));
}

#[test]
fn test_init_keeps_existing_data_without_force() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["delete", "alice-scratch", "--as", "alice", "--yes"])
        .assert()
        .success();

    sandbox
        .cmd()
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("--force"));
    assert!(!sandbox.still_has("alice-scratch"));

    sandbox.cmd().args(["init", "--force"]).assert().success();
    assert!(sandbox.still_has("alice-scratch"));
}

#[test]
fn test_config_get_unknown_key() {
    let sandbox = Sandbox::empty();
    sandbox
        .cmd()
        .args(["config", "get", "nope"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("identity.user"));
}

#[test]
fn test_explicit_missing_config_file_fails() {
    let sandbox = Sandbox::seeded();
    sandbox
        .cmd()
        .args(["--config", "absent.toml", "list"])
        .assert()
        .code(4);
}

#[test]
fn test_completions_bash() {
    let sandbox = Sandbox::empty();
    sandbox
        .cmd()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("spaces"));
}
