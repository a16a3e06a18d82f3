//! End-to-end tests for the trellis binary.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn trellis_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("trellis").unwrap();
    cmd.current_dir(dir)
        .env_remove("TRELLIS_PROFILE")
        .env_remove("TRELLIS_BASE")
        .env_remove("TRELLIS_SOURCEMAP")
        .env_remove("TRELLIS_ASSETS_DIR")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR");
    cmd
}

const VALID_CONFIG: &str = r#"
base = "/app/"

[[plugins]]
name = "vue"

[optimizeDeps]
include = ["schart.js"]

[resolve.alias]
"@" = "/src"
"~" = "/src/assets"

[define]
__FLAG__ = "true"

[build]
sourcemap = false

[profiles.production.build]
sourcemap = true

[profiles.production.build.manualChunks]
vendor = ["schart.js"]
"#;

#[test]
fn check_accepts_valid_config() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trellis.toml"), VALID_CONFIG).unwrap();

    trellis_in(dir.path())
        .arg("check")
        .assert()
        .success()
        .stderr(predicate::str::contains("configuration is valid"));
}

#[test]
fn check_fails_without_config() {
    let dir = TempDir::new().unwrap();

    trellis_in(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("config not found"));
}

#[test]
fn check_rejects_invalid_base() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trellis.toml"), "base = \"app\"\n").unwrap();

    trellis_in(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid base path"));
}

#[test]
fn check_rejects_unknown_plugin() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("trellis.toml"),
        "[[plugins]]\nname = \"svelte\"\n",
    )
    .unwrap();

    trellis_in(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown plugin"));
}

#[test]
fn check_rejects_module_in_two_chunks() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("trellis.toml"),
        r#"
[build.manualChunks]
vendor = ["vue"]
other = ["vue"]
"#,
    )
    .unwrap();

    trellis_in(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("listed in both chunk"));
}

#[test]
fn check_rejects_duplicate_alias_in_json_config() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("trellis.config.json"),
        r#"{ "resolve": { "alias": { "@": "/src", "@": "/other" } } }"#,
    )
    .unwrap();

    trellis_in(dir.path())
        .arg("check")
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate alias key"));
}

#[test]
fn check_paths_flag_validates_alias_targets() {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("src")).unwrap();
    fs::write(
        dir.path().join("trellis.toml"),
        "[resolve.alias]\n\"@\" = \"/src\"\n",
    )
    .unwrap();

    trellis_in(dir.path()).args(["check", "--paths"]).assert().success();

    fs::write(
        dir.path().join("trellis.toml"),
        "[resolve.alias]\n\"@\" = \"/missing\"\n",
    )
    .unwrap();

    trellis_in(dir.path())
        .args(["check", "--paths"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("alias target not found"));
}

#[test]
fn resolve_prints_normalized_json() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trellis.toml"), VALID_CONFIG).unwrap();

    trellis_in(dir.path())
        .args(["resolve", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"basePath\": \"/app/\""))
        .stdout(predicate::str::contains("\"@\": \"/src\""));
}

#[test]
fn resolve_profile_flag_merges_overrides() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trellis.toml"), VALID_CONFIG).unwrap();

    trellis_in(dir.path())
        .args(["resolve", "--json", "--profile", "production"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sourcemap\": true"))
        .stdout(predicate::str::contains("\"vendor\""));
}

#[test]
fn resolve_unknown_profile_fails() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trellis.toml"), VALID_CONFIG).unwrap();

    trellis_in(dir.path())
        .args(["resolve", "--profile", "staging"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("profile 'staging' not found"));
}

#[test]
fn env_variable_selects_profile() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trellis.toml"), VALID_CONFIG).unwrap();

    trellis_in(dir.path())
        .args(["resolve", "--json"])
        .env("TRELLIS_PROFILE", "production")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"sourcemap\": true"));
}

#[test]
fn cli_flag_wins_over_env_variable() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("trellis.toml"), VALID_CONFIG).unwrap();

    trellis_in(dir.path())
        .args(["resolve", "--json", "--base", "/cli/"])
        .env("TRELLIS_BASE", "/env/")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"basePath\": \"/cli/\""));
}

#[test]
fn init_writes_starter_that_passes_check() {
    let dir = TempDir::new().unwrap();

    trellis_in(dir.path()).arg("init").assert().success();
    assert!(dir.path().join("trellis.toml").exists());

    trellis_in(dir.path()).arg("check").assert().success();
}

#[test]
fn init_refuses_to_overwrite_without_force() {
    let dir = TempDir::new().unwrap();

    trellis_in(dir.path()).arg("init").assert().success();
    trellis_in(dir.path())
        .arg("init")
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));

    trellis_in(dir.path()).args(["init", "--force"]).assert().success();
}

#[test]
fn schema_prints_document_schema() {
    let dir = TempDir::new().unwrap();

    trellis_in(dir.path())
        .arg("schema")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"properties\""));
}

#[test]
fn explicit_config_path_is_used() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("custom.toml"), VALID_CONFIG).unwrap();

    trellis_in(dir.path())
        .args(["check", "--config", "custom.toml"])
        .assert()
        .success();
}
