//! Integration tests for the starplay CLI

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

use super::helpers::run_starplay;

// ============================================================================
// Help and version
// ============================================================================

#[test]
fn help_lists_subcommands() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_starplay(home.path(), &["--help"]);

    assert_eq!(exit_code, 0);
    for name in ["play", "favorites", "config", "completions"] {
        assert!(stdout.contains(name), "missing {name} in:\n{stdout}");
    }
}

#[test]
fn play_help_shows_options() {
    let home = TempDir::new().unwrap();
    let (stdout, _stderr, exit_code) = run_starplay(home.path(), &["play", "--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("--title"));
    assert!(stdout.contains("--movie"));
    assert!(stdout.contains("<SECONDS>"));
}

#[test]
fn version_prints_package_version() {
    Command::cargo_bin("starplay")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn play_rejects_non_positive_length() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_starplay(home.path(), &["play", "--length", "0"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("length"));
}

#[test]
fn play_reports_missing_movie_file_after_loading_config() {
    let home = TempDir::new().unwrap();
    let missing = home.path().join("missing.toml");

    let (_stdout, stderr, exit_code) = run_starplay(
        home.path(),
        &["play", "--movie", missing.to_str().unwrap()],
    );

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("Failed to read movie file"));
    assert!(home.path().join("starplay.log").exists());
}

#[test]
fn play_refuses_invalid_player_config() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[player]\nvolume_step = 0\n",
    )
    .unwrap();

    let (_stdout, stderr, exit_code) = run_starplay(home.path(), &["play"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("volume_step"));
}

// ============================================================================
// Favorites
// ============================================================================

#[test]
fn favorites_round_trip_through_the_binary() {
    let home = TempDir::new().unwrap();

    let (stdout, _, code) = run_starplay(home.path(), &["favorites", "list"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No favorites yet."));

    let (stdout, _, code) = run_starplay(home.path(), &["favorites", "add", "7"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Added movie 7 to favorites"));

    let (stdout, _, _) = run_starplay(home.path(), &["favorites", "add", "7"]);
    assert!(stdout.contains("Favorites unchanged for movie 7"));

    run_starplay(home.path(), &["favorites", "add", "3"]);
    let (stdout, _, _) = run_starplay(home.path(), &["favorites", "list"]);
    assert_eq!(stdout.lines().collect::<Vec<_>>(), vec!["7", "3"]);

    let (stdout, _, _) = run_starplay(home.path(), &["favorites", "toggle", "7"]);
    assert!(stdout.contains("Removed movie 7 from favorites"));

    let stored = fs::read_to_string(home.path().join("favorites.json")).unwrap();
    let value: serde_json::Value = serde_json::from_str(&stored).unwrap();
    assert_eq!(value["starVideoFavorites"], serde_json::json!([3]));
}

#[test]
fn favorites_rejects_non_numeric_id() {
    let home = TempDir::new().unwrap();
    let (_stdout, stderr, exit_code) = run_starplay(home.path(), &["favorites", "add", "abc"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("abc"));
}

#[test]
fn corrupt_favorites_file_fails_with_message() {
    let home = TempDir::new().unwrap();
    fs::write(home.path().join("favorites.json"), "{not json").unwrap();

    let (_stdout, stderr, exit_code) = run_starplay(home.path(), &["favorites", "list"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("favorites.json"));
}

// ============================================================================
// Config
// ============================================================================

#[test]
fn config_path_lives_under_home_override() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_starplay(home.path(), &["config", "path"]);

    assert_eq!(code, 0);
    let expected = home.path().join("config.toml");
    assert_eq!(stdout.trim(), expected.display().to_string());
}

#[test]
fn config_show_prints_defaults() {
    let home = TempDir::new().unwrap();
    let (stdout, _, code) = run_starplay(home.path(), &["config", "show"]);

    assert_eq!(code, 0);
    assert!(stdout.contains("[player]"));
    assert!(stdout.contains("skip_seconds = 10.0"));
    assert!(stdout.contains("controls_hide_ms = 3000"));
}

#[test]
fn config_init_creates_file_once() {
    let home = TempDir::new().unwrap();
    let path = home.path().join("config.toml");

    let (stdout, _, code) = run_starplay(home.path(), &["config", "init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("Created"));
    assert!(path.exists());

    let (stdout, _, code) = run_starplay(home.path(), &["config", "init"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("already exists"));
}

#[test]
fn config_show_reports_invalid_values() {
    let home = TempDir::new().unwrap();
    fs::write(
        home.path().join("config.toml"),
        "[player]\nskip_seconds = -5.0\n",
    )
    .unwrap();

    let (_stdout, stderr, exit_code) = run_starplay(home.path(), &["config", "show"]);

    assert_eq!(exit_code, 1);
    assert!(stderr.contains("skip_seconds"));
}

// ============================================================================
// Completions
// ============================================================================

#[test]
fn completions_for_bash() {
    let home = TempDir::new().unwrap();
    Command::cargo_bin("starplay")
        .unwrap()
        .args(["completions", "bash"])
        .env("STARPLAY_HOME", home.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("_starplay"));
}
