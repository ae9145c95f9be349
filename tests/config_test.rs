//! Integration tests for Settings config loading.
//!
//! These tests run without a global config (temp directories only), so
//! they exercise local-file merging with compiled defaults.

use std::path::PathBuf;

use tempfile::TempDir;

use teamforge::config::Settings;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("league.toml");
    std::fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_no_config_when_loading_then_classic_defaults() {
    // Act
    let settings = Settings::load(None).expect("load defaults");

    // Assert
    assert_eq!(settings.roster_file, PathBuf::from("soccer_players.csv"));
    assert_eq!(settings.output_dir, PathBuf::from("."));
    assert_eq!(settings.team_names(), vec!["Dragons", "Sharks", "Raptors"]);
    assert_eq!(settings.stadium, "Treehouse Stadium");
    assert_eq!(settings.coach, "Coach Kicks");
}

#[test]
fn given_local_config_when_loading_then_overrides_scalars() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"
roster_file = "spring_signups.csv"
coach = "Coach Boot"
"#,
    );

    // Act
    let settings = Settings::load(Some(&path)).unwrap();

    // Assert - overridden fields win, the rest stay at defaults
    assert_eq!(settings.roster_file, PathBuf::from("spring_signups.csv"));
    assert_eq!(settings.coach, "Coach Boot");
    assert_eq!(settings.stadium, "Treehouse Stadium");
    assert_eq!(settings.team_names(), vec!["Dragons", "Sharks", "Raptors"]);
}

#[test]
fn given_local_teams_when_loading_then_replace_default_league() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"
[[teams]]
name = "Foxes"
first_practice = "April 1, 2016 @ 9:00AM"

[[teams]]
name = "Owls"
first_practice = "April 1, 2016 @ 11:00AM"

[[teams]]
name = "Bears"
first_practice = "April 2, 2016 @ 9:00AM"
"#,
    );

    // Act
    let settings = Settings::load(Some(&path)).unwrap();

    // Assert
    assert_eq!(settings.team_names(), vec!["Foxes", "Owls", "Bears"]);
    let template = settings.league_template();
    assert_eq!(
        template.schedule.get("Owls").map(String::as_str),
        Some("April 1, 2016 @ 11:00AM")
    );
}

#[test]
fn given_wrong_team_count_when_loading_then_config_error() {
    // Arrange - two teams is not a league
    let temp = TempDir::new().unwrap();
    let path = write_config(
        &temp,
        r#"
[[teams]]
name = "Foxes"
first_practice = "April 1, 2016 @ 9:00AM"

[[teams]]
name = "Owls"
first_practice = "April 1, 2016 @ 11:00AM"
"#,
    );

    // Act
    let err = Settings::load(Some(&path)).unwrap_err();

    // Assert
    assert!(err.to_string().contains("exactly 3 teams"));
}

#[test]
fn given_missing_explicit_config_when_loading_then_error() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("nope.toml");

    let err = Settings::load(Some(&missing)).unwrap_err();

    assert!(err.to_string().contains("config file not found"));
}

#[test]
fn given_malformed_toml_when_loading_then_parse_error_names_file() {
    let temp = TempDir::new().unwrap();
    let path = write_config(&temp, "teams = 3");

    let err = Settings::load(Some(&path)).unwrap_err();

    assert!(err.to_string().contains("league.toml"));
}
