//! End-to-end tests for LeagueService

use std::path::PathBuf;
use std::sync::Arc;

use tempfile::TempDir;

use teamforge::application::services::LeagueService;
use teamforge::application::ApplicationError;
use teamforge::config::Settings;
use teamforge::domain::DomainError;
use teamforge::infrastructure::traits::RealFileSystem;
use teamforge::util::testing;

const ROSTER: &str = "\
Name,Guardian Name(s),Soccer Experience,Height (inches)
Joe Smith,Jim and Jan Smith,YES,42
Jill Tanner,Clara Tanner,YES,36
Bill Bon,Sara and Jenny Bon,NO,43
Eva Gordon,Wendy and Mike Gordon,NO,45
Matt Gill,Charles and Sylvia Gill,NO,40
Kimmy Stein,Bill and Hillary Stein,NO,41
Sammy Adams,Jeff Adams and Gary Walsh,NO,45
Karl Saygan,Heather Bledsoe,YES,42
Joe Kavalier,Sam and Elaine Kavalier,NO,39
";

fn write_roster(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("players.csv");
    std::fs::write(&path, ROSTER).expect("write roster");
    path
}

fn league(temp: &TempDir) -> LeagueService {
    testing::init_test_setup();
    let settings = Settings {
        roster_file: temp.path().join("players.csv"),
        output_dir: temp.path().join("out"),
        ..Settings::default()
    };
    LeagueService::new(Arc::new(settings), Arc::new(RealFileSystem))
}

#[test]
fn given_roster_when_building_season_then_all_files_on_disk() {
    // Arrange
    let temp = TempDir::new().unwrap();
    write_roster(&temp);
    let service = league(&temp);

    // Act
    let report = service.build_season(None, None).unwrap();

    // Assert - 3 rosters + 9 letters
    assert_eq!(report.files_written.len(), 12);
    let out = temp.path().join("out");
    for name in ["dragons_roster.txt", "sharks_roster.txt", "raptors_roster.txt"] {
        assert!(out.join(name).is_file(), "missing {name}");
    }
    assert!(out.join("player_joe_smith.txt").is_file());
    assert!(out.join("player_sammy_adams.txt").is_file());

    // Every player appears on exactly one team.
    let total: usize = report.teams.iter().map(|t| t.len()).sum();
    assert_eq!(total, 9);
}

#[test]
fn given_built_season_when_reading_roster_file_then_contents_match_team() {
    // Arrange
    let temp = TempDir::new().unwrap();
    write_roster(&temp);
    let service = league(&temp);

    // Act
    let report = service.build_season(None, None).unwrap();

    // Assert
    let dragons = report
        .teams
        .iter()
        .find(|t| t.name() == "Dragons")
        .unwrap();
    let content =
        std::fs::read_to_string(temp.path().join("out").join("dragons_roster.txt")).unwrap();
    assert!(content.contains("Soccer League -- Team Dragons Roster"));
    assert!(content.contains("First Practice:\tMarch 17, 2016 @ 1:00PM"));
    assert!(content.contains(&format!("Number of players: {}", dragons.len())));
    for player in dragons.players() {
        assert!(content.contains(&format!("Name: {}", player.name)));
    }
}

#[test]
fn given_built_season_when_reading_letter_then_letter_names_assigned_team() {
    // Arrange
    let temp = TempDir::new().unwrap();
    write_roster(&temp);
    let service = league(&temp);

    // Act
    let report = service.build_season(None, None).unwrap();

    // Assert - Jill Tanner's letter references the team she landed on
    let team = report
        .teams
        .iter()
        .find(|t| t.players().iter().any(|p| p.name == "Jill Tanner"))
        .unwrap();
    let content =
        std::fs::read_to_string(temp.path().join("out").join("player_jill_tanner.txt")).unwrap();
    assert!(content.contains(&format!("Team {}", team.name())));
    assert!(content.contains("Dear Clara Tanner,"));
    assert!(content.contains("This year, Jill will be playing"));
}

#[test]
fn given_roster_argument_when_building_then_overrides_configured_path() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let roster = temp.path().join("spring.csv");
    std::fs::write(&roster, ROSTER).unwrap();
    let service = league(&temp); // configured roster does not exist

    // Act
    let report = service.build_season(Some(&roster), None).unwrap();

    // Assert
    assert_eq!(report.files_written.len(), 12);
}

#[test]
fn given_malformed_height_when_building_then_fails_before_any_write() {
    // Arrange
    let temp = TempDir::new().unwrap();
    let roster = temp.path().join("players.csv");
    std::fs::write(
        &roster,
        "\
Name,Guardian Name(s),Soccer Experience,Height (inches)
Joe Smith,Jim and Jan Smith,YES,abc
",
    )
    .unwrap();
    let service = league(&temp);

    // Act
    let err = service.build_season(None, None).unwrap_err();

    // Assert
    match err {
        ApplicationError::Domain(DomainError::InvalidHeight { row, ref value }) => {
            assert_eq!(row, 1);
            assert_eq!(value, "abc");
        }
        ref other => panic!("unexpected error: {other}"),
    }
    assert!(!temp.path().join("out").exists());
}

#[test]
fn given_preview_when_called_then_no_files_written() {
    // Arrange
    let temp = TempDir::new().unwrap();
    write_roster(&temp);
    let service = league(&temp);

    // Act
    let teams = service.preview(None).unwrap();

    // Assert
    assert_eq!(teams.len(), 3);
    assert!(!temp.path().join("out").exists());
}

#[test]
fn given_check_when_called_then_stats_reported() {
    // Arrange
    let temp = TempDir::new().unwrap();
    write_roster(&temp);
    let service = league(&temp);

    // Act
    let stats = service.check(None).unwrap();

    // Assert
    assert_eq!(stats.rows, 9);
    assert_eq!(stats.experienced, 3);
    assert_eq!(stats.novice, 6);
}

#[test]
fn given_same_roster_twice_when_building_then_identical_assignment() {
    // Arrange
    let temp = TempDir::new().unwrap();
    write_roster(&temp);
    let service = league(&temp);

    // Act
    let first = service.build_season(None, None).unwrap();
    let second = service.build_season(None, None).unwrap();

    // Assert
    assert_eq!(first.teams, second.teams);
}
