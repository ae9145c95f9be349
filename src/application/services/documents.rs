//! Output document rendering
//!
//! Pure functions from finished teams to named documents. Nothing here
//! touches the filesystem; the league service decides where documents
//! land, and tests assert on content directly.

use std::collections::BTreeMap;

use itertools::Itertools;

use crate::domain::{DomainError, PlayerRecord, Team};

/// A rendered output artifact not yet written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub filename: String,
    pub content: String,
}

/// Immutable rendering inputs shared by all documents: when each team
/// practices, where, and who signs the letters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LeagueTemplate {
    /// Team name to first-practice date/time
    pub schedule: BTreeMap<String, String>,
    pub stadium: String,
    pub coach: String,
}

impl LeagueTemplate {
    fn practice_time(&self, team: &str) -> Result<&str, DomainError> {
        self.schedule
            .get(team)
            .map(String::as_str)
            .ok_or_else(|| DomainError::ScheduleNotFound(team.to_string()))
    }
}

/// `<teamname-lowercased>_roster.txt`
pub fn roster_filename(team_name: &str) -> String {
    format!("{}_roster.txt", team_name.to_lowercase())
}

/// `player_<name-with-spaces-as-underscores-lowercased>.txt`
pub fn letter_filename(player_name: &str) -> String {
    let slug = player_name
        .split_whitespace()
        .map(str::to_lowercase)
        .join("_");
    format!("player_{}.txt", slug)
}

/// Render a team's roster sheet: practice slot, stats, and every player
/// in assignment order.
pub fn team_roster(team: &Team, template: &LeagueTemplate) -> Result<Document, DomainError> {
    let practice = template.practice_time(team.name())?;

    let mut content = format!("\n\n\t\t\tSoccer League -- Team {} Roster\n\n", team.name());
    content.push_str(&format!("\tFirst Practice:\t{}\n\n", practice));
    content.push_str(&format!(
        "\tStats:\t\tNumber of players: {}, Average Height (inches): {:.2}\n\n",
        team.len(),
        team.average_height()
    ));
    content.push_str("\tPlayers:\n");
    for player in team.players() {
        content.push_str(&format!("\t\tName: {}\n", player.name));
        content.push_str(&format!(
            "\t\t\tExperienced: {}, Height: {}, Guardian(s): {}\n",
            player.experience_label(),
            player.height_inches,
            player.guardians
        ));
    }

    Ok(Document {
        filename: roster_filename(team.name()),
        content,
    })
}

/// Render the welcome letter for one player on a team.
pub fn player_letter(
    team_name: &str,
    player: &PlayerRecord,
    template: &LeagueTemplate,
) -> Result<Document, DomainError> {
    let practice = template.practice_time(team_name)?;

    let mut content = format!("\n\n\t\t\tSoccer League -- Team {}\n\n", team_name);
    content.push_str(&format!("Dear {},\n\n", player.guardians));
    content.push_str(&format!(
        "We would like to welcome you and {} to the Soccer League.\n",
        player.name
    ));
    content.push_str(&format!(
        "This year, {} will be playing on Team {}.\n",
        player.first_name(),
        team_name
    ));
    content.push_str(&format!(
        "The first practice will be on {} at {}.\n",
        practice, template.stadium
    ));
    content.push_str(&format!(
        "\n\nWe look forward to another great year!\n\nRegards, {}.\n",
        template.coach
    ));

    Ok(Document {
        filename: letter_filename(&player.name),
        content,
    })
}

/// Render letters for every player on a team, in assignment order.
pub fn player_letters(team: &Team, template: &LeagueTemplate) -> Result<Vec<Document>, DomainError> {
    team.players()
        .iter()
        .map(|player| player_letter(team.name(), player, template))
        .collect()
}

/// Render the full season output: one roster per team, one letter per
/// player on every team.
pub fn season_documents(
    teams: &[Team],
    template: &LeagueTemplate,
) -> Result<Vec<Document>, DomainError> {
    let mut documents = Vec::new();
    for team in teams {
        documents.push(team_roster(team, template)?);
        documents.extend(player_letters(team, template)?);
    }
    Ok(documents)
}
