//! Greedy height-balancing team assignment
//!
//! Players are split by experience, each group is sorted tallest-first,
//! and the groups are handed out round-robin: before every round the
//! teams are re-sorted by current average height so the shortest team
//! picks first. Experienced players are distributed before novices, so
//! each group is balanced on its own and no team is starved of
//! experienced players.

use std::collections::VecDeque;

use tracing::debug;

use crate::domain::{DomainError, PlayerRecord, Team};

/// Number of teams in the league.
pub const TEAM_COUNT: usize = 3;

/// Partition `players` into one team per name, balanced by average height
/// within each experience group.
///
/// The input may be empty (three empty teams come back, average height
/// 0.0 each). `team_names` must hold exactly [`TEAM_COUNT`] distinct,
/// non-empty names.
///
/// Deterministic: the same input always produces the same team
/// compositions. All sorts are stable, so equal heights keep their
/// roster order and equal team averages keep their prior team order.
pub fn balance(players: Vec<PlayerRecord>, team_names: &[String]) -> Result<Vec<Team>, DomainError> {
    validate_team_names(team_names)?;

    let mut teams: Vec<Team> = team_names.iter().map(Team::new).collect();

    let (mut experienced, mut novice): (Vec<_>, Vec<_>) =
        players.into_iter().partition(|p| p.experienced);
    debug!(
        "balance: {} experienced, {} novice",
        experienced.len(),
        novice.len()
    );

    sort_tallest_first(&mut experienced);
    sort_tallest_first(&mut novice);

    distribute(&mut teams, experienced);
    distribute(&mut teams, novice);

    Ok(teams)
}

fn validate_team_names(team_names: &[String]) -> Result<(), DomainError> {
    if team_names.len() != TEAM_COUNT {
        return Err(DomainError::TeamCount(team_names.len()));
    }
    for (i, name) in team_names.iter().enumerate() {
        if name.trim().is_empty() {
            return Err(DomainError::EmptyTeamName);
        }
        if team_names[..i].contains(name) {
            return Err(DomainError::DuplicateTeamName(name.clone()));
        }
    }
    Ok(())
}

/// Stable: equal heights keep their roster order.
fn sort_tallest_first(players: &mut [PlayerRecord]) {
    players.sort_by(|a, b| b.height_inches.cmp(&a.height_inches));
}

/// Hand out players in rounds. Before each round the teams are
/// stable-sorted by current average height ascending, then each team in
/// that order takes the next (tallest remaining) player. The final round
/// may be partial.
fn distribute(teams: &mut [Team], players: Vec<PlayerRecord>) {
    let mut remaining = VecDeque::from(players);
    while !remaining.is_empty() {
        teams.sort_by(|a, b| a.average_height().total_cmp(&b.average_height()));
        for team in teams.iter_mut() {
            match remaining.pop_front() {
                Some(player) => team.push(player),
                None => break,
            }
        }
    }
}
