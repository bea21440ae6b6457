//! Player report assembly.
//!
//! Joins a resolved player with the bootstrap lookup tables and the
//! gameweek-filtered history into the structure both renderings consume.

use serde::Serialize;

use crate::{
    cli::types::{GameweekFilter, PlayerId, PositionId, TeamId},
    fpl::types::{Bootstrap, HistoryEntry, Player, Position, Team},
};

/// Label used whenever a team or position reference cannot be resolved.
pub const UNKNOWN_LABEL: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerReport {
    pub player: PlayerSummaryInfo,
    pub gameweeks: Vec<HistoryRow>,
    pub totals: HistoryTotals,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerSummaryInfo {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: String,
    /// Price in millions.
    pub cost: f64,
    pub form: String,
    pub ict_index: String,
    pub selected_by_percent: String,
    pub total_points: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub round: u16,
    pub opponent: String,
    pub home: bool,
    pub minutes: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub points: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct HistoryTotals {
    pub gameweeks: Vec<u16>,
    pub matches: u32,
    pub minutes: u32,
    pub goals: u32,
    pub assists: u32,
    pub clean_sheets: u32,
    pub points: i32,
}

impl HistoryTotals {
    fn add(&mut self, entry: &HistoryEntry) {
        self.gameweeks.push(entry.round);
        self.matches += 1;
        self.minutes += entry.minutes;
        self.goals += entry.goals_scored;
        self.assists += entry.assists;
        self.clean_sheets += entry.clean_sheets;
        self.points += entry.total_points;
    }
}

pub fn find_player(players: &[Player], id: PlayerId) -> Option<&Player> {
    players.iter().find(|p| p.id == id)
}

pub fn find_team(teams: &[Team], id: TeamId) -> Option<&Team> {
    teams.iter().find(|t| t.id == id)
}

pub fn find_position(positions: &[Position], id: PositionId) -> Option<&Position> {
    positions.iter().find(|p| p.id == id)
}

fn team_label(team: Option<&Team>) -> String {
    team.map(|t| format!("{} ({})", t.name, t.short_name))
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

fn position_label(position: Option<&Position>) -> String {
    position
        .map(|p| p.singular_name.clone())
        .unwrap_or_else(|| UNKNOWN_LABEL.to_string())
}

/// `"<short name> (H)"` or `"<short name> (A)"`.
pub fn opponent_label(entry: &HistoryEntry, teams: &[Team]) -> String {
    let name = find_team(teams, entry.opponent_team)
        .map(|t| t.short_name.as_str())
        .unwrap_or(UNKNOWN_LABEL);
    let venue = if entry.was_home { "H" } else { "A" };
    format!("{} ({})", name, venue)
}

/// Build the report for `player` from its history, keeping only gameweeks
/// the filter admits, in ascending round order.
pub fn build_player_report(
    player: &Player,
    bootstrap: &Bootstrap,
    history: &[HistoryEntry],
    filter: &GameweekFilter,
) -> PlayerReport {
    let mut filtered: Vec<&HistoryEntry> = history
        .iter()
        .filter(|entry| filter.includes(entry.round))
        .collect();
    filtered.sort_by_key(|entry| entry.round);

    let mut totals = HistoryTotals::default();
    let gameweeks = filtered
        .into_iter()
        .map(|entry| {
            totals.add(entry);
            HistoryRow {
                round: entry.round,
                opponent: opponent_label(entry, &bootstrap.teams),
                home: entry.was_home,
                minutes: entry.minutes,
                goals: entry.goals_scored,
                assists: entry.assists,
                clean_sheets: entry.clean_sheets,
                points: entry.total_points,
            }
        })
        .collect();

    PlayerReport {
        player: PlayerSummaryInfo {
            id: player.id,
            name: player.display_name(),
            team: team_label(find_team(&bootstrap.teams, player.team)),
            position: position_label(find_position(&bootstrap.positions, player.position)),
            cost: f64::from(player.now_cost) / 10.0,
            form: player.form.clone(),
            ict_index: player.ict_index.clone(),
            selected_by_percent: player.selected_by.clone(),
            total_points: player.total_points,
        },
        gameweeks,
        totals,
    }
}
