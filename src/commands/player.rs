//! The `player` command: resolve a player, fetch their history, print a report.
//!
//! A player is selected either by exact ID or by fuzzy name match. The
//! gameweek filter trims the history before totals are computed, and the
//! finished [`PlayerReport`] is rendered as an aligned text table or as
//! indented JSON.

use std::io::{self, Write};

use tracing::{debug, info};

use crate::{
    cli::types::{format_gameweeks, CacheTtl, GameweekFilter, PlayerId},
    error::FplError,
    fpl::{
        http::FplClient,
        report::{build_player_report, find_player, PlayerReport},
        search::{find_player_by_name, should_suggest_alternatives, MatchSuggestion},
        types::Player,
    },
    Result,
};

/// Configuration parameters for the `player` command.
#[derive(Debug, Clone)]
pub struct PlayerParams {
    pub id: Option<PlayerId>,
    pub name: Option<String>,
    pub gameweeks: GameweekFilter,
    pub as_json: bool,
    pub cache_ttl: CacheTtl,
    pub base_url: String,
}

/// How the target player is identified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerLookup {
    Id(PlayerId),
    Name(String),
}

impl PlayerLookup {
    /// Pick the lookup from the raw flags. A positive ID wins over a name;
    /// `--id 0` and blank names count as absent.
    pub fn from_flags(id: Option<PlayerId>, name: Option<&str>) -> Result<Self> {
        if let Some(id) = id.filter(|id| id.as_u32() > 0) {
            return Ok(PlayerLookup::Id(id));
        }
        match name.map(str::trim).filter(|n| !n.is_empty()) {
            Some(name) => Ok(PlayerLookup::Name(name.to_string())),
            None => Err(FplError::InvalidInput {
                message: "either --id or --name must be provided".to_string(),
            }),
        }
    }

    fn query(&self) -> &str {
        match self {
            PlayerLookup::Id(_) => "",
            PlayerLookup::Name(name) => name,
        }
    }
}

/// Run the command and print to stdout.
pub async fn handle_player(params: PlayerParams) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    run_player(params, &mut out).await
}

/// Run the command, writing the rendered report to `out`.
pub async fn run_player<W: Write>(params: PlayerParams, out: &mut W) -> Result<()> {
    let lookup = PlayerLookup::from_flags(params.id, params.name.as_deref())?;

    let mut client = FplClient::new(params.base_url, params.cache_ttl.as_duration())?;
    let bootstrap = client.bootstrap().await?;

    let (player, suggestions) = match &lookup {
        PlayerLookup::Id(id) => {
            let player = find_player(&bootstrap.players, *id)
                .ok_or(FplError::PlayerNotFound { id: id.as_u32() })?;
            (player, Vec::new())
        }
        PlayerLookup::Name(name) => find_player_by_name(name, &bootstrap.players)?,
    };
    info!(player = player.id.as_u32(), name = %player.display_name(), "player resolved");

    let history = client.player_history(player.id).await?;
    let report = build_player_report(player, &bootstrap, &history, &params.gameweeks);
    debug!(
        rows = report.gameweeks.len(),
        filter = %params.gameweeks,
        "report built"
    );

    if params.as_json {
        render_json(&report, out)
    } else {
        render_table(
            &report,
            &suggestions,
            lookup.query(),
            &bootstrap.players,
            out,
        )
    }
}

/// Pretty-printed JSON document followed by a newline.
pub fn render_json<W: Write>(report: &PlayerReport, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)?;
    Ok(())
}

/// Human-readable summary, per-gameweek table, totals and weak-match hints.
pub fn render_table<W: Write>(
    report: &PlayerReport,
    suggestions: &[MatchSuggestion],
    query: &str,
    players: &[Player],
    out: &mut W,
) -> Result<()> {
    let p = &report.player;
    writeln!(out, "{} | {} | {} | £{:.1}", p.name, p.team, p.position, p.cost)?;
    writeln!(
        out,
        "Form {} | Total Points {} | Selected by {}% | ICT {}",
        p.form, p.total_points, p.selected_by_percent, p.ict_index
    )?;
    writeln!(out)?;

    let mut rows = vec![["GW", "Opponent", "Min", "G", "A", "CS", "Pts"].map(String::from)];
    rows.extend(report.gameweeks.iter().map(|row| {
        [
            row.round.to_string(),
            row.opponent.clone(),
            row.minutes.to_string(),
            row.goals.to_string(),
            row.assists.to_string(),
            row.clean_sheets.to_string(),
            row.points.to_string(),
        ]
    }));
    write_aligned(&rows, out)?;

    if report.gameweeks.is_empty() {
        writeln!(out, "No fixtures recorded for the selected gameweeks.")?;
    } else {
        let t = &report.totals;
        writeln!(
            out,
            "\nTotals (GW {}): {} matches | {} pts | {} min | {} G | {} A | {} CS",
            format_gameweeks(&t.gameweeks),
            t.matches,
            t.points,
            t.minutes,
            t.goals,
            t.assists,
            t.clean_sheets
        )?;
    }

    if should_suggest_alternatives(query, suggestions) {
        writeln!(out, "\nOther close matches:")?;
        for s in suggestions {
            let Some(player) = find_player(players, s.player_id) else {
                continue;
            };
            writeln!(
                out,
                "- {} (alias: {}, distance: {})",
                player.display_name(),
                s.alias,
                s.distance
            )?;
        }
    }

    Ok(())
}

/// Left-align every column but the last, two spaces between columns.
fn write_aligned<W: Write, const N: usize>(rows: &[[String; N]], out: &mut W) -> io::Result<()> {
    let mut widths = [0usize; N];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    for row in rows {
        let mut line = String::new();
        for (i, cell) in row.iter().enumerate() {
            if i + 1 == N {
                line.push_str(cell);
            } else {
                line.push_str(&format!("{:<width$}", cell, width = widths[i] + 2));
            }
        }
        writeln!(out, "{}", line)?;
    }
    Ok(())
}
