//! Fuzzy player-name resolution.
//!
//! Every player fans out into a handful of aliases (web name, full name,
//! last name, known-as). All aliases are scored against the query by a
//! [`MatchScorer`], ranked by distance, and the best-scoring alias decides
//! the resolved player. The runner-up list is deduplicated by player so one
//! player cannot fill it with near-identical aliases.

use std::collections::{HashMap, HashSet};

use serde::Serialize;
use tracing::debug;
use unicode_normalization::{char::is_combining_mark, UnicodeNormalization};

use crate::{
    cli::types::PlayerId,
    error::{FplError, Result},
    fpl::types::Player,
};

/// Maximum number of suggestions returned, best match included.
pub const MAX_SUGGESTIONS: usize = 5;

/// Best-match distances above this are "weak" and worth questioning.
pub const WEAK_MATCH_DISTANCE: usize = 2;

/// Strategy that scores a candidate string against a query.
///
/// Lower is better, `0` is an exact match. `None` means the candidate does
/// not match at all and must be dropped.
pub trait MatchScorer {
    fn score(&self, query: &str, candidate: &str) -> Option<usize>;
}

impl<F> MatchScorer for F
where
    F: Fn(&str, &str) -> Option<usize>,
{
    fn score(&self, query: &str, candidate: &str) -> Option<usize> {
        self(query, candidate)
    }
}

/// Default scorer: case and diacritic folding, in-order subsequence match,
/// Levenshtein distance between the folded strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzyScorer;

impl MatchScorer for FuzzyScorer {
    fn score(&self, query: &str, candidate: &str) -> Option<usize> {
        let query = fold(query);
        let candidate = fold(candidate);
        if !is_subsequence(&query, &candidate) {
            return None;
        }
        Some(strsim::levenshtein(&query, &candidate))
    }
}

/// Lower-case and strip combining marks after canonical decomposition.
fn fold(s: &str) -> String {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

fn is_subsequence(needle: &str, haystack: &str) -> bool {
    let mut rest = haystack.chars();
    needle.chars().all(|n| rest.any(|h| h == n))
}

/// A ranked candidate for a name query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchSuggestion {
    pub player_id: PlayerId,
    pub alias: String,
    pub distance: usize,
}

/// Name variants a player can be found by, deduplicated case-insensitively.
pub fn name_variants(player: &Player) -> Vec<String> {
    let full_name = format!("{} {}", player.first_name, player.second_name);
    let candidates = [
        player.web_name.as_str(),
        full_name.as_str(),
        player.second_name.as_str(),
        player.known_as.as_str(),
    ];

    let mut seen = HashSet::new();
    candidates
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty() && seen.insert(c.to_lowercase()))
        .map(str::to_string)
        .collect()
}

/// Alias pool over all players, deduplicated by exact `(alias, player)` pair.
fn alias_pool(players: &[Player]) -> Vec<(String, PlayerId)> {
    let mut seen = HashSet::new();
    let mut pool = Vec::with_capacity(players.len() * 2);
    for player in players {
        for alias in name_variants(player) {
            if seen.insert((alias.clone(), player.id)) {
                pool.push((alias, player.id));
            }
        }
    }
    pool
}

/// Resolve `query` to a player using [`FuzzyScorer`].
pub fn find_player_by_name<'a>(
    query: &str,
    players: &'a [Player],
) -> Result<(&'a Player, Vec<MatchSuggestion>)> {
    find_player_by_name_with(&FuzzyScorer, query, players)
}

/// Resolve `query` to a player with any scoring strategy.
///
/// Returns the owner of the lowest-distance alias and up to
/// [`MAX_SUGGESTIONS`] suggestions, one per player, best first. Ties keep
/// pool order, which follows the order of `players`.
pub fn find_player_by_name_with<'a, S>(
    scorer: &S,
    query: &str,
    players: &'a [Player],
) -> Result<(&'a Player, Vec<MatchSuggestion>)>
where
    S: MatchScorer + ?Sized,
{
    let query = query.trim();
    if query.is_empty() {
        return Err(FplError::EmptyQuery);
    }

    let no_match = || FplError::NoMatch {
        query: query.to_string(),
    };

    let mut ranked: Vec<MatchSuggestion> = alias_pool(players)
        .into_iter()
        .filter_map(|(alias, player_id)| {
            scorer.score(query, &alias).map(|distance| MatchSuggestion {
                player_id,
                alias,
                distance,
            })
        })
        .collect();
    ranked.sort_by_key(|s| s.distance);

    let best = ranked.first().ok_or_else(no_match)?;
    let by_id: HashMap<PlayerId, &Player> = players.iter().rev().map(|p| (p.id, p)).collect();
    let player = by_id.get(&best.player_id).copied().ok_or_else(no_match)?;

    debug!(
        query,
        candidates = ranked.len(),
        alias = %best.alias,
        distance = best.distance,
        "resolved player {}",
        player.id
    );

    let mut contributed = HashSet::new();
    let suggestions = ranked
        .into_iter()
        .filter(|s| contributed.insert(s.player_id))
        .take(MAX_SUGGESTIONS)
        .collect();

    Ok((player, suggestions))
}

/// Whether the caller should show alternatives: the best match is weak and
/// there is something else to offer.
pub fn should_suggest_alternatives(query: &str, suggestions: &[MatchSuggestion]) -> bool {
    if query.trim().is_empty() {
        return false;
    }
    match suggestions.first() {
        Some(best) => best.distance > WEAK_MATCH_DISTANCE && suggestions.len() > 1,
        None => false,
    }
}
