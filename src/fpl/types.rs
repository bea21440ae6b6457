use crate::cli::types::{PlayerId, PositionId, TeamId};
use serde::{Deserialize, Deserializer, Serialize};


/// The API sends `null` for some text fields that are normally strings.
fn de_null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Deserialize::deserialize(deserializer)?;
    Ok(raw.unwrap_or_default())
}

/// Subset of `/bootstrap-static/` needed to resolve and describe players.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Bootstrap {
    #[serde(rename = "elements", default)]
    pub players: Vec<Player>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(rename = "element_types", default)]
    pub positions: Vec<Position>,
}

/// Player metadata ("element") from the bootstrap snapshot.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Player {
    pub id: PlayerId,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub web_name: String,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub first_name: String,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub second_name: String,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub known_as: String,
    #[serde(default)]
    pub team: TeamId,
    #[serde(rename = "element_type", default)]
    pub position: PositionId,
    /// Price in tenths of a million.
    #[serde(default)]
    pub now_cost: i32,
    #[serde(rename = "selected_by_percent", default, deserialize_with = "de_null_as_empty")]
    pub selected_by: String,
    #[serde(default)]
    pub total_points: i32,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub form: String,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub ict_index: String,
}

impl Player {
    /// "First Last", or the web name when both are blank.
    pub fn display_name(&self) -> String {
        let name = format!("{} {}", self.first_name, self.second_name);
        let name = name.trim();
        if name.is_empty() {
            self.web_name.clone()
        } else {
            name.to_string()
        }
    }
}

/// A Premier League club.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub short_name: String,
}

/// A playing position ("element type"), e.g. Forward.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Position {
    pub id: PositionId,
    #[serde(default)]
    pub singular_name: String,
    #[serde(default)]
    pub singular_name_short: String,
}

/// Body of `/element-summary/{id}/`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlayerSummary {
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
}

/// One gameweek's match stats for a player.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct HistoryEntry {
    pub round: u16,
    pub opponent_team: TeamId,
    #[serde(default)]
    pub was_home: bool,
    #[serde(default)]
    pub total_points: i32,
    #[serde(default)]
    pub minutes: u32,
    #[serde(default)]
    pub goals_scored: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    #[serde(default)]
    pub goals_conceded: u32,
    #[serde(default)]
    pub yellow_cards: u32,
    #[serde(default)]
    pub red_cards: u32,
    #[serde(default)]
    pub bps: i32,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub influence: String,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub creativity: String,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub threat: String,
    #[serde(default, deserialize_with = "de_null_as_empty")]
    pub ict_index: String,
    #[serde(default)]
    pub value: i32,
    #[serde(default)]
    pub kickoff_time: Option<String>,
}
