use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{null_as_default, FlexibleString};

/// A player from the Sleeper player database.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Player {
    pub player_id: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub full_name: Option<String>,
    pub sport: Option<String>,
    pub position: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub fantasy_positions: Vec<String>,
    pub team: Option<String>,
    pub team_abbr: Option<String>,
    pub status: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub active: bool,
    pub number: Option<u32>,
    pub age: Option<u32>,
    pub years_exp: Option<u32>,
    pub height: Option<String>,
    pub weight: Option<String>,
    pub college: Option<String>,
    pub high_school: Option<String>,
    pub birth_date: Option<String>,
    pub birth_city: Option<String>,
    pub birth_state: Option<String>,
    pub birth_country: Option<String>,
    pub depth_chart_position: Option<String>,
    pub depth_chart_order: Option<u32>,
    pub injury_status: Option<String>,
    pub injury_body_part: Option<String>,
    pub injury_notes: Option<String>,
    pub injury_start_date: Option<String>,
    pub practice_participation: Option<String>,
    pub practice_description: Option<String>,
    pub news_updated: Option<i64>,
    pub team_changed_at: Option<String>,
    pub search_rank: Option<u32>,
    pub search_first_name: Option<String>,
    pub search_last_name: Option<String>,
    pub search_full_name: Option<String>,
    pub hashtag: Option<String>,
    pub metadata: Option<PlayerMetadata>,

    pub espn_id: Option<FlexibleString>,
    pub yahoo_id: Option<FlexibleString>,
    pub rotowire_id: Option<FlexibleString>,
    pub rotoworld_id: Option<FlexibleString>,
    pub gsis_id: Option<FlexibleString>,
    pub sportradar_id: Option<FlexibleString>,
    pub stats_id: Option<FlexibleString>,
    pub fantasy_data_id: Option<FlexibleString>,
    pub swish_id: Option<FlexibleString>,
    pub opta_id: Option<FlexibleString>,
    pub pandascore_id: Option<FlexibleString>,
    pub oddsjam_id: Option<FlexibleString>,
    pub kalshi_id: Option<FlexibleString>,
}

impl Player {
    /// Full name, falling back to "first last" for team defenses and
    /// partially filled records.
    pub fn display_name(&self) -> String {
        if let Some(full) = self.full_name.as_deref().filter(|n| !n.is_empty()) {
            return full.to_string();
        }
        [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
    }

    pub fn is_injured(&self) -> bool {
        self.injury_status.as_deref().is_some_and(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayerMetadata {
    pub channel_id: Option<String>,
    pub rookie_year: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// A player's add or drop count over the lookback window.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TrendingPlayer {
    pub player_id: String,
    pub count: u32,
}
