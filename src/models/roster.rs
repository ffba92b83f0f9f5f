use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

const PLAYER_NICKNAME_PREFIX: &str = "p_nick_";

/// A team in a league.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Roster {
    pub roster_id: u32,
    pub league_id: String,
    /// `None` for an orphaned team.
    pub owner_id: Option<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub co_owners: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub players: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub starters: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub reserve: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub taxi: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub keepers: Vec<String>,
    pub settings: Option<RosterSettings>,
    pub metadata: Option<RosterMetadata>,
}

/// Season record and scoring totals. Points are split into a whole part and
/// hundredths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct RosterSettings {
    pub wins: Option<i64>,
    pub losses: Option<i64>,
    pub ties: Option<i64>,
    pub fpts: Option<i64>,
    pub fpts_decimal: Option<i64>,
    pub fpts_against: Option<i64>,
    pub fpts_against_decimal: Option<i64>,
    pub ppts: Option<i64>,
    pub ppts_decimal: Option<i64>,
    pub total_moves: Option<i64>,
    pub waiver_position: Option<i64>,
    pub waiver_budget_used: Option<i64>,
}

fn combine(whole: Option<i64>, hundredths: Option<i64>) -> f64 {
    whole.unwrap_or(0) as f64 + hundredths.unwrap_or(0) as f64 / 100.0
}

impl RosterSettings {
    pub fn points_for(&self) -> f64 {
        combine(self.fpts, self.fpts_decimal)
    }

    pub fn points_against(&self) -> f64 {
        combine(self.fpts_against, self.fpts_against_decimal)
    }

    /// Maximum possible points.
    pub fn potential_points(&self) -> f64 {
        combine(self.ppts, self.ppts_decimal)
    }
}

/// Roster metadata. Keys of the form `p_nick_<player_id>` are collected into
/// `player_nicknames`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(from = "RawRosterMetadata")]
pub struct RosterMetadata {
    pub record: Option<String>,
    pub streak: Option<String>,
    pub allow_pn_news: Option<String>,
    pub allow_pn_scoring: Option<String>,
    pub allow_pn_inactive_starters: Option<String>,
    pub allow_pn_player_injury_status: Option<String>,
    pub restrict_pn_scoring_starters_only: Option<String>,
    pub player_nicknames: BTreeMap<String, String>,
    pub other: BTreeMap<String, Value>,
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct RawRosterMetadata {
    record: Option<String>,
    streak: Option<String>,
    allow_pn_news: Option<String>,
    allow_pn_scoring: Option<String>,
    allow_pn_inactive_starters: Option<String>,
    allow_pn_player_injury_status: Option<String>,
    restrict_pn_scoring_starters_only: Option<String>,
    #[serde(flatten)]
    rest: BTreeMap<String, Value>,
}

impl From<RawRosterMetadata> for RosterMetadata {
    fn from(raw: RawRosterMetadata) -> Self {
        let mut player_nicknames = BTreeMap::new();
        let mut other = BTreeMap::new();

        for (key, value) in raw.rest {
            if let (Some(player_id), Value::String(nickname)) =
                (key.strip_prefix(PLAYER_NICKNAME_PREFIX), &value)
            {
                player_nicknames.insert(player_id.to_string(), nickname.clone());
                continue;
            }
            other.insert(key, value);
        }

        Self {
            record: raw.record,
            streak: raw.streak,
            allow_pn_news: raw.allow_pn_news,
            allow_pn_scoring: raw.allow_pn_scoring,
            allow_pn_inactive_starters: raw.allow_pn_inactive_starters,
            allow_pn_player_injury_status: raw.allow_pn_player_injury_status,
            restrict_pn_scoring_starters_only: raw.restrict_pn_scoring_starters_only,
            player_nicknames,
            other,
        }
    }
}

impl Roster {
    pub fn is_starter(&self, player_id: &str) -> bool {
        self.starters.iter().any(|id| id == player_id)
    }

    /// Nickname the owner gave `player_id`, if any.
    pub fn nickname(&self, player_id: &str) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|meta| meta.player_nicknames.get(player_id))
            .map(String::as_str)
    }
}
