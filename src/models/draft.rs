use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

const SLOT_PREFIX: &str = "slots_";

/// A draft, either a league's or a standalone mock.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Draft {
    pub draft_id: String,
    pub league_id: Option<String>,
    pub sport: String,
    pub season: String,
    pub season_type: Option<String>,
    /// `pre_draft`, `drafting` or `complete`.
    pub status: String,
    /// `snake`, `linear` or `auction`.
    #[serde(rename = "type")]
    pub draft_type: String,
    pub created: Option<i64>,
    pub start_time: Option<i64>,
    pub last_picked: Option<i64>,
    pub last_message_id: Option<String>,
    pub last_message_time: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub creators: Vec<String>,
    /// User ID to draft slot.
    #[serde(deserialize_with = "null_as_default")]
    pub draft_order: BTreeMap<String, u32>,
    /// Draft slot to roster ID.
    #[serde(deserialize_with = "null_as_default")]
    pub slot_to_roster_id: BTreeMap<String, Option<u32>>,
    pub metadata: Option<DraftMetadata>,
    pub settings: Option<DraftSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DraftMetadata {
    pub name: Option<String>,
    pub description: Option<String>,
    pub scoring_type: Option<String>,
    pub show_team_names: Option<String>,
    pub league_type: Option<String>,
    pub elapsed_pick_timer: Option<String>,
    pub is_autopaused: Option<String>,
}

/// Draft rules. `slots_*` roster sizes vary by sport and land in `other`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DraftSettings {
    pub teams: Option<i64>,
    pub rounds: Option<i64>,
    pub pick_timer: Option<i64>,
    pub nomination_timer: Option<i64>,
    pub reversal_round: Option<i64>,
    pub player_type: Option<i64>,
    pub alpha_sort: Option<i64>,
    pub cpu_autopick: Option<i64>,
    pub autostart: Option<i64>,
    pub enforce_position_limits: Option<i64>,
    pub autopause_enabled: Option<i64>,
    pub autopause_start_time: Option<i64>,
    pub autopause_end_time: Option<i64>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl DraftSettings {
    /// Roster slot counts by position, e.g. `qb -> 1`, `flex -> 2`.
    pub fn roster_slots(&self) -> BTreeMap<&str, u64> {
        self.other
            .iter()
            .filter_map(|(key, value)| {
                let position = key.strip_prefix(SLOT_PREFIX)?;
                Some((position, value.as_u64()?))
            })
            .collect()
    }
}

/// One selection in a draft.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DraftPick {
    pub draft_id: String,
    pub pick_no: u32,
    pub round: u32,
    pub draft_slot: u32,
    pub roster_id: Option<u32>,
    pub player_id: String,
    pub picked_by: String,
    /// Sent as `true`, `false` or `null` depending on league type.
    pub is_keeper: Option<Value>,
    pub metadata: Option<DraftPickMetadata>,
    #[serde(deserialize_with = "null_as_default")]
    pub reactions: BTreeMap<String, Vec<String>>,
}

impl DraftPick {
    pub fn is_keeper(&self) -> bool {
        matches!(self.is_keeper, Some(Value::Bool(true)))
    }
}

/// Player details captured at pick time. Every value is a string.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DraftPickMetadata {
    pub player_id: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub position: Option<String>,
    pub team: Option<String>,
    pub team_abbr: Option<String>,
    pub number: Option<String>,
    pub status: Option<String>,
    pub injury_status: Option<String>,
    pub sport: Option<String>,
    pub news_updated: Option<String>,
    pub team_changed_at: Option<String>,
    pub years_exp: Option<String>,
}
