//! League, matchup, and playoff bracket shapes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::null_as_default;

/// A Sleeper fantasy league.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct League {
    pub league_id: String,
    pub name: String,
    pub sport: String,
    /// Season year as the API sends it, e.g. `"2025"`.
    pub season: String,
    pub season_type: Option<String>,
    /// `pre_draft`, `drafting`, `in_season` or `complete`.
    pub status: String,
    pub total_rosters: u32,
    pub draft_id: Option<String>,
    pub previous_league_id: Option<String>,
    pub avatar: Option<String>,
    pub company_id: Option<String>,
    pub bracket_id: Option<i64>,
    pub loser_bracket_id: Option<i64>,
    pub last_message_time: Option<i64>,
    #[serde(deserialize_with = "null_as_default")]
    pub roster_positions: Vec<String>,
    pub settings: Option<LeagueSettings>,
    pub scoring_settings: Option<ScoringSettings>,
    pub metadata: Option<LeagueMetadata>,
}

/// Points awarded per stat, keyed by Sleeper stat name (`pass_yd`, `rec`, ...).
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct ScoringSettings(pub BTreeMap<String, f64>);

impl ScoringSettings {
    pub fn get(&self, stat: &str) -> Option<f64> {
        self.0.get(stat).copied()
    }

    /// Points for `stat`, zero when the league does not score it.
    pub fn points_for(&self, stat: &str) -> f64 {
        self.get(stat).unwrap_or(0.0)
    }

    /// True for leagues awarding a full point per reception.
    pub fn is_ppr(&self) -> bool {
        self.points_for("rec") >= 1.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(stat, points)| (stat.as_str(), *points))
    }
}

/// League rules. The commonly used settings are typed; everything else is kept
/// in `other` as sent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LeagueSettings {
    pub num_teams: Option<i64>,
    /// 0 redraft, 1 keeper, 2 dynasty.
    #[serde(rename = "type")]
    pub league_type: Option<i64>,
    pub best_ball: Option<i64>,
    pub playoff_teams: Option<i64>,
    pub playoff_week_start: Option<i64>,
    pub start_week: Option<i64>,
    pub trade_deadline: Option<i64>,
    pub waiver_type: Option<i64>,
    pub waiver_budget: Option<i64>,
    pub draft_rounds: Option<i64>,
    pub max_keepers: Option<i64>,
    pub reserve_slots: Option<i64>,
    pub taxi_slots: Option<i64>,
    pub leg: Option<i64>,
    pub last_scored_leg: Option<i64>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl LeagueSettings {
    pub fn is_best_ball(&self) -> bool {
        self.best_ball == Some(1)
    }

    pub fn is_dynasty(&self) -> bool {
        self.league_type == Some(2)
    }

    pub fn is_keeper(&self) -> bool {
        self.league_type == Some(1)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct LeagueMetadata {
    pub auto_continue: Option<String>,
    pub keeper_deadline: Option<String>,
    pub latest_league_winner_roster_id: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

/// One roster's side of a weekly matchup.
///
/// Two entries sharing a `matchup_id` played each other; `matchup_id` is
/// `None` for a roster on bye.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Matchup {
    pub roster_id: u32,
    pub matchup_id: Option<u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub points: f64,
    /// Commissioner override of `points`.
    pub custom_points: Option<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub players: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub starters: Vec<String>,
    #[serde(deserialize_with = "null_as_default")]
    pub starters_points: Vec<f64>,
    #[serde(deserialize_with = "null_as_default")]
    pub players_points: BTreeMap<String, f64>,
}

impl Matchup {
    /// Points that count for the week, honouring a commissioner override.
    pub fn effective_points(&self) -> f64 {
        self.custom_points.unwrap_or(self.points)
    }
}

/// A game in a winners or losers bracket.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayoffMatchup {
    #[serde(rename = "r")]
    pub round: u32,
    #[serde(rename = "m")]
    pub match_id: u32,
    #[serde(rename = "t1")]
    pub team1: Option<u32>,
    #[serde(rename = "t2")]
    pub team2: Option<u32>,
    #[serde(rename = "w")]
    pub winner: Option<u32>,
    #[serde(rename = "l")]
    pub loser: Option<u32>,
    #[serde(rename = "t1_from")]
    pub team1_from: Option<PlayoffMatchupFrom>,
    #[serde(rename = "t2_from")]
    pub team2_from: Option<PlayoffMatchupFrom>,
    /// Final placement decided by this game, e.g. 1 for the championship.
    #[serde(rename = "p")]
    pub placement: Option<u32>,
}

/// Which earlier game feeds a bracket slot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct PlayoffMatchupFrom {
    #[serde(rename = "w")]
    pub winner_of: Option<u32>,
    #[serde(rename = "l")]
    pub loser_of: Option<u32>,
}

impl PlayoffMatchup {
    pub fn is_decided(&self) -> bool {
        self.winner.is_some()
    }
}
