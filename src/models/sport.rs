use serde::{Deserialize, Serialize};

use super::FlexibleString;

/// Where a sport currently is in its calendar.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct SportState {
    pub week: u32,
    /// `pre`, `regular` or `post`.
    pub season_type: String,
    pub season: String,
    pub previous_season: FlexibleString,
    pub season_start_date: Option<String>,
    /// Week of the regular season.
    pub leg: u32,
    /// Season leagues are currently active in.
    pub league_season: String,
    /// Season new leagues are created for; flips in December.
    pub league_create_season: String,
    /// Week to show in a UI, which can differ from `week`.
    pub display_week: u32,
}

impl SportState {
    pub fn is_regular_season(&self) -> bool {
        self.season_type == "regular"
    }
}
