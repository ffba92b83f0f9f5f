use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A Sleeper account, or a member of a league.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    pub user_id: String,
    /// Absent on league member listings.
    pub username: Option<String>,
    pub display_name: Option<String>,
    pub avatar: Option<String>,
    #[serde(deserialize_with = "super::null_as_default")]
    pub is_bot: bool,
    /// Set on league member listings.
    pub is_owner: Option<bool>,
    pub league_id: Option<String>,
    pub metadata: Option<UserMetadata>,
}

/// Per-league member details such as the team name.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct UserMetadata {
    pub team_name: Option<String>,
    pub avatar: Option<String>,
    #[serde(flatten)]
    pub other: BTreeMap<String, Value>,
}

impl User {
    /// Team name if the member set one, otherwise the display name.
    pub fn team_or_display_name(&self) -> Option<&str> {
        self.metadata
            .as_ref()
            .and_then(|meta| meta.team_name.as_deref())
            .filter(|name| !name.is_empty())
            .or(self.display_name.as_deref())
    }
}
