use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::api::endpoint::Endpoint;
use crate::api::validate::{Validator, MAX_TRENDING_LIMIT};
use crate::client::SleeperClient;
use crate::error::{Result, SleeperError};
use crate::models::{Player, TrendingPlayer};
use crate::types::{Sport, TrendingType};

/// Optional parameters for [`SleeperClient::list_trending_players`].
///
/// Zero leaves a parameter to the server default (24 hours, 25 players).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendingPlayerOptions {
    pub lookback_hours: u32,
    /// At most [`MAX_TRENDING_LIMIT`].
    pub limit: u32,
}

impl TrendingPlayerOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_lookback_hours(mut self, hours: u32) -> Self {
        self.lookback_hours = hours;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub(crate) fn validate_into(&self, validator: &mut Validator) {
        validator.check(
            self.limit <= MAX_TRENDING_LIMIT,
            format!("limit cannot exceed {MAX_TRENDING_LIMIT}"),
        );
    }
}

impl SleeperClient {
    /// Every NFL player keyed by player ID.
    ///
    /// The payload is several megabytes. Sleeper asks that it be fetched at
    /// most once a day and cached by the caller.
    pub async fn list_nfl_players(&self) -> Result<HashMap<String, Player>> {
        self.get_json::<Option<HashMap<String, Player>>>(Endpoint::NflPlayers, "players")
            .await?
            .ok_or(SleeperError::NotFound { what: "players" })
    }

    /// Players most added or dropped over the lookback window.
    ///
    /// Sleeper asks for attribution wherever this data is shown.
    pub async fn list_trending_players(
        &self,
        sport: Sport,
        trending_type: TrendingType,
        options: TrendingPlayerOptions,
    ) -> Result<Vec<TrendingPlayer>> {
        let mut validator = Validator::new();
        options.validate_into(&mut validator);
        validator.finish()?;

        self.get_non_empty(
            Endpoint::TrendingPlayers {
                sport,
                trending_type,
                lookback_hours: options.lookback_hours,
                limit: options.limit,
            },
            "trending players",
        )
        .await
    }
}
