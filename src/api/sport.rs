use crate::api::endpoint::Endpoint;
use crate::client::SleeperClient;
use crate::error::Result;
use crate::models::SportState;
use crate::types::Sport;

impl SleeperClient {
    /// Current week and season for `sport`.
    pub async fn get_sport_state(&self, sport: Sport) -> Result<SportState> {
        self.get_one(Endpoint::SportState(sport), "sport state")
            .await
    }
}
