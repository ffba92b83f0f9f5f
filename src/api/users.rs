use crate::api::endpoint::Endpoint;
use crate::api::validate::{self, Validator};
use crate::client::SleeperClient;
use crate::error::Result;
use crate::models::{League, User};
use crate::types::{Season, Sport};

impl SleeperClient {
    /// Look up a user by username or user ID.
    pub async fn get_user(&self, identity: &str) -> Result<User> {
        let identity = validate::required("user_id", identity)?;
        self.get_one(Endpoint::User(identity), "user").await
    }

    /// Leagues `user_id` belongs to for one sport and season.
    ///
    /// Takes the numeric user ID; usernames are not accepted here.
    pub async fn get_user_leagues(
        &self,
        user_id: &str,
        sport: Sport,
        season: Season,
    ) -> Result<Vec<League>> {
        let mut validator = Validator::new();
        let user_id = validator.required("user_id", user_id);
        validator.season(season);
        validator.finish()?;

        self.get_list(
            Endpoint::UserLeagues {
                user_id,
                sport,
                season,
            },
            "user leagues",
        )
        .await
    }
}
