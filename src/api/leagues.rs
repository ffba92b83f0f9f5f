use crate::api::endpoint::Endpoint;
use crate::api::validate::{self, Validator};
use crate::client::SleeperClient;
use crate::error::Result;
use crate::models::{League, Matchup, PlayoffMatchup, Roster, TradedDraftPick, Transaction, User};
use crate::types::Week;

impl SleeperClient {
    pub async fn get_league(&self, league_id: &str) -> Result<League> {
        let league_id = validate::required("league_id", league_id)?;
        self.get_one(Endpoint::League(league_id), "league").await
    }

    pub async fn get_league_rosters(&self, league_id: &str) -> Result<Vec<Roster>> {
        let league_id = validate::required("league_id", league_id)?;
        self.get_list(Endpoint::LeagueRosters(league_id), "league rosters")
            .await
    }

    /// Members of a league, with their per-league team metadata.
    pub async fn get_league_users(&self, league_id: &str) -> Result<Vec<User>> {
        let league_id = validate::required("league_id", league_id)?;
        self.get_list(Endpoint::LeagueUsers(league_id), "league users")
            .await
    }

    /// Every roster's side of the matchups for `week`.
    pub async fn get_league_matchups(&self, league_id: &str, week: Week) -> Result<Vec<Matchup>> {
        let mut validator = Validator::new();
        let league_id = validator.required("league_id", league_id);
        validator.week(week);
        validator.finish()?;

        self.get_list(Endpoint::LeagueMatchups { league_id, week }, "league matchups")
            .await
    }

    /// Trades, waivers, and free-agent moves processed in `week`.
    pub async fn get_transactions(&self, league_id: &str, week: Week) -> Result<Vec<Transaction>> {
        let mut validator = Validator::new();
        let league_id = validator.required("league_id", league_id);
        validator.week(week);
        validator.finish()?;

        self.get_list(
            Endpoint::LeagueTransactions { league_id, week },
            "league transactions",
        )
        .await
    }

    pub async fn get_league_traded_picks(&self, league_id: &str) -> Result<Vec<TradedDraftPick>> {
        let league_id = validate::required("league_id", league_id)?;
        self.get_list(Endpoint::LeagueTradedPicks(league_id), "traded picks")
            .await
    }

    pub async fn get_league_winners_bracket(
        &self,
        league_id: &str,
    ) -> Result<Vec<PlayoffMatchup>> {
        let league_id = validate::required("league_id", league_id)?;
        self.get_list(Endpoint::LeagueWinnersBracket(league_id), "winners bracket")
            .await
    }

    pub async fn get_league_losers_bracket(
        &self,
        league_id: &str,
    ) -> Result<Vec<PlayoffMatchup>> {
        let league_id = validate::required("league_id", league_id)?;
        self.get_list(Endpoint::LeagueLosersBracket(league_id), "losers bracket")
            .await
    }
}
