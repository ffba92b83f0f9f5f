use crate::api::endpoint::Endpoint;
use crate::api::validate::{self, Validator};
use crate::client::SleeperClient;
use crate::error::Result;
use crate::models::{Draft, DraftPick, TradedDraftPick};
use crate::types::{Season, Sport};

impl SleeperClient {
    pub async fn get_draft(&self, draft_id: &str) -> Result<Draft> {
        let draft_id = validate::required("draft_id", draft_id)?;
        self.get_one(Endpoint::Draft(draft_id), "draft").await
    }

    /// Drafts `user_id` took part in for one sport and season.
    pub async fn get_user_drafts(
        &self,
        user_id: &str,
        sport: Sport,
        season: Season,
    ) -> Result<Vec<Draft>> {
        let mut validator = Validator::new();
        let user_id = validator.required("user_id", user_id);
        validator.season(season);
        validator.finish()?;

        self.get_list(
            Endpoint::UserDrafts {
                user_id,
                sport,
                season,
            },
            "user drafts",
        )
        .await
    }

    /// Drafts for a league, most recent first. Fails with `NotFound` when the
    /// league has none.
    pub async fn get_league_drafts(&self, league_id: &str) -> Result<Vec<Draft>> {
        let league_id = validate::required("league_id", league_id)?;
        self.get_non_empty(Endpoint::LeagueDrafts(league_id), "league drafts")
            .await
    }

    pub async fn get_draft_picks(&self, draft_id: &str) -> Result<Vec<DraftPick>> {
        let draft_id = validate::required("draft_id", draft_id)?;
        self.get_list(Endpoint::DraftPicks(draft_id), "draft picks")
            .await
    }

    pub async fn get_draft_traded_picks(&self, draft_id: &str) -> Result<Vec<TradedDraftPick>> {
        let draft_id = validate::required("draft_id", draft_id)?;
        self.get_list(Endpoint::DraftTradedPicks(draft_id), "draft traded picks")
            .await
    }
}
