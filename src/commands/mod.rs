//! Command implementations for the Sleeper CLI

pub mod output;

use tracing::info;

use crate::{
    api::TrendingPlayerOptions, cli::GetCmd, client::SleeperClient, error::SleeperError, Result,
    LEAGUE_ID_ENV_VAR,
};

use output::{print_json, write_bytes, write_json};


/// League ID from the flag, falling back to `SLEEPER_LEAGUE_ID`.
pub fn resolve_league_id(league_id: Option<String>) -> Result<String> {
    league_id
        .filter(|id| !id.trim().is_empty())
        .or_else(|| {
            std::env::var(LEAGUE_ID_ENV_VAR)
                .ok()
                .filter(|id| !id.trim().is_empty())
        })
        .ok_or_else(|| SleeperError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
}

/// Run one `get` subcommand, printing its result as pretty JSON.
pub async fn handle_get(client: &SleeperClient, cmd: GetCmd) -> Result<()> {
    match cmd {
        GetCmd::SportState { sport } => print_json(&client.get_sport_state(sport).await?),
        GetCmd::User { identity } => print_json(&client.get_user(&identity).await?),
        GetCmd::UserLeagues { args } => print_json(
            &client
                .get_user_leagues(&args.user_id, args.sport, args.season)
                .await?,
        ),
        GetCmd::UserDrafts { args } => print_json(
            &client
                .get_user_drafts(&args.user_id, args.sport, args.season)
                .await?,
        ),
        GetCmd::League { league } => {
            let league_id = resolve_league_id(league.league_id)?;
            print_json(&client.get_league(&league_id).await?)
        }
        GetCmd::Rosters { league } => {
            let league_id = resolve_league_id(league.league_id)?;
            print_json(&client.get_league_rosters(&league_id).await?)
        }
        GetCmd::LeagueUsers { league } => {
            let league_id = resolve_league_id(league.league_id)?;
            print_json(&client.get_league_users(&league_id).await?)
        }
        GetCmd::Matchups { league, week } => {
            let league_id = resolve_league_id(league.league_id)?;
            print_json(&client.get_league_matchups(&league_id, week).await?)
        }
        GetCmd::Transactions { league, week } => {
            let league_id = resolve_league_id(league.league_id)?;
            print_json(&client.get_transactions(&league_id, week).await?)
        }
        GetCmd::TradedPicks { league } => {
            let league_id = resolve_league_id(league.league_id)?;
            print_json(&client.get_league_traded_picks(&league_id).await?)
        }
        GetCmd::WinnersBracket { league } => {
            let league_id = resolve_league_id(league.league_id)?;
            print_json(&client.get_league_winners_bracket(&league_id).await?)
        }
        GetCmd::LosersBracket { league } => {
            let league_id = resolve_league_id(league.league_id)?;
            print_json(&client.get_league_losers_bracket(&league_id).await?)
        }
        GetCmd::LeagueDrafts { league } => {
            let league_id = resolve_league_id(league.league_id)?;
            print_json(&client.get_league_drafts(&league_id).await?)
        }
        GetCmd::Draft { draft_id } => print_json(&client.get_draft(&draft_id).await?),
        GetCmd::DraftPicks { draft_id } => print_json(&client.get_draft_picks(&draft_id).await?),
        GetCmd::DraftTradedPicks { draft_id } => {
            print_json(&client.get_draft_traded_picks(&draft_id).await?)
        }
        GetCmd::Players { output } => {
            let players = client.list_nfl_players().await?;
            match output {
                Some(path) => {
                    write_json(&path, &players)?;
                    info!(count = players.len(), path = %path.display(), "wrote player database");
                    Ok(())
                }
                None => print_json(&players),
            }
        }
        GetCmd::Trending {
            trending_type,
            sport,
            lookback_hours,
            limit,
        } => {
            let options = TrendingPlayerOptions::new()
                .with_lookback_hours(lookback_hours)
                .with_limit(limit);
            print_json(
                &client
                    .list_trending_players(sport, trending_type, options)
                    .await?,
            )
        }
        GetCmd::Avatar {
            avatar_id,
            thumbnail,
            output,
        } => {
            let image = if thumbnail {
                client.get_avatar_thumbnail(&avatar_id).await?
            } else {
                client.get_avatar_image(&avatar_id).await?
            };
            write_bytes(&output, &image)?;
            info!(bytes = image.len(), path = %output.display(), "wrote avatar");
            Ok(())
        }
    }
}
