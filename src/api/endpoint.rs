//! Sleeper API endpoint paths and query strings.

use url::Url;

use crate::error::{Result, SleeperError};
use crate::types::{Season, Sport, TrendingType, Week};

const QUERY_LOOKBACK_HOURS: &str = "lookback_hours";
const QUERY_LIMIT: &str = "limit";

/// One logical API operation and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint<'a> {
    SportState(Sport),
    User(&'a str),
    UserLeagues {
        user_id: &'a str,
        sport: Sport,
        season: Season,
    },
    UserDrafts {
        user_id: &'a str,
        sport: Sport,
        season: Season,
    },
    League(&'a str),
    LeagueRosters(&'a str),
    LeagueUsers(&'a str),
    LeagueMatchups {
        league_id: &'a str,
        week: Week,
    },
    LeagueTransactions {
        league_id: &'a str,
        week: Week,
    },
    LeagueTradedPicks(&'a str),
    LeagueWinnersBracket(&'a str),
    LeagueLosersBracket(&'a str),
    LeagueDrafts(&'a str),
    NflPlayers,
    TrendingPlayers {
        sport: Sport,
        trending_type: TrendingType,
        /// Omitted from the query when zero.
        lookback_hours: u32,
        /// Omitted from the query when zero.
        limit: u32,
    },
    Draft(&'a str),
    DraftPicks(&'a str),
    DraftTradedPicks(&'a str),
}

/// Owned path segments from anything that displays.
macro_rules! segments {
    ($($part:expr),+ $(,)?) => {
        vec![$($part.to_string()),+]
    };
}

impl Endpoint<'_> {
    /// Path segments below the versioned base URL.
    pub fn segments(&self) -> Vec<String> {
        match *self {
            Endpoint::SportState(sport) => segments!["state", sport],
            Endpoint::User(identity) => segments!["user", identity],
            Endpoint::UserLeagues {
                user_id,
                sport,
                season,
            } => segments!["user", user_id, "leagues", sport, season],
            Endpoint::UserDrafts {
                user_id,
                sport,
                season,
            } => segments!["user", user_id, "drafts", sport, season],
            Endpoint::League(id) => segments!["league", id],
            Endpoint::LeagueRosters(id) => segments!["league", id, "rosters"],
            Endpoint::LeagueUsers(id) => segments!["league", id, "users"],
            Endpoint::LeagueMatchups { league_id, week } => {
                segments!["league", league_id, "matchups", week]
            }
            Endpoint::LeagueTransactions { league_id, week } => {
                segments!["league", league_id, "transactions", week]
            }
            Endpoint::LeagueTradedPicks(id) => segments!["league", id, "traded_picks"],
            Endpoint::LeagueWinnersBracket(id) => segments!["league", id, "winners_bracket"],
            Endpoint::LeagueLosersBracket(id) => segments!["league", id, "losers_bracket"],
            Endpoint::LeagueDrafts(id) => segments!["league", id, "drafts"],
            Endpoint::NflPlayers => segments!["players", "nfl"],
            Endpoint::TrendingPlayers {
                sport,
                trending_type,
                ..
            } => segments!["players", sport, "trending", trending_type],
            Endpoint::Draft(id) => segments!["draft", id],
            Endpoint::DraftPicks(id) => segments!["draft", id, "picks"],
            Endpoint::DraftTradedPicks(id) => segments!["draft", id, "traded_picks"],
        }
    }

    /// Query parameters, skipping any left at zero.
    pub fn query(&self) -> Vec<(&'static str, String)> {
        match *self {
            Endpoint::TrendingPlayers {
                lookback_hours,
                limit,
                ..
            } => [(QUERY_LOOKBACK_HOURS, lookback_hours), (QUERY_LIMIT, limit)]
                .into_iter()
                .filter(|(_, value)| *value != 0)
                .map(|(key, value)| (key, value.to_string()))
                .collect(),
            _ => Vec::new(),
        }
    }

    /// Full URL for this endpoint under `base`, e.g. `https://api.sleeper.app/v1`.
    ///
    /// Segments are percent-encoded, so identifiers cannot alter the path.
    pub fn url(&self, base: &Url) -> Result<Url> {
        let mut url = base.clone();
        url.path_segments_mut()
            .map_err(|_| SleeperError::config(format!("cannot append a path to {base}")))?
            .pop_if_empty()
            .extend(self.segments());

        let query = self.query();
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }

        Ok(url)
    }
}

/// URL of an avatar image, full size or thumbnail.
pub fn avatar_url(base: &Url, avatar_id: &str, thumbnail: bool) -> Result<Url> {
    let mut url = base.clone();
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|_| SleeperError::config(format!("cannot append a path to {base}")))?;
        segments.pop_if_empty();
        if thumbnail {
            segments.push("thumbs");
        }
        segments.push(avatar_id);
    }
    Ok(url)
}
