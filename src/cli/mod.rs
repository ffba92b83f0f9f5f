//! CLI argument definitions and parsing.

use std::path::PathBuf;
use std::time::Duration;

use clap::{Args, Parser, Subcommand};

use crate::client::ClientConfig;
use crate::types::{Season, Sport, TrendingType, Week};


/// League selection shared by the league commands
#[derive(Debug, Args)]
pub struct LeagueArg {
    /// League ID (or set `SLEEPER_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<String>,
}

/// User, sport, and season shared by the per-user listings
#[derive(Debug, Args)]
pub struct UserSeasonArgs {
    /// Numeric user ID (usernames are not accepted by these endpoints).
    pub user_id: String,

    /// Sport (nfl, nba, mlb, nhl).
    #[clap(long, default_value_t = Sport::Nfl)]
    pub sport: Sport,

    /// Season year (e.g. 2025).
    #[clap(long, short)]
    pub season: Season,
}

#[derive(Debug, Subcommand)]
pub enum GetCmd {
    /// Current week and season for a sport
    SportState {
        #[clap(long, default_value_t = Sport::Nfl)]
        sport: Sport,
    },

    /// A user by username or user ID
    User { identity: String },

    /// Leagues a user belongs to
    UserLeagues {
        #[clap(flatten)]
        args: UserSeasonArgs,
    },

    /// Drafts a user took part in
    UserDrafts {
        #[clap(flatten)]
        args: UserSeasonArgs,
    },

    /// League details and settings
    League {
        #[clap(flatten)]
        league: LeagueArg,
    },

    /// Every roster in a league
    Rosters {
        #[clap(flatten)]
        league: LeagueArg,
    },

    /// Members of a league
    LeagueUsers {
        #[clap(flatten)]
        league: LeagueArg,
    },

    /// Matchups for one week
    Matchups {
        #[clap(flatten)]
        league: LeagueArg,

        /// Single week.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,
    },

    /// Trades, waivers, and free-agent moves for one week
    Transactions {
        #[clap(flatten)]
        league: LeagueArg,

        /// Single week.
        #[clap(long, short, default_value_t = Week::default())]
        week: Week,
    },

    /// Future draft picks that changed hands in a league
    TradedPicks {
        #[clap(flatten)]
        league: LeagueArg,
    },

    /// Playoff winners bracket
    WinnersBracket {
        #[clap(flatten)]
        league: LeagueArg,
    },

    /// Playoff losers bracket
    LosersBracket {
        #[clap(flatten)]
        league: LeagueArg,
    },

    /// Drafts belonging to a league
    LeagueDrafts {
        #[clap(flatten)]
        league: LeagueArg,
    },

    /// A single draft
    Draft { draft_id: String },

    /// Every pick made in a draft
    DraftPicks { draft_id: String },

    /// Traded picks in a draft
    DraftTradedPicks { draft_id: String },

    /// The full NFL player database (several MB; fetch at most daily).
    Players {
        /// Write the JSON here instead of stdout.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },

    /// Most added or dropped players
    Trending {
        /// add or drop.
        #[clap(default_value_t = TrendingType::Add)]
        trending_type: TrendingType,

        #[clap(long, default_value_t = Sport::Nfl)]
        sport: Sport,

        /// Hours to look back (0 for the server default).
        #[clap(long, default_value_t = 0)]
        lookback_hours: u32,

        /// Players to return, at most 50 (0 for the server default).
        #[clap(long, default_value_t = 0)]
        limit: u32,
    },

    /// Download an avatar image
    Avatar {
        avatar_id: String,

        /// Fetch the thumbnail instead of the full image.
        #[clap(long)]
        thumbnail: bool,

        /// File to write the image to.
        #[clap(long, short)]
        output: PathBuf,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "sleeper", about = "Sleeper Fantasy API CLI")]
pub struct Sleeper {
    /// Per-request timeout in seconds (0 for the default of 30).
    #[clap(long, global = true, default_value_t = 0)]
    pub timeout_secs: u64,

    /// Sustained requests per second (0 for the default of 15).
    #[clap(long, global = true, default_value_t = 0.0)]
    pub rps: f64,

    /// Requests allowed back to back before throttling (0 for the default of 30).
    #[clap(long, global = true, default_value_t = 0)]
    pub burst: u32,

    /// Log each request to stderr.
    #[clap(long, short, global = true)]
    pub verbose: bool,

    #[clap(subcommand)]
    pub command: Commands,
}

impl Sleeper {
    /// Client configuration from the global flags; zeros fall back to defaults.
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::default()
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_rate_limit(self.rps, self.burst)
    }
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Get data from the Sleeper API
    Get {
        #[clap(subcommand)]
        cmd: GetCmd,
    },
}
