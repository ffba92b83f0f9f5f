//! Sports and trending-list kinds.

use crate::error::SleeperError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Sports the Sleeper API serves.
///
/// # Examples
///
/// ```rust
/// use sleeper_api::Sport;
///
/// assert_eq!(Sport::Nfl.to_string(), "nfl");
/// assert_eq!("NBA".parse::<Sport>().unwrap(), Sport::Nba);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Nfl,
    Nba,
    Mlb,
    Nhl,
}

impl Sport {
    pub const ALL: [Sport; 4] = [Sport::Nfl, Sport::Nba, Sport::Mlb, Sport::Nhl];

    /// Path segment used by the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Nfl => "nfl",
            Sport::Nba => "nba",
            Sport::Mlb => "mlb",
            Sport::Nhl => "nhl",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Sport {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "nfl" => Ok(Sport::Nfl),
            "nba" => Ok(Sport::Nba),
            "mlb" => Ok(Sport::Mlb),
            "nhl" => Ok(Sport::Nhl),
            _ => Err(SleeperError::InvalidInput {
                message: format!("unknown sport {s:?}, expected one of nfl, nba, mlb, nhl"),
            }),
        }
    }
}

/// Which trending list to fetch: most added or most dropped players.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendingType {
    Add,
    Drop,
}

impl TrendingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TrendingType::Add => "add",
            TrendingType::Drop => "drop",
        }
    }
}

impl fmt::Display for TrendingType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TrendingType {
    type Err = SleeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "add" => Ok(TrendingType::Add),
            "drop" => Ok(TrendingType::Drop),
            _ => Err(SleeperError::InvalidInput {
                message: format!("unknown trending type {s:?}, expected add or drop"),
            }),
        }
    }
}
