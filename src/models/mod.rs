//! Response shapes returned by the Sleeper API.
//!
//! Unknown fields are ignored and missing ones default, so additions on
//! Sleeper's side do not break decoding. Collections that the API sometimes
//! sends as `null` decode to empty.

pub mod draft;
pub mod flexible;
pub mod league;
pub mod player;
pub mod roster;
pub mod sport;
pub mod transaction;
pub mod user;


pub use draft::{Draft, DraftMetadata, DraftPick, DraftPickMetadata, DraftSettings};
pub use flexible::FlexibleString;
pub use league::{
    League, LeagueMetadata, LeagueSettings, Matchup, PlayoffMatchup, PlayoffMatchupFrom,
    ScoringSettings,
};
pub use player::{Player, PlayerMetadata, TrendingPlayer};
pub use roster::{Roster, RosterMetadata, RosterSettings};
pub use sport::SportState;
pub use transaction::{
    TradedDraftPick, Transaction, TransactionMetadata, TransactionSettings, TransactionType,
    WaiverBudget,
};
pub use user::{User, UserMetadata};

use serde::{Deserialize, Deserializer};

/// Decode `null` as `T::default()`.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
