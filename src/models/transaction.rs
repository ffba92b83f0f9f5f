use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Kind of roster move.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionType {
    Trade,
    Waiver,
    FreeAgent,
    Commissioner,
    /// Any type this crate does not know yet.
    #[default]
    #[serde(other)]
    Unknown,
}

impl TransactionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Trade => "trade",
            TransactionType::Waiver => "waiver",
            TransactionType::FreeAgent => "free_agent",
            TransactionType::Commissioner => "commissioner",
            TransactionType::Unknown => "unknown",
        }
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A trade, waiver claim, or free-agent move.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// `complete` or `failed`.
    pub status: String,
    pub status_updated: Option<i64>,
    pub created: Option<i64>,
    /// User ID of whoever started the transaction.
    pub creator: Option<String>,
    /// Week, for football.
    pub leg: u32,
    #[serde(deserialize_with = "null_as_default")]
    pub roster_ids: Vec<u32>,
    /// Rosters that agreed to the transaction.
    #[serde(deserialize_with = "null_as_default")]
    pub consenter_ids: Vec<u32>,
    /// Player ID to the roster receiving them.
    #[serde(deserialize_with = "null_as_default")]
    pub adds: BTreeMap<String, u32>,
    /// Player ID to the roster releasing them.
    #[serde(deserialize_with = "null_as_default")]
    pub drops: BTreeMap<String, u32>,
    #[serde(deserialize_with = "null_as_default")]
    pub draft_picks: Vec<TradedDraftPick>,
    #[serde(deserialize_with = "null_as_default")]
    pub waiver_budget: Vec<WaiverBudget>,
    /// Not used by trades.
    pub settings: Option<TransactionSettings>,
    pub metadata: Option<TransactionMetadata>,
}

impl Transaction {
    pub fn is_complete(&self) -> bool {
        self.status == "complete"
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransactionSettings {
    pub waiver_bid: Option<u32>,
    pub seq: Option<i64>,
}

/// Notes, e.g. why a waiver claim failed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TransactionMetadata {
    pub notes: Option<String>,
}

/// A future draft pick that changed hands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct TradedDraftPick {
    pub season: String,
    pub round: u32,
    /// Roster that originally owned the pick.
    pub roster_id: u32,
    pub previous_owner_id: Option<u32>,
    /// Roster that owns the pick now.
    pub owner_id: u32,
}

/// FAAB dollars moved between rosters in a trade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct WaiverBudget {
    pub sender: u32,
    pub receiver: u32,
    pub amount: u32,
}
