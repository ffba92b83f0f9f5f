//! Sleeper API resources.
//!
//! Each module adds the methods for one group of endpoints to
//! [`SleeperClient`](crate::SleeperClient). Arguments are validated before
//! any request is made, so bad input never spends a rate-limit token.

pub mod endpoint;
pub mod validate;

mod avatar;
mod drafts;
mod leagues;
mod players;
mod sport;
mod users;

pub use endpoint::Endpoint;
pub use players::TrendingPlayerOptions;
pub use validate::MAX_TRENDING_LIMIT;

use serde::de::DeserializeOwned;

use crate::client::SleeperClient;
use crate::error::{Result, SleeperError};

impl SleeperClient {
    /// Fetch a single resource; a `null` body means it does not exist.
    pub(crate) async fn get_one<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        what: &'static str,
    ) -> Result<T> {
        self.get_json::<Option<T>>(endpoint, what)
            .await?
            .ok_or(SleeperError::NotFound { what })
    }

    /// Fetch a collection; a `null` body decodes as empty.
    pub(crate) async fn get_list<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        what: &'static str,
    ) -> Result<Vec<T>> {
        Ok(self
            .get_json::<Option<Vec<T>>>(endpoint, what)
            .await?
            .unwrap_or_default())
    }

    /// Fetch a collection that must not be empty.
    pub(crate) async fn get_non_empty<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        what: &'static str,
    ) -> Result<Vec<T>> {
        let items = self.get_list(endpoint, what).await?;
        if items.is_empty() {
            return Err(SleeperError::NotFound { what });
        }
        Ok(items)
    }
}
