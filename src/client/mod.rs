//! The Sleeper API client.
//!
//! [`SleeperClient`] owns one rate limiter and one HTTP transport for its whole
//! lifetime. Clones share both, so a single budget of requests covers every
//! clone and every task using them.
//!
//! # Example
//!
//! ```no_run
//! use sleeper_api::{SleeperClient, Sport};
//!
//! # async fn example() -> sleeper_api::Result<()> {
//! let client = SleeperClient::new()?;
//! let state = client.get_sport_state(Sport::Nfl).await?;
//! println!("NFL week {}", state.week);
//! # Ok(())
//! # }
//! ```

mod config;

pub use config::{
    ApiVersion, ClientConfig, ResolvedConfig, DEFAULT_AVATAR_BASE_URL, DEFAULT_BASE_URL,
    DEFAULT_TIMEOUT,
};

use std::sync::Arc;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use tokio_util::sync::CancellationToken;
use tracing::debug;
use url::Url;

use crate::api::endpoint::Endpoint;
use crate::core::{HttpTransport, RateLimiter, ReqwestTransport, RequestExecutor};
use crate::error::{Result, SleeperError};

/// Typed, rate-limited client for the Sleeper API.
#[derive(Clone)]
pub struct SleeperClient {
    inner: Arc<ClientInner>,
    cancel: CancellationToken,
}

struct ClientInner {
    executor: RequestExecutor,
    config: ResolvedConfig,
}

impl SleeperClient {
    /// Create a client with the default configuration.
    pub fn new() -> Result<Self> {
        Self::with_config(ClientConfig::default())
    }

    /// Create a client backed by a pooled reqwest client.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        let resolved = config.resolve()?;
        let transport = ReqwestTransport::new(resolved.timeout, &resolved.user_agent)?;
        Self::build(resolved, Arc::new(transport))
    }

    /// Create a client that sends requests through `transport`.
    pub fn with_transport(config: ClientConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        Self::build(config.resolve()?, transport)
    }

    fn build(config: ResolvedConfig, transport: Arc<dyn HttpTransport>) -> Result<Self> {
        let limiter = Arc::new(RateLimiter::new(config.requests_per_second, config.burst)?);
        let executor = RequestExecutor::new(transport, limiter, config.timeout)?;

        debug!(
            base_url = %config.api_base_url,
            rps = config.requests_per_second,
            burst = config.burst,
            timeout_ms = config.timeout.as_millis() as u64,
            "created Sleeper client"
        );

        Ok(Self {
            inner: Arc::new(ClientInner { executor, config }),
            cancel: CancellationToken::new(),
        })
    }

    /// A handle sharing this client's limiter and transport whose calls are
    /// cancelled when `token` is.
    pub fn with_cancellation(&self, token: CancellationToken) -> Self {
        Self {
            inner: self.inner.clone(),
            cancel: token,
        }
    }

    /// Token observed by every call made through this handle.
    pub fn cancellation_token(&self) -> &CancellationToken {
        &self.cancel
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        self.inner.executor.rate_limiter()
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.inner.config
    }

    /// GET an absolute URL through the rate limiter and return the raw body.
    pub async fn get_raw(&self, url: &Url) -> Result<Bytes> {
        self.inner.executor.execute(&self.cancel, url).await
    }

    pub(crate) fn endpoint_url(&self, endpoint: &Endpoint<'_>) -> Result<Url> {
        endpoint.url(&self.inner.config.api_base_url)
    }

    pub(crate) fn avatar_url(&self, avatar_id: &str, thumbnail: bool) -> Result<Url> {
        crate::api::endpoint::avatar_url(&self.inner.config.avatar_base_url, avatar_id, thumbnail)
    }

    /// Fetch `endpoint` and decode the body as `T`.
    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: Endpoint<'_>,
        what: &'static str,
    ) -> Result<T> {
        let url = self.endpoint_url(&endpoint)?;
        let body = self.get_raw(&url).await?;
        serde_json::from_slice(&body).map_err(|source| SleeperError::Decode { what, source })
    }
}

impl std::fmt::Debug for SleeperClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SleeperClient")
            .field("config", &self.inner.config)
            .field("cancelled", &self.cancel.is_cancelled())
            .finish()
    }
}
