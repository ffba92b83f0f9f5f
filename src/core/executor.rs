//! The single path every API call takes: rate-limit admission, GET, full
//! body read, status classification.

use std::sync::Arc;
use std::time::Duration;

use bytes::Bytes;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

use super::http::HttpTransport;
use super::rate_limit::RateLimiter;
use crate::error::{ApiError, RequestAborted, Result, SleeperError};


/// Executes one rate-limited GET per call.
///
/// Cloning is cheap; clones share the transport and the limiter.
#[derive(Clone)]
pub struct RequestExecutor {
    transport: Arc<dyn HttpTransport>,
    limiter: Arc<RateLimiter>,
    timeout: Duration,
}

impl RequestExecutor {
    /// `timeout` bounds the whole round trip including the body read.
    pub fn new(
        transport: Arc<dyn HttpTransport>,
        limiter: Arc<RateLimiter>,
        timeout: Duration,
    ) -> Result<Self> {
        if timeout.is_zero() {
            return Err(SleeperError::config("request timeout must be greater than zero"));
        }

        Ok(Self {
            transport,
            limiter,
            timeout,
        })
    }

    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.limiter
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// GET `url` and return the body of a 2xx response.
    ///
    /// Cancelling `cancel` before a rate-limit token is granted returns
    /// [`SleeperError::Cancelled`] and sends nothing. Cancelling it afterwards
    /// aborts the in-flight call with a [`SleeperError::Transport`] whose
    /// [`is_cancelled`](SleeperError::is_cancelled) is true. Nothing is retried.
    pub async fn execute(&self, cancel: &CancellationToken, url: &Url) -> Result<Bytes> {
        self.limiter.acquire(cancel).await?;

        debug!(%url, "sending request");

        let round_trip = timeout(self.timeout, self.round_trip(url));
        let (status, body) = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SleeperError::transport(RequestAborted)),
            outcome = round_trip => outcome.map_err(SleeperError::transport)??,
        };

        if (200..300).contains(&status) {
            debug!(%url, status, bytes = body.len(), "request succeeded");
            return Ok(body);
        }

        let err = ApiError::from_status(status);
        warn!(%url, status, message = %err.message, "API returned an error status");
        Err(err.into())
    }

    async fn round_trip(&self, url: &Url) -> Result<(u16, Bytes)> {
        let response = self
            .transport
            .get(url)
            .await
            .map_err(SleeperError::transport)?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(SleeperError::read)?;

        Ok((status, body))
    }
}

impl std::fmt::Debug for RequestExecutor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RequestExecutor")
            .field("limiter", &self.limiter)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}
