//! HTTP transport used by the request executor.
//!
//! The executor only needs "GET this URL, give me the status and a way to
//! drain the body". [`HttpTransport`] is that seam; [`ReqwestTransport`] is
//! the production implementation and tests substitute their own.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use futures::future::BoxFuture;
use futures::FutureExt;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::{Client, StatusCode};
use url::Url;

use crate::error::{BoxError, Result, SleeperError};

/// Default `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!("sleeper-api/", env!("CARGO_PKG_VERSION"));

/// Status line plus a not-yet-read body.
pub struct TransportResponse {
    status: StatusCode,
    body: BoxFuture<'static, std::result::Result<Bytes, BoxError>>,
}

impl TransportResponse {
    /// Wrap a status and a future that drains the body.
    pub fn new<F>(status: StatusCode, body: F) -> Self
    where
        F: std::future::Future<Output = std::result::Result<Bytes, BoxError>> + Send + 'static,
    {
        Self {
            status,
            body: body.boxed(),
        }
    }

    /// A response whose body is already in memory.
    pub fn from_bytes(status: StatusCode, body: impl Into<Bytes>) -> Self {
        let body = body.into();
        Self::new(status, async move { Ok(body) })
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Read the entire body into memory.
    pub async fn bytes(self) -> std::result::Result<Bytes, BoxError> {
        self.body.await
    }
}

impl fmt::Debug for TransportResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportResponse")
            .field("status", &self.status)
            .finish_non_exhaustive()
    }
}

/// Something that can perform a GET round trip.
///
/// Implementations must be safe to share between concurrent callers.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Send a GET and return once the status line and headers have arrived.
    async fn get(&self, url: &Url) -> std::result::Result<TransportResponse, BoxError>;
}

/// [`HttpTransport`] backed by a pooled `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Build a client with the given overall timeout and user agent.
    pub fn new(timeout: Duration, user_agent: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|err| SleeperError::config(format!("building HTTP client: {err}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, url: &Url) -> std::result::Result<TransportResponse, BoxError> {
        let response = self.client.get(url.clone()).send().await?;
        let status = response.status();

        Ok(TransportResponse::new(status, async move {
            response.bytes().await.map_err(BoxError::from)
        }))
    }
}
