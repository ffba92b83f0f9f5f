//! Client configuration options.

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::core::http::USER_AGENT;
use crate::core::rate_limit::{DEFAULT_BURST, DEFAULT_REQUESTS_PER_SECOND};
use crate::error::{Result, SleeperError};

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Host serving the JSON API.
pub const DEFAULT_BASE_URL: &str = "https://api.sleeper.app";

/// Host serving avatar images.
pub const DEFAULT_AVATAR_BASE_URL: &str = "https://sleepercdn.com/avatars";

/// Sleeper API version segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ApiVersion {
    #[default]
    V1,
}

impl ApiVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiVersion::V1 => "v1",
        }
    }
}

impl fmt::Display for ApiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for [`SleeperClient`](crate::SleeperClient).
///
/// Zero values for `timeout`, `rate_limit_rps`, and `rate_limit_burst` mean
/// "use the default". Sleeper may block IPs that exceed 1000 requests per
/// minute; the defaults (15 requests/second, burst of 30) stay under that.
///
/// # Example
///
/// ```
/// use sleeper_api::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(10))
///     .with_rate_limit(5.0, 10);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub api_version: ApiVersion,
    /// Bounds each call end to end, including reading the body.
    pub timeout: Duration,
    /// Sustained requests per second.
    pub rate_limit_rps: f64,
    /// Requests that may go out back to back before throttling starts.
    pub rate_limit_burst: u32,
    pub base_url: Url,
    pub avatar_base_url: Url,
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_version: ApiVersion::default(),
            timeout: DEFAULT_TIMEOUT,
            rate_limit_rps: DEFAULT_REQUESTS_PER_SECOND,
            rate_limit_burst: DEFAULT_BURST,
            base_url: default_url(DEFAULT_BASE_URL),
            avatar_base_url: default_url(DEFAULT_AVATAR_BASE_URL),
            user_agent: USER_AGENT.to_string(),
        }
    }
}

fn default_url(raw: &'static str) -> Url {
    // Constant input; parsing cannot fail.
    Url::parse(raw).unwrap_or_else(|err| panic!("invalid built-in URL {raw}: {err}"))
}

impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the sustained rate and the burst capacity.
    pub fn with_rate_limit(mut self, requests_per_second: f64, burst: u32) -> Self {
        self.rate_limit_rps = requests_per_second;
        self.rate_limit_burst = burst;
        self
    }

    /// Point the client at another API host, e.g. a mock server.
    pub fn with_base_url(mut self, base_url: Url) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn with_avatar_base_url(mut self, avatar_base_url: Url) -> Self {
        self.avatar_base_url = avatar_base_url;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Check every field and report all problems at once.
    pub fn validate(&self) -> Result<()> {
        let mut errs = Vec::new();

        if self.rate_limit_rps.is_nan() || self.rate_limit_rps < 0.0 {
            errs.push("rate_limit_rps must be greater than or equal to zero".to_string());
        } else if self.rate_limit_rps.is_infinite() {
            errs.push("rate_limit_rps must be finite".to_string());
        }
        for (name, url) in [
            ("base_url", &self.base_url),
            ("avatar_base_url", &self.avatar_base_url),
        ] {
            if !matches!(url.scheme(), "http" | "https") || url.cannot_be_a_base() {
                errs.push(format!("{name} must be an absolute http(s) URL, got {url}"));
            }
        }
        if self.user_agent.trim().is_empty() {
            errs.push("user_agent must not be empty".to_string());
        }

        if errs.is_empty() {
            Ok(())
        } else {
            Err(SleeperError::config(format!(
                "invalid config: {}",
                errs.join("\n")
            )))
        }
    }

    /// Validate, then replace zero values with defaults.
    pub fn resolve(self) -> Result<ResolvedConfig> {
        self.validate()?;

        let timeout = if self.timeout.is_zero() {
            DEFAULT_TIMEOUT
        } else {
            self.timeout
        };
        let requests_per_second = if self.rate_limit_rps == 0.0 {
            DEFAULT_REQUESTS_PER_SECOND
        } else {
            self.rate_limit_rps
        };
        let burst = if self.rate_limit_burst == 0 {
            DEFAULT_BURST
        } else {
            self.rate_limit_burst
        };

        let mut api_base_url = self.base_url;
        api_base_url
            .path_segments_mut()
            .map_err(|_| SleeperError::config("base_url cannot carry a path"))?
            .pop_if_empty()
            .push(self.api_version.as_str());

        Ok(ResolvedConfig {
            timeout,
            requests_per_second,
            burst,
            api_base_url,
            avatar_base_url: self.avatar_base_url,
            user_agent: self.user_agent,
        })
    }
}

/// Configuration with every default applied; what the client actually runs with.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub timeout: Duration,
    pub requests_per_second: f64,
    pub burst: u32,
    /// Base URL including the version segment, e.g. `https://api.sleeper.app/v1`.
    pub api_base_url: Url,
    pub avatar_base_url: Url,
    pub user_agent: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.rate_limit_rps, 15.0);
        assert_eq!(config.rate_limit_burst, 30);
        assert_eq!(config.api_version, ApiVersion::V1);
        assert_eq!(config.base_url.as_str(), "https://api.sleeper.app/");
    }

    #[test]
    fn test_zero_values_resolve_to_defaults() {
        let resolved = ClientConfig::default()
            .with_timeout(Duration::ZERO)
            .with_rate_limit(0.0, 0)
            .resolve()
            .unwrap();

        assert_eq!(resolved.timeout, DEFAULT_TIMEOUT);
        assert_eq!(resolved.requests_per_second, DEFAULT_REQUESTS_PER_SECOND);
        assert_eq!(resolved.burst, DEFAULT_BURST);
    }

    #[test]
    fn test_custom_values_are_kept() {
        let resolved = ClientConfig::default()
            .with_timeout(Duration::from_secs(10))
            .with_rate_limit(5.0, 7)
            .resolve()
            .unwrap();

        assert_eq!(resolved.timeout, Duration::from_secs(10));
        assert_eq!(resolved.requests_per_second, 5.0);
        assert_eq!(resolved.burst, 7);
    }

    #[test]
    fn test_api_base_url_includes_version() {
        let resolved = ClientConfig::default().resolve().unwrap();
        assert_eq!(resolved.api_base_url.as_str(), "https://api.sleeper.app/v1");

        let custom = ClientConfig::default()
            .with_base_url(Url::parse("http://127.0.0.1:8080/").unwrap())
            .resolve()
            .unwrap();
        assert_eq!(custom.api_base_url.as_str(), "http://127.0.0.1:8080/v1");
    }

    #[test]
    fn test_negative_rate_is_rejected() {
        let err = ClientConfig::default()
            .with_rate_limit(-1.0, 0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, SleeperError::Config { .. }));
        assert!(err.to_string().contains("rate_limit_rps"));
    }

    #[test]
    fn test_nan_and_infinite_rates_are_rejected() {
        assert!(ClientConfig::default()
            .with_rate_limit(f64::NAN, 1)
            .validate()
            .is_err());
        assert!(ClientConfig::default()
            .with_rate_limit(f64::INFINITY, 1)
            .validate()
            .is_err());
    }

    #[test]
    fn test_all_problems_are_reported_together() {
        let err = ClientConfig::default()
            .with_rate_limit(-3.0, 1)
            .with_base_url(Url::parse("ftp://example.com").unwrap())
            .with_user_agent("  ")
            .validate()
            .unwrap_err()
            .to_string();

        assert!(err.contains("rate_limit_rps"));
        assert!(err.contains("base_url"));
        assert!(err.contains("user_agent"));
        assert_eq!(err.matches('\n').count(), 2);
    }

    #[test]
    fn test_api_version_display() {
        assert_eq!(ApiVersion::V1.to_string(), "v1");
    }
}
