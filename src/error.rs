//! Error types for the Sleeper API client

use std::fmt;

use thiserror::Error;

#[cfg(test)]
mod tests;

pub type Result<T> = std::result::Result<T, SleeperError>;

/// Boxed cause carried by transport and read failures.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum SleeperError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid request: {message}")]
    InvalidInput { message: String },

    #[error("Request cancelled before it was sent")]
    Cancelled,

    #[error("Completing request: {source}")]
    Transport {
        #[source]
        source: BoxError,
    },

    #[error("Reading response: {source}")]
    Read {
        #[source]
        source: BoxError,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Decoding {what}: {source}")]
    Decode {
        what: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{what} not found")]
    NotFound { what: &'static str },

    #[error("League ID not provided and {env_var} environment variable not set")]
    MissingLeagueId { env_var: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl SleeperError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        SleeperError::Config {
            message: message.into(),
        }
    }

    pub(crate) fn transport(source: impl Into<BoxError>) -> Self {
        SleeperError::Transport {
            source: source.into(),
        }
    }

    pub(crate) fn read(source: impl Into<BoxError>) -> Self {
        SleeperError::Read {
            source: source.into(),
        }
    }

    /// True when the caller's cancellation token ended the call, either while
    /// waiting for a rate-limit token or while the request was in flight.
    pub fn is_cancelled(&self) -> bool {
        match self {
            SleeperError::Cancelled => true,
            SleeperError::Transport { source } => source.is::<RequestAborted>(),
            _ => false,
        }
    }

    /// True when the per-client timeout expired before the call completed.
    pub fn is_timeout(&self) -> bool {
        match self {
            SleeperError::Transport { source } => {
                if source.is::<tokio::time::error::Elapsed>() {
                    return true;
                }
                source
                    .downcast_ref::<reqwest::Error>()
                    .is_some_and(reqwest::Error::is_timeout)
            }
            _ => false,
        }
    }

    /// HTTP status of a non-2xx response, if that is what failed.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            SleeperError::Api(err) => Some(err.status_code),
            _ => None,
        }
    }
}

/// A non-2xx response from the Sleeper API.
///
/// The message is the standard reason phrase for the status code; the
/// response body is not kept.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("API error: {status_code} {message}")]
pub struct ApiError {
    pub status_code: u16,
    pub message: String,
}

impl ApiError {
    /// Build an error from a status code, looking up its reason phrase.
    ///
    /// Codes without a registered phrase get an empty message.
    pub fn from_status(status_code: u16) -> Self {
        let message = reqwest::StatusCode::from_u16(status_code)
            .ok()
            .and_then(|status| status.canonical_reason())
            .unwrap_or_default()
            .to_string();

        Self {
            status_code,
            message,
        }
    }
}

/// Source of a [`SleeperError::Transport`] raised when the caller cancels an
/// in-flight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestAborted;

impl fmt::Display for RequestAborted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "request aborted by caller")
    }
}

impl std::error::Error for RequestAborted {}
