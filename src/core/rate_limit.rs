//! Token-bucket admission gate for outbound requests.
//!
//! Tokens accrue continuously at `rate` per second up to `burst`. Every
//! admitted request takes exactly one token. Waiters queue on an async mutex,
//! which hands the bucket out in arrival order, so a waiting caller is only
//! ever behind the callers that arrived before it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::error::{Result, SleeperError};

#[cfg(test)]
mod tests;

/// Sustained request rate used when the caller does not pick one.
pub const DEFAULT_REQUESTS_PER_SECOND: f64 = 15.0;

/// Burst capacity used when the caller does not pick one.
pub const DEFAULT_BURST: u32 = 30;

#[derive(Debug)]
struct Bucket {
    tokens: f64,
    last_refill: Instant,
}

impl Bucket {
    fn refill(&mut self, now: Instant, rate: f64, burst: f64) {
        let elapsed = now.saturating_duration_since(self.last_refill).as_secs_f64();
        self.tokens = (self.tokens + elapsed * rate).min(burst);
        self.last_refill = now;
    }

    /// Time until one whole token is available.
    ///
    /// Saturates at `Duration::MAX` for rates too slow to represent.
    fn wait_for_token(&self, rate: f64) -> Duration {
        Duration::try_from_secs_f64((1.0 - self.tokens).max(0.0) / rate).unwrap_or(Duration::MAX)
    }
}

/// Rate limiter shared by every request a client makes.
#[derive(Debug)]
pub struct RateLimiter {
    rate: f64,
    burst: u32,
    bucket: Mutex<Bucket>,
    dispensed: AtomicU64,
}

impl RateLimiter {
    /// Create a limiter that starts with a full bucket.
    ///
    /// `rate` must be a positive, finite number of tokens per second and
    /// `burst` at least one.
    pub fn new(rate: f64, burst: u32) -> Result<Self> {
        if !rate.is_finite() || rate <= 0.0 {
            return Err(SleeperError::config(format!(
                "rate limit must be a positive number of requests per second, got {rate}"
            )));
        }
        if burst == 0 {
            return Err(SleeperError::config("burst capacity must be at least 1"));
        }

        Ok(Self {
            rate,
            burst,
            bucket: Mutex::new(Bucket {
                tokens: f64::from(burst),
                last_refill: Instant::now(),
            }),
            dispensed: AtomicU64::new(0),
        })
    }

    /// Wait for one token and take it.
    ///
    /// Fails with [`SleeperError::Cancelled`] if `cancel` fires first, in which
    /// case no token is taken. A token that is already fired fails immediately.
    pub async fn acquire(&self, cancel: &CancellationToken) -> Result<()> {
        if cancel.is_cancelled() {
            return Err(SleeperError::Cancelled);
        }

        let mut bucket = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(SleeperError::Cancelled),
            bucket = self.bucket.lock() => bucket,
        };

        let burst = f64::from(self.burst);
        loop {
            bucket.refill(Instant::now(), self.rate, burst);
            if bucket.tokens >= 1.0 {
                bucket.tokens -= 1.0;
                self.dispensed.fetch_add(1, Ordering::Relaxed);
                return Ok(());
            }

            let wait = bucket.wait_for_token(self.rate);
            debug!(wait_ms = wait.as_millis() as u64, "waiting for rate limit token");

            tokio::select! {
                biased;
                _ = cancel.cancelled() => return Err(SleeperError::Cancelled),
                _ = sleep(wait) => {}
            }
        }
    }

    /// Refill rate in tokens per second.
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Maximum number of tokens the bucket holds.
    pub fn burst(&self) -> u32 {
        self.burst
    }

    /// Total tokens handed out since construction.
    pub fn dispensed(&self) -> u64 {
        self.dispensed.load(Ordering::Relaxed)
    }
}
