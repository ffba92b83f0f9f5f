//! Unit tests for the token-bucket rate limiter

use super::*;
use futures::FutureExt;
use std::sync::Arc;

/// Poll `acquire` once: true when a token was granted without waiting.
fn acquire_now(limiter: &RateLimiter) -> bool {
    let cancel = CancellationToken::new();
    matches!(limiter.acquire(&cancel).now_or_never(), Some(Ok(())))
}

#[cfg(test)]
mod construction_tests {
    use super::*;

    #[test]
    fn test_new_accepts_positive_rate_and_burst() {
        let limiter = RateLimiter::new(2.5, 4).unwrap();
        assert_eq!(limiter.rate(), 2.5);
        assert_eq!(limiter.burst(), 4);
        assert_eq!(limiter.dispensed(), 0);
    }

    #[test]
    fn test_new_rejects_zero_rate() {
        let err = RateLimiter::new(0.0, 1).unwrap_err();
        assert!(matches!(err, SleeperError::Config { .. }));
    }

    #[test]
    fn test_new_rejects_negative_and_non_finite_rates() {
        for rate in [-1.0, f64::NAN, f64::INFINITY] {
            assert!(RateLimiter::new(rate, 5).is_err(), "rate {rate} accepted");
        }
    }

    #[test]
    fn test_new_rejects_zero_burst() {
        let err = RateLimiter::new(10.0, 0).unwrap_err();
        assert!(err.to_string().contains("burst"));
    }

    #[test]
    fn test_tiny_rate_wait_saturates() {
        let bucket = Bucket {
            tokens: 0.0,
            last_refill: Instant::now(),
        };
        assert_eq!(bucket.wait_for_token(1e-20), Duration::MAX);
        assert_eq!(bucket.wait_for_token(2.0), Duration::from_millis(500));
    }

    #[test]
    fn test_default_constants() {
        assert_eq!(DEFAULT_REQUESTS_PER_SECOND, 15.0);
        assert_eq!(DEFAULT_BURST, 30);
    }
}

#[cfg(test)]
mod acquire_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_full_bucket_admits_burst_without_waiting() {
        let limiter = RateLimiter::new(5.0, 10).unwrap();
        let cancel = CancellationToken::new();
        let start = Instant::now();

        for _ in 0..10 {
            limiter.acquire(&cancel).await.unwrap();
        }

        assert_eq!(start.elapsed(), Duration::ZERO);
        assert_eq!(limiter.dispensed(), 10);
    }

    #[tokio::test(start_paused = true)]
    async fn test_acquire_past_burst_waits_one_refill_interval() {
        let limiter = RateLimiter::new(4.0, 3).unwrap();
        let cancel = CancellationToken::new();

        for _ in 0..3 {
            limiter.acquire(&cancel).await.unwrap();
        }

        let start = Instant::now();
        limiter.acquire(&cancel).await.unwrap();
        let waited = start.elapsed();

        assert!(waited >= Duration::from_millis(250), "waited {waited:?}");
        assert!(waited < Duration::from_millis(300), "waited {waited:?}");
        assert_eq!(limiter.dispensed(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_steady_state_spacing_matches_rate() {
        let limiter = RateLimiter::new(10.0, 1).unwrap();
        let cancel = CancellationToken::new();
        limiter.acquire(&cancel).await.unwrap();

        let start = Instant::now();
        for _ in 0..5 {
            limiter.acquire(&cancel).await.unwrap();
        }

        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(500), "elapsed {elapsed:?}");
        assert!(elapsed < Duration::from_millis(550), "elapsed {elapsed:?}");
    }

    #[tokio::test(start_paused = true)]
    async fn test_idle_refill_is_capped_at_burst() {
        let limiter = RateLimiter::new(100.0, 2).unwrap();
        let cancel = CancellationToken::new();
        limiter.acquire(&cancel).await.unwrap();
        limiter.acquire(&cancel).await.unwrap();

        // Long enough to accrue far more than two tokens.
        tokio::time::advance(Duration::from_secs(60)).await;

        assert!(acquire_now(&limiter));
        assert!(acquire_now(&limiter));
        assert!(!acquire_now(&limiter));
    }

    #[tokio::test(start_paused = true)]
    async fn test_empty_bucket_refills_after_one_interval() {
        let limiter = RateLimiter::new(1.0, 1).unwrap();
        assert!(acquire_now(&limiter));
        assert!(!acquire_now(&limiter));
        assert_eq!(limiter.dispensed(), 1);

        tokio::time::advance(Duration::from_secs(1)).await;
        assert!(acquire_now(&limiter));
        assert_eq!(limiter.dispensed(), 2);
    }
}

#[cfg(test)]
mod slow_rate_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_tiny_rate_waits_instead_of_panicking() {
        let limiter = Arc::new(RateLimiter::new(1e-20, 1).unwrap());
        let cancel = CancellationToken::new();
        limiter.acquire(&cancel).await.unwrap();

        let waiter = {
            let limiter = limiter.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move { limiter.acquire(&cancel).await })
        };

        tokio::time::sleep(Duration::from_secs(3600)).await;
        assert!(!waiter.is_finished());

        cancel.cancel();
        let err = waiter.await.unwrap().unwrap_err();
        assert!(matches!(err, SleeperError::Cancelled));
        assert_eq!(limiter.dispensed(), 1);
    }
}

#[cfg(test)]
mod cancellation_tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_pre_cancelled_token_fails_without_taking_a_token() {
        let limiter = RateLimiter::new(1.0, 1).unwrap();
        let cancel = CancellationToken::new();
        cancel.cancel();

        let err = limiter.acquire(&cancel).await.unwrap_err();
        assert!(matches!(err, SleeperError::Cancelled));
        assert_eq!(limiter.dispensed(), 0);

        // The token is still there for the next caller.
        assert!(acquire_now(&limiter));
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_while_waiting_returns_cancelled() {
        let limiter = Arc::new(RateLimiter::new(0.5, 1).unwrap());
        let cancel = CancellationToken::new();
        limiter.acquire(&cancel).await.unwrap();

        let waiter = {
            let limiter = limiter.clone();
            let cancel = cancel.clone();
            tokio::spawn(async move { limiter.acquire(&cancel).await })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        cancel.cancel();

        let err = waiter.await.unwrap().unwrap_err();
        assert!(matches!(err, SleeperError::Cancelled));
        assert_eq!(limiter.dispensed(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancelled_waiter_does_not_block_the_next_one() {
        let limiter = Arc::new(RateLimiter::new(1.0, 1).unwrap());
        let never = CancellationToken::new();
        limiter.acquire(&never).await.unwrap();

        let doomed = CancellationToken::new();
        let first = {
            let limiter = limiter.clone();
            let doomed = doomed.clone();
            tokio::spawn(async move { limiter.acquire(&doomed).await })
        };
        let second = {
            let limiter = limiter.clone();
            let never = never.clone();
            tokio::spawn(async move {
                let start = Instant::now();
                limiter.acquire(&never).await.map(|_| start.elapsed())
            })
        };

        tokio::time::sleep(Duration::from_millis(10)).await;
        doomed.cancel();

        assert!(first.await.unwrap().is_err());
        let waited = second.await.unwrap().unwrap();
        assert!(waited < Duration::from_millis(1050), "waited {waited:?}");
        assert_eq!(limiter.dispensed(), 2);
    }
}

#[cfg(test)]
mod fairness_tests {
    use super::*;
    use tokio::sync::Mutex as AsyncMutex;

    #[tokio::test(start_paused = true)]
    async fn test_waiters_are_admitted_in_arrival_order() {
        let limiter = Arc::new(RateLimiter::new(10.0, 1).unwrap());
        let cancel = CancellationToken::new();
        limiter.acquire(&cancel).await.unwrap();

        let order = Arc::new(AsyncMutex::new(Vec::new()));
        let mut handles = Vec::new();
        for id in 0..4 {
            let limiter = limiter.clone();
            let cancel = cancel.clone();
            let order = order.clone();
            handles.push(tokio::spawn(async move {
                limiter.acquire(&cancel).await.unwrap();
                order.lock().await.push(id);
            }));
            // Make arrival order unambiguous.
            tokio::task::yield_now().await;
        }

        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(*order.lock().await, vec![0, 1, 2, 3]);
        assert_eq!(limiter.dispensed(), 5);
    }
}
