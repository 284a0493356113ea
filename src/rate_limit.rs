//! Fixed-window rate limiting for upstream requests.
//!
//! The upstream quotes API is shared and unauthenticated, so the client keeps
//! its own request budget: at most `max_requests` calls within any
//! `window_seconds` period. When the budget is spent the caller waits out the
//! remainder of the window instead of failing.
//!
//! # Example
//!
//! ```rust
//! use quotes_api_client::rate_limit::{FixedWindow, RateLimitConfig};
//!
//! let mut limiter = FixedWindow::new(RateLimitConfig {
//!     max_requests: 5,
//!     window_seconds: 60,
//! });
//!
//! // Check whether a request may go out now
//! assert!(limiter.try_acquire().is_ok());
//! ```

use std::time::{Duration, Instant};

/// Rate limiter configuration.
#[derive(Debug, Clone, Copy)]
pub struct RateLimitConfig {
    /// Maximum requests per window.
    pub max_requests: u32,
    /// Window duration in seconds.
    pub window_seconds: u64,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self {
            max_requests: 10,
            window_seconds: 60,
        }
    }
}

/// A fixed-window rate limiter.
///
/// Counts requests against a window anchored at the first request after a
/// reset. When a check finds the anchor older than the window, the counter
/// resets and a new window starts at that check. After a caller has waited
/// out an exhausted window, the next window is anchored at the moment the
/// wait ended rather than at the old boundary, so the effective window can
/// drift forward under sustained contention. That drift is part of the
/// observable behaviour and is kept intact.
#[derive(Debug)]
pub struct FixedWindow {
    /// Maximum requests per window
    max_requests: u32,
    /// Window duration
    window: Duration,
    /// Requests counted against the current window
    request_count: u32,
    /// Start of the current window, unset until the first acquire
    window_start: Option<Instant>,
}

impl FixedWindow {
    /// Create a new fixed-window rate limiter from a configuration.
    pub fn new(config: RateLimitConfig) -> Self {
        Self::with_window(config.max_requests, Duration::from_secs(config.window_seconds))
    }

    /// Create a limiter with an explicit window duration.
    pub fn with_window(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            request_count: 0,
            window_start: None,
        }
    }

    /// Try to acquire a permit for one upstream request.
    ///
    /// Returns `Ok(())` if the request may proceed now, or `Err(wait_time)`
    /// with the remaining window duration if the budget is spent. The caller
    /// is expected to sleep for `wait_time` and call again; the retry will
    /// find the window expired and start a fresh one.
    pub fn try_acquire(&mut self) -> Result<(), Duration> {
        let now = Instant::now();

        // Reset if the window has expired (or was never started).
        let window_start = match self.window_start {
            Some(start) if now <= start + self.window => start,
            _ => {
                tracing::debug!("rate limit window reset");
                self.request_count = 0;
                self.window_start = Some(now);
                now
            }
        };

        if self.request_count >= self.max_requests {
            let remaining = (window_start + self.window).saturating_duration_since(now);
            if !remaining.is_zero() {
                return Err(remaining);
            }
            // Exactly at the boundary: start a fresh window anchored at now.
            self.request_count = 0;
            self.window_start = Some(now);
        }

        // The call itself counts toward the window.
        self.request_count += 1;
        tracing::debug!(
            count = self.request_count,
            max = self.max_requests,
            "request counted against rate limit window"
        );
        Ok(())
    }

    /// Permits left in the current window.
    pub fn remaining(&self) -> u32 {
        match self.window_start {
            Some(start) if start.elapsed() <= self.window => {
                self.max_requests.saturating_sub(self.request_count)
            }
            _ => self.max_requests,
        }
    }

    /// Time until the current window expires.
    ///
    /// Returns `None` when no window is active or it has already expired.
    pub fn time_until_reset(&self) -> Option<Duration> {
        self.window_start.and_then(|start| {
            let remaining = self.window.saturating_sub(start.elapsed());
            if remaining.is_zero() { None } else { Some(remaining) }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    fn make_limiter(max_requests: u32, window_seconds: u64) -> FixedWindow {
        FixedWindow::new(RateLimitConfig {
            max_requests,
            window_seconds,
        })
    }

    #[test]
    fn test_allows_within_limit() {
        let mut limiter = make_limiter(3, 10);

        assert!(limiter.try_acquire().is_ok());
        assert!(limiter.try_acquire().is_ok());
        assert!(limiter.try_acquire().is_ok());
        assert!(limiter.try_acquire().is_err());
    }

    #[test]
    fn test_wait_time_is_remaining_window() {
        let mut limiter = make_limiter(2, 10);

        limiter.try_acquire().ok();
        limiter.try_acquire().ok();

        let wait = limiter.try_acquire().unwrap_err();
        // Only a moment has elapsed, so nearly the whole window remains.
        assert!(wait > Duration::from_secs(9));
        assert!(wait <= Duration::from_secs(10));
    }

    #[test]
    fn test_resets_after_window() {
        let mut limiter = FixedWindow::with_window(2, Duration::from_millis(50));

        assert!(limiter.try_acquire().is_ok());
        assert!(limiter.try_acquire().is_ok());
        assert!(limiter.try_acquire().is_err());

        thread::sleep(Duration::from_millis(60));

        assert!(limiter.try_acquire().is_ok());
    }

    #[test]
    fn test_window_reanchors_after_waiting() {
        let mut limiter = FixedWindow::with_window(1, Duration::from_millis(50));

        assert!(limiter.try_acquire().is_ok());
        let wait = limiter.try_acquire().unwrap_err();
        thread::sleep(wait + Duration::from_millis(5));

        // The retry lands in a window anchored at the moment the wait ended.
        assert!(limiter.try_acquire().is_ok());
        let remaining = limiter.time_until_reset().unwrap();
        assert!(remaining > Duration::from_millis(40));
    }

    #[test]
    fn test_remaining() {
        let mut limiter = make_limiter(3, 10);

        assert_eq!(limiter.remaining(), 3);
        limiter.try_acquire().ok();
        assert_eq!(limiter.remaining(), 2);
        limiter.try_acquire().ok();
        limiter.try_acquire().ok();
        assert_eq!(limiter.remaining(), 0);
    }

    #[test]
    fn test_time_until_reset() {
        let mut limiter = make_limiter(1, 10);

        assert_eq!(limiter.time_until_reset(), None);
        limiter.try_acquire().ok();
        let remaining = limiter.time_until_reset().unwrap();
        assert!(remaining > Duration::from_secs(9));
    }
}
