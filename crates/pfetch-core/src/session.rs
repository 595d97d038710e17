//! Politeness state for one batch.
//!
//! A [`FetchSession`] remembers when the last request finished and makes the
//! caller wait until `min_delay` has passed before the next one. It is plain
//! state owned by a single `fetch_all` call; nothing is shared between batches.

use std::time::{Duration, Instant};

#[derive(Debug, Clone)]
pub struct FetchSession {
    min_delay: Duration,
    last_request: Option<Instant>,
}

impl FetchSession {
    pub fn new(min_delay: Duration) -> Self {
        Self {
            min_delay,
            last_request: None,
        }
    }

    pub fn min_delay(&self) -> Duration {
        self.min_delay
    }

    pub fn last_request(&self) -> Option<Instant> {
        self.last_request
    }

    /// Time still to wait at `now` before the next request is allowed.
    pub fn remaining_at(&self, now: Instant) -> Duration {
        match self.last_request {
            Some(last) => self
                .min_delay
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }

    /// Blocks the calling thread until the next request is allowed.
    /// Returns how long it slept.
    pub fn wait_turn(&self) -> Duration {
        let remaining = self.remaining_at(Instant::now());
        if !remaining.is_zero() {
            tracing::debug!(wait_ms = remaining.as_millis() as u64, "politeness delay");
            std::thread::sleep(remaining);
        }
        remaining
    }

    /// Records that a request just finished, whatever its outcome.
    pub fn mark_request(&mut self) {
        self.last_request = Some(Instant::now());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_request_never_waits() {
        let s = FetchSession::new(Duration::from_secs(60));
        assert_eq!(s.remaining_at(Instant::now()), Duration::ZERO);
        assert_eq!(s.wait_turn(), Duration::ZERO);
        assert!(s.last_request().is_none());
    }

    #[test]
    fn remaining_shrinks_with_elapsed_time() {
        let mut s = FetchSession::new(Duration::from_secs(5));
        s.mark_request();
        let last = s.last_request().unwrap();
        assert_eq!(s.remaining_at(last), Duration::from_secs(5));
        assert_eq!(
            s.remaining_at(last + Duration::from_secs(2)),
            Duration::from_secs(3)
        );
        assert_eq!(s.remaining_at(last + Duration::from_secs(9)), Duration::ZERO);
    }

    #[test]
    fn wait_turn_sleeps_out_the_delay() {
        let delay = Duration::from_millis(60);
        let mut s = FetchSession::new(delay);
        s.mark_request();
        let marked = s.last_request().unwrap();
        s.wait_turn();
        assert!(marked.elapsed() >= delay);
    }

    #[test]
    fn zero_delay_never_waits() {
        let mut s = FetchSession::new(Duration::ZERO);
        s.mark_request();
        assert_eq!(s.wait_turn(), Duration::ZERO);
    }
}
