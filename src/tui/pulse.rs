//! Copy-feedback pulse: a short highlight after a successful copy.

use std::time::{Duration, Instant};

/// One-shot deadline. Retriggering restarts it; reading it after
/// expiry clears it.
#[derive(Debug, Clone)]
pub struct Pulse {
    length: Duration,
    until: Option<Instant>,
}

impl Pulse {
    pub fn new(length: Duration) -> Self {
        Self {
            length,
            until: None,
        }
    }

    pub fn trigger(&mut self, now: Instant) {
        self.until = Some(now + self.length);
    }

    pub fn cancel(&mut self) {
        self.until = None;
    }

    /// Whether the highlight should be drawn at `now`.
    pub fn is_active(&mut self, now: Instant) -> bool {
        match self.until {
            Some(until) if now < until => true,
            Some(_) => {
                self.until = None;
                false
            }
            None => false,
        }
    }

    /// Time left before the highlight ends, if it is running.
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.until.map(|until| until.saturating_duration_since(now))
    }
}
