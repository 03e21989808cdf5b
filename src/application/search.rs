// src/application/search.rs
use std::time::{Duration, Instant};

/// Coalesces rapid query changes into one query after a quiet period.
///
/// Time is passed in by the caller so the same state machine serves a real
/// clock and synthetic instants.
#[derive(Debug, Clone)]
pub struct SearchDebouncer {
    delay: Duration,
    pending: Option<(String, Instant)>,
}

impl SearchDebouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Record a new query, restarting the quiet period
    pub fn input(&mut self, query: &str, now: Instant) {
        self.pending = Some((query.to_string(), now));
    }

    pub fn cancel(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left before the pending query fires, `None` if nothing is pending
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, at)| self.delay.saturating_sub(now.saturating_duration_since(*at)))
    }

    /// Take the pending query once the quiet period has elapsed
    pub fn ready(&mut self, now: Instant) -> Option<String> {
        match self.remaining(now) {
            Some(left) if left.is_zero() => self.pending.take().map(|(query, _)| query),
            _ => None,
        }
    }
}

/// Sequence number stamped on an issued search
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

impl SearchTicket {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Hands out increasing tickets; only the latest one may update the view.
#[derive(Debug, Default, Clone)]
pub struct SearchSequencer {
    latest: u64,
}

impl SearchSequencer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issue(&mut self) -> SearchTicket {
        self.latest += 1;
        SearchTicket(self.latest)
    }

    /// Make every ticket issued so far stale
    pub fn invalidate(&mut self) {
        self.latest += 1;
    }

    pub fn is_current(&self, ticket: SearchTicket) -> bool {
        ticket.0 == self.latest
    }
}
