//! Timer abstraction the reel animator is driven through.
//!
//! The animator never owns a timer.  It asks a [`Scheduler`] for a one-shot
//! firing and later receives the matching [`TimerToken`] back from the host.
//! Hosts decide what a firing is: a tokio sleep, an animation frame, or the
//! [`ManualClock`] below.

use std::time::Duration;

/// Identifies one armed firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerToken(pub u64);

pub trait Scheduler {
    /// Arrange for `token` to be delivered back after `delay`.
    fn arm(&mut self, delay: Duration) -> TimerToken;
    /// Drop a pending firing.  Unknown or already-fired tokens are ignored.
    fn cancel(&mut self, token: TimerToken);
}

// ───────────────────────────────────────── manual clock ──────

/// Deterministic scheduler for tests and headless runs.
///
/// Time only moves when [`ManualClock::advance`] is called; due tokens are
/// delivered in deadline order, and anything armed while delivering is
/// eligible within the same advance window.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Duration,
    next_id: u64,
    pending: Vec<(Duration, TimerToken)>,
    fired: u64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn now(&self) -> Duration {
        self.now
    }

    /// Number of firings still waiting.
    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    /// Total number of firings delivered so far.
    pub fn fired(&self) -> u64 {
        self.fired
    }

    /// Move time forward by `by`, handing each due token to `fire`.
    pub fn advance(&mut self, by: Duration, mut fire: impl FnMut(TimerToken, &mut Self)) {
        let until = self.now + by;
        while let Some(pos) = self.earliest_due(until) {
            let (deadline, token) = self.pending.remove(pos);
            self.now = deadline;
            self.fired += 1;
            fire(token, self);
        }
        self.now = until;
    }

    fn earliest_due(&self, until: Duration) -> Option<usize> {
        self.pending
            .iter()
            .enumerate()
            .filter(|(_, (deadline, _))| *deadline <= until)
            .min_by_key(|(_, (deadline, token))| (*deadline, *token))
            .map(|(i, _)| i)
    }
}

impl Scheduler for ManualClock {
    fn arm(&mut self, delay: Duration) -> TimerToken {
        self.next_id += 1;
        let token = TimerToken(self.next_id);
        self.pending.push((self.now + delay, token));
        token
    }

    fn cancel(&mut self, token: TimerToken) {
        self.pending.retain(|(_, t)| *t != token);
    }
}
