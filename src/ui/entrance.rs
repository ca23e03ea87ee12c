//! One-shot entrance transition: fade in while sliding up into place.
//!
//! Started when a reel mounts (or respins).  After an optional delay the
//! progress runs from 0 to 1 over `duration` with a cubic ease-out; the
//! widget maps progress to text brightness and a vertical row shift.

use std::time::Duration;

/// Rows the reel starts below its resting position.
pub const SLIDE_ROWS: f64 = 2.0;

const NORMAL_DELAY: Duration = Duration::from_millis(250);
const NORMAL_DURATION: Duration = Duration::from_millis(500);
const FAST_DELAY: Duration = Duration::ZERO;
const FAST_DURATION: Duration = Duration::from_millis(150);

#[derive(Debug, Clone)]
pub struct Entrance {
    elapsed: Duration,
    delay: Duration,
    duration: Duration,
}

impl Entrance {
    pub fn new(fast: bool) -> Self {
        let (delay, duration) = if fast {
            (FAST_DELAY, FAST_DURATION)
        } else {
            (NORMAL_DELAY, NORMAL_DURATION)
        };
        Self {
            elapsed: Duration::ZERO,
            delay,
            duration,
        }
    }

    /// Advance by one frame.
    pub fn tick(&mut self, dt: Duration) {
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Eased progress in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let Some(active) = self.elapsed.checked_sub(self.delay) else {
            return 0.0;
        };
        if self.duration.is_zero() {
            return 1.0;
        }
        let t = (active.as_secs_f64() / self.duration.as_secs_f64()).min(1.0);
        1.0 - (1.0 - t).powi(3)
    }

    /// Current downward shift in whole rows.
    pub fn slide_rows(&self) -> u16 {
        ((1.0 - self.progress()) * SLIDE_ROWS).round() as u16
    }

    pub fn is_animating(&self) -> bool {
        self.elapsed < self.delay + self.duration
    }
}
