//! Reel speed curve: how long to wait before the next tick.
//!
//! The delay before firing `n + 1` is `BASE_INTERVAL × speed(n)`.  Callers
//! may swap in their own curve; whatever it returns is clamped so the timer
//! chain can never collapse into a zero-delay loop.

use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Delay between ticks at speed factor 1.0.
pub const BASE_INTERVAL: Duration = Duration::from_millis(125);

/// Floor for any computed delay (one 60 Hz frame).
pub const MIN_DELAY: Duration = Duration::from_millis(16);

/// Ceiling for any computed delay.
pub const MAX_DELAY: Duration = Duration::from_secs(10);

/// Tick at which the default curve bottoms out at 1% of base speed.
const DECAY_HORIZON: f64 = 40.0;

/// Default decay: `1 - 0.99 × (x / 40)²`.
pub fn default_speed(tick: f64) -> f64 {
    let x = tick / DECAY_HORIZON;
    1.0 - 0.99 * x * x
}

/// The speed factor used by an animator: the default curve or an override.
#[derive(Clone, Default)]
pub enum SpeedCurve {
    #[default]
    Default,
    Custom(Arc<dyn Fn(f64) -> f64 + Send + Sync>),
}

impl SpeedCurve {
    pub fn custom(f: impl Fn(f64) -> f64 + Send + Sync + 'static) -> Self {
        SpeedCurve::Custom(Arc::new(f))
    }

    pub fn factor(&self, tick: u32) -> f64 {
        let x = f64::from(tick);
        match self {
            SpeedCurve::Default => default_speed(x),
            SpeedCurve::Custom(f) => f(x),
        }
    }

    /// Delay before the firing that follows `tick`, kept within
    /// [`MIN_DELAY`]..=[`MAX_DELAY`].
    pub fn delay_after(&self, tick: u32) -> Duration {
        clamp_delay(BASE_INTERVAL.as_secs_f64() * self.factor(tick))
    }
}

impl fmt::Debug for SpeedCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SpeedCurve::Default => f.write_str("SpeedCurve::Default"),
            SpeedCurve::Custom(_) => f.write_str("SpeedCurve::Custom(..)"),
        }
    }
}

fn clamp_delay(secs: f64) -> Duration {
    if secs.is_nan() || secs < MIN_DELAY.as_secs_f64() {
        return MIN_DELAY;
    }
    Duration::try_from_secs_f64(secs).map_or(MAX_DELAY, |d| d.min(MAX_DELAY))
}
