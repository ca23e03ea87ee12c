//! Damped spring that makes the reel position chase the tick counter.
//!
//! The tick counter jumps in whole steps; the spring turns those steps into
//! continuous motion with a small overshoot before settling.  Integration is
//! semi-implicit Euler with sub-stepping, so a slow frame never blows up.

use std::time::Duration;

/// Restoring force per unit of displacement.
pub const REEL_STIFFNESS: f64 = 66.0;
/// Velocity drag.  Well under `2√k`, hence the visible overshoot.
pub const REEL_DAMPING: f64 = 4.0;

/// Largest integration step; longer frames are subdivided.
const MAX_STEP_SECS: f64 = 0.004;
const REST_POSITION: f64 = 0.001;
const REST_VELOCITY: f64 = 0.01;

/// A unit-mass damped harmonic oscillator.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    stiffness: f64,
    damping: f64,
    at_rest: bool,
}

impl Spring {
    /// A spring resting at `initial`, using the reel's fixed constants.
    pub fn at(initial: f64) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target: initial,
            stiffness: REEL_STIFFNESS,
            damping: REEL_DAMPING,
            at_rest: true,
        }
    }

    pub fn with_constants(mut self, stiffness: f64, damping: f64) -> Self {
        self.stiffness = stiffness.max(0.1);
        self.damping = damping.max(0.0);
        self
    }

    pub fn position(&self) -> f64 {
        self.position
    }

    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    pub fn target(&self) -> f64 {
        self.target
    }

    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// Retarget the spring.  Wakes it if the target actually moved.
    pub fn set_target(&mut self, target: f64) {
        if (self.target - target).abs() > REST_POSITION {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Jump to `position` and stop.
    pub fn snap(&mut self, position: f64) {
        self.position = position;
        self.target = position;
        self.velocity = 0.0;
        self.at_rest = true;
    }

    fn step(&mut self, dt: f64) {
        let acceleration =
            -self.stiffness * (self.position - self.target) - self.damping * self.velocity;
        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance by `dt`.  No-op once at rest.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }
        let mut remaining = dt.as_secs_f64();
        while remaining > 0.0 {
            let step = remaining.min(MAX_STEP_SECS);
            self.step(step);
            remaining -= step;
        }

        if (self.position - self.target).abs() < REST_POSITION
            && self.velocity.abs() < REST_VELOCITY
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}
