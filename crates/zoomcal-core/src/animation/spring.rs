#![forbid(unsafe_code)]

//! Damped harmonic oscillator for snap animations.
//!
//! When a pinch ends away from a snap point, the zoom is handed to a spring
//! that carries it to the nearer extreme with the gesture's release velocity
//! as its initial momentum:
//!
//!   F = -stiffness × (position - target) - damping × velocity
//!
//! # Parameters
//!
//! - **stiffness** (k): restoring force strength; higher responds faster.
//! - **damping** (c): velocity drag. Below `2√k` the spring overshoots and
//!   oscillates; at `2√k` it converges as fast as possible without crossing
//!   the target.
//!
//! # Integration
//!
//! Semi-implicit Euler. Large frame deltas are subdivided into steps of at
//! most 4ms so high stiffness values stay numerically stable.
//!
//! # Invariants
//!
//! 1. Once at rest, the position equals the target exactly and `tick` is a
//!    no-op until [`Spring::set_target`] or [`Spring::reset`] wakes it.
//! 2. Stiffness and damping are clamped to sane minimums on construction; a
//!    degenerate configuration cannot produce NaN positions.
//! 3. `value()` is clamped to [0.0, 1.0] even while the raw position
//!    overshoots; callers that want the overshoot read `position()`.

use std::time::Duration;

use super::Animation;

/// Maximum dt per integration step. Larger deltas are subdivided.
const MAX_STEP_SECS: f64 = 0.004;

/// Position delta below which the spring is considered at rest.
const REST_THRESHOLD: f64 = 0.001;

/// Velocity magnitude below which (combined with the position threshold) the
/// spring is considered at rest.
const VELOCITY_THRESHOLD: f64 = 0.01;

/// Minimum stiffness; prevents springs that never converge.
const MIN_STIFFNESS: f64 = 0.1;

/// Stiffness and damping for the snap spring, supplied by the host as part of
/// the static configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringParams {
    /// Restoring force strength.
    pub stiffness: f64,
    /// Velocity drag.
    pub damping: f64,
}

impl SpringParams {
    /// Snappy response with a subtle bounce; the default for zoom snapping.
    #[must_use]
    pub const fn snappy() -> Self {
        Self {
            stiffness: 170.0,
            damping: 26.0,
        }
    }

    /// Fastest convergence without overshoot for the given stiffness.
    #[must_use]
    pub fn critical(stiffness: f64) -> Self {
        let k = stiffness.max(MIN_STIFFNESS);
        Self {
            stiffness: k,
            damping: 2.0 * k.sqrt(),
        }
    }

    /// Clamp degenerate values to workable minimums.
    #[must_use]
    pub(crate) fn clamped(self) -> Self {
        Self {
            stiffness: if self.stiffness.is_finite() {
                self.stiffness.max(MIN_STIFFNESS)
            } else {
                SpringParams::snappy().stiffness
            },
            damping: if self.damping.is_finite() {
                self.damping.max(0.0)
            } else {
                SpringParams::snappy().damping
            },
        }
    }
}

impl Default for SpringParams {
    fn default() -> Self {
        Self::snappy()
    }
}

/// A damped harmonic oscillator carrying a scalar toward a target.
#[derive(Debug, Clone)]
pub struct Spring {
    position: f64,
    velocity: f64,
    target: f64,
    initial: f64,
    params: SpringParams,
    at_rest: bool,
}

impl Spring {
    /// Create a spring starting at `initial` and targeting `target` with the
    /// given physics parameters (clamped to workable minimums).
    #[must_use]
    pub fn new(initial: f64, target: f64, params: SpringParams) -> Self {
        Self {
            position: initial,
            velocity: 0.0,
            target,
            initial,
            params: params.clamped(),
            at_rest: false,
        }
    }

    /// Seed the spring with an initial velocity, e.g. the pinch release
    /// velocity (builder pattern). Non-finite values are discarded.
    #[must_use]
    pub fn with_initial_velocity(mut self, velocity: f64) -> Self {
        if velocity.is_finite() {
            self.velocity = velocity;
            self.at_rest = false;
        }
        self
    }

    /// Current raw position (may overshoot past the target).
    #[inline]
    #[must_use]
    pub fn position(&self) -> f64 {
        self.position
    }

    /// Current velocity.
    #[inline]
    #[must_use]
    pub fn velocity(&self) -> f64 {
        self.velocity
    }

    /// Current target.
    #[inline]
    #[must_use]
    pub fn target(&self) -> f64 {
        self.target
    }

    /// Physics parameters in effect (post clamping).
    #[inline]
    #[must_use]
    pub fn params(&self) -> SpringParams {
        self.params
    }

    /// Change the target. Wakes the spring if the target actually moved.
    pub fn set_target(&mut self, target: f64) {
        if (self.target - target).abs() > REST_THRESHOLD {
            self.target = target;
            self.at_rest = false;
        }
    }

    /// Whether the spring has settled at the target.
    #[inline]
    #[must_use]
    pub fn is_at_rest(&self) -> bool {
        self.at_rest
    }

    /// One integration step of `dt` seconds (semi-implicit Euler).
    fn step(&mut self, dt: f64) {
        let displacement = self.position - self.target;
        let acceleration =
            -self.params.stiffness * displacement - self.params.damping * self.velocity;

        self.velocity += acceleration * dt;
        self.position += self.velocity * dt;
    }

    /// Advance the spring by `dt`, subdividing large deltas for stability.
    ///
    /// On settling, the position lands exactly on the target so downstream
    /// equality checks against the snap points hold.
    pub fn advance(&mut self, dt: Duration) {
        if self.at_rest {
            return;
        }

        let total_secs = dt.as_secs_f64();
        if total_secs <= 0.0 {
            return;
        }

        let mut remaining = total_secs;
        while remaining > 0.0 {
            let step_dt = remaining.min(MAX_STEP_SECS);
            self.step(step_dt);
            remaining -= step_dt;
        }

        if (self.position - self.target).abs() < REST_THRESHOLD
            && self.velocity.abs() < VELOCITY_THRESHOLD
        {
            self.position = self.target;
            self.velocity = 0.0;
            self.at_rest = true;
        }
    }
}

impl Animation for Spring {
    fn tick(&mut self, dt: Duration) {
        self.advance(dt);
    }

    fn is_complete(&self) -> bool {
        self.at_rest
    }

    /// Spring position clamped to [0.0, 1.0]. Use
    /// [`position()`](Spring::position) for the raw, possibly-overshooting
    /// value.
    fn value(&self) -> f32 {
        (self.position as f32).clamp(0.0, 1.0)
    }

    fn reset(&mut self) {
        self.position = self.initial;
        self.velocity = 0.0;
        self.at_rest = false;
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
