#![forbid(unsafe_code)]

//! Pinch gesture input: per-frame samples delivered by the host recognizer.
//!
//! The engine never talks to a gesture recognizer directly. The host decodes
//! its platform events into one [`GestureSample`] per display frame (an
//! [`idle`](GestureSample::idle) sample when no pinch is tracked) and hands it
//! to [`crate::zoom::ZoomEngine::evaluate`].
//!
//! # Invariants
//!
//! 1. `scale` is relative to gesture start: 1.0 means no change.
//! 2. Samples are sanitized before the engine reads them; a malformed sample
//!    (non-positive or non-finite scale, non-finite velocity or focal
//!    position) is clamped to a neutral value rather than rejected, so the
//!    zoom output can never become non-finite.
//! 3. Phase transitions may be dropped by the host (e.g. a missed `Began`);
//!    the engine derives edges from the last-known phase, not from the
//!    nominal sequence.

/// Smallest scale a sanitized sample can carry. Guards the pinch-zoom math
/// against `scale <= 0` reported by a misbehaving recognizer.
const MIN_SCALE: f64 = 1e-3;

/// Lifecycle phase reported by the host pinch recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PinchPhase {
    /// No gesture is being tracked.
    #[default]
    Idle,
    /// Two touches landed; scale is still 1.0.
    Began,
    /// The pinch is moving; scale/velocity/focal are live.
    Active,
    /// The gesture finished normally.
    Ended,
    /// The gesture was aborted by the system (e.g. an interrupting touch).
    Cancelled,
}

impl PinchPhase {
    /// Whether a gesture is in flight in this phase.
    #[inline]
    #[must_use]
    pub const fn is_tracking(self) -> bool {
        matches!(self, Self::Began | Self::Active)
    }

    /// Whether this phase terminates a gesture. `Cancelled` releases the
    /// pinch the same way `Ended` does.
    #[inline]
    #[must_use]
    pub const fn is_release(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// One per-frame pinch sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureSample {
    /// Recognizer lifecycle phase.
    pub phase: PinchPhase,
    /// Pinch scale relative to gesture start (1.0 = unchanged).
    pub scale: f64,
    /// Scale velocity in scale units per second.
    pub velocity: f64,
    /// Focal midpoint, pixels from the column-area origin.
    pub focal_x: f64,
}

impl GestureSample {
    /// The sample delivered while no gesture is tracked.
    #[must_use]
    pub const fn idle() -> Self {
        Self {
            phase: PinchPhase::Idle,
            scale: 1.0,
            velocity: 0.0,
            focal_x: 0.0,
        }
    }

    /// A `Began` sample at the given focal position.
    #[must_use]
    pub const fn began(focal_x: f64) -> Self {
        Self {
            phase: PinchPhase::Began,
            scale: 1.0,
            velocity: 0.0,
            focal_x,
        }
    }

    /// An `Active` sample.
    #[must_use]
    pub const fn active(scale: f64, velocity: f64, focal_x: f64) -> Self {
        Self {
            phase: PinchPhase::Active,
            scale,
            velocity,
            focal_x,
        }
    }

    /// An `Ended` sample carrying the release scale and velocity.
    #[must_use]
    pub const fn ended(scale: f64, velocity: f64) -> Self {
        Self {
            phase: PinchPhase::Ended,
            scale,
            velocity,
            focal_x: 0.0,
        }
    }

    /// A `Cancelled` sample.
    #[must_use]
    pub const fn cancelled() -> Self {
        Self {
            phase: PinchPhase::Cancelled,
            scale: 1.0,
            velocity: 0.0,
            focal_x: 0.0,
        }
    }

    /// Clamp malformed fields to neutral values (see module invariants).
    #[must_use]
    pub(crate) fn sanitized(self) -> Self {
        Self {
            phase: self.phase,
            scale: if self.scale.is_finite() {
                self.scale.max(MIN_SCALE)
            } else {
                1.0
            },
            velocity: if self.velocity.is_finite() {
                self.velocity
            } else {
                0.0
            },
            focal_x: if self.focal_x.is_finite() {
                self.focal_x.max(0.0)
            } else {
                0.0
            },
        }
    }
}

impl Default for GestureSample {
    fn default() -> Self {
        Self::idle()
    }
}
