#![forbid(unsafe_code)]

//! The pinch/zoom state machine.
//!
//! [`ZoomEngine`] is a stateful per-view processor evaluated once per display
//! frame, gesture or no gesture. Each call consumes the frame's
//! [`GestureSample`] and the elapsed frame time, mutates the owned state, and
//! returns a [`ZoomFrame`] for the layout layer.
//!
//! # State Machine
//!
//! Per frame, in order:
//!
//! 1. Sanitize the sample (malformed fields become neutral values).
//! 2. A live pinch preempts an in-flight snap spring.
//! 3. While the view is fully closed, an active pinch selects the focal
//!    column; the selection is sticky for the rest of the gesture.
//! 4. Active frames drive the zoom from the gesture-start baseline:
//!    `clamp(base + pinch_magnitude * (scale - 1), 0, 1)`.
//! 5. A release away from the extremes starts a snap spring toward the
//!    nearer one, seeded with the release velocity.
//! 6. A running spring advances by `dt`; its clamped position becomes the
//!    committed zoom, landing exactly on the target at rest.
//! 7. Once the zoom settles closed with no gesture and no spring, the focal
//!    column resets.
//!
//! # Invariants
//!
//! 1. The committed zoom observed by any consumer lies in [0, 1], even while
//!    the spring's raw position overshoots.
//! 2. The focal column is assigned only while an active pinch starts from
//!    the fully-closed state, and persists through the gesture and any snap
//!    until the zoom settles back to 0.
//! 3. The snap clock runs only between gestures; an `Active` sample stops it
//!    on the same evaluation.
//! 4. Evaluating an `Idle` sample with no running clock is a fixed point:
//!    state and output are unchanged.
//! 5. Non-finite arithmetic never escapes: a candidate zoom that is not
//!    finite is discarded in favor of the last valid value.
//!
//! # Failure Modes
//!
//! - A spring that never converges (pathological stiffness/damping) keeps
//!   the clock running forever; parameters are clamped at construction to
//!   rule this out, and it is a configuration bug rather than a runtime
//!   fault.
//! - Dropped phase transitions: the engine keys off edges derived from the
//!   last-known phase, so a missing `Began` or `Ended` frame degrades to the
//!   nearest sensible behavior instead of wedging the machine.

use std::time::Duration;

use crate::animation::Spring;
use crate::config::{ConfigError, ZoomConfig, ZoomMode};
use crate::gesture::{GestureSample, PinchPhase};

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Which column is eligible to expand under zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveColumn {
    /// No column is zoomed.
    #[default]
    None,
    /// A single focal column (full variant).
    Column(usize),
    /// Every column shares the zoom factor (uniform variant).
    All,
}

impl ActiveColumn {
    /// The focal column index, if exactly one column is active.
    #[inline]
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Column(i) => Some(i),
            _ => None,
        }
    }
}

/// Per-frame engine output consumed by the layout layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomFrame {
    /// Committed zoom factor in [0, 1]; 0 is closed, 1 is fully open.
    pub zoom: f64,
    /// The column(s) the zoom applies to.
    pub active: ActiveColumn,
}

impl ZoomFrame {
    /// The fully-closed resting frame.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            zoom: 0.0,
            active: ActiveColumn::None,
        }
    }
}

impl Default for ZoomFrame {
    fn default() -> Self {
        Self::closed()
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// The animated scalars owned by one engine instance.
///
/// Collapses what would otherwise be a pile of free-floating animated cells
/// (zoom, gesture baseline, clock, focal index) into a single record mutated
/// only inside [`ZoomEngine::evaluate`].
#[derive(Debug, Clone, Default)]
struct ZoomState {
    /// Committed zoom, always in [0, 1].
    zoom: f64,
    /// Zoom at the start of the current gesture; pinch scale is relative to
    /// gesture start, so active frames always add to this baseline.
    gesture_base: f64,
    /// Sticky focal column.
    active: ActiveColumn,
    /// Snap clock: `Some` while a snap animation is running.
    spring: Option<Spring>,
    /// Last observed phase, for edge detection across dropped frames.
    last_phase: PinchPhase,
}

// ---------------------------------------------------------------------------
// ZoomEngine
// ---------------------------------------------------------------------------

/// Per-view pinch/zoom state machine.
///
/// One instance per calendar view; instances share nothing. The host's
/// animation loop calls [`evaluate`](ZoomEngine::evaluate) every frame with
/// the current sample (an idle sample when no gesture is tracked) and the
/// frame delta.
#[derive(Debug, Clone)]
pub struct ZoomEngine {
    config: ZoomConfig,
    state: ZoomState,
}

impl ZoomEngine {
    /// Create an engine for the given configuration.
    ///
    /// Fails fast on a meaningless configuration (zero columns, non-positive
    /// widths or sensitivity) so frame evaluation never has to re-check.
    pub fn new(config: ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            state: ZoomState::default(),
        })
    }

    /// The configuration in effect.
    #[inline]
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Current committed zoom in [0, 1].
    #[inline]
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.state.zoom
    }

    /// Current active column.
    #[inline]
    #[must_use]
    pub fn active(&self) -> ActiveColumn {
        self.state.active
    }

    /// Whether a snap animation is currently running.
    #[inline]
    #[must_use]
    pub fn is_snapping(&self) -> bool {
        self.state.spring.is_some()
    }

    /// Return to the fully-closed resting state.
    pub fn reset(&mut self) {
        self.state = ZoomState::default();
    }

    /// Evaluate one frame.
    ///
    /// `sample` is this frame's gesture input; `dt` is the elapsed time since
    /// the previous evaluation and only drives the snap spring.
    pub fn evaluate(&mut self, sample: &GestureSample, dt: Duration) -> ZoomFrame {
        let sample = sample.sanitized();
        let was_tracking = self.state.last_phase.is_tracking();
        let tracking = sample.phase.is_tracking();
        // A host may drop the Ended frame and jump straight to Idle; treat
        // that edge as a release too.
        let released =
            sample.phase.is_release() || (was_tracking && sample.phase == PinchPhase::Idle);

        // The gesture preempts any in-flight snap; pinch control resumes
        // from the mid-spring zoom.
        if tracking && self.state.spring.is_some() {
            self.state.spring = None;
            #[cfg(feature = "tracing")]
            tracing::debug!(zoom = self.state.zoom, "snap interrupted by pinch");
        }

        if tracking {
            if !was_tracking {
                self.state.gesture_base = self.state.zoom;
            }
            if sample.phase == PinchPhase::Active {
                self.drive_pinch(&sample);
            }
        } else if released && self.config.mode == ZoomMode::Indexed {
            self.trigger_snap(&sample);
        }

        self.advance_snap(dt);

        match self.config.mode {
            ZoomMode::Uniform => {
                self.state.active = ActiveColumn::All;
            }
            ZoomMode::Indexed => {
                if self.state.zoom == 0.0 && self.state.spring.is_none() && !tracking {
                    self.state.active = ActiveColumn::None;
                }
            }
        }

        self.state.last_phase = sample.phase;
        ZoomFrame {
            zoom: self.state.zoom,
            active: self.state.active,
        }
    }

    /// Pinch-driven zoom for one active frame.
    fn drive_pinch(&mut self, sample: &GestureSample) {
        // The focal column is chosen only while fully closed; afterwards the
        // selection sticks for the rest of the gesture.
        if self.config.mode == ZoomMode::Indexed && self.state.zoom == 0.0 {
            self.state.active = ActiveColumn::Column(self.focal_index(sample.focal_x));
        }

        let candidate =
            self.state.gesture_base + self.config.pinch_magnitude * (sample.scale - 1.0);
        self.state.zoom = guard_unit(candidate, self.state.zoom);
    }

    /// Start a snap spring if the release left the zoom between extremes.
    fn trigger_snap(&mut self, sample: &GestureSample) {
        // A repeated terminal frame must not restart a snap in flight.
        if self.state.spring.is_some() {
            return;
        }
        let zoom = self.state.zoom;
        if zoom == 0.0 || zoom == 1.0 {
            return;
        }

        let target = if zoom < 0.5 { 0.0 } else { 1.0 };
        // Release velocity is in scale units/sec; pinch_magnitude converts
        // it into zoom units/sec, same as the pinch delta itself.
        let velocity = sample.velocity * self.config.pinch_magnitude;
        self.state.spring =
            Some(Spring::new(zoom, target, self.config.spring).with_initial_velocity(velocity));

        #[cfg(feature = "tracing")]
        tracing::debug!(zoom, target, velocity, "snap started");
    }

    /// Advance a running snap spring and commit its clamped position.
    fn advance_snap(&mut self, dt: Duration) {
        let Some(spring) = self.state.spring.as_mut() else {
            return;
        };

        spring.advance(dt);
        let position = spring.position();
        let target = spring.target();
        let settled = spring.is_at_rest();

        self.state.zoom = guard_unit(position, self.state.zoom);
        if settled {
            // Exact landing so the snap-point equality checks hold.
            self.state.zoom = target;
            self.state.spring = None;

            #[cfg(feature = "tracing")]
            tracing::debug!(zoom = target, "snap settled");
        }
    }

    /// Column under the focal point, clamped to the strip.
    fn focal_index(&self, focal_x: f64) -> usize {
        let raw = (focal_x / self.config.closed_width).floor();
        if raw.is_finite() && raw > 0.0 {
            (raw as usize).min(self.config.column_count - 1)
        } else {
            0
        }
    }
}

/// Clamp a candidate zoom to [0, 1], keeping `fallback` if the arithmetic
/// produced a non-finite value.
#[inline]
fn guard_unit(candidate: f64, fallback: f64) -> f64 {
    if candidate.is_finite() {
        candidate.clamp(0.0, 1.0)
    } else {
        fallback
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
