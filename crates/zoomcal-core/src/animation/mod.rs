#![forbid(unsafe_code)]

//! Frame-clock animation primitives.
//!
//! Everything here is driven by explicit `tick(dt)` calls from the host's
//! render loop; no timers, threads, or implicit clocks. The only concrete
//! animation the calendar needs is the [`Spring`] that settles the zoom onto
//! its snap points, but the [`Animation`] seam keeps the engine testable with
//! synthetic clocks and leaves room for other interpolators.

use std::time::Duration;

pub mod spring;

pub use spring::{Spring, SpringParams};

/// A time-driven value producer advanced once per display frame.
pub trait Animation {
    /// Advance by `dt`. Implementations must tolerate `Duration::ZERO` and
    /// large deltas (e.g. after a dropped frame) without diverging.
    fn tick(&mut self, dt: Duration);

    /// Whether the animation has finished and will no longer change.
    fn is_complete(&self) -> bool;

    /// Current normalized value, clamped to [0.0, 1.0].
    fn value(&self) -> f32;

    /// Return to the initial state.
    fn reset(&mut self);
}
