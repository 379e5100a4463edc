#![forbid(unsafe_code)]

//! Core: frame-clock animation primitives and the pinch/zoom state machine.
//!
//! # Role in zoomcal
//! `zoomcal-core` is the reactive heart of the calendar: it consumes raw pinch
//! gesture samples once per display frame and produces a per-column zoom
//! factor plus the index of the column being zoomed.
//!
//! # Primary responsibilities
//! - **ZoomEngine**: the per-view pinch/zoom state machine, evaluated once per
//!   frame whether or not a gesture is in flight.
//! - **Spring**: damped harmonic oscillator that settles the zoom onto its
//!   open/closed snap points after a gesture release.
//! - **GestureSample**: normalized per-frame pinch input (phase, scale,
//!   velocity, focal position).
//! - **ZoomConfig**: static layout and physics constants, validated up front.
//!
//! # How it fits in the system
//! The host render loop calls [`zoom::ZoomEngine::evaluate`] each frame and
//! feeds the resulting [`zoom::ZoomFrame`] to `zoomcal-layout`, which turns it
//! into concrete column widths and offsets. Nothing in this crate touches the
//! render layer; outputs are plain numbers.

pub mod animation;
pub mod config;
pub mod gesture;
pub mod zoom;

#[cfg(feature = "tracing")]
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
