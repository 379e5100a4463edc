#![forbid(unsafe_code)]

//! Geometry derived from the zoom engine's per-frame output.
//!
//! Two independent solvers, both pure and safe to recompute every frame:
//!
//! - [`columns::ColumnStrip`] turns a [`zoomcal_core::zoom::ZoomFrame`] into
//!   per-column widths and a container offset.
//! - [`events::DayPlanner`] stacks a day's timed events into relative
//!   `margin_top`/`height` entries for a flow layout.
//!
//! Neither holds mutable state; independent views may use them concurrently.

pub mod columns;
pub mod events;

pub use columns::ColumnStrip;
pub use events::{DayPlanner, EventEntry, EventSlot, PlanError, TimeOfDay};
