#![forbid(unsafe_code)]

//! zoomcal public facade crate.
//!
//! Re-exports the stable surface of the internal crates and offers a
//! lightweight prelude for day-to-day usage. A host render loop typically
//! does three things per frame:
//!
//! ```ignore
//! use zoomcal::prelude::*;
//!
//! let mut engine = ZoomEngine::new(ZoomConfig::week())?;
//! let strip = ColumnStrip::new(engine.config())?;
//!
//! // Each animation frame:
//! let frame = engine.evaluate(&sample, dt);
//! let widths = strip.widths(&frame);
//! let offset = strip.offset_x(&frame);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use zoomcal_core::animation::{Animation, Spring, SpringParams};
pub use zoomcal_core::config::{ConfigError, ZoomConfig, ZoomMode};
pub use zoomcal_core::gesture::{GestureSample, PinchPhase};
pub use zoomcal_core::zoom::{ActiveColumn, ZoomEngine, ZoomFrame};

// --- Layout re-exports -----------------------------------------------------

pub use zoomcal_layout::columns::ColumnStrip;
pub use zoomcal_layout::events::{DayPlanner, EventEntry, EventSlot, PlanError, TimeOfDay};

/// Common imports for building a calendar view.
pub mod prelude {
    pub use crate::{
        ActiveColumn, Animation, ColumnStrip, ConfigError, DayPlanner, EventEntry, EventSlot,
        GestureSample, PinchPhase, PlanError, Spring, SpringParams, TimeOfDay, ZoomConfig,
        ZoomEngine, ZoomFrame, ZoomMode,
    };
}
