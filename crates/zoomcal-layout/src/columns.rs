#![forbid(unsafe_code)]

//! Column strip geometry: per-column widths and the container offset.
//!
//! A strip of `column_count` day columns, each `closed_width` px wide at
//! rest. The active column grows toward `container_width` as the zoom
//! approaches 1, and the whole strip shifts left so the zoomed column stays
//! docked at the viewport's leading edge.
//!
//! # Invariants
//!
//! 1. `sum(widths) == (count - 1) * closed + width_of_active_column` for any
//!    frame; zooming grows exactly one column (or all, in uniform mode).
//! 2. With no active column, widths are independent of the zoom value.
//! 3. Outputs are finite for any input frame; a non-finite zoom degrades to
//!    the closed-state geometry.

use zoomcal_core::config::{ConfigError, ZoomConfig};
use zoomcal_core::zoom::{ActiveColumn, ZoomFrame};

/// Pure column-width and offset solver for one calendar view.
///
/// Construct once from the view's [`ZoomConfig`]; the methods are pure
/// functions of the frame and can be called every frame without allocation
/// beyond the width vector itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnStrip {
    count: usize,
    closed: f64,
    container: f64,
}

impl ColumnStrip {
    /// Create a strip from a validated configuration.
    pub fn new(config: &ZoomConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            count: config.column_count,
            closed: config.closed_width,
            container: config.container_width,
        })
    }

    /// Number of columns.
    #[inline]
    #[must_use]
    pub const fn count(&self) -> usize {
        self.count
    }

    /// Width of the closed (unzoomed) column.
    #[inline]
    #[must_use]
    pub const fn closed_width(&self) -> f64 {
        self.closed
    }

    /// Width of column `i` under the given frame.
    #[must_use]
    pub fn width_at(&self, i: usize, frame: &ZoomFrame) -> f64 {
        let zoom = sanitize_zoom(frame.zoom);
        let expanded = match frame.active {
            ActiveColumn::Column(active) if active == i => true,
            ActiveColumn::All => true,
            _ => false,
        };
        if expanded {
            self.closed + (self.container - self.closed) * zoom
        } else {
            self.closed
        }
    }

    /// Widths of every column under the given frame.
    #[must_use]
    pub fn widths(&self, frame: &ZoomFrame) -> Vec<f64> {
        (0..self.count).map(|i| self.width_at(i, frame)).collect()
    }

    /// Horizontal container offset keeping the zoomed column docked at the
    /// leading edge. Zero when no single column is active.
    #[must_use]
    pub fn offset_x(&self, frame: &ZoomFrame) -> f64 {
        match frame.active {
            ActiveColumn::Column(i) => {
                -(i as f64) * sanitize_zoom(frame.zoom) * self.closed
            }
            ActiveColumn::None | ActiveColumn::All => 0.0,
        }
    }

    /// Total strip width under the given frame.
    #[must_use]
    pub fn total_width(&self, frame: &ZoomFrame) -> f64 {
        self.widths(frame).iter().sum()
    }
}

/// Clamp a frame zoom for geometry use; non-finite values degrade to closed.
#[inline]
fn sanitize_zoom(zoom: f64) -> f64 {
    if zoom.is_finite() { zoom.clamp(0.0, 1.0) } else { 0.0 }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
