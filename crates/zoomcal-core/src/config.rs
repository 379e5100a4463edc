#![forbid(unsafe_code)]

//! Static configuration for the zoom engine and column geometry.
//!
//! All tunables come from the host as one [`ZoomConfig`] value; the engine
//! computes nothing about the theme itself. Validation happens once at
//! engine construction (fail fast), never on the per-frame hot path.

use std::fmt;

use crate::animation::SpringParams;

/// Which zoom machine variant to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ZoomMode {
    /// Full variant: a single focal column expands, and a released pinch
    /// snaps to fully-open or fully-closed.
    #[default]
    Indexed,
    /// Simplified variant: every column shares one zoom factor, no focal
    /// tracking, no snapping; release leaves the zoom where the pinch did.
    Uniform,
}

/// Layout constants and physics parameters for one calendar view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomConfig {
    /// Number of day columns in the strip.
    pub column_count: usize,
    /// Width of a closed (unzoomed) column, px.
    pub closed_width: f64,
    /// Width of the visible column area, px. A fully-open column grows to
    /// this width.
    pub container_width: f64,
    /// Sensitivity converting a pinch scale delta into a zoom-fraction delta.
    /// At the default of 3.0 a pinch to scale ~1.33 fully opens a column.
    pub pinch_magnitude: f64,
    /// Snap spring physics.
    pub spring: SpringParams,
    /// Engine variant.
    pub mode: ZoomMode,
}

impl ZoomConfig {
    /// A week view: seven columns of 50px in a 350px container.
    #[must_use]
    pub fn week() -> Self {
        Self::default()
    }

    /// Set the column count (builder pattern).
    #[must_use]
    pub fn columns(mut self, count: usize) -> Self {
        self.column_count = count;
        self
    }

    /// Set the closed column width (builder pattern).
    #[must_use]
    pub fn closed_width(mut self, px: f64) -> Self {
        self.closed_width = px;
        self
    }

    /// Set the container width (builder pattern).
    #[must_use]
    pub fn container_width(mut self, px: f64) -> Self {
        self.container_width = px;
        self
    }

    /// Set the pinch sensitivity (builder pattern).
    #[must_use]
    pub fn pinch_magnitude(mut self, magnitude: f64) -> Self {
        self.pinch_magnitude = magnitude;
        self
    }

    /// Set the snap spring parameters (builder pattern).
    #[must_use]
    pub fn spring(mut self, params: SpringParams) -> Self {
        self.spring = params;
        self
    }

    /// Set the engine variant (builder pattern).
    #[must_use]
    pub fn mode(mut self, mode: ZoomMode) -> Self {
        self.mode = mode;
        self
    }

    /// Check the configuration for values that would make frame evaluation
    /// meaningless. Called once at engine construction.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.column_count == 0 {
            return Err(ConfigError::NoColumns);
        }
        if !(self.closed_width.is_finite() && self.closed_width > 0.0) {
            return Err(ConfigError::NonPositiveClosedWidth {
                width: self.closed_width,
            });
        }
        if !(self.container_width.is_finite() && self.container_width >= self.closed_width) {
            return Err(ConfigError::ContainerNarrowerThanColumn {
                container: self.container_width,
                closed: self.closed_width,
            });
        }
        if !(self.pinch_magnitude.is_finite() && self.pinch_magnitude > 0.0) {
            return Err(ConfigError::NonPositivePinchMagnitude {
                magnitude: self.pinch_magnitude,
            });
        }
        Ok(())
    }
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            column_count: 7,
            closed_width: 50.0,
            container_width: 350.0,
            pinch_magnitude: 3.0,
            spring: SpringParams::snappy(),
            mode: ZoomMode::Indexed,
        }
    }
}

/// Errors detected while validating a [`ZoomConfig`].
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// `column_count` was zero.
    NoColumns,
    /// `closed_width` was zero, negative, or non-finite.
    NonPositiveClosedWidth { width: f64 },
    /// `container_width` was non-finite or smaller than one closed column.
    ContainerNarrowerThanColumn { container: f64, closed: f64 },
    /// `pinch_magnitude` was zero, negative, or non-finite.
    NonPositivePinchMagnitude { magnitude: f64 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoColumns => write!(f, "column count must be at least 1"),
            Self::NonPositiveClosedWidth { width } => {
                write!(f, "closed column width must be positive, got {width}")
            }
            Self::ContainerNarrowerThanColumn { container, closed } => write!(
                f,
                "container width {container} cannot be narrower than a closed column ({closed})"
            ),
            Self::NonPositivePinchMagnitude { magnitude } => {
                write!(f, "pinch magnitude must be positive, got {magnitude}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
