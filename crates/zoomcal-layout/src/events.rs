#![forbid(unsafe_code)]

//! Day-plan geometry: vertical stacking of timed events.
//!
//! Positions a day's events inside a 24-hour column using *relative* top
//! margins rather than absolute offsets, so a flow-layout renderer can place
//! the items in document order without absolute positioning. `margin_top` is
//! measured from the previous item's bottom edge and goes negative when
//! events overlap in time; that is accepted output, not an error.
//!
//! # Invariants
//!
//! 1. `entries[i].height == duration_hours * hour_height` (after the minimum
//!    duration clamp).
//! 2. Accumulating `margin_top + height` over the entries reconstructs each
//!    item's absolute top: `hours_from_midnight * hour_height`.
//! 3. The planner holds no state between calls; independent day views may
//!    plan concurrently.
//!
//! # Failure Modes
//!
//! - Unsorted input is out of contract: the stacking order is well defined
//!   (document order) but visually meaningless. Documented rather than
//!   enforced to keep the hot path allocation-free and branch-minimal.
//! - Non-positive or non-finite durations are clamped to a one-minute
//!   sliver so a bad event cannot produce NaN geometry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Hours in a day column.
const HOURS_PER_DAY: f64 = 24.0;

/// Minimum rendered duration, in hours (one minute). Applied when an event
/// carries a non-positive or non-finite duration.
const MIN_DURATION_HOURS: f64 = 1.0 / 60.0;

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// A clock time within the day, already decoded by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
pub struct TimeOfDay {
    hour: u8,
    minute: u8,
}

impl TimeOfDay {
    /// Create a time of day; out-of-range components are clamped to 23:59.
    #[must_use]
    pub const fn new(hour: u8, minute: u8) -> Self {
        Self {
            hour: if hour > 23 { 23 } else { hour },
            minute: if minute > 59 { 59 } else { minute },
        }
    }

    /// Hour component (0–23).
    #[inline]
    #[must_use]
    pub const fn hour(self) -> u8 {
        self.hour
    }

    /// Minute component (0–59).
    #[inline]
    #[must_use]
    pub const fn minute(self) -> u8 {
        self.minute
    }

    /// Fractional hours since midnight, e.g. 9:30 → 9.5.
    #[inline]
    #[must_use]
    pub fn hours_from_midnight(self) -> f64 {
        f64::from(self.hour) + f64::from(self.minute) / 60.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

/// One timed event within a day, payload-agnostic.
///
/// Callers keep their own event payloads and map entries back through
/// [`EventEntry::index`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventSlot {
    /// Start time within the day.
    pub start: TimeOfDay,
    /// Duration in fractional hours; clamped to a one-minute minimum.
    pub duration_hours: f64,
}

impl EventSlot {
    /// Create an event slot.
    #[must_use]
    pub const fn new(start: TimeOfDay, duration_hours: f64) -> Self {
        Self {
            start,
            duration_hours,
        }
    }

    /// Duration after the defensive clamp.
    fn effective_duration(&self) -> f64 {
        if self.duration_hours.is_finite() && self.duration_hours > 0.0 {
            self.duration_hours
        } else {
            MIN_DURATION_HOURS
        }
    }
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// Geometry for one event, relative to the previous entry's bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EventEntry {
    /// Index of the source slot, for mapping a selection back to its payload.
    pub index: usize,
    /// Offset from the previous entry's bottom edge, px. Negative when the
    /// item overlaps its predecessor in time.
    pub margin_top: f64,
    /// Item height, px, proportional to duration.
    pub height: f64,
}

// ---------------------------------------------------------------------------
// DayPlanner
// ---------------------------------------------------------------------------

/// Stateless vertical-stacking solver for one day column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPlanner {
    hour_height: f64,
}

impl DayPlanner {
    /// Create a planner rendering one hour as `hour_height` px.
    pub fn new(hour_height: f64) -> Result<Self, PlanError> {
        if hour_height.is_finite() && hour_height > 0.0 {
            Ok(Self { hour_height })
        } else {
            Err(PlanError::NonPositiveHourHeight {
                height: hour_height,
            })
        }
    }

    /// Pixels per hour.
    #[inline]
    #[must_use]
    pub const fn hour_height(&self) -> f64 {
        self.hour_height
    }

    /// Height of the full 24-hour day canvas, px.
    #[inline]
    #[must_use]
    pub fn day_height(&self) -> f64 {
        HOURS_PER_DAY * self.hour_height
    }

    /// Stack `items` into relative-offset entries.
    ///
    /// Precondition: `items` is sorted ascending by start time. Violating
    /// this yields a well-defined but visually meaningless stacking order,
    /// never a panic.
    #[must_use]
    pub fn plan(&self, items: &[EventSlot]) -> Vec<EventEntry> {
        let mut y = 0.0;
        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                let top = item.start.hours_from_midnight() * self.hour_height;
                let height = item.effective_duration() * self.hour_height;
                let margin_top = top - y;
                y = top + height;
                EventEntry {
                    index,
                    margin_top,
                    height,
                }
            })
            .collect()
    }

    /// Map a vertical hit position (px from the day's top edge) to the entry
    /// under it, preferring later entries when overlaps stack.
    ///
    /// Supports the selection pass-through: the caller resolves the returned
    /// [`EventEntry::index`] against its own payload list.
    #[must_use]
    pub fn hit(&self, entries: &[EventEntry], y: f64) -> Option<usize> {
        if !y.is_finite() {
            return None;
        }
        let mut cursor = 0.0;
        let mut found = None;
        for entry in entries {
            let top = cursor + entry.margin_top;
            let bottom = top + entry.height;
            if y >= top && y < bottom {
                found = Some(entry.index);
            }
            cursor = bottom;
        }
        found
    }
}

/// Errors detected while constructing a [`DayPlanner`].
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// `hour_height` was zero, negative, or non-finite.
    NonPositiveHourHeight { height: f64 },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveHourHeight { height } => {
                write!(f, "hour height must be positive, got {height}")
            }
        }
    }
}

impl std::error::Error for PlanError {}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn planner() -> DayPlanner {
        DayPlanner::new(60.0).expect("valid hour height")
    }

    #[test]
    fn invalid_hour_height_rejected() {
        for h in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(DayPlanner::new(h).is_err(), "hour height {h}");
        }
    }

    #[test]
    fn time_of_day_fractions() {
        assert!((TimeOfDay::new(9, 30).hours_from_midnight() - 9.5).abs() < f64::EPSILON);
        assert!((TimeOfDay::new(0, 0).hours_from_midnight() - 0.0).abs() < f64::EPSILON);
        assert!((TimeOfDay::new(23, 59).hours_from_midnight() - (23.0 + 59.0 / 60.0)).abs() < 1e-12);
    }

    #[test]
    fn time_of_day_clamps_out_of_range() {
        let t = TimeOfDay::new(30, 90);
        assert_eq!((t.hour(), t.minute()), (23, 59));
    }

    #[test]
    fn time_of_day_display() {
        assert_eq!(TimeOfDay::new(9, 5).to_string(), "09:05");
    }

    #[test]
    fn empty_day_plans_to_nothing() {
        assert!(planner().plan(&[]).is_empty());
    }

    #[test]
    fn worked_example_with_overlap() {
        // 9:00/1h, 9:30/0.5h (overlapping), 11:00/1h at 60px per hour.
        let items = [
            EventSlot::new(TimeOfDay::new(9, 0), 1.0),
            EventSlot::new(TimeOfDay::new(9, 30), 0.5),
            EventSlot::new(TimeOfDay::new(11, 0), 1.0),
        ];
        let entries = planner().plan(&items);

        assert_eq!(entries.len(), 3);
        assert!((entries[0].margin_top - 540.0).abs() < 1e-9);
        assert!((entries[0].height - 60.0).abs() < 1e-9);
        assert!((entries[1].margin_top - -30.0).abs() < 1e-9);
        assert!((entries[1].height - 30.0).abs() < 1e-9);
        assert!((entries[2].margin_top - 60.0).abs() < 1e-9);
        assert!((entries[2].height - 60.0).abs() < 1e-9);
        assert_eq!(
            entries.iter().map(|e| e.index).collect::<Vec<_>>(),
            vec![0, 1, 2]
        );
    }

    #[test]
    fn margins_reconstruct_absolute_tops() {
        let items = [
            EventSlot::new(TimeOfDay::new(8, 15), 0.75),
            EventSlot::new(TimeOfDay::new(10, 0), 2.0),
            EventSlot::new(TimeOfDay::new(13, 45), 0.25),
        ];
        let planner = planner();
        let entries = planner.plan(&items);

        let mut cursor = 0.0;
        for (entry, item) in entries.iter().zip(&items) {
            let top = cursor + entry.margin_top;
            let expected = item.start.hours_from_midnight() * planner.hour_height();
            assert!((top - expected).abs() < 1e-9, "item {}", entry.index);
            cursor = top + entry.height;
        }
    }

    #[test]
    fn degenerate_duration_clamped_to_sliver() {
        let items = [
            EventSlot::new(TimeOfDay::new(9, 0), 0.0),
            EventSlot::new(TimeOfDay::new(10, 0), f64::NAN),
            EventSlot::new(TimeOfDay::new(11, 0), -3.0),
        ];
        for entry in planner().plan(&items) {
            assert!((entry.height - 1.0).abs() < 1e-9, "one-minute sliver at 60px/h");
        }
    }

    #[test]
    fn day_height_covers_24_hours() {
        assert!((planner().day_height() - 1440.0).abs() < f64::EPSILON);
    }

    #[test]
    fn hit_maps_back_to_source_index() {
        let items = [
            EventSlot::new(TimeOfDay::new(9, 0), 1.0),
            EventSlot::new(TimeOfDay::new(11, 0), 1.0),
        ];
        let planner = planner();
        let entries = planner.plan(&items);

        assert_eq!(planner.hit(&entries, 570.0), Some(0)); // inside 9:00–10:00
        assert_eq!(planner.hit(&entries, 690.0), Some(1)); // inside 11:00–12:00
        assert_eq!(planner.hit(&entries, 0.0), None);
        assert_eq!(planner.hit(&entries, f64::NAN), None);
    }

    #[test]
    fn hit_prefers_later_entry_on_overlap() {
        let items = [
            EventSlot::new(TimeOfDay::new(9, 0), 1.0),
            EventSlot::new(TimeOfDay::new(9, 30), 1.0),
        ];
        let planner = planner();
        let entries = planner.plan(&items);

        // 9:45 lies inside both; the later (visually topmost) item wins.
        assert_eq!(planner.hit(&entries, 585.0), Some(1));
    }

    #[test]
    fn entries_serialize_round_trip() {
        let entries = planner().plan(&[EventSlot::new(TimeOfDay::new(9, 0), 1.5)]);
        let json = serde_json::to_string(&entries).expect("serialize");
        let back: Vec<EventEntry> = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back, entries);
    }
}
