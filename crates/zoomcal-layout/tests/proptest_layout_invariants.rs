//! Property-based invariant tests for the layout solvers.
//!
//! 1. Width-sum conservation: zooming grows exactly one column
//! 2. With no active column, widths are independent of the zoom
//! 3. Column widths are always finite and at least the closed width
//! 4. Day-plan margins reconstruct each item's absolute top
//! 5. Day-plan heights are positive and proportional to duration

use proptest::prelude::*;
use zoomcal_core::config::ZoomConfig;
use zoomcal_core::zoom::{ActiveColumn, ZoomFrame};
use zoomcal_layout::columns::ColumnStrip;
use zoomcal_layout::events::{DayPlanner, EventSlot, TimeOfDay};

// ── Strategies ──────────────────────────────────────────────────────────

fn config_strategy() -> impl Strategy<Value = ZoomConfig> {
    (1usize..20, 10.0f64..200.0, 1.0f64..4.0).prop_map(|(count, closed, spread)| {
        ZoomConfig::default()
            .columns(count)
            .closed_width(closed)
            .container_width(closed * spread)
    })
}

fn slot_strategy() -> impl Strategy<Value = EventSlot> {
    (0u8..24, 0u8..60, 0.05f64..6.0)
        .prop_map(|(h, m, dur)| EventSlot::new(TimeOfDay::new(h, m), dur))
}

fn sorted_day_strategy() -> impl Strategy<Value = Vec<EventSlot>> {
    prop::collection::vec(slot_strategy(), 0..40).prop_map(|mut slots| {
        slots.sort_by(|a, b| a.start.cmp(&b.start));
        slots
    })
}

// ── Column invariants ───────────────────────────────────────────────────

proptest! {
    #[test]
    fn width_sum_conservation(
        config in config_strategy(),
        zoom in 0.0f64..=1.0,
        seed in any::<prop::sample::Index>(),
    ) {
        let strip = ColumnStrip::new(&config).expect("valid config");
        let active = match seed.index(config.column_count + 2) {
            0 => ActiveColumn::None,
            1 => ActiveColumn::All,
            n => ActiveColumn::Column(n - 2),
        };
        let frame = ZoomFrame { zoom, active };

        let grown = config.closed_width
            + (config.container_width - config.closed_width) * zoom;
        let n = config.column_count as f64;
        let expected = match active {
            ActiveColumn::None => n * config.closed_width,
            ActiveColumn::Column(_) => (n - 1.0) * config.closed_width + grown,
            ActiveColumn::All => n * grown,
        };
        prop_assert!(
            (strip.total_width(&frame) - expected).abs() < 1e-6,
            "total {} expected {expected}",
            strip.total_width(&frame)
        );
    }

    #[test]
    fn no_active_column_means_zoom_invisible(
        config in config_strategy(),
        zoom_a in 0.0f64..=1.0,
        zoom_b in 0.0f64..=1.0,
    ) {
        let strip = ColumnStrip::new(&config).expect("valid config");
        let a = strip.widths(&ZoomFrame { zoom: zoom_a, active: ActiveColumn::None });
        let b = strip.widths(&ZoomFrame { zoom: zoom_b, active: ActiveColumn::None });
        prop_assert_eq!(a, b);
    }

    #[test]
    fn widths_bounded_by_closed_and_container(
        config in config_strategy(),
        zoom in 0.0f64..=1.0,
    ) {
        let strip = ColumnStrip::new(&config).expect("valid config");
        let count = config.column_count;
        for active in [ActiveColumn::None, ActiveColumn::Column(count / 2), ActiveColumn::All] {
            let frame = ZoomFrame { zoom, active };
            for w in strip.widths(&frame) {
                prop_assert!(w.is_finite());
                prop_assert!(w >= config.closed_width - 1e-9);
                prop_assert!(w <= config.container_width + 1e-9);
            }
        }
    }
}

// ── Day-plan invariants ─────────────────────────────────────────────────

proptest! {
    #[test]
    fn margins_reconstruct_absolute_tops(
        items in sorted_day_strategy(),
        hour_height in 10.0f64..120.0,
    ) {
        let planner = DayPlanner::new(hour_height).expect("valid hour height");
        let entries = planner.plan(&items);
        prop_assert_eq!(entries.len(), items.len());

        let mut cursor = 0.0;
        for (entry, item) in entries.iter().zip(&items) {
            let top = cursor + entry.margin_top;
            let expected = item.start.hours_from_midnight() * hour_height;
            prop_assert!(
                (top - expected).abs() < 1e-6,
                "item {}: top {top} expected {expected}",
                entry.index
            );
            cursor = top + entry.height;
        }
    }

    #[test]
    fn heights_positive_and_proportional(
        items in sorted_day_strategy(),
        hour_height in 10.0f64..120.0,
    ) {
        let planner = DayPlanner::new(hour_height).expect("valid hour height");
        for (entry, item) in planner.plan(&items).iter().zip(&items) {
            prop_assert!(entry.height > 0.0);
            prop_assert!(
                (entry.height - item.duration_hours * hour_height).abs() < 1e-6,
                "well-formed durations map linearly"
            );
        }
    }
}
