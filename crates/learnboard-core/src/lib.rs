//! Core types and stateful components for the Learnboard dashboard.
//!
//! This crate provides the building blocks of the dashboard's
//! presentation layer:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`]
//! - Color and theming: [`Color`], [`Theme`]
//! - The widget cycle: [`Widget`], [`Canvas`], [`RecordingCanvas`]
//! - Simulated-time scheduling: [`Timer`], [`Countdown`]
//! - The stateful cores: [`MetricsSimulator`] and [`NotificationCenter`]
//!
//! Nothing here touches a wall clock or the outside world; hosts drive
//! every component by calling `advance(delta_ms)` from their own event
//! loop.

mod canvas;
mod color;
mod constraints;
mod event;
mod geometry;
pub mod metrics;
pub mod notification;
mod rng;
mod theme;
mod timing;
pub mod widget;

pub use canvas::{DrawCommand, RecordingCanvas};
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use event::{Event, Key, MouseButton};
pub use geometry::{Point, Rect, Size};
pub use metrics::{MetricsSimulator, Snapshot, StatusLevel};
pub use notification::{
    Category, Notification, NotificationAction, NotificationCenter, NotificationId,
    NotificationSpec,
};
pub use rng::{SeededRng, DEFAULT_SEED};
pub use theme::Theme;
pub use timing::{Countdown, Timer};
pub use widget::{
    AccessibleRole, Canvas, FontWeight, LayoutResult, TextStyle, TypeId, Widget, WidgetId,
};

#[cfg(test)]
mod tests {
    use super::*;

    // ==========================================================================
    // Metrics Simulator Properties
    // ==========================================================================

    mod metrics_props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_percentages_stay_bounded(seed in any::<u64>(), ticks in 1u32..200) {
                let mut sim = MetricsSimulator::new().with_seed(seed);
                sim.show();
                sim.advance(ticks * 1000);
                let s = sim.snapshot();
                for value in [s.cpu, s.memory, s.network, s.battery, s.temperature] {
                    prop_assert!((0.0..=100.0).contains(&value));
                }
            }

            #[test]
            fn prop_battery_non_increasing(seed in any::<u64>(), ticks in 1u32..200) {
                let mut sim = MetricsSimulator::new().with_seed(seed);
                sim.show();
                let mut previous = sim.snapshot().battery;
                for _ in 0..ticks {
                    sim.advance(1000);
                    prop_assert!(sim.snapshot().battery <= previous);
                    previous = sim.snapshot().battery;
                }
            }

            #[test]
            fn prop_errors_non_decreasing(seed in any::<u64>(), ticks in 1u32..200) {
                let mut sim = MetricsSimulator::new().with_seed(seed);
                sim.show();
                let mut previous = sim.snapshot().errors;
                for _ in 0..ticks {
                    sim.advance(1000);
                    prop_assert!(sim.snapshot().errors >= previous);
                    previous = sim.snapshot().errors;
                }
            }

            #[test]
            fn prop_hidden_ignores_any_elapsed_time(seed in any::<u64>(), elapsed in any::<u32>()) {
                let mut sim = MetricsSimulator::new().with_seed(seed);
                let before = sim.snapshot().clone();
                prop_assert_eq!(sim.advance(elapsed), 0);
                prop_assert_eq!(sim.snapshot(), &before);
            }

            #[test]
            fn prop_score_within_bounds(seed in any::<u64>(), ticks in 1u32..100) {
                let mut sim = MetricsSimulator::new().with_seed(seed);
                sim.show();
                sim.advance(ticks * 1000);
                prop_assert!(sim.snapshot().performance_score() <= 100);
            }
        }
    }

    // ==========================================================================
    // Notification Queue Properties
    // ==========================================================================

    mod notification_props {
        use super::*;
        use proptest::prelude::*;

        fn spec(title: &str) -> NotificationSpec {
            NotificationSpec::new(Category::Info, title, "body")
        }

        proptest! {
            #[test]
            fn prop_enqueue_then_dismiss_restores_state(existing in 0usize..20) {
                let mut center = NotificationCenter::new();
                for i in 0..existing {
                    center.notify(spec(&format!("n{i}")));
                }
                let before: Vec<NotificationId> =
                    center.iter().map(Notification::id).collect();

                let id = center.notify(spec("transient"));
                center.dismiss(id);

                let after: Vec<NotificationId> =
                    center.iter().map(Notification::id).collect();
                prop_assert_eq!(before, after);
            }

            #[test]
            fn prop_dismiss_twice_equals_once(count in 1usize..20, victim in 0usize..20) {
                let mut a = NotificationCenter::new();
                let mut b = NotificationCenter::new();
                let mut ids_a = Vec::new();
                let mut ids_b = Vec::new();
                for i in 0..count {
                    ids_a.push(a.notify(spec(&format!("n{i}"))));
                    ids_b.push(b.notify(spec(&format!("n{i}"))));
                }
                let victim = victim % count;

                a.dismiss(ids_a[victim]);
                b.dismiss(ids_b[victim]);
                b.dismiss(ids_b[victim]);

                let titles_a: Vec<&str> = a.iter().map(Notification::title).collect();
                let titles_b: Vec<&str> = b.iter().map(Notification::title).collect();
                prop_assert_eq!(titles_a, titles_b);
            }

            #[test]
            fn prop_insertion_order_preserved(titles in proptest::collection::vec("[a-z]{1,8}", 1..20)) {
                let mut center = NotificationCenter::new();
                for title in &titles {
                    center.notify(spec(title));
                }
                let observed: Vec<&str> = center.iter().map(Notification::title).collect();
                prop_assert_eq!(observed, titles.iter().map(String::as_str).collect::<Vec<_>>());
            }

            #[test]
            fn prop_expiry_exactly_at_duration(duration in 1u32..60_000) {
                let mut center = NotificationCenter::new();
                let id = center.notify(spec("timed").duration_ms(duration));
                center.advance(duration - 1);
                prop_assert!(center.contains(id));
                center.advance(1);
                prop_assert!(!center.contains(id));
            }

            #[test]
            fn prop_max_depth_never_exceeded(depth in 1usize..10, pushes in 1usize..40) {
                let mut center = NotificationCenter::new().with_max_depth(depth);
                for i in 0..pushes {
                    center.notify(spec(&format!("n{i}")));
                    prop_assert!(center.len() <= depth);
                }
            }
        }
    }
}
