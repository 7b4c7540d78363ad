//! Dashboard widgets for the Learnboard presentation layer.
//!
//! Two stateful panels built on [`learnboard_core`]:
//! [`PerformanceMonitor`] (simulated system metrics behind a visibility
//! toggle) and [`NotificationStack`] (transient, self-expiring
//! notification cards), plus the [`LabeledMeter`] building block and
//! TOML [`DashboardConfig`] loading.

pub mod config;
pub mod meter;
pub mod monitor;
pub mod notifications;

pub use config::{ConfigError, DashboardConfig, MonitorConfig, NotificationConfig, ThemeChoice};
pub use meter::LabeledMeter;
pub use monitor::{MonitorClosed, MonitorMinimized, PerformanceMonitor};
pub use notifications::{NotificationActionInvoked, NotificationDismissed, NotificationStack};
