//! Simulated performance metrics.
//!
//! The monitor panel shows live-looking system metrics without reading
//! anything from the host: a [`MetricsSimulator`] evolves a [`Snapshot`]
//! by one randomized step per timer tick while the panel is visible and
//! ignores elapsed time entirely while hidden.

use crate::rng::SeededRng;
use crate::timing::Timer;
use serde::{Deserialize, Serialize};

/// Tick period of the simulation while visible.
pub const TICK_INTERVAL_MS: u32 = 1000;

// Per-tick nudge magnitude for each drifting field. A field moves by a
// uniform draw from [-delta/2, +delta/2] and is clamped to [0, 100].
const CPU_DELTA: f64 = 10.0;
const MEMORY_DELTA: f64 = 5.0;
const NETWORK_DELTA: f64 = 15.0;
const TEMPERATURE_DELTA: f64 = 2.0;

/// Maximum battery drain per tick (uniform in [0, this]).
const BATTERY_DRAIN_MAX: f64 = 0.1;

/// Probability that the error counter increments on a tick.
const ERROR_PROBABILITY: f64 = 0.05;

const LOAD_TIME_RANGE: (f64, f64) = (500.0, 2500.0);
const FPS_RANGE: (f64, f64) = (50.0, 70.0);

/// Classification of a metric value against per-metric thresholds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusLevel {
    /// At or below the good threshold
    Good,
    /// Above good, at or below the warning threshold
    Warning,
    /// Above the warning threshold
    Critical,
}

impl StatusLevel {
    /// Classify a value against a (good, warning) threshold pair.
    #[must_use]
    pub fn classify(value: f64, good: f64, warning: f64) -> Self {
        if value <= good {
            Self::Good
        } else if value <= warning {
            Self::Warning
        } else {
            Self::Critical
        }
    }
}

/// One point-in-time bundle of simulated metric values.
///
/// Percentage-like fields (cpu, memory, network, battery, temperature)
/// stay within [0, 100]; battery never increases except through an
/// explicit reset; errors never decrease within a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// CPU usage, percent
    pub cpu: f64,
    /// Memory usage, percent
    pub memory: f64,
    /// Network utilization, percent
    pub network: f64,
    /// Battery charge, percent
    pub battery: f64,
    /// Temperature, degrees Celsius
    pub temperature: f64,
    /// Page load time, milliseconds
    pub load_time_ms: f64,
    /// Frames per second
    pub fps: f64,
    /// Cumulative error count
    pub errors: u32,
}

impl Snapshot {
    /// The baseline snapshot: everything at zero, battery full.
    #[must_use]
    pub const fn initial() -> Self {
        Self {
            cpu: 0.0,
            memory: 0.0,
            network: 0.0,
            battery: 100.0,
            temperature: 0.0,
            load_time_ms: 0.0,
            fps: 0.0,
            errors: 0,
        }
    }

    /// Compute the next snapshot from this one.
    ///
    /// Drifting fields are nudged and clamped; battery drains; load time
    /// and fps are redrawn fresh; errors increment with a small
    /// probability. All transformations are total.
    #[must_use]
    pub fn step(&self, rng: &mut SeededRng) -> Self {
        let nudge = |rng: &mut SeededRng, value: f64, delta: f64| {
            (value + rng.range(-delta / 2.0, delta / 2.0)).clamp(0.0, 100.0)
        };

        Self {
            cpu: nudge(rng, self.cpu, CPU_DELTA),
            memory: nudge(rng, self.memory, MEMORY_DELTA),
            network: nudge(rng, self.network, NETWORK_DELTA),
            battery: (self.battery - rng.range(0.0, BATTERY_DRAIN_MAX)).max(0.0),
            temperature: nudge(rng, self.temperature, TEMPERATURE_DELTA),
            load_time_ms: rng.range(LOAD_TIME_RANGE.0, LOAD_TIME_RANGE.1),
            fps: rng.range(FPS_RANGE.0, FPS_RANGE.1),
            errors: if rng.chance(ERROR_PROBABILITY) {
                self.errors + 1
            } else {
                self.errors
            },
        }
    }

    /// Status of the CPU metric (good <= 50, warning <= 80).
    #[must_use]
    pub fn cpu_status(&self) -> StatusLevel {
        StatusLevel::classify(self.cpu, 50.0, 80.0)
    }

    /// Status of the memory metric (good <= 60, warning <= 85).
    #[must_use]
    pub fn memory_status(&self) -> StatusLevel {
        StatusLevel::classify(self.memory, 60.0, 85.0)
    }

    /// Aggregate performance score in [0, 100].
    ///
    /// `100 - (cpu + memory + temperature) / 3`, rounded, floored at 0.
    #[must_use]
    pub fn performance_score(&self) -> u8 {
        let load = (self.cpu + self.memory + self.temperature) / 3.0;
        (100.0 - load).round().max(0.0) as u8
    }
}

impl Default for Snapshot {
    fn default() -> Self {
        Self::initial()
    }
}

/// Evolves a [`Snapshot`] on a fixed tick while visible.
///
/// Visibility is the only control: `show` starts the loop from a fresh
/// baseline, `hide` suspends it and discards accumulated state. Hosts
/// drive the loop with [`MetricsSimulator::advance`].
#[derive(Debug, Clone)]
pub struct MetricsSimulator {
    snapshot: Snapshot,
    timer: Timer,
    rng: SeededRng,
    visible: bool,
}

impl MetricsSimulator {
    /// Create a hidden simulator with the default tick interval and seed.
    #[must_use]
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::initial(),
            timer: Timer::new(TICK_INTERVAL_MS),
            rng: SeededRng::default(),
            visible: false,
        }
    }

    /// Set the random seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = SeededRng::new(seed);
        self
    }

    /// Set the tick interval in milliseconds.
    #[must_use]
    pub fn with_interval_ms(mut self, interval_ms: u32) -> Self {
        self.timer = Timer::new(interval_ms);
        self
    }

    /// Get the current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        &self.snapshot
    }

    /// Check if the simulator is visible (ticking).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Make the simulator visible, starting the loop from a fresh
    /// baseline snapshot. No-op if already visible.
    pub fn show(&mut self) {
        if self.visible {
            return;
        }
        self.visible = true;
        self.snapshot = Snapshot::initial();
        self.timer.reset();
        self.timer.start();
    }

    /// Hide the simulator, suspending the loop. No further ticks occur
    /// and no time accumulates until the next `show`.
    pub fn hide(&mut self) {
        self.visible = false;
        self.timer.stop();
    }

    /// Reset the snapshot to the baseline without touching visibility.
    ///
    /// This is the external battery reset from the data model.
    pub fn reset(&mut self) {
        self.snapshot = Snapshot::initial();
    }

    /// Advance simulated time, applying one step per whole tick elapsed.
    /// Returns the number of steps applied.
    pub fn advance(&mut self, delta_ms: u32) -> u32 {
        let ticks = self.timer.advance(delta_ms);
        for _ in 0..ticks {
            self.snapshot = self.snapshot.step(&mut self.rng);
        }
        ticks
    }
}

impl Default for MetricsSimulator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticked(n: u32) -> MetricsSimulator {
        let mut sim = MetricsSimulator::new().with_seed(1234);
        sim.show();
        sim.advance(n * TICK_INTERVAL_MS);
        sim
    }

    #[test]
    fn test_initial_snapshot() {
        let snapshot = Snapshot::initial();
        assert_eq!(snapshot.cpu, 0.0);
        assert_eq!(snapshot.battery, 100.0);
        assert_eq!(snapshot.errors, 0);
    }

    #[test]
    fn test_step_keeps_percentages_in_bounds() {
        let mut rng = SeededRng::new(7);
        let mut snapshot = Snapshot::initial();
        for _ in 0..500 {
            snapshot = snapshot.step(&mut rng);
            for value in [
                snapshot.cpu,
                snapshot.memory,
                snapshot.network,
                snapshot.battery,
                snapshot.temperature,
            ] {
                assert!((0.0..=100.0).contains(&value), "out of bounds: {value}");
            }
        }
    }

    #[test]
    fn test_battery_never_increases() {
        let mut rng = SeededRng::new(11);
        let mut snapshot = Snapshot::initial();
        let mut previous = snapshot.battery;
        for _ in 0..500 {
            snapshot = snapshot.step(&mut rng);
            assert!(snapshot.battery <= previous);
            previous = snapshot.battery;
        }
    }

    #[test]
    fn test_errors_never_decrease() {
        let mut rng = SeededRng::new(13);
        let mut snapshot = Snapshot::initial();
        let mut previous = snapshot.errors;
        for _ in 0..500 {
            snapshot = snapshot.step(&mut rng);
            assert!(snapshot.errors >= previous);
            previous = snapshot.errors;
        }
    }

    #[test]
    fn test_load_time_and_fps_redrawn_from_ranges() {
        let mut rng = SeededRng::new(17);
        let mut snapshot = Snapshot::initial();
        for _ in 0..200 {
            snapshot = snapshot.step(&mut rng);
            assert!((500.0..2500.0).contains(&snapshot.load_time_ms));
            assert!((50.0..70.0).contains(&snapshot.fps));
        }
    }

    #[test]
    fn test_hidden_simulator_ignores_time() {
        let mut sim = MetricsSimulator::new();
        assert_eq!(sim.advance(60_000), 0);
        assert_eq!(sim.snapshot(), &Snapshot::initial());
    }

    #[test]
    fn test_visible_simulator_ticks_once_per_interval() {
        let mut sim = MetricsSimulator::new();
        sim.show();
        assert_eq!(sim.advance(999), 0);
        assert_eq!(sim.advance(1), 1);
        assert_eq!(sim.advance(2500), 2);
    }

    #[test]
    fn test_hide_suspends_without_accumulation() {
        let mut sim = ticked(3);
        sim.hide();
        let before = sim.snapshot().clone();
        assert_eq!(sim.advance(60_000), 0);
        assert_eq!(sim.snapshot(), &before);
    }

    #[test]
    fn test_show_after_hide_resets_to_baseline() {
        let mut sim = ticked(5);
        assert_ne!(sim.snapshot(), &Snapshot::initial());
        sim.hide();
        sim.show();
        assert_eq!(sim.snapshot(), &Snapshot::initial());
    }

    #[test]
    fn test_show_while_visible_is_noop() {
        let mut sim = ticked(5);
        let before = sim.snapshot().clone();
        sim.show();
        assert_eq!(sim.snapshot(), &before);
    }

    #[test]
    fn test_reset_restores_battery() {
        let mut sim = ticked(10);
        sim.reset();
        assert_eq!(sim.snapshot().battery, 100.0);
        assert!(sim.is_visible());
    }

    #[test]
    fn test_same_seed_same_trajectory() {
        let mut a = MetricsSimulator::new().with_seed(99);
        let mut b = MetricsSimulator::new().with_seed(99);
        a.show();
        b.show();
        a.advance(10_000);
        b.advance(10_000);
        assert_eq!(a.snapshot(), b.snapshot());
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(StatusLevel::classify(50.0, 50.0, 80.0), StatusLevel::Good);
        assert_eq!(
            StatusLevel::classify(50.1, 50.0, 80.0),
            StatusLevel::Warning
        );
        assert_eq!(
            StatusLevel::classify(80.1, 50.0, 80.0),
            StatusLevel::Critical
        );
    }

    #[test]
    fn test_snapshot_statuses() {
        let snapshot = Snapshot {
            cpu: 42.0,
            memory: 90.0,
            ..Snapshot::initial()
        };
        assert_eq!(snapshot.cpu_status(), StatusLevel::Good);
        assert_eq!(snapshot.memory_status(), StatusLevel::Critical);
    }

    #[test]
    fn test_performance_score_bounds() {
        let idle = Snapshot::initial();
        assert_eq!(idle.performance_score(), 100);

        let loaded = Snapshot {
            cpu: 100.0,
            memory: 100.0,
            temperature: 100.0,
            ..Snapshot::initial()
        };
        assert_eq!(loaded.performance_score(), 0);
    }

    #[test]
    fn test_snapshot_serialization() {
        let snapshot = ticked(3).snapshot().clone();
        let json = serde_json::to_string(&snapshot).unwrap();
        let loaded: Snapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded, snapshot);
    }
}
