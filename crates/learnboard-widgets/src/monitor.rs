//! Performance monitor panel widget.
//!
//! Shows a live-updating view of the simulated system metrics: four
//! percentage meters, a row of point-in-time indicators, and an
//! aggregate score block. The panel owns its
//! [`MetricsSimulator`] and drives it from the host's `advance` calls;
//! hiding the panel suspends the simulation entirely.

use crate::meter::LabeledMeter;
use learnboard_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, MetricsSimulator, MouseButton, Point, Rect, Size, Snapshot,
    TextStyle, Theme, TypeId, Widget,
};
use std::any::Any;

/// Message emitted when the panel's close button is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorClosed;

/// Message emitted when the panel is minimized or restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonitorMinimized {
    /// The new minimized state
    pub minimized: bool,
}

/// Performance monitor panel.
#[derive(Debug)]
pub struct PerformanceMonitor {
    sim: MetricsSimulator,
    theme: Theme,
    minimized: bool,
    meters: [LabeledMeter; 4],
    /// Cached bounds
    bounds: Rect,
    /// Header hit regions, computed during layout
    close_rect: Rect,
    minimize_rect: Rect,
}

const PANEL_WIDTH: f32 = 320.0;
const HEADER_HEIGHT: f32 = 36.0;
const METER_ROW_HEIGHT: f32 = 34.0;
const INFO_ROW_HEIGHT: f32 = 22.0;
const SCORE_BLOCK_HEIGHT: f32 = 64.0;
const PADDING: f32 = 12.0;
const BUTTON_SIZE: f32 = 20.0;

impl PerformanceMonitor {
    /// Create a hidden monitor with the default theme and simulator.
    #[must_use]
    pub fn new() -> Self {
        Self {
            sim: MetricsSimulator::new(),
            theme: Theme::default(),
            minimized: false,
            meters: [
                LabeledMeter::new("CPU"),
                LabeledMeter::new("Memory"),
                LabeledMeter::new("Network"),
                LabeledMeter::new("Battery"),
            ],
            bounds: Rect::ZERO,
            close_rect: Rect::ZERO,
            minimize_rect: Rect::ZERO,
        }
    }

    /// Set the simulator's random seed.
    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.sim = self.sim.with_seed(seed);
        self
    }

    /// Set the simulation tick interval in milliseconds.
    #[must_use]
    pub fn tick_interval_ms(mut self, interval_ms: u32) -> Self {
        self.sim = self.sim.with_interval_ms(interval_ms);
        self
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Show the panel, restarting the simulation from a fresh baseline.
    pub fn show(&mut self) {
        self.sim.show();
        self.sync_meters();
    }

    /// Hide the panel, suspending the simulation.
    pub fn hide(&mut self) {
        self.sim.hide();
    }

    /// Check if the panel is visible.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.sim.is_visible()
    }

    /// Check if the panel is minimized (header only).
    #[must_use]
    pub const fn is_minimized(&self) -> bool {
        self.minimized
    }

    /// Toggle the minimized state. Minimizing does not suspend the
    /// simulation; only hiding does.
    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    /// Get the current snapshot.
    #[must_use]
    pub const fn snapshot(&self) -> &Snapshot {
        self.sim.snapshot()
    }

    /// Reset the snapshot to its baseline (the external battery reset).
    pub fn reset(&mut self) {
        self.sim.reset();
        self.sync_meters();
    }

    /// Advance simulated time. Returns the number of ticks applied.
    pub fn advance(&mut self, delta_ms: u32) -> u32 {
        let ticks = self.sim.advance(delta_ms);
        if ticks > 0 {
            self.sync_meters();
        }
        ticks
    }

    fn sync_meters(&mut self) {
        let snapshot = self.sim.snapshot().clone();
        let values = [
            snapshot.cpu,
            snapshot.memory,
            snapshot.network,
            snapshot.battery,
        ];
        let colors = [
            self.theme.status_color(snapshot.cpu_status()),
            self.theme.status_color(snapshot.memory_status()),
            self.theme.primary,
            self.theme.primary,
        ];
        for ((meter, value), color) in self.meters.iter_mut().zip(values).zip(colors) {
            meter.set_value(value as f32);
            meter.set_fill_color(color);
        }
    }

    fn content_height(&self) -> f32 {
        if self.minimized {
            HEADER_HEIGHT
        } else {
            HEADER_HEIGHT
                + 2.0 * METER_ROW_HEIGHT
                + 4.0 * INFO_ROW_HEIGHT
                + SCORE_BLOCK_HEIGHT
                + 4.0 * PADDING
        }
    }

    fn paint_header(&self, canvas: &mut dyn Canvas) {
        let title_style = TextStyle::new(14.0, self.theme.on_surface).bold();
        canvas.draw_text(
            "Performance Monitor",
            Point::new(self.bounds.x + PADDING, self.bounds.y + 22.0),
            &title_style,
        );
        canvas.draw_text(
            "Live",
            Point::new(self.bounds.x + 170.0, self.bounds.y + 22.0),
            &TextStyle::new(10.0, self.theme.muted),
        );

        let glyph_style = TextStyle::new(12.0, self.theme.muted);
        let minimize_glyph = if self.minimized { "^" } else { "v" };
        canvas.draw_text(
            minimize_glyph,
            Point::new(self.minimize_rect.x + 6.0, self.minimize_rect.y + 14.0),
            &glyph_style,
        );
        canvas.draw_text(
            "x",
            Point::new(self.close_rect.x + 6.0, self.close_rect.y + 14.0),
            &glyph_style,
        );
    }

    fn paint_info_rows(&self, canvas: &mut dyn Canvas, top: f32) {
        let snapshot = self.sim.snapshot();
        let rows = [
            ("Load Time", format!("{:.0}ms", snapshot.load_time_ms)),
            ("FPS", format!("{:.0}", snapshot.fps)),
            ("Temperature", format!("{:.1}\u{b0}C", snapshot.temperature)),
            ("Errors", snapshot.errors.to_string()),
        ];

        let label_style = TextStyle::new(12.0, self.theme.muted);
        let value_style = TextStyle::new(12.0, self.theme.on_surface).bold();
        for (i, (label, value)) in rows.iter().enumerate() {
            let y = top + (i as f32) * INFO_ROW_HEIGHT + 14.0;
            canvas.draw_text(label, Point::new(self.bounds.x + PADDING, y), &label_style);
            canvas.draw_text(
                value,
                Point::new(self.bounds.right() - PADDING - 60.0, y),
                &value_style,
            );
        }
    }

    fn paint_score_block(&self, canvas: &mut dyn Canvas, top: f32) {
        let snapshot = self.sim.snapshot();
        let score = snapshot.performance_score();

        let block = Rect::new(
            self.bounds.x + PADDING,
            top,
            self.bounds.width - 2.0 * PADDING,
            SCORE_BLOCK_HEIGHT,
        );
        canvas.fill_rect(block, self.theme.primary.with_alpha(0.1));
        canvas.draw_text(
            "Performance Score",
            Point::new(block.x + 8.0, block.y + 18.0),
            &TextStyle::new(12.0, self.theme.on_surface).bold(),
        );
        canvas.draw_text(
            &score.to_string(),
            Point::new(block.x + 8.0, block.y + 42.0),
            &TextStyle::new(24.0, self.theme.on_surface).bold(),
        );

        let track = Rect::new(block.x + 8.0, block.bottom() - 12.0, block.width - 16.0, 6.0);
        canvas.fill_rect(track, self.theme.background);
        if score > 0 {
            let fill = Rect::new(
                track.x,
                track.y,
                track.width * f32::from(score) / 100.0,
                track.height,
            );
            canvas.fill_rect(fill, self.theme.primary);
        }
    }
}

impl Default for PerformanceMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for PerformanceMonitor {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        if !self.is_visible() {
            return constraints.constrain(Size::ZERO);
        }
        constraints.constrain(Size::new(PANEL_WIDTH, self.content_height()))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;

        self.close_rect = Rect::new(
            bounds.right() - PADDING - BUTTON_SIZE,
            bounds.y + 8.0,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );
        self.minimize_rect = Rect::new(
            self.close_rect.x - BUTTON_SIZE - 4.0,
            bounds.y + 8.0,
            BUTTON_SIZE,
            BUTTON_SIZE,
        );

        // Meters form a 2x2 grid below the header.
        let meter_width = (bounds.width - 3.0 * PADDING) / 2.0;
        for (i, meter) in self.meters.iter_mut().enumerate() {
            let col = (i % 2) as f32;
            let row = (i / 2) as f32;
            meter.layout(Rect::new(
                bounds.x + PADDING + col * (meter_width + PADDING),
                bounds.y + HEADER_HEIGHT + row * METER_ROW_HEIGHT,
                meter_width,
                METER_ROW_HEIGHT,
            ));
        }

        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        if !self.is_visible() {
            return;
        }

        let surface = Rect::new(
            self.bounds.x,
            self.bounds.y,
            self.bounds.width,
            self.content_height(),
        );
        canvas.fill_rect(surface, self.theme.surface);
        canvas.stroke_rect(surface, self.theme.primary.with_alpha(0.2), 1.0);

        self.paint_header(canvas);
        if self.minimized {
            return;
        }

        for meter in &self.meters {
            meter.paint(canvas);
        }

        let info_top = self.bounds.y + HEADER_HEIGHT + 2.0 * METER_ROW_HEIGHT + PADDING;
        self.paint_info_rows(canvas, info_top);

        let score_top = info_top + 4.0 * INFO_ROW_HEIGHT + PADDING;
        self.paint_score_block(canvas, score_top);
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        if !self.is_visible() {
            return None;
        }

        if let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        {
            if self.close_rect.contains(*position) {
                self.hide();
                return Some(Box::new(MonitorClosed));
            }
            if self.minimize_rect.contains(*position) {
                self.toggle_minimized();
                return Some(Box::new(MonitorMinimized {
                    minimized: self.minimized,
                }));
            }
        }

        None
    }

    fn is_interactive(&self) -> bool {
        self.is_visible()
    }

    fn accessible_name(&self) -> Option<&str> {
        Some("Performance Monitor")
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Status
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
