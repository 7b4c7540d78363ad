//! Labeled percentage meter widget.

use learnboard_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Color, Constraints, Event, Point, Rect, Size, TextStyle, TypeId, Widget,
};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// A labeled horizontal meter showing a percentage value as a
/// track/fill bar.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledMeter {
    /// Label shown left of the value
    label: String,
    /// Current value (0.0 to 100.0)
    value: f32,
    /// Unit suffix appended to the value text
    unit: String,
    /// Bar height
    bar_height: f32,
    /// Minimum width
    min_width: f32,
    /// Track color (background)
    track_color: Color,
    /// Fill color (value)
    fill_color: Color,
    /// Label and value text color
    text_color: Color,
    /// Cached bounds
    #[serde(skip)]
    bounds: Rect,
}

impl Default for LabeledMeter {
    fn default() -> Self {
        Self {
            label: String::new(),
            value: 0.0,
            unit: "%".to_string(),
            bar_height: 8.0,
            min_width: 120.0,
            track_color: Color::new(0.88, 0.88, 0.88, 1.0),
            fill_color: Color::new(0.2, 0.47, 0.96, 1.0),
            text_color: Color::BLACK,
            bounds: Rect::ZERO,
        }
    }
}

impl LabeledMeter {
    /// Height of the text row above the bar.
    const TEXT_ROW_HEIGHT: f32 = 18.0;

    /// Create a meter with the given label.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// Set the value (clamped to 0..=100).
    #[must_use]
    pub fn value(mut self, value: f32) -> Self {
        self.value = value.clamp(0.0, 100.0);
        self
    }

    /// Set the unit suffix.
    #[must_use]
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    /// Set the fill color.
    #[must_use]
    pub const fn fill_color(mut self, color: Color) -> Self {
        self.fill_color = color;
        self
    }

    /// Set the track color.
    #[must_use]
    pub const fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the text color.
    #[must_use]
    pub const fn text_color(mut self, color: Color) -> Self {
        self.text_color = color;
        self
    }

    /// Get the current value.
    #[must_use]
    pub const fn get_value(&self) -> f32 {
        self.value
    }

    /// Get the label.
    #[must_use]
    pub fn get_label(&self) -> &str {
        &self.label
    }

    /// Set the value directly (clamped).
    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(0.0, 100.0);
    }

    /// Set the fill color directly.
    pub fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }
}

impl Widget for LabeledMeter {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let preferred = Size::new(self.min_width, Self::TEXT_ROW_HEIGHT + self.bar_height);
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let text_style = TextStyle::new(12.0, self.text_color);

        canvas.draw_text(
            &self.label,
            Point::new(self.bounds.x, self.bounds.y + 12.0),
            &text_style,
        );
        canvas.draw_text(
            &format!("{:.1}{}", self.value, self.unit),
            Point::new(self.bounds.right() - 44.0, self.bounds.y + 12.0),
            &text_style.bold(),
        );

        let track = Rect::new(
            self.bounds.x,
            self.bounds.y + Self::TEXT_ROW_HEIGHT,
            self.bounds.width,
            self.bar_height,
        );
        canvas.fill_rect(track, self.track_color);

        if self.value > 0.0 {
            let fill = Rect::new(
                track.x,
                track.y,
                track.width * self.value / 100.0,
                self.bar_height,
            );
            canvas.fill_rect(fill, self.fill_color);
        }
    }

    fn event(&mut self, _event: &Event) -> Option<Box<dyn Any + Send>> {
        None
    }

    fn accessible_name(&self) -> Option<&str> {
        if self.label.is_empty() {
            None
        } else {
            Some(&self.label)
        }
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::ProgressBar
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
