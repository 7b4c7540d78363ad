//! Theme system for consistent styling.

use crate::color::Color;
use crate::metrics::StatusLevel;
use crate::notification::Category;
use serde::{Deserialize, Serialize};

/// A color palette for theming the dashboard widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    /// Primary brand color
    pub primary: Color,
    /// Surface/card color
    pub surface: Color,
    /// Page background color
    pub background: Color,
    /// Text on surface
    pub on_surface: Color,
    /// De-emphasized text
    pub muted: Color,
    /// Success/good color
    pub success: Color,
    /// Error/critical color
    pub error: Color,
    /// Warning color
    pub warning: Color,
    /// Achievement highlight color
    pub achievement: Color,
    /// Learning highlight color
    pub learning: Color,
}

impl Theme {
    /// Create the light theme.
    #[must_use]
    pub fn light() -> Self {
        Self {
            primary: Color::new(0.2, 0.47, 0.96, 1.0),     // Blue
            surface: Color::WHITE,
            background: Color::new(0.98, 0.98, 0.98, 1.0), // Light gray
            on_surface: Color::new(0.13, 0.13, 0.13, 1.0), // Dark gray
            muted: Color::new(0.45, 0.45, 0.45, 1.0),
            success: Color::new(0.18, 0.55, 0.34, 1.0),    // Green
            error: Color::new(0.69, 0.18, 0.18, 1.0),      // Red
            warning: Color::new(0.93, 0.60, 0.0, 1.0),     // Orange
            achievement: Color::new(0.85, 0.65, 0.13, 1.0), // Gold
            learning: Color::new(0.48, 0.32, 0.82, 1.0),   // Purple
        }
    }

    /// Create the dark theme.
    #[must_use]
    pub fn dark() -> Self {
        Self {
            primary: Color::new(0.51, 0.71, 1.0, 1.0),     // Light blue
            surface: Color::new(0.14, 0.14, 0.14, 1.0),    // Dark gray
            background: Color::new(0.07, 0.07, 0.07, 1.0), // Near black
            on_surface: Color::WHITE,
            muted: Color::new(0.65, 0.65, 0.65, 1.0),
            success: Color::new(0.51, 0.78, 0.58, 1.0),    // Light green
            error: Color::new(0.94, 0.47, 0.47, 1.0),      // Light red
            warning: Color::new(1.0, 0.78, 0.35, 1.0),     // Light orange
            achievement: Color::new(0.96, 0.81, 0.37, 1.0), // Light gold
            learning: Color::new(0.71, 0.58, 0.96, 1.0),   // Light purple
        }
    }

    /// Accent color for a notification category.
    #[must_use]
    pub const fn category_color(&self, category: Category) -> Color {
        match category {
            Category::Success => self.success,
            Category::Error => self.error,
            Category::Warning => self.warning,
            Category::Info => self.primary,
            Category::Achievement => self.achievement,
            Category::Learning => self.learning,
        }
    }

    /// Color for a metric status level.
    #[must_use]
    pub const fn status_color(&self, status: StatusLevel) -> Color {
        match status {
            StatusLevel::Good => self.success,
            StatusLevel::Warning => self.warning,
            StatusLevel::Critical => self.error,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::light()
    }
}
