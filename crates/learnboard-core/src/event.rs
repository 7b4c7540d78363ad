//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Key pressed
    KeyDown {
        /// Key pressed
        key: Key,
    },
}

/// Mouse buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left button
    Left,
    /// Right button
    Right,
    /// Middle button
    Middle,
}

/// Keyboard keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Key {
    /// Escape key
    Escape,
    /// Enter key
    Enter,
    /// A printable character
    Char(char),
}

impl Event {
    /// Convenience constructor for a left-button click at a position.
    #[must_use]
    pub const fn left_click(position: Point) -> Self {
        Self::MouseDown {
            position,
            button: MouseButton::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_left_click() {
        let e = Event::left_click(Point::new(3.0, 4.0));
        assert_eq!(
            e,
            Event::MouseDown {
                position: Point::new(3.0, 4.0),
                button: MouseButton::Left,
            }
        );
    }

    #[test]
    fn test_key_variants() {
        assert_ne!(Key::Escape, Key::Enter);
        assert_eq!(Key::Char('x'), Key::Char('x'));
    }
}
