//! Notification stack widget.
//!
//! Hosts a [`NotificationCenter`] and paints its active items as a
//! vertical stack of category-colored cards. Iteration order of the
//! queue is oldest-first; the stack renders newest-first so the most
//! recent card sits at the top of the screen. That reversal is purely
//! visual, the queue order never changes.

use learnboard_core::{
    widget::{AccessibleRole, LayoutResult},
    Canvas, Constraints, Event, MouseButton, Notification, NotificationCenter, NotificationId,
    NotificationSpec, Point, Rect, Size, TextStyle, Theme, TypeId, Widget,
};
use std::any::Any;

/// Message emitted when a card's dismiss control is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationDismissed {
    /// Identifier of the dismissed notification
    pub id: NotificationId,
}

/// Message emitted when a card's action is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationActionInvoked {
    /// Identifier of the notification whose action ran
    pub id: NotificationId,
}

/// Vertical stack of notification cards, newest on top.
#[derive(Debug)]
pub struct NotificationStack {
    center: NotificationCenter,
    theme: Theme,
    bounds: Rect,
}

const CARD_WIDTH: f32 = 320.0;
const CARD_HEIGHT: f32 = 64.0;
const ACTION_ROW_HEIGHT: f32 = 24.0;
const CARD_GAP: f32 = 8.0;
const PADDING: f32 = 10.0;
const DISMISS_SIZE: f32 = 16.0;
const PROGRESS_HEIGHT: f32 = 3.0;

/// Per-card geometry used by both painting and hit-testing.
#[derive(Debug, Clone, Copy)]
struct CardLayout {
    id: NotificationId,
    card: Rect,
    dismiss: Rect,
    action: Option<Rect>,
}

impl NotificationStack {
    /// Create an empty stack with the default theme.
    #[must_use]
    pub fn new() -> Self {
        Self {
            center: NotificationCenter::new(),
            theme: Theme::default(),
            bounds: Rect::ZERO,
        }
    }

    /// Set the theme.
    #[must_use]
    pub fn theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Bound the queue depth (oldest items evicted on overflow).
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.center = std::mem::take(&mut self.center).with_max_depth(depth);
        self
    }

    /// Enqueue a notification and return its identifier.
    pub fn notify(&mut self, spec: NotificationSpec) -> NotificationId {
        self.center.notify(spec)
    }

    /// Dismiss a notification. No-op on unknown ids.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        self.center.dismiss(id)
    }

    /// Remove every notification.
    pub fn clear_all(&mut self) {
        self.center.clear_all();
    }

    /// Advance simulated time; returns the ids that expired.
    pub fn advance(&mut self, delta_ms: u32) -> Vec<NotificationId> {
        self.center.advance(delta_ms)
    }

    /// Access the underlying queue.
    #[must_use]
    pub const fn center(&self) -> &NotificationCenter {
        &self.center
    }

    /// Number of active cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.center.len()
    }

    /// Check if the stack is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.center.is_empty()
    }

    fn card_height(notification: &Notification) -> f32 {
        if notification.action_label().is_some() {
            CARD_HEIGHT + ACTION_ROW_HEIGHT
        } else {
            CARD_HEIGHT
        }
    }

    /// Compute per-card geometry, newest first from the top.
    fn card_layouts(&self) -> Vec<CardLayout> {
        let mut layouts = Vec::with_capacity(self.center.len());
        let mut y = self.bounds.y;

        let items: Vec<&Notification> = self.center.iter().collect();
        for notification in items.into_iter().rev() {
            let height = Self::card_height(notification);
            let card = Rect::new(self.bounds.x, y, self.bounds.width, height);
            let dismiss = Rect::new(
                card.right() - PADDING - DISMISS_SIZE,
                card.y + PADDING,
                DISMISS_SIZE,
                DISMISS_SIZE,
            );
            let action = notification.action_label().map(|_| {
                Rect::new(
                    card.x + PADDING,
                    card.bottom() - ACTION_ROW_HEIGHT - 4.0,
                    100.0,
                    ACTION_ROW_HEIGHT,
                )
            });

            layouts.push(CardLayout {
                id: notification.id(),
                card,
                dismiss,
                action,
            });
            y += height + CARD_GAP;
        }

        layouts
    }

    fn paint_card(&self, canvas: &mut dyn Canvas, notification: &Notification, layout: &CardLayout) {
        let accent = self.theme.category_color(notification.category());

        canvas.fill_rect(layout.card, self.theme.surface);
        canvas.fill_rect(layout.card, accent.with_alpha(0.08));
        canvas.stroke_rect(layout.card, accent.with_alpha(0.4), 1.0);

        canvas.draw_text(
            notification.title(),
            Point::new(layout.card.x + PADDING, layout.card.y + 18.0),
            &TextStyle::new(13.0, self.theme.on_surface).bold(),
        );
        canvas.draw_text(
            notification.body(),
            Point::new(layout.card.x + PADDING, layout.card.y + 36.0),
            &TextStyle::new(11.0, self.theme.muted),
        );
        canvas.draw_text(
            "x",
            Point::new(layout.dismiss.x + 4.0, layout.dismiss.y + 12.0),
            &TextStyle::new(12.0, self.theme.muted),
        );

        if let (Some(label), Some(action_rect)) = (notification.action_label(), layout.action) {
            canvas.stroke_rect(action_rect, accent, 1.0);
            canvas.draw_text(
                label,
                Point::new(action_rect.x + 8.0, action_rect.y + 16.0),
                &TextStyle::new(11.0, accent),
            );
        }

        // Remaining-duration bar along the bottom edge of timed cards.
        if let Some(fraction) = notification.remaining_fraction() {
            let bar = Rect::new(
                layout.card.x,
                layout.card.bottom() - PROGRESS_HEIGHT,
                layout.card.width * fraction,
                PROGRESS_HEIGHT,
            );
            canvas.fill_rect(bar, accent.with_alpha(0.5));
        }
    }
}

impl Default for NotificationStack {
    fn default() -> Self {
        Self::new()
    }
}

impl Widget for NotificationStack {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let height: f32 = self
            .center
            .iter()
            .map(|n| Self::card_height(n) + CARD_GAP)
            .sum::<f32>()
            - if self.center.is_empty() { 0.0 } else { CARD_GAP };
        constraints.constrain(Size::new(CARD_WIDTH, height.max(0.0)))
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        self.bounds = bounds;
        LayoutResult {
            size: bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        for layout in self.card_layouts() {
            if let Some(notification) = self.center.get(layout.id) {
                self.paint_card(canvas, notification, &layout);
            }
        }
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        let Event::MouseDown {
            position,
            button: MouseButton::Left,
        } = event
        else {
            return None;
        };

        for layout in self.card_layouts() {
            if layout.dismiss.contains(*position) {
                self.center.dismiss(layout.id);
                return Some(Box::new(NotificationDismissed { id: layout.id }));
            }
            if let Some(action_rect) = layout.action {
                if action_rect.contains(*position) {
                    self.center.invoke_action(layout.id);
                    return Some(Box::new(NotificationActionInvoked { id: layout.id }));
                }
            }
        }

        None
    }

    fn is_interactive(&self) -> bool {
        !self.center.is_empty()
    }

    fn accessible_name(&self) -> Option<&str> {
        Some("Notifications")
    }

    fn accessible_role(&self) -> AccessibleRole {
        AccessibleRole::Alert
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}
