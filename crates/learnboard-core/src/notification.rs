//! Transient notifications.
//!
//! A [`NotificationCenter`] keeps an insertion-ordered queue of active
//! notifications. Items leave the queue through explicit dismissal or,
//! if a duration was given, through an expiry countdown advanced on
//! simulated time. Once removed an item is gone for good.

use crate::timing::Countdown;
use serde::{Deserialize, Serialize};

/// Category of a notification, driving its visual treatment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Operation completed
    Success,
    /// Operation failed
    Error,
    /// Something needs attention
    Warning,
    /// Neutral information
    Info,
    /// A badge or milestone was earned
    Achievement,
    /// A study or learning prompt
    Learning,
}

impl Category {
    /// All categories, in display order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Success,
            Self::Error,
            Self::Warning,
            Self::Info,
            Self::Achievement,
            Self::Learning,
        ]
    }

    /// Human-readable label.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Success => "Success",
            Self::Error => "Error",
            Self::Warning => "Warning",
            Self::Info => "Info",
            Self::Achievement => "Achievement",
            Self::Learning => "Learning",
        }
    }
}

/// Opaque identifier of an enqueued notification, unique per center.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl std::fmt::Display for NotificationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "notification#{}", self.0)
    }
}

/// Callback invoked when a notification's action is triggered.
pub type ActionCallback = Box<dyn FnMut() + Send + Sync>;

/// A single user action attached to a notification.
pub struct NotificationAction {
    label: String,
    on_invoke: ActionCallback,
}

impl NotificationAction {
    /// Create an action with a label and an effect.
    pub fn new<F>(label: impl Into<String>, on_invoke: F) -> Self
    where
        F: FnMut() + Send + Sync + 'static,
    {
        Self {
            label: label.into(),
            on_invoke: Box::new(on_invoke),
        }
    }

    /// Get the action label.
    #[must_use]
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Run the action's effect.
    pub fn invoke(&mut self) {
        (self.on_invoke)();
    }
}

impl std::fmt::Debug for NotificationAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NotificationAction")
            .field("label", &self.label)
            .finish_non_exhaustive()
    }
}

/// Caller-supplied description of a notification to enqueue.
#[derive(Debug)]
pub struct NotificationSpec {
    category: Category,
    title: String,
    body: String,
    duration_ms: Option<u32>,
    action: Option<NotificationAction>,
}

impl NotificationSpec {
    /// Create a spec with the required fields and no duration or action.
    pub fn new(category: Category, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            category,
            title: title.into(),
            body: body.into(),
            duration_ms: None,
            action: None,
        }
    }

    /// Auto-dismiss after the given number of milliseconds.
    #[must_use]
    pub const fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = Some(duration_ms);
        self
    }

    /// Attach a single user action.
    #[must_use]
    pub fn action<F>(mut self, label: impl Into<String>, on_invoke: F) -> Self
    where
        F: FnMut() + Send + Sync + 'static,
    {
        self.action = Some(NotificationAction::new(label, on_invoke));
        self
    }
}

/// An enqueued notification.
#[derive(Debug)]
pub struct Notification {
    id: NotificationId,
    category: Category,
    title: String,
    body: String,
    action: Option<NotificationAction>,
    expiry: Option<Countdown>,
}

impl Notification {
    /// Get the identifier.
    #[must_use]
    pub const fn id(&self) -> NotificationId {
        self.id
    }

    /// Get the category.
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Get the title text.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Get the body text.
    #[must_use]
    pub fn body(&self) -> &str {
        &self.body
    }

    /// Get the action label, if an action is attached.
    #[must_use]
    pub fn action_label(&self) -> Option<&str> {
        self.action.as_ref().map(NotificationAction::label)
    }

    /// Fraction of the display duration still remaining.
    ///
    /// `None` for notifications without a duration.
    #[must_use]
    pub fn remaining_fraction(&self) -> Option<f32> {
        self.expiry.as_ref().map(Countdown::remaining_fraction)
    }
}

/// Insertion-ordered queue of active notifications.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    items: Vec<Notification>,
    next_id: u64,
    max_depth: Option<usize>,
}

impl NotificationCenter {
    /// Create an empty center with no depth bound.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Bound the queue: enqueueing beyond `depth` evicts the oldest item.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth.max(1));
        self
    }

    /// Enqueue a notification at the tail and return its identifier.
    pub fn notify(&mut self, spec: NotificationSpec) -> NotificationId {
        let id = NotificationId(self.next_id);
        self.next_id += 1;

        self.items.push(Notification {
            id,
            category: spec.category,
            title: spec.title,
            body: spec.body,
            action: spec.action,
            expiry: spec.duration_ms.map(Countdown::new),
        });

        if let Some(depth) = self.max_depth {
            while self.items.len() > depth {
                self.items.remove(0);
            }
        }

        id
    }

    /// Remove the notification with the given id.
    ///
    /// Removing an item also drops its expiry countdown, so a pending
    /// timeout can never remove a second item. Returns false (and does
    /// nothing) if the id is absent; calling twice equals calling once.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    /// Remove every notification.
    pub fn clear_all(&mut self) {
        self.items.clear();
    }

    /// Advance simulated time, dismissing items whose duration elapsed.
    /// Returns the ids that expired, oldest first.
    pub fn advance(&mut self, delta_ms: u32) -> Vec<NotificationId> {
        let mut expired = Vec::new();
        self.items.retain_mut(|n| {
            let expired_now = match n.expiry.as_mut() {
                Some(countdown) => countdown.advance(delta_ms),
                None => false,
            };
            if expired_now {
                expired.push(n.id);
                false
            } else {
                true
            }
        });
        expired
    }

    /// Iterate active notifications in insertion order, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Get a notification by id.
    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    /// Check whether an id is still active.
    #[must_use]
    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Number of active notifications.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if no notifications are active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Run the action attached to a notification, if any.
    ///
    /// Returns true if an action was invoked. The notification stays in
    /// the queue; dismissal is a separate step.
    pub fn invoke_action(&mut self, id: NotificationId) -> bool {
        if let Some(action) = self
            .items
            .iter_mut()
            .find(|n| n.id == id)
            .and_then(|n| n.action.as_mut())
        {
            action.invoke();
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn info(title: &str) -> NotificationSpec {
        NotificationSpec::new(Category::Info, title, "body")
    }

    // ===== Queue Semantics =====

    #[test]
    fn test_notify_returns_unique_ids() {
        let mut center = NotificationCenter::new();
        let a = center.notify(info("a"));
        let b = center.notify(info("b"));
        assert_ne!(a, b);
        assert_eq!(center.len(), 2);
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut center = NotificationCenter::new();
        center.notify(info("a"));
        center.notify(info("b"));
        center.notify(info("c"));

        let titles: Vec<&str> = center.iter().map(Notification::title).collect();
        assert_eq!(titles, ["a", "b", "c"]);
    }

    #[test]
    fn test_notify_then_dismiss_round_trips() {
        let mut center = NotificationCenter::new();
        center.notify(info("existing"));
        let before: Vec<NotificationId> = center.iter().map(Notification::id).collect();

        let id = center.notify(info("transient"));
        assert!(center.dismiss(id));

        let after: Vec<NotificationId> = center.iter().map(Notification::id).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut center = NotificationCenter::new();
        let id = center.notify(info("a"));
        assert!(center.dismiss(id));
        assert!(!center.dismiss(id));
        assert!(center.is_empty());
    }

    #[test]
    fn test_dismiss_unknown_id_is_noop() {
        let mut center = NotificationCenter::new();
        let id = center.notify(info("a"));
        center.dismiss(id);
        center.notify(info("b"));
        assert!(!center.dismiss(id));
        assert_eq!(center.len(), 1);
    }

    #[test]
    fn test_clear_all() {
        let mut center = NotificationCenter::new();
        center.notify(info("a"));
        center.notify(info("b"));
        center.clear_all();
        assert!(center.is_empty());
    }

    // ===== Expiry =====

    #[test]
    fn test_expiry_after_duration() {
        let mut center = NotificationCenter::new();
        let id = center.notify(info("timed").duration_ms(5000));

        assert!(center.advance(4999).is_empty());
        assert!(center.contains(id));

        let expired = center.advance(1);
        assert_eq!(expired, [id]);
        assert!(!center.contains(id));
    }

    #[test]
    fn test_no_duration_never_expires() {
        let mut center = NotificationCenter::new();
        let id = center.notify(info("sticky"));
        center.advance(u32::MAX);
        assert!(center.contains(id));
    }

    #[test]
    fn test_early_dismiss_cancels_expiry() {
        let mut center = NotificationCenter::new();
        let id = center.notify(info("timed").duration_ms(1000));
        center.dismiss(id);

        // The elapsed timeout must not remove anything else.
        let keeper = center.notify(info("keeper"));
        assert!(center.advance(10_000).is_empty());
        assert!(center.contains(keeper));
    }

    #[test]
    fn test_independent_expiries() {
        let mut center = NotificationCenter::new();
        let short = center.notify(info("short").duration_ms(1000));
        let long = center.notify(info("long").duration_ms(3000));

        assert_eq!(center.advance(1500), [short]);
        assert!(center.contains(long));
        assert_eq!(center.advance(1500), [long]);
        assert!(center.is_empty());
    }

    #[test]
    fn test_remaining_fraction() {
        let mut center = NotificationCenter::new();
        let id = center.notify(info("timed").duration_ms(4000));
        let sticky = center.notify(info("sticky"));

        center.advance(1000);
        let fraction = center.get(id).and_then(Notification::remaining_fraction);
        assert!((fraction.unwrap() - 0.75).abs() < 1e-6);
        assert_eq!(
            center.get(sticky).and_then(Notification::remaining_fraction),
            None
        );
    }

    // ===== Depth Bound =====

    #[test]
    fn test_max_depth_evicts_oldest() {
        let mut center = NotificationCenter::new().with_max_depth(2);
        center.notify(info("a"));
        center.notify(info("b"));
        center.notify(info("c"));

        let titles: Vec<&str> = center.iter().map(Notification::title).collect();
        assert_eq!(titles, ["b", "c"]);
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut center = NotificationCenter::new();
        for i in 0..100 {
            center.notify(info(&format!("n{i}")));
        }
        assert_eq!(center.len(), 100);
    }

    // ===== Actions =====

    #[test]
    fn test_invoke_action_runs_effect() {
        let count = Arc::new(AtomicUsize::new(0));
        let count_clone = count.clone();

        let mut center = NotificationCenter::new();
        let id = center.notify(
            NotificationSpec::new(Category::Learning, "Quiz ready", "A new quiz is waiting")
                .action("Start quiz", move || {
                    count_clone.fetch_add(1, Ordering::SeqCst);
                }),
        );

        assert!(center.invoke_action(id));
        assert!(center.invoke_action(id));
        assert_eq!(count.load(Ordering::SeqCst), 2);
        // Invoking does not dismiss
        assert!(center.contains(id));
    }

    #[test]
    fn test_invoke_action_without_action() {
        let mut center = NotificationCenter::new();
        let id = center.notify(info("plain"));
        assert!(!center.invoke_action(id));
    }

    #[test]
    fn test_action_label_exposed() {
        let mut center = NotificationCenter::new();
        let id = center.notify(info("a").action("Retry", || {}));
        assert_eq!(center.get(id).unwrap().action_label(), Some("Retry"));
    }

    // ===== Categories =====

    #[test]
    fn test_category_labels() {
        assert_eq!(Category::Achievement.label(), "Achievement");
        assert_eq!(Category::all().len(), 6);
    }

    #[test]
    fn test_category_serialization() {
        let json = serde_json::to_string(&Category::Learning).unwrap();
        let back: Category = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Category::Learning);
    }
}
