//! Transient toast notifications

use chrono::{DateTime, Utc};
use std::time::{Duration, Instant};
use uuid::Uuid;

/// Severity of a toast, selects its visual treatment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

/// A single toast message
#[derive(Debug, Clone)]
pub struct Notification {
    pub id: Uuid,
    pub message: String,
    pub severity: Severity,
    pub created_at: DateTime<Utc>,
    /// Monotonic instant the toast became visible, drives expiry
    pub shown_at: Instant,
}

impl Notification {
    /// Duration of the slide-in animation
    const SLIDE_DURATION: Duration = Duration::from_millis(250);

    /// Horizontal offset for the slide-in animation, from `width` down to 0
    pub fn slide_offset(&self, now: Instant, width: u16) -> u16 {
        let elapsed = now.saturating_duration_since(self.shown_at);
        if elapsed >= Self::SLIDE_DURATION {
            return 0;
        }
        let progress = elapsed.as_secs_f32() / Self::SLIDE_DURATION.as_secs_f32();
        let eased = simple_easing::cubic_out(progress);
        ((1.0 - eased) * width as f32).round() as u16
    }
}

/// Page-lifetime queue of toasts
///
/// Toasts stack without a cap; each one expires independently once its
/// display duration has elapsed.
#[derive(Debug)]
pub struct NotificationCenter {
    display_duration: Duration,
    notifications: Vec<Notification>,
}

impl NotificationCenter {
    /// Default display duration (5 seconds)
    pub const DEFAULT_DURATION: Duration = Duration::from_millis(5000);

    pub fn new(display_duration: Duration) -> Self {
        Self {
            display_duration,
            notifications: Vec::new(),
        }
    }

    pub fn display_duration(&self) -> Duration {
        self.display_duration
    }

    /// Enqueue a toast; it is visible immediately
    pub fn notify(&mut self, message: impl Into<String>, severity: Severity) -> Uuid {
        self.notify_at(message, severity, Instant::now())
    }

    pub fn notify_at(
        &mut self,
        message: impl Into<String>,
        severity: Severity,
        now: Instant,
    ) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            message: message.into(),
            severity,
            created_at: Utc::now(),
            shown_at: now,
        };
        tracing::debug!(
            "notification {} ({:?}): {}",
            notification.id,
            severity,
            notification.message
        );
        let id = notification.id;
        self.notifications.push(notification);
        id
    }

    /// Remove a toast before it expires. Returns false if it was already gone
    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        self.notifications.len() != before
    }

    /// Dismiss the most recent toast
    pub fn dismiss_latest(&mut self) -> bool {
        self.notifications.pop().is_some()
    }

    /// Drop every toast whose display duration has elapsed at `now`
    pub fn expire(&mut self, now: Instant) {
        let duration = self.display_duration;
        self.notifications
            .retain(|n| now.saturating_duration_since(n.shown_at) < duration);
    }

    /// Visible toasts, oldest first
    pub fn active(&self) -> &[Notification] {
        &self.notifications
    }

    pub fn count(&self, severity: Severity) -> usize {
        self.notifications
            .iter()
            .filter(|n| n.severity == severity)
            .count()
    }

    pub fn latest(&self) -> Option<&Notification> {
        self.notifications.last()
    }

    pub fn is_empty(&self) -> bool {
        self.notifications.is_empty()
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DURATION)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notify_is_visible_immediately() {
        let mut center = NotificationCenter::default();
        let id = center.notify("Hello", Severity::Info);
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.active()[0].id, id);
        assert_eq!(center.active()[0].message, "Hello");
        assert_eq!(center.active()[0].severity, Severity::Info);
    }

    #[test]
    fn test_expires_after_display_duration() {
        let mut center = NotificationCenter::default();
        let start = Instant::now();
        center.notify_at("first", Severity::Info, start);
        center.notify_at("second", Severity::Success, start + Duration::from_millis(2000));

        center.expire(start + Duration::from_millis(4999));
        assert_eq!(center.active().len(), 2);

        center.expire(start + Duration::from_millis(5000));
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.active()[0].message, "second");

        center.expire(start + Duration::from_millis(7000));
        assert!(center.is_empty());
    }

    #[test]
    fn test_custom_duration() {
        let mut center = NotificationCenter::new(Duration::from_millis(100));
        let start = Instant::now();
        center.notify_at("short", Severity::Warning, start);
        center.expire(start + Duration::from_millis(100));
        assert!(center.is_empty());
    }

    #[test]
    fn test_dismiss() {
        let mut center = NotificationCenter::default();
        let keep = center.notify("keep", Severity::Info);
        let drop = center.notify("drop", Severity::Danger);
        assert!(center.dismiss(drop));
        assert!(!center.dismiss(drop));
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.active()[0].id, keep);
    }

    #[test]
    fn test_dismiss_latest() {
        let mut center = NotificationCenter::default();
        assert!(!center.dismiss_latest());
        center.notify("a", Severity::Info);
        center.notify("b", Severity::Info);
        assert!(center.dismiss_latest());
        assert_eq!(center.latest().map(|n| n.message.as_str()), Some("a"));
    }

    #[test]
    fn test_no_cap_on_stacking() {
        let mut center = NotificationCenter::default();
        for i in 0..50 {
            center.notify(format!("toast {i}"), Severity::Info);
        }
        assert_eq!(center.active().len(), 50);
    }

    #[test]
    fn test_count_by_severity() {
        let mut center = NotificationCenter::default();
        center.notify("a", Severity::Warning);
        center.notify("b", Severity::Warning);
        center.notify("c", Severity::Success);
        assert_eq!(center.count(Severity::Warning), 2);
        assert_eq!(center.count(Severity::Danger), 0);
    }

    #[test]
    fn test_slide_offset_settles_to_zero() {
        let mut center = NotificationCenter::default();
        let start = Instant::now();
        center.notify_at("slide", Severity::Info, start);
        let toast = &center.active()[0];
        assert_eq!(toast.slide_offset(start, 40), 40);
        let mid = toast.slide_offset(start + Duration::from_millis(100), 40);
        assert!(mid < 40);
        assert_eq!(toast.slide_offset(start + Duration::from_millis(250), 40), 0);
    }
}
