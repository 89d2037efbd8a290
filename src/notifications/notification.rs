// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! This module defines the `Notification` entity tracked by the store, the
//! caller-supplied `Toast` payload and the `ToastPatch` used for updates.

use super::message::Message;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Ids wrap at the largest integer a double can represent exactly.
const MAX_SAFE_ID: u64 = (1 << 53) - 1;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    ///
    /// Ids are process-wide: two stores never hand out the same id.
    pub fn new() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        let previous = COUNTER
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |count| {
                Some((count + 1) % MAX_SAFE_ID)
            })
            .unwrap_or_default();
        Self((previous + 1) % MAX_SAFE_ID)
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Visual treatment requested by the caller. Not interpreted by the queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    /// Neutral confirmation or information.
    #[default]
    Default,
    /// Something went wrong or needs attention.
    Destructive,
}

/// A button shown inside a toast.
///
/// Pressing it makes the rendering layer send
/// [`Message::ActionTriggered`] with this `key`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToastAction {
    pub label: String,
    pub key: String,
}

impl ToastAction {
    pub fn new(label: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            key: key.into(),
        }
    }
}

/// Display payload supplied by callers of [`Store::enqueue`](super::Store::enqueue).
///
/// It has no id and no visibility flag: both belong to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Toast {
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    action: Option<ToastAction>,
}

impl Toast {
    /// Creates an empty default-variant toast.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty destructive toast.
    #[must_use]
    pub fn destructive() -> Self {
        Self {
            variant: Variant::Destructive,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Partial payload for updates. Only the fields that are set overwrite.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastPatch {
    title: Option<String>,
    description: Option<String>,
    variant: Option<Variant>,
    action: Option<ToastAction>,
}

impl ToastPatch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    #[must_use]
    pub fn action(mut self, action: ToastAction) -> Self {
        self.action = Some(action);
        self
    }

    /// Returns true if applying this patch would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.variant.is_none()
            && self.action.is_none()
    }
}

/// A notification tracked by the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Unique identifier, stable for the notification's lifetime.
    id: NotificationId,
    title: Option<String>,
    description: Option<String>,
    variant: Variant,
    action: Option<ToastAction>,
    /// `true` until dismissal is requested; never set back afterwards.
    visible: bool,
}

impl Notification {
    /// Builds a visible notification from a caller payload with a fresh id.
    pub(crate) fn from_toast(toast: Toast) -> Self {
        Self {
            id: NotificationId::new(),
            title: toast.title,
            description: toast.description,
            variant: toast.variant,
            action: toast.action,
            visible: true,
        }
    }

    /// Returns the notification's unique ID.
    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    #[must_use]
    pub fn variant(&self) -> Variant {
        self.variant
    }

    #[must_use]
    pub fn action(&self) -> Option<&ToastAction> {
        self.action.as_ref()
    }

    /// Returns whether the notification is shown (not yet dismissed).
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Builds the message the rendering layer sends when this toast's own
    /// close affordance changes its visibility.
    #[must_use]
    pub fn on_visibility_change(&self, visible: bool) -> Message {
        Message::VisibilityChanged {
            id: self.id,
            visible,
        }
    }

    /// Shallow-merges the set fields of `patch`.
    pub(crate) fn apply(&mut self, patch: ToastPatch) {
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(description) = patch.description {
            self.description = Some(description);
        }
        if let Some(variant) = patch.variant {
            self.variant = variant;
        }
        if let Some(action) = patch.action {
            self.action = Some(action);
        }
    }

    /// Marks the notification as closing. Returns false if it already was.
    pub(crate) fn hide(&mut self) -> bool {
        std::mem::replace(&mut self.visible, false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::from_toast(Toast::new().title("test"));
        let n2 = Notification::from_toast(Toast::new().title("test"));
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn ids_increase_within_a_run() {
        let first = NotificationId::new();
        let second = NotificationId::new();
        assert!(second.value() > first.value());
        assert_ne!(first.value(), 0);
    }

    #[test]
    fn id_displays_as_decimal() {
        let id = NotificationId(42);
        assert_eq!(id.to_string(), "42");
    }

    #[test]
    fn new_notification_is_visible_with_payload() {
        let notification = Notification::from_toast(
            Toast::destructive()
                .title("Select an emotion")
                .description("Please select how you're feeling first."),
        );

        assert!(notification.is_visible());
        assert_eq!(notification.title(), Some("Select an emotion"));
        assert_eq!(
            notification.description(),
            Some("Please select how you're feeling first.")
        );
        assert_eq!(notification.variant(), Variant::Destructive);
        assert!(notification.action().is_none());
    }

    #[test]
    fn patch_only_touches_set_fields() {
        let mut notification =
            Notification::from_toast(Toast::new().title("Alert Created").description("sent"));
        notification.apply(ToastPatch::new().title("Alert Resolved"));

        assert_eq!(notification.title(), Some("Alert Resolved"));
        assert_eq!(notification.description(), Some("sent"));
        assert_eq!(notification.variant(), Variant::Default);
    }

    #[test]
    fn empty_patch_is_detected() {
        assert!(ToastPatch::new().is_empty());
        assert!(!ToastPatch::new().variant(Variant::Destructive).is_empty());
    }

    #[test]
    fn hide_reports_first_transition_only() {
        let mut notification = Notification::from_toast(Toast::new());
        assert!(notification.hide());
        assert!(!notification.hide());
        assert!(!notification.is_visible());
    }

    #[test]
    fn visibility_change_builds_message_for_own_id() {
        let notification = Notification::from_toast(Toast::new());
        assert_eq!(
            notification.on_visibility_change(false),
            Message::VisibilityChanged {
                id: notification.id(),
                visible: false,
            }
        );
    }
}
