// SPDX-License-Identifier: MPL-2.0
//! Queue event types for diagnostics.
//!
//! One event is recorded per observable change in a store, so an exported
//! log shows the full lifecycle of each notification.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::notifications::NotificationId;

/// A queue event with the moment it happened.
#[derive(Debug, Clone)]
pub struct QueueEvent {
    /// When the event occurred (monotonic clock)
    pub timestamp: Instant,
    /// What happened
    pub kind: QueueEventKind,
}

impl QueueEvent {
    /// Creates a new event with the current timestamp.
    #[must_use]
    pub fn new(kind: QueueEventKind) -> Self {
        Self::with_timestamp(kind, Instant::now())
    }

    /// Creates a new event with a specific timestamp.
    #[must_use]
    pub fn with_timestamp(kind: QueueEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QueueEventKind {
    /// A notification was created and put at the front.
    Enqueued { id: NotificationId },
    /// A notification was dropped by the visible limit.
    Evicted { id: NotificationId },
    /// A patch was merged into a notification.
    Updated { id: NotificationId },
    /// A notification went from visible to closing.
    Dismissed { id: NotificationId },
    /// A removal timer was armed.
    TimerArmed { id: NotificationId, delay_ms: u64 },
    /// A notification was deleted.
    Removed { id: NotificationId },
    /// Every notification was deleted at once.
    Cleared { count: usize },
    /// The action button of a notification was pressed.
    ActionTriggered { id: NotificationId, key: String },
}

impl QueueEventKind {
    /// Returns the notification this event is about, if any.
    #[must_use]
    pub fn notification_id(&self) -> Option<NotificationId> {
        match self {
            Self::Enqueued { id }
            | Self::Evicted { id }
            | Self::Updated { id }
            | Self::Dismissed { id }
            | Self::TimerArmed { id, .. }
            | Self::Removed { id }
            | Self::ActionTriggered { id, .. } => Some(*id),
            Self::Cleared { .. } => None,
        }
    }
}

/// Export form of a [`QueueEvent`], timed relative to collection start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableEvent {
    pub offset_ms: u64,
    #[serde(flatten)]
    pub kind: QueueEventKind,
}

impl SerializableEvent {
    /// Converts an event, saturating to zero if it predates `started_at`.
    #[must_use]
    pub fn from_event(event: &QueueEvent, started_at: Instant) -> Self {
        let offset = event.timestamp.saturating_duration_since(started_at);
        Self {
            offset_ms: u64::try_from(offset.as_millis()).unwrap_or(u64::MAX),
            kind: event.kind.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn kind_serializes_with_snake_case_tag() {
        let id = NotificationId::new();
        let json = serde_json::to_value(QueueEventKind::TimerArmed { id, delay_ms: 10 })
            .expect("serialize");

        assert_eq!(json["type"], "timer_armed");
        assert_eq!(json["delay_ms"], 10);
        assert_eq!(json["id"], id.value());
    }

    #[test]
    fn cleared_has_no_notification_id() {
        assert!(QueueEventKind::Cleared { count: 2 }.notification_id().is_none());
        let id = NotificationId::new();
        assert_eq!(QueueEventKind::Removed { id }.notification_id(), Some(id));
    }

    #[test]
    fn serializable_event_measures_offset() {
        let start = Instant::now();
        let event = QueueEvent::with_timestamp(
            QueueEventKind::Cleared { count: 0 },
            start + Duration::from_millis(250),
        );

        let exported = SerializableEvent::from_event(&event, start);
        assert_eq!(exported.offset_ms, 250);
    }

    #[test]
    fn event_before_start_saturates_to_zero() {
        let event = QueueEvent::new(QueueEventKind::Cleared { count: 0 });
        let later = event.timestamp + Duration::from_secs(1);

        assert_eq!(SerializableEvent::from_event(&event, later).offset_ms, 0);
    }
}
