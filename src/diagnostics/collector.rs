// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for queue events.
//!
//! Stores attach a [`DiagnosticsHandle`] and report every transition through
//! a bounded channel; the collector drains it into a circular buffer.

use std::time::Instant;

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};
use serde::Serialize;
use tracing::trace;

use super::{BufferCapacity, CircularBuffer, QueueEvent, QueueEventKind, SerializableEvent};
use crate::config::DIAGNOSTICS_CHANNEL_CAPACITY;
use crate::error::Result;

/// Handle for sending queue events to the collector.
///
/// Cheap to clone. Sending never blocks: when the channel is full the
/// event is dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<QueueEvent>,
}

impl DiagnosticsHandle {
    /// Records an event, dropping it if the channel is full.
    pub fn log(&self, kind: QueueEventKind) {
        if let Err(err) = self.try_log(kind) {
            trace!(reason = %err, "Diagnostics event dropped");
        }
    }

    /// Records an event, reporting a full or disconnected channel.
    pub fn try_log(&self, kind: QueueEventKind) -> std::result::Result<(), TrySendError<QueueEvent>> {
        self.event_tx.try_send(QueueEvent::new(kind))
    }
}

#[derive(Serialize)]
struct EventLog<'a> {
    capacity: usize,
    events: &'a [SerializableEvent],
}

/// Collects queue events into a bounded history.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<QueueEvent>,
    event_rx: Receiver<QueueEvent>,
    event_tx: Sender<QueueEvent>,
    started_at: Instant,
}

impl DiagnosticsCollector {
    /// Creates a collector that keeps at most `capacity` events.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DIAGNOSTICS_CHANNEL_CAPACITY);

        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            started_at: Instant::now(),
        }
    }

    /// Creates a handle for sending events to this collector.
    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Moves every pending event from the channel into the buffer.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates over collected events, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &QueueEvent> {
        self.buffer.iter()
    }

    /// Iterates over the events concerning one notification.
    pub fn events_for(
        &self,
        id: crate::notifications::NotificationId,
    ) -> impl Iterator<Item = &QueueEventKind> {
        self.buffer
            .iter()
            .map(|event| &event.kind)
            .filter(move |kind| kind.notification_id() == Some(id))
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Serializes the collected events as pretty JSON.
    ///
    /// Pending channel events are not included; call
    /// [`process_pending`](Self::process_pending) first.
    pub fn export_json(&self) -> Result<String> {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::from_event(event, self.started_at))
            .collect();

        let log = EventLog {
            capacity: self.buffer.capacity(),
            events: &events,
        };
        Ok(serde_json::to_string_pretty(&log)?)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::NotificationId;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let id = NotificationId::new();

        handle.log(QueueEventKind::Enqueued { id });
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 1);
    }

    #[test]
    fn buffer_keeps_most_recent_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(16));
        let handle = collector.handle();

        for count in 0..20 {
            handle.log(QueueEventKind::Cleared { count });
        }
        collector.process_pending();

        assert_eq!(collector.len(), 16);
        let first = collector.iter().next().map(|event| event.kind.clone());
        assert_eq!(first, Some(QueueEventKind::Cleared { count: 4 }));
    }

    #[test]
    fn full_channel_reports_error_on_try_log() {
        let collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for count in 0..DIAGNOSTICS_CHANNEL_CAPACITY {
            handle.log(QueueEventKind::Cleared { count });
        }

        assert!(handle.try_log(QueueEventKind::Cleared { count: 0 }).is_err());
    }

    #[test]
    fn events_for_filters_by_notification() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        let a = NotificationId::new();
        let b = NotificationId::new();

        handle.log(QueueEventKind::Enqueued { id: a });
        handle.log(QueueEventKind::Enqueued { id: b });
        handle.log(QueueEventKind::Dismissed { id: a });
        collector.process_pending();

        let kinds: Vec<_> = collector.events_for(a).cloned().collect();
        assert_eq!(
            kinds,
            vec![
                QueueEventKind::Enqueued { id: a },
                QueueEventKind::Dismissed { id: a }
            ]
        );
    }

    #[test]
    fn export_json_lists_events() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();
        handle.log(QueueEventKind::Cleared { count: 3 });
        collector.process_pending();

        let json = collector.export_json().expect("export should succeed");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

        assert_eq!(value["capacity"], collector.capacity());
        assert_eq!(value["events"][0]["type"], "cleared");
        assert_eq!(value["events"][0]["count"], 3);
    }
}
