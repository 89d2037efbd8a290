// SPDX-License-Identifier: MPL-2.0
//! Removal timers keyed by notification id.
//!
//! A timer is just a deadline in a map. Arming is idempotent because an id
//! that already has a deadline is left alone. Deadlines use tokio's clock so
//! a paused test runtime controls them.

use super::notification::NotificationId;
use std::collections::HashMap;
use tokio::time::Instant;

#[derive(Debug, Default)]
pub(crate) struct RemovalTimers {
    deadlines: HashMap<NotificationId, Instant>,
}

impl RemovalTimers {
    /// Arms a timer for `id` unless one is already pending.
    ///
    /// Returns `true` if a new timer was armed.
    pub fn arm(&mut self, id: NotificationId, deadline: Instant) -> bool {
        if self.deadlines.contains_key(&id) {
            return false;
        }
        self.deadlines.insert(id, deadline);
        true
    }

    /// Drops the timer for `id`, if any.
    pub fn disarm(&mut self, id: NotificationId) -> bool {
        self.deadlines.remove(&id).is_some()
    }

    pub fn deadline(&self, id: NotificationId) -> Option<Instant> {
        self.deadlines.get(&id).copied()
    }

    /// Earliest pending deadline, if any.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.deadlines.values().min().copied()
    }

    /// Disarms and returns every timer due at `now`, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut due: Vec<(Instant, NotificationId)> = self
            .deadlines
            .iter()
            .filter(|(_, deadline)| **deadline <= now)
            .map(|(id, deadline)| (*deadline, *id))
            .collect();
        due.sort_unstable();

        for (_, id) in &due {
            self.deadlines.remove(id);
        }
        due.into_iter().map(|(_, id)| id).collect()
    }

    pub fn len(&self) -> usize {
        self.deadlines.len()
    }
}
