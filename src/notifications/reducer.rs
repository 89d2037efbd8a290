// SPDX-License-Identifier: MPL-2.0
//! Pure state transitions for the notification store.
//!
//! The reducer never touches timers or observers. It reports what changed
//! in a [`Transition`] and the store turns that into side effects.

use super::notification::{Notification, NotificationId, ToastPatch};
use crate::domain::queue::VisibleLimit;
use std::collections::VecDeque;

/// The four ways the tracked collection can change.
#[derive(Debug, Clone)]
pub(crate) enum Action {
    /// Insert at the front, then truncate to the visible limit.
    Add(Notification),
    /// Shallow-merge a patch into the matching entry.
    Update {
        id: NotificationId,
        patch: ToastPatch,
    },
    /// Hide one entry, or every visible entry with `None`.
    Dismiss(Option<NotificationId>),
    /// Delete one entry, or every entry with `None`.
    Remove(Option<NotificationId>),
}

/// What a single action did to the collection.
#[derive(Debug, Default, PartialEq, Eq)]
pub(crate) struct Transition {
    pub added: Option<NotificationId>,
    /// Oldest entries dropped by the visible limit.
    pub evicted: Vec<NotificationId>,
    pub updated: Option<NotificationId>,
    /// Entries that went from visible to closing; each needs a removal timer.
    pub hidden: Vec<NotificationId>,
    pub removed: Vec<NotificationId>,
}

/// Tracked notifications, newest first.
#[derive(Debug, Clone, Default)]
pub(crate) struct State {
    notifications: VecDeque<Notification>,
}

impl State {
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.notifications.iter()
    }

    pub fn len(&self) -> usize {
        self.notifications.len()
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.notifications.iter().find(|n| n.id() == id)
    }

    pub fn to_vec(&self) -> Vec<Notification> {
        self.notifications.iter().cloned().collect()
    }

    /// Applies `action` and reports the resulting transition.
    pub fn reduce(&mut self, action: Action, limit: VisibleLimit) -> Transition {
        let mut transition = Transition::default();

        match action {
            Action::Add(notification) => {
                transition.added = Some(notification.id());
                self.notifications.push_front(notification);
                while self.notifications.len() > limit.value() {
                    if let Some(dropped) = self.notifications.pop_back() {
                        transition.evicted.push(dropped.id());
                    }
                }
            }
            Action::Update { id, patch } => {
                if patch.is_empty() {
                    return transition;
                }
                if let Some(notification) = self.notifications.iter_mut().find(|n| n.id() == id) {
                    notification.apply(patch);
                    transition.updated = Some(id);
                }
            }
            Action::Dismiss(target) => {
                transition.hidden = self
                    .notifications
                    .iter_mut()
                    .filter(|n| target.is_none_or(|id| n.id() == id))
                    .filter_map(|n| n.hide().then(|| n.id()))
                    .collect();
            }
            Action::Remove(Some(id)) => {
                if let Some(pos) = self.notifications.iter().position(|n| n.id() == id) {
                    self.notifications.remove(pos);
                    transition.removed.push(id);
                }
            }
            Action::Remove(None) => {
                transition.removed = self.notifications.drain(..).map(|n| n.id()).collect();
            }
        }

        transition
    }
}
