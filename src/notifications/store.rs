// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management.
//!
//! The `Store` owns the tracked notifications, their removal timers and the
//! observer list. Every mutation runs the reducer to completion, arms timers
//! for newly dismissed entries and then broadcasts the full snapshot to each
//! observer, in subscription order.
//!
//! The store is single-threaded (`Rc`/`RefCell`). No borrow is held while
//! observers run, so an observer may call back into the store. Each
//! observer is handed the state as of its own call, and an observer
//! unsubscribed mid-broadcast is skipped.

use super::handle::ToastHandle;
use super::message::Message;
use super::notification::{Notification, NotificationId, Toast, ToastPatch};
use super::reducer::{Action, State, Transition};
use super::timers::RemovalTimers;
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, QueueEventKind};
use crate::domain::queue::{RemovalDelay, VisibleLimit};
use std::cell::RefCell;
use std::fmt;
use std::rc::{Rc, Weak};
use tokio::sync::Notify;
use tokio::time::Instant;
use tracing::{debug, trace};

type Observer = Rc<dyn Fn(&[Notification])>;
type ActionListener = Rc<dyn Fn(NotificationId, &str)>;

/// Validated store settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StoreConfig {
    pub max_visible: VisibleLimit,
    pub removal_delay: RemovalDelay,
}

impl StoreConfig {
    #[must_use]
    pub fn new(max_visible: VisibleLimit, removal_delay: RemovalDelay) -> Self {
        Self {
            max_visible,
            removal_delay,
        }
    }

    /// Builds settings from a loaded [`Config`], clamping out-of-range values.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.visible_limit(), config.removal_delay())
    }
}

#[derive(Clone, Copy)]
enum ListenerKind {
    State,
    Action,
}

struct Inner {
    config: StoreConfig,
    state: State,
    timers: RemovalTimers,
    observers: Vec<(u64, Observer)>,
    action_listeners: Vec<(u64, ActionListener)>,
    next_listener_id: u64,
    /// Bumped on every dispatch; tells a broadcast its snapshot went stale.
    revision: u64,
    /// Wakes [`Store::run`] when a new timer is armed.
    wake: Rc<Notify>,
    diagnostics: Option<DiagnosticsHandle>,
}

impl Inner {
    fn log(&self, kind: QueueEventKind) {
        if let Some(handle) = &self.diagnostics {
            handle.log(kind);
        }
    }

    fn is_registered(&self, kind: ListenerKind, id: u64) -> bool {
        match kind {
            ListenerKind::State => self.observers.iter().any(|(other, _)| *other == id),
            ListenerKind::Action => self.action_listeners.iter().any(|(other, _)| *other == id),
        }
    }

    fn next_listener_id(&mut self) -> u64 {
        let id = self.next_listener_id;
        self.next_listener_id += 1;
        id
    }

    /// Turns a transition into timers, logs and diagnostics.
    fn apply_effects(&mut self, transition: &Transition) {
        if let Some(id) = transition.added {
            debug!(id = %id, "Notification enqueued");
            self.log(QueueEventKind::Enqueued { id });
        }
        for &id in &transition.evicted {
            debug!(id = %id, "Notification evicted by visible limit");
            self.log(QueueEventKind::Evicted { id });
        }
        if let Some(id) = transition.updated {
            self.log(QueueEventKind::Updated { id });
        }

        let delay = self.config.removal_delay;
        let now = Instant::now();
        for &id in &transition.hidden {
            debug!(id = %id, "Notification dismissed");
            self.log(QueueEventKind::Dismissed { id });
            if self.timers.arm(id, now + delay.as_duration()) {
                if delay.is_immediate() {
                    debug!(id = %id, "Removal due on next tick");
                } else {
                    debug!(id = %id, delay_ms = delay.as_millis(), "Removal timer armed");
                }
                self.log(QueueEventKind::TimerArmed {
                    id,
                    delay_ms: delay.as_millis(),
                });
                self.wake.notify_one();
            }
        }

        for &id in &transition.removed {
            debug!(id = %id, "Notification removed");
            self.log(QueueEventKind::Removed { id });
            self.timers.disarm(id);
        }
    }
}

/// Shared, single-threaded notification store.
///
/// Cloning yields another handle to the same store.
#[derive(Clone)]
pub struct Store {
    inner: Rc<RefCell<Inner>>,
}

impl Store {
    /// Creates an empty store.
    #[must_use]
    pub fn new(config: StoreConfig) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                config,
                state: State::default(),
                timers: RemovalTimers::default(),
                observers: Vec::new(),
                action_listeners: Vec::new(),
                next_listener_id: 0,
                revision: 0,
                wake: Rc::new(Notify::new()),
                diagnostics: None,
            })),
        }
    }

    /// Creates an empty store from a loaded [`Config`].
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        Self::new(StoreConfig::from_config(config))
    }

    /// Sets the diagnostics handle that receives every transition.
    pub fn set_diagnostics(&self, handle: DiagnosticsHandle) {
        self.inner.borrow_mut().diagnostics = Some(handle);
    }

    #[must_use]
    pub fn config(&self) -> StoreConfig {
        self.inner.borrow().config
    }

    /// Shows a new notification and returns a handle to control it.
    ///
    /// The notification goes to the front; if that exceeds the visible
    /// limit, the oldest entries are dropped without any notice.
    pub fn enqueue(&self, toast: Toast) -> ToastHandle {
        let notification = Notification::from_toast(toast);
        let id = notification.id();
        self.dispatch(Action::Add(notification));
        ToastHandle::new(id, self.clone())
    }

    /// Dismisses one notification, or every visible one with `None`.
    ///
    /// Dismissed notifications stay tracked with `is_visible() == false`
    /// until their removal timer fires. Unknown ids are ignored.
    pub fn dismiss(&self, id: Option<NotificationId>) {
        self.dispatch(Action::Dismiss(id));
    }

    /// Shallow-merges `patch` into a notification. Unknown ids are ignored.
    pub fn update(&self, id: NotificationId, patch: ToastPatch) {
        self.dispatch(Action::Update { id, patch });
    }

    /// Deletes every notification immediately and disarms their removal
    /// timers.
    pub fn clear(&self) {
        let count = self.len();
        self.dispatch(Action::Remove(None));
        self.inner.borrow().log(QueueEventKind::Cleared { count });
    }

    /// Registers an observer called with the full snapshot after every
    /// mutation. The current state is not replayed; use
    /// [`snapshot`](Self::snapshot) to initialize.
    #[must_use = "dropping the subscription leaves no way to unsubscribe"]
    pub fn subscribe<F>(&self, observer: F) -> Subscription
    where
        F: Fn(&[Notification]) + 'static,
    {
        let observer: Observer = Rc::new(observer);
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id();
        inner.observers.push((id, observer));
        self.subscription(id, ListenerKind::State)
    }

    /// Registers a listener for toast action presses.
    #[must_use = "dropping the subscription leaves no way to unsubscribe"]
    pub fn on_action<F>(&self, listener: F) -> Subscription
    where
        F: Fn(NotificationId, &str) + 'static,
    {
        let listener: ActionListener = Rc::new(listener);
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_listener_id();
        inner.action_listeners.push((id, listener));
        self.subscription(id, ListenerKind::Action)
    }

    fn subscription(&self, id: u64, kind: ListenerKind) -> Subscription {
        Subscription {
            id,
            kind,
            store: Rc::downgrade(&self.inner),
        }
    }

    /// Returns the tracked notifications, newest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Notification> {
        self.inner.borrow().state.to_vec()
    }

    #[must_use]
    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.inner.borrow().state.get(id).cloned()
    }

    /// Number of tracked notifications, visible or closing.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.borrow().state.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of visible (not dismissed) notifications.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.inner
            .borrow()
            .state
            .iter()
            .filter(|n| n.is_visible())
            .count()
    }

    /// When the removal timer for `id` fires, if one is armed.
    #[must_use]
    pub fn removal_deadline(&self, id: NotificationId) -> Option<Instant> {
        self.inner.borrow().timers.deadline(id)
    }

    /// Number of armed removal timers.
    #[must_use]
    pub fn pending_removals(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    /// Handles a message from the rendering layer.
    pub fn handle_message(&self, message: Message) {
        match message {
            Message::VisibilityChanged { id, visible } => {
                if !visible {
                    self.dismiss(Some(id));
                }
            }
            Message::Dismiss(id) => self.dismiss(id),
            Message::ActionTriggered { id, key } => self.trigger_action(id, &key),
            Message::Tick => {
                self.tick();
            }
        }
    }

    fn trigger_action(&self, id: NotificationId, key: &str) {
        let listeners: Vec<(u64, ActionListener)> = {
            let inner = self.inner.borrow();
            if inner.state.get(id).is_none() {
                return;
            }
            inner.log(QueueEventKind::ActionTriggered {
                id,
                key: key.to_string(),
            });
            inner
                .action_listeners
                .iter()
                .map(|(listener_id, listener)| (*listener_id, Rc::clone(listener)))
                .collect()
        };

        debug!(id = %id, key, "Toast action triggered");
        for (listener_id, listener) in &listeners {
            if !self
                .inner
                .borrow()
                .is_registered(ListenerKind::Action, *listener_id)
            {
                continue;
            }
            listener(id, key);
        }
        self.dismiss(Some(id));
    }

    /// Fires every removal timer due now. Returns how many fired.
    pub fn tick(&self) -> usize {
        self.tick_at(Instant::now())
    }

    /// Fires every removal timer due at `now`, one broadcast per timer.
    pub fn tick_at(&self, now: Instant) -> usize {
        let due = self.inner.borrow_mut().timers.take_due(now);
        for &id in &due {
            self.dispatch(Action::Remove(Some(id)));
        }
        due.len()
    }

    /// Drives removal timers on the current tokio runtime.
    ///
    /// Sleeps until the earliest deadline and wakes early whenever a timer
    /// is armed. Never completes; spawn it with
    /// [`tokio::task::spawn_local`] and abort it when done.
    pub async fn run(&self) {
        loop {
            let (next, wake) = {
                let inner = self.inner.borrow();
                (inner.timers.next_deadline(), Rc::clone(&inner.wake))
            };

            match next {
                Some(deadline) => {
                    tokio::select! {
                        () = tokio::time::sleep_until(deadline) => {
                            self.tick();
                        }
                        () = wake.notified() => {}
                    }
                }
                None => wake.notified().await,
            }
        }
    }

    fn dispatch(&self, action: Action) {
        let observers: Vec<(u64, Observer)> = {
            let mut inner = self.inner.borrow_mut();
            let limit = inner.config.max_visible;
            let transition = inner.state.reduce(action, limit);
            inner.apply_effects(&transition);
            inner.revision = inner.revision.wrapping_add(1);

            trace!(
                observers = inner.observers.len(),
                tracked = inner.state.len(),
                "Broadcasting notification state"
            );
            inner
                .observers
                .iter()
                .map(|(id, observer)| (*id, Rc::clone(observer)))
                .collect()
        };

        // An observer may dispatch again; later observers then get the newer
        // state, not the one this broadcast started with.
        let mut snapshot: Option<(u64, Vec<Notification>)> = None;
        for (id, observer) in &observers {
            {
                let inner = self.inner.borrow();
                if !inner.is_registered(ListenerKind::State, *id) {
                    continue;
                }
                if snapshot
                    .as_ref()
                    .is_none_or(|(revision, _)| *revision != inner.revision)
                {
                    snapshot = Some((inner.revision, inner.state.to_vec()));
                }
            }
            if let Some((_, state)) = &snapshot {
                observer(state);
            }
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl fmt::Debug for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Store")
            .field("config", &inner.config)
            .field("tracked", &inner.state.len())
            .field("pending_removals", &inner.timers.len())
            .field("observers", &inner.observers.len())
            .finish()
    }
}

/// Registration returned by [`Store::subscribe`] and [`Store::on_action`].
///
/// Dropping it does not unsubscribe; call [`unsubscribe`](Self::unsubscribe).
pub struct Subscription {
    id: u64,
    kind: ListenerKind,
    store: Weak<RefCell<Inner>>,
}

impl Subscription {
    /// Removes this listener. Other listeners are unaffected.
    pub fn unsubscribe(self) {
        let Some(inner) = self.store.upgrade() else {
            return;
        };
        let mut inner = inner.borrow_mut();
        match self.kind {
            ListenerKind::State => inner.observers.retain(|(id, _)| *id != self.id),
            ListenerKind::Action => inner.action_listeners.retain(|(id, _)| *id != self.id),
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}
