// SPDX-License-Identifier: MPL-2.0
//! Control handle returned by [`Store::enqueue`].

use super::notification::{NotificationId, ToastPatch};
use super::store::Store;
use std::fmt;

/// Addresses one notification in the store that created it.
///
/// Every method is safe to call after the notification has been dismissed
/// or removed; it then does nothing.
#[derive(Clone)]
pub struct ToastHandle {
    id: NotificationId,
    store: Store,
}

impl ToastHandle {
    pub(crate) fn new(id: NotificationId, store: Store) -> Self {
        Self { id, store }
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    /// Dismisses this notification. Idempotent.
    pub fn dismiss(&self) {
        self.store.dismiss(Some(self.id));
    }

    /// Merges `patch` into this notification if it is still tracked.
    pub fn update(&self, patch: ToastPatch) {
        self.store.update(self.id, patch);
    }

    /// Returns whether the store still tracks this notification.
    #[must_use]
    pub fn is_tracked(&self) -> bool {
        self.store.get(self.id).is_some()
    }
}

impl fmt::Debug for ToastHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ToastHandle").field("id", &self.id).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notifications::{StoreConfig, Toast};

    #[test]
    fn handle_dismiss_is_idempotent() {
        let store = Store::new(StoreConfig::default());
        let handle = store.enqueue(Toast::new().title("Subscription Successful"));

        handle.dismiss();
        handle.dismiss();

        assert_eq!(store.pending_removals(), 1);
        assert!(handle.is_tracked());
    }

    #[test]
    fn handle_update_after_removal_is_noop() {
        let store = Store::new(StoreConfig::default());
        let handle = store.enqueue(Toast::new().title("first"));
        store.clear();

        handle.update(ToastPatch::new().title("late"));

        assert!(!handle.is_tracked());
        assert!(store.is_empty());
    }

    #[test]
    fn handle_update_changes_title() {
        let store = Store::new(StoreConfig::default());
        let handle = store.enqueue(Toast::new().title("Uploading"));

        handle.update(ToastPatch::new().title("Uploaded"));

        let notification = store.get(handle.id()).expect("still tracked");
        assert_eq!(notification.title(), Some("Uploaded"));
    }
}
