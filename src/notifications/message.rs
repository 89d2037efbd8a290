// SPDX-License-Identifier: MPL-2.0
//! Messages the rendering layer sends back to the store.

use super::notification::NotificationId;

/// Messages for notification state changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A toast's own close affordance changed its visibility.
    ///
    /// Only `visible: false` has an effect; a dismissed toast never reopens.
    VisibilityChanged { id: NotificationId, visible: bool },
    /// Dismiss one notification, or all of them with `None`.
    Dismiss(Option<NotificationId>),
    /// The action button of a toast was pressed.
    ActionTriggered { id: NotificationId, key: String },
    /// Fire every removal timer that is due.
    Tick,
}
