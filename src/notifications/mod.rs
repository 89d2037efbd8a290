// SPDX-License-Identifier: MPL-2.0
//! Toast notification queue.
//!
//! A bounded, newest-first collection of transient notifications with
//! timed removal. Callers enqueue toasts and get a handle back; the
//! rendering layer subscribes to full-state broadcasts and reports user
//! interaction with [`Message`]s.
//!
//! # Components
//!
//! - `notification` - `Notification`, the `Toast` payload and `ToastPatch`
//! - `store` - `Store`, which owns state, removal timers and observers
//! - `handle` - `ToastHandle` returned by `Store::enqueue`
//! - `message` - `Message`s sent back by the rendering layer
//!
//! # Usage
//!
//! ```
//! use relief_toast::notifications::{Store, StoreConfig, Toast, ToastPatch};
//!
//! let store = Store::new(StoreConfig::default());
//! let _subscription = store.subscribe(|toasts| {
//!     // Re-render with `toasts`, newest first.
//!     let _ = toasts.len();
//! });
//!
//! let toast = store.enqueue(Toast::new().title("Mood logged successfully!"));
//! toast.update(ToastPatch::new().description("Intensity 5/10"));
//! toast.dismiss();
//! ```
//!
//! # Lifecycle
//!
//! `enqueue` (visible) → `dismiss` (closing, removal timer armed) →
//! timer fires (deleted). A dismissed notification is never shown again.

mod handle;
mod message;
mod notification;
mod reducer;
mod store;
mod timers;

pub use handle::ToastHandle;
pub use message::Message;
pub use notification::{Notification, NotificationId, Toast, ToastAction, ToastPatch, Variant};
pub use store::{Store, StoreConfig, Subscription};
