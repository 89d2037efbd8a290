// SPDX-License-Identifier: MPL-2.0
//! `relief_toast` is the toast notification queue of the relief wellness
//! dashboard.
//!
//! It keeps a bounded, newest-first set of transient notifications,
//! removes dismissed ones after a configurable delay and broadcasts every
//! change to the rendering layer.

pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod notifications;

pub use notifications::{Notification, NotificationId, Store, StoreConfig, Toast, ToastHandle};
