// SPDX-License-Identifier: MPL-2.0
//! Notification queue domain types.
//!
//! This module provides pure domain types for the queue:
//! - [`VisibleLimit`]: How many notifications are tracked at once
//! - [`RemovalDelay`]: How long a dismissed notification lingers

mod newtypes;

pub use newtypes::{removal_delay_bounds, visible_limit_bounds, RemovalDelay, VisibleLimit};
