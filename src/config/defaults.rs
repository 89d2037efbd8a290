// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Queue**: Visible limit and removal delay
//! - **Diagnostics**: Event buffer capacity

use crate::domain::diagnostics::buffer_capacity_bounds;
use crate::domain::queue::{removal_delay_bounds, visible_limit_bounds};

// ==========================================================================
// Queue Defaults
// ==========================================================================

/// Default number of notifications tracked at once.
pub const DEFAULT_MAX_VISIBLE: usize = visible_limit_bounds::DEFAULT;

/// Minimum number of notifications tracked at once.
pub const MIN_MAX_VISIBLE: usize = visible_limit_bounds::MIN;

/// Maximum number of notifications tracked at once.
pub const MAX_MAX_VISIBLE: usize = visible_limit_bounds::MAX;

/// Default delay between dismissal and removal (in milliseconds).
pub const DEFAULT_REMOVAL_DELAY_MS: u64 = removal_delay_bounds::DEFAULT_MS;

/// Maximum delay between dismissal and removal (in milliseconds).
pub const MAX_REMOVAL_DELAY_MS: u64 = removal_delay_bounds::MAX_MS;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of queue events kept by the diagnostics collector.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::DEFAULT;

/// Minimum diagnostics buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MIN;

/// Maximum diagnostics buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = buffer_capacity_bounds::MAX;

/// Pending events the diagnostics channel holds before dropping new ones.
pub const DIAGNOSTICS_CHANNEL_CAPACITY: usize = 512;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_MAX_VISIBLE > 0);
    assert!(DEFAULT_MAX_VISIBLE >= MIN_MAX_VISIBLE);
    assert!(DEFAULT_MAX_VISIBLE <= MAX_MAX_VISIBLE);

    assert!(DEFAULT_REMOVAL_DELAY_MS <= MAX_REMOVAL_DELAY_MS);

    assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY > 0);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY >= MIN_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    assert!(DIAGNOSTICS_CHANNEL_CAPACITY > 0);
};
