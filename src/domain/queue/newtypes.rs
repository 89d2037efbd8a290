// SPDX-License-Identifier: MPL-2.0
//! Notification queue newtypes.
//!
//! This module provides type-safe wrappers for the two queue constants,
//! ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Visible Limit Bounds
// =============================================================================

/// Visible limit bounds (1 to 100 notifications).
pub mod visible_limit_bounds {
    /// Minimum number of tracked notifications.
    pub const MIN: usize = 1;
    /// Maximum number of tracked notifications.
    pub const MAX: usize = 100;
    /// Default number of tracked notifications (single-toast UI).
    pub const DEFAULT: usize = 1;
}

// =============================================================================
// VisibleLimit
// =============================================================================

/// Maximum number of notifications the queue keeps at once.
///
/// Inserting past this bound drops the oldest entries. The value is
/// always within 1–100, so a queue can never be configured to show nothing.
///
/// # Example
///
/// ```
/// use relief_toast::domain::queue::VisibleLimit;
///
/// assert_eq!(VisibleLimit::new(3).value(), 3);
/// assert_eq!(VisibleLimit::new(0).value(), 1); // Clamped to min
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleLimit(usize);

impl VisibleLimit {
    /// Creates a new visible limit, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(visible_limit_bounds::MIN, visible_limit_bounds::MAX))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this is the minimum value.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= visible_limit_bounds::MIN
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= visible_limit_bounds::MAX
    }
}

impl Default for VisibleLimit {
    fn default() -> Self {
        Self(visible_limit_bounds::DEFAULT)
    }
}

// =============================================================================
// Removal Delay Bounds
// =============================================================================

/// Removal delay bounds in milliseconds (0 to 24 hours).
pub mod removal_delay_bounds {
    /// Minimum delay (remove on the next tick).
    pub const MIN_MS: u64 = 0;
    /// Maximum delay (one day).
    pub const MAX_MS: u64 = 86_400_000;
    /// Default delay; long enough that dismissed toasts effectively linger.
    pub const DEFAULT_MS: u64 = 1_000_000;
}

// =============================================================================
// RemovalDelay
// =============================================================================

/// Delay between a dismissal and the hard removal of a notification.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0 ms – 24 h).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovalDelay(u64);

impl RemovalDelay {
    /// Creates a new removal delay from milliseconds, clamping to valid range.
    #[must_use]
    pub fn from_millis(value: u64) -> Self {
        Self(value.clamp(removal_delay_bounds::MIN_MS, removal_delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }

    /// Returns true if dismissed entries are removed without waiting.
    #[must_use]
    pub fn is_immediate(self) -> bool {
        self.0 == 0
    }
}

impl Default for RemovalDelay {
    fn default() -> Self {
        Self(removal_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
