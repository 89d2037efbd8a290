// SPDX-License-Identifier: MPL-2.0
//! Circular buffer for queue event storage.
//!
//! When full, pushing evicts the oldest entry, so a long-running store
//! keeps only its most recent history.

use std::collections::VecDeque;

pub use crate::domain::diagnostics::BufferCapacity;

/// A fixed-capacity ring buffer, oldest first.
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    data: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    /// Creates a new circular buffer with the specified capacity.
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self::with_raw_capacity(capacity.value())
    }

    /// Creates a buffer with an unchecked capacity (at least 1).
    ///
    /// Meant for tests that need a tiny buffer.
    #[must_use]
    pub fn with_raw_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            data: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Pushes an element, returning the evicted one if the buffer was full.
    pub fn push(&mut self, item: T) -> Option<T> {
        let evicted = if self.data.len() >= self.capacity {
            self.data.pop_front()
        } else {
            None
        };
        self.data.push_back(item);
        evicted
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.data.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_evicts_oldest_and_returns_it() {
        let mut buffer = CircularBuffer::with_raw_capacity(2);

        assert_eq!(buffer.push("enqueued"), None);
        assert_eq!(buffer.push("dismissed"), None);
        assert_eq!(buffer.push("removed"), Some("enqueued"));

        let items: Vec<_> = buffer.iter().copied().collect();
        assert_eq!(items, vec!["dismissed", "removed"]);
    }

    #[test]
    fn zero_raw_capacity_still_holds_one_item() {
        let mut buffer = CircularBuffer::with_raw_capacity(0);
        buffer.push(1);
        buffer.push(2);

        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.iter().copied().collect::<Vec<_>>(), vec![2]);
    }

    #[test]
    fn clear_keeps_capacity() {
        let mut buffer = CircularBuffer::new(BufferCapacity::new(32));
        buffer.push(1);
        buffer.clear();

        assert!(buffer.is_empty());
        assert_eq!(buffer.len(), 0);
        assert_eq!(buffer.capacity(), 32);
    }
}
