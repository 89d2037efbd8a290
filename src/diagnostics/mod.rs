// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for notification stores.
//!
//! A store with an attached [`DiagnosticsHandle`] reports each transition
//! (enqueue, eviction, dismissal, timer arming, removal) to a
//! [`DiagnosticsCollector`], which keeps a bounded history in a
//! [`CircularBuffer`] and can export it as JSON.

mod buffer;
mod collector;
mod events;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{QueueEvent, QueueEventKind, SerializableEvent};
