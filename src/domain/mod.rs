// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value types with ZERO external dependencies.
//!
//! # Modules
//!
//! - [`diagnostics`]: Diagnostics types ([`BufferCapacity`](diagnostics::BufferCapacity))
//! - [`queue`]: Queue constants ([`VisibleLimit`](queue::VisibleLimit),
//!   [`RemovalDelay`](queue::RemovalDelay))

pub mod diagnostics;
pub mod queue;
