// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend trait for spatial indexing implementations.

use alloc::boxed::Box;

use crate::types::Aabb2D;
use core::fmt::Debug;

/// Spatial backend abstraction used by `IndexGeneric`.
///
/// A backend indexes exactly one set of point positions at a time. Slot `i`
/// always refers to `positions[i]` of the most recent [`Backend::build`].
pub trait Backend<T: Copy + PartialOrd + Debug> {
    /// Replace all contents with the given positions.
    fn build(&mut self, positions: &[(T, T)]);

    /// Clear all spatial structures.
    fn clear(&mut self);

    /// Number of slots that queries can return.
    fn len(&self) -> usize;

    /// True if no slot can be returned by a query.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Query candidate slots for the rectangle.
    ///
    /// Backends may over-report (return slots outside `rect`) but must never
    /// omit a slot whose position lies inside it.
    fn query_rect<'a>(&'a self, rect: Aabb2D<T>) -> Box<dyn Iterator<Item = usize> + 'a>;
}
