// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public `Index` API and generic implementation over a pluggable backend.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::backends::flatvec::FlatVec;
use crate::backends::grid::GridF64;
use crate::types::Aabb2D;

/// A point returned by a query: its position and the payload it was built with.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Entry<T, P> {
    /// X coordinate the point was indexed at.
    pub x: T,
    /// Y coordinate the point was indexed at.
    pub y: T,
    /// Caller payload, typically a slot into the caller's own storage.
    pub payload: P,
}

/// A build-once point index parameterized by a spatial backend.
///
/// The index has no incremental updates: [`IndexGeneric::build`] replaces
/// everything, and a half-built state is never observable.
#[derive(Debug)]
pub struct IndexGeneric<T: Copy + PartialOrd + Debug, P: Copy + Debug, B: Backend<T>> {
    entries: Vec<Entry<T, P>>,
    backend: B,
}

impl<T, P, B> IndexGeneric<T, P, B>
where
    T: Copy + PartialOrd + Debug,
    P: Copy + Debug,
    B: Backend<T> + Default,
{
    /// Create an empty index using the backend's default constructor.
    pub fn new() -> Self {
        Self::with_backend(B::default())
    }
}

impl<T, P, B> IndexGeneric<T, P, B>
where
    T: Copy + PartialOrd + Debug,
    P: Copy + Debug,
    B: Backend<T>,
{
    /// Create an empty index over an explicitly configured backend.
    pub fn with_backend(backend: B) -> Self {
        Self {
            entries: Vec::new(),
            backend,
        }
    }

    /// Replace the index contents with `entries`, in one pass.
    pub fn build<I>(&mut self, entries: I)
    where
        I: IntoIterator<Item = (T, T, P)>,
    {
        self.entries.clear();
        self.entries
            .extend(entries.into_iter().map(|(x, y, payload)| Entry { x, y, payload }));
        let positions: Vec<(T, T)> = self.entries.iter().map(|e| (e.x, e.y)).collect();
        self.backend.build(&positions);
    }

    /// Drop all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.backend.clear();
    }

    /// Number of entries queries can return.
    pub fn len(&self) -> usize {
        self.backend.len()
    }

    /// True if no entry can be returned by a query.
    pub fn is_empty(&self) -> bool {
        self.backend.is_empty()
    }

    /// Access the backend, e.g. for statistics.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Candidate entries for the rectangle.
    ///
    /// Depending on the backend this may include entries outside `rect`; filter
    /// with exact geometry before using the result.
    pub fn query_rect(&self, rect: Aabb2D<T>) -> impl Iterator<Item = Entry<T, P>> + '_ {
        self.backend
            .query_rect(rect)
            .filter_map(|slot| self.entries.get(slot).copied())
    }
}

/// Default index using a flat vector backend.
pub type Index<T, P> = IndexGeneric<T, P, FlatVec<T>>;

/// Index using the uniform grid backend over f64 coordinates.
pub type GridIndex<P> = IndexGeneric<f64, P, GridF64>;

impl<T: Copy + PartialOrd + Debug, P: Copy + Debug> Default for Index<T, P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Copy + Debug> Index<f64, P> {
    /// Create a grid-backed index with square cells anchored at the origin.
    pub fn with_uniform_grid(cell: f64) -> GridIndex<P> {
        IndexGeneric::with_backend(GridF64::with_cell_size(cell))
    }
}
