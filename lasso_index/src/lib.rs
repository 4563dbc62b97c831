// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lasso Index: a build-once 2D point index for interactive selection.
//!
//! Lasso Index is the spatial layer of the selection engine.
//!
//! - Build an index over one snapshot of point positions, each carrying a payload.
//! - Query candidate points by rectangle.
//! - Rebuild from scratch whenever the snapshot changes; there are no partial updates.
//!
//! It is generic over the scalar type `T` and does not depend on any geometry crate.
//! Higher layers compute screen-space positions and exact containment; this crate only
//! narrows the search.
//!
//! Backends are pluggable via a simple trait so you can swap the spatial strategy without API churn.
//! The default backend is a flat vector (linear scan, exact).
//! The uniform grid backend buckets `f64` positions into square cells and answers
//! queries with whole cells, so its results are a candidate superset.
//!
//! # Example
//!
//! ```rust
//! use lasso_index::{Aabb2D, Index};
//!
//! let mut idx: Index<i64, u32> = Index::new();
//! idx.build([(0, 0, 1), (5, 5, 2), (100, 100, 3)]);
//!
//! let hits: Vec<_> = idx.query_rect(Aabb2D::new(-1, -1, 6, 6)).map(|e| e.payload).collect();
//! assert_eq!(hits, vec![1, 2]);
//! ```
//!
//! The grid backend is the one to use for large, roughly uniform point sets:
//!
//! ```rust
//! use lasso_index::{Aabb2D, GridIndex, Index};
//!
//! // 50×50 screen-unit cells.
//! let mut idx: GridIndex<u32> = Index::<f64, u32>::with_uniform_grid(50.0);
//! idx.build([(10.0, 10.0, 0), (40.0, 40.0, 1), (400.0, 400.0, 2)]);
//!
//! // Both points of cell (0, 0) come back, even though only one is inside the box.
//! let mut hits: Vec<_> = idx
//!     .query_rect(Aabb2D::new(0.0, 0.0, 20.0, 20.0))
//!     .map(|e| e.payload)
//!     .collect();
//! hits.sort_unstable();
//! assert_eq!(hits, vec![0, 1]);
//! ```
//!
//! ## Choosing a backend
//!
//! - `FlatVec` (default): simplest and exact. Good for very small sets and as a
//!   reference when testing other backends.
//! - `GridF64`: uniform grid; O(n) build and cheap queries when density is roughly
//!   uniform. Choose a cell size a few times larger than typical point spacing.
//!
//! ### Float semantics
//!
//! The grid never indexes positions with a NaN or infinite coordinate, and treats
//! query rectangles with a non-finite bound as empty.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod backends;
pub mod index;
pub mod types;

pub use backend::Backend;
pub use backends::flatvec::FlatVec;
pub use backends::grid::{DEFAULT_CELL_SIZE, GridF64};
pub use index::{Entry, GridIndex, Index, IndexGeneric};
pub use types::Aabb2D;
