// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Backend implementations for different spatial strategies.
//!
//! - `flatvec`: flat vector with linear scans; exact, and the brute-force reference.
//! - `grid`: uniform grid for f64 coordinates; O(n) build, candidate queries by cell range.

pub mod flatvec;
pub mod grid;

pub use grid::{DEFAULT_CELL_SIZE, GridF64};
