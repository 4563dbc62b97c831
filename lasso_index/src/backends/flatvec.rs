// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flat vector backend with linear scans. Small and simple; good for tiny sets.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// Flat vector backend with linear scans.
///
/// Answers queries exactly: every returned slot lies inside the query
/// rectangle. This makes it the brute-force reference for the grid.
pub struct FlatVec<T: Copy + PartialOrd + Debug> {
    positions: Vec<(T, T)>,
}

impl<T: Copy + PartialOrd + Debug> Default for FlatVec<T> {
    fn default() -> Self {
        Self {
            positions: Vec::new(),
        }
    }
}

impl<T: Copy + PartialOrd + Debug> Debug for FlatVec<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FlatVec")
            .field("total_slots", &self.positions.len())
            .finish_non_exhaustive()
    }
}

impl<T: Copy + PartialOrd + Debug> Backend<T> for FlatVec<T> {
    fn build(&mut self, positions: &[(T, T)]) {
        self.positions.clear();
        self.positions.extend_from_slice(positions);
    }
    fn clear(&mut self) {
        self.positions.clear();
    }
    fn len(&self) -> usize {
        self.positions.len()
    }
    fn query_rect<'a>(&'a self, rect: Aabb2D<T>) -> Box<dyn Iterator<Item = usize> + 'a> {
        if rect.is_empty() {
            return Box::new(core::iter::empty());
        }
        Box::new(
            self.positions
                .iter()
                .enumerate()
                .filter(move |(_, (x, y))| rect.contains_point(*x, *y))
                .map(|(i, _)| i),
        )
    }
}
