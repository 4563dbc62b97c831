// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Uniform grid backend. Buckets point slots by integer cell key.

use alloc::boxed::Box;
use alloc::collections::BTreeMap;
use alloc::vec::Vec;
use core::fmt::Debug;

use crate::backend::Backend;
use crate::types::Aabb2D;

/// Default cell edge length, in screen units.
///
/// Balances bucket overhead against filtering value for 10³–10⁵ points spread
/// over a typical plot surface.
pub const DEFAULT_CELL_SIZE: f64 = 50.0;

/// Inclusive range of cell keys covered by a query.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct CellRange {
    lo: (i64, i64),
    hi: (i64, i64),
}

impl CellRange {
    /// Number of cells in the range, saturating.
    fn span(&self) -> u128 {
        let w = (i128::from(self.hi.0) - i128::from(self.lo.0) + 1) as u128;
        let h = (i128::from(self.hi.1) - i128::from(self.lo.1) + 1) as u128;
        w.saturating_mul(h)
    }
}

/// Uniform grid backend for f64 coordinates.
///
/// A position `(x, y)` lands in cell `(floor((x - origin_x) / cell_w), floor((y - origin_y) / cell_h))`.
/// Negative coordinates are fine; positions with a non-finite coordinate are
/// never indexed.
///
/// Queries return every slot of every cell touched by the query rectangle, so
/// results are a superset of the exact answer and need a precise post-filter.
pub struct GridF64 {
    cell_w: f64,
    cell_h: f64,
    origin_x: f64,
    origin_y: f64,
    cells: BTreeMap<(i64, i64), Vec<usize>>,
    extent: Option<CellRange>,
    len: usize,
}

impl Default for GridF64 {
    fn default() -> Self {
        Self::new(DEFAULT_CELL_SIZE, DEFAULT_CELL_SIZE, 0.0, 0.0)
    }
}

impl GridF64 {
    /// Create a grid backend with the given cell size and origin offset.
    ///
    /// Coordinates are mapped to integer cell indices by floor-division of
    /// `(x - origin_x) / cell_w` and `(y - origin_y) / cell_h`.
    pub fn new(cell_w: f64, cell_h: f64, origin_x: f64, origin_y: f64) -> Self {
        assert!(
            cell_w > 0.0 && cell_h > 0.0 && cell_w.is_finite() && cell_h.is_finite(),
            "cell sizes must be positive and finite"
        );
        Self {
            cell_w,
            cell_h,
            origin_x,
            origin_y,
            cells: BTreeMap::new(),
            extent: None,
            len: 0,
        }
    }

    /// Create a grid of square cells anchored at the origin.
    pub fn with_cell_size(cell: f64) -> Self {
        Self::new(cell, cell, 0.0, 0.0)
    }

    /// Cell width and height.
    pub fn cell_size(&self) -> (f64, f64) {
        (self.cell_w, self.cell_h)
    }

    /// Number of occupied cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    fn floor_to_i64(v: f64) -> i64 {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "Float to cell index casts saturate; out-of-range cells are clamped by design."
        )]
        let i = v as i64;
        if (i as f64) > v { i.saturating_sub(1) } else { i }
    }

    fn key_for(&self, x: f64, y: f64) -> (i64, i64) {
        let cx = Self::floor_to_i64((x - self.origin_x) / self.cell_w);
        let cy = Self::floor_to_i64((y - self.origin_y) / self.cell_h);
        (cx, cy)
    }

    /// Cells touched by `rect`, clamped to the occupied extent.
    fn cells_for_aabb(&self, rect: &Aabb2D<f64>) -> Option<CellRange> {
        if !rect.is_finite() || rect.is_empty() {
            return None;
        }
        let extent = self.extent?;
        let (minx, miny) = self.key_for(rect.min_x, rect.min_y);
        let (maxx, maxy) = self.key_for(rect.max_x, rect.max_y);
        let lo = (minx.max(extent.lo.0), miny.max(extent.lo.1));
        let hi = (maxx.min(extent.hi.0), maxy.min(extent.hi.1));
        if lo.0 > hi.0 || lo.1 > hi.1 {
            return None;
        }
        Some(CellRange { lo, hi })
    }

    fn grow_extent(&mut self, key: (i64, i64)) {
        self.extent = Some(match self.extent {
            None => CellRange { lo: key, hi: key },
            Some(r) => CellRange {
                lo: (r.lo.0.min(key.0), r.lo.1.min(key.1)),
                hi: (r.hi.0.max(key.0), r.hi.1.max(key.1)),
            },
        });
    }
}

impl Backend<f64> for GridF64 {
    fn build(&mut self, positions: &[(f64, f64)]) {
        self.clear();
        for (slot, &(x, y)) in positions.iter().enumerate() {
            if !x.is_finite() || !y.is_finite() {
                continue;
            }
            let key = self.key_for(x, y);
            self.cells.entry(key).or_default().push(slot);
            self.grow_extent(key);
            self.len += 1;
        }
    }
    fn clear(&mut self) {
        self.cells.clear();
        self.extent = None;
        self.len = 0;
    }
    fn len(&self) -> usize {
        self.len
    }
    fn query_rect<'a>(&'a self, rect: Aabb2D<f64>) -> Box<dyn Iterator<Item = usize> + 'a> {
        let Some(range) = self.cells_for_aabb(&rect) else {
            return Box::new(core::iter::empty());
        };
        let mut out = Vec::new();
        if range.span() <= self.cells.len() as u128 {
            for x in range.lo.0..=range.hi.0 {
                for y in range.lo.1..=range.hi.1 {
                    if let Some(slots) = self.cells.get(&(x, y)) {
                        out.extend_from_slice(slots);
                    }
                }
            }
        } else {
            // Sparse grid under a large query: walk the occupied column band instead.
            let band = self
                .cells
                .range((range.lo.0, i64::MIN)..=(range.hi.0, i64::MAX));
            for (&(_, y), slots) in band {
                if y >= range.lo.1 && y <= range.hi.1 {
                    out.extend_from_slice(slots);
                }
            }
        }
        Box::new(out.into_iter())
    }
}

impl Debug for GridF64 {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("GridF64")
            .field("cell_w", &self.cell_w)
            .field("cell_h", &self.cell_h)
            .field("origin_x", &self.origin_x)
            .field("origin_y", &self.origin_y)
            .field("indexed", &self.len)
            .field("cells", &self.cells.len())
            .finish_non_exhaustive()
    }
}
