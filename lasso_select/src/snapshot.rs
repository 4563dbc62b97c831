// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! An indexed point store: the unit of work shared with query executors.

use std::fmt;
use std::time::Instant;

use kurbo::Point;
use lasso_index::{Aabb2D, GridIndex, Index};
use lasso_region::Region;
use log::debug;

use crate::error::{SelectError, SelectResult};
use crate::result::{SelectionResult, SelectionStats};
use crate::store::{PointStore, ScreenPoint};

/// A point store together with the grid index built over it.
///
/// Immutable once built. Replacing the store means building a new snapshot
/// with a higher generation.
pub struct Snapshot {
    generation: u64,
    store: PointStore,
    index: GridIndex<usize>,
}

impl fmt::Debug for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Snapshot")
            .field("generation", &self.generation)
            .field("points", &self.store.len())
            .field("cell_size", &self.cell_size())
            .field("occupied_cells", &self.occupied_cells())
            .finish_non_exhaustive()
    }
}

impl Snapshot {
    /// Index `store` with square cells of `cell_size` screen units.
    pub fn new(generation: u64, store: PointStore, cell_size: f64) -> SelectResult<Self> {
        if !(cell_size.is_finite() && cell_size > 0.0) {
            return Err(SelectError::InvalidConfig(format!(
                "cell_size must be positive and finite, got {cell_size}"
            )));
        }
        Ok(Self::build(generation, store, cell_size))
    }

    /// Like [`Snapshot::new`], for a cell size that is already known to be valid.
    pub(crate) fn build(generation: u64, store: PointStore, cell_size: f64) -> Self {
        let mut index = Index::<f64, usize>::with_uniform_grid(cell_size);
        index.build(
            store
                .points()
                .iter()
                .enumerate()
                .map(|(slot, p)| (p.cx, p.cy, slot)),
        );
        Self {
            generation,
            store,
            index,
        }
    }

    /// Generation this snapshot was built for.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The indexed points.
    pub fn store(&self) -> &PointStore {
        &self.store
    }

    /// Edge length of the square grid cells.
    pub fn cell_size(&self) -> f64 {
        self.index.backend().cell_size().0
    }

    /// Number of grid cells holding at least one point.
    pub fn occupied_cells(&self) -> usize {
        self.index.backend().cell_count()
    }

    /// Points inside `region`: bounding box, grid candidates, exact test.
    ///
    /// Degenerate regions select nothing.
    pub fn select(&self, region: &Region) -> SelectionResult {
        let started = Instant::now();
        if region.is_degenerate() {
            debug!(
                "degenerate {:?} region selects nothing (generation {})",
                region.kind(),
                self.generation
            );
            return SelectionResult::empty(self.generation);
        }
        let Some(bbox) = region.bounding_box() else {
            return SelectionResult::empty(self.generation);
        };
        let mut candidates = 0;
        let points: Vec<ScreenPoint> = self
            .index
            .query_rect(Aabb2D::new(bbox.x0, bbox.y0, bbox.x1, bbox.y1))
            .inspect(|_| candidates += 1)
            .filter(|e| region.contains(Point::new(e.x, e.y)))
            .filter_map(|e| self.store.get(e.payload).cloned())
            .collect();
        self.finish(region, points, candidates, started)
    }

    /// Points inside `region` by testing every point.
    ///
    /// Same answer as [`Snapshot::select`], without the index.
    pub fn select_exhaustive(&self, region: &Region) -> SelectionResult {
        let started = Instant::now();
        if region.is_degenerate() {
            return SelectionResult::empty(self.generation);
        }
        let points: Vec<ScreenPoint> = self
            .store
            .points()
            .iter()
            .filter(|p| region.contains(p.screen()))
            .cloned()
            .collect();
        self.finish(region, points, self.store.len(), started)
    }

    fn finish(
        &self,
        region: &Region,
        points: Vec<ScreenPoint>,
        candidates: usize,
        started: Instant,
    ) -> SelectionResult {
        let stats = SelectionStats {
            candidates,
            selected: points.len(),
            elapsed: started.elapsed(),
        };
        debug!(
            "{:?} query on generation {}: {} candidates, {} selected in {:?}",
            region.kind(),
            self.generation,
            stats.candidates,
            stats.selected,
            stats.elapsed
        );
        SelectionResult::new(self.generation, points, stats)
    }
}
