// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection results.

use std::time::Duration;

use serde::Serialize;

use crate::store::{PointId, ScreenPoint};

/// Counters from one query.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct SelectionStats {
    /// Points the coarse stage handed to the exact test.
    pub candidates: usize,
    /// Points that passed the exact test.
    pub selected: usize,
    /// Wall time spent in the query.
    pub elapsed: Duration,
}

/// The points a region selected from one store generation.
///
/// Order is unspecified; treat it as a set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct SelectionResult {
    generation: u64,
    points: Vec<ScreenPoint>,
    stats: SelectionStats,
}

impl SelectionResult {
    pub(crate) fn new(generation: u64, points: Vec<ScreenPoint>, stats: SelectionStats) -> Self {
        Self {
            generation,
            points,
            stats,
        }
    }

    /// A result that selected nothing.
    pub fn empty(generation: u64) -> Self {
        Self::new(generation, Vec::new(), SelectionStats::default())
    }

    /// Generation of the store this result was computed against.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Selected points.
    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    /// Identities of the selected points.
    pub fn ids(&self) -> impl Iterator<Item = &PointId> + '_ {
        self.points.iter().map(|p| &p.id)
    }

    /// Whether the point with `id` was selected.
    pub fn contains(&self, id: &str) -> bool {
        self.points.iter().any(|p| p.id.as_str() == id)
    }

    /// Number of selected points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if nothing was selected.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Query counters.
    pub fn stats(&self) -> SelectionStats {
        self.stats
    }

    /// Take the selected points.
    pub fn into_points(self) -> Vec<ScreenPoint> {
        self.points
    }
}
