// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Point records, data-to-screen mapping, and the point store snapshot.

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use kurbo::{Point, Rect};
use log::warn;
use serde::{Deserialize, Serialize};

/// Stable identity of a point across reloads.
///
/// Cloning is cheap: the string is shared.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PointId(Arc<str>);

impl PointId {
    /// The identity as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PointId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for PointId {
    fn from(s: &str) -> Self {
        Self(Arc::from(s))
    }
}

impl From<String> for PointId {
    fn from(s: String) -> Self {
        Self(Arc::from(s))
    }
}

/// A point with resolved screen coordinates.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenPoint {
    /// Identity.
    pub id: PointId,
    /// Data-space x.
    pub x: f64,
    /// Data-space y.
    pub y: f64,
    /// Opaque value carried along for the caller.
    pub score: f64,
    /// Screen-space x.
    pub cx: f64,
    /// Screen-space y.
    pub cy: f64,
}

impl ScreenPoint {
    /// Create a point.
    pub fn new(id: impl Into<PointId>, x: f64, y: f64, score: f64, cx: f64, cy: f64) -> Self {
        Self {
            id: id.into(),
            x,
            y,
            score,
            cx,
            cy,
        }
    }

    /// Screen position.
    pub fn screen(&self) -> Point {
        Point::new(self.cx, self.cy)
    }
}

/// A raw data row, possibly without screen coordinates yet.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    /// Identity.
    pub id: PointId,
    /// Data-space x.
    pub x: f64,
    /// Data-space y.
    pub y: f64,
    /// Opaque value carried along for the caller.
    #[serde(default)]
    pub score: f64,
    /// Precomputed screen x, if known.
    #[serde(default)]
    pub cx: Option<f64>,
    /// Precomputed screen y, if known.
    #[serde(default)]
    pub cy: Option<f64>,
}

/// Linear map from a data interval onto a screen interval.
///
/// Values outside the domain extrapolate. A zero-width domain maps everything
/// to the middle of the range.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    /// Data interval.
    pub domain: (f64, f64),
    /// Screen interval; may be reversed.
    pub range: (f64, f64),
}

impl LinearScale {
    /// Create a scale.
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a data value to the screen.
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let t = if d1 == d0 { 0.5 } else { (v - d0) / (d1 - d0) };
        r0 + t * (r1 - r0)
    }
}

/// Extent of a data set.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataBounds {
    /// Smallest x.
    pub min_x: f64,
    /// Largest x.
    pub max_x: f64,
    /// Smallest y.
    pub min_y: f64,
    /// Largest y.
    pub max_y: f64,
    /// Smallest score.
    pub min_score: f64,
    /// Largest score.
    pub max_score: f64,
}

impl Default for DataBounds {
    fn default() -> Self {
        Self {
            min_x: 0.0,
            max_x: 1.0,
            min_y: 0.0,
            max_y: 1.0,
            min_score: 0.0,
            max_score: 1.0,
        }
    }
}

impl DataBounds {
    /// Extent of `rows`, ignoring non-finite values.
    ///
    /// Each axis without a single finite value falls back to `0..1`.
    pub fn of<'a>(rows: impl IntoIterator<Item = &'a DataPoint>) -> Self {
        fn grow(acc: &mut Option<(f64, f64)>, v: f64) {
            if !v.is_finite() {
                return;
            }
            *acc = Some(match *acc {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        let (mut xs, mut ys, mut scores) = (None, None, None);
        for row in rows {
            grow(&mut xs, row.x);
            grow(&mut ys, row.y);
            grow(&mut scores, row.score);
        }
        let (min_x, max_x) = xs.unwrap_or((0.0, 1.0));
        let (min_y, max_y) = ys.unwrap_or((0.0, 1.0));
        let (min_score, max_score) = scores.unwrap_or((0.0, 1.0));
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
            min_score,
            max_score,
        }
    }
}

/// Data-to-screen mapping for both axes.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScreenMapping {
    /// Horizontal scale.
    pub x: LinearScale,
    /// Vertical scale.
    pub y: LinearScale,
}

impl ScreenMapping {
    /// Map `bounds` onto `viewport`, with data y growing upward on screen.
    pub fn fit(bounds: &DataBounds, viewport: Rect) -> Self {
        Self {
            x: LinearScale::new((bounds.min_x, bounds.max_x), (viewport.x0, viewport.x1)),
            y: LinearScale::new((bounds.min_y, bounds.max_y), (viewport.y1, viewport.y0)),
        }
    }

    /// Screen position of a data position.
    pub fn apply(&self, x: f64, y: f64) -> Point {
        Point::new(self.x.apply(x), self.y.apply(y))
    }
}

/// How many input rows a [`PointStore`] left out, by reason.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DroppedRows {
    /// Rows whose screen position was missing or not finite.
    pub non_finite: usize,
    /// Rows repeating an identity seen earlier in the same input.
    pub duplicate: usize,
}

impl DroppedRows {
    /// Total dropped rows.
    pub fn total(&self) -> usize {
        self.non_finite + self.duplicate
    }
}

/// An immutable, deduplicated snapshot of points.
///
/// Every stored point has a finite screen position and a unique identity.
/// Slots (positions in [`PointStore::points`]) are stable for the life of the
/// store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PointStore {
    points: Vec<ScreenPoint>,
    dropped: DroppedRows,
}

impl PointStore {
    /// Build a store, dropping rows without a finite screen position and rows
    /// with a repeated identity (the first occurrence wins).
    pub fn new(points: impl IntoIterator<Item = ScreenPoint>) -> Self {
        let mut seen = HashSet::new();
        let mut dropped = DroppedRows::default();
        let mut kept = Vec::new();
        for p in points {
            if !p.cx.is_finite() || !p.cy.is_finite() {
                dropped.non_finite += 1;
                continue;
            }
            if !seen.insert(p.id.clone()) {
                dropped.duplicate += 1;
                continue;
            }
            kept.push(p);
        }
        if dropped.total() > 0 {
            warn!(
                "point store dropped {} rows ({} without a finite screen position, {} duplicate ids)",
                dropped.total(),
                dropped.non_finite,
                dropped.duplicate
            );
        }
        Self {
            points: kept,
            dropped,
        }
    }

    /// Build a store from raw rows, filling in missing screen coordinates
    /// through `mapping`.
    pub fn from_data(rows: impl IntoIterator<Item = DataPoint>, mapping: &ScreenMapping) -> Self {
        Self::new(rows.into_iter().map(|row| {
            let cx = row.cx.unwrap_or_else(|| mapping.x.apply(row.x));
            let cy = row.cy.unwrap_or_else(|| mapping.y.apply(row.y));
            ScreenPoint {
                id: row.id,
                x: row.x,
                y: row.y,
                score: row.score,
                cx,
                cy,
            }
        }))
    }

    /// Number of stored points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True if the store holds no points.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// All points, by slot.
    pub fn points(&self) -> &[ScreenPoint] {
        &self.points
    }

    /// The point at `slot`.
    pub fn get(&self, slot: usize) -> Option<&ScreenPoint> {
        self.points.get(slot)
    }

    /// Rows left out at construction.
    pub fn dropped(&self) -> DroppedRows {
        self.dropped
    }
}

impl FromIterator<ScreenPoint> for PointStore {
    fn from_iter<I: IntoIterator<Item = ScreenPoint>>(iter: I) -> Self {
        Self::new(iter)
    }
}
