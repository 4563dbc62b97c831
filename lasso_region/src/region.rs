// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Region`] type: a finished selection shape.

use alloc::vec::Vec;

use kurbo::{BezPath, Circle, Point, Rect, Shape};

use crate::predicates::{circle_contains, polygon_contains, rect_contains};

/// Which variant a [`Region`] is, without its geometry.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RegionKind {
    /// Axis-aligned rectangle.
    Rectangle,
    /// Circle.
    Circle,
    /// Freeform polygon.
    Polygon,
}

/// A user-drawn selection region in screen space.
///
/// Regions are immutable values; a gesture builds one and hands it off when it
/// ends.
#[derive(Clone, Debug, PartialEq)]
pub enum Region {
    /// Rectangle spanned by two opposite corners, in any order.
    Rectangle {
        /// First corner (the gesture anchor).
        corner1: Point,
        /// Opposite corner.
        corner2: Point,
    },
    /// Circle around `center`.
    Circle {
        /// Center (the gesture anchor).
        center: Point,
        /// Radius in screen units.
        radius: f64,
    },
    /// Open polygon; the closing edge back to the first vertex is implied.
    Polygon(Vec<Point>),
}

impl Region {
    /// The variant of this region.
    pub fn kind(&self) -> RegionKind {
        match self {
            Self::Rectangle { .. } => RegionKind::Rectangle,
            Self::Circle { .. } => RegionKind::Circle,
            Self::Polygon(_) => RegionKind::Polygon,
        }
    }

    /// Exact containment test.
    ///
    /// This is the raw predicate: it does not apply the "degenerate selects
    /// nothing" policy, see [`Region::is_degenerate`].
    pub fn contains(&self, p: Point) -> bool {
        match self {
            Self::Rectangle { corner1, corner2 } => rect_contains(p, *corner1, *corner2),
            Self::Circle { center, radius } => circle_contains(p, *center, *radius),
            Self::Polygon(vertices) => polygon_contains(p, vertices),
        }
    }

    /// True for regions that select nothing by policy.
    ///
    /// That is a polygon with fewer than three vertices, a circle whose radius is
    /// not a positive finite number, a rectangle without area, or any region
    /// with a non-finite coordinate.
    pub fn is_degenerate(&self) -> bool {
        match self {
            Self::Rectangle { corner1, corner2 } => {
                !corner1.is_finite()
                    || !corner2.is_finite()
                    || corner1.x == corner2.x
                    || corner1.y == corner2.y
            }
            Self::Circle { center, radius } => {
                !center.is_finite() || !radius.is_finite() || *radius <= 0.0
            }
            Self::Polygon(vertices) => {
                vertices.len() < 3 || vertices.iter().any(|v| !v.is_finite())
            }
        }
    }

    /// Axis-aligned bounds of the region, or `None` for an empty polygon.
    pub fn bounding_box(&self) -> Option<Rect> {
        match self {
            Self::Rectangle { corner1, corner2 } => Some(Rect::from_points(*corner1, *corner2)),
            Self::Circle { center, radius } => {
                // `center ± r` can round inward past points the exact test accepts.
                let r = radius.abs();
                let pad_x = (center.x.abs() + r) * 4.0 * f64::EPSILON;
                let pad_y = (center.y.abs() + r) * 4.0 * f64::EPSILON;
                Some(Rect::new(
                    (center.x - r - pad_x).next_down(),
                    (center.y - r - pad_y).next_down(),
                    (center.x + r + pad_x).next_up(),
                    (center.y + r + pad_y).next_up(),
                ))
            }
            Self::Polygon(vertices) => {
                let (first, rest) = vertices.split_first()?;
                Some(
                    rest.iter()
                        .fold(Rect::from_points(*first, *first), |acc, v| acc.union_pt(*v)),
                )
            }
        }
    }

    /// Outline of the region for rendering, closed.
    ///
    /// `tolerance` bounds the flattening error of the circle outline.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Self::Rectangle { corner1, corner2 } => {
                Rect::from_points(*corner1, *corner2).to_path(tolerance)
            }
            Self::Circle { center, radius } => {
                Circle::new(*center, radius.abs()).to_path(tolerance)
            }
            Self::Polygon(vertices) => {
                let mut path = BezPath::new();
                if let Some((first, rest)) = vertices.split_first() {
                    path.move_to(*first);
                    for v in rest {
                        path.line_to(*v);
                    }
                    path.close_path();
                }
                path
            }
        }
    }
}
