// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Primitive geometry types and helpers.

use core::cmp::Ordering;

/// Axis-aligned bounding box in 2D.
///
/// Bounds are inclusive on every side: a point lying exactly on an edge is
/// inside the box.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Aabb2D<T> {
    /// Minimum x (left)
    pub min_x: T,
    /// Minimum y (top)
    pub min_y: T,
    /// Maximum x (right)
    pub max_x: T,
    /// Maximum y (bottom)
    pub max_y: T,
}

impl<T> Aabb2D<T> {
    /// Create a new AABB from min/max corners.
    pub const fn new(min_x: T, min_y: T, max_x: T, max_y: T) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
}

impl<T: Copy + PartialOrd> Aabb2D<T> {
    /// Create the AABB spanned by two arbitrary corners.
    ///
    /// Corner order does not matter; the result is always normalized.
    pub fn from_corners(a: (T, T), b: (T, T)) -> Self {
        Self {
            min_x: min_t(a.0, b.0),
            min_y: min_t(a.1, b.1),
            max_x: max_t(a.0, b.0),
            max_y: max_t(a.1, b.1),
        }
    }

    /// Whether this AABB contains the point (boundary inclusive).
    pub fn contains_point(&self, x: T, y: T) -> bool {
        le(self.min_x, x) && le(self.min_y, y) && le(x, self.max_x) && le(y, self.max_y)
    }

    /// Return true if the AABB is inverted (no extent on some axis).
    ///
    /// A zero-width or zero-height box is not empty: it still contains the points
    /// on its boundary. Comparisons involving NaN count as empty.
    pub fn is_empty(&self) -> bool {
        !le(self.min_x, self.max_x) || !le(self.min_y, self.max_y)
    }
}

impl Aabb2D<f64> {
    /// Create an AABB from origin and size in f64.
    pub const fn from_xywh(x: f64, y: f64, w: f64, h: f64) -> Self {
        Self {
            min_x: x,
            min_y: y,
            max_x: x + w,
            max_y: y + h,
        }
    }

    /// True if every bound is a finite number.
    pub fn is_finite(&self) -> bool {
        self.min_x.is_finite()
            && self.min_y.is_finite()
            && self.max_x.is_finite()
            && self.max_y.is_finite()
    }
}

pub(crate) fn min_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Greater) => b,
        _ => a,
    }
}

pub(crate) fn max_t<T: PartialOrd + Copy>(a: T, b: T) -> T {
    match a.partial_cmp(&b) {
        Some(Ordering::Less) => b,
        _ => a,
    }
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corners_are_normalized() {
        let a = Aabb2D::from_corners((10.0, -5.0), (-2.0, 7.0));
        assert_eq!(a, Aabb2D::new(-2.0, -5.0, 10.0, 7.0));
    }

    #[test]
    fn boundary_is_inclusive() {
        let a = Aabb2D::new(0.0, 0.0, 100.0, 100.0);
        assert!(a.contains_point(100.0, 50.0));
        assert!(a.contains_point(0.0, 0.0));
        assert!(!a.contains_point(100.000_1, 50.0));
    }

    #[test]
    fn zero_area_is_not_empty_but_inverted_is() {
        assert!(!Aabb2D::new(5.0, 5.0, 5.0, 5.0).is_empty());
        assert!(Aabb2D::new(6.0, 5.0, 5.0, 5.0).is_empty());
        assert!(Aabb2D::new(f64::NAN, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn nan_point_is_never_contained() {
        let a = Aabb2D::new(0.0, 0.0, 1.0, 1.0);
        assert!(!a.contains_point(f64::NAN, 0.5));
    }
}
