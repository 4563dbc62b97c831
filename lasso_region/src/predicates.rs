// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Exact containment predicates in screen space.
//!
//! All three are pure and allocation-free. There is no epsilon: a point on a
//! rectangle edge or on a circle is inside because the comparisons are `<=`;
//! points on a polygon edge land on whichever side ray casting puts them.

use kurbo::Point;

/// Whether `p` lies inside the rectangle spanned by `c1` and `c2`, edges included.
///
/// Corner order does not matter.
#[inline]
pub fn rect_contains(p: Point, c1: Point, c2: Point) -> bool {
    let (min_x, max_x) = if c1.x <= c2.x { (c1.x, c2.x) } else { (c2.x, c1.x) };
    let (min_y, max_y) = if c1.y <= c2.y { (c1.y, c2.y) } else { (c2.y, c1.y) };
    p.x >= min_x && p.x <= max_x && p.y >= min_y && p.y <= max_y
}

/// Whether `p` lies inside the circle, boundary included.
#[inline]
pub fn circle_contains(p: Point, center: Point, radius: f64) -> bool {
    let dx = p.x - center.x;
    let dy = p.y - center.y;
    dx * dx + dy * dy <= radius * radius
}

/// Whether `p` lies inside the polygon under the even-odd rule.
///
/// `vertices` is open: the closing edge from the last vertex back to the first
/// is implied. Fewer than three vertices never contain anything.
pub fn polygon_contains(p: Point, vertices: &[Point]) -> bool {
    if vertices.len() < 3 {
        return false;
    }
    let mut inside = false;
    let mut j = vertices.len() - 1;
    for (i, vi) in vertices.iter().enumerate() {
        let vj = vertices[j];
        if (vi.y > p.y) != (vj.y > p.y) && p.x < (vj.x - vi.x) * (p.y - vi.y) / (vj.y - vi.y) + vi.x
        {
            inside = !inside;
        }
        j = i;
    }
    inside
}
