// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lasso Region: selection shapes and exact point containment.
//!
//! ## Overview
//!
//! A [`Region`] is what a finished gesture hands to the selection layer: a
//! rectangle spanned by two corners, a circle, or a freeform polygon. All
//! coordinates are screen-space [`kurbo::Point`]s.
//!
//! - [`Region::contains`] is the exact test.
//! - [`Region::bounding_box`] is the coarse one, used to pull candidates out of a spatial index.
//! - [`Region::is_degenerate`] flags shapes that select nothing.
//!
//! The bare predicates are also exported from [`predicates`] for callers that
//! do not want to build a `Region`.
//!
//! ## Boundaries
//!
//! Rectangles and circles include their boundary. Polygons use ray casting with
//! the even-odd rule, so self-intersecting lassos leave doubly covered areas
//! outside and concave notches are handled naturally.
//!
//! ```rust
//! use kurbo::Point;
//! use lasso_region::Region;
//!
//! let lasso = Region::Polygon(vec![
//!     Point::new(0.0, 0.0),
//!     Point::new(10.0, 0.0),
//!     Point::new(0.0, 10.0),
//! ]);
//! assert!(lasso.contains(Point::new(2.0, 2.0)));
//! assert!(!lasso.contains(Point::new(6.0, 6.0)));
//!
//! let rect = Region::Rectangle {
//!     corner1: Point::new(100.0, 100.0),
//!     corner2: Point::new(0.0, 0.0),
//! };
//! assert!(rect.contains(Point::new(100.0, 50.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod predicates;
mod region;

pub use region::{Region, RegionKind};
