// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lasso Gesture: a deterministic, `no_std` pointer gesture state machine.
//!
//! ## Overview
//!
//! This crate turns a stream of pointer events into a selection [`Region`](lasso_region::Region).
//! It does not hit test or select anything itself.
//! Instead, feed it press, move, release and leave events in screen coordinates, draw the
//! [`LiveShape`](crate::types::LiveShape) it hands back while the pointer moves, and pass the
//! finished region on to whatever owns the points.
//!
//! ## Modes
//!
//! - [`Lasso`](crate::types::SelectionMode::Lasso): every move that strays more than
//!   [`min_vertex_spacing`](crate::gesture::Gesture::min_vertex_spacing) from the last kept vertex
//!   on either axis adds a vertex.
//! - [`Rectangle`](crate::types::SelectionMode::Rectangle): the press point is one corner, the
//!   latest move the other.
//! - [`Circle`](crate::types::SelectionMode::Circle): the press point is the center, the latest
//!   move sets the radius.
//!
//! The mode can only change while no gesture is active.
//!
//! ## Sequencing
//!
//! A press starts a gesture, release or leave ends it, and the gesture is reusable forever.
//! Anything else (a release with no press, a second press, a press or move at a NaN position)
//! comes back as [`GestureEvent::Ignored`](crate::types::GestureEvent::Ignored) and leaves the
//! state untouched. Ignored events are reported through the `log` facade at debug level.
//!
//! ```
//! use kurbo::Point;
//! use lasso_gesture::{Gesture, GestureEvent, PointerEvent, PointerKind, SelectionMode};
//!
//! let mut g = Gesture::new(SelectionMode::Lasso);
//! let events = [
//!     PointerEvent::new(PointerKind::Down, (0.0, 0.0)),
//!     PointerEvent::new(PointerKind::Move, (40.0, 0.0)),
//!     PointerEvent::new(PointerKind::Move, (40.0, 40.0)),
//!     PointerEvent::new(PointerKind::Up, (40.0, 40.0)),
//! ];
//! let mut region = None;
//! for ev in events {
//!     if let GestureEvent::Finished(r) = g.handle(ev) {
//!         region = Some(r);
//!     }
//! }
//! let region = region.unwrap();
//! assert!(region.contains(Point::new(30.0, 10.0)));
//! assert!(!region.contains(Point::new(10.0, 30.0)));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod gesture;
pub mod types;

pub use gesture::{DEFAULT_MIN_VERTEX_SPACING, Gesture, GestureState};
pub use types::{GestureEvent, LiveShape, ModeLocked, PointerEvent, PointerKind, SelectionMode};
