// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Core types for the gesture: modes, pointer input, live shapes, and outputs.
//!
//! ## Overview
//!
//! These types describe what goes into a [`Gesture`](crate::gesture::Gesture)
//! and what comes back out. They carry no state of their own.

use alloc::vec::Vec;
use core::fmt;

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use lasso_region::Region;

/// Which shape a gesture draws.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub enum SelectionMode {
    /// Freeform polygon traced by the pointer.
    #[default]
    Lasso,
    /// Axis-aligned rectangle from the press point to the pointer.
    Rectangle,
    /// Circle centered on the press point, through the pointer.
    Circle,
}

impl fmt::Display for SelectionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Lasso => "lasso",
            Self::Rectangle => "rectangle",
            Self::Circle => "circle",
        })
    }
}

/// Kind of pointer input.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum PointerKind {
    /// Button pressed.
    Down,
    /// Pointer moved.
    Move,
    /// Button released.
    Up,
    /// Pointer left the drawing surface.
    Leave,
}

/// A pointer event in screen coordinates.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerKind,
    /// Where it happened.
    pub position: Point,
}

impl PointerEvent {
    /// Create a pointer event.
    pub fn new(kind: PointerKind, position: impl Into<Point>) -> Self {
        Self {
            kind,
            position: position.into(),
        }
    }
}

/// The in-progress shape of an active gesture, for rendering only.
///
/// Lasso previews with more than one vertex end with a copy of the first
/// vertex so they draw as a closed loop. That closing vertex never reaches the
/// finished [`Region`].
#[derive(Clone, Debug, PartialEq)]
pub enum LiveShape {
    /// Rectangle from the anchor to the current pointer position.
    Rectangle {
        /// Press position.
        anchor: Point,
        /// Latest pointer position.
        current: Point,
    },
    /// Circle around the press position.
    Circle {
        /// Press position.
        center: Point,
        /// Distance from the center to the latest pointer position.
        radius: f64,
    },
    /// Lasso vertices, closed for display.
    Lasso(Vec<Point>),
}

impl LiveShape {
    /// The mode this shape belongs to.
    pub fn mode(&self) -> SelectionMode {
        match self {
            Self::Rectangle { .. } => SelectionMode::Rectangle,
            Self::Circle { .. } => SelectionMode::Circle,
            Self::Lasso(_) => SelectionMode::Lasso,
        }
    }

    /// Outline for drawing.
    ///
    /// The lasso is drawn as an open polyline through the preview vertices,
    /// which already end where they start.
    pub fn to_path(&self, tolerance: f64) -> BezPath {
        match self {
            Self::Rectangle { anchor, current } => {
                Rect::from_points(*anchor, *current).to_path(tolerance)
            }
            Self::Circle { center, radius } => Circle::new(*center, *radius).to_path(tolerance),
            Self::Lasso(points) => {
                let mut path = BezPath::new();
                let mut it = points.iter();
                if let Some(first) = it.next() {
                    path.move_to(*first);
                    for p in it {
                        path.line_to(*p);
                    }
                }
                path
            }
        }
    }
}

/// Result of feeding one pointer event to a gesture.
#[derive(Clone, Debug, PartialEq)]
pub enum GestureEvent {
    /// The event did not change anything.
    Ignored,
    /// A gesture began; the initial live shape.
    Started(LiveShape),
    /// The live shape changed.
    Preview(LiveShape),
    /// The gesture ended with this region.
    Finished(Region),
}

/// A mode change was requested while a gesture is active.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct ModeLocked {
    /// Mode of the gesture in progress.
    pub active: SelectionMode,
    /// Mode that was rejected.
    pub requested: SelectionMode,
}

impl fmt::Display for ModeLocked {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot switch to {} while a {} gesture is active",
            self.requested, self.active
        )
    }
}

impl core::error::Error for ModeLocked {}
