// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture state machine: turn pointer events into a [`Region`].
//!
//! ## Usage
//!
//! 1) Pick a mode with [`Gesture::set_mode`] while no gesture is active.
//! 2) Feed pointer events with [`Gesture::handle`] (or the `pointer_*` shorthands).
//! 3) Draw the shape carried by [`GestureEvent::Started`] / [`GestureEvent::Preview`].
//! 4) Hand the region from [`GestureEvent::Finished`] to the selection layer.
//!
//! ## Minimal example
//!
//! ```
//! use kurbo::Point;
//! use lasso_gesture::{Gesture, GestureEvent, SelectionMode};
//! use lasso_region::Region;
//!
//! let mut g = Gesture::new(SelectionMode::Rectangle);
//! g.pointer_down(Point::new(0.0, 0.0));
//! g.pointer_move(Point::new(20.0, 10.0));
//! let GestureEvent::Finished(region) = g.pointer_up(Point::new(99.0, 99.0)) else {
//!     unreachable!();
//! };
//! assert_eq!(
//!     region,
//!     Region::Rectangle { corner1: Point::new(0.0, 0.0), corner2: Point::new(20.0, 10.0) }
//! );
//! assert!(!g.is_active());
//! ```

use alloc::vec::Vec;

use kurbo::Point;
use lasso_region::Region;
use log::debug;

use crate::types::{GestureEvent, LiveShape, ModeLocked, PointerEvent, PointerKind, SelectionMode};

/// Default minimum per-axis distance between retained lasso vertices, in screen units.
pub const DEFAULT_MIN_VERTEX_SPACING: f64 = 2.0;

/// Shape under construction.
#[derive(Clone, Debug, PartialEq)]
enum Draft {
    Rectangle { anchor: Point, current: Point },
    Circle { center: Point, radius: f64 },
    Lasso(Vec<Point>),
}

impl Draft {
    fn start(mode: SelectionMode, at: Point) -> Self {
        match mode {
            SelectionMode::Rectangle => Self::Rectangle {
                anchor: at,
                current: at,
            },
            SelectionMode::Circle => Self::Circle {
                center: at,
                radius: 0.0,
            },
            SelectionMode::Lasso => Self::Lasso(alloc::vec![at]),
        }
    }

    /// Apply a move; returns whether the shape changed.
    fn update(&mut self, to: Point, spacing: f64) -> bool {
        match self {
            Self::Rectangle { current, .. } => {
                *current = to;
                true
            }
            Self::Circle { center, radius } => {
                *radius = center.distance(to);
                true
            }
            Self::Lasso(vertices) => {
                let keep = vertices.last().is_none_or(|last| {
                    (to.x - last.x).abs() > spacing || (to.y - last.y).abs() > spacing
                });
                if keep {
                    vertices.push(to);
                }
                keep
            }
        }
    }

    fn live(&self) -> LiveShape {
        match self {
            Self::Rectangle { anchor, current } => LiveShape::Rectangle {
                anchor: *anchor,
                current: *current,
            },
            Self::Circle { center, radius } => LiveShape::Circle {
                center: *center,
                radius: *radius,
            },
            Self::Lasso(vertices) => {
                let mut closed = Vec::with_capacity(vertices.len() + 1);
                closed.extend_from_slice(vertices);
                if vertices.len() > 1 {
                    closed.push(vertices[0]);
                }
                LiveShape::Lasso(closed)
            }
        }
    }

    fn finish(self) -> Region {
        match self {
            Self::Rectangle { anchor, current } => Region::Rectangle {
                corner1: anchor,
                corner2: current,
            },
            Self::Circle { center, radius } => Region::Circle { center, radius },
            Self::Lasso(vertices) => Region::Polygon(vertices),
        }
    }
}

/// Observable state of a [`Gesture`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum GestureState {
    /// Waiting for a press.
    Idle,
    /// A press was seen and the shape is being drawn.
    Active,
}

/// Pointer-driven builder for selection regions.
///
/// `Idle --down--> Active --move*--> Active --up/leave--> Idle`, forever.
/// Events that do not fit that sequence are ignored, as are presses and moves
/// at non-finite positions. The position carried by up and leave events is not
/// used: the shape is frozen as of the last press or move.
#[derive(Clone, Debug)]
pub struct Gesture {
    mode: SelectionMode,
    min_vertex_spacing: f64,
    draft: Option<Draft>,
}

impl Default for Gesture {
    fn default() -> Self {
        Self::new(SelectionMode::default())
    }
}

impl Gesture {
    /// Create an idle gesture in `mode`.
    pub fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            min_vertex_spacing: DEFAULT_MIN_VERTEX_SPACING,
            draft: None,
        }
    }

    /// Builder-style setter for the lasso vertex spacing.
    pub fn with_min_vertex_spacing(mut self, spacing: f64) -> Self {
        self.min_vertex_spacing = spacing;
        self
    }

    /// Lasso vertex spacing.
    pub fn min_vertex_spacing(&self) -> f64 {
        self.min_vertex_spacing
    }

    /// Current mode.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Current state.
    pub fn state(&self) -> GestureState {
        if self.draft.is_some() {
            GestureState::Active
        } else {
            GestureState::Idle
        }
    }

    /// True between a press and the matching release or leave.
    pub fn is_active(&self) -> bool {
        self.draft.is_some()
    }

    /// Switch modes. Rejected while a gesture is active; nothing changes then.
    pub fn set_mode(&mut self, mode: SelectionMode) -> Result<(), ModeLocked> {
        if self.is_active() {
            return Err(ModeLocked {
                active: self.mode,
                requested: mode,
            });
        }
        self.mode = mode;
        Ok(())
    }

    /// Current live shape, if a gesture is active.
    pub fn preview(&self) -> Option<LiveShape> {
        self.draft.as_ref().map(Draft::live)
    }

    /// Abandon the active gesture without producing a region.
    ///
    /// Returns whether there was one.
    pub fn cancel(&mut self) -> bool {
        self.draft.take().is_some()
    }

    /// Feed one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> GestureEvent {
        match event.kind {
            PointerKind::Down => self.pointer_down(event.position),
            PointerKind::Move => self.pointer_move(event.position),
            PointerKind::Up => self.pointer_up(event.position),
            PointerKind::Leave => self.pointer_leave(event.position),
        }
    }

    /// Press at `position`.
    pub fn pointer_down(&mut self, position: Point) -> GestureEvent {
        if self.is_active() {
            debug!("ignoring pointer down at {position:?}: gesture already active");
            return GestureEvent::Ignored;
        }
        if !position.is_finite() {
            debug!("ignoring pointer down at non-finite position {position:?}");
            return GestureEvent::Ignored;
        }
        let draft = Draft::start(self.mode, position);
        let shape = draft.live();
        self.draft = Some(draft);
        GestureEvent::Started(shape)
    }

    /// Move to `position`.
    pub fn pointer_move(&mut self, position: Point) -> GestureEvent {
        let Some(draft) = self.draft.as_mut() else {
            return GestureEvent::Ignored;
        };
        if !position.is_finite() {
            debug!("ignoring pointer move to non-finite position {position:?}");
            return GestureEvent::Ignored;
        }
        if draft.update(position, self.min_vertex_spacing) {
            GestureEvent::Preview(draft.live())
        } else {
            GestureEvent::Ignored
        }
    }

    /// Release; finishes the active gesture.
    pub fn pointer_up(&mut self, position: Point) -> GestureEvent {
        self.finish(PointerKind::Up, position)
    }

    /// Pointer left the surface; finishes the active gesture like a release.
    pub fn pointer_leave(&mut self, position: Point) -> GestureEvent {
        self.finish(PointerKind::Leave, position)
    }

    fn finish(&mut self, kind: PointerKind, position: Point) -> GestureEvent {
        match self.draft.take() {
            Some(draft) => GestureEvent::Finished(draft.finish()),
            None => {
                debug!("ignoring pointer {kind:?} at {position:?}: no active gesture");
                GestureEvent::Ignored
            }
        }
    }
}
