// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection orchestrator.

use std::sync::Arc;
use std::time::Instant;

use kurbo::Point;
use lasso_gesture::{Gesture, GestureEvent, LiveShape, PointerEvent, PointerKind, SelectionMode};
use lasso_region::Region;
use log::{info, warn};

use crate::config::SelectorConfig;
use crate::error::{SelectError, SelectResult};
use crate::executor::{Executor, Inline, Job};
use crate::offload::Offload;
use crate::result::SelectionResult;
use crate::snapshot::Snapshot;
use crate::store::PointStore;

/// What a pointer event did to the selector.
#[derive(Clone, Debug, PartialEq)]
pub enum SelectorEvent {
    /// Nothing changed.
    Ignored,
    /// A gesture began; draw this shape.
    Started(LiveShape),
    /// The live shape changed.
    Preview(LiveShape),
    /// The gesture ended and was answered on the caller's thread.
    Finished(SelectionResult),
    /// The gesture ended and the query went to the worker; collect it with
    /// [`Selector::poll`] or [`Selector::wait`]. Carries the queried generation.
    Submitted(u64),
}

#[derive(Debug)]
enum Worker {
    /// Not needed yet.
    Idle,
    Running(Offload),
    /// Spawning failed once; stay inline.
    Unavailable,
}

/// Owns the point snapshot, the gesture, and the query executors.
///
/// ```
/// use kurbo::Point;
/// use lasso_select::{PointStore, ScreenPoint, SelectionMode, Selector, SelectorConfig, SelectorEvent};
///
/// let mut selector = Selector::new(SelectorConfig::default()).unwrap();
/// selector.set_point_store(PointStore::new([
///     ScreenPoint::new("a", 0.0, 0.0, 1.0, 10.0, 10.0),
///     ScreenPoint::new("b", 0.0, 0.0, 1.0, 90.0, 90.0),
/// ]));
/// selector.set_mode(SelectionMode::Rectangle).unwrap();
/// selector.on_pointer_down(Point::new(0.0, 0.0));
/// selector.on_pointer_move(Point::new(50.0, 50.0));
/// let SelectorEvent::Finished(result) = selector.on_pointer_up(Point::new(50.0, 50.0)) else {
///     unreachable!();
/// };
/// assert!(result.contains("a"));
/// assert!(!result.contains("b"));
/// assert!(selector.is_current(&result));
/// ```
#[derive(Debug)]
pub struct Selector {
    config: SelectorConfig,
    gesture: Gesture,
    snapshot: Arc<Snapshot>,
    inline: Inline,
    worker: Worker,
}

impl Selector {
    /// Create a selector over an empty store (generation 0).
    pub fn new(config: SelectorConfig) -> SelectResult<Self> {
        config.validate()?;
        let gesture =
            Gesture::new(SelectionMode::default()).with_min_vertex_spacing(config.min_vertex_spacing);
        let snapshot = Arc::new(Snapshot::build(0, PointStore::default(), config.cell_size));
        Ok(Self {
            config,
            gesture,
            snapshot,
            inline: Inline,
            worker: Worker::Idle,
        })
    }

    /// Configuration in use.
    pub fn config(&self) -> &SelectorConfig {
        &self.config
    }

    /// Replace the point store and rebuild the index. Returns the new generation.
    ///
    /// An active gesture is left alone; it will query the new store.
    pub fn set_point_store(&mut self, store: PointStore) -> u64 {
        let started = Instant::now();
        let generation = self.snapshot.generation() + 1;
        let snapshot = Snapshot::build(generation, store, self.config.cell_size);
        info!(
            "indexed generation {generation}: {} points in {} cells of {} ({} rows dropped) in {:?}",
            snapshot.store().len(),
            snapshot.occupied_cells(),
            snapshot.cell_size(),
            snapshot.store().dropped().total(),
            started.elapsed()
        );
        self.snapshot = Arc::new(snapshot);
        generation
    }

    /// Current store generation.
    pub fn generation(&self) -> u64 {
        self.snapshot.generation()
    }

    /// Current point store.
    pub fn store(&self) -> &PointStore {
        self.snapshot.store()
    }

    /// Current snapshot, shareable with other threads.
    pub fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot)
    }

    /// Whether `result` was computed against the current store.
    pub fn is_current(&self, result: &SelectionResult) -> bool {
        result.generation() == self.snapshot.generation()
    }

    /// Current gesture mode.
    pub fn mode(&self) -> SelectionMode {
        self.gesture.mode()
    }

    /// Switch gesture mode; rejected while a gesture is active.
    pub fn set_mode(&mut self, mode: SelectionMode) -> SelectResult<()> {
        self.gesture
            .set_mode(mode)
            .map_err(|locked| SelectError::GestureActive {
                mode: locked.active,
            })
    }

    /// True between pointer down and the matching up or leave.
    pub fn is_active(&self) -> bool {
        self.gesture.is_active()
    }

    /// Shape of the active gesture, for drawing.
    pub fn live_shape(&self) -> Option<LiveShape> {
        self.gesture.preview()
    }

    /// Abandon the active gesture without selecting anything.
    pub fn cancel_gesture(&mut self) -> bool {
        self.gesture.cancel()
    }

    /// Feed one pointer event.
    pub fn handle(&mut self, event: PointerEvent) -> SelectorEvent {
        match self.gesture.handle(event) {
            GestureEvent::Ignored => SelectorEvent::Ignored,
            GestureEvent::Started(shape) => SelectorEvent::Started(shape),
            GestureEvent::Preview(shape) => SelectorEvent::Preview(shape),
            GestureEvent::Finished(region) => self.dispatch(region),
        }
    }

    /// Pointer pressed.
    pub fn on_pointer_down(&mut self, position: Point) -> SelectorEvent {
        self.handle(PointerEvent::new(PointerKind::Down, position))
    }

    /// Pointer moved.
    pub fn on_pointer_move(&mut self, position: Point) -> SelectorEvent {
        self.handle(PointerEvent::new(PointerKind::Move, position))
    }

    /// Pointer released.
    pub fn on_pointer_up(&mut self, position: Point) -> SelectorEvent {
        self.handle(PointerEvent::new(PointerKind::Up, position))
    }

    /// Pointer left the surface.
    pub fn on_pointer_leave(&mut self, position: Point) -> SelectorEvent {
        self.handle(PointerEvent::new(PointerKind::Leave, position))
    }

    /// Select with `region` against the current store, on this thread.
    pub fn select(&self, region: &Region) -> SelectionResult {
        self.snapshot.select(region)
    }

    /// Next offloaded result, if one is ready.
    pub fn poll(&mut self) -> Option<SelectionResult> {
        match &mut self.worker {
            Worker::Running(offload) => offload.poll(),
            Worker::Idle | Worker::Unavailable => None,
        }
    }

    /// Next offloaded result, blocking until it is ready; `None` if nothing is pending.
    pub fn wait(&mut self) -> Option<SelectionResult> {
        match &mut self.worker {
            Worker::Running(offload) => offload.wait(),
            Worker::Idle | Worker::Unavailable => None,
        }
    }

    /// True if an offloaded result has not been collected yet.
    pub fn has_pending(&self) -> bool {
        match &self.worker {
            Worker::Running(offload) => offload.has_pending(),
            Worker::Idle | Worker::Unavailable => false,
        }
    }

    fn dispatch(&mut self, region: Region) -> SelectorEvent {
        let job = Job {
            snapshot: Arc::clone(&self.snapshot),
            region,
        };
        let generation = self.snapshot.generation();
        let executor = self.executor_for(self.snapshot.store().len());
        match executor.submit(job) {
            Some(result) => SelectorEvent::Finished(result),
            None => SelectorEvent::Submitted(generation),
        }
    }

    fn executor_for(&mut self, len: usize) -> &mut dyn Executor {
        if !self.config.offloads(len) {
            return &mut self.inline;
        }
        if matches!(self.worker, Worker::Idle) {
            self.worker = match Offload::spawn() {
                Ok(offload) => Worker::Running(offload),
                Err(e) => {
                    warn!("cannot spawn selection worker, running queries inline: {e}");
                    Worker::Unavailable
                }
            };
        }
        match &mut self.worker {
            Worker::Running(offload) => offload,
            Worker::Idle | Worker::Unavailable => &mut self.inline,
        }
    }
}
