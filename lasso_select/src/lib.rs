// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lasso Select: interactive spatial selection over large 2D point sets.
//!
//! Lasso Select is the part of a scatterplot or map view that answers "which points did the
//! user just circle?".
//!
//! - Holds an immutable [`PointStore`] snapshot and a uniform grid index over its screen positions.
//! - Drives a lasso, rectangle or circle gesture from raw pointer events.
//! - On release, narrows candidates with the grid and filters them with the exact region test.
//!
//! ## Where this fits
//!
//! The crates split the work the same way a rendering stack splits scene, picking and input.
//! - [`lasso_index`]: build-once point index (grid or flat scan).
//! - [`lasso_region`]: regions and exact containment.
//! - [`lasso_gesture`]: pointer events to regions.
//! - This crate: owns the snapshot, runs queries, and tags results with the store generation.
//!
//! Rendering, axes, and the data-to-screen projection of a real chart live elsewhere. A simple
//! linear [`ScreenMapping`] is provided for rows that arrive without screen coordinates.
//!
//! ## API overview
//!
//! - [`Selector`]: the orchestrator. Feed it pointer events and point stores.
//! - [`SelectorConfig`]: cell size, lasso vertex spacing, offload threshold. Loadable from JSON.
//! - [`SelectionResult`]: selected points, the generation they came from, and query statistics.
//! - [`Snapshot`]: an indexed store, shared with the worker thread through `Arc`.
//! - [`Executor`]: [`Inline`] or [`Offload`] query execution.
//!
//! Key operations:
//! - [`Selector::set_point_store`] → new generation; the index is rebuilt from scratch.
//! - [`Selector::handle`] (or `on_pointer_*`) → [`SelectorEvent`].
//! - [`Selector::poll`] / [`Selector::wait`] for results computed on the worker.
//! - [`Selector::is_current`] to drop results for a store that has since been replaced.
//!
//! ## Offloading
//!
//! Stores with at least [`SelectorConfig::offload_threshold`] points are queried on a worker
//! thread so the pointer-up handler returns immediately. At most one query is in flight; a new
//! gesture finishing while one is outstanding waits for it first. If the worker cannot be
//! started, queries run inline instead.
//!
//! ### Minimal usage
//!
//! ```
//! use kurbo::Point;
//! use lasso_select::{PointStore, ScreenPoint, Selector, SelectorConfig, SelectorEvent};
//!
//! let mut selector = Selector::new(SelectorConfig::default()).unwrap();
//! selector.set_point_store(PointStore::new([
//!     ScreenPoint::new("a", 0.0, 0.0, 0.5, 50.0, 50.0),
//!     ScreenPoint::new("b", 0.0, 0.0, 0.5, 60.0, 60.0),
//!     ScreenPoint::new("c", 0.0, 0.0, 0.5, 500.0, 500.0),
//! ]));
//!
//! // Lasso is the default mode.
//! selector.on_pointer_down(Point::new(0.0, 0.0));
//! for p in [(100.0, 0.0), (100.0, 100.0), (0.0, 100.0)] {
//!     selector.on_pointer_move(Point::from(p));
//! }
//! let SelectorEvent::Finished(result) = selector.on_pointer_up(Point::new(0.0, 100.0)) else {
//!     unreachable!();
//! };
//! let mut ids: Vec<_> = result.ids().map(|id| id.as_str()).collect();
//! ids.sort_unstable();
//! assert_eq!(ids, ["a", "b"]);
//! ```
//!
//! Logging goes through the `log` facade; install a logger in the binary to see index
//! rebuilds, dropped rows, and per-query statistics.

pub mod config;
pub mod error;
pub mod executor;
pub mod offload;
pub mod result;
pub mod selector;
pub mod snapshot;
pub mod store;

pub use config::{DEFAULT_OFFLOAD_THRESHOLD, SelectorConfig};
pub use error::{SelectError, SelectResult};
pub use executor::{Executor, Inline, Job};
pub use lasso_gesture::{LiveShape, PointerEvent, PointerKind, SelectionMode};
pub use lasso_region::Region;
pub use offload::Offload;
pub use result::{SelectionResult, SelectionStats};
pub use selector::{Selector, SelectorEvent};
pub use snapshot::Snapshot;
pub use store::{
    DataBounds, DataPoint, DroppedRows, LinearScale, PointId, PointStore, ScreenMapping,
    ScreenPoint,
};

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Point;
    use std::collections::BTreeSet;
    use std::sync::Arc;

    // Simple deterministic RNG (xorshift64*)
    struct Rng(u64);
    impl Rng {
        fn new(seed: u64) -> Self {
            Self(seed)
        }
        fn next_u64(&mut self) -> u64 {
            let mut x = self.0;
            x ^= x >> 12;
            x ^= x << 25;
            x ^= x >> 27;
            self.0 = x;
            x.wrapping_mul(0x2545_F491_4F6C_DD1D)
        }
        fn next_f64(&mut self) -> f64 {
            (self.next_u64() >> 11) as f64 / (1_u64 << 53) as f64
        }
        fn range(&mut self, lo: f64, hi: f64) -> f64 {
            lo + (hi - lo) * self.next_f64()
        }
        fn below(&mut self, n: u64) -> u64 {
            self.next_u64() % n
        }
    }

    fn random_store(rng: &mut Rng, n: usize) -> PointStore {
        PointStore::new((0..n).map(|i| {
            ScreenPoint::new(
                format!("p{i}"),
                0.0,
                0.0,
                rng.next_f64(),
                rng.range(-50.0, 1050.0),
                rng.range(-50.0, 850.0),
            )
        }))
    }

    fn random_region(rng: &mut Rng) -> Region {
        match rng.below(3) {
            0 => Region::Rectangle {
                corner1: Point::new(rng.range(0.0, 1000.0), rng.range(0.0, 800.0)),
                corner2: Point::new(rng.range(0.0, 1000.0), rng.range(0.0, 800.0)),
            },
            1 => Region::Circle {
                center: Point::new(rng.range(0.0, 1000.0), rng.range(0.0, 800.0)),
                radius: rng.range(0.0, 300.0),
            },
            _ => {
                let n = 3 + rng.below(12) as usize;
                Region::Polygon(
                    (0..n)
                        .map(|_| Point::new(rng.range(0.0, 1000.0), rng.range(0.0, 800.0)))
                        .collect(),
                )
            }
        }
    }

    fn id_set(result: &SelectionResult) -> BTreeSet<String> {
        result.ids().map(|id| id.as_str().to_owned()).collect()
    }

    fn inline() -> Selector {
        Selector::new(SelectorConfig {
            offload_threshold: None,
            ..SelectorConfig::default()
        })
        .unwrap()
    }

    #[test]
    fn rectangle_drag_selects_points_inside() {
        let mut s = inline();
        s.set_point_store(PointStore::new([
            ScreenPoint::new("a", 1.0, 2.0, 0.1, 50.0, 50.0),
            ScreenPoint::new("b", 3.0, 4.0, 0.2, 150.0, 50.0),
        ]));
        s.set_mode(SelectionMode::Rectangle).unwrap();
        s.handle(PointerEvent::new(PointerKind::Down, (0.0, 0.0)));
        s.handle(PointerEvent::new(PointerKind::Move, (100.0, 100.0)));
        let SelectorEvent::Finished(r) = s.handle(PointerEvent::new(PointerKind::Up, (100.0, 100.0)))
        else {
            panic!("expected an inline result");
        };
        assert_eq!(id_set(&r), BTreeSet::from(["a".to_owned()]));
        assert_eq!(r.points()[0].score, 0.1);
    }

    #[test]
    fn lasso_around_two_points() {
        let mut s = inline();
        s.set_point_store(PointStore::new([
            ScreenPoint::new("a", 0.0, 0.0, 0.0, 20.0, 20.0),
            ScreenPoint::new("b", 0.0, 0.0, 0.0, 80.0, 20.0),
            ScreenPoint::new("c", 0.0, 0.0, 0.0, 50.0, 80.0),
        ]));
        s.on_pointer_down(Point::new(0.0, 0.0));
        s.on_pointer_move(Point::new(100.0, 0.0));
        s.on_pointer_move(Point::new(100.0, 40.0));
        s.on_pointer_move(Point::new(0.0, 40.0));
        let SelectorEvent::Finished(r) = s.on_pointer_up(Point::new(0.0, 40.0)) else {
            panic!("expected an inline result");
        };
        assert_eq!(
            id_set(&r),
            BTreeSet::from(["a".to_owned(), "b".to_owned()])
        );
    }

    #[test]
    fn rectangle_gesture_end_to_end() {
        let mut s = Selector::new(SelectorConfig::default()).unwrap();
        s.set_point_store(PointStore::new([
            ScreenPoint::new("a", 0.0, 0.0, 0.0, 0.0, 0.0),
            ScreenPoint::new("b", 0.0, 0.0, 0.0, 5.0, 5.0),
            ScreenPoint::new("c", 0.0, 0.0, 0.0, 100.0, 100.0),
        ]));
        s.set_mode(SelectionMode::Rectangle).unwrap();
        assert!(matches!(
            s.on_pointer_down(Point::new(-1.0, -1.0)),
            SelectorEvent::Started(_)
        ));
        assert!(matches!(
            s.on_pointer_move(Point::new(6.0, 6.0)),
            SelectorEvent::Preview(_)
        ));
        let SelectorEvent::Finished(r) = s.on_pointer_up(Point::new(6.0, 6.0)) else {
            panic!("expected an inline result");
        };
        assert_eq!(
            id_set(&r),
            BTreeSet::from(["a".to_owned(), "b".to_owned()])
        );
        assert!(s.is_current(&r));
        assert!(!s.is_active());
    }

    #[test]
    fn circle_edge_on_a_cell_boundary_is_found() {
        let center = Point::new(84.98541144946992, 84.98541144946992);
        let radius = 278.130981704198;
        let edge = (center.x + radius).next_up();
        let store = PointStore::new([
            ScreenPoint::new("edge", 0.0, 0.0, 0.0, edge, center.y),
            ScreenPoint::new("center", 0.0, 0.0, 0.0, center.x, center.y),
        ]);
        // A cell boundary exactly at the point puts it one cell past `center.x + radius`.
        let snapshot = Snapshot::new(1, store, edge).unwrap();
        let region = Region::Circle { center, radius };
        assert_eq!(
            id_set(&snapshot.select(&region)),
            id_set(&snapshot.select_exhaustive(&region))
        );
    }

    #[test]
    fn results_are_subsets_of_the_store() {
        let mut rng = Rng::new(0x5EED_0001);
        let store = random_store(&mut rng, 2_000);
        let all: BTreeSet<String> = store.points().iter().map(|p| p.id.to_string()).collect();
        let mut s = inline();
        s.set_point_store(store);
        for _ in 0..50 {
            let r = s.select(&random_region(&mut rng));
            let ids = id_set(&r);
            assert_eq!(ids.len(), r.len(), "duplicate ids in result");
            assert!(ids.is_subset(&all));
        }
    }

    #[test]
    fn index_matches_exhaustive_scan() {
        let mut rng = Rng::new(0xC0FF_EE00_1234_5678);
        for &n in &[1_usize, 7, 64, 500, 3_000, 10_000] {
            let snapshot = Snapshot::new(1, random_store(&mut rng, n), 50.0).unwrap();
            for _ in 0..40 {
                let region = random_region(&mut rng);
                let fast = snapshot.select(&region);
                let slow = snapshot.select_exhaustive(&region);
                assert_eq!(
                    id_set(&fast),
                    id_set(&slow),
                    "n={n}, region={region:?}"
                );
                assert!(fast.stats().candidates <= n);
            }
        }
    }

    #[test]
    fn cell_size_does_not_change_answers() {
        let mut rng = Rng::new(42);
        let store = random_store(&mut rng, 1_500);
        let coarse = Snapshot::new(1, store.clone(), 400.0).unwrap();
        let fine = Snapshot::new(1, store, 7.5).unwrap();
        for _ in 0..30 {
            let region = random_region(&mut rng);
            assert_eq!(id_set(&coarse.select(&region)), id_set(&fine.select(&region)));
        }
    }

    #[test]
    fn rebuilding_the_same_store_is_idempotent() {
        let mut rng = Rng::new(7);
        let store = random_store(&mut rng, 4_000);
        let regions: Vec<Region> = (0..20).map(|_| random_region(&mut rng)).collect();
        let mut s = inline();
        s.set_point_store(store.clone());
        let before: Vec<_> = regions.iter().map(|r| id_set(&s.select(r))).collect();
        s.set_point_store(store);
        let after: Vec<_> = regions.iter().map(|r| id_set(&s.select(r))).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn offloaded_results_match_inline() {
        let mut rng = Rng::new(99);
        let store = random_store(&mut rng, 5_000);
        let mut direct = inline();
        let mut offloaded = Selector::new(SelectorConfig {
            offload_threshold: Some(1_000),
            ..SelectorConfig::default()
        })
        .unwrap();
        direct.set_point_store(store.clone());
        offloaded.set_point_store(store);
        direct.set_mode(SelectionMode::Circle).unwrap();
        offloaded.set_mode(SelectionMode::Circle).unwrap();

        let mut expected = Vec::new();
        for _ in 0..6 {
            let center = Point::new(rng.range(0.0, 1000.0), rng.range(0.0, 800.0));
            let edge = center + kurbo::Vec2::new(rng.range(10.0, 200.0), 0.0);
            for s in [&mut direct, &mut offloaded] {
                s.on_pointer_down(center);
                s.on_pointer_move(edge);
            }
            let SelectorEvent::Finished(r) = direct.on_pointer_up(edge) else {
                panic!("inline selector should answer directly");
            };
            expected.push(id_set(&r));
            assert_eq!(offloaded.on_pointer_up(edge), SelectorEvent::Submitted(1));
        }
        let mut got = Vec::new();
        while let Some(r) = offloaded.wait() {
            assert!(offloaded.is_current(&r));
            got.push(id_set(&r));
        }
        assert_eq!(got, expected);
    }

    #[test]
    fn results_from_a_replaced_store_are_stale() {
        let mut s = Selector::new(SelectorConfig {
            offload_threshold: Some(0),
            ..SelectorConfig::default()
        })
        .unwrap();
        s.set_point_store(PointStore::new([ScreenPoint::new(
            "a", 0.0, 0.0, 0.0, 5.0, 5.0,
        )]));
        s.set_mode(SelectionMode::Rectangle).unwrap();
        s.on_pointer_down(Point::new(0.0, 0.0));
        s.on_pointer_move(Point::new(10.0, 10.0));
        assert_eq!(
            s.on_pointer_up(Point::new(10.0, 10.0)),
            SelectorEvent::Submitted(1)
        );
        s.set_point_store(PointStore::default());
        let r = s.wait().unwrap();
        assert_eq!(r.generation(), 1);
        assert!(r.contains("a"));
        assert!(!s.is_current(&r));
    }

    #[test]
    fn snapshot_outlives_store_replacement() {
        let mut s = inline();
        s.set_point_store(PointStore::new([ScreenPoint::new(
            "a", 0.0, 0.0, 0.0, 5.0, 5.0,
        )]));
        let old: Arc<Snapshot> = s.snapshot();
        s.set_point_store(PointStore::default());
        let region = Region::Circle {
            center: Point::new(5.0, 5.0),
            radius: 1.0,
        };
        assert!(old.select(&region).contains("a"));
        assert!(s.select(&region).is_empty());
    }
}
