// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Where queries run: on the caller's thread or on a worker.

use std::sync::Arc;

use lasso_region::Region;

use crate::result::SelectionResult;
use crate::snapshot::Snapshot;

/// One query: a finished region against a snapshot.
#[derive(Clone, Debug)]
pub struct Job {
    /// Snapshot to query.
    pub snapshot: Arc<Snapshot>,
    /// Region to select with.
    pub region: Region,
}

impl Job {
    /// Run the query on the current thread.
    pub fn run(&self) -> SelectionResult {
        self.snapshot.select(&self.region)
    }
}

/// A strategy for running [`Job`]s.
///
/// Results come back either directly from [`Executor::submit`] or later
/// through [`Executor::poll`] / [`Executor::wait`], in submission order.
pub trait Executor {
    /// Start `job`. Returns the result if it completed synchronously.
    fn submit(&mut self, job: Job) -> Option<SelectionResult>;

    /// Next completed result, without blocking.
    fn poll(&mut self) -> Option<SelectionResult>;

    /// Next completed result, blocking until the outstanding job finishes.
    ///
    /// Returns `None` if nothing is pending.
    fn wait(&mut self) -> Option<SelectionResult>;

    /// True if a submitted job has not been collected yet.
    fn has_pending(&self) -> bool;
}

/// Runs every job synchronously inside [`Executor::submit`].
#[derive(Copy, Clone, Debug, Default)]
pub struct Inline;

impl Executor for Inline {
    fn submit(&mut self, job: Job) -> Option<SelectionResult> {
        Some(job.run())
    }

    fn poll(&mut self) -> Option<SelectionResult> {
        None
    }

    fn wait(&mut self) -> Option<SelectionResult> {
        None
    }

    fn has_pending(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{PointStore, ScreenPoint};
    use kurbo::Point;

    #[test]
    fn inline_completes_on_submit() {
        let store = PointStore::new([ScreenPoint::new("a", 0.0, 0.0, 0.0, 5.0, 5.0)]);
        let snapshot = Arc::new(Snapshot::new(7, store, 50.0).unwrap());
        let mut ex = Inline;
        let job = Job {
            snapshot,
            region: Region::Circle {
                center: Point::new(0.0, 0.0),
                radius: 10.0,
            },
        };
        let r = ex.submit(job).unwrap();
        assert_eq!(r.generation(), 7);
        assert!(r.contains("a"));
        assert!(!ex.has_pending());
        assert!(ex.poll().is_none());
        assert!(ex.wait().is_none());
    }
}
