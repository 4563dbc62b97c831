// Copyright 2025 the Lasso Select Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Worker-thread executor.

use std::collections::VecDeque;
use std::fmt;
use std::io;
use std::thread::{self, JoinHandle};

use crossbeam_channel::{Receiver, Sender, TryRecvError, unbounded};
use log::{debug, error, info, warn};

use crate::executor::{Executor, Job};
use crate::result::SelectionResult;

/// Name of the worker thread.
pub const WORKER_THREAD_NAME: &str = "lasso-select-worker";

/// Runs jobs on a dedicated worker thread, at most one at a time.
///
/// Submitting while a job is outstanding first waits for that job and queues
/// its result, so results always come back in submission order. If the worker
/// goes away, outstanding jobs resolve to empty results for their generation.
pub struct Offload {
    requests: Option<Sender<Job>>,
    replies: Receiver<SelectionResult>,
    in_flight: Option<u64>,
    ready: VecDeque<SelectionResult>,
    worker: Option<JoinHandle<()>>,
}

impl fmt::Debug for Offload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Offload")
            .field("in_flight", &self.in_flight)
            .field("ready", &self.ready.len())
            .field("running", &self.worker.is_some())
            .finish_non_exhaustive()
    }
}

impl Offload {
    /// Spawn the worker thread.
    pub fn spawn() -> io::Result<Self> {
        let (requests, jobs) = unbounded::<Job>();
        let (results, replies) = unbounded::<SelectionResult>();
        let worker = thread::Builder::new()
            .name(WORKER_THREAD_NAME.to_owned())
            .spawn(move || worker_loop(&jobs, &results))?;
        info!("spawned {WORKER_THREAD_NAME}");
        Ok(Self {
            requests: Some(requests),
            replies,
            in_flight: None,
            ready: VecDeque::new(),
            worker: Some(worker),
        })
    }

    /// Block on the outstanding job, if any.
    fn wait_in_flight(&mut self) -> Option<SelectionResult> {
        let generation = self.in_flight.take()?;
        match self.replies.recv() {
            Ok(result) => Some(result),
            Err(_) => {
                error!("{WORKER_THREAD_NAME} disconnected; generation {generation} query yields nothing");
                Some(SelectionResult::empty(generation))
            }
        }
    }
}

fn worker_loop(jobs: &Receiver<Job>, results: &Sender<SelectionResult>) {
    for job in jobs {
        if results.send(job.run()).is_err() {
            break;
        }
    }
    debug!("{WORKER_THREAD_NAME} exiting");
}

impl Executor for Offload {
    fn submit(&mut self, job: Job) -> Option<SelectionResult> {
        if let Some(previous) = self.wait_in_flight() {
            self.ready.push_back(previous);
        }
        let generation = job.snapshot.generation();
        let sent = match &self.requests {
            Some(requests) => requests.send(job).is_ok(),
            None => false,
        };
        if sent {
            self.in_flight = Some(generation);
        } else {
            error!("{WORKER_THREAD_NAME} disconnected; generation {generation} query yields nothing");
            self.ready.push_back(SelectionResult::empty(generation));
        }
        None
    }

    fn poll(&mut self) -> Option<SelectionResult> {
        if let Some(result) = self.ready.pop_front() {
            return Some(result);
        }
        let generation = self.in_flight?;
        match self.replies.try_recv() {
            Ok(result) => {
                self.in_flight = None;
                Some(result)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.in_flight = None;
                error!("{WORKER_THREAD_NAME} disconnected; generation {generation} query yields nothing");
                Some(SelectionResult::empty(generation))
            }
        }
    }

    fn wait(&mut self) -> Option<SelectionResult> {
        self.ready.pop_front().or_else(|| self.wait_in_flight())
    }

    fn has_pending(&self) -> bool {
        self.in_flight.is_some() || !self.ready.is_empty()
    }
}

impl Drop for Offload {
    fn drop(&mut self) {
        // Closing the request channel ends the worker loop.
        self.requests = None;
        if let Some(worker) = self.worker.take() {
            if worker.join().is_err() {
                warn!("{WORKER_THREAD_NAME} panicked");
            } else {
                info!("{WORKER_THREAD_NAME} stopped");
            }
        }
    }
}
