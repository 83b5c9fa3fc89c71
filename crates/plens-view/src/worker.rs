//! Background mine worker.
//!
//! One worker thread receives sequence-numbered mine requests over a
//! channel and sends completed graphs back. Requests are processed in
//! submission order on a single thread, so outcomes arrive in request
//! order; the controller still checks the sequence number and discards
//! any outcome that a newer request has superseded. In-flight mines are
//! never cancelled, only their results dropped.

use std::sync::Arc;
use std::thread::JoinHandle;

use crossbeam_channel::{Receiver, Sender, unbounded};

use plens_mining::MiningEngine;
use plens_model::{EventLog, GraphDescription};

struct MineRequest {
    seq: u64,
    log: Arc<EventLog>,
    threshold: f64,
    min_frequency: u64,
}

/// A completed mine, tagged with the request it answers.
#[derive(Debug)]
pub struct MineOutcome {
    pub seq: u64,
    pub threshold: f64,
    pub min_frequency: u64,
    pub graph: GraphDescription,
}

/// Handle to the worker thread.
///
/// Dropping the handle closes the request channel; the thread drains
/// what it has and exits.
pub struct MineWorker {
    request_tx: Option<Sender<MineRequest>>,
    outcome_rx: Receiver<MineOutcome>,
    next_seq: u64,
    superseded_through: u64,
    handle: Option<JoinHandle<()>>,
}

impl MineWorker {
    /// Spawn the worker thread around a shared mining engine.
    pub fn spawn(engine: Arc<dyn MiningEngine>) -> Self {
        let (request_tx, request_rx) = unbounded::<MineRequest>();
        let (outcome_tx, outcome_rx) = unbounded::<MineOutcome>();

        let handle = std::thread::spawn(move || {
            while let Ok(request) = request_rx.recv() {
                let graph =
                    engine.build_graph(&request.log, request.threshold, request.min_frequency);
                let outcome = MineOutcome {
                    seq: request.seq,
                    threshold: request.threshold,
                    min_frequency: request.min_frequency,
                    graph,
                };
                if outcome_tx.send(outcome).is_err() {
                    break;
                }
            }
        });

        Self {
            request_tx: Some(request_tx),
            outcome_rx,
            next_seq: 0,
            superseded_through: 0,
            handle: Some(handle),
        }
    }

    /// Queue a mine request; returns its sequence number.
    pub fn submit(&mut self, log: Arc<EventLog>, threshold: f64, min_frequency: u64) -> u64 {
        self.next_seq += 1;
        let seq = self.next_seq;
        // The worker only hangs up when the handle is dropped, so a
        // send failure cannot be observed here.
        if let Some(tx) = &self.request_tx {
            let _ = tx.send(MineRequest {
                seq,
                log,
                threshold,
                min_frequency,
            });
        }
        seq
    }

    /// Drain completed mines without blocking.
    pub fn try_outcomes(&self) -> Vec<MineOutcome> {
        self.outcome_rx.try_iter().collect()
    }

    /// Block until the outcome for `seq` (or a later one) arrives.
    /// Returns everything drained along the way. Test and CLI helper;
    /// interactive front ends poll [`Self::try_outcomes`] instead.
    pub fn wait_for(&self, seq: u64) -> Vec<MineOutcome> {
        let mut outcomes = Vec::new();
        while outcomes.last().is_none_or(|o: &MineOutcome| o.seq < seq) {
            match self.outcome_rx.recv() {
                Ok(outcome) => outcomes.push(outcome),
                Err(_) => break,
            }
        }
        outcomes
    }

    /// Mark every request issued so far as stale. Their outcomes keep
    /// arriving (in-flight mines are not cancelled) but must be
    /// discarded: they were computed against state that no longer
    /// exists, such as a log that has since been replaced.
    pub fn supersede_pending(&mut self) {
        self.superseded_through = self.next_seq;
    }

    /// Highest sequence number whose outcome is stale.
    pub fn superseded_through(&self) -> u64 {
        self.superseded_through
    }

    /// Latest sequence number issued so far.
    pub fn latest_seq(&self) -> u64 {
        self.next_seq
    }
}

impl Drop for MineWorker {
    fn drop(&mut self) {
        // Close the request channel first so the thread can exit.
        self.request_tx = None;
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}
