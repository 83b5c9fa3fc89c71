//! Mining engine for Process Lens.
//!
//! Exposes the [`MiningEngine`] seam the view controller depends on,
//! plus the default [`HeuristicMiner`] implementation.

pub mod heuristic;

pub use heuristic::HeuristicMiner;

use plens_model::{EventLog, GraphDescription};

/// The mining boundary.
///
/// Mining must be a pure function of `(log, threshold, min_frequency)`:
/// two calls with identical inputs yield structurally identical output.
/// The controller relies on that for caching, and tests rely on it for
/// call-count assertions against mock engines.
pub trait MiningEngine: Send + Sync {
    /// Highest activity occurrence count observed in the log.
    fn max_observed_frequency(&self, log: &EventLog) -> u64;

    /// Derive the dependency graph for the given parameters.
    ///
    /// `threshold` is the minimum dependency strength in [0, 1] an edge
    /// must reach; `min_frequency` is the minimum occurrence count for
    /// activities and successions.
    fn build_graph(&self, log: &EventLog, threshold: f64, min_frequency: u64)
    -> GraphDescription;
}
