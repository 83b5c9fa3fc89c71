//! Mining session: loaded event log plus the engine handle.

use std::path::Path;
use std::sync::Arc;

use plens_ingest::{ColumnMapping, load_events};
use plens_mining::MiningEngine;
use plens_model::{EventLog, GraphDescription};

use crate::error::ViewError;

/// Owns the loaded [`EventLog`] and the mining engine.
///
/// The log lives behind an `Arc` so a background mine worker can share
/// it without copying; it is immutable once loaded and replaced
/// wholesale by the next successful load.
pub struct MiningSession {
    engine: Arc<dyn MiningEngine>,
    log: Option<Arc<EventLog>>,
}

impl MiningSession {
    pub fn new(engine: Arc<dyn MiningEngine>) -> Self {
        Self { engine, log: None }
    }

    /// Ingest a new event log, replacing any previous one.
    ///
    /// Returns the new log's maximum observed activity frequency, which
    /// the caller uses to rebound the parameter state. On ingest
    /// failure the previous log (if any) is untouched.
    pub fn load(&mut self, path: &Path, columns: &ColumnMapping) -> Result<u64, ViewError> {
        let log = load_events(path, columns)?;
        let max_frequency = self.engine.max_observed_frequency(&log);
        self.log = Some(Arc::new(log));
        tracing::info!(max_frequency, "mining session loaded");
        Ok(max_frequency)
    }

    /// Mine a fresh graph with the given parameters.
    ///
    /// Requires a prior successful load; fails with
    /// [`ViewError::NotLoaded`] otherwise. Mining is a pure function of
    /// `(log, threshold, min_frequency)`.
    pub fn mine(
        &self,
        threshold: f64,
        min_frequency: u64,
    ) -> Result<GraphDescription, ViewError> {
        let log = self.log.as_ref().ok_or(ViewError::NotLoaded)?;
        Ok(self.engine.build_graph(log, threshold, min_frequency))
    }

    pub fn is_loaded(&self) -> bool {
        self.log.is_some()
    }

    /// Shared handle to the current log, for background mining.
    pub fn log(&self) -> Option<Arc<EventLog>> {
        self.log.clone()
    }

    pub fn engine(&self) -> Arc<dyn MiningEngine> {
        Arc::clone(&self.engine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plens_mining::HeuristicMiner;
    use std::io::Write;

    #[test]
    fn mine_before_load_is_a_contract_violation() {
        let session = MiningSession::new(Arc::new(HeuristicMiner::new()));
        assert!(matches!(
            session.mine(0.5, 1),
            Err(ViewError::NotLoaded)
        ));
    }

    #[test]
    fn load_returns_max_frequency_and_enables_mining() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            "case,activity,timestamp\n\
             c1,register,2024-01-01 08:00:00\n\
             c1,check,2024-01-01 09:00:00\n\
             c2,register,2024-01-02 08:00:00\n"
        )
        .unwrap();

        let mut session = MiningSession::new(Arc::new(HeuristicMiner::new()));
        let columns = ColumnMapping::new("timestamp", "case", "activity");
        let max = session.load(file.path(), &columns).unwrap();
        assert_eq!(max, 2);
        let graph = session.mine(0.0, 1).unwrap();
        assert_eq!(graph.node_count(), 2);
    }
}
