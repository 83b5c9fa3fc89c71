//! Ingested event-log types.
//!
//! An [`EventLog`] is the immutable output of ingestion: one [`Trace`]
//! per case, each holding the case's activity sequence already ordered
//! by event timestamp. The mining engine consumes it read-only; a new
//! load replaces the whole log.

use serde::{Deserialize, Serialize};

/// One case: its identifier and the time-ordered activity sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace {
    /// Case identifier from the source data.
    pub case_id: String,
    /// Activity names in event-time order.
    pub activities: Vec<String>,
}

impl Trace {
    pub fn new(case_id: impl Into<String>, activities: Vec<String>) -> Self {
        Self {
            case_id: case_id.into(),
            activities,
        }
    }
}

/// Immutable ingested dataset of case/activity/time records.
///
/// Traces are sorted by case id at construction so two ingests of the
/// same source produce identical logs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventLog {
    traces: Vec<Trace>,
}

impl EventLog {
    /// Build a log from traces, sorting them by case id.
    pub fn new(mut traces: Vec<Trace>) -> Self {
        traces.sort_by(|a, b| a.case_id.cmp(&b.case_id));
        Self { traces }
    }

    pub fn traces(&self) -> &[Trace] {
        &self.traces
    }

    pub fn case_count(&self) -> usize {
        self.traces.len()
    }

    /// Total number of events across all cases.
    pub fn event_count(&self) -> usize {
        self.traces.iter().map(|t| t.activities.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.traces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn traces_sorted_by_case_id() {
        let log = EventLog::new(vec![
            Trace::new("c2", vec!["a".into()]),
            Trace::new("c1", vec!["b".into(), "c".into()]),
        ]);
        assert_eq!(log.traces()[0].case_id, "c1");
        assert_eq!(log.case_count(), 2);
        assert_eq!(log.event_count(), 3);
    }
}
