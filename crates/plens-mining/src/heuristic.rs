//! Heuristic dependency miner.
//!
//! Counts activity occurrences and direct successions across all
//! traces, derives a dependency strength per ordered activity pair,
//! and keeps nodes/edges that pass the frequency and threshold
//! filters. All counting goes through `BTreeMap` so output ordering is
//! independent of hash state.

use std::collections::BTreeMap;

use plens_model::{ActivityNode, DependencyEdge, EventLog, GraphDescription};

use crate::MiningEngine;

/// Default miner: classic heuristic-miner dependency measure.
#[derive(Debug, Default, Clone, Copy)]
pub struct HeuristicMiner;

impl HeuristicMiner {
    pub fn new() -> Self {
        Self
    }
}

fn activity_counts(log: &EventLog) -> BTreeMap<&str, u64> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for trace in log.traces() {
        for activity in &trace.activities {
            *counts.entry(activity.as_str()).or_default() += 1;
        }
    }
    counts
}

fn succession_counts(log: &EventLog) -> BTreeMap<(&str, &str), u64> {
    let mut counts: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    for trace in log.traces() {
        for pair in trace.activities.windows(2) {
            *counts
                .entry((pair[0].as_str(), pair[1].as_str()))
                .or_default() += 1;
        }
    }
    counts
}

/// Dependency strength of `a -> b`: `(|a>b| - |b>a|) / (|a>b| + |b>a| + 1)`.
fn dependency_strength(forward: u64, backward: u64) -> f64 {
    let forward = forward as f64;
    let backward = backward as f64;
    (forward - backward) / (forward + backward + 1.0)
}

impl MiningEngine for HeuristicMiner {
    fn max_observed_frequency(&self, log: &EventLog) -> u64 {
        activity_counts(log).values().copied().max().unwrap_or(0)
    }

    fn build_graph(
        &self,
        log: &EventLog,
        threshold: f64,
        min_frequency: u64,
    ) -> GraphDescription {
        let activities = activity_counts(log);
        let successions = succession_counts(log);

        let nodes: Vec<ActivityNode> = activities
            .iter()
            .filter(|&(_, &freq)| freq >= min_frequency)
            .map(|(&name, &freq)| ActivityNode {
                name: name.to_string(),
                frequency: freq,
            })
            .collect();

        let retained = |name: &str| {
            activities
                .get(name)
                .is_some_and(|&freq| freq >= min_frequency)
        };

        let edges: Vec<DependencyEdge> = successions
            .iter()
            .filter_map(|(&(source, target), &forward)| {
                if forward < min_frequency || !retained(source) || !retained(target) {
                    return None;
                }
                let backward = successions.get(&(target, source)).copied().unwrap_or(0);
                let strength = dependency_strength(forward, backward);
                (strength >= threshold).then(|| DependencyEdge {
                    source: source.to_string(),
                    target: target.to_string(),
                    frequency: forward,
                    strength,
                })
            })
            .collect();

        let graph = GraphDescription::new(nodes, edges);
        tracing::debug!(
            threshold,
            min_frequency,
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "dependency graph mined"
        );
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use plens_model::Trace;

    fn trace(case: &str, activities: &[&str]) -> Trace {
        Trace::new(case, activities.iter().map(|a| (*a).to_string()).collect())
    }

    fn sample_log() -> EventLog {
        EventLog::new(vec![
            trace("c1", &["register", "check", "approve"]),
            trace("c2", &["register", "check", "reject"]),
            trace("c3", &["register", "check", "approve"]),
        ])
    }

    #[test]
    fn max_frequency_is_highest_activity_count() {
        let miner = HeuristicMiner::new();
        assert_eq!(miner.max_observed_frequency(&sample_log()), 3);
        assert_eq!(miner.max_observed_frequency(&EventLog::new(vec![])), 0);
    }

    #[test]
    fn strength_follows_heuristic_measure() {
        // register>check happens 3 times, check>register never.
        assert_eq!(dependency_strength(3, 0), 0.75);
        // Symmetric successions cancel out.
        assert_eq!(dependency_strength(2, 2), 0.0);
    }

    #[test]
    fn min_frequency_filters_nodes_and_their_edges() {
        let miner = HeuristicMiner::new();
        let graph = miner.build_graph(&sample_log(), 0.0, 2);
        // approve (2) survives, reject (1) does not.
        assert!(graph.node("approve").is_some());
        assert!(graph.node("reject").is_none());
        assert!(
            graph
                .edges()
                .iter()
                .all(|e| e.source != "reject" && e.target != "reject")
        );
    }

    #[test]
    fn threshold_filters_weak_edges() {
        let log = EventLog::new(vec![trace("c1", &["a", "b", "a", "b"])]);
        let miner = HeuristicMiner::new();
        // a>b twice, b>a once: strength (2-1)/(2+1+1) = 0.25.
        let loose = miner.build_graph(&log, 0.2, 1);
        assert!(loose.edges().iter().any(|e| e.source == "a" && e.target == "b"));
        let strict = miner.build_graph(&log, 0.5, 1);
        assert!(strict.edges().iter().all(|e| !(e.source == "a" && e.target == "b")));
    }

    #[test]
    fn succession_below_min_frequency_is_dropped() {
        let miner = HeuristicMiner::new();
        // check>reject occurs once; with min_frequency 2 the edge goes
        // even though both endpoints could survive at min_frequency 1.
        let graph = miner.build_graph(&sample_log(), 0.0, 1);
        assert!(graph.edges().iter().any(|e| e.target == "reject"));
        let filtered = miner.build_graph(&sample_log(), 0.0, 2);
        assert!(filtered.edges().iter().all(|e| e.target != "reject"));
    }
}
