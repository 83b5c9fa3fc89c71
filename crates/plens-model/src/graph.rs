//! Mined dependency-graph description.
//!
//! A [`GraphDescription`] is the declarative node/edge output of one
//! mining call: activities with occurrence counts, directed edges with
//! succession counts and derived dependency strength. It is an
//! immutable snapshot; a new mine produces a new description. Nodes and
//! edges are kept in sorted order so structurally equal graphs compare
//! equal field-for-field.

use serde::{Deserialize, Serialize};

/// One activity retained by the miner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActivityNode {
    /// Activity name as it appeared in the event log.
    pub name: String,
    /// Occurrence count across all cases.
    pub frequency: u64,
}

/// One directed dependency retained by the miner.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DependencyEdge {
    pub source: String,
    pub target: String,
    /// Direct-succession count (source immediately followed by target).
    pub frequency: u64,
    /// Dependency strength in [-1, 1]; higher means source more
    /// reliably precedes target than the reverse.
    pub strength: f64,
}

/// Declarative node/edge representation of mined process dependencies.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphDescription {
    nodes: Vec<ActivityNode>,
    edges: Vec<DependencyEdge>,
}

impl GraphDescription {
    /// Build a description, sorting nodes by name and edges by
    /// (source, target) for deterministic ordering.
    pub fn new(mut nodes: Vec<ActivityNode>, mut edges: Vec<DependencyEdge>) -> Self {
        nodes.sort_by(|a, b| a.name.cmp(&b.name));
        edges.sort_by(|a, b| (&a.source, &a.target).cmp(&(&b.source, &b.target)));
        Self { nodes, edges }
    }

    pub fn nodes(&self) -> &[ActivityNode] {
        &self.nodes
    }

    pub fn edges(&self) -> &[DependencyEdge] {
        &self.edges
    }

    /// Look up a node by activity name.
    pub fn node(&self, name: &str) -> Option<&ActivityNode> {
        self.nodes
            .binary_search_by(|n| n.name.as_str().cmp(name))
            .ok()
            .map(|idx| &self.nodes[idx])
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
