//! DOT source generation.
//!
//! Produces deterministic Graphviz DOT text from a graph description:
//! nodes labeled with their frequency, edges labeled with the
//! succession count and drawn thicker the stronger the dependency.
//! The description is validated first so a malformed graph fails here
//! rather than inside the external renderer.

use std::fmt::Write as _;

use plens_model::GraphDescription;

use crate::error::RenderError;

/// Pen width range for edges; strength in [0, 1] maps linearly onto it.
const MIN_PEN_WIDTH: f64 = 1.0;
const MAX_PEN_WIDTH: f64 = 4.0;

fn escape(name: &str) -> String {
    name.replace('\\', "\\\\").replace('"', "\\\"")
}

fn quote(name: &str) -> String {
    format!("\"{}\"", escape(name))
}

fn pen_width(strength: f64) -> f64 {
    MIN_PEN_WIDTH + strength.clamp(0.0, 1.0) * (MAX_PEN_WIDTH - MIN_PEN_WIDTH)
}

/// Validate a description and emit its DOT source.
///
/// Fails with [`RenderError::EmptyGraph`] when there are no nodes and
/// [`RenderError::DanglingEdge`] when an edge references an activity
/// missing from the node list.
pub fn dot_source(graph: &GraphDescription) -> Result<String, RenderError> {
    if graph.is_empty() {
        return Err(RenderError::EmptyGraph);
    }
    for edge in graph.edges() {
        if graph.node(&edge.source).is_none() || graph.node(&edge.target).is_none() {
            return Err(RenderError::DanglingEdge {
                from_node: edge.source.clone(),
                to_node: edge.target.clone(),
            });
        }
    }

    let mut out = String::new();
    out.push_str("digraph dependencies {\n");
    out.push_str("  rankdir=TB;\n");
    out.push_str("  node [shape=box, style=rounded];\n");
    for node in graph.nodes() {
        let _ = writeln!(
            out,
            "  {} [label=\"{} ({})\"];",
            quote(&node.name),
            escape(&node.name),
            node.frequency
        );
    }
    for edge in graph.edges() {
        let _ = writeln!(
            out,
            "  {} -> {} [label=\"{}\", penwidth={:.2}];",
            quote(&edge.source),
            quote(&edge.target),
            edge.frequency,
            pen_width(edge.strength)
        );
    }
    out.push_str("}\n");
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use plens_model::{ActivityNode, DependencyEdge};

    fn graph() -> GraphDescription {
        GraphDescription::new(
            vec![
                ActivityNode {
                    name: "register".into(),
                    frequency: 3,
                },
                ActivityNode {
                    name: "check".into(),
                    frequency: 3,
                },
            ],
            vec![DependencyEdge {
                source: "register".into(),
                target: "check".into(),
                frequency: 3,
                strength: 0.75,
            }],
        )
    }

    #[test]
    fn emits_nodes_edges_and_labels() {
        let dot = dot_source(&graph()).unwrap();
        assert!(dot.starts_with("digraph dependencies {"));
        assert!(dot.contains("\"register\" [label=\"register (3)\"];"));
        assert!(dot.contains("\"register\" -> \"check\" [label=\"3\", penwidth=3.25];"));
    }

    #[test]
    fn output_is_deterministic() {
        assert_eq!(dot_source(&graph()).unwrap(), dot_source(&graph()).unwrap());
    }

    #[test]
    fn empty_graph_is_rejected() {
        let empty = GraphDescription::default();
        assert!(matches!(dot_source(&empty), Err(RenderError::EmptyGraph)));
    }

    #[test]
    fn dangling_edge_is_rejected() {
        let bad = GraphDescription::new(
            vec![ActivityNode {
                name: "register".into(),
                frequency: 1,
            }],
            vec![DependencyEdge {
                source: "register".into(),
                target: "ghost".into(),
                frequency: 1,
                strength: 0.5,
            }],
        );
        assert!(matches!(
            dot_source(&bad),
            Err(RenderError::DanglingEdge { .. })
        ));
    }

    #[test]
    fn names_with_quotes_are_escaped() {
        let tricky = GraphDescription::new(
            vec![ActivityNode {
                name: "say \"hi\"".into(),
                frequency: 1,
            }],
            vec![],
        );
        let dot = dot_source(&tricky).unwrap();
        assert!(dot.contains("\"say \\\"hi\\\"\""));
    }

    #[test]
    fn backslashes_are_escaped_in_labels_too() {
        let tricky = GraphDescription::new(
            vec![ActivityNode {
                name: "dir\\scan".into(),
                frequency: 1,
            }],
            vec![],
        );
        let dot = dot_source(&tricky).unwrap();
        assert!(dot.contains("\"dir\\\\scan\" [label=\"dir\\\\scan (1)\"];"));
    }
}
