//! Tests for plens-model types.

use plens_model::{ActivityNode, DependencyEdge, GraphDescription, ParameterState};

#[test]
fn graph_description_serializes() {
    let graph = GraphDescription::new(
        vec![
            ActivityNode {
                name: "register".to_string(),
                frequency: 5,
            },
            ActivityNode {
                name: "approve".to_string(),
                frequency: 3,
            },
        ],
        vec![DependencyEdge {
            source: "register".to_string(),
            target: "approve".to_string(),
            frequency: 3,
            strength: 0.75,
        }],
    );
    let json = serde_json::to_string(&graph).expect("serialize graph");
    let round: GraphDescription = serde_json::from_str(&json).expect("deserialize graph");
    assert_eq!(round, graph);
    assert_eq!(round.node("approve").map(|n| n.frequency), Some(3));
}

#[test]
fn parameter_state_survives_a_smaller_reload() {
    let mut params = ParameterState::new();
    // First log: plenty of headroom.
    params.set_max_frequency_bound(120);
    params.set_min_frequency(80);

    // Second, smaller log: the carried-over value is re-clamped so the
    // slider can never sit above the new observed maximum.
    params.set_max_frequency_bound(37);
    assert_eq!(params.min_frequency(), 37);
    assert_eq!(params.max_frequency(), 37);

    // And a later explicit set is clamped the same way.
    assert_eq!(params.set_min_frequency(40), 37);
}
