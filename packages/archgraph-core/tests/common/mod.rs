//! Shared fixtures for the integration tests

#![allow(dead_code)]

use archgraph_core::Graph;
use proptest::prelude::*;

pub const TWELVE_EDGES: &[(u32, u32)] = &[
    (0, 1),
    (0, 2),
    (1, 2),
    (1, 3),
    (1, 4),
    (2, 5),
    (3, 6),
    (3, 7),
    (4, 7),
    (4, 8),
    (4, 9),
    (5, 10),
    (5, 11),
    (6, 6),
    (8, 6),
    (10, 6),
    (11, 9),
];

/// `v00..v11`, one self-loop at `v06`
pub fn twelve() -> Graph {
    let labels: Vec<String> = (0..12).map(|i| format!("v{:02}", i)).collect();
    Graph::from_parts(labels, TWELVE_EDGES).unwrap()
}

pub const ARCHITECTURE: &str = r#"{
  "contextGroups": [
    {"C1": [
      {"d1": [
        {"v03": {"domain": "d1", "contextGroup": "C1", "abstractionLayer": "L1"}},
        {"v04": {"domain": "d1", "contextGroup": "C1", "abstractionLayer": "L2"}}
      ]}
    ]},
    {"C2": [
      {"d2": [
        {"v07;v09": {"domain": "d2", "contextGroup": "C2", "abstractionLayer": "L2"}},
        {"legacy (no Match)": {"domain": "d2", "contextGroup": "C2", "abstractionLayer": "L1"}}
      ]}
    ]}
  ]
}"#;

/// Random graphs of up to `max_vertices` vertices, self-loops and parallel edges allowed
pub fn arb_graph(max_vertices: u32) -> impl Strategy<Value = Graph> {
    (1..=max_vertices).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n), 0..(n as usize * 3)).prop_map(move |edges| {
            let labels: Vec<String> = (0..n).map(|i| format!("n{}", i)).collect();
            Graph::from_parts(labels, &edges).unwrap()
        })
    })
}

/// Up to `max_vertices` vertices with short labels over `abc`, no edges
pub fn arb_labelled_graph(max_vertices: usize) -> impl Strategy<Value = Graph> {
    prop::collection::vec("[abc]{0,4}", 1..=max_vertices)
        .prop_map(|labels| Graph::from_parts(labels, &[]).unwrap())
}
