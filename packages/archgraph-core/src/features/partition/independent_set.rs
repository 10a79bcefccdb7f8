//! Maximal independent vertex set
//!
//! Greedy minimum-degree heuristic over the undirected graph: candidates are
//! visited by ascending undirected degree (ties by handle), each accepted
//! vertex blocks all of its neighbours. The result is maximal, not maximum.
//! A vertex with a self-loop is adjacent to itself and never qualifies.

use std::collections::BTreeSet;

use crate::shared::models::{GraphAccess, VertexId};

pub fn max_independent_vertex_set<G: GraphAccess>(graph: &G) -> BTreeSet<VertexId> {
    let mut candidates: Vec<(usize, VertexId)> = graph
        .vertices()
        .map(|v| (graph.undirected_neighbors(v).count(), v))
        .collect();
    candidates.sort_unstable();

    let mut blocked = vec![false; graph.vertex_bound()];
    let mut members = BTreeSet::new();

    for (_, v) in candidates {
        if blocked[v.index()] || graph.out_neighbors(v).any(|n| n == v) {
            continue;
        }
        members.insert(v);
        blocked[v.index()] = true;
        for n in graph.undirected_neighbors(v) {
            blocked[n.index()] = true;
        }
    }
    members
}
