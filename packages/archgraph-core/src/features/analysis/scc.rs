//! Dense adjacency snapshot and strongly connected components

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::shared::models::{GraphAccess, VertexId};

/// Visible vertices renumbered `0..n` in ascending handle order.
///
/// Parallel edges are collapsed (first occurrence kept) and self-loops are
/// split off into `self_loops`.
pub(crate) struct Snapshot {
    pub ids: Vec<VertexId>,
    pub adjacency: Vec<Vec<usize>>,
    pub self_loops: Vec<usize>,
}

impl Snapshot {
    pub fn new<G: GraphAccess>(graph: &G) -> Self {
        let ids: Vec<VertexId> = graph.vertices().collect();
        let mut local = vec![usize::MAX; graph.vertex_bound()];
        for (i, v) in ids.iter().enumerate() {
            local[v.index()] = i;
        }

        let mut adjacency = vec![Vec::new(); ids.len()];
        let mut self_loops = Vec::new();
        for (i, &v) in ids.iter().enumerate() {
            let mut looped = false;
            for target in graph.out_neighbors(v) {
                let j = local[target.index()];
                if j == i {
                    looped = true;
                } else if !adjacency[i].contains(&j) {
                    adjacency[i].push(j);
                }
            }
            if looped {
                self_loops.push(i);
            }
        }

        Self {
            ids,
            adjacency,
            self_loops,
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Components of the subgraph induced by `nodes` (local indices)
    pub fn components_of(&self, nodes: &[usize]) -> Vec<Vec<usize>> {
        let mut position = vec![usize::MAX; self.len()];
        let mut digraph: DiGraph<usize, ()> = DiGraph::with_capacity(nodes.len(), 0);
        for &n in nodes {
            position[n] = digraph.add_node(n).index();
        }
        for &n in nodes {
            for &m in &self.adjacency[n] {
                if position[m] != usize::MAX {
                    digraph.add_edge(NodeIndex::new(position[n]), NodeIndex::new(position[m]), ());
                }
            }
        }
        tarjan_scc(&digraph)
            .into_iter()
            .map(|scc| scc.into_iter().map(|idx| digraph[idx]).collect())
            .collect()
    }

    /// Components with more than one vertex
    pub fn cyclic_components(&self) -> Vec<Vec<usize>> {
        let all: Vec<usize> = (0..self.len()).collect();
        self.components_of(&all)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .collect()
    }
}

/// Number of cyclic strongly connected components, self-loops included.
///
/// A self-loop vertex inside a larger component is counted once with it.
pub fn count_cyclic_components<G: GraphAccess>(graph: &G) -> usize {
    let snapshot = Snapshot::new(graph);
    let cyclic = snapshot.cyclic_components();
    let mut in_cycle = vec![false; snapshot.len()];
    for scc in &cyclic {
        for &n in scc {
            in_cycle[n] = true;
        }
    }
    cyclic.len() + snapshot.self_loops.iter().filter(|&&n| !in_cycle[n]).count()
}

/// Whether the visible graph has no directed cycle (self-loops are cycles)
pub fn is_dag<G: GraphAccess>(graph: &G) -> bool {
    count_cyclic_components(graph) == 0
}
