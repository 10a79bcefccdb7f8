//! Cycle-safe reachability
//!
//! Depth-first traversal over an explicit stack. A vertex is marked the
//! moment it is discovered and a neighbour is only pushed when unmarked, so
//! every vertex enters the stack at most once and cycles terminate.

use std::collections::BTreeSet;

use tracing::debug;

use crate::errors::Result;
use crate::shared::models::{Direction, GraphAccess, VertexId};

/// Every vertex reachable from `root` along out-edges, `root` included
pub fn collect_subgraph<G: GraphAccess>(graph: &G, root: VertexId) -> Result<BTreeSet<VertexId>> {
    collect_reachable(graph, root, Direction::Outgoing)
}

/// Every vertex reachable from `root` following edges in `direction`
pub fn collect_reachable<G: GraphAccess>(
    graph: &G,
    root: VertexId,
    direction: Direction,
) -> Result<BTreeSet<VertexId>> {
    graph.ensure_vertex(root)?;

    let mut visited = vec![false; graph.vertex_bound()];
    let mut result = BTreeSet::new();
    let mut stack = vec![root];
    visited[root.index()] = true;

    while let Some(current) = stack.pop() {
        result.insert(current);
        for next in graph.neighbors_directed(current, direction) {
            if next != current && !visited[next.index()] {
                visited[next.index()] = true;
                stack.push(next);
            }
        }
    }

    debug!("Collected {} vertices from {}", result.len(), root);
    Ok(result)
}

/// Subgraph of `root` without `root` itself
pub fn collect_descendants<G: GraphAccess>(graph: &G, root: VertexId) -> Result<BTreeSet<VertexId>> {
    let mut set = collect_subgraph(graph, root)?;
    set.remove(&root);
    Ok(set)
}

/// Vertices contained in both subgraphs, ascending
pub fn list_shared_sub_vertices<G: GraphAccess>(
    graph: &G,
    a: VertexId,
    b: VertexId,
) -> Result<Vec<VertexId>> {
    let left = collect_subgraph(graph, a)?;
    let right = collect_subgraph(graph, b)?;
    Ok(left.intersection(&right).copied().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use crate::shared::models::GraphView;
    use pretty_assertions::assert_eq;

    fn ids(raw: &[u32]) -> BTreeSet<VertexId> {
        raw.iter().copied().map(VertexId).collect()
    }

    #[test]
    fn test_collect_from_v01() {
        let graph = fixtures::twelve();
        let set = collect_subgraph(&graph, VertexId(1)).unwrap();
        assert_eq!(set, ids(&[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11]));
    }

    #[test]
    fn test_leaf_is_singleton() {
        let graph = fixtures::twelve();
        assert_eq!(collect_subgraph(&graph, VertexId(7)).unwrap(), ids(&[7]));
    }

    #[test]
    fn test_cycle_terminates() {
        let graph = fixtures::graph(&["a", "b", "c"], &[(0, 1), (1, 2), (2, 0), (2, 2)]);
        assert_eq!(collect_subgraph(&graph, VertexId(1)).unwrap(), ids(&[0, 1, 2]));
        assert_eq!(collect_descendants(&graph, VertexId(1)).unwrap(), ids(&[0, 2]));
    }

    #[test]
    fn test_reverse_direction() {
        let graph = fixtures::twelve();
        let set = collect_reachable(&graph, VertexId(9), Direction::Incoming).unwrap();
        assert_eq!(set, ids(&[0, 1, 2, 4, 5, 9, 11]));
    }

    #[test]
    fn test_respects_view() {
        let graph = fixtures::twelve();
        let mut view = GraphView::full(&graph);
        view.hide(VertexId(4));
        let set = collect_subgraph(&view, VertexId(1)).unwrap();
        assert!(!set.contains(&VertexId(8)));
        assert!(set.contains(&VertexId(6)));
    }

    #[test]
    fn test_unknown_root_fails() {
        let graph = fixtures::twelve();
        assert!(collect_subgraph(&graph, VertexId(99)).is_err());
    }

    #[test]
    fn test_shared_sub_vertices() {
        let graph = fixtures::twelve();
        let shared = list_shared_sub_vertices(&graph, VertexId(3), VertexId(4)).unwrap();
        assert_eq!(shared, vec![VertexId(6), VertexId(7)]);
    }
}
