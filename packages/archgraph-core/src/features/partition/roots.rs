//! Subgraph roots
//!
//! A subgraph root is a vertex outside the maximal independent set that has
//! at least one out-edge. Roots whose subgraph contains another root make
//! that other root "related" (nested); the remaining roots head independent
//! subgraphs.

use tracing::debug;

use super::independent_set::max_independent_vertex_set;
use crate::errors::Result;
use crate::features::subgraph::collect_descendants;
use crate::shared::models::{GraphAccess, VertexId};

/// Candidate roots in ascending handle order
pub fn find_subgraph_roots<G: GraphAccess>(graph: &G) -> Vec<VertexId> {
    let independent = max_independent_vertex_set(graph);
    let roots: Vec<VertexId> = graph
        .vertices()
        .filter(|v| !independent.contains(v) && graph.out_degree(*v) > 0)
        .collect();
    debug!(
        "{} independent vertices, {} subgraph roots",
        independent.len(),
        roots.len()
    );
    roots
}

/// Roots contained in the descendant set of some other root, in `roots` order
pub fn classify_related<G: GraphAccess>(graph: &G, roots: &[VertexId]) -> Result<Vec<VertexId>> {
    let mut related = vec![false; graph.vertex_bound()];
    for &root in roots {
        let descendants = collect_descendants(graph, root)?;
        for &other in roots {
            if other != root && descendants.contains(&other) {
                related[other.index()] = true;
            }
        }
    }
    Ok(roots.iter().copied().filter(|r| related[r.index()]).collect())
}

/// Roots not nested in any other root's subgraph
pub fn independent_subgraph_roots<G: GraphAccess>(graph: &G) -> Result<Vec<VertexId>> {
    let roots = find_subgraph_roots(graph);
    let related = classify_related(graph, &roots)?;
    Ok(roots.into_iter().filter(|r| !related.contains(r)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use pretty_assertions::assert_eq;

    fn ids(raw: &[u32]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId).collect()
    }

    #[test]
    fn test_fixture_roots() {
        let graph = fixtures::twelve();
        assert_eq!(find_subgraph_roots(&graph), ids(&[1, 2, 3, 4, 5, 6, 11]));
    }

    #[test]
    fn test_related_roots() {
        let graph = fixtures::twelve();
        let roots = find_subgraph_roots(&graph);
        assert_eq!(classify_related(&graph, &roots).unwrap(), ids(&[2, 3, 4, 5, 6, 11]));
        assert_eq!(independent_subgraph_roots(&graph).unwrap(), ids(&[1]));
    }

    #[test]
    fn test_leaves_never_roots() {
        let graph = fixtures::twelve();
        for root in find_subgraph_roots(&graph) {
            assert!(graph.out_degree(root) > 0);
        }
    }

    #[test]
    fn test_two_separate_stars() {
        // 0 -> 1, 0 -> 2 and 3 -> 4, 3 -> 5
        let graph = fixtures::graph(&["a", "b", "c", "d", "e", "f"], &[(0, 1), (0, 2), (3, 4), (3, 5)]);
        assert_eq!(independent_subgraph_roots(&graph).unwrap(), ids(&[0, 3]));
    }
}
