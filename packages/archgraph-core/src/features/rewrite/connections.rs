use std::collections::VecDeque;

use crate::errors::Result;
use crate::shared::models::{EdgeId, GraphAccess, GraphView, VertexId};

/// View of `members` plus one shortest directed path between every ordered
/// pair of them.
///
/// Paths are found by breadth-first search following out-edges in insertion
/// order; the first edge to reach a vertex is its predecessor. Only the path
/// edges are visible, so the result shows how the members connect and
/// nothing else.
pub fn connections_view<'g, G: GraphAccess>(
    graph: &'g G,
    members: &[VertexId],
) -> Result<GraphView<'g>> {
    let base = graph.base();
    let mut vertex_mask = vec![false; base.vertex_bound()];
    let mut edge_mask = vec![false; base.edge_bound()];
    let mut is_member = vec![false; base.vertex_bound()];

    for &m in members {
        graph.ensure_vertex(m)?;
        vertex_mask[m.index()] = true;
        is_member[m.index()] = true;
    }

    for &source in members {
        let predecessors = shortest_path_tree(graph, source);
        for &target in members {
            let mut current = target;
            while current != source {
                let Some((edge, previous)) = predecessors[current.index()] else {
                    break;
                };
                edge_mask[edge.index()] = true;
                vertex_mask[previous.index()] = true;
                current = previous;
            }
        }
    }

    Ok(GraphView::from_masks(base, vertex_mask, edge_mask))
}

/// BFS predecessor `(edge, vertex)` per reached vertex; `None` for the source
/// and unreachable vertices
fn shortest_path_tree<G: GraphAccess>(graph: &G, source: VertexId) -> Vec<Option<(EdgeId, VertexId)>> {
    let bound = graph.vertex_bound();
    let mut predecessors = vec![None; bound];
    let mut reached = vec![false; bound];
    let mut queue = VecDeque::new();

    reached[source.index()] = true;
    queue.push_back(source);
    while let Some(current) = queue.pop_front() {
        for edge in graph.out_edges(current) {
            let next = edge.target;
            if !reached[next.index()] {
                reached[next.index()] = true;
                predecessors[next.index()] = Some((edge.id, current));
                queue.push_back(next);
            }
        }
    }
    predecessors
}
