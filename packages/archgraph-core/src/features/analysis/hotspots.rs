use crate::shared::models::{Direction, GraphAccess, VertexId};

/// Default result size: `ceil(log2(n)) + 1`, `0` for an empty graph
pub fn default_hotspot_count(vertex_count: usize) -> usize {
    match vertex_count {
        0 => 0,
        1 => 1,
        n => (usize::BITS - (n - 1).leading_zeros()) as usize + 1,
    }
}

/// Vertices with the most edges in `direction`.
///
/// Ordered by degree descending, ties by ascending handle. Returns at most
/// `top` entries (default [`default_hotspot_count`]).
pub fn find_hotspots<G: GraphAccess>(
    graph: &G,
    direction: Direction,
    top: Option<usize>,
) -> Vec<(VertexId, usize)> {
    let mut ranked: Vec<(VertexId, usize)> = graph
        .vertices()
        .map(|v| (v, graph.degree(v, direction)))
        .collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let limit = top.unwrap_or_else(|| default_hotspot_count(ranked.len()));
    ranked.truncate(limit);
    ranked
}
