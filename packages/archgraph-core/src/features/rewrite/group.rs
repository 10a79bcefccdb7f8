//! Destructive and additive grouping
//!
//! Both primitives mutate the graph in place. After [`group`] the member
//! handles are dead; callers must not keep using them.

use rustc_hash::FxHashSet;
use tracing::debug;

use crate::errors::Result;
use crate::shared::models::{Graph, GraphAccess, VertexId};

fn distinct_members(graph: &Graph, members: &[VertexId]) -> Result<Vec<VertexId>> {
    let mut seen = FxHashSet::default();
    let mut distinct = Vec::with_capacity(members.len());
    for &m in members {
        graph.ensure_vertex(m)?;
        if seen.insert(m) {
            distinct.push(m);
        }
    }
    Ok(distinct)
}

/// External neighbours of `members` in first-appearance order
fn external_neighbors(
    graph: &Graph,
    members: &[VertexId],
    inside: &FxHashSet<VertexId>,
    outgoing: bool,
) -> Vec<VertexId> {
    let mut seen = FxHashSet::default();
    let mut external = Vec::new();
    for &m in members {
        let neighbors: Vec<VertexId> = if outgoing {
            graph.out_neighbors(m).collect()
        } else {
            graph.in_neighbors(m).collect()
        };
        for n in neighbors {
            if !inside.contains(&n) && seen.insert(n) {
                external.push(n);
            }
        }
    }
    external
}

/// Add a head vertex that takes over the external edges of `members`.
///
/// The head receives one edge to every distinct external out-neighbour and
/// one edge from every distinct external in-neighbour of the group. Members
/// and their edges stay in place; see [`group`] for the destructive form.
pub fn merge_into_head(
    graph: &mut Graph,
    label: impl Into<String>,
    members: &[VertexId],
) -> Result<VertexId> {
    let members = distinct_members(graph, members)?;
    let inside: FxHashSet<VertexId> = members.iter().copied().collect();

    // collect before touching the graph
    let out_set = external_neighbors(graph, &members, &inside, true);
    let in_set = external_neighbors(graph, &members, &inside, false);

    let head = graph.add_vertex(label);
    for &target in &out_set {
        graph.add_edge(head, target)?;
    }
    for &source in &in_set {
        graph.add_edge(source, head)?;
    }

    debug!(
        "Merged {} vertices into vtx[{}] ({} out, {} in)",
        members.len(),
        head,
        out_set.len(),
        in_set.len()
    );
    Ok(head)
}

/// Merge `members` into one new head vertex labelled `label`.
///
/// Like [`merge_into_head`], then the members are removed together with
/// every edge among them. Returns the head.
pub fn group(graph: &mut Graph, label: impl Into<String>, members: &[VertexId]) -> Result<VertexId> {
    let members = distinct_members(graph, members)?;
    let head = merge_into_head(graph, label, &members)?;
    graph.remove_vertices(members.iter().copied())?;
    Ok(head)
}

/// Add a vertex labelled `label` with an edge to every distinct member.
///
/// Nothing else changes.
pub fn add_parent(
    graph: &mut Graph,
    label: impl Into<String>,
    members: &[VertexId],
) -> Result<VertexId> {
    let members = distinct_members(graph, members)?;
    let parent = graph.add_vertex(label);
    for &m in &members {
        graph.add_edge(parent, m)?;
    }
    debug!("Added parent vtx[{}] over {} vertices", parent, members.len());
    Ok(parent)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use pretty_assertions::assert_eq;

    fn ids(raw: &[u32]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId).collect()
    }

    fn labelled_edges(graph: &Graph) -> Vec<(String, String)> {
        let mut edges: Vec<(String, String)> = graph
            .edges()
            .map(|e| {
                (
                    graph.label(e.source).unwrap().to_string(),
                    graph.label(e.target).unwrap().to_string(),
                )
            })
            .collect();
        edges.sort();
        edges
    }

    #[test]
    fn test_group_takes_over_external_edges() {
        let mut graph = fixtures::twelve();
        let head = group(&mut graph, "G", &ids(&[3, 4])).unwrap();

        assert_eq!(head, VertexId(12));
        assert_eq!(graph.vertex_count(), 12 - 2 + 1);
        let out: Vec<_> = graph.out_neighbors(head).collect();
        assert_eq!(out, ids(&[6, 7, 8, 9]));
        let inc: Vec<_> = graph.in_neighbors(head).collect();
        assert_eq!(inc, ids(&[1]));
        assert!(!graph.contains_vertex(VertexId(3)));
    }

    #[test]
    fn test_group_drops_internal_edges_and_self_loops() {
        let mut graph = fixtures::graph(&["a", "b", "c"], &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 0)]);
        let head = group(&mut graph, "ab", &ids(&[0, 1, 0])).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(
            labelled_edges(&graph),
            vec![("ab".into(), "c".into()), ("c".into(), "ab".into())]
        );
        assert_eq!(graph.out_degree(head), 1);
    }

    #[test]
    fn test_group_collapses_parallel_external_edges() {
        let mut graph = fixtures::graph(&["a", "b", "x"], &[(0, 2), (1, 2), (0, 2)]);
        let head = group(&mut graph, "ab", &ids(&[0, 1])).unwrap();
        assert_eq!(graph.out_degree(head), 1);
    }

    #[test]
    fn test_group_with_dead_member_leaves_graph_untouched() {
        let mut graph = fixtures::twelve();
        assert!(group(&mut graph, "G", &ids(&[3, 99])).is_err());
        assert_eq!(graph.vertex_count(), 12);
    }

    #[test]
    fn test_merge_into_head_keeps_members() {
        let mut graph = fixtures::twelve();
        let head = merge_into_head(&mut graph, "G", &ids(&[3, 4])).unwrap();
        assert_eq!(graph.vertex_count(), 13);
        assert!(graph.contains_vertex(VertexId(3)));
        let out: Vec<_> = graph.out_neighbors(head).collect();
        assert_eq!(out, ids(&[6, 7, 8, 9]));
    }

    #[test]
    fn test_add_parent_keeps_everything() {
        let mut graph = fixtures::twelve();
        let edges_before = graph.edge_count();
        let parent = add_parent(&mut graph, "P", &ids(&[9, 3, 9])).unwrap();

        assert_eq!(graph.vertex_count(), 13);
        assert_eq!(graph.edge_count(), edges_before + 2);
        let out: Vec<_> = graph.out_neighbors(parent).collect();
        assert_eq!(out, ids(&[9, 3]));
        assert_eq!(graph.label(parent).unwrap(), "P");
    }
}
