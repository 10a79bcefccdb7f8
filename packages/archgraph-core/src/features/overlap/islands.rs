//! Connectivity islands
//!
//! Two members are directly connected when their collected subgraphs share a
//! vertex. Islands are the transitive closure of that relation. Every member
//! lands in exactly one island; a member overlapping nobody is a singleton.

use std::collections::BTreeSet;

use super::direct::shared_subgraphs_direct;
use crate::errors::Result;
use crate::features::subgraph::collect_subgraph;
use crate::shared::models::{GraphAccess, VertexId};

/// Members that are mutually reachable through subgraph overlap
pub type Island = Vec<VertexId>;

/// Group `labels` into islands given the overlapping index pairs.
///
/// Islands appear in the order of their first label; members keep input order.
pub fn close_islands<L: Clone>(labels: &[L], overlaps: &[(usize, usize)]) -> Vec<Vec<L>> {
    let n = labels.len();
    let mut adjacency: Vec<Vec<usize>> = vec![Vec::new(); n];
    for &(a, b) in overlaps {
        if a < n && b < n {
            adjacency[a].push(b);
            adjacency[b].push(a);
        }
    }

    let mut assigned = vec![false; n];
    let mut islands = Vec::new();
    for seed in 0..n {
        if assigned[seed] {
            continue;
        }
        assigned[seed] = true;
        let mut members = vec![seed];
        let mut frontier = vec![seed];
        while let Some(current) = frontier.pop() {
            for &next in &adjacency[current] {
                if !assigned[next] {
                    assigned[next] = true;
                    members.push(next);
                    frontier.push(next);
                }
            }
        }
        members.sort_unstable();
        islands.push(members.into_iter().map(|i| labels[i].clone()).collect());
    }
    islands
}

/// Islands formed by the subgraphs of `members`.
///
/// Duplicate members are ignored. An empty input yields no island.
pub fn shared_subgraphs_indirect<G: GraphAccess>(graph: &G, members: &[VertexId]) -> Result<Vec<Island>> {
    let mut labels: Vec<VertexId> = Vec::with_capacity(members.len());
    for &m in members {
        if !labels.contains(&m) {
            labels.push(m);
        }
    }

    let subgraphs: Vec<BTreeSet<VertexId>> = labels
        .iter()
        .map(|&m| collect_subgraph(graph, m))
        .collect::<Result<_>>()?;

    let positions: Vec<usize> = (0..labels.len()).collect();
    let mut overlaps = Vec::new();
    for i in 0..subgraphs.len() {
        let rest = i + 1;
        for j in shared_subgraphs_direct(&subgraphs[i], &subgraphs[rest..], &positions[rest..])? {
            overlaps.push((i, j));
        }
    }

    Ok(close_islands(&labels, &overlaps))
}

/// Whether all `members` collapse into a single island
pub fn check_nodes_connected<G: GraphAccess>(graph: &G, members: &[VertexId]) -> Result<bool> {
    Ok(shared_subgraphs_indirect(graph, members)?.len() == 1)
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
    fn test_chain_of_overlaps_is_one_island() {
        // subgraphs: 0:{0,4} 1:{1,4,5} 2:{2,5,6} 3:{3,6}
        let graph = fixtures::graph(
            &["a", "b", "c", "d", "x", "y", "z"],
            &[(0, 4), (1, 4), (1, 5), (2, 5), (2, 6), (3, 6)],
        );
        let islands = shared_subgraphs_indirect(&graph, &ids(&[0, 1, 2, 3])).unwrap();
        assert_eq!(islands, vec![ids(&[0, 1, 2, 3])]);
        // 0 and 3 share nothing directly
        assert!(!check_nodes_connected(&graph, &ids(&[0, 3])).unwrap());
    }

    #[test]
    fn test_disjoint_groups_are_singletons() {
        let graph = fixtures::twelve();
        let islands = shared_subgraphs_indirect(&graph, &ids(&[7, 9, 10])).unwrap();
        assert_eq!(islands, vec![ids(&[7]), ids(&[9]), ids(&[10])]);
    }

    #[test]
    fn test_fixture_islands() {
        let graph = fixtures::twelve();
        // 3 and 4 share {6, 7}; 9 is reachable from 4
        let islands = shared_subgraphs_indirect(&graph, &ids(&[3, 4, 9])).unwrap();
        assert_eq!(islands, vec![ids(&[3, 4, 9])]);

        let islands = shared_subgraphs_indirect(&graph, &ids(&[7, 10, 8])).unwrap();
        // 10 and 8 both reach 6
        assert_eq!(islands, vec![ids(&[7]), ids(&[10, 8])]);
    }

    #[test]
    fn test_single_member() {
        let graph = fixtures::twelve();
        assert_eq!(shared_subgraphs_indirect(&graph, &ids(&[5])).unwrap(), vec![ids(&[5])]);
        assert!(check_nodes_connected(&graph, &ids(&[5])).unwrap());
    }

    #[test]
    fn test_empty_input() {
        let graph = fixtures::twelve();
        assert!(shared_subgraphs_indirect(&graph, &[]).unwrap().is_empty());
        assert!(!check_nodes_connected(&graph, &[]).unwrap());
    }

    #[test]
    fn test_idempotent() {
        let graph = fixtures::twelve();
        let members = ids(&[2, 7, 3, 11, 8]);
        let first = shared_subgraphs_indirect(&graph, &members).unwrap();
        let second = shared_subgraphs_indirect(&graph, &members).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_close_islands_orders_by_input() {
        let islands = close_islands(&["a", "b", "c", "d"], &[(3, 1)]);
        assert_eq!(islands, vec![vec!["a"], vec!["b", "d"], vec!["c"]]);
    }
}
