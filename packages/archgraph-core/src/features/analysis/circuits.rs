//! Elementary circuit enumeration (Johnson)
//!
//! Every elementary circuit is reported once, as the vertex sequence starting
//! at its smallest handle. Self-loops are circuits of length one; parallel
//! edges never produce duplicate circuits. The search runs on explicit stacks
//! so deep components cannot overflow the call stack.

use std::collections::BTreeMap;
use std::io::Write;

use serde::Serialize;
use tracing::{debug, info};

use super::scc::Snapshot;
use crate::errors::Result;
use crate::shared::models::{GraphAccess, VertexId};

/// Enumerated circuits, shortest first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CycleReport {
    pub circuits: Vec<Vec<VertexId>>,
    /// Enumeration stopped at the configured bound
    pub truncated: bool,
}

impl CycleReport {
    pub fn is_dag(&self) -> bool {
        self.circuits.is_empty()
    }

    /// Circuit length → number of circuits
    pub fn by_length(&self) -> BTreeMap<usize, usize> {
        let mut counts = BTreeMap::new();
        for c in &self.circuits {
            *counts.entry(c.len()).or_insert(0) += 1;
        }
        counts
    }
}

struct Frame {
    node: usize,
    // reversed, so `pop` yields insertion order
    pending: Vec<usize>,
}

/// Johnson's search from `start`, restricted to `alive` nodes
fn circuits_from(
    snapshot: &Snapshot,
    start: usize,
    alive: &[bool],
    limit: usize,
    found: &mut Vec<Vec<usize>>,
) {
    let n = snapshot.len();
    let neighbors = |node: usize| -> Vec<usize> {
        snapshot.adjacency[node]
            .iter()
            .rev()
            .copied()
            .filter(|&m| alive[m])
            .collect()
    };

    let mut blocked = vec![false; n];
    let mut closed = vec![false; n];
    let mut blockers: Vec<Vec<usize>> = vec![Vec::new(); n];
    let mut path = vec![start];
    let mut stack = vec![Frame {
        node: start,
        pending: neighbors(start),
    }];
    blocked[start] = true;

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        if let Some(next) = frame.pending.pop() {
            if next == start {
                found.push(path.clone());
                if found.len() >= limit {
                    return;
                }
                for &p in &path {
                    closed[p] = true;
                }
            } else if !blocked[next] {
                path.push(next);
                stack.push(Frame {
                    node: next,
                    pending: neighbors(next),
                });
                closed[next] = false;
                blocked[next] = true;
                continue;
            }
        }

        let exhausted = stack.last().map_or(true, |f| f.pending.is_empty());
        if exhausted {
            if closed[node] {
                unblock(node, &mut blocked, &mut blockers);
            } else {
                for m in neighbors(node) {
                    if !blockers[m].contains(&node) {
                        blockers[m].push(node);
                    }
                }
            }
            stack.pop();
            path.pop();
        }
    }
}

fn unblock(node: usize, blocked: &mut [bool], blockers: &mut [Vec<usize>]) {
    let mut work = vec![node];
    while let Some(current) = work.pop() {
        if blocked[current] {
            blocked[current] = false;
            work.append(&mut blockers[current]);
        }
    }
}

/// All elementary circuits of the visible graph, at most `max_cycles`.
///
/// Circuits are ordered by length; equal lengths keep discovery order.
pub fn find_circuits<G: GraphAccess>(graph: &G, max_cycles: Option<usize>) -> CycleReport {
    let snapshot = Snapshot::new(graph);
    // one past the bound, to tell a complete enumeration from a cut one
    let limit = max_cycles.map_or(usize::MAX, |m| m.saturating_add(1));
    let mut found: Vec<Vec<usize>> = Vec::new();

    for &n in &snapshot.self_loops {
        if found.len() >= limit {
            break;
        }
        found.push(vec![n]);
    }

    let mut pending = snapshot.cyclic_components();
    while found.len() < limit {
        let Some(component) = pending.pop() else {
            break;
        };
        let Some(&start) = component.iter().min() else {
            continue;
        };

        let mut alive = vec![false; snapshot.len()];
        for &m in &component {
            alive[m] = true;
        }
        circuits_from(&snapshot, start, &alive, limit, &mut found);

        let rest: Vec<usize> = component.into_iter().filter(|&m| m != start).collect();
        pending.extend(
            snapshot
                .components_of(&rest)
                .into_iter()
                .filter(|scc| scc.len() > 1),
        );
    }

    let truncated = max_cycles.map_or(false, |m| found.len() > m);
    if let Some(m) = max_cycles {
        found.truncate(m);
    }
    let mut circuits: Vec<Vec<VertexId>> = found
        .into_iter()
        .map(|c| c.into_iter().map(|i| snapshot.ids[i]).collect())
        .collect();
    circuits.sort_by_key(Vec::len);

    if truncated {
        info!("Circuit enumeration stopped at {} circuits", circuits.len());
    }
    debug!("Found {} circuits", circuits.len());
    CycleReport { circuits, truncated }
}

/// Plain-text cycle report
pub fn write_cycle_report<G: GraphAccess, W: Write>(
    graph: &G,
    report: &CycleReport,
    out: &mut W,
) -> Result<()> {
    if report.is_dag() {
        writeln!(out, "Graph is a DAG. No cycles found!")?;
        return Ok(());
    }

    writeln!(out, "Graph is not a DAG.")?;
    writeln!(out, "Cycles:")?;
    writeln!(out)?;
    for circuit in &report.circuits {
        let ids: Vec<String> = circuit.iter().map(ToString::to_string).collect();
        let labels: Vec<&str> = circuit
            .iter()
            .map(|&v| graph.label(v))
            .collect::<Result<_>>()?;
        writeln!(out, "[{}]: {}", ids.join(", "), labels.join(" -> "))?;
    }

    writeln!(out)?;
    writeln!(out, "Found {} cycles in the graph.", report.circuits.len())?;
    if report.truncated {
        writeln!(out, "(enumeration stopped at the configured maximum)")?;
    }
    writeln!(out)?;
    writeln!(out, "Number of cycles by length:")?;
    writeln!(out, "Length | #")?;
    writeln!(out, "-------+---")?;
    for (length, count) in report.by_length() {
        writeln!(out, "{:>6} | {:<}", length, count)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use crate::shared::models::Graph;
    use pretty_assertions::assert_eq;

    fn ids(raw: &[u32]) -> Vec<VertexId> {
        raw.iter().copied().map(VertexId).collect()
    }

    fn small() -> Graph {
        fixtures::graph(
            &["a", "b", "c"],
            &[(0, 1), (1, 2), (2, 0), (1, 0), (2, 2), (0, 1)],
        )
    }

    #[test]
    fn test_fixture_has_one_self_loop() {
        let graph = fixtures::twelve();
        let report = find_circuits(&graph, None);
        assert_eq!(report.circuits, vec![ids(&[6])]);
        assert!(!report.truncated);
    }

    #[test]
    fn test_circuits_by_length() {
        let report = find_circuits(&small(), None);
        assert_eq!(report.circuits, vec![ids(&[2]), ids(&[0, 1]), ids(&[0, 1, 2])]);
        assert_eq!(report.by_length(), BTreeMap::from([(1, 1), (2, 1), (3, 1)]));
    }

    #[test]
    fn test_complete_digraph_count() {
        // K4 with both directions has 20 elementary circuits
        let mut edges = Vec::new();
        for a in 0..4u32 {
            for b in 0..4u32 {
                if a != b {
                    edges.push((a, b));
                }
            }
        }
        let graph = fixtures::graph(&["a", "b", "c", "d"], &edges);
        let report = find_circuits(&graph, None);
        assert_eq!(report.circuits.len(), 20);
        assert_eq!(report.by_length(), BTreeMap::from([(2, 6), (3, 8), (4, 6)]));
    }

    #[test]
    fn test_bound_truncates() {
        let report = find_circuits(&small(), Some(2));
        assert_eq!(report.circuits.len(), 2);
        assert!(report.truncated);
    }

    #[test]
    fn test_dag_report() {
        let graph = fixtures::graph(&["a", "b"], &[(0, 1)]);
        let report = find_circuits(&graph, None);
        let mut out = Vec::new();
        write_cycle_report(&graph, &report, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Graph is a DAG. No cycles found!\n");
    }

    #[test]
    fn test_cycle_report_format() {
        let graph = small();
        let report = find_circuits(&graph, None);
        let mut out = Vec::new();
        write_cycle_report(&graph, &report, &mut out).unwrap();

        let expected = "\
Graph is not a DAG.
Cycles:

[2]: c
[0, 1]: a -> b
[0, 1, 2]: a -> b -> c

Found 3 cycles in the graph.

Number of cycles by length:
Length | #
-------+---
     1 | 1
     2 | 1
     3 | 1
";
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}
