//! Transitive dependency counts on acyclic graphs

use std::io::Write;

use serde::Serialize;
use tracing::debug;

use super::scc::count_cyclic_components;
use crate::errors::{ArchGraphError, Result};
use crate::shared::models::{Direction, GraphAccess, VertexId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DependencyCount {
    pub vertex: VertexId,
    /// Vertices reachable from `vertex`, itself excluded
    pub count: usize,
}

/// For every vertex the size of its transitive closure.
///
/// `reverse` follows in-edges instead, counting the vertices that depend on
/// each vertex. Sorted by count descending, ties by ascending handle, cut to
/// `top` entries. Cyclic input is rejected with [`ArchGraphError::NotADag`].
pub fn dependency_counts<G: GraphAccess>(
    graph: &G,
    reverse: bool,
    top: Option<usize>,
) -> Result<Vec<DependencyCount>> {
    let cyclic = count_cyclic_components(graph);
    if cyclic > 0 {
        return Err(ArchGraphError::NotADag(cyclic));
    }

    let direction = if reverse {
        Direction::Incoming
    } else {
        Direction::Outgoing
    };

    let mut marks = vec![usize::MAX; graph.vertex_bound()];
    let mut counts: Vec<DependencyCount> = Vec::with_capacity(graph.vertex_count());
    for root in graph.vertices() {
        // `marks[v] == root` means v was already seen during this root's walk
        let stamp = root.index();
        marks[stamp] = stamp;
        let mut stack = vec![root];
        let mut count = 0;
        while let Some(current) = stack.pop() {
            for next in graph.neighbors_directed(current, direction) {
                if marks[next.index()] != stamp {
                    marks[next.index()] = stamp;
                    count += 1;
                    stack.push(next);
                }
            }
        }
        counts.push(DependencyCount {
            vertex: root,
            count,
        });
    }

    counts.sort_by(|a, b| b.count.cmp(&a.count).then(a.vertex.cmp(&b.vertex)));
    if let Some(top) = top {
        counts.truncate(top);
    }
    debug!("Computed dependency counts for {} vertices", counts.len());
    Ok(counts)
}

/// `Count | Task Name` table
pub fn write_dependency_table<G: GraphAccess, W: Write>(
    graph: &G,
    counts: &[DependencyCount],
    out: &mut W,
) -> Result<()> {
    writeln!(out, "Count | Task Name")?;
    writeln!(out, "------+-------------------")?;
    for entry in counts {
        writeln!(out, "{:>5} | {:<}", entry.count, graph.label(entry.vertex)?)?;
    }
    Ok(())
}
