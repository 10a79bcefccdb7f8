//! Human-readable vertex output
//!
//! Line format: `vtx[<index>] in: <in-degree> out: <out-degree> val: <label>`.
//! The children tree prefixes each line with box-drawing branches; a
//! self-loop is drawn as a leaf with a `●` marker and never expanded.

use std::io::Write;

use crate::errors::Result;
use crate::shared::models::{GraphAccess, VertexId};

const BRANCH_FORK: &str = "├─ ";
const BRANCH_END: &str = "└─ ";
const BRANCH_SELF_FORK: &str = "├● ";
const BRANCH_SELF_END: &str = "└● ";
const TREE_TRUNK: &str = "│  ";
const TREE_EMPTY: &str = "   ";

/// `vtx[i] in: a out: b val: label`
pub fn format_vertex<G: GraphAccess>(graph: &G, id: VertexId) -> Result<String> {
    Ok(format!(
        "vtx[{}] in: {} out: {} val: {}",
        id,
        graph.in_degree(id),
        graph.out_degree(id),
        graph.label(id)?
    ))
}

pub fn print_vertex<G: GraphAccess, W: Write>(graph: &G, id: VertexId, out: &mut W) -> Result<()> {
    writeln!(out, "{}", format_vertex(graph, id)?)?;
    Ok(())
}

/// One line per visible vertex, ascending handles
pub fn print_all_vertices<G: GraphAccess, W: Write>(graph: &G, out: &mut W) -> Result<()> {
    for v in graph.vertices() {
        print_vertex(graph, v, out)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Branch {
    Root,
    Fork,
    End,
    SelfFork,
    SelfEnd,
}

impl Branch {
    fn prefix(self) -> &'static str {
        match self {
            Branch::Root => "",
            Branch::Fork => BRANCH_FORK,
            Branch::End => BRANCH_END,
            Branch::SelfFork => BRANCH_SELF_FORK,
            Branch::SelfEnd => BRANCH_SELF_END,
        }
    }

    /// Indentation added below a line drawn with this branch
    fn continuation(self) -> &'static str {
        match self {
            Branch::Fork | Branch::SelfFork => TREE_TRUNK,
            Branch::End | Branch::SelfEnd => TREE_EMPTY,
            Branch::Root => "",
        }
    }
}

struct Frame {
    vertex: VertexId,
    remaining: usize,
    indent: String,
    branch: Branch,
}

/// Print `root` and its descendants down to `depth` levels as a tree.
///
/// Children are listed in out-edge insertion order; a vertex reached twice
/// along different paths is printed each time.
pub fn print_vertex_children<G: GraphAccess, W: Write>(
    graph: &G,
    root: VertexId,
    depth: usize,
    out: &mut W,
) -> Result<()> {
    graph.ensure_vertex(root)?;

    let mut stack = vec![Frame {
        vertex: root,
        remaining: depth,
        indent: String::new(),
        branch: Branch::Root,
    }];

    while let Some(frame) = stack.pop() {
        writeln!(
            out,
            "{}{}{}",
            frame.indent,
            frame.branch.prefix(),
            format_vertex(graph, frame.vertex)?
        )?;

        let is_self_line = matches!(frame.branch, Branch::SelfFork | Branch::SelfEnd);
        if is_self_line || frame.remaining == 0 {
            continue;
        }

        let children: Vec<VertexId> = graph.out_neighbors(frame.vertex).collect();
        let child_indent = format!("{}{}", frame.indent, frame.branch.continuation());
        let last = children.len().saturating_sub(1);

        // reversed so the first child is popped first
        for (pos, &child) in children.iter().enumerate().rev() {
            let is_last = pos == last;
            let branch = match (child == frame.vertex, is_last) {
                (true, false) => Branch::SelfFork,
                (true, true) => Branch::SelfEnd,
                (false, false) => Branch::Fork,
                (false, true) => Branch::End,
            };
            stack.push(Frame {
                vertex: child,
                remaining: frame.remaining - 1,
                indent: child_indent.clone(),
                branch,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use pretty_assertions::assert_eq;

    fn render<F: FnOnce(&mut Vec<u8>) -> Result<()>>(f: F) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_print_vertex() {
        let graph = fixtures::twelve();
        let text = render(|w| print_vertex(&graph, VertexId(0), w));
        assert_eq!(text, "vtx[0] in: 0 out: 2 val: v00\n");
    }

    #[test]
    fn test_print_vertex_children_depth_three() {
        let graph = fixtures::twelve();
        let text = render(|w| print_vertex_children(&graph, VertexId(1), 3, w));

        let expected = [
            "vtx[1] in: 1 out: 3 val: v01",
            "├─ vtx[2] in: 2 out: 1 val: v02",
            "│  └─ vtx[5] in: 1 out: 2 val: v05",
            "│     ├─ vtx[10] in: 1 out: 1 val: v10",
            "│     └─ vtx[11] in: 1 out: 1 val: v11",
            "├─ vtx[3] in: 1 out: 2 val: v03",
            "│  ├─ vtx[6] in: 4 out: 1 val: v06",
            "│  │  └● vtx[6] in: 4 out: 1 val: v06",
            "│  └─ vtx[7] in: 2 out: 0 val: v07",
            "└─ vtx[4] in: 1 out: 3 val: v04",
            "   ├─ vtx[7] in: 2 out: 0 val: v07",
            "   ├─ vtx[8] in: 1 out: 1 val: v08",
            "   │  └─ vtx[6] in: 4 out: 1 val: v06",
            "   └─ vtx[9] in: 2 out: 0 val: v09",
        ];
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines, expected);
    }

    #[test]
    fn test_depth_zero_prints_root_only() {
        let graph = fixtures::twelve();
        let text = render(|w| print_vertex_children(&graph, VertexId(1), 0, w));
        assert_eq!(text.lines().count(), 1);
    }

    #[test]
    fn test_self_loop_before_other_children() {
        let graph = fixtures::graph(&["a", "b"], &[(0, 0), (0, 1)]);
        let text = render(|w| print_vertex_children(&graph, VertexId(0), 1, w));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                "vtx[0] in: 1 out: 2 val: a",
                "├● vtx[0] in: 1 out: 2 val: a",
                "└─ vtx[1] in: 1 out: 0 val: b",
            ]
        );
    }

    #[test]
    fn test_print_all() {
        let graph = fixtures::graph(&["a", "b"], &[(0, 1)]);
        let text = render(|w| print_all_vertices(&graph, w));
        assert_eq!(text, "vtx[0] in: 0 out: 1 val: a\nvtx[1] in: 1 out: 0 val: b\n");
    }
}
