//! DOT writer
//!
//! Every vertex gets a node statement (in handle order) before the edges,
//! so reading the file back reproduces the vertex order. Labels shared by
//! several vertices get a generated id plus a `label` attribute.

use std::fmt::Write;

use rustc_hash::{FxHashMap, FxHashSet};

use archgraph_core::{GraphAccess, VertexId};

/// `"text"` with quotes and backslashes escaped
pub fn quote_id(text: &str) -> String {
    let mut quoted = String::with_capacity(text.len() + 2);
    quoted.push('"');
    for c in text.chars() {
        if c == '"' || c == '\\' {
            quoted.push('\\');
        }
        quoted.push(c);
    }
    quoted.push('"');
    quoted
}

/// Node id per vertex: the label when unique, otherwise `<label>#<n>`
fn node_ids<G: GraphAccess>(graph: &G) -> FxHashMap<VertexId, String> {
    let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
    for v in graph.vertices() {
        *counts.entry(graph.label(v).unwrap_or_default()).or_default() += 1;
    }
    let taken: FxHashSet<&str> = counts.keys().copied().collect();

    let mut ids = FxHashMap::default();
    let mut suffix = 0;
    for v in graph.vertices() {
        let label = graph.label(v).unwrap_or_default();
        if counts.get(label).copied() == Some(1) {
            ids.insert(v, label.to_string());
            continue;
        }
        let id = loop {
            let candidate = format!("{}#{}", label, suffix);
            suffix += 1;
            if !taken.contains(candidate.as_str()) {
                break candidate;
            }
        };
        ids.insert(v, id);
    }
    ids
}

/// DOT text of everything `graph` shows
pub fn write_dot<G: GraphAccess>(graph: &G, name: &str) -> String {
    let ids = node_ids(graph);
    let mut out = String::with_capacity(64 * (graph.vertex_count() + 1));
    let _ = writeln!(out, "digraph {} {{", quote_id(name));

    for v in graph.vertices() {
        let label = graph.label(v).unwrap_or_default();
        match ids.get(&v) {
            Some(id) if id != label => {
                let _ = writeln!(out, "  {} [label={}];", quote_id(id), quote_id(label));
            }
            _ => {
                let _ = writeln!(out, "  {};", quote_id(label));
            }
        }
    }

    for e in graph.edges() {
        if let (Some(source), Some(target)) = (ids.get(&e.source), ids.get(&e.target)) {
            let _ = writeln!(out, "  {} -> {};", quote_id(source), quote_id(target));
        }
    }

    let _ = writeln!(out, "}}");
    out
}
