//! Component coherence
//!
//! A component is coherent when the shortest paths among its matched
//! vertices join them into one undirected component.

use std::io::Write;

use serde::Serialize;

use crate::errors::{ArchGraphError, Result};
use crate::features::partition::count_components;
use crate::features::rewrite::connections_view;
use crate::shared::models::{GraphAccess, VertexId};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoherenceEntry {
    pub component: String,
    pub vertex: VertexId,
    /// Undirected components of the connections view over the children
    pub unconnected: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CoherenceReport {
    pub entries: Vec<CoherenceEntry>,
}

impl CoherenceReport {
    pub fn violations(&self) -> impl Iterator<Item = &CoherenceEntry> + '_ {
        self.entries.iter().filter(|e| e.unconnected > 1)
    }
}

/// First visible vertex labelled `label`
pub fn find_umbrella<G: GraphAccess>(graph: &G, label: &str) -> Result<VertexId> {
    graph
        .vertices()
        .find(|&v| graph.label(v).map_or(false, |l| l == label))
        .ok_or_else(|| ArchGraphError::invalid_argument(format!("no vertex labelled '{}'", label)))
}

pub(crate) fn distinct_out_neighbors<G: GraphAccess>(graph: &G, id: VertexId) -> Vec<VertexId> {
    let mut out: Vec<VertexId> = Vec::new();
    for n in graph.out_neighbors(id) {
        if !out.contains(&n) {
            out.push(n);
        }
    }
    out
}

/// Component vertices two levels below `umbrella`, first-seen order
pub fn component_vertices<G: GraphAccess>(graph: &G, umbrella: VertexId) -> Result<Vec<VertexId>> {
    graph.ensure_vertex(umbrella)?;
    let mut components = Vec::new();
    for layer in distinct_out_neighbors(graph, umbrella) {
        for component in distinct_out_neighbors(graph, layer) {
            if !components.contains(&component) {
                components.push(component);
            }
        }
    }
    Ok(components)
}

/// Coherence of every component below the umbrella labelled `umbrella_label`
pub fn coherence_report<G: GraphAccess>(graph: &G, umbrella_label: &str) -> Result<CoherenceReport> {
    let umbrella = find_umbrella(graph, umbrella_label)?;
    let mut entries = Vec::new();
    for component in component_vertices(graph, umbrella)? {
        let children = distinct_out_neighbors(graph, component);
        let view = connections_view(graph, &children)?;
        entries.push(CoherenceEntry {
            component: graph.label(component)?.to_string(),
            vertex: component,
            unconnected: count_components(&view),
        });
    }
    Ok(CoherenceReport { entries })
}

/// `Unconnected | Component name` table of the violations
pub fn write_coherence_report<W: Write>(report: &CoherenceReport, out: &mut W) -> Result<()> {
    writeln!(
        out,
        "Listing number of unconnected Graphs in Components, where number > 1, i.e. a coherence violation."
    )?;
    writeln!(out, "Unconnected | Component name")?;
    writeln!(out, "------------+-------------------")?;
    for entry in report.violations() {
        writeln!(out, "{:>11} | {:<}", entry.unconnected, entry.component)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::UmbrellaLabels;
    use crate::features::fixtures;
    use crate::features::hierarchy::build_hierarchy;
    use crate::features::matcher::PatternSyntax;
    use crate::features::spec_loader::ArchitectureSpec;
    use pretty_assertions::assert_eq;

    fn hierarchy_graph() -> crate::shared::models::Graph {
        let spec = ArchitectureSpec::from_json_str(
            r#"[
              {"v03;v06": {"domain": "d", "contextGroup": "C", "abstractionLayer": "L"}},
              {"v07;v09": {"domain": "d", "contextGroup": "C", "abstractionLayer": "L"}}
            ]"#,
        )
        .unwrap();
        let mut graph = fixtures::twelve();
        build_hierarchy(&mut graph, &spec, &PatternSyntax::default(), &UmbrellaLabels::default()).unwrap();
        graph
    }

    #[test]
    fn test_coherence_counts() {
        let graph = hierarchy_graph();
        let report = coherence_report(&graph, "CONTEXT_GROUPS").unwrap();

        assert_eq!(report.entries.len(), 2);
        // 3 -> 6 joins the first; 7 and 9 are unrelated
        assert_eq!(report.entries[0].unconnected, 1);
        assert_eq!(report.entries[1].unconnected, 2);

        let violations: Vec<&str> = report.violations().map(|e| e.component.as_str()).collect();
        assert_eq!(violations, vec!["v07;v09"]);
    }

    #[test]
    fn test_report_table() {
        let graph = hierarchy_graph();
        let report = coherence_report(&graph, "CONTEXT_GROUPS").unwrap();
        let mut out = Vec::new();
        write_coherence_report(&report, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with("------------+-------------------\n          2 | v07;v09\n"));
    }

    #[test]
    fn test_missing_umbrella() {
        let graph = fixtures::twelve();
        assert!(coherence_report(&graph, "CONTEXT_GROUPS").is_err());
    }
}
