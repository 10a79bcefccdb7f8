use std::path::{Path, PathBuf};

use crate::errors::Result;
use crate::shared::models::GraphAccess;

/// One node of a render selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderVertex {
    /// Identifier used by edges and clusters; unique within the selection
    pub key: String,
    pub label: String,
    pub highlighted: bool,
}

/// A labelled box around some nodes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderCluster {
    pub label: String,
    /// Keys of member nodes
    pub members: Vec<String>,
}

/// Vertex/edge selection handed to a [`Renderer`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderSelection {
    pub name: String,
    pub vertices: Vec<RenderVertex>,
    pub edges: Vec<(String, String)>,
    pub clusters: Vec<RenderCluster>,
}

impl RenderSelection {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Everything `graph` shows, keyed by vertex handle
    pub fn from_access<G: GraphAccess>(name: impl Into<String>, graph: &G) -> Self {
        let mut selection = Self::new(name);
        for v in graph.vertices() {
            let label = graph.label(v).unwrap_or_default().to_string();
            selection.add_vertex(v.to_string(), label);
        }
        for e in graph.edges() {
            selection.add_edge(e.source.to_string(), e.target.to_string());
        }
        selection
    }

    /// Add a node unless one with the same key exists
    pub fn add_vertex(&mut self, key: impl Into<String>, label: impl Into<String>) -> &mut Self {
        let key = key.into();
        if !self.vertices.iter().any(|v| v.key == key) {
            self.vertices.push(RenderVertex {
                key,
                label: label.into(),
                highlighted: false,
            });
        }
        self
    }

    pub fn highlight(&mut self, key: &str) -> &mut Self {
        for v in self.vertices.iter_mut().filter(|v| v.key == key) {
            v.highlighted = true;
        }
        self
    }

    pub fn add_edge(&mut self, source: impl Into<String>, target: impl Into<String>) -> &mut Self {
        self.edges.push((source.into(), target.into()));
        self
    }

    pub fn add_cluster(&mut self, label: impl Into<String>, members: Vec<String>) -> &mut Self {
        self.clusters.push(RenderCluster {
            label: label.into(),
            members,
        });
        self
    }

    /// File name (without extension) derived from the selection name
    pub fn file_stem(&self) -> String {
        sanitize_file_name(&self.name)
    }
}

/// Replace characters that would create directories or break shells
pub fn sanitize_file_name(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '/' | ' ' | '&' => '_',
            other => other,
        })
        .collect()
}

/// Turns a selection into a file (image, DOT text, ...)
pub trait Renderer: Send + Sync {
    /// Write `selection` into directory `dir` and return the written path
    fn render(&self, selection: &RenderSelection, dir: &Path) -> Result<PathBuf>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{Graph, GraphView, VertexId};

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("Audio / Video"), "Audio___Video");
        assert_eq!(sanitize_file_name("Log&Trace"), "Log_Trace");
        assert_eq!(sanitize_file_name("plain"), "plain");
    }

    #[test]
    fn test_from_access_uses_handles_as_keys() {
        let graph = Graph::from_parts(["a", "b", "c"], &[(0, 1), (1, 2)]).unwrap();
        let view = GraphView::from_vertices(&graph, [VertexId(1), VertexId(2)]);
        let mut selection = RenderSelection::from_access("sub1", &view);
        selection.highlight("1");

        assert_eq!(selection.vertices.len(), 2);
        assert_eq!(selection.edges, vec![("1".to_string(), "2".to_string())]);
        assert!(selection.vertices[0].highlighted);
        assert!(!selection.vertices[1].highlighted);
    }

    #[test]
    fn test_duplicate_keys_are_ignored() {
        let mut selection = RenderSelection::new("x");
        selection.add_vertex("k", "first").add_vertex("k", "second");
        assert_eq!(selection.vertices.len(), 1);
        assert_eq!(selection.vertices[0].label, "first");
    }
}
