//! Arena-backed directed graph
//!
//! Vertices and edges live in slot vectors addressed by [`VertexId`] /
//! [`EdgeId`]. Removal leaves a tombstone; handles are never reused, so the
//! index of a vertex is unique for the whole lifetime of the graph.
//!
//! Self-loops and parallel edges are stored as-is. Adjacency lists keep
//! insertion order, which is the order every traversal visits neighbours in.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::ids::{EdgeId, VertexId};
use crate::errors::{ArchGraphError, Result};

/// A named vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vertex {
    pub id: VertexId,
    /// Display name; not required to be unique
    pub label: String,
}

/// A directed edge `source -> target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edge {
    pub id: EdgeId,
    pub source: VertexId,
    pub target: VertexId,
}

impl Edge {
    /// Endpoint reached when following this edge in `direction`
    pub fn far_end(&self, direction: Direction) -> VertexId {
        match direction {
            Direction::Outgoing => self.target,
            Direction::Incoming => self.source,
        }
    }
}

/// Edge direction relative to a vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Outgoing,
    Incoming,
}

impl Direction {
    pub fn reversed(self) -> Self {
        match self {
            Direction::Outgoing => Direction::Incoming,
            Direction::Incoming => Direction::Outgoing,
        }
    }
}

/// Directed multigraph with string-labelled vertices
#[derive(Debug, Clone, Default)]
pub struct Graph {
    vertices: Vec<Option<Vertex>>,
    edges: Vec<Option<Edge>>,
    /// Outgoing edge handles per vertex slot
    out_adj: Vec<Vec<EdgeId>>,
    /// Incoming edge handles per vertex slot
    in_adj: Vec<Vec<EdgeId>>,
    live_vertices: usize,
    live_edges: usize,
}

impl Graph {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty graph with pre-allocated slots
    pub fn with_capacity(vertices: usize, edges: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertices),
            edges: Vec::with_capacity(edges),
            out_adj: Vec::with_capacity(vertices),
            in_adj: Vec::with_capacity(vertices),
            live_vertices: 0,
            live_edges: 0,
        }
    }

    /// Build a graph from labels and `(source, target)` pairs indexing into them.
    ///
    /// Vertex `i` of the result has handle `VertexId(i)`.
    pub fn from_parts<S: Into<String>>(
        labels: impl IntoIterator<Item = S>,
        edges: &[(u32, u32)],
    ) -> Result<Self> {
        let labels: Vec<String> = labels.into_iter().map(Into::into).collect();
        let mut graph = Graph::with_capacity(labels.len(), edges.len());
        for label in labels {
            graph.add_vertex(label);
        }
        for &(source, target) in edges {
            graph.add_edge(VertexId(source), VertexId(target))?;
        }
        Ok(graph)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Mutation
    // ═══════════════════════════════════════════════════════════════════════

    /// Add a vertex and return its fresh handle
    pub fn add_vertex(&mut self, label: impl Into<String>) -> VertexId {
        let id = VertexId(self.vertices.len() as u32);
        self.vertices.push(Some(Vertex {
            id,
            label: label.into(),
        }));
        self.out_adj.push(Vec::new());
        self.in_adj.push(Vec::new());
        self.live_vertices += 1;
        id
    }

    /// Add an edge; both endpoints must be live
    pub fn add_edge(&mut self, source: VertexId, target: VertexId) -> Result<EdgeId> {
        self.ensure_vertex(source)?;
        self.ensure_vertex(target)?;

        let id = EdgeId(self.edges.len() as u32);
        self.edges.push(Some(Edge { id, source, target }));
        self.out_adj[source.index()].push(id);
        self.in_adj[target.index()].push(id);
        self.live_edges += 1;
        Ok(id)
    }

    /// Remove one edge
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<Edge> {
        let edge = self
            .edges
            .get_mut(id.index())
            .and_then(Option::take)
            .ok_or(ArchGraphError::EdgeNotFound(id))?;

        self.out_adj[edge.source.index()].retain(|&e| e != id);
        self.in_adj[edge.target.index()].retain(|&e| e != id);
        self.live_edges -= 1;
        Ok(edge)
    }

    /// Remove a vertex together with every incident edge.
    ///
    /// Incident edges are collected before anything is removed, so the
    /// adjacency lists are never walked while being modified.
    pub fn remove_vertex(&mut self, id: VertexId) -> Result<Vertex> {
        self.ensure_vertex(id)?;

        let mut incident: Vec<EdgeId> = self.out_adj[id.index()]
            .iter()
            .chain(self.in_adj[id.index()].iter())
            .copied()
            .collect();
        // self-loops appear in both lists
        incident.sort_unstable();
        incident.dedup();

        for edge in incident {
            self.remove_edge(edge)?;
        }

        let vertex = self.vertices[id.index()]
            .take()
            .ok_or(ArchGraphError::VertexNotFound(id))?;
        self.live_vertices -= 1;
        Ok(vertex)
    }

    /// Remove several vertices; duplicates are ignored
    pub fn remove_vertices(&mut self, ids: impl IntoIterator<Item = VertexId>) -> Result<usize> {
        let mut ids: Vec<VertexId> = ids.into_iter().collect();
        ids.sort_unstable();
        ids.dedup();
        for &id in &ids {
            self.ensure_vertex(id)?;
        }
        for &id in &ids {
            self.remove_vertex(id)?;
        }
        debug!("Removed {} vertices", ids.len());
        Ok(ids.len())
    }

    /// Replace the label of a vertex
    pub fn set_label(&mut self, id: VertexId, label: impl Into<String>) -> Result<()> {
        let vertex = self
            .vertices
            .get_mut(id.index())
            .and_then(Option::as_mut)
            .ok_or(ArchGraphError::VertexNotFound(id))?;
        vertex.label = label.into();
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Queries
    // ═══════════════════════════════════════════════════════════════════════

    pub fn contains_vertex(&self, id: VertexId) -> bool {
        matches!(self.vertices.get(id.index()), Some(Some(_)))
    }

    pub fn contains_edge(&self, id: EdgeId) -> bool {
        matches!(self.edges.get(id.index()), Some(Some(_)))
    }

    pub fn ensure_vertex(&self, id: VertexId) -> Result<()> {
        if self.contains_vertex(id) {
            Ok(())
        } else {
            Err(ArchGraphError::VertexNotFound(id))
        }
    }

    pub fn vertex(&self, id: VertexId) -> Result<&Vertex> {
        self.vertices
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(ArchGraphError::VertexNotFound(id))
    }

    pub fn edge(&self, id: EdgeId) -> Result<&Edge> {
        self.edges
            .get(id.index())
            .and_then(Option::as_ref)
            .ok_or(ArchGraphError::EdgeNotFound(id))
    }

    /// Number of live vertices
    pub fn vertex_count(&self) -> usize {
        self.live_vertices
    }

    /// Number of live edges
    pub fn edge_count(&self) -> usize {
        self.live_edges
    }

    /// Number of vertex slots ever allocated (upper bound for masks)
    pub fn vertex_bound(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edge slots ever allocated (upper bound for masks)
    pub fn edge_bound(&self) -> usize {
        self.edges.len()
    }

    /// Live vertex handles in ascending order
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.vertices.iter().flatten().map(|v| v.id)
    }

    /// Live edges in ascending handle order
    pub fn edge_records(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.edges.iter().flatten()
    }

    /// Outgoing edges of `id` in insertion order (empty for unknown handles)
    pub fn out_edge_records(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.out_adj
            .get(id.index())
            .into_iter()
            .flatten()
            .filter_map(move |e| self.edges[e.index()].as_ref())
    }

    /// Incoming edges of `id` in insertion order (empty for unknown handles)
    pub fn in_edge_records(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        self.in_adj
            .get(id.index())
            .into_iter()
            .flatten()
            .filter_map(move |e| self.edges[e.index()].as_ref())
    }

    /// Edge handles adjacent to `id` in `direction`, insertion order
    pub fn adjacency(&self, id: VertexId, direction: Direction) -> &[EdgeId] {
        let lists = match direction {
            Direction::Outgoing => &self.out_adj,
            Direction::Incoming => &self.in_adj,
        };
        lists.get(id.index()).map(Vec::as_slice).unwrap_or(&[])
    }

    /// First vertex (by handle order) whose label equals `label`
    pub fn find_by_label(&self, label: &str) -> Option<VertexId> {
        self.vertices
            .iter()
            .flatten()
            .find(|v| v.label == label)
            .map(|v| v.id)
    }

    /// Every vertex whose label equals `label`, in handle order
    pub fn find_all_by_label(&self, label: &str) -> Vec<VertexId> {
        self.vertices
            .iter()
            .flatten()
            .filter(|v| v.label == label)
            .map(|v| v.id)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle_with_loop() -> Graph {
        // a -> b -> c -> a, c -> c
        Graph::from_parts(["a", "b", "c"], &[(0, 1), (1, 2), (2, 0), (2, 2)]).unwrap()
    }

    #[test]
    fn test_handles_are_sequential() {
        let mut graph = Graph::new();
        assert_eq!(graph.add_vertex("x"), VertexId(0));
        assert_eq!(graph.add_vertex("y"), VertexId(1));
        assert_eq!(graph.vertex_count(), 2);
    }

    #[test]
    fn test_handles_not_reused_after_removal() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a");
        graph.remove_vertex(a).unwrap();
        let b = graph.add_vertex("b");
        assert_ne!(a, b);
        assert!(!graph.contains_vertex(a));
        assert!(matches!(graph.vertex(a), Err(ArchGraphError::VertexNotFound(_))));
    }

    #[test]
    fn test_add_edge_requires_live_endpoints() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a");
        assert!(graph.add_edge(a, VertexId(7)).is_err());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_parallel_edges_are_kept() {
        let graph = Graph::from_parts(["a", "b"], &[(0, 1), (0, 1)]).unwrap();
        assert_eq!(graph.edge_count(), 2);
        assert_eq!(graph.out_edge_records(VertexId(0)).count(), 2);
        assert_eq!(graph.in_edge_records(VertexId(1)).count(), 2);
    }

    #[test]
    fn test_remove_vertex_cascades_edges() {
        let mut graph = triangle_with_loop();
        graph.remove_vertex(VertexId(2)).unwrap();

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.in_edge_records(VertexId(0)).count(), 0);
        for edge in graph.edge_records() {
            assert!(graph.contains_vertex(edge.source));
            assert!(graph.contains_vertex(edge.target));
        }
    }

    #[test]
    fn test_remove_vertices_validates_first() {
        let mut graph = triangle_with_loop();
        let result = graph.remove_vertices([VertexId(0), VertexId(9)]);
        assert!(result.is_err());
        // nothing removed
        assert_eq!(graph.vertex_count(), 3);
    }

    #[test]
    fn test_find_by_label_first_match() {
        let graph = Graph::from_parts(["dup", "x", "dup"], &[]).unwrap();
        assert_eq!(graph.find_by_label("dup"), Some(VertexId(0)));
        assert_eq!(graph.find_all_by_label("dup"), vec![VertexId(0), VertexId(2)]);
        assert_eq!(graph.find_by_label("missing"), None);
    }

    #[test]
    fn test_set_label() {
        let mut graph = triangle_with_loop();
        graph.set_label(VertexId(1), "renamed").unwrap();
        assert_eq!(graph.vertex(VertexId(1)).unwrap().label, "renamed");
    }
}
