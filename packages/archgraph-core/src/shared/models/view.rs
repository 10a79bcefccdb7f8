//! Filtered projection of a graph
//!
//! A `GraphView` borrows a [`Graph`] and hides vertices and edges through two
//! boolean masks keyed by handle. An edge is visible only when its own mask
//! bit is set and both endpoints are visible. Any number of views can share
//! one graph; none of them copies vertex or edge storage.

use super::access::GraphAccess;
use super::graph::{Edge, Graph};
use super::ids::{EdgeId, VertexId};

#[derive(Debug, Clone)]
pub struct GraphView<'g> {
    graph: &'g Graph,
    vertex_mask: Vec<bool>,
    edge_mask: Vec<bool>,
}

impl<'g> GraphView<'g> {
    /// View showing every live vertex and edge
    pub fn full(graph: &'g Graph) -> Self {
        Self {
            graph,
            vertex_mask: vec![true; graph.vertex_bound()],
            edge_mask: vec![true; graph.edge_bound()],
        }
    }

    /// View showing nothing
    pub fn empty(graph: &'g Graph) -> Self {
        Self {
            graph,
            vertex_mask: vec![false; graph.vertex_bound()],
            edge_mask: vec![false; graph.edge_bound()],
        }
    }

    /// View showing `vertices` and every edge between them
    pub fn from_vertices(graph: &'g Graph, vertices: impl IntoIterator<Item = VertexId>) -> Self {
        let mut view = Self::empty(graph);
        view.edge_mask.fill(true);
        for v in vertices {
            view.show(v);
        }
        view
    }

    /// View from explicit masks; short masks are padded with `false`
    pub fn from_masks(graph: &'g Graph, mut vertex_mask: Vec<bool>, mut edge_mask: Vec<bool>) -> Self {
        vertex_mask.resize(graph.vertex_bound(), false);
        edge_mask.resize(graph.edge_bound(), false);
        Self {
            graph,
            vertex_mask,
            edge_mask,
        }
    }

    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    /// Make `id` visible (no effect on removed vertices)
    pub fn show(&mut self, id: VertexId) {
        if let Some(bit) = self.vertex_mask.get_mut(id.index()) {
            *bit = true;
        }
    }

    /// Hide one vertex; its incident edges disappear with it
    pub fn hide(&mut self, id: VertexId) {
        if let Some(bit) = self.vertex_mask.get_mut(id.index()) {
            *bit = false;
        }
    }

    /// Hide every vertex in `ids`
    pub fn hide_all(&mut self, ids: impl IntoIterator<Item = VertexId>) {
        for id in ids {
            self.hide(id);
        }
    }

    /// Keep only the currently visible vertices that are also in `ids`
    pub fn restrict(&mut self, ids: impl IntoIterator<Item = VertexId>) {
        let mut keep = vec![false; self.vertex_mask.len()];
        for id in ids {
            if let Some(bit) = keep.get_mut(id.index()) {
                *bit = true;
            }
        }
        for (bit, kept) in self.vertex_mask.iter_mut().zip(keep) {
            *bit &= kept;
        }
    }

    pub fn show_edge(&mut self, id: EdgeId) {
        if let Some(bit) = self.edge_mask.get_mut(id.index()) {
            *bit = true;
        }
    }

    pub fn hide_edge(&mut self, id: EdgeId) {
        if let Some(bit) = self.edge_mask.get_mut(id.index()) {
            *bit = false;
        }
    }

    /// Hide every edge; vertices stay as they are
    pub fn hide_all_edges(&mut self) {
        self.edge_mask.fill(false);
    }
}

impl GraphAccess for GraphView<'_> {
    fn base(&self) -> &Graph {
        self.graph
    }

    fn has_vertex(&self, id: VertexId) -> bool {
        self.vertex_mask.get(id.index()).copied().unwrap_or(false) && self.graph.contains_vertex(id)
    }

    fn has_edge(&self, edge: &Edge) -> bool {
        self.edge_mask.get(edge.id.index()).copied().unwrap_or(false)
            && self.graph.contains_edge(edge.id)
            && self.has_vertex(edge.source)
            && self.has_vertex(edge.target)
    }
}
