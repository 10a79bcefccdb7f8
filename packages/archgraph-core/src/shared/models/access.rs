//! Read-only graph access
//!
//! Every algorithm in the crate is written against [`GraphAccess`] so that it
//! runs unchanged on an owned [`Graph`] and on a filtered [`GraphView`].

use rustc_hash::FxHashMap;

use super::graph::{Direction, Edge, Graph};
use super::ids::VertexId;
use super::view::GraphView;
use crate::errors::{ArchGraphError, Result};

/// Read-only access to a (possibly filtered) directed graph.
///
/// Implementors provide the visibility predicates; traversal helpers are
/// derived from them and iterate in ascending handle order (vertices, edges)
/// or insertion order (adjacency).
pub trait GraphAccess {
    /// Underlying storage
    fn base(&self) -> &Graph;

    /// Whether `id` is a live, visible vertex
    fn has_vertex(&self, id: VertexId) -> bool;

    /// Whether `edge` is visible (its endpoints included)
    fn has_edge(&self, edge: &Edge) -> bool;

    fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.base().vertex_ids().filter(move |&v| self.has_vertex(v))
    }

    fn edges(&self) -> impl Iterator<Item = &Edge> + '_ {
        self.base().edge_records().filter(move |e| self.has_edge(e))
    }

    fn out_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        let visible = self.has_vertex(id);
        self.base()
            .out_edge_records(id)
            .filter(move |e| visible && self.has_edge(e))
    }

    fn in_edges(&self, id: VertexId) -> impl Iterator<Item = &Edge> + '_ {
        let visible = self.has_vertex(id);
        self.base()
            .in_edge_records(id)
            .filter(move |e| visible && self.has_edge(e))
    }

    /// Out-neighbours in insertion order; parallel edges repeat a neighbour
    fn out_neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_edges(id).map(|e| e.target)
    }

    /// In-neighbours in insertion order; parallel edges repeat a neighbour
    fn in_neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.in_edges(id).map(|e| e.source)
    }

    /// Neighbours reached by following visible edges in `direction`
    fn neighbors_directed(
        &self,
        id: VertexId,
        direction: Direction,
    ) -> impl Iterator<Item = VertexId> + '_ {
        let visible = self.has_vertex(id);
        let base = self.base();
        base.adjacency(id, direction)
            .iter()
            .filter_map(move |&e| base.edge(e).ok())
            .filter(move |e| visible && self.has_edge(e))
            .map(move |e| e.far_end(direction))
    }

    fn degree(&self, id: VertexId, direction: Direction) -> usize {
        self.neighbors_directed(id, direction).count()
    }

    /// Neighbours ignoring edge direction (out first, then in)
    fn undirected_neighbors(&self, id: VertexId) -> impl Iterator<Item = VertexId> + '_ {
        self.out_neighbors(id).chain(self.in_neighbors(id))
    }

    fn out_degree(&self, id: VertexId) -> usize {
        self.out_edges(id).count()
    }

    fn in_degree(&self, id: VertexId) -> usize {
        self.in_edges(id).count()
    }

    fn vertex_count(&self) -> usize {
        self.vertices().count()
    }

    fn edge_count(&self) -> usize {
        self.edges().count()
    }

    /// Upper bound on vertex handles; sized for per-vertex scratch tables
    fn vertex_bound(&self) -> usize {
        self.base().vertex_bound()
    }

    fn ensure_vertex(&self, id: VertexId) -> Result<()> {
        if self.has_vertex(id) {
            Ok(())
        } else {
            Err(ArchGraphError::VertexNotFound(id))
        }
    }

    fn label(&self, id: VertexId) -> Result<&str> {
        self.ensure_vertex(id)?;
        self.base().vertex(id).map(|v| v.label.as_str())
    }

    /// View over the same storage showing only `vertices` (those visible here)
    /// and the edges this accessor shows between them
    fn sub_view(&self, vertices: impl IntoIterator<Item = VertexId>) -> GraphView<'_> {
        let base = self.base();
        let mut vertex_mask = vec![false; base.vertex_bound()];
        for v in vertices {
            if self.has_vertex(v) {
                vertex_mask[v.index()] = true;
            }
        }
        let mut edge_mask = vec![false; base.edge_bound()];
        for e in self.edges() {
            edge_mask[e.id.index()] = true;
        }
        GraphView::from_masks(base, vertex_mask, edge_mask)
    }

    /// View equal to this accessor
    fn to_view(&self) -> GraphView<'_> {
        self.sub_view(self.vertices().collect::<Vec<_>>())
    }

    /// Copy visible vertices and edges into a fresh, compact graph.
    ///
    /// Handles are reassigned `0..n` in ascending order of the old handles;
    /// labels and edge multiplicity are kept.
    fn materialize(&self) -> Graph {
        self.materialize_with_map().0
    }

    /// Like [`materialize`](Self::materialize), also returning old → new handles
    fn materialize_with_map(&self) -> (Graph, FxHashMap<VertexId, VertexId>) {
        let base = self.base();
        let mut graph = Graph::with_capacity(self.vertex_count(), 0);
        let mut remap = FxHashMap::default();

        for old in self.vertices() {
            let label = base.vertex(old).map(|v| v.label.clone()).unwrap_or_default();
            remap.insert(old, graph.add_vertex(label));
        }
        for edge in self.edges() {
            if let (Some(&s), Some(&t)) = (remap.get(&edge.source), remap.get(&edge.target)) {
                // both endpoints were just added
                let _ = graph.add_edge(s, t);
            }
        }
        (graph, remap)
    }
}

impl GraphAccess for Graph {
    fn base(&self) -> &Graph {
        self
    }

    fn has_vertex(&self, id: VertexId) -> bool {
        self.contains_vertex(id)
    }

    fn has_edge(&self, edge: &Edge) -> bool {
        self.contains_edge(edge.id)
    }

    fn vertex_count(&self) -> usize {
        Graph::vertex_count(self)
    }

    fn edge_count(&self) -> usize {
        Graph::edge_count(self)
    }
}
