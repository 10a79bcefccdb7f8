//! Undirected connected components
//!
//! [`ConnectedComponents`] walks the graph ignoring edge direction and yields
//! one [`GraphView`] per component. It owns the pool of unvisited vertices
//! and drains it as it goes, so it can be iterated exactly once.

use std::collections::BTreeSet;

use crate::shared::models::{Graph, GraphAccess, GraphView, VertexId};

pub struct ConnectedComponents<'a, G: GraphAccess> {
    graph: &'a G,
    unvisited: BTreeSet<VertexId>,
}

impl<'a, G: GraphAccess> ConnectedComponents<'a, G> {
    pub fn new(graph: &'a G) -> Self {
        Self {
            graph,
            unvisited: graph.vertices().collect(),
        }
    }
}

impl<'a, G: GraphAccess> Iterator for ConnectedComponents<'a, G> {
    type Item = GraphView<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let seed = self.unvisited.pop_first()?;

        let mut component = vec![seed];
        let mut stack = vec![seed];
        while let Some(current) = stack.pop() {
            for next in self.graph.undirected_neighbors(current) {
                if self.unvisited.remove(&next) {
                    component.push(next);
                    stack.push(next);
                }
            }
        }
        Some(self.graph.sub_view(component))
    }
}

/// Components of `graph` in order of their smallest vertex
pub fn connected_components<G: GraphAccess>(graph: &G) -> ConnectedComponents<'_, G> {
    ConnectedComponents::new(graph)
}

pub fn count_components<G: GraphAccess>(graph: &G) -> usize {
    connected_components(graph).count()
}

/// The component with most vertices as a compact graph; the earliest wins ties
pub fn largest_component<G: GraphAccess>(graph: &G) -> Option<Graph> {
    let mut best: Option<(usize, GraphView<'_>)> = None;
    for view in connected_components(graph) {
        let size = view.vertex_count();
        if best.as_ref().map_or(true, |(s, _)| size > *s) {
            best = Some((size, view));
        }
    }
    best.map(|(_, view)| view.materialize())
}
