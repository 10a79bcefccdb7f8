use crate::errors::Result;
use crate::features::subgraph::collect_subgraph;
use crate::shared::models::{GraphAccess, GraphView, VertexId};

/// View without the descendants of `root`; `root` itself stays visible
pub fn exclude_subgraph<G: GraphAccess>(graph: &G, root: VertexId) -> Result<GraphView<'_>> {
    exclude_subgraphs(graph, &[root])
}

/// View without the descendants of every root.
///
/// A root that is a descendant of another root is hidden with that subtree.
pub fn exclude_subgraphs<'g, G: GraphAccess>(
    graph: &'g G,
    roots: &[VertexId],
) -> Result<GraphView<'g>> {
    let mut view = graph.to_view();
    for &root in roots {
        let descendants = collect_subgraph(graph, root)?;
        view.hide_all(descendants.into_iter().filter(|&v| v != root));
    }
    Ok(view)
}

/// View without exactly the given vertices (no descendant cascade)
pub fn exclude_nodes<'g, G: GraphAccess>(graph: &'g G, ids: &[VertexId]) -> Result<GraphView<'g>> {
    for &id in ids {
        graph.ensure_vertex(id)?;
    }
    let mut view = graph.to_view();
    view.hide_all(ids.iter().copied());
    Ok(view)
}
