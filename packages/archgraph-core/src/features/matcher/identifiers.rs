use serde::Serialize;
use tracing::warn;

use crate::config::AmbiguityPolicy;
use crate::shared::models::{GraphAccess, VertexId};

/// Outcome of resolving a mixed list of index and label tokens
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct IdentifierResolution {
    /// Resolved vertices in token order (repeats kept)
    pub vertices: Vec<VertexId>,
    /// Tokens that named no visible vertex
    pub unresolved: Vec<String>,
    /// Label tokens shared by several vertices
    pub ambiguous: Vec<String>,
}

impl IdentifierResolution {
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Resolve `tokens` against `graph`.
///
/// A token that parses as an index of a visible vertex is that vertex.
/// Anything else is looked up as an exact label; with several candidates the
/// lowest handle wins under [`AmbiguityPolicy::FirstMatch`], while
/// [`AmbiguityPolicy::Reject`] drops the token. Unresolvable tokens are
/// logged and dropped.
pub fn resolve_vertex_identifiers<G: GraphAccess, S: AsRef<str>>(
    graph: &G,
    tokens: &[S],
    policy: AmbiguityPolicy,
) -> IdentifierResolution {
    let mut resolution = IdentifierResolution::default();

    for token in tokens {
        let token = token.as_ref().trim();

        if let Ok(id) = token.parse::<VertexId>() {
            if graph.has_vertex(id) {
                resolution.vertices.push(id);
                continue;
            }
        }

        let mut candidates = graph
            .vertices()
            .filter(|&v| graph.label(v).map_or(false, |l| l == token));

        let Some(first) = candidates.next() else {
            warn!("Could not resolve vertex '{}'", token);
            resolution.unresolved.push(token.to_string());
            continue;
        };

        let others = candidates.count();
        if others == 0 {
            resolution.vertices.push(first);
            continue;
        }

        resolution.ambiguous.push(token.to_string());
        match policy {
            AmbiguityPolicy::FirstMatch => {
                warn!(
                    "Label '{}' names {} vertices; using vtx[{}]",
                    token,
                    others + 1,
                    first
                );
                resolution.vertices.push(first);
            }
            AmbiguityPolicy::Reject => {
                warn!("Label '{}' names {} vertices; skipped", token, others + 1);
                resolution.unresolved.push(token.to_string());
            }
        }
    }

    resolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use crate::shared::models::{Graph, GraphView};
    use pretty_assertions::assert_eq;

    fn graph() -> Graph {
        fixtures::graph(&["libA", "libB", "libA", "7"], &[(0, 1)])
    }

    #[test]
    fn test_indices_and_labels() {
        let graph = graph();
        let res = resolve_vertex_identifiers(&graph, &["1", "libB", " 0 "], AmbiguityPolicy::FirstMatch);
        assert_eq!(res.vertices, vec![VertexId(1), VertexId(1), VertexId(0)]);
        assert!(res.is_complete());
        assert!(res.ambiguous.is_empty());
    }

    #[test]
    fn test_unresolved_tokens_are_dropped() {
        let graph = graph();
        let res = resolve_vertex_identifiers(&graph, &["libC", "libB"], AmbiguityPolicy::FirstMatch);
        assert_eq!(res.vertices, vec![VertexId(1)]);
        assert_eq!(res.unresolved, vec!["libC".to_string()]);
    }

    #[test]
    fn test_first_match_wins() {
        let graph = graph();
        let res = resolve_vertex_identifiers(&graph, &["libA"], AmbiguityPolicy::FirstMatch);
        assert_eq!(res.vertices, vec![VertexId(0)]);
        assert_eq!(res.ambiguous, vec!["libA".to_string()]);
    }

    #[test]
    fn test_reject_policy() {
        let graph = graph();
        let res = resolve_vertex_identifiers(&graph, &["libA", "libB"], AmbiguityPolicy::Reject);
        assert_eq!(res.vertices, vec![VertexId(1)]);
        assert_eq!(res.unresolved, vec!["libA".to_string()]);
    }

    #[test]
    fn test_index_outside_graph_falls_back_to_label() {
        let graph = graph();
        // no vertex 7, but vertex 3 is labelled "7"
        let res = resolve_vertex_identifiers(&graph, &["7", "3"], AmbiguityPolicy::FirstMatch);
        assert_eq!(res.vertices, vec![VertexId(3), VertexId(3)]);
    }

    #[test]
    fn test_hidden_vertices_do_not_resolve() {
        let graph = graph();
        let mut view = GraphView::full(&graph);
        view.hide(VertexId(0));
        let res = resolve_vertex_identifiers(&view, &["0", "libA"], AmbiguityPolicy::Reject);
        // "0" falls through to label lookup, "libA" now names only vtx[2]
        assert_eq!(res.vertices, vec![VertexId(2)]);
        assert_eq!(res.unresolved, vec!["0".to_string()]);
    }
}
