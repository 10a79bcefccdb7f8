use std::path::Path;

use crate::errors::Result;
use crate::shared::models::{Graph, GraphAccess};

/// Persistence of named-vertex directed graphs.
///
/// # Contract
///
/// - `load(save(g))` has the same vertex label multiset and edge multiset as
///   `g`. Handles may be renumbered.
/// - Failures (missing file, malformed content) are fatal for the caller and
///   surface as [`ArchGraphError::Store`](crate::errors::ArchGraphError::Store)
///   or `Io`.
pub trait GraphStore: Send + Sync {
    /// Load a graph from `path`
    fn load(&self, path: &Path) -> Result<Graph>;

    /// Persist `graph` to `path`, replacing any existing file
    fn save(&self, graph: &Graph, path: &Path) -> Result<()>;

    /// Persist only what `view` shows
    fn save_view<G: GraphAccess>(&self, view: &G, path: &Path) -> Result<()>
    where
        Self: Sized,
    {
        self.save(&view.materialize(), path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::models::{GraphView, VertexId};
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryStore {
        saved: Mutex<Vec<(PathBuf, Graph)>>,
    }

    impl GraphStore for MemoryStore {
        fn load(&self, path: &Path) -> Result<Graph> {
            let saved = self.saved.lock().unwrap();
            saved
                .iter()
                .rev()
                .find(|(p, _)| p == path)
                .map(|(_, g)| g.clone())
                .ok_or_else(|| crate::errors::ArchGraphError::invalid_argument("not saved"))
        }

        fn save(&self, graph: &Graph, path: &Path) -> Result<()> {
            self.saved
                .lock()
                .unwrap()
                .push((path.to_path_buf(), graph.clone()));
            Ok(())
        }
    }

    #[test]
    fn test_save_view_materializes() {
        let graph = Graph::from_parts(["a", "b", "c"], &[(0, 1), (1, 2)]).unwrap();
        let mut view = GraphView::full(&graph);
        view.hide(VertexId(0));

        let store = MemoryStore::default();
        let path = Path::new("view.dot");
        store.save_view(&view, path).unwrap();

        let loaded = store.load(path).unwrap();
        assert_eq!(loaded.vertex_count(), 2);
        assert_eq!(loaded.edge_count(), 1);
        assert_eq!(loaded.label(VertexId(0)).unwrap(), "b");
    }
}
