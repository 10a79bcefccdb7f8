use std::fs;
use std::path::Path;

use tracing::{debug, info};

use archgraph_core::{Graph, GraphAccess, GraphStore};

use super::dot::{parse_dot, write_dot};
use crate::domain::{GraphDocument, GraphFormat};
use crate::error::{ErrorKind, Result, StorageError};

/// File-backed store; the format follows the file extension
#[derive(Debug, Clone, Copy, Default)]
pub struct FileGraphStore;

fn io_at(path: &Path, err: std::io::Error) -> StorageError {
    StorageError::new(ErrorKind::IO, format!("{}: {}", path.display(), err)).with_source(err)
}

impl FileGraphStore {
    pub fn new() -> Self {
        Self
    }

    pub fn read(&self, path: &Path) -> Result<Graph> {
        let format = GraphFormat::from_path(path)?;
        let text = fs::read_to_string(path).map_err(|e| io_at(path, e))?;
        let graph = match format {
            GraphFormat::Dot => parse_dot(&text)?,
            GraphFormat::Json => serde_json::from_str::<GraphDocument>(&text)?.into_graph()?,
        };
        info!(
            "Loaded {} ({} vertices, {} edges)",
            path.display(),
            graph.vertex_count(),
            graph.edge_count()
        );
        Ok(graph)
    }

    pub fn write<G: GraphAccess>(&self, graph: &G, path: &Path) -> Result<()> {
        let format = GraphFormat::from_path(path)?;
        let text = match format {
            GraphFormat::Dot => {
                let name = path.file_stem().and_then(|s| s.to_str()).unwrap_or("graph");
                write_dot(graph, name)
            }
            GraphFormat::Json => serde_json::to_string_pretty(&GraphDocument::from_graph(graph))?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_at(parent, e))?;
        }
        fs::write(path, text).map_err(|e| io_at(path, e))?;
        debug!("Wrote {} as {}", path.display(), format);
        Ok(())
    }
}

impl GraphStore for FileGraphStore {
    fn load(&self, path: &Path) -> archgraph_core::Result<Graph> {
        Ok(self.read(path)?)
    }

    fn save(&self, graph: &Graph, path: &Path) -> archgraph_core::Result<()> {
        Ok(self.write(graph, path)?)
    }

    fn save_view<G: GraphAccess>(&self, view: &G, path: &Path) -> archgraph_core::Result<()> {
        Ok(self.write(view, path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use archgraph_core::VertexId;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_is_io_error() {
        let err = FileGraphStore.read(Path::new("/definitely/not/here.dot")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::IO);
        assert!(err.message.contains("here.dot"));
    }

    #[test]
    fn test_unknown_extension() {
        let dir = tempdir().unwrap();
        let graph = Graph::from_parts(["a"], &[]).unwrap();
        let err = FileGraphStore.write(&graph, &dir.path().join("g.gt")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::UnsupportedFormat);
    }

    #[test]
    fn test_save_creates_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/out/g.json");
        let graph = Graph::from_parts(["a", "b"], &[(0, 1)]).unwrap();

        FileGraphStore.save(&graph, &path).unwrap();
        let back = FileGraphStore.load(&path).unwrap();
        assert_eq!(back.label(VertexId(1)).unwrap(), "b");
        assert_eq!(back.edge_count(), 1);
    }

    #[test]
    fn test_malformed_json_is_serialization_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("bad.json");
        fs::write(&path, "{\"vertices\": [").unwrap();
        let err = FileGraphStore.read(&path).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Serialization);
    }
}
