//! Domain layer: on-disk graph documents and formats
//!
//! - `GraphDocument`: compact, handle-free form of a graph
//! - `GraphFormat`: file format chosen by extension

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use archgraph_core::{Graph, GraphAccess, VertexId};

use crate::error::{Result, StorageError};

/// Compact graph form shared by every format.
///
/// Vertex `i` is `vertices[i]`; edges are `[source, target]` index pairs.
/// Building one from a graph renumbers live vertices to `0..n` in ascending
/// handle order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphDocument {
    pub vertices: Vec<String>,
    pub edges: Vec<[usize; 2]>,
}

impl GraphDocument {
    pub fn from_graph<G: GraphAccess>(graph: &G) -> Self {
        let mut index: Vec<Option<usize>> = vec![None; graph.vertex_bound()];
        let mut vertices = Vec::with_capacity(graph.vertex_count());
        for v in graph.vertices() {
            index[v.index()] = Some(vertices.len());
            vertices.push(graph.label(v).unwrap_or_default().to_string());
        }

        let edges = graph
            .edges()
            .filter_map(|e| Some([index[e.source.index()]?, index[e.target.index()]?]))
            .collect();
        Self { vertices, edges }
    }

    pub fn into_graph(self) -> Result<Graph> {
        let n = self.vertices.len();
        let mut graph = Graph::with_capacity(n, self.edges.len());
        for label in self.vertices {
            graph.add_vertex(label);
        }
        for (i, &[source, target]) in self.edges.iter().enumerate() {
            if source >= n || target >= n {
                return Err(StorageError::serialization(format!(
                    "edge {} references vertex {} but only {} vertices exist",
                    i,
                    source.max(target),
                    n
                )));
            }
            graph
                .add_edge(VertexId(source as u32), VertexId(target as u32))
                .map_err(|e| StorageError::serialization(e.to_string()))?;
        }
        Ok(graph)
    }
}

/// Graph file format
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphFormat {
    Dot,
    Json,
}

impl GraphFormat {
    /// Format from the file extension (`.dot`, `.gv`, `.json`)
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match extension.as_deref() {
            Some("dot") | Some("gv") => Ok(GraphFormat::Dot),
            Some("json") => Ok(GraphFormat::Json),
            _ => Err(StorageError::unsupported_format(path.display())),
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            GraphFormat::Dot => "dot",
            GraphFormat::Json => "json",
        }
    }
}

impl fmt::Display for GraphFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}
