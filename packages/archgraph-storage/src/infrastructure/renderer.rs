use std::fmt::Write as _;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use archgraph_core::{RenderSelection, Renderer};

use super::dot::quote_id;
use crate::error::{ErrorKind, StorageError};

/// Writes each selection as `<dir>/<stem>.dot`
#[derive(Debug, Clone, Copy, Default)]
pub struct DotRenderer;

/// DOT text for one selection; clusters are drawn as grey boxes
pub fn render_dot(selection: &RenderSelection) -> String {
    let mut out = String::with_capacity(4096);
    let _ = writeln!(out, "digraph {} {{", quote_id(&selection.name));
    let _ = writeln!(out, "  node [shape=box];");

    for (i, cluster) in selection.clusters.iter().enumerate() {
        let _ = writeln!(out, "  subgraph \"cluster_{}\" {{", i);
        let _ = writeln!(out, "    label={};", quote_id(&cluster.label));
        let _ = writeln!(out, "    style=filled;");
        let _ = writeln!(out, "    color=grey91;");
        for member in &cluster.members {
            let _ = writeln!(out, "    {};", quote_id(member));
        }
        let _ = writeln!(out, "  }}");
    }

    for vertex in &selection.vertices {
        if vertex.highlighted {
            let _ = writeln!(
                out,
                "  {} [label={}, style=filled, fillcolor=\"#ff8c00\"];",
                quote_id(&vertex.key),
                quote_id(&vertex.label)
            );
        } else {
            let _ = writeln!(out, "  {} [label={}];", quote_id(&vertex.key), quote_id(&vertex.label));
        }
    }

    for (source, target) in &selection.edges {
        let _ = writeln!(out, "  {} -> {};", quote_id(source), quote_id(target));
    }
    let _ = writeln!(out, "}}");
    out
}

impl Renderer for DotRenderer {
    fn render(&self, selection: &RenderSelection, dir: &Path) -> archgraph_core::Result<PathBuf> {
        let io_at = |path: &Path, err: std::io::Error| {
            StorageError::new(ErrorKind::IO, format!("{}: {}", path.display(), err)).with_source(err)
        };
        fs::create_dir_all(dir).map_err(|e| io_at(dir, e))?;
        let path = dir.join(format!("{}.dot", selection.file_stem()));
        fs::write(&path, render_dot(selection)).map_err(|e| io_at(path.as_path(), e))?;
        debug!(
            "Rendered '{}' ({} vertices) to {}",
            selection.name,
            selection.vertices.len(),
            path.display()
        );
        Ok(path)
    }
}
