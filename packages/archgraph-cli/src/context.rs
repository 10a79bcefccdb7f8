use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use tracing::info;

use archgraph_core::features::matcher::{resolve_vertex_identifiers, PatternSyntax};
use archgraph_core::features::spec_loader::ArchitectureSpec;
use archgraph_core::{AnalysisConfig, Graph, GraphAccess, GraphStore, VertexId};
use archgraph_storage::FileGraphStore;

/// Settings and adapters shared by every command
pub struct Context {
    pub config: AnalysisConfig,
    pub syntax: PatternSyntax,
    pub raw: bool,
    pub store: FileGraphStore,
    out: Option<PathBuf>,
}

impl Context {
    pub fn new(config_path: Option<&Path>, raw: bool, out: Option<PathBuf>) -> Result<Self> {
        let config = match config_path {
            Some(path) => AnalysisConfig::from_yaml(path)
                .with_context(|| format!("failed to load config {}", path.display()))?,
            None => AnalysisConfig::default(),
        };
        Ok(Self {
            syntax: PatternSyntax::from(&config),
            config,
            raw,
            store: FileGraphStore::new(),
            out,
        })
    }

    pub fn load_graph(&self, path: &Path) -> Result<Graph> {
        self.store
            .load(path)
            .with_context(|| format!("failed to load graph {}", path.display()))
    }

    pub fn load_spec(&self, path: &Path) -> Result<ArchitectureSpec> {
        ArchitectureSpec::from_path(path)
            .with_context(|| format!("failed to load architecture {}", path.display()))
    }

    /// Resolve index/label tokens; unresolved ones are logged and dropped
    pub fn resolve<G: GraphAccess>(&self, graph: &G, tokens: &[String]) -> Vec<VertexId> {
        resolve_vertex_identifiers(graph, tokens, self.config.ambiguity_policy).vertices
    }

    /// Resolve exactly one vertex or fail
    pub fn resolve_one<G: GraphAccess>(&self, graph: &G, token: &str) -> Result<VertexId> {
        let resolution = resolve_vertex_identifiers(graph, &[token], self.config.ambiguity_policy);
        match resolution.vertices.first() {
            Some(&v) => Ok(v),
            None => bail!("no vertex matches '{}'", token),
        }
    }

    /// `-o` if given, else `<output_dir>/<command>_output.dot`
    pub fn export_path(&self, command: &str) -> PathBuf {
        self.out.clone().unwrap_or_else(|| {
            Path::new(&self.config.output_dir).join(format!("{}_output.dot", command))
        })
    }

    pub fn export<G: GraphAccess>(&self, graph: &G, command: &str) -> Result<PathBuf> {
        let path = self.export_path(command);
        self.store
            .save_view(graph, &path)
            .with_context(|| format!("failed to export {}", path.display()))?;
        info!("Exported {} vertices to {}", graph.vertex_count(), path.display());
        Ok(path)
    }
}
