//! Search-name ↔ original-name mapping
//!
//! The specification exists twice: once with the architecture's original
//! component names and once with the search patterns used against the
//! dependency graph. Entries correspond by position.

use rustc_hash::FxHashMap;
use tracing::warn;

use super::flatten::ArchitectureSpec;
use crate::errors::{ArchGraphError, Result};
use crate::shared::models::{Graph, VertexId};

#[derive(Debug, Clone, Default)]
pub struct NameConverter {
    to_original: FxHashMap<String, String>,
    to_search: FxHashMap<String, String>,
}

impl NameConverter {
    /// Pair `original` and `search` component lists by position
    pub fn from_specs(original: &ArchitectureSpec, search: &ArchitectureSpec) -> Result<Self> {
        if original.len() != search.len() {
            return Err(ArchGraphError::spec(format!(
                "name conversion needs equally long specifications ({} original vs {} search names)",
                original.len(),
                search.len()
            )));
        }
        Ok(Self::from_pairs(
            original.all_components().into_iter().zip(search.all_components()),
        ))
    }

    /// Build from `(original, search)` pairs
    pub fn from_pairs<O: Into<String>, S: Into<String>>(pairs: impl IntoIterator<Item = (O, S)>) -> Self {
        let mut converter = Self::default();
        for (original, search) in pairs {
            let (original, search) = (original.into(), search.into());
            converter.to_original.insert(search.clone(), original.clone());
            converter.to_search.insert(original, search);
        }
        converter
    }

    pub fn original_name(&self, search_name: &str) -> Option<&str> {
        self.to_original.get(search_name).map(String::as_str)
    }

    pub fn search_name(&self, original_name: &str) -> Option<&str> {
        self.to_search.get(original_name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.to_original.len()
    }

    pub fn is_empty(&self) -> bool {
        self.to_original.is_empty()
    }

    /// Relabel `vertices` from search names to original names.
    ///
    /// Labels without a mapping are kept and logged. Returns the number of
    /// renamed vertices.
    pub fn rename_vertices(&self, graph: &mut Graph, vertices: &[VertexId]) -> Result<usize> {
        let mut renamed = 0;
        for &v in vertices {
            let label = graph.vertex(v)?.label.clone();
            match self.original_name(&label) {
                Some(original) => {
                    graph.set_label(v, original)?;
                    renamed += 1;
                }
                None => warn!("search for '{}' could not be converted to original name", label),
            }
        }
        Ok(renamed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::spec_loader::{ComponentAttributes, ComponentRecord};

    fn spec(names: &[&str]) -> ArchitectureSpec {
        ArchitectureSpec::from_records(
            names
                .iter()
                .map(|n| ComponentRecord::new(*n, ComponentAttributes::default())),
        )
    }

    #[test]
    fn test_positional_pairing() {
        let converter =
            NameConverter::from_specs(&spec(&["Bluetooth Stack", "Maps"]), &spec(&["bt&stack", "maps"])).unwrap();
        assert_eq!(converter.original_name("bt&stack"), Some("Bluetooth Stack"));
        assert_eq!(converter.search_name("Maps"), Some("maps"));
        assert_eq!(converter.original_name("Maps"), None);
        assert_eq!(converter.len(), 2);
    }

    #[test]
    fn test_length_mismatch() {
        let err = NameConverter::from_specs(&spec(&["a"]), &spec(&["a", "b"])).unwrap_err();
        assert!(matches!(err, ArchGraphError::Spec(_)));
    }

    #[test]
    fn test_rename_vertices() {
        let mut graph = Graph::from_parts(["bt&stack", "unknown"], &[]).unwrap();
        let converter = NameConverter::from_pairs([("Bluetooth Stack", "bt&stack")]);
        let renamed = converter
            .rename_vertices(&mut graph, &[VertexId(0), VertexId(1)])
            .unwrap();
        assert_eq!(renamed, 1);
        assert_eq!(graph.vertex(VertexId(0)).unwrap().label, "Bluetooth Stack");
        assert_eq!(graph.vertex(VertexId(1)).unwrap().label, "unknown");
    }
}
