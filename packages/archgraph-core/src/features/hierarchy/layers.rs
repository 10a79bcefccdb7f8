//! Layer dependency export
//!
//! Every component's matched vertices are merged into one
//! `COMPONENT_GROUP_<name>` head, then the matched vertices are hidden.
//! What remains shows how components of one layer (context group,
//! abstraction layer or domain) and of each pair of layers depend on each
//! other. Each picture goes through the [`Renderer`] port.

use std::path::{Path, PathBuf};

use rustc_hash::FxHashMap;
use tracing::{info, warn};

use super::coherence::{component_vertices, distinct_out_neighbors, find_umbrella};
use crate::config::UmbrellaLabels;
use crate::errors::Result;
use crate::features::rewrite::{connections_view, merge_into_head};
use crate::shared::models::{Graph, GraphAccess, GraphView, VertexId};
use crate::shared::ports::{RenderSelection, Renderer};

pub const COMPONENT_GROUP_PREFIX: &str = "COMPONENT_GROUP_";

fn display_label<G: GraphAccess>(graph: &G, id: VertexId) -> Result<String> {
    let label = graph.label(id)?;
    Ok(label
        .strip_prefix(COMPONENT_GROUP_PREFIX)
        .unwrap_or(label)
        .to_string())
}

/// Selection with one cluster per `(label, members)` plus every vertex and
/// edge of `connections`
fn clustered_selection<G: GraphAccess>(
    graph: &G,
    name: String,
    clusters: &[(String, &[VertexId])],
    connections: &GraphView<'_>,
) -> Result<RenderSelection> {
    let mut selection = RenderSelection::new(name);
    for (label, members) in clusters {
        let mut keys = Vec::with_capacity(members.len());
        for &m in members.iter() {
            selection.add_vertex(m.to_string(), display_label(graph, m)?);
            keys.push(m.to_string());
        }
        selection.add_cluster(label.clone(), keys);
    }
    for v in connections.vertices() {
        selection.add_vertex(v.to_string(), display_label(connections, v)?);
    }
    for e in connections.edges() {
        selection.add_edge(e.source.to_string(), e.target.to_string());
    }
    Ok(selection)
}

/// Per-component pictures of the connections among its matched vertices
pub fn export_components<G: GraphAccess, R: Renderer + ?Sized>(
    graph: &G,
    components: &[(VertexId, Vec<VertexId>)],
    renderer: &R,
    dir: &Path,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::with_capacity(components.len());
    for (component, children) in components {
        let name = graph.label(*component)?.to_string();
        let view = connections_view(graph, children)?;
        let selection = clustered_selection(graph, name.clone(), &[(name, children.as_slice())], &view)?;
        written.push(renderer.render(&selection, dir)?);
    }
    Ok(written)
}

fn export_umbrella<R: Renderer + ?Sized>(
    filtered: &GraphView<'_>,
    umbrella_label: &str,
    heads: &FxHashMap<VertexId, VertexId>,
    renderer: &R,
    out_dir: &Path,
    stem: &str,
) -> Result<Vec<PathBuf>> {
    let Ok(umbrella) = find_umbrella(filtered, umbrella_label) else {
        warn!("No '{}' vertex; skipping {} export", umbrella_label, stem);
        return Ok(Vec::new());
    };

    let mut layers: Vec<(String, Vec<VertexId>)> = Vec::new();
    for layer in distinct_out_neighbors(filtered, umbrella) {
        let groups: Vec<VertexId> = distinct_out_neighbors(filtered, layer)
            .into_iter()
            .filter_map(|component| heads.get(&component).copied())
            .collect();
        layers.push((filtered.label(layer)?.to_string(), groups));
    }

    let mut written = Vec::new();
    let inner_dir = out_dir.join(format!("{}_inner", stem));
    for (name, groups) in &layers {
        let view = connections_view(filtered, groups)?;
        let selection = clustered_selection(filtered, name.clone(), &[(name.clone(), groups.as_slice())], &view)?;
        written.push(renderer.render(&selection, &inner_dir)?);
    }

    let outer_dir = out_dir.join(format!("{}_outer", stem));
    for i in 0..layers.len() {
        for j in (i + 1)..layers.len() {
            let (name_a, groups_a) = &layers[i];
            let (name_b, groups_b) = &layers[j];
            let all: Vec<VertexId> = groups_a.iter().chain(groups_b.iter()).copied().collect();
            let view = connections_view(filtered, &all)?;
            let selection = clustered_selection(
                filtered,
                format!("{}_-_{}", name_a, name_b),
                &[(name_a.clone(), groups_a.as_slice()), (name_b.clone(), groups_b.as_slice())],
                &view,
            )?;
            written.push(renderer.render(&selection, &outer_dir)?);
        }
    }
    Ok(written)
}

/// Render component, inner-layer and layer-pair pictures below `out_dir`.
///
/// `graph` must carry a hierarchy (see [`build_hierarchy`](super::build_hierarchy)).
/// It gains one `COMPONENT_GROUP_` head per component; nothing is removed.
pub fn export_layers<R: Renderer + ?Sized>(
    graph: &mut Graph,
    labels: &UmbrellaLabels,
    renderer: &R,
    out_dir: &Path,
) -> Result<Vec<PathBuf>> {
    let umbrella = find_umbrella(&*graph, &labels.context_groups)?;
    let components: Vec<(VertexId, Vec<VertexId>)> = component_vertices(&*graph, umbrella)?
        .into_iter()
        .map(|c| (c, distinct_out_neighbors(&*graph, c)))
        .collect();

    let mut written = export_components(&*graph, &components, renderer, &out_dir.join("components"))?;

    let mut heads: FxHashMap<VertexId, VertexId> = FxHashMap::default();
    for (component, children) in &components {
        let label = format!("{}{}", COMPONENT_GROUP_PREFIX, graph.label(*component)?);
        heads.insert(*component, merge_into_head(graph, label, children)?);
    }

    let mut filtered = GraphView::full(graph);
    for (_, children) in &components {
        filtered.hide_all(children.iter().copied());
    }

    for (label, stem) in [
        (&labels.context_groups, "context_groups"),
        (&labels.abstraction_layers, "abstraction_layers"),
        (&labels.domains, "domains"),
    ] {
        written.extend(export_umbrella(&filtered, label, &heads, renderer, out_dir, stem)?);
    }

    info!("Rendered {} layer pictures into {}", written.len(), out_dir.display());
    Ok(written)
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;
    use crate::features::fixtures;
    use crate::features::hierarchy::build_hierarchy;
    use crate::features::matcher::PatternSyntax;
    use crate::features::spec_loader::ArchitectureSpec;
    use pretty_assertions::assert_eq;

    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<(PathBuf, RenderSelection)>>,
    }

    impl Renderer for Recorder {
        fn render(&self, selection: &RenderSelection, dir: &Path) -> Result<PathBuf> {
            let path = dir.join(format!("{}.dot", selection.file_stem()));
            if let Ok(mut seen) = self.seen.lock() {
                seen.push((path.clone(), selection.clone()));
            }
            Ok(path)
        }
    }

    const SPEC: &str = r#"[
      {"v03": {"domain": "d", "contextGroup": "Audio / Video", "abstractionLayer": "L1"}},
      {"v06": {"domain": "d", "contextGroup": "Audio / Video", "abstractionLayer": "L2"}},
      {"v09": {"domain": "d", "contextGroup": "Net&IO", "abstractionLayer": "L2"}}
    ]"#;

    fn run() -> (Graph, Vec<PathBuf>, Recorder) {
        let spec = ArchitectureSpec::from_json_str(SPEC).unwrap();
        let labels = UmbrellaLabels::default();
        let mut graph = fixtures::twelve();
        build_hierarchy(&mut graph, &spec, &PatternSyntax::default(), &labels).unwrap();

        let recorder = Recorder::default();
        let written = export_layers(&mut graph, &labels, &recorder, Path::new("out")).unwrap();
        (graph, written, recorder)
    }

    #[test]
    fn test_file_layout() {
        let (_, written, _) = run();
        let paths: Vec<String> = written.iter().map(|p| p.display().to_string()).collect();
        assert_eq!(
            paths,
            vec![
                "out/components/v03.dot",
                "out/components/v06.dot",
                "out/components/v09.dot",
                "out/context_groups_inner/Audio___Video.dot",
                "out/context_groups_inner/Net_IO.dot",
                "out/context_groups_outer/Audio___Video_-_Net_IO.dot",
                "out/abstraction_layers_inner/L1.dot",
                "out/abstraction_layers_inner/L2.dot",
                "out/abstraction_layers_outer/L1_-_L2.dot",
                "out/domains_inner/d.dot",
            ]
        );
    }

    #[test]
    fn test_heads_are_added_and_prefix_is_stripped() {
        let (graph, _, recorder) = run();
        assert!(graph.find_by_label("COMPONENT_GROUP_v03").is_some());

        let seen = recorder.seen.lock().unwrap();
        let (_, inner) = seen
            .iter()
            .find(|(p, _)| p.ends_with("context_groups_inner/Audio___Video.dot"))
            .unwrap();
        let labels: Vec<&str> = inner.vertices.iter().map(|v| v.label.as_str()).collect();
        assert_eq!(labels, vec!["v03", "v06"]);
        assert_eq!(inner.clusters.len(), 1);
        // the v03 group depends on the v06 group through 3 -> 6
        assert_eq!(inner.edges.len(), 1);
    }
}
