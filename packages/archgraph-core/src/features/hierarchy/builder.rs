//! Parent creation and the architecture hierarchy
//!
//! ```text
//! CONTEXT_GROUPS ─┬─ <context group> ─┬─ <component> ─┬─ <matched vertex>
//! DOMAINS        ─┤   <domain>        │                └─ ...
//! ABSTRACTION_.. ─┘   <layer>         └─ ...
//! ```
//!
//! Every level is added with [`add_parent`], so the original dependency
//! edges are never touched.

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::{debug, info};

use crate::config::UmbrellaLabels;
use crate::errors::Result;
use crate::features::matcher::{resolve_parent_groups, PatternSyntax};
use crate::features::rewrite::add_parent;
use crate::features::spec_loader::{ArchitectureSpec, Category};
use crate::shared::models::{Graph, ParentGroup, VertexId};

/// Parent vertex created for one specified component
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentNode {
    pub name: String,
    pub vertex: VertexId,
    pub members: Vec<VertexId>,
}

/// One context group, domain or abstraction layer vertex
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryNode {
    pub name: String,
    pub vertex: VertexId,
    pub components: Vec<VertexId>,
}

/// Umbrella vertex of one category with its category vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryUmbrella {
    pub category: Category,
    pub vertex: VertexId,
    pub nodes: Vec<CategoryNode>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Hierarchy {
    pub components: Vec<ComponentNode>,
    pub umbrellas: Vec<CategoryUmbrella>,
}

impl Hierarchy {
    pub fn umbrella(&self, category: Category) -> Option<&CategoryUmbrella> {
        self.umbrellas.iter().find(|u| u.category == category)
    }
}

pub fn umbrella_label(labels: &UmbrellaLabels, category: Category) -> &str {
    match category {
        Category::ContextGroup => &labels.context_groups,
        Category::Domain => &labels.domains,
        Category::AbstractionLayer => &labels.abstraction_layers,
    }
}

/// Resolve every component of `spec` against `graph`.
///
/// Skipped (no-match) components are left out; empty matches are kept.
pub fn resolve_components(graph: &Graph, spec: &ArchitectureSpec, syntax: &PatternSyntax) -> Vec<ParentGroup> {
    resolve_parent_groups(graph, &spec.all_components(), syntax)
}

/// Add one parent vertex per resolved component
pub fn create_parents(
    graph: &mut Graph,
    spec: &ArchitectureSpec,
    syntax: &PatternSyntax,
) -> Result<Vec<ComponentNode>> {
    let groups = resolve_components(graph, spec, syntax);
    let mut components = Vec::with_capacity(groups.len());
    for group in groups {
        let vertex = add_parent(graph, group.name.as_str(), &group.members)?;
        components.push(ComponentNode {
            name: group.name,
            vertex,
            members: group.members,
        });
    }
    info!("Created {} component parents", components.len());
    Ok(components)
}

/// Component parents plus category vertices and the three umbrellas.
///
/// Category vertices without any resolved component are not created.
pub fn build_hierarchy(
    graph: &mut Graph,
    spec: &ArchitectureSpec,
    syntax: &PatternSyntax,
    labels: &UmbrellaLabels,
) -> Result<Hierarchy> {
    let components = create_parents(graph, spec, syntax)?;
    let by_name: FxHashMap<&str, VertexId> = components
        .iter()
        .map(|c| (c.name.as_str(), c.vertex))
        .collect();

    let mut umbrellas = Vec::with_capacity(Category::ALL.len());
    for category in Category::ALL {
        let mut nodes = Vec::new();
        for value in spec.category_values(category) {
            let members: Vec<VertexId> = spec
                .search_by(category, value)
                .into_iter()
                .filter_map(|name| by_name.get(name).copied())
                .collect();
            if members.is_empty() {
                debug!("No resolved component for {} '{}'", category, value);
                continue;
            }
            let vertex = add_parent(graph, value, &members)?;
            nodes.push(CategoryNode {
                name: value.to_string(),
                vertex,
                components: members,
            });
        }

        let heads: Vec<VertexId> = nodes.iter().map(|n| n.vertex).collect();
        let vertex = add_parent(graph, umbrella_label(labels, category), &heads)?;
        umbrellas.push(CategoryUmbrella {
            category,
            vertex,
            nodes,
        });
    }

    Ok(Hierarchy {
        components,
        umbrellas,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::fixtures;
    use crate::shared::models::GraphAccess;
    use pretty_assertions::assert_eq;

    const SPEC: &str = r#"[
      {"v01": {"domain": "d1", "contextGroup": "C1", "abstractionLayer": "L1"}},
      {"v03;v04": {"domain": "d1", "contextGroup": "C2", "abstractionLayer": "L1"}},
      {"v10 (no Match)": {"domain": "d2", "contextGroup": "C2", "abstractionLayer": "L2"}}
    ]"#;

    fn spec() -> ArchitectureSpec {
        ArchitectureSpec::from_json_str(SPEC).unwrap()
    }

    #[test]
    fn test_create_parents() {
        let mut graph = fixtures::twelve();
        let components = create_parents(&mut graph, &spec(), &PatternSyntax::default()).unwrap();

        assert_eq!(components.len(), 2);
        assert_eq!(components[1].members, vec![VertexId(3), VertexId(4)]);
        assert_eq!(graph.vertex_count(), 14);
        let out: Vec<_> = graph.out_neighbors(components[1].vertex).collect();
        assert_eq!(out, vec![VertexId(3), VertexId(4)]);
    }

    #[test]
    fn test_build_hierarchy() {
        let mut graph = fixtures::twelve();
        let labels = UmbrellaLabels::default();
        let hierarchy = build_hierarchy(&mut graph, &spec(), &PatternSyntax::default(), &labels).unwrap();

        let contexts = hierarchy.umbrella(Category::ContextGroup).unwrap();
        let names: Vec<&str> = contexts.nodes.iter().map(|n| n.name.as_str()).collect();
        assert_eq!(names, vec!["C1", "C2"]);
        assert_eq!(graph.label(contexts.vertex).unwrap(), "CONTEXT_GROUPS");

        // L2 and d2 only hold the skipped component
        let layers = hierarchy.umbrella(Category::AbstractionLayer).unwrap();
        assert_eq!(layers.nodes.len(), 1);
        assert_eq!(layers.nodes[0].components.len(), 2);
        assert_eq!(hierarchy.umbrella(Category::Domain).unwrap().nodes.len(), 1);

        // 12 + 2 components + (2 + 1 + 1) categories + 3 umbrellas
        assert_eq!(graph.vertex_count(), 21);
    }
}
