//! Architecture hierarchy: parent creation, coherence, layer exports

mod builder;
mod coherence;
mod layers;

pub use builder::{
    build_hierarchy, create_parents, resolve_components, umbrella_label, CategoryNode,
    CategoryUmbrella, ComponentNode, Hierarchy,
};
pub use coherence::{
    coherence_report, component_vertices, find_umbrella, write_coherence_report, CoherenceEntry,
    CoherenceReport,
};
pub use layers::{export_components, export_layers, COMPONENT_GROUP_PREFIX};
