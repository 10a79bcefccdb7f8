//! Node matcher: pattern and identifier resolution against vertex labels

mod collisions;
mod identifiers;
mod pattern;

pub use collisions::{collision_pairs, find_collisions};
pub use identifiers::{resolve_vertex_identifiers, IdentifierResolution};
pub use pattern::{
    find_matching_vertices, resolve_parent_groups, search_vertices, MatchPattern, PatternSyntax,
};
