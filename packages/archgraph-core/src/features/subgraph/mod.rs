//! Subgraph collection and vertex inspection

mod collector;
mod inspect;

pub use collector::{collect_descendants, collect_reachable, collect_subgraph, list_shared_sub_vertices};
pub use inspect::{format_vertex, print_all_vertices, print_vertex, print_vertex_children};
