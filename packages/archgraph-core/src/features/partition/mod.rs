//! Partitioning: independent sets, subgraph roots, connected components

mod components;
mod independent_set;
mod roots;

pub use components::{connected_components, count_components, largest_component, ConnectedComponents};
pub use independent_set::max_independent_vertex_set;
pub use roots::{classify_related, find_subgraph_roots, independent_subgraph_roots};
