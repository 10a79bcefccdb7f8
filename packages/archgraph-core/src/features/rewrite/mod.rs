//! Graph rewriting: grouping, parent insertion and exclusion views

mod connections;
mod exclude;
mod group;

pub use connections::connections_view;
pub use exclude::{exclude_nodes, exclude_subgraph, exclude_subgraphs};
pub use group::{add_parent, group, merge_into_head};
