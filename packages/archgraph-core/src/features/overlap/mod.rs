//! Subgraph overlap and parent connectivity validation

mod direct;
mod islands;
mod validator;

pub use direct::shared_subgraphs_direct;
pub use islands::{check_nodes_connected, close_islands, shared_subgraphs_indirect, Island};
pub use validator::{validate_parents, ParentFinding, ValidationReport};
