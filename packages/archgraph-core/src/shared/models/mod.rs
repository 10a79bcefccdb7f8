//! Graph model types

mod access;
mod graph;
mod ids;
mod parent_group;
mod view;

pub use access::GraphAccess;
pub use graph::{Direction, Edge, Graph, Vertex};
pub use ids::{EdgeId, VertexId};
pub use parent_group::ParentGroup;
pub use view::GraphView;
