//! Ports to external collaborators
//!
//! The analysis core never touches files directly. Loading and persisting
//! graphs goes through [`GraphStore`]; producing pictures or text exports of
//! a vertex selection goes through [`Renderer`]. Adapters live in
//! `archgraph-storage`.

mod graph_store;
mod renderer;

pub use graph_store::GraphStore;
pub use renderer::{sanitize_file_name, RenderCluster, RenderSelection, RenderVertex, Renderer};
