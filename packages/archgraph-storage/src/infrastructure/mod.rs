//! Infrastructure layer: file adapters for the core ports
//!
//! - `FileGraphStore`: `GraphStore` over `.dot` / `.json` files
//! - `DotRenderer`: `Renderer` writing DOT text with clusters

pub mod dot;
mod file_store;
mod renderer;

pub use file_store::FileGraphStore;
pub use renderer::{render_dot, DotRenderer};
