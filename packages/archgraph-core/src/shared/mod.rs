//! Shared module - Graph model and ports
//!
//! Everything here is used by every feature: the arena graph, borrowed
//! views over it, and the two collaborator interfaces (store, renderer).

pub mod models;
pub mod ports;

pub use models::*;
pub use ports::*;
