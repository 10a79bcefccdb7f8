//! Feature modules
//!
//! Each module is a vertical slice over the graph model:
//!
//! - `subgraph`    : cycle-safe descendant collection, vertex inspection
//! - `partition`   : independent sets, subgraph roots, connected components
//! - `overlap`     : direct/indirect subgraph overlap, parent validation
//! - `matcher`     : pattern matching, identifier resolution, collisions
//! - `rewrite`     : group, add-parent, exclude, connection views
//! - `analysis`    : hotspots, circuits, dependency counts
//! - `spec_loader` : architecture JSON flattening and queries
//! - `hierarchy`   : parent hierarchy, coherence, layer exports
//! - `report`      : CSV matrices and validation text

pub mod analysis;
pub mod hierarchy;
pub mod matcher;
pub mod overlap;
pub mod partition;
pub mod report;
pub mod rewrite;
pub mod spec_loader;
pub mod subgraph;

#[cfg(test)]
pub(crate) mod fixtures;
