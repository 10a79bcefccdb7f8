//! Read-only analyses: hotspots, circuits, dependency counts

mod circuits;
mod dependency;
mod hotspots;
mod scc;

pub use circuits::{find_circuits, write_cycle_report, CycleReport};
pub use dependency::{dependency_counts, write_dependency_table, DependencyCount};
pub use hotspots::{default_hotspot_count, find_hotspots};
pub use scc::{count_cyclic_components, is_dag};
