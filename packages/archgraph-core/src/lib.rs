/*
 * ArchGraph Core - Architecture Dependency-Graph Analysis
 *
 * Feature-First Hexagonal Architecture:
 * - shared/      : Graph model (arena graph, masked views) and ports
 * - features/    : Vertical slices (subgraph -> partition -> overlap -> matcher
 *                  -> rewrite -> analysis -> spec_loader -> hierarchy -> report)
 * - config/      : AnalysisConfig (YAML v1)
 *
 * File formats and rendering live behind the GraphStore / Renderer ports.
 */

#![allow(clippy::module_inception)]
#![allow(clippy::new_without_default)]

use std::sync::Once;

use tracing::{info, warn};

// ═══════════════════════════════════════════════════════════════════════════
// Module Exports - Feature-First Architecture
// ═══════════════════════════════════════════════════════════════════════════

/// Graph model and ports
pub mod shared;

/// Analysis features
pub mod features;

/// Configuration system
pub mod config;

/// Error types
pub mod errors;

// ═══════════════════════════════════════════════════════════════════════════
// Re-exports for Public API
// ═══════════════════════════════════════════════════════════════════════════

pub use config::{AmbiguityPolicy, AnalysisConfig};
pub use errors::{ArchGraphError, Result};
pub use shared::models::{Edge, EdgeId, Graph, GraphAccess, GraphView, Vertex, VertexId};
pub use shared::ports::{GraphStore, RenderSelection, Renderer};

// ═══════════════════════════════════════════════════════════════════════════
// Rayon Thread Pool
// ═══════════════════════════════════════════════════════════════════════════

/// Initialize the global Rayon pool once.
///
/// `threads = None` uses 75% of the available cores. Later calls are no-ops;
/// a pool that was already built elsewhere is kept with a warning.
pub fn init_thread_pool(threads: Option<usize>) {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let num_cpus = num_cpus::get();
        let threads = threads.unwrap_or_else(|| std::cmp::max(1, (num_cpus * 3) / 4));

        match rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
        {
            Ok(()) => info!("Rayon pool: {} threads ({} cores)", threads, num_cpus),
            Err(e) => warn!("Rayon pool already initialised: {}", e),
        }
    });
}
