//! ArchGraph Storage - file adapters for the core ports
//!
//! ## Formats
//!
//! - **DOT** (`.dot`, `.gv`): the subset emitted by build-system dependency
//!   dumps. Node id = vertex label.
//! - **JSON** (`.json`): `{"vertices": [labels], "edges": [[s, t], ...]}`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use archgraph_core::GraphStore;
//! use archgraph_storage::FileGraphStore;
//!
//! let store = FileGraphStore::new();
//! let graph = store.load(Path::new("deps.dot"))?;
//! store.save(&graph, Path::new("out/deps.json"))?;
//! ```

pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::{ErrorKind, Result, StorageError};

pub use domain::{GraphDocument, GraphFormat};
pub use infrastructure::{render_dot, DotRenderer, FileGraphStore};
