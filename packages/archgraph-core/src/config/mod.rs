//! Analysis configuration
//!
//! One flat [`AnalysisConfig`] covers the knobs the analyses expose: pattern
//! syntax and sentinels, the label ambiguity policy, output defaults and
//! parallelism. Files are YAML with a mandatory `version: 1` header.
//!
//! ```rust,ignore
//! use archgraph_core::config::AnalysisConfig;
//!
//! let config = AnalysisConfig::default().children_depth(5).hotspot_count(10);
//! let config = AnalysisConfig::from_yaml("archgraph.yaml".as_ref())?;
//! ```

pub mod analysis_config;
pub mod error;

pub use analysis_config::{AmbiguityPolicy, AnalysisConfig, UmbrellaLabels, SUPPORTED_VERSIONS};
pub use error::{ConfigError, ConfigResult};
