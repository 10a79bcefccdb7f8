use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_yaml::{Mapping, Value};

use super::error::{ConfigError, ConfigResult};

/// Config file versions this build understands
pub const SUPPORTED_VERSIONS: &[u64] = &[1];

const MAX_CHILDREN_DEPTH: usize = 64;
const MAX_THREADS: usize = 1024;

/// What to do when a label token matches more than one vertex
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AmbiguityPolicy {
    /// Take the vertex with the lowest handle and warn
    #[default]
    FirstMatch,
    /// Treat the token as unresolved
    Reject,
}

/// Labels of the three top-level hierarchy vertices
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct UmbrellaLabels {
    pub context_groups: String,
    pub domains: String,
    pub abstraction_layers: String,
}

impl Default for UmbrellaLabels {
    fn default() -> Self {
        Self {
            context_groups: "CONTEXT_GROUPS".to_string(),
            domains: "DOMAINS".to_string(),
            abstraction_layers: "ABSTRACTION_LAYERS".to_string(),
        }
    }
}

/// Settings shared by all analyses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalysisConfig {
    /// Substrings marking a component name as "not implemented yet"
    pub no_match_markers: Vec<String>,

    /// Separator between AND-terms of a pattern
    pub and_separator: char,

    /// Separator between OR-groups of a pattern
    pub or_separator: char,

    pub ambiguity_policy: AmbiguityPolicy,

    /// Default depth of the children tree (0..=64)
    pub children_depth: usize,

    /// Number of hotspots to report; `None` means ⌈log2(n)⌉ + 1
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hotspot_count: Option<usize>,

    /// Stop enumerating circuits after this many
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cycles: Option<usize>,

    /// Validate parent groups on the rayon pool
    pub parallel_validation: bool,

    /// Worker threads for parallel validation; `None` sizes from the CPU count
    #[serde(skip_serializing_if = "Option::is_none")]
    pub threads: Option<usize>,

    /// Directory for exported artifacts
    pub output_dir: String,

    pub umbrella_labels: UmbrellaLabels,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            no_match_markers: vec!["kein Match".to_string(), "no Match".to_string()],
            and_separator: '&',
            or_separator: ';',
            ambiguity_policy: AmbiguityPolicy::FirstMatch,
            children_depth: 3,
            hotspot_count: None,
            max_cycles: None,
            parallel_validation: true,
            threads: None,
            output_dir: "out".to_string(),
            umbrella_labels: UmbrellaLabels::default(),
        }
    }
}

impl AnalysisConfig {
    // ═══════════════════════════════════════════════════════════════════════
    // Builder
    // ═══════════════════════════════════════════════════════════════════════

    pub fn children_depth(mut self, depth: usize) -> Self {
        self.children_depth = depth;
        self
    }

    pub fn hotspot_count(mut self, count: usize) -> Self {
        self.hotspot_count = Some(count);
        self
    }

    pub fn max_cycles(mut self, max: usize) -> Self {
        self.max_cycles = Some(max);
        self
    }

    pub fn ambiguity_policy(mut self, policy: AmbiguityPolicy) -> Self {
        self.ambiguity_policy = policy;
        self
    }

    pub fn parallel_validation(mut self, enabled: bool) -> Self {
        self.parallel_validation = enabled;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<String>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn no_match_markers<S: Into<String>>(mut self, markers: impl IntoIterator<Item = S>) -> Self {
        self.no_match_markers = markers.into_iter().map(Into::into).collect();
        self
    }

    // ═══════════════════════════════════════════════════════════════════════
    // Validation
    // ═══════════════════════════════════════════════════════════════════════

    pub fn validate(&self) -> ConfigResult<()> {
        if self.and_separator.is_whitespace() {
            return Err(ConfigError::validation("and_separator", "must not be whitespace"));
        }
        if self.or_separator.is_whitespace() {
            return Err(ConfigError::validation("or_separator", "must not be whitespace"));
        }
        if self.and_separator == self.or_separator {
            return Err(ConfigError::validation(
                "or_separator",
                format!("must differ from and_separator '{}'", self.and_separator),
            ));
        }
        if let Some(pos) = self.no_match_markers.iter().position(String::is_empty) {
            return Err(ConfigError::validation(
                format!("no_match_markers[{}]", pos),
                "an empty marker would skip every pattern",
            ));
        }
        if self.children_depth > MAX_CHILDREN_DEPTH {
            return Err(ConfigError::range_with_hint(
                "children_depth",
                self.children_depth,
                0,
                MAX_CHILDREN_DEPTH,
                "Deeper trees are unreadable; export the subgraph instead",
            ));
        }
        if let Some(threads) = self.threads {
            if threads == 0 || threads > MAX_THREADS {
                return Err(ConfigError::range_with_hint(
                    "threads",
                    threads,
                    1,
                    MAX_THREADS,
                    "Omit the field to size the pool from the CPU count",
                ));
            }
        }
        Ok(())
    }

    // ═══════════════════════════════════════════════════════════════════════
    // YAML I/O
    // ═══════════════════════════════════════════════════════════════════════

    /// Load and validate a YAML config file
    pub fn from_yaml(path: &Path) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let mut document: Mapping = serde_yaml::from_str(content)?;

        let version = match document.remove("version") {
            None => return Err(ConfigError::MissingVersion),
            Some(value) => value.as_u64().ok_or_else(|| {
                ConfigError::validation("version", "must be a positive integer")
            })?,
        };
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config: Self = serde_yaml::from_value(Value::Mapping(document))?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize with the version header first
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let mut document = Mapping::new();
        document.insert(Value::from("version"), Value::from(1u64));
        if let Value::Mapping(fields) = serde_yaml::to_value(self)? {
            document.extend(fields);
        }
        Ok(serde_yaml::to_string(&document)?)
    }
}
