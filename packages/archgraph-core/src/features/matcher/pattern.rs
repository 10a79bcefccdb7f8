//! Textual node matching
//!
//! A pattern is a list of OR-groups separated by `;`, each a list of AND-terms
//! separated by `&`. A label matches a group when it contains every term of
//! the group (case-sensitive substring); the pattern result is the union of
//! all group results in first-appearance order.
//!
//! Patterns containing a "no match" marker describe components without an
//! implementation and are never matched.

use tracing::{debug, warn};

use crate::config::AnalysisConfig;
use crate::shared::models::{GraphAccess, ParentGroup, VertexId};

/// Separators and sentinel markers of the pattern language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PatternSyntax {
    pub and_separator: char,
    pub or_separator: char,
    pub no_match_markers: Vec<String>,
}

impl Default for PatternSyntax {
    fn default() -> Self {
        Self::from(&AnalysisConfig::default())
    }
}

impl From<&AnalysisConfig> for PatternSyntax {
    fn from(config: &AnalysisConfig) -> Self {
        Self {
            and_separator: config.and_separator,
            or_separator: config.or_separator,
            no_match_markers: config.no_match_markers.clone(),
        }
    }
}

/// A parsed pattern
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchPattern {
    source: String,
    groups: Vec<Vec<String>>,
    skipped: bool,
}

impl MatchPattern {
    /// Parse `pattern`; empty terms and groups without terms are dropped.
    ///
    /// A trailing separator therefore adds nothing: `"App;"` resolves like
    /// `"App"`, never as an extra group matching every vertex.
    pub fn parse(pattern: &str, syntax: &PatternSyntax) -> Self {
        let skipped = syntax
            .no_match_markers
            .iter()
            .any(|marker| pattern.contains(marker.as_str()));

        let groups = if skipped {
            Vec::new()
        } else {
            pattern
                .split(syntax.or_separator)
                .map(|group| {
                    group
                        .split(syntax.and_separator)
                        .filter(|term| !term.is_empty())
                        .map(str::to_string)
                        .collect::<Vec<_>>()
                })
                .filter(|terms| !terms.is_empty())
                .collect()
        };

        Self {
            source: pattern.to_string(),
            groups,
            skipped,
        }
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// AND-terms per OR-group
    pub fn groups(&self) -> &[Vec<String>] {
        &self.groups
    }

    /// Whether the pattern carries a "no match" marker
    pub fn is_skipped(&self) -> bool {
        self.skipped
    }

    pub fn matches_label(&self, label: &str) -> bool {
        self.groups
            .iter()
            .any(|terms| terms.iter().all(|t| label.contains(t.as_str())))
    }

    /// Matching vertices: group by group, each group in handle order, no repeats
    pub fn resolve<G: GraphAccess>(&self, graph: &G) -> Vec<VertexId> {
        let mut found: Vec<VertexId> = Vec::new();
        let mut seen = vec![false; graph.vertex_bound()];

        for terms in &self.groups {
            // seed with the first term, then intersect with the rest
            let mut working: Vec<VertexId> = search_vertices(graph, &terms[0]);
            for term in &terms[1..] {
                working.retain(|&v| graph.label(v).map_or(false, |l| l.contains(term.as_str())));
            }
            for v in working {
                if !seen[v.index()] {
                    seen[v.index()] = true;
                    found.push(v);
                }
            }
        }
        found
    }
}

/// Vertices whose label contains `needle`, ascending handles
pub fn search_vertices<G: GraphAccess>(graph: &G, needle: &str) -> Vec<VertexId> {
    graph
        .vertices()
        .filter(|&v| graph.label(v).map_or(false, |l| l.contains(needle)))
        .collect()
}

/// Resolve one pattern; `None` when the pattern is skipped
pub fn find_matching_vertices<G: GraphAccess>(
    graph: &G,
    pattern: &str,
    syntax: &PatternSyntax,
) -> Option<Vec<VertexId>> {
    let parsed = MatchPattern::parse(pattern, syntax);
    if parsed.is_skipped() {
        debug!("Skipping '{}' (no-match marker)", pattern);
        return None;
    }
    Some(parsed.resolve(graph))
}

/// One parent group per non-skipped name, in `names` order.
///
/// Names that match nothing produce an empty group and a warning.
pub fn resolve_parent_groups<G: GraphAccess, S: AsRef<str>>(
    graph: &G,
    names: &[S],
    syntax: &PatternSyntax,
) -> Vec<ParentGroup> {
    let mut groups = Vec::with_capacity(names.len());
    for name in names {
        let name = name.as_ref();
        let Some(members) = find_matching_vertices(graph, name, syntax) else {
            continue;
        };
        if members.is_empty() {
            warn!("There were no results for the search '{}'", name);
        }
        groups.push(ParentGroup::new(name, members));
    }
    groups
}
